use std::fmt;

/// Per-slot outcome of a quiz submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AnswerCheck {
    /// One flag per expected answer slot, in slot order.
    pub results: Vec<bool>,
    pub correct: usize,
    pub total: usize,
}

impl AnswerCheck {
    /// Grade a quiz from its per-slot results.
    pub fn from_results(results: Vec<bool>) -> Self {
        let correct = results.iter().filter(|ok| **ok).count();
        let total = results.len();
        Self {
            results,
            correct,
            total,
        }
    }

    /// Share of correct answers, rounded half up; an empty quiz counts as 100%.
    pub fn percentage(&self) -> u32 {
        if self.total == 0 {
            return 100;
        }
        (self.correct as f64 / self.total as f64 * 100.0).round() as u32
    }

    /// Whether every slot was right.
    pub fn is_perfect(&self) -> bool {
        self.correct == self.total
    }

    /// Verdict for the score percentage.
    pub fn verdict(&self) -> Verdict {
        if self.is_perfect() {
            Verdict::Perfect
        } else if self.correct > 0 {
            Verdict::GoodEffort
        } else {
            Verdict::KeepTrying
        }
    }

    /// Banner text such as `Good effort! 2/3 (67%)`.
    pub fn summary(&self) -> String {
        format!(
            "{} {}/{} ({}%)",
            self.verdict(),
            self.correct,
            self.total,
            self.percentage()
        )
    }
}

/// Feedback band for a graded quiz.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Verdict {
    Perfect,
    GoodEffort,
    KeepTrying,
}

impl fmt::Display for Verdict {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Verdict::Perfect => "Perfect!",
            Verdict::GoodEffort => "Good effort!",
            Verdict::KeepTrying => "Keep trying!",
        })
    }
}

/// Running score across player quizzes: perfect quizzes over quizzes taken.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct Tally {
    pub correct: u32,
    pub total: u32,
}

impl Tally {
    /// Count a graded quiz; only perfect ones add to `correct`.
    pub fn record(&mut self, check: &AnswerCheck) {
        self.total += 1;
        if check.is_perfect() {
            self.correct += 1;
        }
    }
}

impl fmt::Display for Tally {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Score: {}/{}", self.correct, self.total)
    }
}
