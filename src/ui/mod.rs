//! Quiz front-end: an explicit session driven by [`UiController`] and rendered through a [`ViewPort`].

pub mod command;
pub mod controller;
pub mod session;
pub mod terminal;
pub mod view;

pub use command::{Command, CommandError, Flow, HELP};
pub use controller::{Submission, UiController, UiError};
pub use session::{QuizMode, Screen, Session};
pub use terminal::TerminalView;
pub use view::ViewPort;
