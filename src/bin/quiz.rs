//! Interactive terminal quiz over the player catalog served by the API.

use std::io::{self, BufRead, Write};

use anyhow::Context;
use clap::Parser;
use hoop_story_back::{
    client::ApiClient,
    ui::{Command, CommandError, Flow, HELP, QuizMode, TerminalView, UiController},
};
use tracing::warn;
use tracing_subscriber::EnvFilter;

#[derive(Parser)]
#[command(about = "Quiz yourself on players' teams from the terminal")]
struct Args {
    /// Base URL of the player API.
    #[arg(long, default_value = "http://localhost:3000")]
    server: String,
    /// Start in `player` or `team` mode.
    #[arg(long, default_value_t = QuizMode::Player)]
    mode: QuizMode,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .with_writer(io::stderr)
        .init();

    let args = Args::parse();
    let client = ApiClient::new(&args.server)?;
    let catalog = client
        .fetch_catalog()
        .await
        .with_context(|| format!("loading players from {}", client.base_url()))?;

    let mut controller = UiController::new(catalog, TerminalView::new(io::stdout()));
    controller.initialize();
    if args.mode != QuizMode::Player {
        controller.set_mode(args.mode);
    }
    controller.view_mut().message(HELP);

    let mut rng = rand::rng();
    let stdin = io::stdin();
    loop {
        print!("> ");
        if let Err(err) = io::stdout().flush() {
            warn!(error = %err, "failed to flush prompt");
        }

        let mut line = String::new();
        if stdin.lock().read_line(&mut line).context("reading command")? == 0 {
            break;
        }

        let command = match Command::parse(&line) {
            Ok(command) => command,
            Err(CommandError::Empty) => continue,
            Err(err) => {
                controller.view_mut().message(&err.to_string());
                continue;
            }
        };

        match command.dispatch(&mut controller, &mut rng) {
            Ok(Flow::Continue) => {}
            Ok(Flow::Help) => controller.view_mut().message(HELP),
            Ok(Flow::Quit) => break,
            Err(err) => controller.view_mut().message(&err.to_string()),
        }
    }

    Ok(())
}
