//! Print the OpenAPI document of the player API, or write it to a file.

use std::{fs, path::PathBuf};

use anyhow::Context;
use clap::Parser;
use hoop_story_back::services::documentation::ApiDoc;
use utoipa::OpenApi;

#[derive(Debug, Parser)]
#[command(about = "Generate the OpenAPI document of the player API")]
struct Args {
    /// Write the document here instead of stdout.
    #[arg(short, long)]
    output: Option<PathBuf>,
}

fn main() -> anyhow::Result<()> {
    let args = Args::parse();
    let doc = ApiDoc::openapi()
        .to_pretty_json()
        .context("serializing OpenAPI document")?;

    match args.output {
        Some(path) => fs::write(&path, doc)
            .with_context(|| format!("writing {}", path.display()))?,
        None => println!("{doc}"),
    }
    Ok(())
}
