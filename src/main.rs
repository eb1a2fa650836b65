use clap::Parser;
use explainer::api::Language;
use explainer::core::config::{self, CliOverrides};
use explainer::tui;
use simplelog::{ConfigBuilder, LevelFilter, WriteLogger};
use std::fs::File;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "explainer", about = "Explain code snippets with a GenAI backend")]
struct Args {
    /// Base URL of the explanation service
    #[arg(long)]
    base_url: Option<String>,

    /// Initial language: python, javascript or java
    #[arg(short, long, value_parser = parse_language)]
    language: Option<Language>,

    /// Preload the code editor with the contents of this file
    #[arg(short, long)]
    file: Option<PathBuf>,
}

fn parse_language(value: &str) -> Result<Language, String> {
    Language::from_value(value)
        .ok_or_else(|| format!("unsupported language '{value}' (use python, javascript or java)"))
}

#[tokio::main]
async fn main() -> std::io::Result<()> {
    let args = Args::parse();
    dotenv::dotenv().ok();

    // Initialize file logger - writes to explainer.log in current directory
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create("explainer.log") {
        let _ = WriteLogger::init(LevelFilter::Debug, log_config, log_file);
    }

    let file_config = config::load_config().unwrap_or_else(|e| {
        log::warn!("{e}; falling back to defaults");
        Default::default()
    });
    let resolved = config::resolve(
        &file_config,
        &CliOverrides {
            base_url: args.base_url,
            language: args.language,
        },
    );

    let initial_code = match &args.file {
        Some(path) => std::fs::read_to_string(path)?,
        None => String::new(),
    };

    log::info!(
        "Explainer starting up: backend={}, language={}",
        resolved.base_url,
        resolved.language.value()
    );

    tui::run(resolved, initial_code)
}
