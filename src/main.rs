use std::fs;
use std::path::PathBuf;

use clap::Parser;
use log::{LevelFilter, info};

use md2html::Config;

#[derive(Parser)]
#[command(name = "md2html")]
#[command(about = "Convert Markdown files to HTML")]
struct Cli {
    /// Input Markdown file
    input: PathBuf,

    /// Output HTML file (defaults to input name with the configured extension)
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Config file overriding the built-in defaults
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Log every block as it is classified
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();

    let level = if cli.verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Warn
    };
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    let config = match &cli.config {
        Some(path) => match Config::load(path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("Error: {}", e);
                std::process::exit(1);
            }
        },
        None => Config::compiled_default(),
    };

    // Read input file
    let markdown = match fs::read_to_string(&cli.input) {
        Ok(content) => content,
        Err(e) => {
            eprintln!("Error reading {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let html = match md2html::render_document_with_config(&markdown, &config) {
        Ok(html) => html,
        Err(e) => {
            eprintln!("Error converting {}: {}", cli.input.display(), e);
            std::process::exit(1);
        }
    };

    let output = cli
        .output
        .unwrap_or_else(|| cli.input.with_extension(&config.output.extension));

    if let Err(e) = fs::write(&output, html) {
        eprintln!("Error writing {}: {}", output.display(), e);
        std::process::exit(1);
    }

    info!("wrote {}", output.display());
    println!("Created {}", output.display());
}
