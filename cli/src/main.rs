//! linkpage CLI - markdown link list to static HTML page converter

use std::path::PathBuf;
use std::process;

use clap::Parser;
use colored::Colorize;

use linkpage::{convert_file_with_options, RenderOptions, StylePreset};

#[derive(Parser)]
#[command(name = "linkpage")]
#[command(version)]
#[command(about = "Convert a markdown link list into a static HTML page", long_about = None)]
struct Cli {
    /// Input link list (markdown)
    #[arg(value_name = "FILE", default_value = "links.md")]
    input: PathBuf,

    /// Output HTML file
    #[arg(value_name = "OUTPUT", default_value = "index.html")]
    output: PathBuf,

    /// Page title
    #[arg(long)]
    title: Option<String>,

    /// External stylesheet URL
    #[arg(long)]
    stylesheet: Option<String>,

    /// Emit bare tags without CSS classes
    #[arg(long)]
    plain: bool,
}

fn main() {
    env_logger::init();

    let cli = Cli::parse();

    let mut options = RenderOptions::new();
    if let Some(title) = cli.title {
        options = options.with_title(title);
    }
    if let Some(url) = cli.stylesheet {
        options = options.with_stylesheet(url);
    }
    if cli.plain {
        options = options.with_style(StylePreset::Plain);
    }

    log::debug!("converting {} -> {}", cli.input.display(), cli.output.display());

    if let Err(e) = convert_file_with_options(&cli.input, &cli.output, &options) {
        eprintln!("{}: {}", "Error".red().bold(), e);
        process::exit(1);
    }

    println!("{} {}", "Wrote".green().bold(), cli.output.display());
}
