//! Text Blob CLI
//!
//! Usage:
//!   text-blob [OPTIONS] [FILE]
//!
//! Options:
//!   -c, --config <FILE>      TOML file with [blob] and [svg] tables
//!   -w, --max-width <PX>     Wrap width for the input text
//!   --widths <LIST>          Comma-separated line widths instead of text
//!   -p, --path-only          Print only the path data
//!   -v, --verbose            Log pipeline details to stderr
//!   -h, --help               Print help

use std::fs;
use std::io::{self, IsTerminal, Read};
use std::path::PathBuf;
use std::process;

use clap::Parser;
use tracing_subscriber::EnvFilter;

use text_blob::{
    generate, lines_from_widths, render_svg, render_svg_with_lines, wrap_text, Align, ConfigFile,
    FixedAdvance, OutlineMode,
};

#[derive(Parser)]
#[command(name = "text-blob")]
#[command(version = env!("CARGO_PKG_VERSION"))]
#[command(about = "Smooth blob outlines that hug wrapped text")]
struct Cli {
    /// Input text file (reads from stdin if not provided)
    input: Option<PathBuf>,

    /// TOML configuration file
    #[arg(short, long)]
    config: Option<PathBuf>,

    /// Wrap width for the input text, in px
    #[arg(short = 'w', long, default_value_t = 320.0)]
    max_width: f64,

    /// Advance per character used to measure text, in px
    #[arg(long, default_value_t = 16.0)]
    advance: f64,

    /// Comma-separated line widths; skips reading and wrapping text
    #[arg(long, value_delimiter = ',')]
    widths: Option<Vec<f64>>,

    /// Line height, in px
    #[arg(long)]
    line_height: Option<f64>,

    /// Padding around each line, in px
    #[arg(short, long)]
    spread: Option<f64>,

    /// Corner roundness between 0 and 1
    #[arg(short, long)]
    roundness: Option<f64>,

    /// Line alignment: left, center or right
    #[arg(short, long)]
    align: Option<Align>,

    /// Draw an independent rounded rectangle per line
    #[arg(long)]
    per_line: bool,

    /// Print only the path data instead of an SVG document
    #[arg(short, long)]
    path_only: bool,

    /// Log pipeline details to stderr
    #[arg(short, long)]
    verbose: bool,
}

fn main() {
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    let config = match &cli.config {
        Some(path) => match ConfigFile::from_file(path) {
            Ok(c) => c,
            Err(e) => {
                eprintln!("Error loading config '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => ConfigFile::default(),
    };

    let mut options = config.blob;
    if let Some(v) = cli.line_height {
        options.line_height = v;
    }
    if let Some(v) = cli.spread {
        options.spread = v;
    }
    if let Some(v) = cli.roundness {
        options.roundness = v;
    }
    if let Some(v) = cli.align {
        options.align = v;
    }
    if cli.per_line {
        options.mode = OutlineMode::PerLine;
    }

    let lines = match &cli.widths {
        Some(widths) => lines_from_widths(widths),
        None => {
            if cli.input.is_none() && io::stdin().is_terminal() {
                eprintln!("No input: pass a FILE, pipe text on stdin, or use --widths");
                process::exit(2);
            }
            let source = read_source(cli.input.as_ref());
            wrap_text(&source, cli.max_width, &FixedAdvance::new(cli.advance))
        }
    };
    tracing::info!(lines = lines.len(), "measured input");

    let blob = generate(&lines, &options);
    if blob.fallback {
        tracing::warn!("outline fell back to the bounding rectangle");
    }

    if cli.path_only {
        println!("{}", blob.d);
    } else if cli.widths.is_some() {
        println!("{}", render_svg(&blob, &config.svg));
    } else {
        println!(
            "{}",
            render_svg_with_lines(&blob, &lines, &options, &config.svg)
        );
    }
}

fn init_tracing(verbose: bool) {
    let default = if verbose { "text_blob=debug" } else { "warn" };
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();
}

fn read_source(input: Option<&PathBuf>) -> String {
    match input {
        Some(path) => match fs::read_to_string(path) {
            Ok(content) => content,
            Err(e) => {
                eprintln!("Error reading file '{}': {}", path.display(), e);
                process::exit(1);
            }
        },
        None => {
            let mut buffer = String::new();
            match io::stdin().read_to_string(&mut buffer) {
                Ok(_) => buffer,
                Err(e) => {
                    eprintln!("Error reading from stdin: {}", e);
                    process::exit(1);
                }
            }
        }
    }
}
