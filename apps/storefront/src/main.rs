//! # Storefront Shell Entry Point
//!
//! Drives a storefront session from stdin, one command per line, and
//! prints one JSON object per command.
//!
//! ## Usage
//! ```bash
//! printf 'add gd46g23h\nadd gd46g23h\ncart\nresize 700\nnext\nquit\n' \
//!     | cargo run -p storefront -- --width 1280
//! ```
//!
//! ## Startup Sequence
//! 1. Parse arguments
//! 2. Initialize tracing (stderr)
//! 3. Load configuration (file + environment)
//! 4. Start the session and mount the home page
//! 5. Read commands until `quit` or end of input
//! 6. Print the session summary

use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use clap::Parser;
use tracing::{error, info};

use storefront_lib::shell::{ShellCommand, ShellOutput};
use storefront_lib::state::ConfigState;
use storefront_lib::{init_tracing, Storefront};

#[derive(Debug, Parser)]
#[command(name = "storefront", about = "Drive a storefront session from stdin")]
struct Args {
    /// Path to storefront.toml (defaults to the platform config dir)
    #[arg(long, env = "STOREFRONT_CONFIG")]
    config: Option<PathBuf>,

    /// Initial viewport width in pixels
    #[arg(long)]
    width: Option<u32>,
}

fn main() -> ExitCode {
    let args = Args::parse();
    init_tracing();

    let mut config = match ConfigState::load(args.config) {
        Ok(config) => config,
        Err(e) => {
            error!("Failed to load configuration: {}", e);
            return ExitCode::FAILURE;
        }
    };
    if let Some(width) = args.width {
        config.initial_viewport_width = width;
    }

    info!(store = %config.store_name, currency = %config.currency_code, "Starting storefront shell");

    let mut storefront = Storefront::start(config);
    if let Err(e) = run_shell(&mut storefront) {
        error!("Shell I/O failed: {}", e);
        return ExitCode::FAILURE;
    }

    let summary = storefront.shutdown();
    match serde_json::to_string(&summary) {
        Ok(json) => println!("{}", json),
        Err(e) => error!("Failed to serialize session summary: {}", e),
    }
    ExitCode::SUCCESS
}

fn run_shell(storefront: &mut Storefront) -> io::Result<()> {
    let stdin = io::stdin();
    let mut stdout = io::stdout().lock();

    for line in stdin.lock().lines() {
        let line = line?;
        let line = line.trim();
        if line.is_empty() || line.starts_with('#') {
            continue;
        }

        let result = line.parse::<ShellCommand>();
        if result == Ok(ShellCommand::Quit) {
            break;
        }

        let response = result.and_then(|command| storefront.execute(command));
        let output = ShellOutput::from_result(response, storefront.take_toast());
        let json = serde_json::to_string(&output).map_err(io::Error::other)?;
        writeln!(stdout, "{}", json)?;
    }

    stdout.flush()
}
