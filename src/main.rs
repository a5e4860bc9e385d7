use std::fs::File;
use std::io::Write;
use std::process::ExitCode;

use clap::Parser;
use miniline::core::config::{self, CliOverrides, ResolvedConfig};
use miniline::{EditOutcome, EditorOptions};
use simplelog::{ConfigBuilder, WriteLogger};

/// Exit status for a read cancelled with ^C (128 + SIGINT)
const EXIT_INTERRUPTED: u8 = 130;

#[derive(Parser)]
#[command(name = "miniline", about = "Read an edited line from the terminal")]
struct Args {
    /// Prompt printed before the editable line
    #[arg(short, long)]
    prompt: Option<String>,

    /// Don't beep on unrecognized escape sequences
    #[arg(long)]
    no_bell: bool,

    /// Keep reading lines until interrupted or end of input
    #[arg(short, long)]
    repeat: bool,
}

fn init_logging(config: &ResolvedConfig) {
    // File logger: the terminal is in raw mode while editing
    let log_config = ConfigBuilder::new()
        .set_time_format_rfc3339()
        .build();

    if let Ok(log_file) = File::create(&config.log_file) {
        let _ = WriteLogger::init(config.log_level, log_config, log_file);
    }
}

fn main() -> ExitCode {
    let args = Args::parse();
    dotenv::dotenv().ok();

    let file_config = match config::load_config() {
        Ok(c) => c,
        Err(e) => {
            eprintln!("miniline: {e}");
            return ExitCode::FAILURE;
        }
    };
    let config = config::resolve(
        &file_config,
        &CliOverrides {
            prompt: args.prompt.as_deref(),
            no_bell: args.no_bell,
        },
    );
    init_logging(&config);

    log::info!("Miniline starting up (repeat: {})", args.repeat);

    let options = EditorOptions { bell: config.bell };
    let mut stdout = std::io::stdout();

    loop {
        match miniline::read_line_with(&config.prompt, &options) {
            Ok(EditOutcome::Line(line)) => {
                let written = stdout
                    .write_all(&line)
                    .and_then(|()| stdout.write_all(b"\n"))
                    .and_then(|()| stdout.flush());
                if let Err(e) = written {
                    log::error!("Failed to write line to stdout: {}", e);
                    return ExitCode::FAILURE;
                }
                if !args.repeat {
                    return ExitCode::SUCCESS;
                }
            }
            Ok(EditOutcome::EndOfInput) => return ExitCode::SUCCESS,
            Ok(EditOutcome::Interrupted) => {
                eprintln!("Interrupted");
                return ExitCode::from(EXIT_INTERRUPTED);
            }
            Err(e) => {
                log::error!("Line edit failed: {}", e);
                eprintln!("miniline: {e}");
                return ExitCode::FAILURE;
            }
        }
    }
}
