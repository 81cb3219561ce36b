//! pfmt - print text in 256-color ANSI codes

mod config;

use clap::{Parser, Subcommand};
use config::Config;
use pfmt::{ColorService, FontTable, RESET};
use std::io::{self, Write};
use std::process::ExitCode;

#[derive(Parser)]
#[command(name = "pfmt")]
#[command(about = "Print text in 256-color ANSI codes")]
struct Cli {
    #[command(subcommand)]
    command: Command,

    /// Increase log verbosity (-v info, -vv debug, -vvv trace)
    #[arg(short, long, global = true, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Terminate output with a newline (line variant of each print)
    #[arg(long, global = true)]
    line: bool,
}

#[derive(Subcommand)]
enum Command {
    /// Show every color code in its own color
    Colors,
    /// Show the font styles
    Fonts,
    /// Print TEXT in a single color
    Print {
        text: String,
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
    /// Color each %h-separated segment of TEXT with the next code
    Multi {
        text: String,
        #[arg(required = true, allow_negative_numbers = true)]
        codes: Vec<i32>,
    },
    /// Print TEXT with a foreground (> 0) and background (< -1)
    Fb {
        text: String,
        #[arg(allow_negative_numbers = true)]
        foreground: i32,
        #[arg(allow_negative_numbers = true)]
        background: i32,
    },
    /// Replace any colors in TEXT with CODE and print the result
    Apply {
        text: String,
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
    /// Remove color sequences (but not resets) from TEXT
    Strip { text: String },
    /// Exit 0 if CODE is a valid color, 1 otherwise
    Valid {
        #[arg(allow_negative_numbers = true)]
        code: i32,
    },
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    let config = Config::new(cli.verbose, cli.line);

    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .with_writer(io::stderr)
        .init();

    match run(cli.command, &config) {
        Ok(code) => code,
        Err(e) => {
            eprintln!("pfmt: {e}");
            ExitCode::FAILURE
        }
    }
}

fn run(command: Command, config: &Config) -> pfmt::Result<ExitCode> {
    let mut service = ColorService::stdout();

    match command {
        Command::Colors => service.list_available_colors(),
        Command::Fonts => print_fonts(&FontTable::initialized())?,
        Command::Print { text, code } => {
            if config.line {
                service.print_colored_line(&text, code)?;
            } else {
                service.print_colored(&text, code)?;
            }
        }
        Command::Multi { text, codes } => {
            if config.line {
                service.print_multi_colored_line(&text, &codes);
            } else {
                service.print_multi_colored(&text, &codes);
            }
        }
        Command::Fb {
            text,
            foreground,
            background,
        } => {
            if config.line {
                service.print_colored_fg_bg_line(&text, foreground, background)?;
            } else {
                service.print_colored_fg_bg(&text, foreground, background)?;
            }
        }
        Command::Apply { text, code } => {
            println!("{}", service.apply_color(&text, code));
        }
        Command::Strip { text } => {
            println!("{}", service.strip_color(&text));
        }
        Command::Valid { code } => {
            let valid = service.is_color_valid(code);
            tracing::info!(code, valid, "validity check");
            return Ok(if valid {
                ExitCode::SUCCESS
            } else {
                ExitCode::FAILURE
            });
        }
    }

    Ok(ExitCode::SUCCESS)
}

/// Each style name rendered in its own style
fn print_fonts(fonts: &FontTable) -> pfmt::Result<()> {
    let mut out = io::stdout().lock();
    for (name, seq) in fonts.iter() {
        write!(out, "{seq}{name}{RESET} ")?;
    }
    writeln!(out)?;
    Ok(())
}
