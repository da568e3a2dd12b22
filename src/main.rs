use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, BufRead, Write};
use std::path::PathBuf;
use tracing::{info, warn};
use tracing_subscriber::EnvFilter;

use zcalc::calculator::{copy_to_clipboard, render};
use zcalc::keypad::LAYOUT;
use zcalc::{CalculatorState, Config, parse_keys};

#[derive(Parser, Debug)]
#[command(name = "zcalc", version, about = "Keypad calculator")]
struct Cli {
    /// Config file (defaults to $XDG_CONFIG_HOME/zcalc/config.toml)
    #[arg(long, global = true)]
    config: Option<PathBuf>,
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Press a sequence of keys and print the display
    Eval {
        /// Keys to press, e.g. `2+3*4=` or `90 sin`
        #[arg(required = true)]
        keys: Vec<String>,
        /// Print the display after every key
        #[arg(long)]
        trace: bool,
        /// Print the final state as JSON
        #[arg(long)]
        json: bool,
        /// Copy the final display to the clipboard
        #[arg(long)]
        copy: bool,
    },
    /// Read key sequences from stdin, one line at a time
    Repl,
    /// Show the keypad and accepted key names
    Keys,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load(cli.config.as_deref()).context("Failed to load config")?;

    let filter = EnvFilter::try_new(&config.log_filter).unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .init();

    match cli.command {
        Command::Eval {
            keys,
            trace,
            json,
            copy,
        } => eval(&config, &keys.join(" "), trace, json, copy),
        Command::Repl => repl(&config),
        Command::Keys => {
            print_keys();
            Ok(())
        }
    }
}

fn eval(config: &Config, input: &str, trace: bool, json: bool, copy: bool) -> Result<()> {
    let keys = parse_keys(input).with_context(|| format!("Invalid key sequence '{}'", input))?;
    let mut state = CalculatorState::new();

    for key in keys {
        state.press(key);
        if trace {
            println!("{:>4}  {}", key.label(), render(&state, config));
        }
    }

    if json {
        let snapshot = serde_json::to_string_pretty(&state).context("Failed to serialize state")?;
        println!("{}", snapshot);
    } else if !trace {
        println!("{}", render(&state, config));
    }

    if copy {
        copy_to_clipboard(state.display()).context("Failed to copy result")?;
        info!(display = %state.display(), "Copied display to clipboard");
    }

    Ok(())
}

fn repl(config: &Config) -> Result<()> {
    let mut state = CalculatorState::new();
    let stdin = io::stdin();
    let mut stdout = io::stdout();

    info!("Session started");
    writeln!(stdout, "{}", render(&state, config))?;

    for line in stdin.lock().lines() {
        let line = line.context("Failed to read stdin")?;
        let trimmed = line.trim();

        if trimmed.eq_ignore_ascii_case("quit") || trimmed.eq_ignore_ascii_case("exit") {
            break;
        }

        match parse_keys(trimmed) {
            Ok(keys) => {
                state.press_all(keys);
                writeln!(stdout, "{}", render(&state, config))?;
            }
            Err(e) => {
                warn!(input = %trimmed, "Rejected input: {}", e);
                eprintln!("{}", e);
            }
        }
        stdout.flush()?;
    }

    info!(display = %state.display(), "Session ended");
    Ok(())
}

fn print_keys() {
    for row in LAYOUT {
        let labels: Vec<String> = row.iter().map(|key| format!("{:^5}", key.label())).collect();
        println!("[{}]", labels.join("|"));
    }

    println!();
    println!("Aliases: * ×  / ÷  - −  sqrt √  neg +/-  pi π  back ⌫  c clear");
}
