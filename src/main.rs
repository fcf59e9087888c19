//! keychord -- command-line front end.
//!
//! Usage: `keychord [--config <path>] <selector | system-menu | snap-layout>`

use std::env;
use std::path::PathBuf;
use std::process::ExitCode;

use keychord::config::Config;
use keychord::{Combination, Selector};

const USAGE: &str = "usage: keychord [--config <path>] <selector | system-menu | snap-layout>

  0, system-menu   press Alt+Space (window system menu)
  1, snap-layout   press Win+Z (Snap Layout picker)";

#[derive(Debug, PartialEq, Eq)]
enum Command {
    Trigger {
        selector: Selector,
        config: Option<PathBuf>,
    },
    Help,
    Version,
}

fn main() -> ExitCode {
    let command = match parse_args(env::args().skip(1)) {
        Ok(command) => command,
        Err(msg) => {
            eprintln!("keychord: {msg}\n\n{USAGE}");
            return ExitCode::from(2);
        }
    };

    let (selector, config_path) = match command {
        Command::Help => {
            println!("{USAGE}");
            return ExitCode::SUCCESS;
        }
        Command::Version => {
            println!("keychord v{}", env!("CARGO_PKG_VERSION"));
            return ExitCode::SUCCESS;
        }
        Command::Trigger { selector, config } => (selector, config),
    };

    let config = match config_path {
        Some(path) => match Config::load(&path) {
            Ok(config) => config,
            Err(e) => {
                eprintln!("keychord: {e}");
                return ExitCode::from(2);
            }
        },
        None => Config::default(),
    };

    // level_filter() was validated when the config was parsed.
    let level = config.level_filter().unwrap_or(log::LevelFilter::Info);
    env_logger::Builder::new()
        .filter_level(level)
        .parse_default_env()
        .init();

    if !config.strict {
        keychord::trigger(selector);
        return ExitCode::SUCCESS;
    }

    match keychord::try_trigger(selector) {
        Ok(_) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("trigger: {e}");
            ExitCode::FAILURE
        }
    }
}

fn parse_args(args: impl IntoIterator<Item = String>) -> Result<Command, String> {
    let mut args = args.into_iter();
    let mut config = None;
    let mut selector = None;

    while let Some(arg) = args.next() {
        match arg.as_str() {
            "-h" | "--help" => return Ok(Command::Help),
            "-V" | "--version" => return Ok(Command::Version),
            "--config" => {
                let path = args.next().ok_or("--config needs a path")?;
                config = Some(PathBuf::from(path));
            }
            other if other.starts_with('-') && !is_integer(other) => {
                return Err(format!("unknown option {other}"));
            }
            other => {
                if selector.is_some() {
                    return Err(format!("unexpected argument {other}"));
                }
                selector = Some(parse_selector(other)?);
            }
        }
    }

    let selector = selector.ok_or("missing selector")?;
    Ok(Command::Trigger { selector, config })
}

/// Accepts a raw index or a combination name. Indices without a combination
/// are passed through and the trigger reports them; integers that do not fit
/// a `Selector` (negative or too large) are rejected here.
fn parse_selector(arg: &str) -> Result<Selector, String> {
    if is_integer(arg) {
        return arg
            .parse::<Selector>()
            .map_err(|_| format!("selector {arg} is out of range (0..={})", Selector::MAX));
    }
    arg.parse::<Combination>()
        .map(Combination::selector)
        .map_err(|e| e.to_string())
}

fn is_integer(arg: &str) -> bool {
    let digits = arg.strip_prefix('-').unwrap_or(arg);
    !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit())
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
