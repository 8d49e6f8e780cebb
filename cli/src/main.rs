//! `rcat`: concatenate files, driven entirely by the argroute dispatcher.
//!
//! Options:
//! - `-v`, `--verbose` — report what was written to stderr.
//! - `-o FILE`, `--output FILE` — write to FILE instead of stdout.
//! - `-s [SEP]`, `--separator [SEP]` — insert SEP between inputs; without
//!   a value, a newline is used.
//!
//! Positional arguments are input paths, up to [`MAX_INPUTS`] of them;
//! extras are ignored per the dispatcher's discard rule.
//!
//! Exit codes: 0 on success, 1 on I/O failure, 2 on argument errors.

use std::cell::RefCell;
use std::fs;
use std::io::{self, Write};
use std::process::ExitCode;

use argroute_core::{Arity, DispatchError, Dispatcher};

/// Number of positional slots registered with the dispatcher.
const MAX_INPUTS: usize = 8;

#[derive(Debug, Default)]
struct Config {
    verbose: bool,
    output: Option<String>,
    separator: Option<String>,
    inputs: Vec<String>,
}

/// Builds a [`Config`] from the process arguments.
fn parse_args() -> Result<Config, DispatchError> {
    let config = RefCell::new(Config::default());

    let mut dispatcher = Dispatcher::from_env();
    dispatcher
        .register_option(["-v", "--verbose"], Arity::None, |_| {
            config.borrow_mut().verbose = true;
            Ok(())
        })
        .register_option(["-o", "--output"], Arity::Required, |value| {
            config.borrow_mut().output = Some(value.to_string());
            Ok(())
        })
        .register_option(["-s", "--separator"], Arity::Optional, |value| {
            let separator = if value.is_empty() { "\n" } else { value };
            config.borrow_mut().separator = Some(separator.to_string());
            Ok(())
        });
    for _ in 0..MAX_INPUTS {
        dispatcher.register_positional(|path| {
            config.borrow_mut().inputs.push(path.to_string());
            Ok(())
        });
    }

    dispatcher.run()?;
    drop(dispatcher);
    Ok(config.into_inner())
}

/// Concatenates the configured inputs to the configured destination.
fn concat(config: &Config) -> io::Result<()> {
    let separator = config.separator.as_deref().unwrap_or("");
    let mut out: Box<dyn Write> = match &config.output {
        Some(path) => Box::new(fs::File::create(path)?),
        None => Box::new(io::stdout().lock()),
    };

    for (index, path) in config.inputs.iter().enumerate() {
        if index > 0 && !separator.is_empty() {
            out.write_all(separator.as_bytes())?;
        }
        let contents = fs::read(path)?;
        out.write_all(&contents)?;
    }
    out.flush()?;

    if config.verbose {
        eprintln!(
            "rcat: wrote {} input(s) to {}",
            config.inputs.len(),
            config.output.as_deref().unwrap_or("stdout")
        );
    }
    Ok(())
}

fn main() -> ExitCode {
    let config = match parse_args() {
        Ok(config) => config,
        Err(err) => {
            eprintln!("rcat: {err}");
            return ExitCode::from(2);
        }
    };

    if config.inputs.is_empty() {
        eprintln!("rcat: no input files");
        return ExitCode::from(2);
    }

    match concat(&config) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            eprintln!("rcat: {err}");
            ExitCode::from(1)
        }
    }
}
