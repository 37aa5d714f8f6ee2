//! `tailguard`: tail-latency and determinism guardrail.
//!
//! Prints `verdict: PASS|FAIL` followed by the decision trace on stdout and
//! exits 0 on PASS, 1 on FAIL. Fatal errors print a `✖ [CODE] message` line
//! on stderr and exit with a code per error kind (see [`exit`]).

mod args;
mod exit;

use std::process::ExitCode;

use clap::error::ErrorKind;
use clap::Parser;
use tailguard_core::config::{GuardFileConfig, ProcessEnv};
use tailguard_core::constants::VERSION;
use tailguard_core::errors::{ErrorCode, GuardError};
use tailguard_core::tracing::init_tracing;

use crate::args::Args;

fn main() -> ExitCode {
    let args = match Args::try_parse() {
        Ok(args) => args,
        Err(e) => {
            let _ = e.print();
            return match e.kind() {
                ErrorKind::DisplayHelp | ErrorKind::DisplayVersion => ExitCode::SUCCESS,
                _ => ExitCode::from(exit::EXIT_USAGE),
            };
        }
    };

    init_tracing();

    match run(args) {
        Ok(code) => ExitCode::from(code),
        Err(e) => {
            eprintln!("✖ {}", e.coded_string());
            ExitCode::from(exit::for_error(&e))
        }
    }
}

fn run(args: Args) -> Result<u8, GuardError> {
    tracing::debug!(version = VERSION, config = ?args.config, "starting guardrail run");
    let file = args
        .config
        .as_deref()
        .map(GuardFileConfig::load)
        .transpose()?;
    let (request, export) = args.into_request(file);

    let outcome = request.evaluate(&ProcessEnv)?;
    print!("{}", outcome.decision.render());

    if let Some(export) = export {
        outcome.export(&export)?;
        println!("[metrics-exporter] wrote {}", export.path.display());
    }

    Ok(exit::for_decision(&outcome.decision))
}
