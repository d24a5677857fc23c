mod commands;
mod logging;

use std::error::Error;
use std::process::ExitCode;

use clap::Parser;
use commands::Commands;

/// Word-level Markov chain text generator.
///
/// Builds frequency tables from text files and generates new text from them.
#[derive(clap::Parser, Debug)]
#[command(name = "rs-markov", version)]
pub struct Args {
	#[clap(flatten)]
	pub logging: logging::LogArgs,

	/// Subcommand to run.
	#[clap(subcommand)]
	pub command: Commands,
}

/// Renders an error and its sources on one line.
fn describe(err: &dyn Error) -> String {
	let mut message = err.to_string();
	let mut source = err.source();
	while let Some(cause) = source {
		message.push_str(": ");
		message.push_str(&cause.to_string());
		source = cause.source();
	}
	message
}

fn main() -> ExitCode {
	let args = Args::parse();

	let result = args
		.logging
		.setup_logging()
		.and_then(|()| args.command.run());

	// Reported once on stderr, even with --quiet.
	match result {
		Ok(()) => ExitCode::SUCCESS,
		Err(e) => {
			eprintln!("rs-markov: {}", describe(e.as_ref()));
			ExitCode::FAILURE
		}
	}
}
