use log::LevelFilter;

/// Logging setup arg group.
#[derive(clap::Args, Debug)]
pub struct LogArgs {
	/// Silence log messages.
	#[arg(short, long, global = true)]
	pub quiet: bool,

	/// Turn debugging information on (-v, -vv, -vvv).
	#[arg(short, long, action = clap::ArgAction::Count, global = true)]
	pub verbose: u8,
}

impl LogArgs {
	fn level(&self) -> LevelFilter {
		if self.quiet {
			return LevelFilter::Off;
		}
		match self.verbose {
			0 => LevelFilter::Warn,
			1 => LevelFilter::Info,
			2 => LevelFilter::Debug,
			_ => LevelFilter::Trace,
		}
	}

	/// Initializes `env_logger` on stderr; `RUST_LOG` overrides the flags.
	pub fn setup_logging(&self) -> Result<(), Box<dyn std::error::Error>> {
		env_logger::Builder::new()
			.filter_level(self.level())
			.parse_env("RUST_LOG")
			.format_timestamp(None)
			.try_init()?;
		Ok(())
	}
}
