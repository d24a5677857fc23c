mod dump;
mod generate;
mod merge;
mod read;

/// Subcommands for rs-markov
#[derive(clap::Subcommand, Debug)]
pub enum Commands {
	/// Build a frequency table from text files.
	#[command(alias = "build")]
	Read(read::ReadArgs),

	/// Generate text from a frequency table.
	Generate(generate::GenerateArgs),

	/// Print a frequency table (or its expanded chain) in sorted order.
	Dump(dump::DumpArgs),

	/// Merge frequency tables sharing the same prefix length.
	Merge(merge::MergeArgs),
}

impl Commands {
	/// Run the subcommand.
	pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
		match self {
			Commands::Read(cmd) => cmd.run(),
			Commands::Generate(cmd) => cmd.run(),
			Commands::Dump(cmd) => cmd.run(),
			Commands::Merge(cmd) => cmd.run(),
		}
	}
}
