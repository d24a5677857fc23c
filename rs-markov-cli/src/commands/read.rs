use std::io::stdin;

use rs_markov_core::{FrequencyTable, MarkovError, save_table_path};

/// Args for the read command.
#[derive(clap::Args, Debug)]
pub struct ReadArgs {
	/// Number of words in each prefix (must be positive).
	pub prefix_len: usize,

	/// Table file to write; replaced if it exists.
	pub output: String,

	/// Input text files, each read as an independent stream; "-" reads stdin.
	#[arg(required = true)]
	pub inputs: Vec<String>,
}

impl ReadArgs {
	pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
		if self.prefix_len == 0 {
			return Err(MarkovError::Argument("prefix length must be greater than 0".to_owned()).into());
		}

		let mut table = FrequencyTable::new(self.prefix_len);
		for path in &self.inputs {
			if path == "-" {
				table.add_reader(stdin().lock())?;
			} else {
				table.add_file(path)?;
			}
		}

		log::info!(
			"{} prefixes, {} transitions from {} inputs",
			table.len(),
			table.total_count(),
			self.inputs.len()
		);
		save_table_path(&table, &self.output)?;
		Ok(())
	}
}
