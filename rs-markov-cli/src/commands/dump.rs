use std::io::{BufWriter, Write, stdout};

use rs_markov_core::{ExpandedChain, load_table_path, write_table};

/// Args for the dump command.
#[derive(clap::Args, Debug)]
pub struct DumpArgs {
	/// Table file to print.
	pub table: String,

	/// Print every prefix with its suffixes repeated by count.
	#[arg(long)]
	pub expanded: bool,
}

impl DumpArgs {
	pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
		let table = load_table_path(&self.table)?;
		let mut writer = BufWriter::new(stdout().lock());

		if self.expanded {
			ExpandedChain::from_table(&table).write_chain(&mut writer)?;
		} else {
			write_table(&table, &mut writer)?;
		}
		writer.flush()?;
		Ok(())
	}
}
