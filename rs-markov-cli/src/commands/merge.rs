use rs_markov_core::{load_table_path, save_table_path};

/// Args for the merge command.
#[derive(clap::Args, Debug)]
pub struct MergeArgs {
	/// Table file to write; replaced if it exists.
	pub output: String,

	/// Table files to combine; all must share one prefix length.
	#[arg(required = true)]
	pub tables: Vec<String>,
}

impl MergeArgs {
	pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
		let mut paths = self.tables.iter();
		let Some(first) = paths.next() else {
			return Err("no table to merge".into());
		};

		let mut merged = load_table_path(first)?;
		for path in paths {
			merged.merge(&load_table_path(path)?)?;
		}
		save_table_path(&merged, &self.output)?;
		Ok(())
	}
}
