use rand::SeedableRng;
use rand::rngs::StdRng;

use rs_markov_core::{ExpandedChain, Generator, load_table_path};

/// Args for the generate command.
#[derive(clap::Args, Debug)]
pub struct GenerateArgs {
	/// Table file written by the read command.
	pub table: String,

	/// Maximum number of words to generate.
	pub words: usize,

	/// Seed for reproducible output.
	#[arg(long)]
	pub seed: Option<u64>,
}

impl GenerateArgs {
	pub fn run(&self) -> Result<(), Box<dyn std::error::Error>> {
		println!("{}", self.generate_text()?);
		Ok(())
	}

	/// Loads the table and walks its chain for at most `words` words.
	fn generate_text(&self) -> Result<String, Box<dyn std::error::Error>> {
		let table = load_table_path(&self.table)?;
		let chain = ExpandedChain::from_table(&table);
		let generator = Generator::new(&chain);

		Ok(match self.seed {
			Some(seed) => generator.generate_text(self.words, &mut StdRng::seed_from_u64(seed)),
			None => generator.generate_text(self.words, &mut rand::rng()),
		})
	}
}
