use rand::SeedableRng;
use rand::rngs::StdRng;
use rs_markov_core::{ExpandedChain, FixedSelector, FrequencyTable, Generator, MarkovError};

const PRISONER: &str = "I am not a number! I am a free man!";
const SECOND_STREAM: &str = "A free man is not a number. I am not a prisoner.";

fn main() -> Result<(), Box<dyn std::error::Error>> {
    // Build a table with prefixes of two words
    let mut table = FrequencyTable::new(2);

    // Each call is an independent stream: the prefix window starts again
    // from the sentinel, but counts accumulate in the same table
    table.add_text(PRISONER);
    table.add_text(SECOND_STREAM);
    println!("{} prefixes, {} transitions", table.len(), table.total_count());

    // The table file format is plain text, sorted by prefix
    print!("{}", rs_markov_core::encode_to_string(&table));

    // Tables can only be merged when their prefix lengths agree
    let other = FrequencyTable::new(3);
    match table.merge(&other) {
        Ok(_) => println!("Should not happen"),
        Err(MarkovError::PrefixLenMismatch { expected, found }) => {
            println!("Cannot merge a {found}-word table into a {expected}-word table")
        }
        Err(e) => return Err(e.into()),
    }

    // Expand counts into suffix sequences, then walk the chain
    let chain = ExpandedChain::from_table(&table);
    let generator = Generator::new(&chain);

    // Seeded generation is reproducible
    let mut rng = StdRng::seed_from_u64(2024);
    for i in 0..5 {
        println!("Generated sentence {}: {}", i + 1, generator.generate_text(12, &mut rng));
    }

    // Always take the first suffix
    println!("First choices: {}", generator.generate_text(12, &mut FixedSelector::new(vec![0])));

    // Fully random generation
    println!("Random: {}", generator.generate_text(12, &mut rand::rng()));

    Ok(())
}
