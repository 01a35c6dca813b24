use std::path::Path;

use lcglab_core::stream;

pub fn run(generator: &str, count: usize, output: &str) {
    let mut lcg = super::parse_generator(generator);
    let params = lcg.params();
    let values = lcg.generate(count);

    if let Err(e) = stream::write_values(Path::new(output), &values) {
        eprintln!("Failed to write {output}: {e}");
        std::process::exit(1);
    }

    println!(
        "Wrote {count} values to {output} (a={}, c={}, m={}, seed={})",
        params.multiplier, params.increment, params.modulus, params.seed
    );
}
