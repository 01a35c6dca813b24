pub mod analyze;
pub mod generate;
pub mod report;

use lcglab_core::Lcg;

/// Parse a generator name into a ready stream.
pub fn parse_generator(s: &str) -> Lcg {
    match s {
        "randu" => Lcg::randu(),
        "mixed" | "lcg" => Lcg::mixed(),
        _ => {
            eprintln!("Unknown generator '{s}', using mixed");
            Lcg::mixed()
        }
    }
}
