pub mod seed;

pub use seed::{run_seed, SeedSummary};
