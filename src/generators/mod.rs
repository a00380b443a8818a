//! Generators for benchmark problems with a known ground state.

pub use anti_crossing::{anti_crossing_clique, anti_crossing_loops};

/// Anti-crossing problems, whose ground state is all `+1`.
pub mod anti_crossing;
