pub mod analysis;

#[cfg(test)]
pub mod fixtures;

pub use analysis::*;
