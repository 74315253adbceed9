//! Frame-level signal analysis.

pub mod zcross;

#[cfg(test)]
mod tests;

pub use zcross::ZeroCrossing;
