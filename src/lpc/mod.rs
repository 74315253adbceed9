//! Linear-prediction coefficient transforms.

pub mod parcor;

#[cfg(test)]
mod tests;

pub use parcor::{lpc2par, par2lpc, LpcToParcor, ParcorToLpc};
