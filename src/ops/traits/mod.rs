//! Operation trait definitions

mod histogram;

pub use histogram::HistogramOps;
