//! Command implementations

pub mod lengths;
pub mod simple;

pub use lengths::print_lengths;
pub use simple::run_simple;
