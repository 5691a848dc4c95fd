//! External service interactions
//!
//! - Print command invocation for the flyer, in the background

pub mod printer;

pub use printer::PrintJob;
