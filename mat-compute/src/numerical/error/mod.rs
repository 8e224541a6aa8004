//! Error kinds raised while evaluating a script.

pub mod kind;

pub use mat_error::Error;
