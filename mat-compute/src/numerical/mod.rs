pub mod builtin;
pub mod ctxt;
pub mod error;
pub mod eval;
pub mod value;
