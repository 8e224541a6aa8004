pub mod call;
pub mod expr;
pub mod literal;
pub mod matrix;
pub mod stmt;

pub use call::Call;
pub use expr::{Fragment, Item, Operand, Terminator};
pub use literal::{LitNum, LitSym};
pub use matrix::{MatrixLit, Row};
pub use stmt::{Let, Stmt};
