mod diagnostic;
mod kind;
mod line_col;
mod sink;

pub use diagnostic::*;
pub use kind::*;
pub use line_col::*;
pub use sink::*;
