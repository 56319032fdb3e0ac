mod binder;
mod builtins;
mod call;
mod checker;
mod compare;
mod infer;
mod resolve;
mod stringify;
mod substitute;
mod symbol_types;


pub use binder::*;
pub use builtins::*;
pub use checker::*;
pub use resolve::*;
pub use substitute::*;
