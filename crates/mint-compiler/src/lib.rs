mod compile;
mod emit;
mod transform;

pub use compile::*;
pub use emit::*;
pub use transform::*;

#[cfg(test)]
mod tests;
