mod visit;
mod visitor;
#[cfg(test)]
mod tests;

pub use visit::*;
pub use visitor::*;
