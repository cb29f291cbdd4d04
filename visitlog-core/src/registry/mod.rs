mod visitor_registry;
#[cfg(test)]
mod tests;

pub use visitor_registry::*;
