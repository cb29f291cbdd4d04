mod noise;
#[cfg(test)]
mod tests;

pub use noise::*;
