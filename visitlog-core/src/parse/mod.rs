mod entry;
mod error;
mod line;

pub use entry::*;
pub use error::*;
pub use line::*;
