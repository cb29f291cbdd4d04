mod error;
mod reader;
mod selection;

pub use error::*;
pub use reader::*;
pub use selection::*;
