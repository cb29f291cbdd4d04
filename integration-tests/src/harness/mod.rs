pub mod logs;
pub mod tracing;

pub use logs::{EXAMPLE_LINE, combined_line, write_gz_log, write_log};
pub use tracing::{CapturedEvent, init_test_tracing};
