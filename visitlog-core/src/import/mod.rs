//! Bulk import of access logs into the visitor store.
//!
//! [`ImportPipeline`] is the only orchestrator. Each line is reduced to a
//! [`LineOutcome`]; anything that goes wrong with a single line stays inside
//! that value. Only [`ImportError`] ends a run.
//!
//! ```text
//! LogLines -> parse_line -> NoiseFilter -> VisitorRegistry
//!          -> BatchTransaction::isolate -> UserAgentLedger -> batch boundary
//! ```

mod error;
mod outcome;
mod pipeline;
mod plan;
mod report;
mod summary;

pub use error::*;
pub use outcome::*;
pub use pipeline::*;
pub use plan::*;
pub use report::*;
pub use summary::*;
