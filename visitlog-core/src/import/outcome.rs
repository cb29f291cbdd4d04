use crate::import::LineError;

/// What happened to one line of input.
#[derive(Debug)]
pub enum LineOutcome {
    /// A visit was stored and counted.
    Recorded,
    Blank,
    /// The entry carried no usable host.
    NoHost,
    Noise,
    /// The visitor whitelisted its own address.
    Ignored,
    Skipped(LineError),
}

impl LineOutcome {
    pub fn is_recorded(&self) -> bool {
        matches!(self, LineOutcome::Recorded)
    }
}
