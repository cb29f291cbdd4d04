/// Go/no-go decision taken once the size of the run is known.
pub trait Confirm {
    fn confirm(&mut self, total: u64) -> bool;
}

impl<F> Confirm for F
where
    F: FnMut(u64) -> bool,
{
    fn confirm(&mut self, total: u64) -> bool {
        self(total)
    }
}

/// Receives progress while lines are processed. `processed` never decreases.
pub trait ProgressReporter {
    fn start(&mut self, total: u64);

    fn update(&mut self, processed: u64, label: &str);

    fn finish(&mut self);
}

/// Discards progress.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoProgress;

impl ProgressReporter for NoProgress {
    fn start(&mut self, _total: u64) {}

    fn update(&mut self, _processed: u64, _label: &str) {}

    fn finish(&mut self) {}
}
