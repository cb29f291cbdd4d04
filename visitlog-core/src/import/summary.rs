use crate::import::LineOutcome;

/// Totals of one import run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub files: u64,
    pub lines: u64,

    // per line outcome
    pub recorded: u64,
    pub blank: u64,
    pub no_host: u64,
    pub noise: u64,
    pub ignored: u64,
    pub skipped: u64,

    pub visitors_created: u64,
    pub batches: u64,
    pub user_agents: u64,
}

impl ImportSummary {
    pub(crate) fn tally(&mut self, outcome: &LineOutcome) {
        self.lines += 1;
        match outcome {
            LineOutcome::Recorded => self.recorded += 1,
            LineOutcome::Blank => self.blank += 1,
            LineOutcome::NoHost => self.no_host += 1,
            LineOutcome::Noise => self.noise += 1,
            LineOutcome::Ignored => self.ignored += 1,
            LineOutcome::Skipped(_) => self.skipped += 1,
        }
    }
}
