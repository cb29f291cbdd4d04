use crate::import::ProgressReporter;
use tracing::info;

/// Reports progress as log events: whenever another tenth of the run is done
/// and whenever a new file starts.
#[derive(Debug, Default)]
pub struct TracingProgress {
    total: u64,
    reported_tenths: u64,
    label: String,
}

impl TracingProgress {
    /// Returns the completed percentage when an event is due.
    pub(super) fn due(&mut self, processed: u64, label: &str) -> Option<u64> {
        let percent = (processed * 100).checked_div(self.total).unwrap_or(100);
        let tenths = percent / 10;
        let new_file = self.label != label;

        if !new_file && tenths <= self.reported_tenths {
            return None;
        }
        if new_file {
            self.label = label.to_string();
        }
        self.reported_tenths = self.reported_tenths.max(tenths);
        Some(percent)
    }
}

impl ProgressReporter for TracingProgress {
    fn start(&mut self, total: u64) {
        self.total = total;
        self.reported_tenths = 0;
        self.label.clear();
    }

    fn update(&mut self, processed: u64, label: &str) {
        if let Some(percent) = self.due(processed, label) {
            info!(processed, total = self.total, percent, file = label, "import progress");
        }
    }

    fn finish(&mut self) {
        info!(total = self.total, "all lines processed");
    }
}

