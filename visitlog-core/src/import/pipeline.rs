use crate::batch::BatchTransaction;
use crate::conf::ImportConfig;
use crate::filter::NoiseFilter;
use crate::import::{
    Confirm, ImportError, ImportPlan, ImportSummary, LineError, LineOutcome, ProgressReporter,
};
use crate::ledger::UserAgentLedger;
use crate::model::Visit;
use crate::parse::parse_line;
use crate::registry::VisitorRegistry;
use crate::source::{LogLines, LogSelection, open_log};
use crate::store::VisitorStore;
use chrono::Utc;
use std::path::{Path, PathBuf};
use tracing::{info, info_span, warn};

pub struct ImportPipeline<'s, S> {
    store: &'s S,
    filter: NoiseFilter,
    batch_size: u64,
}

impl<'s, S: VisitorStore> ImportPipeline<'s, S> {
    pub fn new(store: &'s S, filter: NoiseFilter, batch_size: u64) -> Self {
        Self {
            store,
            filter,
            batch_size,
        }
    }

    pub fn from_config(store: &'s S, cfg: &ImportConfig) -> Self {
        Self::new(
            store,
            NoiseFilter::new(cfg.noise_prefixes.iter().cloned()),
            cfg.batch_size,
        )
    }

    /// Resolves the selection, confirms it, then imports it.
    pub fn run(
        &self,
        selection: &LogSelection,
        confirm: &mut impl Confirm,
        progress: &mut impl ProgressReporter,
    ) -> Result<ImportSummary, ImportError> {
        let plan = ImportPlan::prepare(selection, confirm)?;
        self.execute(&plan, progress)
    }

    /// Confirms `files`, then imports them in the order given.
    pub fn import(
        &self,
        files: &[PathBuf],
        confirm: &mut impl Confirm,
        progress: &mut impl ProgressReporter,
    ) -> Result<ImportSummary, ImportError> {
        let plan = ImportPlan::confirm(files.to_vec(), confirm)?;
        self.execute(&plan, progress)
    }

    /// Imports a confirmed plan.
    ///
    /// Every processed line is committed, even if a fatal error ends the run
    /// early.
    pub fn execute(
        &self,
        plan: &ImportPlan,
        progress: &mut impl ProgressReporter,
    ) -> Result<ImportSummary, ImportError> {
        let files = plan.files();
        let mut batch = BatchTransaction::begin(self.store, self.batch_size)?;
        let mut run = Run {
            filter: &self.filter,
            registry: VisitorRegistry::new(self.store),
            ledger: UserAgentLedger::new(self.store),
            summary: ImportSummary::default(),
        };

        progress.start(plan.total());
        let result = files
            .iter()
            .try_for_each(|path| run.file(path, &mut batch, &mut *progress));
        progress.finish();

        let finished = batch.finish();
        if let Err(err) = result {
            if let Err(commit) = finished {
                warn!(error = %commit, "failed to commit lines processed before the error");
            }
            return Err(err);
        }
        let stats = finished?;

        let summary = ImportSummary {
            files: files.len() as u64,
            visitors_created: run.registry.created(),
            user_agents: run.ledger.recorded(),
            batches: stats.batches,
            ..run.summary
        };
        info!(
            lines = summary.lines,
            recorded = summary.recorded,
            skipped = summary.skipped,
            batches = summary.batches,
            "import finished"
        );
        Ok(summary)
    }
}

/// Per-run state other than the batch.
struct Run<'p, 's, S> {
    filter: &'p NoiseFilter,
    registry: VisitorRegistry<'s, S>,
    ledger: UserAgentLedger<'s, S>,
    summary: ImportSummary,
}

impl<'s, S: VisitorStore> Run<'_, 's, S> {
    fn file(
        &mut self,
        path: &Path,
        batch: &mut BatchTransaction<'s, S>,
        progress: &mut impl ProgressReporter,
    ) -> Result<(), ImportError> {
        let file = path.display().to_string();
        let label = path
            .file_name()
            .map(|name| name.to_string_lossy().into_owned())
            .unwrap_or_else(|| file.clone());

        let span = info_span!("import_file", file = %file);
        let _enter = span.enter();

        let reader = open_log(path).map_err(|e| ImportError::read(path, e))?;
        let (lines_before, recorded_before) = (self.summary.lines, self.summary.recorded);

        for (idx, line) in LogLines::new(reader).enumerate() {
            let line = line.map_err(|e| ImportError::read(path, e))?;
            let line_no = idx as u64 + 1;

            let outcome = self.line(&line, &file, line_no, batch)?;
            if let LineOutcome::Skipped(err) = &outcome {
                warn!(file = %file, line = line_no, error = %err, "line skipped");
            }
            self.summary.tally(&outcome);
            progress.update(self.summary.lines, &label);
        }

        info!(
            file = %file,
            lines = self.summary.lines - lines_before,
            recorded = self.summary.recorded - recorded_before,
            "log file imported"
        );
        Ok(())
    }

    fn line(
        &mut self,
        line: &str,
        file: &str,
        line_no: u64,
        batch: &mut BatchTransaction<'s, S>,
    ) -> Result<LineOutcome, ImportError> {
        if line.trim().is_empty() {
            return Ok(LineOutcome::Blank);
        }

        let entry = match parse_line(line) {
            Ok(entry) => entry,
            Err(e) => return Ok(LineOutcome::Skipped(LineError::Parse(e))),
        };
        if !entry.has_host() {
            return Ok(LineOutcome::NoHost);
        }
        if !self.filter.keep(&entry.request.target) {
            return Ok(LineOutcome::Noise);
        }

        let visitor = self
            .registry
            .get_or_create(&entry.host, entry.timestamp.with_timezone(&Utc))?;
        if self.registry.is_ignored(&visitor, &entry.host) {
            return Ok(LineOutcome::Ignored);
        }

        let visit = Visit::from(&entry);
        let registry = &self.registry;
        let written = batch.isolate(|store| {
            store.insert_visit(&visit)?;
            registry.increment_count(&visit.ip)
        });
        if let Err(e) = written {
            return Ok(LineOutcome::Skipped(LineError::Persist(e)));
        }

        if let Err(e) = self.ledger.record(&visit.user_agent) {
            warn!(file, line = line_no, error = %e, "user agent not counted");
        }

        batch.record_written()?;
        Ok(LineOutcome::Recorded)
    }
}
