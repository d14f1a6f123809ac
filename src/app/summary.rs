use std::collections::BTreeMap;

use tracing::{debug, info, warn};

/// Totals for one run, logged when the sequence finishes.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct RunSummary {
    pub attempted: usize,
    pub answered: usize,
    pub failed: usize,
    pub statuses: BTreeMap<u16, usize>,
}

impl RunSummary {
    pub(crate) fn record_response(&mut self, status: u16) {
        self.attempted = self.attempted.saturating_add(1);
        self.answered = self.answered.saturating_add(1);
        let count = self.statuses.entry(status).or_insert(0);
        *count = count.saturating_add(1);
    }

    pub(crate) const fn record_failure(&mut self) {
        self.attempted = self.attempted.saturating_add(1);
        self.failed = self.failed.saturating_add(1);
    }

    pub(crate) fn log(&self) {
        if self.failed > 0 {
            warn!(
                "Finished {} requests: {} answered, {} failed.",
                self.attempted, self.answered, self.failed
            );
        } else {
            info!(
                "Finished {} requests: {} answered, {} failed.",
                self.attempted, self.answered, self.failed
            );
        }
        for (status, count) in &self.statuses {
            debug!("status {}: {}", status, count);
        }
    }
}
