//! Download run statistics.

use crate::download::image::Outcome;

/// Per-outcome tallies for one download run.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct RunSummary {
    /// Records in the queue, including filename duplicates.
    pub queued: u64,
    /// Records dropped before dispatch because an earlier record had the same filename.
    pub duplicates: u64,
    pub downloaded: u64,
    pub skipped_existing: u64,
    pub skipped_invalid: u64,
    pub failed: u64,
}

impl RunSummary {
    /// Count one finished record.
    pub fn record(&mut self, outcome: &Outcome) {
        match outcome {
            Outcome::Downloaded(_) => self.downloaded += 1,
            Outcome::SkippedExisting => self.skipped_existing += 1,
            Outcome::SkippedInvalid => self.skipped_invalid += 1,
            Outcome::Failed(_) => self.failed += 1,
        }
    }

    /// Records that went through a worker.
    pub fn processed(&self) -> u64 {
        self.downloaded + self.skipped_existing + self.skipped_invalid + self.failed
    }

    /// Total skipped for any reason.
    pub fn skipped(&self) -> u64 {
        self.duplicates + self.skipped_existing + self.skipped_invalid
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn test_record_outcomes() {
        let mut summary = RunSummary {
            queued: 5,
            duplicates: 1,
            ..Default::default()
        };
        summary.record(&Outcome::Downloaded(PathBuf::from("a.jpg")));
        summary.record(&Outcome::SkippedExisting);
        summary.record(&Outcome::SkippedInvalid);
        summary.record(&Outcome::Failed("response code 404".into()));

        assert_eq!(summary.downloaded, 1);
        assert_eq!(summary.failed, 1);
        assert_eq!(summary.processed(), 4);
        assert_eq!(summary.skipped(), 3);
        assert_eq!(summary.processed() + summary.duplicates, summary.queued);
    }
}
