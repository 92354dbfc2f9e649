use crate::filter::{Criterion, Thresholds};
use anyhow::{Context, Result};
use serde::Serialize;
use std::collections::BTreeMap;

/// Statistics about a single filtering run.
#[derive(Serialize, Debug, Clone)]
pub struct FilterSummary {
    pub version: String,
    pub run_date: String,
    pub input: String,
    pub output: String,
    pub thresholds: Thresholds,
    pub contigs_read: usize,
    pub contigs_kept: usize,
    pub bases_read: usize,
    pub bases_kept: usize,
    /// Number of contigs rejected by each criterion. A contig failing several criteria
    /// is only counted against the first, in evaluation order.
    pub rejected: BTreeMap<&'static str, usize>,
    pub elapsed: f64,
}

impl FilterSummary {
    pub fn new(input: &str, output: &str, thresholds: Thresholds) -> Self {
        let rejected = Criterion::ALL
            .iter()
            .map(|c| (c.key(), 0))
            .collect();

        FilterSummary {
            version: crate::cli::VERSION.to_string(),
            run_date: format!("{:?}", chrono::offset::Local::now()),
            input: input.to_string(),
            output: output.to_string(),
            thresholds,
            contigs_read: 0,
            contigs_kept: 0,
            bases_read: 0,
            bases_kept: 0,
            rejected,
            elapsed: 0.0,
        }
    }

    pub fn record_kept(&mut self, bases: usize) {
        self.contigs_read += 1;
        self.bases_read += bases;
        self.contigs_kept += 1;
        self.bases_kept += bases;
    }

    pub fn record_rejected(&mut self, bases: usize, criterion: Criterion) {
        self.contigs_read += 1;
        self.bases_read += bases;
        *self.rejected.entry(criterion.key()).or_insert(0) += 1;
    }

    pub fn rejected_by(&self, criterion: Criterion) -> usize {
        self.rejected
            .get(criterion.key())
            .copied()
            .unwrap_or(0)
    }

    /// Logs the statistics of the run at `info` level.
    pub fn log(&self) {
        info!(
            "Stats: {} of {} contigs kept ({} of {} bases), {:.2}s runtime",
            self.contigs_kept, self.contigs_read, self.bases_kept, self.bases_read, self.elapsed
        );

        for criterion in Criterion::ALL {
            let n = self.rejected_by(criterion);
            if n > 0 {
                info!("  {n} rejected by {criterion}");
            }
        }
    }

    /// Writes the summary as pretty-printed JSON.
    pub fn write_json(&self, path: &str) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Unable to create summary file {path}"))?;
        serde_json::to_writer_pretty(file, self).context("Could not serialize summary")?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn counts() {
        let mut summary = FilterSummary::new("in.fasta", "out.fasta", Thresholds::default());
        summary.record_kept(100);
        summary.record_rejected(50, Criterion::MinCoverage);
        summary.record_rejected(20, Criterion::MinCoverage);
        summary.record_rejected(10, Criterion::MaxGc);

        assert_eq!(summary.contigs_read, 4);
        assert_eq!(summary.contigs_kept, 1);
        assert_eq!(summary.bases_read, 180);
        assert_eq!(summary.bases_kept, 100);
        assert_eq!(summary.rejected_by(Criterion::MinCoverage), 2);
        assert_eq!(summary.rejected_by(Criterion::MaxGc), 1);
        assert_eq!(summary.rejected_by(Criterion::MinLength), 0);
    }

    #[test]
    fn serializes_criteria_by_key() {
        let summary = FilterSummary::new("in.fasta", "out.fasta", Thresholds::default());
        let json = serde_json::to_value(&summary).unwrap();

        assert_eq!(json["rejected"]["min_coverage"], 0);
        assert_eq!(json["rejected"]["max_gc"], 0);
        assert_eq!(json["thresholds"]["min_length"], 0);
    }
}
