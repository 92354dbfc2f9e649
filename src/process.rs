use crate::filter::Thresholds;
use crate::io::{ContigReader, ContigWriter};
use crate::summary::FilterSummary;

use anyhow::{Context, Result};

/// Filters the contigs of a FASTA file, writing those which pass every active threshold
/// to the output file in their original order.
///
/// # Arguments
///
/// * `input` - Path to the input FASTA, whose identifiers follow the SPAdes
///   `NODE_<index>_length_<length>_cov_<coverage>` convention
/// * `output` - Path to the output FASTA
/// * `thresholds` - The bounds to apply
/// * `line_width` - Bases per output sequence line, or `0` for no wrapping
/// * `summary_path` - Where to write the JSON run summary, if anywhere. It is written before
///   the output is put in place, so a failure here also leaves no output file.
///
/// # Errors
///
/// This function will return an error, without creating the output file, if:
/// * The input file cannot be opened or contains a malformed FASTA record.
/// * The output directory is not writable.
/// * Any identifier does not carry a parseable length and coverage.
/// * The summary file cannot be written.
pub fn filter_contigs(
    input: &str,
    output: &str,
    thresholds: &Thresholds,
    line_width: usize,
    summary_path: Option<&str>,
) -> Result<FilterSummary> {
    let start = std::time::Instant::now();

    let reader = ContigReader::from_path(input)?;
    let mut writer = ContigWriter::create(output, line_width)?;
    let mut summary = FilterSummary::new(input, output, *thresholds);

    for (idx, contig) in reader.enumerate() {
        let contig = contig?;
        let meta = contig
            .metadata()
            .with_context(|| format!("Malformed identifier for record {} in {input}", idx + 1))?;

        match thresholds.evaluate(&meta, &contig.seq) {
            None => {
                writer
                    .write(&contig)
                    .with_context(|| format!("Unable to write record {}", contig.id))?;
                summary.record_kept(contig.len());
            }
            Some(criterion) => {
                debug!("Rejected {} ({criterion})", contig.id);
                summary.record_rejected(contig.len(), criterion);
            }
        }
    }

    summary.elapsed = start.elapsed().as_secs_f64();
    if let Some(path) = summary_path {
        summary.write_json(path)?;
        info!("Wrote summary to {path}");
    }

    writer.finish()?;
    Ok(summary)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::filter::Criterion;
    use indoc::indoc;

    const CONTIGS: &str = indoc! {"
        >NODE_1_length_100_cov_2.0
        ACGTACGTAA
        >NODE_2_length_5000_cov_50.0
        GGGGCCCCAT
        >NODE_3_length_200_cov_10.0
        ACGTACGTAC
    "};

    #[test]
    fn keeps_only_passing_contigs() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("contigs.fasta");
        let output = dir.path().join("filtered.fasta");
        std::fs::write(&input, CONTIGS).unwrap();

        let thresholds = Thresholds {
            min_length: 150,
            min_cov: 5.0,
            ..Default::default()
        };
        let summary = filter_contigs(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            &thresholds,
            60,
            None,
        )
        .unwrap();

        assert_eq!(
            std::fs::read_to_string(&output).unwrap(),
            ">NODE_2_length_5000_cov_50.0\nGGGGCCCCAT\n"
        );
        assert_eq!(summary.contigs_read, 3);
        assert_eq!(summary.contigs_kept, 1);
        assert_eq!(summary.rejected_by(Criterion::MinLength), 1);
        assert_eq!(summary.rejected_by(Criterion::MinCoverage), 1);
    }

    #[test]
    fn malformed_identifier_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("contigs.fasta");
        let output = dir.path().join("filtered.fasta");
        std::fs::write(&input, ">NODE_1_length_4_cov_1.0\nACGT\n>scaffold_7\nACGT\n").unwrap();

        let err = filter_contigs(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            &Thresholds::default(),
            60,
            None,
        )
        .unwrap_err();

        assert!(err.to_string().contains("record 2"));
        assert!(format!("{err:#}").contains("scaffold_7"));
        assert!(!output.exists());
    }

    #[test]
    fn unwritable_summary_leaves_no_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("contigs.fasta");
        let output = dir.path().join("filtered.fasta");
        let summary = dir.path().join("missing").join("summary.json");
        std::fs::write(&input, CONTIGS).unwrap();

        let err = filter_contigs(
            input.to_str().unwrap(),
            output.to_str().unwrap(),
            &Thresholds::default(),
            60,
            summary.to_str(),
        )
        .unwrap_err();

        assert!(err.to_string().contains("Unable to create summary file"));
        assert!(!output.exists());
    }
}
