use crate::contig::Contig;
use anyhow::{Context, Result};
use bio::io::fasta;
use std::fs::File;
use std::io::{BufReader, BufWriter, Seek, SeekFrom, Write};
use std::path::PathBuf;
use tempfile::tempfile_in;

/// Default number of bases per sequence line in the output.
pub const DEFAULT_LINE_WIDTH: usize = 60;

/// Iterates over the records of a FASTA file, in file order.
pub struct ContigReader {
    records: fasta::Records<BufReader<File>>,
    path: String,
    count: usize,
}

impl ContigReader {
    /// Opens a FASTA file for reading.
    ///
    /// # Errors
    ///
    /// Returns an error if the file does not exist or cannot be opened.
    pub fn from_path(path: &str) -> Result<Self> {
        let file = File::open(path).with_context(|| format!("Unable to open input file {path}"))?;

        Ok(ContigReader {
            records: fasta::Reader::new(file).records(),
            path: path.to_string(),
            count: 0,
        })
    }
}

impl Iterator for ContigReader {
    type Item = Result<Contig>;

    fn next(&mut self) -> Option<Self::Item> {
        let record = self.records.next()?;
        self.count += 1;

        Some(
            record
                .with_context(|| format!("Unable to read record {} of {}", self.count, self.path))
                .map(|rec| Contig {
                    id: rec.id().to_string(),
                    desc: rec.desc().map(|d| d.to_string()),
                    seq: rec.seq().to_vec(),
                }),
        )
    }
}

/// Writes FASTA records into an anonymous temporary file in the output directory, which is
/// only copied onto the output path by `finish`. If the writer is dropped without finishing,
/// the temporary file disappears and the output path is never created.
///
/// The output itself is opened with `File::create`, so a new file follows the process umask
/// and an existing file keeps its permissions.
pub struct ContigWriter {
    wtr: BufWriter<File>,
    out_file: PathBuf,
    line_width: usize,
}

impl ContigWriter {
    /// Creates a writer for the given output path.
    ///
    /// # Arguments
    ///
    /// * `path` - The final output path
    /// * `line_width` - The number of bases per sequence line. `0` writes each sequence on a
    ///   single line.
    ///
    /// # Errors
    ///
    /// Returns an error if a temporary file cannot be created in the output directory, for
    /// example if the directory does not exist or is not writable.
    pub fn create(path: &str, line_width: usize) -> Result<Self> {
        // get the directory of the output file
        let out_file = std::path::absolute(path)
            .with_context(|| format!("Invalid output path {path}"))?;
        let mut tempfile_dir = out_file.clone();
        tempfile_dir.pop();

        // create a temporary file at this directory
        let temp_file = tempfile_in(&tempfile_dir).with_context(|| {
            format!("Unable to create output file in {}", tempfile_dir.display())
        })?;

        Ok(ContigWriter {
            wtr: BufWriter::new(temp_file),
            out_file,
            line_width,
        })
    }

    /// Writes a single record as a `>id desc` header followed by its wrapped sequence.
    pub fn write(&mut self, contig: &Contig) -> std::io::Result<()> {
        write_record(&mut self.wtr, contig, self.line_width)
    }

    /// Flushes all records and copies the temporary file onto the output path. If the copy
    /// fails part way, the incomplete output is removed.
    pub fn finish(self) -> Result<()> {
        let mut temp_file = self
            .wtr
            .into_inner()
            .map_err(|e| e.into_error())
            .context("Unable to flush output")?;
        temp_file.seek(SeekFrom::Start(0))?;

        let copied = File::create(&self.out_file).and_then(|mut wtr_out| {
            std::io::copy(&mut temp_file, &mut wtr_out)?;
            wtr_out.flush()
        });

        if let Err(e) = copied {
            let _ = std::fs::remove_file(&self.out_file);
            return Err(e).with_context(|| {
                format!("Unable to write output file {}", self.out_file.display())
            });
        }

        Ok(())
    }
}

/// Formats a contig as a FASTA record and writes it to the provided writer.
///
/// # Arguments
///
/// * `writer` - Any `std::io::Write`. A `std::io::Cursor` is acceptable for in-memory output.
/// * `contig` - The record to write
/// * `line_width` - The number of bases per line, or `0` for no wrapping
///
/// The header is rebuilt from the id and description joined by a single space, so any other
/// whitespace separating them in the input (a tab, or several spaces) is normalised.
pub fn write_record(
    writer: &mut impl Write,
    contig: &Contig,
    line_width: usize,
) -> std::io::Result<()> {
    match &contig.desc {
        Some(desc) => writeln!(writer, ">{} {}", contig.id, desc)?,
        None => writeln!(writer, ">{}", contig.id)?,
    }

    if line_width == 0 {
        writer.write_all(&contig.seq)?;
        writer.write_all(b"\n")?;
        return Ok(());
    }

    for line in contig.seq.chunks(line_width) {
        writer.write_all(line)?;
        writer.write_all(b"\n")?;
    }

    Ok(())
}
