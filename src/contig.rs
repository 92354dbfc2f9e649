use thiserror::Error;

/// Position of the contig length within an `_`-split SPAdes identifier.
const LENGTH_FIELD: usize = 3;
/// Position of the k-mer coverage within an `_`-split SPAdes identifier.
const COVERAGE_FIELD: usize = 5;

/// A single FASTA record from an assembly.
///
/// # Fields
///
/// * `id` - The first whitespace-delimited token of the header line
/// * `desc` - The remainder of the header line, if any
/// * `seq` - The raw nucleotide sequence, exactly as read
#[derive(Debug, Clone, PartialEq)]
pub struct Contig {
    pub id: String,
    pub desc: Option<String>,
    pub seq: Vec<u8>,
}

impl Contig {
    pub fn len(&self) -> usize {
        self.seq.len()
    }

    /// Extracts the length and coverage encoded in this contig's identifier.
    pub fn metadata(&self) -> Result<ContigMetadata, MetadataError> {
        parse_metadata(&self.id)
    }
}

/// Length and coverage as reported by the assembler in the contig identifier.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ContigMetadata {
    pub length: u64,
    pub coverage: f64,
}

#[derive(Error, Debug, PartialEq)]
pub enum MetadataError {
    #[error(
        "identifier `{id}` has {count} `_`-separated fields, expected at least {expected}
the identifier should follow the SPAdes convention
    NODE_<index>_length_<length>_cov_<coverage>"
    )]
    TooFewFields {
        id: String,
        count: usize,
        expected: usize,
    },

    #[error("identifier `{id}` has a non-integer length field `{token}`")]
    InvalidLength { id: String, token: String },

    #[error("identifier `{id}` has a non-numeric coverage field `{token}`")]
    InvalidCoverage { id: String, token: String },
}

/// Parses the length and coverage out of a SPAdes contig identifier.
///
/// The identifier is split on `_`, and the fields at positions 3 and 5 are read as the
/// length and coverage respectively:
///
/// ```text
/// NODE_1_length_5000_cov_50.0
///  0   1   2     3    4   5
/// ```
///
/// This is purely positional. The labels at positions 0, 2 and 4 are not checked, so an
/// identifier from a different assembler that happens to carry numbers in those positions
/// will be read without complaint. Callers must only pass SPAdes-style identifiers.
///
/// # Errors
///
/// Returns a `MetadataError` if there are fewer than six fields, or if either field does
/// not parse as a number.
pub fn parse_metadata(id: &str) -> Result<ContigMetadata, MetadataError> {
    let fields: Vec<&str> = id.split('_').collect();

    if fields.len() <= COVERAGE_FIELD {
        return Err(MetadataError::TooFewFields {
            id: id.to_string(),
            count: fields.len(),
            expected: COVERAGE_FIELD + 1,
        });
    }

    let length = fields[LENGTH_FIELD]
        .parse::<u64>()
        .map_err(|_| MetadataError::InvalidLength {
            id: id.to_string(),
            token: fields[LENGTH_FIELD].to_string(),
        })?;

    let coverage = fields[COVERAGE_FIELD]
        .parse::<f64>()
        .map_err(|_| MetadataError::InvalidCoverage {
            id: id.to_string(),
            token: fields[COVERAGE_FIELD].to_string(),
        })?;

    Ok(ContigMetadata { length, coverage })
}
