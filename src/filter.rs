use crate::contig::ContigMetadata;
use crate::gc::gc_content;
use serde::Serialize;
use std::fmt;

/// The bounds a contig must satisfy to be kept. Every bound uses `0` to mean "disabled",
/// so a contig whose real length, coverage or GC content is 0 can never be filtered on
/// that criterion.
#[derive(Debug, Clone, Copy, Default, PartialEq, Serialize)]
pub struct Thresholds {
    pub min_length: u64,
    pub min_cov: f64,
    pub max_cov: f64,
    pub min_gc: f64,
    pub max_gc: f64,
}

/// The predicate which rejected a contig.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Criterion {
    MinLength,
    MinCoverage,
    MaxCoverage,
    MinGc,
    MaxGc,
}

impl Criterion {
    pub const ALL: [Criterion; 5] = [
        Criterion::MinLength,
        Criterion::MinCoverage,
        Criterion::MaxCoverage,
        Criterion::MinGc,
        Criterion::MaxGc,
    ];

    /// Short name used as a key in the run summary.
    pub fn key(&self) -> &'static str {
        match self {
            Criterion::MinLength => "min_length",
            Criterion::MinCoverage => "min_coverage",
            Criterion::MaxCoverage => "max_coverage",
            Criterion::MinGc => "min_gc",
            Criterion::MaxGc => "max_gc",
        }
    }
}

impl fmt::Display for Criterion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            Criterion::MinLength => "minimum length",
            Criterion::MinCoverage => "minimum coverage",
            Criterion::MaxCoverage => "maximum coverage",
            Criterion::MinGc => "minimum GC",
            Criterion::MaxGc => "maximum GC",
        };
        write!(f, "{s}")
    }
}

/// `value >= bound`, or always true if the bound is 0.
fn at_least<T: PartialOrd + Default>(value: T, bound: T) -> bool {
    bound == T::default() || value >= bound
}

/// `value <= bound`, or always true if the bound is 0.
fn at_most<T: PartialOrd + Default>(value: T, bound: T) -> bool {
    bound == T::default() || value <= bound
}

impl Thresholds {
    /// True if no bound is active, in which case every contig is kept.
    pub fn is_disabled(&self) -> bool {
        *self == Thresholds::default()
    }

    fn gc_active(&self) -> bool {
        self.min_gc != 0.0 || self.max_gc != 0.0
    }

    /// Evaluates every active bound against a contig, in the order length, minimum
    /// coverage, maximum coverage, minimum GC, maximum GC.
    ///
    /// # Returns
    ///
    /// `None` if the contig passes every bound, otherwise the first criterion it fails.
    /// GC content is only calculated if a GC bound is active.
    pub fn evaluate(&self, meta: &ContigMetadata, seq: &[u8]) -> Option<Criterion> {
        if !at_least(meta.length, self.min_length) {
            return Some(Criterion::MinLength);
        }
        if !at_least(meta.coverage, self.min_cov) {
            return Some(Criterion::MinCoverage);
        }
        if !at_most(meta.coverage, self.max_cov) {
            return Some(Criterion::MaxCoverage);
        }

        if self.gc_active() {
            let gc = gc_content(seq);
            if !at_least(gc, self.min_gc) {
                return Some(Criterion::MinGc);
            }
            if !at_most(gc, self.max_gc) {
                return Some(Criterion::MaxGc);
            }
        }

        None
    }

    /// Lists the bound pairs where both ends are active but the minimum exceeds the
    /// maximum. No contig can pass such a pair.
    pub fn conflicts(&self) -> Vec<(Criterion, Criterion)> {
        let mut conflicts = Vec::new();
        if self.min_cov != 0.0 && self.max_cov != 0.0 && self.min_cov > self.max_cov {
            conflicts.push((Criterion::MinCoverage, Criterion::MaxCoverage));
        }
        if self.min_gc != 0.0 && self.max_gc != 0.0 && self.min_gc > self.max_gc {
            conflicts.push((Criterion::MinGc, Criterion::MaxGc));
        }
        conflicts
    }
}

impl fmt::Display for Thresholds {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        fn bound<T: fmt::Display + PartialEq + Default>(v: T) -> String {
            if v == T::default() {
                "off".to_string()
            } else {
                v.to_string()
            }
        }

        write!(
            f,
            "length >= {}, coverage in [{}, {}], GC% in [{}, {}]",
            bound(self.min_length),
            bound(self.min_cov),
            bound(self.max_cov),
            bound(self.min_gc),
            bound(self.max_gc),
        )
    }
}
