/// Calculates the GC content of a sequence, as a percentage between 0 and 100.
///
/// `G`, `C` and the IUPAC code `S` (G or C) are counted in either case. The denominator is
/// the full sequence length, so ambiguous bases such as `N` dilute the result rather than
/// being excluded.
///
/// An empty sequence has a GC content of 0.
pub fn gc_content(seq: &[u8]) -> f64 {
    if seq.is_empty() {
        return 0.0;
    }

    let gc = seq
        .iter()
        .filter(|b| matches!(b, b'G' | b'C' | b'S' | b'g' | b'c' | b's'))
        .count();

    (gc as f64) * 100.0 / (seq.len() as f64)
}

#[cfg(test)]
mod tests {
    use super::gc_content;

    #[test]
    fn empty() {
        assert_eq!(gc_content(b""), 0.0);
    }

    #[test]
    fn all_gc() {
        assert_eq!(gc_content(b"GCGCGGCC"), 100.0);
    }

    #[test]
    fn no_gc() {
        assert_eq!(gc_content(b"ATATTA"), 0.0);
    }

    #[test]
    fn half() {
        assert_eq!(gc_content(b"ACGT"), 50.0);
    }

    #[test]
    fn lowercase_and_strong() {
        assert_eq!(gc_content(b"gcSs"), 100.0);
        assert_eq!(gc_content(b"acgt"), 50.0);
    }

    #[test]
    fn ambiguous_bases_count_towards_length() {
        assert_eq!(gc_content(b"GCNN"), 50.0);
        assert_eq!(gc_content(b"NNNN"), 0.0);
    }
}
