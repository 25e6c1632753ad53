//! # Three-Line Element Record Parser
//!
//! Utilities to split a flat sequence of Space-Track response lines into
//! **3LE records** (name line, element line 1, element line 2) exposed as
//! three parallel ordered sequences.
//!
//! ## Overview
//! -----------------
//! A 3LE payload interleaves one name line and two element lines per object:
//!
//! ```text
//! 0 ISS (ZARYA)
//! 1 25544U 98067A   20194.88612269 -.00002218  00000-0 -31515-4 0  9992
//! 2 25544  51.6461 221.2784 0001413  89.1723 280.4612 15.49507896236008
//! ```
//!
//! The name line carries a two-character `0 ` line-number prefix from the
//! source format, which is stripped here. Splitting uses integer-division
//! semantics: a trailing partial record (one or two lines) is **silently
//! dropped** rather than rejected.
//!
//! ## See also
//! ------------
//! * [`crate::orbital_state`] – Consumes the element-line pairs produced here.

use itertools::Itertools;

/// Number of characters prefixed to every 3LE name line.
const NAME_PREFIX_LEN: usize = 2;

/// Parsed 3LE payload: three parallel sequences of equal length, one entry
/// per complete record.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ThreeLineSet {
    /// Object names, with the two-character line prefix removed.
    pub names: Vec<String>,
    /// First element lines, verbatim.
    pub line1: Vec<String>,
    /// Second element lines, verbatim.
    pub line2: Vec<String>,
}

impl ThreeLineSet {
    /// Split a line sequence into 3LE records.
    ///
    /// Arguments
    /// -----------------
    /// * `lines`: the response body split into lines, in payload order.
    ///
    /// Return
    /// ----------
    /// * A [`ThreeLineSet`] with `lines.len() / 3` entries per sequence.
    ///   Trailing lines that do not form a complete triplet are dropped.
    pub fn from_lines(lines: &[String]) -> Self {
        let mut set = ThreeLineSet::default();
        for (name, line1, line2) in lines.iter().tuples() {
            set.names
                .push(name.get(NAME_PREFIX_LEN..).unwrap_or_default().to_string());
            set.line1.push(line1.clone());
            set.line2.push(line2.clone());
        }
        set
    }

    /// Number of complete records in the set.
    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Iterate over the element-line pairs, in payload order.
    pub fn element_pairs(&self) -> impl Iterator<Item = (&str, &str)> {
        self.line1
            .iter()
            .zip(self.line2.iter())
            .map(|(l1, l2)| (l1.as_str(), l2.as_str()))
    }
}

#[cfg(test)]
mod three_line_test {
    use super::*;

    fn payload(lines: &[&str]) -> Vec<String> {
        lines.iter().map(|l| l.to_string()).collect()
    }

    #[test]
    fn test_from_lines_complete_triplets() {
        let lines = payload(&[
            "0 ISS (ZARYA)",
            "1 25544U ...",
            "2 25544 ...",
            "0 NOAA 19",
            "1 33591U ...",
            "2 33591 ...",
        ]);

        let set = ThreeLineSet::from_lines(&lines);
        assert_eq!(set.len(), 2);
        assert_eq!(set.names, vec!["ISS (ZARYA)", "NOAA 19"]);
        assert_eq!(set.line1, vec!["1 25544U ...", "1 33591U ..."]);
        assert_eq!(set.line2, vec!["2 25544 ...", "2 33591 ..."]);
    }

    #[test]
    fn test_from_lines_drops_trailing_partial_record() {
        let lines = payload(&[
            "0 ISS (ZARYA)",
            "1 25544U ...",
            "2 25544 ...",
            "0 NOAA 19",
            "1 33591U ...",
            "2 33591 ...",
            "0 ORPHAN",
        ]);

        let set = ThreeLineSet::from_lines(&lines);
        assert_eq!(set.len(), 2);
        assert!(!set.names.contains(&"ORPHAN".to_string()));

        let pairs: Vec<_> = set.element_pairs().collect();
        assert_eq!(
            pairs,
            vec![
                ("1 25544U ...", "2 25544 ..."),
                ("1 33591U ...", "2 33591 ..."),
            ]
        );
    }

    #[test]
    fn test_from_lines_empty_input() {
        let set = ThreeLineSet::from_lines(&[]);
        assert!(set.is_empty());
        assert_eq!(set.element_pairs().count(), 0);
    }

    #[test]
    fn test_short_name_line_strips_to_empty() {
        let lines = payload(&["0", "1 25544U ...", "2 25544 ..."]);
        let set = ThreeLineSet::from_lines(&lines);
        assert_eq!(set.names, vec![""]);
    }
}
