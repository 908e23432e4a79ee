use std::cmp::Ordering;
use std::num::ParseIntError;

use tracing::debug;

/// Outcome of a version comparison.
///
/// `Normal` carries the ordering produced by numeric segment comparison.
/// `Fallback` carries a plain lexicographic ordering of the raw strings,
/// used when the strict numeric path cannot represent a segment (a digit
/// run larger than `u64::MAX`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Comparison {
    Normal(Ordering),
    Fallback(Ordering),
}

impl Comparison {
    /// The ordering, regardless of which path produced it.
    pub fn ordering(self) -> Ordering {
        match self {
            Comparison::Normal(ordering) | Comparison::Fallback(ordering) => ordering,
        }
    }
}

/// Longest leading run of ASCII digits in a segment.
fn leading_digits(segment: &str) -> &str {
    let end = segment
        .find(|c: char| !c.is_ascii_digit())
        .unwrap_or(segment.len());
    &segment[..end]
}

/// Reduce a dotted version string to one integer per segment.
///
/// Each segment contributes its leading digit run; everything from the first
/// non-digit on is discarded ("2rc1" -> 2, "rc1" -> 0). A segment whose digit
/// run cannot be parsed contributes 0. Total over all inputs: one element per
/// segment, `""` -> `[0]`.
pub fn normalize(version: &str) -> Vec<u64> {
    version
        .split('.')
        .map(|segment| leading_digits(segment).parse().unwrap_or(0))
        .collect()
}

/// Strict variant of [`normalize`] used by [`compare`]: a digit run that
/// overflows `u64` is an error instead of 0, so the caller can fall back.
fn normalize_strict(version: &str) -> Result<Vec<u64>, ParseIntError> {
    version
        .split('.')
        .map(|segment| {
            let digits = leading_digits(segment);
            if digits.is_empty() { Ok(0) } else { digits.parse() }
        })
        .collect()
}

/// Compare two version strings numerically, segment by segment.
///
/// Both operands are normalized and compared positionally, with the shorter
/// sequence padded with trailing zeros, so "1.2" == "1.2.0" and
/// "1.9.0" < "1.10.0". If either operand defeats strict normalization the
/// raw strings are compared lexicographically instead.
pub fn compare(v1: &str, v2: &str) -> Comparison {
    match (normalize_strict(v1), normalize_strict(v2)) {
        (Ok(parts1), Ok(parts2)) => {
            let len = parts1.len().max(parts2.len());
            for i in 0..len {
                let p1 = parts1.get(i).copied().unwrap_or(0);
                let p2 = parts2.get(i).copied().unwrap_or(0);
                match p1.cmp(&p2) {
                    Ordering::Equal => continue,
                    ordering => return Comparison::Normal(ordering),
                }
            }
            Comparison::Normal(Ordering::Equal)
        }
        (Err(e), _) | (_, Err(e)) => {
            debug!("Numeric comparison of {v1:?} and {v2:?} failed ({e}), comparing lexicographically");
            Comparison::Fallback(v1.cmp(v2))
        }
    }
}
