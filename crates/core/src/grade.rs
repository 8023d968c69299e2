//! Bouldering grade parsing and comparison (V-scale).
//!
//! Grades are stored as free-form strings. Anything that is not a
//! recognizable `V<n>` grade (including the `？` placeholder the editor uses
//! for unconfirmed grades) parses as [`Grade::Unknown`] and sorts last.

use std::cmp::Ordering;
use std::fmt;
use std::sync::LazyLock;

use regex::Regex;

/// Hardest grade on the V-scale.
pub const MAX_V_GRADE: u8 = 17;

/// Placeholder the editor stores for unconfirmed grades.
pub const UNKNOWN_GRADE: &str = "？";

static V_GRADE_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[Vv](\d{1,2})$").expect("valid regex"));

/// A parsed bouldering grade.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Grade {
    V(u8),
    Unknown,
}

impl Grade {
    /// Parse a grade string. Never fails; unrecognized input is `Unknown`.
    pub fn parse(s: &str) -> Self {
        V_GRADE_RE
            .captures(s.trim())
            .and_then(|caps| caps[1].parse::<u8>().ok())
            .filter(|n| *n <= MAX_V_GRADE)
            .map_or(Self::Unknown, Self::V)
    }

    pub fn is_known(&self) -> bool {
        matches!(self, Self::V(_))
    }
}

impl fmt::Display for Grade {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::V(n) => write!(f, "V{n}"),
            Self::Unknown => f.write_str(UNKNOWN_GRADE),
        }
    }
}

/// Compare two grade strings by difficulty (unknown grades sort last).
pub fn compare_grades(a: &str, b: &str) -> Ordering {
    Grade::parse(a).cmp(&Grade::parse(b))
}

/// An inclusive difficulty filter. Open ends are unbounded.
///
/// Unknown grades only pass an unbounded range.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GradeRange {
    pub min: Option<Grade>,
    pub max: Option<Grade>,
}

impl GradeRange {
    pub fn new(min: Option<Grade>, max: Option<Grade>) -> Self {
        Self { min, max }
    }

    pub fn is_unbounded(&self) -> bool {
        self.min.is_none() && self.max.is_none()
    }

    pub fn contains(&self, grade: Grade) -> bool {
        if self.is_unbounded() {
            return true;
        }
        if !grade.is_known() {
            return false;
        }
        self.min.map_or(true, |min| grade >= min) && self.max.map_or(true, |max| grade <= max)
    }
}
