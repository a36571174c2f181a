use std::fmt::Display;

/// Which marker of a range was never found.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Missing {
    Start,
    End,
    Both,
}

/// The elapsed time between the start and end marker of a range, in microseconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Delta {
    Resolved(i64),
    Unresolved(Missing),
    /// Both markers were found but `end - start` does not fit into an `i64`.
    Overflow,
}

impl Delta {
    pub fn between(start: Option<i64>, end: Option<i64>) -> Self {
        match (start, end) {
            (Some(start), Some(end)) => end
                .checked_sub(start)
                .map_or(Delta::Overflow, Delta::Resolved),
            (None, Some(_)) => Delta::Unresolved(Missing::Start),
            (Some(_), None) => Delta::Unresolved(Missing::End),
            (None, None) => Delta::Unresolved(Missing::Both),
        }
    }

    pub fn micros(&self) -> Option<i64> {
        match self {
            Delta::Resolved(micros) => Some(*micros),
            Delta::Unresolved(_) | Delta::Overflow => None,
        }
    }

    pub fn is_resolved(&self) -> bool {
        matches!(self, Delta::Resolved(_))
    }
}

impl Display for Delta {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Delta::Resolved(micros) => Millis(*micros).fmt(f),
            Delta::Unresolved(Missing::Start) => f.write_str("unresolved (start marker not found)"),
            Delta::Unresolved(Missing::End) => f.write_str("unresolved (end marker not found)"),
            Delta::Unresolved(Missing::Both) => {
                f.write_str("unresolved (start and end markers not found)")
            }
            Delta::Overflow => f.write_str("unresolved (delta out of range)"),
        }
    }
}

/// Displays a microsecond value as milliseconds, e.g. `1500` as `1.5ms` and `2000` as `2.0ms`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Millis(pub i64);

impl Display for Millis {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        // Debug keeps the trailing `.0` of whole numbers.
        write!(f, "{:?}ms", self.0 as f64 / 1000.0)
    }
}

#[test]
fn test_resolved_delta() {
    assert_eq!(Delta::between(Some(1000), Some(2500)), Delta::Resolved(1500));
    assert_eq!(Delta::between(Some(2500), Some(1000)), Delta::Resolved(-1500));
    assert_eq!(Delta::Resolved(1500).micros(), Some(1500));
}

#[test]
fn test_unresolved_delta_is_never_zero() {
    let delta = Delta::between(None, None);
    assert_eq!(delta, Delta::Unresolved(Missing::Both));
    assert_eq!(delta.micros(), None);
    assert!(!delta.is_resolved());
    assert_eq!(Delta::between(None, Some(5)), Delta::Unresolved(Missing::Start));
    assert_eq!(Delta::between(Some(5), None), Delta::Unresolved(Missing::End));
}

#[test]
fn test_overflowing_delta_is_not_a_number() {
    let delta = Delta::between(Some(i64::MIN), Some(i64::MAX));
    assert_eq!(delta, Delta::Overflow);
    assert_eq!(delta.micros(), None);
    assert!(!delta.is_resolved());
    assert_eq!(delta.to_string(), "unresolved (delta out of range)");
    assert_eq!(
        Delta::between(Some(i64::MIN + 1), Some(0)),
        Delta::Resolved(i64::MAX)
    );
}

#[test]
fn test_display_millis() {
    assert_eq!(Delta::Resolved(1500).to_string(), "1.5ms");
    assert_eq!(Delta::Resolved(1300).to_string(), "1.3ms");
    assert_eq!(Delta::Resolved(2000).to_string(), "2.0ms");
    assert_eq!(Delta::Resolved(0).to_string(), "0.0ms");
    assert_eq!(Delta::Resolved(-300).to_string(), "-0.3ms");
    assert_eq!(Delta::Resolved(1).to_string(), "0.001ms");
}

#[test]
fn test_display_unresolved() {
    assert_eq!(
        Delta::Unresolved(Missing::End).to_string(),
        "unresolved (end marker not found)"
    );
    assert_eq!(
        Delta::Unresolved(Missing::Both).to_string(),
        "unresolved (start and end markers not found)"
    );
}
