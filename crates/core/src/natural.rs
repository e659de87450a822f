use std::cmp::Ordering;

/// One run of an identifier: either a maximal run of ASCII digits, compared
/// by magnitude, or a maximal run of anything else, compared as its
/// uppercased text.
///
/// Variant declaration order doubles as the tie-break when two keys hold
/// different kinds at the same position: a numeric run sorts before a text
/// run.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Segment {
    Number(u128),
    Text(String),
}

/// Order key for alphanumeric identifiers: `0.A9` sorts before `0.A10`
/// because the digit runs compare by magnitude, not character by character.
///
/// Keys compare segment by segment; when one key is a strict prefix of the
/// other, the shorter key sorts first. Leading zeros collapse into the
/// magnitude, so `A01` and `A1` produce equal keys (the values themselves
/// stay distinct entries).
///
/// # Examples
///
/// ```
/// use tabdiff_core::NaturalKey;
///
/// assert!(NaturalKey::from("0.A9") < NaturalKey::from("0.A10"));
/// assert!(NaturalKey::from("3A21") < NaturalKey::from("11F33"));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NaturalKey(Vec<Segment>);

impl NaturalKey {
    /// Split `value` into maximal alternating digit and non-digit runs,
    /// left to right.
    #[must_use]
    pub fn new(value: &str) -> Self {
        let mut segments = Vec::new();
        let mut run = String::new();
        let mut run_is_digits = false;

        for ch in value.chars() {
            let is_digit = ch.is_ascii_digit();
            if !run.is_empty() && is_digit != run_is_digits {
                segments.push(Segment::from_run(&run, run_is_digits));
                run.clear();
            }
            run_is_digits = is_digit;
            run.push(ch);
        }
        if !run.is_empty() {
            segments.push(Segment::from_run(&run, run_is_digits));
        }

        NaturalKey(segments)
    }

    #[must_use]
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

impl Segment {
    fn from_run(run: &str, is_digits: bool) -> Self {
        if is_digits {
            // digit runs longer than u128 saturate
            Segment::Number(run.parse().unwrap_or(u128::MAX))
        } else {
            Segment::Text(run.to_uppercase())
        }
    }
}

impl From<&str> for NaturalKey {
    fn from(value: &str) -> Self {
        NaturalKey::new(value)
    }
}

impl Ord for NaturalKey {
    fn cmp(&self, other: &Self) -> Ordering {
        self.0.cmp(&other.0)
    }
}

impl PartialOrd for NaturalKey {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

/// Sort values ascending by natural key.
pub fn sort_natural(values: &mut [String]) {
    values.sort_by_cached_key(|value| NaturalKey::new(value));
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_ascending(values: &[&str]) {
        for pair in values.windows(2) {
            assert!(
                NaturalKey::new(pair[0]) < NaturalKey::new(pair[1]),
                "expected {} < {}",
                pair[0],
                pair[1]
            );
        }
    }

    #[test]
    fn test_segmentation() {
        assert_eq!(
            NaturalKey::new("0.A01").segments(),
            [
                Segment::Number(0),
                Segment::Text(".A".to_string()),
                Segment::Number(1),
            ]
        );
        assert_eq!(
            NaturalKey::new("3A21").segments(),
            [
                Segment::Number(3),
                Segment::Text("A".to_string()),
                Segment::Number(21),
            ]
        );
    }

    #[test]
    fn test_reference_orderings() {
        assert_ascending(&["0.A9", "0.A10", "1.A01", "8.F49"]);
        assert_ascending(&["3A21", "11F33", "100A1"]);
    }

    #[test]
    fn test_digit_runs_compare_by_magnitude() {
        assert_ascending(&["B2", "B10"]);
        assert_ascending(&["A2B1", "A2B10", "A10B1"]);
    }

    #[test]
    fn test_leading_zeros_collapse() {
        assert_eq!(NaturalKey::new("A01"), NaturalKey::new("A1"));
        assert_eq!(NaturalKey::new("007"), NaturalKey::new("7"));
    }

    #[test]
    fn test_text_compares_uppercased() {
        assert_eq!(NaturalKey::new("a1"), NaturalKey::new("A1"));
        assert_ascending(&["A1", "b1"]);
    }

    #[test]
    fn test_numeric_sorts_before_text_at_same_position() {
        // "1" yields a Number where "A" yields a Text.
        assert_ascending(&["1", "A"]);
        assert_ascending(&["X.9", "X.A"]);
    }

    #[test]
    fn test_strict_prefix_sorts_first() {
        assert_ascending(&["A1", "A1B"]);
        assert_ascending(&["", "A"]);
    }

    #[test]
    fn test_total_order_is_transitive_on_mixed_input() {
        let mut values: Vec<String> = ["8.F49", "0.A10", "1.A01", "0.A9", "100A1", "3A21", "11F33"]
            .iter()
            .map(ToString::to_string)
            .collect();
        sort_natural(&mut values);
        assert_eq!(
            values,
            ["0.A9", "0.A10", "1.A01", "3A21", "8.F49", "11F33", "100A1"]
        );
    }

    #[test]
    fn test_oversized_digit_run_saturates() {
        let huge = "9".repeat(50);
        let key = NaturalKey::new(&huge);
        assert_eq!(key.segments(), [Segment::Number(u128::MAX)]);
        assert!(NaturalKey::new("123") < key);
    }
}
