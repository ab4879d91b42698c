//! Selection helpers shared by every cascade level
//!
//! A selection is kept while it is still a candidate; otherwise it falls back
//! to the first candidate, or becomes unset when there are none.

use std::cmp::Ordering;
use std::collections::BTreeSet;

/// Keep `current` if it is in `candidates`, else take the first candidate
pub fn valid_value(current: Option<&str>, candidates: &[String]) -> Option<String> {
    match current {
        Some(value) if candidates.iter().any(|c| c == value) => Some(value.to_string()),
        _ => candidates.first().cloned(),
    }
}

/// Like [`valid_value`] but falls back to `default` instead of the first candidate
pub fn valid_value_or(
    current: Option<&str>,
    candidates: &[String],
    default: Option<&str>,
) -> Option<String> {
    match current {
        Some(value) if candidates.iter().any(|c| c == value) => Some(value.to_string()),
        _ => default.map(str::to_string),
    }
}

/// Sorted, de-duplicated copy of the given values
pub fn sorted_distinct<'a, I>(values: I) -> Vec<String>
where
    I: IntoIterator<Item = &'a str>,
{
    values
        .into_iter()
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

/// Which side(s) of a filtered record belong to the primary group
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum TileSide {
    P,
    Q,
    Both,
}

impl TileSide {
    /// Side selection implied by comparing the primary group to the other group
    pub fn from_comparison(comparison: Ordering) -> Self {
        match comparison {
            Ordering::Greater => TileSide::Q,
            Ordering::Less => TileSide::P,
            Ordering::Equal => TileSide::Both,
        }
    }

    pub fn includes_p(self) -> bool {
        matches!(self, TileSide::P | TileSide::Both)
    }

    pub fn includes_q(self) -> bool {
        matches!(self, TileSide::Q | TileSide::Both)
    }
}

/// Canonically ordered group pair (`p_group_id <= q_group_id`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct GroupOrder {
    pub p_group_id: String,
    pub q_group_id: String,
    /// Result of comparing the primary group against the other group
    pub comparison: Ordering,
}

impl GroupOrder {
    pub fn new(group_id: &str, other_group_id: &str) -> Self {
        let comparison = group_id.cmp(other_group_id);
        let (p, q) = if comparison == Ordering::Greater {
            (other_group_id, group_id)
        } else {
            (group_id, other_group_id)
        };
        Self {
            p_group_id: p.to_string(),
            q_group_id: q.to_string(),
            comparison,
        }
    }

    pub fn side(&self) -> TileSide {
        TileSide::from_comparison(self.comparison)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn list(values: &[&str]) -> Vec<String> {
        values.iter().map(|v| v.to_string()).collect()
    }

    #[test]
    fn test_valid_value_keeps_member() {
        assert_eq!(valid_value(Some("b"), &list(&["a", "b"])), Some("b".to_string()));
    }

    #[test]
    fn test_valid_value_falls_back_to_first() {
        assert_eq!(valid_value(Some("z"), &list(&["a", "b"])), Some("a".to_string()));
        assert_eq!(valid_value(None, &list(&["a", "b"])), Some("a".to_string()));
    }

    #[test]
    fn test_valid_value_empty_list_unsets() {
        assert_eq!(valid_value(Some("a"), &[]), None);
        assert_eq!(valid_value(None, &[]), None);
    }

    #[test]
    fn test_valid_value_or_uses_default() {
        assert_eq!(
            valid_value_or(Some("z"), &list(&["a", "b"]), Some("g")),
            Some("g".to_string())
        );
        assert_eq!(valid_value_or(None, &[], None), None);
        assert_eq!(
            valid_value_or(Some("b"), &list(&["a", "b"]), Some("g")),
            Some("b".to_string())
        );
    }

    #[test]
    fn test_sorted_distinct() {
        assert_eq!(sorted_distinct(["c", "a", "c", "b"]), list(&["a", "b", "c"]));
    }

    #[test]
    fn test_group_order() {
        let order = GroupOrder::new("B", "A");
        assert_eq!(order.p_group_id, "A");
        assert_eq!(order.q_group_id, "B");
        assert_eq!(order.comparison, Ordering::Greater);
        assert_eq!(order.side(), TileSide::Q);

        let order = GroupOrder::new("A", "B");
        assert_eq!((order.p_group_id.as_str(), order.q_group_id.as_str()), ("A", "B"));
        assert_eq!(order.side(), TileSide::P);

        let order = GroupOrder::new("A", "A");
        assert_eq!((order.p_group_id.as_str(), order.q_group_id.as_str()), ("A", "A"));
        assert_eq!(order.side(), TileSide::Both);
    }
}
