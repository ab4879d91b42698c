//! Tile pair selection cascade
//!
//! The selection is a chain of dependent fields:
//!
//! `group_id -> other_group_id -> tile_date -> tile_column -> tile_suffix -> other_tile_id`
//!
//! Every field owns a candidate list derived from the fields above it and the
//! match corpus. [`PairSelectionState::reduce`] applies one [`PairEvent`] and
//! returns the next state with every downstream list recomputed and every
//! downstream value re-validated against its new list.

use std::cmp::Ordering;

use serde::{Deserialize, Serialize};

use super::matches::{tile_column, tile_date, tile_suffix, CanvasMatch};
use super::selection::{sorted_distinct, valid_value, valid_value_or, GroupOrder, TileSide};

/// A single change to the selection cascade
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum PairEvent {
    /// Primary group changed; clears everything derived from the old corpus
    GroupChanged(Option<String>),
    /// A new match corpus was loaded for the primary group
    MatchesLoaded,
    OtherGroupSelected(Option<String>),
    TileDateSelected(Option<String>),
    TileColumnSelected(Option<String>),
    TileSuffixSelected(Option<String>),
    OtherTileSelected(Option<String>),
}

/// Snapshot of the selection cascade
///
/// `filtered_match_indices` point into the corpus the state was reduced
/// against, restricted to the canonically ordered group pair.
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct PairSelectionState {
    pub group_id: Option<String>,
    pub other_group_id: Option<String>,
    pub tile_date: Option<String>,
    pub tile_column: Option<String>,
    pub tile_suffix: Option<String>,
    pub other_tile_id: Option<String>,

    pub group_id_list: Vec<String>,
    pub date_list: Vec<String>,
    pub column_list: Vec<String>,
    pub suffix_list: Vec<String>,
    pub other_tile_id_list: Vec<String>,

    pub filtered_match_indices: Vec<usize>,

    /// Primary group compared to the other group.
    /// Without an other group this stays `Greater`, so the q side is read.
    #[serde(with = "ordering_serde")]
    pub group_comparison: Ordering,
}

impl Default for PairSelectionState {
    fn default() -> Self {
        Self {
            group_id: None,
            other_group_id: None,
            tile_date: None,
            tile_column: None,
            tile_suffix: None,
            other_tile_id: None,
            group_id_list: Vec::new(),
            date_list: Vec::new(),
            column_list: Vec::new(),
            suffix_list: Vec::new(),
            other_tile_id_list: Vec::new(),
            filtered_match_indices: Vec::new(),
            group_comparison: Ordering::Greater,
        }
    }
}

impl PairSelectionState {
    /// Seed a cascade from previously selected values (e.g. from the page URL)
    pub fn seeded(
        group_id: Option<String>,
        other_group_id: Option<String>,
        tile_date: Option<String>,
        tile_column: Option<String>,
        tile_suffix: Option<String>,
        other_tile_id: Option<String>,
    ) -> Self {
        Self {
            group_id,
            other_group_id,
            tile_date,
            tile_column,
            tile_suffix,
            other_tile_id,
            ..Self::default()
        }
    }

    /// Full id of the primary tile (`date + column + suffix`)
    pub fn tile_id(&self) -> Option<String> {
        if self.tile_date.is_none() && self.tile_column.is_none() && self.tile_suffix.is_none() {
            return None;
        }
        Some(format!(
            "{}{}{}",
            self.tile_date.as_deref().unwrap_or(""),
            self.tile_column.as_deref().unwrap_or(""),
            self.tile_suffix.as_deref().unwrap_or("")
        ))
    }

    /// Which side(s) of a filtered record hold primary-group tiles
    pub fn primary_side(&self) -> TileSide {
        TileSide::from_comparison(self.group_comparison)
    }

    /// Apply one event, producing the next state
    pub fn reduce(self, event: PairEvent, corpus: &[CanvasMatch]) -> Self {
        match event {
            PairEvent::GroupChanged(group_id) => self.reset_for_group(group_id),
            PairEvent::MatchesLoaded => self.with_corpus(corpus),
            PairEvent::OtherGroupSelected(g) => self.with_other_group(g, corpus),
            PairEvent::TileDateSelected(d) => self.with_tile_date(d, corpus),
            PairEvent::TileColumnSelected(c) => self.with_tile_column(c, corpus),
            PairEvent::TileSuffixSelected(s) => self.with_tile_suffix(s, corpus),
            PairEvent::OtherTileSelected(t) => self.with_other_tile(t),
        }
    }

    // Downstream selections survive a group change so that they can be
    // re-validated once the new corpus arrives.
    fn reset_for_group(self, group_id: Option<String>) -> Self {
        Self {
            group_id,
            group_id_list: Vec::new(),
            date_list: Vec::new(),
            column_list: Vec::new(),
            suffix_list: Vec::new(),
            other_tile_id_list: Vec::new(),
            filtered_match_indices: Vec::new(),
            ..self
        }
    }

    fn with_corpus(mut self, corpus: &[CanvasMatch]) -> Self {
        self.group_id_list = sorted_distinct(
            corpus
                .iter()
                .flat_map(|m| [m.p_group_id.as_str(), m.q_group_id.as_str()]),
        );

        let other = valid_value_or(
            self.other_group_id.as_deref(),
            &self.group_id_list,
            self.group_id.as_deref(),
        );
        self.with_other_group(other, corpus)
    }

    fn with_other_group(mut self, other_group_id: Option<String>, corpus: &[CanvasMatch]) -> Self {
        self.other_group_id = other_group_id;
        self.filtered_match_indices.clear();

        let order = match (self.group_id.as_deref(), self.other_group_id.as_deref()) {
            (Some(group), Some(other)) => Some(GroupOrder::new(group, other)),
            _ => None,
        };

        match order {
            None => {
                self.group_comparison = Ordering::Greater;
                self.date_list = Vec::new();
            }
            Some(order) => {
                self.group_comparison = order.comparison;
                self.filtered_match_indices = corpus
                    .iter()
                    .enumerate()
                    .filter(|(_, m)| {
                        m.p_group_id == order.p_group_id && m.q_group_id == order.q_group_id
                    })
                    .map(|(i, _)| i)
                    .collect();

                let side = order.side();
                self.date_list = sorted_distinct(
                    self.filtered(corpus)
                        .flat_map(|m| side_ids(m, side))
                        .map(tile_date),
                );
            }
        }

        let date = valid_value(self.tile_date.as_deref(), &self.date_list);
        self.with_tile_date(date, corpus)
    }

    fn with_tile_date(mut self, tile_date_value: Option<String>, corpus: &[CanvasMatch]) -> Self {
        self.tile_date = tile_date_value;

        self.column_list = match self.tile_date.as_deref() {
            None => Vec::new(),
            Some(date) => {
                let side = self.primary_side();
                sorted_distinct(
                    self.filtered(corpus)
                        .flat_map(|m| side_ids(m, side))
                        .filter(|id| tile_date(id) == date)
                        .map(tile_column),
                )
            }
        };

        let column = valid_value(self.tile_column.as_deref(), &self.column_list);
        self.with_tile_column(column, corpus)
    }

    fn with_tile_column(mut self, column: Option<String>, corpus: &[CanvasMatch]) -> Self {
        self.tile_column = column;

        self.suffix_list = match (self.tile_date.as_deref(), self.tile_column.as_deref()) {
            (Some(date), Some(column)) => {
                let side = self.primary_side();
                sorted_distinct(
                    self.filtered(corpus)
                        .flat_map(|m| side_ids(m, side))
                        .filter(|id| tile_date(id) == date && tile_column(id) == column)
                        .map(tile_suffix),
                )
            }
            _ => Vec::new(),
        };

        let suffix = valid_value(self.tile_suffix.as_deref(), &self.suffix_list);
        self.with_tile_suffix(suffix, corpus)
    }

    fn with_tile_suffix(mut self, suffix: Option<String>, corpus: &[CanvasMatch]) -> Self {
        self.tile_suffix = suffix;

        let mut other_tiles: Vec<String> = match (&self.tile_suffix, self.tile_id()) {
            (Some(_), Some(tile_id)) => self
                .filtered(corpus)
                .filter_map(|m| m.other_tile(&tile_id))
                .map(str::to_string)
                .collect(),
            _ => Vec::new(),
        };
        other_tiles.sort();
        self.other_tile_id_list = other_tiles;

        let other_tile = valid_value(self.other_tile_id.as_deref(), &self.other_tile_id_list);
        self.with_other_tile(other_tile)
    }

    fn with_other_tile(mut self, other_tile_id: Option<String>) -> Self {
        self.other_tile_id = other_tile_id;
        self
    }

    /// Records between the selected groups
    pub fn filtered<'a>(&'a self, corpus: &'a [CanvasMatch]) -> impl Iterator<Item = &'a CanvasMatch> + 'a {
        self.filtered_match_indices
            .iter()
            .filter_map(move |&i| corpus.get(i))
    }
}

fn side_ids(m: &CanvasMatch, side: TileSide) -> impl Iterator<Item = &str> {
    let p = side.includes_p().then_some(m.p_id.as_str());
    let q = side.includes_q().then_some(m.q_id.as_str());
    p.into_iter().chain(q)
}

/// Serialises [`Ordering`] as the `-1/0/1` comparison result the page expects
mod ordering_serde {
    use std::cmp::Ordering;

    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(ordering: &Ordering, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_i8(*ordering as i8)
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Ordering, D::Error> {
        let value = i8::deserialize(deserializer)?;
        Ok(value.cmp(&0))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn corpus() -> Vec<CanvasMatch> {
        vec![
            CanvasMatch::new("A", "200101000000001xyz", "B", "200102000000002abc"),
            CanvasMatch::new("A", "200101000000001xyz", "B", "200102000000003abc"),
            CanvasMatch::new("A", "200101000000004pqr", "A", "200101000000001xyz"),
            CanvasMatch::new("B", "200102000000002abc", "C", "200103000000001zzz"),
        ]
    }

    fn loaded(group: &str, other: Option<&str>, corpus: &[CanvasMatch]) -> PairSelectionState {
        PairSelectionState::seeded(None, other.map(str::to_string), None, None, None, None)
            .reduce(PairEvent::GroupChanged(Some(group.to_string())), corpus)
            .reduce(PairEvent::MatchesLoaded, corpus)
    }

    #[test]
    fn test_group_changed_clears_derived_lists_only() {
        let corpus = corpus();
        let state = loaded("A", Some("B"), &corpus);
        assert!(!state.date_list.is_empty());

        let reset = state.reduce(PairEvent::GroupChanged(Some("C".to_string())), &corpus);
        assert_eq!(reset.group_id.as_deref(), Some("C"));
        assert!(reset.group_id_list.is_empty());
        assert!(reset.date_list.is_empty());
        assert!(reset.filtered_match_indices.is_empty());
        // cascade values are preserved for later re-validation
        assert_eq!(reset.other_group_id.as_deref(), Some("B"));
        assert_eq!(reset.tile_date.as_deref(), Some("200101000000"));
    }

    #[test]
    fn test_matches_loaded_defaults_other_group_to_primary() {
        let corpus = corpus();
        let state = loaded("A", Some("missing"), &corpus);
        assert_eq!(state.group_id_list, vec!["A", "B", "C"]);
        assert_eq!(state.other_group_id.as_deref(), Some("A"));
        assert_eq!(state.group_comparison, Ordering::Equal);
    }

    #[test]
    fn test_primary_less_than_other_reads_p_side() {
        let corpus = corpus();
        let state = loaded("A", Some("B"), &corpus);
        assert_eq!(state.group_comparison, Ordering::Less);
        assert_eq!(state.filtered_match_indices, vec![0, 1]);
        assert_eq!(state.date_list, vec!["200101000000"]);
        assert_eq!(state.column_list, vec!["001"]);
        assert_eq!(state.suffix_list, vec!["xyz"]);
        assert_eq!(state.tile_id().as_deref(), Some("200101000000001xyz"));
        assert_eq!(
            state.other_tile_id_list,
            vec!["200102000000002abc", "200102000000003abc"]
        );
        assert_eq!(state.other_tile_id.as_deref(), Some("200102000000002abc"));
    }

    #[test]
    fn test_primary_greater_than_other_reads_q_side() {
        let corpus = corpus();
        let state = loaded("B", Some("A"), &corpus);
        assert_eq!(state.group_comparison, Ordering::Greater);
        assert_eq!(state.date_list, vec!["200102000000"]);
        assert_eq!(state.column_list, vec!["002", "003"]);
        assert_eq!(state.suffix_list, vec!["abc"]);
        assert_eq!(state.tile_id().as_deref(), Some("200102000000002abc"));
        assert_eq!(state.other_tile_id_list, vec!["200101000000001xyz"]);
    }

    #[test]
    fn test_self_pair_reads_both_sides() {
        let corpus = corpus();
        let state = loaded("A", Some("A"), &corpus);
        assert_eq!(state.filtered_match_indices, vec![2]);
        assert_eq!(state.date_list, vec!["200101000000"]);
        assert_eq!(state.column_list, vec!["001", "004"]);
        assert_eq!(state.tile_column.as_deref(), Some("001"));
        assert_eq!(state.suffix_list, vec!["xyz"]);
        assert_eq!(state.other_tile_id_list, vec!["200101000000004pqr"]);

        let state = state.reduce(PairEvent::TileColumnSelected(Some("004".to_string())), &corpus);
        assert_eq!(state.suffix_list, vec!["pqr"]);
        assert_eq!(state.tile_suffix.as_deref(), Some("pqr"));
        assert_eq!(state.other_tile_id_list, vec!["200101000000001xyz"]);
        assert_eq!(state.other_tile_id.as_deref(), Some("200101000000001xyz"));
    }

    #[test]
    fn test_no_other_group_forces_greater_and_empties_cascade() {
        let corpus = corpus();
        let state = loaded("A", Some("B"), &corpus)
            .reduce(PairEvent::OtherGroupSelected(None), &corpus);
        assert_eq!(state.group_comparison, Ordering::Greater);
        assert!(state.filtered_match_indices.is_empty());
        assert!(state.date_list.is_empty());
        assert_eq!(state.tile_date, None);
        assert_eq!(state.tile_column, None);
        assert_eq!(state.tile_suffix, None);
        assert_eq!(state.other_tile_id, None);
        assert_eq!(state.tile_id(), None);
    }

    #[test]
    fn test_selecting_invalid_date_unsets_downstream_when_nothing_matches() {
        let corpus = corpus();
        let state = loaded("A", Some("B"), &corpus)
            .reduce(PairEvent::TileDateSelected(Some("209912312359".to_string())), &corpus);
        // an explicitly selected date is taken as-is
        assert_eq!(state.tile_date.as_deref(), Some("209912312359"));
        assert!(state.column_list.is_empty());
        assert_eq!(state.tile_column, None);
        assert!(state.other_tile_id_list.is_empty());
        assert_eq!(state.other_tile_id, None);
    }

    #[test]
    fn test_comparison_serializes_as_sign() {
        let corpus = corpus();
        let state = loaded("A", Some("B"), &corpus);
        let json = serde_json::to_value(&state).unwrap();
        assert_eq!(json["groupComparison"], -1);
        assert_eq!(json["otherGroupId"], "B");

        let back: PairSelectionState = serde_json::from_value(json).unwrap();
        assert_eq!(back.group_comparison, Ordering::Less);
    }
}
