//! Match records served by the point-match service
//!
//! These mirror the JSON shapes returned by the match collection endpoints.
//! Records are immutable once fetched; the cascade only ever reads them.

use serde::{Deserialize, Serialize};

/// Length of the acquisition date prefix of a tile id
pub const TILE_DATE_LEN: usize = 12;

/// Length of the column code that follows the date
pub const TILE_COLUMN_LEN: usize = 3;

const COLUMN_START: usize = TILE_DATE_LEN;
const SUFFIX_START: usize = TILE_DATE_LEN + TILE_COLUMN_LEN;

/// A recorded correspondence between two tiles, possibly in different groups
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct CanvasMatch {
    pub p_group_id: String,
    pub p_id: String,
    pub q_group_id: String,
    pub q_id: String,
    /// Opaque point-match payload, never inspected here
    #[serde(default)]
    pub matches: serde_json::Value,
}

impl CanvasMatch {
    pub fn new(
        p_group_id: impl Into<String>,
        p_id: impl Into<String>,
        q_group_id: impl Into<String>,
        q_id: impl Into<String>,
    ) -> Self {
        Self {
            p_group_id: p_group_id.into(),
            p_id: p_id.into(),
            q_group_id: q_group_id.into(),
            q_id: q_id.into(),
            matches: serde_json::Value::Null,
        }
    }

    /// The tile paired with `tile_id` in this record, if `tile_id` is one of its sides
    pub fn other_tile(&self, tile_id: &str) -> Option<&str> {
        if self.p_id == tile_id {
            Some(&self.q_id)
        } else if self.q_id == tile_id {
            Some(&self.p_id)
        } else {
            None
        }
    }
}

/// Identifies a match collection
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
pub struct CollectionId {
    pub owner: String,
    pub name: String,
}

/// Summary of one match collection as listed for an owner
#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchCollectionMetaData {
    pub collection_id: CollectionId,
    #[serde(default)]
    pub pair_count: u64,
}

/// Date segment of a tile id (first 12 characters)
pub fn tile_date(tile_id: &str) -> &str {
    slice_or_empty(tile_id, 0, Some(COLUMN_START))
}

/// Column segment of a tile id (characters 12..15)
pub fn tile_column(tile_id: &str) -> &str {
    slice_or_empty(tile_id, COLUMN_START, Some(SUFFIX_START))
}

/// Everything after the column segment
pub fn tile_suffix(tile_id: &str) -> &str {
    slice_or_empty(tile_id, SUFFIX_START, None)
}

// Short ids are truncated rather than rejected, and a slice boundary that
// falls inside a multi-byte character yields an empty segment.
fn slice_or_empty(s: &str, start: usize, end: Option<usize>) -> &str {
    let len = s.len();
    let start = start.min(len);
    let end = end.map_or(len, |e| e.min(len));
    s.get(start..end).unwrap_or("")
}
