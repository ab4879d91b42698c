//! Match pair data owner
//!
//! Holds the match corpus for the selected group together with the current
//! [`PairSelectionState`]. Every public setter applies one event to the state
//! and then notifies the change listener exactly once.

use super::matches::CanvasMatch;
use super::pair_state::{PairEvent, PairSelectionState};

/// Listener invoked after each settled cascade update
pub type ChangeCallback = Box<dyn FnMut(&MatchPairData)>;

pub struct MatchPairData {
    state: PairSelectionState,
    canvas_matches: Vec<CanvasMatch>,
    on_change: Option<ChangeCallback>,
}

impl MatchPairData {
    pub fn new(initial: PairSelectionState, on_change: ChangeCallback) -> Self {
        let group_id = initial.group_id.clone();
        let mut data = Self {
            state: initial,
            canvas_matches: Vec::new(),
            on_change: Some(on_change),
        };
        data.set_group_id(group_id);
        data
    }

    /// Change the primary group; drops the corpus but does not fetch or notify
    pub fn set_group_id(&mut self, group_id: Option<String>) {
        self.canvas_matches.clear();
        self.apply(PairEvent::GroupChanged(group_id));
    }

    pub fn set_canvas_matches(&mut self, matches: Vec<CanvasMatch>) {
        log::debug!(
            "set_canvas_matches: {} matches for group {:?}",
            matches.len(),
            self.state.group_id
        );
        self.canvas_matches = matches;
        self.apply_and_notify(PairEvent::MatchesLoaded);
    }

    pub fn set_other_group_id(&mut self, other_group_id: Option<String>) {
        self.apply_and_notify(PairEvent::OtherGroupSelected(other_group_id));
    }

    pub fn set_tile_date(&mut self, tile_date: Option<String>) {
        self.apply_and_notify(PairEvent::TileDateSelected(tile_date));
    }

    pub fn set_tile_column(&mut self, tile_column: Option<String>) {
        self.apply_and_notify(PairEvent::TileColumnSelected(tile_column));
    }

    pub fn set_tile_suffix(&mut self, tile_suffix: Option<String>) {
        self.apply_and_notify(PairEvent::TileSuffixSelected(tile_suffix));
    }

    pub fn set_other_tile_id(&mut self, other_tile_id: Option<String>) {
        self.apply_and_notify(PairEvent::OtherTileSelected(other_tile_id));
    }

    pub fn state(&self) -> &PairSelectionState {
        &self.state
    }

    pub fn group_id(&self) -> Option<&str> {
        self.state.group_id.as_deref()
    }

    pub fn tile_id(&self) -> Option<String> {
        self.state.tile_id()
    }

    pub fn canvas_matches(&self) -> &[CanvasMatch] {
        &self.canvas_matches
    }

    /// Records between the primary group and the selected other group
    pub fn filtered_group_matches(&self) -> Vec<&CanvasMatch> {
        self.state.filtered(&self.canvas_matches).collect()
    }

    fn apply(&mut self, event: PairEvent) {
        let state = std::mem::take(&mut self.state);
        self.state = state.reduce(event, &self.canvas_matches);
    }

    fn apply_and_notify(&mut self, event: PairEvent) {
        self.apply(event);

        // The listener gets a shared view of `self`, so it is parked while it runs.
        if let Some(mut on_change) = self.on_change.take() {
            on_change(self);
            self.on_change = Some(on_change);
        }
    }
}

impl std::fmt::Debug for MatchPairData {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MatchPairData")
            .field("state", &self.state)
            .field("canvas_matches", &self.canvas_matches.len())
            .finish()
    }
}
