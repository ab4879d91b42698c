//! Page configuration
//!
//! The host page passes a plain object to `TilePairControls`; every field is
//! optional and falls back to the conventional element id. The element ids
//! double as the query-string keys of the shareable link.

use serde::{Deserialize, Serialize};

pub const DEFAULT_SERVICES_BASE_URL: &str = "/render-ws/v1";

#[derive(Serialize, Deserialize, Clone, Debug, PartialEq, Eq)]
#[serde(rename_all = "camelCase", default)]
pub struct TilePairConfig {
    pub services_base_url: String,

    pub render_owner_select_id: String,
    pub render_project_select_id: String,
    pub render_stack_select_id: String,
    pub match_owner_select_id: String,
    pub match_collection_select_id: String,

    pub group_input_id: String,
    pub tile_date_select_id: String,
    pub tile_column_select_id: String,
    pub tile_suffix_select_id: String,
    pub other_group_select_id: String,
    pub other_tile_select_id: String,
    pub render_scale_select_id: String,

    pub message_id: String,
    pub url_to_view_id: String,
    pub matches_load_message_id: String,
    pub other_group_message_id: String,

    /// Page opened by "view pair"
    pub tile_pair_page: String,
}

impl Default for TilePairConfig {
    fn default() -> Self {
        Self {
            services_base_url: DEFAULT_SERVICES_BASE_URL.to_string(),
            render_owner_select_id: "renderStackOwner".to_string(),
            render_project_select_id: "renderStackProject".to_string(),
            render_stack_select_id: "renderStack".to_string(),
            match_owner_select_id: "matchOwner".to_string(),
            match_collection_select_id: "matchCollection".to_string(),
            group_input_id: "groupId".to_string(),
            tile_date_select_id: "tileDate".to_string(),
            tile_column_select_id: "tileColumn".to_string(),
            tile_suffix_select_id: "tileSuffix".to_string(),
            other_group_select_id: "otherGroupId".to_string(),
            other_tile_select_id: "otherTileId".to_string(),
            render_scale_select_id: "renderScale".to_string(),
            message_id: "message".to_string(),
            url_to_view_id: "urlToView".to_string(),
            matches_load_message_id: "matchesLoadMessage".to_string(),
            other_group_message_id: "otherGroupMessage".to_string(),
            tile_pair_page: "tile-pair.html".to_string(),
        }
    }
}

impl TilePairConfig {
    /// Services base URL without a trailing slash
    pub fn services_base_url(&self) -> &str {
        self.services_base_url.trim_end_matches('/')
    }
}
