//! Shareable page state
//!
//! The page URL carries every selection so that a view can be bookmarked or
//! shared. Keys are the element ids from [`TilePairConfig`]; parameters this
//! page does not own are kept and written back untouched.

use crate::config::TilePairConfig;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct PageParameters {
    pub render_owner: Option<String>,
    pub render_project: Option<String>,
    pub render_stack: Option<String>,
    pub match_owner: Option<String>,
    pub match_collection: Option<String>,
    pub group_id: Option<String>,
    pub tile_date: Option<String>,
    pub tile_column: Option<String>,
    pub tile_suffix: Option<String>,
    pub other_group_id: Option<String>,
    pub other_tile_id: Option<String>,
    pub render_scale: Option<String>,
    /// Parameters owned by other page components, in the order they appeared
    pub other: Vec<(String, String)>,
}

/// Fields of [`PageParameters`] addressable by key
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PageField {
    RenderOwner,
    RenderProject,
    RenderStack,
    MatchOwner,
    MatchCollection,
    GroupId,
    TileDate,
    TileColumn,
    TileSuffix,
    OtherGroupId,
    OtherTileId,
    RenderScale,
}

impl PageField {
    pub const ALL: [PageField; 12] = [
        PageField::RenderOwner,
        PageField::RenderProject,
        PageField::RenderStack,
        PageField::MatchOwner,
        PageField::MatchCollection,
        PageField::GroupId,
        PageField::TileDate,
        PageField::TileColumn,
        PageField::TileSuffix,
        PageField::OtherGroupId,
        PageField::OtherTileId,
        PageField::RenderScale,
    ];

    pub fn key(self, config: &TilePairConfig) -> &str {
        match self {
            PageField::RenderOwner => &config.render_owner_select_id,
            PageField::RenderProject => &config.render_project_select_id,
            PageField::RenderStack => &config.render_stack_select_id,
            PageField::MatchOwner => &config.match_owner_select_id,
            PageField::MatchCollection => &config.match_collection_select_id,
            PageField::GroupId => &config.group_input_id,
            PageField::TileDate => &config.tile_date_select_id,
            PageField::TileColumn => &config.tile_column_select_id,
            PageField::TileSuffix => &config.tile_suffix_select_id,
            PageField::OtherGroupId => &config.other_group_select_id,
            PageField::OtherTileId => &config.other_tile_select_id,
            PageField::RenderScale => &config.render_scale_select_id,
        }
    }
}

impl PageParameters {
    /// Parse a query string (with or without the leading `?`)
    pub fn from_query(query: &str, config: &TilePairConfig) -> Self {
        let mut params = Self::default();

        for pair in query.trim_start_matches('?').split('&') {
            if pair.is_empty() {
                continue;
            }
            let (raw_key, raw_value) = pair.split_once('=').unwrap_or((pair, ""));
            let key = decode_component(raw_key);
            let value = decode_component(raw_value);

            match PageField::ALL.iter().find(|f| f.key(config) == key) {
                Some(&field) => params.set(field, Some(value).filter(|v| !v.is_empty())),
                None => params.other.push((key, value)),
            }
        }

        params
    }

    /// Serialise back to a query string without the leading `?`
    pub fn to_query(&self, config: &TilePairConfig) -> String {
        let owned = PageField::ALL
            .iter()
            .filter_map(|&f| self.get(f).map(|v| (f.key(config), v)));
        let other = self.other.iter().map(|(k, v)| (k.as_str(), v.as_str()));

        owned
            .chain(other)
            .map(|(k, v)| format!("{}={}", urlencoding::encode(k), urlencoding::encode(v)))
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn get(&self, field: PageField) -> Option<&str> {
        self.slot(field).as_deref()
    }

    pub fn set(&mut self, field: PageField, value: Option<String>) {
        *self.slot_mut(field) = value;
    }

    fn slot(&self, field: PageField) -> &Option<String> {
        match field {
            PageField::RenderOwner => &self.render_owner,
            PageField::RenderProject => &self.render_project,
            PageField::RenderStack => &self.render_stack,
            PageField::MatchOwner => &self.match_owner,
            PageField::MatchCollection => &self.match_collection,
            PageField::GroupId => &self.group_id,
            PageField::TileDate => &self.tile_date,
            PageField::TileColumn => &self.tile_column,
            PageField::TileSuffix => &self.tile_suffix,
            PageField::OtherGroupId => &self.other_group_id,
            PageField::OtherTileId => &self.other_tile_id,
            PageField::RenderScale => &self.render_scale,
        }
    }

    fn slot_mut(&mut self, field: PageField) -> &mut Option<String> {
        match field {
            PageField::RenderOwner => &mut self.render_owner,
            PageField::RenderProject => &mut self.render_project,
            PageField::RenderStack => &mut self.render_stack,
            PageField::MatchOwner => &mut self.match_owner,
            PageField::MatchCollection => &mut self.match_collection,
            PageField::GroupId => &mut self.group_id,
            PageField::TileDate => &mut self.tile_date,
            PageField::TileColumn => &mut self.tile_column,
            PageField::TileSuffix => &mut self.tile_suffix,
            PageField::OtherGroupId => &mut self.other_group_id,
            PageField::OtherTileId => &mut self.other_tile_id,
            PageField::RenderScale => &mut self.render_scale,
        }
    }
}

fn decode_component(raw: &str) -> String {
    let spaced = raw.replace('+', " ");
    match urlencoding::decode(&spaced) {
        Ok(decoded) => decoded.into_owned(),
        Err(_) => spaced,
    }
}
