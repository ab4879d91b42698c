//! Link to the tile pair detail page

use serde::{Deserialize, Serialize};

/// Everything the detail page needs to render one tile pair
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct TilePairLink {
    pub render_stack_owner: Option<String>,
    pub render_stack_project: Option<String>,
    pub render_stack: Option<String>,
    pub match_owner: Option<String>,
    pub match_collection: Option<String>,
    pub render_scale: Option<String>,
    pub p_group_id: Option<String>,
    pub p_id: Option<String>,
    pub q_group_id: Option<String>,
    pub q_id: Option<String>,
}

impl TilePairLink {
    /// Query string in the fixed parameter order; unset values are sent empty
    pub fn to_query(&self) -> String {
        let params: [(&str, &Option<String>); 10] = [
            ("renderStackOwner", &self.render_stack_owner),
            ("renderStackProject", &self.render_stack_project),
            ("renderStack", &self.render_stack),
            ("matchOwner", &self.match_owner),
            ("matchCollection", &self.match_collection),
            ("renderScale", &self.render_scale),
            ("pGroupId", &self.p_group_id),
            ("pId", &self.p_id),
            ("qGroupId", &self.q_group_id),
            ("qId", &self.q_id),
        ];

        params
            .iter()
            .map(|(key, value)| {
                format!(
                    "{}={}",
                    key,
                    urlencoding::encode(value.as_deref().unwrap_or(""))
                )
            })
            .collect::<Vec<_>>()
            .join("&")
    }

    pub fn url(&self, page: &str) -> String {
        format!("{}?{}", page, self.to_query())
    }
}
