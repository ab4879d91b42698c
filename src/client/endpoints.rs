//! URL construction for the match service REST API

/// Which half of a group's matches to request
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum MatchScope {
    WithinGroup,
    OutsideGroup,
}

impl MatchScope {
    fn path(self) -> &'static str {
        match self {
            MatchScope::WithinGroup => "matchesWithinGroup",
            MatchScope::OutsideGroup => "matchesOutsideGroup",
        }
    }
}

/// Endpoint builder rooted at the services base URL (e.g. `/render-ws/v1`)
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Endpoints {
    base_url: String,
}

impl Endpoints {
    pub fn new(base_url: &str) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
        }
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub fn match_collection_owners(&self) -> String {
        format!("{}/matchCollectionOwners", self.base_url)
    }

    pub fn match_collections(&self, owner: &str) -> String {
        format!("{}/owner/{}/matchCollections", self.base_url, encode(owner))
    }

    pub fn group_matches(
        &self,
        owner: &str,
        collection: &str,
        group_id: &str,
        scope: MatchScope,
    ) -> String {
        format!(
            "{}/owner/{}/matchCollection/{}/group/{}/{}",
            self.base_url,
            encode(owner),
            encode(collection),
            encode(group_id),
            scope.path()
        )
    }
}

fn encode(segment: &str) -> std::borrow::Cow<'_, str> {
    urlencoding::encode(segment)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_endpoint_paths() {
        let endpoints = Endpoints::new("/render-ws/v1/");
        assert_eq!(endpoints.base_url(), "/render-ws/v1");
        assert_eq!(
            endpoints.match_collection_owners(),
            "/render-ws/v1/matchCollectionOwners"
        );
        assert_eq!(
            endpoints.match_collections("flyTEM"),
            "/render-ws/v1/owner/flyTEM/matchCollections"
        );
        assert_eq!(
            endpoints.group_matches("flyTEM", "v12_dmesh", "1.0", MatchScope::WithinGroup),
            "/render-ws/v1/owner/flyTEM/matchCollection/v12_dmesh/group/1.0/matchesWithinGroup"
        );
        assert_eq!(
            endpoints.group_matches("flyTEM", "v12_dmesh", "1.0", MatchScope::OutsideGroup),
            "/render-ws/v1/owner/flyTEM/matchCollection/v12_dmesh/group/1.0/matchesOutsideGroup"
        );
    }

    #[test]
    fn test_path_segments_are_encoded() {
        let endpoints = Endpoints::new("http://host/render-ws/v1");
        assert_eq!(
            endpoints.match_collections("a b/c"),
            "http://host/render-ws/v1/owner/a%20b%2Fc/matchCollections"
        );
    }
}
