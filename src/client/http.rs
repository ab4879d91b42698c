//! Browser HTTP implementation of [`MatchSource`]

use gloo_net::http::Request;
use serde::de::DeserializeOwned;

use super::{Endpoints, MatchScope, MatchSource};
use crate::error::FetchError;
use crate::models::matches::{CanvasMatch, MatchCollectionMetaData};

#[derive(Clone, Debug)]
pub struct HttpMatchSource {
    endpoints: Endpoints,
}

impl HttpMatchSource {
    pub fn new(endpoints: Endpoints) -> Self {
        Self { endpoints }
    }

    pub fn endpoints(&self) -> &Endpoints {
        &self.endpoints
    }

    async fn get_json<T: DeserializeOwned>(&self, url: &str) -> Result<T, FetchError> {
        log::debug!("GET {}", url);

        let response = Request::get(url)
            .send()
            .await
            .map_err(|e| FetchError::Network(e.to_string()))?;

        if !response.ok() {
            return Err(FetchError::Status {
                status: response.status(),
                url: url.to_string(),
            });
        }

        response
            .json::<T>()
            .await
            .map_err(|e| FetchError::Decode(format!("{}: {}", url, e)))
    }
}

impl MatchSource for HttpMatchSource {
    async fn fetch_owners(&self) -> Result<Vec<String>, FetchError> {
        self.get_json(&self.endpoints.match_collection_owners()).await
    }

    async fn fetch_collections(
        &self,
        owner: &str,
    ) -> Result<Vec<MatchCollectionMetaData>, FetchError> {
        self.get_json(&self.endpoints.match_collections(owner)).await
    }

    async fn fetch_group_matches(
        &self,
        owner: &str,
        collection: &str,
        group_id: &str,
        scope: MatchScope,
    ) -> Result<Vec<CanvasMatch>, FetchError> {
        let url = self.endpoints.group_matches(owner, collection, group_id, scope);
        self.get_json(&url).await
    }
}
