//! Match service client
//!
//! [`MatchSource`] is the seam between the selection logic and the network.
//! The browser build talks to the service through [`HttpMatchSource`]; tests
//! substitute an in-memory source.

mod endpoints;
mod http;

pub use endpoints::{Endpoints, MatchScope};
pub use http::HttpMatchSource;

use crate::error::FetchError;
use crate::models::matches::{CanvasMatch, MatchCollectionMetaData};

/// Read access to the point-match service
///
/// Futures are driven on the single browser thread, so they need not be `Send`.
#[allow(async_fn_in_trait)]
pub trait MatchSource {
    /// Owners that have at least one match collection
    async fn fetch_owners(&self) -> Result<Vec<String>, FetchError>;

    async fn fetch_collections(&self, owner: &str)
        -> Result<Vec<MatchCollectionMetaData>, FetchError>;

    async fn fetch_group_matches(
        &self,
        owner: &str,
        collection: &str,
        group_id: &str,
        scope: MatchScope,
    ) -> Result<Vec<CanvasMatch>, FetchError>;
}
