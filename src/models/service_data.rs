//! Match collection owner/collection state
//!
//! Tracks the selected match owner and collection together with the lists the
//! service reported for them, and sequences the two-stage group match load.

use serde::{Deserialize, Serialize};

use crate::client::{MatchScope, MatchSource};
use crate::error::FetchError;
use crate::models::matches::{CanvasMatch, MatchCollectionMetaData};

pub const LOADING_WITHIN_GROUP: &str = "loading matches within group ...";
pub const LOADING_OUTSIDE_GROUP: &str = "loading matches outside group ...";

/// Selected owner and every owner known to the service
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct OwnerState {
    pub owner: Option<String>,
    pub owner_list: Vec<String>,
}

/// Selected collection and every collection of the current owner, sorted
#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct CollectionState {
    pub collection: Option<String>,
    pub collection_list: Vec<String>,
}

#[derive(Serialize, Deserialize, Clone, Debug, Default, PartialEq, Eq)]
#[serde(rename_all = "camelCase")]
pub struct MatchServiceData {
    pub owners: OwnerState,
    pub collections: CollectionState,
}

impl MatchServiceData {
    pub fn new(owner: Option<String>, collection: Option<String>) -> Self {
        Self {
            owners: OwnerState {
                owner,
                owner_list: Vec::new(),
            },
            collections: CollectionState {
                collection,
                collection_list: Vec::new(),
            },
        }
    }

    pub fn owner(&self) -> Option<&str> {
        self.owners.owner.as_deref()
    }

    pub fn collection(&self) -> Option<&str> {
        self.collections.collection.as_deref()
    }

    pub fn set_owner(&mut self, owner: Option<String>) {
        self.owners.owner = owner;
    }

    pub fn set_collection(&mut self, collection: Option<String>) {
        self.collections.collection = collection;
    }

    /// Replace the owner list; an owner the service no longer reports falls
    /// back to the first listed owner. An empty list leaves the owner as is.
    pub fn set_owner_list(&mut self, owners: Vec<String>) {
        self.owners.owner_list = owners;

        let listed = match self.owners.owner.as_deref() {
            Some(owner) => self.owners.owner_list.iter().any(|o| o == owner),
            None => false,
        };
        if !listed {
            if let Some(first) = self.owners.owner_list.first() {
                log::debug!("owner {:?} not listed, using {}", self.owners.owner, first);
                self.owners.owner = Some(first.clone());
            }
        }
    }

    /// Replace the collection list with the sorted names from `collections`
    pub fn set_collection_list(&mut self, collections: Vec<MatchCollectionMetaData>) {
        let mut names: Vec<String> = collections
            .into_iter()
            .map(|meta| meta.collection_id.name)
            .collect();
        names.sort();
        self.collections.collection_list = names;

        let listed = match self.collections.collection.as_deref() {
            Some(name) => self.collections.collection_list.iter().any(|c| c == name),
            None => false,
        };
        if !listed {
            if let Some(first) = self.collections.collection_list.first() {
                log::debug!(
                    "collection {:?} not listed, using {}",
                    self.collections.collection,
                    first
                );
                self.collections.collection = Some(first.clone());
            }
        }
    }

    pub async fn load_owner_list<S: MatchSource>(&mut self, source: &S) -> Result<(), FetchError> {
        let owners = source.fetch_owners().await?;
        self.set_owner_list(owners);
        Ok(())
    }

    /// Load collections for the current owner; without an owner there is nothing to load
    pub async fn load_collection_list<S: MatchSource>(
        &mut self,
        source: &S,
    ) -> Result<(), FetchError> {
        let Some(owner) = self.owners.owner.clone() else {
            log::debug!("no owner selected, skipping collection load");
            return Ok(());
        };
        let collections = source.fetch_collections(&owner).await?;
        self.set_collection_list(collections);
        Ok(())
    }

    /// Load every match touching `group_id`: within-group records first,
    /// then outside-group records. `progress` is told before each request.
    pub async fn load_matches_for_group<S, P>(
        &self,
        source: &S,
        group_id: &str,
        mut progress: P,
    ) -> Result<Vec<CanvasMatch>, FetchError>
    where
        S: MatchSource,
        P: FnMut(&str),
    {
        let owner = self
            .owner()
            .ok_or(FetchError::MissingSelection("match owner"))?;
        let collection = self
            .collection()
            .ok_or(FetchError::MissingSelection("match collection"))?;

        progress(LOADING_WITHIN_GROUP);
        let mut matches = source
            .fetch_group_matches(owner, collection, group_id, MatchScope::WithinGroup)
            .await?;

        progress(LOADING_OUTSIDE_GROUP);
        let outside = source
            .fetch_group_matches(owner, collection, group_id, MatchScope::OutsideGroup)
            .await?;

        matches.extend(outside);
        Ok(matches)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::matches::CollectionId;

    fn meta(name: &str) -> MatchCollectionMetaData {
        MatchCollectionMetaData {
            collection_id: CollectionId {
                owner: "flyTEM".to_string(),
                name: name.to_string(),
            },
            pair_count: 1,
        }
    }

    #[test]
    fn test_owner_list_keeps_listed_owner() {
        let mut data = MatchServiceData::new(Some("b".to_string()), None);
        data.set_owner_list(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(data.owner(), Some("b"));
    }

    #[test]
    fn test_owner_list_falls_back_to_first() {
        let mut data = MatchServiceData::new(Some("zz".to_string()), None);
        data.set_owner_list(vec!["a".to_string(), "b".to_string()]);
        assert_eq!(data.owner(), Some("a"));

        let mut data = MatchServiceData::new(None, None);
        data.set_owner_list(vec!["a".to_string()]);
        assert_eq!(data.owner(), Some("a"));
    }

    #[test]
    fn test_empty_owner_list_leaves_selection() {
        let mut data = MatchServiceData::new(Some("zz".to_string()), None);
        data.set_owner_list(Vec::new());
        assert_eq!(data.owner(), Some("zz"));
        assert!(data.owners.owner_list.is_empty());
    }

    #[test]
    fn test_collection_list_sorted_with_fallback() {
        let mut data = MatchServiceData::new(Some("flyTEM".to_string()), Some("gone".to_string()));
        data.set_collection_list(vec![meta("v3"), meta("v1"), meta("v2")]);
        assert_eq!(data.collections.collection_list, vec!["v1", "v2", "v3"]);
        assert_eq!(data.collection(), Some("v1"));

        data.set_collection(Some("v2".to_string()));
        data.set_collection_list(vec![meta("v2"), meta("v1")]);
        assert_eq!(data.collection(), Some("v2"));
    }

    #[test]
    fn test_empty_collection_list_leaves_selection() {
        let mut data = MatchServiceData::new(Some("flyTEM".to_string()), Some("v1".to_string()));
        data.set_collection_list(vec![meta("v1")]);
        data.set_collection_list(Vec::new());
        assert!(data.collections.collection_list.is_empty());
        assert_eq!(data.collection(), Some("v1"));
    }
}
