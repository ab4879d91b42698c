// Owner, collection and group match loading against an in-memory match service

use std::cell::RefCell;

use futures::executor::block_on;

use tile_match_wasm::client::{MatchScope, MatchSource};
use tile_match_wasm::models::{CanvasMatch, CollectionId, MatchCollectionMetaData, MatchServiceData};
use tile_match_wasm::FetchError;

#[derive(Default)]
struct InMemorySource {
    owners: Vec<String>,
    collections: Vec<MatchCollectionMetaData>,
    within: Vec<CanvasMatch>,
    outside: Vec<CanvasMatch>,
    fail_scope: Option<MatchScope>,
    requests: RefCell<Vec<String>>,
}

impl MatchSource for InMemorySource {
    async fn fetch_owners(&self) -> Result<Vec<String>, FetchError> {
        self.requests.borrow_mut().push("owners".to_string());
        Ok(self.owners.clone())
    }

    async fn fetch_collections(
        &self,
        owner: &str,
    ) -> Result<Vec<MatchCollectionMetaData>, FetchError> {
        self.requests.borrow_mut().push(format!("collections:{}", owner));
        Ok(self.collections.clone())
    }

    async fn fetch_group_matches(
        &self,
        owner: &str,
        collection: &str,
        group_id: &str,
        scope: MatchScope,
    ) -> Result<Vec<CanvasMatch>, FetchError> {
        self.requests
            .borrow_mut()
            .push(format!("{}/{}/{}/{:?}", owner, collection, group_id, scope));

        if self.fail_scope == Some(scope) {
            return Err(FetchError::Status {
                status: 500,
                url: format!("group/{}", group_id),
            });
        }
        Ok(match scope {
            MatchScope::WithinGroup => self.within.clone(),
            MatchScope::OutsideGroup => self.outside.clone(),
        })
    }
}

fn collection(name: &str) -> MatchCollectionMetaData {
    MatchCollectionMetaData {
        collection_id: CollectionId {
            owner: "flyTEM".to_string(),
            name: name.to_string(),
        },
        pair_count: 10,
    }
}

fn group_source() -> InMemorySource {
    InMemorySource {
        within: vec![
            CanvasMatch::new("1.0", "w1", "1.0", "w2"),
            CanvasMatch::new("1.0", "w3", "1.0", "w4"),
        ],
        outside: vec![
            CanvasMatch::new("1.0", "w1", "2.0", "o1"),
            CanvasMatch::new("0.0", "o2", "1.0", "w3"),
        ],
        ..InMemorySource::default()
    }
}

fn selected_service() -> MatchServiceData {
    MatchServiceData::new(Some("flyTEM".to_string()), Some("v1".to_string()))
}

#[test]
fn test_owner_then_collection_load() {
    let source = InMemorySource {
        owners: vec!["flyTEM".to_string(), "hessh".to_string()],
        collections: vec![collection("v2"), collection("v1")],
        ..InMemorySource::default()
    };
    let mut data = MatchServiceData::new(Some("gone".to_string()), Some("v9".to_string()));

    block_on(data.load_owner_list(&source)).unwrap();
    assert_eq!(data.owner(), Some("flyTEM"));

    block_on(data.load_collection_list(&source)).unwrap();
    assert_eq!(data.collections.collection_list, vec!["v1", "v2"]);
    assert_eq!(data.collection(), Some("v1"));
    assert_eq!(
        *source.requests.borrow(),
        vec!["owners".to_string(), "collections:flyTEM".to_string()]
    );
}

#[test]
fn test_collection_load_without_owner_is_skipped() {
    let source = InMemorySource::default();
    let mut data = MatchServiceData::new(None, None);
    block_on(data.load_collection_list(&source)).unwrap();
    assert!(source.requests.borrow().is_empty());
}

#[test]
fn test_group_matches_within_then_outside() {
    let source = group_source();
    let mut progress = Vec::new();

    let matches = block_on(selected_service().load_matches_for_group(&source, "1.0", |m| {
        progress.push(m.to_string())
    }))
    .unwrap();

    let ids: Vec<&str> = matches.iter().map(|m| m.p_id.as_str()).collect();
    assert_eq!(ids, vec!["w1", "w3", "w1", "o2"]);
    assert_eq!(
        progress,
        vec![
            "loading matches within group ...".to_string(),
            "loading matches outside group ...".to_string()
        ]
    );
    assert_eq!(
        *source.requests.borrow(),
        vec![
            "flyTEM/v1/1.0/WithinGroup".to_string(),
            "flyTEM/v1/1.0/OutsideGroup".to_string()
        ]
    );
}

#[test]
fn test_first_stage_failure_skips_second_request() {
    let source = InMemorySource {
        fail_scope: Some(MatchScope::WithinGroup),
        ..group_source()
    };

    let result = block_on(selected_service().load_matches_for_group(&source, "1.0", |_| {}));
    assert!(matches!(result, Err(FetchError::Status { status: 500, .. })));
    assert_eq!(source.requests.borrow().len(), 1);
}

#[test]
fn test_second_stage_failure_delivers_nothing() {
    let source = InMemorySource {
        fail_scope: Some(MatchScope::OutsideGroup),
        ..group_source()
    };

    let result = block_on(selected_service().load_matches_for_group(&source, "1.0", |_| {}));
    assert!(result.is_err());
    assert_eq!(source.requests.borrow().len(), 2);
}

#[test]
fn test_group_load_needs_owner_and_collection() {
    let source = group_source();
    let service = MatchServiceData::new(Some("flyTEM".to_string()), None);

    let result = block_on(service.load_matches_for_group(&source, "1.0", |_| {}));
    assert_eq!(result, Err(FetchError::MissingSelection("match collection")));
    assert!(source.requests.borrow().is_empty());
}
