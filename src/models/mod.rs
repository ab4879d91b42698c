//! Models module for the tile pair browser
//!
//! Plain data and selection logic with no DOM access, so everything here
//! runs the same natively and in the browser.

pub mod matches;
pub mod selection;
pub mod pair_state;
pub mod pair_data;
pub mod service_data;
pub mod query;
pub mod pair_link;
pub mod generation;

// Re-export commonly used types
pub use matches::{CanvasMatch, CollectionId, MatchCollectionMetaData};
pub use pair_state::{PairEvent, PairSelectionState};
pub use pair_data::{ChangeCallback, MatchPairData};
pub use service_data::{CollectionState, MatchServiceData, OwnerState};
pub use query::{PageField, PageParameters};
pub use pair_link::TilePairLink;
pub use generation::{RequestGeneration, RequestTicket};
