//! Tile Pair Match Browser WASM Module
//!
//! Browses point-match collections: pick a match owner and collection, pick a
//! group of tiles, narrow down to one tile and a matching tile from another
//! group, then open the pair detail page.

pub mod api;
pub mod client;
pub mod config;
pub mod error;
pub mod models;
pub mod utils;

// Re-export commonly used types
pub use api::TilePairControls;
pub use config::TilePairConfig;
pub use error::{FetchError, TilePairError};
pub use models::*;

use wasm_bindgen::prelude::*;

// This is like the `main` function, but for WASM modules.
#[wasm_bindgen(start)]
pub fn main() {
    #[cfg(feature = "console_error_panic_hook")]
    console_error_panic_hook::set_once();

    #[cfg(feature = "console_log")]
    console_log::init_with_level(log::Level::Debug).expect("failed to initialize logger");

    log::info!("Tile pair match browser WASM module initialized");
}
