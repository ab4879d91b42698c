//! Tile pair browser WASM API
//!
//! This module provides the JavaScript-facing surface of the tile pair page.
//!
//! # Module Structure
//!
//! - `helpers`: Console logging macros and serde-wasm-bindgen conversion
//! - `dom`: Select controls, message areas, the shareable link, popups
//! - `page`: Query-string backed page state shared by all components
//! - `match_ui`: Match owner/collection controls
//! - `render_ui`: Render stack owner/project/stack controls
//! - `tile_pair`: `TilePairControls`, the page entry point

#[macro_use]
pub mod helpers;
pub mod dom;
pub mod page;
pub mod match_ui;
pub mod render_ui;
pub mod tile_pair;

pub use tile_pair::TilePairControls;
