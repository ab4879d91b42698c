//! Shareable page state shared by every component on the page

use std::cell::RefCell;

use crate::api::dom;
use crate::api::helpers::log_dom_result;
use crate::config::TilePairConfig;
use crate::models::{PageField, PageParameters};

pub struct PageState {
    config: TilePairConfig,
    params: RefCell<PageParameters>,
}

impl PageState {
    /// Seed from the current location's query string
    pub fn from_location(config: TilePairConfig) -> Self {
        let query = dom::location_query().unwrap_or_else(|err| {
            crate::wasm_warn!("could not read page location: {}", err);
            String::new()
        });
        let params = PageParameters::from_query(&query, &config);
        Self {
            config,
            params: RefCell::new(params),
        }
    }

    pub fn config(&self) -> &TilePairConfig {
        &self.config
    }

    pub fn get(&self, field: PageField) -> Option<String> {
        self.params.borrow().get(field).map(str::to_string)
    }

    pub fn update(&self, field: PageField, value: Option<String>) {
        self.update_all(&[(field, value)]);
    }

    /// Apply several updates and publish the link once
    pub fn update_all(&self, updates: &[(PageField, Option<String>)]) {
        let query = {
            let mut params = self.params.borrow_mut();
            for (field, value) in updates {
                params.set(*field, value.clone());
            }
            params.to_query(&self.config)
        };
        log_dom_result(
            dom::update_link(&self.config.url_to_view_id, &query),
            "update link",
        );
    }
}
