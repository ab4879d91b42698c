//! Render stack selection
//!
//! The render owner/project/stack controls are populated by the render
//! service component of the page. This side only seeds them from the page
//! link, tracks their changes, and reads the selection for the pair link.

use std::rc::Rc;

use crate::api::dom;
use crate::api::helpers::log_dom_result;
use crate::api::page::PageState;
use crate::error::TilePairError;
use crate::models::PageField;

/// Currently selected render stack
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct RenderStackSelection {
    pub owner: Option<String>,
    pub project: Option<String>,
    pub stack: Option<String>,
}

pub struct RenderStackUI {
    page: Rc<PageState>,
}

impl RenderStackUI {
    pub fn new(page: Rc<PageState>) -> Result<Self, TilePairError> {
        for field in Self::fields() {
            let id = field.key(page.config()).to_string();

            if let Some(value) = page.get(field) {
                log_dom_result(dom::set_control_value(&id, &value), "seed render stack control");
            }

            let handler_page = page.clone();
            dom::on_select_change(&id, move |value| handler_page.update(field, value))?;
        }
        Ok(Self { page })
    }

    /// Selected values, falling back to the page link for unpopulated controls
    pub fn selection(&self) -> RenderStackSelection {
        let read = |field: PageField| {
            let id = field.key(self.page.config());
            dom::selected_value(id)
                .ok()
                .flatten()
                .or_else(|| self.page.get(field))
        };
        RenderStackSelection {
            owner: read(PageField::RenderOwner),
            project: read(PageField::RenderProject),
            stack: read(PageField::RenderStack),
        }
    }

    fn fields() -> [PageField; 3] {
        [
            PageField::RenderOwner,
            PageField::RenderProject,
            PageField::RenderStack,
        ]
    }
}
