//! Match owner/collection controls
//!
//! Binds the match owner and match collection select controls to a
//! [`MatchServiceData`]. Owner changes reload the collection list; collection
//! changes only update the page link.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen_futures::spawn_local;

use crate::api::dom;
use crate::api::helpers::log_dom_result;
use crate::api::page::PageState;
use crate::client::HttpMatchSource;
use crate::error::{FetchError, TilePairError};
use crate::models::{MatchServiceData, PageField, RequestGeneration};

pub const OWNER_LOAD_FAILED: &str = "Failed to load match collection owners.";
pub const COLLECTION_LOAD_FAILED: &str = "Failed to load match collections.";

pub struct MatchServiceDataUI {
    data: RefCell<MatchServiceData>,
    source: Rc<HttpMatchSource>,
    page: Rc<PageState>,
    owner_loads: RequestGeneration,
    collection_loads: RequestGeneration,
}

impl MatchServiceDataUI {
    /// Bind the controls and start loading the owner list
    pub fn new(page: Rc<PageState>, source: Rc<HttpMatchSource>) -> Result<Rc<Self>, TilePairError> {
        let data = MatchServiceData::new(
            page.get(PageField::MatchOwner),
            page.get(PageField::MatchCollection),
        );
        let ui = Rc::new(Self {
            data: RefCell::new(data),
            source,
            page,
            owner_loads: RequestGeneration::new(),
            collection_loads: RequestGeneration::new(),
        });

        let config = ui.page.config();

        let weak = Rc::downgrade(&ui);
        dom::on_select_change(&config.match_collection_select_id, move |collection| {
            if let Some(ui) = Weak::upgrade(&weak) {
                ui.set_collection(collection);
            }
        })?;

        let weak = Rc::downgrade(&ui);
        dom::on_select_change(&config.match_owner_select_id, move |owner| {
            if let Some(ui) = Weak::upgrade(&weak) {
                ui.set_owner_and_update_collections(owner);
            }
        })?;

        ui.load_owner_list();
        Ok(ui)
    }

    /// Copy of the current owner/collection state
    pub fn snapshot(&self) -> MatchServiceData {
        self.data.borrow().clone()
    }

    pub fn source(&self) -> Rc<HttpMatchSource> {
        self.source.clone()
    }

    fn set_collection(&self, collection: Option<String>) {
        self.data.borrow_mut().set_collection(collection.clone());
        self.page.update(PageField::MatchCollection, collection);
    }

    fn set_owner_and_update_collections(self: &Rc<Self>, owner: Option<String>) {
        self.data.borrow_mut().set_owner(owner.clone());
        self.page.update(PageField::MatchOwner, owner);
        self.load_collection_list();
    }

    fn load_owner_list(self: &Rc<Self>) {
        let ticket = self.owner_loads.next();
        let mut scratch = self.snapshot();
        let ui = self.clone();

        spawn_local(async move {
            let result = scratch.load_owner_list(ui.source.as_ref()).await;
            if !ticket.is_current() {
                crate::wasm_log!("dropping stale owner list (load {})", ticket.generation());
                return;
            }

            match result {
                Ok(()) => {
                    let owners = scratch.owners;
                    log_dom_result(
                        dom::update_select_options(
                            &ui.page.config().match_owner_select_id,
                            &owners.owner_list,
                            owners.owner.as_deref(),
                        ),
                        "update owner options",
                    );
                    let owner = owners.owner.clone();
                    ui.data.borrow_mut().owners = owners;
                    ui.set_owner_and_update_collections(owner);
                }
                Err(err) => ui.report(OWNER_LOAD_FAILED, &err),
            }
        });
    }

    fn load_collection_list(self: &Rc<Self>) {
        let ticket = self.collection_loads.next();
        let mut scratch = self.snapshot();
        let ui = self.clone();

        spawn_local(async move {
            let result = scratch.load_collection_list(ui.source.as_ref()).await;
            if !ticket.is_current() {
                crate::wasm_log!("dropping stale collection list (load {})", ticket.generation());
                return;
            }

            match result {
                Ok(()) => {
                    let collections = scratch.collections;
                    log_dom_result(
                        dom::update_select_options(
                            &ui.page.config().match_collection_select_id,
                            &collections.collection_list,
                            collections.collection.as_deref(),
                        ),
                        "update collection options",
                    );
                    let collection = collections.collection.clone();
                    ui.data.borrow_mut().collections = collections;
                    ui.set_collection(collection);
                }
                Err(err) => ui.report(COLLECTION_LOAD_FAILED, &err),
            }
        });
    }

    fn report(&self, message: &str, err: &FetchError) {
        crate::wasm_error!("{} ({})", message, err);
        log_dom_result(
            dom::display_error(&self.page.config().message_id, message),
            "display error",
        );
    }
}
