//! Tile pair selection page
//!
//! `TilePairControls` wires the render stack controls, the match
//! owner/collection controls, and the tile cascade controls to one
//! [`MatchPairData`], and opens the pair detail page.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

use crate::api::dom;
use crate::api::helpers::{self, log_dom_result};
use crate::api::match_ui::MatchServiceDataUI;
use crate::api::page::PageState;
use crate::api::render_ui::RenderStackUI;
use crate::client::{Endpoints, HttpMatchSource};
use crate::config::TilePairConfig;
use crate::error::TilePairError;
use crate::models::{
    ChangeCallback, MatchPairData, PageField, PairSelectionState, RequestGeneration, TilePairLink,
};
use crate::utils::{pairs_between_groups_message, pairs_with_group_message};

pub const GROUP_MATCHES_LOAD_FAILED: &str = "Failed to load matches for group.";

type Setter = fn(&mut MatchPairData, Option<String>);

struct Controls {
    page: Rc<PageState>,
    render_ui: RenderStackUI,
    match_ui: Rc<MatchServiceDataUI>,
    pair_data: RefCell<MatchPairData>,
    group_loads: RequestGeneration,
}

/// JavaScript handle for the tile pair page
#[wasm_bindgen]
pub struct TilePairControls {
    inner: Rc<Controls>,
}

#[wasm_bindgen]
impl TilePairControls {
    /// Bind every control named in `config` (a partial `TilePairConfig` object)
    #[wasm_bindgen(constructor)]
    pub fn new(config: JsValue) -> Result<TilePairControls, JsValue> {
        let config: TilePairConfig = if config.is_undefined() || config.is_null() {
            TilePairConfig::default()
        } else {
            helpers::deserialize(config, "Invalid tile pair configuration")?
        };
        crate::wasm_info!("TilePairControls: services at {}", config.services_base_url());

        Ok(Self {
            inner: Controls::bind(config)?,
        })
    }

    /// Reset the cascade for the group in the group control and load its matches
    #[wasm_bindgen(js_name = setGroupIdAndLoadMatches)]
    pub fn set_group_id_and_load_matches(&self) {
        self.inner.set_group_id_and_load_matches();
    }

    /// Open the detail page for the selected pair
    #[wasm_bindgen(js_name = viewPair)]
    pub fn view_pair(&self) -> Result<bool, JsValue> {
        Ok(self.inner.view_pair()?)
    }

    /// Current cascade state as a plain object
    #[wasm_bindgen(js_name = getSelection)]
    pub fn selection(&self) -> Result<JsValue, JsValue> {
        helpers::serialize(self.inner.pair_data.borrow().state(), "Serialize selection")
    }

    #[wasm_bindgen(js_name = pairUrl)]
    pub fn pair_url(&self) -> String {
        self.inner.pair_link().url(&self.inner.page.config().tile_pair_page)
    }
}

impl Controls {
    fn bind(config: TilePairConfig) -> Result<Rc<Self>, TilePairError> {
        let page = Rc::new(PageState::from_location(config));
        let source = Rc::new(HttpMatchSource::new(Endpoints::new(
            page.config().services_base_url(),
        )));

        let render_ui = RenderStackUI::new(page.clone())?;
        let match_ui = MatchServiceDataUI::new(page.clone(), source)?;

        let initial = PairSelectionState::seeded(
            page.get(PageField::GroupId),
            page.get(PageField::OtherGroupId),
            page.get(PageField::TileDate),
            page.get(PageField::TileColumn),
            page.get(PageField::TileSuffix),
            page.get(PageField::OtherTileId),
        );
        let pair_data = MatchPairData::new(initial, Self::change_callback(page.clone()));

        let controls = Rc::new(Self {
            page,
            render_ui,
            match_ui,
            pair_data: RefCell::new(pair_data),
            group_loads: RequestGeneration::new(),
        });
        controls.bind_cascade_controls()?;

        let seeded_group = controls.pair_data.borrow().group_id().map(str::to_string);
        if let Some(group_id) = seeded_group {
            log_dom_result(
                dom::set_control_value(&controls.page.config().group_input_id, &group_id),
                "seed group control",
            );
            controls.set_group_id_and_load_matches();
        }

        Ok(controls)
    }

    fn bind_cascade_controls(self: &Rc<Self>) -> Result<(), TilePairError> {
        let config = self.page.config();

        let setters = [
            (config.tile_date_select_id.as_str(), MatchPairData::set_tile_date as Setter),
            (config.tile_column_select_id.as_str(), MatchPairData::set_tile_column as Setter),
            (config.tile_suffix_select_id.as_str(), MatchPairData::set_tile_suffix as Setter),
            (config.other_group_select_id.as_str(), MatchPairData::set_other_group_id as Setter),
            (config.other_tile_select_id.as_str(), MatchPairData::set_other_tile_id as Setter),
        ];

        for (id, setter) in setters {
            let weak = Rc::downgrade(self);
            dom::on_select_change(id, move |value| {
                if let Some(controls) = Weak::upgrade(&weak) {
                    setter(&mut controls.pair_data.borrow_mut(), value);
                }
            })?;
        }

        let weak = Rc::downgrade(self);
        dom::on_control_change(&config.group_input_id, move || {
            if let Some(controls) = Weak::upgrade(&weak) {
                controls.set_group_id_and_load_matches();
            }
        })?;

        Ok(())
    }

    /// Refresh every dependent control, the pair counts, and the page link
    fn change_callback(page: Rc<PageState>) -> ChangeCallback {
        Box::new(move |data: &MatchPairData| {
            let config = page.config();
            let state = data.state();

            let selects = [
                (&config.tile_date_select_id, &state.date_list, &state.tile_date),
                (&config.tile_column_select_id, &state.column_list, &state.tile_column),
                (&config.tile_suffix_select_id, &state.suffix_list, &state.tile_suffix),
                (&config.other_group_select_id, &state.group_id_list, &state.other_group_id),
                (&config.other_tile_select_id, &state.other_tile_id_list, &state.other_tile_id),
            ];
            for (id, options, selected) in selects {
                log_dom_result(
                    dom::update_select_options(id, options, selected.as_deref()),
                    "update cascade options",
                );
            }

            log_dom_result(
                dom::set_text(
                    &config.matches_load_message_id,
                    &pairs_with_group_message(data.canvas_matches().len()),
                ),
                "update match count",
            );
            log_dom_result(
                dom::set_text(
                    &config.other_group_message_id,
                    &pairs_between_groups_message(state.filtered_match_indices.len()),
                ),
                "update pair count",
            );

            page.update_all(&[
                (PageField::GroupId, state.group_id.clone()),
                (PageField::TileDate, state.tile_date.clone()),
                (PageField::TileColumn, state.tile_column.clone()),
                (PageField::TileSuffix, state.tile_suffix.clone()),
                (PageField::OtherGroupId, state.other_group_id.clone()),
                (PageField::OtherTileId, state.other_tile_id.clone()),
            ]);
        })
    }

    fn set_group_id_and_load_matches(self: &Rc<Self>) {
        let config = self.page.config();
        let group_id = dom::control_value(&config.group_input_id).unwrap_or_else(|err| {
            crate::wasm_warn!("could not read group control: {}", err);
            None
        });

        self.pair_data.borrow_mut().set_group_id(group_id.clone());
        log_dom_result(dom::set_text(&config.other_group_message_id, ""), "clear pair count");

        // A newer load (or a cleared group) supersedes any load still in flight.
        let ticket = self.group_loads.next();
        let Some(group_id) = group_id else {
            crate::wasm_log!("no group selected, nothing to load");
            return;
        };

        let service = self.match_ui.snapshot();
        let source = self.match_ui.source();
        let controls = self.clone();

        spawn_local(async move {
            let progress_id = controls.page.config().matches_load_message_id.clone();
            let result = service
                .load_matches_for_group(source.as_ref(), &group_id, |message| {
                    log_dom_result(dom::set_text(&progress_id, message), "update load progress");
                })
                .await;

            if !ticket.is_current() {
                crate::wasm_log!(
                    "dropping stale matches for group {} (load {})",
                    group_id,
                    ticket.generation()
                );
                return;
            }

            match result {
                Ok(matches) => {
                    crate::wasm_info!("loaded {} matches for group {}", matches.len(), group_id);
                    controls.pair_data.borrow_mut().set_canvas_matches(matches);
                }
                Err(err) => {
                    crate::wasm_error!("{} ({})", GROUP_MATCHES_LOAD_FAILED, err);
                    log_dom_result(
                        dom::display_error(
                            &controls.page.config().message_id,
                            GROUP_MATCHES_LOAD_FAILED,
                        ),
                        "display error",
                    );
                }
            }
        });
    }

    fn pair_link(&self) -> TilePairLink {
        let stack = self.render_ui.selection();
        let service = self.match_ui.snapshot();
        let pair_data = self.pair_data.borrow();
        let state = pair_data.state();

        let render_scale = dom::selected_value(&self.page.config().render_scale_select_id)
            .ok()
            .flatten()
            .or_else(|| self.page.get(PageField::RenderScale));

        TilePairLink {
            render_stack_owner: stack.owner,
            render_stack_project: stack.project,
            render_stack: stack.stack,
            match_owner: service.owners.owner,
            match_collection: service.collections.collection,
            render_scale,
            p_group_id: state.group_id.clone(),
            p_id: state.tile_id(),
            q_group_id: state.other_group_id.clone(),
            q_id: state.other_tile_id.clone(),
        }
    }

    fn view_pair(&self) -> Result<bool, TilePairError> {
        let url = self.pair_link().url(&self.page.config().tile_pair_page);
        crate::wasm_info!("viewPair: {}", url);
        dom::open_window(&url)
    }
}
