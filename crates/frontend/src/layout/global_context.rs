use contracts::{Sheet, SheetData};
use leptos::prelude::Effect;
use leptos::prelude::*;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use web_sys::window;

/// Query-string shape for shareable views (`?sheet=...&cat=...`).
#[derive(Debug, Default, Clone, Serialize, Deserialize)]
struct UrlQuery {
    #[serde(skip_serializing_if = "Option::is_none")]
    sheet: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    cat: Option<String>,
}

/// App-wide state store, passed around via leptos context.
///
/// Datasets land here once at startup (keyed by sheet) and are read-only
/// afterwards; everything else is plain UI state.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub active_sheet: RwSignal<Sheet>,
    /// Selected category code, `None` = whole sheet.
    pub selected_category: RwSignal<Option<String>>,
    pub left_open: RwSignal<bool>,
    pub datasets: RwSignal<HashMap<Sheet, SheetData>>,
    pub load_errors: RwSignal<HashMap<Sheet, String>>,
}

impl AppGlobalContext {
    pub fn new() -> Self {
        Self {
            active_sheet: RwSignal::new(Sheet::Western),
            selected_category: RwSignal::new(None),
            left_open: RwSignal::new(true),
            datasets: RwSignal::new(HashMap::new()),
            load_errors: RwSignal::new(HashMap::new()),
        }
    }

    /// Restore sheet/category from the URL, then mirror every change back
    /// into the query string with `history.replace_state`.
    pub fn init_router_integration(&self) {
        let search = window()
            .and_then(|w| w.location().search().ok())
            .unwrap_or_default();
        let query: UrlQuery =
            serde_qs::from_str(search.trim_start_matches('?')).unwrap_or_default();
        if let Some(sheet) = query.sheet.as_deref().and_then(Sheet::from_label) {
            self.active_sheet.set(sheet);
        }
        if let Some(cat) = query.cat {
            self.selected_category.set(Some(cat));
        }

        let this = *self;
        Effect::new(move |_| {
            let query = UrlQuery {
                sheet: Some(this.active_sheet.get().label().to_string()),
                cat: this.selected_category.get(),
            };
            let query_string = serde_qs::to_string(&query).unwrap_or_default();
            let new_url = format!("?{}", query_string);

            // Use untracked to avoid creating unnecessary reactive dependencies
            let current_search = window()
                .and_then(|w| w.location().search().ok())
                .unwrap_or_default();

            // Only update URL if it actually changed
            if current_search != new_url {
                if let Some(w) = window() {
                    if let Ok(history) = w.history() {
                        let _ = history.replace_state_with_url(
                            &wasm_bindgen::JsValue::NULL,
                            "",
                            Some(&new_url),
                        );
                    }
                }
            }
        });
    }

    /// Switch the active sheet. The category selection belongs to the old
    /// sheet's tree, so it is cleared.
    pub fn select_sheet(&self, sheet: Sheet) {
        if self.active_sheet.get_untracked() == sheet {
            return;
        }
        leptos::logging::log!("select_sheet: {}", sheet.label());
        self.active_sheet.set(sheet);
        self.selected_category.set(None);
    }

    pub fn select_category(&self, code: Option<String>) {
        leptos::logging::log!("select_category: {:?}", code);
        self.selected_category.set(code);
    }

    pub fn toggle_left(&self) {
        self.left_open.update(|val| *val = !*val);
    }
}
