//! Dataset loading.
//!
//! The five sheet datasets are static assets next to the app bundle. They are
//! fetched once at startup, independently; a failed sheet only blocks its own
//! tab and can be retried from there. No retry policy beyond that.

use crate::layout::global_context::AppGlobalContext;
use contracts::{Sheet, SheetData};
use gloo_net::http::Request;
use leptos::prelude::Update;
use leptos::task::spawn_local;

pub async fn fetch_sheet(sheet: Sheet) -> Result<SheetData, String> {
    let resp = Request::get(&sheet.data_path())
        .send()
        .await
        .map_err(|e| e.to_string())?;
    if !resp.ok() {
        return Err(format!("HTTP {}", resp.status()));
    }
    let text = resp.text().await.map_err(|e| e.to_string())?;
    SheetData::from_json(sheet.label(), &text).map_err(|e| format!("{e:#}"))
}

/// Fetch one sheet into the store, clearing any previous error first.
pub fn load_sheet(ctx: AppGlobalContext, sheet: Sheet) {
    ctx.load_errors.update(|errors| {
        errors.remove(&sheet);
    });
    spawn_local(async move {
        match fetch_sheet(sheet).await {
            Ok(data) => {
                leptos::logging::log!(
                    "loaded {}: {} medicines, {} root categories",
                    sheet.label(),
                    data.medicines.len(),
                    data.categories.len()
                );
                ctx.datasets.update(|datasets| {
                    datasets.insert(sheet, data);
                });
            }
            Err(e) => {
                leptos::logging::error!("loading {} failed: {}", sheet.label(), e);
                ctx.load_errors.update(|errors| {
                    errors.insert(sheet, e);
                });
            }
        }
    });
}

pub fn load_all(ctx: AppGlobalContext) {
    for sheet in Sheet::ALL {
        load_sheet(ctx, sheet);
    }
}
