//! Application shell - the top-level layout composition.
//!
//! There is no auth gate and no routing: the whole app is one screen with the
//! category tree on the left and the medicine list in the center.

use crate::domain::catalog::ui::page::CatalogPage;
use crate::domain::catalog::ui::tree::CategoryTree;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use leptos::prelude::*;

#[component]
pub fn AppShell() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Restore sheet/category from the URL and keep them synced from now on.
    ctx.init_router_integration();

    view! {
        <Shell
            left=|| view! { <CategoryTree /> }.into_any()
            center=|| view! { <CatalogPage /> }.into_any()
        />
    }
}
