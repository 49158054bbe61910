use crate::app_shell::AppShell;
use crate::domain::catalog::api;
use crate::layout::global_context::AppGlobalContext;
use leptos::prelude::*;

#[component]
pub fn App() -> impl IntoView {
    // Provide the AppGlobalContext store to the whole app via context.
    let ctx = AppGlobalContext::new();
    provide_context(ctx);

    // Kick off the five independent dataset fetches. Each sheet lands in the
    // store on its own; a failed one only blocks its own tab.
    api::load_all(ctx);

    view! {
        <AppShell />
    }
}
