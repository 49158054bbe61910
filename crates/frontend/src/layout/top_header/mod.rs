//! TopHeader component - application top bar.
//!
//! Contains the drawer toggle, the application title and the theme selector.

use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::theme::ThemeSelect;
use leptos::prelude::*;

#[component]
pub fn TopHeader() -> impl IntoView {
    let ctx =
        leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found");

    let toggle_drawer = move |_| {
        ctx.toggle_left();
    };

    let is_drawer_visible = move || ctx.left_open.get();

    view! {
        <div class="top-header">
            <div class="top-header__brand">
                <button
                    class="top-header__icon-btn"
                    on:click=toggle_drawer
                    title=move || if is_drawer_visible() { "收起分类栏" } else { "展开分类栏" }
                >
                    {move || if is_drawer_visible() {
                        icon("panel-left-close")
                    } else {
                        icon("panel-left-open")
                    }}
                </button>
                {icon("pill")}
                <span class="top-header__title">"国家医保药品目录查询"</span>
            </div>

            <div class="top-header__actions">
                <ThemeSelect />
            </div>
        </div>
    }
}
