use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::{search_tree, CategoryMap};
use leptos::prelude::*;
use std::collections::HashSet;

/// Recursive row rendering. Expansion state is a plain code set: the tree is
/// bounded by the catalog taxonomy, re-rendering it wholesale is cheap.
/// While a filter is active every surviving node is shown expanded.
fn render_nodes(
    nodes: &CategoryMap,
    level: usize,
    ctx: AppGlobalContext,
    expanded: RwSignal<HashSet<String>>,
    expanded_set: &HashSet<String>,
    selected: Option<&str>,
    filter: &str,
) -> Vec<AnyView> {
    let filter_active = !filter.trim().is_empty();
    let mut rows = Vec::new();

    for node in nodes.values() {
        let code = node.code.clone();
        let has_children = !node.subcategories.is_empty();
        let is_expanded = filter_active || expanded_set.contains(&code);
        let is_selected = selected == Some(node.code.as_str());

        let toggle: AnyView = if has_children {
            let toggle_code = code.clone();
            view! {
                <button
                    class="tree-toggle"
                    on:click=move |ev| {
                        ev.stop_propagation();
                        expanded.update(|set| {
                            if !set.remove(&toggle_code) {
                                set.insert(toggle_code.clone());
                            }
                        });
                    }
                >
                    {if is_expanded { icon("chevron-down") } else { icon("chevron-right") }}
                </button>
            }
            .into_any()
        } else {
            view! { <span class="tree-toggle tree-toggle--leaf"></span> }.into_any()
        };

        let node_icon = if has_children {
            if is_expanded {
                icon("folder-open")
            } else {
                icon("folder-closed")
            }
        } else {
            view! { <></> }.into_any()
        };

        let select_code = code.clone();
        let children: AnyView = if has_children && is_expanded {
            let kids = render_nodes(
                &node.subcategories,
                level + 1,
                ctx,
                expanded,
                expanded_set,
                selected,
                filter,
            );
            view! { <ul class="category-tree__children">{kids}</ul> }.into_any()
        } else {
            view! { <></> }.into_any()
        };

        let row = view! {
            <li>
                <div
                    class=if is_selected { "tree-row tree-row--selected" } else { "tree-row" }
                    style=format!("padding-left: {}px;", level * 14)
                    on:click=move |_| ctx.select_category(Some(select_code.clone()))
                >
                    {toggle}
                    <span class="tree-row__icon">{node_icon}</span>
                    <span class="tree-row__label">{highlight_matches(&node.name, filter)}</span>
                    <span class="tree-row__count">{node.medicine_count}</span>
                </div>
                {children}
            </li>
        }
        .into_any();

        rows.push(row);
    }

    rows
}

/// Category tree for the active sheet, rendered in the left drawer.
#[component]
pub fn CategoryTree() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let (filter_text, set_filter_text) = signal(String::new());
    let expanded = RwSignal::new(HashSet::<String>::new());

    // Total for the "全部" row.
    let total_count = move || {
        let sheet = ctx.active_sheet.get();
        ctx.datasets
            .with(|datasets| datasets.get(&sheet).map(|data| data.medicines.len()))
    };

    let tree_rows = move || {
        let sheet = ctx.active_sheet.get();
        let filter = filter_text.get();
        let selected = ctx.selected_category.get();
        let expanded_set = expanded.get();
        ctx.datasets.with(|datasets| {
            let Some(data) = datasets.get(&sheet) else {
                return view! { <li class="category-tree__hint">"分类加载中..."</li> }
                    .into_any();
            };
            let visible = search_tree(&data.categories, &filter);
            if visible.is_empty() {
                let msg = if data.categories.is_empty() {
                    "该目录没有分类"
                } else {
                    "没有匹配的分类"
                };
                return view! { <li class="category-tree__hint">{msg}</li> }.into_any();
            }
            let rows = render_nodes(
                &visible,
                0,
                ctx,
                expanded,
                &expanded_set,
                selected.as_deref(),
                &filter,
            );
            rows.into_view().into_any()
        })
    };

    view! {
        <div class="category-panel">
            <div class="category-panel__header">
                <span class="category-panel__title">"药品分类"</span>
            </div>

            <div class="category-panel__search">
                <SearchInput
                    value=filter_text
                    on_change=Callback::new(move |q: String| set_filter_text.set(q))
                    placeholder="搜索分类名称..."
                />
            </div>

            <ul class="category-tree">
                <li>
                    <div
                        class=move || if ctx.selected_category.get().is_none() {
                            "tree-row tree-row--all tree-row--selected"
                        } else {
                            "tree-row tree-row--all"
                        }
                        on:click=move |_| ctx.select_category(None)
                    >
                        <span class="tree-row__label">"全部"</span>
                        {move || total_count().map(|count| view! {
                            <span class="tree-row__count">{count}</span>
                        })}
                    </div>
                </li>
                {tree_rows}
            </ul>
        </div>
    }
}
