use super::state::create_state;
use crate::domain::catalog::api;
use crate::domain::catalog::ui::details::MedicineDetails;
use crate::layout::global_context::AppGlobalContext;
use crate::shared::components::PaginationControls;
use crate::shared::icons::icon;
use crate::shared::list_utils::{highlight_matches, SearchInput};
use contracts::{descendant_codes, filter_medicines, paginate, Medicine, Page};
use leptos::prelude::*;

#[component]
pub fn MedicineList() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    let state = create_state();
    let (detail, set_detail) = signal(Option::<Medicine>::None);

    // A new sheet or category invalidates the current page position.
    Effect::new(move |_| {
        let _ = ctx.active_sheet.get();
        let _ = ctx.selected_category.get();
        state.update(|s| s.page = 0);
    });

    // Category closure + name query over the active sheet, owned copies for
    // rendering. Recomputed per filter change, the datasets are small.
    let filtered = Memo::new(move |_| {
        let sheet = ctx.active_sheet.get();
        let q = state.with(|s| s.q.clone());
        let selected = ctx.selected_category.get();
        ctx.datasets.with(|datasets| {
            let Some(data) = datasets.get(&sheet) else {
                return Vec::new();
            };
            let closure = selected
                .as_deref()
                .map(|code| descendant_codes(&data.categories, code));
            filter_medicines(&data.medicines, closure.as_ref(), &q)
                .into_iter()
                .cloned()
                .collect::<Vec<Medicine>>()
        })
    });

    let page_view: Memo<Page<Medicine>> = Memo::new(move |_| {
        let (page, page_size) = state.with(|s| (s.page, s.page_size));
        paginate(&filtered.get(), page, page_size)
    });

    let load_error = Memo::new(move |_| {
        let sheet = ctx.active_sheet.get();
        ctx.load_errors.with(|errors| errors.get(&sheet).cloned())
    });

    let is_loading = move || {
        let sheet = ctx.active_sheet.get();
        ctx.datasets.with(|datasets| !datasets.contains_key(&sheet))
            && load_error.get().is_none()
    };

    // Name of the selected category, for the filter chip.
    let selected_name = Memo::new(move |_| {
        let sheet = ctx.active_sheet.get();
        ctx.selected_category.get().map(|code| {
            ctx.datasets.with(|datasets| {
                datasets
                    .get(&sheet)
                    .and_then(|data| contracts::find_category(&data.categories, &code))
                    .map(|node| node.name.clone())
                    .unwrap_or(code)
            })
        })
    });

    let show_dosage = move || ctx.active_sheet.get().has_dosage();
    let show_payment = move || ctx.active_sheet.get().has_payment_standard();
    let column_count = move || 4 + usize::from(show_dosage()) + 2 * usize::from(show_payment());

    let query = move || state.with(|s| s.q.clone());

    view! {
        <div class="medicine-list">
            // Toolbar
            <div class="medicine-list__toolbar">
                <SearchInput
                    value=Signal::derive(query)
                    on_change=Callback::new(move |q: String| state.update(|s| {
                        s.q = q;
                        s.page = 0;
                    }))
                    placeholder="输入药品名称搜索..."
                />
                {move || selected_name.get().map(|name| view! {
                    <span class="filter-chip">
                        <span class="filter-chip__label">{name}</span>
                        <button
                            class="filter-chip__clear"
                            on:click=move |_| ctx.select_category(None)
                            title="取消分类筛选"
                        >
                            {icon("x")}
                        </button>
                    </span>
                })}
                <span class="medicine-list__total">
                    {move || format!("共 {} 条结果", page_view.get().total_count)}
                </span>
            </div>

            {move || load_error.get().map(|e| view! {
                <div class="load-error">
                    <span>{format!("数据加载失败: {}", e)}</span>
                    <button
                        class="button button--secondary"
                        on:click=move |_| api::load_sheet(ctx, ctx.active_sheet.get_untracked())
                    >
                        {icon("refresh")}
                        "重新加载"
                    </button>
                </div>
            })}

            {move || if is_loading() {
                view! { <div class="medicine-list__loading">"数据加载中..."</div> }.into_any()
            } else {
                let page = page_view.get();
                let offset = page.page * page.page_size;
                let q = query();
                view! {
                    <div class="medicine-list__table-container">
                        <table class="medicine-table">
                            <thead>
                                <tr>
                                    <th class="medicine-table__num">"序号"</th>
                                    <th>"药品名称"</th>
                                    {move || show_dosage().then(|| view! { <th>"剂型"</th> })}
                                    {move || show_payment().then(|| view! {
                                        <th>"医保支付标准"</th>
                                        <th>"协议有效期"</th>
                                    })}
                                    <th>"所属分类"</th>
                                    <th>"备注"</th>
                                </tr>
                            </thead>
                            <tbody>
                                {if page.items.is_empty() {
                                    let msg = if query().trim().is_empty() && ctx.selected_category.get().is_none() {
                                        "该目录暂无数据"
                                    } else {
                                        "没有符合条件的药品"
                                    };
                                    view! {
                                        <tr>
                                            <td class="medicine-table__empty" colspan=column_count().to_string()>{msg}</td>
                                        </tr>
                                    }.into_any()
                                } else {
                                    page.items.into_iter().enumerate().map(|(idx, medicine)| {
                                        let row_medicine = medicine.clone();
                                        view! {
                                            <tr
                                                class="medicine-table__row"
                                                on:click=move |_| set_detail.set(Some(row_medicine.clone()))
                                            >
                                                <td class="medicine-table__num">{offset + idx + 1}</td>
                                                <td class="medicine-table__name">
                                                    {highlight_matches(&medicine.name, &q)}
                                                </td>
                                                {show_dosage().then(|| view! {
                                                    <td>{medicine.dosage.clone().unwrap_or_default()}</td>
                                                })}
                                                {show_payment().then(|| view! {
                                                    <td>{medicine.payment_standard.join("；")}</td>
                                                    <td>{medicine.validity_period.clone().unwrap_or_default()}</td>
                                                })}
                                                <td>{medicine.category_name.clone().unwrap_or_default()}</td>
                                                <td class="medicine-table__note">{medicine.note.clone().unwrap_or_default()}</td>
                                            </tr>
                                        }
                                    }).collect_view().into_any()
                                }}
                            </tbody>
                        </table>
                    </div>
                }.into_any()
            }}

            <PaginationControls
                current_page=Signal::derive(move || page_view.get().page)
                total_pages=Signal::derive(move || page_view.get().total_pages)
                total_count=Signal::derive(move || page_view.get().total_count)
                page_size=Signal::derive(move || state.with(|s| s.page_size))
                on_page_change=Callback::new(move |page| state.update(|s| s.page = page))
                on_page_size_change=Callback::new(move |size| state.update(|s| {
                    s.page_size = size;
                    s.page = 0;
                }))
            />

            // Details Modal
            {move || detail.get().map(|medicine| view! {
                <div class="modal-overlay" on:click=move |_| set_detail.set(None)>
                    <div class="modal-content" on:click=|e| e.stop_propagation()>
                        <MedicineDetails
                            medicine=medicine
                            on_close=Callback::new(move |_| set_detail.set(None))
                        />
                    </div>
                </div>
            })}
        </div>
    }
}
