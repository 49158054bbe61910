use crate::domain::catalog::ui::list::MedicineList;
use crate::layout::global_context::AppGlobalContext;
use contracts::Sheet;
use leptos::prelude::*;

/// Tab strip for the five catalog sheets, with medicine counts once the
/// corresponding dataset has landed.
#[component]
fn SheetTabs() -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    view! {
        <div class="sheet-tabs">
            {Sheet::ALL.into_iter().map(|sheet| {
                let is_active = move || ctx.active_sheet.get() == sheet;
                let count = move || {
                    ctx.datasets.with(|datasets| {
                        datasets.get(&sheet).map(|data| data.medicines.len())
                    })
                };
                view! {
                    <button
                        class=move || if is_active() { "sheet-tab sheet-tab--active" } else { "sheet-tab" }
                        on:click=move |_| ctx.select_sheet(sheet)
                    >
                        <span>{sheet.label()}</span>
                        {move || count().map(|c| view! {
                            <span class="sheet-tab__count">{format!("({})", c)}</span>
                        })}
                    </button>
                }
            }).collect_view()}
        </div>
    }
}

/// Center content: sheet tabs above the filtered medicine list.
#[component]
pub fn CatalogPage() -> impl IntoView {
    view! {
        <div class="catalog-page">
            <SheetTabs />
            <MedicineList />
        </div>
    }
}
