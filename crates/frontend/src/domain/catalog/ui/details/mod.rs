use crate::layout::global_context::AppGlobalContext;
use crate::shared::icons::icon;
use contracts::{category_path, Medicine};
use leptos::prelude::*;

/// Read-only detail card for one medicine, shown in the modal.
#[component]
pub fn MedicineDetails(medicine: Medicine, on_close: Callback<()>) -> impl IntoView {
    let ctx = leptos::context::use_context::<AppGlobalContext>()
        .expect("AppGlobalContext context not found");

    // Breadcrumb resolved from the ancestor chain recorded at extraction
    // time; falls back to the flat category name for uncategorized rows.
    let breadcrumb = {
        let names: Vec<String> = ctx.datasets.with_untracked(|datasets| {
            datasets
                .get(&medicine.sheet)
                .map(|data| {
                    category_path(&data.categories, &medicine.all_category_codes)
                        .into_iter()
                        .map(|node| node.name.clone())
                        .collect()
                })
                .unwrap_or_default()
        });
        if names.is_empty() {
            medicine
                .category_name
                .clone()
                .unwrap_or_else(|| "未分类".to_string())
        } else {
            names.join(" > ")
        }
    };

    let payment_standards = medicine.payment_standard.clone();
    let dosage = medicine.dosage.clone().filter(|s| !s.is_empty());
    let validity = medicine.validity_period.clone().filter(|s| !s.is_empty());
    let note = medicine.note.clone().filter(|s| !s.is_empty());

    view! {
        <div class="details">
            <div class="details__header">
                <h3 class="details__title">{medicine.name.clone()}</h3>
                <button
                    class="details__close"
                    on:click=move |_| on_close.run(())
                    title="关闭"
                >
                    {icon("x")}
                </button>
            </div>

            <dl class="details__grid">
                <dt>"所属目录"</dt>
                <dd>{medicine.sheet.label()}</dd>

                <dt>"所属分类"</dt>
                <dd>{breadcrumb}</dd>

                {dosage.map(|d| view! {
                    <dt>"剂型"</dt>
                    <dd>{d}</dd>
                })}

                {(!payment_standards.is_empty()).then(|| view! {
                    <dt>"医保支付标准"</dt>
                    <dd>
                        <ul class="details__payment-list">
                            {payment_standards.into_iter().map(|entry| view! {
                                <li>{entry}</li>
                            }).collect_view()}
                        </ul>
                    </dd>
                })}

                {validity.map(|v| view! {
                    <dt>"协议有效期"</dt>
                    <dd>{v}</dd>
                })}

                {note.map(|n| view! {
                    <dt>"备注"</dt>
                    <dd>{n}</dd>
                })}
            </dl>
        </div>
    }
}
