//! Category summary component

use leptos::prelude::*;
use shared::format_amount;

use crate::state::DashboardState;

#[component]
pub fn SummaryList(state: DashboardState, currency: String) -> impl IntoView {
    view! {
        <div class="card">
            <h2>"By category"</h2>
            <ul id="summary-list">
                // nothing until the first load lands
                {move || state.page.with(|p| p.as_ref().map(|p| p.summary.clone())).map(|summary| {
                    if summary.is_empty() {
                        view! { <li class="muted">"No expenses"</li> }.into_any()
                    } else {
                        summary.into_iter().map(|item| view! {
                            <li class="summary-item">
                                <span class="cat">{item.category}</span>
                                <span class="sum">{format!("{}{}", currency, format_amount(item.total))}</span>
                            </li>
                        }).collect::<Vec<_>>().into_any()
                    }
                })}
            </ul>
        </div>
    }
}
