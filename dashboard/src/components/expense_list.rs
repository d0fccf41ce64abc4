//! Expense table with filter and sort controls

use leptos::prelude::*;
use shared::ExpenseRow;

use crate::state::{DashboardController, DashboardState};

fn rows(state: DashboardState) -> Vec<ExpenseRow> {
    state
        .page
        .with(|p| p.as_ref().map(|p| p.rows.clone()))
        .unwrap_or_default()
}

fn categories(state: DashboardState) -> Vec<String> {
    state
        .page
        .with(|p| p.as_ref().map(|p| p.filter.categories.clone()))
        .unwrap_or_default()
}

#[component]
pub fn ExpenseList(controller: DashboardController, currency: String) -> impl IntoView {
    let state = *controller.view();

    // overlapping reloads are not cancelled; the last response to land wins
    let reload = move || {
        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            controller.load_and_render().await;
        });
    };
    let reload_on_sort = reload.clone();

    view! {
        <div class="card">
            <h2>"Expenses"</h2>

            <div class="controls">
                <label for="filter-category">"Category"</label>
                <select
                    id="filter-category"
                    on:change=move |ev| {
                        state.filter.set(event_target_value(&ev));
                        reload();
                    }
                >
                    <option value="" prop:selected=move || state.filter.get().is_empty()>"All"</option>
                    {move || {
                        let selected = state.filter.get();
                        categories(state).into_iter().map(|c| {
                            let is_selected = c == selected;
                            let label = c.clone();
                            view! {
                                <option value=c prop:selected=is_selected>{label}</option>
                            }
                        }).collect::<Vec<_>>()
                    }}
                </select>

                <label class="checkbox">
                    <input
                        type="checkbox"
                        id="sort-newest"
                        prop:checked=move || state.sort_newest.get()
                        on:change=move |ev| {
                            state.sort_newest.set(event_target_checked(&ev));
                            reload_on_sort();
                        }
                    />
                    " Newest first"
                </label>
            </div>

            <table id="expenses-table">
                <thead>
                    <tr>
                        <th>"Date"</th>
                        <th>"Category"</th>
                        <th>"Description"</th>
                        <th style="text-align:right">"Amount"</th>
                    </tr>
                </thead>
                <tbody>
                    {move || rows(state).into_iter().map(|row| view! {
                        <tr>
                            <td>{row.date}</td>
                            <td>{row.category}</td>
                            <td>{row.description}</td>
                            <td style="text-align:right">{row.amount}</td>
                        </tr>
                    }).collect::<Vec<_>>()}
                </tbody>
            </table>

            <p class="total">
                "Total: "
                <span id="total">
                    {move || state.page.with(|p| {
                        p.as_ref().map(|p| format!("{}{}", currency, p.total))
                    })}
                </span>
            </p>
        </div>
    }
}
