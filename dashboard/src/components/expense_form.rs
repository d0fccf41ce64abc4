//! New expense form component

use leptos::ev::SubmitEvent;
use leptos::prelude::*;
use shared::FormField;

use crate::state::DashboardController;

#[component]
pub fn ExpenseForm(controller: DashboardController) -> impl IntoView {
    let state = *controller.view();

    let on_submit = move |ev: SubmitEvent| {
        ev.prevent_default();
        let controller = controller.clone();
        leptos::task::spawn_local(async move {
            let outcome = controller.submit().await;
            log::debug!("submit finished: {:?}", outcome);
        });
    };

    view! {
        <div class="card">
            <h2>"Add expense"</h2>

            // browser constraint validation is off; the controller validates
            <form id="expense-form" novalidate=true on:submit=on_submit>
                <div class="input-group">
                    <label for="amount">"Amount"</label>
                    <input
                        id="amount"
                        type="number"
                        step="0.01"
                        placeholder="0.00"
                        node_ref=state.refs.amount
                        class:invalid=move || state.is_invalid(FormField::Amount)
                        prop:value=move || state.amount.get()
                        on:input=move |ev| {
                            state.amount.set(event_target_value(&ev));
                            state.clear_invalid_field(FormField::Amount);
                        }
                        on:change=move |_| state.clear_invalid_field(FormField::Amount)
                    />
                </div>

                <div class="input-group">
                    <label for="category">"Category"</label>
                    <input
                        id="category"
                        type="text"
                        placeholder="food, rent, travel..."
                        node_ref=state.refs.category
                        class:invalid=move || state.is_invalid(FormField::Category)
                        prop:value=move || state.category.get()
                        on:input=move |ev| {
                            state.category.set(event_target_value(&ev));
                            state.clear_invalid_field(FormField::Category);
                        }
                        on:change=move |_| state.clear_invalid_field(FormField::Category)
                    />
                </div>

                <div class="input-group">
                    <label for="description">"Description"</label>
                    <input
                        id="description"
                        type="text"
                        prop:value=move || state.description.get()
                        on:input=move |ev| state.description.set(event_target_value(&ev))
                    />
                </div>

                <div class="input-group">
                    <label for="date">"Date"</label>
                    <input
                        id="date"
                        type="date"
                        node_ref=state.refs.date
                        class:invalid=move || state.is_invalid(FormField::Date)
                        prop:value=move || state.date.get()
                        on:input=move |ev| {
                            state.date.set(event_target_value(&ev));
                            state.clear_invalid_field(FormField::Date);
                        }
                        on:change=move |ev| {
                            state.date.set(event_target_value(&ev));
                            state.clear_invalid_field(FormField::Date);
                        }
                    />
                </div>

                <button id="submit" type="submit" disabled=move || state.submitting.get()>
                    {move || if state.submitting.get() {
                        view! { <span class="spinner"></span> " Saving..." }.into_any()
                    } else {
                        view! { "Add" }.into_any()
                    }}
                </button>
            </form>

            <p id="status" class="status" role="status">{move || state.status.get()}</p>
        </div>
    }
}
