//! Header component

use leptos::prelude::*;

#[component]
pub fn Header() -> impl IntoView {
    view! {
        <header class="header">
            <div>
                <h1>"Expense Tracker"</h1>
                <p class="subtitle">"Personal spending, by day and by category"</p>
            </div>
        </header>
    }
}
