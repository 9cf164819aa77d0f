//! Upgrade page the client is sent to when the backend rate-limits it.

use leptos::prelude::*;

#[component]
pub fn PaymentPage() -> impl IntoView {
    view! {
        <main class="payment">
            <div class="payment__card">
                <h1>"Free limit reached"</h1>
                <p>
                    "You have used all transformations included in the free tier for now. "
                    "Upgrade to keep transforming without waiting, or come back later."
                </p>
                <a class="btn btn--primary" href="/">"Back to Reframe"</a>
            </div>
        </main>
    }
}
