//! Feedback page: field editing, validation gating, and the delayed
//! thank-you confirmation.

use gloo_timers::callback::Timeout;
use leptos::prelude::*;

use crate::components::feedback_form::FeedbackForm;
use crate::state::form::{CONFIRMATION_DELAY_MS, FormState};

#[component]
pub fn FeedbackPage() -> impl IntoView {
    let form = RwSignal::new(FormState::default());
    // Timeout cancels on drop. The handle is !Send, so it lives in
    // reactive-local storage owned by this page.
    let confirm_timer = StoredValue::new_local(None::<Timeout>);

    let on_submit = Callback::new(move |_| {
        let mut accepted = false;
        form.update(|f| accepted = f.submit());
        if !accepted {
            log::debug!("submission rejected; nothing scheduled");
            return;
        }
        log::info!("submission accepted; confirming in {CONFIRMATION_DELAY_MS}ms");
        let timeout = Timeout::new(CONFIRMATION_DELAY_MS, move || {
            form.update(FormState::finish_submission);
        });
        confirm_timer.set_value(Some(timeout));
    });

    // A late timer must not mutate a torn-down page.
    on_cleanup(move || confirm_timer.set_value(None));

    view! {
        <div class="feedback-page">
            <div class="feedback-card">
                <h1>"Обратная связь"</h1>
                <FeedbackForm form on_submit/>
                <Show when=move || form.with(FormState::submitted)>
                    <p class="feedback-message">
                        {move || form.with(FormState::confirmation_message)}
                    </p>
                </Show>
            </div>
        </div>
    }
}
