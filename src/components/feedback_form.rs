//! Feedback form fields and submit control.

use leptos::prelude::*;

use crate::state::form::FormState;

/// The two bound fields and the always-enabled submit button.
///
/// Submission is routed through `on_submit`; validation and the
/// confirmation delay stay with the page.
#[component]
pub fn FeedbackForm(form: RwSignal<FormState>, on_submit: Callback<()>) -> impl IntoView {
    let on_form_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        on_submit.run(());
    };

    view! {
        <form class="feedback-form" on:submit=on_form_submit>
            <input
                class="feedback-input"
                type="text"
                placeholder="Ваше имя"
                prop:value=move || form.with(|f| f.name.clone())
                on:input=move |ev| form.update(|f| f.set_name(event_target_value(&ev)))
            />
            <textarea
                class="feedback-input feedback-input--message"
                placeholder="Ваше сообщение"
                prop:value=move || form.with(|f| f.message.clone())
                on:input=move |ev| form.update(|f| f.set_message(event_target_value(&ev)))
            ></textarea>
            <button class="feedback-button" type="submit">
                "Отправить"
            </button>
        </form>
    }
}
