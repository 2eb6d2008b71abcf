use gloo_net::http::Request;
use leptos::prelude::*;
use leptos::task::spawn_local;

use super::QUOTE_ENDPOINT;
use crate::quote::{QuoteRequest, SubmitStatus};

/// Quote-request dialog. Rendered under a single `Show`, so opening it
/// twice cannot stack a second copy.
#[component]
pub fn QuoteModal(open: RwSignal<bool>) -> impl IntoView {
    let (name, set_name) = signal(String::new());
    let (email, set_email) = signal(String::new());
    let (message, set_message) = signal(String::new());
    let (status, set_status) = signal(SubmitStatus::default());

    let close = move |_| {
        open.set(false);
        set_status.set(SubmitStatus::Idle);
    };

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_busy() {
            return;
        }
        let request = QuoteRequest::new(
            name.get_untracked(),
            email.get_untracked(),
            message.get_untracked(),
        );
        // The `required`/`type="email"` inputs stop the event before it
        // reaches us; this covers browsers with validation disabled.
        if let Err(err) = request.validate() {
            set_status.set(SubmitStatus::Failed(err.to_string()));
            return;
        }
        set_status.set(SubmitStatus::Submitting);
        spawn_local(async move {
            match Request::post(QUOTE_ENDPOINT)
                .header("Content-Type", "application/x-www-form-urlencoded")
                .header("Accept", "application/json")
                .body(request.form_body())
                .send()
                .await
            {
                Ok(response) if response.ok() => {
                    set_name.set(String::new());
                    set_email.set(String::new());
                    set_message.set(String::new());
                    set_status.set(SubmitStatus::Succeeded);
                }
                Ok(response) => {
                    let reason = format!("form backend answered {}", response.status());
                    web_sys::console::error_1(
                        &format!("quote submission failed: {reason}").into(),
                    );
                    set_status.set(SubmitStatus::Failed(reason));
                }
                Err(err) => {
                    web_sys::console::error_1(
                        &format!("quote submission failed: {err}").into(),
                    );
                    set_status.set(SubmitStatus::Failed(err.to_string()));
                }
            }
        });
    };

    view! {
        <Show when=move || open.get()>
            <div class="modal-backdrop" on:click=close>
                <div class="modal" on:click=move |ev| ev.stop_propagation()>
                    <div class="modal-header">
                        <h3 class="modal-title">"Request a Quote"</h3>
                        <button class="modal-close" aria-label="Close" on:click=close>
                            "✕"
                        </button>
                    </div>
                    <Show
                        when=move || status.get() != SubmitStatus::Succeeded
                        fallback=move || view! {
                            <div class="modal-success">
                                <p class="modal-success-text">
                                    "Thanks! Your request is on its way. "
                                    "We'll get back to you shortly."
                                </p>
                                <button class="btn btn-primary" on:click=close>
                                    "Close"
                                </button>
                            </div>
                        }
                    >
                        <form class="quote-form" on:submit=on_submit>
                            {move || match status.get() {
                                SubmitStatus::Failed(reason) => Some(view! {
                                    <div class="form-error">
                                        {format!("Something went wrong: {reason}. Please try again.")}
                                    </div>
                                }),
                                _ => None,
                            }}
                            <label class="form-label" for="quote-name">"Name"</label>
                            <input
                                id="quote-name"
                                class="form-input"
                                type="text"
                                name="name"
                                required
                                prop:value=move || name.get()
                                on:input=move |ev| set_name.set(event_target_value(&ev))
                            />
                            <label class="form-label" for="quote-email">"Email"</label>
                            <input
                                id="quote-email"
                                class="form-input"
                                type="email"
                                name="email"
                                required
                                prop:value=move || email.get()
                                on:input=move |ev| set_email.set(event_target_value(&ev))
                            />
                            <label class="form-label" for="quote-message">"Message"</label>
                            <textarea
                                id="quote-message"
                                class="form-input"
                                name="message"
                                rows="5"
                                required
                                prop:value=move || message.get()
                                on:input=move |ev| set_message.set(event_target_value(&ev))
                            ></textarea>
                            <button
                                class="btn btn-primary"
                                type="submit"
                                disabled=move || status.get().is_busy()
                            >
                                {move || if status.get().is_busy() { "Sending..." } else { "Send Request" }}
                            </button>
                        </form>
                    </Show>
                </div>
            </div>
        </Show>
    }
}
