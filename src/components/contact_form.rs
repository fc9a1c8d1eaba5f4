//! Contact form posting leads to the capture endpoint.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::net::lead::Lead;
use crate::state::form::{SUBMIT_IDLE_LABEL, SubmitStatus};

/// Contact form with submit-button feedback.
///
/// Submission is fire-and-forget: success clears the fields, failure only
/// recolors the button, and either way the button restores itself after
/// [`crate::state::form::RESET_DELAY_MS`]. The reset sleep lives in the
/// component's spawned task, so tearing the form down drops it.
#[component]
pub fn ContactForm() -> impl IntoView {
    let config = expect_context::<StoredValue<SiteConfig>>();

    let name = RwSignal::new(String::new());
    let email = RwSignal::new(String::new());
    let phone = RwSignal::new(String::new());
    let message = RwSignal::new(String::new());
    let status = RwSignal::new(SubmitStatus::Idle);

    let on_submit = move |ev: leptos::ev::SubmitEvent| {
        ev.prevent_default();
        if status.get_untracked().is_busy() {
            return;
        }
        let lead = config.with_value(|c| {
            Lead::from_fields(c, &name.get_untracked(), &email.get_untracked(), &phone.get_untracked(), &message.get_untracked())
        });
        status.set(SubmitStatus::Sending);

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            match crate::net::lead::submit_lead(&lead).await {
                Ok(()) => {
                    status.set(SubmitStatus::Sent);
                    name.set(String::new());
                    email.set(String::new());
                    phone.set(String::new());
                    message.set(String::new());
                }
                Err(_) => status.set(SubmitStatus::Failed),
            }
            gloo_timers::future::sleep(std::time::Duration::from_millis(crate::state::form::RESET_DELAY_MS)).await;
            status.set(SubmitStatus::Idle);
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = lead;
    };

    view! {
        <form id="contactForm" class="contact-form" on:submit=on_submit>
            <input
                id="name"
                class="contact-form__field"
                type="text"
                placeholder="Nom"
                prop:value=move || name.get()
                on:input=move |ev| name.set(event_target_value(&ev))
            />
            <input
                id="email"
                class="contact-form__field"
                type="email"
                placeholder="Email"
                prop:value=move || email.get()
                on:input=move |ev| email.set(event_target_value(&ev))
            />
            <input
                id="phone"
                class="contact-form__field"
                type="tel"
                placeholder="Téléphone"
                prop:value=move || phone.get()
                on:input=move |ev| phone.set(event_target_value(&ev))
            />
            <textarea
                id="message"
                class="contact-form__field contact-form__field--message"
                placeholder="Votre projet"
                prop:value=move || message.get()
                on:input=move |ev| message.set(event_target_value(&ev))
            ></textarea>
            <button
                class="contact-form__submit"
                type="submit"
                disabled=move || status.get().is_busy()
                style:background=move || status.get().background()
            >
                {move || status.get().label(SUBMIT_IDLE_LABEL).to_owned()}
            </button>
        </form>
    }
}
