//! Single marketing page: nav, hero, contact section, floating chat widget.

use leptos::prelude::*;

use crate::components::chat_widget::ChatWidget;
use crate::components::contact_form::ContactForm;
use crate::components::navbar::SiteNav;
use crate::config::SiteConfig;

#[component]
pub fn LandingPage() -> impl IntoView {
    let config = expect_context::<StoredValue<SiteConfig>>();
    let business_name = move || config.with_value(|c| c.business_name.clone());

    view! {
        <SiteNav/>
        <main id="top" class="site-main">
            <section class="hero">
                <h1 class="hero__title">{business_name}</h1>
                <p class="hero__tagline">"Bienvenue, parlons de votre projet."</p>
            </section>
            <section id="contact" class="contact">
                <h2 class="contact__title">"Contactez-nous"</h2>
                <ContactForm/>
            </section>
        </main>
        <ChatWidget/>
    }
}
