//! Root application component and context providers.

use leptos::prelude::*;
use leptos_meta::{MetaTags, Stylesheet, Title, provide_meta_context};

use crate::config::SiteConfig;
use crate::pages::landing::LandingPage;
use crate::state::chat::ChatState;
use crate::state::nav::NavState;

/// HTML shell rendered on the server for SSR + hydration.
pub fn shell(options: LeptosOptions) -> impl IntoView {
    view! {
        <!DOCTYPE html>
        <html lang="fr">
            <head>
                <meta charset="utf-8"/>
                <meta name="viewport" content="width=device-width, initial-scale=1"/>
                <AutoReload options=options.clone()/>
                <HydrationScripts options/>
                <MetaTags/>
            </head>
            <body>
                <App/>
            </body>
        </html>
    }
}

/// Root component.
///
/// Reads the host page's `SITE_CONFIG` global exactly once, freezes it, and
/// provides it plus the widget state contexts to every child.
#[component]
pub fn App() -> impl IntoView {
    provide_meta_context();

    let config = StoredValue::new(SiteConfig::from_global());
    let nav = RwSignal::new(NavState::default());
    let chat = RwSignal::new(ChatState::default());

    provide_context(config);
    provide_context(nav);
    provide_context(chat);

    let title = config.with_value(|c| c.business_name.clone());

    view! {
        <Stylesheet id="leptos" href="/pkg/yuca-site.css"/>
        <Title text=title/>

        <LandingPage/>
    }
}
