//! Site navigation bar: scroll condensation and the mobile menu.

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::nav::NavState;
use crate::util::scroll::set_body_scroll_locked;

/// Navigation bar with burger-driven mobile menu and overlay.
///
/// The `nav--scrolled` class is derived from the window scroll offset on
/// every scroll event; the mobile menu mirrors its open flag into a body
/// scroll lock.
#[component]
pub fn SiteNav() -> impl IntoView {
    let config = expect_context::<StoredValue<SiteConfig>>();
    let nav = expect_context::<RwSignal<NavState>>();

    #[cfg(feature = "hydrate")]
    {
        let handle = window_event_listener(leptos::ev::scroll, move |_| {
            let offset = crate::util::scroll::window_scroll_y();
            nav.update(|n| n.scrolled = crate::state::nav::is_scrolled(offset));
        });
        on_cleanup(move || handle.remove());
    }

    let toggle_menu = move |_| {
        nav.update(NavState::toggle_menu);
        set_body_scroll_locked(nav.get_untracked().menu_open);
    };

    let business_name = move || config.with_value(|c| c.business_name.clone());

    view! {
        <nav id="nav" class="nav" class:nav--scrolled=move || nav.get().scrolled>
            <div class="nav__inner">
                <a class="nav__logo" href="#top">{business_name}</a>
                <div class="nav__links">
                    <a class="nav__link" href="#top">"Accueil"</a>
                    <a class="nav__link" href="#contact">"Contact"</a>
                </div>
                <button
                    id="navBurger"
                    class="nav__burger"
                    class:nav__burger--open=move || nav.get().menu_open
                    aria-label="Menu"
                    on:click=toggle_menu
                >
                    <span></span>
                    <span></span>
                    <span></span>
                </button>
            </div>
        </nav>
        <div id="navMobile" class="nav-mobile" class:nav-mobile--open=move || nav.get().menu_open>
            <a class="nav-mobile__link" href="#top" on:click=toggle_menu>"Accueil"</a>
            <a class="nav-mobile__link" href="#contact" on:click=toggle_menu>"Contact"</a>
        </div>
        <div
            id="navOverlay"
            class="nav-overlay"
            class:nav-overlay--visible=move || nav.get().menu_open
            on:click=toggle_menu
        ></div>
    }
}
