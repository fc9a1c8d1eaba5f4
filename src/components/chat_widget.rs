//! Floating chat widget backed by the hosted chat endpoint.

#[cfg(test)]
#[path = "chat_widget_test.rs"]
mod chat_widget_test;

use leptos::prelude::*;

use crate::config::SiteConfig;
use crate::state::chat::{ChatRole, ChatState, ChatTurn};

/// Resolve what a send attempt should actually send.
///
/// A quick-reply label wins over the typed input; either way the content is
/// trimmed and an empty result means "do nothing".
fn resolve_send_content(typed: &str, quick: Option<&str>) -> Option<String> {
    let content = quick.unwrap_or(typed).trim();
    if content.is_empty() { None } else { Some(content.to_owned()) }
}

/// Chat trigger button plus the conversation window.
///
/// Opening the window the first time seeds the configured welcome turn.
/// Sends are serialized by the `in_flight` flag; while a request is
/// outstanding the typing indicator shows and further sends are ignored.
#[component]
pub fn ChatWidget() -> impl IntoView {
    let config = expect_context::<StoredValue<SiteConfig>>();
    let chat = expect_context::<RwSignal<ChatState>>();

    let input = RwSignal::new(String::new());
    let messages_ref = NodeRef::<leptos::html::Div>::new();

    // Keep the newest message visible after every append and whenever the
    // typing indicator toggles.
    Effect::new(move || {
        let state = chat.get();
        let _ = (state.turns.len(), state.in_flight);

        #[cfg(feature = "hydrate")]
        {
            if let Some(el) = messages_ref.get() {
                let scroll_height = el.scroll_height();
                el.set_scroll_top(scroll_height);
            }
        }
    });

    let toggle = move |_| {
        config.with_value(|c| chat.update(|state| state.toggle_open(c)));
    };

    let send = move |quick: Option<String>| {
        let typed = input.get_untracked();
        let Some(content) = resolve_send_content(&typed, quick.as_deref()) else {
            return;
        };
        if chat.get_untracked().in_flight {
            return;
        }
        input.set(String::new());

        let prompt = config.with_value(|c| c.chatbot_prompt.clone());
        let mut request = None;
        chat.update(|state| request = state.begin_exchange(content, &prompt));
        let Some(outgoing) = request else {
            return;
        };

        #[cfg(feature = "hydrate")]
        leptos::task::spawn_local(async move {
            let reply = crate::net::chat::send_chat(&outgoing).await;
            chat.update(|state| state.finish_exchange(reply));
        });
        #[cfg(not(feature = "hydrate"))]
        let _ = outgoing;
    };

    let on_keydown = move |ev: leptos::ev::KeyboardEvent| {
        if ev.key() == "Enter" {
            ev.prevent_default();
            send(None);
        }
    };

    let avatar_letter = move || config.with_value(|c| c.avatar_letter.clone());
    let business_name = move || config.with_value(|c| c.business_name.clone());

    view! {
        <div class="yuca">
            <button id="yucaTrigger" class="yuca__trigger" aria-label="Ouvrir le chat" on:click=toggle>
                {avatar_letter}
            </button>
            <div id="yucaWindow" class="yuca__window" class:yuca__window--open=move || chat.get().is_open>
                <div class="yuca__header">
                    <span class="yuca__avatar">{avatar_letter}</span>
                    <span class="yuca__title">{business_name}</span>
                    <button id="yucaClose" class="yuca__close" aria-label="Fermer le chat" on:click=toggle>
                        "×"
                    </button>
                </div>
                <div id="yucaMessages" class="yuca__messages" node_ref=messages_ref>
                    <For
                        each=move || chat.get().turns
                        key=|turn| turn.id.clone()
                        let:turn
                    >
                        <ChatMessage turn=turn on_quick_reply=Callback::new(move |label: String| send(Some(label)))/>
                    </For>
                    {move || {
                        chat.get().in_flight.then(|| {
                            view! {
                                <div class="yuca-typing">
                                    <span></span>
                                    <span></span>
                                    <span></span>
                                </div>
                            }
                        })
                    }}
                </div>
                <div class="yuca__input-row">
                    <input
                        id="yucaInput"
                        class="yuca__input"
                        type="text"
                        placeholder="Écrivez votre message..."
                        prop:value=move || input.get()
                        on:input=move |ev| input.set(event_target_value(&ev))
                        on:keydown=on_keydown
                    />
                    <button id="yucaSend" class="yuca__send" on:click=move |_| send(None)>
                        "Envoyer"
                    </button>
                </div>
            </div>
        </div>
    }
}

/// One rendered transcript turn, with quick replies under assistant turns
/// that carry suggestions.
#[component]
fn ChatMessage(turn: ChatTurn, on_quick_reply: Callback<String>) -> impl IntoView {
    let is_user = turn.role == ChatRole::User;
    let is_bot = turn.role == ChatRole::Assistant;
    let suggestions = turn.suggestions.clone().unwrap_or_default();

    view! {
        <div class="yuca-message" class:yuca-message--user=is_user class:yuca-message--bot=is_bot>
            <div class="yuca-message__text">{turn.content.clone()}</div>
            {(!suggestions.is_empty()).then(|| {
                view! {
                    <div class="yuca-quick-replies">
                        {suggestions
                            .iter()
                            .map(|label| {
                                let value = label.clone();
                                view! {
                                    <button
                                        class="yuca-quick-reply"
                                        on:click=move |_| on_quick_reply.run(value.clone())
                                    >
                                        {label.clone()}
                                    </button>
                                }
                            })
                            .collect::<Vec<_>>()}
                    </div>
                }
            })}
        </div>
    }
}
