//! Site configuration supplied by the host page.
//!
//! DESIGN
//! ======
//! The host page defines a `window.SITE_CONFIG` object before the WASM bundle
//! loads. That global is read exactly once at mount and frozen into an
//! immutable [`SiteConfig`] provided via context, so no component depends on
//! ambient mutable state. Missing or malformed fields fall back to built-in
//! defaults instead of failing the mount.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

/// Immutable per-site configuration for the widget layer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SiteConfig {
    /// Display name of the business, also the basis of the lead `source` tag.
    pub business_name: String,
    /// System prompt sent as the first message of every chat request.
    pub chatbot_prompt: String,
    /// Assistant message rendered when the chat window first opens.
    pub chatbot_welcome: String,
    /// Quick replies offered under the welcome message.
    pub chatbot_suggestions: Vec<String>,
    /// Single letter shown in the chat trigger button and window header.
    pub avatar_letter: String,
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            business_name: "Site Yuca".to_owned(),
            chatbot_prompt: "Tu es l’assistant du restaurant.".to_owned(),
            chatbot_welcome: "Bonjour ! Comment puis-je vous aider ?".to_owned(),
            chatbot_suggestions: Vec::new(),
            avatar_letter: "Y".to_owned(),
        }
    }
}

impl SiteConfig {
    /// Merge optional host-supplied fields over the defaults.
    ///
    /// Blank strings count as absent so a sloppy host page cannot blank out
    /// the prompt or the avatar.
    pub fn from_parts(
        business_name: Option<String>,
        chatbot_prompt: Option<String>,
        chatbot_welcome: Option<String>,
        chatbot_suggestions: Option<Vec<String>>,
        avatar_letter: Option<String>,
    ) -> Self {
        let defaults = Self::default();
        Self {
            business_name: non_blank(business_name).unwrap_or(defaults.business_name),
            chatbot_prompt: non_blank(chatbot_prompt).unwrap_or(defaults.chatbot_prompt),
            chatbot_welcome: non_blank(chatbot_welcome).unwrap_or(defaults.chatbot_welcome),
            chatbot_suggestions: chatbot_suggestions.unwrap_or(defaults.chatbot_suggestions),
            avatar_letter: non_blank(avatar_letter).unwrap_or(defaults.avatar_letter),
        }
    }

    /// Read `window.SITE_CONFIG` once. Defaults on the server and on pages
    /// that never defined the global.
    pub fn from_global() -> Self {
        #[cfg(feature = "hydrate")]
        {
            let Some(window) = web_sys::window() else {
                return Self::default();
            };
            let raw = js_sys::Reflect::get(&window, &wasm_bindgen::JsValue::from_str("SITE_CONFIG"))
                .ok()
                .filter(wasm_bindgen::JsValue::is_object);
            let Some(raw) = raw else {
                return Self::default();
            };

            let get_string = |key: &str| {
                js_sys::Reflect::get(&raw, &wasm_bindgen::JsValue::from_str(key))
                    .ok()
                    .and_then(|value| value.as_string())
            };
            let suggestions = js_sys::Reflect::get(&raw, &wasm_bindgen::JsValue::from_str("chatbotSuggestions"))
                .ok()
                .filter(js_sys::Array::is_array)
                .map(|value| {
                    js_sys::Array::from(&value)
                        .iter()
                        .filter_map(|entry| entry.as_string())
                        .collect()
                });

            Self::from_parts(
                get_string("businessName"),
                get_string("chatbotPrompt"),
                get_string("chatbotWelcome"),
                suggestions,
                get_string("avatarLetter"),
            )
        }
        #[cfg(not(feature = "hydrate"))]
        {
            Self::default()
        }
    }
}

fn non_blank(value: Option<String>) -> Option<String> {
    value.filter(|s| !s.trim().is_empty())
}
