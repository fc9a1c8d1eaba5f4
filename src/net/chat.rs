//! Chat endpoint call and reply-envelope parsing.
//!
//! The endpoint mirrors a language-model messages API: the request carries
//! the full conversation (system prompt first), the reply carries a `content`
//! sequence whose first block holds the text. Parsing is pure so the envelope
//! and the suggestion extraction are testable without a browser.
//!
//! Quick-reply suggestions arrive either as a structured `suggestions` field
//! on the envelope or, for older deployments, embedded in the text as a
//! `[SUGGESTIONS:a|b|c]` marker. The structured field wins; the marker is
//! stripped from the displayed text either way.

#[cfg(test)]
#[path = "chat_test.rs"]
mod chat_test;

#[cfg(any(test, feature = "hydrate"))]
use serde::Deserialize;
use serde::Serialize;

pub const CHAT_ENDPOINT: &str = "https://yuca-api.vercel.app/api/chat";

#[cfg(any(test, feature = "hydrate"))]
const SUGGESTION_MARKER_OPEN: &str = "[SUGGESTIONS:";

/// One conversation message as the endpoint expects it.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct WireMessage {
    pub role: String,
    pub content: String,
}

#[cfg(feature = "hydrate")]
#[derive(Serialize)]
struct ChatRequest<'a> {
    messages: &'a [WireMessage],
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
struct ReplyEnvelope {
    content: Vec<ReplyBlock>,
    #[serde(default)]
    suggestions: Option<Vec<String>>,
}

#[cfg(any(test, feature = "hydrate"))]
#[derive(Deserialize)]
struct ReplyBlock {
    text: String,
}

/// A parsed assistant reply: display text plus optional quick replies.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct BotReply {
    pub text: String,
    pub suggestions: Option<Vec<String>>,
}

#[cfg(any(test, feature = "hydrate"))]
fn chat_request_failed_message(status: u16) -> String {
    format!("chat request failed: {status}")
}

#[cfg(any(test, feature = "hydrate"))]
fn reply_parse_failed_message(detail: &str) -> String {
    format!("chat reply parse failed: {detail}")
}

#[cfg(any(test, feature = "hydrate"))]
const EMPTY_REPLY_MESSAGE: &str = "chat reply carried no content";

/// Split the first `[SUGGESTIONS:a|b|c]` marker out of a reply text.
///
/// Returns the text with the marker removed (outer whitespace trimmed) and
/// the trimmed, non-empty labels. Only the first marker is consumed; any
/// later occurrence stays in the text untouched.
#[cfg(any(test, feature = "hydrate"))]
fn extract_marker(text: &str) -> Option<(String, Vec<String>)> {
    let start = text.find(SUGGESTION_MARKER_OPEN)?;
    let after_open = &text[start + SUGGESTION_MARKER_OPEN.len()..];
    let close = after_open.find(']')?;

    let labels = after_open[..close]
        .split('|')
        .map(str::trim)
        .filter(|label| !label.is_empty())
        .map(str::to_owned)
        .collect();

    let mut cleaned = String::with_capacity(text.len());
    cleaned.push_str(&text[..start]);
    cleaned.push_str(&after_open[close + 1..]);
    Some((cleaned.trim().to_owned(), labels))
}

#[cfg(any(test, feature = "hydrate"))]
fn non_empty(labels: Vec<String>) -> Option<Vec<String>> {
    if labels.is_empty() { None } else { Some(labels) }
}

/// Parse a raw reply body into display text and suggestions.
#[cfg(any(test, feature = "hydrate"))]
fn parse_reply(body: &str) -> Result<BotReply, String> {
    let envelope: ReplyEnvelope =
        serde_json::from_str(body).map_err(|e| reply_parse_failed_message(&e.to_string()))?;
    let raw = envelope
        .content
        .into_iter()
        .next()
        .map(|block| block.text)
        .ok_or_else(|| EMPTY_REPLY_MESSAGE.to_owned())?;

    let (text, marker_labels) = match extract_marker(&raw) {
        Some((cleaned, labels)) => (cleaned, non_empty(labels)),
        None => (raw.trim().to_owned(), None),
    };
    let suggestions = envelope.suggestions.and_then(non_empty).or(marker_labels);

    Ok(BotReply { text, suggestions })
}

/// Send the full conversation to the chat endpoint and parse the reply.
///
/// # Errors
///
/// Returns an error string on transport failure, non-2xx status, or a reply
/// that does not match the expected envelope. Callers map every error to the
/// same fallback turn.
pub async fn send_chat(messages: &[WireMessage]) -> Result<BotReply, String> {
    #[cfg(feature = "hydrate")]
    {
        let payload = ChatRequest { messages };
        let resp = gloo_net::http::Request::post(CHAT_ENDPOINT)
            .json(&payload)
            .map_err(|e| e.to_string())?
            .send()
            .await
            .map_err(|e| {
                log::warn!("chat request failed to send: {e}");
                e.to_string()
            })?;
        if !resp.ok() {
            log::warn!("chat endpoint returned status {}", resp.status());
            return Err(chat_request_failed_message(resp.status()));
        }
        let body = resp.text().await.map_err(|e| e.to_string())?;
        parse_reply(&body)
    }
    #[cfg(not(feature = "hydrate"))]
    {
        let _ = messages;
        Err("not available on server".to_owned())
    }
}
