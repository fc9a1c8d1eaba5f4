//! Typed JSON calls to the hosted Yuca API.
//!
//! Client-side (hydrate): real HTTP calls via `gloo-net`.
//! Server-side (SSR): stubs returning errors since both endpoints are only
//! meaningful in the browser.

pub mod chat;
pub mod lead;
