//! seeshu-relay
//!
//! The thin chat bridge: forwards one guardian question to an OpenAI-style
//! completion API and relays the text reply. No retry, no queuing, no
//! conversation state — each call stands alone.
//!
//! Also home to the offline "Guardian" responder, a keyword-rule lookup the
//! chat widget falls back to when no upstream is reachable.

pub mod chat;
pub mod context;
pub mod error;
pub mod guardian;
