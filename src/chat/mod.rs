//! Card expert chat support.
//!
//! Builds the prompt for the external language model and flags questions
//! about cards the catalog does not know.

pub mod prompt;

pub use prompt::{
    asks_about_unknown_card, card_references, catalog_context, ChatConfig, ChatMessage, ChatRole,
    PromptBuilder, DEFAULT_PERSONA, FALLBACK_REPLY,
};
