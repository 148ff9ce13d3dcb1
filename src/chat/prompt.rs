//! Prompt assembly for the card expert chat.
//!
//! The language model itself is an external collaborator. This module builds
//! the message list sent to it and inspects user questions for card names.

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::cards::{CardId, Catalog};

/// Reply shown when the model returns no text.
pub const FALLBACK_REPLY: &str = "Sorry, I couldn't process your question.";

/// Default persona for the system message.
pub const DEFAULT_PERSONA: &str = "You are an expert in Clash Royale card analysis. \
You give detailed, useful information about cards, their strategies, synergies and game mechanics. \
Here is the database of available cards:";

/// Words that mark a message as a question about a card.
const CARD_KEYWORDS: [&str; 2] = ["card", "carta"];

/// Author of a chat message.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatRole {
    System,
    User,
    Assistant,
}

/// One message in a conversation.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatMessage {
    pub role: ChatRole,
    pub content: String,
}

impl ChatMessage {
    /// Create a message.
    #[must_use]
    pub fn new(role: ChatRole, content: impl Into<String>) -> Self {
        Self {
            role,
            content: content.into(),
        }
    }

    /// Create a user message.
    #[must_use]
    pub fn user(content: impl Into<String>) -> Self {
        Self::new(ChatRole::User, content)
    }

    /// Create an assistant message.
    #[must_use]
    pub fn assistant(content: impl Into<String>) -> Self {
        Self::new(ChatRole::Assistant, content)
    }
}

/// Prompt settings.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ChatConfig {
    /// Past messages included in a prompt (default: 20).
    pub history_limit: usize,

    /// Opening of the system message, followed by the card list.
    pub persona: String,
}

impl Default for ChatConfig {
    fn default() -> Self {
        Self {
            history_limit: 20,
            persona: DEFAULT_PERSONA.to_string(),
        }
    }
}

impl ChatConfig {
    /// Load from JSON; missing fields keep their defaults.
    pub fn from_json(json: &str) -> Result<Self, serde_json::Error> {
        serde_json::from_str(json)
    }

    /// Set how many past messages go into a prompt.
    #[must_use]
    pub fn with_history_limit(mut self, limit: usize) -> Self {
        self.history_limit = limit;
        self
    }

    /// Set the opening of the system message.
    #[must_use]
    pub fn with_persona(mut self, persona: impl Into<String>) -> Self {
        self.persona = persona.into();
        self
    }
}

/// One line per catalog card: `"{name} ({type}, {elixir} elixir): {description}"`.
#[must_use]
pub fn catalog_context(catalog: &Catalog) -> String {
    catalog
        .iter()
        .map(|card| {
            format!(
                "{} ({}, {} elixir): {}",
                card.name, card.card_type, card.elixir_cost, card.description
            )
        })
        .collect::<Vec<_>>()
        .join("\n")
}

/// IDs of catalog cards named in `message`, in catalog order.
///
/// Matching is case-insensitive substring search.
#[must_use]
pub fn card_references(message: &str, catalog: &Catalog) -> Vec<CardId> {
    let message = message.to_lowercase();
    catalog
        .iter()
        .filter(|card| message.contains(&card.name.to_lowercase()))
        .map(|card| card.id)
        .collect()
}

/// True when `message` asks about a card but names none from the catalog.
#[must_use]
pub fn asks_about_unknown_card(message: &str, catalog: &Catalog) -> bool {
    let lowered = message.to_lowercase();
    if !CARD_KEYWORDS.iter().any(|k| lowered.contains(k)) {
        return false;
    }
    if card_references(message, catalog).is_empty() {
        warn!(question = message, "question about a card missing from the catalog");
        return true;
    }
    false
}

/// Builds the message list for one chat turn.
///
/// ## Example
///
/// ```
/// use royale_deck::cards::base_catalog;
/// use royale_deck::chat::{ChatConfig, ChatMessage, ChatRole, PromptBuilder};
///
/// let catalog = base_catalog();
/// let builder = PromptBuilder::new(ChatConfig::default());
/// let history = vec![
///     ChatMessage::assistant("Use it against swarms."),
///     ChatMessage::user("What is Zap good for?"),
/// ];
///
/// let messages = builder.build(&catalog, &history, "And the Log?");
/// assert_eq!(messages.len(), 4);
/// assert_eq!(messages[0].role, ChatRole::System);
/// assert_eq!(messages[1].content, "What is Zap good for?");
/// assert_eq!(messages[3].content, "And the Log?");
/// ```
#[derive(Clone, Debug, Default)]
pub struct PromptBuilder {
    config: ChatConfig,
}

impl PromptBuilder {
    /// Create a builder with the given settings.
    #[must_use]
    pub fn new(config: ChatConfig) -> Self {
        Self { config }
    }

    /// Get the prompt settings.
    #[must_use]
    pub fn config(&self) -> &ChatConfig {
        &self.config
    }

    /// The system message, then history oldest first, then `user_message`.
    ///
    /// `history` is newest first, as returned by the message store; only the
    /// newest `history_limit` entries are kept.
    #[must_use]
    pub fn build(
        &self,
        catalog: &Catalog,
        history: &[ChatMessage],
        user_message: &str,
    ) -> Vec<ChatMessage> {
        let kept = history.len().min(self.config.history_limit);
        let mut messages = Vec::with_capacity(kept + 2);

        messages.push(ChatMessage::new(
            ChatRole::System,
            format!("{}\n\n{}", self.config.persona, catalog_context(catalog)),
        ));
        messages.extend(history[..kept].iter().rev().cloned());
        messages.push(ChatMessage::user(user_message));
        messages
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cards::{Card, CardType, Rarity};

    fn catalog() -> Catalog {
        Catalog::from_cards([
            Card::new(CardId::new(1), "Knight", CardType::Troop, 3, Rarity::Common)
                .with_description("A tough melee fighter."),
            Card::new(CardId::new(2), "Zap", CardType::Spell, 2, Rarity::Common)
                .with_description("Stuns briefly."),
            Card::new(CardId::new(3), "Mega Knight", CardType::Troop, 7, Rarity::Legendary),
        ])
        .unwrap()
    }

    #[test]
    fn test_catalog_context_lines() {
        let context = catalog_context(&catalog());
        let lines: Vec<_> = context.lines().collect();

        assert_eq!(lines.len(), 3);
        assert_eq!(lines[0], "Knight (Troop, 3 elixir): A tough melee fighter.");
        assert_eq!(lines[1], "Zap (Spell, 2 elixir): Stuns briefly.");
    }

    #[test]
    fn test_build_orders_history_oldest_first() {
        let builder = PromptBuilder::new(ChatConfig::default().with_persona("Expert."));
        let history = [
            ChatMessage::assistant("third"),
            ChatMessage::user("second"),
            ChatMessage::assistant("first"),
        ];

        let messages = builder.build(&catalog(), &history, "now");
        let contents: Vec<_> = messages[1..].iter().map(|m| m.content.as_str()).collect();

        assert_eq!(contents, ["first", "second", "third", "now"]);
        assert!(messages[0].content.starts_with("Expert.\n\nKnight (Troop"));
        assert_eq!(messages[4].role, ChatRole::User);
    }

    #[test]
    fn test_build_truncates_history() {
        let builder = PromptBuilder::new(ChatConfig::default().with_history_limit(2));
        let history: Vec<_> = (0..5).map(|i| ChatMessage::user(format!("m{i}"))).collect();

        let messages = builder.build(&catalog(), &history, "q");
        let contents: Vec<_> = messages[1..].iter().map(|m| m.content.as_str()).collect();

        // m0 is the newest entry
        assert_eq!(contents, ["m1", "m0", "q"]);
    }

    #[test]
    fn test_card_references() {
        let catalog = catalog();
        assert_eq!(
            card_references("Is MEGA KNIGHT better than zap?", &catalog),
            [CardId::new(1), CardId::new(2), CardId::new(3)]
        );
        assert!(card_references("hello", &catalog).is_empty());
    }

    #[test]
    fn test_asks_about_unknown_card() {
        let catalog = catalog();
        assert!(asks_about_unknown_card("Tell me about the Goblin Drill card", &catalog));
        assert!(asks_about_unknown_card("Qual a melhor carta?", &catalog));
        assert!(!asks_about_unknown_card("Is Knight a good card?", &catalog));
        assert!(!asks_about_unknown_card("hello there", &catalog));
    }

    #[test]
    fn test_config_from_json() {
        let config = ChatConfig::from_json(r#"{"history_limit": 5}"#).unwrap();
        assert_eq!(config.history_limit, 5);
        assert_eq!(config.persona, DEFAULT_PERSONA);
    }

    #[test]
    fn test_message_json() {
        let json = serde_json::to_value(ChatMessage::assistant("hi")).unwrap();
        assert_eq!(json["role"], "assistant");
        assert_eq!(json["content"], "hi");
    }
}
