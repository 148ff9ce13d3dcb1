//! Deck analyzer tests.
//!
//! Covers the balance rules, average elixir rounding and suggested additions
//! against small hand-built catalogs, plus add-card properties.

use proptest::prelude::*;

use royale_deck::cards::{base_catalog, Card, CardId, CardType, Catalog, Rarity};
use royale_deck::deck::{
    average_elixir, BalanceRule, Deck, DeckAnalyzer, DeckRejection, SuggestionKind, DECK_SIZE,
};

fn card(id: u32, card_type: CardType, cost: u8) -> Card {
    Card::new(CardId::new(id), format!("Card {id}"), card_type, cost, Rarity::Common)
}

fn troops(costs: &[u8]) -> Vec<Card> {
    costs
        .iter()
        .zip(1..)
        .map(|(&cost, id)| card(id, CardType::Troop, cost))
        .collect()
}

fn deck_of(cards: &[Card]) -> Deck {
    Deck::from_cards(cards).expect("Cards should fit")
}

fn elixir_messages(deck: &Deck) -> Vec<String> {
    let analyzer = DeckAnalyzer::default();
    analyzer
        .balance_suggestions(deck, average_elixir(deck))
        .into_iter()
        .filter(|s| s.rule == BalanceRule::ElixirCost)
        .map(|s| s.message)
        .collect()
}

#[test]
fn test_average_of_empty_deck_is_zero() {
    assert_eq!(average_elixir(&Deck::new()), 0.0);
}

#[test]
fn test_average_of_one_to_eight() {
    let deck = deck_of(&troops(&[1, 2, 3, 4, 5, 6, 7, 8]));
    assert_eq!(average_elixir(&deck), 4.5);
}

#[test]
fn test_average_rounds_to_one_decimal() {
    // 11 / 3 = 3.666...
    assert_eq!(average_elixir(&deck_of(&troops(&[3, 4, 4]))), 3.7);
    // 10 / 3 = 3.333...
    assert_eq!(average_elixir(&deck_of(&troops(&[3, 3, 4]))), 3.3);
}

#[test]
fn test_expensive_deck_warning() {
    let deck = deck_of(&troops(&[5, 5, 5, 5]));
    assert_eq!(
        elixir_messages(&deck),
        ["Deck is too expensive! Consider adding cards with a lower elixir cost."]
    );
}

#[test]
fn test_cheap_deck_warning() {
    let deck = deck_of(&troops(&[2, 3, 2, 3]));
    assert_eq!(
        elixir_messages(&deck),
        ["Deck is too cheap! Add higher-cost cards for more power."]
    );
}

#[test]
fn test_balanced_deck_has_no_warnings() {
    // 3 troops and 1 spell averaging 3.5
    let mut cards = troops(&[3, 4, 3]);
    cards.push(card(9, CardType::Spell, 4));
    let deck = deck_of(&cards);

    let suggestions = DeckAnalyzer::default().balance_suggestions(&deck, average_elixir(&deck));

    assert_eq!(suggestions.len(), 1);
    assert_eq!(suggestions[0].kind, SuggestionKind::Success);
    assert_eq!(suggestions[0].message, "Elixir cost is well balanced!");
}

#[test]
fn test_troop_and_spell_warnings() {
    let deck = deck_of(&[card(1, CardType::Building, 4), card(2, CardType::Troop, 3)]);
    let suggestions = DeckAnalyzer::default().balance_suggestions(&deck, average_elixir(&deck));

    let rules: Vec<_> = suggestions.iter().map(|s| s.rule).collect();
    assert_eq!(rules, [BalanceRule::ElixirCost, BalanceRule::TroopCount, BalanceRule::SpellCount]);
    assert_eq!(suggestions[1].message, "You only have 1 troops. Consider adding more.");
    assert_eq!(
        suggestions[2].message,
        "Your deck has no spells! Add at least one for more versatility."
    );
}

#[test]
fn test_empty_deck_has_no_suggestions() {
    let deck = Deck::new();
    assert!(DeckAnalyzer::default().balance_suggestions(&deck, 0.0).is_empty());
}

#[test]
fn test_empty_deck_gets_expensive_additions() {
    // average 0 is below the cheap threshold
    let analysis = DeckAnalyzer::default().analyze(&Deck::new(), &base_catalog());

    assert_eq!(analysis.average_elixir, 0.0);
    assert!(analysis.suggestions.is_empty());
    let additions: Vec<_> = analysis
        .suggested_additions
        .iter()
        .map(|c| (c.id.raw(), c.elixir_cost))
        .collect();
    // Giant, Balloon, Wizard
    assert_eq!(additions, [(26, 5), (27, 5), (28, 5)]);
}

#[test]
fn test_full_deck_gets_no_additions() {
    let catalog = Catalog::from_cards(troops(&[1, 1, 1, 2, 2, 2, 3, 3, 8, 8])).unwrap();
    let analyzer = DeckAnalyzer::default();

    for cost in [8, 1] {
        let cards: Vec<_> = (101..=108).map(|id| card(id, CardType::Troop, cost)).collect();
        let deck = deck_of(&cards);
        assert_eq!(deck.len(), DECK_SIZE);

        let additions = analyzer.suggested_additions(&deck, average_elixir(&deck), &catalog);
        assert!(additions.is_empty());
    }
}

#[test]
fn test_expensive_deck_gets_first_three_cheap_cards() {
    let catalog = Catalog::from_cards([
        card(1, CardType::Troop, 7),
        card(2, CardType::Troop, 1),
        card(3, CardType::Spell, 3),
        card(4, CardType::Troop, 6),
        card(5, CardType::Building, 2),
        card(6, CardType::Troop, 3),
        card(7, CardType::Troop, 2),
    ])
    .unwrap();
    let deck = deck_of(&[card(20, CardType::Troop, 5), card(21, CardType::Troop, 5)]);

    let additions = DeckAnalyzer::default().suggested_additions(&deck, 5.0, &catalog);
    let ids: Vec<_> = additions.iter().map(|c| c.id.raw()).collect();
    assert_eq!(ids, [2, 3, 5]);
}

#[test]
fn test_cheap_deck_gets_expensive_cards() {
    let catalog = Catalog::from_cards(troops(&[2, 5, 3, 8, 6, 7])).unwrap();
    let deck = deck_of(&troops(&[2]));

    let additions = DeckAnalyzer::default().suggested_additions(&deck, 2.0, &catalog);
    let costs: Vec<_> = additions.iter().map(|c| c.elixir_cost).collect();
    assert_eq!(costs, [5, 8, 6]);
}

fn catalog_strategy() -> impl Strategy<Value = Vec<Card>> {
    prop::collection::vec(1u8..=8, 1..20).prop_map(|costs| troops(&costs))
}

proptest! {
    #[test]
    fn test_add_appends_and_preserves_order(cards in catalog_strategy(), count in 0usize..DECK_SIZE) {
        let prefix: Vec<_> = cards.iter().take(count).cloned().collect();
        let deck = deck_of(&prefix);
        let next = card(1000, CardType::Spell, 2);

        let added = deck.add_card(&next).unwrap();
        prop_assert_eq!(added.len(), deck.len() + 1);

        let mut expected = deck.card_ids();
        expected.push(next.id);
        prop_assert_eq!(added.card_ids(), expected);
    }

    #[test]
    fn test_add_duplicate_is_rejected(cards in catalog_strategy(), pick in any::<prop::sample::Index>()) {
        let prefix: Vec<_> = cards.iter().take(DECK_SIZE - 1).cloned().collect();
        let deck = deck_of(&prefix);
        let repeat = &prefix[pick.index(prefix.len())];

        prop_assert_eq!(deck.add_card(repeat), Err(DeckRejection::DuplicateCard(repeat.id)));
    }

    #[test]
    fn test_add_to_full_deck_is_rejected(cost in 1u8..=8, id in 0u32..50) {
        let deck = deck_of(&troops(&[3; DECK_SIZE]));
        let offered = card(id, CardType::Troop, cost);

        prop_assert_eq!(deck.add_card(&offered), Err(DeckRejection::DeckFull));
        prop_assert_eq!(deck.len(), DECK_SIZE);
    }
}
