//! Property tests for the event system
//!
//! Property: zero-probability templates never fire, certain ones always do
//! Property: an event resolves at most once
//! Property: ratings stay clamped whatever the deltas

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::company::test_support::{company_with, employee};
use crate::company::GameEvent;
use crate::config::{Consequences, EventDeck, GameConfig, TriggerConditions};
use crate::event::{apply_consequences, generate_events, resolve_event};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

fn consequences_strategy() -> impl Strategy<Value = Consequences> {
    (
        -50_000..=50_000i64,
        -150.0..=150.0f64,
        -150.0..=150.0f64,
    )
        .prop_map(|(cash, reputation, morale_change)| Consequences {
            cash,
            reputation,
            morale_change,
            ..Default::default()
        })
}

/// Default deck with every gated template forced to one probability
fn deck_with_probability(probability: f64) -> EventDeck {
    let mut deck = EventDeck::default();
    for template in &mut deck.triggered {
        template.trigger = Some(TriggerConditions {
            probability,
            ..Default::default()
        });
    }
    deck
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    #[test]
    fn prop_probability_extremes(month in 1..=120u32, seed in any::<u64>()) {
        let mut company = company_with(vec![], vec![]);
        company.current_month = month;
        let quiet = GameConfig { random_event_chance: 0.0, ..GameConfig::default() };
        let mut rng = StdRng::seed_from_u64(seed);

        let none = generate_events(&company, &deck_with_probability(0.0), &quiet, &mut rng);
        prop_assert!(none.is_empty());

        let deck = deck_with_probability(1.0);
        let all = generate_events(&company, &deck, &quiet, &mut rng);
        prop_assert_eq!(all.len(), deck.triggered.len());
        prop_assert!(all.iter().all(|e| e.month_occurred == month && !e.resolved));
    }

    #[test]
    fn prop_resolve_at_most_once(template in 0..5usize, choice in 0..2usize) {
        let deck = EventDeck::default();
        let mut company = company_with(vec![employee("e1", 4000)], vec![]);
        let event = GameEvent::from_template(&deck.triggered[template], 1, 7);
        let event_id = event.id.clone();
        let choice_id = event.choices[choice].id.clone();
        company.pending_events.push(event);

        let config = GameConfig::default();
        prop_assert!(resolve_event(&mut company, &event_id, &choice_id, &config).is_ok());

        let settled = company.clone();
        prop_assert!(resolve_event(&mut company, &event_id, &choice_id, &config).is_err());
        prop_assert_eq!(company, settled);
    }

    #[test]
    fn prop_ratings_clamped(
        reputation in 0.0..=100.0f64,
        morale in 0.0..=100.0f64,
        deltas in prop::collection::vec(consequences_strategy(), 1..6),
    ) {
        let mut member = employee("e1", 4000);
        member.morale = morale;
        let mut company = company_with(vec![member], vec![]);
        company.reputation = reputation;

        for consequences in &deltas {
            apply_consequences(&mut company, consequences);
            prop_assert!((0.0..=100.0).contains(&company.reputation));
            prop_assert!((0.0..=100.0).contains(&company.employees[0].morale));
        }
    }
}
