//! Event triggering

use crate::company::{Company, GameEvent};
use crate::config::{EventDeck, EventTemplate, GameConfig, TriggerConditions};
use rand::seq::SliceRandom;
use rand::Rng;

/// Whether the company passes every gate in `conditions` (probability aside)
#[inline]
pub fn conditions_pass(conditions: &TriggerConditions, company: &Company) -> bool {
    let month = company.current_month;
    if conditions.min_month.is_some_and(|min| month < min) {
        return false;
    }
    if conditions.max_month.is_some_and(|max| month > max) {
        return false;
    }
    if conditions
        .min_employees
        .is_some_and(|min| company.active_headcount() < min)
    {
        return false;
    }
    if conditions.min_cash.is_some_and(|min| company.cash < min) {
        return false;
    }
    if conditions
        .min_reputation
        .is_some_and(|min| company.reputation < min)
    {
        return false;
    }
    true
}

/// Gate check plus one probability roll. Templates without conditions
/// never fire here; the dice are only rolled once the gates pass.
pub fn should_trigger<R: Rng + ?Sized>(
    template: &EventTemplate,
    company: &Company,
    rng: &mut R,
) -> bool {
    match template.trigger {
        Some(ref conditions) if conditions_pass(conditions, company) => {
            rng.gen::<f64>() < conditions.probability
        }
        _ => false,
    }
}

/// Uniform draw from the random pool
#[inline]
pub fn pick_random<'a, R: Rng + ?Sized>(
    pool: &'a [EventTemplate],
    rng: &mut R,
) -> Option<&'a EventTemplate> {
    pool.choose(rng)
}

/// Events raised this month: every triggered template that fires, then at
/// most one draw from the random pool. Does not modify the company.
pub fn generate_events<R: Rng + ?Sized>(
    company: &Company,
    deck: &EventDeck,
    config: &GameConfig,
    rng: &mut R,
) -> Vec<GameEvent> {
    let month = company.current_month;
    let mut events = Vec::new();
    for template in &deck.triggered {
        if should_trigger(template, company, rng) {
            events.push(GameEvent::from_template(template, month, rng.gen::<u32>() as u64));
        }
    }

    if rng.gen::<f64>() < config.random_event_chance {
        if let Some(template) = pick_random(&deck.random, rng) {
            events.push(GameEvent::from_template(template, month, rng.gen::<u32>() as u64));
        }
    }

    for event in &events {
        log::debug!("month {}: event {} raised", month, event.id);
    }
    events
}
