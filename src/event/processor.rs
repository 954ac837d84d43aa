//! Event resolution

use crate::company::{Company, ProjectStatus};
use crate::config::{Consequences, GameConfig};
use crate::error::{GameError, Result};

/// What resolving an event did
#[derive(Debug, Clone, PartialEq)]
pub struct EventResolution {
    pub event_id: String,
    pub title: String,
    pub choice_id: String,
    pub choice_label: String,
    pub cash_change: i64,
    pub reputation_change: f64,
}

impl EventResolution {
    pub fn message(&self) -> String {
        format!("{}: {}", self.title, self.choice_label)
    }
}

#[inline]
fn clamp_rating(value: f64) -> f64 {
    value.clamp(0.0, 100.0)
}

/// Apply a choice's deltas. Employee deltas only reach active staff and
/// project deltas only in-progress projects; unknown ids are skipped.
pub fn apply_consequences(company: &mut Company, consequences: &Consequences) {
    company.cash += consequences.cash;
    company.reputation = clamp_rating(company.reputation + consequences.reputation);

    if consequences.morale_change != 0.0 {
        for employee in company.employees.iter_mut().filter(|e| e.is_active()) {
            employee.morale = clamp_rating(employee.morale + consequences.morale_change);
        }
    }

    for effect in &consequences.employee_effects {
        if let Some(employee) = company
            .find_employee_mut(&effect.employee_id)
            .filter(|e| e.is_active())
        {
            employee.morale = clamp_rating(employee.morale + effect.morale_change);
            employee.loyalty = clamp_rating(employee.loyalty + effect.loyalty_change);
        }
    }

    for effect in &consequences.project_effects {
        if let Some(project) = company
            .find_project_mut(&effect.project_id)
            .filter(|p| p.status == ProjectStatus::InProgress)
        {
            project.progress = clamp_rating(project.progress + effect.progress_change);
            project.quality = clamp_rating(project.quality + effect.quality_change);
        }
    }
}

/// Resolve a pending event with one of its choices.
///
/// The event moves from `pending_events` to the resolved history, which is
/// trimmed to `config.event_history_limit`. Unknown or already-resolved
/// events and unknown choices are rejected before anything changes.
pub fn resolve_event(
    company: &mut Company,
    event_id: &str,
    choice_id: &str,
    config: &GameConfig,
) -> Result<EventResolution> {
    let Some(index) = company.pending_events.iter().position(|e| e.id == event_id) else {
        if company.events.iter().any(|e| e.id == event_id) {
            return Err(GameError::InvalidState(format!(
                "event {} is already resolved",
                event_id
            )));
        }
        return Err(GameError::EventNotFound(event_id.to_string()));
    };

    let choice = company.pending_events[index]
        .choice(choice_id)
        .cloned()
        .ok_or_else(|| GameError::ChoiceNotFound(choice_id.to_string()))?;

    apply_consequences(company, &choice.consequences);

    let mut event = company.pending_events.remove(index);
    event.resolved = true;
    event.chosen = Some(choice.id.clone());
    event.month_resolved = Some(company.current_month);

    let resolution = EventResolution {
        event_id: event.id.clone(),
        title: event.title.clone(),
        choice_id: choice.id,
        choice_label: choice.label,
        cash_change: choice.consequences.cash,
        reputation_change: choice.consequences.reputation,
    };

    company.events.push(event);
    let overflow = company
        .events
        .len()
        .saturating_sub(config.event_history_limit);
    if overflow > 0 {
        company.events.drain(..overflow);
    }

    log::info!("event {} resolved with {}", resolution.event_id, resolution.choice_id);
    Ok(resolution)
}
