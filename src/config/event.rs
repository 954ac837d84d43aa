//! Event configuration structures

use crate::error::Result;
use once_cell::sync::Lazy;
use serde::{Deserialize, Serialize};

/// Event category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum EventKind {
    Random,
    Triggered,
    Milestone,
}

/// Gates checked before an event's probability is rolled
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct TriggerConditions {
    #[serde(default)]
    pub min_month: Option<u32>,
    #[serde(default)]
    pub max_month: Option<u32>,
    /// Compared against active headcount
    #[serde(default)]
    pub min_employees: Option<usize>,
    #[serde(default)]
    pub min_cash: Option<i64>,
    #[serde(default)]
    pub min_reputation: Option<f64>,
    pub probability: f64,
}

/// Targeted morale/loyalty change for one employee
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeEffect {
    pub employee_id: String,
    #[serde(default)]
    pub morale_change: f64,
    #[serde(default)]
    pub loyalty_change: f64,
}

/// Targeted progress/quality change for one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectEffect {
    pub project_id: String,
    #[serde(default)]
    pub progress_change: f64,
    #[serde(default)]
    pub quality_change: f64,
}

/// Deltas applied when a choice is taken
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct Consequences {
    pub cash: i64,
    pub reputation: f64,
    /// Applied to every active employee
    pub morale_change: f64,
    pub employee_effects: Vec<EmployeeEffect>,
    pub project_effects: Vec<ProjectEffect>,
}

/// One option offered by an event
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventChoice {
    pub id: String,
    pub label: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub consequences: Consequences,
}

/// Event template in the catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventTemplate {
    pub id: String,
    pub title: String,
    pub description: String,
    pub kind: EventKind,
    pub choices: Vec<EventChoice>,
    #[serde(default)]
    pub trigger: Option<TriggerConditions>,
}

/// The full event catalog used by the event system
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EventDeck {
    /// Gated templates, each rolled independently every month
    pub triggered: Vec<EventTemplate>,
    /// Ungated pool; at most one is drawn per month
    pub random: Vec<EventTemplate>,
}

impl Default for EventDeck {
    fn default() -> Self {
        DEFAULT_EVENT_DECK.clone()
    }
}

impl EventDeck {
    /// Parse a catalog from JSON
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }
}

fn choice(id: &str, label: &str, description: &str, consequences: Consequences) -> EventChoice {
    EventChoice {
        id: id.to_string(),
        label: label.to_string(),
        description: description.to_string(),
        consequences,
    }
}

fn cash_and_morale(cash: i64, morale_change: f64) -> Consequences {
    Consequences {
        cash,
        morale_change,
        ..Default::default()
    }
}

fn cash_and_reputation(cash: i64, reputation: f64) -> Consequences {
    Consequences {
        cash,
        reputation,
        ..Default::default()
    }
}

fn gated(
    min_month: Option<u32>,
    min_employees: Option<usize>,
    probability: f64,
) -> Option<TriggerConditions> {
    Some(TriggerConditions {
        min_month,
        min_employees,
        probability,
        ..Default::default()
    })
}

/// Built-in catalog
static DEFAULT_EVENT_DECK: Lazy<EventDeck> = Lazy::new(|| EventDeck {
    triggered: vec![
        EventTemplate {
            id: "competing_offer".to_string(),
            title: "Key Employee Recruited".to_string(),
            description: "One of your top employees has received a competing offer from a larger company."
                .to_string(),
            kind: EventKind::Triggered,
            choices: vec![
                choice(
                    "match_offer",
                    "Match the offer",
                    "Increase their salary by 20% to keep them",
                    cash_and_morale(-2_500, 10.0),
                ),
                choice(
                    "let_go",
                    "Let them go",
                    "Wish them well and focus on the team",
                    cash_and_morale(0, -5.0),
                ),
                choice(
                    "counter_offer",
                    "Counter with equity",
                    "Offer profit sharing instead of higher salary",
                    cash_and_morale(0, 5.0),
                ),
            ],
            trigger: gated(Some(8), Some(4), 0.06),
        },
        EventTemplate {
            id: "client_threatens".to_string(),
            title: "Major Client Unhappy".to_string(),
            description: "Your largest client is threatening to leave due to missed deadlines."
                .to_string(),
            kind: EventKind::Triggered,
            choices: vec![
                choice(
                    "rush_project",
                    "Rush the project",
                    "Assign more resources to finish quickly",
                    cash_and_morale(-1_000, -10.0),
                ),
                choice(
                    "negotiate",
                    "Negotiate extension",
                    "Ask for more time with a discount",
                    cash_and_reputation(-1_500, -5.0),
                ),
                choice(
                    "accept_loss",
                    "Accept the loss",
                    "Let them go and focus on other clients",
                    cash_and_reputation(-2_500, -10.0),
                ),
            ],
            trigger: gated(Some(6), Some(2), 0.08),
        },
        EventTemplate {
            id: "viral_success".to_string(),
            title: "Viral Success!".to_string(),
            description: "One of your projects went viral on social media!".to_string(),
            kind: EventKind::Random,
            choices: vec![
                choice(
                    "capitalize",
                    "Capitalize on it",
                    "Invest in marketing to ride the wave",
                    cash_and_reputation(-1_500, 15.0),
                ),
                choice(
                    "stay_focused",
                    "Stay focused",
                    "Keep working without distraction",
                    Consequences {
                        reputation: 5.0,
                        morale_change: 5.0,
                        ..Default::default()
                    },
                ),
            ],
            trigger: gated(None, None, 0.05),
        },
        EventTemplate {
            id: "tech_debt_crisis".to_string(),
            title: "Technical Debt Crisis".to_string(),
            description: "Your codebase has accumulated too much technical debt.".to_string(),
            kind: EventKind::Triggered,
            choices: vec![
                choice(
                    "refactor",
                    "Refactor everything",
                    "Spend a month fixing technical debt",
                    cash_and_morale(-2_000, 10.0),
                ),
                choice(
                    "ignore",
                    "Ignore it",
                    "Continue shipping features",
                    Consequences {
                        reputation: -5.0,
                        morale_change: -15.0,
                        ..Default::default()
                    },
                ),
            ],
            trigger: gated(Some(15), None, 0.06),
        },
        EventTemplate {
            id: "cofounder_conflict".to_string(),
            title: "Cofounder Conflict".to_string(),
            description: "Tension is rising between cofounders about company direction."
                .to_string(),
            kind: EventKind::Triggered,
            choices: vec![
                choice(
                    "mediate",
                    "Team building retreat",
                    "Invest in team bonding",
                    cash_and_morale(-2_500, 15.0),
                ),
                choice(
                    "pick_side",
                    "Pick a side",
                    "Make a decision and move forward",
                    Consequences {
                        reputation: 5.0,
                        morale_change: -10.0,
                        ..Default::default()
                    },
                ),
            ],
            trigger: gated(Some(10), Some(6), 0.05),
        },
    ],
    random: vec![
        EventTemplate {
            id: "equipment_failure".to_string(),
            title: "Equipment Failure".to_string(),
            description: "Several workstations need replacement.".to_string(),
            kind: EventKind::Random,
            choices: vec![
                choice(
                    "replace_now",
                    "Replace immediately",
                    "Buy new equipment",
                    cash_and_morale(-1_500, 0.0),
                ),
                choice(
                    "wait",
                    "Wait and repair",
                    "Try to fix what you have",
                    cash_and_morale(0, -5.0),
                ),
            ],
            trigger: None,
        },
        EventTemplate {
            id: "networking_opportunity".to_string(),
            title: "Networking Opportunity".to_string(),
            description: "A major industry conference is happening this month.".to_string(),
            kind: EventKind::Random,
            choices: vec![
                choice(
                    "attend",
                    "Send the team",
                    "Invest in networking",
                    cash_and_reputation(-1_000, 5.0),
                ),
                choice("skip", "Skip it", "Focus on work", Consequences::default()),
            ],
            trigger: None,
        },
    ],
});

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_deck_shape() {
        let deck = EventDeck::default();
        assert_eq!(deck.triggered.len(), 5);
        assert_eq!(deck.random.len(), 2);
        assert!(deck.triggered.iter().all(|t| t.trigger.is_some()));
        assert!(deck.random.iter().all(|t| !t.choices.is_empty()));
    }

    #[test]
    fn test_deck_from_json() {
        let json = r#"{
            "triggered": [{
                "id": "audit",
                "title": "Tax Audit",
                "description": "The tax office wants to talk.",
                "kind": "triggered",
                "choices": [{"id": "pay", "label": "Pay up", "consequences": {"cash": -500}}],
                "trigger": {"minMonth": 3, "probability": 0.5}
            }],
            "random": []
        }"#;

        let deck = EventDeck::from_json(json).unwrap();
        let audit = &deck.triggered[0];
        assert_eq!(audit.choices[0].consequences.cash, -500);
        assert_eq!(audit.choices[0].consequences.reputation, 0.0);
        let trigger = audit.trigger.as_ref().unwrap();
        assert_eq!(trigger.min_month, Some(3));
        assert_eq!(trigger.max_month, None);
    }
}
