//! Event instances

use crate::config::{EventChoice, EventKind, EventTemplate, TriggerConditions};
use serde::{Deserialize, Serialize};

/// An event raised for the player, pending until a choice is taken
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct GameEvent {
    /// Instance id, `{template}_{month}_{hex}`
    pub id: String,
    pub template_id: String,
    pub title: String,
    pub description: String,
    pub kind: EventKind,
    pub choices: Vec<EventChoice>,
    #[serde(default)]
    pub trigger: Option<TriggerConditions>,
    #[serde(default)]
    pub resolved: bool,
    pub month_occurred: u32,
    /// Choice taken on resolution
    #[serde(default)]
    pub chosen: Option<String>,
    #[serde(default)]
    pub month_resolved: Option<u32>,
}

impl GameEvent {
    /// Instantiate a catalog template for the given month
    pub fn from_template(template: &EventTemplate, month: u32, suffix: u64) -> Self {
        Self {
            id: format!("{}_{}_{:x}", template.id, month, suffix),
            template_id: template.id.clone(),
            title: template.title.clone(),
            description: template.description.clone(),
            kind: template.kind,
            choices: template.choices.clone(),
            trigger: template.trigger.clone(),
            resolved: false,
            month_occurred: month,
            chosen: None,
            month_resolved: None,
        }
    }

    pub fn choice(&self, choice_id: &str) -> Option<&EventChoice> {
        self.choices.iter().find(|c| c.id == choice_id)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::EventDeck;

    #[test]
    fn test_from_template() {
        let deck = EventDeck::default();
        let template = &deck.random[0];
        let event = GameEvent::from_template(template, 7, 0xbeef);

        assert_eq!(event.id, format!("{}_7_beef", template.id));
        assert_eq!(event.template_id, template.id);
        assert_eq!(event.month_occurred, 7);
        assert!(!event.resolved);
        assert!(event.choice(&template.choices[0].id).is_some());
        assert!(event.choice("nope").is_none());
    }
}
