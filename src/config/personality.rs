//! Personality tables

use crate::company::{Personality, SkillSet};

/// Static traits for one personality type
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PersonalityProfile {
    pub name: &'static str,
    pub description: &'static str,
    /// Added to generated skills before clamping
    pub skill_modifiers: SkillSet,
    /// Multiplier on the skill-based salary
    pub salary_multiplier: f64,
    /// Fixed productivity multiplier; wildcards roll their own each month
    pub productivity_multiplier: f64,
    /// Multiplier on the voluntary quit probability
    pub quit_multiplier: f64,
}

static ROCKSTAR: PersonalityProfile = PersonalityProfile {
    name: "Rockstar",
    description: "Exceptionally skilled but difficult to manage. High output but low collaboration.",
    skill_modifiers: SkillSet::new(15.0, 5.0, 10.0, -10.0),
    salary_multiplier: 1.5,
    productivity_multiplier: 1.3,
    quit_multiplier: 1.3,
};

static TEAM_PLAYER: PersonalityProfile = PersonalityProfile {
    name: "Team Player",
    description: "Boosts team morale and collaborates well. Reliable and steady performer.",
    skill_modifiers: SkillSet::new(0.0, 5.0, 5.0, 10.0),
    salary_multiplier: 1.0,
    productivity_multiplier: 1.0,
    quit_multiplier: 1.0,
};

static WILDCARD: PersonalityProfile = PersonalityProfile {
    name: "Wildcard",
    description: "Unpredictable creative genius. Can produce breakthroughs or disasters.",
    skill_modifiers: SkillSet::new(5.0, 0.0, 15.0, -5.0),
    salary_multiplier: 1.0,
    productivity_multiplier: 1.0,
    quit_multiplier: 1.0,
};

static WORKHORSE: PersonalityProfile = PersonalityProfile {
    name: "Workhorse",
    description: "Steady, reliable, rarely quits. Consistent output day after day.",
    skill_modifiers: SkillSet::new(5.0, 0.0, 0.0, 0.0),
    salary_multiplier: 1.1,
    productivity_multiplier: 1.1,
    quit_multiplier: 0.5,
};

static LEADER: PersonalityProfile = PersonalityProfile {
    name: "Leader",
    description: "Natural manager who unlocks team bonuses and improves overall performance.",
    skill_modifiers: SkillSet::new(0.0, 10.0, 0.0, 20.0),
    salary_multiplier: 1.3,
    productivity_multiplier: 1.0,
    quit_multiplier: 1.0,
};

impl Personality {
    /// Static profile for this personality
    pub fn profile(self) -> &'static PersonalityProfile {
        match self {
            Personality::Rockstar => &ROCKSTAR,
            Personality::TeamPlayer => &TEAM_PLAYER,
            Personality::Wildcard => &WILDCARD,
            Personality::Workhorse => &WORKHORSE,
            Personality::Leader => &LEADER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profiles_are_distinct() {
        let names: Vec<_> = Personality::ALL.iter().map(|p| p.profile().name).collect();
        assert_eq!(
            names,
            vec!["Rockstar", "Team Player", "Wildcard", "Workhorse", "Leader"]
        );
    }

    #[test]
    fn test_leader_modifiers() {
        let mods = Personality::Leader.profile().skill_modifiers;
        assert_eq!(mods.management, 20.0);
        assert_eq!(mods.sales, 10.0);
    }
}
