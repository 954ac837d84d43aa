//! Achievement configuration structures

use serde::Serialize;

/// Achievement rarity tier
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum Rarity {
    Common,
    Rare,
    Epic,
    Legendary,
}

/// Culture dial referenced by a rule
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum CultureAxis {
    Speed,
    Quality,
    WorkLife,
    Hierarchy,
}

impl CultureAxis {
    pub const ALL: [CultureAxis; 4] = [
        CultureAxis::Speed,
        CultureAxis::Quality,
        CultureAxis::WorkLife,
        CultureAxis::Hierarchy,
    ];

    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "speed" => Some(CultureAxis::Speed),
            "quality" => Some(CultureAxis::Quality),
            "worklife" | "work_life" | "work-life" => Some(CultureAxis::WorkLife),
            "hierarchy" => Some(CultureAxis::Hierarchy),
            _ => None,
        }
    }
}

/// Predicate over company state
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum AchievementRule {
    /// `current_month` at least this value
    SurviveMonths(u32),
    /// The latest month snapshot shows positive net cashflow
    PositiveCashflow,
    CashAtLeast(i64),
    /// Counts every employee ever hired, founder included
    TotalHiredAtLeast(usize),
    ActiveHeadcountAtLeast(usize),
    CompletedProjectsAtLeast(usize),
    CompletedProjectQualityAtLeast(f64),
    ReputationAtLeast(f64),
    /// Every culture axis inside `[min, max]`
    BalancedCulture { min: f64, max: f64 },
    CultureAxisAtLeast(CultureAxis, f64),
    /// Reached the month with nobody quitting before it
    NoQuitsThrough(u32),
    DistinctPersonalities(usize),
    /// Reached the month with cash above zero
    SolventAt(u32),
}

/// Achievement definition
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Achievement {
    pub id: &'static str,
    pub name: &'static str,
    pub description: &'static str,
    pub rarity: Rarity,
    pub rule: AchievementRule,
}

const fn achievement(
    id: &'static str,
    name: &'static str,
    description: &'static str,
    rarity: Rarity,
    rule: AchievementRule,
) -> Achievement {
    Achievement {
        id,
        name,
        description,
        rarity,
        rule,
    }
}

/// The fixed catalog, in evaluation order
#[rustfmt::skip]
pub static ACHIEVEMENTS: [Achievement; 24] = [
    // Survival
    achievement("survive_6_months", "First Steps", "Survive 6 months in business", Rarity::Common, AchievementRule::SurviveMonths(6)),
    achievement("survive_12_months", "One Year Anniversary", "Survive one full year", Rarity::Common, AchievementRule::SurviveMonths(12)),
    achievement("survive_24_months", "Established", "Survive two years", Rarity::Rare, AchievementRule::SurviveMonths(24)),
    achievement("survive_60_months", "Legacy", "Survive five years", Rarity::Epic, AchievementRule::SurviveMonths(60)),
    // Financial
    achievement("first_profit", "In the Black", "Achieve positive cash flow", Rarity::Common, AchievementRule::PositiveCashflow),
    achievement("reach_100k", "Six Figures", "Reach $100,000 in cash", Rarity::Common, AchievementRule::CashAtLeast(100_000)),
    achievement("reach_500k", "Half Million", "Reach $500,000 in cash", Rarity::Rare, AchievementRule::CashAtLeast(500_000)),
    achievement("reach_1m", "Millionaire", "Reach $1,000,000 in cash", Rarity::Epic, AchievementRule::CashAtLeast(1_000_000)),
    // Team
    achievement("hire_first_employee", "Growing Team", "Hire your first employee", Rarity::Common, AchievementRule::TotalHiredAtLeast(2)),
    achievement("team_of_5", "Small but Mighty", "Build a team of 5 employees", Rarity::Common, AchievementRule::ActiveHeadcountAtLeast(5)),
    achievement("team_of_10", "Double Digits", "Build a team of 10 employees", Rarity::Rare, AchievementRule::ActiveHeadcountAtLeast(10)),
    achievement("team_of_25", "Unicorn Team", "Build a team of 25 employees", Rarity::Epic, AchievementRule::ActiveHeadcountAtLeast(25)),
    // Projects
    achievement("first_project", "First Delivery", "Complete your first project", Rarity::Common, AchievementRule::CompletedProjectsAtLeast(1)),
    achievement("complete_5_projects", "Getting Things Done", "Complete 5 projects", Rarity::Common, AchievementRule::CompletedProjectsAtLeast(5)),
    achievement("complete_20_projects", "Project Machine", "Complete 20 projects", Rarity::Rare, AchievementRule::CompletedProjectsAtLeast(20)),
    achievement("perfect_project", "Perfect Execution", "Complete a project with 90%+ quality", Rarity::Rare, AchievementRule::CompletedProjectQualityAtLeast(90.0)),
    // Reputation
    achievement("reputation_75", "Well Known", "Reach 75 reputation", Rarity::Rare, AchievementRule::ReputationAtLeast(75.0)),
    achievement("reputation_95", "Industry Leader", "Reach 95 reputation", Rarity::Epic, AchievementRule::ReputationAtLeast(95.0)),
    // Culture
    achievement("balanced_culture", "Goldilocks Zone", "Maintain balanced culture across all dimensions (0.4-0.6)", Rarity::Rare, AchievementRule::BalancedCulture { min: 0.4, max: 0.6 }),
    achievement("speed_demon", "Speed Demon", "Achieve speed culture above 0.8", Rarity::Rare, AchievementRule::CultureAxisAtLeast(CultureAxis::Speed, 0.8)),
    achievement("quality_focused", "Quality Obsessed", "Achieve quality culture above 0.8", Rarity::Rare, AchievementRule::CultureAxisAtLeast(CultureAxis::Quality, 0.8)),
    // Special
    achievement("no_quitters", "Retention Master", "Reach month 12 without any employees quitting", Rarity::Epic, AchievementRule::NoQuitsThrough(12)),
    achievement("jack_of_all_trades", "Jack of All Trades", "Have employees with all 5 personality types", Rarity::Epic, AchievementRule::DistinctPersonalities(5)),
    achievement("legendary_survivor", "Legendary Survivor", "Reach month 100 with positive cash flow", Rarity::Legendary, AchievementRule::SolventAt(100)),
];

/// Look up a catalog entry by id
pub fn find_achievement(id: &str) -> Option<&'static Achievement> {
    ACHIEVEMENTS.iter().find(|a| a.id == id)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_ids_unique() {
        let ids: HashSet<_> = ACHIEVEMENTS.iter().map(|a| a.id).collect();
        assert_eq!(ids.len(), ACHIEVEMENTS.len());
    }

    #[test]
    fn test_find_achievement() {
        assert_eq!(find_achievement("reach_1m").unwrap().rarity, Rarity::Epic);
        assert!(find_achievement("missing").is_none());
    }

    #[test]
    fn test_culture_axis_parse() {
        assert_eq!(CultureAxis::from_str("workLife"), Some(CultureAxis::WorkLife));
        assert_eq!(CultureAxis::from_str("SPEED"), Some(CultureAxis::Speed));
        assert_eq!(CultureAxis::from_str("vibes"), None);
    }
}
