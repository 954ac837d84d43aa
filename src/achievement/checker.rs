//! Achievement checking logic

use crate::company::{Company, Personality, ProjectStatus};
use crate::config::{Achievement, AchievementRule, CultureAxis, ACHIEVEMENTS};
use smallvec::SmallVec;

/// Evaluate one rule against the company
pub fn rule_holds(rule: &AchievementRule, company: &Company) -> bool {
    let month = company.current_month;
    match *rule {
        AchievementRule::SurviveMonths(months) => month >= months,
        AchievementRule::PositiveCashflow => company
            .latest_snapshot()
            .is_some_and(|s| s.financials.net_cashflow > 0),
        AchievementRule::CashAtLeast(amount) => company.cash >= amount,
        AchievementRule::TotalHiredAtLeast(n) => company.total_hired() >= n,
        AchievementRule::ActiveHeadcountAtLeast(n) => company.active_headcount() >= n,
        AchievementRule::CompletedProjectsAtLeast(n) => company.completed_projects() >= n,
        AchievementRule::CompletedProjectQualityAtLeast(quality) => company
            .projects_with_status(ProjectStatus::Completed)
            .any(|p| p.quality >= quality),
        AchievementRule::ReputationAtLeast(reputation) => company.reputation >= reputation,
        AchievementRule::BalancedCulture { min, max } => CultureAxis::ALL
            .iter()
            .all(|&axis| (min..=max).contains(&company.culture.get(axis))),
        AchievementRule::CultureAxisAtLeast(axis, value) => company.culture.get(axis) >= value,
        // Someone leaving this very month does not count yet
        AchievementRule::NoQuitsThrough(months) => {
            month >= months
                && company
                    .employees
                    .iter()
                    .all(|e| e.quit_month.map_or(true, |quit| quit >= month))
        }
        AchievementRule::DistinctPersonalities(n) => {
            let mut seen: SmallVec<[Personality; 5]> = SmallVec::new();
            for e in &company.employees {
                if !seen.contains(&e.personality) {
                    seen.push(e.personality);
                }
            }
            seen.len() >= n
        }
        AchievementRule::SolventAt(months) => month >= months && company.cash > 0,
    }
}

/// Catalog entries that hold now and are not yet unlocked, in catalog order
pub fn check_achievements(company: &Company) -> Vec<&'static Achievement> {
    ACHIEVEMENTS
        .iter()
        .filter(|a| !company.has_achievement(a.id))
        .filter(|a| rule_holds(&a.rule, company))
        .collect()
}

/// Check and record newly earned achievements, returning them
pub fn unlock_achievements(company: &mut Company) -> Vec<&'static Achievement> {
    let earned = check_achievements(company);
    for achievement in &earned {
        log::info!("achievement unlocked: {}", achievement.id);
        company.unlocked_achievements.push(achievement.id.to_string());
    }
    earned
}
