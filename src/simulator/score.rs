//! End-of-game scoring

use crate::company::Company;
use serde::Serialize;

const MONTH_POINTS: f64 = 100.0;
const CASH_POINTS: f64 = 0.1;
const REPUTATION_POINTS: f64 = 50.0;
const HIRE_POINTS: f64 = 200.0;
const PROJECT_POINTS: f64 = 500.0;

/// Final score, floored. Every employee ever hired counts, founder included.
pub fn calculate_score(company: &Company) -> i64 {
    let score = company.current_month as f64 * MONTH_POINTS
        + company.cash as f64 * CASH_POINTS
        + company.reputation * REPUTATION_POINTS
        + company.total_hired() as f64 * HIRE_POINTS
        + company.completed_projects() as f64 * PROJECT_POINTS;
    score.floor() as i64
}

/// One row of a leaderboard
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LeaderboardEntry {
    pub id: String,
    pub company_name: String,
    pub score: i64,
    pub months_survived: u32,
    pub final_cash: i64,
    pub final_reputation: f64,
    pub employees_hired: usize,
    pub projects_completed: usize,
    pub achievements_unlocked: usize,
}

pub fn leaderboard_entry(company: &Company) -> LeaderboardEntry {
    LeaderboardEntry {
        id: company.id.clone(),
        company_name: company.name.clone(),
        score: calculate_score(company),
        months_survived: company.current_month,
        final_cash: company.cash,
        final_reputation: company.reputation,
        employees_hired: company.total_hired(),
        projects_completed: company.completed_projects(),
        achievements_unlocked: company.unlocked_achievements.len(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::test_support::{company_with, employee, founder, project};
    use crate::company::ProjectStatus;

    #[test]
    fn test_score_formula() {
        let mut done = project("p1");
        done.status = ProjectStatus::Completed;
        let mut gone = employee("e2", 4000);
        gone.quit_month = Some(3);
        let mut company = company_with(vec![founder(), employee("e1", 4000), gone], vec![done, project("p2")]);
        company.current_month = 12;
        company.cash = 80_000;
        company.reputation = 61.0;

        // 1200 + 8000 + 3050 + 600 + 500
        assert_eq!(calculate_score(&company), 13_350);
    }

    #[test]
    fn test_score_floors_negative_cash() {
        let mut company = company_with(vec![founder()], vec![]);
        company.current_month = 1;
        company.reputation = 0.0;
        company.cash = -1_005;
        // 100 - 100.5 + 200
        assert_eq!(calculate_score(&company), 199);
    }

    #[test]
    fn test_leaderboard_entry() {
        let mut company = company_with(vec![founder()], vec![]);
        company.unlocked_achievements.push("reach_100k".to_string());
        let entry = leaderboard_entry(&company);
        assert_eq!(entry.company_name, "Test Co");
        assert_eq!(entry.months_survived, 1);
        assert_eq!(entry.employees_hired, 1);
        assert_eq!(entry.achievements_unlocked, 1);
        assert_eq!(entry.score, calculate_score(&company));
    }
}
