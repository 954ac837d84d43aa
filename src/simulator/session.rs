//! GameSession - one company driven by one engine
//!
//! Holds the company, the engine that advances it and the candidate
//! currently offered for hire. This is the unit a front end keeps per
//! player.

use crate::company::{Company, Employee, Project, ProjectKind};
use crate::config::CultureAxis;
use crate::error::{GameError, Result};
use crate::event::EventResolution;

use super::{leaderboard_entry, LeaderboardEntry, MonthResult, SimulationEngine};

pub struct GameSession {
    engine: SimulationEngine,
    company: Company,
    pending_hire: Option<Employee>,
}

impl GameSession {
    /// New game with default rules
    pub fn new(company_name: &str) -> Self {
        Self::with_engine(SimulationEngine::new(), company_name)
    }

    pub fn with_engine(mut engine: SimulationEngine, company_name: &str) -> Self {
        let company = engine.new_company(company_name);
        Self {
            engine,
            company,
            pending_hire: None,
        }
    }

    /// Resume a saved company
    pub fn from_company(mut engine: SimulationEngine, company: Company) -> Self {
        engine.adopt(&company);
        Self {
            engine,
            company,
            pending_hire: None,
        }
    }

    #[inline]
    pub fn company(&self) -> &Company {
        &self.company
    }

    #[inline]
    pub fn engine(&self) -> &SimulationEngine {
        &self.engine
    }

    #[inline]
    pub fn pending_hire(&self) -> Option<&Employee> {
        self.pending_hire.as_ref()
    }

    #[inline]
    pub fn is_game_over(&self) -> bool {
        self.company.is_bankrupt()
    }

    /// Start over with a fresh company; the name defaults to the current one
    pub fn reset(&mut self, company_name: Option<&str>) {
        let name = company_name.map_or_else(|| self.company.name.clone(), str::to_string);
        self.pending_hire = None;
        self.company = self.engine.new_company(&name);
    }

    /// Advance one month. Refused once the company is bankrupt.
    pub fn advance_month(&mut self) -> Result<MonthResult> {
        if self.is_game_over() {
            return Err(GameError::InvalidState(
                "the company is bankrupt".to_string(),
            ));
        }
        Ok(self.engine.process_month(&mut self.company))
    }

    // ------------------------------------------------------------------------
    // Hiring
    // ------------------------------------------------------------------------

    /// Offer a new candidate, replacing any undecided one
    pub fn hire_candidate(&mut self) -> Result<&Employee> {
        let candidate = self.engine.generate_candidate(&self.company)?;
        Ok(self.pending_hire.insert(candidate))
    }

    /// Hire the pending candidate. Returns the new employee's id.
    pub fn confirm_hire(&mut self) -> Result<String> {
        let candidate = self
            .pending_hire
            .clone()
            .ok_or_else(|| GameError::InvalidState("no candidate to hire".to_string()))?;
        let id = candidate.id.clone();
        self.engine.confirm_hire(&mut self.company, candidate)?;
        self.pending_hire = None;
        Ok(id)
    }

    pub fn reject_hire(&mut self) -> Option<Employee> {
        self.pending_hire.take()
    }

    // ------------------------------------------------------------------------
    // Other player actions
    // ------------------------------------------------------------------------

    pub fn fire_employee(&mut self, employee_id: &str) -> Result<i64> {
        self.engine.fire_employee(&mut self.company, employee_id)
    }

    pub fn assign_employee_to_project(
        &mut self,
        employee_id: &str,
        project_id: &str,
        allocation: f64,
    ) -> Result<()> {
        self.engine
            .assign_employee_to_project(&mut self.company, employee_id, project_id, allocation)
    }

    pub fn unassign_employee_from_project(&mut self, employee_id: &str, project_id: &str) -> Result<()> {
        self.engine
            .unassign_employee_from_project(&mut self.company, employee_id, project_id)
    }

    pub fn create_project(&mut self, kind: ProjectKind, name: Option<&str>) -> &Project {
        self.engine.create_project(&mut self.company, kind, name)
    }

    pub fn cancel_project(&mut self, project_id: &str) -> Result<()> {
        self.engine.cancel_project(&mut self.company, project_id)
    }

    pub fn resolve_event(&mut self, event_id: &str, choice_id: &str) -> Result<EventResolution> {
        self.engine.resolve_event(&mut self.company, event_id, choice_id)
    }

    pub fn adjust_culture(&mut self, axis: CultureAxis, value: f64) -> Result<()> {
        self.engine.adjust_culture(&mut self.company, axis, value)
    }

    #[inline]
    pub fn score(&self) -> i64 {
        self.engine.calculate_score(&self.company)
    }

    pub fn leaderboard_entry(&self) -> LeaderboardEntry {
        leaderboard_entry(&self.company)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn session() -> GameSession {
        GameSession::with_engine(SimulationEngine::with_seed(11), "Session Co")
    }

    #[test]
    fn test_pending_hire_flow() {
        let mut session = session();
        assert!(matches!(session.confirm_hire(), Err(GameError::InvalidState(_))));

        let offered = session.hire_candidate().unwrap().id.clone();
        assert_eq!(session.pending_hire().map(|e| e.id.as_str()), Some(offered.as_str()));

        let hired = session.confirm_hire().unwrap();
        assert_eq!(hired, offered);
        assert!(session.pending_hire().is_none());
        assert_eq!(session.company().active_headcount(), 2);
        assert_eq!(session.company().cash, 145_000);
    }

    #[test]
    fn test_reject_hire_costs_nothing() {
        let mut session = session();
        session.hire_candidate().unwrap();
        assert!(session.reject_hire().is_some());
        assert!(session.reject_hire().is_none());
        assert_eq!(session.company().cash, 150_000);
        assert_eq!(session.company().employees.len(), 1);
    }

    #[test]
    fn test_failed_confirm_keeps_candidate() {
        let mut session = session();
        session.hire_candidate().unwrap();
        session.company.cash = 100;
        assert!(matches!(
            session.confirm_hire(),
            Err(GameError::InsufficientFunds { .. })
        ));
        assert!(session.pending_hire().is_some());
    }

    #[test]
    fn test_reset_clears_names_and_pending() {
        let mut session = session();
        for _ in 0..3 {
            session.hire_candidate().unwrap();
            session.confirm_hire().unwrap();
        }
        session.hire_candidate().unwrap();
        assert_eq!(session.engine().employee_generator().used_name_count(), 4);

        session.reset(None);
        assert_eq!(session.company().name, "Session Co");
        assert_eq!(session.company().employees.len(), 1);
        assert!(session.pending_hire().is_none());
        assert_eq!(session.engine().employee_generator().used_name_count(), 0);

        session.reset(Some("Second Try"));
        assert_eq!(session.company().name, "Second Try");
    }

    #[test]
    fn test_no_advance_after_bankruptcy() {
        let mut session = session();
        session.company.cash = 100;
        let result = session.advance_month().unwrap();
        assert!(!result.success);
        assert!(session.is_game_over());
        let before = session.company().clone();
        assert!(matches!(session.advance_month(), Err(GameError::InvalidState(_))));
        assert_eq!(session.company(), &before);
    }

    #[test]
    fn test_resume_reserves_names() {
        let mut session = session();
        session.hire_candidate().unwrap();
        session.confirm_hire().unwrap();
        let saved = session.company().to_json().unwrap();

        let restored = GameSession::from_company(
            SimulationEngine::with_seed(11),
            Company::from_json(&saved).unwrap(),
        );
        assert_eq!(restored.company().employees.len(), 2);
        assert_eq!(restored.company().employees[1].name, session.company().employees[1].name);
        assert_eq!(restored.engine().employee_generator().used_name_count(), 1);
    }
}
