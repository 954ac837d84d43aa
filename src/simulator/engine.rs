//! Main simulation engine

use crate::achievement::unlock_achievements;
use crate::company::assignment::{self, detach_employee};
use crate::company::{Company, Employee, GameEvent, MonthSnapshot, Project, ProjectKind, ProjectStatus};
use crate::config::{CultureAxis, EventDeck, GameConfig};
use crate::culture::{adjust_culture, update_culture};
use crate::employee::{process_turnover, update_morale};
use crate::error::{GameError, Result};
use crate::event::{generate_events, resolve_event, EventResolution};
use crate::finance::{calculate_monthly_finances, can_afford};
use crate::generator::{new_id, EmployeeGenerator, ProjectGenerator};
use crate::project::{calculate_project_outcome, process_projects};
use rand::rngs::StdRng;
use rand::SeedableRng;

use super::calculate_score;

/// Result of one simulated month
#[derive(Debug, Clone, PartialEq)]
pub struct MonthResult {
    /// False once the company ends the month with negative cash
    pub success: bool,
    /// Events raised this month, also queued on `pending_events`
    pub events: Vec<GameEvent>,
    pub snapshot: MonthSnapshot,
    pub messages: Vec<String>,
}

/// Main simulation engine
///
/// Owns the tunables, the event catalog, the generators and the one RNG every
/// random draw goes through. A seeded engine replays a game exactly.
pub struct SimulationEngine {
    config: GameConfig,
    deck: EventDeck,
    employees: EmployeeGenerator,
    projects: ProjectGenerator,
    rng: StdRng,
}

impl Default for SimulationEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl SimulationEngine {
    /// Default rules, entropy-seeded
    pub fn new() -> Self {
        Self::with_rng(GameConfig::default(), EventDeck::default(), StdRng::from_entropy())
    }

    /// Default rules with a fixed seed
    pub fn with_seed(seed: u64) -> Self {
        Self::with_rng(GameConfig::default(), EventDeck::default(), StdRng::seed_from_u64(seed))
    }

    pub fn with_config(config: GameConfig, deck: EventDeck, seed: Option<u64>) -> Self {
        let rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_entropy(),
        };
        Self::with_rng(config, deck, rng)
    }

    fn with_rng(config: GameConfig, deck: EventDeck, rng: StdRng) -> Self {
        Self {
            config,
            deck,
            employees: EmployeeGenerator::new(),
            projects: ProjectGenerator::new(),
            rng,
        }
    }

    #[inline]
    pub fn config(&self) -> &GameConfig {
        &self.config
    }

    #[inline]
    pub fn deck(&self) -> &EventDeck {
        &self.deck
    }

    #[inline]
    pub fn employee_generator(&self) -> &EmployeeGenerator {
        &self.employees
    }

    /// Fresh company with a generated founder. Clears the used-name set.
    pub fn new_company(&mut self, name: &str) -> Company {
        self.employees.reset();
        let id = new_id(&mut self.rng);
        let mut company = Company::new(id, name, &self.config);
        let founder = self
            .employees
            .generate_founder(&mut self.rng, company.current_month);
        company.employees.push(founder);
        log::info!("company \"{}\" founded", company.name);
        company
    }

    /// Take over a company built elsewhere, e.g. loaded from JSON, so new
    /// candidates avoid its names
    pub fn adopt(&mut self, company: &Company) {
        self.employees.reset();
        for employee in company.employees.iter().filter(|e| !e.is_founder()) {
            self.employees.reserve_name(&employee.name);
        }
    }

    /// Run one month in fixed order: morale, projects, completion revenue,
    /// books, cashflow, turnover, events, culture, achievements, snapshot,
    /// then the month counter.
    pub fn process_month(&mut self, company: &mut Company) -> MonthResult {
        let month = company.current_month;
        let mut messages = Vec::new();

        update_morale(company, &mut self.rng);

        let update = process_projects(company, &self.config);
        messages.extend(update.messages);

        let mut revenue = 0;
        for id in &update.completed {
            let Some((name, outcome)) = company
                .find_project(id)
                .map(|p| (p.name.clone(), calculate_project_outcome(p)))
            else {
                continue;
            };
            revenue += outcome.payment;
            company.reputation =
                (company.reputation + outcome.reputation_change).clamp(0.0, 100.0);
            messages.push(format!("Project \"{}\" completed: {}", name, outcome.verdict()));
        }

        let financials = calculate_monthly_finances(company, revenue, &self.config);
        company.cash += financials.net_cashflow;
        log::debug!(
            "month {}: revenue {} expenses {} net {}",
            month,
            financials.revenue,
            financials.expenses(),
            financials.net_cashflow
        );

        let turnover = process_turnover(company, &self.config, &mut self.rng);
        messages.extend(turnover.messages);

        let events = generate_events(company, &self.deck, &self.config, &mut self.rng);
        company.pending_events.extend(events.iter().cloned());

        update_culture(company);

        for achievement in unlock_achievements(company) {
            messages.push(format!("Achievement unlocked: {}!", achievement.name));
        }

        let snapshot = MonthSnapshot {
            month,
            cash: company.cash,
            reputation: company.reputation,
            employee_count: company.active_headcount(),
            active_projects: company.in_progress_projects(),
            completed_projects: company.completed_projects(),
            financials,
            culture: company.culture,
        };
        company.history.push(snapshot.clone());
        company.current_month += 1;

        let success = company.cash >= 0;
        if !success {
            log::info!("company \"{}\" went bankrupt in month {}", company.name, month);
            messages.push("Company has gone bankrupt!".to_string());
        }

        MonthResult {
            success,
            events,
            snapshot,
            messages,
        }
    }

    #[inline]
    pub fn calculate_score(&self, company: &Company) -> i64 {
        calculate_score(company)
    }

    // ------------------------------------------------------------------------
    // Player actions
    // ------------------------------------------------------------------------

    /// Generate a hire candidate; the company must be able to pay the hiring cost
    pub fn generate_candidate(&mut self, company: &Company) -> Result<Employee> {
        let cost = self.config.hiring_cost;
        if !can_afford(company, cost) {
            log::warn!("candidate rejected: cash {} below hiring cost {}", company.cash, cost);
            return Err(GameError::InsufficientFunds {
                needed: cost,
                available: company.cash,
            });
        }
        Ok(self.employees.generate(&mut self.rng, company.current_month))
    }

    /// Pay the hiring cost and add the candidate, hired this month
    pub fn confirm_hire(&self, company: &mut Company, mut candidate: Employee) -> Result<()> {
        let cost = self.config.hiring_cost;
        if company.find_employee(&candidate.id).is_some() {
            return Err(GameError::InvalidState(format!(
                "employee {} is already on the payroll",
                candidate.id
            )))
            .inspect_err(|e| log::warn!("hire rejected: {}", e));
        }
        if !can_afford(company, cost) {
            return Err(GameError::InsufficientFunds {
                needed: cost,
                available: company.cash,
            })
            .inspect_err(|e| log::warn!("hire rejected: {}", e));
        }

        candidate.hired_month = company.current_month;
        candidate.quit_month = None;
        candidate.project_assignments.clear();
        company.cash -= cost;
        log::info!("hired {} as {}", candidate.name, candidate.role);
        company.employees.push(candidate);
        Ok(())
    }

    /// Let an employee go, paying severance up front. Returns the severance.
    pub fn fire_employee(&self, company: &mut Company, employee_id: &str) -> Result<i64> {
        let month = company.current_month;
        let Some(index) = company.employees.iter().position(|e| e.id == employee_id) else {
            return Err(GameError::EmployeeNotFound(employee_id.to_string()))
                .inspect_err(|e| log::warn!("fire rejected: {}", e));
        };

        let employee = &company.employees[index];
        let severance = self.config.severance_for(employee.salary);
        let rejection = if employee.is_founder() {
            Some(GameError::InvalidState("the founder cannot be fired".to_string()))
        } else if !employee.is_active() {
            Some(GameError::InvalidState(format!("{} has already left", employee.name)))
        } else if !can_afford(company, severance) {
            Some(GameError::InsufficientFunds {
                needed: severance,
                available: company.cash,
            })
        } else {
            None
        };
        if let Some(err) = rejection {
            log::warn!("fire rejected: {}", err);
            return Err(err);
        }

        let Company {
            employees,
            projects,
            cash,
            ..
        } = company;
        let employee = &mut employees[index];
        employee.quit_month = Some(month);
        detach_employee(employee, projects);
        *cash -= severance;

        log::info!("fired {} with severance {}", employee.name, severance);
        Ok(severance)
    }

    pub fn assign_employee_to_project(
        &self,
        company: &mut Company,
        employee_id: &str,
        project_id: &str,
        allocation: f64,
    ) -> Result<()> {
        assignment::assign(company, employee_id, project_id, allocation)
            .inspect_err(|e| log::warn!("assignment rejected: {}", e))
    }

    pub fn unassign_employee_from_project(
        &self,
        company: &mut Company,
        employee_id: &str,
        project_id: &str,
    ) -> Result<()> {
        assignment::unassign(company, employee_id, project_id)
            .inspect_err(|e| log::warn!("unassignment rejected: {}", e))
    }

    /// Add a new not-started project. A blank name falls back to a generated one.
    pub fn create_project<'c>(
        &mut self,
        company: &'c mut Company,
        kind: ProjectKind,
        name: Option<&str>,
    ) -> &'c Project {
        let name = name.map(str::trim).filter(|n| !n.is_empty());
        let project = self
            .projects
            .generate(&mut self.rng, kind, company.current_month, name);
        log::info!("project \"{}\" created", project.name);
        company.projects.push(project);
        &company.projects[company.projects.len() - 1]
    }

    /// Abandon an open project: it fails and everyone is taken off it
    pub fn cancel_project(&self, company: &mut Company, project_id: &str) -> Result<()> {
        let project = company
            .find_project_mut(project_id)
            .ok_or_else(|| GameError::ProjectNotFound(project_id.to_string()))
            .inspect_err(|e| log::warn!("cancel rejected: {}", e))?;
        if project.status.is_terminal() {
            let err = GameError::InvalidState(format!("project \"{}\" is already closed", project.name));
            log::warn!("cancel rejected: {}", err);
            return Err(err);
        }

        project.status = ProjectStatus::Failed;
        log::info!("project \"{}\" cancelled", project.name);
        assignment::clear_project(company, project_id);
        Ok(())
    }

    pub fn resolve_event(
        &self,
        company: &mut Company,
        event_id: &str,
        choice_id: &str,
    ) -> Result<EventResolution> {
        resolve_event(company, event_id, choice_id, &self.config)
            .inspect_err(|e| log::warn!("event resolution rejected: {}", e))
    }

    pub fn adjust_culture(&self, company: &mut Company, axis: CultureAxis, value: f64) -> Result<()> {
        adjust_culture(company, axis, value).inspect_err(|e| log::warn!("culture change rejected: {}", e))
    }
}
