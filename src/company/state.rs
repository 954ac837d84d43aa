//! Company aggregate and per-month snapshots

use super::{Employee, GameEvent, Project, ProjectStatus};
use crate::config::{CultureAxis, GameConfig};
use crate::error::Result;
use serde::{Deserialize, Serialize};

/// Four company-wide dials, each 0.0-1.0
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Culture {
    pub speed: f64,
    pub quality: f64,
    pub work_life: f64,
    pub hierarchy: f64,
}

impl Default for Culture {
    fn default() -> Self {
        Self {
            speed: 0.5,
            quality: 0.5,
            work_life: 0.5,
            hierarchy: 0.5,
        }
    }
}

impl Culture {
    #[inline]
    pub fn get(&self, axis: CultureAxis) -> f64 {
        match axis {
            CultureAxis::Speed => self.speed,
            CultureAxis::Quality => self.quality,
            CultureAxis::WorkLife => self.work_life,
            CultureAxis::Hierarchy => self.hierarchy,
        }
    }

    #[inline]
    pub fn get_mut(&mut self, axis: CultureAxis) -> &mut f64 {
        match axis {
            CultureAxis::Speed => &mut self.speed,
            CultureAxis::Quality => &mut self.quality,
            CultureAxis::WorkLife => &mut self.work_life,
            CultureAxis::Hierarchy => &mut self.hierarchy,
        }
    }
}

/// One month's books
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FinancialSnapshot {
    pub month: u32,
    pub starting_cash: i64,
    pub revenue: i64,
    pub payroll: i64,
    pub tools: i64,
    pub rent: i64,
    pub other_expenses: i64,
    pub net_cashflow: i64,
    pub ending_cash: i64,
}

impl FinancialSnapshot {
    #[inline]
    pub fn expenses(&self) -> i64 {
        self.payroll + self.tools + self.rent + self.other_expenses
    }
}

/// Immutable end-of-month record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct MonthSnapshot {
    pub month: u32,
    pub cash: i64,
    pub reputation: f64,
    pub employee_count: usize,
    pub active_projects: usize,
    pub completed_projects: usize,
    pub financials: FinancialSnapshot,
    pub culture: Culture,
}

/// Root aggregate for one game
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Company {
    pub id: String,
    pub name: String,
    pub current_month: u32,
    pub cash: i64,
    pub reputation: f64,
    pub culture: Culture,
    pub employees: Vec<Employee>,
    pub projects: Vec<Project>,
    /// Resolved history, oldest first
    #[serde(default)]
    pub events: Vec<GameEvent>,
    #[serde(default)]
    pub pending_events: Vec<GameEvent>,
    #[serde(default)]
    pub history: Vec<MonthSnapshot>,
    #[serde(default)]
    pub unlocked_achievements: Vec<String>,
}

impl Company {
    /// Empty company at month 1 with the configured opening balance
    pub fn new(id: impl Into<String>, name: impl Into<String>, config: &GameConfig) -> Self {
        Self {
            id: id.into(),
            name: name.into(),
            current_month: 1,
            cash: config.starting_cash,
            reputation: config.starting_reputation,
            culture: Culture::default(),
            employees: Vec::new(),
            projects: Vec::new(),
            events: Vec::new(),
            pending_events: Vec::new(),
            history: Vec::new(),
            unlocked_achievements: Vec::new(),
        }
    }

    pub fn to_json(&self) -> Result<String> {
        Ok(serde_json::to_string(self)?)
    }

    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    #[inline]
    pub fn active_employees(&self) -> impl Iterator<Item = &Employee> {
        self.employees.iter().filter(|e| e.is_active())
    }

    #[inline]
    pub fn active_headcount(&self) -> usize {
        self.active_employees().count()
    }

    /// Everyone ever hired, founder and leavers included
    #[inline]
    pub fn total_hired(&self) -> usize {
        self.employees.len()
    }

    pub fn find_employee(&self, id: &str) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id == id)
    }

    pub fn find_employee_mut(&mut self, id: &str) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.id == id)
    }

    pub fn find_project(&self, id: &str) -> Option<&Project> {
        self.projects.iter().find(|p| p.id == id)
    }

    pub fn find_project_mut(&mut self, id: &str) -> Option<&mut Project> {
        self.projects.iter_mut().find(|p| p.id == id)
    }

    pub fn projects_with_status(&self, status: ProjectStatus) -> impl Iterator<Item = &Project> {
        self.projects.iter().filter(move |p| p.status == status)
    }

    #[inline]
    pub fn completed_projects(&self) -> usize {
        self.projects_with_status(ProjectStatus::Completed).count()
    }

    #[inline]
    pub fn in_progress_projects(&self) -> usize {
        self.projects_with_status(ProjectStatus::InProgress).count()
    }

    /// Mean salary over active employees, founder included
    pub fn average_salary(&self) -> f64 {
        let (total, count) = self
            .active_employees()
            .fold((0i64, 0usize), |(sum, n), e| (sum + e.salary, n + 1));
        if count == 0 {
            0.0
        } else {
            total as f64 / count as f64
        }
    }

    #[inline]
    pub fn is_bankrupt(&self) -> bool {
        self.cash < 0
    }

    pub fn latest_snapshot(&self) -> Option<&MonthSnapshot> {
        self.history.last()
    }

    pub fn has_achievement(&self, id: &str) -> bool {
        self.unlocked_achievements.iter().any(|a| a == id)
    }
}
