//! Project records

use super::SkillSet;
use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Project category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectKind {
    ClientWork,
    ProductFeature,
    Maintenance,
    Rnd,
}

impl ProjectKind {
    pub const ALL: [ProjectKind; 4] = [
        ProjectKind::ClientWork,
        ProjectKind::ProductFeature,
        ProjectKind::Maintenance,
        ProjectKind::Rnd,
    ];

    /// Parse a kind name, accepting camelCase and snake_case spellings
    pub fn from_str(s: &str) -> Option<Self> {
        match s.to_lowercase().as_str() {
            "clientwork" | "client_work" | "client" => Some(ProjectKind::ClientWork),
            "productfeature" | "product_feature" | "feature" => Some(ProjectKind::ProductFeature),
            "maintenance" => Some(ProjectKind::Maintenance),
            "rnd" | "r&d" | "research" => Some(ProjectKind::Rnd),
            _ => None,
        }
    }
}

/// Lifecycle state; `Completed` and `Failed` are terminal
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum ProjectStatus {
    NotStarted,
    InProgress,
    Completed,
    Failed,
}

impl ProjectStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        matches!(self, ProjectStatus::Completed | ProjectStatus::Failed)
    }
}

/// An employee's share of this project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct EmployeeAssignment {
    pub employee_id: String,
    pub allocation: f64,
}

/// Milestone thresholds paid out on client work
pub const MILESTONES: [f64; 3] = [25.0, 50.0, 75.0];

/// Project record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Project {
    pub id: String,
    pub name: String,
    pub kind: ProjectKind,
    /// 1-10
    pub complexity: u32,
    pub required_skills: SkillSet,
    pub estimated_months: u32,
    #[serde(default)]
    pub deadline: Option<u32>,
    pub value: i64,
    pub progress: f64,
    pub quality: f64,
    pub tech_debt: f64,
    pub status: ProjectStatus,
    #[serde(default)]
    pub assignments: SmallVec<[EmployeeAssignment; 4]>,
    pub start_month: u32,
    #[serde(default)]
    pub completed_month: Option<u32>,
    #[serde(default)]
    pub milestone25_paid: bool,
    #[serde(default)]
    pub milestone50_paid: bool,
    #[serde(default)]
    pub milestone75_paid: bool,
    /// Everyone ever assigned, kept after assignments are cleared
    #[serde(default)]
    pub contributors: Vec<String>,
}

impl Project {
    #[inline]
    pub fn is_active(&self) -> bool {
        !self.status.is_terminal()
    }

    pub fn has_assignee(&self, employee_id: &str) -> bool {
        self.assignments.iter().any(|a| a.employee_id == employee_id)
    }

    /// Paid flag for a milestone threshold index (0 = 25%, 1 = 50%, 2 = 75%)
    pub fn milestone_paid(&self, index: usize) -> bool {
        match index {
            0 => self.milestone25_paid,
            1 => self.milestone50_paid,
            2 => self.milestone75_paid,
            _ => true,
        }
    }

    pub fn mark_milestone_paid(&mut self, index: usize) {
        match index {
            0 => self.milestone25_paid = true,
            1 => self.milestone50_paid = true,
            2 => self.milestone75_paid = true,
            _ => {}
        }
    }

    /// Months from start to completion, if completed
    pub fn duration(&self) -> Option<u32> {
        self.completed_month
            .map(|done| done.saturating_sub(self.start_month))
    }
}
