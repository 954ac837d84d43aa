//! Employee records

use serde::{Deserialize, Serialize};
use smallvec::SmallVec;

/// Role title the founder is created with
pub const FOUNDER_ROLE: &str = "Founder & CEO";

/// Personality archetype
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum Personality {
    Rockstar,
    TeamPlayer,
    Wildcard,
    Workhorse,
    Leader,
}

impl Personality {
    /// All personalities, in generation bucket order
    pub const ALL: [Personality; 5] = [
        Personality::Rockstar,
        Personality::TeamPlayer,
        Personality::Wildcard,
        Personality::Workhorse,
        Personality::Leader,
    ];
}

/// Four skill dimensions, each 0-100
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub struct SkillSet {
    pub technical: f64,
    pub sales: f64,
    pub design: f64,
    pub management: f64,
}

impl SkillSet {
    pub const fn new(technical: f64, sales: f64, design: f64, management: f64) -> Self {
        Self {
            technical,
            sales,
            design,
            management,
        }
    }

    /// Values in technical, sales, design, management order
    #[inline]
    pub fn values(&self) -> [f64; 4] {
        [self.technical, self.sales, self.design, self.management]
    }

    #[inline]
    pub fn average(&self) -> f64 {
        self.values().iter().sum::<f64>() / 4.0
    }

    /// Apply `f` to every dimension
    #[inline]
    pub fn map(&self, f: impl Fn(f64) -> f64) -> Self {
        Self::new(
            f(self.technical),
            f(self.sales),
            f(self.design),
            f(self.management),
        )
    }
}

impl std::ops::Add for SkillSet {
    type Output = SkillSet;

    fn add(self, other: SkillSet) -> SkillSet {
        SkillSet::new(
            self.technical + other.technical,
            self.sales + other.sales,
            self.design + other.design,
            self.management + other.management,
        )
    }
}

/// An employee's share of one project
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProjectAssignment {
    pub project_id: String,
    /// Percentage of time, 0-100
    pub allocation: f64,
}

/// Employee record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    pub id: String,
    pub name: String,
    pub role: String,
    pub personality: Personality,
    pub skills: SkillSet,
    pub morale: f64,
    pub productivity: f64,
    pub loyalty: f64,
    /// Monthly salary
    pub salary: i64,
    pub hired_month: u32,
    #[serde(default)]
    pub quit_month: Option<u32>,
    #[serde(default)]
    pub founder: bool,
    #[serde(default)]
    pub project_assignments: SmallVec<[ProjectAssignment; 4]>,
}

impl Employee {
    /// Still on the payroll
    #[inline]
    pub fn is_active(&self) -> bool {
        self.quit_month.is_none()
    }

    /// The company's founder. Saves written without the `founder` flag are
    /// recognised by role.
    #[inline]
    pub fn is_founder(&self) -> bool {
        self.founder || self.role == FOUNDER_ROLE
    }

    /// Summed allocation across all assignments
    #[inline]
    pub fn total_allocation(&self) -> f64 {
        self.project_assignments.iter().map(|a| a.allocation).sum()
    }

    /// Summed allocation excluding one project
    pub fn allocation_excluding(&self, project_id: &str) -> f64 {
        self.project_assignments
            .iter()
            .filter(|a| a.project_id != project_id)
            .map(|a| a.allocation)
            .sum()
    }

    pub fn is_assigned_to(&self, project_id: &str) -> bool {
        self.project_assignments
            .iter()
            .any(|a| a.project_id == project_id)
    }

    /// Months since hire
    #[inline]
    pub fn tenure(&self, current_month: u32) -> u32 {
        current_month.saturating_sub(self.hired_month)
    }
}
