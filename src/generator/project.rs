//! Project generation

use super::new_id;
use crate::company::{Project, ProjectKind, ProjectStatus, SkillSet};
use rand::seq::SliceRandom;
use rand::Rng;
use smallvec::SmallVec;

/// Value per complexity point per estimated month
const VALUE_UNIT: f64 = 2_500.0;
/// Expected monthly progress assumptions used to set client deadlines
const EXPECTED_SKILL_MATCH: f64 = 0.7;
const EXPECTED_PRODUCTIVITY: f64 = 1.0;
const DEADLINE_BUFFER: u32 = 2;

const CLIENT_WORK_NAMES: &[&str] = &[
    "E-commerce Platform",
    "Mobile Banking App",
    "Healthcare Portal",
    "Real Estate Website",
    "Inventory Management System",
    "Customer Dashboard",
    "Analytics Platform",
    "Social Media Integration",
    "Payment Gateway",
    "CRM System",
];
const PRODUCT_FEATURE_NAMES: &[&str] = &[
    "User Authentication System",
    "Notification Service",
    "Search Functionality",
    "Reporting Module",
    "API Integration",
    "Data Migration Tool",
    "Performance Optimization",
    "Security Audit",
    "Mobile Responsiveness",
    "Third-party Integration",
];
const MAINTENANCE_NAMES: &[&str] = &[
    "Code Refactoring",
    "Dependency Updates",
    "Bug Fixing Sprint",
    "Documentation Update",
    "Database Optimization",
    "Server Migration",
    "Security Patches",
    "Performance Tuning",
    "Technical Debt Reduction",
    "Legacy System Cleanup",
];
const RND_NAMES: &[&str] = &[
    "AI/ML Research",
    "Blockchain Exploration",
    "New Framework Evaluation",
    "Prototyping Lab",
    "Innovation Workshop",
    "Technology Spike",
    "Proof of Concept",
    "Architecture Redesign",
    "Platform Migration Study",
    "Emerging Tech Analysis",
];

impl ProjectKind {
    fn name_pool(self) -> &'static [&'static str] {
        match self {
            ProjectKind::ClientWork => CLIENT_WORK_NAMES,
            ProjectKind::ProductFeature => PRODUCT_FEATURE_NAMES,
            ProjectKind::Maintenance => MAINTENANCE_NAMES,
            ProjectKind::Rnd => RND_NAMES,
        }
    }

    /// `(low, span)`: complexity is `floor(low + U * span)`
    fn complexity_range(self) -> (f64, f64) {
        match self {
            ProjectKind::ClientWork => (3.0, 6.0),
            ProjectKind::ProductFeature => (2.0, 5.0),
            ProjectKind::Maintenance => (1.0, 4.0),
            ProjectKind::Rnd => (4.0, 5.0),
        }
    }
}

/// Generates projects of a requested kind
#[derive(Debug, Default, Clone, Copy)]
pub struct ProjectGenerator;

impl ProjectGenerator {
    pub fn new() -> Self {
        Self
    }

    /// New not-started project, optionally with a player-chosen name
    pub fn generate<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        kind: ProjectKind,
        current_month: u32,
        name: Option<&str>,
    ) -> Project {
        let name = match name {
            Some(name) => name.to_string(),
            None => kind
                .name_pool()
                .choose(rng)
                .copied()
                .unwrap_or("Untitled Project")
                .to_string(),
        };

        let (low, span) = kind.complexity_range();
        let complexity = (low + rng.gen::<f64>() * span).floor() as u32;
        let estimated_months = (1.0 + complexity as f64 * 0.8 + rng.gen::<f64>() * 2.0).floor() as u32;
        let value = project_value(rng, kind, complexity, estimated_months);
        let deadline = (kind == ProjectKind::ClientWork)
            .then(|| current_month + months_to_complete(complexity) + DEADLINE_BUFFER);

        Project {
            id: new_id(rng),
            name,
            kind,
            complexity,
            required_skills: required_skills(kind, complexity),
            estimated_months,
            deadline,
            value,
            progress: 0.0,
            quality: 0.0,
            tech_debt: 0.0,
            status: ProjectStatus::NotStarted,
            assignments: SmallVec::new(),
            start_month: current_month,
            completed_month: None,
            milestone25_paid: false,
            milestone50_paid: false,
            milestone75_paid: false,
            contributors: Vec::new(),
        }
    }
}

/// Skill profile per kind, scaled by `complexity / 10`
pub fn required_skills(kind: ProjectKind, complexity: u32) -> SkillSet {
    let i = complexity as f64 / 10.0;
    let skills = match kind {
        ProjectKind::ClientWork => {
            SkillSet::new(40.0 + i * 40.0, 20.0 + i * 20.0, 30.0 + i * 30.0, 30.0 + i * 30.0)
        }
        ProjectKind::ProductFeature => {
            SkillSet::new(50.0 + i * 40.0, 10.0 + i * 10.0, 40.0 + i * 30.0, 20.0 + i * 20.0)
        }
        ProjectKind::Maintenance => {
            SkillSet::new(60.0 + i * 30.0, 0.0, 10.0 + i * 10.0, 10.0 + i * 10.0)
        }
        ProjectKind::Rnd => SkillSet::new(70.0 + i * 25.0, 0.0, 20.0 + i * 20.0, 30.0 + i * 30.0),
    };
    skills.map(f64::floor)
}

fn project_value<R: Rng + ?Sized>(
    rng: &mut R,
    kind: ProjectKind,
    complexity: u32,
    estimated_months: u32,
) -> i64 {
    let base = complexity as f64 * estimated_months as f64 * VALUE_UNIT;
    let multiplier = match kind {
        ProjectKind::ClientWork => 0.8 + rng.gen::<f64>() * 0.4,
        ProjectKind::ProductFeature => 0.5,
        ProjectKind::Maintenance => 0.3,
        ProjectKind::Rnd => 0.4,
    };
    (base * multiplier).floor() as i64
}

/// Months a typical team needs, inverting the monthly progress formula
pub fn months_to_complete(complexity: u32) -> u32 {
    let per_month = 25.0 * EXPECTED_SKILL_MATCH * EXPECTED_PRODUCTIVITY
        / (complexity.max(1) as f64).sqrt();
    (100.0 / per_month).ceil() as u32
}
