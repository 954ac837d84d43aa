//! Hand-built fixtures shared by unit tests across the crate

use super::*;
use crate::config::GameConfig;
use smallvec::SmallVec;

pub(crate) fn employee(id: &str, salary: i64) -> Employee {
    Employee {
        id: id.to_string(),
        name: format!("Employee {}", id),
        role: "Full Stack Developer".to_string(),
        personality: Personality::TeamPlayer,
        skills: SkillSet::new(60.0, 40.0, 50.0, 40.0),
        morale: 70.0,
        productivity: 1.0,
        loyalty: 50.0,
        salary,
        hired_month: 1,
        quit_month: None,
        founder: false,
        project_assignments: SmallVec::new(),
    }
}

pub(crate) fn founder() -> Employee {
    Employee {
        id: "founder".to_string(),
        name: "You".to_string(),
        role: "Founder & CEO".to_string(),
        skills: SkillSet::new(80.0, 80.0, 80.0, 80.0),
        morale: 100.0,
        loyalty: 100.0,
        salary: 0,
        founder: true,
        ..employee("founder", 0)
    }
}

pub(crate) fn project(id: &str) -> Project {
    Project {
        id: id.to_string(),
        name: format!("Project {}", id),
        kind: ProjectKind::ClientWork,
        complexity: 4,
        required_skills: SkillSet::new(56.0, 28.0, 42.0, 42.0),
        estimated_months: 4,
        deadline: None,
        value: 25_000,
        progress: 0.0,
        quality: 0.0,
        tech_debt: 0.0,
        status: ProjectStatus::NotStarted,
        assignments: SmallVec::new(),
        start_month: 1,
        completed_month: None,
        milestone25_paid: false,
        milestone50_paid: false,
        milestone75_paid: false,
        contributors: Vec::new(),
    }
}

pub(crate) fn company_with(employees: Vec<Employee>, projects: Vec<Project>) -> Company {
    let mut company = Company::new("test-co", "Test Co", &GameConfig::default());
    company.employees = employees;
    company.projects = projects;
    company
}
