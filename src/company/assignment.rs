//! Employee/project assignment relation
//!
//! The relation is stored twice: on the employee (`project_assignments`) and
//! on the project (`assignments`). Every function here updates both lists
//! together, so the two indexes never disagree.

use super::{Company, Employee, EmployeeAssignment, Project, ProjectAssignment, ProjectStatus};
use crate::error::{GameError, Result};

/// Largest share of an employee's time across all projects
pub const MAX_ALLOCATION: f64 = 100.0;

/// Assign (or re-assign) an employee to a project at `allocation` percent.
///
/// Validates everything before mutating: allocation in 1-100, employee
/// active, project not finished, and the employee's summed allocation
/// (ignoring any existing share of this project) staying within 100.
/// The first assignment moves a not-started project to in-progress.
pub fn assign(
    company: &mut Company,
    employee_id: &str,
    project_id: &str,
    allocation: f64,
) -> Result<()> {
    if !(1.0..=MAX_ALLOCATION).contains(&allocation) {
        return Err(GameError::OutOfRange(format!(
            "allocation must be between 1 and 100, got {}",
            allocation
        )));
    }

    let employee = company
        .find_employee(employee_id)
        .ok_or_else(|| GameError::EmployeeNotFound(employee_id.to_string()))?;
    if !employee.is_active() {
        return Err(GameError::InvalidAssignment(format!(
            "{} no longer works here",
            employee.name
        )));
    }
    let committed = employee.allocation_excluding(project_id);

    let project = company
        .find_project(project_id)
        .ok_or_else(|| GameError::ProjectNotFound(project_id.to_string()))?;
    if project.status.is_terminal() {
        return Err(GameError::InvalidAssignment(format!(
            "project \"{}\" is already finished",
            project.name
        )));
    }

    if committed + allocation > MAX_ALLOCATION {
        return Err(GameError::InvalidAssignment(format!(
            "allocation would exceed 100% (already committed {}%)",
            committed
        )));
    }

    let Company {
        employees,
        projects,
        ..
    } = company;

    if let Some(employee) = employees.iter_mut().find(|e| e.id == employee_id) {
        match employee
            .project_assignments
            .iter_mut()
            .find(|a| a.project_id == project_id)
        {
            Some(existing) => existing.allocation = allocation,
            None => employee.project_assignments.push(ProjectAssignment {
                project_id: project_id.to_string(),
                allocation,
            }),
        }
    }

    if let Some(project) = projects.iter_mut().find(|p| p.id == project_id) {
        match project
            .assignments
            .iter_mut()
            .find(|a| a.employee_id == employee_id)
        {
            Some(existing) => existing.allocation = allocation,
            None => project.assignments.push(EmployeeAssignment {
                employee_id: employee_id.to_string(),
                allocation,
            }),
        }
        if !project.contributors.iter().any(|c| c == employee_id) {
            project.contributors.push(employee_id.to_string());
        }
        if project.status == ProjectStatus::NotStarted {
            project.status = ProjectStatus::InProgress;
        }
    }

    Ok(())
}

/// Remove one employee from one project. Fails without mutation when the
/// pair is not currently assigned.
pub fn unassign(company: &mut Company, employee_id: &str, project_id: &str) -> Result<()> {
    let employee = company
        .find_employee(employee_id)
        .ok_or_else(|| GameError::EmployeeNotFound(employee_id.to_string()))?;
    if company.find_project(project_id).is_none() {
        return Err(GameError::ProjectNotFound(project_id.to_string()));
    }
    if !employee.is_assigned_to(project_id) {
        return Err(GameError::InvalidState(format!(
            "{} is not assigned to that project",
            employee.name
        )));
    }

    let Company {
        employees,
        projects,
        ..
    } = company;
    if let Some(employee) = employees.iter_mut().find(|e| e.id == employee_id) {
        employee
            .project_assignments
            .retain(|a| a.project_id != project_id);
    }
    if let Some(project) = projects.iter_mut().find(|p| p.id == project_id) {
        project.assignments.retain(|a| a.employee_id != employee_id);
    }
    Ok(())
}

/// Drop every assignment to a project, on both sides
pub fn clear_project(company: &mut Company, project_id: &str) {
    let Company {
        employees,
        projects,
        ..
    } = company;
    if let Some(project) = projects.iter_mut().find(|p| p.id == project_id) {
        detach_project(employees, project);
    }
}

/// Drop every assignment held by an employee, on both sides
pub fn clear_employee(company: &mut Company, employee_id: &str) {
    let Company {
        employees,
        projects,
        ..
    } = company;
    if let Some(employee) = employees.iter_mut().find(|e| e.id == employee_id) {
        detach_employee(employee, projects);
    }
}

/// Split-borrow form of [`clear_project`] for callers already iterating
/// the project list
pub(crate) fn detach_project(employees: &mut [Employee], project: &mut Project) {
    for assignment in project.assignments.drain(..) {
        if let Some(employee) = employees
            .iter_mut()
            .find(|e| e.id == assignment.employee_id)
        {
            employee
                .project_assignments
                .retain(|a| a.project_id != project.id);
        }
    }
}

/// Split-borrow form of [`clear_employee`]
pub(crate) fn detach_employee(employee: &mut Employee, projects: &mut [Project]) {
    for assignment in employee.project_assignments.drain(..) {
        if let Some(project) = projects.iter_mut().find(|p| p.id == assignment.project_id) {
            project.assignments.retain(|a| a.employee_id != employee.id);
        }
    }
}
