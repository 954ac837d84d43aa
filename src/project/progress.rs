//! Monthly project advancement

use crate::company::assignment::detach_project;
use crate::company::{Company, Employee, Project, ProjectKind, ProjectStatus, SkillSet, MILESTONES};
use crate::config::GameConfig;

/// Progress a fully matched, average team makes on a complexity-1 project
const BASE_PROGRESS: f64 = 25.0;
const QUALITY_STEP: f64 = 10.0;
const LOW_MATCH: f64 = 0.6;
const TECH_DEBT_STEP: f64 = 5.0;
/// Share of accumulated tech debt taken off quality on completion
const TECH_DEBT_QUALITY_PENALTY: f64 = 0.5;

/// What happened to projects this month
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ProjectUpdate {
    /// Ids completed this month, in project order
    pub completed: Vec<String>,
    pub failed: Vec<String>,
    /// Cash paid out for client milestones
    pub milestone_payments: i64,
    pub messages: Vec<String>,
}

/// Mean over required dimensions of `min(1, team_avg / required)`.
/// 0.5 when the project requires nothing, 0.0 for an empty team.
pub fn skill_match(team: &[&Employee], required: &SkillSet) -> f64 {
    if team.is_empty() {
        return 0.0;
    }
    let total = team
        .iter()
        .fold(SkillSet::default(), |acc, e| acc + e.skills);
    let avg = total.map(|v| v / team.len() as f64);

    let (sum, dims) = avg
        .values()
        .into_iter()
        .zip(required.values())
        .filter(|(_, req)| *req > 0.0)
        .fold((0.0, 0usize), |(sum, n), (have, req)| {
            (sum + (have / req).min(1.0), n + 1)
        });

    if dims == 0 {
        0.5
    } else {
        sum / dims as f64
    }
}

/// One month of work by a team with the given match and mean productivity
fn advance(project: &mut Project, matched: f64, productivity: f64) {
    let gained = BASE_PROGRESS * matched * productivity / (project.complexity.max(1) as f64).sqrt();
    project.progress = (project.progress + gained).min(100.0);
    project.quality = (project.quality + matched * (productivity / 2.0) * QUALITY_STEP).min(100.0);
    if matched < LOW_MATCH {
        project.tech_debt += TECH_DEBT_STEP;
    }
}

/// Pay every unpaid milestone crossed between `old` and the current progress
fn pay_milestones(
    project: &mut Project,
    old: f64,
    config: &GameConfig,
    messages: &mut Vec<String>,
) -> i64 {
    let mut paid = 0;
    for (index, threshold) in MILESTONES.iter().enumerate() {
        if old < *threshold && project.progress >= *threshold && !project.milestone_paid(index) {
            let payment = (project.value as f64 * config.milestone_payment_rate).floor() as i64;
            project.mark_milestone_paid(index);
            paid += payment;
            messages.push(format!(
                "Project \"{}\" milestone reached ({}%) - received ${}",
                project.name, threshold, payment
            ));
        }
    }
    paid
}

/// Advance every in-progress project by one month.
///
/// Pays client milestones straight into `company.cash`; completion revenue
/// is left to the caller via `calculate_project_outcome`. Projects with no
/// active team are left untouched, deadline included.
pub fn process_projects(company: &mut Company, config: &GameConfig) -> ProjectUpdate {
    let mut update = ProjectUpdate::default();
    let month = company.current_month;
    let Company {
        employees,
        projects,
        cash,
        ..
    } = company;

    for project in projects
        .iter_mut()
        .filter(|p| p.status == ProjectStatus::InProgress)
    {
        let staffed = {
            let team: Vec<&Employee> = project
                .assignments
                .iter()
                .filter_map(|a| employees.iter().find(|e| e.id == a.employee_id))
                .filter(|e| e.is_active())
                .collect();
            (!team.is_empty()).then(|| {
                let productivity =
                    team.iter().map(|e| e.productivity).sum::<f64>() / team.len() as f64;
                (skill_match(&team, &project.required_skills), productivity)
            })
        };

        let Some((matched, productivity)) = staffed else {
            continue;
        };

        let old_progress = project.progress;
        advance(project, matched, productivity);
        if project.kind == ProjectKind::ClientWork {
            let paid = pay_milestones(project, old_progress, config, &mut update.messages);
            *cash += paid;
            update.milestone_payments += paid;
        }

        if project.progress >= 100.0 {
            project.status = ProjectStatus::Completed;
            project.completed_month = Some(month);
            project.progress = 100.0;
            project.quality =
                (project.quality - project.tech_debt * TECH_DEBT_QUALITY_PENALTY).max(0.0);
            detach_project(employees, project);

            log::info!("project \"{}\" completed in month {}", project.name, month);
            update
                .messages
                .push(format!("Project \"{}\" completed!", project.name));
            update.completed.push(project.id.clone());
        } else if project.deadline.is_some_and(|deadline| month > deadline) {
            project.status = ProjectStatus::Failed;
            detach_project(employees, project);

            log::info!("project \"{}\" missed its deadline", project.name);
            update
                .messages
                .push(format!("Project \"{}\" failed to meet deadline!", project.name));
            update.failed.push(project.id.clone());
        }
    }

    update
}
