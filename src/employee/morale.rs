//! Monthly morale and productivity

use crate::company::{Company, Culture, Employee, Personality, Project, ProjectStatus};
use rand::Rng;

/// Months a completed project keeps boosting its contributors
const RECENT_SUCCESS_WINDOW: u32 = 3;
const RECENT_SUCCESS_QUALITY: f64 = 70.0;
const RECENT_SUCCESS_BONUS: f64 = 10.0;

/// How well a personality fits the current culture, 0.0-1.0
pub fn culture_fit(personality: Personality, culture: &Culture) -> f64 {
    let Culture {
        speed,
        quality,
        work_life,
        hierarchy,
    } = *culture;
    match personality {
        Personality::Rockstar => quality * 0.6 + (1.0 - hierarchy) * 0.4,
        Personality::TeamPlayer => (1.0 - hierarchy) * 0.7 + work_life * 0.3,
        Personality::Wildcard => (1.0 - speed) * 0.5 + (1.0 - hierarchy) * 0.5,
        Personality::Workhorse => speed * 0.6 + work_life * 0.4,
        Personality::Leader => hierarchy * 0.6 + quality * 0.4,
    }
}

/// 0.0-1.0 credit for good projects the employee recently helped finish
pub fn recent_success(projects: &[Project], employee_id: &str, current_month: u32) -> f64 {
    let hits = projects
        .iter()
        .filter(|p| p.status == ProjectStatus::Completed && p.quality > RECENT_SUCCESS_QUALITY)
        .filter(|p| {
            p.completed_month
                .is_some_and(|done| current_month.saturating_sub(done) <= RECENT_SUCCESS_WINDOW)
        })
        .filter(|p| p.contributors.iter().any(|c| c == employee_id))
        .count();
    (hits as f64 * 0.3).min(1.0)
}

/// Morale delta from salary fairness, workload, culture fit and recent wins
pub fn morale_delta(
    employee: &Employee,
    average_salary: f64,
    culture: &Culture,
    success: f64,
) -> f64 {
    let mut delta = 0.0;

    let salary = employee.salary as f64;
    if salary < average_salary * 0.8 {
        delta -= 10.0;
    } else if salary > average_salary * 1.2 {
        delta += 5.0;
    }

    let workload = employee.total_allocation();
    if workload > 100.0 {
        delta -= 15.0;
    } else if workload < 50.0 {
        delta -= 5.0;
    } else {
        delta += 2.0;
    }

    delta += (culture_fit(employee.personality, culture) - 0.5) * 20.0;
    delta + success * RECENT_SUCCESS_BONUS
}

/// Productivity from morale and personality. Wildcards roll a fresh factor
/// in [0.5, 1.5) every call.
pub fn productivity_for<R: Rng + ?Sized>(
    morale: f64,
    personality: Personality,
    rng: &mut R,
) -> f64 {
    let base = 1.0 + (morale - 50.0) / 100.0;
    let factor = match personality {
        Personality::Wildcard => 0.5 + rng.gen::<f64>(),
        other => other.profile().productivity_multiplier,
    };
    (base * factor).clamp(0.5, 2.0)
}

/// Recompute morale and productivity for every active employee
pub fn update_morale<R: Rng + ?Sized>(company: &mut Company, rng: &mut R) {
    let average_salary = company.average_salary();
    let Company {
        employees,
        projects,
        culture,
        current_month,
        ..
    } = company;

    for employee in employees.iter_mut().filter(|e| e.is_active()) {
        let success = recent_success(projects, &employee.id, *current_month);
        let delta = morale_delta(employee, average_salary, culture, success);
        employee.morale = (employee.morale + delta).clamp(0.0, 100.0);
        employee.productivity = productivity_for(employee.morale, employee.personality, rng);
    }
    log::debug!(
        "month {}: morale updated for {} employees",
        current_month,
        employees.iter().filter(|e| e.is_active()).count()
    );
}
