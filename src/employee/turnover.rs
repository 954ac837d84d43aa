//! Voluntary turnover

use crate::company::assignment::detach_employee;
use crate::company::{Company, Employee};
use crate::config::GameConfig;
use rand::Rng;

/// Highest monthly quit probability for anyone
pub const MAX_QUIT_PROBABILITY: f64 = 0.5;

/// Someone who left this month
#[derive(Debug, Clone, PartialEq)]
pub struct Departure {
    pub employee_id: String,
    pub name: String,
    pub role: String,
    pub severance: i64,
}

/// Outcome of one turnover pass
#[derive(Debug, Clone, Default, PartialEq)]
pub struct TurnoverReport {
    pub departures: Vec<Departure>,
    pub messages: Vec<String>,
}

impl TurnoverReport {
    pub fn total_severance(&self) -> i64 {
        self.departures.iter().map(|d| d.severance).sum()
    }
}

/// Monthly probability that `employee` quits, in [0, 0.5]
pub fn quit_probability(employee: &Employee, current_month: u32, base_rate: f64) -> f64 {
    let morale_factor = if employee.morale < 30.0 {
        3.0
    } else if employee.morale < 50.0 {
        1.5
    } else if employee.morale > 80.0 {
        0.5
    } else {
        1.0
    };

    let loyalty_factor = (100.0 - employee.loyalty) / 50.0;

    let tenure = employee.tenure(current_month);
    let tenure_factor = if tenure < 3 {
        1.5
    } else if tenure > 24 {
        0.7
    } else {
        1.0
    };

    let personality_factor = employee.personality.profile().quit_multiplier;

    (base_rate * morale_factor * loyalty_factor * tenure_factor * personality_factor)
        .clamp(0.0, MAX_QUIT_PROBABILITY)
}

/// Roll once per active employee other than the founder. Leavers get
/// `quit_month`, lose their assignments and are paid severance regardless of
/// the cash balance.
pub fn process_turnover<R: Rng + ?Sized>(
    company: &mut Company,
    config: &GameConfig,
    rng: &mut R,
) -> TurnoverReport {
    let mut report = TurnoverReport::default();
    let month = company.current_month;
    let Company {
        employees,
        projects,
        cash,
        ..
    } = company;

    for employee in employees
        .iter_mut()
        .filter(|e| e.is_active() && !e.is_founder())
    {
        let probability = quit_probability(employee, month, config.base_quit_rate);
        if rng.gen::<f64>() >= probability {
            continue;
        }

        employee.quit_month = Some(month);
        detach_employee(employee, projects);
        let severance = config.severance_for(employee.salary);
        *cash -= severance;

        log::info!("{} ({}) quit in month {}", employee.name, employee.role, month);
        report
            .messages
            .push(format!("{} ({}) has quit.", employee.name, employee.role));
        report.departures.push(Departure {
            employee_id: employee.id.clone(),
            name: employee.name.clone(),
            role: employee.role.clone(),
            severance,
        });
    }

    report
}
