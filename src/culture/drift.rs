//! Culture drift toward what the company actually does

use crate::company::{Company, Culture, ProjectStatus};
use crate::config::CultureAxis;
use crate::error::{GameError, Result};

/// Fraction of the gap to the target closed each month
pub const DRIFT_FACTOR: f64 = 0.1;

/// Management skill above which an employee counts as a manager
const MANAGER_THRESHOLD: f64 = 60.0;

/// Desired manager share of the active team
const MANAGER_RATIO: f64 = 0.2;

#[inline]
fn lerp(current: f64, target: f64, factor: f64) -> f64 {
    current + (target - current) * factor
}

/// Targets derived from the current state; `None` where there is no data
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct CultureTargets {
    pub speed: Option<f64>,
    pub quality: Option<f64>,
    pub work_life: Option<f64>,
    pub hierarchy: Option<f64>,
}

pub fn culture_targets(company: &Company) -> CultureTargets {
    let mut targets = CultureTargets::default();

    let completed: Vec<_> = company
        .projects_with_status(ProjectStatus::Completed)
        .collect();
    if !completed.is_empty() {
        let n = completed.len() as f64;
        let avg_complexity = completed.iter().map(|p| p.complexity as f64).sum::<f64>() / n;
        let avg_duration = completed
            .iter()
            .map(|p| p.duration().unwrap_or(0) as f64)
            .sum::<f64>()
            / n;
        if avg_duration > 0.0 {
            targets.speed = Some((avg_complexity / avg_duration).min(1.0));
        }
        targets.quality = Some(completed.iter().map(|p| p.quality).sum::<f64>() / n / 100.0);
    }

    let (morale, managers, active) = company.active_employees().fold(
        (0.0, 0usize, 0usize),
        |(morale, managers, active), e| {
            let is_manager = e.skills.management > MANAGER_THRESHOLD;
            (morale + e.morale, managers + is_manager as usize, active + 1)
        },
    );
    if active > 0 {
        targets.work_life = Some(morale / active as f64 / 100.0);
        let wanted = (active as f64 * MANAGER_RATIO).max(1.0);
        targets.hierarchy = Some((managers as f64 / wanted).min(1.0));
    }

    targets
}

/// Move each culture axis a step toward its target. Axes without data
/// keep their value.
pub fn update_culture(company: &mut Company) {
    let targets = culture_targets(company);
    let culture = &mut company.culture;
    for (axis, target) in [
        (CultureAxis::Speed, targets.speed),
        (CultureAxis::Quality, targets.quality),
        (CultureAxis::WorkLife, targets.work_life),
        (CultureAxis::Hierarchy, targets.hierarchy),
    ] {
        if let Some(target) = target {
            let value = culture.get_mut(axis);
            *value = lerp(*value, target, DRIFT_FACTOR).clamp(0.0, 1.0);
        }
    }
    log::debug!("culture now {:?}", company.culture);
}

/// Short labels for the axes that sit far from the middle
pub fn describe_culture(culture: &Culture) -> String {
    const LABELS: [(CultureAxis, &str, &str); 4] = [
        (CultureAxis::Speed, "Fast-paced", "Methodical"),
        (CultureAxis::Quality, "Quality-focused", "Ship-it mentality"),
        (CultureAxis::WorkLife, "Work-life balance", "Hustle culture"),
        (CultureAxis::Hierarchy, "Structured", "Flat organization"),
    ];

    let labels: Vec<&str> = LABELS
        .iter()
        .filter_map(|&(axis, high, low)| match culture.get(axis) {
            v if v > 0.7 => Some(high),
            v if v < 0.3 => Some(low),
            _ => None,
        })
        .collect();

    if labels.is_empty() {
        "Balanced culture".to_string()
    } else {
        labels.join(", ")
    }
}

/// Set one axis directly
pub fn adjust_culture(company: &mut Company, axis: CultureAxis, value: f64) -> Result<()> {
    if !(0.0..=1.0).contains(&value) {
        return Err(GameError::OutOfRange(format!(
            "culture value {} must be between 0 and 1",
            value
        )));
    }
    *company.culture.get_mut(axis) = value;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::test_support::{company_with, employee, founder, project};

    fn completed(id: &str, complexity: u32, start: u32, done: u32, quality: f64) -> crate::company::Project {
        let mut p = project(id);
        p.complexity = complexity;
        p.start_month = start;
        p.completed_month = Some(done);
        p.quality = quality;
        p.progress = 100.0;
        p.status = ProjectStatus::Completed;
        p
    }

    #[test]
    fn test_no_data_leaves_culture_alone() {
        let mut company = company_with(vec![], vec![]);
        update_culture(&mut company);
        assert_eq!(company.culture, Culture::default());
    }

    #[test]
    fn test_drift_targets() {
        // founder manages (80 > 60); e1 does not (40)
        let company = company_with(
            vec![founder(), employee("e1", 4000)],
            vec![completed("p1", 4, 1, 5, 80.0), completed("p2", 2, 3, 5, 60.0)],
        );
        let targets = culture_targets(&company);
        // avg complexity 3 over avg duration 3
        assert_eq!(targets.speed, Some(1.0));
        assert!((targets.quality.unwrap() - 0.7).abs() < 1e-9);
        assert!((targets.work_life.unwrap() - 0.85).abs() < 1e-9);
        assert_eq!(targets.hierarchy, Some(1.0));
    }

    #[test]
    fn test_zero_duration_skips_speed() {
        let mut company = company_with(vec![], vec![completed("p1", 4, 3, 3, 90.0)]);
        update_culture(&mut company);
        assert_eq!(company.culture.speed, 0.5);
        assert!((company.culture.quality - 0.54).abs() < 1e-9);
        assert_eq!(company.culture.work_life, 0.5);
    }

    #[test]
    fn test_lerp_step() {
        let mut company = company_with(vec![employee("e1", 4000)], vec![]);
        company.employees[0].morale = 100.0;
        update_culture(&mut company);
        assert!((company.culture.work_life - 0.55).abs() < 1e-9);
        // no manager among one employee: target 0
        assert!((company.culture.hierarchy - 0.45).abs() < 1e-9);
    }

    #[test]
    fn test_describe_culture() {
        assert_eq!(describe_culture(&Culture::default()), "Balanced culture");
        let culture = Culture {
            speed: 0.9,
            quality: 0.1,
            work_life: 0.5,
            hierarchy: 0.2,
        };
        assert_eq!(
            describe_culture(&culture),
            "Fast-paced, Ship-it mentality, Flat organization"
        );
    }

    #[test]
    fn test_adjust_culture_bounds() {
        let mut company = company_with(vec![], vec![]);
        adjust_culture(&mut company, CultureAxis::Hierarchy, 1.0).unwrap();
        assert_eq!(company.culture.hierarchy, 1.0);

        let err = adjust_culture(&mut company, CultureAxis::Speed, 1.2).unwrap_err();
        assert!(matches!(err, GameError::OutOfRange(_)));
        assert_eq!(company.culture.speed, 0.5);
    }
}
