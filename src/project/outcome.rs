//! Completion payout and reputation

use crate::company::Project;

/// Payment and reputation earned by a finished project
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ProjectOutcome {
    pub payment: i64,
    pub quality: f64,
    pub reputation_change: f64,
}

impl ProjectOutcome {
    /// Player-facing verdict
    pub fn verdict(&self) -> &'static str {
        if self.quality > 70.0 {
            "Success"
        } else if self.quality > 50.0 {
            "Mediocre"
        } else {
            "Failure"
        }
    }
}

/// Quality bands: 90+ pays 120% and +5 reputation, 70+ pays in full and +2,
/// 50+ pays 80%, anything lower pays nothing and costs 5 reputation.
pub fn calculate_project_outcome(project: &Project) -> ProjectOutcome {
    let quality = project.quality;
    let (multiplier, reputation_change) = if quality >= 90.0 {
        (1.2, 5.0)
    } else if quality >= 70.0 {
        (1.0, 2.0)
    } else if quality >= 50.0 {
        (0.8, 0.0)
    } else {
        (0.0, -5.0)
    };

    ProjectOutcome {
        payment: (project.value as f64 * multiplier).floor() as i64,
        quality,
        reputation_change,
    }
}
