//! Property tests for generators
//!
//! Property: generated employees stay inside their documented ranges
//! Property: generated projects match their kind's complexity and deadline rules

use proptest::prelude::*;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::company::{ProjectKind, ProjectStatus};
use crate::generator::{months_to_complete, EmployeeGenerator, ProjectGenerator};

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

fn kind_strategy() -> impl Strategy<Value = ProjectKind> {
    prop::sample::select(ProjectKind::ALL.to_vec())
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Candidate stats, salary granularity and cap
    #[test]
    fn prop_candidate_in_range(seed in any::<u64>(), month in 1..500u32) {
        let mut rng = StdRng::seed_from_u64(seed);
        let mut gen = EmployeeGenerator::new();
        let e = gen.generate(&mut rng, month);

        for v in e.skills.values() {
            prop_assert!((0.0..=100.0).contains(&v));
        }
        prop_assert!(e.salary >= 3_000 && e.salary <= 7_000);
        prop_assert_eq!(e.salary % 100, 0);
        prop_assert!(e.is_active());
        prop_assert!(e.project_assignments.is_empty());
        prop_assert_eq!(e.productivity, 1.0);
    }

    /// Founder skills sit around the fixed base before modifiers
    #[test]
    fn prop_founder_strong(seed in any::<u64>()) {
        let mut rng = StdRng::seed_from_u64(seed);
        let founder = EmployeeGenerator::new().generate_founder(&mut rng, 1);
        for v in founder.skills.values() {
            // 80 +/- 15, then at most -10 or +20 from the personality
            prop_assert!(v >= 55.0);
        }
        prop_assert_eq!(founder.salary, 0);
    }

    /// Complexity, value and deadline follow the kind
    #[test]
    fn prop_project_shape(seed in any::<u64>(), kind in kind_strategy(), month in 1..200u32) {
        let mut rng = StdRng::seed_from_u64(seed);
        let p = ProjectGenerator::new().generate(&mut rng, kind, month, None);

        prop_assert!((1..=10).contains(&p.complexity));
        prop_assert!(p.estimated_months >= 1);
        prop_assert!(p.value >= 0);
        prop_assert_eq!(p.status, ProjectStatus::NotStarted);
        prop_assert_eq!(p.start_month, month);
        match kind {
            ProjectKind::ClientWork => {
                prop_assert_eq!(p.deadline, Some(month + months_to_complete(p.complexity) + 2));
            }
            _ => prop_assert!(p.deadline.is_none()),
        }
    }
}
