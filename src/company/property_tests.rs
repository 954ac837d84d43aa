//! Property tests for the company data model
//!
//! Property: allocation cap holds after any sequence of assignment calls
//! Property: employee and project indexes of the relation always agree
//! Property: rejected calls leave the company untouched

use proptest::prelude::*;

use crate::company::assignment::{assign, clear_employee, clear_project, unassign};
use crate::company::test_support::{company_with, employee, project};
use crate::company::Company;

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

#[derive(Debug, Clone)]
enum Op {
    Assign(usize, usize, f64),
    Unassign(usize, usize),
    ClearProject(usize),
    ClearEmployee(usize),
}

fn op_strategy() -> impl Strategy<Value = Op> {
    prop_oneof![
        6 => (0..4usize, 0..3usize, 0.0..=120.0f64).prop_map(|(e, p, a)| Op::Assign(e, p, a)),
        2 => (0..4usize, 0..3usize).prop_map(|(e, p)| Op::Unassign(e, p)),
        1 => (0..3usize).prop_map(Op::ClearProject),
        1 => (0..4usize).prop_map(Op::ClearEmployee),
    ]
}

fn fresh_company() -> Company {
    company_with(
        (0..4).map(|i| employee(&format!("e{}", i), 4000)).collect(),
        (0..3).map(|i| project(&format!("p{}", i))).collect(),
    )
}

fn apply(company: &mut Company, op: &Op) -> bool {
    match op {
        Op::Assign(e, p, a) => {
            assign(company, &format!("e{}", e), &format!("p{}", p), *a).is_ok()
        }
        Op::Unassign(e, p) => unassign(company, &format!("e{}", e), &format!("p{}", p)).is_ok(),
        Op::ClearProject(p) => {
            clear_project(company, &format!("p{}", p));
            true
        }
        Op::ClearEmployee(e) => {
            clear_employee(company, &format!("e{}", e));
            true
        }
    }
}

/// Every employee-side entry has a matching project-side entry and back
fn indexes_agree(company: &Company) -> bool {
    let forward = company.employees.iter().all(|e| {
        e.project_assignments.iter().all(|a| {
            company.find_project(&a.project_id).is_some_and(|p| {
                p.assignments
                    .iter()
                    .any(|pa| pa.employee_id == e.id && pa.allocation == a.allocation)
            })
        })
    });
    let backward = company.projects.iter().all(|p| {
        p.assignments.iter().all(|pa| {
            company
                .find_employee(&pa.employee_id)
                .is_some_and(|e| e.is_assigned_to(&p.id))
        })
    });
    forward && backward
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// Summed allocation never exceeds 100 for anyone
    #[test]
    fn prop_allocation_capped(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut company = fresh_company();
        for op in &ops {
            apply(&mut company, op);
            for e in &company.employees {
                prop_assert!(e.total_allocation() <= 100.0);
            }
        }
    }

    /// Both sides of the relation stay in sync
    #[test]
    fn prop_indexes_agree(ops in prop::collection::vec(op_strategy(), 0..40)) {
        let mut company = fresh_company();
        for op in &ops {
            apply(&mut company, op);
            prop_assert!(indexes_agree(&company));
        }
    }

    /// A rejected call is a no-op
    #[test]
    fn prop_rejection_is_atomic(
        setup in prop::collection::vec(op_strategy(), 0..20),
        probe in op_strategy(),
    ) {
        let mut company = fresh_company();
        for op in &setup {
            apply(&mut company, op);
        }
        let before = company.clone();
        if !apply(&mut company, &probe) {
            prop_assert_eq!(company, before);
        }
    }
}
