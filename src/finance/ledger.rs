//! Payroll, tools, rent and cashflow

use crate::company::{Company, FinancialSnapshot};
use crate::config::GameConfig;

/// Office rent for a headcount: base up to one person, max from the cap,
/// linear in between (floored)
pub fn rent_for_headcount(headcount: usize, config: &GameConfig) -> i64 {
    let cap = config.rent_cap_headcount.max(2);
    if headcount <= 1 {
        return config.base_rent;
    }
    if headcount >= cap {
        return config.max_rent;
    }
    let span = config.max_rent - config.base_rent;
    config.base_rent + span * (headcount as i64 - 1) / (cap as i64 - 1)
}

/// Recurring monthly costs of the current active staff
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Expenses {
    pub payroll: i64,
    pub tools: i64,
    pub rent: i64,
}

impl Expenses {
    #[inline]
    pub fn total(&self) -> i64 {
        self.payroll + self.tools + self.rent
    }
}

pub fn monthly_expenses(company: &Company, config: &GameConfig) -> Expenses {
    let (payroll, headcount) = company
        .active_employees()
        .fold((0i64, 0usize), |(sum, n), e| (sum + e.salary, n + 1));
    Expenses {
        payroll,
        tools: headcount as i64 * config.tool_cost_per_employee,
        rent: rent_for_headcount(headcount, config),
    }
}

/// Books for the current month given this month's revenue. Does not touch
/// the company; the caller applies `net_cashflow`.
pub fn calculate_monthly_finances(
    company: &Company,
    revenue: i64,
    config: &GameConfig,
) -> FinancialSnapshot {
    let expenses = monthly_expenses(company, config);
    let net_cashflow = revenue - expenses.total();
    FinancialSnapshot {
        month: company.current_month,
        starting_cash: company.cash,
        revenue,
        payroll: expenses.payroll,
        tools: expenses.tools,
        rent: expenses.rent,
        other_expenses: 0,
        net_cashflow,
        ending_cash: company.cash + net_cashflow,
    }
}

/// Monthly spend with no revenue
#[inline]
pub fn burn_rate(company: &Company, config: &GameConfig) -> i64 {
    monthly_expenses(company, config).total()
}

/// Whole months the cash lasts at the current burn; `None` when nothing burns
pub fn runway(company: &Company, config: &GameConfig) -> Option<i64> {
    let burn = burn_rate(company, config);
    if burn <= 0 {
        None
    } else {
        Some(company.cash.div_euclid(burn))
    }
}

#[inline]
pub fn can_afford(company: &Company, amount: i64) -> bool {
    company.cash >= amount
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::company::test_support::{company_with, employee, founder};

    #[test]
    fn test_rent_interpolation() {
        let config = GameConfig::default();
        assert_eq!(rent_for_headcount(0, &config), 2_000);
        assert_eq!(rent_for_headcount(1, &config), 2_000);
        assert_eq!(rent_for_headcount(50, &config), 20_000);
        assert_eq!(rent_for_headcount(80, &config), 20_000);

        let mid = rent_for_headcount(25, &config);
        assert!(mid > 2_000 && mid < 20_000);
        // 2000 + 18000 * 24 / 49
        assert_eq!(mid, 10_816);
        assert_eq!(rent_for_headcount(2, &config), 2_367);
    }

    #[test]
    fn test_founder_only_books() {
        let company = company_with(vec![founder()], vec![]);
        let books = calculate_monthly_finances(&company, 0, &GameConfig::default());
        assert_eq!(books.payroll, 0);
        assert_eq!(books.tools, 500);
        assert_eq!(books.rent, 2_000);
        assert_eq!(books.net_cashflow, -2_500);
        assert_eq!(books.ending_cash, 150_000 - 2_500);
        assert_eq!(books.other_expenses, 0);
        assert_eq!(books.expenses(), 2_500);
    }

    #[test]
    fn test_departed_staff_cost_nothing() {
        let mut gone = employee("e2", 6000);
        gone.quit_month = Some(1);
        let company = company_with(vec![founder(), employee("e1", 4000), gone], vec![]);
        let expenses = monthly_expenses(&company, &GameConfig::default());
        assert_eq!(expenses.payroll, 4_000);
        assert_eq!(expenses.tools, 1_000);
    }

    #[test]
    fn test_runway() {
        let config = GameConfig::default();
        let mut company = company_with(vec![founder(), employee("e1", 4000)], vec![]);
        // burn: 4000 + 1000 + 2367
        assert_eq!(burn_rate(&company, &config), 7_367);
        assert_eq!(runway(&company, &config), Some(150_000 / 7_367));

        company.employees.clear();
        let free = GameConfig {
            base_rent: 0,
            ..GameConfig::default()
        };
        assert_eq!(runway(&company, &free), None);
    }

    #[test]
    fn test_can_afford() {
        let company = company_with(vec![], vec![]);
        assert!(can_afford(&company, 150_000));
        assert!(!can_afford(&company, 150_001));
    }
}
