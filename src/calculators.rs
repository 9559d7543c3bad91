// =============================================================================
// Investment Calculators — compound, simple interest, savings target
// =============================================================================
//
// Rates are annual percentages.  Compounding is monthly:
//
//   monthly_rate = rate / 100 / 12
//   months       = years * 12
//   compound     : final = principal * (1 + monthly_rate)^months
//   simple       : final = principal + principal * rate / 100 * years
//   target       : required_principal = target / (1 + monthly_rate)^months
//                  monthly_investment = (target - required_principal)
//                                       / (((1 + monthly_rate)^months - 1) / monthly_rate)
// =============================================================================

use anyhow::{ensure, Result};
use serde::Serialize;

/// Outcome of a growth calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GrowthResult {
    pub final_amount: f64,
    pub profit: f64,
}

/// Outcome of a savings-target calculation.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TargetPlan {
    /// Lump sum that reaches the target on its own.
    pub required_principal: f64,
    pub monthly_investment: f64,
}

/// Monthly-compounded growth of `principal`.
pub fn compound(principal: f64, annual_rate_pct: f64, years: f64) -> Result<GrowthResult> {
    validate("principal", principal, annual_rate_pct, years)?;

    let factor = growth_factor(annual_rate_pct, years);
    let final_amount = principal * factor;

    Ok(GrowthResult {
        final_amount,
        profit: final_amount - principal,
    })
}

/// Simple-interest growth of `principal`.
pub fn simple(principal: f64, annual_rate_pct: f64, years: f64) -> Result<GrowthResult> {
    validate("principal", principal, annual_rate_pct, years)?;

    let interest = principal * (annual_rate_pct / 100.0) * years;

    Ok(GrowthResult {
        final_amount: principal + interest,
        profit: interest,
    })
}

/// Lump sum or monthly contribution needed to reach `target_amount`.
///
/// With a zero rate no growth happens, so the lump sum equals the target and
/// the monthly figure is zero.
pub fn target(target_amount: f64, annual_rate_pct: f64, years: f64) -> Result<TargetPlan> {
    validate("target amount", target_amount, annual_rate_pct, years)?;

    let factor = growth_factor(annual_rate_pct, years);
    let required_principal = target_amount / factor;

    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    let monthly_investment = if monthly_rate == 0.0 {
        0.0
    } else {
        (target_amount - required_principal) / ((factor - 1.0) / monthly_rate)
    };

    Ok(TargetPlan {
        required_principal,
        monthly_investment,
    })
}

fn growth_factor(annual_rate_pct: f64, years: f64) -> f64 {
    let monthly_rate = annual_rate_pct / 100.0 / 12.0;
    (1.0 + monthly_rate).powf(years * 12.0)
}

fn validate(amount_name: &str, amount: f64, annual_rate_pct: f64, years: f64) -> Result<()> {
    ensure!(
        amount.is_finite() && amount >= 0.0,
        "{amount_name} must be a non-negative number, got {amount}"
    );
    ensure!(
        annual_rate_pct.is_finite() && annual_rate_pct >= 0.0,
        "rate must be a non-negative number, got {annual_rate_pct}"
    );
    ensure!(years.is_finite() && years >= 1.0, "years must be at least 1, got {years}");
    Ok(())
}
