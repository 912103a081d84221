//! Visit-cost comparator.
//!
//! One input (visits per month, bounded to `MIN_VISITS..=MAX_VISITS`) and
//! three derived outputs. The outputs are recomputed on every read.

use serde::{Deserialize, Serialize};

use crate::error::WidgetError;

pub const MIN_VISITS: u8 = 1;
pub const MAX_VISITS: u8 = 12;
pub const DEFAULT_VISITS: u8 = 3;

/// Default direct cost of a traditional clinic visit, in USD.
pub const DEFAULT_BASELINE_UNIT_COST: u32 = 8;
/// Default cost of one NaijaCare consult, in USD.
pub const DEFAULT_SERVICE_UNIT_COST: u32 = 2;

/// Per-visit prices the comparator multiplies by.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct CostRates {
    pub baseline_unit_cost: u32,
    pub service_unit_cost: u32,
}

impl Default for CostRates {
    fn default() -> Self {
        Self { baseline_unit_cost: DEFAULT_BASELINE_UNIT_COST, service_unit_cost: DEFAULT_SERVICE_UNIT_COST }
    }
}

/// Monthly totals derived from a visit count.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
pub struct CostBreakdown {
    pub baseline_cost: u32,
    pub service_cost: u32,
    /// Never negative, even if the rates are inverted.
    pub savings: u32,
}

/// Compute the breakdown for `visits` at `rates`.
#[must_use]
pub fn derive_costs(visits: u8, rates: CostRates) -> CostBreakdown {
    let visits = u32::from(visits);
    let baseline_cost = visits.saturating_mul(rates.baseline_unit_cost);
    let service_cost = visits.saturating_mul(rates.service_unit_cost);
    CostBreakdown { baseline_cost, service_cost, savings: baseline_cost.saturating_sub(service_cost) }
}

/// Comparator state: fixed rates plus the current slider position.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CostComparator {
    rates: CostRates,
    visits_per_month: u8,
}

impl Default for CostComparator {
    fn default() -> Self {
        Self::new(CostRates::default())
    }
}

impl CostComparator {
    #[must_use]
    pub fn new(rates: CostRates) -> Self {
        Self { rates, visits_per_month: DEFAULT_VISITS }
    }

    #[must_use]
    pub fn rates(&self) -> CostRates {
        self.rates
    }

    #[must_use]
    pub fn visits_per_month(&self) -> u8 {
        self.visits_per_month
    }

    /// Replace the visit count.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::VisitsOutOfRange`] and leaves the state
    /// untouched when `visits` is outside `MIN_VISITS..=MAX_VISITS`.
    pub fn set_visits(&mut self, visits: i64) -> Result<(), WidgetError> {
        match u8::try_from(visits) {
            Ok(v) if (MIN_VISITS..=MAX_VISITS).contains(&v) => {
                self.visits_per_month = v;
                Ok(())
            }
            _ => Err(WidgetError::VisitsOutOfRange { value: visits, min: MIN_VISITS, max: MAX_VISITS }),
        }
    }

    /// Parse a raw slider value and apply it.
    ///
    /// # Errors
    ///
    /// Returns [`WidgetError::InvalidVisits`] for anything that is not a
    /// whole number, otherwise whatever [`Self::set_visits`] returns.
    pub fn set_visits_from_input(&mut self, raw: &str) -> Result<(), WidgetError> {
        let visits = raw.trim().parse::<i64>().map_err(|_| WidgetError::InvalidVisits(raw.to_owned()))?;
        self.set_visits(visits)
    }

    #[must_use]
    pub fn derive(&self) -> CostBreakdown {
        derive_costs(self.visits_per_month, self.rates)
    }
}

#[cfg(test)]
#[path = "cost_test.rs"]
mod tests;
