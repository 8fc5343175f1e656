//! Payment fee breakdown.

use serde::Serialize;

/// Processing fee, in percent of the registration fee.
const PROCESSING_FEE_PERCENT: u64 = 2;
/// GST, in percent of registration fee plus processing fee.
const GST_PERCENT: u64 = 18;

/// Deterministic split of the amount charged for a registration.
///
/// All amounts are whole currency units; rounding is half-up, done in integer
/// arithmetic so that no intermediate value depends on float representation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct FeeBreakdown {
    pub registration_fee: u64,
    pub processing_fee: u64,
    pub gst: u64,
    pub total: u64,
}

impl FeeBreakdown {
    pub fn compute(registration_fee: u64) -> Self {
        let processing_fee = percent_of(registration_fee, PROCESSING_FEE_PERCENT);
        let taxable = registration_fee.saturating_add(processing_fee);
        let gst = percent_of(taxable, GST_PERCENT);
        let total = percent_of(taxable, 100 + GST_PERCENT);

        Self {
            registration_fee,
            processing_fee,
            gst,
            total,
        }
    }
}

/// `round(amount * percent / 100)` with halves rounded up, saturating at `u64::MAX`.
fn percent_of(amount: u64, percent: u64) -> u64 {
    let scaled = (u128::from(amount) * u128::from(percent) + 50) / 100;
    u64::try_from(scaled).unwrap_or(u64::MAX)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn breakdown_for_jee_main_fee() {
        let fees = FeeBreakdown::compute(850);
        assert_eq!(fees.processing_fee, 17);
        assert_eq!(fees.gst, 156);
        assert_eq!(fees.total, 1023);
    }

    #[test]
    fn breakdown_for_gate_fee() {
        let fees = FeeBreakdown::compute(1800);
        assert_eq!(fees.processing_fee, 36);
        assert_eq!(fees.gst, 330);
        assert_eq!(fees.total, 2166);
    }

    #[test]
    fn total_is_taxable_amount_plus_gst() {
        for fee in [0, 1, 25, 200, 850, 1600, 1800, 2300, 9999] {
            let fees = FeeBreakdown::compute(fee);
            assert_eq!(fees.total, fees.registration_fee + fees.processing_fee + fees.gst);
        }
    }

    #[test]
    fn exact_halves_round_up() {
        // 25 * 2% = 0.5
        assert_eq!(FeeBreakdown::compute(25).processing_fee, 1);
        // 75 * 2% = 1.5
        assert_eq!(FeeBreakdown::compute(75).processing_fee, 2);
        // 24 * 2% = 0.48
        assert_eq!(FeeBreakdown::compute(24).processing_fee, 0);
    }

    #[test]
    fn zero_fee_costs_nothing() {
        let fees = FeeBreakdown::compute(0);
        assert_eq!(fees.total, 0);
        assert_eq!(fees.gst, 0);
    }

    #[test]
    fn huge_fee_saturates_instead_of_overflowing() {
        let fees = FeeBreakdown::compute(u64::MAX);
        assert_eq!(fees.registration_fee, u64::MAX);
        assert_eq!(fees.total, u64::MAX);
        assert!(fees.gst > fees.processing_fee);
    }
}
