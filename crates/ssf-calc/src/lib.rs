//! # SSF Calculation Engine
//!
//! 可行性評分引擎：參數組進、報告出的純函數計算

pub mod area;
pub mod energy;
pub mod evaluator;
pub mod finance;
pub mod structure;

// Re-export 主要類型
pub use area::{AreaBreakdown, AreaCalculator};
pub use energy::{EnergyCalculator, EnergySizing};
pub use evaluator::FeasibilityEngine;
pub use finance::{FinanceCalculator, FinancialPlan};
pub use structure::{StructuralQuantities, StructureCalculator};

use rust_decimal::Decimal;

/// 評分夾取到 [0, 1]
pub(crate) fn clamp_score(value: Decimal) -> Decimal {
    value.clamp(Decimal::ZERO, Decimal::ONE)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_score() {
        assert_eq!(clamp_score(Decimal::new(15, 1)), Decimal::ONE);
        assert_eq!(clamp_score(Decimal::new(5, 1)), Decimal::new(5, 1));
        assert_eq!(clamp_score(Decimal::from(-3)), Decimal::ZERO);
    }
}
