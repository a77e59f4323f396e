//! 結構用量計算
//!
//! 結構準則只貢獻費用，沒有獨立的可行性判定。

use rust_decimal::Decimal;
use ssf_core::DomainConstants;

/// 結構用量計算結果
#[derive(Debug, Clone, PartialEq)]
pub struct StructuralQuantities {
    /// 鋼筋混凝土用量（m³）
    pub concrete_m3: Decimal,
    /// 鋼材用量（kg）
    pub steel_kg: Decimal,
    /// 土建結構費用（含基礎工程）
    pub civil_cost: Decimal,
}

/// 結構用量計算器
pub struct StructureCalculator;

impl StructureCalculator {
    /// 依已用面積推導結構用量與土建費用
    pub fn calculate(used_area_m2: Decimal, consts: &DomainConstants) -> StructuralQuantities {
        let concrete = used_area_m2 * consts.concrete_rate_m3_per_m2;
        let steel = used_area_m2 * consts.steel_rate_kg_per_m2;
        let civil_cost = concrete * consts.concrete_cost_per_m3
            + steel * consts.steel_cost_per_kg
            + consts.foundation_allowance;

        StructuralQuantities {
            concrete_m3: concrete,
            steel_kg: steel,
            civil_cost,
        }
    }
}
