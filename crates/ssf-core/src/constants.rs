//! 領域常數
//!
//! 原始評估公式裡散落的魔術數字統一收攏於此，避免子計算之間
//! 各自複製數值造成靜默不一致。所有欄位都標注單位。

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 全程固定的領域常數
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct DomainConstants {
    /// 地塊總面積（m²）
    pub total_lot_area_m2: Decimal,

    /// 每間教室面積（m²）
    pub area_per_classroom_m2: Decimal,

    /// 固定設施面積：圖書館 + 行政（m²）
    pub fixed_facility_area_m2: Decimal,

    /// 流通/擴建係數（已用面積的倍率）
    pub circulation_factor: Decimal,

    /// 教學可行性要求的最小流通面積（m²）
    pub min_circulation_area_m2: Decimal,

    /// 年耗電強度（kWh/m²·年，節能校舍）
    pub annual_energy_intensity_kwh_m2: Decimal,

    /// 平均日照（kWh/m²·日）
    pub solar_irradiation_kwh_m2_day: Decimal,

    /// 系統損耗係數
    pub system_loss_factor: Decimal,

    /// 屋頂可安裝功率上限（kWp）
    pub max_installable_power_kwp: Decimal,

    /// 太陽能板佔用面積（m²/kWp）
    pub panel_area_m2_per_kwp: Decimal,

    /// 混凝土用量率（m³/m²）
    pub concrete_rate_m3_per_m2: Decimal,

    /// 混凝土單價（每 m³）
    pub concrete_cost_per_m3: Decimal,

    /// 鋼材用量率（kg/m²）
    pub steel_rate_kg_per_m2: Decimal,

    /// 鋼材單價（每 kg）
    pub steel_cost_per_kg: Decimal,

    /// 基礎工程固定費用
    pub foundation_allowance: Decimal,

    /// 專案固定基底費用
    pub base_cost: Decimal,

    /// 固定應急準備金
    pub contingency: Decimal,

    /// 總預算上限
    pub max_total_budget: Decimal,
}

impl Default for DomainConstants {
    fn default() -> Self {
        Self {
            total_lot_area_m2: Decimal::from(8000),
            area_per_classroom_m2: Decimal::from(45),
            fixed_facility_area_m2: Decimal::from(700), // 圖書館 300 + 行政 400
            circulation_factor: Decimal::new(135, 2),   // 1.35
            min_circulation_area_m2: Decimal::from(800),
            annual_energy_intensity_kwh_m2: Decimal::from(18),
            solar_irradiation_kwh_m2_day: Decimal::new(52, 1), // 5.2
            system_loss_factor: Decimal::new(85, 2),           // 0.85
            max_installable_power_kwp: Decimal::from(120),
            panel_area_m2_per_kwp: Decimal::new(55, 1), // 5.5
            concrete_rate_m3_per_m2: Decimal::new(28, 2), // 0.28
            concrete_cost_per_m3: Decimal::from(480),
            steel_rate_kg_per_m2: Decimal::from(85),
            steel_cost_per_kg: Decimal::new(68, 1), // 6.8
            foundation_allowance: Decimal::from(1_200_000),
            base_cost: Decimal::from(4_450_000),
            contingency: Decimal::from(200_000),
            max_total_budget: Decimal::from(8_000_000),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_constants() {
        let consts = DomainConstants::default();

        assert_eq!(consts.total_lot_area_m2, Decimal::from(8000));
        assert_eq!(consts.circulation_factor, Decimal::new(135, 2));
        assert_eq!(consts.solar_irradiation_kwh_m2_day, Decimal::new(52, 1));
        assert_eq!(consts.max_total_budget, Decimal::from(8_000_000));
    }

    #[test]
    fn test_constants_serde_roundtrip() {
        let consts = DomainConstants::default();
        let json = serde_json::to_string(&consts).unwrap();
        let back: DomainConstants = serde_json::from_str(&json).unwrap();

        assert_eq!(consts, back);
    }
}
