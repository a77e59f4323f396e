//! 面積計算（教學準則）

use rust_decimal::Decimal;
use ssf_core::{DomainConstants, ProjectParameters};

use crate::clamp_score;

/// 面積計算結果
#[derive(Debug, Clone, PartialEq)]
pub struct AreaBreakdown {
    /// 教室總面積（m²）
    pub classroom_area_m2: Decimal,
    /// 固定面積：運動場 + 圖書館/行政（m²）
    pub fixed_area_m2: Decimal,
    /// 已用面積（m²）
    pub used_area_m2: Decimal,
    /// 流通/擴建餘地（m²）
    pub circulation_area_m2: Decimal,
    /// 教學可行
    pub viable: bool,
    /// 教學評分，已夾取到 [0, 1]
    pub score: Decimal,
}

/// 面積計算器
pub struct AreaCalculator;

impl AreaCalculator {
    /// 推導各項面積與教學可行性
    pub fn calculate(params: &ProjectParameters, consts: &DomainConstants) -> AreaBreakdown {
        let classroom_area = Decimal::from(params.classroom_count) * consts.area_per_classroom_m2;
        let fixed_area = params.sports_court_area_m2 + consts.fixed_facility_area_m2;
        let used_area = classroom_area + params.maker_garden_area_m2 + fixed_area;

        // 已用面積按流通係數放大後，剩餘的才是機動空間
        let circulation_area =
            consts.total_lot_area_m2 - used_area * consts.circulation_factor;

        let viable = circulation_area >= consts.min_circulation_area_m2;
        // 評分分母即可行性門檻：貼線專案得滿分 1.0
        let score = clamp_score(circulation_area / consts.min_circulation_area_m2);

        AreaBreakdown {
            classroom_area_m2: classroom_area,
            fixed_area_m2: fixed_area,
            used_area_m2: used_area,
            circulation_area_m2: circulation_area,
            viable,
            score,
        }
    }
}
