//! 可行性報告模型

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// 可行性報告（評估結果）
///
/// 純值物件：每次評估新建一份，建立後不再變動。展示層（儀表板、
/// CLI、報表產生器）只讀取此結構，絕不重算領域數值。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FeasibilityReport {
    // ---- 面積推導量 ----
    /// 教室總面積（m²）
    pub classroom_area_m2: Decimal,

    /// 固定面積：運動場 + 圖書館/行政（m²）
    pub fixed_area_m2: Decimal,

    /// 已用面積：教室 + 創客/菜園 + 固定面積（m²），無重複計算
    pub used_area_m2: Decimal,

    /// 流通/擴建餘地（m²），可為負值
    pub circulation_area_m2: Decimal,

    // ---- 能源推導量 ----
    /// 年耗電量估計（kWh）
    pub annual_consumption_kwh: Decimal,

    /// 所需裝機功率（kWp）
    pub required_power_kwp: Decimal,

    /// 太陽能板約略佔用面積（m²）
    pub panel_area_m2: Decimal,

    /// 太陽能系統費用
    pub solar_cost: Decimal,

    // ---- 結構推導量 ----
    /// 鋼筋混凝土用量（m³）
    pub concrete_m3: Decimal,

    /// 鋼材用量（kg）
    pub steel_kg: Decimal,

    /// 土建結構費用（含基礎工程）
    pub civil_cost: Decimal,

    // ---- 財務推導量 ----
    /// 專案總費用
    pub total_cost: Decimal,

    /// 每月撥款額
    pub monthly_disbursement: Decimal,

    /// 逐月餘額表，長度 = 施工月數，每項下限為零
    pub monthly_balance: Vec<Decimal>,

    // ---- 評分（皆已夾取到 [0, 1]）----
    /// 教學評分
    pub pedagogy_score: Decimal,

    /// 電力評分（反向：所需功率越小越好）
    pub electrical_score: Decimal,

    /// 財務評分（反向：費用越低越好）
    pub financial_score: Decimal,

    /// 總體評分（兩級指標：核准 1.0，否則 0.3）
    pub overall_score: Decimal,

    // ---- 可行性判定 ----
    /// 教學可行
    pub pedagogy_viable: bool,

    /// 電力可行
    pub electrical_viable: bool,

    /// 財務可行
    pub financial_viable: bool,

    /// 市政核准：三項可行且總費用不超過預算上限
    pub overall_approved: bool,
}

impl FeasibilityReport {
    /// 工期結束時的剩餘餘額
    pub fn final_balance(&self) -> Option<Decimal> {
        self.monthly_balance.last().copied()
    }

    /// 展示用流通面積（下限為零）
    pub fn circulation_display_m2(&self) -> Decimal {
        self.circulation_area_m2.max(Decimal::ZERO)
    }

    /// 檢查專案是否核准
    pub fn is_approved(&self) -> bool {
        self.overall_approved
    }
}
