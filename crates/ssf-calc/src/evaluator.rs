//! 可行性評估主引擎

use rust_decimal::Decimal;
use ssf_core::{DomainConstants, FeasibilityReport, ProjectParameters, Result};

use crate::area::AreaCalculator;
use crate::energy::EnergyCalculator;
use crate::finance::FinanceCalculator;
use crate::structure::StructureCalculator;

/// 可行性評估引擎
///
/// 純同步計算：同一參數組必然產生逐位相同的報告，無共享狀態，
/// 可自多個呼叫端並行呼叫而無須協調。
pub struct FeasibilityEngine {
    /// 領域常數
    constants: DomainConstants,
}

impl Default for FeasibilityEngine {
    fn default() -> Self {
        Self::new(DomainConstants::default())
    }
}

impl FeasibilityEngine {
    /// 創建新的評估引擎
    pub fn new(constants: DomainConstants) -> Self {
        Self { constants }
    }

    /// 主評估入口
    ///
    /// 先驗證參數定義域（fail fast，不產生部分報告），再依序推導
    /// 面積 → 能源 → 結構 → 財務，最後彙總核准判定。
    pub fn evaluate(&self, params: &ProjectParameters) -> Result<FeasibilityReport> {
        tracing::info!(
            "開始可行性評估：{} 間教室，工期 {} 個月，初始預算 {}",
            params.classroom_count,
            params.construction_months,
            params.initial_budget
        );

        // Step 0: 邊界驗證
        params.validate()?;

        // Step 1: 面積推導（教學準則）
        tracing::debug!("Step 1: 面積推導");
        let area = AreaCalculator::calculate(params, &self.constants);
        tracing::debug!(
            "已用面積 {} m²，流通面積 {} m²",
            area.used_area_m2,
            area.circulation_area_m2
        );

        // Step 2: 太陽能規模（電力準則）
        tracing::debug!("Step 2: 太陽能規模");
        let energy = EnergyCalculator::calculate(area.used_area_m2, params, &self.constants)?;

        // Step 3: 結構用量（只貢獻費用）
        tracing::debug!("Step 3: 結構用量");
        let structure = StructureCalculator::calculate(area.used_area_m2, &self.constants);
        tracing::debug!("土建費用 {}", structure.civil_cost);

        // Step 4: 財務彙總（預算準則）
        tracing::debug!("Step 4: 財務彙總");
        let finance = FinanceCalculator::calculate(
            structure.civil_cost,
            energy.solar_cost,
            params,
            &self.constants,
        )?;
        tracing::debug!(
            "總費用 {}，每月撥款 {}",
            finance.total_cost,
            finance.monthly_disbursement
        );

        // Step 5: 彙總核准判定
        // 成本閘門與財務可行性目前恆等，仍保留顯式判斷作為決定性關卡
        let overall_approved = area.viable
            && energy.viable
            && finance.viable
            && finance.total_cost <= self.constants.max_total_budget;

        // 兩級指標：核准 1.0，否則 0.3（刻意不做三項評分的連續混合）
        let overall_score = if overall_approved {
            Decimal::ONE
        } else {
            Decimal::new(3, 1)
        };

        tracing::info!("評估完成：核准 = {}", overall_approved);

        Ok(FeasibilityReport {
            classroom_area_m2: area.classroom_area_m2,
            fixed_area_m2: area.fixed_area_m2,
            used_area_m2: area.used_area_m2,
            circulation_area_m2: area.circulation_area_m2,
            annual_consumption_kwh: energy.annual_consumption_kwh,
            required_power_kwp: energy.required_power_kwp,
            panel_area_m2: energy.panel_area_m2,
            solar_cost: energy.solar_cost,
            concrete_m3: structure.concrete_m3,
            steel_kg: structure.steel_kg,
            civil_cost: structure.civil_cost,
            total_cost: finance.total_cost,
            monthly_disbursement: finance.monthly_disbursement,
            monthly_balance: finance.monthly_balance,
            pedagogy_score: area.score,
            electrical_score: energy.score,
            financial_score: finance.score,
            overall_score,
            pedagogy_viable: area.viable,
            electrical_viable: energy.viable,
            financial_viable: finance.viable,
            overall_approved,
        })
    }

    /// 獲取領域常數引用
    pub fn constants(&self) -> &DomainConstants {
        &self.constants
    }
}
