//! 太陽能計算（電力準則）

use rust_decimal::Decimal;
use ssf_core::{DomainConstants, ProjectParameters, Result, SsfError};

use crate::clamp_score;

/// 太陽能系統計算結果
#[derive(Debug, Clone, PartialEq)]
pub struct EnergySizing {
    /// 年耗電量估計（kWh）
    pub annual_consumption_kwh: Decimal,
    /// 所需裝機功率（kWp）
    pub required_power_kwp: Decimal,
    /// 太陽能板約略佔用面積（m²）
    pub panel_area_m2: Decimal,
    /// 太陽能系統費用
    pub solar_cost: Decimal,
    /// 電力可行
    pub viable: bool,
    /// 電力評分（反向），已夾取到 [0, 1]
    pub score: Decimal,
}

/// 太陽能計算器
pub struct EnergyCalculator;

impl EnergyCalculator {
    /// 依已用面積推導太陽能系統規模
    ///
    /// 線性近似：年耗電 = 耗電強度 × 已用面積；所需功率由年日照、
    /// 板效率與系統損耗折算。效率非正時分母為零，回報
    /// [`SsfError::DegenerateComputation`] 而非產生未定義評分。
    pub fn calculate(
        used_area_m2: Decimal,
        params: &ProjectParameters,
        consts: &DomainConstants,
    ) -> Result<EnergySizing> {
        if params.panel_efficiency_pct <= Decimal::ZERO {
            return Err(SsfError::DegenerateComputation(format!(
                "太陽能板效率非正（{}%），無法推算裝機功率",
                params.panel_efficiency_pct
            )));
        }

        let annual_consumption = consts.annual_energy_intensity_kwh_m2 * used_area_m2;

        let efficiency = params.panel_efficiency_pct / Decimal::from(100);
        let annual_yield_per_kwp = Decimal::from(365)
            * consts.solar_irradiation_kwh_m2_day
            * efficiency
            * consts.system_loss_factor;
        let required_power = annual_consumption / annual_yield_per_kwp;

        let panel_area = required_power * consts.panel_area_m2_per_kwp;
        let solar_cost = required_power * params.price_per_kwp;

        let viable = required_power <= consts.max_installable_power_kwp;
        // 反向評分：所需功率越小越好；功率恰為 0 屬病態情況，依約定給 0 分
        let score = if required_power > Decimal::ZERO {
            clamp_score(consts.max_installable_power_kwp / required_power)
        } else {
            Decimal::ZERO
        };

        tracing::debug!(
            "太陽能規模: 耗電 {} kWh/年，功率 {} kWp，費用 {}",
            annual_consumption,
            required_power,
            solar_cost
        );

        Ok(EnergySizing {
            annual_consumption_kwh: annual_consumption,
            required_power_kwp: required_power,
            panel_area_m2: panel_area,
            solar_cost,
            viable,
            score,
        })
    }
}
