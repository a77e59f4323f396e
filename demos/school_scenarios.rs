//! 學校方案評估示例

use rust_decimal::Decimal;
use ssf::{Band, FeasibilityEngine, ProjectParameters, ScorePolarity, SpaceGrade};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    println!("=== 可持續學校方案評估示例 ===\n");

    let engine = FeasibilityEngine::default();

    // 方案一：預設參數組
    let baseline = ProjectParameters::default();
    println!("方案一：預設參數（12 間教室，22% 板效率，預算 700 萬）");
    print_verdict(&engine, &baseline)?;

    // 方案二：擴大規模並壓低板效率
    let ambitious = ProjectParameters::default()
        .with_classroom_count(28)
        .with_maker_garden_area_m2(Decimal::from(1200))
        .with_panel_efficiency_pct(Decimal::from(18));
    println!("\n方案二：28 間教室 + 1200 m² 創客空間 + 18% 板效率");
    print_verdict(&engine, &ambitious)?;

    Ok(())
}

fn print_verdict(
    engine: &FeasibilityEngine,
    params: &ProjectParameters,
) -> Result<(), Box<dyn std::error::Error>> {
    let report = engine.evaluate(params)?;

    println!(
        "  已用面積 {} m²，流通 {} m²（{}）",
        report.used_area_m2,
        report.circulation_display_m2(),
        SpaceGrade::classify(report.circulation_area_m2).label()
    );
    println!(
        "  所需功率 {} kWp，總費用 {}",
        report.required_power_kwp.round_dp(1),
        report.total_cost.round_dp(0)
    );
    println!(
        "  教學 {} / 太陽能 {} / 預算 {}",
        Band::classify(report.pedagogy_score, ScorePolarity::Direct).label(),
        Band::classify(report.electrical_score, ScorePolarity::Inverted).label(),
        Band::classify(report.financial_score, ScorePolarity::Inverted).label()
    );
    println!(
        "  → {}",
        if report.overall_approved {
            "市政核准"
        } else {
            "駁回，須調整參數"
        }
    );

    Ok(())
}
