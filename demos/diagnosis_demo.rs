//! 诊断引擎演示程序
//!
//! 展示排除门控、Rotterdam投票、表型判定和演示模式下的推荐生成

use pcos_core::{Evaluation, LabPanelInput};
use pcos_engine::evaluate;
use pcos_recommend::{render_markdown, CannedGenerator, NarrativeGenerator};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 初始化日志
    tracing_subscriber::fmt::init();

    println!("🩺 PCOS 诊断引擎演示\n");

    // 1. 排除门控：TSH超标，诊断搁置
    let panel = sample_panel(8.5, 15.0);
    println!("📋 场景1: TSH = 8.5 (排除门控)");
    print_evaluation(&evaluate(&panel));

    // 2. 阳性诊断：稀发排卵 + 高雄激素
    let panel = sample_panel(3.0, 10.0);
    println!("📋 场景2: TSH/泌乳素正常");
    let evaluation = evaluate(&panel);
    print_evaluation(&evaluation);

    // 3. 演示模式推荐
    if let Some(report) = evaluation.report() {
        if let Some(phenotype_id) = report.phenotype.identifier() {
            println!("💡 为表型 {} 生成演示推荐...", report.phenotype);
            let plan = CannedGenerator
                .generate_plan(phenotype_id, "Pune, Maharashtra", "Prachi")
                .await?;
            println!("\n--- Markdown ---\n{}", plan);
            println!("--- HTML ---\n{}", render_markdown(&plan));
        }
    }

    // 4. 全默认值：阴性
    println!("📋 场景3: 全部字段默认");
    print_evaluation(&evaluate(&LabPanelInput::default().resolve()));

    Ok(())
}

fn sample_panel(tsh: f64, prolactin: f64) -> pcos_core::LabPanel {
    LabPanelInput {
        cycle_length_days: Some(50.0),
        cycles_per_year: Some(5),
        total_testosterone: Some(30.0),
        shbg: Some(45.0),
        fasting_insulin: Some(8.0),
        fasting_glucose: Some(85.0),
        tsh: Some(tsh),
        prolactin: Some(prolactin),
        crp: Some(1.2),
        follicle_count_left: Some(18),
        follicle_count_right: Some(15),
        ovarian_volume_left: Some(8.5),
        ovarian_volume_right: Some(7.0),
    }
    .resolve()
}

fn print_evaluation(evaluation: &Evaluation) {
    match evaluation {
        Evaluation::ReviewNeeded(notice) => {
            println!("   状态: {}", notice.status);
            for alert in &notice.alerts {
                println!("   ⚠️  {}", alert);
            }
        }
        Evaluation::Report(report) => {
            println!("   诊断: {}", if report.diagnosis { "阳性" } else { "阴性" });
            for criterion in &report.criteria_met {
                println!("   ✅ {}", criterion);
            }
            println!("   表型: {}", report.phenotype);
            println!("   协议: {}", report.lifestyle_protocol);
        }
    }
    println!();
}
