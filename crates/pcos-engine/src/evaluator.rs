//! 诊断评估器
//!
//! 严格按序的评估流水线：排除门控 → 三标准 → Rotterdam投票 →
//! 表型判定。对任何合法输入组合都不会返回错误或panic。

use crate::criteria::{
    check_exclusions, check_hyperandrogenism, check_oligo_anovulation,
    check_polycystic_morphology,
};
use crate::phenotype::determine_phenotype;
use pcos_core::{Criterion, DiagnosisReport, Evaluation, LabPanel, ReviewNotice};
use tracing::info;

/// 阳性诊断所需的最少标准数（Rotterdam 2/3规则）
pub const MIN_CRITERIA_FOR_DIAGNOSIS: usize = 2;

/// 对检验面板执行完整诊断评估
///
/// 排除性警报触发时立即短路返回 `ReviewNeeded`，不评估任何标准；
/// 否则返回完整诊断报告，`criteria_met` 固定按 A → B → C 排序。
pub fn evaluate(panel: &LabPanel) -> Evaluation {
    // 1. 排除门控：混杂内分泌疾病须先排除
    let alerts = check_exclusions(panel);
    if !alerts.is_empty() {
        info!(alert_count = alerts.len(), "Diagnosis deferred: exclusion alerts fired");
        return Evaluation::ReviewNeeded(ReviewNotice::new(alerts));
    }

    // 2. 三条独立标准
    let oligo = check_oligo_anovulation(panel);
    let androgens = check_hyperandrogenism(panel);
    let morphology = check_polycystic_morphology(panel);

    // 3. Rotterdam投票，保持固定报告顺序
    let mut criteria_met = Vec::with_capacity(3);
    if oligo {
        criteria_met.push(Criterion::OligoAnovulation);
    }
    if androgens {
        criteria_met.push(Criterion::Hyperandrogenism);
    }
    if morphology {
        criteria_met.push(Criterion::PolycysticMorphology);
    }

    let diagnosis = criteria_met.len() >= MIN_CRITERIA_FOR_DIAGNOSIS;

    if !diagnosis {
        info!(criteria_count = criteria_met.len(), "Rotterdam vote negative");
        return Evaluation::Report(DiagnosisReport::negative(criteria_met));
    }

    // 4. 表型判定
    let phenotype = determine_phenotype(panel, androgens, morphology);
    info!(phenotype = %phenotype, "Rotterdam vote positive");

    Evaluation::Report(DiagnosisReport {
        criteria_met,
        diagnosis: true,
        phenotype,
        lifestyle_protocol: phenotype.lifestyle_protocol().to_string(),
    })
}
