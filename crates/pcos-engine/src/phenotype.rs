//! 表型判定引擎
//!
//! 确诊后按固定优先级判定机制学表型。分支顺序即临床优先级，
//! 先命中者生效，后续分支不再评估。

use pcos_core::{LabPanel, Phenotype};
use tracing::debug;

/// HOMA-IR阈值：胰岛素抵抗判定
pub const HOMA_IR_LIMIT: f64 = 2.0;
/// CRP阈值 (mg/L)：慢性炎症判定
pub const CRP_LIMIT: f64 = 3.0;

/// 判定表型（仅在阳性诊断后调用）
///
/// 优先级：HOMA-IR → CRP → 高雄激素 → 卵巢形态 → 默认。
/// 由于投票要求≥2条标准且前四支全不命中，默认支在阳性诊断下
/// 只能经"稀发排卵 + 卵巢形态、低雄激素、低HOMA/CRP"到达，
/// 归入肾上腺/未分类型。
pub fn determine_phenotype(
    panel: &LabPanel,
    hyperandrogenism: bool,
    morphology: bool,
) -> Phenotype {
    let homa = panel.homa_ir();
    let inflammation = panel.crp;

    debug!(
        homa_ir = homa,
        crp = inflammation,
        hyperandrogenism,
        morphology,
        "Determining phenotype"
    );

    if homa > HOMA_IR_LIMIT {
        Phenotype::InsulinResistant
    } else if inflammation > CRP_LIMIT {
        Phenotype::Inflammatory
    } else if hyperandrogenism && !(homa > HOMA_IR_LIMIT) {
        Phenotype::Hyperandrogenic
    } else if morphology && !hyperandrogenism && !(homa > HOMA_IR_LIMIT) {
        // 常见于停用避孕药后
        Phenotype::PostPill
    } else {
        Phenotype::Adrenal
    }
}
