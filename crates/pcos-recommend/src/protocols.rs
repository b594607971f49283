//! 表型协议知识库
//!
//! 五种表型各对应一套固定的临床协议规则，按稳定标识符检索。
//! 规则内容供提示词构建和演示报告使用。

use pcos_core::{PcosError, Result};
use serde::Serialize;

/// 补充剂规则
#[derive(Debug, Clone, Serialize)]
pub struct SupplementRules {
    pub core_stack: &'static [&'static str],
    pub specific_benefit: &'static str,
}

/// 单个表型的协议规则
#[derive(Debug, Clone, Serialize)]
pub struct ProtocolRule {
    /// 稳定标识符，与 `Phenotype::identifier` 对应
    pub phenotype_id: &'static str,
    pub name: &'static str,
    pub clinical_goal: &'static str,
    pub dietary_focus: &'static str,
    pub lifestyle_avoids: &'static [&'static str],
    pub supplements: SupplementRules,
}

/// 全部协议规则
pub fn protocol_rules() -> &'static [ProtocolRule] {
    &RULES
}

/// 按表型标识符检索协议规则
pub fn find_rule(phenotype_id: &str) -> Result<&'static ProtocolRule> {
    RULES
        .iter()
        .find(|rule| rule.phenotype_id == phenotype_id)
        .ok_or_else(|| {
            PcosError::NotFound(format!("Unknown phenotype id: {}", phenotype_id))
        })
}

static RULES: [ProtocolRule; 5] = [
    ProtocolRule {
        phenotype_id: "insulin_resistant",
        name: "Insulin-Resistant PCOS",
        clinical_goal: "Restore insulin sensitivity and stabilize blood sugar",
        dietary_focus: "Low-GI, high-fiber meals with protein at every meal",
        lifestyle_avoids: &["sugary drinks", "late-night snacking", "prolonged sitting"],
        supplements: SupplementRules {
            core_stack: &["Myo-Inositol", "Magnesium", "Chromium"],
            specific_benefit: "Improves insulin signalling and ovulatory regularity",
        },
    },
    ProtocolRule {
        phenotype_id: "inflammatory",
        name: "Inflammatory PCOS",
        clinical_goal: "Lower chronic inflammation and CRP",
        dietary_focus: "Anti-inflammatory whole foods, gluten and dairy eliminated",
        lifestyle_avoids: &["processed seed oils", "alcohol", "sleep deprivation"],
        supplements: SupplementRules {
            core_stack: &["Omega-3 Fish Oil", "Curcumin", "Zinc"],
            specific_benefit: "Reduces CRP and supports gut barrier integrity",
        },
    },
    ProtocolRule {
        phenotype_id: "hyperandrogenic",
        name: "Hyperandrogenic PCOS",
        clinical_goal: "Reduce androgen excess and its skin and hair effects",
        dietary_focus: "Balanced plate, spearmint tea daily, low added sugar",
        lifestyle_avoids: &["chronic stress", "overtraining", "skipped meals"],
        supplements: SupplementRules {
            core_stack: &["Spearmint Tea", "Zinc", "Saw Palmetto"],
            specific_benefit: "Lowers free androgens and supports stress resilience",
        },
    },
    ProtocolRule {
        phenotype_id: "post_pill",
        name: "Post-Pill / Mild PCOS",
        clinical_goal: "Replete nutrients depleted by oral contraceptives",
        dietary_focus: "Nutrient-dense whole foods rich in B vitamins",
        lifestyle_avoids: &["restrictive dieting", "excessive caffeine"],
        supplements: SupplementRules {
            core_stack: &["Magnesium", "Zinc", "Vitamin B6"],
            specific_benefit: "Restores micronutrient status and natural cycling",
        },
    },
    ProtocolRule {
        phenotype_id: "adrenal",
        name: "Adrenal/Unspecified PCOS",
        clinical_goal: "Regulate cortisol rhythm and improve sleep quality",
        dietary_focus: "Regular meals with gentle evening carbohydrates",
        lifestyle_avoids: &["stimulants after noon", "late-night intense exercise", "screens before bed"],
        supplements: SupplementRules {
            core_stack: &["Ashwagandha", "Magnesium Glycinate", "Vitamin C"],
            specific_benefit: "Supports the HPA axis and a healthy cortisol rhythm",
        },
    },
];
