//! Rotterdam诊断标准与排除门控
//!
//! 三条独立的二值标准加一道安全排除门。阈值为固定领域知识，
//! 不可配置。

use pcos_core::{ExclusionAlert, LabPanel};

/// 排除门控：TSH上限 (mIU/L)
pub const TSH_EXCLUSION_LIMIT: f64 = 4.5;
/// 排除门控：泌乳素上限 (ng/mL)
pub const PROLACTIN_EXCLUSION_LIMIT: f64 = 25.0;

/// 标准A：周期长度上限（天）
pub const CYCLE_LENGTH_UPPER_DAYS: f64 = 35.0;
/// 标准A：周期长度下限（天）
pub const CYCLE_LENGTH_LOWER_DAYS: f64 = 21.0;
/// 标准A：年周期次数下限
pub const CYCLES_PER_YEAR_LOWER: u32 = 8;

/// 标准B：总睾酮阈值 (ng/dL)
pub const TESTOSTERONE_LIMIT: f64 = 45.0;
/// 标准B：FAI阈值 (%)
pub const FAI_LIMIT: f64 = 5.0;

/// 标准C：单侧卵泡计数阈值（2023指南 FNPO）
pub const FOLLICLE_COUNT_LIMIT: u32 = 20;
/// 标准C：单侧卵巢体积阈值 (mL)
pub const OVARIAN_VOLUME_LIMIT_ML: f64 = 10.0;

/// 排除门控检查
///
/// 返回触发的全部警报，TSH在前。任一警报触发即应搁置诊断。
pub fn check_exclusions(panel: &LabPanel) -> Vec<ExclusionAlert> {
    let mut alerts = Vec::new();
    if panel.tsh > TSH_EXCLUSION_LIMIT {
        alerts.push(ExclusionAlert::HighTsh);
    }
    if panel.prolactin > PROLACTIN_EXCLUSION_LIMIT {
        alerts.push(ExclusionAlert::HighProlactin);
    }
    alerts
}

/// 标准A：稀发排卵/无排卵
///
/// 周期过长、过短或年周期次数不足任一即满足。缺省输入解析为
/// 28天/12次，即默认视为规律周期。
pub fn check_oligo_anovulation(panel: &LabPanel) -> bool {
    panel.cycle_length_days > CYCLE_LENGTH_UPPER_DAYS
        || panel.cycle_length_days < CYCLE_LENGTH_LOWER_DAYS
        || panel.cycles_per_year < CYCLES_PER_YEAR_LOWER
}

/// 标准B：高雄激素血症（生化）
///
/// 总睾酮 > 45 ng/dL 或 FAI > 5.0%。
pub fn check_hyperandrogenism(panel: &LabPanel) -> bool {
    panel.total_testosterone > TESTOSTERONE_LIMIT || panel.fai() > FAI_LIMIT
}

/// 标准C：多囊样卵巢形态（超声）
///
/// 按临床惯例取较差一侧卵巢：左右卵泡计数取最大值，左右卵巢
/// 体积取最大值，而非平均或求和。
pub fn check_polycystic_morphology(panel: &LabPanel) -> bool {
    let follicles = panel.follicle_count_left.max(panel.follicle_count_right);
    let volume = panel
        .ovarian_volume_left
        .max(panel.ovarian_volume_right);

    follicles >= FOLLICLE_COUNT_LIMIT || volume > OVARIAN_VOLUME_LIMIT_ML
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcos_core::LabPanelInput;

    fn panel(input: LabPanelInput) -> LabPanel {
        input.resolve()
    }

    #[test]
    fn test_exclusions_both_alerts_in_order() {
        let p = panel(LabPanelInput {
            tsh: Some(8.5),
            prolactin: Some(30.0),
            ..Default::default()
        });
        let alerts = check_exclusions(&p);
        assert_eq!(
            alerts,
            vec![ExclusionAlert::HighTsh, ExclusionAlert::HighProlactin]
        );
    }

    #[test]
    fn test_exclusions_boundary_values_do_not_fire() {
        // 阈值本身不触发，须严格大于
        let p = panel(LabPanelInput {
            tsh: Some(4.5),
            prolactin: Some(25.0),
            ..Default::default()
        });
        assert!(check_exclusions(&p).is_empty());
    }

    #[test]
    fn test_oligo_anovulation_long_cycle() {
        let p = panel(LabPanelInput {
            cycle_length_days: Some(50.0),
            ..Default::default()
        });
        assert!(check_oligo_anovulation(&p));
    }

    #[test]
    fn test_oligo_anovulation_short_cycle() {
        let p = panel(LabPanelInput {
            cycle_length_days: Some(18.0),
            ..Default::default()
        });
        assert!(check_oligo_anovulation(&p));
    }

    #[test]
    fn test_oligo_anovulation_few_cycles() {
        let p = panel(LabPanelInput {
            cycles_per_year: Some(5),
            ..Default::default()
        });
        assert!(check_oligo_anovulation(&p));
    }

    #[test]
    fn test_oligo_anovulation_defaults_are_regular() {
        // 缺省周期史视为规律
        assert!(!check_oligo_anovulation(&panel(LabPanelInput::default())));
    }

    #[test]
    fn test_oligo_anovulation_boundaries() {
        // 35天和21天在正常范围内，8次/年也是
        let p = panel(LabPanelInput {
            cycle_length_days: Some(35.0),
            cycles_per_year: Some(8),
            ..Default::default()
        });
        assert!(!check_oligo_anovulation(&p));

        let p = panel(LabPanelInput {
            cycle_length_days: Some(21.0),
            ..Default::default()
        });
        assert!(!check_oligo_anovulation(&p));
    }

    #[test]
    fn test_hyperandrogenism_by_testosterone() {
        let p = panel(LabPanelInput {
            total_testosterone: Some(46.0),
            shbg: Some(1000.0), // FAI极低
            ..Default::default()
        });
        assert!(check_hyperandrogenism(&p));
    }

    #[test]
    fn test_hyperandrogenism_by_fai() {
        // FAI = 30 / 45 * 100 ≈ 66.7 > 5
        let p = panel(LabPanelInput {
            total_testosterone: Some(30.0),
            shbg: Some(45.0),
            ..Default::default()
        });
        assert!(check_hyperandrogenism(&p));
    }

    #[test]
    fn test_hyperandrogenism_zero_shbg_is_safe() {
        let p = panel(LabPanelInput {
            total_testosterone: Some(10.0),
            shbg: Some(0.0),
            ..Default::default()
        });
        // shbg归一为1，FAI = 1000，不会panic
        assert!(check_hyperandrogenism(&p));
    }

    #[test]
    fn test_hyperandrogenism_normal_levels() {
        // FAI = 2/60*100 ≈ 3.3，睾酮与FAI均在正常范围
        let p = panel(LabPanelInput {
            total_testosterone: Some(2.0),
            shbg: Some(60.0),
            ..Default::default()
        });
        assert!(!check_hyperandrogenism(&p));
    }

    #[test]
    fn test_morphology_uses_worse_ovary_follicles() {
        // 左25右0：较差一侧决定结果
        let p = panel(LabPanelInput {
            follicle_count_left: Some(25),
            follicle_count_right: Some(0),
            ..Default::default()
        });
        assert!(check_polycystic_morphology(&p));
    }

    #[test]
    fn test_morphology_uses_worse_ovary_volume() {
        let p = panel(LabPanelInput {
            ovarian_volume_left: Some(2.0),
            ovarian_volume_right: Some(12.5),
            ..Default::default()
        });
        assert!(check_polycystic_morphology(&p));
    }

    #[test]
    fn test_morphology_boundaries() {
        // 卵泡计数阈值是≥20，体积阈值是严格>10
        let p = panel(LabPanelInput {
            follicle_count_left: Some(20),
            ..Default::default()
        });
        assert!(check_polycystic_morphology(&p));

        let p = panel(LabPanelInput {
            follicle_count_left: Some(19),
            ovarian_volume_left: Some(10.0),
            ..Default::default()
        });
        assert!(!check_polycystic_morphology(&p));
    }
}
