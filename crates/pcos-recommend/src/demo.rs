//! 演示报告
//!
//! 生成式API不可用或调用失败时的降级内容。诊断部分始终照常
//! 返回，本报告只替代推荐文本。

/// 生成演示用健康计划（Markdown）
pub fn demo_report(patient_name: &str, region: &str) -> String {
    format!(
        r#"# Health Plan for {patient_name} (Demo)

This is a sample plan shown because AI generation is currently unavailable.

## General Guidance
- Favor whole foods common in {region} cuisine, cooked at home where possible.
- Keep meals regular; avoid long gaps and late-night eating.
- Aim for 30 minutes of moderate movement most days of the week.

## Next Steps
Discuss the diagnostic report with your clinician before making
significant dietary or supplement changes.
"#,
        patient_name = patient_name,
        region = region,
    )
}
