//! 提示词构建
//!
//! 将协议规则、患者姓名与地区拼装为综合健康计划的生成提示词。
//! 完全确定性，便于测试与离线审查。

use crate::protocols::ProtocolRule;

/// 构建综合健康计划提示词
///
/// 六个固定章节：诊断解释、红名单、绿名单（地区饮食）、运动
/// 计划、补充剂方案、生活方式警告。
pub fn build_plan_prompt(rule: &ProtocolRule, region: &str, patient_name: &str) -> String {
    format!(
        r#"ACT AS: A Senior PCOS Specialist.
PATIENT: {patient_name} ({region}).
DIAGNOSIS: {name}

TASK: Write a Personalized Health Plan.

1. **DIAGNOSIS EXPLAINED**
- Explain {name} simply.
- Clinical goal: {goal}.

2. **THE "RED LIST" (AVOID)**
- Identify 5 common {region} foods she must STRICTLY AVOID.
- Explain WHY.

3. **THE "GREEN LIST" (EAT)**
- Create a {region} Cuisine Meal Plan (Breakfast, Lunch, Dinner).
- Focus: {focus}.

4. **MOVEMENT PLAN**
- 7-Day Workout Schedule.
- Explain why.

5. **SUPPLEMENT STACK**
- Recommend: {stack}
- Benefit: {benefit}

6. **LIFESTYLE WARNINGS**
- Warn about: {avoids}

TONE: Empathetic, motivating.
"#,
        patient_name = patient_name,
        region = region,
        name = rule.name,
        goal = rule.clinical_goal,
        focus = rule.dietary_focus,
        stack = rule.supplements.core_stack.join(", "),
        benefit = rule.supplements.specific_benefit,
        avoids = rule.lifestyle_avoids.join(", "),
    )
}
