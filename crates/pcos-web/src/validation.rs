//! 请求验证
//!
//! 13个必填数值字段须存在、非空、为数值且非负，否则整体拒绝
//! 并逐一列出违规字段。`patient_name` 和 `region` 仅用于呈现，
//! 从不进入评估器。

use pcos_core::{LabPanelInput, PcosError, Result};
use serde_json::Value;

/// 必填的诊断数值字段
pub const REQUIRED_FIELDS: [&str; 13] = [
    "cycle_length_days",
    "cycles_per_year",
    "total_testosterone",
    "shbg",
    "fasting_insulin",
    "fasting_glucose",
    "tsh",
    "prolactin",
    "crp",
    "follicle_count_left",
    "follicle_count_right",
    "ovarian_volume_left",
    "ovarian_volume_right",
];

/// 验证通过的诊断请求
#[derive(Debug, Clone)]
pub struct DiagnosisRequest {
    pub patient_name: String,
    pub region: String,
    pub panel: LabPanelInput,
}

/// 解析并验证请求体
pub fn parse_request(body: &Value) -> Result<DiagnosisRequest> {
    let region = body
        .get("region")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .ok_or_else(|| PcosError::Validation("Region is required".to_string()))?
        .to_string();

    let patient_name = body
        .get("patient_name")
        .and_then(Value::as_str)
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .unwrap_or("Patient")
        .to_string();

    let mut missing_fields = Vec::new();
    let mut invalid_fields = Vec::new();

    for field in REQUIRED_FIELDS {
        match body.get(field) {
            None | Some(Value::Null) => missing_fields.push(field),
            Some(Value::String(s)) if s.is_empty() => missing_fields.push(field),
            Some(value) => match value.as_f64() {
                Some(number) if number >= 0.0 => {}
                _ => invalid_fields.push(field),
            },
        }
    }

    if !missing_fields.is_empty() {
        return Err(PcosError::Validation(format!(
            "Missing or empty required fields: {}",
            missing_fields.join(", ")
        )));
    }

    if !invalid_fields.is_empty() {
        return Err(PcosError::Validation(format!(
            "Invalid values for fields (must be positive numbers): {}",
            invalid_fields.join(", ")
        )));
    }

    Ok(DiagnosisRequest {
        patient_name,
        region,
        panel: panel_from_body(body),
    })
}

/// 从已验证的请求体构造面板输入
///
/// 字段此时均为非负数值；评估器内部仍会防御性地套用默认值。
fn panel_from_body(body: &Value) -> LabPanelInput {
    let number = |field: &str| body.get(field).and_then(Value::as_f64);
    let integer = |field: &str| number(field).map(|v| v as u32);

    LabPanelInput {
        cycle_length_days: number("cycle_length_days"),
        cycles_per_year: integer("cycles_per_year"),
        total_testosterone: number("total_testosterone"),
        shbg: number("shbg"),
        fasting_insulin: number("fasting_insulin"),
        fasting_glucose: number("fasting_glucose"),
        tsh: number("tsh"),
        prolactin: number("prolactin"),
        crp: number("crp"),
        follicle_count_left: integer("follicle_count_left"),
        follicle_count_right: integer("follicle_count_right"),
        ovarian_volume_left: number("ovarian_volume_left"),
        ovarian_volume_right: number("ovarian_volume_right"),
    }
}
