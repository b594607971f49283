//! HTTP处理器

use crate::server::AppState;
use crate::validation::parse_request;
use axum::{
    extract::State,
    http::StatusCode,
    response::{IntoResponse, Json},
};
use pcos_core::{Evaluation, PcosError};
use pcos_engine::evaluate;
use pcos_recommend::{demo_report, render_markdown, NarrativeGenerator};
use serde_json::{json, Value};
use tracing::{info, warn};

/// 推荐降级时附带的说明
const DEMO_FALLBACK_NOTE: &str = "AI recommendation unavailable - showing demo report. \
Please configure PCOS_GEMINI_API_KEY for real AI analysis.";

/// API根路径处理器
pub async fn api_root() -> impl IntoResponse {
    Json(json!({
        "service": "PCOS Diagnostic API",
        "version": "1.0.0",
        "status": "running",
        "endpoints": {
            "health": "/health",
            "diagnosis": "/api/v1/diagnosis"
        }
    }))
}

/// 健康检查处理器
pub async fn health() -> impl IntoResponse {
    Json(json!({
        "status": "healthy",
        "version": "1.0.0"
    }))
}

/// 诊断端点处理器
///
/// 验证 → 评估 → （阳性时）生成推荐。推荐失败只降级，诊断
/// 部分始终返回。
pub async fn diagnose(
    State(state): State<AppState>,
    Json(body): Json<Value>,
) -> Result<Json<Value>, ApiError> {
    let response = run_diagnosis(&state, &body).await?;
    Ok(Json(response))
}

/// 诊断编排
///
/// 处理器的全部逻辑，独立出来便于在无HTTP栈的情况下测试。
pub async fn run_diagnosis(state: &AppState, body: &Value) -> Result<Value, ApiError> {
    let request = parse_request(body)?;

    info!(region = %request.region, "Running diagnosis");

    let panel = request.panel.resolve();
    let evaluation = evaluate(&panel);

    let mut response = json!({
        "patient_name": &request.patient_name,
        "region": &request.region,
        "diagnosis": &evaluation,
    });

    // 仅阳性诊断且表型已知时请求推荐
    if let Evaluation::Report(report) = &evaluation {
        if report.diagnosis {
            if let Some(phenotype_id) = report.phenotype.identifier() {
                match state
                    .generator
                    .generate_plan(phenotype_id, &request.region, &request.patient_name)
                    .await
                {
                    Ok(markdown) => {
                        response["recommendation"] = Value::String(render_markdown(&markdown));
                    }
                    Err(e) => {
                        // 降级：诊断结果照常返回，推荐用演示报告替代
                        warn!(error = %e, "Recommendation generation failed, using demo report");
                        let fallback = demo_report(&request.patient_name, &request.region);
                        response["recommendation"] = Value::String(render_markdown(&fallback));
                        response["note"] = Value::String(DEMO_FALLBACK_NOTE.to_string());
                    }
                }
            }
        }
    }

    Ok(response)
}

/// HTTP错误包装
///
/// 将统一错误类型映射为HTTP状态码与JSON错误体。
#[derive(Debug)]
pub struct ApiError(pub PcosError);

impl From<PcosError> for ApiError {
    fn from(err: PcosError) -> Self {
        Self(err)
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> axum::response::Response {
        let status = match &self.0 {
            PcosError::Validation(_) => StatusCode::BAD_REQUEST,
            PcosError::NotFound(_) => StatusCode::NOT_FOUND,
            PcosError::Config(_)
            | PcosError::Recommendation(_)
            | PcosError::Network(_)
            | PcosError::Serialization(_)
            | PcosError::Internal(_) => StatusCode::INTERNAL_SERVER_ERROR,
        };

        let body = Json(json!({
            "error": true,
            "message": self.0.to_string(),
            "status": status.as_u16()
        }));

        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pcos_recommend::CannedGenerator;
    use serde_json::json;
    use std::sync::Arc;

    fn test_state() -> AppState {
        AppState {
            generator: Arc::new(CannedGenerator),
        }
    }

    /// 失败的生成器，验证降级路径
    struct FailingGenerator;

    #[async_trait::async_trait]
    impl pcos_recommend::NarrativeGenerator for FailingGenerator {
        async fn generate_plan(
            &self,
            _phenotype_id: &str,
            _region: &str,
            _patient_name: &str,
        ) -> pcos_core::Result<String> {
            Err(PcosError::Recommendation("boom".to_string()))
        }
    }

    fn positive_body() -> Value {
        json!({
            "patient_name": "Asha",
            "region": "Mumbai",
            "cycle_length_days": 50,
            "cycles_per_year": 5,
            "total_testosterone": 30,
            "shbg": 45,
            "fasting_insulin": 8,
            "fasting_glucose": 85,
            "tsh": 3.0,
            "prolactin": 10,
            "crp": 1.2,
            "follicle_count_left": 18,
            "follicle_count_right": 15,
            "ovarian_volume_left": 8.5,
            "ovarian_volume_right": 7.0
        })
    }

    #[tokio::test]
    async fn test_positive_diagnosis_includes_recommendation() {
        let response = run_diagnosis(&test_state(), &positive_body()).await.unwrap();

        assert_eq!(response["diagnosis"]["diagnosis"], json!(true));
        assert_eq!(
            response["diagnosis"]["phenotype"],
            json!("Hyperandrogenic PCOS")
        );
        // CannedGenerator输出经过Markdown渲染
        let html = response["recommendation"].as_str().unwrap();
        assert!(html.contains("<h1>"));
        assert!(html.contains("Asha"));
        assert!(response.get("note").is_none());
    }

    #[tokio::test]
    async fn test_review_needed_has_no_recommendation() {
        let mut body = positive_body();
        body["tsh"] = json!(8.5);

        let response = run_diagnosis(&test_state(), &body).await.unwrap();

        assert_eq!(response["diagnosis"]["status"], json!("Review Needed"));
        assert_eq!(
            response["diagnosis"]["alerts"],
            json!(["High TSH (Possible Hypothyroidism)"])
        );
        assert!(response.get("recommendation").is_none());
    }

    #[tokio::test]
    async fn test_negative_diagnosis_has_no_recommendation() {
        let mut body = positive_body();
        // 只保留一条标准：周期正常、超声正常，仅高雄激素
        body["cycle_length_days"] = json!(28);
        body["cycles_per_year"] = json!(12);
        body["total_testosterone"] = json!(50);
        body["shbg"] = json!(1000);

        let response = run_diagnosis(&test_state(), &body).await.unwrap();

        assert_eq!(response["diagnosis"]["diagnosis"], json!(false));
        assert_eq!(response["diagnosis"]["phenotype"], json!("Unknown"));
        assert!(response.get("recommendation").is_none());
    }

    #[tokio::test]
    async fn test_generation_failure_degrades_to_demo() {
        let state = AppState {
            generator: Arc::new(FailingGenerator),
        };
        let response = run_diagnosis(&state, &positive_body()).await.unwrap();

        // 诊断部分完好
        assert_eq!(response["diagnosis"]["diagnosis"], json!(true));
        // 推荐被演示报告替代并附说明
        let html = response["recommendation"].as_str().unwrap();
        assert!(html.contains("Demo"));
        assert!(response["note"].as_str().unwrap().contains("demo report"));
    }

    #[tokio::test]
    async fn test_invalid_body_is_client_error() {
        let mut body = positive_body();
        body.as_object_mut().unwrap().remove("tsh");

        let err = run_diagnosis(&test_state(), &body).await.unwrap_err();
        assert!(matches!(err.0, PcosError::Validation(_)));
    }
}
