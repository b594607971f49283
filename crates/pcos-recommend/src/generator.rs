//! 生成式叙述客户端
//!
//! `NarrativeGenerator` 是核心与生成式API之间的注入式接口：
//! 核心逻辑与测试不依赖网络。`GeminiClient` 走Gemini REST，
//! `CannedGenerator` 是确定性实现，用于测试和无密钥的演示模式。

use crate::prompt::build_plan_prompt;
use crate::protocols::find_rule;
use async_trait::async_trait;
use pcos_core::{PcosError, Result};
use serde_json::{json, Value};
use tracing::{debug, warn};

/// Gemini REST端点
pub const DEFAULT_GEMINI_ENDPOINT: &str = "https://generativelanguage.googleapis.com";
/// 默认模型（latest别名会自动匹配区域可用的模型）
pub const DEFAULT_GEMINI_MODEL: &str = "gemini-flash-latest";

/// 叙述生成接口
///
/// 输出为Markdown文本。实现方失败时返回 `PcosError::Recommendation`，
/// 调用方必须降级而非中断诊断响应。
#[async_trait]
pub trait NarrativeGenerator: Send + Sync {
    /// 为指定表型生成个性化健康计划
    async fn generate_plan(
        &self,
        phenotype_id: &str,
        region: &str,
        patient_name: &str,
    ) -> Result<String>;
}

/// Gemini REST客户端
#[derive(Debug, Clone)]
pub struct GeminiClient {
    client: reqwest::Client,
    endpoint: String,
    model: String,
    api_key: String,
}

impl GeminiClient {
    pub fn new(api_key: impl Into<String>, model: impl Into<String>) -> Self {
        Self {
            client: reqwest::Client::new(),
            endpoint: DEFAULT_GEMINI_ENDPOINT.to_string(),
            model: model.into(),
            api_key: api_key.into(),
        }
    }

    /// 覆盖端点（测试用）
    pub fn with_endpoint(mut self, endpoint: impl Into<String>) -> Self {
        self.endpoint = endpoint.into();
        self
    }

    fn request_url(&self) -> String {
        format!(
            "{}/v1beta/models/{}:generateContent?key={}",
            self.endpoint, self.model, self.api_key
        )
    }

    /// 从响应体提取生成文本
    ///
    /// 取第一个candidate的全部text parts，换行拼接。
    fn extract_text(body: &Value) -> Option<String> {
        let parts = body["candidates"]
            .as_array()?
            .first()?
            .get("content")?
            .get("parts")?
            .as_array()?;

        let text = parts
            .iter()
            .filter_map(|part| part["text"].as_str())
            .collect::<Vec<_>>()
            .join("\n");

        if text.trim().is_empty() {
            None
        } else {
            Some(text.trim().to_string())
        }
    }
}

#[async_trait]
impl NarrativeGenerator for GeminiClient {
    async fn generate_plan(
        &self,
        phenotype_id: &str,
        region: &str,
        patient_name: &str,
    ) -> Result<String> {
        if self.api_key.is_empty() {
            return Err(PcosError::Recommendation("API key is missing".to_string()));
        }

        let rule = find_rule(phenotype_id)?;
        let prompt = build_plan_prompt(rule, region, patient_name);

        debug!(phenotype_id, model = %self.model, "Requesting plan generation");

        let payload = json!({
            "contents": [
                {
                    "parts": [
                        { "text": prompt }
                    ]
                }
            ]
        });

        let response = self
            .client
            .post(self.request_url())
            .json(&payload)
            .send()
            .await
            .map_err(|e| PcosError::Recommendation(format!("Gemini request failed: {}", e)))?;

        if !response.status().is_success() {
            let status = response.status();
            let body = response.text().await.unwrap_or_default();
            warn!(%status, "Gemini returned error status");
            return Err(PcosError::Recommendation(format!(
                "Gemini error {}: {}",
                status,
                body.chars().take(320).collect::<String>()
            )));
        }

        let body: Value = response
            .json()
            .await
            .map_err(|e| PcosError::Recommendation(format!("Invalid Gemini response: {}", e)))?;

        Self::extract_text(&body).ok_or_else(|| {
            PcosError::Recommendation("Gemini response contained no text".to_string())
        })
    }
}

/// 确定性叙述生成器
///
/// 直接由协议规则表渲染Markdown计划，不访问网络。
#[derive(Debug, Clone, Default)]
pub struct CannedGenerator;

#[async_trait]
impl NarrativeGenerator for CannedGenerator {
    async fn generate_plan(
        &self,
        phenotype_id: &str,
        region: &str,
        patient_name: &str,
    ) -> Result<String> {
        let rule = find_rule(phenotype_id)?;

        let avoids = rule
            .lifestyle_avoids
            .iter()
            .map(|item| format!("- {}", item))
            .collect::<Vec<_>>()
            .join("\n");

        Ok(format!(
            r#"# Personalized Health Plan for {patient_name}

## Diagnosis Explained
You have been assessed with **{name}**. The clinical goal of this plan is:
{goal}.

## Dietary Focus ({region} cuisine)
{focus}.

## Supplement Stack
Recommended: {stack}.
Benefit: {benefit}.

## Lifestyle Warnings
{avoids}
"#,
            patient_name = patient_name,
            name = rule.name,
            goal = rule.clinical_goal,
            region = region,
            focus = rule.dietary_focus,
            stack = rule.supplements.core_stack.join(", "),
            benefit = rule.supplements.specific_benefit,
            avoids = avoids,
        ))
    }
}
