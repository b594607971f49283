//! # PCOS Recommend
//!
//! 生活方式推荐引擎：表型协议知识库、提示词构建、生成式叙述
//! 客户端（Gemini REST）与Markdown渲染。生成失败时降级为演示
//! 报告，不影响诊断结果本身的返回。

pub mod demo;
pub mod generator;
pub mod markdown;
pub mod prompt;
pub mod protocols;

pub use demo::demo_report;
pub use generator::{CannedGenerator, GeminiClient, NarrativeGenerator};
pub use markdown::render_markdown;
pub use protocols::{find_rule, protocol_rules, ProtocolRule, SupplementRules};
