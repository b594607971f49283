//! # PCOS Web
//!
//! HTTP边界层：输入验证、诊断端点与推荐编排。核心评估器只
//! 收到经过验证的数值面板；推荐生成失败时降级为演示报告。

pub mod handlers;
pub mod server;
pub mod validation;

pub use server::{AppState, WebServer};
