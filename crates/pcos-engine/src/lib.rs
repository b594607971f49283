//! # PCOS Engine
//!
//! 诊断评估器：对解析后的检验面板执行排除门控、Rotterdam三标准
//! 投票和表型判定。纯同步计算，无I/O、无共享状态，可在多请求间
//! 零协调并行执行。

pub mod criteria;
pub mod evaluator;
pub mod phenotype;

pub use evaluator::evaluate;
