//! # PCOS Core
//!
//! PCOS诊断系统的核心模块，提供基础数据结构和错误定义。

pub mod error;
pub mod models;

pub use error::{PcosError, Result};
pub use models::*;
