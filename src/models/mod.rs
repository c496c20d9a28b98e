//! # 数据模型模块
//!
//! 定义运行配置和直方图序列。
//!
//! ## 依赖关系
//! - 被 `parsers/`、`plot/` 和 `commands/` 使用
//! - 子模块: config, series

pub mod config;
pub mod series;

pub use config::Config;
pub use series::Series;
