//! # 运行配置
//!
//! 由命令行参数构建并校验的不可变配置。
//!
//! ## 校验顺序
//! 1. 工作目录必须存在
//! 2. 半径下限必须严格小于上限（两者均须为有限值）
//!
//! ## 依赖关系
//! - 使用 `cli/mod.rs` 的 `Cli`, `OrderParameter`
//! - 被 `commands/mod.rs` 使用

use crate::cli::{Cli, OrderParameter};
use crate::error::{HistoError, Result};

use std::path::PathBuf;

/// 绘图配置
#[derive(Debug, Clone, PartialEq)]
pub struct Config {
    /// 扫描输入文件的工作目录
    pub directory: PathBuf,
    /// 横轴下限 (Å)
    pub min_radius: f64,
    /// 横轴上限 (Å)
    pub max_radius: f64,
    /// 纵轴显示的序参量
    pub parameter: OrderParameter,
}

impl Config {
    /// 从命令行参数构建配置，按顺序校验目录与半径范围
    pub fn resolve(cli: Cli) -> Result<Self> {
        if !cli.directory.exists() {
            return Err(HistoError::DirectoryNotFound {
                path: cli.directory.display().to_string(),
            });
        }

        // NaN 与任何值比较都为 false，需要单独拒绝
        if !cli.min.is_finite() || !cli.max.is_finite() || cli.min >= cli.max {
            return Err(HistoError::InvalidRadiusRange {
                min: cli.min,
                max: cli.max,
            });
        }

        Ok(Config {
            directory: cli.directory,
            min_radius: cli.min,
            max_radius: cli.max,
            parameter: cli.parameter,
        })
    }

    /// 纵轴标题
    pub fn y_label(&self) -> String {
        format!("Valor medio {}", self.parameter)
    }
}
