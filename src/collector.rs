//! # 直方图文件收集器
//!
//! 在工作目录中（不递归）查找 `histo-*.dat` 文件，并按完整路径升序排序，
//! 保证相同目录内容下两次运行得到相同的序列顺序。
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `walkdir` 遍历目录, `glob` 匹配文件名

use crate::error::{HistoError, Result};

use std::path::PathBuf;
use walkdir::WalkDir;

/// 默认的直方图文件名模式
pub const HISTO_PATTERN: &str = "histo-*.dat";

/// 文件收集器
pub struct HistoCollector {
    /// 工作目录
    directory: PathBuf,
}

impl HistoCollector {
    /// 创建新的收集器
    pub fn new(directory: impl Into<PathBuf>) -> Self {
        Self {
            directory: directory.into(),
        }
    }

    /// 文件名匹配模式（用于输出提示）
    pub fn pattern(&self) -> &str {
        HISTO_PATTERN
    }

    /// 收集所有匹配的普通文件，按路径排序
    pub fn collect(&self) -> Result<Vec<PathBuf>> {
        let glob_pattern =
            glob::Pattern::new(HISTO_PATTERN).map_err(|e| HistoError::ParseError {
                format: "glob pattern".to_string(),
                path: HISTO_PATTERN.to_string(),
                reason: e.to_string(),
            })?;

        let walker = WalkDir::new(&self.directory).min_depth(1).max_depth(1);

        let mut files = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| HistoError::FileReadError {
                path: self.directory.display().to_string(),
                source: e.into(),
            })?;

            // 跟随符号链接判断，目录即使名字匹配也跳过
            if !entry.path().is_file() {
                continue;
            }

            if let Some(name) = entry.file_name().to_str() {
                if glob_pattern.matches(name) {
                    files.push(entry.path().to_path_buf());
                }
            }
        }

        files.sort();
        Ok(files)
    }
}
