//! # 统一错误处理模块
//!
//! 定义 histoplot 的所有错误类型，使用 `thiserror` 派生。
//!
//! 配置错误（目录不存在、半径范围非法）由 `commands` 捕获后打印并正常返回；
//! 其余错误一律向上传播到 `main.rs`，以非零状态退出。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// histoplot 统一错误类型
#[derive(Error, Debug)]
pub enum HistoError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Directory not found: {path}")]
    DirectoryNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to parse {format} file: {path}\nReason: {reason}")]
    ParseError {
        format: String,
        path: String,
        reason: String,
    },

    #[error("Cannot derive a series label from file name: {path}")]
    InvalidFileName { path: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid radius range: minimum ({min}) must be less than maximum ({max})")]
    InvalidRadiusRange { min: f64, max: f64 },

    // ─────────────────────────────────────────────────────────────
    // 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("Plot rendering failed: {0}")]
    PlotError(String),
}

impl HistoError {
    /// 是否为配置错误（打印后正常退出，不视为失败）
    pub fn is_config_error(&self) -> bool {
        matches!(
            self,
            HistoError::DirectoryNotFound { .. } | HistoError::InvalidRadiusRange { .. }
        )
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, HistoError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_error_classification() {
        assert!(HistoError::DirectoryNotFound {
            path: "missing".to_string()
        }
        .is_config_error());
        assert!(HistoError::InvalidRadiusRange { min: 5.0, max: 5.0 }.is_config_error());
        assert!(!HistoError::PlotError("boom".to_string()).is_config_error());
        assert!(!HistoError::ParseError {
            format: "histogram".to_string(),
            path: "histo-Q6.dat".to_string(),
            reason: "bad".to_string(),
        }
        .is_config_error());
    }

    #[test]
    fn test_directory_message_names_directory() {
        let err = HistoError::DirectoryNotFound {
            path: "datos/".to_string(),
        };
        assert!(err.to_string().contains("datos/"));
    }
}
