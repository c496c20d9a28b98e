//! # 解析器模块
//!
//! 读取直方图数据文件，构建 [`Series`] 列表。
//!
//! ## 依赖关系
//! - 被 `commands/` 模块使用
//! - 使用 `models/` 数据模型, `utils/progress.rs`
//! - 子模块: histo

pub mod histo;

use crate::error::Result;
use crate::models::Series;
use crate::utils::progress;
use std::path::PathBuf;

/// 按给定顺序依次加载所有文件，遇到第一个错误即停止
pub fn load_all(files: &[PathBuf]) -> Result<Vec<Series>> {
    let pb = progress::create_progress_bar(files.len() as u64, "Loading");

    let mut series = Vec::with_capacity(files.len());
    for path in files {
        match histo::parse_histo_file(path) {
            Ok(s) => {
                pb.set_message(s.label.clone());
                series.push(s);
                pb.inc(1);
            }
            Err(e) => {
                pb.abandon();
                return Err(e);
            }
        }
    }

    pb.finish_and_clear();
    Ok(series)
}
