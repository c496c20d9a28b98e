//! # 径向直方图 .dat 格式解析器
//!
//! 解析上游分析程序输出的 `histo-<label>.dat` 文件。
//!
//! ## .dat 格式说明
//! ```text
//! # r avg_BOP std
//! 0.125 0.412345 0.031000
//! 0.375 0.398712 0.027000
//! ...
//! ```
//! - 空白分隔，`#` 之后为注释
//! - 每行至少三列：半径、平均值、标准差，多余的列忽略
//! - 行顺序原样保留，不做排序
//!
//! ## 依赖关系
//! - 被 `parsers/mod.rs` 使用
//! - 使用 `models/series.rs`

use crate::error::{HistoError, Result};
use crate::models::Series;
use std::fs;
use std::io::ErrorKind;
use std::path::Path;

/// 错误信息中使用的格式名
const FORMAT: &str = "histogram .dat";

/// 从文件名提取图例标签
///
/// 按 `-` 切分文件名取第二段，再去掉末尾 4 个字符（假定为 `.dat`），
/// 例如 `histo-W6.dat` → `W6`。文件名含多个 `-` 时只取第二段，
/// 第二段不足 4 个字符时得到空标签。
pub fn extract_label(path: &Path) -> Result<String> {
    let name = path
        .file_name()
        .map(|n| n.to_string_lossy())
        .ok_or_else(|| HistoError::InvalidFileName {
            path: path.display().to_string(),
        })?;

    let segment = name
        .split('-')
        .nth(1)
        .ok_or_else(|| HistoError::InvalidFileName {
            path: path.display().to_string(),
        })?;

    let chars: Vec<char> = segment.chars().collect();
    let keep = chars.len().saturating_sub(4);
    Ok(chars[..keep].iter().collect())
}

/// 解析 .dat 文件为序列
pub fn parse_histo_file(path: &Path) -> Result<Series> {
    let label = extract_label(path)?;

    let content = fs::read_to_string(path).map_err(|e| match e.kind() {
        // 文件可读但不是文本，属于数据格式错误
        ErrorKind::InvalidData => parse_error(
            &path.display().to_string(),
            "file is not valid UTF-8 text".to_string(),
        ),
        _ => HistoError::FileReadError {
            path: path.display().to_string(),
            source: e,
        },
    })?;

    parse_histo_content(&content, &label, &path.display().to_string())
}

/// 从字符串内容解析 .dat 格式
///
/// `source` 仅用于错误信息。
pub fn parse_histo_content(content: &str, label: &str, source: &str) -> Result<Series> {
    let mut series = Series::new(label);

    for (idx, line) in content.lines().enumerate() {
        let line_no = idx + 1;

        // 去掉注释
        let data = match line.find('#') {
            Some(pos) => &line[..pos],
            None => line,
        };

        let parts: Vec<&str> = data.split_whitespace().collect();
        if parts.is_empty() {
            continue;
        }

        if parts.len() < 3 {
            return Err(parse_error(
                source,
                format!(
                    "line {}: expected at least 3 columns, found {}",
                    line_no,
                    parts.len()
                ),
            ));
        }

        let radius = parse_field(parts[0], line_no, source)?;
        let value = parse_field(parts[1], line_no, source)?;
        let stddev = parse_field(parts[2], line_no, source)?;

        series.push(radius, value, stddev);
    }

    Ok(series)
}

fn parse_field(field: &str, line_no: usize, source: &str) -> Result<f64> {
    field.parse::<f64>().map_err(|_| {
        parse_error(
            source,
            format!("line {}: could not convert '{}' to a number", line_no, field),
        )
    })
}

fn parse_error(source: &str, reason: String) -> HistoError {
    HistoError::ParseError {
        format: FORMAT.to_string(),
        path: source.to_string(),
        reason,
    }
}
