//! # 误差棒对比图
//!
//! 将所有序列叠加绘制为带误差棒的折线图，并输出为矢量 PDF。
//!
//! ## 流程
//! 1. `plotters` SVG 后端在内存中绘制图表
//! 2. `svg2pdf` 将 SVG 转换为 PDF
//! 3. 写入输出文件
//!
//! ## 依赖关系
//! - 被 `commands/mod.rs` 调用
//! - 使用 `models/` 的 Config, Series
//! - 子模块: chart, pdf

pub mod chart;
pub mod pdf;

use crate::error::{HistoError, Result};
use crate::models::{Config, Series};

use plotters::prelude::*;
use std::fs;
use std::path::Path;

/// 输出文件名（相对于进程当前目录）
pub const OUTPUT_FILE: &str = "comp-histos.pdf";

/// 图像尺寸（SVG 用户单位）
pub const FIGURE_SIZE: (u32, u32) = (640, 480);

/// 绘制所有序列并写出 PDF
pub fn render_histograms(series: &[Series], config: &Config, output_path: &Path) -> Result<()> {
    let svg = render_svg(series, config)?;
    let pdf = pdf::svg_to_pdf(&svg)?;

    fs::write(output_path, pdf).map_err(|e| HistoError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 绘制图表为 SVG 字符串
pub fn render_svg(series: &[Series], config: &Config) -> Result<String> {
    let mut svg = String::new();
    {
        let root = SVGBackend::with_string(&mut svg, FIGURE_SIZE).into_drawing_area();
        chart::draw_errorbar_chart(&root, series, config)?;
        root.present()
            .map_err(|e| HistoError::PlotError(e.to_string()))?;
    }
    Ok(svg)
}
