//! # SVG → PDF 转换
//!
//! `plotters` 没有 PDF 后端，这里借助 `svg2pdf`（及其重新导出的 `usvg`）
//! 将 SVG 图表转换为矢量 PDF。文本使用系统衬线字体渲染。
//!
//! ## 依赖关系
//! - 被 `plot/mod.rs` 调用
//! - 使用 `svg2pdf`

use crate::error::{HistoError, Result};

use svg2pdf::usvg;

/// `serif` 的候选字体，按优先级排列
const SERIF_CANDIDATES: &[&str] = &[
    "Linux Libertine O",
    "Libertinus Serif",
    "Times New Roman",
    "Liberation Serif",
    "DejaVu Serif",
    "Noto Serif",
];

/// 将 SVG 文本转换为 PDF 字节
pub fn svg_to_pdf(svg: &str) -> Result<Vec<u8>> {
    let mut options = usvg::Options::default();
    {
        let db = options.fontdb_mut();
        db.load_system_fonts();

        if let Some(name) = first_available(db, SERIF_CANDIDATES) {
            db.set_serif_family(name);
        }
    }

    let tree = usvg::Tree::from_str(svg, &options)
        .map_err(|e| HistoError::PlotError(format!("Invalid SVG: {}", e)))?;

    svg2pdf::to_pdf(
        &tree,
        svg2pdf::ConversionOptions::default(),
        svg2pdf::PageOptions::default(),
    )
    .map_err(|e| HistoError::PlotError(format!("PDF conversion failed: {:?}", e)))
}

/// 候选列表中第一个已安装的字体族
fn first_available(
    db: &usvg::fontdb::Database,
    candidates: &[&'static str],
) -> Option<&'static str> {
    candidates.iter().copied().find(|name| {
        db.faces()
            .any(|face| face.families.iter().any(|(family, _)| family.as_str() == *name))
    })
}
