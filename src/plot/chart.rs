//! # 图表绘制核心逻辑
//!
//! - 每个序列一条折线 + 对称竖直误差棒，透明度 0.9
//! - 颜色按 matplotlib 默认色环 (tab10) 依序分配
//! - 横轴固定为配置的半径范围，纵轴根据全部数据（含误差棒）自动缩放
//!
//! ## 依赖关系
//! - 被 `plot/mod.rs` 调用
//! - 使用 `plotters` 渲染

use crate::error::{HistoError, Result};
use crate::models::{Config, Series};

use plotters::prelude::*;

/// 所有文字使用的字体与字号
const FONT: (&str, u32) = ("serif", 14);

/// 序列透明度
const SERIES_ALPHA: f64 = 0.9;

/// 自动缩放时两端留白比例
const Y_MARGIN: f64 = 0.05;

/// matplotlib 默认色环 (tab10)
const COLOR_CYCLE: [RGBColor; 10] = [
    RGBColor(0x1f, 0x77, 0xb4),
    RGBColor(0xff, 0x7f, 0x0e),
    RGBColor(0x2c, 0xa0, 0x2c),
    RGBColor(0xd6, 0x27, 0x28),
    RGBColor(0x94, 0x67, 0xbd),
    RGBColor(0x8c, 0x56, 0x4b),
    RGBColor(0xe3, 0x77, 0xc2),
    RGBColor(0x7f, 0x7f, 0x7f),
    RGBColor(0xbc, 0xbd, 0x22),
    RGBColor(0x17, 0xbe, 0xcf),
];

/// 第 `index` 个序列的颜色
pub fn series_color(index: usize) -> RGBColor {
    COLOR_CYCLE[index % COLOR_CYCLE.len()]
}

/// 绘制误差棒对比图
pub fn draw_errorbar_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    series: &[Series],
    config: &Config,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(|e| HistoError::PlotError(format!("{:?}", e)))?;

    let (x_min, x_max) = (config.min_radius, config.max_radius);
    let (y_min, y_max) = y_range(series);

    let mut chart = ChartBuilder::on(root)
        .margin(15)
        .x_label_area_size(45)
        .y_label_area_size(65)
        .build_cartesian_2d(x_min..x_max, y_min..y_max)
        .map_err(|e| HistoError::PlotError(format!("{:?}", e)))?;

    chart
        .configure_mesh()
        .disable_mesh()
        .x_desc("r [Å]")
        .y_desc(config.y_label())
        .x_label_style(FONT)
        .y_label_style(FONT)
        .axis_desc_style(FONT)
        .draw()
        .map_err(|e| HistoError::PlotError(format!("{:?}", e)))?;

    for (i, s) in series.iter().enumerate() {
        let style = series_color(i).mix(SERIES_ALPHA).stroke_width(2);

        // 误差棒（只画横轴范围内的点），图例挂在这一组上，保证每个序列恰好一个图例项
        let bars: Vec<PathElement<(f64, f64)>> = s
            .points()
            .filter(|(r, v, sd)| {
                r.is_finite() && v.is_finite() && sd.is_finite() && *r >= x_min && *r <= x_max
            })
            .map(|(r, v, sd)| PathElement::new(vec![(r, v - sd.abs()), (r, v + sd.abs())], style))
            .collect();

        chart
            .draw_series(bars)
            .map_err(|e| HistoError::PlotError(format!("{:?}", e)))?
            .label(s.label.clone())
            .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], style));

        let points: Vec<(f64, f64)> = s.points().map(|(r, v, _)| (r, v)).collect();
        for run in clip_polyline(&points, x_min, x_max) {
            chart
                .draw_series(LineSeries::new(run, style))
                .map_err(|e| HistoError::PlotError(format!("{:?}", e)))?;
        }
    }

    if !series.is_empty() {
        chart
            .configure_series_labels()
            .position(SeriesLabelPosition::UpperRight)
            .label_font(FONT)
            .background_style(&WHITE.mix(0.8))
            .border_style(&BLACK.mix(0.3))
            .draw()
            .map_err(|e| HistoError::PlotError(format!("{:?}", e)))?;
    }

    Ok(())
}

/// 纵轴范围：覆盖所有序列的 `value ± stddev`，两端各留 5%
///
/// 无有限数据时返回 `(0, 1)`；所有数据相同时上下各扩展 0.5。
pub fn y_range(series: &[Series]) -> (f64, f64) {
    let mut lo = f64::INFINITY;
    let mut hi = f64::NEG_INFINITY;

    for (r, v, sd) in series.iter().flat_map(|s| s.points()) {
        if !r.is_finite() || !v.is_finite() {
            continue;
        }
        let spread = if sd.is_finite() { sd.abs() } else { 0.0 };
        lo = lo.min(v - spread);
        hi = hi.max(v + spread);
    }

    if !lo.is_finite() || !hi.is_finite() {
        return (0.0, 1.0);
    }

    let span = hi - lo;
    if span <= 0.0 {
        return (lo - 0.5, hi + 0.5);
    }

    (lo - span * Y_MARGIN, hi + span * Y_MARGIN)
}

/// 将折线裁剪到 `[x_min, x_max]`
///
/// 非有限点会断开折线；跨越边界的线段在边界处线性插值截断。
/// 返回若干段连续折线，每段至少两个点。
pub fn clip_polyline(points: &[(f64, f64)], x_min: f64, x_max: f64) -> Vec<Vec<(f64, f64)>> {
    let mut runs = Vec::new();
    let mut current: Vec<(f64, f64)> = Vec::new();

    let flush = |current: &mut Vec<(f64, f64)>, runs: &mut Vec<Vec<(f64, f64)>>| {
        if current.len() >= 2 {
            runs.push(std::mem::take(current));
        } else {
            current.clear();
        }
    };

    let mut prev: Option<(f64, f64)> = None;
    for &(x, y) in points {
        if !x.is_finite() || !y.is_finite() {
            flush(&mut current, &mut runs);
            prev = None;
            continue;
        }

        match prev {
            None => {
                if x >= x_min && x <= x_max {
                    current.push((x, y));
                }
            }
            Some(p) => match clip_segment(p, (x, y), x_min, x_max) {
                Some((a, b)) => {
                    if current.last() != Some(&a) {
                        flush(&mut current, &mut runs);
                        current.push(a);
                    }
                    current.push(b);
                    // 终点被截断说明折线离开了可见区域
                    if b != (x, y) {
                        flush(&mut current, &mut runs);
                    }
                }
                None => flush(&mut current, &mut runs),
            },
        }

        prev = Some((x, y));
    }

    flush(&mut current, &mut runs);
    runs
}

/// 裁剪单条线段，完全在范围外时返回 `None`
fn clip_segment(
    a: (f64, f64),
    b: (f64, f64),
    x_min: f64,
    x_max: f64,
) -> Option<((f64, f64), (f64, f64))> {
    let (lo, hi) = if a.0 <= b.0 { (a.0, b.0) } else { (b.0, a.0) };
    if hi < x_min || lo > x_max {
        return None;
    }

    let clamp = |p: (f64, f64)| -> (f64, f64) {
        let x = p.0.clamp(x_min, x_max);
        if x == p.0 {
            return p;
        }
        let t = (x - a.0) / (b.0 - a.0);
        (x, a.1 + t * (b.1 - a.1))
    };

    Some((clamp(a), clamp(b)))
}

#[cfg(test)]
mod tests {
    use super::*;

    fn series(label: &str, rows: &[(f64, f64, f64)]) -> Series {
        let mut s = Series::new(label);
        for &(r, v, sd) in rows {
            s.push(r, v, sd);
        }
        s
    }

    #[test]
    fn test_color_cycle_wraps() {
        assert_eq!(series_color(0), RGBColor(0x1f, 0x77, 0xb4));
        assert_eq!(series_color(1), RGBColor(0xff, 0x7f, 0x0e));
        assert_eq!(series_color(10), series_color(0));
    }

    #[test]
    fn test_y_range_includes_error_bars() {
        let data = [
            series("Q4", &[(1.0, 2.0, 0.5), (2.0, 3.0, 0.5)]),
            series("Q6", &[(1.0, 1.0, 0.0)]),
        ];
        let (lo, hi) = y_range(&data);
        // 数据范围 [1.0, 3.5]，留白 0.125
        assert!((lo - 0.875).abs() < 1e-12);
        assert!((hi - 3.625).abs() < 1e-12);
    }

    #[test]
    fn test_y_range_empty_and_degenerate() {
        assert_eq!(y_range(&[]), (0.0, 1.0));
        assert_eq!(y_range(&[series("empty", &[])]), (0.0, 1.0));
        assert_eq!(y_range(&[series("flat", &[(1.0, 2.0, 0.0)])]), (1.5, 2.5));
    }

    #[test]
    fn test_y_range_skips_non_finite() {
        let data = [series(
            "Q6",
            &[(1.0, f64::NAN, 0.1), (2.0, 1.0, f64::NAN), (3.0, 2.0, 0.0)],
        )];
        let (lo, hi) = y_range(&data);
        assert!((lo - 0.95).abs() < 1e-12);
        assert!((hi - 2.05).abs() < 1e-12);
    }

    #[test]
    fn test_clip_inside() {
        let pts = [(1.0, 1.0), (2.0, 2.0), (3.0, 3.0)];
        assert_eq!(clip_polyline(&pts, 0.0, 5.0), vec![pts.to_vec()]);
    }

    #[test]
    fn test_clip_crossing_boundaries() {
        let pts = [(-1.0, 0.0), (1.0, 2.0), (3.0, 4.0)];
        let runs = clip_polyline(&pts, 0.0, 2.0);
        assert_eq!(runs, vec![vec![(0.0, 1.0), (1.0, 2.0), (2.0, 3.0)]]);
    }

    #[test]
    fn test_clip_leave_and_reenter() {
        let pts = [(1.0, 0.0), (3.0, 0.0), (1.0, 1.0)];
        let runs = clip_polyline(&pts, 0.0, 2.0);
        assert_eq!(
            runs,
            vec![vec![(1.0, 0.0), (2.0, 0.0)], vec![(2.0, 0.5), (1.0, 1.0)]]
        );
    }

    #[test]
    fn test_clip_breaks_on_nan() {
        let pts = [(1.0, 1.0), (2.0, 2.0), (f64::NAN, 0.0), (3.0, 3.0), (4.0, 4.0)];
        let runs = clip_polyline(&pts, 0.0, 5.0);
        assert_eq!(
            runs,
            vec![vec![(1.0, 1.0), (2.0, 2.0)], vec![(3.0, 3.0), (4.0, 4.0)]]
        );
    }

    #[test]
    fn test_clip_outside_and_single_point() {
        assert!(clip_polyline(&[(10.0, 1.0), (11.0, 1.0)], 0.0, 5.0).is_empty());
        assert!(clip_polyline(&[(1.0, 1.0)], 0.0, 5.0).is_empty());
    }
}
