//! # 直方图序列数据模型
//!
//! 一个 `histo-<label>.dat` 文件对应一个序列：半径、平均值、标准差三列按行对齐。
//!
//! ## 依赖关系
//! - 被 `parsers/histo.rs` 构建
//! - 被 `plot/` 和 `commands/` 使用

/// 一条带误差棒的序列
#[derive(Debug, Clone, PartialEq, Default)]
pub struct Series {
    /// 图例标签（由文件名推导）
    pub label: String,
    /// 半径 (Å)，保持文件中的行顺序
    pub radius: Vec<f64>,
    /// 该半径处序参量的平均值
    pub value: Vec<f64>,
    /// 标准差，用作对称误差棒
    pub stddev: Vec<f64>,
}

impl Series {
    pub fn new(label: impl Into<String>) -> Self {
        Series {
            label: label.into(),
            ..Default::default()
        }
    }

    /// 追加一行数据
    pub fn push(&mut self, radius: f64, value: f64, stddev: f64) {
        self.radius.push(radius);
        self.value.push(value);
        self.stddev.push(stddev);
    }

    /// 数据点数
    pub fn len(&self) -> usize {
        self.radius.len()
    }

    pub fn is_empty(&self) -> bool {
        self.radius.is_empty()
    }

    /// 按行迭代 `(radius, value, stddev)`
    pub fn points(&self) -> impl Iterator<Item = (f64, f64, f64)> + '_ {
        self.radius
            .iter()
            .zip(&self.value)
            .zip(&self.stddev)
            .map(|((r, v), s)| (*r, *v, *s))
    }

    /// 有限半径值的范围
    pub fn radius_range(&self) -> Option<(f64, f64)> {
        let finite: Vec<f64> = self.radius.iter().copied().filter(|r| r.is_finite()).collect();
        if finite.is_empty() {
            return None;
        }
        let min = finite.iter().copied().fold(f64::INFINITY, f64::min);
        let max = finite.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some((min, max))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_push_keeps_columns_aligned() {
        let mut series = Series::new("Q6");
        series.push(1.0, 2.0, 0.1);
        series.push(2.0, 3.0, 0.2);

        assert_eq!(series.len(), 2);
        assert_eq!(series.radius.len(), series.value.len());
        assert_eq!(series.value.len(), series.stddev.len());

        let points: Vec<_> = series.points().collect();
        assert_eq!(points, vec![(1.0, 2.0, 0.1), (2.0, 3.0, 0.2)]);
    }

    #[test]
    fn test_radius_range_ignores_order_and_nan() {
        let mut series = Series::new("W6");
        series.push(3.0, 0.0, 0.0);
        series.push(f64::NAN, 0.0, 0.0);
        series.push(0.5, 0.0, 0.0);
        assert_eq!(series.radius_range(), Some((0.5, 3.0)));
        assert_eq!(Series::new("empty").radius_range(), None);
    }
}
