//! # 命令执行模块
//!
//! 串联整个流程：校验配置 → 收集文件 → 加载序列 → 绘图。
//!
//! 配置错误（目录不存在、半径范围非法）只打印提示并正常返回；
//! 数据错误和绘图错误向上传播。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `models/`, `collector.rs`, `parsers/`, `plot/`, `utils/`

use crate::cli::Cli;
use crate::collector::HistoCollector;
use crate::error::Result;
use crate::models::{Config, Series};
use crate::parsers;
use crate::plot;
use crate::utils::output;

use std::path::Path;
use tabled::{Table, Tabled};

/// 序列汇总表行
#[derive(Debug, Clone, Tabled)]
struct SeriesRow {
    #[tabled(rename = "Label")]
    label: String,
    #[tabled(rename = "Rows")]
    rows: usize,
    #[tabled(rename = "r range (Å)")]
    radius: String,
}

/// 执行绘图，输出写到当前目录下的 `comp-histos.pdf`
pub fn run(cli: Cli) -> Result<()> {
    execute(cli, Path::new(plot::OUTPUT_FILE))
}

/// 执行绘图，输出写到 `output_path`
pub fn execute(cli: Cli, output_path: &Path) -> Result<()> {
    let config = match Config::resolve(cli) {
        Ok(config) => config,
        Err(e) if e.is_config_error() => {
            output::print_rejected(&e.to_string());
            return Ok(());
        }
        Err(e) => return Err(e),
    };

    print_config(&config);

    let collector = HistoCollector::new(&config.directory);
    let files = collector.collect()?;

    if files.is_empty() {
        output::print_warning(&format!(
            "No files matching '{}' in '{}'",
            collector.pattern(),
            config.directory.display()
        ));
    } else {
        output::print_info(&format!("Found {} histogram files", files.len()));
        for file in &files {
            println!("    {}", file.display());
        }
    }

    let series = parsers::load_all(&files)?;

    if !series.is_empty() {
        print_summary(&series);
    }

    plot::render_histograms(&series, &config, output_path)?;
    output::print_success(&format!("Figure saved to '{}'", output_path.display()));

    Ok(())
}

/// 回显配置
fn print_config(config: &Config) {
    output::print_header("Configuration");
    output::print_field("Working directory", &config.directory.display().to_string());
    output::print_field("Minimum radius", &config.min_radius.to_string());
    output::print_field("Maximum radius", &config.max_radius.to_string());
    output::print_field("Order parameter", &config.parameter.to_string());
    println!();
    output::print_info(&format!(
        "Plotting {} over [{}, {}]",
        config.parameter, config.min_radius, config.max_radius
    ));
}

/// 打印已加载序列的汇总表
fn print_summary(series: &[Series]) {
    let rows: Vec<SeriesRow> = series
        .iter()
        .map(|s| SeriesRow {
            label: s.label.clone(),
            rows: s.len(),
            radius: if s.is_empty() {
                "-".to_string()
            } else {
                s.radius_range()
                    .map(|(lo, hi)| format!("{:.3} – {:.3}", lo, hi))
                    .unwrap_or_else(|| "-".to_string())
            },
        })
        .collect();

    output::print_separator();
    println!("{}", Table::new(&rows));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::cli::OrderParameter;
    use crate::error::HistoError;
    use std::fs;
    use std::path::PathBuf;
    use tempfile::TempDir;

    fn cli(directory: PathBuf, min: f64, max: f64) -> Cli {
        Cli {
            directory,
            min,
            max,
            parameter: OrderParameter::Q6,
        }
    }

    #[test]
    fn test_missing_directory_is_graceful() {
        let out = TempDir::new().unwrap();
        let output = out.path().join(plot::OUTPUT_FILE);

        let result = execute(cli(out.path().join("missing"), 0.0, 25.0), &output);
        assert!(result.is_ok());
        assert!(!output.exists());
    }

    #[test]
    fn test_equal_bounds_is_graceful() {
        let dir = TempDir::new().unwrap();
        let output = dir.path().join(plot::OUTPUT_FILE);

        let result = execute(cli(dir.path().to_path_buf(), 5.0, 5.0), &output);
        assert!(result.is_ok());
        assert!(!output.exists());
    }

    #[test]
    fn test_malformed_data_aborts_before_plotting() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("histo-Q4.dat"), "1.0 0.4 0.01\n").unwrap();
        fs::write(dir.path().join("histo-Q6.dat"), "1.0 x 0.01\n").unwrap();
        let output = dir.path().join(plot::OUTPUT_FILE);

        let result = execute(cli(dir.path().to_path_buf(), 0.0, 25.0), &output);
        assert!(matches!(result, Err(HistoError::ParseError { .. })));
        assert!(!output.exists());
    }

    #[test]
    fn test_empty_directory_still_writes_figure() {
        let dir = TempDir::new().unwrap();
        let out = TempDir::new().unwrap();
        let output = out.path().join(plot::OUTPUT_FILE);

        execute(cli(dir.path().to_path_buf(), 0.0, 25.0), &output).unwrap();

        let pdf = fs::read(&output).unwrap();
        assert!(pdf.starts_with(b"%PDF"));
    }

    #[test]
    fn test_legend_follows_discovery_order() {
        let dir = TempDir::new().unwrap();
        fs::write(dir.path().join("histo-Q6.dat"), "1.0 0.6 0.02\n2.0 0.7 0.03\n").unwrap();
        fs::write(dir.path().join("histo-Q4.dat"), "1.0 0.4 0.01\n2.0 0.5 0.02\n").unwrap();

        let config = Config::resolve(cli(dir.path().to_path_buf(), 0.0, 25.0)).unwrap();
        let files = HistoCollector::new(&config.directory).collect().unwrap();
        let series = parsers::load_all(&files).unwrap();
        let svg = plot::render_svg(&series, &config).unwrap();

        // 纵轴标题 "Valor medio Q6" 也包含 Q6，这里只匹配图例文字
        let q4 = svg.find("\nQ4\n").expect("Q4 legend entry");
        let q6 = svg.find("\nQ6\n").expect("Q6 legend entry");
        assert!(q4 < q6);
        assert!(svg.contains("serif"));
        assert!(!svg.contains("sans-serif"));

        let out = TempDir::new().unwrap();
        let output = out.path().join(plot::OUTPUT_FILE);
        execute(cli(dir.path().to_path_buf(), 0.0, 25.0), &output).unwrap();
        assert!(fs::read(&output).unwrap().starts_with(b"%PDF"));
    }
}
