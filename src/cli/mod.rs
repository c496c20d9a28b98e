//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 参数
//! - `-d/--directorio`: 工作目录（扫描 `histo-*.dat`）
//! - `-min/--minimo`: 半径下限 (Å)
//! - `-max/--maximo`: 半径上限 (Å)
//! - `-p/--parametro`: 序参量 (Q4, Q6, W4, W6)
//!
//! `clap` 的短选项只能是单个字符，因此 `-min`/`-max` 在解析前由
//! [`normalize_args`] 改写为对应的长选项。
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 参数传递给 `models/config.rs` 校验

use clap::{Parser, ValueEnum};
use std::ffi::OsString;
use std::path::PathBuf;

/// 单短横线多字母选项与其长选项的对应关系
const SINGLE_DASH_ALIASES: &[(&str, &str)] = &[("-min", "--minimo"), ("-max", "--maximo")];

/// histoplot - 序参量径向直方图对比绘图
#[derive(Parser, Debug)]
#[command(name = "histoplot")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Plot the mean order parameter as a function of the distance to a protein",
    long_about = None
)]
#[command(infer_long_args = true)]
#[command(after_help = "Examples:
  histoplot --directorio datos/ --minimo 0.5 --maximo 15.0 --parametro Q4
  histoplot -d resultados/ -min 1.0 -max 10.0 -p W6
  histoplot                      # all defaults")]
pub struct Cli {
    /// Working directory containing the histo-<label>.dat files
    #[arg(short = 'd', long = "directorio", default_value = ".")]
    pub directory: PathBuf,

    /// Lower radius limit in Å (also accepted as -min)
    #[arg(
        long = "minimo",
        value_name = "MIN",
        default_value_t = 0.0,
        allow_negative_numbers = true
    )]
    pub min: f64,

    /// Upper radius limit in Å (also accepted as -max)
    #[arg(
        long = "maximo",
        value_name = "MAX",
        default_value_t = 25.0,
        allow_negative_numbers = true
    )]
    pub max: f64,

    /// Order parameter shown on the vertical axis
    #[arg(short = 'p', long = "parametro", value_enum, default_value_t = OrderParameter::Q6)]
    pub parameter: OrderParameter,
}

/// 序参量类型
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum OrderParameter {
    /// Steinhardt q4
    #[value(name = "Q4")]
    Q4,
    /// Steinhardt q6
    #[default]
    #[value(name = "Q6")]
    Q6,
    /// Third-order invariant w4
    #[value(name = "W4")]
    W4,
    /// Third-order invariant w6
    #[value(name = "W6")]
    W6,
}

impl std::fmt::Display for OrderParameter {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            OrderParameter::Q4 => write!(f, "Q4"),
            OrderParameter::Q6 => write!(f, "Q6"),
            OrderParameter::W4 => write!(f, "W4"),
            OrderParameter::W6 => write!(f, "W6"),
        }
    }
}

/// 将 `-min`/`-max`（以及 `-min=值` 形式）改写为长选项
///
/// 第一个参数（程序名）原样保留；`--` 之后的参数不再改写。
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    let mut out = Vec::new();
    let mut passthrough = false;

    for (i, arg) in args.into_iter().enumerate() {
        let arg: OsString = arg.into();
        if i == 0 || passthrough {
            out.push(arg);
            continue;
        }

        let rewritten = arg.to_str().and_then(rewrite_single_dash);
        match rewritten {
            Some(long) => out.push(OsString::from(long)),
            None => {
                if arg.to_str() == Some("--") {
                    passthrough = true;
                }
                out.push(arg);
            }
        }
    }

    out
}

/// 改写单个参数，不需要改写时返回 `None`
fn rewrite_single_dash(arg: &str) -> Option<String> {
    for (short, long) in SINGLE_DASH_ALIASES {
        if arg == *short {
            return Some((*long).to_string());
        }
        if let Some(value) = arg.strip_prefix(short).and_then(|r| r.strip_prefix('=')) {
            return Some(format!("{}={}", long, value));
        }
    }
    None
}

/// 从进程参数解析 CLI
pub fn parse() -> Cli {
    Cli::parse_from(normalize_args(std::env::args_os()))
}
