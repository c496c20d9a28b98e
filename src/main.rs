//! # histoplot - 序参量径向直方图对比绘图
//!
//! 读取工作目录中的 `histo-<label>.dat` 文件（半径、平均序参量、标准差三列），
//! 将所有序列叠加为带误差棒的折线图，保存为当前目录下的 `comp-histos.pdf`。
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── commands/   (流程编排)
//!   │     ├── collector.rs (文件收集)
//!   │     ├── parsers/     (.dat 解析)
//!   │     ├── models/      (配置与序列)
//!   │     └── plot/        (绘图与 PDF 输出)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod cli;
mod collector;
mod commands;
mod error;
mod models;
mod parsers;
mod plot;
mod utils;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = cli::parse();

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
