//! # tls - ASCII 转写工具
//!
//! 将文本中的非 ASCII 字符折叠为最接近的 ASCII 表示，
//! 同时保留覆盖规则中的字符（默认保留 æøåÆØÅ§）。
//!
//! ## 运行模式
//! - 无文件参数：标准输入 → 标准输出
//! - 文件参数：并发转写，每个文件输出为 `<name>-transliterated<.ext>`
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/        (命令行参数定义)
//!   ├── config.rs   (配置文件与环境变量)
//!   ├── commands/   (命令执行逻辑)
//!   │     ├── batch/     (并发调度、路径解析、统计)
//!   │     ├── translit/  (转写引擎与折叠器)
//!   │     └── models/    (覆盖规则、文件作业)
//!   ├── utils/      (工具函数)
//!   └── error.rs    (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod config;
mod error;
mod models;
mod translit;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    // Initialize colored output for Windows compatibility
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();
    commands::init_tracing(cli.verbose);

    if let Err(e) = commands::run(cli) {
        utils::output::print_error(&e);
        std::process::exit(1);
    }
}
