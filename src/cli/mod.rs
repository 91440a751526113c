//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数。
//!
//! ## 命令结构
//! `tls [OPTIONS] [FILES]...`
//! - 无文件参数：标准输入 → 标准输出
//! - 有文件参数：每个文件输出为 `<name>-transliterated<.ext>`
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: transliterate

pub mod transliterate;

use clap::Parser;
use std::path::PathBuf;

pub use transliterate::{ProfileKind, TransliterateArgs};

/// tls - 转写为 ASCII，保留 æøå§
#[derive(Parser, Debug)]
#[command(name = "tls")]
#[command(version)]
#[command(
    about = "Transliterates text to ASCII while preserving æøå§",
    long_about = "Transliterates stdin to ASCII, preserving æøå§, and writes the result to stdout.\n\
                  Given files, each one is transliterated concurrently into <name>-transliterated<.ext>."
)]
pub struct Cli {
    #[command(flatten)]
    pub args: TransliterateArgs,

    /// Configuration file (default: ~/.tls.toml)
    #[arg(short, long, value_name = "FILE", env = "TLS_CONFIG")]
    pub config: Option<PathBuf>,

    /// Increase log verbosity (-v, -vv, -vvv)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,
}
