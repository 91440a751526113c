//! # 转写参数 CLI 定义
//!
//! 文件参数、输出目录、进度与覆盖规则选项。
//! 未在命令行给出的选项回落到配置文件与环境变量。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/transliterate.rs`

use crate::models::OverrideProfile;

use clap::{Args, ValueEnum};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;

/// 内置覆盖规则
#[derive(Debug, Clone, Copy, Default, ValueEnum, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProfileKind {
    /// Keep æ ø å Æ Ø Å § untouched
    #[default]
    Danish,
    /// Fold every non-ASCII character
    Plain,
}

impl ProfileKind {
    /// 构造对应的覆盖规则
    pub fn build(self) -> OverrideProfile {
        match self {
            ProfileKind::Danish => OverrideProfile::danish(),
            ProfileKind::Plain => OverrideProfile::plain(),
        }
    }
}

impl std::fmt::Display for ProfileKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ProfileKind::Danish => write!(f, "danish"),
            ProfileKind::Plain => write!(f, "plain"),
        }
    }
}

/// 转写参数
#[derive(Args, Debug, Default)]
pub struct TransliterateArgs {
    /// Input files; reads stdin when none are given
    pub files: Vec<PathBuf>,

    /// Output directory (default: next to each input file)
    #[arg(short, long, value_name = "DIR")]
    pub output_dir: Option<PathBuf>,

    /// Show progress bars and throughput statistics
    #[arg(short, long, default_value_t = false, overrides_with = "no_progress")]
    pub progress: bool,

    /// Disable progress even if enabled by the config file or environment
    #[arg(long, default_value_t = false, overrides_with = "progress")]
    pub no_progress: bool,

    /// Number of parallel jobs (0 = one per file, at most 512)
    #[arg(short, long)]
    pub jobs: Option<usize>,

    /// Built-in override profile
    #[arg(long, value_enum)]
    pub profile: Option<ProfileKind>,

    /// Extra characters to keep untouched, e.g. "üß"
    #[arg(short, long, value_name = "CHARS")]
    pub keep: Option<String>,
}
