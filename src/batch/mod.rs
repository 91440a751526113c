//! # 批量处理模块
//!
//! 多文件并发转写。
//!
//! ## 功能
//! - 参数校验（文件数上限、文件存在性）
//! - 输出路径解析
//! - 并行处理与首错中止
//! - 字节统计与吞吐量
//!
//! ## 依赖关系
//! - 被 `commands/transliterate.rs` 使用
//! - 使用 `rayon` 进行并行处理
//! - 使用 `indicatif` 显示进度

pub mod paths;
pub mod runner;
pub mod stats;

pub use runner::{BatchRunner, RunConfig, RunReport};
pub use stats::RunStats;
