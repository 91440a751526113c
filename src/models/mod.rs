//! # 数据模型模块
//!
//! 定义覆盖规则与文件作业。
//!
//! ## 依赖关系
//! - 被 `translit/`, `batch/` 和 `commands/` 使用
//! - 子模块: profile, job

pub mod job;
pub mod profile;

pub use job::{FileJob, JobState};
pub use profile::OverrideProfile;
