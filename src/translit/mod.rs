//! # 转写模块
//!
//! 覆盖规则优先、ASCII 折叠兜底的按行转写。
//!
//! ## 依赖关系
//! - 被 `commands/` 与 `batch/` 使用
//! - 子模块: folder, engine

pub mod engine;
pub mod folder;

pub use engine::Transliterator;
