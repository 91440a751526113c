//! # ASCII 折叠器
//!
//! 将任意 Unicode 字符映射为最接近的 ASCII 表示（可能是多个字符，如 `ß` → `ss`）。
//! 转写引擎只在覆盖规则未命中时调用折叠器。
//!
//! ## 依赖关系
//! - 被 `translit/engine.rs` 使用
//! - 使用 `deunicode` crate 提供的码表

/// 码表中没有条目的字符输出此占位符
pub const UNKNOWN_REPLACEMENT: &str = "[?]";

/// 字符折叠接口
pub trait Fold: Send + Sync {
    /// 将单个字符的折叠结果追加到 `out`
    fn fold_into(&self, c: char, out: &mut String);
}

/// 基于 `deunicode` 的默认折叠器
#[derive(Debug, Clone, Copy, Default)]
pub struct AsciiFolder;

impl Fold for AsciiFolder {
    fn fold_into(&self, c: char, out: &mut String) {
        if c.is_ascii() {
            out.push(c);
            return;
        }
        out.push_str(deunicode::deunicode_char(c).unwrap_or(UNKNOWN_REPLACEMENT));
    }
}
