//! # 覆盖规则（Override Profile）
//!
//! 码点 → 替换文本的不可变映射。命中的字符直接输出替换文本，
//! 不再经过通用 ASCII 折叠；未命中的字符交给折叠器处理。
//!
//! ## 内置规则
//! - `danish`: 保留 æ ø å Æ Ø Å 以及 §
//! - `plain`: 空映射，全部字符交给折叠器
//!
//! ## 依赖关系
//! - 被 `translit/engine.rs` 使用
//! - 被 `batch/runner.rs` 克隆给每个作业

use std::collections::HashMap;

/// 丹麦语规则中保留的字符
const DANISH_KEPT: [char; 7] = [
    '\u{00E6}', // æ
    '\u{00F8}', // ø
    '\u{00E5}', // å
    '\u{00C6}', // Æ
    '\u{00D8}', // Ø
    '\u{00C5}', // Å
    '\u{00A7}', // §
];

/// 覆盖规则
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OverrideProfile {
    /// 规则名称
    name: String,
    /// 码点 → 替换文本
    overrides: HashMap<char, String>,
}

impl OverrideProfile {
    /// 由调用方提供的映射构造
    pub fn new(name: impl Into<String>, overrides: HashMap<char, String>) -> Self {
        Self {
            name: name.into(),
            overrides,
        }
    }

    /// 丹麦语规则：七个字符映射为自身
    pub fn danish() -> Self {
        let overrides = DANISH_KEPT
            .iter()
            .map(|&c| (c, c.to_string()))
            .collect();
        Self::new("danish", overrides)
    }

    /// 空规则
    pub fn plain() -> Self {
        Self::new("plain", HashMap::new())
    }

    /// 追加额外的保留字符（映射为自身），已存在的映射不被覆盖
    pub fn with_kept(mut self, chars: &str) -> Self {
        for c in chars.chars().filter(|c| !c.is_whitespace()) {
            self.overrides.entry(c).or_insert_with(|| c.to_string());
        }
        self
    }

    /// 查找某字符的替换文本
    pub fn lookup(&self, c: char) -> Option<&str> {
        self.overrides.get(&c).map(String::as_str)
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn len(&self) -> usize {
        self.overrides.len()
    }

    pub fn is_empty(&self) -> bool {
        self.overrides.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_danish_profile_keeps_seven_chars() {
        let profile = OverrideProfile::danish();
        assert_eq!(profile.name(), "danish");
        assert_eq!(profile.len(), 7);
        for c in "æøåÆØÅ§".chars() {
            assert_eq!(profile.lookup(c), Some(c.to_string().as_str()));
        }
        assert_eq!(profile.lookup('é'), None);
    }

    #[test]
    fn test_custom_profile() {
        let mut map = HashMap::new();
        map.insert('ß', "sz".to_string());
        let profile = OverrideProfile::new("german", map);
        assert_eq!(profile.lookup('ß'), Some("sz"));
        assert_eq!(profile.lookup('ü'), None);
    }

    #[test]
    fn test_with_kept_does_not_replace_existing() {
        let mut map = HashMap::new();
        map.insert('ß', "sz".to_string());
        let profile = OverrideProfile::new("german", map).with_kept("ß ü");
        assert_eq!(profile.lookup('ß'), Some("sz"));
        assert_eq!(profile.lookup('ü'), Some("ü"));
        assert_eq!(profile.lookup(' '), None);
        assert_eq!(profile.len(), 2);
    }

    #[test]
    fn test_plain_profile_is_empty() {
        assert!(OverrideProfile::plain().is_empty());
    }
}
