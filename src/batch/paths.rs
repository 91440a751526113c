//! # 输出路径解析
//!
//! 由输入路径与可选的输出目录计算输出文件路径：
//! `<目录>/<文件名去扩展名>-transliterated<.扩展名>`
//!
//! - 指定了输出目录：转为绝对路径，不存在则递归创建，所有输入共用
//! - 未指定：使用输入文件所在目录
//!
//! 对同一输入重复调用结果相同，目录已存在不报错。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用

use crate::error::{Result, TlsError};

use std::ffi::OsString;
use std::fs;
use std::path::{Path, PathBuf};

/// 输出文件名后缀
pub const OUTPUT_SUFFIX: &str = "-transliterated";

/// 准备输出目录：转为绝对路径并确保存在
pub fn prepare_output_dir(dir: &Path) -> Result<PathBuf> {
    let abs = std::path::absolute(dir).map_err(|e| TlsError::DirectoryCreateError {
        path: dir.display().to_string(),
        source: e,
    })?;

    fs::create_dir_all(&abs).map_err(|e| TlsError::DirectoryCreateError {
        path: abs.display().to_string(),
        source: e,
    })?;

    Ok(abs)
}

/// 计算输出文件名
pub fn output_file_name(input: &Path) -> OsString {
    let mut name = input
        .file_stem()
        .map(|s| s.to_os_string())
        .unwrap_or_default();
    name.push(OUTPUT_SUFFIX);
    if let Some(ext) = input.extension() {
        name.push(".");
        name.push(ext);
    }
    name
}

/// 解析单个输入的输出路径
///
/// `output_dir` 为空（`None` 或空路径）时输出到输入文件旁边。
pub fn resolve_output_path(input: &Path, output_dir: Option<&Path>) -> Result<PathBuf> {
    let file_name = output_file_name(input);

    match output_dir.filter(|d| !d.as_os_str().is_empty()) {
        Some(dir) => Ok(prepare_output_dir(dir)?.join(file_name)),
        None => {
            let parent = input.parent().unwrap_or_else(|| Path::new(""));
            Ok(parent.join(file_name))
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sibling_output_path() {
        let out = resolve_output_path(Path::new("a/b/report.txt"), None).unwrap();
        assert_eq!(out, PathBuf::from("a/b/report-transliterated.txt"));

        let out = resolve_output_path(Path::new("a/b/report.txt"), Some(Path::new(""))).unwrap();
        assert_eq!(out, PathBuf::from("a/b/report-transliterated.txt"));
    }

    #[test]
    fn test_no_extension() {
        let out = resolve_output_path(Path::new("notes"), None).unwrap();
        assert_eq!(out, PathBuf::from("notes-transliterated"));
    }

    #[test]
    fn test_only_last_extension_is_kept() {
        assert_eq!(
            output_file_name(Path::new("archive.tar.gz")),
            OsString::from("archive.tar-transliterated.gz")
        );
    }

    #[test]
    fn test_dotfile() {
        // 点开头的文件名没有扩展名
        assert_eq!(
            output_file_name(Path::new(".bashrc")),
            OsString::from(".bashrc-transliterated")
        );
        let out = resolve_output_path(Path::new("home/.profile.bak"), None).unwrap();
        assert_eq!(out, PathBuf::from("home/.profile-transliterated.bak"));
    }

    #[test]
    fn test_output_dir_override() {
        let tmp = tempfile::tempdir().unwrap();
        let out_dir = tmp.path().join("nested").join("out");

        let out = resolve_output_path(Path::new("a/b/report.txt"), Some(&out_dir)).unwrap();
        assert_eq!(out, out_dir.join("report-transliterated.txt"));
        assert!(out_dir.is_dir());

        // 幂等：目录已存在
        let again = resolve_output_path(Path::new("a/b/report.txt"), Some(&out_dir)).unwrap();
        assert_eq!(out, again);
    }

    #[test]
    fn test_output_dir_is_absolute() {
        let tmp = tempfile::tempdir().unwrap();
        let abs = prepare_output_dir(tmp.path()).unwrap();
        assert!(abs.is_absolute());
    }
}
