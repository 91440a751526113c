//! # 转写引擎
//!
//! 按行流式转写：先查覆盖规则，未命中再交给折叠器。
//!
//! ## 约定
//! - 每次读取以单个 `\n` 分隔的一行，行内容包含结尾的 `\n`
//! - 每行转写后立即写出，不缓存整个文件
//! - 流末尾没有 `\n` 的残行同样被转写写出
//! - 写端只在最后一次写入后 flush 一次
//! - 非 EOF 的读错误与任何写错误立即中止，不重试
//! - 行与行之间无状态
//!
//! 非法 UTF-8 字节按 U+FFFD 处理后再折叠。
//!
//! ## 依赖关系
//! - 使用 `models/profile.rs`, `translit/folder.rs`
//! - 被 `commands/transliterate.rs` 与 `batch/runner.rs` 调用

use super::folder::{AsciiFolder, Fold};
use crate::error::StreamError;
use crate::models::OverrideProfile;

use std::io::{BufRead, Write};

/// 转写引擎
#[derive(Debug, Clone)]
pub struct Transliterator<F = AsciiFolder> {
    profile: OverrideProfile,
    folder: F,
}

impl Transliterator<AsciiFolder> {
    /// 使用默认折叠器创建
    pub fn new(profile: OverrideProfile) -> Self {
        Self::with_folder(profile, AsciiFolder)
    }
}

impl<F: Fold> Transliterator<F> {
    /// 使用自定义折叠器创建
    pub fn with_folder(profile: OverrideProfile, folder: F) -> Self {
        Self { profile, folder }
    }

    /// 转写单行
    pub fn transform_line(&self, line: &str) -> String {
        let mut out = String::with_capacity(line.len());
        for c in line.chars() {
            match self.profile.lookup(c) {
                Some(replacement) => out.push_str(replacement),
                None => self.folder.fold_into(c, &mut out),
            }
        }
        out
    }

    /// 流式处理 `reader` → `writer`，返回处理的行数
    pub fn process<R, W>(&self, mut reader: R, mut writer: W) -> Result<u64, StreamError>
    where
        R: BufRead,
        W: Write,
    {
        let mut buf = Vec::new();
        let mut lines = 0u64;

        loop {
            buf.clear();
            let n = reader
                .read_until(b'\n', &mut buf)
                .map_err(StreamError::Read)?;
            if n == 0 {
                break;
            }

            let line = String::from_utf8_lossy(&buf);
            let cleaned = self.transform_line(&line);
            writer
                .write_all(cleaned.as_bytes())
                .map_err(StreamError::Write)?;
            lines += 1;

            // 残行即最后一行
            if buf.last() != Some(&b'\n') {
                break;
            }
        }

        writer.flush().map_err(StreamError::Write)?;
        tracing::trace!(lines, profile = self.profile.name(), "stream flushed");
        Ok(lines)
    }
}
