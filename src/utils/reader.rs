//! # 计数读取器
//!
//! 包装输入流，统计已读取字节并推进进度条；不改变读取到的数据。
//! 取消标志被置位后，下一次读取返回错误，使正在运行的作业尽快停止。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 更新 `batch/stats.rs` 中的计数器
//! - 使用 `indicatif` 进度条

use crate::batch::RunStats;

use indicatif::ProgressBar;
use std::io::{self, Read};
use std::sync::atomic::{AtomicBool, Ordering};

/// 取消后读取返回的错误信息
pub const CANCELLED: &str = "cancelled after another job failed";

/// 计数读取器
pub struct CountingReader<'a, R> {
    inner: R,
    stats: &'a RunStats,
    bar: ProgressBar,
    cancel: &'a AtomicBool,
    read: u64,
}

impl<'a, R: Read> CountingReader<'a, R> {
    pub fn new(inner: R, stats: &'a RunStats, bar: ProgressBar, cancel: &'a AtomicBool) -> Self {
        Self {
            inner,
            stats,
            bar,
            cancel,
            read: 0,
        }
    }

    /// 本读取器累计读取的字节数
    pub fn bytes_read(&self) -> u64 {
        self.read
    }
}

impl<R: Read> Read for CountingReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
        if self.cancel.load(Ordering::Relaxed) {
            return Err(io::Error::new(io::ErrorKind::Other, CANCELLED));
        }

        let n = self.inner.read(buf)?;
        let n64 = n as u64;
        self.read += n64;
        self.stats.add(n64);
        self.bar.inc(n64);
        Ok(n)
    }
}
