//! # 运行统计
//!
//! 多个并发作业共享的字节计数器，以及运行起始时间。
//! 计数器使用原子加法，不丢失更新；只在所有作业结束后读取。
//!
//! ## 依赖关系
//! - 被 `utils/reader.rs` 更新
//! - 被 `batch/runner.rs` 读取

use std::sync::atomic::{AtomicU64, Ordering};
use std::time::{Duration, Instant};

/// 运行统计
#[derive(Debug)]
pub struct RunStats {
    total_bytes: AtomicU64,
    started: Instant,
}

impl Default for RunStats {
    fn default() -> Self {
        Self::new()
    }
}

impl RunStats {
    pub fn new() -> Self {
        Self {
            total_bytes: AtomicU64::new(0),
            started: Instant::now(),
        }
    }

    /// 累加读取字节数
    pub fn add(&self, bytes: u64) {
        self.total_bytes.fetch_add(bytes, Ordering::Relaxed);
    }

    pub fn total_bytes(&self) -> u64 {
        self.total_bytes.load(Ordering::Relaxed)
    }

    pub fn elapsed(&self) -> Duration {
        self.started.elapsed()
    }

    /// 汇总为不可变快照
    pub fn snapshot(&self) -> StatsSummary {
        StatsSummary {
            total_bytes: self.total_bytes(),
            elapsed: self.elapsed(),
        }
    }
}

/// 统计快照
#[derive(Debug, Clone, Copy)]
pub struct StatsSummary {
    pub total_bytes: u64,
    pub elapsed: Duration,
}

impl StatsSummary {
    /// 吞吐量（字节 / 秒）；耗时为零时返回 0
    pub fn throughput(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs > 0.0 {
            self.total_bytes as f64 / secs
        } else {
            0.0
        }
    }

    /// 吞吐量（MiB / 秒）
    pub fn throughput_mib(&self) -> f64 {
        self.throughput() / (1024.0 * 1024.0)
    }
}
