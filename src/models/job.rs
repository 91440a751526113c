//! # 文件作业（File Job）
//!
//! 一个输入文件 → 一个输出文件的处理任务。
//!
//! ## 状态机
//! ```text
//! Pending ──> Running ──> Done
//!                └──────> Failed
//! ```
//! `Skipped` 表示某个作业失败后，尚未开始的作业被放弃。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 创建与更新

use std::fmt;
use std::path::PathBuf;

/// 作业状态
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum JobState {
    Pending,
    Running,
    Done,
    Failed,
    Skipped,
}

impl fmt::Display for JobState {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            JobState::Pending => write!(f, "pending"),
            JobState::Running => write!(f, "running"),
            JobState::Done => write!(f, "done"),
            JobState::Failed => write!(f, "failed"),
            JobState::Skipped => write!(f, "skipped"),
        }
    }
}

/// 文件作业
#[derive(Debug, Clone)]
pub struct FileJob {
    /// 输入文件路径
    pub input: PathBuf,
    /// 解析后的输出文件路径
    pub output: PathBuf,
    /// 输入文件大小（字节），用于进度条长度
    pub size: u64,
    /// 已读取字节数
    pub bytes_read: u64,
    /// 当前状态
    pub state: JobState,
}

impl FileJob {
    pub fn new(input: PathBuf, output: PathBuf, size: u64) -> Self {
        Self {
            input,
            output,
            size,
            bytes_read: 0,
            state: JobState::Pending,
        }
    }

    /// 进入运行状态
    pub fn start(&mut self) {
        debug_assert_eq!(self.state, JobState::Pending);
        self.state = JobState::Running;
    }

    /// 运行结束
    pub fn finish(&mut self, ok: bool) {
        debug_assert_eq!(self.state, JobState::Running);
        self.state = if ok { JobState::Done } else { JobState::Failed };
    }

    /// 未开始即被放弃
    pub fn skip(&mut self) {
        debug_assert_eq!(self.state, JobState::Pending);
        self.state = JobState::Skipped;
    }

    pub fn is_finished(&self) -> bool {
        matches!(
            self.state,
            JobState::Done | JobState::Failed | JobState::Skipped
        )
    }

    /// 用于日志与报告的输入路径
    pub fn input_display(&self) -> String {
        self.input.display().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_job_lifecycle_success() {
        let mut job = FileJob::new("a.txt".into(), "a-transliterated.txt".into(), 10);
        assert_eq!(job.state, JobState::Pending);
        assert!(!job.is_finished());

        job.start();
        assert_eq!(job.state, JobState::Running);

        job.finish(true);
        assert_eq!(job.state, JobState::Done);
        assert!(job.is_finished());
    }

    #[test]
    fn test_job_lifecycle_failure() {
        let mut job = FileJob::new("a.txt".into(), "a-transliterated.txt".into(), 10);
        job.start();
        job.finish(false);
        assert_eq!(job.state, JobState::Failed);
        assert_eq!(job.state.to_string(), "failed");
    }

    #[test]
    fn test_job_skip() {
        let mut job = FileJob::new("a.txt".into(), "a-transliterated.txt".into(), 10);
        job.skip();
        assert!(job.is_finished());
    }
}
