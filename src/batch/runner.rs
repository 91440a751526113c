//! # 并发文件调度器
//!
//! 校验文件列表、解析输出路径、为每个文件启动一个独立的处理单元，
//! 并在所有单元结束后汇总统计。
//!
//! ## 功能
//! - 全有或全无的参数校验（最多 512 个文件，且必须全部存在）
//! - 基于 rayon 线程池的并行处理，线程数不超过文件上限
//! - 首错胜出：第一个失败的单元置位取消标志并记录错误，
//!   未开始的单元跳过，运行中的单元在下一次读取时停止
//! - 失败单元的残留输出文件会被删除
//! - 单元失败不丢弃作业列表：`RunReport::error` 保存首个错误，
//!   各作业的最终状态仍可用于汇总表
//! - 输出路径重复或与其他作业的输入相同时发出警告
//!
//! ## 依赖关系
//! - 被 `commands/transliterate.rs` 调用
//! - 使用 `batch/paths.rs`, `batch/stats.rs`
//! - 使用 `translit/engine.rs`, `utils/reader.rs`, `utils/progress.rs`

use super::paths;
use super::stats::{RunStats, StatsSummary};
use crate::error::{Result, TlsError};
use crate::models::{FileJob, OverrideProfile};
use crate::translit::Transliterator;
use crate::utils::progress;
use crate::utils::reader::CountingReader;

use indicatif::{MultiProgress, ProgressBar};
use rayon::prelude::*;
use std::collections::HashSet;
use std::fs::{self, File};
use std::io::{BufReader, BufWriter};
use std::path::{Path, PathBuf};
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Mutex, PoisonError};

/// 单次运行允许的最大文件数
pub const MAX_FILES: usize = 512;

/// 运行配置：由 CLI 与配置文件合并而来
#[derive(Debug, Clone)]
pub struct RunConfig {
    /// 输出目录；`None` 时输出到输入文件旁边
    pub output_dir: Option<PathBuf>,
    /// 是否显示进度与统计
    pub progress: bool,
    /// 并行作业数（0 = 自动）
    pub jobs: usize,
    /// 覆盖规则
    pub profile: OverrideProfile,
}

impl Default for RunConfig {
    fn default() -> Self {
        Self {
            output_dir: None,
            progress: false,
            jobs: 0,
            profile: OverrideProfile::danish(),
        }
    }
}

/// 运行结果
#[derive(Debug)]
pub struct RunReport {
    pub jobs: Vec<FileJob>,
    pub stats: StatsSummary,
    /// 首个失败单元的错误
    pub error: Option<TlsError>,
}

impl RunReport {
    /// 所有作业均成功
    pub fn is_success(&self) -> bool {
        self.error.is_none()
    }

    /// 转换为 `Result`，失败时丢弃报告
    pub fn into_result(self) -> Result<Self> {
        match self.error {
            Some(err) => Err(err),
            None => Ok(self),
        }
    }
}

/// 所有单元共享的运行状态
struct Shared<'a> {
    stats: &'a RunStats,
    cancel: &'a AtomicBool,
    first_error: &'a Mutex<Option<TlsError>>,
    multi: &'a MultiProgress,
}

impl Shared<'_> {
    /// 只保留第一个错误
    fn fail(&self, err: TlsError) {
        if self.cancel.swap(true, Ordering::SeqCst) {
            tracing::debug!(error = %err, "suppressed error after cancellation");
            return;
        }
        tracing::debug!(error = %err, "first failure, cancelling remaining jobs");
        let mut slot = self
            .first_error
            .lock()
            .unwrap_or_else(PoisonError::into_inner);
        slot.get_or_insert(err);
    }
}

/// 批量执行器
pub struct BatchRunner {
    config: RunConfig,
}

impl BatchRunner {
    /// 创建新的批量执行器
    pub fn new(config: RunConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &RunConfig {
        &self.config
    }

    /// 校验文件列表，不产生任何文件系统写入
    pub fn validate(files: &[PathBuf]) -> Result<()> {
        if files.len() > MAX_FILES {
            return Err(TlsError::TooManyFiles {
                count: files.len(),
                limit: MAX_FILES,
            });
        }

        for file in files {
            if !file.exists() {
                return Err(TlsError::FileNotFound {
                    path: file.display().to_string(),
                });
            }
        }

        Ok(())
    }

    /// 为每个输入创建作业并解析输出路径
    pub fn plan(&self, files: &[PathBuf]) -> Result<Vec<FileJob>> {
        let output_dir = self.config.output_dir.as_deref();

        let jobs = files
            .iter()
            .map(|input| {
                let output = paths::resolve_output_path(input, output_dir)?;
                let size = fs::metadata(input).map(|m| m.len()).unwrap_or(0);
                tracing::debug!(input = %input.display(), output = %output.display(), size, "planned job");
                Ok(FileJob::new(input.clone(), output, size))
            })
            .collect::<Result<Vec<_>>>()?;

        for path in output_collisions(&jobs) {
            tracing::warn!(
                output = %path.display(),
                "output path is shared with another job; results may be overwritten"
            );
        }

        Ok(jobs)
    }

    /// 线程数：0 表示每个文件一个线程；不超过作业数与文件上限
    fn worker_count(&self, job_count: usize) -> usize {
        let jobs = if self.config.jobs == 0 {
            MAX_FILES
        } else {
            self.config.jobs
        };
        jobs.min(job_count).clamp(1, MAX_FILES)
    }

    /// 校验、规划并并行处理所有文件
    pub fn run(&self, files: &[PathBuf]) -> Result<RunReport> {
        Self::validate(files)?;
        let mut jobs = self.plan(files)?;

        let stats = RunStats::new();
        let cancel = AtomicBool::new(false);
        let first_error = Mutex::new(None);
        let multi = progress::create_multi_progress(self.config.progress);

        let workers = self.worker_count(jobs.len());
        tracing::debug!(jobs = jobs.len(), workers, "starting worker pool");

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(workers)
            .build()
            .map_err(|e| TlsError::ThreadPool(e.to_string()))?;

        let shared = Shared {
            stats: &stats,
            cancel: &cancel,
            first_error: &first_error,
            multi: &multi,
        };

        pool.install(|| {
            jobs.par_iter_mut().for_each(|job| self.run_unit(job, &shared));
        });
        debug_assert!(jobs.iter().all(FileJob::is_finished));

        let error = first_error
            .into_inner()
            .unwrap_or_else(PoisonError::into_inner);

        Ok(RunReport {
            jobs,
            stats: stats.snapshot(),
            error,
        })
    }

    /// 单个处理单元
    fn run_unit(&self, job: &mut FileJob, shared: &Shared<'_>) {
        if shared.cancel.load(Ordering::SeqCst) {
            job.skip();
            return;
        }

        job.start();
        let name = job
            .input
            .file_name()
            .map(|n| n.to_string_lossy().to_string())
            .unwrap_or_else(|| job.input_display());
        let bar = shared
            .multi
            .add(progress::create_bytes_bar(job.size, &name));

        match self.transliterate_file(job, shared, bar.clone()) {
            Ok(()) => {
                job.finish(true);
                bar.finish_and_clear();
                tracing::debug!(input = %job.input.display(), bytes = job.bytes_read, "job done");
            }
            Err(err) => {
                job.finish(false);
                bar.abandon();
                shared.fail(err);
            }
        }
    }

    /// 打开输入、创建输出并驱动转写引擎
    fn transliterate_file(
        &self,
        job: &mut FileJob,
        shared: &Shared<'_>,
        bar: ProgressBar,
    ) -> Result<()> {
        let input_path = job.input_display();
        let output_path = job.output.display().to_string();

        let input = File::open(&job.input).map_err(|e| TlsError::FileOpenError {
            path: input_path.clone(),
            source: e,
        })?;

        let output = File::create(&job.output).map_err(|e| TlsError::FileCreateError {
            path: output_path.clone(),
            source: e,
        })?;

        let engine = Transliterator::new(self.config.profile.clone());
        let mut reader = BufReader::new(CountingReader::new(
            input,
            shared.stats,
            bar,
            shared.cancel,
        ));

        let result = engine.process(&mut reader, BufWriter::new(output));
        job.bytes_read = reader.get_ref().bytes_read();

        match result {
            Ok(lines) => {
                tracing::trace!(input = %input_path, lines, "stream finished");
                Ok(())
            }
            Err(err) => {
                // 残留输出不保留
                if let Err(e) = fs::remove_file(&job.output) {
                    tracing::warn!(output = %output_path, error = %e, "failed to remove partial output");
                }
                Err(err.with_paths(&input_path, &output_path))
            }
        }
    }
}

/// 比较用的绝对路径；失败时退回原路径
fn comparable(path: &Path) -> PathBuf {
    std::path::absolute(path).unwrap_or_else(|_| path.to_path_buf())
}

/// 找出重复的输出路径，以及与某个作业输入相同的输出路径
fn output_collisions(jobs: &[FileJob]) -> Vec<&Path> {
    let inputs: HashSet<PathBuf> = jobs.iter().map(|j| comparable(&j.input)).collect();
    let mut outputs = HashSet::new();

    jobs.iter()
        .filter(|job| {
            let output = comparable(&job.output);
            let is_input = inputs.contains(&output);
            !outputs.insert(output) || is_input
        })
        .map(|job| job.output.as_path())
        .collect()
}
