//! # 转写命令实现
//!
//! ## 功能
//! - 合并配置文件、环境变量与命令行选项
//! - 无文件参数：标准输入为管道或重定向时转写到标准输出，
//!   为交互式终端时打印帮助并正常退出；
//!   空管道与重定向的普通文件同样按流处理（空输入得到空输出）
//! - 有文件参数：交给 `BatchRunner` 并发处理
//! - 启用进度时输出每个作业的汇总表与总吞吐量（写到标准错误），
//!   即使有作业失败也先输出汇总表，再返回首个错误
//!
//! ## 依赖关系
//! - 使用 `cli/transliterate.rs` 定义的参数
//! - 使用 `config.rs`, `batch/`, `translit/`
//! - 使用 `utils/output.rs`

use crate::batch::{BatchRunner, RunConfig, RunReport};
use crate::cli::Cli;
use crate::config::Settings;
use crate::error::{Result, StreamError, TlsError};
use crate::models::{FileJob, JobState};
use crate::translit::Transliterator;
use crate::utils::output;

use clap::CommandFactory;
use std::io::{self, BufRead, BufWriter, Write};
use std::path::PathBuf;
use tabled::{Table, Tabled};

/// 汇总表行
#[derive(Tabled)]
struct JobRow {
    #[tabled(rename = "Input")]
    input: String,
    #[tabled(rename = "Output")]
    output: String,
    #[tabled(rename = "Bytes")]
    bytes: u64,
    #[tabled(rename = "State")]
    state: String,
}

impl From<&FileJob> for JobRow {
    fn from(job: &FileJob) -> Self {
        JobRow {
            input: job.input_display(),
            output: job.output.display().to_string(),
            bytes: job.bytes_read,
            state: job.state.to_string(),
        }
    }
}

/// 执行转写命令
pub fn execute(cli: Cli) -> Result<()> {
    let settings = Settings::load(cli.config.as_deref())?.apply_args(&cli.args);
    let config = settings.into_run_config();
    tracing::debug!(
        profile = config.profile.name(),
        overrides = config.profile.len(),
        fold_all = config.profile.is_empty(),
        "resolved run config"
    );

    if cli.args.files.is_empty() {
        return execute_stdin(config);
    }

    execute_files(&cli.args.files, config)
}

/// 标准输入模式
fn execute_stdin(config: RunConfig) -> Result<()> {
    if atty::is(atty::Stream::Stdin) {
        tracing::debug!("stdin is a terminal, printing help");
        return Cli::command().print_help().map_err(TlsError::StdoutError);
    }

    let stdin = io::stdin();
    let stdout = io::stdout();
    stream(&config, stdin.lock(), BufWriter::new(stdout.lock()))
}

/// 单流转写，单线程
fn stream<R: BufRead, W: Write>(config: &RunConfig, reader: R, writer: W) -> Result<()> {
    let engine = Transliterator::new(config.profile.clone());
    let lines = engine
        .process(reader, writer)
        .map_err(StreamError::into_stdio)?;
    tracing::debug!(lines, "stdin transliterated");
    Ok(())
}

/// 文件模式
fn execute_files(files: &[PathBuf], config: RunConfig) -> Result<()> {
    let progress = config.progress;
    let runner = BatchRunner::new(config);

    if progress {
        output::print_header(&format!(
            "Transliterating {} file(s) with profile '{}'",
            files.len(),
            runner.config().profile.name()
        ));
    }

    let report = runner.run(files)?;

    if progress {
        print_report(&report);
    }

    report.into_result().map(|_| ())
}

/// 打印作业汇总表与吞吐量
fn print_report(report: &RunReport) {
    let rows: Vec<JobRow> = report.jobs.iter().map(JobRow::from).collect();
    eprintln!("{}", Table::new(&rows));

    output::print_info(&format!(
        "{} bytes in {:.3}s ({:.2} MiB/s)",
        report.stats.total_bytes,
        report.stats.elapsed.as_secs_f64(),
        report.stats.throughput_mib()
    ));
    let done = report
        .jobs
        .iter()
        .filter(|j| j.state == JobState::Done)
        .count();
    if report.is_success() {
        output::print_done(&format!("Transliterated {} file(s)", done));
    } else {
        output::print_info(&format!(
            "{} of {} file(s) transliterated before the first failure",
            done,
            report.jobs.len()
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::OverrideProfile;
    use std::fs;

    #[test]
    fn test_stream_mode_transliterates() {
        let config = RunConfig::default();
        let mut out = Vec::new();
        stream(&config, "Æbleskiver & crêpes\npå § 3".as_bytes(), &mut out).unwrap();
        assert_eq!(String::from_utf8(out).unwrap(), "Æbleskiver & crepes\npå § 3");
    }

    #[test]
    fn test_stream_mode_empty_input() {
        let mut out = Vec::new();
        stream(&RunConfig::default(), io::empty(), &mut out).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn test_stream_mode_plain_profile() {
        let config = RunConfig {
            profile: OverrideProfile::plain(),
            ..RunConfig::default()
        };
        let mut out = Vec::new();
        stream(&config, "Søren".as_bytes(), &mut out).unwrap();
        assert_eq!(out, b"Soren");
    }

    #[test]
    fn test_job_row() {
        let mut job = FileJob::new("in.txt".into(), "in-transliterated.txt".into(), 12);
        job.start();
        job.bytes_read = 12;
        job.finish(true);

        let row = JobRow::from(&job);
        assert_eq!(row.input, "in.txt");
        assert_eq!(row.bytes, 12);
        assert_eq!(row.state, JobState::Done.to_string());
    }

    #[test]
    fn test_execute_files_returns_first_error_after_run() {
        let tmp = tempfile::tempdir().unwrap();
        let bad = tmp.path().join("bad.d");
        fs::create_dir(&bad).unwrap();
        let good = tmp.path().join("good.txt");
        fs::write(&good, "ok\n").unwrap();

        let config = RunConfig {
            jobs: 1,
            ..RunConfig::default()
        };
        let err = execute_files(&[bad, good], config).unwrap_err();
        assert!(matches!(err, TlsError::FileReadError { .. }));
    }
}
