//! # 统一错误处理模块
//!
//! 定义 tls 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// tls 统一错误类型
#[derive(Error, Debug)]
pub enum TlsError {
    // ─────────────────────────────────────────────────────────────
    // 参数校验错误（任何处理开始前报告）
    // ─────────────────────────────────────────────────────────────
    #[error("Too many input files: {count} given, at most {limit} allowed")]
    TooManyFiles { count: usize, limit: usize },

    #[error("Input file does not exist: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 打开 / 创建错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to open input file: {path}")]
    FileOpenError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output file: {path}")]
    FileCreateError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to create output directory: {path}")]
    DirectoryCreateError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    // ─────────────────────────────────────────────────────────────
    // 流处理错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to read standard input")]
    StdinError(#[source] std::io::Error),

    #[error("Failed to write standard output")]
    StdoutError(#[source] std::io::Error),

    // ─────────────────────────────────────────────────────────────
    // 配置与运行时
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid configuration")]
    ConfigError(#[from] figment::Error),

    #[error("Failed to build worker pool: {0}")]
    ThreadPool(String),
}

/// 转写引擎流处理错误：区分读端与写端，由调用方补充路径
#[derive(Error, Debug)]
pub enum StreamError {
    #[error("read failed")]
    Read(#[source] std::io::Error),

    #[error("write failed")]
    Write(#[source] std::io::Error),
}

impl StreamError {
    /// 附加文件路径（读错误用输入路径，写错误用输出路径），转换为统一错误
    pub fn with_paths(self, input: &str, output: &str) -> TlsError {
        match self {
            StreamError::Read(source) => TlsError::FileReadError {
                path: input.to_string(),
                source,
            },
            StreamError::Write(source) => TlsError::FileWriteError {
                path: output.to_string(),
                source,
            },
        }
    }

    /// 用于标准输入 / 标准输出模式
    pub fn into_stdio(self) -> TlsError {
        match self {
            StreamError::Read(source) => TlsError::StdinError(source),
            StreamError::Write(source) => TlsError::StdoutError(source),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, TlsError>;

#[cfg(test)]
mod tests {
    use super::*;
    use std::error::Error as _;

    #[test]
    fn test_config_error_message_is_not_repeated() {
        let err = TlsError::from(figment::Error::from("missing field `jobs`".to_string()));
        assert_eq!(err.to_string(), "Invalid configuration");
        let cause = err.source().map(|s| s.to_string()).unwrap_or_default();
        assert!(cause.contains("missing field `jobs`"));
    }

    #[test]
    fn test_stream_error_paths() {
        let read = StreamError::Read(std::io::Error::new(std::io::ErrorKind::Other, "eio"));
        match read.with_paths("in.txt", "out.txt") {
            TlsError::FileReadError { path, .. } => assert_eq!(path, "in.txt"),
            other => panic!("unexpected error: {:?}", other),
        }

        let write = StreamError::Write(std::io::Error::new(std::io::ErrorKind::Other, "enospc"));
        assert!(matches!(write.into_stdio(), TlsError::StdoutError(_)));
    }
}
