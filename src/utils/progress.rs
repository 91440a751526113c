//! # 进度条工具
//!
//! 封装 `indicatif` 提供统一的进度条样式。
//! 每个文件作业一个按字节推进的进度条，统一挂在 `MultiProgress` 下。
//!
//! ## 依赖关系
//! - 被 `batch/runner.rs` 使用
//! - 使用 `indicatif` crate

use indicatif::{MultiProgress, ProgressBar, ProgressDrawTarget, ProgressStyle};

/// 创建进度条容器；未启用时不绘制
pub fn create_multi_progress(enabled: bool) -> MultiProgress {
    if enabled {
        MultiProgress::new()
    } else {
        MultiProgress::with_draw_target(ProgressDrawTarget::hidden())
    }
}

/// 创建按字节计量的文件进度条
pub fn create_bytes_bar(len: u64, message: &str) -> ProgressBar {
    let pb = ProgressBar::new(len);
    let style = ProgressStyle::with_template(
        "{spinner:.green} [{elapsed_precise}] [{bar:40.cyan/blue}] {bytes}/{total_bytes} ({bytes_per_sec}) {msg}",
    )
    .unwrap_or_else(|_| ProgressStyle::default_bar())
    .progress_chars("#>-");
    pb.set_style(style);
    pb.set_message(message.to_string());
    pb
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_hidden_multi_still_tracks_position() {
        let multi = create_multi_progress(false);
        let pb = multi.add(create_bytes_bar(100, "file.txt"));
        pb.inc(40);
        assert_eq!(pb.position(), 40);
        assert_eq!(pb.length(), Some(100));
    }
}
