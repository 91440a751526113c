//! # 配置模块
//!
//! 合并顺序（后者优先）：
//! 1. 内置默认值
//! 2. 配置文件：`--config FILE`，否则 `~/.tls.toml`（不存在时忽略）
//! 3. `TLS_` 前缀的环境变量，如 `TLS_OUTPUT_DIR`, `TLS_PROGRESS`
//! 4. 命令行显式给出的选项
//!
//! ```toml
//! output_dir = "/tmp/translit"
//! progress = true
//! jobs = 8
//! profile = "danish"
//! keep = "üß"
//! ```
//!
//! ## 依赖关系
//! - 被 `commands/transliterate.rs` 使用
//! - 使用 `figment`, `dirs`

use crate::batch::RunConfig;
use crate::cli::{ProfileKind, TransliterateArgs};
use crate::error::Result;

use figment::providers::{Env, Format, Serialized, Toml};
use figment::Figment;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// 默认配置文件名（位于用户主目录）
pub const CONFIG_FILE_NAME: &str = ".tls.toml";

/// 环境变量前缀
pub const ENV_PREFIX: &str = "TLS_";

/// 持久化设置
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Settings {
    pub output_dir: Option<PathBuf>,
    pub progress: bool,
    pub jobs: usize,
    pub profile: ProfileKind,
    pub keep: String,
}

impl Settings {
    /// 读取配置文件与环境变量
    pub fn load(config: Option<&Path>) -> Result<Self> {
        let settings = Self::figment(config).extract()?;
        tracing::debug!(?settings, "loaded settings");
        Ok(settings)
    }

    fn figment(config: Option<&Path>) -> Figment {
        let mut figment = Figment::from(Serialized::defaults(Settings::default()));

        let file = config.map(Path::to_path_buf).or_else(default_config_path);
        if let Some(path) = file {
            tracing::debug!(path = %path.display(), "config file");
            figment = figment.merge(Toml::file(path));
        }

        figment.merge(Env::prefixed(ENV_PREFIX))
    }

    /// 叠加命令行选项
    pub fn apply_args(mut self, args: &TransliterateArgs) -> Self {
        if let Some(dir) = &args.output_dir {
            self.output_dir = Some(dir.clone());
        }
        if args.progress {
            self.progress = true;
        } else if args.no_progress {
            self.progress = false;
        }
        if let Some(jobs) = args.jobs {
            self.jobs = jobs;
        }
        if let Some(profile) = args.profile {
            self.profile = profile;
        }
        if let Some(keep) = &args.keep {
            self.keep = keep.clone();
        }
        self
    }

    /// 转换为调度器配置
    pub fn into_run_config(self) -> RunConfig {
        RunConfig {
            output_dir: self.output_dir.filter(|d| !d.as_os_str().is_empty()),
            progress: self.progress,
            jobs: self.jobs,
            profile: self.profile.build().with_kept(&self.keep),
        }
    }
}

fn default_config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|home| home.join(CONFIG_FILE_NAME))
}
