use std::env;
use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;

use crate::error::Result;

pub const ACCESS_TOKEN_ENV_VAR: &str = "DAYPICK_ACCESS_TOKEN";
pub const DEFAULT_API_BASE: &str = "https://www.googleapis.com/calendar/v3";
const DEFAULT_LOG_LEVEL: &str = "warn";

/// 配置文件结构 (config.toml)，所有字段均可省略
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    pub default_calendar: Option<String>,
    pub default_event_name: Option<String>,
    pub access_token: Option<String>,
    pub api_base: Option<String>,
    pub log_level: Option<String>,
}

impl Config {
    /// 访问令牌：环境变量优先于配置文件
    pub fn access_token(&self) -> Option<String> {
        env::var(ACCESS_TOKEN_ENV_VAR)
            .ok()
            .filter(|token| !token.trim().is_empty())
            .or_else(|| self.access_token.clone())
    }

    pub fn api_base(&self) -> &str {
        self.api_base.as_deref().unwrap_or(DEFAULT_API_BASE)
    }

    pub fn log_level(&self) -> &str {
        self.log_level.as_deref().unwrap_or(DEFAULT_LOG_LEVEL)
    }
}

/// 默认配置文件路径 (~/.config/daypick/config.toml)
pub fn default_config_path() -> Option<PathBuf> {
    dirs::config_dir().map(|dir| dir.join("daypick").join("config.toml"))
}

/// 日志文件路径
///
/// 显式指定的路径优先；否则在交互模式下写入数据目录 (~/.local/share/daypick/daypick.log)，
/// 终端日历占用屏幕期间不能向 stderr 输出。非交互模式返回 `None`，日志写到 stderr。
pub fn log_file_path(
    explicit: Option<&Path>,
    interactive: bool,
    data_dir: Option<PathBuf>,
) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if !interactive {
        return None;
    }
    let dir = data_dir.unwrap_or_else(env::temp_dir);
    Some(dir.join("daypick").join("daypick.log"))
}

/// 从TOML文件加载配置，文件不存在时使用默认值
pub fn load_config(path: &Path) -> Result<Config> {
    if !path.exists() {
        return Ok(Config::default());
    }

    let content = fs::read_to_string(path)?;
    let config: Config = toml::from_str(&content)?;

    Ok(config)
}
