//! 错误类型
//!
//! 除日历组件本身外，所有 I/O 胶水层的错误统一汇总到 `AppError`

use std::io;

use thiserror::Error;

#[derive(Debug, Error)]
pub enum AppError {
    #[error("I/O 错误: {0}")]
    Io(#[from] io::Error),

    #[error("配置文件解析失败: {0}")]
    Config(#[from] toml::de::Error),

    #[error("网络请求失败: {0}")]
    Http(#[from] reqwest::Error),

    #[error("Google Calendar 返回 HTTP {status}: {body}")]
    Api { status: u16, body: String },

    #[error("无效的 API 地址: {0}")]
    InvalidUrl(String),

    #[error("缺少 {0}（请通过命令行参数或配置文件提供）")]
    Missing(&'static str),

    #[error("{year}-{month:02} 中不存在第 {day} 天")]
    InvalidDay { year: i32, month: u32, day: u32 },

    #[error("无效的年月: {year}-{month:02}")]
    InvalidMonth { year: i32, month: u32 },

    #[error("日志初始化失败: {0}")]
    Logger(#[from] flexi_logger::FlexiLoggerError),
}

pub type Result<T> = std::result::Result<T, AppError>;
