//! 命令行参数

use std::path::PathBuf;

use clap::Parser;

/// 在 Google Calendar 的指定日历上，为所选的每一天创建全天事件
#[derive(Debug, Parser)]
#[command(name = "daypick", version)]
pub struct Args {
    /// 月份中的日期，多个用空格分隔；省略时打开终端日历进行选择
    #[arg(short, long, num_args = 1.., value_name = "DD")]
    pub days: Vec<u32>,

    /// 月份 (1-12)，默认当前月
    #[arg(short, long, value_name = "MM", value_parser = clap::value_parser!(u32).range(1..=12))]
    pub month: Option<u32>,

    /// 年份 (1990-2999)，默认当前年
    #[arg(short, long, value_name = "YYYY", value_parser = clap::value_parser!(i32).range(1990..=2999))]
    pub year: Option<i32>,

    /// 事件名称
    #[arg(short, long)]
    pub name: Option<String>,

    /// 要创建事件的日历名称
    #[arg(short, long)]
    pub calendar: Option<String>,

    /// 配置文件路径
    #[arg(long, value_name = "PATH")]
    pub config: Option<PathBuf>,

    /// 日志文件路径（默认输出到 stderr）
    #[arg(long, value_name = "PATH")]
    pub log_file: Option<PathBuf>,

    /// 只打印将要创建的日期，不发送任何请求
    #[arg(long)]
    pub dry_run: bool,
}
