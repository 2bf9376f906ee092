mod cli;
mod config;
mod error;
mod gcal;
mod models;
mod ui;

use std::fs;
use std::io;
use std::process::ExitCode;

use chrono::{Datelike, Local, NaiveDate};
use clap::Parser;
use crossterm::{
    execute,
    terminal::{EnterAlternateScreen, LeaveAlternateScreen, disable_raw_mode, enable_raw_mode},
};
use flexi_logger::{FileSpec, Logger};
use ratatui::prelude::*;

use crate::cli::Args;
use crate::config::{Config, default_config_path, load_config, log_file_path};
use crate::error::{AppError, Result};
use crate::gcal::CalendarClient;
use crate::models::{Outcome, dates_in_month};
use crate::ui::{App, render};

fn main() -> ExitCode {
    let args = Args::parse();

    match run(args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{}", e);
            eprintln!("错误: {}", e);
            ExitCode::FAILURE
        }
    }
}

fn run(args: Args) -> Result<()> {
    let config_path = args.config.clone().or_else(default_config_path);
    let config = match &config_path {
        Some(path) => load_config(path)?,
        None => Config::default(),
    };

    // 日志：RUST_LOG 优先，其次配置文件；打开终端日历时必须写入文件
    let interactive = args.days.is_empty();
    let mut logger = Logger::try_with_env_or_str(config.log_level())?;
    if let Some(log_file) = log_file_path(args.log_file.as_deref(), interactive, dirs::data_dir()) {
        if let Some(dir) = log_file.parent() {
            fs::create_dir_all(dir)?;
        }
        logger = logger.log_to_file(FileSpec::try_from(&log_file)?);
    }
    let _logger = logger.start()?;

    let name = args
        .name
        .clone()
        .or_else(|| config.default_event_name.clone())
        .ok_or(AppError::Missing("事件名称 (--name)"))?;
    let calendar = args
        .calendar
        .clone()
        .or_else(|| config.default_calendar.clone())
        .ok_or(AppError::Missing("日历名称 (--calendar)"))?;

    let today = Local::now().date_naive();
    let year = args.year.unwrap_or_else(|| today.year());
    let month = args.month.unwrap_or_else(|| today.month());

    let dates = match &args.days[..] {
        [] => match pick_days(year, month)? {
            outcome if outcome.is_empty() => Vec::new(),
            Outcome::Confirmed { year, month, days } => dates_in_month(year, month, &days)?,
            Outcome::Cancelled => Vec::new(),
        },
        days => dates_in_month(year, month, days)?,
    };

    if dates.is_empty() {
        println!("未选择任何日期");
        return Ok(());
    }

    if args.dry_run {
        for date in &dates {
            println!("{} {}", date.format("%Y-%m-%d"), name);
        }
        return Ok(());
    }

    create_events(&config, &calendar, &name, &dates)
}

/// 在名为 `calendar` 的日历上为每个日期创建全天事件
fn create_events(config: &Config, calendar: &str, name: &str, dates: &[NaiveDate]) -> Result<()> {
    let token = config
        .access_token()
        .ok_or(AppError::Missing("访问令牌 (DAYPICK_ACCESS_TOKEN)"))?;
    let client = CalendarClient::new(config.api_base(), token)?;

    let Some(calendar_id) = client.find_calendar_id(calendar)? else {
        println!("找不到日历 `{}`", calendar);
        return Ok(());
    };

    for date in dates {
        let event = client.insert_all_day_event(&calendar_id, name, *date)?;
        match event.html_link {
            Some(link) => println!("已创建事件: {}", link),
            None => println!("已创建事件: {}", event.id),
        }
    }

    Ok(())
}

/// 打开终端日历让用户选择日期，结束后恢复终端
fn pick_days(year: i32, month: u32) -> Result<Outcome> {
    let mut app = App::new(year, month).ok_or(AppError::InvalidMonth { year, month })?;

    // 设置终端
    enable_raw_mode()?;
    let mut stdout = io::stdout();
    execute!(stdout, EnterAlternateScreen)?;
    let backend = CrosstermBackend::new(stdout);
    let mut terminal = Terminal::new(backend)?;

    // 主循环
    let result = run_app(&mut terminal, &mut app);

    // 恢复终端
    disable_raw_mode()?;
    execute!(terminal.backend_mut(), LeaveAlternateScreen)?;
    terminal.show_cursor()?;

    result?;
    Ok(app.outcome().unwrap_or(Outcome::Cancelled))
}

fn run_app(terminal: &mut Terminal<CrosstermBackend<io::Stdout>>, app: &mut App) -> io::Result<()> {
    loop {
        terminal.draw(|f| render(f, app))?;

        if let crossterm::event::Event::Key(key) = crossterm::event::read()?
            && key.kind == crossterm::event::KeyEventKind::Press
            && ui::handle_key_event(app, key.code)
        {
            break;
        }
    }
    Ok(())
}
