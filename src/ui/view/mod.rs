//! 视图层模块
//!
//! 只读取 App 状态进行绘制，不修改任何状态

pub mod components;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
};

use super::state::App;
use crate::models::{Cell, DAYS_IN_WEEK};
use components::{day_style, render_panel, weekday_style};

const WEEK_DAYS: [&str; DAYS_IN_WEEK] = ["日", "一", "二", "三", "四", "五", "六"];
const CELL_SPACING: &str = "  ";
// 7 个两位数日期 + 6 个间隔 + 左右边框
const CALENDAR_WIDTH: u16 = 7 * 2 + 6 * 2 + 2;
// 标题 + 星期 + 最多 6 周 + 上下边框
const CALENDAR_HEIGHT: u16 = 1 + 1 + 6 + 2;
const HELP_WIDTH: u16 = 34;
// 帮助面板有 9 行说明和 1 行状态消息
const PANEL_HEIGHT: u16 = CALENDAR_HEIGHT + 2;

/// 渲染 UI
pub fn render(frame: &mut Frame, app: &App) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(PANEL_HEIGHT), // 日历与帮助并排
            Constraint::Min(0),
        ])
        .split(frame.area());

    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Length(CALENDAR_WIDTH),
            Constraint::Length(HELP_WIDTH),
            Constraint::Min(0),
        ])
        .split(rows[0]);

    render_calendar(frame, app, columns[0]);
    render_help(frame, app, columns[1]);
}

fn render_calendar(frame: &mut Frame, app: &App, area: Rect) {
    let inner = render_panel(frame, area, "选择日期");

    let mut lines = Vec::with_capacity(app.grid.week_count() + 2);
    lines.push(
        Line::from(Span::styled(
            app.grid.title(),
            Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
        ))
        .centered(),
    );

    let mut labels = Vec::with_capacity(DAYS_IN_WEEK * 2);
    for (idx, label) in WEEK_DAYS.iter().enumerate() {
        if idx > 0 {
            labels.push(Span::raw(CELL_SPACING));
        }
        labels.push(Span::styled(*label, weekday_style()));
    }
    lines.push(Line::from(labels));

    for (week_idx, week) in app.grid.weeks().iter().enumerate() {
        let mut spans = Vec::with_capacity(DAYS_IN_WEEK * 2);
        for (day_idx, slot) in week.iter().enumerate() {
            if day_idx > 0 {
                spans.push(Span::raw(CELL_SPACING));
            }
            let cell = Cell::new(week_idx, day_idx);
            match slot {
                Some(day) => {
                    let style = day_style(app.selection.contains(cell), app.cursor == cell);
                    spans.push(Span::styled(format!("{:>2}", day), style));
                }
                None => spans.push(Span::raw("  ")),
            }
        }
        lines.push(Line::from(spans));
    }

    frame.render_widget(Paragraph::new(lines), inner);
}

fn render_help(frame: &mut Frame, app: &App, area: Rect) {
    let inner = render_panel(frame, area, "帮助");

    let warning = Style::default().fg(Color::Red);
    let mut lines = vec![
        Line::from("方向键: 在日期间移动"),
        Line::from("空格: 选中/取消选中"),
        Line::from("F7/PageUp: 上个月"),
        Line::from("F8/PageDown: 下个月"),
        Line::from("F3/q: 退出"),
        Line::from("Enter: 确认"),
        Line::from(""),
        Line::from(Span::styled("每次运行只能选择", warning)),
        Line::from(Span::styled("同一个月内的日期", warning)),
    ];

    if let Some(message) = &app.message {
        lines.push(Line::from(Span::styled(
            message.as_str(),
            Style::default().fg(Color::Gray),
        )));
    }

    frame.render_widget(Paragraph::new(lines).style(Style::default().fg(Color::Gray)), inner);
}
