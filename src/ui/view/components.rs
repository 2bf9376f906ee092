//! 通用 UI 组件
//!
//! 面板框架和日期格子的配色

use ratatui::{
    Frame,
    layout::Rect,
    style::{Color, Modifier, Style},
    widgets::{Block, Borders, Clear},
};

/// [组件] 带标题的面板框架，返回内部可用区域
pub fn render_panel(frame: &mut Frame, area: Rect, title: &str) -> Rect {
    frame.render_widget(Clear, area);
    let block = Block::default()
        .title(title)
        .borders(Borders::ALL)
        .style(Style::default().fg(Color::Cyan));
    let inner = block.inner(area);
    frame.render_widget(block, area);
    inner
}

/// [组件] 日期格子样式：{已选, 未选} × {有光标, 无光标} 四种组合
pub fn day_style(is_selected: bool, has_cursor: bool) -> Style {
    match (is_selected, has_cursor) {
        (false, false) => Style::default().fg(Color::Cyan).bg(Color::Black),
        (true, false) => Style::default().fg(Color::Black).bg(Color::Cyan),
        (false, true) => Style::default()
            .fg(Color::Yellow)
            .bg(Color::Black)
            .add_modifier(Modifier::BOLD),
        (true, true) => Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
    }
}

/// [组件] 星期标题样式
pub fn weekday_style() -> Style {
    Style::default()
        .fg(Color::Green)
        .add_modifier(Modifier::BOLD)
}
