//! 键盘事件映射 (Input -> Action)
//!
//! 将按键事件转换为 Action

use crossterm::event::KeyCode;

use super::actions::Action;
use super::navigation::Direction;
use super::state::App;

/// 根据按键获取对应的 Action，未绑定的按键返回 `None`
pub fn get_action(key: KeyCode) -> Option<Action> {
    match key {
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::F(3) => Some(Action::Cancel),
        KeyCode::Enter => Some(Action::Confirm),
        KeyCode::Left => Some(Action::MoveCursor(Direction::Left)),
        KeyCode::Right => Some(Action::MoveCursor(Direction::Right)),
        KeyCode::Up => Some(Action::MoveCursor(Direction::Up)),
        KeyCode::Down => Some(Action::MoveCursor(Direction::Down)),
        KeyCode::PageUp | KeyCode::F(7) => Some(Action::PreviousMonth),
        KeyCode::PageDown | KeyCode::F(8) => Some(Action::NextMonth),
        KeyCode::Char(' ') => Some(Action::ToggleDay),
        _ => None,
    }
}

/// 处理按键事件，返回会话是否已结束
pub fn handle_key_event(app: &mut App, key: KeyCode) -> bool {
    if let Some(action) = get_action(key) {
        app.dispatch(action)
    } else {
        false
    }
}
