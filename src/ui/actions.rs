//! Action 枚举定义 (Intent)
//!
//! 按键先被映射为语义化的 Action，再交给 `App::dispatch` 处理

use super::navigation::Direction;

/// 用户操作枚举
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    Cancel,  // q / Q / F3
    Confirm, // Enter
    MoveCursor(Direction),
    PreviousMonth, // PageUp / F7
    NextMonth,     // PageDown / F8
    ToggleDay,     // Space
}
