//! App 状态定义 (Model)
//!
//! 日历组件的全部会话状态：当前月网格、光标、已选集合和会话阶段

use crate::models::{Cell, MonthGrid, Outcome, Selection};

/// 应用状态
pub struct App {
    pub grid: MonthGrid,
    pub cursor: Cell,
    pub selection: Selection,
    pub status: SessionStatus,
    pub message: Option<String>,
}

/// 会话阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionStatus {
    Active,
    Confirmed,
    Cancelled,
}

impl App {
    /// 创建新的会话；年月无效时返回 `None`
    pub fn new(year: i32, month: u32) -> Option<Self> {
        MonthGrid::new(year, month).map(Self::with_grid)
    }

    pub fn with_grid(grid: MonthGrid) -> Self {
        Self {
            cursor: grid.first_cell(),
            grid,
            selection: Selection::new(),
            status: SessionStatus::Active,
            message: None,
        }
    }

    pub fn year(&self) -> i32 {
        self.grid.year()
    }

    pub fn month(&self) -> u32 {
        self.grid.month()
    }

    pub fn is_active(&self) -> bool {
        self.status == SessionStatus::Active
    }

    /// 光标所在的日期数字
    pub fn cursor_day(&self) -> Option<u32> {
        self.grid.day_at(self.cursor)
    }

    /// 会话结束后的结果；仍在进行中时返回 `None`
    pub fn outcome(&self) -> Option<Outcome> {
        match self.status {
            SessionStatus::Active => None,
            SessionStatus::Cancelled => Some(Outcome::Cancelled),
            SessionStatus::Confirmed => Some(Outcome::Confirmed {
                year: self.year(),
                month: self.month(),
                days: self.selection.days(&self.grid),
            }),
        }
    }
}
