//! 业务逻辑处理 (Update/Dispatch)
//!
//! 只修改状态、不触碰终端，渲染由 view 层根据状态完成

use super::actions::Action;
use super::navigation::{Direction, move_cursor};
use super::state::{App, SessionStatus};
use crate::models::MonthGrid;

impl App {
    /// 核心逻辑分发，返回会话是否已结束
    pub fn dispatch(&mut self, action: Action) -> bool {
        if !self.is_active() {
            return true;
        }

        log::debug!("dispatch {:?} on day {:?}", action, self.cursor_day());

        match action {
            Action::Cancel => self.cancel(),
            Action::Confirm => self.confirm(),
            Action::MoveCursor(direction) => self.move_cursor(direction),
            Action::PreviousMonth => {
                let (year, month) = self.grid.previous();
                self.switch_month(year, month);
            }
            Action::NextMonth => {
                let (year, month) = self.grid.next();
                self.switch_month(year, month);
            }
            Action::ToggleDay => self.toggle_day(),
        }

        !self.is_active()
    }

    // ============ 导航相关 ============

    pub fn move_cursor(&mut self, direction: Direction) {
        self.cursor = move_cursor(&self.grid, self.cursor, direction);
    }

    /// 切换到指定月份：重建网格、清空选择、光标回到第一天
    pub fn switch_month(&mut self, year: i32, month: u32) {
        match MonthGrid::new(year, month) {
            Some(grid) => {
                self.cursor = grid.first_cell();
                self.grid = grid;
                self.selection.clear();
                self.message = None;
            }
            None => {
                log::warn!("month {}-{} is out of range, staying put", year, month);
                self.message = Some("已到达可显示范围的边界".to_string());
            }
        }
    }

    // ============ 选择相关 ============

    pub fn toggle_day(&mut self) {
        if !self.grid.is_populated(self.cursor) {
            return;
        }
        self.selection.toggle(self.cursor);
        self.message = Some(format!("已选择 {} 天", self.selection.len()));
    }

    // ============ 结束会话 ============

    pub fn confirm(&mut self) {
        log::debug!("confirmed {:?}", self.selection.to_dates(&self.grid));
        self.status = SessionStatus::Confirmed;
    }

    pub fn cancel(&mut self) {
        self.selection.clear();
        self.status = SessionStatus::Cancelled;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Outcome;

    fn select_days(app: &mut App, days: &[u32]) {
        for &day in days {
            app.cursor = app.grid.cell_of(day).unwrap();
            app.dispatch(Action::ToggleDay);
        }
    }

    #[test]
    fn test_new_session_starts_on_first_day() {
        let app = App::new(2024, 7).unwrap();
        assert_eq!(app.cursor_day(), Some(1));
        assert!(app.selection.is_empty());
        assert!(app.is_active());
        assert_eq!(app.outcome(), None);
    }

    #[test]
    fn test_confirm_returns_sorted_days() {
        let mut app = App::new(2024, 7).unwrap();
        select_days(&mut app, &[17, 3, 10]);

        assert!(app.dispatch(Action::Confirm));
        assert_eq!(
            app.outcome(),
            Some(Outcome::Confirmed {
                year: 2024,
                month: 7,
                days: vec![3, 10, 17],
            })
        );
    }

    #[test]
    fn test_toggle_twice_deselects() {
        let mut app = App::new(2024, 7).unwrap();
        app.dispatch(Action::ToggleDay);
        assert!(app.selection.contains(app.cursor));
        app.dispatch(Action::ToggleDay);
        assert!(app.selection.is_empty());
    }

    #[test]
    fn test_cancel_clears_selection() {
        let mut app = App::new(2024, 7).unwrap();
        select_days(&mut app, &[5, 6]);

        assert!(app.dispatch(Action::Cancel));
        assert!(app.selection.is_empty());
        assert_eq!(app.outcome(), Some(Outcome::Cancelled));
    }

    #[test]
    fn test_confirm_with_nothing_selected_is_empty() {
        let mut app = App::new(2024, 7).unwrap();
        assert!(app.dispatch(Action::Confirm));

        let outcome = app.outcome().unwrap();
        assert!(outcome.is_empty());
        assert!(matches!(outcome, Outcome::Confirmed { ref days, .. } if days.is_empty()));
    }

    #[test]
    fn test_month_change_clears_selection() {
        let mut app = App::new(2024, 7).unwrap();
        select_days(&mut app, &[3, 10, 17]);
        assert_eq!(app.selection.len(), 3);

        app.dispatch(Action::NextMonth);
        app.dispatch(Action::NextMonth);
        app.dispatch(Action::PreviousMonth);

        assert_eq!((app.year(), app.month()), (2024, 8));
        assert!(app.selection.is_empty());
        assert_eq!(app.cursor, app.grid.first_cell());
        assert_eq!(app.cursor_day(), Some(1));
    }

    #[test]
    fn test_month_change_wraps_year() {
        let mut app = App::new(2024, 1).unwrap();
        app.dispatch(Action::PreviousMonth);
        assert_eq!((app.year(), app.month()), (2023, 12));

        app.dispatch(Action::NextMonth);
        app.dispatch(Action::NextMonth);
        assert_eq!((app.year(), app.month()), (2024, 2));
        assert!(app.grid.is_populated(app.cursor));
    }

    #[test]
    fn test_confirm_reports_displayed_month() {
        let mut app = App::new(2024, 12).unwrap();
        app.dispatch(Action::NextMonth);
        app.dispatch(Action::ToggleDay);
        app.dispatch(Action::Confirm);

        assert_eq!(
            app.outcome(),
            Some(Outcome::Confirmed {
                year: 2025,
                month: 1,
                days: vec![1],
            })
        );
    }

    #[test]
    fn test_arrow_moves_cursor() {
        let mut app = App::new(2024, 7).unwrap();
        app.dispatch(Action::MoveCursor(Direction::Left));
        assert_eq!(app.cursor_day(), Some(6));
        app.dispatch(Action::MoveCursor(Direction::Right));
        assert_eq!(app.cursor_day(), Some(1));
        app.dispatch(Action::MoveCursor(Direction::Down));
        assert_eq!(app.cursor_day(), Some(8));
    }

    #[test]
    fn test_finished_session_ignores_input() {
        let mut app = App::new(2024, 7).unwrap();
        app.dispatch(Action::ToggleDay);
        app.dispatch(Action::Confirm);

        assert!(app.dispatch(Action::Cancel));
        assert!(app.dispatch(Action::NextMonth));
        assert_eq!((app.year(), app.month()), (2024, 7));
        assert_eq!(app.selection.len(), 1);
    }
}
