//! 光标导航
//!
//! 纯函数：根据网格和当前光标计算移动后的光标，跳过空格子并在网格内循环

use crate::models::{Cell, DAYS_IN_WEEK, MonthGrid};

/// 光标移动方向
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Left,
    Right,
    Up,
    Down,
}

/// 向指定方向移动一格，落在空格子上则继续同向移动
///
/// 水平方向只在当前行内循环（列 0..7），垂直方向保持列不变、在 `0..week_count` 内循环。
/// 真实月份的每一行、每一列都至少有一天，因此循环必然结束。
pub fn move_cursor(grid: &MonthGrid, cursor: Cell, direction: Direction) -> Cell {
    let weeks = grid.week_count();
    if weeks == 0 {
        return cursor;
    }

    let mut next = step(cursor, direction, weeks);
    // 最多绕行一圈
    for _ in 0..weeks.max(DAYS_IN_WEEK) {
        if grid.is_populated(next) {
            return next;
        }
        next = step(next, direction, weeks);
    }
    cursor
}

fn step(cell: Cell, direction: Direction, weeks: usize) -> Cell {
    match direction {
        Direction::Left => Cell::new(cell.week, (cell.day + DAYS_IN_WEEK - 1) % DAYS_IN_WEEK),
        Direction::Right => Cell::new(cell.week, (cell.day + 1) % DAYS_IN_WEEK),
        Direction::Up => Cell::new((cell.week + weeks - 1) % weeks, cell.day),
        Direction::Down => Cell::new((cell.week + 1) % weeks, cell.day),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const ALL: [Direction; 4] = [
        Direction::Left,
        Direction::Right,
        Direction::Up,
        Direction::Down,
    ];

    #[test]
    fn test_never_lands_on_empty_cell() {
        for year in [2015, 2023, 2024] {
            for month in 1..=12 {
                let grid = MonthGrid::new(year, month).unwrap();
                for (cell, _) in grid.cells() {
                    for direction in ALL {
                        let next = move_cursor(&grid, cell, direction);
                        assert!(grid.is_populated(next), "{:?} from {:?}", direction, cell);
                        match direction {
                            Direction::Left | Direction::Right => assert_eq!(next.week, cell.week),
                            Direction::Up | Direction::Down => {
                                assert_eq!(next.day, cell.day);
                                assert_ne!(next, cell);
                            }
                        }
                    }
                }
            }
        }
    }

    #[test]
    fn test_left_from_first_day_wraps_within_row() {
        // 2024 年 7 月从周一开始，第 0 行第 0 列为空
        let grid = MonthGrid::new(2024, 7).unwrap();
        let first = grid.first_cell();
        assert_eq!(first, Cell::new(0, 1));

        let next = move_cursor(&grid, first, Direction::Left);
        assert_eq!(next, Cell::new(0, 6));
        assert_eq!(grid.day_at(next), Some(6));
    }

    #[test]
    fn test_right_from_row_end_wraps_to_row_start() {
        let grid = MonthGrid::new(2024, 7).unwrap();

        let saturday = grid.cell_of(6).unwrap();
        let next = move_cursor(&grid, saturday, Direction::Right);
        assert_eq!(grid.day_at(next), Some(1));

        // 最后一行: 28 29 30 31，后面为空
        let last = grid.cell_of(31).unwrap();
        let next = move_cursor(&grid, last, Direction::Right);
        assert_eq!(grid.day_at(next), Some(28));
    }

    #[test]
    fn test_horizontal_moves_walk_row_days() {
        let grid = MonthGrid::new(2024, 2).unwrap();
        // 第 0 行: 1 2 3（周四到周六）
        let mut cursor = grid.first_cell();
        for day in [2, 3, 1, 2] {
            cursor = move_cursor(&grid, cursor, Direction::Right);
            assert_eq!(grid.day_at(cursor), Some(day));
        }
        for day in [1, 3, 2, 1] {
            cursor = move_cursor(&grid, cursor, Direction::Left);
            assert_eq!(grid.day_at(cursor), Some(day));
        }
    }

    #[test]
    fn test_right_cycles_back_to_start_of_row() {
        for year in [2023, 2024] {
            for month in 1..=12 {
                let grid = MonthGrid::new(year, month).unwrap();
                for (cell, _) in grid.cells() {
                    let populated = grid.weeks()[cell.week].iter().flatten().count();
                    let mut cursor = cell;
                    for _ in 0..populated {
                        cursor = move_cursor(&grid, cursor, Direction::Right);
                    }
                    assert_eq!(cursor, cell, "{}-{} from {:?}", year, month, cell);
                }
            }
        }
    }

    #[test]
    fn test_seven_right_moves_in_full_week_return_to_start() {
        let grid = MonthGrid::new(2024, 7).unwrap();
        let start = grid.cell_of(8).unwrap();
        let mut cursor = start;
        for _ in 0..DAYS_IN_WEEK {
            cursor = move_cursor(&grid, cursor, Direction::Right);
        }
        assert_eq!(cursor, start);
    }

    #[test]
    fn test_vertical_moves_skip_empty_rows() {
        let grid = MonthGrid::new(2024, 7).unwrap();
        // 周日一列：7, 14, 21, 28（第 0 行为空）
        let sunday = grid.cell_of(7).unwrap();
        let up = move_cursor(&grid, sunday, Direction::Up);
        assert_eq!(grid.day_at(up), Some(28));

        let down = move_cursor(&grid, up, Direction::Down);
        assert_eq!(down, sunday);
    }

    #[test]
    fn test_vertical_round_trip_returns_to_start() {
        let grid = MonthGrid::new(2024, 2).unwrap();
        for (cell, _) in grid.cells() {
            let mut cursor = cell;
            let mut steps = 0;
            loop {
                cursor = move_cursor(&grid, cursor, Direction::Down);
                steps += 1;
                if cursor == cell {
                    break;
                }
                assert_eq!(cursor.day, cell.day);
            }
            assert!(steps <= grid.week_count());
        }
    }
}
