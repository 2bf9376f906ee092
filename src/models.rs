use std::collections::HashSet;

use chrono::{Datelike, NaiveDate};

use crate::error::{AppError, Result};

pub const DAYS_IN_WEEK: usize = 7;

/// 一周 7 个格子，周日在第 0 列；`None` 表示该格不属于本月
pub type Week = [Option<u32>; DAYS_IN_WEEK];

/// 网格坐标
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Cell {
    pub week: usize, // 周索引（行）
    pub day: usize,  // 星期索引（列）
}

impl Cell {
    pub const fn new(week: usize, day: usize) -> Self {
        Self { week, day }
    }
}

/// 月视图网格
///
/// 只有第一周开头和最后一周结尾可能出现空格子
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MonthGrid {
    year: i32,
    month: u32,
    weeks: Vec<Week>,
}

impl MonthGrid {
    /// 生成指定年月的网格；月份越界或超出 chrono 支持范围时返回 `None`
    pub fn new(year: i32, month: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month, 1)?;
        let days = days_in_month(year, month)?;
        let offset = first.weekday().num_days_from_sunday() as usize;
        let week_count = (offset + days as usize).div_ceil(DAYS_IN_WEEK);

        let mut weeks = vec![[None; DAYS_IN_WEEK]; week_count];
        for day in 1..=days {
            let slot = offset + day as usize - 1;
            weeks[slot / DAYS_IN_WEEK][slot % DAYS_IN_WEEK] = Some(day);
        }

        Some(Self { year, month, weeks })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    pub fn month(&self) -> u32 {
        self.month
    }

    pub fn weeks(&self) -> &[Week] {
        &self.weeks
    }

    pub fn week_count(&self) -> usize {
        self.weeks.len()
    }

    /// 标题，例如 "2024年2月"
    pub fn title(&self) -> String {
        format!("{}年{}月", self.year, self.month)
    }

    pub fn day_at(&self, cell: Cell) -> Option<u32> {
        self.weeks.get(cell.week)?.get(cell.day).copied().flatten()
    }

    pub fn is_populated(&self, cell: Cell) -> bool {
        self.day_at(cell).is_some()
    }

    pub fn date_at(&self, cell: Cell) -> Option<NaiveDate> {
        let day = self.day_at(cell)?;
        NaiveDate::from_ymd_opt(self.year, self.month, day)
    }

    /// 按行优先顺序遍历所有非空格子
    pub fn cells(&self) -> impl Iterator<Item = (Cell, u32)> + '_ {
        self.weeks.iter().enumerate().flat_map(|(week_idx, week)| {
            week.iter()
                .enumerate()
                .filter_map(move |(day_idx, slot)| slot.map(|day| (Cell::new(week_idx, day_idx), day)))
        })
    }

    /// 从 (0, 0) 向右扫描得到的第一个非空格子
    pub fn first_cell(&self) -> Cell {
        self.cells().next().map(|(cell, _)| cell).unwrap_or_default()
    }

    #[cfg(test)]
    pub fn cell_of(&self, day: u32) -> Option<Cell> {
        self.cells().find(|(_, d)| *d == day).map(|(cell, _)| cell)
    }

    pub fn previous(&self) -> (i32, u32) {
        previous_month(self.year, self.month)
    }

    pub fn next(&self) -> (i32, u32) {
        next_month(self.year, self.month)
    }
}

pub fn previous_month(year: i32, month: u32) -> (i32, u32) {
    if month == 1 {
        (year - 1, 12)
    } else {
        (year, month - 1)
    }
}

pub fn next_month(year: i32, month: u32) -> (i32, u32) {
    if month == 12 {
        (year + 1, 1)
    } else {
        (year, month + 1)
    }
}

fn days_in_month(year: i32, month: u32) -> Option<u32> {
    let first = NaiveDate::from_ymd_opt(year, month, 1)?;
    let (next_year, next_month) = next_month(year, month);
    let next = NaiveDate::from_ymd_opt(next_year, next_month, 1)?;
    u32::try_from(next.signed_duration_since(first).num_days()).ok()
}

/// 已选中的格子集合（只在单个月内有效）
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    cells: HashSet<Cell>,
}

impl Selection {
    pub fn new() -> Self {
        Self::default()
    }

    /// 切换选中状态，返回切换后是否处于选中
    pub fn toggle(&mut self, cell: Cell) -> bool {
        if self.cells.remove(&cell) {
            false
        } else {
            self.cells.insert(cell);
            true
        }
    }

    pub fn clear(&mut self) {
        self.cells.clear();
    }

    pub fn contains(&self, cell: Cell) -> bool {
        self.cells.contains(&cell)
    }

    pub fn is_empty(&self) -> bool {
        self.cells.is_empty()
    }

    pub fn len(&self) -> usize {
        self.cells.len()
    }

    /// 升序的日期数字，忽略空格子
    pub fn days(&self, grid: &MonthGrid) -> Vec<u32> {
        let mut days: Vec<u32> = self
            .cells
            .iter()
            .filter_map(|cell| grid.day_at(*cell))
            .collect();
        days.sort_unstable();
        days
    }

    /// 升序的 `YYYY-MM-DD` 字符串，忽略空格子
    pub fn to_dates(&self, grid: &MonthGrid) -> Vec<String> {
        let mut dates: Vec<NaiveDate> = self
            .cells
            .iter()
            .filter_map(|cell| grid.date_at(*cell))
            .collect();
        dates.sort_unstable();
        dates
            .iter()
            .map(|date| date.format("%Y-%m-%d").to_string())
            .collect()
    }
}

/// 一次选择会话的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Outcome {
    Confirmed { year: i32, month: u32, days: Vec<u32> },
    Cancelled,
}

impl Outcome {
    /// 取消与"确认但未选择"对调用方来说是同一种结果
    pub fn is_empty(&self) -> bool {
        match self {
            Outcome::Confirmed { days, .. } => days.is_empty(),
            Outcome::Cancelled => true,
        }
    }
}

/// 将 (年, 月, 日期列表) 转换为升序去重的日期；不存在的日期报错
pub fn dates_in_month(year: i32, month: u32, days: &[u32]) -> Result<Vec<NaiveDate>> {
    if NaiveDate::from_ymd_opt(year, month, 1).is_none() {
        return Err(AppError::InvalidMonth { year, month });
    }

    let mut dates = days
        .iter()
        .map(|&day| {
            NaiveDate::from_ymd_opt(year, month, day)
                .ok_or(AppError::InvalidDay { year, month, day })
        })
        .collect::<Result<Vec<_>>>()?;
    dates.sort_unstable();
    dates.dedup();
    Ok(dates)
}
