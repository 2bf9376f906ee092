//! Google Calendar v3 客户端
//!
//! 只实现两件事：按名称查找日历 ID，以及创建全天事件。
//! 访问令牌由调用方提供，这里不处理授权流程。

use chrono::{Days, NaiveDate};
use reqwest::Url;
use reqwest::blocking::{Client, Response};
use serde::{Deserialize, Serialize};

use crate::error::{AppError, Result};

/// 日历列表中的一项
#[derive(Debug, Clone, Deserialize)]
struct CalendarListEntry {
    id: String,
    #[serde(default)]
    summary: String,
}

#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct CalendarListResponse {
    #[serde(default)]
    items: Vec<CalendarListEntry>,
    next_page_token: Option<String>,
}

/// 全天事件的日期字段
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct EventDate {
    pub date: String,
}

/// 创建事件的请求体
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct NewEvent {
    pub summary: String,
    pub start: EventDate,
    pub end: EventDate,
}

impl NewEvent {
    /// 全天事件：结束日期是开始日期的下一天（API 中结束日期不包含在内）
    pub fn all_day(summary: &str, date: NaiveDate) -> Self {
        let end = date.checked_add_days(Days::new(1)).unwrap_or(date);
        Self {
            summary: summary.to_string(),
            start: EventDate {
                date: date.format("%Y-%m-%d").to_string(),
            },
            end: EventDate {
                date: end.format("%Y-%m-%d").to_string(),
            },
        }
    }
}

/// 创建成功后返回的事件
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreatedEvent {
    pub id: String,
    #[serde(default)]
    pub html_link: Option<String>,
}

pub struct CalendarClient {
    http: Client,
    base: Url,
    access_token: String,
}

impl CalendarClient {
    pub fn new(base: &str, access_token: String) -> Result<Self> {
        let base = Url::parse(base).map_err(|e| AppError::InvalidUrl(format!("{base}: {e}")))?;
        if base.cannot_be_a_base() {
            return Err(AppError::InvalidUrl(base.to_string()));
        }

        Ok(Self {
            http: Client::new(),
            base,
            access_token,
        })
    }

    /// 拼接 API 路径，每一段都会被正确转义（日历 ID 中常含有 '@' 和 '#'）
    fn endpoint(&self, segments: &[&str]) -> Result<Url> {
        let mut url = self.base.clone();
        url.path_segments_mut()
            .map_err(|_| AppError::InvalidUrl(self.base.to_string()))?
            .pop_if_empty()
            .extend(segments);
        Ok(url)
    }

    /// 按名称查找日历 ID，会依次翻阅所有分页
    pub fn find_calendar_id(&self, summary: &str) -> Result<Option<String>> {
        let url = self.endpoint(&["users", "me", "calendarList"])?;
        let mut page_token: Option<String> = None;

        loop {
            let mut request = self.http.get(url.clone()).bearer_auth(&self.access_token);
            if let Some(token) = &page_token {
                request = request.query(&[("pageToken", token.as_str())]);
            }

            let page: CalendarListResponse = check_status(request.send()?)?.json()?;
            log::debug!("calendarList page with {} entries", page.items.len());

            if let Some(entry) = page.items.into_iter().find(|entry| entry.summary == summary) {
                return Ok(Some(entry.id));
            }

            match page.next_page_token {
                Some(token) => page_token = Some(token),
                None => return Ok(None),
            }
        }
    }

    /// 在指定日历上创建一个全天事件
    pub fn insert_all_day_event(
        &self,
        calendar_id: &str,
        summary: &str,
        date: NaiveDate,
    ) -> Result<CreatedEvent> {
        let url = self.endpoint(&["calendars", calendar_id, "events"])?;
        let event = NewEvent::all_day(summary, date);

        log::info!("creating event '{}' on {}", summary, event.start.date);
        let response = self
            .http
            .post(url)
            .bearer_auth(&self.access_token)
            .json(&event)
            .send()?;

        Ok(check_status(response)?.json()?)
    }
}

fn check_status(response: Response) -> Result<Response> {
    let status = response.status();
    if status.is_success() {
        return Ok(response);
    }

    let body = response.text().unwrap_or_default();
    log::error!("Google Calendar request failed: HTTP {}", status);
    Err(AppError::Api {
        status: status.as_u16(),
        body,
    })
}
