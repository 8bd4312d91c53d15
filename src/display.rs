// src/display.rs
//! Human-readable labels and deadline messages for postings and profiles

use chrono::{DateTime, Local, NaiveDate, Utc};

use crate::types::{Domain, PositionType};
use crate::utils::parse_timestamp;

pub fn domain_label(domain: Domain) -> &'static str {
    match domain {
        Domain::Fintech => "핀테크",
        Domain::Healthtech => "헬스테크",
        Domain::Education => "교육",
        Domain::Ecommerce => "이커머스",
        Domain::Foodtech => "푸드테크",
        Domain::Mobility => "모빌리티",
        Domain::Contents => "콘텐츠",
        Domain::B2b => "B2B",
        Domain::Others => "기타",
    }
}

pub fn position_label(position: PositionType) -> &'static str {
    match position {
        PositionType::Front => "프론트엔드 개발자",
        PositionType::App => "앱 개발자",
        PositionType::Backend => "서버·백엔드 개발자",
        PositionType::Data => "데이터 개발자",
        PositionType::Others => "기타 개발자",
        PositionType::Design => "디자이너",
        PositionType::Planner => "기획자",
        PositionType::Marketing => "마케터",
    }
}

/// Whole calendar days from `today` to the deadline; negative once it has passed
pub fn days_until(end_date: NaiveDate, today: NaiveDate) -> i64 {
    (end_date - today).num_days()
}

fn local_date(end: &DateTime<Utc>) -> NaiveDate {
    end.with_timezone(&Local).date_naive()
}

/// Deadline line of a posting card
pub fn posting_deadline_message(end_date: Option<&str>, today: NaiveDate) -> String {
    let Some(end) = end_date.and_then(parse_timestamp) else {
        return "상시모집".to_string();
    };

    match days_until(local_date(&end), today) {
        d if d > 0 => format!("마감까지 D-{}", d),
        0 => "오늘 마감!".to_string(),
        _ => "마감".to_string(),
    }
}

/// Deadline line of a bookmark card. A deadline earlier today already counts as closed.
pub fn bookmark_deadline_message(end_date: Option<&str>, now: DateTime<Local>) -> String {
    let Some(end) = end_date.and_then(parse_timestamp) else {
        return "상시모집".to_string();
    };

    if now.with_timezone(&Utc) > end {
        return "마감".to_string();
    }

    match days_until(local_date(&end), now.date_naive()) {
        0 => "D-Day".to_string(),
        d => format!("D-{}", d),
    }
}

/// `"A,B,C"` → `"A · B(다전공) · C(다전공)"`
pub fn department_line(department: &str) -> String {
    department
        .split(',')
        .enumerate()
        .map(|(i, dept)| {
            if i > 0 {
                format!("{}(다전공)", dept.trim())
            } else {
                dept.trim().to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" · ")
}

/// Department and two-digit student id, with the placeholders used for missing values
pub fn enrollment_line(department: Option<&str>, enroll_year: Option<i32>) -> String {
    let dept = department
        .filter(|d| !d.is_empty())
        .map(department_line)
        .unwrap_or_else(|| "무전공".to_string());
    let year = enroll_year
        .map(crate::forms::profile::year_to_student_id)
        .unwrap_or_else(|| "무".to_string());
    format!("{} {}학번", dept, year)
}
