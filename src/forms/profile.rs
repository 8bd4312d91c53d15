// src/forms/profile.rs
//! Applicant profile draft: student id, majors and CV reference

use anyhow::{Context, Result};
use chrono::{Local, NaiveDate};
use std::collections::HashSet;
use std::fmt;
use std::path::Path;

use crate::types::{ApplicantProfile, ProfileUpdate};
use crate::utils::{compact_date, random_alphanumeric, validate_file_extension};

/// Primary major plus up to six double/minor majors
pub const MAX_MAJORS: usize = 7;
pub const MAX_CV_BYTES: u64 = 5 * 1024 * 1024;
const CV_KEY_PREFIX: &str = "static/private/CV";
const CV_KEY_RANDOM_LEN: usize = 10;

const STUDENT_ID_ERROR: &str = "두 자리 수 숫자로 작성해주세요. (e.g. 25)";
const MAJOR_ERROR: &str =
    "주전공은 필수 작성이며, 다전공은 총 6개 이하로 중복되지 않게 입력해주세요.";
const CV_TYPE_ERROR: &str = "PDF 파일만 업로드 가능합니다.";
const CV_SIZE_ERROR: &str = "5MB 이하의 PDF 파일을 올려주세요.";

/// Two-digit student ids up to this value belong to the 2000s
const CENTURY_PIVOT: i32 = 24;

pub fn is_valid_student_id(value: &str) -> bool {
    value.len() == 2 && value.chars().all(|c| c.is_ascii_digit())
}

/// `"19"` → 2019, `"85"` → 1985
pub fn student_id_to_year(value: &str) -> Option<i32> {
    if !is_valid_student_id(value) {
        return None;
    }
    let num: i32 = value.parse().ok()?;
    Some(if num <= CENTURY_PIVOT { 2000 + num } else { 1900 + num })
}

/// 2019 → `"19"`
pub fn year_to_student_id(year: i32) -> String {
    let digits = year.to_string();
    digits[digits.len().saturating_sub(2)..].to_string()
}

/// A CV chosen for upload, with the storage key it will be referenced by
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CvFile {
    pub file_name: String,
    pub size: u64,
    pub key: String,
}

impl CvFile {
    /// Check type and size, then generate `static/private/CV/{random}_{YYYYMMDD}/{name}`
    pub fn new(file_name: &str, size: u64, today: NaiveDate) -> Result<Self, String> {
        if validate_file_extension(file_name, &["pdf"]).is_err() {
            return Err(CV_TYPE_ERROR.to_string());
        }
        if size > MAX_CV_BYTES {
            return Err(CV_SIZE_ERROR.to_string());
        }

        let key = format!(
            "{}/{}_{}/{}",
            CV_KEY_PREFIX,
            random_alphanumeric(CV_KEY_RANDOM_LEN),
            compact_date(today),
            file_name
        );

        Ok(Self {
            file_name: file_name.to_string(),
            size,
            key,
        })
    }

    /// Build from a file on disk; I/O problems are errors, rule violations are messages
    pub fn from_path(path: &Path) -> Result<Result<Self, String>> {
        let metadata = std::fs::metadata(path)
            .with_context(|| format!("Failed to read CV file: {}", path.display()))?;
        let file_name = path
            .file_name()
            .and_then(|n| n.to_str())
            .ok_or_else(|| anyhow::anyhow!("Invalid CV file name: {}", path.display()))?;

        Ok(Self::new(file_name, metadata.len(), Local::now().date_naive()))
    }
}

/// Field-level messages from a failed validation
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ProfileErrors {
    pub student_id: Option<String>,
    pub major: Option<String>,
    pub resume: Option<String>,
}

impl ProfileErrors {
    pub fn is_empty(&self) -> bool {
        self.student_id.is_none() && self.major.is_none() && self.resume.is_none()
    }
}

impl fmt::Display for ProfileErrors {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let messages: Vec<String> = [
            ("학번", &self.student_id),
            ("학과", &self.major),
            ("이력서", &self.resume),
        ]
        .into_iter()
        .filter_map(|(field, msg)| msg.as_ref().map(|m| format!("{}: {}", field, m)))
        .collect();
        write!(f, "{}", messages.join("\n"))
    }
}

impl std::error::Error for ProfileErrors {}

#[derive(Debug, Clone)]
pub struct ProfileDraft {
    pub student_id: String,
    majors: Vec<String>,
    pub cv: Option<CvFile>,
    /// Key of the CV already on the server, kept when editing without a new upload
    pub existing_cv_key: Option<String>,
    pub edit_mode: bool,
}

impl Default for ProfileDraft {
    fn default() -> Self {
        Self {
            student_id: String::new(),
            majors: vec![String::new()],
            cv: None,
            existing_cv_key: None,
            edit_mode: false,
        }
    }
}

impl ProfileDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Pre-fill an edit draft from the stored profile
    pub fn from_profile(profile: &ApplicantProfile) -> Self {
        let mut draft = Self {
            edit_mode: true,
            ..Self::default()
        };

        if let Some(year) = profile.enroll_year {
            draft.student_id = year_to_student_id(year);
        }
        let majors = profile.majors();
        if !majors.is_empty() {
            draft.majors = majors;
        }
        draft.existing_cv_key = profile.cv_key.clone().filter(|k| !k.is_empty());
        draft
    }

    pub fn majors(&self) -> &[String] {
        &self.majors
    }

    /// Add an empty major slot; false once the limit is reached
    pub fn add_major(&mut self) -> bool {
        if self.majors.len() >= MAX_MAJORS {
            return false;
        }
        self.majors.push(String::new());
        true
    }

    /// Remove a secondary major. The primary major (index 0) cannot be removed.
    pub fn remove_major(&mut self, index: usize) {
        if index == 0 || index >= self.majors.len() {
            return;
        }
        self.majors.remove(index);
    }

    /// Replace all majors, primary first
    pub fn set_majors<I, S>(&mut self, majors: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.majors = majors.into_iter().map(Into::into).collect();
        if self.majors.is_empty() {
            self.majors.push(String::new());
        }
    }

    fn validate_majors(&self) -> bool {
        if self.majors.len() > MAX_MAJORS {
            return false;
        }
        match self.majors.first() {
            Some(primary) if !primary.trim().is_empty() => {}
            _ => return false,
        }

        let filled: Vec<&str> = self
            .majors
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .collect();
        let unique: HashSet<&str> = filled.iter().copied().collect();
        unique.len() == filled.len()
    }

    fn cv_key(&self) -> Option<&str> {
        match (&self.cv, &self.existing_cv_key) {
            (Some(cv), _) => Some(cv.key.as_str()),
            (None, Some(key)) if self.edit_mode => Some(key.as_str()),
            _ => None,
        }
    }

    /// Check every field and build the update body, or report every failing field
    pub fn validate(&self) -> Result<ProfileUpdate, ProfileErrors> {
        let mut errors = ProfileErrors::default();

        let enroll_year = student_id_to_year(&self.student_id);
        if enroll_year.is_none() {
            errors.student_id = Some(STUDENT_ID_ERROR.to_string());
        }
        if !self.validate_majors() {
            errors.major = Some(MAJOR_ERROR.to_string());
        }
        let cv_key = self.cv_key();
        if cv_key.is_none() {
            errors.resume = Some(CV_SIZE_ERROR.to_string());
        }

        match (enroll_year, cv_key) {
            (Some(enroll_year), Some(cv_key)) if errors.is_empty() => Ok(ProfileUpdate {
                enroll_year,
                department: self.department_string(),
                cv_key: cv_key.to_string(),
                ..Default::default()
            }),
            _ => Err(errors),
        }
    }

    /// Majors joined by `,`, primary first, blanks dropped
    pub fn department_string(&self) -> String {
        self.majors
            .iter()
            .map(|m| m.trim())
            .filter(|m| !m.is_empty())
            .collect::<Vec<_>>()
            .join(",")
    }
}
