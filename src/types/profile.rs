// src/types/profile.rs
//! Applicant profile as read from and written to `/api/applicant/me`

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProfileLink {
    pub description: String,
    pub link: String,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ApplicantProfile {
    pub id: Option<String>,
    pub name: String,
    pub email: String,
    pub enroll_year: Option<i32>,
    /// Comma-joined majors, primary first
    pub department: Option<String>,
    pub cv_key: Option<String>,
    pub positions: Option<Vec<String>>,
    pub slogan: Option<String>,
    pub explanation: Option<String>,
    pub stacks: Option<Vec<String>>,
    pub links: Option<Vec<ProfileLink>>,
    pub image_key: Option<String>,
    pub portfolio_key: Option<String>,
    pub created_at: Option<String>,
    pub updated_at: Option<String>,
}

impl ApplicantProfile {
    /// True when any of the optional "basic info" sections carries data
    pub fn has_optional_sections(&self) -> bool {
        self.positions.is_some()
            || self.explanation.is_some()
            || self.stacks.is_some()
            || self.links.is_some()
    }

    pub fn majors(&self) -> Vec<String> {
        self.department
            .as_deref()
            .map(|d| d.split(',').map(|m| m.trim().to_string()).collect())
            .unwrap_or_default()
    }
}

/// Body of `PUT /api/applicant/me`
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ProfileUpdate {
    pub enroll_year: i32,
    pub department: String,
    pub cv_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub positions: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub slogan: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub explanation: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub stacks: Option<Vec<String>>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub image_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_key: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub links: Option<Vec<ProfileLink>>,
}
