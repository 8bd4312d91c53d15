// src/types/post.rs
//! Job postings and the parameters of the listing endpoint

use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum Domain {
    Fintech,
    Healthtech,
    Education,
    Ecommerce,
    Foodtech,
    Mobility,
    Contents,
    B2b,
    Others,
}

impl Domain {
    pub const ALL: [Domain; 9] = [
        Domain::Fintech,
        Domain::Healthtech,
        Domain::Education,
        Domain::Ecommerce,
        Domain::Foodtech,
        Domain::Mobility,
        Domain::Contents,
        Domain::B2b,
        Domain::Others,
    ];

    /// Wire name, as used in query strings
    pub fn as_str(&self) -> &'static str {
        match self {
            Domain::Fintech => "FINTECH",
            Domain::Healthtech => "HEALTHTECH",
            Domain::Education => "EDUCATION",
            Domain::Ecommerce => "ECOMMERCE",
            Domain::Foodtech => "FOODTECH",
            Domain::Mobility => "MOBILITY",
            Domain::Contents => "CONTENTS",
            Domain::B2b => "B2B",
            Domain::Others => "OTHERS",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|d| d.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum PositionType {
    Front,
    App,
    Backend,
    Data,
    Others,
    Design,
    Planner,
    Marketing,
}

impl PositionType {
    pub const ALL: [PositionType; 8] = [
        PositionType::Front,
        PositionType::App,
        PositionType::Backend,
        PositionType::Data,
        PositionType::Others,
        PositionType::Design,
        PositionType::Planner,
        PositionType::Marketing,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            PositionType::Front => "FRONT",
            PositionType::App => "APP",
            PositionType::Backend => "BACKEND",
            PositionType::Data => "DATA",
            PositionType::Others => "OTHERS",
            PositionType::Design => "DESIGN",
            PositionType::Planner => "PLANNER",
            PositionType::Marketing => "MARKETING",
        }
    }

    pub fn parse(value: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|p| p.as_str().eq_ignore_ascii_case(value.trim()))
    }
}

/// Sort order of the listing; sent as `order=0` / `order=1`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Order {
    #[default]
    Latest,
    Deadline,
}

impl Order {
    pub fn code(&self) -> u8 {
        match self {
            Order::Latest => 0,
            Order::Deadline => 1,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub id: String,
    pub company_name: String,
    /// ISO-8601 timestamp; absent for postings that recruit year-round
    #[serde(default)]
    pub employment_end_date: Option<String>,
    pub position_title: String,
    pub domain: Domain,
    #[serde(default)]
    pub slogan: String,
    #[serde(default)]
    pub head_count: u32,
    #[serde(default)]
    pub is_bookmarked: bool,
    #[serde(default)]
    pub position_type: Option<PositionType>,
    #[serde(default)]
    pub detail_summary: Option<String>,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub profile_image_key: Option<String>,
}

/// Query parameters of `GET /api/post`. `None` fields are left out of the query string.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct GetPostsParams {
    pub positions: Option<Vec<PositionType>>,
    pub is_active: Option<bool>,
    pub domains: Option<Vec<Domain>>,
    pub order: Option<Order>,
    pub page: Option<u32>,
}
