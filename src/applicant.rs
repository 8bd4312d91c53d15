// src/applicant.rs
//! Whether the signed-in user already has an applicant profile

use crate::core::api_client::PROFILE_NOT_FOUND_CODE;
use crate::core::ApiClient;
use crate::error::{ClientError, ClientResult};
use crate::types::ApplicantProfile;
use reqwest::StatusCode;
use tracing::debug;

#[derive(Debug, Clone)]
pub enum ProfileStatus {
    Exists(Box<ApplicantProfile>),
    NotFound,
}

impl ProfileStatus {
    pub fn profile(&self) -> Option<&ApplicantProfile> {
        match self {
            ProfileStatus::Exists(profile) => Some(profile.as_ref()),
            ProfileStatus::NotFound => None,
        }
    }
}

/// Fetch the profile. A missing token or a "no profile" answer both mean
/// `NotFound`; any other failure is returned.
pub async fn fetch_profile_status(
    client: &ApiClient,
    token: Option<&str>,
) -> ClientResult<ProfileStatus> {
    let Some(token) = token else {
        return Ok(ProfileStatus::NotFound);
    };

    match client.get_applicant_profile(token).await {
        Ok(profile) => Ok(ProfileStatus::Exists(Box::new(profile))),
        Err(e) if is_missing_profile(&e) => {
            debug!("No applicant profile yet: {}", e);
            Ok(ProfileStatus::NotFound)
        }
        Err(e) => Err(e),
    }
}

fn is_missing_profile(err: &ClientError) -> bool {
    err.is_code(PROFILE_NOT_FOUND_CODE) || err.status() == Some(StatusCode::NOT_FOUND)
}
