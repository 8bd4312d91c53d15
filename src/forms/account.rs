// src/forms/account.rs
use crate::types::{SignInRequest, SignUpRequest};

#[derive(Debug, Clone, Default)]
pub struct SignUpForm {
    pub name: String,
    pub email_id: String,
    pub password: String,
    pub password_confirm: String,
}

impl SignUpForm {
    /// All fields filled and the two passwords match
    pub fn is_submittable(&self) -> bool {
        !self.name.is_empty()
            && !self.email_id.is_empty()
            && !self.password.is_empty()
            && !self.password_confirm.is_empty()
            && self.password == self.password_confirm
    }

    pub fn to_request(&self, email: &str) -> SignUpRequest {
        SignUpRequest::applicant(&self.name, email, &self.password)
    }
}

#[derive(Debug, Clone, Default)]
pub struct SignInForm {
    pub email_id: String,
    pub password: String,
}

impl SignInForm {
    pub fn is_submittable(&self) -> bool {
        !self.email_id.is_empty() && !self.password.is_empty()
    }

    pub fn to_request(&self, email: &str) -> SignInRequest {
        SignInRequest::new(email, &self.password)
    }
}
