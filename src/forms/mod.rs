// src/forms/mod.rs
//! Input rules for the sign-up, sign-in and applicant-profile forms

pub mod account;
pub mod profile;

pub use account::{SignInForm, SignUpForm};
pub use profile::{CvFile, ProfileDraft, ProfileErrors};
