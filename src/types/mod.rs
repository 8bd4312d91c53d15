// src/types/mod.rs
//! Data-transfer types mirrored from the job-board API

pub mod auth;
pub mod post;
pub mod profile;
pub mod response;

pub use auth::{AuthResult, AuthUser, SignInRequest, SignUpRequest, User, UserRole};
pub use post::{Domain, GetPostsParams, Order, PositionType, Post};
pub use profile::{ApplicantProfile, ProfileLink, ProfileUpdate};
pub use response::{Paginator, PostsPage};
