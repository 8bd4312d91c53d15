// src/types/response.rs
//! Envelope types shared by several endpoints

use serde::{Deserialize, Serialize};

use super::post::Post;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Paginator {
    /// Number of pages; valid page indices are `0..last_page`
    pub last_page: u32,
}

impl Paginator {
    /// Keep a stored page index within the pages the server reports
    pub fn clamp_page(&self, page: u32) -> u32 {
        if self.last_page == 0 {
            0
        } else {
            page.min(self.last_page - 1)
        }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PostsPage {
    pub posts: Vec<Post>,
    #[serde(default)]
    pub paginator: Paginator,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clamp_page() {
        let paginator = Paginator { last_page: 3 };
        assert_eq!(paginator.clamp_page(0), 0);
        assert_eq!(paginator.clamp_page(2), 2);
        assert_eq!(paginator.clamp_page(9), 2);
        assert_eq!(Paginator::default().clamp_page(4), 0);
    }

    #[test]
    fn test_bookmark_listing_without_paginator() {
        let page: PostsPage = serde_json::from_str(r#"{"posts": []}"#).unwrap();
        assert_eq!(page.paginator.last_page, 0);
    }
}
