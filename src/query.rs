// src/query.rs
//! Query-string encoding for listing requests

use url::form_urlencoded::Serializer;

use crate::types::GetPostsParams;

/// Encode listing parameters. Lists become repeated keys, absent values are
/// skipped, and empty parameters produce an empty string.
pub fn encode_posts_params(params: &GetPostsParams) -> String {
    let mut query = Serializer::new(String::new());

    if let Some(positions) = &params.positions {
        for position in positions {
            query.append_pair("positions", position.as_str());
        }
    }
    if let Some(is_active) = params.is_active {
        query.append_pair("isActive", if is_active { "true" } else { "false" });
    }
    if let Some(domains) = &params.domains {
        for domain in domains {
            query.append_pair("domains", domain.as_str());
        }
    }
    if let Some(order) = params.order {
        query.append_pair("order", &order.code().to_string());
    }
    if let Some(page) = params.page {
        query.append_pair("page", &page.to_string());
    }

    query.finish()
}

/// Join a path and an encoded query, leaving out `?` when there is no query
pub fn with_query(path: &str, query: &str) -> String {
    if query.is_empty() {
        path.to_string()
    } else {
        format!("{}?{}", path, query)
    }
}
