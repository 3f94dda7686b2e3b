//! Hypermedia link value object and link builders
//!
//! Builders are pure functions of `(scheme, host, ...)`; links are derived
//! for each response and never stored.

use serde::Serialize;
use uuid::Uuid;

/// A single navigation link
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Link {
    pub relation: String,
    pub href: String,
    pub method: String,
}

impl Link {
    pub fn new(relation: &str, href: String, method: &str) -> Self {
        Self {
            relation: relation.to_string(),
            href,
            method: method.to_string(),
        }
    }
}

/// Links attached to a single book resource
pub fn book_links(scheme: &str, host: &str, id: Uuid) -> Vec<Link> {
    let href = format!("{}://{}/api/books/{}", scheme, host, id);
    vec![
        Link::new("self", href.clone(), "GET"),
        Link::new("update", href.clone(), "PUT"),
        Link::new("delete", href, "DELETE"),
    ]
}

/// Navigation links for a collection page
///
/// `prev` is present only past the first page, `next` only before the last.
pub fn collection_links(
    scheme: &str,
    host: &str,
    page: i64,
    page_size: i64,
    total_pages: i64,
) -> Vec<Link> {
    let base_url = format!("{}://{}/api/books", scheme, host);
    let mut links = vec![
        Link::new(
            "self",
            format!("{}?page={}&pageSize={}", base_url, page, page_size),
            "GET",
        ),
        Link::new("create", base_url.clone(), "POST"),
    ];

    if page > 1 {
        links.push(Link::new(
            "prev",
            format!("{}?page={}&pageSize={}", base_url, page - 1, page_size),
            "GET",
        ));
    }

    if page < total_pages {
        links.push(Link::new(
            "next",
            format!("{}?page={}&pageSize={}", base_url, page + 1, page_size),
            "GET",
        ));
    }

    links
}
