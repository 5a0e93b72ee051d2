//! Pagination helpers for API requests
//!
//! CircleCI list endpoints return `{items, next_page_token}`. The helpers here
//! walk such endpoints to completion and concatenate the items in response
//! order. A failed page aborts the whole walk; partially fetched pages are
//! discarded along with the error.

use std::future::Future;

use log::debug;
use serde::{Deserialize, Serialize};

use crate::error::Result;

/// Query parameter carrying the page token
pub const PAGE_TOKEN_PARAM: &str = "page-token";

/// One page of a token-paginated collection.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Page<T> {
    /// Items on this page
    #[serde(default = "Vec::new")]
    pub items: Vec<T>,

    /// Token for the next page; absent or empty on the last page
    #[serde(default)]
    pub next_page_token: Option<String>,
}

impl<T> Page<T> {
    /// Create a page.
    pub fn new(items: Vec<T>, next_page_token: Option<String>) -> Self {
        Self {
            items,
            next_page_token,
        }
    }

    /// The token to request next, if any.
    pub fn next_token(&self) -> Option<&str> {
        self.next_page_token.as_deref().filter(|t| !t.is_empty())
    }
}

/// GraphQL connection (`edges` + `pageInfo`) as returned by list queries
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Connection<T> {
    #[serde(default = "Vec::new")]
    pub edges: Vec<Edge<T>>,
    pub page_info: PageInfo,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Edge<T> {
    pub cursor: String,
    pub node: T,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct PageInfo {
    pub has_next_page: bool,
}

impl<T> Connection<T> {
    /// Map onto a token page: the last edge's cursor is the next token.
    pub fn into_page(self) -> Page<T> {
        let next = if self.page_info.has_next_page {
            self.edges.last().map(|e| e.cursor.clone())
        } else {
            None
        };
        Page::new(self.edges.into_iter().map(|e| e.node).collect(), next)
    }
}

/// Build the query parameters for a page request.
pub fn page_query(token: Option<&str>) -> Vec<(&'static str, String)> {
    token
        .filter(|t| !t.is_empty())
        .map(|t| vec![(PAGE_TOKEN_PARAM, t.to_string())])
        .unwrap_or_default()
}

/// Walk a token-paginated endpoint and return every item.
///
/// `fetch` is called with `None` for the first page and with each returned
/// token afterwards, until a page comes back without a token. When `limit`
/// is set, fetching stops as soon as that many items are collected and the
/// result is truncated to it.
pub async fn collect_all_pages<T, F, Fut>(mut fetch: F, limit: Option<usize>) -> Result<Vec<T>>
where
    F: FnMut(Option<String>) -> Fut,
    Fut: Future<Output = Result<Page<T>>>,
{
    let mut items = Vec::new();
    let mut token: Option<String> = None;
    let mut pages = 0usize;

    loop {
        let page = fetch(token.take()).await?;
        pages += 1;

        let next = page.next_token().map(str::to_string);
        items.extend(page.items);

        if let Some(limit) = limit {
            if items.len() >= limit {
                items.truncate(limit);
                break;
            }
        }

        match next {
            Some(t) => token = Some(t),
            None => break,
        }
    }

    debug!("Collected {} items across {} pages", items.len(), pages);
    Ok(items)
}

/// Walk an offset-paginated endpoint and return every item.
///
/// `fetch` receives the offset of the first item wanted. The walk ends on the
/// first empty page.
pub async fn collect_offset_pages<T, F, Fut>(mut fetch: F, limit: Option<usize>) -> Result<Vec<T>>
where
    F: FnMut(usize) -> Fut,
    Fut: Future<Output = Result<Vec<T>>>,
{
    let mut items: Vec<T> = Vec::new();

    loop {
        let page = fetch(items.len()).await?;
        if page.is_empty() {
            break;
        }
        items.extend(page);

        if let Some(limit) = limit {
            if items.len() >= limit {
                items.truncate(limit);
                break;
            }
        }
    }

    debug!("Collected {} items by offset", items.len());
    Ok(items)
}
