//! View data passed to the renderer.

use pokecache_core::resource::{ResourceRecord, ResourceSummary, ResourceType};

/// Formats the error banner line shown on rendered error pages.
pub fn error_status_line(status: u16) -> String {
    match status {
        400 => "400: Bad Request".to_string(),
        404 => "404: Not Found Error".to_string(),
        _ => "500: Internal Server Error".to_string(),
    }
}

/// Data for a collection root page.
#[derive(Debug, Clone)]
pub struct CollectionView {
    pub resource: ResourceType,
    pub entries: Vec<ResourceSummary>,
    pub has_error: bool,
    pub error_status: Option<String>,
}

impl CollectionView {
    pub fn new(resource: ResourceType, entries: Vec<ResourceSummary>) -> Self {
        Self {
            resource,
            entries,
            has_error: false,
            error_status: None,
        }
    }

    pub fn error(resource: ResourceType, status: u16) -> Self {
        Self {
            resource,
            entries: Vec::new(),
            has_error: true,
            error_status: Some(error_status_line(status)),
        }
    }
}

/// Data for a single-resource detail page.
#[derive(Debug, Clone)]
pub struct DetailView {
    pub resource: ResourceType,
    pub record: Option<ResourceRecord>,
    pub has_error: bool,
    pub error_status: Option<String>,
}

impl DetailView {
    pub fn new(resource: ResourceType, record: ResourceRecord) -> Self {
        Self {
            resource,
            record: Some(record),
            has_error: false,
            error_status: None,
        }
    }

    pub fn error(resource: ResourceType, status: u16) -> Self {
        Self {
            resource,
            record: None,
            has_error: true,
            error_status: Some(error_status_line(status)),
        }
    }
}

/// Data for the recency history page.
#[derive(Debug, Clone)]
pub struct HistoryView {
    pub records: Vec<ResourceRecord>,
    pub has_error: bool,
    pub error_status: Option<String>,
}

impl HistoryView {
    pub fn new(records: Vec<ResourceRecord>) -> Self {
        Self {
            records,
            has_error: false,
            error_status: None,
        }
    }

    pub fn error(status: u16) -> Self {
        Self {
            records: Vec::new(),
            has_error: true,
            error_status: Some(error_status_line(status)),
        }
    }
}
