//! Sort state carried in the page's query string.
//!
//! The route owns a [`SortQuery`]; every render derives the table order from
//! it, so a reload or a shared link reproduces the same view.

use std::fmt;

use dioxus::logger::tracing::warn;
use dioxus::prelude::*;
use url::form_urlencoded;

use crate::usage::sort::{SortColumn, SortDirective, SortState};

pub const REPORT_SORT_PARAM: &str = "reportSort";
pub const CREDIT_SORT_PARAM: &str = "creditSort";

#[derive(Debug, Clone, PartialEq, Default)]
pub struct SortQuery {
    pub sort: SortState,
    /// Unrelated parameters, kept in order so rewriting the sort keys does
    /// not drop them.
    pub extra: Vec<(String, String)>,
}

impl SortQuery {
    pub fn new(sort: SortState) -> Self {
        SortQuery {
            sort,
            extra: Vec::new(),
        }
    }

    pub fn parse(query: &str) -> Self {
        let query = query.strip_prefix('?').unwrap_or(query);
        let mut report: Option<SortDirective> = None;
        let mut credits: Option<SortDirective> = None;
        let mut extra = Vec::new();

        for (key, value) in form_urlencoded::parse(query.as_bytes()) {
            let slot = if key == REPORT_SORT_PARAM {
                &mut report
            } else if key == CREDIT_SORT_PARAM {
                &mut credits
            } else {
                extra.push((key.into_owned(), value.into_owned()));
                continue;
            };
            if slot.is_some() {
                continue;
            }
            *slot = Some(SortDirective::from_param(&value).unwrap_or_else(|| {
                if !value.is_empty() {
                    warn!("[sort_query] ignoring {key}={value:?}");
                }
                SortDirective::None
            }));
        }

        SortQuery {
            sort: SortState {
                report: report.unwrap_or_default(),
                credits: credits.unwrap_or_default(),
            },
            extra,
        }
    }

    /// Query for the next click on `column`'s header.
    pub fn toggled(&self, column: SortColumn) -> Self {
        SortQuery {
            sort: self.sort.toggled(column),
            extra: self.extra.clone(),
        }
    }
}

impl FromQuery for SortQuery {
    fn from_query(query: &str) -> Self {
        SortQuery::parse(query)
    }
}

impl fmt::Display for SortQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut ser = form_urlencoded::Serializer::new(String::new());
        for (key, value) in &self.extra {
            ser.append_pair(key, value);
        }
        if let Some(v) = self.sort.report.as_param() {
            ser.append_pair(REPORT_SORT_PARAM, v);
        }
        if let Some(v) = self.sort.credits.as_param() {
            ser.append_pair(CREDIT_SORT_PARAM, v);
        }
        f.write_str(&ser.finish())
    }
}
