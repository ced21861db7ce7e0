use std::time::{Duration, Instant};

use percent_encoding::{percent_decode_str, utf8_percent_encode, AsciiSet, CONTROLS};
use serde::{Deserialize, Serialize};

/// Quiet window for free-text search before a sync fires. Discrete
/// selections (category, tag toggle, sort) sync immediately.
pub const SEARCH_DEBOUNCE: Duration = Duration::from_millis(300);

pub const DEFAULT_CATEGORY: &str = "all";
pub const DEFAULT_SORT: &str = "newest";

// Characters that must not appear raw in a query value.
const QUERY_VALUE: &AsciiSet = &CONTROLS
    .add(b' ')
    .add(b'&')
    .add(b'=')
    .add(b'#')
    .add(b'+')
    .add(b'%')
    .add(b'?');

/// The user-adjustable filter set shared by every list page (photo bank,
/// wisata/UMKM directories, agenda). Seeded from the query string the page
/// was served with, mirrored back on every change.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterState {
    pub search: String,
    pub category: String,
    pub tags: Vec<String>,
    pub sort: String,
}

impl Default for FilterState {
    fn default() -> Self {
        FilterState {
            search: String::new(),
            category: DEFAULT_CATEGORY.to_string(),
            tags: Vec::new(),
            sort: DEFAULT_SORT.to_string(),
        }
    }
}

impl FilterState {
    /// Builds the outgoing query string, omitting every parameter that
    /// equals its "no filter" default. An all-defaults state yields "".
    pub fn to_query(&self) -> String {
        let mut parts: Vec<String> = Vec::new();
        if !self.search.is_empty() {
            parts.push(format!("search={}", encode(&self.search)));
        }
        if self.category != DEFAULT_CATEGORY {
            parts.push(format!("category={}", encode(&self.category)));
        }
        for tag in &self.tags {
            parts.push(format!("tags[]={}", encode(tag)));
        }
        if self.sort != DEFAULT_SORT {
            parts.push(format!("sort={}", encode(&self.sort)));
        }
        parts.join("&")
    }

    /// Seeds state from a raw query string. A scalar `tags=x` (a shape some
    /// servers echo for a single tag) is coerced to a one-element list.
    pub fn from_query(query: &str) -> Self {
        let mut state = FilterState::default();
        for (key, value) in query_pairs(query) {
            match key.as_str() {
                "search" => state.search = value,
                "category" if !value.is_empty() => state.category = value,
                "tags" | "tags[]" if !value.is_empty() => state.tags.push(value),
                "sort" if !value.is_empty() => state.sort = value,
                _ => {}
            }
        }
        state
    }

    pub fn is_default(&self) -> bool {
        *self == FilterState::default()
    }
}

/// Decoded key/value pairs of a query string. `tags[]` style keys are kept
/// verbatim; values are percent-decoded with `+` treated as space.
pub fn query_pairs(query: &str) -> Vec<(String, String)> {
    query
        .split('&')
        .filter(|p| !p.is_empty())
        .map(|pair| match pair.split_once('=') {
            Some((k, v)) => (decode(k), decode(v)),
            None => (decode(pair), String::new()),
        })
        .collect()
}

fn encode(value: &str) -> String {
    utf8_percent_encode(value, QUERY_VALUE).to_string()
}

fn decode(value: &str) -> String {
    let value = value.replace('+', " ");
    percent_decode_str(&value).decode_utf8_lossy().into_owned()
}

/// One outbound read navigation, stamped with the sequence number used for
/// last-request-wins response matching.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SyncRequest {
    pub seq: u64,
    pub query: String,
}

/// Keeps a [`FilterState`] synchronized with the server-rendered list.
///
/// Free-text edits update local state at once but the outbound sync is
/// debounced by [`SEARCH_DEBOUNCE`]; every other change syncs on the next
/// poll. Construction never schedules a sync, so the initial render does
/// not repeat the request the page was just served with. Overlapping
/// requests resolve by "last request wins": [`FilterSync::accept`] only
/// admits the response whose sequence matches the most recent request.
#[derive(Debug)]
pub struct FilterSync {
    state: FilterState,
    due: Option<Instant>,
    seq: u64,
    last_issued: Option<u64>,
}

impl FilterSync {
    pub fn new(initial: FilterState) -> Self {
        FilterSync {
            state: initial,
            due: None,
            seq: 0,
            last_issued: None,
        }
    }

    pub fn state(&self) -> &FilterState {
        &self.state
    }

    /// Updates the search text immediately and (re)arms the debounce
    /// window. Each keystroke pushes the deadline out again, so a burst of
    /// typing results in exactly one sync carrying the final text.
    pub fn set_search(&mut self, text: impl Into<String>, now: Instant) {
        self.state.search = text.into();
        self.due = Some(now + SEARCH_DEBOUNCE);
    }

    pub fn set_category(&mut self, category: impl Into<String>, now: Instant) {
        self.state.category = category.into();
        self.due = Some(now);
    }

    pub fn set_sort(&mut self, sort: impl Into<String>, now: Instant) {
        self.state.sort = sort.into();
        self.due = Some(now);
    }

    /// Adds the tag if absent, removes it if present. No upper bound on
    /// simultaneous tags.
    pub fn toggle_tag(&mut self, tag: &str, now: Instant) {
        match self.state.tags.iter().position(|t| t == tag) {
            Some(i) => {
                self.state.tags.remove(i);
            }
            None => self.state.tags.push(tag.to_string()),
        }
        self.due = Some(now);
    }

    /// Emits the due sync request, if any. Never fires before the debounce
    /// deadline and never fires without a preceding change.
    pub fn poll(&mut self, now: Instant) -> Option<SyncRequest> {
        match self.due {
            Some(at) if now >= at => {
                self.due = None;
                self.seq += 1;
                self.last_issued = Some(self.seq);
                Some(SyncRequest {
                    seq: self.seq,
                    query: self.state.to_query(),
                })
            }
            _ => None,
        }
    }

    /// Whether a response for `seq` should be applied. Stale responses
    /// (superseded by a newer request) are discarded by the caller.
    pub fn accept(&self, seq: u64) -> bool {
        self.last_issued == Some(seq)
    }
}
