use chrono::{DateTime, Utc};
use derive_more::Display;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Agenda {
    pub id: i32,
    pub title: String,
    pub description: String,
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub poster: Option<String>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum AgendaStatus {
    #[display(fmt = "upcoming")]
    Upcoming,
    #[display(fmt = "done")]
    Done,
}

impl Agenda {
    /// Status is never stored; it is derived at render time from the end of
    /// the start day. An agenda stays "upcoming" for the whole of its start
    /// date and flips to "done" once that day has passed. `now` is injected
    /// so the derivation stays deterministic under test.
    pub fn status_at(&self, now: DateTime<Utc>) -> AgendaStatus {
        if self.start_time.date_naive() < now.date_naive() {
            AgendaStatus::Done
        } else {
            AgendaStatus::Upcoming
        }
    }
}
