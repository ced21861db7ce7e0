use actix_web::{get, web, HttpRequest, HttpResponse};
use chrono::Utc;
use serde::Serialize;

use super::ListResponse;
use crate::error::AppError;
use crate::filter::FilterState;
use crate::models::pagination::page_from_query;
use crate::models::{Agenda, AgendaStatus, Page};
use crate::state::AppState;

const AGENDA_PER_PAGE: usize = 9;

/// Agenda plus its status, derived from wall-clock time at render time and
/// never stored.
#[derive(Debug, Serialize)]
pub struct AgendaView {
    #[serde(flatten)]
    pub agenda: Agenda,
    pub status: AgendaStatus,
}

#[get("/agenda")]
pub async fn list_agenda(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = req.query_string();
    let filters = FilterState::from_query(query);
    let status_filter: Option<AgendaStatus> = crate::filter::query_pairs(query)
        .into_iter()
        .find(|(k, _)| k == "status")
        .and_then(|(_, v)| match v.as_str() {
            "upcoming" => Some(AgendaStatus::Upcoming),
            "done" => Some(AgendaStatus::Done),
            _ => None,
        });

    let now = Utc::now();
    let agenda = state.agenda.read().map_err(|_| AppError::lock())?;
    let search = filters.search.to_lowercase();
    let mut items: Vec<AgendaView> = agenda
        .iter()
        .filter(|a| {
            search.is_empty()
                || a.title.to_lowercase().contains(&search)
                || a.description.to_lowercase().contains(&search)
                || a.location.to_lowercase().contains(&search)
        })
        .map(|a| AgendaView {
            status: a.status_at(now),
            agenda: a.clone(),
        })
        .filter(|v| status_filter.map_or(true, |s| v.status == s))
        .collect();
    drop(agenda);

    // Upcoming events lead the page, soonest first; finished ones follow.
    items.sort_by_key(|v| (v.status == AgendaStatus::Done, v.agenda.start_time));

    let page = Page::paginate(
        items,
        page_from_query(query),
        AGENDA_PER_PAGE,
        "/api/agenda",
        &filters.to_query(),
    );
    Ok(HttpResponse::Ok().json(ListResponse { page, filters }))
}
