use actix_web::{get, web, HttpRequest, HttpResponse};
use serde_json::json;

use crate::error::AppError;
use crate::filter::FilterState;
use crate::models::pagination::page_from_query;
use crate::models::{merge_points, Category, Page, Poi, PoiKind};
use crate::state::AppState;

const DIRECTORY_PER_PAGE: usize = 9;

fn matches(poi: &Poi, filters: &FilterState) -> bool {
    let search = filters.search.to_lowercase();
    let search_ok = search.is_empty()
        || poi.name.to_lowercase().contains(&search)
        || poi.description.to_lowercase().contains(&search)
        || poi.address.to_lowercase().contains(&search);
    let category_ok =
        filters.category == crate::filter::DEFAULT_CATEGORY || poi.category == filters.category;
    search_ok && category_ok
}

fn sort(items: &mut [Poi], order: &str) {
    match order {
        "name" => items.sort_by(|a, b| a.name.to_lowercase().cmp(&b.name.to_lowercase())),
        "oldest" => items.sort_by_key(|p| p.id),
        // "newest" and anything unrecognized.
        _ => items.sort_by_key(|p| std::cmp::Reverse(p.id)),
    }
}

fn categories_of(state: &AppState, kind: PoiKind) -> Result<Vec<Category>, AppError> {
    let categories = state.categories.read().map_err(|_| AppError::lock())?;
    Ok(categories
        .iter()
        .filter(|c| c.kind == kind)
        .cloned()
        .collect())
}

fn directory(
    state: &AppState,
    kind: PoiKind,
    query: &str,
    path: &str,
) -> Result<HttpResponse, AppError> {
    let filters = FilterState::from_query(query);
    let mut items: Vec<Poi> = match kind {
        PoiKind::Wisata => {
            let spots = state.wisata.read().map_err(|_| AppError::lock())?;
            spots.iter().map(Poi::from).collect()
        }
        PoiKind::Umkm => {
            let umkms = state.umkm.read().map_err(|_| AppError::lock())?;
            umkms.iter().map(Poi::from).collect()
        }
    };
    items.retain(|p| matches(p, &filters));
    sort(&mut items, &filters.sort);

    let page = Page::paginate(
        items,
        page_from_query(query),
        DIRECTORY_PER_PAGE,
        path,
        &filters.to_query(),
    );
    let categories = categories_of(state, kind)?;
    Ok(HttpResponse::Ok().json(json!({
        "data": page.data,
        "links": page.links,
        "meta": page.meta,
        "filters": filters,
        "categories": categories,
    })))
}

#[get("/wisata")]
pub async fn list_wisata(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    directory(&state, PoiKind::Wisata, req.query_string(), "/api/wisata")
}

#[get("/umkm")]
pub async fn list_umkm(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    directory(&state, PoiKind::Umkm, req.query_string(), "/api/umkm")
}

/// Merged, alphabetically sorted POI collection for the interactive map.
/// Coordinate parsing already happened, so the client can split this into
/// the marker layer (points with coordinates) and the side list (all).
#[get("/map/points")]
pub async fn map_points(state: web::Data<AppState>) -> Result<HttpResponse, AppError> {
    let spots = state.wisata.read().map_err(|_| AppError::lock())?;
    let umkms = state.umkm.read().map_err(|_| AppError::lock())?;
    let points = merge_points(&spots, &umkms);
    Ok(HttpResponse::Ok().json(json!({ "points": points })))
}
