use actix_web::{get, post, web, HttpRequest, HttpResponse};
use serde_json::json;

use super::ListResponse;
use crate::error::AppError;
use crate::filter::FilterState;
use crate::models::pagination::page_from_query;
use crate::models::{Page, Photo};
use crate::state::AppState;

const PHOTOS_PER_PAGE: usize = 12;

fn matches(photo: &Photo, filters: &FilterState) -> bool {
    let search = filters.search.to_lowercase();
    let search_ok = search.is_empty()
        || photo.title.to_lowercase().contains(&search)
        || photo.user_name.to_lowercase().contains(&search);
    let category_ok = filters.category == crate::filter::DEFAULT_CATEGORY
        || photo.category.to_string() == filters.category;
    search_ok && category_ok && photo.has_all_tags(&filters.tags)
}

#[get("/photos")]
pub async fn list_photos(
    req: HttpRequest,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let query = req.query_string();
    let filters = FilterState::from_query(query);

    let photos = state.photos.read().map_err(|_| AppError::lock())?;
    let mut items: Vec<Photo> = photos
        .iter()
        .filter(|p| matches(p, &filters))
        .cloned()
        .collect();
    drop(photos);

    match filters.sort.as_str() {
        "popular" => items.sort_by_key(|p| std::cmp::Reverse(p.likes)),
        "oldest" => items.sort_by_key(|p| p.id),
        _ => items.sort_by_key(|p| std::cmp::Reverse(p.id)),
    }

    let page = Page::paginate(
        items,
        page_from_query(query),
        PHOTOS_PER_PAGE,
        "/api/photos",
        &filters.to_query(),
    );
    Ok(HttpResponse::Ok().json(ListResponse { page, filters }))
}

/// Photo detail. Viewing counts as a view, so the counter moves here.
#[get("/photos/{id}")]
pub async fn photo_detail(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let mut photos = state.photos.write().map_err(|_| AppError::lock())?;
    let photo = photos
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(AppError::NotFound("photo"))?;
    photo.views += 1;
    Ok(HttpResponse::Ok().json(&*photo))
}

/// Toggles the viewer's like and adjusts the counter accordingly.
#[post("/photos/{id}/like")]
pub async fn like_photo(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let mut photos = state.photos.write().map_err(|_| AppError::lock())?;
    let photo = photos
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(AppError::NotFound("photo"))?;
    if photo.is_liked {
        photo.is_liked = false;
        photo.likes = photo.likes.saturating_sub(1);
    } else {
        photo.is_liked = true;
        photo.likes += 1;
    }
    Ok(HttpResponse::Ok().json(json!({
        "id": photo.id,
        "likes": photo.likes,
        "is_liked": photo.is_liked,
    })))
}

/// Registers a download and hands back the image path to fetch.
#[post("/photos/{id}/download")]
pub async fn download_photo(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let mut photos = state.photos.write().map_err(|_| AppError::lock())?;
    let photo = photos
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(AppError::NotFound("photo"))?;
    photo.downloads += 1;
    Ok(HttpResponse::Ok().json(json!({
        "id": photo.id,
        "image_path": photo.image_path,
        "downloads": photo.downloads,
    })))
}

/// The upload modal's open flag is the single piece of shared UI state;
/// these two actions are its only writers.
#[post("/upload-modal/open")]
pub async fn open_upload_modal(state: web::Data<AppState>) -> HttpResponse {
    state.upload_modal.open();
    HttpResponse::Ok().json(json!({ "open": true }))
}

#[post("/upload-modal/close")]
pub async fn close_upload_modal(state: web::Data<AppState>) -> HttpResponse {
    state.upload_modal.close();
    HttpResponse::Ok().json(json!({ "open": false }))
}
