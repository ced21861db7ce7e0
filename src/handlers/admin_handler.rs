use actix_web::{delete, post, put, web, HttpResponse};
use chrono::{DateTime, Utc};
use serde::Deserialize;
use serde_json::json;
use serde_with::{formats::PreferMany, serde_as, OneOrMany};
use tracing::info;
use uuid::Uuid;

use crate::error::{AppError, Validator};
use crate::models::{Agenda, Category, Photo, PhotoCategory, PoiKind, TourismSpot, Umkm};
use crate::state::{next_id, AppState};
use crate::tags::normalize_tags;

/// Shared payload for both point-of-interest kinds; the dashboard posts the
/// same form for tourism spots and UMKM entries.
#[derive(Debug, Deserialize)]
pub struct SpotPayload {
    pub name: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub address: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub category: String,
    #[serde(default)]
    pub gallery: Vec<String>,
}

fn validate_spot(payload: &SpotPayload) -> Result<(), AppError> {
    let mut v = Validator::default();
    v.require("name", &payload.name);
    v.require("category", &payload.category);
    v.numeric("latitude", payload.latitude.as_deref());
    v.numeric("longitude", payload.longitude.as_deref());
    v.finish()
}

#[post("/admin/wisata")]
pub async fn create_wisata(
    state: web::Data<AppState>,
    payload: web::Json<SpotPayload>,
) -> Result<HttpResponse, AppError> {
    validate_spot(&payload)?;
    let mut spots = state.wisata.write().map_err(|_| AppError::lock())?;
    let payload = payload.into_inner();
    let spot = TourismSpot {
        id: next_id(&spots, |s| s.id),
        name: payload.name,
        description: payload.description,
        address: payload.address,
        latitude: payload.latitude,
        longitude: payload.longitude,
        category: payload.category,
        gallery: payload.gallery,
    };
    info!(id = spot.id, name = %spot.name, "tourism spot created");
    spots.push(spot.clone());
    Ok(HttpResponse::Created().json(spot))
}

#[put("/admin/wisata/{id}")]
pub async fn update_wisata(
    path: web::Path<i32>,
    state: web::Data<AppState>,
    payload: web::Json<SpotPayload>,
) -> Result<HttpResponse, AppError> {
    validate_spot(&payload)?;
    let id = path.into_inner();
    let mut spots = state.wisata.write().map_err(|_| AppError::lock())?;
    let spot = spots
        .iter_mut()
        .find(|s| s.id == id)
        .ok_or(AppError::NotFound("tourism spot"))?;
    let payload = payload.into_inner();
    spot.name = payload.name;
    spot.description = payload.description;
    spot.address = payload.address;
    spot.latitude = payload.latitude;
    spot.longitude = payload.longitude;
    spot.category = payload.category;
    spot.gallery = payload.gallery;
    Ok(HttpResponse::Ok().json(&*spot))
}

#[delete("/admin/wisata/{id}")]
pub async fn delete_wisata(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let mut spots = state.wisata.write().map_err(|_| AppError::lock())?;
    let before = spots.len();
    spots.retain(|s| s.id != id);
    if spots.len() == before {
        return Err(AppError::NotFound("tourism spot"));
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "deleted" })))
}

#[post("/admin/umkm")]
pub async fn create_umkm(
    state: web::Data<AppState>,
    payload: web::Json<SpotPayload>,
) -> Result<HttpResponse, AppError> {
    validate_spot(&payload)?;
    let mut umkms = state.umkm.write().map_err(|_| AppError::lock())?;
    let payload = payload.into_inner();
    let umkm = Umkm {
        id: next_id(&umkms, |u| u.id),
        name: payload.name,
        description: payload.description,
        address: payload.address,
        latitude: payload.latitude,
        longitude: payload.longitude,
        category: payload.category,
        gallery: payload.gallery,
    };
    info!(id = umkm.id, name = %umkm.name, "umkm created");
    umkms.push(umkm.clone());
    Ok(HttpResponse::Created().json(umkm))
}

#[put("/admin/umkm/{id}")]
pub async fn update_umkm(
    path: web::Path<i32>,
    state: web::Data<AppState>,
    payload: web::Json<SpotPayload>,
) -> Result<HttpResponse, AppError> {
    validate_spot(&payload)?;
    let id = path.into_inner();
    let mut umkms = state.umkm.write().map_err(|_| AppError::lock())?;
    let umkm = umkms
        .iter_mut()
        .find(|u| u.id == id)
        .ok_or(AppError::NotFound("umkm"))?;
    let payload = payload.into_inner();
    umkm.name = payload.name;
    umkm.description = payload.description;
    umkm.address = payload.address;
    umkm.latitude = payload.latitude;
    umkm.longitude = payload.longitude;
    umkm.category = payload.category;
    umkm.gallery = payload.gallery;
    Ok(HttpResponse::Ok().json(&*umkm))
}

#[delete("/admin/umkm/{id}")]
pub async fn delete_umkm(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let mut umkms = state.umkm.write().map_err(|_| AppError::lock())?;
    let before = umkms.len();
    umkms.retain(|u| u.id != id);
    if umkms.len() == before {
        return Err(AppError::NotFound("umkm"));
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "deleted" })))
}

#[derive(Debug, Deserialize)]
pub struct AgendaPayload {
    pub title: String,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub location: String,
    pub start_time: DateTime<Utc>,
    pub end_time: Option<DateTime<Utc>>,
    pub poster: Option<String>,
}

fn validate_agenda(payload: &AgendaPayload) -> Result<(), AppError> {
    let mut v = Validator::default();
    v.require("title", &payload.title);
    if let Some(end) = payload.end_time {
        if end < payload.start_time {
            v.fail("end_time", "harus setelah waktu mulai");
        }
    }
    v.finish()
}

#[post("/admin/agenda")]
pub async fn create_agenda(
    state: web::Data<AppState>,
    payload: web::Json<AgendaPayload>,
) -> Result<HttpResponse, AppError> {
    validate_agenda(&payload)?;
    let mut agenda = state.agenda.write().map_err(|_| AppError::lock())?;
    let payload = payload.into_inner();
    let entry = Agenda {
        id: next_id(&agenda, |a| a.id),
        title: payload.title,
        description: payload.description,
        location: payload.location,
        start_time: payload.start_time,
        end_time: payload.end_time,
        poster: payload.poster,
    };
    agenda.push(entry.clone());
    Ok(HttpResponse::Created().json(entry))
}

#[put("/admin/agenda/{id}")]
pub async fn update_agenda(
    path: web::Path<i32>,
    state: web::Data<AppState>,
    payload: web::Json<AgendaPayload>,
) -> Result<HttpResponse, AppError> {
    validate_agenda(&payload)?;
    let id = path.into_inner();
    let mut agenda = state.agenda.write().map_err(|_| AppError::lock())?;
    let entry = agenda
        .iter_mut()
        .find(|a| a.id == id)
        .ok_or(AppError::NotFound("agenda"))?;
    let payload = payload.into_inner();
    entry.title = payload.title;
    entry.description = payload.description;
    entry.location = payload.location;
    entry.start_time = payload.start_time;
    entry.end_time = payload.end_time;
    entry.poster = payload.poster;
    Ok(HttpResponse::Ok().json(&*entry))
}

#[delete("/admin/agenda/{id}")]
pub async fn delete_agenda(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let mut agenda = state.agenda.write().map_err(|_| AppError::lock())?;
    let before = agenda.len();
    agenda.retain(|a| a.id != id);
    if agenda.len() == before {
        return Err(AppError::NotFound("agenda"));
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "deleted" })))
}

/// Upload payload: the client has already put the file somewhere and sends
/// the original filename; the server mints the stored path. Tags go through
/// the same trim/dedup rules as the chip input.
#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PhotoPayload {
    pub title: String,
    pub category: PhotoCategory,
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    #[serde(default)]
    pub tags: Vec<String>,
    pub filename: String,
    pub user_name: String,
}

#[post("/admin/photos")]
pub async fn create_photo(
    state: web::Data<AppState>,
    payload: web::Json<PhotoPayload>,
) -> Result<HttpResponse, AppError> {
    let mut v = Validator::default();
    v.require("title", &payload.title);
    v.require("filename", &payload.filename);
    v.finish()?;

    let mut photos = state.photos.write().map_err(|_| AppError::lock())?;
    let payload = payload.into_inner();
    let photo = Photo {
        id: next_id(&photos, |p| p.id),
        title: payload.title,
        category: payload.category,
        tags: normalize_tags(payload.tags),
        image_path: format!("/images/{}-{}", Uuid::new_v4(), payload.filename),
        downloads: 0,
        likes: 0,
        views: 0,
        user_name: payload.user_name,
        is_liked: false,
    };
    info!(id = photo.id, title = %photo.title, "photo registered");
    photos.push(photo.clone());
    state.upload_modal.close();
    Ok(HttpResponse::Created().json(photo))
}

#[serde_as]
#[derive(Debug, Deserialize)]
pub struct PhotoUpdatePayload {
    pub title: String,
    pub category: PhotoCategory,
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    #[serde(default)]
    pub tags: Vec<String>,
}

#[put("/admin/photos/{id}")]
pub async fn update_photo(
    path: web::Path<i32>,
    state: web::Data<AppState>,
    payload: web::Json<PhotoUpdatePayload>,
) -> Result<HttpResponse, AppError> {
    let mut v = Validator::default();
    v.require("title", &payload.title);
    v.finish()?;

    let id = path.into_inner();
    let mut photos = state.photos.write().map_err(|_| AppError::lock())?;
    let photo = photos
        .iter_mut()
        .find(|p| p.id == id)
        .ok_or(AppError::NotFound("photo"))?;
    let payload = payload.into_inner();
    photo.title = payload.title;
    photo.category = payload.category;
    photo.tags = normalize_tags(payload.tags);
    Ok(HttpResponse::Ok().json(&*photo))
}

#[delete("/admin/photos/{id}")]
pub async fn delete_photo(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let mut photos = state.photos.write().map_err(|_| AppError::lock())?;
    let before = photos.len();
    photos.retain(|p| p.id != id);
    if photos.len() == before {
        return Err(AppError::NotFound("photo"));
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "deleted" })))
}

#[derive(Debug, Deserialize)]
pub struct CategoryPayload {
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PoiKind,
}

#[post("/admin/categories")]
pub async fn create_category(
    state: web::Data<AppState>,
    payload: web::Json<CategoryPayload>,
) -> Result<HttpResponse, AppError> {
    let mut v = Validator::default();
    v.require("name", &payload.name);
    v.finish()?;

    let mut categories = state.categories.write().map_err(|_| AppError::lock())?;
    let payload = payload.into_inner();
    let category = Category {
        id: next_id(&categories, |c| c.id),
        name: payload.name,
        kind: payload.kind,
    };
    categories.push(category.clone());
    Ok(HttpResponse::Created().json(category))
}

#[put("/admin/categories/{id}")]
pub async fn update_category(
    path: web::Path<i32>,
    state: web::Data<AppState>,
    payload: web::Json<CategoryPayload>,
) -> Result<HttpResponse, AppError> {
    let mut v = Validator::default();
    v.require("name", &payload.name);
    v.finish()?;

    let id = path.into_inner();
    let mut categories = state.categories.write().map_err(|_| AppError::lock())?;
    let category = categories
        .iter_mut()
        .find(|c| c.id == id)
        .ok_or(AppError::NotFound("category"))?;
    let payload = payload.into_inner();
    category.name = payload.name;
    category.kind = payload.kind;
    Ok(HttpResponse::Ok().json(&*category))
}

#[delete("/admin/categories/{id}")]
pub async fn delete_category(
    path: web::Path<i32>,
    state: web::Data<AppState>,
) -> Result<HttpResponse, AppError> {
    let id = path.into_inner();
    let mut categories = state.categories.write().map_err(|_| AppError::lock())?;
    let before = categories.len();
    categories.retain(|c| c.id != id);
    if categories.len() == before {
        return Err(AppError::NotFound("category"));
    }
    Ok(HttpResponse::Ok().json(json!({ "message": "deleted" })))
}
