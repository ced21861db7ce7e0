use actix_web::{get, web, HttpResponse};
use tracing::warn;

use crate::config::Config;
use crate::error::AppError;
use crate::map::Boundary;

/// Serves the administrative-boundary GeoJSON asset. A missing or malformed
/// file answers 404 so the map client simply omits the polygon layer; it is
/// never a hard failure.
#[get("/boundary")]
pub async fn boundary(config: web::Data<Config>) -> Result<HttpResponse, AppError> {
    let raw = match tokio::fs::read_to_string(&config.boundary_path).await {
        Ok(raw) => raw,
        Err(e) => {
            warn!("boundary asset {} unreadable: {e}", config.boundary_path);
            return Err(AppError::NotFound("boundary layer"));
        }
    };
    if let Err(e) = Boundary::from_json(&raw) {
        warn!("boundary asset {} is malformed: {e}", config.boundary_path);
        return Err(AppError::NotFound("boundary layer"));
    }
    Ok(HttpResponse::Ok()
        .content_type("application/geo+json")
        .body(raw))
}
