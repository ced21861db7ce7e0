use std::env;
use std::fmt::Display;
use std::str::FromStr;

use tracing::warn;

#[derive(Debug, Clone)]
pub struct Config {
    pub host: String,
    pub port: u16,
    /// Path of the administrative-boundary GeoJSON asset. A missing file is
    /// not fatal: the boundary endpoint answers 404 and the map degrades to
    /// base layer plus markers.
    pub boundary_path: String,
    /// When set, CORS is restricted to this origin; otherwise any origin is
    /// allowed (development default).
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Self {
        Config {
            host: load_or("HOST", "0.0.0.0".to_string()),
            port: load_or("PORT", 8000u16),
            boundary_path: load_or("BOUNDARY_PATH", "assets/batas-dusun.geojson".to_string()),
            cors_origin: env::var("CORS_ORIGIN").ok().filter(|v| !v.is_empty()),
        }
    }
}

fn load_or<T>(key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match env::var(key) {
        Ok(raw) => raw.parse().unwrap_or_else(|e| {
            warn!("invalid {key} value ({e}), using default {default}");
            default
        }),
        Err(_) => default,
    }
}
