use serde::{Deserialize, Serialize};

use crate::models::Coordinate;

/// Fixed fill palette for boundary polygons. Indexing by polygon id modulo
/// the palette size gives every region a stable color with low repetition
/// between neighbors.
pub const PALETTE: [&str; 6] = [
    "#1d4ed8", "#047857", "#b45309", "#be123c", "#6d28d9", "#0e7490",
];

pub fn palette_color(id: i64) -> &'static str {
    PALETTE[id.rem_euclid(PALETTE.len() as i64) as usize]
}

/// Administrative-boundary overlay parsed from a GeoJSON FeatureCollection.
/// Only Polygon and MultiPolygon geometries occur in the asset; anything
/// else fails the parse and the caller drops the whole layer (non-fatal).
#[derive(Debug, Clone, Deserialize)]
pub struct Boundary {
    #[serde(default)]
    pub features: Vec<BoundaryFeature>,
}

#[derive(Debug, Clone, Deserialize)]
pub struct BoundaryFeature {
    #[serde(default)]
    pub properties: BoundaryProps,
    pub geometry: Geometry,
}

#[derive(Debug, Clone, Default, Deserialize)]
pub struct BoundaryProps {
    #[serde(default)]
    pub id: i64,
    pub name: Option<String>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(tag = "type", content = "coordinates")]
pub enum Geometry {
    // GeoJSON positions are [longitude, latitude].
    Polygon(Vec<Vec<[f64; 2]>>),
    MultiPolygon(Vec<Vec<Vec<[f64; 2]>>>),
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Bounds {
    pub min: Coordinate,
    pub max: Coordinate,
}

impl Boundary {
    pub fn from_json(json: &str) -> Result<Boundary, serde_json::Error> {
        serde_json::from_str(json)
    }

    pub fn fill_color(feature: &BoundaryFeature) -> &'static str {
        palette_color(feature.properties.id)
    }

    /// Bounding box over every ring of every polygon; `None` when the
    /// collection carries no positions at all.
    pub fn bounds(&self) -> Option<Bounds> {
        let mut bounds: Option<Bounds> = None;
        for feature in &self.features {
            let rings: Vec<&Vec<[f64; 2]>> = match &feature.geometry {
                Geometry::Polygon(rings) => rings.iter().collect(),
                Geometry::MultiPolygon(polygons) => polygons.iter().flatten().collect(),
            };
            for [lng, lat] in rings.into_iter().flatten() {
                let b = bounds.get_or_insert(Bounds {
                    min: Coordinate { lat: *lat, lng: *lng },
                    max: Coordinate { lat: *lat, lng: *lng },
                });
                b.min.lat = b.min.lat.min(*lat);
                b.min.lng = b.min.lng.min(*lng);
                b.max.lat = b.max.lat.max(*lat);
                b.max.lng = b.max.lng.max(*lng);
            }
        }
        bounds
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const SAMPLE: &str = r#"{
        "type": "FeatureCollection",
        "features": [
            {
                "properties": {"id": 1, "name": "Dusun Mawar"},
                "geometry": {
                    "type": "Polygon",
                    "coordinates": [[[109.20, -0.30], [109.30, -0.30], [109.30, -0.20], [109.20, -0.20], [109.20, -0.30]]]
                }
            },
            {
                "properties": {"id": 2, "name": "Dusun Melati"},
                "geometry": {
                    "type": "MultiPolygon",
                    "coordinates": [[[[109.30, -0.22], [109.34, -0.22], [109.34, -0.18], [109.30, -0.18], [109.30, -0.22]]]]
                }
            }
        ]
    }"#;

    #[test]
    fn bounds_cover_all_polygons() {
        let boundary = Boundary::from_json(SAMPLE).unwrap();
        let bounds = boundary.bounds().unwrap();
        assert_eq!(bounds.min.lng, 109.20);
        assert_eq!(bounds.max.lng, 109.34);
        assert_eq!(bounds.min.lat, -0.30);
        assert_eq!(bounds.max.lat, -0.18);
    }

    #[test]
    fn palette_is_stable_and_wraps_by_id() {
        assert_eq!(palette_color(0), PALETTE[0]);
        assert_eq!(palette_color(7), PALETTE[1]);
        assert_eq!(palette_color(7), palette_color(7));
    }

    #[test]
    fn malformed_geojson_is_an_error_not_a_panic() {
        assert!(Boundary::from_json("{\"type\": \"oops\"").is_err());
        assert!(Boundary::from_json(r#"{"features": [{"geometry": {"type": "Point", "coordinates": [1, 2]}}]}"#).is_err());
    }

    #[test]
    fn empty_collection_has_no_bounds() {
        let boundary = Boundary::from_json(r#"{"features": []}"#).unwrap();
        assert!(boundary.bounds().is_none());
    }
}
