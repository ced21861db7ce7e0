use derive_more::Display;
use serde::{Deserialize, Serialize};

/// Discriminator unifying tourism spots and local businesses for map and
/// list display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum PoiKind {
    #[display(fmt = "wisata")]
    Wisata,
    #[display(fmt = "umkm")]
    Umkm,
}

/// A parsed map position. The server stores latitude/longitude as strings;
/// parsing happens once, here, and anything non-numeric is treated as "no
/// coordinate" rather than an error.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinate {
    pub lat: f64,
    pub lng: f64,
}

impl Coordinate {
    pub fn parse(lat: Option<&str>, lng: Option<&str>) -> Option<Coordinate> {
        let lat = lat?.trim().parse::<f64>().ok()?;
        let lng = lng?.trim().parse::<f64>().ok()?;
        Some(Coordinate { lat, lng })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TourismSpot {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub address: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub category: String,
    #[serde(default)]
    pub gallery: Vec<String>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Umkm {
    pub id: i32,
    pub name: String,
    pub description: String,
    pub address: String,
    pub latitude: Option<String>,
    pub longitude: Option<String>,
    pub category: String,
    #[serde(default)]
    pub gallery: Vec<String>,
}

/// Unified point of interest, tagged with its `type` discriminator.
#[derive(Debug, Clone, Serialize)]
pub struct Poi {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: PoiKind,
    pub name: String,
    pub description: String,
    pub address: String,
    pub category: String,
    pub coordinate: Option<Coordinate>,
    pub gallery: Vec<String>,
}

impl Poi {
    pub fn key(&self) -> (PoiKind, i32) {
        (self.kind, self.id)
    }
}

impl From<&TourismSpot> for Poi {
    fn from(spot: &TourismSpot) -> Self {
        Poi {
            id: spot.id,
            kind: PoiKind::Wisata,
            name: spot.name.clone(),
            description: spot.description.clone(),
            address: spot.address.clone(),
            category: spot.category.clone(),
            coordinate: Coordinate::parse(spot.latitude.as_deref(), spot.longitude.as_deref()),
            gallery: spot.gallery.clone(),
        }
    }
}

impl From<&Umkm> for Poi {
    fn from(umkm: &Umkm) -> Self {
        Poi {
            id: umkm.id,
            kind: PoiKind::Umkm,
            name: umkm.name.clone(),
            description: umkm.description.clone(),
            address: umkm.address.clone(),
            category: umkm.category.clone(),
            coordinate: Coordinate::parse(umkm.latitude.as_deref(), umkm.longitude.as_deref()),
            gallery: umkm.gallery.clone(),
        }
    }
}

/// Merges both collections into one list, sorted alphabetically by name
/// (case-insensitive) so rendering order is deterministic regardless of
/// insertion order.
pub fn merge_points(spots: &[TourismSpot], umkms: &[Umkm]) -> Vec<Poi> {
    let mut points: Vec<Poi> = spots
        .iter()
        .map(Poi::from)
        .chain(umkms.iter().map(Poi::from))
        .collect();
    points.sort_by(|a, b| {
        a.name
            .to_lowercase()
            .cmp(&b.name.to_lowercase())
            .then_with(|| a.name.cmp(&b.name))
            .then_with(|| a.id.cmp(&b.id))
    });
    points
}

#[cfg(test)]
mod tests {
    use super::*;

    fn spot(id: i32, name: &str, lat: Option<&str>, lng: Option<&str>) -> TourismSpot {
        TourismSpot {
            id,
            name: name.to_string(),
            description: String::new(),
            address: String::new(),
            latitude: lat.map(String::from),
            longitude: lng.map(String::from),
            category: "Alam".to_string(),
            gallery: Vec::new(),
        }
    }

    fn umkm(id: i32, name: &str) -> Umkm {
        Umkm {
            id,
            name: name.to_string(),
            description: String::new(),
            address: String::new(),
            latitude: None,
            longitude: None,
            category: "Kuliner".to_string(),
            gallery: Vec::new(),
        }
    }

    #[test]
    fn merge_sorts_by_name_across_kinds() {
        let spots = vec![spot(1, "Pantai Pasir Panjang", None, None)];
        let umkms = vec![umkm(1, "Pantai Kopi Kita")];
        let merged = merge_points(&spots, &umkms);
        assert_eq!(merged[0].name, "Pantai Kopi Kita");
        assert_eq!(merged[0].kind, PoiKind::Umkm);
        assert_eq!(merged[1].kind, PoiKind::Wisata);
    }

    #[test]
    fn coordinate_parsing_rejects_non_numeric_input() {
        assert!(Coordinate::parse(Some("-0.26"), Some("109.24")).is_some());
        assert!(Coordinate::parse(Some("abc"), Some("109.24")).is_none());
        assert!(Coordinate::parse(None, Some("109.24")).is_none());
        assert!(Coordinate::parse(Some(" -0.26 "), Some(" 109.24 ")).is_some());
    }

    #[test]
    fn poi_without_coordinates_still_carries_list_fields() {
        let merged = merge_points(&[spot(7, "Hutan Mangrove", None, None)], &[]);
        assert!(merged[0].coordinate.is_none());
        assert_eq!(merged[0].name, "Hutan Mangrove");
    }
}
