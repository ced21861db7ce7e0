use serde::Serialize;
use tracing::warn;

use super::boundary::Boundary;
use crate::models::{merge_points, Coordinate, Poi, PoiKind, TourismSpot, Umkm};

/// Zoom applied when a point is focused from the list or the marker layer.
pub const FOCUS_ZOOM: u8 = 16;
pub const DEFAULT_ZOOM: u8 = 13;

/// Initial viewport before boundary data arrives: the village center.
pub const DEFAULT_CENTER: Coordinate = Coordinate {
    lat: -0.26,
    lng: 109.24,
};

/// Extra margin, as a fraction of the bounding-box span, applied when
/// fitting the viewport to the boundary layer.
const FIT_PADDING: f64 = 0.15;

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Viewport {
    pub center: Coordinate,
    pub zoom: u8,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MarkerIcon {
    Wisata,
    Umkm,
    Active,
}

impl MarkerIcon {
    fn for_kind(kind: PoiKind) -> MarkerIcon {
        match kind {
            PoiKind::Wisata => MarkerIcon::Wisata,
            PoiKind::Umkm => MarkerIcon::Umkm,
        }
    }
}

#[derive(Debug, Clone, Serialize)]
pub struct Marker {
    pub id: i32,
    #[serde(rename = "type")]
    pub kind: PoiKind,
    pub name: String,
    pub coordinate: Coordinate,
    pub icon: MarkerIcon,
}

/// View state for the interactive map: the merged, sorted POI collection,
/// the active category filter, the focused point, and the lazily loaded
/// boundary layer. Category filtering is purely local; it never refetches.
#[derive(Debug)]
pub struct MapOverlay {
    points: Vec<Poi>,
    kind_filter: Option<PoiKind>,
    active: Option<(PoiKind, i32)>,
    boundary: Option<Boundary>,
    viewport: Viewport,
}

impl MapOverlay {
    pub fn new(spots: &[TourismSpot], umkms: &[Umkm]) -> Self {
        MapOverlay {
            points: merge_points(spots, umkms),
            kind_filter: None,
            active: None,
            boundary: None,
            viewport: Viewport {
                center: DEFAULT_CENTER,
                zoom: DEFAULT_ZOOM,
            },
        }
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn boundary(&self) -> Option<&Boundary> {
        self.boundary.as_ref()
    }

    /// `None` shows everything; otherwise only points of the given kind.
    pub fn set_kind_filter(&mut self, filter: Option<PoiKind>) {
        self.kind_filter = filter;
    }

    /// The filtered list, including points without coordinates (they still
    /// belong in the side list even though they never become markers).
    pub fn visible(&self) -> Vec<&Poi> {
        self.points
            .iter()
            .filter(|p| self.kind_filter.map_or(true, |k| p.kind == k))
            .collect()
    }

    /// Marker layer: visible points with a valid coordinate. The active
    /// point carries the distinct active icon; everything else keeps one of
    /// the two kind icons.
    pub fn markers(&self) -> Vec<Marker> {
        self.visible()
            .into_iter()
            .filter_map(|p| {
                let coordinate = p.coordinate?;
                Some(Marker {
                    id: p.id,
                    kind: p.kind,
                    name: p.name.clone(),
                    coordinate,
                    icon: if self.active == Some(p.key()) {
                        MarkerIcon::Active
                    } else {
                        MarkerIcon::for_kind(p.kind)
                    },
                })
            })
            .collect()
    }

    pub fn active(&self) -> Option<&Poi> {
        let key = self.active?;
        self.points.iter().find(|p| p.key() == key)
    }

    /// Focuses a point selected from the list or the marker layer. When the
    /// point has a coordinate the viewport recenters on it at [`FOCUS_ZOOM`]
    /// and the new viewport is returned; a coordinate-less point still
    /// becomes active but leaves the viewport alone.
    pub fn focus(&mut self, kind: PoiKind, id: i32) -> Option<Viewport> {
        let point = self.points.iter().find(|p| p.key() == (kind, id))?;
        let coordinate = point.coordinate;
        self.active = Some((kind, id));
        if let Some(center) = coordinate {
            self.viewport = Viewport {
                center,
                zoom: FOCUS_ZOOM,
            };
            return Some(self.viewport);
        }
        None
    }

    pub fn clear_focus(&mut self) {
        self.active = None;
    }

    /// Installs boundary data fetched from the static asset and fits the
    /// viewport to its bounding box with a fixed padding margin. Called at
    /// most once, when (and only when) the fetch succeeds.
    pub fn set_boundary(&mut self, boundary: Boundary) {
        match boundary.bounds() {
            Some(bounds) => {
                let lat_span = bounds.max.lat - bounds.min.lat;
                let lng_span = bounds.max.lng - bounds.min.lng;
                let span = lat_span.max(lng_span).max(f64::EPSILON) * (1.0 + FIT_PADDING);
                self.viewport = Viewport {
                    center: Coordinate {
                        lat: (bounds.min.lat + bounds.max.lat) / 2.0,
                        lng: (bounds.min.lng + bounds.max.lng) / 2.0,
                    },
                    zoom: zoom_for_span(span),
                };
            }
            None => warn!("boundary layer has no coordinates, keeping default viewport"),
        }
        self.boundary = Some(boundary);
    }
}

/// Smallest zoom level whose viewport still covers `span` degrees, clamped
/// to the levels the base tiles provide.
fn zoom_for_span(span: f64) -> u8 {
    let zoom = (360.0 / span).log2().floor();
    zoom.clamp(3.0, 17.0) as u8
}
