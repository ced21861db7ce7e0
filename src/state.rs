use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::RwLock;

use chrono::{Duration, Utc};

use crate::models::{Agenda, Category, Photo, PhotoCategory, PoiKind, TourismSpot, Umkm};

/// Open/closed flag for the photo upload modal: the one piece of shared UI
/// state that crosses component boundaries. Kept as a single boolean with
/// two pure actions so it never grows into a general store.
#[derive(Debug, Default)]
pub struct UploadModal {
    open: AtomicBool,
}

impl UploadModal {
    pub fn open(&self) {
        self.open.store(true, Ordering::Relaxed);
    }

    pub fn close(&self) {
        self.open.store(false, Ordering::Relaxed);
    }

    pub fn is_open(&self) -> bool {
        self.open.load(Ordering::Relaxed)
    }
}

/// In-memory application state. Persistence, auth and file storage are all
/// external collaborators; the handlers only project and mutate these
/// collections the way the real server would.
#[derive(Debug, Default)]
pub struct AppState {
    pub wisata: RwLock<Vec<TourismSpot>>,
    pub umkm: RwLock<Vec<Umkm>>,
    pub agenda: RwLock<Vec<Agenda>>,
    pub photos: RwLock<Vec<Photo>>,
    pub categories: RwLock<Vec<Category>>,
    pub upload_modal: UploadModal,
}

pub fn next_id<T>(items: &[T], id_of: impl Fn(&T) -> i32) -> i32 {
    items.iter().map(id_of).max().unwrap_or(0) + 1
}

impl AppState {
    /// Demo dataset used by `main` and the handler tests.
    pub fn seeded() -> Self {
        let state = AppState::default();

        *state.wisata.write().unwrap() = vec![
            TourismSpot {
                id: 1,
                name: "Pantai Pasir Panjang".to_string(),
                description: "Pantai berpasir putih di ujung desa.".to_string(),
                address: "Dusun Mawar".to_string(),
                latitude: Some("-0.26".to_string()),
                longitude: Some("109.24".to_string()),
                category: "Alam".to_string(),
                gallery: vec!["/images/pantai-1.jpg".to_string()],
            },
            TourismSpot {
                id: 2,
                name: "Air Terjun Riam Berasap".to_string(),
                description: "Air terjun musiman dengan jalur trekking.".to_string(),
                address: "Dusun Melati".to_string(),
                latitude: Some("-0.31".to_string()),
                longitude: Some("109.21".to_string()),
                category: "Alam".to_string(),
                gallery: Vec::new(),
            },
            TourismSpot {
                id: 3,
                name: "Hutan Mangrove".to_string(),
                description: "Kawasan konservasi mangrove.".to_string(),
                address: "Dusun Mawar".to_string(),
                latitude: None,
                longitude: None,
                category: "Alam".to_string(),
                gallery: Vec::new(),
            },
        ];

        *state.umkm.write().unwrap() = vec![
            Umkm {
                id: 1,
                name: "Kopi Liberika Sungai Enau".to_string(),
                description: "Kedai dan kebun kopi liberika.".to_string(),
                address: "Jalan Poros Desa No. 12".to_string(),
                latitude: Some("-0.27".to_string()),
                longitude: Some("109.25".to_string()),
                category: "Kuliner".to_string(),
                gallery: Vec::new(),
            },
            Umkm {
                id: 2,
                name: "Anyaman Bidai Ibu Saudah".to_string(),
                description: "Kerajinan anyaman rotan dan bidai.".to_string(),
                address: "Dusun Melati".to_string(),
                // Broken coordinate seed: must be skipped by the map, kept in lists.
                latitude: Some("?".to_string()),
                longitude: Some("109.26".to_string()),
                category: "Kerajinan".to_string(),
                gallery: Vec::new(),
            },
        ];

        let now = Utc::now();
        *state.agenda.write().unwrap() = vec![
            Agenda {
                id: 1,
                title: "Festival Budaya Desa".to_string(),
                description: "Pentas seni dan pasar rakyat.".to_string(),
                location: "Lapangan Desa".to_string(),
                start_time: now + Duration::days(30),
                end_time: Some(now + Duration::days(31)),
                poster: Some("/images/festival.jpg".to_string()),
            },
            Agenda {
                id: 2,
                title: "Pelatihan UMKM".to_string(),
                description: "Pelatihan pemasaran digital.".to_string(),
                location: "Balai Desa".to_string(),
                start_time: now - Duration::days(30),
                end_time: None,
                poster: None,
            },
        ];

        *state.photos.write().unwrap() = vec![
            Photo {
                id: 1,
                title: "Senja di Dermaga".to_string(),
                category: PhotoCategory::Wisata,
                tags: vec!["pantai".to_string(), "senja".to_string()],
                image_path: "/images/senja.jpg".to_string(),
                downloads: 12,
                likes: 40,
                views: 210,
                user_name: "Rahma".to_string(),
                is_liked: false,
            },
            Photo {
                id: 2,
                title: "Anyaman Bidai".to_string(),
                category: PhotoCategory::Kerajinan,
                tags: vec!["kerajinan".to_string(), "anyaman".to_string()],
                image_path: "/images/anyaman.jpg".to_string(),
                downloads: 3,
                likes: 7,
                views: 55,
                user_name: "Saudah".to_string(),
                is_liked: false,
            },
            Photo {
                id: 3,
                title: "Panen Kopi".to_string(),
                category: PhotoCategory::Wisata,
                tags: vec!["kopi".to_string()],
                image_path: "/images/kopi.jpg".to_string(),
                downloads: 8,
                likes: 19,
                views: 90,
                user_name: "Rahma".to_string(),
                is_liked: true,
            },
        ];

        *state.categories.write().unwrap() = vec![
            Category {
                id: 1,
                name: "Alam".to_string(),
                kind: PoiKind::Wisata,
            },
            Category {
                id: 2,
                name: "Kuliner".to_string(),
                kind: PoiKind::Umkm,
            },
            Category {
                id: 3,
                name: "Kerajinan".to_string(),
                kind: PoiKind::Umkm,
            },
        ];

        state
    }
}
