pub mod agenda;
pub mod category;
pub mod pagination;
pub mod photo;
pub mod poi;

pub use agenda::{Agenda, AgendaStatus};
pub use category::Category;
pub use pagination::{Page, PageLink};
pub use photo::{Photo, PhotoCategory};
pub use poi::{merge_points, Coordinate, Poi, PoiKind, TourismSpot, Umkm};
