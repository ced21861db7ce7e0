pub mod admin_handler;
pub mod agenda_handler;
pub mod boundary_handler;
pub mod photo_handler;
pub mod poi_handler;

use serde::Serialize;

use crate::filter::FilterState;
use crate::models::Page;

/// Page data injection shape shared by every listing endpoint: the page
/// slice plus the applied filters echoed back, so a client can seed its
/// filter controller from the response it was served with.
#[derive(Debug, Serialize)]
pub struct ListResponse<T> {
    #[serde(flatten)]
    pub page: Page<T>,
    pub filters: FilterState,
}
