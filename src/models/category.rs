use serde::{Deserialize, Serialize};

use super::poi::PoiKind;

/// Reference category used to populate selects and badges on the directory
/// pages; each category belongs to either the wisata or the UMKM side.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: i32,
    pub name: String,
    #[serde(rename = "type")]
    pub kind: PoiKind,
}
