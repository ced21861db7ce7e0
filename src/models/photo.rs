use derive_more::Display;
use serde::{Deserialize, Serialize};
use serde_with::{formats::PreferMany, serde_as, OneOrMany};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display)]
#[serde(rename_all = "lowercase")]
pub enum PhotoCategory {
    #[display(fmt = "kerajinan")]
    Kerajinan,
    #[display(fmt = "wisata")]
    Wisata,
}

/// A photo-bank entry. Counters are owned by the server and mutated only by
/// the like/download/detail actions; `is_liked` reflects the current viewer.
/// Tags may arrive as a scalar in older payload shapes, so deserialization
/// accepts one-or-many and always holds a list internally.
#[serde_as]
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Photo {
    pub id: i32,
    pub title: String,
    pub category: PhotoCategory,
    #[serde_as(as = "OneOrMany<_, PreferMany>")]
    #[serde(default)]
    pub tags: Vec<String>,
    pub image_path: String,
    #[serde(default)]
    pub downloads: u32,
    #[serde(default)]
    pub likes: u32,
    #[serde(default)]
    pub views: u32,
    pub user_name: String,
    #[serde(default)]
    pub is_liked: bool,
}

impl Photo {
    pub fn has_all_tags(&self, wanted: &[String]) -> bool {
        wanted.iter().all(|w| self.tags.iter().any(|t| t == w))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn scalar_tag_payload_deserializes_to_a_list() {
        let photo: Photo = serde_json::from_str(
            r#"{
                "id": 1,
                "title": "Senja di Dermaga",
                "category": "wisata",
                "tags": "pantai",
                "image_path": "/images/senja.jpg",
                "user_name": "warga"
            }"#,
        )
        .unwrap();
        assert_eq!(photo.tags, vec!["pantai"]);

        // Outbound shape is always a list, even for a single tag.
        let json = serde_json::to_value(&photo).unwrap();
        assert!(json["tags"].is_array());
    }

    #[test]
    fn tag_matching_requires_every_selected_tag() {
        let photo: Photo = serde_json::from_str(
            r#"{
                "id": 2,
                "title": "Anyaman",
                "category": "kerajinan",
                "tags": ["kerajinan", "anyaman"],
                "image_path": "/images/anyaman.jpg",
                "user_name": "warga"
            }"#,
        )
        .unwrap();
        assert!(photo.has_all_tags(&["anyaman".to_string()]));
        assert!(!photo.has_all_tags(&["anyaman".to_string(), "pantai".to_string()]));
    }
}
