use actix_web::dev::{Service, ServiceResponse};
use actix_web::{test, web, App, Error};
use serde_json::Value;

use crate::config::Config;
use crate::routes;
use crate::state::AppState;

fn test_config(boundary_path: &str) -> Config {
    Config {
        host: "127.0.0.1".to_string(),
        port: 0,
        boundary_path: boundary_path.to_string(),
        cors_origin: None,
    }
}

async fn service(
    boundary_path: &str,
) -> impl Service<actix_http::Request, Response = ServiceResponse, Error = Error> {
    test::init_service(
        App::new()
            .app_data(web::Data::new(AppState::seeded()))
            .app_data(web::Data::new(test_config(boundary_path)))
            .configure(routes::config),
    )
    .await
}

async fn get_json(
    app: &impl Service<actix_http::Request, Response = ServiceResponse, Error = Error>,
    uri: &str,
) -> Value {
    let req = test::TestRequest::get().uri(uri).to_request();
    let resp = test::call_service(app, req).await;
    assert!(resp.status().is_success(), "GET {uri} failed");
    let body = test::read_body(resp).await;
    serde_json::from_slice(&body).unwrap()
}

#[actix_web::test]
async fn photo_list_echoes_defaults_and_returns_everything() {
    let app = service("missing.geojson").await;
    let body = get_json(&app, "/api/photos").await;

    assert_eq!(body["data"].as_array().unwrap().len(), 3);
    assert_eq!(body["filters"]["category"], "all");
    assert_eq!(body["filters"]["sort"], "newest");
    assert_eq!(body["meta"]["total"], 3);

    // Newest (highest id) first by default.
    assert_eq!(body["data"][0]["id"], 3);
}

#[actix_web::test]
async fn photo_list_applies_filters_and_echoes_them_back() {
    let app = service("missing.geojson").await;
    let body = get_json(&app, "/api/photos?category=wisata&tags[]=pantai&sort=popular").await;

    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Senja di Dermaga");

    assert_eq!(body["filters"]["category"], "wisata");
    assert_eq!(body["filters"]["tags"], serde_json::json!(["pantai"]));
    assert_eq!(body["filters"]["sort"], "popular");
    assert_eq!(body["filters"]["search"], "");
}

#[actix_web::test]
async fn scalar_tag_query_is_coerced_to_a_list() {
    let app = service("missing.geojson").await;
    let body = get_json(&app, "/api/photos?tags=pantai").await;
    assert_eq!(body["filters"]["tags"], serde_json::json!(["pantai"]));
    assert_eq!(body["data"].as_array().unwrap().len(), 1);
}

#[actix_web::test]
async fn popular_sort_orders_by_likes() {
    let app = service("missing.geojson").await;
    let body = get_json(&app, "/api/photos?sort=popular").await;
    let likes: Vec<u64> = body["data"]
        .as_array()
        .unwrap()
        .iter()
        .map(|p| p["likes"].as_u64().unwrap())
        .collect();
    assert_eq!(likes, vec![40, 19, 7]);
}

#[actix_web::test]
async fn like_toggles_and_adjusts_the_counter() {
    let app = service("missing.geojson").await;

    let req = test::TestRequest::post().uri("/api/photos/1/like").to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert_eq!(body["likes"], 41);
    assert_eq!(body["is_liked"], true);

    let req = test::TestRequest::post().uri("/api/photos/1/like").to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert_eq!(body["likes"], 40);
    assert_eq!(body["is_liked"], false);
}

#[actix_web::test]
async fn download_increments_and_returns_the_image_path() {
    let app = service("missing.geojson").await;
    let req = test::TestRequest::post()
        .uri("/api/photos/2/download")
        .to_request();
    let resp = test::call_service(&app, req).await;
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert_eq!(body["downloads"], 4);
    assert_eq!(body["image_path"], "/images/anyaman.jpg");
}

#[actix_web::test]
async fn unknown_photo_is_a_404_with_a_message() {
    let app = service("missing.geojson").await;
    let req = test::TestRequest::post()
        .uri("/api/photos/99/like")
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn wisata_directory_filters_by_search_and_lists_categories() {
    let app = service("missing.geojson").await;
    let body = get_json(&app, "/api/wisata?search=pantai").await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["name"], "Pantai Pasir Panjang");
    assert_eq!(data[0]["type"], "wisata");

    let categories = body["categories"].as_array().unwrap();
    assert!(categories.iter().all(|c| c["type"] == "wisata"));
}

#[actix_web::test]
async fn map_points_are_merged_sorted_and_keep_coordinate_less_entries() {
    let app = service("missing.geojson").await;
    let body = get_json(&app, "/api/map/points").await;
    let points = body["points"].as_array().unwrap();
    assert_eq!(points.len(), 5);

    let names: Vec<&str> = points.iter().map(|p| p["name"].as_str().unwrap()).collect();
    let mut sorted = names.clone();
    sorted.sort_by_key(|n| n.to_lowercase());
    assert_eq!(names, sorted);

    // The seed contains one missing and one malformed coordinate pair; both
    // stay in the list with a null coordinate for the marker layer to skip.
    let null_coords = points
        .iter()
        .filter(|p| p["coordinate"].is_null())
        .count();
    assert_eq!(null_coords, 2);
}

#[actix_web::test]
async fn agenda_derives_status_and_filters_by_it() {
    let app = service("missing.geojson").await;

    let body = get_json(&app, "/api/agenda").await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 2);

    // The upcoming event leads the page even though the finished one
    // started earlier.
    assert_eq!(data[0]["title"], "Festival Budaya Desa");
    assert_eq!(data[1]["title"], "Pelatihan UMKM");

    let body = get_json(&app, "/api/agenda?status=upcoming").await;
    let data = body["data"].as_array().unwrap();
    assert_eq!(data.len(), 1);
    assert_eq!(data[0]["title"], "Festival Budaya Desa");
    assert_eq!(data[0]["status"], "upcoming");

    let body = get_json(&app, "/api/agenda?status=done").await;
    assert_eq!(body["data"][0]["title"], "Pelatihan UMKM");
}

#[actix_web::test]
async fn missing_boundary_asset_degrades_to_404() {
    let app = service("does-not-exist.geojson").await;
    let req = test::TestRequest::get().uri("/api/boundary").to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn valid_boundary_asset_is_served_verbatim() {
    let dir = std::env::temp_dir().join(format!("boundary-{}", uuid::Uuid::new_v4()));
    std::fs::create_dir_all(&dir).unwrap();
    let path = dir.join("batas.geojson");
    std::fs::write(
        &path,
        r#"{"type": "FeatureCollection", "features": [{"properties": {"id": 1, "name": "Dusun Mawar"}, "geometry": {"type": "Polygon", "coordinates": [[[109.2, -0.3], [109.3, -0.3], [109.3, -0.2], [109.2, -0.2], [109.2, -0.3]]]}}]}"#,
    )
    .unwrap();

    let app = service(path.to_str().unwrap()).await;
    let body = get_json(&app, "/api/boundary").await;
    assert_eq!(body["features"][0]["properties"]["name"], "Dusun Mawar");
}

#[actix_web::test]
async fn admin_create_wisata_validates_field_by_field() {
    let app = service("missing.geojson").await;
    let req = test::TestRequest::post()
        .uri("/api/admin/wisata")
        .set_json(serde_json::json!({
            "name": "",
            "category": "Alam",
            "latitude": "abc",
            "longitude": "109.3"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
    );
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert!(body["errors"]["name"].is_string());
    assert!(body["errors"]["latitude"].is_string());
    assert!(body["errors"].get("longitude").is_none());
}

#[actix_web::test]
async fn admin_crud_round_trip_for_umkm() {
    let app = service("missing.geojson").await;

    let req = test::TestRequest::post()
        .uri("/api/admin/umkm")
        .set_json(serde_json::json!({
            "name": "Tenun Corak Insang",
            "category": "Kerajinan",
            "address": "Dusun Melati",
            "latitude": "-0.28",
            "longitude": "109.22"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
    let created: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    let id = created["id"].as_i64().unwrap();
    assert_eq!(id, 3);

    let req = test::TestRequest::put()
        .uri(&format!("/api/admin/umkm/{id}"))
        .set_json(serde_json::json!({
            "name": "Tenun Corak Insang Melati",
            "category": "Kerajinan"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let body = get_json(&app, "/api/umkm?search=tenun").await;
    assert_eq!(body["data"][0]["name"], "Tenun Corak Insang Melati");

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/umkm/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());

    let req = test::TestRequest::delete()
        .uri(&format!("/api/admin/umkm/{id}"))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn photo_upload_dedupes_tags_and_closes_the_modal() {
    let state = web::Data::new(AppState::seeded());
    state.upload_modal.open();
    let app = test::init_service(
        App::new()
            .app_data(state.clone())
            .app_data(web::Data::new(test_config("missing.geojson")))
            .configure(routes::config),
    )
    .await;

    let req = test::TestRequest::post()
        .uri("/api/admin/photos")
        .set_json(serde_json::json!({
            "title": "Perahu Nelayan",
            "category": "wisata",
            "tags": ["pantai", "pantai", " perahu "],
            "filename": "perahu.jpg",
            "user_name": "Rahma"
        }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::CREATED);
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert_eq!(body["tags"], serde_json::json!(["pantai", "perahu"]));
    assert!(body["image_path"]
        .as_str()
        .unwrap()
        .ends_with("-perahu.jpg"));
    assert!(!state.upload_modal.is_open());
}

#[actix_web::test]
async fn photo_detail_counts_a_view_on_every_fetch() {
    let app = service("missing.geojson").await;

    // Seeded photo 1 has 210 views; each detail fetch counts one more.
    let body = get_json(&app, "/api/photos/1").await;
    assert_eq!(body["views"], 211);
    assert_eq!(body["title"], "Senja di Dermaga");

    let body = get_json(&app, "/api/photos/1").await;
    assert_eq!(body["views"], 212);
}

#[actix_web::test]
async fn admin_category_update_renames_and_rekinds() {
    let app = service("missing.geojson").await;

    let req = test::TestRequest::put()
        .uri("/api/admin/categories/1")
        .set_json(serde_json::json!({ "name": "Alam dan Bahari", "type": "wisata" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert!(resp.status().is_success());
    let body: Value = serde_json::from_slice(&test::read_body(resp).await).unwrap();
    assert_eq!(body["name"], "Alam dan Bahari");

    let body = get_json(&app, "/api/wisata").await;
    let categories = body["categories"].as_array().unwrap();
    assert!(categories.iter().any(|c| c["name"] == "Alam dan Bahari"));

    // Blank name is a field error; unknown id is a 404.
    let req = test::TestRequest::put()
        .uri("/api/admin/categories/1")
        .set_json(serde_json::json!({ "name": " ", "type": "wisata" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(
        resp.status(),
        actix_web::http::StatusCode::UNPROCESSABLE_ENTITY
    );

    let req = test::TestRequest::put()
        .uri("/api/admin/categories/99")
        .set_json(serde_json::json!({ "name": "Kuliner", "type": "umkm" }))
        .to_request();
    let resp = test::call_service(&app, req).await;
    assert_eq!(resp.status(), actix_web::http::StatusCode::NOT_FOUND);
}

#[actix_web::test]
async fn pagination_links_preserve_filters() {
    let app = service("missing.geojson").await;
    let body = get_json(&app, "/api/photos?category=wisata").await;
    let links = body["links"].as_array().unwrap();
    let first_page = links.iter().find(|l| l["label"] == "1").unwrap();
    assert_eq!(first_page["url"], "/api/photos?category=wisata&page=1");
    assert_eq!(first_page["active"], true);
}
