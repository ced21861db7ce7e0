use actix_web::web;

use crate::handlers::admin_handler::{
    create_agenda, create_category, create_photo, create_umkm, create_wisata, delete_agenda,
    delete_category, delete_photo, delete_umkm, delete_wisata, update_agenda, update_category,
    update_photo, update_umkm, update_wisata,
};
use crate::handlers::agenda_handler::list_agenda;
use crate::handlers::boundary_handler::boundary;
use crate::handlers::photo_handler::{
    close_upload_modal, download_photo, like_photo, list_photos, open_upload_modal, photo_detail,
};
use crate::handlers::poi_handler::{list_umkm, list_wisata, map_points};

pub fn config(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api")
            .service(list_wisata)
            .service(list_umkm)
            .service(map_points)
            .service(list_agenda)
            .service(list_photos)
            .service(photo_detail)
            .service(like_photo)
            .service(download_photo)
            .service(open_upload_modal)
            .service(close_upload_modal)
            .service(boundary)
            .service(create_wisata)
            .service(update_wisata)
            .service(delete_wisata)
            .service(create_umkm)
            .service(update_umkm)
            .service(delete_umkm)
            .service(create_agenda)
            .service(update_agenda)
            .service(delete_agenda)
            .service(create_photo)
            .service(update_photo)
            .service(delete_photo)
            .service(create_category)
            .service(update_category)
            .service(delete_category),
    );
}
