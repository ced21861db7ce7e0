use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use dotenvy::dotenv;
use tracing::info;
use tracing_subscriber::EnvFilter;

use desa_portal::config::Config;
use desa_portal::routes;
use desa_portal::state::AppState;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .init();

    let config = Config::from_env();
    let bind = (config.host.clone(), config.port);
    let state = web::Data::new(AppState::seeded());
    let config_data = web::Data::new(config);

    info!("listening on {}:{}", bind.0, bind.1);

    HttpServer::new(move || {
        let cors = match &config_data.cors_origin {
            Some(origin) => Cors::default()
                .allowed_origin(origin)
                .allow_any_method()
                .allow_any_header()
                .max_age(3600),
            None => Cors::default()
                .allow_any_origin()
                .allow_any_method()
                .allow_any_header()
                .max_age(3600),
        };

        App::new()
            .wrap(cors)
            .app_data(state.clone())
            .app_data(config_data.clone())
            .configure(routes::config)
    })
    .bind(bind)?
    .run()
    .await
}
