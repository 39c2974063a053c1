use actix_web::{web, App, HttpServer};
use contact_search_lib::server::{configure, AppState};
use contact_search_lib::{logger, ServerConfig};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    logger::init();

    let config = ServerConfig::from_env();
    let state = web::Data::new(AppState::new());

    log::info!("Starting Web Server at {}", config.address());

    HttpServer::new(move || App::new().app_data(state.clone()).configure(configure))
        .bind((config.host.as_str(), config.port))?
        .run()
        .await
}
