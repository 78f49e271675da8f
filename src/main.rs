use std::sync::Arc;

use good_day_panchang::app::create_app;
use good_day_panchang::config;
use good_day_panchang::http_client::build_http_client;
use good_day_panchang::service::CheckDayService;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    dotenv::dotenv().ok();
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));
    log::info!("Initializing Good Day Smart Panchang service...");

    let config = config::load_config()
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let http_client = build_http_client(&config.http_client)
        .map_err(|e| std::io::Error::new(std::io::ErrorKind::InvalidInput, e))?;

    let check_day_service = Arc::new(CheckDayService::new(http_client, &config));
    let bind_addr = (config.server.host.clone(), config.server.port);

    log::info!("Listening on {}:{}", bind_addr.0, bind_addr.1);

    let app_factory = move || create_app(check_day_service.clone());

    actix_web::HttpServer::new(app_factory)
        .bind(bind_addr)?
        .run()
        .await
}
