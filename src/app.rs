use std::sync::Arc;

use actix_cors::Cors;
use actix_web::body::MessageBody;
use actix_web::dev::{ServiceFactory, ServiceRequest, ServiceResponse};
use actix_web::middleware::Logger;
use actix_web::web::Data;
use actix_web::{App, Error, web};

use crate::{handlers, service};

pub fn create_app(
    check_day_service: Arc<service::CheckDayService>,
) -> App<
    impl ServiceFactory<
        ServiceRequest,
        Config = (),
        Response = ServiceResponse<impl MessageBody>,
        Error = Error,
        InitError = (),
    >,
> {
    App::new()
        .wrap(Cors::permissive())
        .wrap(Logger::default())
        .app_data(Data::from(check_day_service))
        .route("/", web::get().to(handlers::health))
        .route("/check_day", web::post().to(handlers::check_day))
}
