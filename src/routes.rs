use crate::api::slip;
use actix_web::web;

pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/")
            .route(web::get().to(slip::index))
            .route(web::post().to(slip::generate)),
    )
    .service(
        web::resource("/slips/{emp_code}/{month}").route(web::get().to(slip::download)),
    );
}
