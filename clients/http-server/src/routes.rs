use actix_web::web;

use crate::{
    handlers::{admin, records},
    state::AppState,
};

/// Mounts every resource under its own scope plus the admin portal.
///
/// Paths with more than one segment after the resource match nothing and fall through to the
/// default `404`.
pub fn configure(cfg: &mut web::ServiceConfig, state: &AppState) {
    for resource in &state.resources {
        cfg.service(
            web::scope(&format!("/{}", resource.name()))
                .app_data(resource.clone())
                .service(
                    web::resource("")
                        .route(web::get().to(records::list))
                        .route(web::post().to(records::create))
                        .default_service(web::route().to(records::method_not_allowed)),
                )
                .service(
                    web::resource("/{segment}")
                        .route(web::get().to(records::get))
                        .default_service(web::route().to(records::method_not_allowed)),
                ),
        );
    }

    cfg.app_data(state.admin_gate.clone())
        .service(web::resource("/admin").to(admin::portal));
}
