use actix_web::{
    http::header::{AUTHORIZATION, WWW_AUTHENTICATE},
    web, Either, HttpRequest, HttpResponse,
};
use actix_web_lab::respond::Html;

use crate::auth::{AdminGate, BasicCredentials};

const ADMIN_PAGE: &str = "<html><h1>Secret admin portal</h1></html>";

/// Admin portal, gated behind basic auth. Never touches a record store.
pub async fn portal(
    request: HttpRequest,
    admin_gate: web::Data<AdminGate>,
) -> Either<Html, HttpResponse> {
    let credentials = request
        .headers()
        .get(AUTHORIZATION)
        .and_then(|value| value.to_str().ok())
        .and_then(BasicCredentials::parse);

    if !admin_gate.verify(credentials.as_ref()) {
        log::warn!("Rejected admin portal request");

        return Either::Right(
            HttpResponse::Unauthorized()
                .insert_header((WWW_AUTHENTICATE, r#"Basic realm="admin""#))
                .body("401 - unauthorized"),
        );
    }

    Either::Left(Html(ADMIN_PAGE.to_string()))
}
