use actix_web::{
    http::header::{ContentType, CONTENT_TYPE, LOCATION},
    web, HttpRequest, HttpResponse, HttpResponseBuilder,
};
use recordstore::{
    consts::consts::{RecordId, RANDOM_SEGMENT},
    model::record::{Record, RecordInput},
};
use serde::Serialize;

use crate::{error::RecordError, state::RecordResource};

const JSON_CONTENT_TYPE: &str = "application/json";

// Serializes before touching the builder, so a failure never leaves a half-built success response
fn json_body<T: Serialize>(
    mut builder: HttpResponseBuilder,
    value: &T,
) -> Result<HttpResponse, RecordError> {
    let body = serde_json::to_vec(value)?;

    Ok(builder.content_type(ContentType::json()).body(body))
}

/// `GET /{resource}`
pub async fn list(resource: web::Data<RecordResource>) -> Result<HttpResponse, RecordError> {
    let records: Vec<Record> = resource.store().list();

    json_body(HttpResponse::Ok(), &records)
}

/// `GET /{resource}/{segment}`, either a random pick or a lookup by id
pub async fn get(
    resource: web::Data<RecordResource>,
    segment: web::Path<String>,
) -> Result<HttpResponse, RecordError> {
    let segment = segment.into_inner();

    if segment == RANDOM_SEGMENT {
        return random(&resource);
    }

    let record = resource.store().get(&RecordId(segment))?;

    json_body(HttpResponse::Ok(), &record)
}

fn random(resource: &RecordResource) -> Result<HttpResponse, RecordError> {
    let record = resource.store().pick_random()?;

    Ok(HttpResponse::Found()
        .insert_header((LOCATION, resource.location(&record.id)))
        .finish())
}

/// `POST /{resource}`
///
/// The body has been read in full by the time this runs, and the store is only touched once it
/// has parsed, so an aborted or invalid request never mutates it. Responds `201` with the created
/// record and its canonical location.
pub async fn create(
    request: HttpRequest,
    resource: web::Data<RecordResource>,
    body: web::Bytes,
) -> Result<HttpResponse, RecordError> {
    // Exact match, parameters such as `; charset=utf-8` are rejected
    let content_type = request
        .headers()
        .get(CONTENT_TYPE)
        .and_then(|value| value.to_str().ok())
        .unwrap_or_default();

    if content_type != JSON_CONTENT_TYPE {
        return Err(RecordError::UnsupportedMediaType(content_type.to_string()));
    }

    let input: RecordInput =
        serde_json::from_slice(&body).map_err(|e| RecordError::BadRequest(e.to_string()))?;

    let record = resource.store().insert(input);

    log::info!("Created record [resource: {}, id: {}]", resource.name(), record.id);

    let mut builder = HttpResponse::Created();
    builder.insert_header((LOCATION, resource.location(&record.id)));

    json_body(builder, &record)
}

pub async fn method_not_allowed() -> Result<HttpResponse, RecordError> {
    Err(RecordError::MethodNotAllowed)
}
