use crate::AppState;
use actix_web::{web, HttpResponse, Responder};
use notemark_core::{NoteDraft, NoteId, NoteService, NoteServiceError, NoteStore};
use serde::Deserialize;
use std::sync::MutexGuard;

type SharedService = NoteService<Box<dyn NoteStore + Send>>;

#[derive(Debug, Deserialize)]
pub struct ListParams {
    /// Optional free-text filter applied to title and content.
    q: Option<String>,
}

pub fn config_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::resource("/notes")
            .route(web::get().to(list_notes))
            .route(web::post().to(create_note)),
    );
    cfg.service(
        web::resource("/notes/{id}")
            .route(web::get().to(get_note))
            .route(web::put().to(update_note))
            .route(web::delete().to(delete_note)),
    );
}

async fn list_notes(state: web::Data<AppState>, params: web::Query<ListParams>) -> impl Responder {
    let service = match lock_service(&state) {
        Ok(service) => service,
        Err(response) => return response,
    };

    match service.list_notes(params.q.as_deref()) {
        Ok(notes) => HttpResponse::Ok().json(notes),
        Err(err) => render_failure("Failed to fetch notes", err),
    }
}

async fn get_note(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let Some(id) = parse_note_id(&path) else {
        return note_not_found();
    };
    let service = match lock_service(&state) {
        Ok(service) => service,
        Err(response) => return response,
    };

    match service.get_note(id) {
        Ok(Some(note)) => HttpResponse::Ok().json(note),
        Ok(None) => note_not_found(),
        Err(err) => render_failure("Failed to fetch note", err),
    }
}

async fn create_note(state: web::Data<AppState>, body: web::Json<NoteDraft>) -> impl Responder {
    let mut service = match lock_service(&state) {
        Ok(service) => service,
        Err(response) => return response,
    };

    match service.create_note(&body) {
        Ok(note) => HttpResponse::Created().json(note),
        Err(err) => render_failure("Failed to create note", err),
    }
}

async fn update_note(
    state: web::Data<AppState>,
    path: web::Path<String>,
    body: web::Json<NoteDraft>,
) -> impl Responder {
    let Some(id) = parse_note_id(&path) else {
        return note_not_found();
    };
    let mut service = match lock_service(&state) {
        Ok(service) => service,
        Err(response) => return response,
    };

    match service.update_note(id, &body) {
        Ok(note) => HttpResponse::Ok().json(note),
        Err(err) => render_failure("Failed to update note", err),
    }
}

async fn delete_note(state: web::Data<AppState>, path: web::Path<String>) -> impl Responder {
    let Some(id) = parse_note_id(&path) else {
        return note_not_found();
    };
    let mut service = match lock_service(&state) {
        Ok(service) => service,
        Err(response) => return response,
    };

    match service.delete_note(id) {
        Ok(()) => HttpResponse::NoContent().finish(),
        Err(err) => render_failure("Failed to delete note", err),
    }
}

// A malformed uuid cannot name an existing note; it renders as 404.
fn parse_note_id(raw: &str) -> Option<NoteId> {
    NoteId::parse_str(raw).ok()
}

fn lock_service(
    state: &web::Data<AppState>,
) -> Result<MutexGuard<'_, SharedService>, HttpResponse> {
    state.service.lock().map_err(|_| {
        log::error!("note service mutex poisoned");
        HttpResponse::InternalServerError().json(serde_json::json!({
            "message": "Internal server error"
        }))
    })
}

fn render_failure(context: &'static str, err: NoteServiceError) -> HttpResponse {
    match err {
        NoteServiceError::Validation(errors) => HttpResponse::BadRequest().json(serde_json::json!({
            "message": "Invalid note data",
            "errors": errors
        })),
        NoteServiceError::NotFound(_) => note_not_found(),
        NoteServiceError::Storage(_) => {
            // The service already logged the underlying failure.
            HttpResponse::InternalServerError().json(serde_json::json!({
                "message": context
            }))
        }
    }
}

fn note_not_found() -> HttpResponse {
    HttpResponse::NotFound().json(serde_json::json!({
        "message": "Note not found"
    }))
}
