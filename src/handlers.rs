use crate::render::{render_grid, render_page};
use crate::state::AppState;
use crate::types::InputUpdate;
use actix_web::{HttpResponse, Responder, web};
use chrono::Utc;

const HTML: &str = "text/html; charset=utf-8";

pub async fn index(state: web::Data<AppState>) -> impl Responder {
    let session = state.controller.snapshot();
    HttpResponse::Ok().content_type(HTML).body(render_page(
        &session.input_text,
        session.last_seq,
        &session.results,
        state.config.image_size,
    ))
}

pub async fn update_input(
    state: web::Data<AppState>,
    body: web::Json<InputUpdate>,
) -> impl Responder {
    let InputUpdate { text, seq } = body.into_inner();
    if state.config.debug {
        log::debug!(
            "[{}] POST /input seq={seq:?} ({} chars)",
            Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
            text.chars().count()
        );
    }

    let applied = state.controller.on_input(text, seq);
    HttpResponse::Accepted().json(serde_json::json!({ "applied": applied }))
}

pub async fn grid(state: web::Data<AppState>) -> impl Responder {
    let results = state.controller.results();
    HttpResponse::Ok()
        .content_type(HTML)
        .insert_header(("Cache-Control", "no-cache"))
        .body(render_grid(&results, state.config.image_size))
}

pub async fn images(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok()
        .insert_header(("Cache-Control", "no-cache"))
        .json(state.controller.results())
}

pub async fn health(state: web::Data<AppState>) -> impl Responder {
    HttpResponse::Ok().json(serde_json::json!({
        "status": "ok",
        "generateUrl": state.config.generate_url,
        "results": state.controller.results().len()
    }))
}

/// JSON extractor settings for `/input`. Pasted prompts can be far larger
/// than actix's default limit.
pub fn json_config(limit: usize) -> web::JsonConfig {
    web::JsonConfig::default().limit(limit)
}

/// Mounts every route of the local surface.
pub fn configure(cfg: &mut web::ServiceConfig) {
    cfg.service(web::resource("/").route(web::get().to(index)))
        .service(web::resource("/input").route(web::post().to(update_input)))
        .service(web::resource("/grid").route(web::get().to(grid)))
        .service(web::resource("/images").route(web::get().to(images)))
        .service(web::resource("/health").route(web::get().to(health)));
}
