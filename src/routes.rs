use crate::{
    routes::{
        shell::get_shell_only,
        student_registration::{get_student_registration, post_student_registration},
    },
    state::BibliotecaState,
};
use axum::{Router, routing::get};
use tower_http::{compression::CompressionLayer, limit::RequestBodyLimitLayer, trace::TraceLayer};

pub mod shell;
pub mod student_registration;

/// Registration forms are three short fields, anything bigger is not ours.
const MAX_FORM_BODY_BYTES: usize = 16 * 1024;

pub fn app(state: BibliotecaState) -> Router {
    Router::new()
        .route(
            "/cadastro-aluno",
            get(get_student_registration)
                .post(post_student_registration)
                .fallback(get_shell_only),
        )
        .fallback(get_shell_only)
        .layer(RequestBodyLimitLayer::new(MAX_FORM_BODY_BYTES))
        .layer(CompressionLayer::new())
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}
