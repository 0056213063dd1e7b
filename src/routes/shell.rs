use crate::state::BibliotecaState;
use axum::{extract::State, http::StatusCode};
use maud::{Markup, html};

/// Anything that isn't a known page gets just the chrome.
pub async fn get_shell_only(State(state): State<BibliotecaState>) -> (StatusCode, Markup) {
    (StatusCode::NOT_FOUND, state.render(html! {}))
}

#[cfg(test)]
mod tests {
    use crate::routes::test_support::{app_against, body_string};
    use axum::{
        body::Body,
        http::{Request, StatusCode},
    };
    use tower::ServiceExt;

    #[tokio::test]
    async fn unknown_path_renders_chrome_only() {
        let app = app_against("http://localhost:8080/alunos");
        let rsp = app
            .oneshot(Request::get("/livros").body(Body::empty()).unwrap())
            .await
            .unwrap();

        assert_eq!(rsp.status(), StatusCode::NOT_FOUND);
        let body = body_string(rsp).await;
        assert!(body.contains("Sistema da Biblioteca"));
        assert!(body.contains(r#"href="/cadastro-aluno""#));
        assert!(!body.contains("<form"));
    }

    #[tokio::test]
    async fn root_has_the_navigation_link() {
        let app = app_against("http://localhost:8080/alunos");
        let rsp = app
            .oneshot(Request::get("/").body(Body::empty()).unwrap())
            .await
            .unwrap();

        let body = body_string(rsp).await;
        assert!(body.contains("Cadastrar Aluno"));
        assert!(!body.contains("Cadastro de Aluno"));
    }
}
