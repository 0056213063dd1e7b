use crate::{
    config::ApiConfig,
    data::student::NewStudent,
    error::{BibliotecaResult, BuildHttpClientSnafu, RejectedRegistrationSnafu, SendRegistrationSnafu},
};
use snafu::{ResultExt, ensure};
use std::sync::Arc;

/// Client for the remote students API. Cheap to clone, clones share one connection pool.
#[derive(Clone, Debug)]
pub struct StudentsApi {
    client: reqwest::Client,
    config: Arc<ApiConfig>,
}

impl StudentsApi {
    pub fn new(config: Arc<ApiConfig>) -> BibliotecaResult<Self> {
        // no timeout: a registration resolves whenever the transport gives up
        let client = reqwest::Client::builder()
            .user_agent(concat!(env!("CARGO_PKG_NAME"), "/", env!("CARGO_PKG_VERSION")))
            .build()
            .context(BuildHttpClientSnafu)?;

        Ok(Self { client, config })
    }

    /// Sends one creation request. Any 2xx counts as accepted and the body is never read.
    pub async fn register(&self, student: &NewStudent) -> BibliotecaResult<()> {
        let endpoint = self.config.students_endpoint();
        debug!(%endpoint, matricula = %student.matricula, "Sending student registration");

        let rsp = self
            .client
            .post(endpoint.clone())
            .json(student)
            .send()
            .await
            .context(SendRegistrationSnafu)?;

        let status = rsp.status();
        ensure!(status.is_success(), RejectedRegistrationSnafu { status });

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::BibliotecaError;
    use wiremock::matchers::{body_json, header, method, path};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn api_for(server: &MockServer) -> StudentsApi {
        let config = ApiConfig::from_url_str(format!("{}/alunos", server.uri())).unwrap();
        StudentsApi::new(Arc::new(config)).unwrap()
    }

    fn ana() -> NewStudent {
        NewStudent {
            nome: "Ana Silva".into(),
            matricula: "2024001".into(),
            data_nascimento: "2005-03-14".into(),
        }
    }

    #[tokio::test]
    async fn posts_json_to_the_students_endpoint() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/alunos"))
            .and(header("content-type", "application/json"))
            .and(body_json(serde_json::json!({
                "nome": "Ana Silva",
                "matricula": "2024001",
                "dataNascimento": "2005-03-14",
            })))
            .respond_with(ResponseTemplate::new(201).set_body_string("not json, not read"))
            .expect(1)
            .mount(&server)
            .await;

        api_for(&server).register(&ana()).await.unwrap();
    }

    #[tokio::test]
    async fn non_success_status_is_a_rejection() {
        let server = MockServer::start().await;

        Mock::given(method("POST"))
            .and(path("/alunos"))
            .respond_with(ResponseTemplate::new(409))
            .expect(1)
            .mount(&server)
            .await;

        let e = api_for(&server).register(&ana()).await.unwrap_err();
        assert!(matches!(e, BibliotecaError::RejectedRegistration { .. }));
        assert_eq!(e.to_string(), "Request failed with status code 409");
    }

    #[tokio::test]
    async fn unreachable_backend_is_a_send_failure() {
        let server = MockServer::start().await;
        let api = api_for(&server);
        drop(server);

        let e = api.register(&ana()).await.unwrap_err();
        assert!(matches!(e, BibliotecaError::SendRegistration { .. }));
    }
}
