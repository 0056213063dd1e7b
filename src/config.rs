use crate::error::{BadEnvVarSnafu, BibliotecaResult, ParseApiUrlSnafu};
use dotenvy::var;
use snafu::ResultExt;
use std::{env::VarError, sync::Arc};
use url::Url;

pub const DEFAULT_API_URL: &str = "http://localhost:8080/alunos";
pub const DEFAULT_SERVER_IP: &str = "127.0.0.1:3000";

#[derive(Clone, Debug)]
pub struct RuntimeConfiguration {
    api_config: Arc<ApiConfig>,
    server_ip: String,
}

impl RuntimeConfiguration {
    pub fn new() -> BibliotecaResult<Self> {
        Ok(Self {
            api_config: Arc::new(ApiConfig::new()?),
            server_ip: optional_env_var("BIBLIOTECA_SERVER_IP")?
                .unwrap_or_else(|| DEFAULT_SERVER_IP.to_string()),
        })
    }

    #[cfg(test)]
    pub fn with_api_config(api_config: ApiConfig) -> Self {
        Self {
            api_config: Arc::new(api_config),
            server_ip: DEFAULT_SERVER_IP.to_string(),
        }
    }

    pub fn api_config(&self) -> Arc<ApiConfig> {
        self.api_config.clone()
    }

    pub fn server_ip(&self) -> &str {
        &self.server_ip
    }
}

/// Where student registrations get sent.
#[derive(Debug, Clone)]
pub struct ApiConfig {
    students_endpoint: Url,
}

impl ApiConfig {
    pub fn new() -> BibliotecaResult<Self> {
        let raw = optional_env_var("BIBLIOTECA_API_URL")?
            .unwrap_or_else(|| DEFAULT_API_URL.to_string());
        Self::from_url_str(raw)
    }

    pub fn from_url_str(raw: impl Into<String>) -> BibliotecaResult<Self> {
        let raw = raw.into();
        let students_endpoint = Url::parse(&raw).context(ParseApiUrlSnafu { original: raw })?;
        Ok(Self { students_endpoint })
    }

    pub fn students_endpoint(&self) -> &Url {
        &self.students_endpoint
    }
}

fn optional_env_var(name: &'static str) -> BibliotecaResult<Option<String>> {
    match var(name) {
        Ok(value) => Ok(Some(value)),
        Err(dotenvy::Error::EnvVar(VarError::NotPresent)) => Ok(None),
        Err(e) => Err(e).context(BadEnvVarSnafu { name }),
    }
}
