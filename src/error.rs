use snafu::Snafu;

pub type BibliotecaResult<T> = Result<T, BibliotecaError>;

#[derive(Debug, Snafu)]
#[snafu(visibility(pub))]
pub enum BibliotecaError {
    #[snafu(display("Unable to retrieve env var `{}`", name))]
    BadEnvVar {
        source: dotenvy::Error,
        name: &'static str,
    },
    #[snafu(display("Unable to parse API URL {:?}", original))]
    ParseApiUrl {
        source: url::ParseError,
        original: String,
    },
    #[snafu(display("Unable to build HTTP client"))]
    BuildHttpClient { source: reqwest::Error },
    #[snafu(display("{source}"))]
    SendRegistration { source: reqwest::Error },
    #[snafu(display("Request failed with status code {}", status.as_u16()))]
    RejectedRegistration { status: reqwest::StatusCode },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn rejected_registration_reads_like_a_failed_request() {
        let e = BibliotecaError::RejectedRegistration {
            status: reqwest::StatusCode::INTERNAL_SERVER_ERROR,
        };
        assert_eq!(e.to_string(), "Request failed with status code 500");
    }
}
