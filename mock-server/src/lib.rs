use axum::{
    extract::{Form, Path},
    http::{HeaderMap, StatusCode},
    routing::{get, post},
    Router,
};
use serde::Deserialize;
use tokio::net::TcpListener;

/// Fields expected by `POST /login`.
#[derive(Debug, Deserialize)]
pub struct Login {
    pub user: String,
    #[serde(default)]
    pub password: String,
}

pub fn app() -> Router {
    Router::new()
        .route("/", get(index))
        .route("/headers", get(echo_headers))
        .route("/status/{code}", get(status))
        .route("/form", post(echo_form))
        .route("/login", post(login))
        .fallback(not_found)
}

pub async fn run(listener: TcpListener) -> Result<(), std::io::Error> {
    axum::serve(listener, app()).await
}

async fn index() -> &'static str {
    "hello"
}

/// One `name: value` line per request header, in arrival order.
async fn echo_headers(headers: HeaderMap) -> String {
    headers
        .iter()
        .map(|(name, value)| format!("{}: {}\n", name, value.to_str().unwrap_or("<binary>")))
        .collect()
}

async fn status(Path(code): Path<u16>) -> (StatusCode, String) {
    match StatusCode::from_u16(code) {
        Ok(status) => (status, status.canonical_reason().unwrap_or("").to_string()),
        Err(_) => (StatusCode::BAD_REQUEST, format!("bad status {code}")),
    }
}

/// Decoded form pairs back as `key=value` lines, in the order received.
async fn echo_form(Form(pairs): Form<Vec<(String, String)>>) -> String {
    log::debug!("form with {} field(s)", pairs.len());
    pairs
        .iter()
        .map(|(key, value)| format!("{key}={value}\n"))
        .collect()
}

async fn login(Form(input): Form<Login>) -> (StatusCode, String) {
    if input.password.is_empty() {
        return (StatusCode::UNAUTHORIZED, "password required".to_string());
    }
    (StatusCode::OK, format!("welcome {}", input.user))
}

async fn not_found() -> (StatusCode, &'static str) {
    (StatusCode::NOT_FOUND, "nope")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn login_password_defaults_to_empty() {
        let input: Login = decode_login("user=ann");
        assert_eq!(input.user, "ann");
        assert!(input.password.is_empty());
    }

    /// Decode through axum's own form deserializer path.
    fn decode_login(body: &str) -> Login {
        let rt = tokio::runtime::Builder::new_current_thread().build().unwrap();
        rt.block_on(async {
            use axum::extract::FromRequest;
            let req = axum::http::Request::builder()
                .method("POST")
                .header("content-type", "application/x-www-form-urlencoded")
                .body(axum::body::Body::from(body.to_string()))
                .unwrap();
            let Form(login) = Form::<Login>::from_request(req, &()).await.unwrap();
            login
        })
    }
}
