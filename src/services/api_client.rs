// ============================================================================
// API CLIENT - SOLO COMUNICACIÓN HTTP (Stateless)
// ============================================================================
// NO tiene lógica de negocio, solo hace requests HTTP
// ============================================================================

use std::future::Future;

use futures::future::{self, Either};
use gloo_net::http::Request;
use gloo_timers::future::TimeoutFuture;
use thiserror::Error;

use crate::config::CONFIG;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ApiError {
    #[error("Network error: {0}")]
    Network(String),

    #[error("HTTP {status}: {text}")]
    Http { status: u16, text: String },

    #[error("Parse error: {0}")]
    Parse(String),

    #[error("Request timed out after {0}s")]
    Timeout(u32),

    #[error("Malformed meal: expected 4 entries, got {0}")]
    MalformedMeal(usize),
}

/// Colaborador externo del store de comidas
pub trait MealApi {
    /// Cuatro valores ordenados (desayuno, almuerzo, cena, merienda) o error
    fn get_meal(&self) -> impl Future<Output = Result<Vec<String>, ApiError>>;
}

/// Cliente API - SOLO comunicación HTTP (stateless)
#[derive(Clone, Debug)]
pub struct ApiClient {
    base_url: String,
    timeout_seconds: u32,
}

impl ApiClient {
    pub fn new() -> Self {
        Self::with_base_url(CONFIG.backend_url(), CONFIG.network_timeout_seconds)
    }

    pub fn with_base_url(base_url: &str, timeout_seconds: u32) -> Self {
        Self {
            base_url: base_url.trim_end_matches('/').to_string(),
            timeout_seconds,
        }
    }

    pub fn meal_url(&self) -> String {
        format!("{}/meal", self.base_url)
    }

    async fn request_meal(&self) -> Result<Vec<String>, ApiError> {
        let url = self.meal_url();
        log::info!("🍽️ [API] GET {}", url);

        let response = Request::get(&url)
            .send()
            .await
            .map_err(|e| ApiError::Network(e.to_string()))?;

        if !response.ok() {
            let status = response.status();
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "Unknown error".to_string());
            return Err(ApiError::Http { status, text });
        }

        response
            .json::<Vec<String>>()
            .await
            .map_err(|e| ApiError::Parse(e.to_string()))
    }
}

impl Default for ApiClient {
    fn default() -> Self {
        Self::new()
    }
}

impl MealApi for ApiClient {
    async fn get_meal(&self) -> Result<Vec<String>, ApiError> {
        let request = Box::pin(self.request_meal());
        let timeout = Box::pin(TimeoutFuture::new(self.timeout_seconds.saturating_mul(1000)));

        match future::select(request, timeout).await {
            Either::Left((result, _)) => result,
            Either::Right(((), _)) => {
                log::warn!("⏱️ [API] Timeout tras {}s", self.timeout_seconds);
                Err(ApiError::Timeout(self.timeout_seconds))
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn meal_url_joins_base_without_double_slash() {
        let client = ApiClient::with_base_url("http://localhost:3000/", 5);
        assert_eq!(client.meal_url(), "http://localhost:3000/meal");
    }

    #[test]
    fn errors_render_for_the_view_layer() {
        let http = ApiError::Http {
            status: 503,
            text: "down".to_string(),
        };
        assert_eq!(http.to_string(), "HTTP 503: down");
        assert_eq!(ApiError::Timeout(10).to_string(), "Request timed out after 10s");
    }
}
