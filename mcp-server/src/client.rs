//! HTTP client for the Clínica API
//!
//! Every call returns the response body as text; non-2xx statuses become errors
//! carrying the status and the body so the tool caller sees the API's `{error, details}`.

use anyhow::{Context, Result};
use reqwest::header::{HeaderMap, HeaderValue, ACCEPT, CONTENT_TYPE};
use serde::Serialize;

const DEFAULT_API_URL: &str = "http://localhost:3001";

/// HTTP client for communicating with the Clínica API
#[derive(Clone)]
pub struct ClinicaClient {
    client: reqwest::Client,
    base_url: String,
}

impl ClinicaClient {
    /// Create a new client from environment variables
    ///
    /// Optional env vars:
    /// - CLINICA_API_URL: Base URL of the API (default http://localhost:3001)
    pub fn from_env() -> Result<Self> {
        let base_url =
            std::env::var("CLINICA_API_URL").unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        Self::new(&base_url)
    }

    /// Create a new client with explicit configuration
    pub fn new(base_url: &str) -> Result<Self> {
        let mut headers = HeaderMap::new();
        headers.insert(ACCEPT, HeaderValue::from_static("application/json"));
        headers.insert(CONTENT_TYPE, HeaderValue::from_static("application/json"));

        let client = reqwest::Client::builder()
            .default_headers(headers)
            .build()
            .context("Failed to build HTTP client")?;

        Ok(Self {
            client,
            base_url: base_url.trim_end_matches('/').to_string(),
        })
    }

    #[cfg(test)]
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub async fn health(&self) -> Result<String> {
        self.get_text("/api/health").await
    }

    pub async fn list_pacientes(&self) -> Result<String> {
        self.get_text("/api/pacientes").await
    }

    pub async fn get_paciente(&self, run: i64) -> Result<String> {
        self.get_text(&format!("/api/pacientes/{}", run)).await
    }

    pub async fn delete_paciente(&self, run: i64) -> Result<String> {
        self.delete_text(&format!("/api/pacientes/{}", run)).await
    }

    pub async fn copago(&self, id_atencion: i64) -> Result<String> {
        self.get_text(&format!("/api/copago/{}", id_atencion)).await
    }

    pub async fn monto_final(&self, id_atencion: i64) -> Result<String> {
        self.get_text(&format!("/api/monto-final/{}", id_atencion))
            .await
    }

    /// Costly-attention report; without a minimum the API uses 0
    pub async fn reporte_costosas(&self, monto: Option<f64>) -> Result<String> {
        match monto {
            Some(monto) => {
                self.get_text(&format!("/api/reporte-costosas?monto={}", monto))
                    .await
            }
            None => self.get_text("/api/reporte-costosas").await,
        }
    }

    pub async fn execute_procedure(&self, param1: &str, param2: &str) -> Result<String> {
        self.post_text(
            "/api/execute-procedure",
            &ExecuteProcedureRequest {
                param1: param1.to_string(),
                param2: param2.to_string(),
            },
        )
        .await
    }

    // --- Internal helpers ---

    async fn get_text(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .get(&url)
            .send()
            .await
            .with_context(|| format!("Failed to GET {}", path))?;

        handle_text_response(response).await
    }

    async fn post_text<T: Serialize>(&self, path: &str, body: &T) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .post(&url)
            .json(body)
            .send()
            .await
            .with_context(|| format!("Failed to POST {}", path))?;

        handle_text_response(response).await
    }

    async fn delete_text(&self, path: &str) -> Result<String> {
        let url = format!("{}{}", self.base_url, path);
        let response = self
            .client
            .delete(&url)
            .send()
            .await
            .with_context(|| format!("Failed to DELETE {}", path))?;

        handle_text_response(response).await
    }
}

async fn handle_text_response(response: reqwest::Response) -> Result<String> {
    let status = response.status();
    let body = response
        .text()
        .await
        .context("Failed to read response body")?;

    if !status.is_success() {
        anyhow::bail!("API error ({}): {}", status, body);
    }

    Ok(body)
}

// --- Request Types ---

#[derive(Debug, Serialize)]
struct ExecuteProcedureRequest {
    param1: String,
    param2: String,
}
