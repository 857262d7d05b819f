use std::time::Duration;

use async_trait::async_trait;
use reqwest::{
    header::USER_AGENT,
    Client,
    RequestBuilder,
    Response,
};
use serde::de::DeserializeOwned;
use tokio::time::sleep;
use tracing::{
    debug,
    warn,
};

use super::{
    types::{
        ErrorBody,
        OptionsResponse,
        QueryResponse,
    },
    LookupService,
};
use crate::core::{
    config::MAX_RETRY_BACKOFF,
    notice::QUERY_FAILED_FALLBACK,
    ConsultaError,
    OptionsBundle,
    QueryRequest,
    ResultSet,
    Settings,
    Year,
};

const CLIENT_AGENT: &str = "consulta-puntajes/0.1 (+reqwest)";

pub struct LookupClient {
    client: Client,
    base_url: String,
    retry_attempts: u32,
    retry_backoff: Duration,
}

impl LookupClient {
    pub fn new(settings: &Settings) -> Result<Self, ConsultaError> {
        let client = Client::builder()
            .timeout(settings.timeout())
            .build()
            .map_err(|e| ConsultaError::Custom(format!("HTTP client build failed: {e}")))?;

        Ok(Self {
            client,
            base_url: settings.api_url.trim_end_matches('/').to_string(),
            retry_attempts: settings.retry_attempts,
            retry_backoff: settings.retry_backoff(),
        })
    }

    fn url(&self, path: &str) -> String {
        format!("{}/{}", self.base_url, path)
    }

    fn backoff_for(&self, attempt: u32) -> Duration {
        self.retry_backoff.saturating_mul(attempt).min(MAX_RETRY_BACKOFF)
    }

    /// Retries transport failures only. Anything the service answered is returned as is.
    async fn send(&self, build: impl Fn() -> RequestBuilder) -> Result<Response, reqwest::Error> {
        let mut attempts: u32 = 0;
        loop {
            attempts += 1;

            match build().header(USER_AGENT, CLIENT_AGENT).send().await {
                Ok(response) => return Ok(response),
                Err(e) if attempts <= self.retry_attempts => {
                    warn!(attempt = attempts, error = %e, "request failed, retrying");
                    sleep(self.backoff_for(attempts)).await;
                }
                Err(e) => return Err(e),
            }
        }
    }

    /// Sends one request and decodes the payload, folding every failure into a message.
    async fn exchange<T: DeserializeOwned>(
        &self,
        build: impl Fn() -> RequestBuilder,
    ) -> Result<T, String> {
        let response = self
            .send(build)
            .await
            .map_err(|e| format!("No se pudo conectar con el servidor: {e}"))?;

        let status = response.status();
        let url = response.url().clone();
        let body = response
            .text()
            .await
            .map_err(|e| format!("No se pudo leer la respuesta del servidor: {e}"))?;
        debug!(%url, %status, bytes = body.len(), "service responded");

        if let Ok(envelope) = serde_json::from_str::<ErrorBody>(&body) {
            if let Some(message) = envelope.message() {
                return Err(message.to_string());
            }
        }

        if !status.is_success() {
            return Err(format!("Error al conectar con el servidor (HTTP {})", status.as_u16()));
        }

        serde_json::from_str::<T>(&body)
            .map_err(|e| format!("Respuesta inválida del servidor: {e}"))
    }
}

#[async_trait]
impl LookupService for LookupClient {
    async fn fetch_options(&self, year: Year) -> Result<OptionsBundle, ConsultaError> {
        let url = self.url(&format!("opciones/{year}"));

        let response: OptionsResponse = self
            .exchange(|| self.client.get(&url))
            .await
            .map_err(ConsultaError::OptionsFetchFailed)?;

        Ok(response.into())
    }

    async fn submit(&self, request: &QueryRequest) -> Result<ResultSet, ConsultaError> {
        let url = self.url("consultar");

        let response: QueryResponse =
            self.exchange(|| self.client.post(&url).json(request)).await.map_err(|message| {
                if message.trim().is_empty() {
                    ConsultaError::QuerySubmitFailed(QUERY_FAILED_FALLBACK.to_string())
                } else {
                    ConsultaError::QuerySubmitFailed(message)
                }
            })?;

        Ok(response.resultados)
    }
}
