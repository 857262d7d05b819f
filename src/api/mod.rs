pub mod client;
pub mod types;

use async_trait::async_trait;

pub use client::LookupClient;

use crate::core::{
    ConsultaError,
    OptionsBundle,
    QueryRequest,
    ResultSet,
    Year,
};

/// The two operations the lookup service offers.
#[async_trait]
pub trait LookupService: Send + Sync {
    /// Universities and careers for `year`. Every failure is `OptionsFetchFailed`.
    async fn fetch_options(&self, year: Year) -> Result<OptionsBundle, ConsultaError>;

    /// Score records for one selection. Every failure is `QuerySubmitFailed`.
    async fn submit(&self, request: &QueryRequest) -> Result<ResultSet, ConsultaError>;
}
