pub mod cache;
pub mod config;
pub mod errors;
pub mod models;
pub mod notice;
pub mod session;
pub mod tasks;
pub mod view;
pub mod years;

pub use cache::OptionsCache;
pub use config::Settings;
pub use errors::ConsultaError;
pub use models::{
    OptionsBundle,
    QueryRequest,
    QueryResultItem,
    ResultSet,
};
pub use session::{
    Phase,
    Session,
};
pub use years::Year;
