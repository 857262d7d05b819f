pub mod app;
pub mod results_table;
pub mod toasts;

pub use app::ConsultaApp;
