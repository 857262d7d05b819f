use std::sync::Arc;

use consulta_puntajes::{
    api::LookupClient,
    core::{
        tasks::TaskManager,
        Settings,
    },
    gui::ConsultaApp,
};
use eframe::egui;
use tracing_subscriber::EnvFilter;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    tracing::info!("Starting Consulta Puntajes");

    let settings = Settings::load();
    let client = LookupClient::new(&settings)?;
    let task_manager = TaskManager::new(Arc::new(client))?;

    let options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title("Consulta Puntajes")
            .with_inner_size([560.0, 720.0]),
        ..Default::default()
    };

    eframe::run_native(
        "Consulta Puntajes",
        options,
        Box::new(move |cc| Ok(Box::new(ConsultaApp::new(cc, task_manager)))),
    )?;

    Ok(())
}
