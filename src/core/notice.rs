use tracing::{
    error,
    info,
};

use super::ConsultaError;

pub const OPTIONS_FAILED_TITLE: &str = "Error de conexión";
pub const QUERY_FAILED_TITLE: &str = "Error en la búsqueda";
pub const QUERY_FAILED_FALLBACK: &str = "No se pudo procesar la consulta";
pub const MISSING_DATA_TITLE: &str = "Faltan datos";
pub const MISSING_DATA_DESCRIPTION: &str = "Por favor selecciona año, universidad y carrera";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Severity {
    Info,
    Error,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Notice {
    pub title: String,
    pub description: String,
    pub severity: Severity,
}

impl Notice {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        severity: Severity,
    ) -> Self {
        Self { title: title.into(), description: description.into(), severity }
    }

    pub fn options_failed(error: &ConsultaError) -> Self {
        Self::new(OPTIONS_FAILED_TITLE, error.to_string(), Severity::Error)
    }

    pub fn query_failed(error: &ConsultaError) -> Self {
        let description = error.to_string();
        let description = if description.trim().is_empty() {
            QUERY_FAILED_FALLBACK.to_string()
        } else {
            description
        };
        Self::new(QUERY_FAILED_TITLE, description, Severity::Error)
    }

    pub fn missing_data() -> Self {
        Self::new(MISSING_DATA_TITLE, MISSING_DATA_DESCRIPTION, Severity::Info)
    }
}

/// Where user-facing notices end up. Nothing is returned to the caller.
pub trait Notifier {
    fn notify(&mut self, notice: Notice);
}

/// Sends notices to the log, for runs without a window.
#[derive(Debug, Default)]
pub struct LogNotifier;

impl Notifier for LogNotifier {
    fn notify(&mut self, notice: Notice) {
        match notice.severity {
            Severity::Info => info!(title = %notice.title, "{}", notice.description),
            Severity::Error => error!(title = %notice.title, "{}", notice.description),
        }
    }
}

impl Notifier for Vec<Notice> {
    fn notify(&mut self, notice: Notice) {
        self.push(notice);
    }
}

#[cfg(test)]
mod tests {
    use std::{
        io,
        sync::{
            Arc,
            Mutex,
        },
    };

    use super::*;

    #[derive(Clone, Default)]
    struct Captured(Arc<Mutex<Vec<u8>>>);

    impl io::Write for Captured {
        fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
            self.0.lock().unwrap().extend_from_slice(buf);
            Ok(buf.len())
        }

        fn flush(&mut self) -> io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_log_notifier_uses_severity_level() {
        let captured = Captured::default();
        let writer = captured.clone();
        let subscriber = tracing_subscriber::fmt()
            .with_ansi(false)
            .with_writer(move || writer.clone())
            .finish();

        tracing::subscriber::with_default(subscriber, || {
            let mut notifier = LogNotifier;
            notifier.notify(Notice::missing_data());
            notifier.notify(Notice::query_failed(&ConsultaError::QuerySubmitFailed(
                "servidor caído".to_string(),
            )));
        });

        let output = String::from_utf8(captured.0.lock().unwrap().clone()).unwrap();
        let lines: Vec<&str> = output.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[0].contains("INFO"));
        assert!(lines[0].contains(MISSING_DATA_DESCRIPTION));
        assert!(lines[0].contains(MISSING_DATA_TITLE));
        assert!(lines[1].contains("ERROR"));
        assert!(lines[1].contains("servidor caído"));
        assert!(lines[1].contains(QUERY_FAILED_TITLE));
    }

    #[test]
    fn test_blank_query_failure_uses_fallback() {
        let notice = Notice::query_failed(&ConsultaError::QuerySubmitFailed("  ".to_string()));
        assert_eq!(notice.description, QUERY_FAILED_FALLBACK);
        assert_eq!(notice.severity, Severity::Error);
    }
}
