use super::QueryResultItem;

pub const DEFAULT_NOT_FOUND_MESSAGE: &str = "Sin datos de puntaje";
const MISSING_SCORE: &str = "—";

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RecordBody {
    Scores { min: String, max: String, source_column: Option<String> },
    Message(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DisplayRecord {
    pub code: String,
    pub body: RecordBody,
}

/// One record per item, in input order.
pub fn display_records(items: &[QueryResultItem]) -> Vec<DisplayRecord> {
    items.iter().map(display_record).collect()
}

pub fn display_record(item: &QueryResultItem) -> DisplayRecord {
    let body = if item.found {
        RecordBody::Scores {
            min: format_score(item.score_min),
            max: format_score(item.score_max),
            source_column: item.source_column.clone(),
        }
    } else {
        let message = item
            .message
            .as_deref()
            .map(str::trim)
            .filter(|m| !m.is_empty())
            .unwrap_or(DEFAULT_NOT_FOUND_MESSAGE);
        RecordBody::Message(message.to_string())
    };

    DisplayRecord { code: item.code.clone(), body }
}

fn format_score(score: Option<f64>) -> String {
    match score {
        Some(value) if value.is_finite() => value.to_string(),
        _ => MISSING_SCORE.to_string(),
    }
}
