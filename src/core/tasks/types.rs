use crate::core::{
    session::{
        Applied,
        OptionsTicket,
        QueryTicket,
        Session,
    },
    ConsultaError,
    OptionsBundle,
    ResultSet,
};

#[derive(Debug)]
pub enum TaskResult {
    OptionsLoaded { ticket: OptionsTicket, result: Result<OptionsBundle, ConsultaError> },
    QueryFinished { ticket: QueryTicket, result: Result<ResultSet, ConsultaError> },
}

impl TaskResult {
    pub fn task_type(&self) -> &'static str {
        match self {
            TaskResult::OptionsLoaded { .. } => "options",
            TaskResult::QueryFinished { .. } => "query",
        }
    }

    /// Hands the outcome to the session, which drops it if the ticket was superseded.
    pub fn apply_to(self, session: &mut Session) -> Applied {
        match self {
            TaskResult::OptionsLoaded { ticket, result } => session.apply_options(ticket, result),
            TaskResult::QueryFinished { ticket, result } => session.apply_query(&ticket, result),
        }
    }
}
