use std::mem;

use tracing::{
    debug,
    info,
    warn,
};

use super::{
    notice::{
        Notice,
        Notifier,
    },
    ConsultaError,
    OptionsBundle,
    OptionsCache,
    QueryRequest,
    ResultSet,
    Year,
};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Phase {
    Idle,
    LoadingOptions,
    OptionsReady,
    OptionsError,
    Submitting,
    ResultsReady,
    QueryError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Selection {
    pub year: Option<Year>,
    pub university: Option<String>,
    pub career: Option<String>,
}

impl Selection {
    pub fn is_complete(&self) -> bool {
        self.year.is_some() && self.university.is_some() && self.career.is_some()
    }

    pub fn request(&self) -> Result<QueryRequest, ConsultaError> {
        match (&self.year, &self.university, &self.career) {
            (Some(year), Some(university), Some(career)) => {
                Ok(QueryRequest::new(*year, university.clone(), career.clone()))
            }
            _ => {
                let mut missing = Vec::new();
                if self.year.is_none() {
                    missing.push("year");
                }
                if self.university.is_none() {
                    missing.push("university");
                }
                if self.career.is_none() {
                    missing.push("career");
                }
                Err(ConsultaError::IncompleteSelection { missing })
            }
        }
    }
}

/// Identity of an options fetch. Only the most recently issued ticket may be applied.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OptionsTicket {
    pub id: u64,
    pub year: Year,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QueryTicket {
    pub id: u64,
    pub request: QueryRequest,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Applied,
    Failed,
    /// The response belongs to a request that has since been superseded; nothing changed.
    Stale,
}

/// The cascading Year → University → Career selection and everything derived from it.
///
/// The session never touches the network. Operations that need a fetch hand out a
/// ticket; whoever runs the fetch returns the outcome through `apply_options` or
/// `apply_query`, where responses for superseded tickets are dropped.
#[derive(Debug)]
pub struct Session {
    selection: Selection,
    phase: Phase,
    cache: OptionsCache,
    careers: Vec<String>,
    results: Option<ResultSet>,
    options_ticket: Option<OptionsTicket>,
    query_ticket: Option<u64>,
    next_ticket: u64,
    notices: Vec<Notice>,
}

impl Session {
    pub fn new() -> Self {
        Self {
            selection: Selection::default(),
            phase: Phase::Idle,
            cache: OptionsCache::new(),
            careers: Vec::new(),
            results: None,
            options_ticket: None,
            query_ticket: None,
            next_ticket: 0,
            notices: Vec::new(),
        }
    }

    pub fn selection(&self) -> &Selection {
        &self.selection
    }

    pub fn phase(&self) -> Phase {
        self.phase
    }

    pub fn cache(&self) -> &OptionsCache {
        &self.cache
    }

    pub fn results(&self) -> Option<&ResultSet> {
        self.results.as_ref()
    }

    pub fn careers(&self) -> &[String] {
        &self.careers
    }

    pub fn universities(&self) -> &[String] {
        self.current_bundle().map(OptionsBundle::universities).unwrap_or(&[])
    }

    pub fn is_loading_options(&self) -> bool {
        self.phase == Phase::LoadingOptions
    }

    pub fn is_submitting(&self) -> bool {
        self.phase == Phase::Submitting
    }

    pub fn university_enabled(&self) -> bool {
        self.options_available() && !self.is_submitting()
    }

    pub fn career_enabled(&self) -> bool {
        self.university_enabled() && self.selection.university.is_some() && !self.careers.is_empty()
    }

    pub fn can_submit(&self) -> bool {
        self.selection.is_complete() && self.options_available() && !self.is_submitting()
    }

    /// Starts over from `year`. Dependent selections and results are cleared before
    /// a ticket is issued. Returns `None` when the bundle is already cached.
    pub fn select_year(&mut self, year: Year) -> Option<OptionsTicket> {
        self.selection = Selection { year: Some(year), university: None, career: None };
        self.careers.clear();
        self.results = None;
        self.query_ticket = None;

        if self.cache.contains(year) {
            debug!(%year, "options served from cache");
            self.options_ticket = None;
            self.phase = Phase::OptionsReady;
            return None;
        }

        let ticket = OptionsTicket { id: self.issue_ticket(), year };
        debug!(%year, ticket = ticket.id, "options fetch issued");
        self.options_ticket = Some(ticket);
        self.phase = Phase::LoadingOptions;
        Some(ticket)
    }

    pub fn apply_options(
        &mut self,
        ticket: OptionsTicket,
        result: Result<OptionsBundle, ConsultaError>,
    ) -> Applied {
        if self.options_ticket != Some(ticket) || self.selection.year != Some(ticket.year) {
            warn!(year = %ticket.year, ticket = ticket.id, "discarding stale options response");
            return Applied::Stale;
        }
        self.options_ticket = None;

        match result {
            Ok(bundle) => {
                info!(
                    year = %ticket.year,
                    universities = bundle.universities().len(),
                    "options loaded"
                );
                self.cache.insert(ticket.year, bundle);
                self.phase = Phase::OptionsReady;
                Applied::Applied
            }
            Err(error) => {
                warn!(year = %ticket.year, %error, "options fetch failed");
                self.phase = Phase::OptionsError;
                self.notices.push(Notice::options_failed(&error));
                Applied::Failed
            }
        }
    }

    /// Careers come straight from the cached bundle; an unknown university yields none.
    pub fn select_university(&mut self, university: &str) -> Result<&[String], ConsultaError> {
        if !self.university_enabled() {
            return Err(ConsultaError::SelectionLocked("university"));
        }

        self.careers = self
            .current_bundle()
            .map(|bundle| bundle.careers_for(university).to_vec())
            .unwrap_or_default();
        if self.careers.is_empty() {
            debug!(university, "no careers cached for university");
        }

        self.selection.university = Some(university.to_string());
        self.selection.career = None;
        self.results = None;
        self.phase = Phase::OptionsReady;
        Ok(self.careers.as_slice())
    }

    pub fn select_career(&mut self, career: &str) -> Result<(), ConsultaError> {
        if !self.career_enabled() {
            return Err(ConsultaError::SelectionLocked("career"));
        }
        if !self.careers.iter().any(|c| c == career) {
            return Err(ConsultaError::UnknownCareer(career.to_string()));
        }

        self.selection.career = Some(career.to_string());
        self.results = None;
        self.phase = Phase::OptionsReady;
        Ok(())
    }

    /// Validates the selection locally and, if complete, moves to `Submitting`.
    pub fn begin_submit(&mut self) -> Result<QueryTicket, ConsultaError> {
        if self.is_submitting() {
            return Err(ConsultaError::SubmitInFlight);
        }

        let request = match self.selection.request() {
            Ok(request) => request,
            Err(error) => {
                debug!(%error, "submit rejected before reaching the service");
                self.notices.push(Notice::missing_data());
                return Err(error);
            }
        };
        if !self.options_available() {
            return Err(ConsultaError::SelectionLocked("query"));
        }

        let ticket = QueryTicket { id: self.issue_ticket(), request };
        debug!(ticket = ticket.id, "query issued");
        self.results = None;
        self.query_ticket = Some(ticket.id);
        self.phase = Phase::Submitting;
        Ok(ticket)
    }

    pub fn apply_query(
        &mut self,
        ticket: &QueryTicket,
        result: Result<ResultSet, ConsultaError>,
    ) -> Applied {
        if self.query_ticket != Some(ticket.id) || !self.is_submitting() {
            warn!(ticket = ticket.id, "discarding stale query response");
            return Applied::Stale;
        }
        self.query_ticket = None;

        match result {
            Ok(items) => {
                info!(ticket = ticket.id, items = items.len(), "query finished");
                self.results = Some(items);
                self.phase = Phase::ResultsReady;
                Applied::Applied
            }
            Err(error) => {
                warn!(ticket = ticket.id, %error, "query failed");
                self.results = None;
                self.phase = Phase::QueryError;
                self.notices.push(Notice::query_failed(&error));
                Applied::Failed
            }
        }
    }

    pub fn take_notices(&mut self) -> Vec<Notice> {
        mem::take(&mut self.notices)
    }

    pub fn flush_notices(&mut self, notifier: &mut impl Notifier) {
        for notice in self.take_notices() {
            notifier.notify(notice);
        }
    }

    fn options_available(&self) -> bool {
        matches!(
            self.phase,
            Phase::OptionsReady | Phase::Submitting | Phase::ResultsReady | Phase::QueryError
        )
    }

    fn current_bundle(&self) -> Option<&OptionsBundle> {
        if !self.options_available() {
            return None;
        }
        self.selection.year.and_then(|year| self.cache.get(year))
    }

    fn issue_ticket(&mut self) -> u64 {
        self.next_ticket += 1;
        self.next_ticket
    }
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}
