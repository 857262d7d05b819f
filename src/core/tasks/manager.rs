use std::{
    sync::{
        mpsc,
        Arc,
    },
    time::Duration,
};

use tokio::runtime::Runtime;
use tracing::debug;

use super::TaskResult;
use crate::{
    api::LookupService,
    core::{
        session::{
            OptionsTicket,
            QueryTicket,
        },
        ConsultaError,
    },
};

type Waker = Arc<dyn Fn() + Send + Sync>;

/// Runs lookup calls off the UI loop. Every call runs to completion; results come back
/// through `poll_results` tagged with the ticket that started them.
pub struct TaskManager {
    runtime: Arc<Runtime>,
    service: Arc<dyn LookupService>,
    receiver: mpsc::Receiver<TaskResult>,
    sender: mpsc::Sender<TaskResult>,
    waker: Option<Waker>,
}

impl TaskManager {
    pub fn new(service: Arc<dyn LookupService>) -> Result<Self, ConsultaError> {
        let runtime = Arc::new(Runtime::new()?);

        let (sender, receiver) = mpsc::channel();

        Ok(Self { runtime, service, receiver, sender, waker: None })
    }

    /// Called after each result is sent, e.g. to request a repaint.
    pub fn set_waker(&mut self, waker: impl Fn() + Send + Sync + 'static) {
        self.waker = Some(Arc::new(waker));
    }

    pub fn poll_results(&mut self) -> Vec<TaskResult> {
        let mut results = Vec::new();

        while let Ok(result) = self.receiver.try_recv() {
            results.push(result);
        }

        results
    }

    pub fn wait_result(&self, timeout: Duration) -> Option<TaskResult> {
        self.receiver.recv_timeout(timeout).ok()
    }

    fn task_context(&self) -> (mpsc::Sender<TaskResult>, Arc<dyn LookupService>, Option<Waker>) {
        (self.sender.clone(), self.service.clone(), self.waker.clone())
    }

    pub fn fetch_options(&self, ticket: OptionsTicket) {
        let (sender, service, waker) = self.task_context();
        debug!(year = %ticket.year, ticket = ticket.id, "spawning options fetch");

        self.runtime.spawn(async move {
            let result = service.fetch_options(ticket.year).await;

            let _ = sender.send(TaskResult::OptionsLoaded { ticket, result });
            if let Some(wake) = waker {
                wake();
            }
        });
    }

    pub fn submit(&self, ticket: QueryTicket) {
        let (sender, service, waker) = self.task_context();
        debug!(ticket = ticket.id, "spawning query");

        self.runtime.spawn(async move {
            let result = service.submit(&ticket.request).await;

            let _ = sender.send(TaskResult::QueryFinished { ticket, result });
            if let Some(wake) = waker {
                wake();
            }
        });
    }
}
