//! Task polling
//!
//! Long-running operations (domain registration) hand back a [`TaskId`]. The
//! poller queries `check-task` until the status lands in a caller-supplied
//! terminal set.
//!
//! - the first check happens immediately, sleeps only separate checks
//! - an error from a status check aborts the loop at once, it is not retried
//! - there is no iteration cap; bound the wait with [`PollOptions::deadline`]
//!   or the `cancel` future of [`NjallaClient::await_task_with_cancel`]

use std::collections::BTreeSet;
use std::future::Future;
use std::time::Duration;

use crate::client::NjallaClient;
use crate::error::{NjallaError, Result};
use crate::method::RpcMethod;
use crate::params::Params;
use crate::types::{Task, TaskId};

/// Default pause between two status checks.
const DEFAULT_POLL_INTERVAL_SECS: u64 = 5;

/// Settings for the task poll loop.
///
/// # Default
///
/// Terminal set `{"active"}`, 5s interval, no deadline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PollOptions {
    /// Statuses that end the loop successfully.
    pub terminal_states: BTreeSet<String>,
    /// Pause between two status checks.
    pub interval: Duration,
    /// Give up with [`NjallaError::Cancelled`] once this much time has passed.
    pub deadline: Option<Duration>,
}

impl Default for PollOptions {
    fn default() -> Self {
        Self {
            terminal_states: BTreeSet::from(["active".to_string()]),
            interval: Duration::from_secs(DEFAULT_POLL_INTERVAL_SECS),
            deadline: None,
        }
    }
}

impl PollOptions {
    /// Replace the terminal set.
    #[must_use]
    pub fn with_terminal_states<I, S>(mut self, states: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.terminal_states = states.into_iter().map(Into::into).collect();
        self
    }

    #[must_use]
    pub fn with_interval(mut self, interval: Duration) -> Self {
        self.interval = interval;
        self
    }

    #[must_use]
    pub fn with_deadline(mut self, deadline: Duration) -> Self {
        self.deadline = Some(deadline);
        self
    }

    pub fn is_terminal(&self, status: &str) -> bool {
        self.terminal_states.contains(status)
    }
}

impl NjallaClient {
    /// Query the current status of a task.
    pub async fn check_task(&self, token: &str, task_id: &TaskId) -> Result<Task> {
        let params = Params::new().insert("id", task_id.as_str());
        self.call_as(token, RpcMethod::CheckTask, params).await
    }

    /// Poll `task_id` until its status is terminal.
    ///
    /// Returns the terminal snapshot. Without a deadline in `options` this
    /// waits as long as the task takes.
    pub async fn await_task(
        &self,
        token: &str,
        task_id: &TaskId,
        options: &PollOptions,
    ) -> Result<Task> {
        self.await_task_with_cancel(token, task_id, options, std::future::pending::<()>()).await
    }

    /// Like [`await_task`](Self::await_task), but stops with
    /// [`NjallaError::Cancelled`] as soon as `cancel` completes.
    pub async fn await_task_with_cancel<C>(
        &self,
        token: &str,
        task_id: &TaskId,
        options: &PollOptions,
        cancel: C,
    ) -> Result<Task>
    where
        C: Future<Output = ()> + Send,
    {
        let deadline = async {
            match options.deadline {
                Some(limit) => tokio::time::sleep(limit).await,
                None => std::future::pending::<()>().await,
            }
        };

        tokio::select! {
            result = self.poll_until_terminal(token, task_id, options) => result,
            () = cancel => {
                log::info!("Polling task {task_id} cancelled by caller");
                Err(NjallaError::Cancelled {
                    task_id: task_id.to_string(),
                    detail: "cancelled by caller".to_string(),
                })
            }
            () = deadline => {
                let limit = options.deadline.unwrap_or_default();
                log::warn!("Polling task {task_id} gave up after {limit:?}");
                Err(NjallaError::Cancelled {
                    task_id: task_id.to_string(),
                    detail: format!("deadline of {limit:?} elapsed"),
                })
            }
        }
    }

    async fn poll_until_terminal(
        &self,
        token: &str,
        task_id: &TaskId,
        options: &PollOptions,
    ) -> Result<Task> {
        let mut checks: u32 = 0;
        loop {
            checks += 1;
            let task = self.check_task(token, task_id).await?;
            log::debug!("Task {task_id} status '{}' (check #{checks})", task.status);

            if options.is_terminal(&task.status) {
                log::info!(
                    "Task {task_id} reached '{}' after {checks} checks",
                    task.status
                );
                return Ok(task);
            }

            tokio::time::sleep(options.interval).await;
        }
    }
}
