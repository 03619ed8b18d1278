//! Domain operations

use serde::Deserialize;

use crate::client::NjallaClient;
use crate::error::Result;
use crate::method::RpcMethod;
use crate::params::Params;
use crate::task::PollOptions;
use crate::types::{Domain, MarketDomain, Task, TaskId};

#[derive(Deserialize)]
struct DomainList {
    domains: Vec<Domain>,
}

#[derive(Deserialize)]
struct MarketDomainList {
    domains: Vec<MarketDomain>,
}

#[derive(Deserialize)]
struct TaskHandle {
    task: TaskId,
}

impl NjallaClient {
    /// List the account's domains (minimal projection: no optional fields).
    pub async fn list_domains(&self, token: &str) -> Result<Vec<Domain>> {
        let list: DomainList = self
            .call_as(token, RpcMethod::ListDomains, Params::new())
            .await?;
        Ok(list.domains)
    }

    /// Full details of one domain.
    pub async fn get_domain(&self, token: &str, domain: &str) -> Result<Domain> {
        let params = Params::new().insert("domain", domain);
        self.call_as(token, RpcMethod::GetDomain, params).await
    }

    /// Availability and price for names matching `query`.
    ///
    /// A query of `example` covers `example.com`, `example.net`, and so on.
    pub async fn find_domains(&self, token: &str, query: &str) -> Result<Vec<MarketDomain>> {
        let params = Params::new().insert("query", query);
        let list: MarketDomainList = self.call_as(token, RpcMethod::FindDomains, params).await?;
        Ok(list.domains)
    }

    /// Submit a registration and return the task handle without waiting.
    pub async fn start_register_domain(
        &self,
        token: &str,
        domain: &str,
        years: u32,
    ) -> Result<TaskId> {
        let params = Params::new().insert("domain", domain).insert("years", years);
        let handle: TaskHandle = self
            .call_as(token, RpcMethod::RegisterDomain, params)
            .await?;
        log::info!("Registration of {domain} submitted as task {}", handle.task);
        Ok(handle.task)
    }

    /// Register `domain` for `years` and wait for the registration task to finish.
    ///
    /// The registration call itself is never repeated; only the status check
    /// is polled.
    pub async fn register_domain(
        &self,
        token: &str,
        domain: &str,
        years: u32,
        options: &PollOptions,
    ) -> Result<Task> {
        let task_id = self.start_register_domain(token, domain, years).await?;
        self.await_task(token, &task_id, options).await
    }
}
