//! DNS record operations

use serde::Deserialize;

use crate::client::NjallaClient;
use crate::error::Result;
use crate::method::RpcMethod;
use crate::params::Params;
use crate::types::{NewRecord, Record, RecordUpdate};

#[derive(Deserialize)]
struct RecordList {
    records: Vec<Record>,
}

impl NjallaClient {
    /// All records of `domain`.
    pub async fn list_records(&self, token: &str, domain: &str) -> Result<Vec<Record>> {
        let params = Params::new().insert("domain", domain);
        let list: RecordList = self.call_as(token, RpcMethod::ListRecords, params).await?;
        Ok(list.records)
    }

    /// Create a record. The returned record carries the provider-assigned id.
    pub async fn add_record(
        &self,
        token: &str,
        domain: &str,
        record: &NewRecord,
    ) -> Result<Record> {
        self.call_as(token, RpcMethod::AddRecord, record.to_params(domain)).await
    }

    /// Change the fields set in `update`. The provider's result is ignored.
    pub async fn edit_record(
        &self,
        token: &str,
        domain: &str,
        update: &RecordUpdate,
    ) -> Result<()> {
        self.call(token, RpcMethod::EditRecord, update.to_params(domain)).await?;
        Ok(())
    }

    /// Delete record `id` from `domain`.
    pub async fn remove_record(&self, token: &str, domain: &str, id: u64) -> Result<()> {
        let params = Params::new().insert("domain", domain).insert("id", id);
        self.call(token, RpcMethod::RemoveRecord, params).await?;
        Ok(())
    }
}
