//! RPC verbs
//!
//! The full set of methods this library sends. Verbs are never built from
//! caller input.

use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RpcMethod {
    ListDomains,
    GetDomain,
    FindDomains,
    RegisterDomain,
    CheckTask,
    ListRecords,
    AddRecord,
    EditRecord,
    RemoveRecord,
    ListServers,
    ListServerImages,
    ListServerTypes,
    StopServer,
    StartServer,
    RestartServer,
    ResetServer,
    AddServer,
    RemoveServer,
}

impl RpcMethod {
    pub const ALL: [Self; 18] = [
        Self::ListDomains,
        Self::GetDomain,
        Self::FindDomains,
        Self::RegisterDomain,
        Self::CheckTask,
        Self::ListRecords,
        Self::AddRecord,
        Self::EditRecord,
        Self::RemoveRecord,
        Self::ListServers,
        Self::ListServerImages,
        Self::ListServerTypes,
        Self::StopServer,
        Self::StartServer,
        Self::RestartServer,
        Self::ResetServer,
        Self::AddServer,
        Self::RemoveServer,
    ];

    /// Wire name of the method.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::ListDomains => "list-domains",
            Self::GetDomain => "get-domain",
            Self::FindDomains => "find-domains",
            Self::RegisterDomain => "register-domain",
            Self::CheckTask => "check-task",
            Self::ListRecords => "list-records",
            Self::AddRecord => "add-record",
            Self::EditRecord => "edit-record",
            Self::RemoveRecord => "remove-record",
            Self::ListServers => "list-servers",
            Self::ListServerImages => "list-server-images",
            Self::ListServerTypes => "list-server-types",
            Self::StopServer => "stop-server",
            Self::StartServer => "start-server",
            Self::RestartServer => "restart-server",
            Self::ResetServer => "reset-server",
            Self::AddServer => "add-server",
            Self::RemoveServer => "remove-server",
        }
    }
}

impl fmt::Display for RpcMethod {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
