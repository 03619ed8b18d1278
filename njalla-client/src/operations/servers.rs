//! Server operations

use serde::Deserialize;

use crate::client::NjallaClient;
use crate::error::Result;
use crate::method::RpcMethod;
use crate::params::Params;
use crate::types::{NewServer, Server, ServerReset};

#[derive(Deserialize)]
struct ServerList {
    servers: Vec<Server>,
}

#[derive(Deserialize)]
struct ImageList {
    images: Vec<String>,
}

#[derive(Deserialize)]
struct TypeList {
    types: Vec<String>,
}

impl NjallaClient {
    pub async fn list_servers(&self, token: &str) -> Result<Vec<Server>> {
        let list: ServerList = self
            .call_as(token, RpcMethod::ListServers, Params::new())
            .await?;
        Ok(list.servers)
    }

    /// Operating system images available for new or reset servers.
    pub async fn list_server_images(&self, token: &str) -> Result<Vec<String>> {
        let list: ImageList = self
            .call_as(token, RpcMethod::ListServerImages, Params::new())
            .await?;
        Ok(list.images)
    }

    /// Server plans available for new or reset servers.
    pub async fn list_server_types(&self, token: &str) -> Result<Vec<String>> {
        let list: TypeList = self
            .call_as(token, RpcMethod::ListServerTypes, Params::new())
            .await?;
        Ok(list.types)
    }

    /// Stop a running server. Its data is kept.
    pub async fn stop_server(&self, token: &str, id: &str) -> Result<Server> {
        self.server_action(token, RpcMethod::StopServer, id).await
    }

    pub async fn start_server(&self, token: &str, id: &str) -> Result<Server> {
        self.server_action(token, RpcMethod::StartServer, id).await
    }

    pub async fn restart_server(&self, token: &str, id: &str) -> Result<Server> {
        self.server_action(token, RpcMethod::RestartServer, id).await
    }

    /// Reprovision a server with new settings. **Its data is destroyed.**
    pub async fn reset_server(&self, token: &str, id: &str, reset: &ServerReset) -> Result<Server> {
        self.call_as(token, RpcMethod::ResetServer, reset.to_params(id)).await
    }

    pub async fn add_server(&self, token: &str, server: &NewServer) -> Result<Server> {
        self.call_as(token, RpcMethod::AddServer, server.to_params()).await
    }

    /// Delete a server. **Its data is destroyed.**
    pub async fn remove_server(&self, token: &str, id: &str) -> Result<Server> {
        self.server_action(token, RpcMethod::RemoveServer, id).await
    }

    async fn server_action(&self, token: &str, method: RpcMethod, id: &str) -> Result<Server> {
        let params = Params::new().insert("id", id);
        self.call_as(token, method, params).await
    }
}
