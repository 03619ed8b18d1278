//! # njalla-client
//!
//! Async client for the [Njalla](https://njal.la/) JSON-RPC API: domains,
//! DNS records and virtual servers.
//!
//! The API is a single POST endpoint. Every call sends
//! `{"method": "...", "params": {...}}` with `Authorization: Njalla <token>`
//! and receives either `{"result": ...}` or `{"error": {"code", "message"}}`.
//!
//! ## Feature Flags
//!
//! - **`native-tls`** *(default)*: Use the platform's native TLS implementation.
//! - **`rustls`**: Use rustls. Recommended for cross-compilation.
//!
//! ## Usage
//!
//! ```rust,no_run
//! use njalla_client::{ClientConfig, NewRecord, NjallaClient, Ttl};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let client = NjallaClient::new(&ClientConfig::default())?;
//!     let token = "your-token";
//!
//!     for domain in client.list_domains(token).await? {
//!         println!("{} ({}) expires {}", domain.name, domain.status, domain.expiry);
//!     }
//!
//!     let mx = NewRecord::new("@", "MX", "mail.example.com", Ttl::OneHour).with_priority(10);
//!     let created = client.add_record(token, "example.com", &mx).await?;
//!     println!("created record {}", created.id);
//!
//!     Ok(())
//! }
//! ```
//!
//! ## Registering Domains
//!
//! Registration is asynchronous on the provider side. [`NjallaClient::register_domain`]
//! submits it and polls `check-task` until the status is in
//! [`PollOptions::terminal_states`]:
//!
//! ```rust,no_run
//! # use njalla_client::*;
//! # async fn example(client: NjallaClient) -> Result<()> {
//! let options = PollOptions::default().with_deadline(std::time::Duration::from_secs(600));
//! let task = client.register_domain("token", "example.com", 1, &options).await?;
//! println!("task {} finished as {}", task.id, task.status);
//! # Ok(())
//! # }
//! ```
//!
//! ## Error Handling
//!
//! All operations return [`Result<T, NjallaError>`](NjallaError):
//!
//! - [`NjallaError::Network`] / [`NjallaError::Timeout`]: the request never completed
//! - [`NjallaError::Protocol`]: the response was not a usable JSON-RPC envelope
//! - [`NjallaError::Rpc`]: the provider refused, with its code and message intact
//!
//! Nothing is retried automatically.
//!
//! ## Testing
//!
//! [`NjallaClient::with_transport`] accepts any [`Transport`], so callers can
//! script responses without a network.

mod client;
mod config;
mod envelope;
mod error;
mod method;
mod operations;
mod params;
mod task;
mod transport;
mod types;
mod utils;

pub use client::NjallaClient;
pub use config::{ClientConfig, DEFAULT_ENDPOINT};
pub use envelope::{RpcErrorBody, RpcRequest, RpcResult, decode_response};
pub use error::{NjallaError, Result};
pub use method::RpcMethod;
pub use params::Params;
pub use task::PollOptions;
pub use transport::{AUTH_SCHEME, HttpTransport, Transport, authorization_header};
pub use types::{
    Domain, MarketDomain, NewRecord, NewServer, Record, RecordUpdate, Server, ServerReset, Task,
    TaskId, Ttl,
};

pub use utils::datetime;
