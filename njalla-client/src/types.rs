use std::fmt;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::error::NjallaError;
use crate::params::Params;

// ============ Domains ============

/// A domain owned by the account.
///
/// `list-domains` returns a minimal projection (name, status, expiry) while
/// `get-domain` returns the full one. The optional fields are `None` when the
/// provider did not send them, which is not the same as `Some(false)` / `Some(0)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Domain {
    /// Fully qualified domain name, unique per provider.
    pub name: String,
    /// Provider-defined status, e.g. `active` or `inactive`.
    pub status: String,
    /// Registration expiry.
    #[serde(with = "crate::utils::datetime")]
    pub expiry: DateTime<Utc>,
    /// Whether the domain is transfer-locked.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub locked: Option<bool>,
    /// Whether mail forwarding is enabled.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub mailforwarding: Option<bool>,
    /// Maximum number of custom nameservers.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub max_nameservers: Option<u32>,
}

/// Availability and price of a domain, as returned by `find-domains`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct MarketDomain {
    pub name: String,
    /// Provider-defined, e.g. `available`, `taken`, `in progress`, `failed`.
    pub status: String,
    /// Price in the smallest currency unit.
    pub price: u64,
}

impl MarketDomain {
    #[must_use]
    pub fn is_available(&self) -> bool {
        self.status == "available"
    }
}

// ============ Tasks ============

/// Handle of an asynchronous provider-side operation.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct TaskId(pub String);

impl TaskId {
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for TaskId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for TaskId {
    fn from(s: &str) -> Self {
        Self(s.to_string())
    }
}

impl From<String> for TaskId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// Snapshot of a task, as returned by `check-task`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Task {
    pub id: TaskId,
    pub status: String,
}

// ============ DNS Records ============

/// TTL values the provider accepts.
///
/// Any other number is rejected client-side with
/// [`NjallaError::InvalidParameter`] instead of being rounded to a neighbour.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub enum Ttl {
    /// 60 seconds
    OneMinute,
    /// 300 seconds
    FiveMinutes,
    /// 900 seconds
    FifteenMinutes,
    /// 3600 seconds
    OneHour,
    /// 10800 seconds
    ThreeHours,
    /// 21600 seconds
    SixHours,
    /// 86400 seconds
    OneDay,
}

impl Ttl {
    pub const ALL: [Self; 7] = [
        Self::OneMinute,
        Self::FiveMinutes,
        Self::FifteenMinutes,
        Self::OneHour,
        Self::ThreeHours,
        Self::SixHours,
        Self::OneDay,
    ];

    pub const fn as_secs(self) -> u32 {
        match self {
            Self::OneMinute => 60,
            Self::FiveMinutes => 300,
            Self::FifteenMinutes => 900,
            Self::OneHour => 3600,
            Self::ThreeHours => 10800,
            Self::SixHours => 21600,
            Self::OneDay => 86400,
        }
    }
}

impl TryFrom<u32> for Ttl {
    type Error = NjallaError;

    fn try_from(secs: u32) -> Result<Self, Self::Error> {
        Self::ALL
            .into_iter()
            .find(|ttl| ttl.as_secs() == secs)
            .ok_or_else(|| NjallaError::InvalidParameter {
                param: "ttl".to_string(),
                detail: format!(
                    "{secs} is not an allowed TTL (expected one of 60, 300, 900, 3600, 10800, 21600, 86400)"
                ),
            })
    }
}

impl From<Ttl> for u32 {
    fn from(ttl: Ttl) -> Self {
        ttl.as_secs()
    }
}

impl fmt::Display for Ttl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.as_secs())
    }
}

/// A DNS record as stored by the provider.
///
/// `ttl` is kept as the raw number the provider returned; use
/// [`Record::validated_ttl`] to check it against the allowed set.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Record {
    /// Provider-assigned id.
    pub id: u64,
    /// Relative name (`@` for the apex).
    pub name: String,
    /// DNS record type (`A`, `AAAA`, `MX`, `TXT`, ...).
    #[serde(rename = "type")]
    pub record_type: String,
    pub content: String,
    pub ttl: u32,
    /// Only meaningful for types such as MX and SRV.
    #[serde(rename = "prio", default, skip_serializing_if = "Option::is_none")]
    pub priority: Option<u32>,
}

impl Record {
    pub fn validated_ttl(&self) -> Result<Ttl, NjallaError> {
        Ttl::try_from(self.ttl)
    }
}

/// Input for `add-record`. The provider assigns the id.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewRecord {
    pub name: String,
    pub record_type: String,
    pub content: String,
    pub ttl: Ttl,
    pub priority: Option<u32>,
}

impl NewRecord {
    pub fn new(
        name: impl Into<String>,
        record_type: impl Into<String>,
        content: impl Into<String>,
        ttl: Ttl,
    ) -> Self {
        Self {
            name: name.into(),
            record_type: record_type.into(),
            content: content.into(),
            ttl,
            priority: None,
        }
    }

    #[must_use]
    pub fn with_priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub(crate) fn to_params(&self, domain: &str) -> Params {
        Params::new()
            .insert("domain", domain)
            .insert("name", self.name.as_str())
            .insert("type", self.record_type.as_str())
            .insert("content", self.content.as_str())
            .insert("ttl", self.ttl.as_secs())
            .insert_opt("prio", self.priority)
    }
}

/// Input for `edit-record`.
///
/// Only the fields that are set are sent; everything else is left untouched
/// by the provider.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RecordUpdate {
    pub id: u64,
    pub name: Option<String>,
    pub record_type: Option<String>,
    pub content: Option<String>,
    pub ttl: Option<Ttl>,
    pub priority: Option<u32>,
}

impl RecordUpdate {
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    #[must_use]
    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    #[must_use]
    pub fn record_type(mut self, record_type: impl Into<String>) -> Self {
        self.record_type = Some(record_type.into());
        self
    }

    #[must_use]
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    #[must_use]
    pub fn ttl(mut self, ttl: Ttl) -> Self {
        self.ttl = Some(ttl);
        self
    }

    #[must_use]
    pub fn priority(mut self, priority: u32) -> Self {
        self.priority = Some(priority);
        self
    }

    pub(crate) fn to_params(&self, domain: &str) -> Params {
        Params::new()
            .insert("domain", domain)
            .insert("id", self.id)
            .insert_opt("name", self.name.as_deref())
            .insert_opt("type", self.record_type.as_deref())
            .insert_opt("content", self.content.as_deref())
            .insert_opt("ttl", self.ttl.map(Ttl::as_secs))
            .insert_opt("prio", self.priority)
    }
}

impl From<&Record> for RecordUpdate {
    /// Every field of `record`, ready to be edited and sent back.
    fn from(record: &Record) -> Self {
        Self {
            id: record.id,
            name: Some(record.name.clone()),
            record_type: Some(record.record_type.clone()),
            content: Some(record.content.clone()),
            ttl: Ttl::try_from(record.ttl).ok(),
            priority: record.priority,
        }
    }
}

// ============ Servers ============

/// A virtual server.
///
/// Fields the provider leaves out decode to their empty value.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct Server {
    pub name: String,
    #[serde(rename = "type")]
    pub server_type: String,
    pub id: String,
    pub status: String,
    pub os: String,
    /// Kept verbatim: the provider's format is not a strict timestamp grammar.
    pub expiry: String,
    pub autorenew: bool,
    pub ssh_key: String,
    pub ips: Vec<String>,
    pub reverse_name: String,
    pub os_state: String,
}

/// Input for `add-server`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewServer {
    pub name: String,
    pub server_type: String,
    pub os: String,
    pub ssh_key: String,
    pub months: u32,
}

impl NewServer {
    pub(crate) fn to_params(&self) -> Params {
        Params::new()
            .insert("name", self.name.as_str())
            .insert("type", self.server_type.as_str())
            .insert("os", self.os.as_str())
            .insert("ssh_key", self.ssh_key.as_str())
            .insert("months", self.months)
    }
}

/// Input for `reset-server`. The server is wiped and reprovisioned.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ServerReset {
    pub os: String,
    pub ssh_key: String,
    pub server_type: String,
}

impl ServerReset {
    pub(crate) fn to_params(&self, id: &str) -> Params {
        Params::new()
            .insert("id", id)
            .insert("os", self.os.as_str())
            .insert("ssh_key", self.ssh_key.as_str())
            .insert("type", self.server_type.as_str())
    }
}

#[cfg(test)]
mod tests {
    use serde_json::{Value, json};

    use super::*;

    fn params_json(params: Params) -> Value {
        Value::Object(params.into_inner())
    }

    #[test]
    fn ttl_accepts_allowed_values() {
        for secs in [60, 300, 900, 3600, 10800, 21600, 86400] {
            let ttl = Ttl::try_from(secs).unwrap();
            assert_eq!(ttl.as_secs(), secs);
        }
    }

    #[test]
    fn ttl_rejects_other_values() {
        for secs in [0, 59, 61, 600, 7200, 86401] {
            let err = Ttl::try_from(secs).unwrap_err();
            assert!(
                matches!(&err, NjallaError::InvalidParameter { param, .. } if param == "ttl"),
                "unexpected error for {secs}: {err:?}"
            );
        }
    }

    #[test]
    fn ttl_serde_is_a_bare_number() {
        assert_eq!(serde_json::to_string(&Ttl::OneHour).unwrap(), "3600");
        assert_eq!(serde_json::from_str::<Ttl>("900").unwrap(), Ttl::FifteenMinutes);
        assert!(serde_json::from_str::<Ttl>("901").is_err());
    }

    #[test]
    fn domain_minimal_projection_leaves_optionals_absent() {
        let domain: Domain = serde_json::from_value(json!({
            "name": "testing1.com",
            "status": "active",
            "expiry": "2021-02-20T19:38:48Z"
        }))
        .unwrap();
        assert_eq!(domain.locked, None);
        assert_eq!(domain.mailforwarding, None);
        assert_eq!(domain.max_nameservers, None);

        let back = serde_json::to_value(&domain).unwrap();
        assert_eq!(
            back,
            json!({"name": "testing1.com", "status": "active", "expiry": "2021-02-20T19:38:48Z"})
        );
    }

    #[test]
    fn domain_full_projection_keeps_false() {
        let domain: Domain = serde_json::from_value(json!({
            "name": "testing.com",
            "status": "active",
            "expiry": "2021-02-20T19:38:48Z",
            "locked": true,
            "mailforwarding": false,
            "max_nameservers": 10
        }))
        .unwrap();
        assert_eq!(domain.locked, Some(true));
        assert_eq!(domain.mailforwarding, Some(false));
        assert_eq!(domain.max_nameservers, Some(10));
    }

    #[test]
    fn record_decodes_prio_key() {
        let record: Record = serde_json::from_value(json!({
            "id": 1340, "name": "@", "type": "MX",
            "content": "mail.protonmail.ch", "ttl": 300, "prio": 10
        }))
        .unwrap();
        assert_eq!(record.priority, Some(10));
        assert_eq!(record.record_type, "MX");
        assert_eq!(record.validated_ttl().unwrap(), Ttl::FiveMinutes);
    }

    #[test]
    fn new_record_omits_unset_priority() {
        let record = NewRecord::new("@", "A", "1.2.3.4", Ttl::OneHour);
        let params = params_json(record.to_params("example.com"));
        assert_eq!(
            params,
            json!({
                "domain": "example.com", "name": "@", "type": "A",
                "content": "1.2.3.4", "ttl": 3600
            })
        );
    }

    #[test]
    fn new_record_sends_prio() {
        let record =
            NewRecord::new("@", "MX", "mail.example.com", Ttl::FiveMinutes).with_priority(10);
        let params = params_json(record.to_params("example.com"));
        assert_eq!(params["prio"], json!(10));
        assert!(params.get("priority").is_none());
    }

    #[test]
    fn record_update_sends_only_set_fields() {
        let update = RecordUpdate::new(1337).content("5.6.7.8");
        let params = params_json(update.to_params("example.com"));
        assert_eq!(
            params,
            json!({"domain": "example.com", "id": 1337, "content": "5.6.7.8"})
        );
    }

    #[test]
    fn record_update_from_record_carries_everything() {
        let record = Record {
            id: 7,
            name: "www".into(),
            record_type: "CNAME".into(),
            content: "example.com".into(),
            ttl: 10800,
            priority: None,
        };
        let params = params_json(RecordUpdate::from(&record).to_params("example.com"));
        assert_eq!(
            params,
            json!({
                "domain": "example.com", "id": 7, "name": "www", "type": "CNAME",
                "content": "example.com", "ttl": 10800
            })
        );
    }

    #[test]
    fn server_decodes_with_missing_fields() {
        let server: Server = serde_json::from_value(json!({
            "name": "box", "type": "njalla1", "id": "abc", "status": "running",
            "ips": ["1.2.3.4", "::1"]
        }))
        .unwrap();
        assert_eq!(server.server_type, "njalla1");
        assert_eq!(server.ips, vec!["1.2.3.4".to_string(), "::1".to_string()]);
        assert!(!server.autorenew);
        assert!(server.os_state.is_empty());
    }

    #[test]
    fn server_params() {
        let new = NewServer {
            name: "box".into(),
            server_type: "njalla1".into(),
            os: "debian".into(),
            ssh_key: "ssh-ed25519 AAAA".into(),
            months: 3,
        };
        assert_eq!(
            params_json(new.to_params()),
            json!({
                "name": "box",
                "type": "njalla1",
                "os": "debian",
                "ssh_key": "ssh-ed25519 AAAA",
                "months": 3
            })
        );

        let reset = ServerReset {
            os: "ubuntu".into(),
            ssh_key: "ssh-rsa B".into(),
            server_type: "njalla2".into(),
        };
        assert_eq!(
            params_json(reset.to_params("abc")),
            json!({"id": "abc", "os": "ubuntu", "ssh_key": "ssh-rsa B", "type": "njalla2"})
        );
    }

    #[test]
    fn market_domain_availability() {
        let d = MarketDomain {
            name: "a.net".into(),
            status: "available".into(),
            price: 30,
        };
        assert!(d.is_available());
    }
}
