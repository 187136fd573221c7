//! The response record and the host-matching rule that picks its message.

use chrono::{DateTime, Local};
use serde::Serialize;

/// Host value that earns the domain greeting. Compared exactly, port included.
pub const DOMAIN_HOST: &str = "domain.tbd";

/// The two greetings a client can receive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum Message {
    #[serde(rename = "Welcome to the domain!")]
    Domain,
    #[serde(rename = "Welcome to the IP address!")]
    IpAddress,
}

impl Message {
    /// Pick the message for the `Host` value a client sent.
    pub fn for_host(host: Option<&str>) -> Self {
        match host {
            Some(DOMAIN_HOST) => Message::Domain,
            _ => Message::IpAddress,
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            Message::Domain => "Welcome to the domain!",
            Message::IpAddress => "Welcome to the IP address!",
        }
    }
}

/// Body returned for every request. Built per request and dropped once serialized.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Greeting {
    pub hostname: String,
    pub time: DateTime<Local>,
    pub message: Message,
}

impl Greeting {
    pub fn new(request_host: Option<&str>, now: DateTime<Local>, hostname: String) -> Self {
        Self {
            hostname,
            time: now,
            message: Message::for_host(request_host),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn fixed_now() -> DateTime<Local> {
        DateTime::from_timestamp(1_700_000_000, 0)
            .unwrap()
            .with_timezone(&Local)
    }

    #[test]
    fn test_domain_host_gets_domain_message() {
        let greeting = Greeting::new(Some("domain.tbd"), fixed_now(), "node-1".to_string());
        assert_eq!(greeting.message, Message::Domain);
        assert_eq!(greeting.message.as_str(), "Welcome to the domain!");
        assert_eq!(greeting.hostname, "node-1");
        assert_eq!(greeting.time, fixed_now());
    }

    #[test]
    fn test_other_hosts_get_ip_message() {
        for host in [
            Some("203.0.113.5:8080"),
            Some("domain.tbd:8080"),
            Some("DOMAIN.TBD"),
            Some("www.domain.tbd"),
            Some(""),
            None,
        ] {
            assert_eq!(Message::for_host(host), Message::IpAddress, "host {host:?}");
        }
    }

    #[test]
    fn test_serializes_three_fields_in_order() {
        let greeting = Greeting::new(None, fixed_now(), "node-1".to_string());
        let json = serde_json::to_string(&greeting).unwrap();

        assert!(json.starts_with(r#"{"hostname":"node-1","time":""#), "{json}");
        assert!(json.ends_with(r#","message":"Welcome to the IP address!"}"#), "{json}");

        let value: serde_json::Value = serde_json::from_str(&json).unwrap();
        let time = value["time"].as_str().unwrap();
        let parsed = DateTime::parse_from_rfc3339(time).unwrap();
        assert_eq!(parsed, fixed_now());
    }

    #[test]
    fn test_message_serializes_as_its_text() {
        for message in [Message::Domain, Message::IpAddress] {
            let json = serde_json::to_value(message).unwrap();
            assert_eq!(json, serde_json::Value::String(message.as_str().to_string()));
        }
    }
}
