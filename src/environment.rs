//! Ambient reads the handler depends on: the machine hostname and the clock.

use std::ffi::OsString;
use std::io;

use chrono::{DateTime, Local};
use tracing::warn;

/// Placeholder reported when the OS cannot give us a hostname.
pub const UNKNOWN_HOSTNAME: &str = "unknown";

/// Source of the hostname and current time for a request.
///
/// Cloned into every request, so implementations should be cheap to clone.
pub trait Environment: Clone + Send + Sync + 'static {
    fn hostname(&self) -> String;
    fn now(&self) -> DateTime<Local>;
}

/// Reads the real OS hostname and wall clock on every call.
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemEnvironment;

impl Environment for SystemEnvironment {
    fn hostname(&self) -> String {
        system_hostname()
    }

    fn now(&self) -> DateTime<Local> {
        Local::now()
    }
}

/// Best-effort hostname lookup. Never fails: a failed lookup yields
/// [`UNKNOWN_HOSTNAME`] so the response still goes out.
pub fn system_hostname() -> String {
    hostname_or_unknown(hostname::get)
}

fn hostname_or_unknown(lookup: impl FnOnce() -> io::Result<OsString>) -> String {
    match lookup() {
        Ok(name) => name.to_string_lossy().into_owned(),
        Err(err) => {
            warn!(error = %err, "hostname lookup failed, reporting {UNKNOWN_HOSTNAME:?}");
            UNKNOWN_HOSTNAME.to_string()
        }
    }
}
