use std::net::SocketAddr;

/// The service always listens here; nothing is read from the environment.
pub const PORT: u16 = 8080;

/// Listener settings.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Config {
    pub port: u16,
}

impl Default for Config {
    fn default() -> Self {
        Self { port: PORT }
    }
}

impl Config {
    /// All interfaces on the configured port.
    pub fn addr(&self) -> SocketAddr {
        SocketAddr::from(([0, 0, 0, 0], self.port))
    }
}
