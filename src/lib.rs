//! HTTP endpoint that answers every request with the server's hostname,
//! the current time, and a greeting picked from the request's `Host`.

use std::future::Future;
use std::net::SocketAddr;

pub mod config;
pub mod environment;
pub mod error;
pub mod greeting;
pub mod routes;

pub use config::Config;
pub use environment::{Environment, SystemEnvironment};
pub use error::{Error, Result};
pub use greeting::{Greeting, Message};

/// Bind the greeting service on `addr`.
///
/// Returns the address actually bound (useful with port 0) and the server
/// future, which runs until the process is killed.
pub fn bind<E: Environment>(
    addr: SocketAddr,
    env: E,
) -> Result<(SocketAddr, impl Future<Output = ()>)> {
    warp::serve(routes::greeting(env))
        .try_bind_ephemeral(addr)
        .map_err(|source| Error::Bind { addr, source })
}
