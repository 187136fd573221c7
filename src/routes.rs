use std::convert::Infallible;

use warp::http::header::{HeaderMap, HOST};
use warp::Filter;

use crate::environment::Environment;
use crate::greeting::Greeting;

/// Catch-all filter: every method and every path gets the greeting.
pub fn greeting<E: Environment>(
    env: E,
) -> impl Filter<Extract = (impl warp::Reply,), Error = Infallible> + Clone {
    warp::any()
        .and(with_env(env))
        .and(warp::header::headers_cloned())
        .map(|env: E, headers: HeaderMap| {
            // a Host that isn't visible ASCII can't be "domain.tbd"
            let host = headers.get(HOST).and_then(|value| value.to_str().ok());
            let greeting = Greeting::new(host, env.now(), env.hostname());
            tracing::debug!(?host, message = greeting.message.as_str(), "greeting");
            // replies 500 and logs if serialization fails
            warp::reply::json(&greeting)
        })
        .with(warp::trace::request())
}

fn with_env<E: Environment>(env: E) -> impl Filter<Extract = (E,), Error = Infallible> + Clone {
    warp::any().map(move || env.clone())
}
