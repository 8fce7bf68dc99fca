//! Upload seam between forms and the network.
//!
//! Forms only know [`Uploader`]. The native CLI implements it with reqwest,
//! the browser dashboard with `fetch` through gloo-net. Implementations must
//! issue exactly one POST per call, apply no timeout, and never retry.

use crate::endpoint::Endpoint;
use crate::outcome::RequestOutcome;
use crate::payload::SubmissionPayload;

/// Sends one payload to one endpoint.
///
/// Futures are not required to be `Send`: the browser runs everything on a
/// single thread.
#[allow(async_fn_in_trait)]
pub trait Uploader {
    /// POST `payload` to `endpoint` and report the outcome.
    ///
    /// Transport problems and non-2xx answers are folded into
    /// [`RequestOutcome::Failure`].
    async fn submit(&self, endpoint: Endpoint, payload: SubmissionPayload) -> RequestOutcome;
}

impl<U: Uploader> Uploader for &U {
    async fn submit(&self, endpoint: Endpoint, payload: SubmissionPayload) -> RequestOutcome {
        (**self).submit(endpoint, payload).await
    }
}

/// `<base>/<endpoint>`, tolerating a trailing slash on `base`.
pub fn endpoint_url(base: &str, endpoint: Endpoint) -> String {
    format!("{}/{}", base.trim_end_matches('/'), endpoint.as_str())
}
