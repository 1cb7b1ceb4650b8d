//! One fetch cycle: HTTP GET, Latin-1 decode, parse, scale.
//!
//! The network call and parsing run on ehttp's background thread; the result
//! is handed back to the UI thread over an mpsc channel, followed by a
//! repaint request so the result is picked up without user input. The store
//! itself is only ever written on the UI thread.

use std::sync::mpsc::Sender;

use thiserror::Error;

use crate::controller::CycleId;
use crate::feed::{decode_latin1, parse_feed, ParseError};
use crate::points::{MapPoint, ScreenOrigin};

/// The fixed coordinate feed endpoint. No headers, no query parameters.
pub const ENDPOINT_URL: &str =
    "https://daily.digpro.se/bios/servlet/bios.servlets.web.RecruitmentTestServlet";

/// Why a fetch cycle produced no point set.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum FetchError {
    /// Connect/read failure. Recoverable; the next trigger retries.
    #[error("network error: {0}")]
    Network(String),
    /// The server answered, but not with 2xx.
    #[error("server returned HTTP status {0}")]
    Status(u16),
    /// A malformed line aborted the cycle; no partial set is committed.
    #[error(transparent)]
    Parse(#[from] ParseError),
}

/// Result of one cycle, delivered back to the UI thread.
pub struct CycleOutcome {
    pub cycle: CycleId,
    /// Origin the points were scaled against at cycle start.
    pub origin: ScreenOrigin,
    pub result: Result<Vec<MapPoint>, FetchError>,
}

/// Decode, parse and scale a response body into a full point set.
///
/// All-or-nothing: any malformed line yields an error and no points.
pub fn build_points(body: &str, origin: ScreenOrigin) -> Result<Vec<MapPoint>, FetchError> {
    let records = parse_feed(body)?;
    Ok(records
        .into_iter()
        .map(|r| MapPoint::new(r.x, r.y, r.name, origin))
        .collect())
}

/// Start one background fetch cycle against [`ENDPOINT_URL`].
///
/// The completion callback runs off the UI thread: it decodes and parses the
/// body, sends a [`CycleOutcome`] through `tx`, and wakes the UI via
/// `ctx.request_repaint()`. Dropping the receiver silently discards the
/// outcome, so a late response after shutdown is harmless.
pub fn spawn_fetch(
    cycle: CycleId,
    origin: ScreenOrigin,
    tx: Sender<CycleOutcome>,
    ctx: egui::Context,
) {
    let request = ehttp::Request::get(ENDPOINT_URL);
    ehttp::fetch(request, move |response| {
        let result = match response {
            Ok(resp) if resp.ok => build_points(&decode_latin1(&resp.bytes), origin),
            Ok(resp) => Err(FetchError::Status(resp.status)),
            Err(err) => Err(FetchError::Network(err)),
        };
        if tx
            .send(CycleOutcome {
                cycle,
                origin,
                result,
            })
            .is_ok()
        {
            ctx.request_repaint();
        }
    });
}
