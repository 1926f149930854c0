//! Debounced viewport tracking.
//!
//! Map viewport settle events arrive in bursts while the user pans and
//! zooms. The tracker keeps a single pending timer: every new event
//! cancels the previous one, so only the trailing event inside the
//! debounce window triggers a fetch.

use std::sync::{Arc, RwLock};
use std::time::Duration;

use futures::future::BoxFuture;
use log::warn;
use tokio::task::JoinHandle;

use waymark_core::landmarks::{BoundingBox, Landmark};

use crate::errors::ClientError;

/// Default debounce window between a viewport settling and the fetch.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// The visible map region, as reported by the map widget.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    pub center_lat: f64,
    pub center_lng: f64,
    pub lat_span: f64,
    pub lng_span: f64,
}

impl Viewport {
    /// The bounding box covering this viewport.
    pub fn bounds(&self) -> Result<BoundingBox, ClientError> {
        BoundingBox::new(
            self.center_lat + self.lat_span / 2.0,
            self.center_lat - self.lat_span / 2.0,
            self.center_lng + self.lng_span / 2.0,
            self.center_lng - self.lng_span / 2.0,
        )
        .map_err(|e| ClientError::Validation(e.to_string()))
    }
}

/// Action invoked with the settled bounding box.
pub type BoundsAction = Arc<dyn Fn(BoundingBox) -> BoxFuture<'static, ()> + Send + Sync>;

/// Single-slot debouncer over viewport settle events.
///
/// At most one timer is pending at any time; scheduling a new event
/// aborts the previous timer. Once a timer fires, the fetch it launches
/// is detached and runs to completion or failure regardless of later
/// events. Dropping the tracker cancels the pending timer as well.
pub struct BoundsTracker {
    delay: Duration,
    action: BoundsAction,
    pending: Option<JoinHandle<()>>,
}

impl BoundsTracker {
    pub fn new(action: BoundsAction) -> Self {
        Self::with_delay(DEFAULT_DEBOUNCE, action)
    }

    pub fn with_delay(delay: Duration, action: BoundsAction) -> Self {
        Self {
            delay,
            action,
            pending: None,
        }
    }

    /// Record a viewport settle event, restarting the debounce timer.
    pub fn viewport_settled(&mut self, viewport: Viewport) {
        self.cancel();
        let delay = self.delay;
        let action = self.action.clone();
        self.pending = Some(tokio::spawn(async move {
            tokio::time::sleep(delay).await;
            // A fired timer commits the fetch: later events debounce
            // timers only, never an in-flight request.
            match viewport.bounds() {
                Ok(bounds) => {
                    tokio::spawn(action(bounds));
                }
                Err(e) => warn!("Ignoring unusable viewport: {}", e),
            }
        }));
    }

    /// Abort the pending timer, if any. An already-started fetch is
    /// unaffected.
    pub fn cancel(&mut self) {
        if let Some(handle) = self.pending.take() {
            handle.abort();
        }
    }
}

impl Drop for BoundsTracker {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// The landmarks currently shown on the map.
///
/// Overlapping requests are not keyed: whichever response resolves last
/// overwrites the set, even if an older request resolves after a newer
/// one. Accepted limitation.
#[derive(Default)]
pub struct DisplaySet {
    landmarks: RwLock<Vec<Landmark>>,
}

impl DisplaySet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Replace the displayed set with a resolved response.
    pub fn apply(&self, landmarks: Vec<Landmark>) {
        match self.landmarks.write() {
            Ok(mut current) => *current = landmarks,
            Err(_) => warn!("display set lock poisoned, dropping update"),
        }
    }

    /// Snapshot of the displayed set.
    pub fn current(&self) -> Vec<Landmark> {
        self.landmarks
            .read()
            .map(|l| l.clone())
            .unwrap_or_default()
    }
}
