//! Broadcast event logger for the replay driver.

use navstate_core::state::NavEvent;
use tokio::sync::broadcast::{self, error::RecvError};

/// Counts reported once the event stream closes.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct LogSummary {
    pub logged: u64,
    pub skipped: u64,
}

/// Log every navigation event until the last store handle is dropped.
///
/// A lagging receiver skips the overwritten events and keeps going.
pub async fn log_events(mut event_rx: broadcast::Receiver<NavEvent>) -> LogSummary {
    let mut summary = LogSummary::default();

    loop {
        match event_rx.recv().await {
            Ok(event) => {
                log_event(&event);
                summary.logged += 1;
            }
            Err(RecvError::Lagged(n)) => {
                tracing::warn!(skipped = n, "navigation event logger lagged");
                summary.skipped += n;
            }
            Err(RecvError::Closed) => break,
        }
    }

    summary
}

fn log_event(event: &NavEvent) {
    match event {
        NavEvent::Navigated {
            requested,
            snapshot,
            ..
        } => {
            tracing::info!(
                "navigate {:?} -> {:?} / {:?}",
                requested,
                snapshot.current_route,
                snapshot.active_overlay
            );
        }
        NavEvent::OverlayShown { kind, .. } => {
            tracing::info!("overlay shown: {:?}", kind);
        }
        NavEvent::OverlayHidden {
            restored_route: Some(route),
            ..
        } => {
            tracing::info!("overlay hidden, returned to {:?}", route);
        }
        NavEvent::OverlayHidden { .. } => {
            tracing::info!("overlay hidden");
        }
    }
}
