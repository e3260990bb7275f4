//! WebSocket feed client for the block server.
//!
//! The feed client opens one connection per mount, decodes every text frame
//! into a [`DisplayRecord`](blocks::DisplayRecord), and appends it to the
//! mounted [`FeedState`]. It never sends and never reconnects: a dropped
//! connection stays dropped until the page mounts again.
//!
//! Connection ownership is explicit. [`spawn_feed_client`] returns a
//! [`FeedSubscription`]; calling `unsubscribe` (or dropping it) detaches the
//! receive loop and closes the socket. Frames that race past detachment are
//! ignored by [`FeedHandle::deliver`].
//!
//! All WebSocket logic is gated behind `#[cfg(feature = "hydrate")]` since it
//! requires a browser environment.
//!
//! ERROR HANDLING
//! ==============
//! Malformed frames are dropped and logged; the list is left unchanged and
//! the drop is counted in state so the status bar can surface it.

#[cfg(test)]
#[path = "feed_client_test.rs"]
mod feed_client_test;

use std::cell::Cell;
use std::rc::Rc;

use blocks::DecodePolicy;

#[cfg(feature = "hydrate")]
use crate::config::FeedConfig;
#[cfg(feature = "hydrate")]
use crate::state::feed::ConnectionStatus;
use crate::state::feed::FeedState;

/// Result of handing one text frame to the feed.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum FrameOutcome {
    /// The frame decoded and was appended.
    Appended,
    /// The frame failed to decode and was discarded.
    Dropped(String),
    /// The subscription was already released; the frame was ignored.
    Detached,
}

/// Decode `text` and apply it to `state`.
pub fn apply_frame(state: &mut FeedState, text: &str, policy: DecodePolicy) -> FrameOutcome {
    match blocks::decode_frame(text, policy) {
        Ok(record) => {
            state.push_record(record);
            FrameOutcome::Appended
        }
        Err(e) => {
            let reason = e.to_string();
            state.record_drop(reason.clone());
            FrameOutcome::Dropped(reason)
        }
    }
}

/// Owning side of a feed connection, held by the mounted page.
pub struct FeedSubscription {
    live: Rc<Cell<bool>>,
    #[cfg(feature = "hydrate")]
    abort: Option<futures::channel::oneshot::Sender<()>>,
}

/// Receiving side of a feed connection, held by the receive loop.
#[derive(Clone)]
pub struct FeedHandle {
    live: Rc<Cell<bool>>,
}

impl FeedSubscription {
    /// Create a live subscription and the handle its receive loop delivers through.
    pub fn channel() -> (Self, FeedHandle) {
        let live = Rc::new(Cell::new(true));
        let handle = FeedHandle { live: Rc::clone(&live) };
        let subscription = Self {
            live,
            #[cfg(feature = "hydrate")]
            abort: None,
        };
        (subscription, handle)
    }

    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Detach the receive loop and release the connection. Idempotent.
    pub fn unsubscribe(&mut self) {
        self.live.set(false);
        #[cfg(feature = "hydrate")]
        {
            if let Some(abort) = self.abort.take() {
                let _ = abort.send(());
            }
        }
    }
}

impl Drop for FeedSubscription {
    fn drop(&mut self) {
        self.unsubscribe();
    }
}

impl FeedHandle {
    #[must_use]
    pub fn is_live(&self) -> bool {
        self.live.get()
    }

    /// Apply a frame unless the owning subscription has been released.
    ///
    /// Any delivered frame, even a malformed one, marks the socket open.
    pub fn deliver(&self, state: &mut FeedState, text: &str, policy: DecodePolicy) -> FrameOutcome {
        if !self.is_live() {
            return FrameOutcome::Detached;
        }
        state.mark_open();
        apply_frame(state, text, policy)
    }
}

/// Spawn the feed connection as a local async task.
///
/// The returned subscription owns the connection; release it on unmount.
#[cfg(feature = "hydrate")]
pub fn spawn_feed_client(config: &FeedConfig, feed: leptos::prelude::RwSignal<FeedState>) -> FeedSubscription {
    let (mut subscription, handle) = FeedSubscription::channel();
    let (abort_tx, abort_rx) = futures::channel::oneshot::channel::<()>();
    subscription.abort = Some(abort_tx);

    leptos::task::spawn_local(feed_client_loop(
        config.endpoint.clone(),
        config.policy,
        feed,
        handle,
        abort_rx,
    ));

    subscription
}

/// Connect once and process frames until the socket ends or the
/// subscription is released.
#[cfg(feature = "hydrate")]
async fn feed_client_loop(
    url: String,
    policy: DecodePolicy,
    feed: leptos::prelude::RwSignal<FeedState>,
    handle: FeedHandle,
    mut abort: futures::channel::oneshot::Receiver<()>,
) {
    use futures::StreamExt;
    use futures::future::{Either, select};
    use gloo_net::websocket::Message;
    use gloo_net::websocket::futures::WebSocket;
    use leptos::prelude::Update;

    feed.try_update(|s| s.connection_status = ConnectionStatus::Connecting);

    let mut ws = match WebSocket::open(&url) {
        Ok(ws) => ws,
        Err(e) => {
            leptos::logging::warn!("feed connect to {url} failed: {e}");
            feed.try_update(|s| s.mark_failed(format!("connect failed: {e}")));
            return;
        }
    };

    // Status stays `Connecting` until the first frame proves the handshake
    // completed; an error before that is reported as `Failed`.
    leptos::logging::log!("feed connecting to {url}");

    let mut end_reason = None;
    loop {
        let next = ws.next();
        futures::pin_mut!(next);
        match select(next, &mut abort).await {
            Either::Left((Some(Ok(Message::Text(text))), _)) => {
                match feed.try_update(|s| handle.deliver(s, &text, policy)) {
                    Some(FrameOutcome::Dropped(reason)) => {
                        leptos::logging::warn!("dropped block frame: {reason}");
                    }
                    Some(FrameOutcome::Appended) => {}
                    Some(FrameOutcome::Detached) | None => break,
                }
            }
            Either::Left((Some(Ok(Message::Bytes(bytes))), _)) => {
                if handle.is_live() {
                    feed.try_update(FeedState::mark_open);
                }
                leptos::logging::log!("ignoring {} byte binary frame", bytes.len());
            }
            Either::Left((Some(Err(e)), _)) => {
                leptos::logging::warn!("feed recv error: {e}");
                end_reason = Some(e.to_string());
                break;
            }
            Either::Left((None, _)) => {
                leptos::logging::log!("feed disconnected");
                break;
            }
            Either::Right(_) => break,
        }
    }

    if handle.is_live() {
        feed.try_update(|s| s.mark_closed(end_reason));
    }
    if let Err(e) = ws.close(Some(1000), Some("feed closed")) {
        leptos::logging::warn!("feed close failed: {e}");
    }
}
