//! Rotation controller for the displayed attendance token.
//!
//! Owns the countdown: one token is active at a time, a 1-second tick counts
//! the window down, and hitting the end of the window (or a manual
//! regenerate) supersedes the token and resets the countdown. Observers get
//! every change through a watch channel; the admin view renders
//! [`TokenDisplay`] as the scannable code plus progress indicator.

use crate::token::TokenGenerator;
use chrono::{DateTime, Utc};
use db::models::session_token::{ROTATION_SECONDS, SessionToken};
use serde::Serialize;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio::time::{self, Duration};

/// Snapshot handed to the display layer.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TokenDisplay {
    pub encodable_value: String,
    pub remaining_seconds: u64,
    pub issued_at: DateTime<Utc>,
}

struct RotationState {
    token: SessionToken,
    remaining: u64,
}

impl RotationState {
    fn display(&self) -> TokenDisplay {
        TokenDisplay {
            encodable_value: self.token.value.clone(),
            remaining_seconds: self.remaining,
            issued_at: self.token.issued_at,
        }
    }
}

pub struct RotationController {
    state: Arc<Mutex<RotationState>>,
    display_tx: watch::Sender<TokenDisplay>,
    generator: TokenGenerator,
    window: u64,
    ticker: JoinHandle<()>,
}

impl RotationController {
    /// Starts a controller with the standard 60-second window.
    pub fn start(generator: TokenGenerator) -> Self {
        Self::with_window(generator, ROTATION_SECONDS)
    }

    /// Starts a controller, issues the first token, and spawns the tick task.
    /// Exactly one timer runs per controller instance; it stops on
    /// [`shutdown`](Self::shutdown) or drop.
    pub fn with_window(generator: TokenGenerator, window_secs: u64) -> Self {
        let window = window_secs.max(1);
        let state = Arc::new(Mutex::new(RotationState {
            token: generator.generate(),
            remaining: window,
        }));
        let (display_tx, _) = watch::channel(lock(&state).display());

        let ticker = tokio::spawn(run_ticker(
            Arc::clone(&state),
            display_tx.clone(),
            generator,
            window,
        ));

        Self {
            state,
            display_tx,
            generator,
            window,
            ticker,
        }
    }

    /// Issues a new token immediately and resets the countdown, independent
    /// of the tick schedule.
    pub fn regenerate(&self) -> TokenDisplay {
        let snapshot = {
            let mut state = lock(&self.state);
            state.token = self.generator.generate();
            state.remaining = self.window;
            state.display()
        };
        let _ = self.display_tx.send(snapshot.clone());
        log::info!("attendance token regenerated on request");
        snapshot
    }

    /// Current token and countdown.
    pub fn display(&self) -> TokenDisplay {
        lock(&self.state).display()
    }

    /// Change feed for the display layer; holds the latest snapshot.
    pub fn subscribe(&self) -> watch::Receiver<TokenDisplay> {
        self.display_tx.subscribe()
    }

    /// Cancels the tick task. Idempotent.
    pub fn shutdown(&self) {
        self.ticker.abort();
    }
}

impl Drop for RotationController {
    fn drop(&mut self) {
        self.ticker.abort();
    }
}

fn lock(state: &Mutex<RotationState>) -> MutexGuard<'_, RotationState> {
    state.lock().unwrap_or_else(PoisonError::into_inner)
}

async fn run_ticker(
    state: Arc<Mutex<RotationState>>,
    display_tx: watch::Sender<TokenDisplay>,
    generator: TokenGenerator,
    window: u64,
) {
    let mut tick = time::interval(Duration::from_secs(1));
    // the first interval tick completes immediately; the countdown starts
    // one second after that
    tick.tick().await;

    loop {
        tick.tick().await;
        let snapshot = {
            let mut state = lock(&state);
            if state.remaining > 1 {
                state.remaining -= 1;
            } else {
                state.token = generator.generate();
                state.remaining = window;
                log::info!("attendance token rotated after its window elapsed");
            }
            state.display()
        };
        let _ = display_tx.send(snapshot);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // Advance the paused clock one second at a time so the ticker task gets
    // to process every tick in order.
    async fn advance_seconds(n: u64) {
        for _ in 0..n {
            time::advance(Duration::from_secs(1)).await;
            tokio::task::yield_now().await;
        }
    }

    async fn settle() {
        for _ in 0..3 {
            tokio::task::yield_now().await;
        }
    }

    #[tokio::test(start_paused = true)]
    async fn rotates_exactly_on_the_window_boundary() {
        let controller = RotationController::with_window(TokenGenerator, 60);
        settle().await;
        let first = controller.display();
        assert_eq!(first.remaining_seconds, 60);

        advance_seconds(59).await;
        let at59 = controller.display();
        assert_eq!(at59.encodable_value, first.encodable_value);
        assert_eq!(at59.remaining_seconds, 1);

        advance_seconds(1).await;
        let at60 = controller.display();
        assert_ne!(at60.encodable_value, first.encodable_value);
        assert_eq!(at60.remaining_seconds, 60);
    }

    #[tokio::test(start_paused = true)]
    async fn manual_regenerate_resets_the_countdown() {
        let controller = RotationController::with_window(TokenGenerator, 60);
        settle().await;
        let first = controller.display();

        advance_seconds(30).await;
        assert_eq!(controller.display().remaining_seconds, 30);

        let regenerated = controller.regenerate();
        assert_ne!(regenerated.encodable_value, first.encodable_value);
        assert_eq!(regenerated.remaining_seconds, 60);

        // the tick schedule itself is untouched
        advance_seconds(1).await;
        assert_eq!(controller.display().remaining_seconds, 59);
        assert_eq!(
            controller.display().encodable_value,
            regenerated.encodable_value
        );
    }

    #[tokio::test(start_paused = true)]
    async fn watch_subscribers_see_every_regeneration() {
        let controller = RotationController::with_window(TokenGenerator, 2);
        settle().await;
        let mut feed = controller.subscribe();
        let first = feed.borrow().encodable_value.clone();

        advance_seconds(2).await;
        feed.changed().await.unwrap();
        assert_ne!(feed.borrow().encodable_value, first);
    }

    #[tokio::test(start_paused = true)]
    async fn shutdown_cancels_the_timer() {
        let controller = RotationController::with_window(TokenGenerator, 60);
        settle().await;
        let before = controller.display();

        controller.shutdown();
        settle().await;
        advance_seconds(120).await;

        let after = controller.display();
        assert_eq!(after.encodable_value, before.encodable_value);
        assert_eq!(after.remaining_seconds, before.remaining_seconds);
    }
}
