use std::sync::mpsc::{self, RecvTimeoutError, Sender};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use tracing::{debug, warn};

use crate::engine::protocol::EngineCommand;

/// Fixed-interval clock for one game session.
///
/// Sends `EngineCommand::Tick` into the engine queue until dropped. Dropping
/// joins the thread, so no tick is sent once `drop` returns.
pub struct Ticker {
    session_id: u64,
    stop: Option<Sender<()>>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    pub fn spawn(interval: Duration, session_id: u64, tx: Sender<EngineCommand>) -> Self {
        let (stop_tx, stop_rx) = mpsc::channel::<()>();

        let handle = thread::Builder::new()
            .name(format!("ticker-{session_id}"))
            .spawn(move || loop {
                match stop_rx.recv_timeout(interval) {
                    Err(RecvTimeoutError::Timeout) => {
                        if tx.send(EngineCommand::Tick { session_id }).is_err() {
                            break;
                        }
                    }
                    // Explicit stop or the owner went away
                    Ok(()) | Err(RecvTimeoutError::Disconnected) => break,
                }
            });

        let handle = match handle {
            Ok(handle) => Some(handle),
            Err(e) => {
                warn!(session_id, error = %e, "could not start ticker thread");
                None
            }
        };

        debug!(session_id, ?interval, "ticker started");

        Self {
            session_id,
            stop: Some(stop_tx),
            handle,
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        drop(self.stop.take());
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
        debug!(session_id = self.session_id, "ticker stopped");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Instant;

    #[test]
    fn ticks_carry_the_session_id() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::spawn(Duration::from_millis(5), 42, tx);

        match rx.recv_timeout(Duration::from_secs(2)) {
            Ok(EngineCommand::Tick { session_id }) => assert_eq!(session_id, 42),
            _ => panic!("expected a tick"),
        }
        drop(ticker);
    }

    #[test]
    fn no_ticks_after_drop() {
        let (tx, rx) = mpsc::channel();
        let ticker = Ticker::spawn(Duration::from_millis(2), 1, tx);
        let _ = rx.recv_timeout(Duration::from_secs(2));

        drop(ticker);
        while rx.try_recv().is_ok() {}

        thread::sleep(Duration::from_millis(30));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn drop_does_not_wait_for_the_interval() {
        let (tx, _rx) = mpsc::channel();
        let ticker = Ticker::spawn(Duration::from_secs(60), 1, tx);

        let started = Instant::now();
        drop(ticker);
        assert!(started.elapsed() < Duration::from_secs(5));
    }
}
