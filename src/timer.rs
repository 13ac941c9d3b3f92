use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::mpsc::{Receiver, Sender, TryRecvError};
use std::sync::Arc;
use std::thread::JoinHandle;
use std::time::Duration;

/// A repeating tick source with an explicit stop control.
///
/// `start` spawns a thread that sends one message per interval on an
/// internal channel; the host drains pending ticks with `try_tick` from
/// its dispatch loop, so ticks are always applied strictly sequentially
/// to the single owned game state. `stop` (or dropping the ticker) ends
/// the thread; a stopped ticker delivers nothing, which is what makes a
/// restart safe: the old handle is stopped before a new one is started,
/// so no stale tick can reach the superseded state.
pub struct Ticker {
    stop: Arc<AtomicBool>,
    receiver: Receiver<()>,
    handle: Option<JoinHandle<()>>,
}

impl Ticker {
    /// Starts a tick thread firing once per `interval`.
    #[must_use]
    pub fn start(interval: Duration) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let (sender, receiver) = std::sync::mpsc::channel();

        let thread_stop = Arc::clone(&stop);
        let handle = std::thread::spawn(move || run_tick_loop(interval, &thread_stop, &sender));

        Self {
            stop,
            receiver,
            handle: Some(handle),
        }
    }

    /// Consumes one pending tick, if any has fired since the last call.
    #[must_use]
    pub fn try_tick(&self) -> bool {
        match self.receiver.try_recv() {
            Ok(()) => true,
            Err(TryRecvError::Empty | TryRecvError::Disconnected) => false,
        }
    }

    /// Stops the tick thread and waits for it to finish.
    pub fn stop(mut self) {
        self.shutdown();
    }

    fn shutdown(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(handle) = self.handle.take() {
            let _ = handle.join();
        }
    }
}

impl Drop for Ticker {
    fn drop(&mut self) {
        self.shutdown();
    }
}

fn run_tick_loop(interval: Duration, stop: &AtomicBool, sender: &Sender<()>) {
    // Sleep in short slices so stop requests are honored promptly even
    // with long tick intervals.
    const SLICE: Duration = Duration::from_millis(10);

    let mut elapsed = Duration::ZERO;
    loop {
        if stop.load(Ordering::Relaxed) {
            return;
        }

        std::thread::sleep(SLICE.min(interval));
        elapsed += SLICE.min(interval);

        if elapsed >= interval {
            elapsed = Duration::ZERO;
            if sender.send(()).is_err() {
                return;
            }
        }
    }
}
