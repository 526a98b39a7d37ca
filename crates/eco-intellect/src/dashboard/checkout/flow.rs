use std::sync::{Arc, Mutex, MutexGuard, PoisonError, Weak};
use std::time::Duration;

use tokio::runtime::Handle;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::debug;

use super::session::{CheckoutAction, CheckoutSession, CheckoutState, InterceptChoice, Transition};
use crate::config::CheckoutConfig;

/// Drives a [`CheckoutSession`] from user actions plus the simulated payment delay.
///
/// Paying schedules a single-shot timer that moves `Processing` to
/// `Intercept`. Each scheduled timer carries a generation number; closing the
/// session bumps the generation and aborts the task, so a timer that outlives
/// its session can never touch a reopened one.
#[derive(Debug)]
pub struct CheckoutFlow {
    shared: Arc<Shared>,
    processing_delay: Duration,
}

#[derive(Debug)]
struct Shared {
    state: Mutex<FlowState>,
    notify: watch::Sender<CheckoutState>,
}

#[derive(Debug, Default)]
struct FlowState {
    session: CheckoutSession,
    generation: u64,
    pending: Option<JoinHandle<()>>,
}

impl Shared {
    fn lock(&self) -> MutexGuard<'_, FlowState> {
        self.state.lock().unwrap_or_else(PoisonError::into_inner)
    }
}

impl CheckoutFlow {
    pub fn new(processing_delay: Duration) -> Self {
        let (notify, _) = watch::channel(CheckoutState::Closed);
        Self {
            shared: Arc::new(Shared {
                state: Mutex::new(FlowState::default()),
                notify,
            }),
            processing_delay,
        }
    }

    pub fn from_config(config: &CheckoutConfig) -> Self {
        Self::new(config.processing_delay)
    }

    pub fn processing_delay(&self) -> Duration {
        self.processing_delay
    }

    pub fn session(&self) -> CheckoutSession {
        self.shared.lock().session.clone()
    }

    pub fn state(&self) -> CheckoutState {
        self.shared.lock().session.state()
    }

    /// Watch channel that yields the state after every applied transition,
    /// including the timer-driven one.
    pub fn subscribe(&self) -> watch::Receiver<CheckoutState> {
        self.shared.notify.subscribe()
    }

    pub fn open(&self) -> Transition {
        self.dispatch(CheckoutAction::Open)
    }

    /// Start the simulated payment. Ignored unless the session is at `Initial`,
    /// which makes repeated clicks while processing harmless.
    pub fn pay(&self) -> Transition {
        self.dispatch(CheckoutAction::Pay)
    }

    pub fn choose(&self, choice: InterceptChoice) -> Transition {
        self.dispatch(CheckoutAction::Choose(choice))
    }

    pub fn return_to_dashboard(&self) -> Transition {
        self.dispatch(CheckoutAction::ReturnToDashboard)
    }

    /// Close the modal from any open state, discarding a pending payment timer.
    pub fn close(&self) -> Transition {
        self.dispatch(CheckoutAction::Close)
    }

    fn dispatch(&self, action: CheckoutAction) -> Transition {
        let mut state = self.shared.lock();
        let transition = state.session.apply(action);

        match transition {
            Transition::Applied { from, to } => {
                debug!(from = from.label(), to = to.label(), "checkout transition");
                match to {
                    CheckoutState::Processing => {
                        state.generation += 1;
                        let generation = state.generation;
                        state.pending = self.schedule_processing(generation);
                    }
                    CheckoutState::Closed => {
                        state.generation += 1;
                        if let Some(pending) = state.pending.take() {
                            pending.abort();
                        }
                    }
                    _ => {}
                }
                self.shared.notify.send_replace(to);
            }
            Transition::Ignored { state: current } => {
                debug!(?action, state = current.label(), "checkout action ignored");
            }
        }

        transition
    }

    fn schedule_processing(&self, generation: u64) -> Option<JoinHandle<()>> {
        let shared = Arc::downgrade(&self.shared);
        let delay = self.processing_delay;

        match Handle::try_current() {
            Ok(handle) => Some(handle.spawn(async move {
                tokio::time::sleep(delay).await;
                complete_processing(&shared, generation);
            })),
            Err(_) => {
                // Outside a runtime the delay runs on a plain thread; the
                // generation check still guards against stale completion.
                std::thread::spawn(move || {
                    std::thread::sleep(delay);
                    complete_processing(&shared, generation);
                });
                None
            }
        }
    }
}

impl Drop for CheckoutFlow {
    fn drop(&mut self) {
        if let Some(pending) = self.shared.lock().pending.take() {
            pending.abort();
        }
    }
}

fn complete_processing(shared: &Weak<Shared>, generation: u64) {
    let Some(shared) = shared.upgrade() else {
        return;
    };

    let mut state = shared.lock();
    if state.generation != generation {
        debug!(generation, "discarding stale processing timer");
        return;
    }

    state.pending = None;
    if let Transition::Applied { from, to } =
        state.session.apply(CheckoutAction::ProcessingElapsed)
    {
        debug!(from = from.label(), to = to.label(), "checkout transition");
        shared.notify.send_replace(to);
    }
}
