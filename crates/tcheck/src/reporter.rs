//! Host test context abstraction.

use std::panic::{self, AssertUnwindSafe};
use std::sync::Mutex;

use tracing::debug;

/// Capability through which checks report failures.
///
/// A failing check calls [`Reporter::fatal`], which never returns: the rest of
/// the calling test does not run.
pub trait Reporter {
    /// Records a failure message.
    fn fail(&self, message: &str);

    /// Stops the current test unit.
    fn terminate(&self) -> !;

    /// Records `message` and stops the current test unit.
    fn fatal(&self, message: &str) -> ! {
        debug!(target: "tcheck", %message, "check failed");
        self.fail(message);
        self.terminate()
    }
}

impl<R: Reporter + ?Sized> Reporter for &R {
    fn fail(&self, message: &str) {
        (**self).fail(message)
    }

    fn terminate(&self) -> ! {
        (**self).terminate()
    }

    fn fatal(&self, message: &str) -> ! {
        (**self).fatal(message)
    }
}

/// Reporter for the standard test harness: a failure panics with its message.
#[derive(Debug, Default, Clone, Copy)]
pub struct PanicReporter;

impl Reporter for PanicReporter {
    fn fail(&self, message: &str) {
        eprintln!("{message}");
    }

    fn terminate(&self) -> ! {
        panic!("check failed");
    }

    fn fatal(&self, message: &str) -> ! {
        debug!(target: "tcheck", %message, "check failed");
        panic!("{message}");
    }
}

// Unwind payload used by `Recorder::terminate`.
struct Terminated;

/// Reporter that records failures instead of failing the surrounding test.
///
/// Used with [`run_isolated`] to observe whether a check fails.
#[derive(Debug, Default)]
pub struct Recorder {
    messages: Mutex<Vec<String>>,
}

impl Recorder {
    /// Creates an empty recorder.
    pub fn new() -> Self {
        Self::default()
    }

    /// True once any failure has been recorded.
    pub fn failed(&self) -> bool {
        !self.messages().is_empty()
    }

    /// Recorded failure messages in order.
    pub fn messages(&self) -> Vec<String> {
        match self.messages.lock() {
            Ok(messages) => messages.clone(),
            Err(poisoned) => poisoned.into_inner().clone(),
        }
    }

    /// The most recent failure message.
    pub fn last_message(&self) -> Option<String> {
        self.messages().pop()
    }
}

impl Reporter for Recorder {
    fn fail(&self, message: &str) {
        match self.messages.lock() {
            Ok(mut messages) => messages.push(message.to_owned()),
            Err(poisoned) => poisoned.into_inner().push(message.to_owned()),
        }
    }

    fn terminate(&self) -> ! {
        // resume_unwind skips the panic hook, keeping isolated runs quiet.
        panic::resume_unwind(Box::new(Terminated))
    }
}

/// Runs `f` against a fresh [`Recorder`] and returns it once `f` finishes or
/// terminates.
///
/// Panics raised by `f` for any other reason are propagated.
pub fn run_isolated<F>(f: F) -> Recorder
where
    F: FnOnce(&Recorder),
{
    let recorder = Recorder::new();
    if let Err(payload) = panic::catch_unwind(AssertUnwindSafe(|| f(&recorder))) {
        if !payload.is::<Terminated>() {
            panic::resume_unwind(payload);
        }
    }
    recorder
}

/// Fails `outer` unless the isolated run of `f` reports a failure.
pub fn ensure_failed<R, F>(outer: &R, f: F) -> Recorder
where
    R: Reporter + ?Sized,
    F: FnOnce(&Recorder),
{
    let recorder = run_isolated(f);
    if !recorder.failed() {
        outer.fatal("expected the check to fail, but it passed");
    }
    recorder
}

/// Fails `outer` if the isolated run of `f` reports a failure.
pub fn ensure_not_failed<R, F>(outer: &R, f: F) -> Recorder
where
    R: Reporter + ?Sized,
    F: FnOnce(&Recorder),
{
    let recorder = run_isolated(f);
    if recorder.failed() {
        outer.fatal(&format!(
            "expected the check to pass, but it failed: {}",
            recorder.messages().join("; ")
        ));
    }
    recorder
}
