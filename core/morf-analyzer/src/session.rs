use std::ops::Deref;
use std::sync::{Mutex, PoisonError};

use tracing::{debug, warn};

use crate::analyzer::Analyzer;
use crate::engine::Engine;
use crate::error::AnalyzeError;

/// Identifies the process (or worker context) a session was created in.
pub type ProcessIdFn = fn() -> u32;

/// An analyzer stamped with the process that created it.
///
/// Engine handles are not fork-safe; a session observed from a different
/// process must be rebuilt instead of reused.
pub struct Session<E> {
    analyzer: Analyzer<E>,
    origin: u32,
    process_id: ProcessIdFn,
}

impl<E: Engine> Session<E> {
    pub fn new(engine: E) -> Self {
        Self::with_process_id(engine, std::process::id)
    }

    pub fn with_process_id(engine: E, process_id: ProcessIdFn) -> Self {
        Self {
            analyzer: Analyzer::new(engine),
            origin: process_id(),
            process_id,
        }
    }

    pub fn origin(&self) -> u32 {
        self.origin
    }

    /// True when the calling process is not the one that built this session.
    pub fn is_stale(&self) -> bool {
        (self.process_id)() != self.origin
    }
}

impl<E> Deref for Session<E> {
    type Target = Analyzer<E>;

    fn deref(&self) -> &Analyzer<E> {
        &self.analyzer
    }
}

/// Lazily built, process-affine slot holding one [`Session`].
///
/// The first call builds the engine through `factory`; later calls reuse it
/// until a different process id is observed. Calls are serialized by the
/// inner mutex; the engine itself is never shared across threads without it.
pub struct SessionCell<E> {
    slot: Mutex<Option<Session<E>>>,
    factory: fn() -> Result<E, AnalyzeError>,
    process_id: ProcessIdFn,
}

impl<E: Engine> SessionCell<E> {
    pub const fn new(factory: fn() -> Result<E, AnalyzeError>) -> Self {
        Self::with_process_id(factory, std::process::id)
    }

    pub const fn with_process_id(factory: fn() -> Result<E, AnalyzeError>, process_id: ProcessIdFn) -> Self {
        Self {
            slot: Mutex::new(None),
            factory,
            process_id,
        }
    }

    /// Runs `f` against the current process's session, building it if needed.
    pub fn with<R>(&self, f: impl FnOnce(&Analyzer<E>) -> R) -> Result<R, AnalyzeError> {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(session) = slot.as_ref() {
            if session.is_stale() {
                warn!(origin = session.origin(), pid = (self.process_id)(), "discarding session created in another process");
                *slot = None;
            }
        }

        let session = match slot.take() {
            Some(session) => slot.insert(session),
            None => {
                let engine = (self.factory)()?;
                let session = Session::with_process_id(engine, self.process_id);
                debug!(pid = session.origin(), "created analysis session");
                slot.insert(session)
            }
        };

        Ok(f(&session.analyzer))
    }

    /// Drops the cached session, if any. The next call builds a new one.
    pub fn reset(&self) {
        let mut slot = self.slot.lock().unwrap_or_else(PoisonError::into_inner);
        if slot.take().is_some() {
            debug!("dropped analysis session");
        }
    }

    pub fn is_initialized(&self) -> bool {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner).is_some()
    }
}
