//! Lifecycle of download runs started from a front end.

use crate::download::RunReport;
use crate::downloader::{Downloader, StartIndex};
use crate::error::{Error, Result};
use crate::listing::FileRecord;
use crate::progress::{ProgressCallback, ProgressEvent};

use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tokio_util::sync::CancellationToken;
use tracing::{error, info};

/// Whether a run is in progress.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Idle,
    Running,
}

struct ActiveRun {
    generation: u64,
    cancel: CancellationToken,
    on_progress: ProgressCallback,
    handle: Option<JoinHandle<Result<RunReport>>>,
}

/// Runs at most one download at a time in the background.
///
/// Each run gets a fresh cancellation token, so a cancel request only ever
/// affects the run it was made for.
///
/// ```rust,no_run
/// use trawl::downloader::{DownloaderBuilder, StartIndex};
/// use trawl::progress::progress_callback;
/// use trawl::session::SessionController;
///
/// # async fn example(records: Vec<trawl::listing::FileRecord>) -> trawl::Result<()> {
/// let session = SessionController::new();
/// let start = StartIndex::parse("1", records.len());
/// session.start(
///     DownloaderBuilder::new().directory("roms".into()).build(),
///     records,
///     start,
///     progress_callback(|event| println!("{event}")),
/// )?;
///
/// // Later, from a button handler:
/// session.request_cancel();
///
/// if let Some(outcome) = session.wait().await {
///     let report = outcome?;
///     println!("{} files downloaded", report.downloaded_count());
/// }
/// # Ok(())
/// # }
/// ```
pub struct SessionController {
    slot: Mutex<Option<ActiveRun>>,
    state: Arc<watch::Sender<SessionState>>,
}

impl Default for SessionController {
    fn default() -> Self {
        let (state, _) = watch::channel(SessionState::Idle);
        Self {
            slot: Mutex::new(None),
            state: Arc::new(state),
        }
    }
}

impl SessionController {
    pub fn new() -> Self {
        Self::default()
    }

    fn slot(&self) -> MutexGuard<'_, Option<ActiveRun>> {
        self.slot.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Current lifecycle state.
    pub fn state(&self) -> SessionState {
        *self.state.borrow()
    }

    pub fn is_active(&self) -> bool {
        self.state() == SessionState::Running
    }

    /// Watch the lifecycle state, e.g. to re-enable inputs once a run ends.
    pub fn subscribe(&self) -> watch::Receiver<SessionState> {
        self.state.subscribe()
    }

    /// Launch `downloader` over `records` on a background task.
    ///
    /// Emits [`ProgressEvent::Starting`] and returns without waiting for the
    /// run. Must be called from within a Tokio runtime. The callback is never
    /// invoked while the controller is locked, so it may call back into it.
    ///
    /// # Errors
    ///
    /// Returns [`Error::SessionActive`] if the previous run has not ended.
    pub fn start(
        &self,
        downloader: Downloader,
        records: Vec<FileRecord>,
        start: StartIndex,
        on_progress: ProgressCallback,
    ) -> Result<()> {
        let cancel = CancellationToken::new();
        let generation = {
            let mut slot = self.slot();
            if self.is_active() {
                return Err(Error::SessionActive);
            }
            let generation = slot.as_ref().map_or(1, |run| run.generation + 1);
            self.state.send_replace(SessionState::Running);
            *slot = Some(ActiveRun {
                generation,
                cancel: cancel.clone(),
                on_progress: Arc::clone(&on_progress),
                handle: None,
            });
            generation
        };

        // Emitted without the slot held; the callback may re-enter.
        on_progress(&ProgressEvent::Starting);
        info!(
            "Starting download of {} files from file {}",
            records.len(),
            start.get()
        );

        let state = Arc::clone(&self.state);
        let handle = tokio::spawn(async move {
            let result = downloader
                .run(&records, start, &cancel, &on_progress)
                .await;
            if let Err(ref e) = result {
                error!("Download run failed: {e}");
            }
            state.send_replace(SessionState::Idle);
            result
        });

        // A fast run may already have ended and been replaced by a newer one.
        if let Some(run) = self
            .slot()
            .as_mut()
            .filter(|run| run.generation == generation)
        {
            run.handle = Some(handle);
        }
        Ok(())
    }

    /// Ask the active run to stop before its next file.
    ///
    /// Emits [`ProgressEvent::Canceling`] on the first request. Returns
    /// whether a run was active.
    pub fn request_cancel(&self) -> bool {
        let (cancel, on_progress) = match self.slot().as_ref() {
            Some(run) if self.is_active() => (run.cancel.clone(), Arc::clone(&run.on_progress)),
            _ => return false,
        };

        // The callback may call back into the controller, so the slot is
        // released before it runs.
        if !cancel.is_cancelled() {
            info!("Canceling download...");
            on_progress(&ProgressEvent::Canceling);
            cancel.cancel();
        }
        true
    }

    /// Wait for the last started run and return its outcome.
    ///
    /// Returns `None` if no run was started or its outcome was already taken.
    pub async fn wait(&self) -> Option<Result<RunReport>> {
        let handle = {
            let mut slot = self.slot();
            slot.as_mut()?.handle.take()?
        };

        let outcome = match handle.await {
            Ok(result) => result,
            Err(e) => Err(Error::Internal(format!("download task failed: {e}"))),
        };
        self.state.send_replace(SessionState::Idle);
        Some(outcome)
    }
}
