//! Debounced autosave scheduling.
//!
//! A scheduler subscribes to store notifications and persists snapshots
//! through a [`ProjectStorage`] backend. Each commit restarts a debounce
//! window; when the window elapses quietly the current snapshot is written
//! exactly once, so a burst of edits costs one write. Failed writes are
//! retried on a bounded backoff ladder, and a snapshot that could not be
//! persisted stays flagged dirty so a later flush still saves it.
//!
//! The debounce decision itself lives in [`DebounceState`], a plain value
//! driven by explicit instants, which keeps the timing rules testable
//! without wall-clock sleeps.

use std::sync::Arc;
use std::time::{Duration, Instant};

use chrono::Utc;
use tokio::sync::broadcast::error::RecvError;
use tokio::sync::{broadcast, mpsc, oneshot};
use tokio::task::JoinHandle;

use crate::error::{ForgeError, ForgeResult};
use crate::project::store::{ProjectStore, SnapshotChange};
use crate::storage::ProjectStorage;

/// Quiet window after the last commit before a write happens.
pub const DEFAULT_DEBOUNCE: Duration = Duration::from_millis(1000);

/// Backoff ladder applied between failed write attempts.
pub const DEFAULT_RETRY_DELAYS: [Duration; 3] = [
    Duration::from_secs(1),
    Duration::from_secs(2),
    Duration::from_secs(4),
];

const COMMAND_CAPACITY: usize = 8;

// =============================================================================
// CONFIG
// =============================================================================

/// Timing knobs for one scheduler.
#[derive(Debug, Clone)]
pub struct AutosaveConfig {
    /// Debounce window restarted by every commit.
    pub debounce: Duration,
    /// Sleep between failed attempts; one initial attempt plus one retry per
    /// entry, so an empty ladder means a single try.
    pub retry_delays: Vec<Duration>,
}

impl Default for AutosaveConfig {
    fn default() -> Self {
        Self {
            debounce: DEFAULT_DEBOUNCE,
            retry_delays: DEFAULT_RETRY_DELAYS.to_vec(),
        }
    }
}

impl AutosaveConfig {
    /// Builder: Set the debounce window.
    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }

    /// Builder: Set the retry ladder.
    pub fn with_retry_delays(mut self, delays: Vec<Duration>) -> Self {
        self.retry_delays = delays;
        self
    }
}

// =============================================================================
// DEBOUNCE STATE
// =============================================================================

/// Pure debounce bookkeeping.
///
/// `deadline` is the armed timer; `dirty` records that some commit has not
/// reached storage yet. Exhausted retries disarm the timer but leave the
/// state dirty, so an explicit flush knows there is still work.
#[derive(Debug, Default)]
struct DebounceState {
    deadline: Option<Instant>,
    dirty: bool,
}

impl DebounceState {
    /// Records a commit at `now`, restarting the window.
    fn note_change(&mut self, now: Instant, debounce: Duration) {
        self.deadline = Some(now + debounce);
        self.dirty = true;
    }

    /// The armed write deadline, if any.
    fn deadline(&self) -> Option<Instant> {
        self.deadline
    }

    /// Whether a commit is still unpersisted.
    fn is_dirty(&self) -> bool {
        self.dirty
    }

    /// Stops the timer without forgetting the unpersisted commit.
    fn disarm(&mut self) {
        self.deadline = None;
    }

    /// Marks everything persisted.
    fn clear(&mut self) {
        self.deadline = None;
        self.dirty = false;
    }
}

// =============================================================================
// SCHEDULER
// =============================================================================

enum Command {
    Flush(oneshot::Sender<ForgeResult<()>>),
    Shutdown(oneshot::Sender<ForgeResult<()>>),
}

/// Handle to a background autosave task.
///
/// Dropping the handle stops the task without a final write; call
/// [`AutosaveScheduler::shutdown`] to persist pending work first.
pub struct AutosaveScheduler {
    commands: mpsc::Sender<Command>,
    task: JoinHandle<()>,
}

impl AutosaveScheduler {
    /// Spawns a scheduler persisting `store` snapshots under `key`.
    pub fn spawn(
        store: Arc<ProjectStore>,
        storage: Arc<dyn ProjectStorage>,
        key: impl Into<String>,
        config: AutosaveConfig,
    ) -> Self {
        let (commands, command_rx) = mpsc::channel(COMMAND_CAPACITY);
        let worker = AutosaveWorker {
            changes: store.subscribe(),
            commands: command_rx,
            store,
            storage,
            key: key.into(),
            config,
            pending: DebounceState::default(),
        };
        let task = tokio::spawn(worker.run());
        Self { commands, task }
    }

    /// Persists any unpersisted commit now, bypassing the debounce timer.
    ///
    /// Returns once the write (with retries) finished; when nothing is
    /// dirty the call succeeds without touching storage.
    pub async fn flush(&self) -> ForgeResult<()> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Command::Flush(reply))
            .await
            .map_err(|_| ForgeError::SchedulerStopped)?;
        response.await.map_err(|_| ForgeError::SchedulerStopped)?
    }

    /// Flushes pending work and stops the task.
    pub async fn shutdown(self) -> ForgeResult<()> {
        let (reply, response) = oneshot::channel();
        self.commands
            .send(Command::Shutdown(reply))
            .await
            .map_err(|_| ForgeError::SchedulerStopped)?;
        let result = response.await.map_err(|_| ForgeError::SchedulerStopped)?;
        let _ = self.task.await;
        result
    }
}

// =============================================================================
// WORKER
// =============================================================================

struct AutosaveWorker {
    changes: broadcast::Receiver<SnapshotChange>,
    commands: mpsc::Receiver<Command>,
    store: Arc<ProjectStore>,
    storage: Arc<dyn ProjectStorage>,
    key: String,
    config: AutosaveConfig,
    pending: DebounceState,
}

impl AutosaveWorker {
    async fn run(mut self) {
        tracing::debug!(key = %self.key, "autosave worker started");
        loop {
            let deadline = self.pending.deadline();
            tokio::select! {
                // Commits are drained ahead of commands so a flush issued
                // right after a mutation always sees it.
                biased;

                change = self.changes.recv() => match change {
                    Ok(_) => self.pending.note_change(Instant::now(), self.config.debounce),
                    Err(RecvError::Lagged(missed)) => {
                        tracing::warn!(key = %self.key, missed, "autosave lagged behind commits");
                        self.pending.note_change(Instant::now(), self.config.debounce);
                    }
                    Err(RecvError::Closed) => break,
                },

                command = self.commands.recv() => match command {
                    Some(Command::Flush(reply)) => {
                        let result = self.flush_dirty().await;
                        let _ = reply.send(result);
                    }
                    Some(Command::Shutdown(reply)) => {
                        let result = self.flush_dirty().await;
                        let _ = reply.send(result);
                        break;
                    }
                    None => break,
                },

                () = sleep_deadline(deadline), if deadline.is_some() => {
                    match self.persist_with_retry().await {
                        Ok(()) => self.pending.clear(),
                        Err(error) => {
                            tracing::error!(
                                key = %self.key,
                                error = %error,
                                "autosave gave up; snapshot kept for the next flush"
                            );
                            self.pending.disarm();
                        }
                    }
                }
            }
        }
        tracing::debug!(key = %self.key, "autosave worker stopped");
    }

    /// Persists now when something is dirty, otherwise reports success.
    async fn flush_dirty(&mut self) -> ForgeResult<()> {
        if !self.pending.is_dirty() {
            return Ok(());
        }
        let result = self.persist_with_retry().await;
        if result.is_ok() {
            self.pending.clear();
        }
        result
    }

    /// One write attempt per retry ladder step until one sticks.
    async fn persist_with_retry(&self) -> ForgeResult<()> {
        let mut last_error = match self.persist_once().await {
            Ok(()) => return Ok(()),
            Err(error) => error,
        };
        for (attempt, delay) in self.config.retry_delays.iter().enumerate() {
            tracing::warn!(
                key = %self.key,
                attempt = attempt + 1,
                error = %last_error,
                delay_ms = delay.as_millis() as u64,
                "autosave write failed, retrying"
            );
            tokio::time::sleep(*delay).await;
            match self.persist_once().await {
                Ok(()) => return Ok(()),
                Err(error) => last_error = error,
            }
        }
        Err(ForgeError::persistence_exhausted(
            self.config.retry_delays.len() + 1,
            last_error,
        ))
    }

    /// Writes the current snapshot with `updatedAt` refreshed to now.
    ///
    /// The refresh only touches the persisted copy; the in-memory snapshot
    /// is owned by the mutation engine and never replaced from here.
    async fn persist_once(&self) -> ForgeResult<()> {
        let snapshot = self.store.get();
        let mut document = (*snapshot).clone();
        document.updated_at = document.updated_at.max(Utc::now());
        self.storage.save(&self.key, &document).await?;
        tracing::debug!(
            key = %self.key,
            acts = document.acts.len(),
            scenes = document.total_scenes(),
            "project autosaved"
        );
        Ok(())
    }
}

async fn sleep_deadline(deadline: Option<Instant>) {
    match deadline {
        Some(at) => tokio::time::sleep_until(at.into()).await,
        None => std::future::pending().await,
    }
}

// =============================================================================
// TESTS
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ident;
    use crate::project::engine::ProjectEngine;
    use crate::project::model::Project;
    use crate::storage::MemoryStorage;
    use std::sync::atomic::{AtomicUsize, Ordering};

    /// Storage that fails a configured number of saves before succeeding,
    /// counting every attempt.
    struct FlakyStorage {
        inner: MemoryStorage,
        fail_remaining: AtomicUsize,
        attempts: AtomicUsize,
        saves: AtomicUsize,
    }

    impl FlakyStorage {
        fn new(fail_first: usize) -> Self {
            Self {
                inner: MemoryStorage::new(),
                fail_remaining: AtomicUsize::new(fail_first),
                attempts: AtomicUsize::new(0),
                saves: AtomicUsize::new(0),
            }
        }

        fn heal(&self) {
            self.fail_remaining.store(0, Ordering::SeqCst);
        }

        fn attempts(&self) -> usize {
            self.attempts.load(Ordering::SeqCst)
        }

        fn saves(&self) -> usize {
            self.saves.load(Ordering::SeqCst)
        }
    }

    #[async_trait::async_trait]
    impl ProjectStorage for FlakyStorage {
        async fn save(&self, key: &str, project: &Project) -> ForgeResult<()> {
            self.attempts.fetch_add(1, Ordering::SeqCst);
            let remaining = self.fail_remaining.load(Ordering::SeqCst);
            if remaining > 0 {
                self.fail_remaining.store(remaining - 1, Ordering::SeqCst);
                return Err(ForgeError::storage("injected save failure"));
            }
            self.saves.fetch_add(1, Ordering::SeqCst);
            self.inner.save(key, project).await
        }

        async fn load(&self, key: &str) -> ForgeResult<Option<Project>> {
            self.inner.load(key).await
        }
    }

    fn fixture(
        debounce: Duration,
        retry_delays: Vec<Duration>,
        fail_first: usize,
    ) -> (ProjectEngine, Arc<FlakyStorage>, AutosaveScheduler) {
        let store = Arc::new(ProjectStore::new(Project::new(ident::generate())));
        let storage = Arc::new(FlakyStorage::new(fail_first));
        let scheduler = AutosaveScheduler::spawn(
            store.clone(),
            storage.clone(),
            "test-project",
            AutosaveConfig::default()
                .with_debounce(debounce)
                .with_retry_delays(retry_delays),
        );
        (ProjectEngine::new(store), storage, scheduler)
    }

    // -------------------------------------------------------------------------
    // Pure debounce rules
    // -------------------------------------------------------------------------

    #[test]
    fn test_debounce_restarts_on_each_change() {
        let mut state = DebounceState::default();
        assert!(!state.is_dirty());
        assert!(state.deadline().is_none());

        let t0 = Instant::now();
        let window = Duration::from_millis(1000);

        state.note_change(t0, window);
        assert_eq!(state.deadline(), Some(t0 + window));

        // A later change pushes the deadline out, it never shortens it.
        state.note_change(t0 + Duration::from_millis(400), window);
        assert_eq!(state.deadline(), Some(t0 + Duration::from_millis(1400)));
        assert!(state.is_dirty());
    }

    #[test]
    fn test_debounce_disarm_keeps_dirty() {
        let mut state = DebounceState::default();
        state.note_change(Instant::now(), Duration::from_millis(100));

        state.disarm();
        assert!(state.deadline().is_none());
        assert!(state.is_dirty());

        state.clear();
        assert!(!state.is_dirty());
        assert!(state.deadline().is_none());
    }

    // -------------------------------------------------------------------------
    // Scheduler behavior
    // -------------------------------------------------------------------------

    #[tokio::test]
    async fn test_burst_collapses_to_one_write() {
        let (engine, storage, scheduler) = fixture(Duration::from_millis(50), vec![], 0);

        for _ in 0..5 {
            engine.add_act(None).unwrap();
        }
        tokio::time::sleep(Duration::from_millis(400)).await;

        assert_eq!(storage.saves(), 1);
        let saved = storage.load("test-project").await.unwrap().unwrap();
        assert_eq!(saved.acts.len(), 6);

        scheduler.shutdown().await.unwrap();
        // Nothing was dirty anymore, so shutdown wrote nothing extra.
        assert_eq!(storage.saves(), 1);
    }

    #[tokio::test]
    async fn test_two_separated_bursts_write_twice() {
        let (engine, storage, scheduler) = fixture(Duration::from_millis(40), vec![], 0);

        engine.add_act(None).unwrap();
        tokio::time::sleep(Duration::from_millis(250)).await;
        engine.add_act(None).unwrap();
        tokio::time::sleep(Duration::from_millis(250)).await;

        assert_eq!(storage.saves(), 2);
        scheduler.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_flush_bypasses_debounce() {
        let (engine, storage, scheduler) = fixture(Duration::from_secs(10), vec![], 0);

        engine.add_act(None).unwrap();
        scheduler.flush().await.unwrap();

        assert_eq!(storage.saves(), 1);
        let saved = storage.load("test-project").await.unwrap().unwrap();
        assert_eq!(saved.acts.len(), 2);
        scheduler.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_flush_without_changes_writes_nothing() {
        let (_engine, storage, scheduler) = fixture(Duration::from_secs(10), vec![], 0);

        scheduler.flush().await.unwrap();

        assert_eq!(storage.attempts(), 0);
        scheduler.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_retry_ladder_recovers() {
        let delays = vec![Duration::from_millis(10), Duration::from_millis(10)];
        let (engine, storage, scheduler) = fixture(Duration::from_secs(10), delays, 2);

        engine.add_act(None).unwrap();
        scheduler.flush().await.unwrap();

        // Two injected failures, then the third attempt stuck.
        assert_eq!(storage.attempts(), 3);
        assert_eq!(storage.saves(), 1);
        scheduler.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_exhausted_retries_surface_and_later_flush_saves() {
        let delays = vec![Duration::from_millis(10)];
        let (engine, storage, scheduler) = fixture(Duration::from_secs(10), delays, 10);

        engine.add_act(None).unwrap();
        let error = scheduler.flush().await.unwrap_err();
        match error {
            ForgeError::PersistenceExhausted { attempts, .. } => assert_eq!(attempts, 2),
            other => panic!("unexpected error: {other}"),
        }

        // The snapshot survived the failed save untouched.
        assert_eq!(engine.snapshot().acts.len(), 2);
        assert_eq!(storage.saves(), 0);

        storage.heal();
        scheduler.flush().await.unwrap();
        assert_eq!(storage.saves(), 1);
        let saved = storage.load("test-project").await.unwrap().unwrap();
        assert_eq!(saved.acts.len(), 2);
        scheduler.shutdown().await.unwrap();
    }

    #[tokio::test]
    async fn test_shutdown_persists_pending_edits() {
        let (engine, storage, scheduler) = fixture(Duration::from_secs(10), vec![], 0);

        engine.add_act(None).unwrap();
        scheduler.shutdown().await.unwrap();

        assert_eq!(storage.saves(), 1);
        let saved = storage.load("test-project").await.unwrap().unwrap();
        assert_eq!(saved.acts.len(), 2);
    }

    #[tokio::test]
    async fn test_persisted_timestamp_is_refreshed() {
        let (engine, storage, scheduler) = fixture(Duration::from_secs(10), vec![], 0);

        engine.add_act(None).unwrap();
        let committed = engine.snapshot().updated_at;
        scheduler.flush().await.unwrap();

        let saved = storage.load("test-project").await.unwrap().unwrap();
        assert!(saved.updated_at >= committed);
        scheduler.shutdown().await.unwrap();
    }
}
