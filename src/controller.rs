use crate::client::GenerationClient;
use crate::config::Config;
use crate::debounce::Debouncer;
use crate::error::Result;
use crate::state::Session;
use crate::store::{LocalStore, load_results, save_results};
use crate::types::PredictionRecord;
use chrono::Utc;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::task::JoinHandle;
use uuid::Uuid;

/// Owns the session state and decides when a prompt goes to the backend.
///
/// Cloning is cheap and every clone drives the same session.
#[derive(Clone)]
pub struct Controller {
    session: Arc<Mutex<Session>>,
    client: GenerationClient,
    store: Arc<dyn LocalStore>,
    storage_key: String,
    debouncer: Debouncer,
    debug: bool,
}

impl Controller {
    /// Builds a controller for a new session, restoring results from `store`.
    pub fn load(
        config: &Config,
        client: GenerationClient,
        store: Arc<dyn LocalStore>,
    ) -> Result<Self> {
        let results = load_results(store.as_ref(), &config.storage_key)?;
        log::info!(
            "Restored {} result(s) from slot '{}'",
            results.len(),
            config.storage_key
        );

        Ok(Self {
            session: Arc::new(Mutex::new(Session {
                results,
                ..Session::default()
            })),
            client,
            store,
            storage_key: config.storage_key.clone(),
            debouncer: Debouncer::new(config.debounce()),
            debug: config.debug,
        })
    }

    fn lock(&self) -> MutexGuard<'_, Session> {
        self.session.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Replaces the input text and restarts the debounce timer.
    pub fn on_text_changed(&self, text: impl Into<String>) {
        self.on_input(text, None);
    }

    /// Like `on_text_changed`, but drops updates whose `seq` is not newer
    /// than the last applied one. Returns whether the text was applied.
    pub fn on_input(&self, text: impl Into<String>, seq: Option<u64>) -> bool {
        {
            let mut session = self.lock();
            if let Some(seq) = seq {
                if seq <= session.last_seq {
                    log::debug!("Dropping stale input #{seq} (last #{})", session.last_seq);
                    return false;
                }
                session.last_seq = seq;
            }
            session.input_text = text.into();
        }

        let this = self.clone();
        self.debouncer.call(move || {
            this.try_generate();
        });
        true
    }

    /// Issues a request for the current text unless it is empty or already
    /// submitted. Returns the handle of the spawned request task.
    pub fn try_generate(&self) -> Option<JoinHandle<()>> {
        let text = {
            let mut session = self.lock();
            if session.input_text.is_empty() || session.input_text == session.last_submitted {
                return None;
            }
            session.last_submitted = session.input_text.clone();
            session.input_text.clone()
        };

        let request_id = Uuid::new_v4();
        log::info!("Requesting image for {} char prompt", text.chars().count());
        if self.debug {
            log::debug!(
                "[{}] request {request_id} GET {} text={:?}",
                Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                self.client.endpoint(),
                text
            );
        }

        let this = self.clone();
        Some(tokio::spawn(async move {
            match this.client.generate(&text).await {
                Ok(prediction) => {
                    if this.debug {
                        log::debug!(
                            "[{}] request {request_id} resolved with status {:?}",
                            Utc::now().to_rfc3339_opts(chrono::SecondsFormat::Millis, true),
                            prediction.status
                        );
                    }
                    this.accept(prediction);
                }
                Err(e) => log::warn!("Dropping request {request_id}: {e}"),
            }
        }))
    }

    /// Merges a prediction into the session. Only succeeded predictions are
    /// kept; they go to the front of the list and the whole list is persisted.
    pub fn accept(&self, prediction: PredictionRecord) -> bool {
        if !prediction.is_succeeded() {
            log::info!("Ignoring prediction with status {:?}", prediction.status);
            return false;
        }

        let mut session = self.lock();
        session.results.insert(0, prediction);
        // persisted under the lock so snapshots reach the store in order
        if let Err(e) = save_results(self.store.as_ref(), &self.storage_key, &session.results) {
            log::error!("Failed to persist results to '{}': {e}", self.storage_key);
        }
        log::info!("Stored result #{}", session.results.len());
        true
    }

    pub fn input_text(&self) -> String {
        self.lock().input_text.clone()
    }

    pub fn last_submitted(&self) -> String {
        self.lock().last_submitted.clone()
    }

    pub fn results(&self) -> Vec<PredictionRecord> {
        self.lock().results.clone()
    }

    pub fn snapshot(&self) -> Session {
        self.lock().clone()
    }

    /// Drops any pending debounce timer. Requests already in flight finish on
    /// their own.
    pub fn shutdown(&self) {
        self.debouncer.cancel();
    }
}
