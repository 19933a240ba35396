use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::{watch, Mutex};
use tokio_util::sync::CancellationToken;
use tracing::trace;
use crate::config::{ForkRules, OpenQuestConfig};
use crate::models::{ForkValidationResult, ProblemText};
use super::validator::validate_fork_with;

/// Debounced re-validation for keystroke-driven forms.
///
/// Each `update` cancels the evaluation still waiting from the previous one,
/// so only the last edit inside a debounce window is scored. Results are
/// published on a watch channel.
///
/// Every request bumps a generation counter. A result is published only if
/// its generation is still the newest when the channel lock is held, so a
/// late debounced run never replaces a submit-time result.
pub struct LiveValidator {
    rules: Arc<ForkRules>,
    debounce: Duration,
    pending: Mutex<Option<CancellationToken>>,
    generation: Arc<AtomicU64>,
    tx: Arc<watch::Sender<Option<ForkValidationResult>>>,
    root: CancellationToken,
}

fn publish_if_current(
    tx: &watch::Sender<Option<ForkValidationResult>>,
    generation: &AtomicU64,
    ours: u64,
    result: ForkValidationResult,
) -> bool {
    tx.send_if_modified(|slot| {
        if generation.load(Ordering::SeqCst) != ours {
            return false;
        }
        *slot = Some(result);
        true
    })
}

impl LiveValidator {
    pub fn new(rules: ForkRules, debounce: Duration) -> Self {
        let (tx, _rx) = watch::channel(None);
        Self {
            rules: Arc::new(rules),
            debounce,
            pending: Mutex::new(None),
            generation: Arc::new(AtomicU64::new(0)),
            tx: Arc::new(tx),
            root: CancellationToken::new(),
        }
    }

    /// Rules and debounce delay from a loaded configuration.
    pub fn from_config(config: &OpenQuestConfig) -> Self {
        Self::new(config.fork_rules(), config.debounce())
    }

    pub fn subscribe(&self) -> watch::Receiver<Option<ForkValidationResult>> {
        self.tx.subscribe()
    }

    /// Most recently published result.
    pub fn latest(&self) -> Option<ForkValidationResult> {
        self.tx.borrow().clone()
    }

    pub fn rules(&self) -> &ForkRules {
        &self.rules
    }

    /// Schedule a validation of `candidate` after the debounce delay.
    pub async fn update(&self, original: ProblemText, candidate: ProblemText) {
        let token = self.root.child_token();
        let ours = {
            let mut pending = self.pending.lock().await;
            if let Some(previous) = pending.replace(token.clone()) {
                previous.cancel();
            }
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };

        let rules = self.rules.clone();
        let tx = self.tx.clone();
        let generation = self.generation.clone();
        let debounce = self.debounce;

        tokio::spawn(async move {
            tokio::select! {
                biased;
                _ = token.cancelled() => {
                    trace!("Live validation superseded");
                }
                _ = tokio::time::sleep(debounce) => {
                    let result = validate_fork_with(&original, &candidate, &rules);
                    if !publish_if_current(&tx, &generation, ours, result) {
                        trace!("Live validation result discarded as stale");
                    }
                }
            }
        });
    }

    /// Drop anything pending and validate immediately. Used as the submit gate.
    pub async fn validate_now(
        &self,
        original: &ProblemText,
        candidate: &ProblemText,
    ) -> ForkValidationResult {
        let ours = {
            let mut pending = self.pending.lock().await;
            if let Some(previous) = pending.take() {
                previous.cancel();
            }
            self.generation.fetch_add(1, Ordering::SeqCst) + 1
        };
        let result = validate_fork_with(original, candidate, &self.rules);
        publish_if_current(&self.tx, &self.generation, ours, result.clone());
        result
    }
}

impl Drop for LiveValidator {
    fn drop(&mut self) {
        self.root.cancel();
    }
}
