//! Process-wide sentiment engine
//!
//! The engine is constructed at most once per process. Concurrent first
//! callers block on the same initialization; afterwards the engine is
//! shared read-only.

use crate::config::SentimentConfig;
use crate::engine::SentimentEngine;
use moodline_core::{ChatTurn, ConversationReport, SentimentResult};
use std::sync::OnceLock;
use tracing::debug;

static ENGINE: SharedEngine = SharedEngine::new();

/// Write-once slot holding an engine
#[derive(Debug, Default)]
pub struct SharedEngine {
    cell: OnceLock<SentimentEngine>,
}

impl SharedEngine {
    pub const fn new() -> Self {
        Self {
            cell: OnceLock::new(),
        }
    }

    /// Return the engine, running `build` if the slot is still empty.
    ///
    /// When several threads race, exactly one runs `build` and the rest
    /// block until it finishes.
    pub fn get_or_init(&self, build: impl FnOnce() -> SentimentEngine) -> &SentimentEngine {
        let mut constructed = false;
        let engine = self.cell.get_or_init(|| {
            constructed = true;
            build()
        });

        if !constructed {
            debug!("Sentiment engine already initialized, reusing it");
        }
        engine
    }

    /// The engine, if it has been built
    pub fn get(&self) -> Option<&SentimentEngine> {
        self.cell.get()
    }
}

/// Initialize the shared engine from configuration.
///
/// Only the first call constructs the engine; later calls return the
/// existing one and ignore `config`.
pub fn init_global(config: &SentimentConfig) -> &'static SentimentEngine {
    ENGINE.get_or_init(|| SentimentEngine::from_config(config))
}

/// The shared engine, initialized with default configuration on first use
pub fn global() -> &'static SentimentEngine {
    ENGINE.get_or_init(|| SentimentEngine::from_config(&SentimentConfig::default()))
}

/// Score a single text with the shared engine
pub fn analyze_text(text: &str) -> SentimentResult {
    global().analyze(text)
}

/// Build a conversation report with the shared engine
pub fn conversation_sentiment(turns: &[ChatTurn]) -> ConversationReport {
    global().conversation_sentiment(turns)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::keyword::KeywordPolarity;
    use moodline_core::{label_for, SentimentLabel, Trend};
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Barrier};

    const THREADS: usize = 8;

    #[test]
    fn test_concurrent_first_callers_build_once() {
        let slot = SharedEngine::new();
        let builds = AtomicUsize::new(0);
        let barrier = Barrier::new(THREADS);

        let engines: Vec<&SentimentEngine> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|_| {
                    let (slot, builds, barrier) = (&slot, &builds, &barrier);
                    scope.spawn(move || {
                        barrier.wait();
                        slot.get_or_init(|| {
                            builds.fetch_add(1, Ordering::SeqCst);
                            std::thread::sleep(std::time::Duration::from_millis(20));
                            SentimentEngine::with_model(Arc::new(KeywordPolarity::new()))
                        })
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(builds.load(Ordering::SeqCst), 1);
        let first = engines[0];
        assert!(engines.iter().all(|engine| std::ptr::eq(*engine, first)));
        assert!(std::ptr::eq(slot.get().unwrap(), first));
    }

    #[test]
    fn test_empty_slot() {
        assert!(SharedEngine::new().get().is_none());
    }

    #[test]
    fn test_global_shared_across_threads() {
        let barrier = Barrier::new(THREADS);

        let addresses: Vec<usize> = std::thread::scope(|scope| {
            let handles: Vec<_> = (0..THREADS)
                .map(|i| {
                    let barrier = &barrier;
                    scope.spawn(move || {
                        barrier.wait();
                        let engine = if i % 2 == 0 {
                            global()
                        } else {
                            init_global(&SentimentConfig::default())
                        };
                        engine as *const SentimentEngine as usize
                    })
                })
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert!(addresses.iter().all(|addr| *addr == addresses[0]));
        assert_eq!(addresses[0], global() as *const SentimentEngine as usize);
    }

    #[test]
    fn test_global_is_shared() {
        assert!(std::ptr::eq(global(), global()));
        assert!(std::ptr::eq(global(), init_global(&SentimentConfig::default())));
    }

    #[test]
    fn test_shared_engine_contract() {
        assert_eq!(analyze_text(""), SentimentResult::neutral());

        let result = analyze_text("what a great day");
        assert_eq!(result.label(), label_for(result.compound()));

        let report = conversation_sentiment(&[]);
        assert_eq!(report.overall().label(), SentimentLabel::Neutral);
        assert_eq!(report.trend(), Trend::Stable);
    }
}
