//! View state for the single weather screen.
//!
//! `Session` owns the `Idle → Loading → Success | Failure` machine and
//! the background task driving it. Fetch+decode runs off the rendering
//! task; the outcome comes back over a channel and is applied only by
//! [`Session::next_transition`], so all state mutation stays on the
//! caller's task and no locking is needed.

use std::sync::Arc;

use tokio::sync::mpsc;
use tokio::task::JoinHandle;

use crate::client::WeatherFetcher;
use crate::decode::decode;
use crate::error::WeatherError;
use crate::model::{WeatherQuery, WeatherRecord};

/// What the screen shows. Exactly one variant at a time.
#[derive(Debug, Clone, PartialEq)]
pub enum ViewState {
    /// Before the first submission.
    Idle,
    /// A fetch is in flight.
    Loading,
    Success(WeatherRecord),
    Failure(String),
}

impl ViewState {
    pub fn is_loading(&self) -> bool {
        matches!(self, ViewState::Loading)
    }
}

/// Fetch the city's weather and decode the body, collapsing both
/// failure modes into one error type.
pub async fn fetch_record(
    fetcher: &dyn WeatherFetcher,
    query: &WeatherQuery,
) -> Result<WeatherRecord, WeatherError> {
    let body = fetcher.fetch(query).await?;
    Ok(decode(&body)?)
}

type Outcome = (u64, Result<WeatherRecord, WeatherError>);

/// One screen's worth of state plus its in-flight fetch task.
///
/// A new submission aborts the previous task, and outcomes are tagged
/// with a generation counter so anything a superseded task managed to
/// send before the abort is discarded instead of clobbering newer
/// state. Dropping the session aborts whatever is still in flight.
#[derive(Debug)]
pub struct Session {
    fetcher: Arc<dyn WeatherFetcher>,
    state: ViewState,
    last_record: Option<WeatherRecord>,
    generation: u64,
    in_flight: Option<JoinHandle<()>>,
    tx: mpsc::UnboundedSender<Outcome>,
    rx: mpsc::UnboundedReceiver<Outcome>,
}

impl Session {
    pub fn new(fetcher: Arc<dyn WeatherFetcher>) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            fetcher,
            state: ViewState::Idle,
            last_record: None,
            generation: 0,
            in_flight: None,
            tx,
            rx,
        }
    }

    pub fn state(&self) -> &ViewState {
        &self.state
    }

    /// The most recent successful record. Survives later `Loading` and
    /// `Failure` states so the screen can keep showing the old result
    /// until the next success overwrites it.
    pub fn last_record(&self) -> Option<&WeatherRecord> {
        self.last_record.as_ref()
    }

    /// Submit a city name. Blank or whitespace-only input is rejected
    /// silently: no fetch is issued, the state does not change, and
    /// `false` is returned. Otherwise the state becomes `Loading`
    /// (clearing any prior error), the previous in-flight fetch is
    /// aborted, and a new one is spawned.
    pub fn submit(&mut self, input: &str) -> bool {
        let Some(query) = WeatherQuery::new(input) else {
            return false;
        };

        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }

        self.generation += 1;
        self.state = ViewState::Loading;

        let generation = self.generation;
        let fetcher = Arc::clone(&self.fetcher);
        let tx = self.tx.clone();

        self.in_flight = Some(tokio::spawn(async move {
            let outcome = fetch_record(fetcher.as_ref(), &query).await;
            // Receiver only goes away when the session is dropped.
            let _ = tx.send((generation, outcome));
        }));

        true
    }

    /// Wait for the current fetch to finish and apply its transition.
    /// Outcomes from superseded submissions are skipped. Only call
    /// after a `submit` returned `true`; with nothing in flight this
    /// pends forever, mirroring a hung network call leaving the screen
    /// in `Loading`.
    pub async fn next_transition(&mut self) -> &ViewState {
        while let Some((generation, outcome)) = self.rx.recv().await {
            if generation != self.generation {
                continue;
            }
            self.in_flight = None;
            match outcome {
                Ok(record) => {
                    self.last_record = Some(record.clone());
                    self.state = ViewState::Success(record);
                }
                Err(err) => {
                    self.state = ViewState::Failure(err.user_message());
                }
            }
            break;
        }
        &self.state
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        if let Some(handle) = self.in_flight.take() {
            handle.abort();
        }
    }
}
