use std::sync::mpsc;
use std::sync::Arc;
use std::thread;
use std::time::Duration;

use crate::config::Config;
use crate::error::{Error, ErrorKind, Result};
use crate::holiday::{self, HolidayRecord};

/// Where holiday lists come from. Timeout and retry policy live behind this
/// seam; the picker only ever sees a finished list.
pub trait HolidaySource {
    fn fetch(&self, country: &str, year: i32) -> Result<Vec<HolidayRecord>>;
}

/// Blocking HTTP source against the holidays API used by the form.
pub struct HttpSource {
    endpoint: String,
    api_key: String,
    agent: ureq::Agent,
}

impl HttpSource {
    pub fn new(endpoint: &str, api_key: &str) -> Self {
        HttpSource {
            endpoint: endpoint.to_owned(),
            api_key: api_key.to_owned(),
            agent: ureq::AgentBuilder::new()
                .timeout(Duration::from_secs(10))
                .build(),
        }
    }

    pub fn from_config(config: &Config) -> Result<Self> {
        let api_key = config.api_key.as_deref().ok_or_else(|| {
            Error::new(ErrorKind::Http, "no API key configured for holiday fetch")
        })?;

        Ok(HttpSource::new(&config.endpoint, api_key))
    }
}

impl HolidaySource for HttpSource {
    fn fetch(&self, country: &str, year: i32) -> Result<Vec<HolidayRecord>> {
        let body = self
            .agent
            .get(&self.endpoint)
            .query("country", country)
            .query("year", &year.to_string())
            .set("X-Api-Key", &self.api_key)
            .call()?
            .into_string()?;

        holiday::parse_holidays(&body)
    }
}

struct Outcome {
    token: u64,
    year: i32,
    records: Vec<HolidayRecord>,
}

/// Issues holiday fetches on worker threads, one per viewed year. Requests
/// carry a monotonically increasing token; a completed fetch is applied only
/// if it is the most recently *issued* one, so an obsolete in-flight request
/// finishing late can never overwrite fresher data.
pub struct Fetcher {
    source: Arc<dyn HolidaySource + Send + Sync>,
    country: String,
    tx: mpsc::Sender<Outcome>,
    rx: mpsc::Receiver<Outcome>,
    latest: u64,
}

impl Fetcher {
    pub fn new(source: Arc<dyn HolidaySource + Send + Sync>, country: &str) -> Self {
        let (tx, rx) = mpsc::channel();

        Fetcher {
            source,
            country: country.to_owned(),
            tx,
            rx,
            latest: 0,
        }
    }

    /// Starts a fetch for `year`, superseding any still-running request.
    /// A failed fetch substitutes the fixed fallback list so the picker
    /// stays usable offline.
    pub fn request(&mut self, year: i32) {
        self.latest += 1;
        let token = self.latest;
        let tx = self.tx.clone();
        let source = Arc::clone(&self.source);
        let country = self.country.clone();

        log::debug!("holiday fetch #{} issued for {} {}", token, country, year);

        thread::spawn(move || {
            let records = match source.fetch(&country, year) {
                Ok(records) => records,
                Err(err) => {
                    log::warn!(
                        "holiday fetch for {} {} failed, substituting fallback list: {}",
                        country,
                        year,
                        err
                    );
                    holiday::fallback_holidays().to_vec()
                }
            };

            // A closed channel means the picker side is gone already.
            let _ = tx.send(Outcome {
                token,
                year,
                records,
            });
        });
    }

    /// Drains finished fetches and hands back the result of the latest
    /// issued request, if it has arrived. Stale results are discarded.
    pub fn try_update(&mut self) -> Option<(i32, Vec<HolidayRecord>)> {
        let mut update = None;

        while let Ok(outcome) = self.rx.try_recv() {
            if outcome.token == self.latest {
                update = Some((outcome.year, outcome.records));
            } else {
                log::debug!("discarding stale holiday fetch #{}", outcome.token);
            }
        }

        update
    }
}
