//! `souk watch`: debounced search over queries typed on stdin.
//!
//! Each stdin line replaces the pending query. Once a query has been stable
//! for the debounce window it is recorded and searched; a newer settled
//! query drops (and so cancels) the search still in flight.

use souk_compare::{Debouncer, ExternalProduct, PendingSearch, SearchError};
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::app::App;

struct InFlight {
    query: String,
    search: PendingSearch,
}

pub(crate) async fn run(app: &App, category: Option<&str>) -> anyhow::Result<()> {
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    let mut debouncer = Debouncer::new(String::new(), app.debounce);
    let mut settled = debouncer.subscribe();
    let mut in_flight: Option<InFlight> = None;
    let mut eof = false;

    loop {
        if eof && !debouncer.is_pending() && in_flight.is_none() {
            break;
        }

        tokio::select! {
            line = lines.next_line(), if !eof => match line? {
                Some(line) => debouncer.push(line),
                None => eof = true,
            },
            changed = settled.changed() => {
                changed?;
                let query = settled.borrow_and_update().trim().to_owned();
                if query.is_empty() {
                    continue;
                }
                if let Err(err) = app.history.record(&query, category) {
                    tracing::warn!(error = %err, "not recording query");
                }
                if let Some(previous) = in_flight.take() {
                    tracing::debug!(query = %previous.query, "superseded search cancelled");
                }
                in_flight = Some(InFlight {
                    search: app.engine.spawn_search(&query, category),
                    query,
                });
            },
            outcome = settle(&mut in_flight) => {
                if let Some(done) = in_flight.take() {
                    app.report_outcome(&done.query, outcome);
                }
            },
        }
    }

    Ok(())
}

/// Resolves with the in-flight search result; never resolves when idle.
async fn settle(in_flight: &mut Option<InFlight>) -> Result<Vec<ExternalProduct>, SearchError> {
    match in_flight {
        Some(current) => (&mut current.search).await,
        None => std::future::pending().await,
    }
}
