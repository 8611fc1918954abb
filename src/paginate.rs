use tracing::debug;

use crate::error::CellBaseError;
use crate::options::QueryOptions;
use crate::page::{Method, PageFetcher, QueryResult};
use crate::session::HttpSession;
use crate::url::Route;

/// Page size requested from the server on every non-final page, regardless of
/// any caller limit. Keeps server load bounded and predictable.
pub const DEFAULT_PAGE_SIZE: u64 = 1000;

/// Drives the page fetcher for one identifier group until every identifier is
/// exhausted or the caller's limit is satisfied.
#[derive(Debug, Clone)]
pub struct Paginator {
    pub page_size: u64,
    pub pages: PageFetcher,
}

impl Default for Paginator {
    fn default() -> Self {
        Self {
            page_size: DEFAULT_PAGE_SIZE,
            pages: PageFetcher::default(),
        }
    }
}

impl Paginator {
    /// Fetches all pages for one group. Slots are keyed by position in `ids`,
    /// so duplicated identifiers accumulate independently. Returns either a
    /// complete slot per identifier or the first error; never partial output.
    ///
    /// With no identifiers the server answers with a single response and the
    /// same loop runs over one slot.
    pub fn fetch_group(
        &self,
        session: &dyn HttpSession,
        route: &Route,
        ids: &[String],
        options: &QueryOptions,
        method: Method,
        data: Option<&str>,
    ) -> Result<Vec<QueryResult>, CellBaseError> {
        let wanted = options.wanted();
        let mut next_skip = options.skip.unwrap_or(0);
        let slot_count = ids.len().max(1);

        let mut slots: Vec<QueryResult> = Vec::with_capacity(slot_count);
        // Identifiers still expecting results, as positions into `ids`.
        let mut active: Vec<usize> = (0..slot_count).collect();
        let mut retrieved: u64 = 0;
        let mut pages_fetched: u64 = 0;

        loop {
            // The final page under a caller limit requests only the remainder,
            // saving one round trip.
            let request_limit = match wanted {
                Some(want) => self.page_size.min(want - retrieved),
                None => self.page_size,
            };
            let mut page_options = options.clone();
            page_options.skip = Some(next_skip);
            page_options.limit = Some(request_limit);

            let subset: Vec<String> = if ids.is_empty() {
                Vec::new()
            } else {
                active.iter().map(|&pos| ids[pos].clone()).collect()
            };
            let url = route.url(&subset, &page_options);
            if options.debug {
                debug!(%url, "constructed request url");
            }

            let envelope = self.pages.fetch(session, &url, method, data)?;
            pages_fetched += 1;
            if envelope.responses.len() != active.len() {
                return Err(CellBaseError::Envelope(format!(
                    "expected {} query results, server returned {}",
                    active.len(),
                    envelope.responses.len()
                )));
            }

            let mut still_active = Vec::with_capacity(active.len());
            for (offset, response) in envelope.responses.into_iter().enumerate() {
                let slot = active[offset];
                // A full page implies the server may hold more for this id.
                let full_page = response.num_results == request_limit;
                if slots.len() == slot {
                    slots.push(response);
                } else {
                    let existing = &mut slots[slot];
                    existing.num_results += response.num_results;
                    existing.results.extend(response.results);
                }
                if full_page {
                    still_active.push(slot);
                }
            }

            retrieved += request_limit;
            if let Some(want) = wanted
                && retrieved >= want
            {
                break;
            }
            if still_active.is_empty() {
                break;
            }
            next_skip += request_limit;
            active = still_active;
        }

        debug!(
            identifiers = slot_count,
            pages = pages_fetched,
            "pagination complete"
        );
        Ok(slots)
    }
}
