use std::collections::VecDeque;
use std::sync::Mutex;
use std::thread;

use crate::config::ClientConfiguration;
use crate::error::CellBaseError;
use crate::options::QueryOptions;
use crate::page::{Method, PageFetcher, QueryResult};
use crate::paginate::Paginator;
use crate::session::HttpSession;
use crate::url::Route;

/// Largest identifier group sent in one composite request.
pub const DEFAULT_BATCH_SIZE: usize = 200;
pub const DEFAULT_NUM_THREADS: usize = 4;

/// Splits large identifier lists into batches and runs each batch through the
/// paginator, fanning out across worker threads when the list exceeds the
/// batch ceiling. All knobs are per-instance; tests shrink the ceiling to
/// force the threaded path instead of mutating shared state.
#[derive(Debug, Clone)]
pub struct Fetcher {
    batch_size: usize,
    num_threads: usize,
    paginator: Paginator,
}

impl Default for Fetcher {
    fn default() -> Self {
        Self {
            batch_size: DEFAULT_BATCH_SIZE,
            num_threads: DEFAULT_NUM_THREADS,
            paginator: Paginator::default(),
        }
    }
}

impl Fetcher {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_batch_size(mut self, batch_size: usize) -> Self {
        self.batch_size = batch_size.max(1);
        self
    }

    pub fn with_num_threads(mut self, num_threads: usize) -> Self {
        self.num_threads = num_threads.max(1);
        self
    }

    pub fn with_page_size(mut self, page_size: u64) -> Self {
        self.paginator.page_size = page_size.max(1);
        self
    }

    pub fn with_page_fetcher(mut self, pages: PageFetcher) -> Self {
        self.paginator.pages = pages;
        self
    }

    /// Retrieves all results for `ids` in their original order. Entries may
    /// themselves be comma-joined lists; duplicates are preserved and queried
    /// independently.
    pub fn get(
        &self,
        session: &dyn HttpSession,
        route: &Route,
        ids: &[String],
        options: &QueryOptions,
        method: Method,
        data: Option<&str>,
    ) -> Result<Vec<QueryResult>, CellBaseError> {
        let tokens = split_ids(ids);
        if tokens.len() <= self.batch_size {
            return self
                .paginator
                .fetch_group(session, route, &tokens, options, method, data);
        }

        let batches: Vec<Vec<String>> = tokens
            .chunks(self.batch_size)
            .map(|chunk| chunk.to_vec())
            .collect();
        let batch_count = batches.len();
        let queue: Mutex<VecDeque<(usize, Vec<String>)>> =
            Mutex::new(batches.into_iter().enumerate().collect());
        let mut slots: Vec<Option<Result<Vec<QueryResult>, CellBaseError>>> =
            (0..batch_count).map(|_| None).collect();

        let workers = self.num_threads.min(batch_count);
        thread::scope(|scope| {
            let handles: Vec<_> = (0..workers)
                .map(|_| {
                    scope.spawn(|| {
                        let mut done = Vec::new();
                        while let Some((index, batch)) = next_job(&queue) {
                            let result = self
                                .paginator
                                .fetch_group(session, route, &batch, options, method, data);
                            done.push((index, result));
                        }
                        done
                    })
                })
                .collect();
            for handle in handles {
                match handle.join() {
                    Ok(completed) => {
                        for (index, result) in completed {
                            slots[index] = Some(result);
                        }
                    }
                    Err(panic) => std::panic::resume_unwind(panic),
                }
            }
        });

        // Slots are read in batch order, so the error propagated is the same
        // no matter which worker failed first.
        let mut merged = Vec::with_capacity(tokens.len());
        for slot in slots {
            match slot {
                Some(Ok(results)) => merged.extend(results),
                Some(Err(err)) => return Err(err),
                None => unreachable!("work queue drained before the scope exits"),
            }
        }
        Ok(merged)
    }
}

fn next_job(queue: &Mutex<VecDeque<(usize, Vec<String>)>>) -> Option<(usize, Vec<String>)> {
    queue.lock().ok()?.pop_front()
}

fn split_ids(ids: &[String]) -> Vec<String> {
    ids.iter()
        .flat_map(|id| id.split(','))
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

/// One-call form of the engine mirroring the service's query surface: builds
/// the route, splits `query_id` and retrieves every page with default fetch
/// settings.
#[allow(clippy::too_many_arguments)]
pub fn get(
    session: &dyn HttpSession,
    config: &ClientConfiguration,
    category: Option<&str>,
    subcategory: Option<&str>,
    resource: &str,
    query_id: Option<&str>,
    options: Option<&QueryOptions>,
    method: Method,
    data: Option<&str>,
) -> Result<Vec<QueryResult>, CellBaseError> {
    let route = Route::new(config, category, subcategory, resource);
    let ids: Vec<String> = query_id.map(str::to_string).into_iter().collect();
    let default_options = QueryOptions::new();
    let options = options.unwrap_or(&default_options);
    Fetcher::new().get(session, &route, &ids, options, method, data)
}
