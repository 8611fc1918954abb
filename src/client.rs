use std::sync::Arc;

use crate::config::ClientConfiguration;
use crate::dispatch::Fetcher;
use crate::error::CellBaseError;
use crate::options::QueryOptions;
use crate::page::{Method, QueryResult};
use crate::retry::{RetryPolicy, retry};
use crate::session::{HttpSession, ReqwestSession};
use crate::url::Route;

/// Entry point for callers: owns the session, the configuration and the
/// fetch engine, and hands out per-category views.
pub struct CellBaseClient {
    session: Arc<dyn HttpSession>,
    config: ClientConfiguration,
    fetcher: Fetcher,
    retry: Option<RetryPolicy>,
}

impl CellBaseClient {
    pub fn new(config: ClientConfiguration) -> Result<Self, CellBaseError> {
        Ok(Self::with_session(Arc::new(ReqwestSession::new()?), config))
    }

    pub fn with_session(session: Arc<dyn HttpSession>, config: ClientConfiguration) -> Self {
        Self {
            session,
            config,
            fetcher: Fetcher::default(),
            retry: None,
        }
    }

    pub fn with_fetcher(mut self, fetcher: Fetcher) -> Self {
        self.fetcher = fetcher;
        self
    }

    /// Wraps every outbound call in the backoff loop.
    pub fn with_retry(mut self, policy: RetryPolicy) -> Self {
        self.retry = Some(policy);
        self
    }

    pub fn configuration(&self) -> &ClientConfiguration {
        &self.config
    }

    pub fn gene(&self) -> GeneClient<'_> {
        GeneClient { client: self }
    }

    pub fn transcript(&self) -> TranscriptClient<'_> {
        TranscriptClient { client: self }
    }

    pub fn protein(&self) -> ProteinClient<'_> {
        ProteinClient { client: self }
    }

    pub fn variation(&self) -> VariationClient<'_> {
        VariationClient { client: self }
    }

    pub fn region(&self) -> GenomicRegionClient<'_> {
        GenomicRegionClient { client: self }
    }

    pub fn variant(&self) -> VariantClient<'_> {
        VariantClient { client: self }
    }

    fn call(
        &self,
        category: &str,
        subcategory: &str,
        resource: &str,
        ids: Option<&str>,
        options: &QueryOptions,
    ) -> Result<Vec<QueryResult>, CellBaseError> {
        let route = Route::new(&self.config, Some(category), Some(subcategory), resource);
        let ids: Vec<String> = ids.map(str::to_string).into_iter().collect();
        let run = || {
            self.fetcher
                .get(self.session.as_ref(), &route, &ids, options, Method::Get, None)
        };
        match &self.retry {
            Some(policy) => retry(policy, run),
            None => run(),
        }
    }
}

/// Operations every REST endpoint answers.
pub trait RestEndpoint {
    fn call(
        &self,
        resource: &str,
        ids: Option<&str>,
        options: &QueryOptions,
    ) -> Result<Vec<QueryResult>, CellBaseError>;

    fn help(&self) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("help", None, &QueryOptions::new())
    }

    fn model(&self) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("model", None, &QueryOptions::new())
    }
}

/// Operations shared by the feature-category endpoints.
pub trait FeatureEndpoint: RestEndpoint {
    fn count(&self) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("count", None, &QueryOptions::new())
    }

    fn first(&self) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("first", None, &QueryOptions::new())
    }

    fn info(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("info", Some(ids), options)
    }

    fn search(&self, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("search", None, options)
    }
}

pub struct GeneClient<'a> {
    client: &'a CellBaseClient,
}

impl RestEndpoint for GeneClient<'_> {
    fn call(
        &self,
        resource: &str,
        ids: Option<&str>,
        options: &QueryOptions,
    ) -> Result<Vec<QueryResult>, CellBaseError> {
        self.client.call("feature", "gene", resource, ids, options)
    }
}

impl FeatureEndpoint for GeneClient<'_> {}

impl GeneClient<'_> {
    pub fn biotypes(&self, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("biotype", None, options)
    }

    pub fn clinical(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("clinical", Some(ids), options)
    }

    pub fn list(&self, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("list", None, options)
    }

    pub fn protein(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("protein", Some(ids), options)
    }

    pub fn transcript(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("transcript", Some(ids), options)
    }

    pub fn tfbs(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("tfbs", Some(ids), options)
    }

    pub fn snp(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("snp", Some(ids), options)
    }
}

pub struct TranscriptClient<'a> {
    client: &'a CellBaseClient,
}

impl RestEndpoint for TranscriptClient<'_> {
    fn call(
        &self,
        resource: &str,
        ids: Option<&str>,
        options: &QueryOptions,
    ) -> Result<Vec<QueryResult>, CellBaseError> {
        self.client.call("feature", "transcript", resource, ids, options)
    }
}

impl FeatureEndpoint for TranscriptClient<'_> {}

impl TranscriptClient<'_> {
    pub fn function_prediction(
        &self,
        ids: &str,
        options: &QueryOptions,
    ) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("function_prediction", Some(ids), options)
    }

    pub fn gene(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("gene", Some(ids), options)
    }

    pub fn protein(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("protein", Some(ids), options)
    }

    pub fn sequence(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("sequence", Some(ids), options)
    }
}

pub struct ProteinClient<'a> {
    client: &'a CellBaseClient,
}

impl RestEndpoint for ProteinClient<'_> {
    fn call(
        &self,
        resource: &str,
        ids: Option<&str>,
        options: &QueryOptions,
    ) -> Result<Vec<QueryResult>, CellBaseError> {
        self.client.call("feature", "protein", resource, ids, options)
    }
}

impl FeatureEndpoint for ProteinClient<'_> {}

impl ProteinClient<'_> {
    pub fn sequence(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("sequence", Some(ids), options)
    }

    pub fn substitution_scores(
        &self,
        ids: &str,
        options: &QueryOptions,
    ) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("substitution_scores", Some(ids), options)
    }
}

pub struct VariationClient<'a> {
    client: &'a CellBaseClient,
}

impl RestEndpoint for VariationClient<'_> {
    fn call(
        &self,
        resource: &str,
        ids: Option<&str>,
        options: &QueryOptions,
    ) -> Result<Vec<QueryResult>, CellBaseError> {
        self.client.call("feature", "variation", resource, ids, options)
    }
}

impl FeatureEndpoint for VariationClient<'_> {}

impl VariationClient<'_> {
    pub fn consequence_types(
        &self,
        ids: Option<&str>,
        options: &QueryOptions,
    ) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("consequence_types", ids, options)
    }
}

pub struct GenomicRegionClient<'a> {
    client: &'a CellBaseClient,
}

impl RestEndpoint for GenomicRegionClient<'_> {
    fn call(
        &self,
        resource: &str,
        ids: Option<&str>,
        options: &QueryOptions,
    ) -> Result<Vec<QueryResult>, CellBaseError> {
        self.client.call("genomic", "region", resource, ids, options)
    }
}

impl GenomicRegionClient<'_> {
    pub fn clinical(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("clinical", Some(ids), options)
    }

    pub fn conservation(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("conservation", Some(ids), options)
    }

    pub fn gene(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("gene", Some(ids), options)
    }

    pub fn regulatory(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("regulatory", Some(ids), options)
    }

    pub fn sequence(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("sequence", Some(ids), options)
    }

    pub fn tfbs(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("tfbs", Some(ids), options)
    }

    pub fn transcript(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("transcript", Some(ids), options)
    }

    pub fn variation(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("variation", Some(ids), options)
    }
}

pub struct VariantClient<'a> {
    client: &'a CellBaseClient,
}

impl RestEndpoint for VariantClient<'_> {
    fn call(
        &self,
        resource: &str,
        ids: Option<&str>,
        options: &QueryOptions,
    ) -> Result<Vec<QueryResult>, CellBaseError> {
        self.client.call("genomic", "variant", resource, ids, options)
    }
}

impl VariantClient<'_> {
    pub fn annotation(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("annotation", Some(ids), options)
    }

    pub fn cadd(&self, ids: &str, options: &QueryOptions) -> Result<Vec<QueryResult>, CellBaseError> {
        self.call("cadd", Some(ids), options)
    }
}
