//! Synchronous client for the CellBase genomics annotation REST service.
//!
//! The engine hides the service's page-based API behind one call: identifier
//! lists are split into batches, large batches fan out across worker threads,
//! each group is paged until exhausted, and results come back in the original
//! identifier order.
//!
//! ```no_run
//! use cellbase_client::{CellBaseClient, ClientConfiguration, FeatureEndpoint, QueryOptions};
//!
//! # fn main() -> Result<(), cellbase_client::CellBaseError> {
//! let client = CellBaseClient::new(ClientConfiguration::default())?;
//! let results = client.gene().info("BRCA1,BRCA2", &QueryOptions::new().limit(100))?;
//! for entry in &results {
//!     println!("{:?}: {} results", entry.id, entry.num_results);
//! }
//! # Ok(())
//! # }
//! ```

pub mod client;
pub mod config;
pub mod dispatch;
pub mod error;
pub mod options;
pub mod page;
pub mod paginate;
pub mod retry;
pub mod session;
pub mod url;

pub use client::{
    CellBaseClient, FeatureEndpoint, GeneClient, GenomicRegionClient, ProteinClient,
    RestEndpoint, TranscriptClient, VariantClient, VariationClient,
};
pub use config::ClientConfiguration;
pub use dispatch::{Fetcher, get};
pub use error::CellBaseError;
pub use options::QueryOptions;
pub use page::{Method, PageEnvelope, PageFetcher, QueryResult};
pub use paginate::Paginator;
pub use retry::{RetryPolicy, retry};
pub use session::{HttpSession, RawResponse, ReqwestSession};
