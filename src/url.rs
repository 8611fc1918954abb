use crate::config::ClientConfiguration;
use crate::options::QueryOptions;

pub const REST_PREFIX: &str = "webservices/rest";

/// One REST endpoint: host and dataset from the configuration, plus the
/// category/subcategory/resource path of the call.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Route {
    pub host: String,
    pub version: String,
    pub species: String,
    pub category: Option<String>,
    pub subcategory: Option<String>,
    pub resource: String,
}

impl Route {
    pub fn new(
        config: &ClientConfiguration,
        category: Option<&str>,
        subcategory: Option<&str>,
        resource: &str,
    ) -> Self {
        Self {
            host: config.host.clone(),
            version: config.version.clone(),
            species: config.species.clone(),
            category: category.map(str::to_string),
            subcategory: subcategory.map(str::to_string),
            resource: resource.to_string(),
        }
    }

    /// Assembles the request URL. Identifier tokens are joined with commas
    /// and passed through verbatim; the server expects pre-sanitized tokens.
    pub fn url(&self, ids: &[String], options: &QueryOptions) -> String {
        let mut segments: Vec<&str> = vec![&self.host, REST_PREFIX, &self.version, &self.species];
        if let Some(category) = &self.category {
            segments.push(category);
        }
        if let Some(subcategory) = &self.subcategory {
            segments.push(subcategory);
        }
        let joined_ids;
        if !ids.is_empty() {
            joined_ids = ids.join(",");
            segments.push(&joined_ids);
        }
        segments.push(&self.resource);

        let mut url = segments.join("/");
        let query = options.to_query_string();
        if !query.is_empty() {
            url.push('?');
            url.push_str(&query);
        }
        url
    }
}
