/// Query options interpreted by the engine, plus pass-through filters.
///
/// `skip` and `limit` are the pagination keys the engine rewrites while it
/// pages; `include`, `exclude` and `count` go to the server verbatim. Any
/// other server-side filter rides in `extra`, serialized in insertion order.
/// A `limit` of 0 means unbounded, matching the server convention.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QueryOptions {
    pub skip: Option<u64>,
    pub limit: Option<u64>,
    pub include: Vec<String>,
    pub exclude: Vec<String>,
    pub count: Option<bool>,
    pub extra: Vec<(String, String)>,
    /// Local only: log the constructed URL. Never serialized.
    pub debug: bool,
}

impl QueryOptions {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn skip(mut self, skip: u64) -> Self {
        self.skip = Some(skip);
        self
    }

    pub fn limit(mut self, limit: u64) -> Self {
        self.limit = Some(limit);
        self
    }

    pub fn include<I: IntoIterator<Item = S>, S: Into<String>>(mut self, fields: I) -> Self {
        self.include = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn exclude<I: IntoIterator<Item = S>, S: Into<String>>(mut self, fields: I) -> Self {
        self.exclude = fields.into_iter().map(Into::into).collect();
        self
    }

    pub fn count(mut self, count: bool) -> Self {
        self.count = Some(count);
        self
    }

    pub fn extra(mut self, key: &str, value: &str) -> Self {
        self.extra.push((key.to_string(), value.to_string()));
        self
    }

    pub fn debug(mut self, debug: bool) -> Self {
        self.debug = debug;
        self
    }

    /// Results wanted per identifier; `None` when the caller asked for
    /// everything (no limit, or the unbounded sentinel 0).
    pub fn wanted(&self) -> Option<u64> {
        match self.limit {
            None | Some(0) => None,
            Some(limit) => Some(limit),
        }
    }

    /// Serializes to `key=value&...` in a fixed order: skip, limit, include,
    /// exclude, count, then extras in insertion order. Lists comma-join.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<String> = Vec::new();
        if let Some(skip) = self.skip {
            pairs.push(format!("skip={skip}"));
        }
        if let Some(limit) = self.limit {
            pairs.push(format!("limit={limit}"));
        }
        if !self.include.is_empty() {
            pairs.push(format!("include={}", self.include.join(",")));
        }
        if !self.exclude.is_empty() {
            pairs.push(format!("exclude={}", self.exclude.join(",")));
        }
        if let Some(count) = self.count {
            pairs.push(format!("count={count}"));
        }
        for (key, value) in &self.extra {
            pairs.push(format!("{key}={value}"));
        }
        pairs.join("&")
    }
}
