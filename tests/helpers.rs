// Shared test helpers: an in-memory TXT source for driving the resolver
// without network access.

use async_trait::async_trait;
use std::collections::{HashMap, HashSet};
use std::sync::Mutex;

use txt2route::{LookupError, TxtLookup};

/// TXT table keyed by domain. Unknown domains answer with no records.
#[derive(Default)]
pub struct StaticTxt {
    records: HashMap<String, Vec<String>>,
    failing: HashSet<String>,
    queries: Mutex<Vec<String>>,
}

#[allow(dead_code)] // Not every test file uses every helper
impl StaticTxt {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, domain: &str, record: &str) -> Self {
        self.records
            .entry(domain.to_string())
            .or_default()
            .push(record.to_string());
        self
    }

    pub fn failing(mut self, domain: &str) -> Self {
        self.failing.insert(domain.to_string());
        self
    }

    pub fn queries(&self) -> Vec<String> {
        self.queries.lock().unwrap().clone()
    }
}

#[async_trait]
impl TxtLookup for StaticTxt {
    async fn lookup_txt(&self, domain: &str) -> Result<Vec<String>, LookupError> {
        self.queries.lock().unwrap().push(domain.to_string());
        if self.failing.contains(domain) {
            return Err(LookupError::Other(format!("no such host {domain}")));
        }
        Ok(self.records.get(domain).cloned().unwrap_or_default())
    }
}
