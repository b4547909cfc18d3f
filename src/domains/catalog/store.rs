//! The in-memory catalog.

use tracing::{error, info, instrument};

use super::record::{Domain, Record};
use super::source::RecordSource;

/// The complete set of knowledge collections.
///
/// Every domain is always present, possibly empty. A catalog is built once
/// and is read-only afterwards.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Catalog {
    rules: Vec<Record>,
    prompts: Vec<Record>,
    instructions: Vec<Record>,
}

impl Catalog {
    /// Build a catalog from already loaded collections.
    pub fn new(rules: Vec<Record>, prompts: Vec<Record>, instructions: Vec<Record>) -> Self {
        Self {
            rules,
            prompts,
            instructions,
        }
    }

    /// Load all three domains from `source`, one after another.
    ///
    /// A domain that fails to load is logged and served empty; loading
    /// never fails as a whole.
    #[instrument(skip_all)]
    pub async fn load(source: &dyn RecordSource) -> Self {
        let mut catalog = Self::default();

        for domain in Domain::ALL {
            let records = match source.load(domain).await {
                Ok(records) => records,
                Err(e) => {
                    error!("Error loading {}: {}", domain, e.cause);
                    Vec::new()
                }
            };
            *catalog.collection_mut(domain) = records;
        }

        info!(
            rules = catalog.rules.len(),
            prompts = catalog.prompts.len(),
            instructions = catalog.instructions.len(),
            "Catalog initialized with {} rules, {} prompts, {} instructions",
            catalog.rules.len(),
            catalog.prompts.len(),
            catalog.instructions.len()
        );

        catalog
    }

    /// All records of `domain`, in source order.
    pub fn records(&self, domain: Domain) -> &[Record] {
        match domain {
            Domain::Rules => &self.rules,
            Domain::Prompts => &self.prompts,
            Domain::Instructions => &self.instructions,
        }
    }

    /// Number of records in `domain`.
    pub fn len(&self, domain: Domain) -> usize {
        self.records(domain).len()
    }

    /// Whether every domain is empty.
    pub fn is_empty(&self) -> bool {
        Domain::ALL.iter().all(|d| self.records(*d).is_empty())
    }

    fn collection_mut(&mut self, domain: Domain) -> &mut Vec<Record> {
        match domain {
            Domain::Rules => &mut self.rules,
            Domain::Prompts => &mut self.prompts,
            Domain::Instructions => &mut self.instructions,
        }
    }
}
