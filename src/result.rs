/// Identity of the model class whose instances a query produces.
///
/// Carries the two facts the meta resolver needs: the fully qualified class
/// identity and, for persistable models, the name of the primary-key
/// accessor. Non-persistable classes have no key.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ModelClass {
    qualified_name: String,
    primary_key: Option<String>,
}

impl ModelClass {
    pub fn new(qualified_name: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            primary_key: None,
        }
    }

    pub fn persistable(qualified_name: impl Into<String>, primary_key: impl Into<String>) -> Self {
        Self {
            qualified_name: qualified_name.into(),
            primary_key: Some(primary_key.into()),
        }
    }

    pub fn qualified_name(&self) -> &str {
        &self.qualified_name
    }

    /// Short (unqualified) display name: the last path segment
    pub fn short_name(&self) -> &str {
        self.qualified_name
            .rsplit("::")
            .next()
            .unwrap_or(&self.qualified_name)
    }

    pub fn is_persistable(&self) -> bool {
        self.primary_key.is_some()
    }

    /// Primary-key name for persistable models, empty string otherwise
    pub fn key(&self) -> &str {
        self.primary_key.as_deref().unwrap_or("")
    }
}

/// An in-progress, limitable, offsettable, countable data query.
///
/// Owned by the resolver caller for the duration of one field resolution;
/// the mapper never retains one. Limit and offset mutate the query in place,
/// so the value's identity is preserved across resolution.
pub trait QueryResult {
    fn apply_limit(&mut self, limit: i64);

    fn apply_offset(&mut self, offset: i64);

    /// Total number of matching records, ignoring limit and offset
    fn count(&self) -> u64;

    fn element_class(&self) -> &ModelClass;

    fn element_class_name(&self) -> String {
        self.element_class().qualified_name().to_string()
    }
}
