use crate::constants::pagination;
use crate::error::{MapperError, MapperResult};
use crate::gson;
use crate::result::QueryResult;
use serde::Serialize;
use std::collections::HashMap;

/// Value of the `meta` field of a synthesized result type
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct MetaRecord {
    pub name: String,
    pub class: String,
    pub total: u64,
    pub key: String,
}

fn read_argument(args: &HashMap<String, gson::Value>, arg_name: &str) -> gson::Value {
    args.get(arg_name).cloned().unwrap_or(gson::Value::Absent)
}

/// Arguments reach resolvers only after the host has validated them against
/// the declared `Int` type, so anything but an integer here is an
/// integration fault.
fn int_value(value: &gson::Value, arg_name: &str) -> Option<i64> {
    match value {
        gson::Value::Absent | gson::Value::Null => None,
        gson::Value::Number(gson::Number::Integer(n)) => Some(*n),
        _ => panic!("argument \"{arg_name}\" was not validated as an Int by the host"),
    }
}

/// Resolves the `data` field: applies `limit` and `offset` to the root query
/// in place. The root keeps its identity; no copy is made.
pub fn resolve_data(
    root: &mut dyn QueryResult,
    args: &HashMap<String, gson::Value>,
) -> MapperResult<()> {
    let limit = read_argument(args, pagination::LIMIT);
    let offset = read_argument(args, pagination::OFFSET);

    // an offset makes no sense without a page size; reject before touching the root
    if !offset.is_absent() && limit.is_absent() {
        return Err(MapperError::offset_without_limit());
    }

    if let Some(limit) = int_value(&limit, pagination::LIMIT) {
        root.apply_limit(limit);
    }
    if let Some(offset) = int_value(&offset, pagination::OFFSET) {
        root.apply_offset(offset);
    }
    Ok(())
}

/// Resolves the `meta` field from the root query's element class identity
/// and its total count at resolution time.
pub fn resolve_meta(root: &dyn QueryResult) -> MetaRecord {
    let class = root.element_class();
    MetaRecord {
        name: class.short_name().to_string(),
        class: class.qualified_name().to_string(),
        total: root.count(),
        key: class.key().to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::result::ModelClass;
    use serde_json::json;

    struct TrackedQuery {
        class: ModelClass,
        total: u64,
        limit: Option<i64>,
        offset: Option<i64>,
    }

    impl TrackedQuery {
        fn new(class: ModelClass, total: u64) -> Self {
            Self {
                class,
                total,
                limit: None,
                offset: None,
            }
        }
    }

    impl QueryResult for TrackedQuery {
        fn apply_limit(&mut self, limit: i64) {
            self.limit = Some(limit);
        }

        fn apply_offset(&mut self, offset: i64) {
            self.offset = Some(offset);
        }

        fn count(&self) -> u64 {
            self.total
        }

        fn element_class(&self) -> &ModelClass {
            &self.class
        }
    }

    fn args(pairs: &[(&str, gson::Value)]) -> HashMap<String, gson::Value> {
        pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.clone()))
            .collect()
    }

    fn int(n: i64) -> gson::Value {
        gson::Value::Number(gson::Number::Integer(n))
    }

    #[test]
    fn offset_without_limit_is_rejected_test() {
        let mut query = TrackedQuery::new(ModelClass::new("demo::Report"), 0);
        let err = resolve_data(&mut query, &args(&[("offset", int(5))])).unwrap_err();
        assert_eq!(err, MapperError::offset_without_limit());
        assert!(err.is_client_safe());
        assert_eq!(query.limit, None);
        assert_eq!(query.offset, None);
    }

    #[test]
    fn limit_and_offset_both_apply_test() {
        let mut query = TrackedQuery::new(ModelClass::new("demo::Report"), 0);
        resolve_data(&mut query, &args(&[("limit", int(10)), ("offset", int(5))])).unwrap();
        assert_eq!(query.limit, Some(10));
        assert_eq!(query.offset, Some(5));
    }

    #[test]
    fn no_arguments_leave_root_untouched_test() {
        let mut query = TrackedQuery::new(ModelClass::new("demo::Report"), 0);
        resolve_data(&mut query, &args(&[])).unwrap();
        assert_eq!(query.limit, None);
        assert_eq!(query.offset, None);
    }

    #[test]
    fn limit_alone_applies_limit_test() {
        let mut query = TrackedQuery::new(ModelClass::new("demo::Report"), 0);
        resolve_data(&mut query, &args(&[("limit", int(10))])).unwrap();
        assert_eq!(query.limit, Some(10));
        assert_eq!(query.offset, None);
    }

    #[test]
    fn null_limit_satisfies_offset_dependency_but_is_not_applied_test() {
        // a null literal counts as provided; only non-null values are applied
        let mut query = TrackedQuery::new(ModelClass::new("demo::Report"), 0);
        resolve_data(
            &mut query,
            &args(&[("limit", gson::Value::Null), ("offset", int(5))]),
        )
        .unwrap();
        assert_eq!(query.limit, None);
        assert_eq!(query.offset, Some(5));
    }

    #[test]
    fn meta_for_persistable_model_test() {
        let query = TrackedQuery::new(ModelClass::persistable("demo::blog::Post", "id"), 42);
        let meta = resolve_meta(&query);
        assert_eq!(meta.name, "Post");
        assert_eq!(meta.class, "demo::blog::Post");
        assert_eq!(meta.total, 42);
        assert_eq!(meta.key, "id");
    }

    #[test]
    fn meta_for_plain_class_has_empty_key_test() {
        let query = TrackedQuery::new(ModelClass::new("demo::Report"), 7);
        let meta = resolve_meta(&query);
        assert_eq!(meta.key, "");
        assert_eq!(meta.total, 7);
    }

    #[test]
    fn meta_total_reflects_count_at_resolution_time_test() {
        let mut query = TrackedQuery::new(ModelClass::new("demo::Report"), 3);
        assert_eq!(resolve_meta(&query).total, 3);
        query.total = 9;
        assert_eq!(resolve_meta(&query).total, 9);
    }

    #[test]
    fn meta_record_serializes_all_fields_test() {
        let query = TrackedQuery::new(ModelClass::persistable("demo::Account", "id"), 1);
        let value = serde_json::to_value(resolve_meta(&query)).unwrap();
        assert_eq!(
            value,
            json!({"name": "Account", "class": "demo::Account", "total": 1, "key": "id"})
        );
    }
}
