use crate::graphql::TypeRegistry;
use crate::mapper::QueryResultTypeMapper;
use std::rc::Rc;

/// Bootstrap wiring: builds one mapper per schema-build context.
///
/// The registry handle is shared with the host so the reverse name path can
/// resolve element types registered elsewhere in the schema.
#[derive(Default)]
pub struct QueryResultTypeMapperFactory;

impl QueryResultTypeMapperFactory {
    pub fn new() -> Self {
        Self
    }

    pub fn create(&self, registry: Rc<dyn TypeRegistry>) -> QueryResultTypeMapper {
        QueryResultTypeMapper::new(registry)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::graphql::SchemaTypes;

    #[test]
    fn factory_builds_independent_mappers_test() {
        let registry = Rc::new(SchemaTypes::new());
        let factory = QueryResultTypeMapperFactory::new();

        let mut first = factory.create(registry.clone());
        let mut second = factory.create(registry);

        // each mapper owns its own cache
        let meta_a = first.map_name_to_type("DB_META").unwrap();
        let meta_b = second.map_name_to_type("DB_META").unwrap();
        assert!(!Rc::ptr_eq(&meta_a, &meta_b));
    }
}
