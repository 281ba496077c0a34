use crate::codec;
use crate::constants::{meta, pagination, result};
use crate::error::{MapperError, MapperResult};
use crate::graphql::*;
use indexmap::IndexMap;
use std::rc::Rc;

/// Fully qualified identity of the one query-result abstraction this mapper
/// supports. Matching is exact; ancestor classes do not qualify.
pub const QUERY_RESULT_CLASS: &str = "dbquery_graphql::QueryResult";

/// Synthesizes paginated-result object types on demand and memoizes them.
///
/// One instance is owned by exactly one schema-build context. The cache is an
/// ordinary unsynchronized map and the type is deliberately not `Sync`; a
/// host sharing a mapper across threads must add its own locking to keep the
/// at-most-once synthesis guarantee.
///
/// For every element type `T` the mapper produces
/// `DB_QUERY_<T> { data(limit: Int, offset: Int): [T!]!, meta: DB_META! }`
/// plus one shared `DB_META` type. Repeated requests for the same element
/// type return the identical `Rc`, so hosts may deduplicate by identity.
pub struct QueryResultTypeMapper {
    registry: Rc<dyn TypeRegistry>,
    cache: IndexMap<String, Rc<ObjectType>>,
    meta_type: Option<Rc<ObjectType>>,
}

impl QueryResultTypeMapper {
    pub fn new(registry: Rc<dyn TypeRegistry>) -> Self {
        Self {
            registry,
            cache: IndexMap::new(),
            meta_type: None,
        }
    }

    /// True iff `class_name` is exactly the supported query-result class
    pub fn can_map_class_to_type(&self, class_name: &str) -> bool {
        class_name == QUERY_RESULT_CLASS
    }

    /// Maps the query-result class wrapping `element_type` to its
    /// synthesized object type.
    pub fn map_class_to_type(
        &mut self,
        class_name: &str,
        element_type: Option<&__Type>,
    ) -> MapperResult<Rc<ObjectType>> {
        // a missing subtype is reported even when the class would be rejected
        let element_type = element_type.ok_or_else(MapperError::missing_subtype)?;
        if !self.can_map_class_to_type(class_name) {
            return Err(MapperError::cannot_map(class_name));
        }
        Ok(self.paginated_result_type(element_type))
    }

    /// True for the meta type literal and any name carrying the query prefix
    pub fn can_map_name_to_type(&self, type_name: &str) -> bool {
        codec::is_managed_name(type_name)
    }

    /// Maps a schema name back to its type: the shared meta type, or a
    /// synthesized result type recovered by decoding the element name and
    /// resolving it through the host registry.
    pub fn map_name_to_type(&mut self, type_name: &str) -> MapperResult<Rc<ObjectType>> {
        if type_name == codec::META_TYPE_NAME {
            return Ok(self.meta_type());
        }
        let element_name = match codec::decode(type_name) {
            Some(name) => name,
            None => return Err(MapperError::cannot_map(type_name)),
        };
        let element_type = self
            .registry
            .type_by_name(element_name)
            .ok_or_else(|| MapperError::cannot_map(type_name))?;
        if !element_type.is_output_type() {
            // paginated results only wrap output types
            return Err(MapperError::cannot_map(type_name));
        }
        Ok(self.paginated_result_type(&element_type))
    }

    /// Schema names synthesized so far, in creation order
    pub fn synthesized_type_names(&self) -> Vec<String> {
        self.cache.keys().cloned().collect()
    }

    /// Shared synthesis routine. Idempotent per element-type identity: the
    /// first call for a given canonical name builds and caches the type,
    /// every later call returns the same instance.
    fn paginated_result_type(&mut self, element_type: &__Type) -> Rc<ObjectType> {
        // an element type without a usable schema name is an integration
        // fault, never a client error
        let canonical_name = element_type
            .unmodified_type()
            .name()
            .expect("paginated element type has no schema name");
        assert!(
            is_valid_graphql_name(&canonical_name),
            "\"{canonical_name}\" is not a valid GraphQL type name"
        );

        let type_name = codec::encode(&canonical_name);
        if let Some(cached) = self.cache.get(&type_name) {
            return cached.clone();
        }

        // nullable elements collapse onto their non-null form
        let element_type = element_type.non_null();
        let meta_type = self.meta_type();

        let type_ = Rc::new(ObjectType {
            name: type_name.clone(),
            description: Some(format!(
                "Paginated, countable result of `{canonical_name}` records"
            )),
            fields: vec![
                __Field {
                    name_: result::DATA.to_string(),
                    description: None,
                    type_: __Type::NonNull(NonNullType {
                        type_: Box::new(__Type::List(ListType {
                            type_: Box::new(element_type),
                        })),
                    }),
                    args: vec![
                        __InputValue {
                            name_: pagination::LIMIT.to_string(),
                            type_: __Type::Scalar(Scalar::Int),
                            description: None,
                            default_value: None,
                        },
                        __InputValue {
                            name_: pagination::OFFSET.to_string(),
                            type_: __Type::Scalar(Scalar::Int),
                            description: Some("Requires `limit`".to_string()),
                            default_value: None,
                        },
                    ],
                    deprecation_reason: None,
                },
                __Field {
                    name_: result::META.to_string(),
                    description: None,
                    type_: __Type::NonNull(NonNullType {
                        type_: Box::new(__Type::Object(meta_type)),
                    }),
                    args: vec![],
                    deprecation_reason: None,
                },
            ],
        });

        self.cache.insert(type_name, type_.clone());
        type_
    }

    /// The single shared metadata type, built on first use
    fn meta_type(&mut self) -> Rc<ObjectType> {
        if let Some(meta_type) = &self.meta_type {
            return meta_type.clone();
        }

        let scalar_field = |name: &str, scalar: Scalar, description: &str| __Field {
            name_: name.to_string(),
            description: Some(description.to_string()),
            type_: __Type::Scalar(scalar),
            args: vec![],
            deprecation_reason: None,
        };

        let meta_type = Rc::new(ObjectType {
            name: codec::META_TYPE_NAME.to_string(),
            description: Some("Aggregate information about a paginated query result".to_string()),
            fields: vec![
                scalar_field(
                    meta::TOTAL,
                    Scalar::Int,
                    "Total number of matching records, ignoring limit and offset",
                ),
                scalar_field(
                    meta::CLASS,
                    Scalar::String,
                    "Fully qualified class of the records",
                ),
                scalar_field(
                    meta::KEY,
                    Scalar::String,
                    "Primary-key name of persistable records, empty otherwise",
                ),
                scalar_field(meta::NAME, Scalar::String, "Short class name of the records"),
            ],
        });
        self.meta_type = Some(meta_type.clone());
        meta_type
    }

    // --- refused capabilities -------------------------------------------
    //
    // This mapper only synthesizes output types for the query-result
    // abstraction. Input-type mapping, type extension and input-type
    // decoration are refused wholesale; all of them fail through the same
    // constructor, carrying the rejected identifier.

    fn refuse(identifier: &str) -> MapperError {
        MapperError::cannot_map(identifier)
    }

    pub fn can_map_class_to_input_type(&self, _class_name: &str) -> bool {
        false
    }

    pub fn map_class_to_input_type(
        &self,
        class_name: &str,
    ) -> MapperResult<Rc<InputObjectType>> {
        Err(Self::refuse(class_name))
    }

    pub fn can_extend_type_for_class(&self, _class_name: &str) -> bool {
        false
    }

    pub fn extend_type_for_class(
        &self,
        class_name: &str,
        _type: &__Type,
    ) -> MapperResult<__Type> {
        Err(Self::refuse(class_name))
    }

    pub fn can_extend_type_for_name(&self, _type_name: &str) -> bool {
        false
    }

    pub fn extend_type_for_name(&self, type_name: &str, _type: &__Type) -> MapperResult<__Type> {
        Err(Self::refuse(type_name))
    }

    pub fn can_decorate_input_type_for_name(&self, _type_name: &str) -> bool {
        false
    }

    pub fn decorate_input_type_for_name(
        &self,
        type_name: &str,
        _type: &InputObjectType,
    ) -> MapperResult<Rc<InputObjectType>> {
        Err(Self::refuse(type_name))
    }

    /// Synthesized types are reachable only through their element type,
    /// never by class enumeration
    pub fn supported_classes(&self) -> &'static [&'static str] {
        &[]
    }
}
