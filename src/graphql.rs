use itertools::Itertools;
use lazy_static::lazy_static;
use regex::Regex;
use std::collections::HashMap;
use std::rc::Rc;

lazy_static! {
    static ref GRAPHQL_NAME_RE: Regex = Regex::new("^[_A-Za-z][_0-9A-Za-z]*$").unwrap();
}

pub fn is_valid_graphql_name(name: &str) -> bool {
    GRAPHQL_NAME_RE.is_match(name)
}

#[allow(non_camel_case_types, clippy::upper_case_acronyms)]
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum __TypeKind {
    SCALAR,
    OBJECT,
    INTERFACE,
    UNION,
    ENUM,
    INPUT_OBJECT,
    LIST,
    NON_NULL,
}

pub trait ___Type {
    // kind: __TypeKind!
    fn kind(&self) -> __TypeKind;

    // name: String
    fn name(&self) -> Option<String> {
        None
    }

    // description: String
    fn description(&self) -> Option<String> {
        None
    }

    // # OBJECT and INTERFACE only
    // fields(includeDeprecated: Boolean = false): [__Field!]
    fn fields(&self, _include_deprecated: bool) -> Option<Vec<__Field>> {
        None
    }

    // # INPUT_OBJECT only
    // inputFields: [__InputValue!]
    fn input_fields(&self) -> Option<Vec<__InputValue>> {
        None
    }

    // # NON_NULL and LIST only
    // ofType: __Type
    fn of_type(&self) -> Option<__Type> {
        None
    }

    fn field_map(&self) -> HashMap<String, __Field> {
        let mut hmap = HashMap::new();
        let fields = self.fields(true).unwrap_or_default();
        for field in fields {
            hmap.insert(field.name(), field);
        }
        hmap.insert(
            "__typename".to_string(),
            __Field {
                name_: "__typename".to_string(),
                description: None,
                type_: __Type::Scalar(Scalar::String),
                args: vec![],
                deprecation_reason: None,
            },
        );
        hmap
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct __Field {
    pub name_: String,
    pub description: Option<String>,
    pub type_: __Type,
    pub args: Vec<__InputValue>,
    pub deprecation_reason: Option<String>,
}

impl __Field {
    // name: String!
    pub fn name(&self) -> String {
        self.name_.clone()
    }

    // type: __Type!
    /// The literal introspection type, including type modifiers
    pub fn type_(&self) -> __Type {
        self.type_.clone()
    }

    pub fn get_arg(&self, name: &str) -> Option<__InputValue> {
        for arg in &self.args {
            if arg.name().as_str() == name {
                return Some(arg.clone());
            }
        }
        None
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct __InputValue {
    pub name_: String,
    pub type_: __Type,
    pub description: Option<String>,
    pub default_value: Option<String>,
}

impl __InputValue {
    // name: String!
    pub fn name(&self) -> String {
        self.name_.clone()
    }
}

#[allow(clippy::upper_case_acronyms)]
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Scalar {
    ID,
    Int,
    Float,
    String,
    Boolean,
}

impl ___Type for Scalar {
    fn kind(&self) -> __TypeKind {
        __TypeKind::SCALAR
    }

    fn name(&self) -> Option<String> {
        Some(format!("{self:?}"))
    }
}

/// A named output object type. Synthesized result types and the shared meta
/// type are both represented this way; hosts may register their own.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ObjectType {
    pub name: String,
    pub description: Option<String>,
    pub fields: Vec<__Field>,
}

impl ObjectType {
    pub fn field(&self, name: &str) -> Option<&__Field> {
        self.fields.iter().find(|f| f.name_ == name)
    }
}

impl ___Type for ObjectType {
    fn kind(&self) -> __TypeKind {
        __TypeKind::OBJECT
    }

    fn name(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn description(&self) -> Option<String> {
        self.description.clone()
    }

    fn fields(&self, _include_deprecated: bool) -> Option<Vec<__Field>> {
        Some(self.fields.clone())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct InputObjectType {
    pub name: String,
    pub description: Option<String>,
    pub input_fields: Vec<__InputValue>,
}

impl ___Type for InputObjectType {
    fn kind(&self) -> __TypeKind {
        __TypeKind::INPUT_OBJECT
    }

    fn name(&self) -> Option<String> {
        Some(self.name.clone())
    }

    fn description(&self) -> Option<String> {
        self.description.clone()
    }

    fn input_fields(&self) -> Option<Vec<__InputValue>> {
        Some(self.input_fields.clone())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct ListType {
    pub type_: Box<__Type>,
}

impl ___Type for ListType {
    fn kind(&self) -> __TypeKind {
        __TypeKind::LIST
    }

    fn of_type(&self) -> Option<__Type> {
        Some((*self.type_).clone())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct NonNullType {
    pub type_: Box<__Type>,
}

impl ___Type for NonNullType {
    fn kind(&self) -> __TypeKind {
        __TypeKind::NON_NULL
    }

    fn of_type(&self) -> Option<__Type> {
        Some((*self.type_).clone())
    }
}

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum __Type {
    Scalar(Scalar),
    Object(Rc<ObjectType>),
    InputObject(Rc<InputObjectType>),
    // Modifiers
    List(ListType),
    NonNull(NonNullType),
}

impl ___Type for __Type {
    // kind: __TypeKind!
    fn kind(&self) -> __TypeKind {
        match self {
            Self::Scalar(x) => x.kind(),
            Self::Object(x) => x.kind(),
            Self::InputObject(x) => x.kind(),
            Self::List(x) => x.kind(),
            Self::NonNull(x) => x.kind(),
        }
    }

    // name: String
    fn name(&self) -> Option<String> {
        match self {
            Self::Scalar(x) => x.name(),
            Self::Object(x) => x.name(),
            Self::InputObject(x) => x.name(),
            Self::List(x) => x.name(),
            Self::NonNull(x) => x.name(),
        }
    }

    // description: String
    fn description(&self) -> Option<String> {
        match self {
            Self::Scalar(x) => x.description(),
            Self::Object(x) => x.description(),
            Self::InputObject(x) => x.description(),
            Self::List(x) => x.description(),
            Self::NonNull(x) => x.description(),
        }
    }

    // # OBJECT and INTERFACE only
    // fields(includeDeprecated: Boolean = false): [__Field!]
    fn fields(&self, _include_deprecated: bool) -> Option<Vec<__Field>> {
        match self {
            Self::Scalar(x) => x.fields(_include_deprecated),
            Self::Object(x) => x.fields(_include_deprecated),
            Self::InputObject(x) => x.fields(_include_deprecated),
            Self::List(x) => x.fields(_include_deprecated),
            Self::NonNull(x) => x.fields(_include_deprecated),
        }
    }

    // # INPUT_OBJECT only
    // inputFields: [__InputValue!]
    fn input_fields(&self) -> Option<Vec<__InputValue>> {
        match self {
            Self::Scalar(x) => x.input_fields(),
            Self::Object(x) => x.input_fields(),
            Self::InputObject(x) => x.input_fields(),
            Self::List(x) => x.input_fields(),
            Self::NonNull(x) => x.input_fields(),
        }
    }

    // # NON_NULL and LIST only
    // ofType: __Type
    fn of_type(&self) -> Option<__Type> {
        match self {
            Self::List(x) => x.of_type(),
            Self::NonNull(x) => x.of_type(),
            _ => None,
        }
    }
}

impl __Type {
    /// Unwraps the List and NonNull modifiers to return a concrete __Type
    pub fn unmodified_type(&self) -> Self {
        match self {
            __Type::List(x) => x.type_.unmodified_type(),
            __Type::NonNull(x) => x.type_.unmodified_type(),
            _ => self.clone(),
        }
    }

    pub fn nullable_type(&self) -> Self {
        match self {
            __Type::NonNull(x) => (*x.type_).clone(),
            _ => self.clone(),
        }
    }

    /// Coerces a nullable type to its non-null form. Already non-null types
    /// are returned unchanged.
    pub fn non_null(&self) -> Self {
        match self {
            __Type::NonNull(_) => self.clone(),
            _ => __Type::NonNull(NonNullType {
                type_: Box::new(self.clone()),
            }),
        }
    }

    pub fn is_output_type(&self) -> bool {
        match self {
            __Type::InputObject(_) => false,
            __Type::List(x) => x.type_.is_output_type(),
            __Type::NonNull(x) => x.type_.is_output_type(),
            _ => true,
        }
    }
}

/// Reverse name-to-type lookup owned by the host schema framework.
///
/// The mapper only ever needs this single call; hosts with layered or
/// recursive registries are expected to flatten the indirection behind it.
pub trait TypeRegistry {
    fn type_by_name(&self, name: &str) -> Option<__Type>;
}

/// Plain map-backed registry. Suitable as the host-side registry for small
/// schemas and as the collaborator in tests.
#[derive(Default)]
pub struct SchemaTypes {
    types: HashMap<String, __Type>,
}

impl SchemaTypes {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers a named type. Wrapper types have no name and are rejected.
    pub fn register(&mut self, type_: __Type) -> bool {
        match type_.name() {
            Some(name) => {
                self.types.insert(name, type_);
                true
            }
            None => false,
        }
    }

    pub fn type_names(&self) -> Vec<String> {
        self.types.keys().cloned().sorted().collect()
    }
}

impl TypeRegistry for SchemaTypes {
    fn type_by_name(&self, name: &str) -> Option<__Type> {
        self.types.get(name).cloned()
    }
}
