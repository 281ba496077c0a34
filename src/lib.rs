//! On-demand GraphQL output types for paginated, countable query results.
//!
//! Given an element type `T` registered with the host schema, the mapper
//! synthesizes (and memoizes) an object type
//! `DB_QUERY_<T> { data(limit: Int, offset: Int): [T!]!, meta: DB_META! }`
//! together with one shared `DB_META` metadata type. Execution stays with the
//! host's query abstraction; this crate only shapes the schema, enforces the
//! `offset`-requires-`limit` rule at field resolution, and answers the
//! registry's name-to-type questions for the names it owns.

pub mod codec;
pub mod constants;
mod error;
mod factory;
pub mod graphql;
pub mod gson;
mod mapper;
mod resolve;
mod result;

pub use error::{MapperError, MapperResult, CLIENT_ERROR_CATEGORY};
pub use factory::QueryResultTypeMapperFactory;
pub use mapper::{QueryResultTypeMapper, QUERY_RESULT_CLASS};
pub use resolve::{resolve_data, resolve_meta, MetaRecord};
pub use result::{ModelClass, QueryResult};
