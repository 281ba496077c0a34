/// GraphQL field and argument name constants used throughout the codebase

/// Fields of a synthesized paginated-result type
pub mod result {
    pub const DATA: &str = "data";
    pub const META: &str = "meta";
}

/// Pagination argument names on the `data` field
pub mod pagination {
    pub const LIMIT: &str = "limit";
    pub const OFFSET: &str = "offset";
}

/// Fields of the shared metadata type
pub mod meta {
    pub const TOTAL: &str = "total";
    pub const CLASS: &str = "class";
    pub const KEY: &str = "key";
    pub const NAME: &str = "name";
}
