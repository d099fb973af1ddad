// Data Serve API - Core Library
// Exposes the pagination planner, record synthesizer, and static API
// documents for use by the server binary and tests

pub mod generator;
pub mod pagination;
pub mod records;
pub mod schema;

// Re-export commonly used types
pub use generator::{generate_multi_date_record, generate_record};
pub use pagination::{
    plan, PageEnvelope, PagePlan, PageQuery, PageRequest, ParamError, DEFAULT_PAGE,
    DEFAULT_PAGE_SIZE, DEFAULT_TOTAL_RECORDS, MAX_PAGE_SIZE, MAX_TOTAL_RECORDS,
};
pub use records::{DataRecord, MultiDateRecord, RecordMetadata};
pub use schema::{endpoint_catalog, record_schema};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
