pub mod batch_delete;
pub mod bulk_coordinator;
pub mod client_error;
pub mod ports;

pub use batch_delete::BatchDeleter;
pub use bulk_coordinator::{
    BulkAddSummary, BulkMembershipCoordinator, BulkRemoveSummary, DispatchMode,
};
pub use client_error::ClientError;
pub use ports::{MembershipAccessor, RecordDeleter};
