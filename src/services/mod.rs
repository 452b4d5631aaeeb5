// Service exports
pub mod batch;
pub mod pool;
pub mod records;
pub mod rescore;
pub mod snapshot;

pub use batch::run_snapshot;
pub use pool::{pending_guests, prepare_host_pool};
pub use records::{to_match_records, MatchRecord};
pub use rescore::{evaluate_pair, PairEvaluation};
pub use snapshot::{load_snapshot, parse_snapshot, SnapshotError};
