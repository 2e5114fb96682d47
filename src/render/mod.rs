//! Output slots of the customer page and the outcome renderer.

pub mod message;
pub mod outcome;
pub mod table;

pub use message::MessageSlot;
pub use outcome::render_outcome;
pub use table::ResultsTable;

/// Notice shown after any successful action except delete.
pub const SUCCESS_NOTICE: &str = "Success";
/// Notice shown after a successful delete.
pub const DELETED_NOTICE: &str = "Customer Deleted!";
/// Notice shown after any failed delete, whatever the server said.
pub const SERVER_ERROR_NOTICE: &str = "Server error!";
