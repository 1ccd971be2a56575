//! Cross-context message handling.
pub mod error;
pub mod messages;
pub mod router;

pub use error::map_err;
pub use messages::{HostMessage, HostResponse, SavePayload};
pub use router::MessageRouter;
