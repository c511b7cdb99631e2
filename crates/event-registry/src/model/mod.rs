//! Domain data structures.
//!
//! Plain records and their create/update payloads. The actor behaviour for each record
//! lives in the matching `*_actor` module.

pub mod event;
pub mod id;
pub mod registration;
pub mod speaker;
pub mod user;

pub use event::*;
pub use id::*;
pub use registration::*;
pub use speaker::*;
pub use user::*;
