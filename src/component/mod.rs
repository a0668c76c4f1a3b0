//! Lead entry form as a UI-framework independent state machine.
//!
//! The component owns the draft and a cached copy of the lead list. It reaches
//! the record store through a [`gateway::LeadsGateway`]: directly in client
//! mode, over HTTP in server mode.

pub mod form;
pub mod gateway;
#[cfg(feature = "client")]
pub mod http;
pub mod notification;

pub use form::{FormState, LeadFormComponent, SubmitError};
pub use gateway::{GatewayError, LeadsGateway, StoreGateway};
pub use notification::{DISMISS_AFTER, Notification, NotificationKind};
