//! Wire types for the Pulse console.
//!
//! Every JSON body the console sends or decodes is defined here. The same
//! types are exported to `TypeScript` via `ts-rs` so a browser front-end
//! can share the contract.
//!
//! # Modules
//!
//! - [`health`] -- Health check payload
//! - [`messages`] -- Echo request and the message log
//! - [`calculator`] -- Calculator operations, request and outcome
//! - [`js`] -- Browser display and truthiness rules for loose fields

pub mod calculator;
pub mod health;
pub mod js;
pub mod messages;

pub use calculator::{
    CalculationOutcome, CalculationRequest, CalculationResult, Operation, UnknownOperation,
    operation_symbol,
};
pub use health::HealthStatus;
pub use js::{display as js_display, display_field, is_truthy};
pub use messages::{EchoRequest, LoggedMessage, MessageLog};
