//! Request/render controller for the Pulse demo API.
//!
//! The console turns user commands into API requests and renders the
//! responses into a small set of page regions:
//!
//! - **Health panel** refreshed at startup and on a fixed interval
//! - **Response panel** showing the title and raw JSON of the latest call
//! - **Message log** reloaded after every successful echo
//! - **Calculator card** with the result equation or the server's error
//!
//! # Architecture
//!
//! ```text
//! Trigger --> CommandTable --> Console --> Backend (HTTP) --> Renderer --> Page
//!                                 ^
//!                           HealthTicker
//! ```
//!
//! [`Console`] holds no state between commands beyond what is on the
//! [`Page`]. Every handler renders its own failures; nothing is retried.
//!
//! [`Console`]: console::Console
//! [`Page`]: page::Page

pub mod backend;
pub mod config;
pub mod console;
pub mod dispatch;
pub mod error;
pub mod input;
pub mod localize;
pub mod page;
pub mod render;
pub mod ticker;

#[cfg(test)]
mod testing;

// Re-export primary types for convenience.
pub use backend::{ApiRequest, Backend, Endpoint, HttpBackend};
pub use config::ConsoleConfig;
pub use console::Console;
pub use dispatch::{Command, CommandTable, Trigger};
pub use error::ConsoleError;
pub use page::{Field, MemoryPage, Page, Region};
pub use ticker::HealthTicker;
