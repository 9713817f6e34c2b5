//! The page the console renders into.
//!
//! [`Page`] abstracts the handful of document regions and input fields the
//! controller touches, so handlers can run against an in-process
//! [`MemoryPage`] in tests and in the terminal host instead of a live
//! document.

use std::collections::BTreeMap;
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use pulse_types::Operation;

/// A region whose inner HTML is replaced wholesale on every render.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Region {
    /// Health panel: status, service, timestamp, environment, region.
    HealthStatus,
    /// Shared response panel: title and raw JSON of the latest call.
    ApiResponse,
    /// Message log cards.
    MessagesList,
    /// Calculator result or error card.
    CalcResult,
}

impl Region {
    /// Every region, in page order.
    pub const ALL: [Self; 4] = [
        Self::HealthStatus,
        Self::ApiResponse,
        Self::MessagesList,
        Self::CalcResult,
    ];

    /// Element id of the region in the page markup.
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::HealthStatus => "healthStatus",
            Self::ApiResponse => "apiResponse",
            Self::MessagesList => "messagesList",
            Self::CalcResult => "calcResult",
        }
    }
}

/// A user-editable input.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Field {
    /// Message text box.
    MessageInput,
    /// Calculator left operand.
    CalcA,
    /// Calculator right operand.
    CalcB,
    /// Calculator operation selector.
    CalcOp,
}

impl Field {
    /// Every field, in page order.
    pub const ALL: [Self; 4] = [Self::MessageInput, Self::CalcA, Self::CalcB, Self::CalcOp];

    /// Element id of the field in the page markup.
    pub const fn element_id(self) -> &'static str {
        match self {
            Self::MessageInput => "messageInput",
            Self::CalcA => "calcA",
            Self::CalcB => "calcB",
            Self::CalcOp => "calcOp",
        }
    }

    /// Look a field up by its element id.
    pub fn from_element_id(id: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|field| field.element_id() == id)
    }
}

/// The document surface the controller reads from and writes to.
///
/// Methods take `&self`: concurrent handlers share one page and each write
/// simply replaces the previous content (last write wins).
pub trait Page: Send + Sync {
    /// Replace the inner HTML of a region.
    fn set_html(&self, region: Region, html: String);

    /// Current inner HTML of a region (empty if never rendered).
    fn html(&self, region: Region) -> String;

    /// Current value of an input field.
    fn value(&self, field: Field) -> String;

    /// Overwrite the value of an input field.
    fn set_value(&self, field: Field, value: String);

    /// Show a blocking warning to the user.
    fn alert(&self, message: &str);
}

/// Mutable state behind a [`MemoryPage`].
#[derive(Debug, Default)]
struct PageState {
    regions: BTreeMap<Region, String>,
    stamps: BTreeMap<Region, u64>,
    fields: BTreeMap<Field, String>,
    alerts: Vec<String>,
    revision: u64,
}

/// In-process [`Page`] that records everything written to it.
///
/// Every region write bumps a revision counter, so a host can ask which
/// regions changed since it last looked.
#[derive(Debug)]
pub struct MemoryPage {
    state: RwLock<PageState>,
}

impl Default for MemoryPage {
    fn default() -> Self {
        Self::new()
    }
}

impl MemoryPage {
    /// A blank page with the operation selector on its first option.
    pub fn new() -> Self {
        let mut state = PageState::default();
        state
            .fields
            .insert(Field::CalcOp, Operation::Add.as_str().to_owned());
        Self {
            state: RwLock::new(state),
        }
    }

    /// Every alert raised so far, oldest first.
    pub fn alerts(&self) -> Vec<String> {
        self.read().alerts.clone()
    }

    /// How many region writes have happened in total.
    pub fn revision(&self) -> u64 {
        self.read().revision
    }

    /// Regions written after `revision`, with their current HTML.
    pub fn changed_since(&self, revision: u64) -> Vec<(Region, String)> {
        let state = self.read();
        state
            .stamps
            .iter()
            .filter(|(_, stamp)| **stamp > revision)
            .map(|(region, _)| {
                (
                    *region,
                    state.regions.get(region).cloned().unwrap_or_default(),
                )
            })
            .collect()
    }

    fn read(&self) -> RwLockReadGuard<'_, PageState> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, PageState> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl Page for MemoryPage {
    fn set_html(&self, region: Region, html: String) {
        let mut state = self.write();
        state.revision = state.revision.saturating_add(1);
        let revision = state.revision;
        state.stamps.insert(region, revision);
        state.regions.insert(region, html);
    }

    fn html(&self, region: Region) -> String {
        self.read().regions.get(&region).cloned().unwrap_or_default()
    }

    fn value(&self, field: Field) -> String {
        self.read().fields.get(&field).cloned().unwrap_or_default()
    }

    fn set_value(&self, field: Field, value: String) {
        self.write().fields.insert(field, value);
    }

    fn alert(&self, message: &str) {
        self.write().alerts.push(message.to_owned());
    }
}
