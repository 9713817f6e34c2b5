//! Command dispatch table.
//!
//! User actions (clicks, key presses) are resolved to a [`Command`] through
//! a [`CommandTable`] built once at startup. Resolution is a pure lookup,
//! so bindings and handlers are tested independently.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

/// One handler the console can run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Command {
    /// Fetch and render the health panel.
    CheckHealth,
    /// Fetch server info into the response panel.
    ServerInfo,
    /// Fetch generated dummy data into the response panel.
    GenerateData,
    /// Post the message input to the echo endpoint.
    SendMessage,
    /// Fetch and render the message log.
    LoadMessages,
    /// Post the calculator inputs and render the result.
    Calculate,
}

impl Command {
    /// Every command.
    pub const ALL: [Self; 6] = [
        Self::CheckHealth,
        Self::ServerInfo,
        Self::GenerateData,
        Self::SendMessage,
        Self::LoadMessages,
        Self::Calculate,
    ];

    /// Kebab-case action name.
    pub const fn action(self) -> &'static str {
        match self {
            Self::CheckHealth => "check-health",
            Self::ServerInfo => "server-info",
            Self::GenerateData => "generate-data",
            Self::SendMessage => "send-message",
            Self::LoadMessages => "load-messages",
            Self::Calculate => "calculate",
        }
    }
}

impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.action())
    }
}

/// Returned when an action name matches no command.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown action: {0}")]
pub struct UnknownAction(pub String);

impl FromStr for Command {
    type Err = UnknownAction;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .into_iter()
            .find(|command| command.action() == s)
            .ok_or_else(|| UnknownAction(s.to_owned()))
    }
}

/// A user interaction with a page element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Trigger {
    /// The element was clicked.
    Click {
        /// Element id.
        target: String,
    },
    /// A key was pressed while the element had focus.
    KeyPress {
        /// Element id.
        target: String,
        /// Key name (e.g. `Enter`).
        key: String,
        /// Whether Shift was held.
        shift: bool,
    },
}

impl Trigger {
    /// A click on `target`.
    pub fn click(target: impl Into<String>) -> Self {
        Self::Click {
            target: target.into(),
        }
    }

    /// A key press on `target`.
    pub fn key_press(target: impl Into<String>, key: impl Into<String>, shift: bool) -> Self {
        Self::KeyPress {
            target: target.into(),
            key: key.into(),
            shift,
        }
    }
}

/// A key binding: `key` pressed on `target` without Shift.
#[derive(Debug, Clone, PartialEq, Eq)]
struct KeyBinding {
    target: String,
    key: String,
    command: Command,
}

/// Maps page interactions to commands.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CommandTable {
    clicks: BTreeMap<String, Command>,
    keys: Vec<KeyBinding>,
}

impl CommandTable {
    /// An empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// The bindings of the demo page: one button per command, plus Enter
    /// in the message box to send.
    pub fn standard() -> Self {
        Self::new()
            .bind_click("healthBtn", Command::CheckHealth)
            .bind_click("serverInfoBtn", Command::ServerInfo)
            .bind_click("generateDataBtn", Command::GenerateData)
            .bind_click("loadMessagesBtn", Command::LoadMessages)
            .bind_click("calculateBtn", Command::Calculate)
            .bind_click("sendMessageBtn", Command::SendMessage)
            .bind_key("messageInput", "Enter", Command::SendMessage)
    }

    /// Run `command` when `target` is clicked. Rebinding replaces.
    #[must_use]
    pub fn bind_click(mut self, target: impl Into<String>, command: Command) -> Self {
        self.clicks.insert(target.into(), command);
        self
    }

    /// Run `command` when `key` is pressed on `target` without Shift.
    #[must_use]
    pub fn bind_key(
        mut self,
        target: impl Into<String>,
        key: impl Into<String>,
        command: Command,
    ) -> Self {
        self.keys.push(KeyBinding {
            target: target.into(),
            key: key.into(),
            command,
        });
        self
    }

    /// The command bound to a trigger, if any.
    pub fn resolve(&self, trigger: &Trigger) -> Option<Command> {
        match trigger {
            Trigger::Click { target } => self.clicks.get(target).copied(),
            Trigger::KeyPress { target, key, shift } => {
                if *shift {
                    return None;
                }
                self.keys
                    .iter()
                    .find(|b| b.target == *target && b.key == *key)
                    .map(|b| b.command)
            }
        }
    }

    /// Element ids with a click binding, and their commands.
    pub fn click_bindings(&self) -> impl Iterator<Item = (&str, Command)> {
        self.clicks.iter().map(|(target, command)| (target.as_str(), *command))
    }
}
