//! Terminal host for the Pulse console.
//!
//! Drives a [`Console`] over HTTP with an in-memory page. Commands are read
//! one per line from stdin:
//!
//! ```text
//! check-health                 run a command by action name
//! click calculateBtn           click a page element
//! set calcA 10                 set an input field
//! show                         print every region
//! quit                         stop (EOF and Ctrl-C also stop)
//! ```
//!
//! After each line the regions that changed, and any new alerts, are
//! printed to stdout. Logs go to stderr.

use std::sync::Arc;

use anyhow::Context as _;
use pulse_console::dispatch::UnknownAction;
use pulse_console::{
    Command, CommandTable, Console, ConsoleConfig, Field, HttpBackend, MemoryPage, Page, Region,
    Trigger,
};
use tokio::io::{AsyncBufReadExt, AsyncWriteExt, BufReader, Stdout};
use tracing::{debug, info};
use tracing_subscriber::EnvFilter;

type HttpConsole = Console<HttpBackend, MemoryPage>;

/// One parsed line of input.
#[derive(Debug, PartialEq, Eq)]
enum Input {
    Run(Command),
    Click(String),
    Set(Field, String),
    Show,
    Quit,
}

#[derive(Debug, PartialEq, Eq, thiserror::Error)]
enum InputError {
    #[error("unknown command: {0}")]
    UnknownCommand(String),

    #[error("unknown field: {0}")]
    UnknownField(String),

    #[error("usage: {0}")]
    Usage(&'static str),
}

impl From<UnknownAction> for InputError {
    fn from(e: UnknownAction) -> Self {
        Self::UnknownCommand(e.0)
    }
}

/// Parse one line. Blank lines parse to `None`.
fn parse_input(line: &str) -> Result<Option<Input>, InputError> {
    let line = line.trim();
    if line.is_empty() {
        return Ok(None);
    }
    let (word, rest) = line
        .split_once(char::is_whitespace)
        .map_or((line, ""), |(word, rest)| (word, rest.trim_start()));

    let input = match word {
        "quit" | "exit" => Input::Quit,
        "show" => Input::Show,
        "click" => {
            if rest.is_empty() {
                return Err(InputError::Usage("click <elementId>"));
            }
            Input::Click(rest.to_owned())
        }
        "set" => {
            let (id, value) = rest.split_once(' ').unwrap_or((rest, ""));
            if id.is_empty() {
                return Err(InputError::Usage("set <fieldId> <value>"));
            }
            let field =
                Field::from_element_id(id).ok_or_else(|| InputError::UnknownField(id.to_owned()))?;
            Input::Set(field, value.to_owned())
        }
        action => Input::Run(action.parse()?),
    };
    Ok(Some(input))
}

/// Feeds input to the console and prints what changed.
struct Host {
    console: Arc<HttpConsole>,
    table: CommandTable,
    revision: u64,
    alerts_seen: usize,
    out: Stdout,
}

impl Host {
    fn new(console: Arc<HttpConsole>) -> Self {
        Self {
            console,
            table: CommandTable::standard(),
            revision: 0,
            alerts_seen: 0,
            out: tokio::io::stdout(),
        }
    }

    async fn handle(&mut self, input: Input) -> std::io::Result<()> {
        match input {
            Input::Run(command) => self.console.dispatch(command).await,
            Input::Click(target) => {
                let trigger = Trigger::click(target.as_str());
                if self.console.fire(&self.table, &trigger).await.is_none() {
                    self.say(&format!("nothing is bound to {target}")).await?;
                }
            }
            Input::Set(field, value) => {
                debug!(field = field.element_id(), "field set");
                self.console.page().set_value(field, value);
            }
            Input::Show => {
                for region in Region::ALL {
                    let html = self.console.page().html(region);
                    self.print_region(region, &html).await?;
                }
            }
            Input::Quit => {}
        }
        self.print_changes().await
    }

    /// Print regions written and alerts raised since the last call.
    async fn print_changes(&mut self) -> std::io::Result<()> {
        let page = self.console.page();
        let revision = page.revision();
        let changed = page.changed_since(self.revision);
        let alerts = page.alerts();
        self.revision = revision;

        for (region, html) in changed {
            self.print_region(region, &html).await?;
        }
        for alert in alerts.get(self.alerts_seen..).unwrap_or_default() {
            self.say(&format!("alert: {alert}")).await?;
        }
        self.alerts_seen = alerts.len();
        self.out.flush().await
    }

    async fn print_region(&mut self, region: Region, html: &str) -> std::io::Result<()> {
        let block = format!("--- #{} ---\n{html}\n", region.element_id());
        self.out.write_all(block.as_bytes()).await
    }

    async fn say(&mut self, line: &str) -> std::io::Result<()> {
        self.out.write_all(format!("{line}\n").as_bytes()).await
    }
}

/// Application entry point.
///
/// Initializes logging, loads configuration from environment variables,
/// starts the console (initial health check, message load and the periodic
/// health check), then serves stdin until `quit`, EOF or Ctrl-C.
///
/// # Errors
///
/// Returns an error if configuration is invalid or stdin/stdout fail.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    // Initialize structured logging
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .with_target(true)
        .with_writer(std::io::stderr)
        .init();

    info!("pulse-console starting");

    // Load configuration from environment
    let config = ConsoleConfig::from_env().context("failed to load configuration")?;
    info!(
        base_url = %config.base_url,
        health_interval_secs = config.health_interval.as_secs(),
        request_timeout_ms = ?config.request_timeout.map(|t| t.as_millis()),
        timestamp_format = %config.timestamp_format,
        "configuration loaded"
    );

    let backend = HttpBackend::new(&config).context("failed to create HTTP backend")?;
    let console = Arc::new(
        Console::new(backend, MemoryPage::new(), &config).context("failed to build console")?,
    );

    let ticker = Arc::clone(&console).start().await;
    let mut host = Host::new(console);
    host.print_changes().await.context("failed to write to stdout")?;

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    loop {
        let line = tokio::select! {
            line = lines.next_line() => line.context("failed to read stdin")?,
            _ = tokio::signal::ctrl_c() => {
                info!("interrupted");
                None
            }
        };
        let Some(line) = line else {
            break;
        };

        match parse_input(&line) {
            Ok(None) => {}
            Ok(Some(Input::Quit)) => break,
            Ok(Some(input)) => host
                .handle(input)
                .await
                .context("failed to write to stdout")?,
            Err(e) => host
                .say(&e.to_string())
                .await
                .context("failed to write to stdout")?,
        }
    }

    ticker.shutdown().await;
    info!("pulse-console stopped");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_action_names() {
        assert_eq!(
            parse_input("check-health"),
            Ok(Some(Input::Run(Command::CheckHealth)))
        );
        assert_eq!(
            parse_input("  calculate  "),
            Ok(Some(Input::Run(Command::Calculate)))
        );
        assert_eq!(
            parse_input("reboot"),
            Err(InputError::UnknownCommand("reboot".to_owned()))
        );
    }

    #[test]
    fn parses_host_commands() {
        assert_eq!(parse_input(""), Ok(None));
        assert_eq!(parse_input("show"), Ok(Some(Input::Show)));
        assert_eq!(parse_input("quit"), Ok(Some(Input::Quit)));
        assert_eq!(
            parse_input("click healthBtn"),
            Ok(Some(Input::Click("healthBtn".to_owned())))
        );
        assert_eq!(
            parse_input("click"),
            Err(InputError::Usage("click <elementId>"))
        );
    }

    #[test]
    fn set_keeps_the_rest_of_the_line() {
        assert_eq!(
            parse_input("set messageInput hello there"),
            Ok(Some(Input::Set(Field::MessageInput, "hello there".to_owned())))
        );
        assert_eq!(
            parse_input("set calcA"),
            Ok(Some(Input::Set(Field::CalcA, String::new())))
        );
        assert_eq!(
            parse_input("set nowhere 1"),
            Err(InputError::UnknownField("nowhere".to_owned()))
        );
    }
}
