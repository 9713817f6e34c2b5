//! The console controller.
//!
//! [`Console`] owns a [`Backend`], a [`Page`] and the renderer. Each
//! handler is one independent unit of work: read inputs, make at most one
//! request (plus the message refresh after an echo), render the outcome.
//! Handlers never return errors; every failure is rendered and logged.
//!
//! Concurrent handlers are allowed. Writes to the same region are not
//! sequenced, so the last handler to finish owns the region.

use std::sync::Arc;
use std::time::Duration;

use pulse_types::{CalculationOutcome, CalculationRequest, EchoRequest, HealthStatus, MessageLog};
use serde::de::DeserializeOwned;
use serde_json::{Value, json};
use tracing::{debug, error, info, warn};

use crate::backend::{ApiRequest, Backend, Endpoint};
use crate::config::ConsoleConfig;
use crate::dispatch::{Command, CommandTable, Trigger};
use crate::error::ConsoleError;
use crate::input::parse_float;
use crate::localize::Localizer;
use crate::page::{Field, Page, Region};
use crate::render::Renderer;
use crate::ticker::HealthTicker;

/// Alert raised when sending a blank message.
pub const EMPTY_MESSAGE_ALERT: &str = "Please enter a message";

/// Alert raised when calculating with an operand missing.
pub const MISSING_OPERANDS_ALERT: &str = "Please enter both numbers";

/// Drives the page from user commands and API responses.
pub struct Console<B, P> {
    backend: B,
    page: P,
    renderer: Renderer,
    localizer: Localizer,
    health_interval: Duration,
}

impl<B: Backend, P: Page> Console<B, P> {
    /// Build a console over a backend and a page.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Config`] for a zero health interval or an
    /// invalid timestamp pattern, and [`ConsoleError::Template`] if the
    /// embedded templates fail to load.
    pub fn new(backend: B, page: P, config: &ConsoleConfig) -> Result<Self, ConsoleError> {
        if config.health_interval.is_zero() {
            return Err(ConsoleError::Config(
                "health interval must be greater than zero".to_owned(),
            ));
        }
        Ok(Self {
            backend,
            page,
            renderer: Renderer::new()?,
            localizer: Localizer::new(&config.timestamp_format)?,
            health_interval: config.health_interval,
        })
    }

    /// The page being driven.
    pub const fn page(&self) -> &P {
        &self.page
    }

    /// The backend requests go through.
    pub const fn backend(&self) -> &B {
        &self.backend
    }

    /// Period of the automatic health check.
    pub const fn health_interval(&self) -> Duration {
        self.health_interval
    }

    /// Run the handler for `command`.
    pub async fn dispatch(&self, command: Command) {
        debug!(command = %command, "dispatching command");
        match command {
            Command::CheckHealth => self.check_health().await,
            Command::ServerInfo => self.get_server_info().await,
            Command::GenerateData => self.generate_data().await,
            Command::SendMessage => self.send_message().await,
            Command::LoadMessages => self.load_messages().await,
            Command::Calculate => self.calculate().await,
        }
    }

    /// Resolve `trigger` through `table` and run the bound handler.
    ///
    /// Returns the command that ran, or `None` if nothing is bound.
    pub async fn fire(&self, table: &CommandTable, trigger: &Trigger) -> Option<Command> {
        let Some(command) = table.resolve(trigger) else {
            debug!(?trigger, "no command bound");
            return None;
        };
        self.dispatch(command).await;
        Some(command)
    }

    /// Refresh the health panel.
    pub async fn check_health(&self) {
        self.paint(Region::HealthStatus, self.renderer.loading());

        match self
            .fetch::<HealthStatus>(ApiRequest::get(Endpoint::Health))
            .await
        {
            Ok((raw, health)) => {
                debug!(status = %health.status, region = ?health.region, "health check succeeded");
                self.paint(
                    Region::HealthStatus,
                    self.renderer.health(&health, &self.localizer),
                );
                self.show_response("Health Check", &raw);
            }
            Err(e) => {
                warn!(error = %e, "health check failed");
                let message = e.to_string();
                self.paint(Region::HealthStatus, self.renderer.health_error(&message));
                self.show_error("Health Check Error", &message);
            }
        }
    }

    /// Show the server info payload in the response panel.
    pub async fn get_server_info(&self) {
        self.show_raw(Endpoint::ServerInfo, "Server Info", "Server Info Error")
            .await;
    }

    /// Show a batch of generated data in the response panel.
    pub async fn generate_data(&self) {
        self.show_raw(Endpoint::GenerateData, "Generated Data", "Generate Data Error")
            .await;
    }

    /// Post the message input to the echo endpoint.
    ///
    /// A blank input raises [`EMPTY_MESSAGE_ALERT`] and sends nothing. On
    /// success the input is cleared and the message log reloaded; on
    /// failure the input is left as typed.
    pub async fn send_message(&self) {
        let Some(echo) = EchoRequest::from_input(&self.page.value(Field::MessageInput)) else {
            debug!("blank message, not sending");
            self.page.alert(EMPTY_MESSAGE_ALERT);
            return;
        };

        let reply = match ApiRequest::post(Endpoint::Echo, &echo) {
            Ok(request) => self.backend.send(request).await,
            Err(e) => Err(e),
        };

        match reply {
            Ok(raw) => {
                info!(length = echo.message.len(), "message sent");
                self.show_response("Echo Response", &raw);
                self.page.set_value(Field::MessageInput, String::new());
                self.load_messages().await;
            }
            Err(e) => {
                warn!(error = %e, "echo failed");
                self.show_error("Echo Error", &e.to_string());
            }
        }
    }

    /// Reload the message log.
    pub async fn load_messages(&self) {
        match self
            .fetch::<MessageLog>(ApiRequest::get(Endpoint::Messages))
            .await
        {
            Ok((raw, log)) => {
                debug!(count = log.messages.len(), "message log loaded");
                self.paint(
                    Region::MessagesList,
                    self.renderer.messages(&log.messages, &self.localizer),
                );
                self.show_response("Messages Loaded", &raw);
            }
            Err(e) => {
                warn!(error = %e, "loading messages failed");
                self.show_error("Messages Error", &e.to_string());
            }
        }
    }

    /// Post the calculator inputs and render the result card.
    ///
    /// Either operand empty raises [`MISSING_OPERANDS_ALERT`] and sends
    /// nothing. Operands are otherwise sent as parsed, `NaN` included.
    pub async fn calculate(&self) {
        let a = self.page.value(Field::CalcA);
        let b = self.page.value(Field::CalcB);
        if a.is_empty() || b.is_empty() {
            debug!("operand missing, not calculating");
            self.page.alert(MISSING_OPERANDS_ALERT);
            return;
        }

        let request = CalculationRequest::new(
            parse_float(&a),
            parse_float(&b),
            self.page.value(Field::CalcOp),
        );
        let outcome = match ApiRequest::post(Endpoint::Calculate, &request) {
            Ok(api_request) => self.fetch::<CalculationOutcome>(api_request).await,
            Err(e) => Err(e),
        };

        match outcome {
            Ok((raw, CalculationOutcome::Computed(result))) => {
                debug!(operation = ?result.operation, "calculation succeeded");
                self.paint(
                    Region::CalcResult,
                    self.renderer.calculation(&result, &self.localizer),
                );
                self.show_response("Calculation", &raw);
            }
            Ok((raw, CalculationOutcome::Failed { error })) => {
                warn!(operation = %request.operation, error = %error, "calculation rejected");
                self.paint(
                    Region::CalcResult,
                    self.renderer.calculation_error("Calculation Error", &error),
                );
                self.show_response("Calculation", &raw);
            }
            Err(e) => {
                warn!(error = %e, "calculation failed");
                let message = e.to_string();
                self.paint(
                    Region::CalcResult,
                    self.renderer.calculation_error("Error", &message),
                );
                self.show_error("Calculation Error", &message);
            }
        }
    }

    /// GET `endpoint` and show the raw body in the response panel.
    async fn show_raw(&self, endpoint: Endpoint, title: &str, error_title: &str) {
        match self.backend.send(ApiRequest::get(endpoint)).await {
            Ok(raw) => self.show_response(title, &raw),
            Err(e) => {
                warn!(endpoint = %endpoint, error = %e, "request failed");
                self.show_error(error_title, &e.to_string());
            }
        }
    }

    /// Send a request and decode the body as `T`, keeping the raw JSON
    /// for the response panel.
    async fn fetch<T: DeserializeOwned>(
        &self,
        request: ApiRequest,
    ) -> Result<(Value, T), ConsoleError> {
        let endpoint = request.endpoint;
        let raw = self.backend.send(request).await?;
        let typed = T::deserialize(&raw)
            .map_err(|e| ConsoleError::Decode(format!("unexpected {endpoint} body: {e}")))?;
        Ok((raw, typed))
    }

    fn show_response(&self, title: &str, body: &Value) {
        self.paint(Region::ApiResponse, self.renderer.response(title, body));
    }

    fn show_error(&self, title: &str, message: &str) {
        self.show_response(title, &json!({ "error": message }));
    }

    fn paint(&self, region: Region, html: Result<String, ConsoleError>) {
        match html {
            Ok(html) => self.page.set_html(region, html),
            Err(e) => error!(region = region.element_id(), error = %e, "render failed"),
        }
    }
}

impl<B: Backend + 'static, P: Page + 'static> Console<B, P> {
    /// Start the console: schedule the periodic health check, then run the
    /// initial health check and message load concurrently.
    ///
    /// The first periodic check fires one full interval after this call.
    /// Keep the returned ticker alive for as long as checks should run.
    pub async fn start(self: Arc<Self>) -> HealthTicker {
        info!(
            health_interval_secs = self.health_interval.as_secs(),
            "console starting"
        );
        let ticker = HealthTicker::spawn(Arc::clone(&self));
        futures::join!(self.check_health(), self.load_messages());
        ticker
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::page::MemoryPage;
    use crate::testing::{FakeBackend, server_reply, test_config, unescape};

    fn console(backend: FakeBackend) -> Console<FakeBackend, MemoryPage> {
        Console::new(backend, MemoryPage::new(), &test_config()).unwrap()
    }

    fn with_messages(messages: Value) -> FakeBackend {
        FakeBackend::new(move |request| match request.endpoint {
            Endpoint::Messages => Ok(json!({ "count": 0, "messages": messages.clone() })),
            _ => server_reply(request),
        })
    }

    #[test]
    fn zero_interval_is_rejected() {
        let config = ConsoleConfig {
            health_interval: Duration::ZERO,
            ..test_config()
        };
        let result = Console::new(FakeBackend::healthy(), MemoryPage::new(), &config);
        assert!(matches!(result, Err(ConsoleError::Config(_))));
    }

    #[tokio::test]
    async fn health_success_renders_uppercased_green_status() {
        let console = console(FakeBackend::healthy());
        console.check_health().await;

        let html = console.page().html(Region::HealthStatus);
        assert!(html.contains(r#"style="color: #28a745">HEALTHY<"#));
        assert!(html.contains("Render Test App"));
        assert!(html.contains("oregon"));
        assert!(console.page().html(Region::ApiResponse).contains("<h4>Health Check</h4>"));
        assert_eq!(console.backend().count(Endpoint::Health), 1);
    }

    #[tokio::test]
    async fn health_transport_failure_renders_red_error() {
        let console = console(FakeBackend::unreachable());
        console.check_health().await;

        let html = console.page().html(Region::HealthStatus);
        assert!(html.contains(r#"style="color: #dc3545">ERROR<"#));
        assert!(html.contains("connection refused"));
        assert!(!html.contains("Loading"));
        assert!(
            console
                .page()
                .html(Region::ApiResponse)
                .contains("<h4>Health Check Error</h4>")
        );
    }

    #[tokio::test]
    async fn health_body_with_only_status_renders_green() {
        let console = console(FakeBackend::new(|_| Ok(json!({ "status": "healthy" }))));
        console.check_health().await;

        let html = console.page().html(Region::HealthStatus);
        assert!(html.contains(r#"style="color: #28a745">HEALTHY<"#));
        assert!(html.contains(r#"<span class="value">undefined</span>"#));
        assert!(!html.contains(">ERROR<"));
        assert!(
            console
                .page()
                .html(Region::ApiResponse)
                .starts_with("<h4>Health Check</h4>")
        );
    }

    #[tokio::test]
    async fn health_body_without_status_renders_error() {
        let console = console(FakeBackend::new(|_| Ok(json!({ "region": "oregon" }))));
        console.check_health().await;

        let html = console.page().html(Region::HealthStatus);
        assert!(html.contains(">ERROR<"));
        assert!(!html.contains("HEALTHY"));
    }

    #[tokio::test]
    async fn server_info_and_generated_data_show_raw_json() {
        let console = console(FakeBackend::healthy());

        console.get_server_info().await;
        let html = unescape(&console.page().html(Region::ApiResponse));
        assert!(html.starts_with("<h4>Server Info</h4>"));
        assert!(html.contains("\"platform\": \"Render.com\""));

        console.generate_data().await;
        let html = unescape(&console.page().html(Region::ApiResponse));
        assert!(html.starts_with("<h4>Generated Data</h4>"));
        assert!(html.contains("\"category\": \"B\""));
    }

    #[tokio::test]
    async fn raw_endpoint_failure_shows_error_title() {
        let console = console(FakeBackend::unreachable());
        console.generate_data().await;
        let html = unescape(&console.page().html(Region::ApiResponse));
        assert!(html.starts_with("<h4>Generate Data Error</h4>"));
        assert!(html.contains("\"error\": \"request failed: connection refused\""));
    }

    #[tokio::test]
    async fn blank_message_alerts_and_sends_nothing() {
        let console = console(FakeBackend::healthy());
        console
            .page()
            .set_value(Field::MessageInput, "   \t ".to_owned());

        console.send_message().await;

        assert!(console.backend().requests().is_empty());
        assert_eq!(console.page().alerts(), vec![EMPTY_MESSAGE_ALERT.to_owned()]);
        assert_eq!(console.page().value(Field::MessageInput), "   \t ");
    }

    #[tokio::test]
    async fn message_is_posted_trimmed_then_log_reloaded() {
        let console = console(FakeBackend::healthy());
        console
            .page()
            .set_value(Field::MessageInput, "  hello  ".to_owned());

        console.send_message().await;

        let requests = console.backend().requests();
        assert_eq!(
            requests,
            vec![
                ApiRequest {
                    endpoint: Endpoint::Echo,
                    body: Some(json!({ "message": "hello" })),
                },
                ApiRequest::get(Endpoint::Messages),
            ]
        );
        assert_eq!(console.page().value(Field::MessageInput), "");
        assert_eq!(
            console
                .page()
                .html(Region::MessagesList)
                .matches(r#"class="message-item""#)
                .count(),
            1
        );
    }

    #[tokio::test]
    async fn failed_echo_keeps_input() {
        let console = console(FakeBackend::unreachable());
        console
            .page()
            .set_value(Field::MessageInput, "hello".to_owned());

        console.send_message().await;

        assert_eq!(console.page().value(Field::MessageInput), "hello");
        assert_eq!(console.backend().count(Endpoint::Messages), 0);
        assert!(
            console
                .page()
                .html(Region::ApiResponse)
                .starts_with("<h4>Echo Error</h4>")
        );
    }

    #[tokio::test]
    async fn empty_log_renders_placeholder() {
        let console = console(with_messages(json!([])));
        console.load_messages().await;

        let html = console.page().html(Region::MessagesList);
        assert!(html.contains("No messages yet"));
        assert_eq!(html.matches(r#"class="message-item""#).count(), 0);
        assert!(
            console
                .page()
                .html(Region::ApiResponse)
                .starts_with("<h4>Messages Loaded</h4>")
        );
    }

    #[tokio::test]
    async fn log_renders_one_card_per_message_in_order() {
        let console = console(with_messages(json!([
            { "id": 1111, "timestamp": "2025-03-01T09:15:00", "message": "first" },
            { "id": 2222, "timestamp": "2025-03-01T09:16:00", "message": "second" },
            { "id": 3333, "timestamp": "2025-03-01T09:17:00", "message": "third" },
        ])));
        console.load_messages().await;

        let html = unescape(&console.page().html(Region::MessagesList));
        assert_eq!(html.matches(r#"class="message-item""#).count(), 3);
        let positions: Vec<Option<usize>> = ["ID: 1111", "ID: 2222", "ID: 3333"]
            .iter()
            .map(|id| html.find(id))
            .collect();
        assert!(positions.iter().all(Option::is_some));
        assert!(positions.windows(2).all(|w| w.first() < w.get(1)));
        assert!(html.contains("3/1/2025, 9:16:00 AM"));
    }

    #[tokio::test]
    async fn odd_log_entries_render_as_cards() {
        let console = console(with_messages(json!([
            { "id": 1, "timestamp": "2025-03-01T09:15:00", "message": "text" },
            { "id": 2, "timestamp": "2025-03-01T09:15:00", "message": null },
            { "id": "three", "message": 42 },
        ])));
        console.load_messages().await;

        let html = console.page().html(Region::MessagesList);
        assert_eq!(html.matches(r#"class="message-item""#).count(), 3);
        assert!(html.contains(r#"<div class="message-text">null</div>"#));
        assert!(html.contains("ID: three"));
        assert!(html.contains(r#"<div class="message-text">42</div>"#));
        assert!(html.contains("Invalid Date"));
        assert!(
            console
                .page()
                .html(Region::ApiResponse)
                .starts_with("<h4>Messages Loaded</h4>")
        );
    }

    #[tokio::test]
    async fn null_log_entry_fails_the_load() {
        let console = console(with_messages(json!([{ "id": 1, "message": "ok" }, null])));
        console.load_messages().await;

        assert_eq!(console.page().html(Region::MessagesList), "");
        assert!(
            console
                .page()
                .html(Region::ApiResponse)
                .starts_with("<h4>Messages Error</h4>")
        );
    }

    #[tokio::test]
    async fn divide_sends_numbers_and_renders_equation() {
        let console = console(FakeBackend::healthy());
        console.page().set_value(Field::CalcA, "10".to_owned());
        console.page().set_value(Field::CalcB, "2".to_owned());
        console
            .page()
            .set_value(Field::CalcOp, "divide".to_owned());

        console.calculate().await;

        assert_eq!(
            console.backend().requests(),
            vec![ApiRequest {
                endpoint: Endpoint::Calculate,
                body: Some(json!({ "a": 10, "b": 2, "operation": "divide" })),
            }]
        );
        let html = unescape(&console.page().html(Region::CalcResult));
        assert!(html.contains("10 \u{00f7} 2 = 5"));
        assert!(html.contains("Calculated at 3/1/2025, 9:15:00 AM"));
        assert!(
            console
                .page()
                .html(Region::ApiResponse)
                .starts_with("<h4>Calculation</h4>")
        );
    }

    #[tokio::test]
    async fn rejected_calculation_shows_message_without_result() {
        let console = console(FakeBackend::new(|_| Ok(json!({ "error": "Division by zero" }))));
        console.page().set_value(Field::CalcA, "1".to_owned());
        console.page().set_value(Field::CalcB, "0".to_owned());
        console
            .page()
            .set_value(Field::CalcOp, "divide".to_owned());

        console.calculate().await;

        let html = console.page().html(Region::CalcResult);
        assert!(html.contains("<h3>Calculation Error</h3>"));
        assert!(html.contains("Division by zero"));
        assert!(!html.contains(" = "));
        assert!(
            console
                .page()
                .html(Region::ApiResponse)
                .starts_with("<h4>Calculation</h4>")
        );
    }

    #[tokio::test]
    async fn empty_error_renders_result_card() {
        let console = console(FakeBackend::new(|_| {
            Ok(json!({ "error": "", "operation": "add", "a": 1, "b": 2, "result": 3 }))
        }));
        console.page().set_value(Field::CalcA, "1".to_owned());
        console.page().set_value(Field::CalcB, "2".to_owned());

        console.calculate().await;

        let html = console.page().html(Region::CalcResult);
        assert!(html.contains("<h3>Result</h3>"));
        assert!(html.contains("<p>1 + 2 = 3</p>"));
        assert!(!html.contains("Calculation Error"));
    }

    #[tokio::test]
    async fn unknown_operation_is_echoed_in_equation() {
        let console = console(FakeBackend::new(|request| {
            let operation = request.body.as_ref().and_then(|b| b.get("operation")).cloned();
            Ok(json!({ "operation": operation, "a": 7, "b": 2, "result": 1 }))
        }));
        console.page().set_value(Field::CalcA, "7".to_owned());
        console.page().set_value(Field::CalcB, "2".to_owned());
        console
            .page()
            .set_value(Field::CalcOp, "modulo".to_owned());

        console.calculate().await;

        let html = console.page().html(Region::CalcResult);
        assert!(html.contains("<p>7 modulo 2 = 1</p>"));
    }

    #[tokio::test]
    async fn unparseable_operand_is_sent_as_null() {
        let console = console(FakeBackend::new(|_| Ok(json!({ "error": "Invalid numbers" }))));
        console.page().set_value(Field::CalcA, "abc".to_owned());
        console.page().set_value(Field::CalcB, "3px".to_owned());

        console.calculate().await;

        let requests = console.backend().requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(
            requests.first().and_then(|r| r.body.clone()),
            Some(json!({ "a": null, "b": 3, "operation": "add" }))
        );
    }

    #[tokio::test]
    async fn missing_operand_alerts_and_sends_nothing() {
        let console = console(FakeBackend::healthy());
        console.page().set_value(Field::CalcA, "4".to_owned());

        console.calculate().await;

        assert!(console.backend().requests().is_empty());
        assert_eq!(console.page().alerts(), vec![MISSING_OPERANDS_ALERT.to_owned()]);
        assert_eq!(console.page().html(Region::CalcResult), "");
    }

    #[tokio::test]
    async fn calculation_transport_failure_renders_error_card() {
        let console = console(FakeBackend::unreachable());
        console.page().set_value(Field::CalcA, "1".to_owned());
        console.page().set_value(Field::CalcB, "2".to_owned());

        console.calculate().await;

        let html = console.page().html(Region::CalcResult);
        assert!(html.contains("<h3>Error</h3>"));
        assert!(html.contains("connection refused"));
        assert!(
            console
                .page()
                .html(Region::ApiResponse)
                .starts_with("<h4>Calculation Error</h4>")
        );
    }

    #[tokio::test]
    async fn fire_runs_bound_command_only() {
        let console = console(FakeBackend::healthy());
        let table = CommandTable::standard();

        let ran = console.fire(&table, &Trigger::click("serverInfoBtn")).await;
        assert_eq!(ran, Some(Command::ServerInfo));
        assert_eq!(console.backend().count(Endpoint::ServerInfo), 1);

        let ran = console.fire(&table, &Trigger::click("nowhere")).await;
        assert_eq!(ran, None);
        assert_eq!(console.backend().requests().len(), 1);
    }

    #[tokio::test]
    async fn enter_in_message_box_sends() {
        let console = console(FakeBackend::healthy());
        let table = CommandTable::standard();
        console
            .page()
            .set_value(Field::MessageInput, "hi".to_owned());

        let shifted = Trigger::key_press("messageInput", "Enter", true);
        assert_eq!(console.fire(&table, &shifted).await, None);
        assert!(console.backend().requests().is_empty());

        let enter = Trigger::key_press("messageInput", "Enter", false);
        assert_eq!(console.fire(&table, &enter).await, Some(Command::SendMessage));
        assert_eq!(console.backend().count(Endpoint::Echo), 1);
    }

    #[tokio::test]
    async fn dispatch_covers_every_command() {
        let console = console(FakeBackend::healthy());
        console.page().set_value(Field::MessageInput, "x".to_owned());
        console.page().set_value(Field::CalcA, "1".to_owned());
        console.page().set_value(Field::CalcB, "1".to_owned());

        for command in Command::ALL {
            console.dispatch(command).await;
        }

        let backend = console.backend();
        assert_eq!(backend.count(Endpoint::Health), 1);
        assert_eq!(backend.count(Endpoint::ServerInfo), 1);
        assert_eq!(backend.count(Endpoint::GenerateData), 1);
        assert_eq!(backend.count(Endpoint::Echo), 1);
        // one after the echo, one from the explicit command
        assert_eq!(backend.count(Endpoint::Messages), 2);
        assert_eq!(backend.count(Endpoint::Calculate), 1);
        assert!(console.page().alerts().is_empty());
    }

    #[tokio::test]
    async fn start_loads_health_and_messages() {
        let console = Arc::new(console(FakeBackend::healthy()));
        let ticker = Arc::clone(&console).start().await;

        assert_eq!(console.backend().count(Endpoint::Health), 1);
        assert_eq!(console.backend().count(Endpoint::Messages), 1);
        assert!(console.page().html(Region::HealthStatus).contains("HEALTHY"));
        assert!(console.page().html(Region::MessagesList).contains("hello"));

        ticker.shutdown().await;
    }
}
