//! HTML fragment rendering via `minijinja`.
//!
//! Fragment templates live in `templates/` and are embedded at compile
//! time. Their `.html` names turn on `minijinja`'s HTML auto-escaping, so
//! every interpolated value is safe as element text. Values arrive
//! pre-formatted: timestamps localised, fields printed the way a browser
//! would print them.

use minijinja::{Environment, context};
use pulse_types::{CalculationResult, HealthStatus, LoggedMessage, display_field};
use serde::Serialize;

use crate::error::ConsoleError;
use crate::localize::Localizer;

/// Embedded fragment templates, by name.
const TEMPLATES: [(&str, &str); 7] = [
    ("loading.html", include_str!("../templates/loading.html")),
    ("health.html", include_str!("../templates/health.html")),
    ("health_error.html", include_str!("../templates/health_error.html")),
    ("response.html", include_str!("../templates/response.html")),
    ("messages.html", include_str!("../templates/messages.html")),
    ("calc_result.html", include_str!("../templates/calc_result.html")),
    ("calc_error.html", include_str!("../templates/calc_error.html")),
];

/// One message card as handed to the template.
#[derive(Debug, Serialize)]
struct MessageCard {
    id: String,
    timestamp: String,
    message: String,
}

/// Renders every HTML fragment the console writes to the page.
pub struct Renderer {
    env: Environment<'static>,
}

impl Renderer {
    /// Load the embedded templates.
    ///
    /// # Errors
    ///
    /// Returns [`ConsoleError::Template`] if a template fails to parse.
    pub fn new() -> Result<Self, ConsoleError> {
        let mut env = Environment::new();
        for (name, source) in TEMPLATES {
            env.add_template(name, source)
                .map_err(|e| ConsoleError::Template(format!("failed to add {name}: {e}")))?;
        }
        Ok(Self { env })
    }

    /// Spinner shown while the health check is in flight.
    pub fn loading(&self) -> Result<String, ConsoleError> {
        self.render("loading.html", context! {})
    }

    /// Health panel for a successful check. Status is uppercased.
    pub fn health(
        &self,
        health: &HealthStatus,
        localizer: &Localizer,
    ) -> Result<String, ConsoleError> {
        self.render(
            "health.html",
            context! {
                status => health.display_status(),
                service => display_field(health.service.as_ref()),
                timestamp => localizer.localize_value(health.timestamp.as_ref()),
                environment => display_field(health.environment.as_ref()),
                region => display_field(health.region.as_ref()),
            },
        )
    }

    /// Health panel for a failed check.
    pub fn health_error(&self, error: &str) -> Result<String, ConsoleError> {
        self.render("health_error.html", context! { error })
    }

    /// Response panel: a title over the pretty-printed JSON body.
    pub fn response(&self, title: &str, body: &serde_json::Value) -> Result<String, ConsoleError> {
        let body = serde_json::to_string_pretty(body)
            .map_err(|e| ConsoleError::Template(format!("failed to format response body: {e}")))?;
        self.render("response.html", context! { title, body })
    }

    /// Message list, or the empty placeholder when there are none.
    pub fn messages(
        &self,
        messages: &[LoggedMessage],
        localizer: &Localizer,
    ) -> Result<String, ConsoleError> {
        let cards: Vec<MessageCard> = messages
            .iter()
            .map(|m| MessageCard {
                id: display_field(m.id.as_ref()),
                timestamp: localizer.localize_value(m.timestamp.as_ref()),
                message: display_field(m.message.as_ref()),
            })
            .collect();
        self.render("messages.html", context! { messages => cards })
    }

    /// Calculator result card: `a <symbol> b = result`.
    pub fn calculation(
        &self,
        result: &CalculationResult,
        localizer: &Localizer,
    ) -> Result<String, ConsoleError> {
        self.render(
            "calc_result.html",
            context! {
                result => display_field(result.result.as_ref()),
                a => display_field(result.a.as_ref()),
                b => display_field(result.b.as_ref()),
                symbol => result.symbol(),
                calculated_at => localizer.localize_value(result.calculated_at.as_ref()),
            },
        )
    }

    /// Calculator error card with a heading and the message verbatim.
    pub fn calculation_error(&self, heading: &str, error: &str) -> Result<String, ConsoleError> {
        self.render("calc_error.html", context! { heading, error })
    }

    fn render<S: Serialize>(&self, name: &str, ctx: S) -> Result<String, ConsoleError> {
        self.env
            .get_template(name)
            .map_err(|e| ConsoleError::Template(format!("missing template {name}: {e}")))?
            .render(ctx)
            .map_err(|e| ConsoleError::Template(format!("{name} render failed: {e}")))
    }
}
