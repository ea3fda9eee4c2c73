//! Tracing span helpers for template operations
//!
//! Span constructors with static names and structured fields, kept apart from
//! the resolution logic. They are used internally by
//! [`Resolver`](crate::Resolver) and the argument readers, and exposed so
//! deployment tooling can nest its own work under the same names.
//!
//! # Example
//!
//! ```rust,no_run
//! use flow_evm_bridge_rs::{spans, TemplateKind};
//!
//! let span = spans::resolve_template("cadence/contracts/bridge/FlowEVMBridge.cdc", TemplateKind::Contract);
//! let _guard = span.enter();
//! // Your own resolution or submission logic here
//! ```

use tracing::Span;

use crate::resolve::TemplateKind;

/// Create span for resolving one catalog template.
///
/// Parent: caller's deployment step, or [`resolve_deployment_plan`]
/// Children: none
#[inline]
pub fn resolve_template(path: &str, kind: TemplateKind) -> Span {
    tracing::info_span!(
        "flow_evm_bridge.resolve_template",
        template.path = path,
        template.kind = %kind,
        template.missing = tracing::field::Empty,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for reading a JSON argument file.
///
/// Parent: caller's deployment step
/// Children: none
#[inline]
pub fn read_arguments(path: &str, purpose: &'static str) -> Span {
    tracing::debug_span!(
        "flow_evm_bridge.read_arguments",
        args.path = path,
        args.purpose = purpose,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for resolving every step of a deployment plan.
///
/// Parent: top-level deployment operation
/// Children: flow_evm_bridge.resolve_template (one per step)
#[inline]
pub fn resolve_deployment_plan(steps: usize) -> Span {
    tracing::info_span!(
        "flow_evm_bridge.resolve_deployment_plan",
        plan.steps = steps,
        plan.resolved = tracing::field::Empty,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Create span for loading a `flow.json` project configuration.
#[inline]
pub fn load_flow_config(path: &str) -> Span {
    tracing::debug_span!(
        "flow_evm_bridge.load_flow_config",
        config.path = path,
        error.type = tracing::field::Empty,
        error.message = tracing::field::Empty,
        error.source = tracing::field::Empty,
        otel.status_code = "OK",
    )
}

/// Record error attributes on the current span.
///
/// Follows OpenTelemetry semantic conventions for error tracking:
/// - error.type: The error type/variant
/// - error.message: Human-readable error message
/// - error.source: The underlying cause, when there is one
pub fn record_error<E: std::error::Error>(error: &E) {
    let current_span = tracing::Span::current();
    let message = error.to_string();
    current_span.record(
        "error.type",
        message.split(':').next().unwrap_or("Unknown"),
    );
    current_span.record("error.message", message.as_str());
    current_span.record("otel.status_code", "ERROR");

    if let Some(source) = error.source() {
        current_span.record("error.source", source.to_string());
    }
}

/// Record the imports a template left unresolved on the current span.
///
/// Missing addresses are recoverable, so the span status stays `OK`.
pub fn record_missing_imports(names: &[String]) {
    tracing::Span::current().record("template.missing", names.join(", "));
}

/// Record error attributes with custom context on the current span.
pub fn record_error_with_context(
    error_type: &str,
    error_message: &str,
    additional_context: Option<&str>,
) {
    let current_span = tracing::Span::current();
    current_span.record("error.type", error_type);
    current_span.record("error.message", error_message);
    current_span.record("otel.status_code", "ERROR");

    if let Some(context) = additional_context {
        current_span.record("error.source", context);
    }
}
