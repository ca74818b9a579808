//! Error handling utilities for MCP server

use rmcp::ErrorData;
use yatra_core::TripError;

/// Converts trip errors to MCP errors.
///
/// Errors the caller can fix by sending different arguments (bad input, an
/// unknown step) become `invalid_params`; everything else is internal.
pub fn to_mcp_error(message: &str, error: TripError) -> ErrorData {
    let text = format!("{message}: {error}");
    match error.http_status() {
        400 | 404 => ErrorData::invalid_params(text, None),
        _ => ErrorData::internal_error(text, None),
    }
}
