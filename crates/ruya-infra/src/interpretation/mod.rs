//! Interpretation provider adapters.
//!
//! [`OpenRouterInterpreter`] talks to an OpenAI-compatible chat completion
//! API. [`UnconfiguredInterpreter`] stands in when no API key is present
//! so the rest of the service still starts.

#[cfg(feature = "openrouter")]
mod openrouter;

use std::sync::LazyLock;

use async_trait::async_trait;
use regex::Regex;

use ruya_core::domain::{InterpretationHints, InterpretationRequest};
use ruya_core::ports::{InterpretationProvider, ProviderError};

#[cfg(feature = "openrouter")]
pub use openrouter::{OpenRouterConfig, OpenRouterInterpreter};

static MARKUP_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\*{2,}|-{2,}|_{2,}|#{2,}|={2,}").expect("valid regex"));
static HEADING: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^#[ \t]+(.+)$").expect("valid regex"));
static BLANK_RUNS: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\n{3,}").expect("valid regex"));

/// Clean up model output for plain-text display.
///
/// Repeated markup characters are dropped, `# Heading` lines become
/// `Heading:`, runs of blank lines collapse to one, and the result is trimmed.
pub fn format_interpretation(text: &str) -> String {
    let text = MARKUP_RUNS.replace_all(text, "");
    let text = HEADING.replace_all(&text, "$1:");
    let text = BLANK_RUNS.replace_all(&text, "\n\n");
    text.trim().to_string()
}

/// Provider used when no interpretation backend is configured.
#[derive(Debug, Default, Clone, Copy)]
pub struct UnconfiguredInterpreter;

#[async_trait]
impl InterpretationProvider for UnconfiguredInterpreter {
    async fn interpret(
        &self,
        _request: &InterpretationRequest,
        _hints: &InterpretationHints,
    ) -> Result<String, ProviderError> {
        Err(ProviderError::NotConfigured)
    }
}
