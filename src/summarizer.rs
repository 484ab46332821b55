use std::sync::Arc;

use futures::future::join_all;
use tracing::{debug, warn};

use crate::errors::NicolError;
use crate::llm::LLMProvider;

/// Substituted for any provider whose answer could not be extracted.
pub const PLACEHOLDER: &str = "No response";

const SUMMARY_PERSONA: &str = "You are Nicol by Flexi AI Labs. Summarize these responses:";

/// Fans one prompt out to every provider, combines whatever settles, then
/// has the finalizer write the summary.
///
/// Providers are injected so the whole path runs against mocks in tests.
pub struct Summarizer {
    providers: Vec<Arc<dyn LLMProvider>>,
    finalizer: Arc<dyn LLMProvider>,
}

impl Summarizer {
    pub fn new(providers: Vec<Arc<dyn LLMProvider>>, finalizer: Arc<dyn LLMProvider>) -> Self {
        Self { providers, finalizer }
    }

    /// One full fan-out/fan-in cycle.
    ///
    /// All provider calls are dispatched at once and every one is awaited
    /// to settlement; a failure never aborts the join, it just becomes the
    /// placeholder line. Only the finalizer call's failure propagates.
    pub async fn summarize(&self, prompt: &str) -> Result<String, NicolError> {
        let results = join_all(
            self.providers.iter().map(|provider| {
                let provider = Arc::clone(provider);
                async move { provider.complete(prompt).await }
            }),
        )
        .await;

        let combined = self.combine(&results);
        debug!(providers = self.providers.len(), "Combined provider answers");

        let summary = self
            .finalizer
            .complete(&format!("{} {}", SUMMARY_PERSONA, combined))
            .await?;

        Ok(summary.content)
    }

    /// One line per provider, fixed order, failures masked.
    fn combine(&self, results: &[Result<crate::llm::LLMResponse, NicolError>]) -> String {
        self.providers
            .iter()
            .zip(results)
            .map(|(provider, result)| match result {
                Ok(response) => format!("{}: {}", provider.label(), response.content),
                Err(e) => {
                    warn!(provider = provider.provider_name(), error = %e, "Provider failed");
                    format!("{}: {}", provider.label(), PLACEHOLDER)
                }
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}
