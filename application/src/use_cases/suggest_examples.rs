//! Suggest Examples use case
//!
//! Asks the generation service for example entities or relationships of the
//! declared domain. Suggestions are a convenience: any failure degrades to an
//! empty list and the conversation carries on.

use crate::ports::llm_gateway::LlmGateway;
use crate::ports::progress::{ProgressNotifier, RequestKind};
use dslgen_domain::core::string::split_list;
use dslgen_domain::{ExampleKind, PromptTemplate};
use std::sync::Arc;
use tracing::{debug, warn};

/// Use case for fetching example suggestions
pub struct SuggestExamplesUseCase<G: LlmGateway + 'static> {
    gateway: Arc<G>,
}

impl<G: LlmGateway + 'static> SuggestExamplesUseCase<G> {
    pub fn new(gateway: Arc<G>) -> Self {
        Self { gateway }
    }

    pub async fn execute(
        &self,
        kind: ExampleKind,
        domain: &str,
        progress: &dyn ProgressNotifier,
    ) -> Vec<String> {
        let prompt = PromptTemplate::examples_request(kind, domain);
        debug!("Requesting {} examples for '{}'", kind.as_str(), domain);

        let request = RequestKind::Examples(kind);
        progress.on_request_start(request);
        let result = self.gateway.complete(&prompt).await;
        progress.on_request_complete(request, result.is_ok());

        match result {
            Ok(reply) => {
                let examples = split_list(reply.trim());
                debug!("Received {} {} examples", examples.len(), kind.as_str());
                examples
            }
            Err(e) => {
                warn!("Could not fetch {} examples: {}", kind.as_str(), e);
                Vec::new()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::llm_gateway::GatewayError;
    use crate::ports::progress::NoProgress;
    use crate::use_cases::test_support::MockGateway;
    use std::sync::Mutex;

    struct RecordingProgress {
        calls: Mutex<Vec<(RequestKind, Option<bool>)>>,
    }

    impl ProgressNotifier for RecordingProgress {
        fn on_request_start(&self, request: RequestKind) {
            self.calls.lock().unwrap().push((request, None));
        }

        fn on_request_complete(&self, request: RequestKind, success: bool) {
            self.calls.lock().unwrap().push((request, Some(success)));
        }
    }

    #[tokio::test]
    async fn test_splits_reply_on_commas() {
        let gateway = Arc::new(MockGateway::replying(&["Bike, Rider ,, Race\n"]));
        let use_case = SuggestExamplesUseCase::new(Arc::clone(&gateway));

        let examples = use_case
            .execute(ExampleKind::Entities, "cycling", &NoProgress)
            .await;

        assert_eq!(examples, vec!["Bike", "Rider", "Race"]);
        let prompts = gateway.prompts();
        assert!(prompts[0].contains("examples of entities"));
        assert!(prompts[0].contains("\"cycling\""));
    }

    #[tokio::test]
    async fn test_failure_degrades_to_no_examples() {
        let gateway = Arc::new(MockGateway::new(vec![Err(GatewayError::Timeout)]));
        let use_case = SuggestExamplesUseCase::new(gateway);
        let progress = RecordingProgress {
            calls: Mutex::new(Vec::new()),
        };

        let examples = use_case
            .execute(ExampleKind::Relationships, "cycling", &progress)
            .await;

        assert!(examples.is_empty());
        let calls = progress.calls.lock().unwrap();
        assert_eq!(
            *calls,
            vec![
                (RequestKind::Examples(ExampleKind::Relationships), None),
                (RequestKind::Examples(ExampleKind::Relationships), Some(false)),
            ]
        );
    }
}
