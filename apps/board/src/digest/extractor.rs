use std::sync::Arc;

use tracing::warn;

use crate::digest::parse::parse_points;
use crate::digest::prompts::build_points_prompt;
use crate::llm_client::CompletionApi;

/// Turns free text into discussion points with one completion call.
///
/// Never fails: a completion error becomes a single `Error: ...` point so one bad
/// topic does not take the dashboard down.
#[derive(Clone)]
pub struct PointExtractor {
    completion: Arc<dyn CompletionApi>,
}

impl PointExtractor {
    pub fn new(completion: Arc<dyn CompletionApi>) -> Self {
        Self { completion }
    }

    pub async fn extract(&self, text: &str, max_points: usize) -> Vec<String> {
        let prompt = build_points_prompt(text, max_points);
        match self.completion.complete(&prompt).await {
            Ok(raw) => parse_points(&raw, max_points),
            Err(e) => {
                warn!("Point extraction failed: {e}");
                vec![format!("Error: {e}")]
            }
        }
    }
}

#[cfg(test)]
pub(crate) mod tests {
    use super::*;
    use crate::llm_client::LlmError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    /// Returns a canned response and records every prompt it receives.
    pub(crate) struct CannedCompletion {
        pub response: Result<String, u16>,
        pub prompts: Mutex<Vec<String>>,
    }

    impl CannedCompletion {
        pub fn ok(response: &str) -> Self {
            Self {
                response: Ok(response.to_string()),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn failing(status: u16) -> Self {
            Self {
                response: Err(status),
                prompts: Mutex::new(Vec::new()),
            }
        }

        pub fn calls(&self) -> usize {
            self.prompts.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl CompletionApi for CannedCompletion {
        async fn complete(&self, prompt: &str) -> Result<String, LlmError> {
            self.prompts.lock().unwrap().push(prompt.to_string());
            match &self.response {
                Ok(text) => Ok(text.clone()),
                Err(status) => Err(LlmError::Api {
                    status: *status,
                    message: "Incorrect API key provided".to_string(),
                }),
            }
        }
    }

    #[tokio::test]
    async fn test_extract_parses_and_caps() {
        let canned = Arc::new(CannedCompletion::ok(
            "1. Alert reach gaps\n2. Cross-agency data sharing\n3. Public trust\n4. Drill frequency",
        ));
        let extractor = PointExtractor::new(canned.clone());

        let points = extractor.extract("notes", 3).await;
        assert_eq!(
            points,
            vec!["Alert reach gaps", "Cross-agency data sharing", "Public trust"]
        );
        assert_eq!(canned.calls(), 1);
        let prompts = canned.prompts.lock().unwrap();
        assert!(prompts[0].contains("at most 3"));
        assert!(prompts[0].ends_with("notes"));
    }

    #[tokio::test]
    async fn test_extract_error_becomes_single_point() {
        let extractor = PointExtractor::new(Arc::new(CannedCompletion::failing(401)));

        let points = extractor.extract("notes", 5).await;
        assert_eq!(points.len(), 1);
        assert!(points[0].starts_with("Error:"));
        assert!(points[0].contains("401"));
    }
}
