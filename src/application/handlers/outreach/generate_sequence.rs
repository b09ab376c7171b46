//! GenerateSequenceHandler - Sends a prompt to the model and classifies the reply.

use std::sync::Arc;

use crate::application::OutreachError;
use crate::domain::foundation::ValidationError;
use crate::domain::outreach::{assemble_conversation, extract_sequence, ChatTurn, ExtractedReply};
use crate::ports::{AIProvider, CompletionRequest};

/// Command carrying the recruiter's new message and any prior turns.
#[derive(Debug, Clone)]
pub struct GenerateSequenceCommand {
    pub message: String,
    pub context: Vec<ChatTurn>,
}

/// Handler for the generate flow.
///
/// One model call per command, no retries. Replies that do not carry a
/// usable sequence pass through as plain messages.
pub struct GenerateSequenceHandler {
    provider: Arc<dyn AIProvider>,
}

impl GenerateSequenceHandler {
    pub fn new(provider: Arc<dyn AIProvider>) -> Self {
        Self { provider }
    }

    pub async fn handle(&self, cmd: GenerateSequenceCommand) -> Result<ExtractedReply, OutreachError> {
        if cmd.message.is_empty() {
            return Err(ValidationError::empty_field("message").into());
        }

        let turns = assemble_conversation(&cmd.context, &cmd.message);
        let request = CompletionRequest::from_turns(turns);

        let response = self.provider.complete(request).await.map_err(|e| {
            tracing::warn!(error = %e, "Model call failed");
            OutreachError::from(e)
        })?;

        let reply = extract_sequence(&response.content);
        tracing::info!(
            kind = ?reply.kind(),
            model = %response.model,
            finish_reason = ?response.finish_reason,
            total_tokens = response.usage.total_tokens,
            "Model reply classified"
        );

        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::ai::{MockAIProvider, MockError};
    use crate::domain::outreach::{ReplyKind, SEQUENCE_CONFIRMATION, SYSTEM_INSTRUCTION};
    use crate::ports::MessageRole;

    fn cmd(message: &str) -> GenerateSequenceCommand {
        GenerateSequenceCommand {
            message: message.to_string(),
            context: Vec::new(),
        }
    }

    #[tokio::test]
    async fn sequence_reply_is_extracted() {
        let provider = MockAIProvider::new().with_response(
            r#"Here you go: {"title": "Staff Engineer", "steps": [{"Step 1": {"Content": "Hi", "Strategy": "Open"}}]}"#,
        );
        let handler = GenerateSequenceHandler::new(Arc::new(provider));

        let reply = handler.handle(cmd("Write a sequence")).await.unwrap();

        assert_eq!(reply.kind(), ReplyKind::Sequence);
        assert_eq!(reply.response_text(), SEQUENCE_CONFIRMATION);
        assert_eq!(reply.sequence().and_then(|s| s.title()), Some("Staff Engineer"));
    }

    #[tokio::test]
    async fn plain_reply_passes_through() {
        let provider = MockAIProvider::new().with_response("Which role are you hiring for?");
        let handler = GenerateSequenceHandler::new(Arc::new(provider));

        let reply = handler.handle(cmd("Help me")).await.unwrap();

        assert_eq!(
            reply,
            ExtractedReply::Message("Which role are you hiring for?".to_string())
        );
    }

    #[tokio::test]
    async fn prompt_is_system_then_context_then_message() {
        let provider = MockAIProvider::new();
        let handler = GenerateSequenceHandler::new(Arc::new(provider.clone()));

        handler
            .handle(GenerateSequenceCommand {
                message: "Make it shorter".to_string(),
                context: vec![
                    ChatTurn::user("Write a sequence"),
                    ChatTurn::assistant("Here it is"),
                ],
            })
            .await
            .unwrap();

        let request = provider.last_call().unwrap();
        let roles: Vec<MessageRole> = request.messages.iter().map(|m| m.role).collect();
        assert_eq!(
            roles,
            vec![
                MessageRole::System,
                MessageRole::User,
                MessageRole::Assistant,
                MessageRole::User
            ]
        );
        assert_eq!(request.messages[0].content, SYSTEM_INSTRUCTION);
        assert_eq!(request.messages[3].content, "Make it shorter");
    }

    #[tokio::test]
    async fn empty_message_never_reaches_the_model() {
        let provider = MockAIProvider::new();
        let handler = GenerateSequenceHandler::new(Arc::new(provider.clone()));

        let err = handler.handle(cmd("")).await.unwrap_err();

        assert!(matches!(err, OutreachError::ClientInput(_)));
        assert_eq!(provider.call_count(), 0);
    }

    #[tokio::test]
    async fn model_failure_is_upstream_error() {
        let provider = MockAIProvider::new().with_error(MockError::AuthenticationFailed);
        let handler = GenerateSequenceHandler::new(Arc::new(provider.clone()));

        let err = handler.handle(cmd("Write a sequence")).await.unwrap_err();

        assert_eq!(err, OutreachError::Upstream("authentication failed".to_string()));
        assert_eq!(provider.call_count(), 1);
    }
}
