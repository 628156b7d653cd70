//! Transcript port
//!
//! The session reports what happened in a conversation as [`ConversationEvent`]s:
//! `session_started`, `user_message`, `step_entered`, `delta_applied`,
//! `review_rejected`, `generation_requested`, `artifact_generated`,
//! `generation_failed` and `session_reset`. Diagnostics go through `tracing`.

use serde_json::Value;

/// One transcript entry; the writer stamps sequence number and time
#[derive(Debug, Clone, PartialEq)]
pub struct ConversationEvent {
    pub event_type: &'static str,
    /// Step, message, delta or outcome details, depending on `event_type`
    pub payload: Value,
}

impl ConversationEvent {
    pub fn new(event_type: &'static str, payload: Value) -> Self {
        Self {
            event_type,
            payload,
        }
    }
}

/// Sink for transcript events. Never fails the conversation.
pub trait ConversationLogger: Send + Sync {
    fn log(&self, event: ConversationEvent);
}

/// Used when no transcript was requested
pub struct NoConversationLogger;

impl ConversationLogger for NoConversationLogger {
    fn log(&self, _event: ConversationEvent) {}
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_event_keeps_type_and_payload() {
        let event = ConversationEvent::new("step_entered", json!({ "step": "entities" }));
        assert_eq!(event.event_type, "step_entered");
        assert_eq!(event.payload["step"], "entities");
        NoConversationLogger.log(event);
    }
}
