//! Recording completion client shared by the integration tests

#![allow(dead_code)]

use std::sync::{Arc, Mutex};
use std::time::Duration;

use async_trait::async_trait;
use serde_json::Value;
use wxbrief::completion::{
    ChatCompletionRequest, ChatCompletionResponse, CompletionClient, CompletionError, Role,
};
use wxbrief::summary::GeneratorSettings;
use wxbrief::{ReportData, SummaryGenerator};

/// What the mock answers with
pub enum Reply {
    Text(String),
    NoChoices,
    Fail,
    Hang,
    /// Answers with the user message it received
    Echo,
}

pub struct MockClient {
    credential: bool,
    reply: Reply,
    calls: Mutex<Vec<ChatCompletionRequest>>,
}

impl MockClient {
    pub fn new(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            credential: true,
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn without_credential(reply: Reply) -> Arc<Self> {
        Arc::new(Self {
            credential: false,
            reply,
            calls: Mutex::new(Vec::new()),
        })
    }

    pub fn calls(&self) -> Vec<ChatCompletionRequest> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl CompletionClient for MockClient {
    fn has_credential(&self) -> bool {
        self.credential
    }

    async fn create_chat_completion(
        &self,
        request: &ChatCompletionRequest,
    ) -> Result<ChatCompletionResponse, CompletionError> {
        self.calls.lock().unwrap().push(request.clone());

        match &self.reply {
            Reply::Text(text) => Ok(ChatCompletionResponse::from_text(text.clone())),
            Reply::NoChoices => Ok(ChatCompletionResponse::default()),
            Reply::Fail => Err(CompletionError::Status {
                status: 500,
                body: "internal error".to_string(),
            }),
            Reply::Hang => {
                tokio::time::sleep(Duration::from_secs(3600)).await;
                Ok(ChatCompletionResponse::default())
            }
            Reply::Echo => {
                tokio::task::yield_now().await;
                let user = request
                    .messages
                    .iter()
                    .find(|message| message.role == Role::User)
                    .map(|message| message.content.clone())
                    .unwrap_or_default();
                Ok(ChatCompletionResponse::from_text(user))
            }
        }
    }
}

pub fn generator(client: Arc<MockClient>) -> SummaryGenerator {
    SummaryGenerator::new(client, GeneratorSettings::default())
}

pub fn data(value: Value) -> ReportData {
    value.as_object().cloned().unwrap_or_default()
}
