use anyhow::{anyhow, Result};
use reqwest::Client;
use serde::{Deserialize, Serialize};

#[derive(Serialize)]
struct ChatRequest {
    message: String,
}

/// Reply shape from the backend. `reply` is required; a body without it is
/// treated the same as any other failure. The crisis flag is optional
/// because older backends omit it.
#[derive(Deserialize, Debug, Clone)]
pub struct ChatReply {
    pub reply: String,
    #[serde(default)]
    pub is_crisis: bool,
}

#[derive(Clone)]
pub struct ChatClient {
    client: Client,
    endpoint: String,
}

impl ChatClient {
    pub fn new(endpoint: &str) -> Self {
        Self {
            client: Client::new(),
            endpoint: endpoint.to_string(),
        }
    }

    pub fn endpoint(&self) -> &str {
        &self.endpoint
    }

    /// Send one message and wait for the reply. A single best-effort
    /// attempt: no retries, no timeout.
    pub async fn send(&self, message: &str) -> Result<ChatReply> {
        let request = ChatRequest {
            message: message.to_string(),
        };

        let response = self
            .client
            .post(&self.endpoint)
            .json(&request)
            .send()
            .await?;

        if !response.status().is_success() {
            return Err(anyhow!(
                "chat request failed with status: {}. Make sure the backend is running",
                response.status()
            ));
        }

        let reply: ChatReply = response.json().await?;
        Ok(reply)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[tokio::test]
    async fn test_send_posts_message_and_parses_reply() {
        let mut server = mockito::Server::new_async().await;

        let mock = server
            .mock("POST", "/chat")
            .match_header("content-type", "application/json")
            .match_body(r#"{"message":"hello"}"#)
            .with_status(200)
            .with_header("content-type", "application/json")
            .with_body(r#"{"reply": "Hello", "is_crisis": false}"#)
            .create_async()
            .await;

        let client = ChatClient::new(&format!("{}/chat", server.url()));
        let reply = client.send("hello").await.unwrap();

        assert_eq!(reply.reply, "Hello");
        assert!(!reply.is_crisis);
        mock.assert_async().await;
    }

    #[tokio::test]
    async fn test_crisis_flag_defaults_to_false_when_absent() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat")
            .with_status(200)
            .with_body(r#"{"reply": "take care"}"#)
            .create_async()
            .await;

        let client = ChatClient::new(&format!("{}/chat", server.url()));
        let reply = client.send("hi").await.unwrap();

        assert_eq!(reply.reply, "take care");
        assert!(!reply.is_crisis);
    }

    #[tokio::test]
    async fn test_crisis_flag_parses_when_present() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat")
            .with_status(200)
            .with_body(r#"{"reply": "please reach out", "is_crisis": true}"#)
            .create_async()
            .await;

        let client = ChatClient::new(&format!("{}/chat", server.url()));
        let reply = client.send("hi").await.unwrap();

        assert!(reply.is_crisis);
    }

    #[tokio::test]
    async fn test_non_success_status_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat")
            .with_status(500)
            .with_body("internal error")
            .create_async()
            .await;

        let client = ChatClient::new(&format!("{}/chat", server.url()));
        let err = client.send("hi").await.unwrap_err();

        assert!(err.to_string().contains("500"));
    }

    #[tokio::test]
    async fn test_body_without_reply_field_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat")
            .with_status(200)
            .with_body(r#"{"is_crisis": false}"#)
            .create_async()
            .await;

        let client = ChatClient::new(&format!("{}/chat", server.url()));
        assert!(client.send("hi").await.is_err());
    }

    #[tokio::test]
    async fn test_malformed_body_is_an_error() {
        let mut server = mockito::Server::new_async().await;
        let _mock = server
            .mock("POST", "/chat")
            .with_status(200)
            .with_body("not json at all")
            .create_async()
            .await;

        let client = ChatClient::new(&format!("{}/chat", server.url()));
        assert!(client.send("hi").await.is_err());
    }

    #[tokio::test]
    async fn test_connection_refused_is_an_error() {
        // Port 1 is essentially never listening
        let client = ChatClient::new("http://127.0.0.1:1/chat");
        assert!(client.send("hi").await.is_err());
    }
}
