use std::fmt;

use async_trait::async_trait;
use reqwest::Url;
use serde::de::DeserializeOwned;
use serde::Deserialize;
use serde_json::{json, Value};

use crate::error::ReddituiError;
use crate::models::post::{NewPost, Post, Subreddit};
use crate::models::Config;

const GET_SUBREDDIT_BY_TOPIC: &str = "\
query GetSubredditListByTopic($topic: String!) {
  getSubredditListByTopic(topic: $topic) { id topic }
}";

const ADD_SUBREDDIT: &str = "\
mutation AddSubreddit($topic: String!) {
  insertSubreddit(topic: $topic) { id topic }
}";

const ADD_POST: &str = "\
mutation AddPost($title: String!, $body: String!, $image: String!, $subreddit_id: ID!, $username: String!) {
  insertPost(title: $title, body: $body, image: $image, subreddit_id: $subreddit_id, username: $username) {
    id title body image subreddit_id username
  }
}";

/// Contract with the remote board API. The submission workflow only sees
/// this trait, so tests can script responses without a server.
#[async_trait]
pub trait BoardService: Send + Sync {
    /// Exact-match lookup; an empty vec means the subreddit does not exist.
    async fn subreddits_by_topic(&self, topic: &str) -> Result<Vec<Subreddit>, ReddituiError>;

    async fn insert_subreddit(&self, topic: &str) -> Result<Subreddit, ReddituiError>;

    async fn insert_post(&self, post: NewPost<'_>) -> Result<Post, ReddituiError>;
}

/// GraphQL-over-HTTP client for the board API.
#[derive(Clone)]
pub struct BoardClient {
    http: reqwest::Client,
    endpoint: Url,
    token: Option<String>,
}

impl fmt::Debug for BoardClient {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("BoardClient")
            .field("endpoint", &self.endpoint)
            .finish_non_exhaustive()
    }
}

#[derive(Deserialize, Debug)]
struct GraphQlResponse<T> {
    data: Option<T>,
    errors: Option<Vec<GraphQlError>>,
}

#[derive(Deserialize, Debug)]
struct GraphQlError {
    message: String,
}

#[derive(Deserialize)]
struct SubredditListData {
    #[serde(rename = "getSubredditListByTopic")]
    subreddits: Vec<Subreddit>,
}

#[derive(Deserialize)]
struct InsertSubredditData {
    #[serde(rename = "insertSubreddit")]
    subreddit: Subreddit,
}

#[derive(Deserialize)]
struct InsertPostData {
    #[serde(rename = "insertPost")]
    post: Post,
}

impl BoardClient {
    pub fn new(config: &Config) -> Result<Self, ReddituiError> {
        let endpoint = Url::parse(&config.endpoint)
            .map_err(|e| ReddituiError::Config(format!("Invalid endpoint URL: {}", e)))?;

        let http = reqwest::Client::builder()
            .user_agent(concat!("redditui/", env!("CARGO_PKG_VERSION")))
            .build()?;

        Ok(Self {
            http,
            endpoint,
            token: config.token.clone(),
        })
    }

    async fn execute<T: DeserializeOwned>(
        &self,
        query: &str,
        variables: Value,
    ) -> Result<T, ReddituiError> {
        let mut request = self
            .http
            .post(self.endpoint.clone())
            .json(&json!({ "query": query, "variables": variables }));

        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if !status.is_success() {
            let body = response.text().await.unwrap_or_default();
            return Err(ReddituiError::Api(format!("HTTP {}: {}", status, body)));
        }

        let parsed: GraphQlResponse<T> = response.json().await?;

        if let Some(errors) = parsed.errors {
            if !errors.is_empty() {
                let messages: Vec<String> = errors.into_iter().map(|e| e.message).collect();
                return Err(ReddituiError::Api(messages.join("; ")));
            }
        }

        parsed
            .data
            .ok_or_else(|| ReddituiError::Api("Response contained no data".to_string()))
    }
}

#[async_trait]
impl BoardService for BoardClient {
    async fn subreddits_by_topic(&self, topic: &str) -> Result<Vec<Subreddit>, ReddituiError> {
        let data: SubredditListData = self
            .execute(GET_SUBREDDIT_BY_TOPIC, json!({ "topic": topic }))
            .await?;
        Ok(data.subreddits)
    }

    async fn insert_subreddit(&self, topic: &str) -> Result<Subreddit, ReddituiError> {
        let data: InsertSubredditData = self
            .execute(ADD_SUBREDDIT, json!({ "topic": topic }))
            .await?;
        Ok(data.subreddit)
    }

    async fn insert_post(&self, post: NewPost<'_>) -> Result<Post, ReddituiError> {
        // NewPost's field names are the mutation's variable names
        let variables = serde_json::to_value(&post)?;
        let data: InsertPostData = self.execute(ADD_POST, variables).await?;
        Ok(data.post)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_subreddit_list_response() {
        let raw = r#"{"data":{"getSubredditListByTopic":[{"id":"abc","topic":"rust"}]}}"#;
        let parsed: GraphQlResponse<SubredditListData> = serde_json::from_str(raw).unwrap();
        let data = parsed.data.unwrap();
        assert_eq!(data.subreddits.len(), 1);
        assert_eq!(data.subreddits[0].id, "abc");
        assert_eq!(data.subreddits[0].topic, "rust");
    }

    #[test]
    fn parses_empty_subreddit_list() {
        let raw = r#"{"data":{"getSubredditListByTopic":[]}}"#;
        let parsed: GraphQlResponse<SubredditListData> = serde_json::from_str(raw).unwrap();
        assert!(parsed.data.unwrap().subreddits.is_empty());
    }

    #[test]
    fn new_post_serializes_to_mutation_variables() {
        let post = NewPost {
            title: "Hello",
            body: "",
            image: "",
            subreddit_id: "abc",
            username: "alice",
        };
        assert_eq!(
            serde_json::to_value(&post).unwrap(),
            json!({
                "title": "Hello",
                "body": "",
                "image": "",
                "subreddit_id": "abc",
                "username": "alice",
            })
        );
    }

    #[test]
    fn parses_graphql_errors() {
        let raw = r#"{"data":null,"errors":[{"message":"boom"}]}"#;
        let parsed: GraphQlResponse<SubredditListData> = serde_json::from_str(raw).unwrap();
        assert!(parsed.data.is_none());
        assert_eq!(parsed.errors.unwrap()[0].message, "boom");
    }
}
