use serde::{Deserialize, Serialize};

/// A named discussion category that posts attach to.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct Subreddit {
    pub id: String,
    pub topic: String,
}

#[derive(Serialize, Deserialize, Debug, Clone)]
pub struct Post {
    pub id: String,
    pub title: String,
    pub body: String,
    pub image: String,
    pub subreddit_id: String,
    pub username: String,
}

/// Submission payload for a new post. Body and image are always sent,
/// defaulting to empty strings when the user left them blank.
#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct NewPost<'a> {
    pub title: &'a str,
    pub body: &'a str,
    pub image: &'a str,
    pub subreddit_id: &'a str,
    pub username: &'a str,
}
