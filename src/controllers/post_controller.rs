use thiserror::Error;
use tracing::{info, warn};

use crate::error::ReddituiError;
use crate::models::{BoardService, NewPost, Post, PostDraft};
use crate::views::Toast;

pub const TOAST_LOADING: &str = "Creating new post...";
pub const TOAST_SUCCESS: &str = "New post created";
pub const TOAST_ERROR: &str = "Whoops something went wrong!";

/// Which step of the submission failed. The user-facing toast stays generic;
/// this only feeds the logs.
#[derive(Debug, Error)]
pub enum SubmitError {
    #[error("subreddit lookup failed: {0}")]
    Lookup(#[source] ReddituiError),

    #[error("subreddit creation failed: {0}")]
    SubredditCreation(#[source] ReddituiError),

    #[error("post creation failed: {0}")]
    PostCreation(#[source] ReddituiError),
}

/// Run one submission attempt end to end, reporting progress through the
/// toast handle the caller opened in the loading state. On success the draft
/// is cleared; on any failure it is left exactly as the user entered it.
pub async fn submit_post<S: BoardService + ?Sized>(
    service: &S,
    author: &str,
    draft: &mut PostDraft,
    toast: &mut Toast,
) {
    match resolve_and_create(service, author, draft).await {
        Ok(post) => {
            info!(post_id = %post.id, "new post added");
            draft.clear();
            toast.succeed(TOAST_SUCCESS);
        }
        Err(e) => {
            warn!(error = %e, "post submission failed");
            toast.fail(TOAST_ERROR);
        }
    }
}

/// Resolve the subreddit (creating it when the topic is new) and then create
/// the post. A post is never created without a resolved subreddit id.
async fn resolve_and_create<S: BoardService + ?Sized>(
    service: &S,
    author: &str,
    draft: &PostDraft,
) -> Result<Post, SubmitError> {
    let matches = service
        .subreddits_by_topic(&draft.subreddit)
        .await
        .map_err(SubmitError::Lookup)?;

    let subreddit_id = match matches.into_iter().next() {
        Some(existing) => {
            info!(topic = %draft.subreddit, id = %existing.id, "using existing subreddit");
            existing.id
        }
        None => {
            info!(topic = %draft.subreddit, "subreddit is new, creating new subreddit");
            service
                .insert_subreddit(&draft.subreddit)
                .await
                .map_err(SubmitError::SubredditCreation)?
                .id
        }
    };

    service
        .insert_post(NewPost {
            title: &draft.title,
            body: &draft.body,
            image: &draft.image,
            subreddit_id: &subreddit_id,
            username: author,
        })
        .await
        .map_err(SubmitError::PostCreation)
}
