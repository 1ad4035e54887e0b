//! Session-scoped discussion forum.

use tracing::debug;

use crate::UiError;

/// One discussion thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Post {
    /// Session-unique post id.
    pub id: u64,
    /// Thread title.
    pub title: String,
    /// Opening message.
    pub content: String,
    /// Replies in submission order.
    pub comments: Vec<String>,
}

/// Posts visible in one session, newest first.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Forum {
    posts: Vec<Post>,
    next_id: u64,
}

impl Forum {
    /// Creates an empty forum.
    pub fn new() -> Self {
        Self {
            posts: Vec::new(),
            next_id: 1,
        }
    }

    /// Creates a forum with the starter threads every session begins with.
    pub fn seeded() -> Self {
        let mut forum = Self::new();
        for (title, content, comments) in SEED_POSTS.iter().rev() {
            forum.insert_front(*title, *content);
            forum.posts[0].comments = comments.iter().map(|comment| comment.to_string()).collect();
        }
        forum
    }

    /// Posts, newest first.
    pub fn posts(&self) -> &[Post] {
        &self.posts
    }

    /// Looks up a post by id.
    pub fn post(&self, id: u64) -> Option<&Post> {
        self.posts.iter().find(|post| post.id == id)
    }

    /// Creates a thread at the top of the list.
    ///
    /// # Errors
    /// Returns [`UiError::EmptyPost`] when title or content is blank.
    pub fn create_post(
        &mut self,
        title: impl Into<String>,
        content: impl Into<String>,
    ) -> Result<u64, UiError> {
        let title = title.into();
        let content = content.into();
        if title.trim().is_empty() || content.trim().is_empty() {
            return Err(UiError::EmptyPost);
        }

        let id = self.insert_front(title, content);
        debug!(post_id = id, "forum post created");
        Ok(id)
    }

    /// Appends a reply to an existing thread.
    ///
    /// # Errors
    /// Returns [`UiError::EmptyComment`] for blank text and
    /// [`UiError::UnknownPost`] when `post_id` does not exist.
    pub fn add_comment(&mut self, post_id: u64, text: impl Into<String>) -> Result<(), UiError> {
        let text = text.into();
        if text.trim().is_empty() {
            return Err(UiError::EmptyComment);
        }

        let post = self
            .posts
            .iter_mut()
            .find(|post| post.id == post_id)
            .ok_or(UiError::UnknownPost(post_id))?;
        post.comments.push(text);
        debug!(post_id, comments = post.comments.len(), "forum comment added");
        Ok(())
    }

    fn insert_front(&mut self, title: impl Into<String>, content: impl Into<String>) -> u64 {
        let id = self.next_id;
        self.next_id += 1;
        self.posts.insert(
            0,
            Post {
                id,
                title: title.into(),
                content: content.into(),
                comments: Vec::new(),
            },
        );
        id
    }
}

impl Default for Forum {
    fn default() -> Self {
        Self::seeded()
    }
}

const SEED_POSTS: [(&str, &str, &[&str]); 3] = [
    (
        "New to the Community!",
        "Hi everyone, I'm new here and looking forward to learning more about diabetes prevention.",
        &[],
    ),
    (
        "Question about Diet",
        "What are some good low-sugar snack options?",
        &[
            "Nuts and seeds are a good choice!",
            "Greek yogurt with berries.",
            "Vegetable sticks with hummus.",
        ],
    ),
    (
        "Exercise Tips",
        "Does anyone have advice for staying motivated to exercise regularly?",
        &[],
    ),
];
