//! Notification kinds produced by the follow/post/vacancy fan-out.

use std::fmt;

use serde::{Deserialize, Serialize};

/// What happened to trigger a notification.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NotificationKind {
    NewFollower,
    NewPost,
    NewVacancy,
}

impl NotificationKind {
    /// The value stored in `notifications.kind`.
    pub fn as_str(self) -> &'static str {
        match self {
            NotificationKind::NewFollower => "new_follower",
            NotificationKind::NewPost => "new_post",
            NotificationKind::NewVacancy => "new_vacancy",
        }
    }

    /// Entity type recorded as the notification source.
    pub fn source_entity(self) -> &'static str {
        match self {
            NotificationKind::NewFollower => "user",
            NotificationKind::NewPost => "post",
            NotificationKind::NewVacancy => "vacancy",
        }
    }
}

impl fmt::Display for NotificationKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Render the human-readable notification text.
///
/// `actor` is the display name of whoever triggered the event; `subject` is
/// the followed enterprise name, the post excerpt or the vacancy title.
pub fn render_message(kind: NotificationKind, actor: &str, subject: Option<&str>) -> String {
    match (kind, subject) {
        (NotificationKind::NewFollower, Some(enterprise)) => {
            format!("{actor} started following {enterprise}")
        }
        (NotificationKind::NewFollower, None) => format!("{actor} started following you"),
        (NotificationKind::NewPost, Some(excerpt)) => {
            format!("{actor} published a new post: {}", excerpt_of(excerpt))
        }
        (NotificationKind::NewPost, None) => format!("{actor} published a new post"),
        (NotificationKind::NewVacancy, Some(title)) => {
            format!("{actor} opened a new vacancy: {title}")
        }
        (NotificationKind::NewVacancy, None) => format!("{actor} opened a new vacancy"),
    }
}

const EXCERPT_CHARS: usize = 80;

fn excerpt_of(text: &str) -> String {
    let trimmed = text.trim();
    if trimmed.chars().count() <= EXCERPT_CHARS {
        return trimmed.to_string();
    }
    let mut excerpt: String = trimmed.chars().take(EXCERPT_CHARS).collect();
    excerpt.push_str("...");
    excerpt
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_matches_stored_value() {
        assert_eq!(NotificationKind::NewVacancy.to_string(), "new_vacancy");
        assert_eq!(NotificationKind::NewFollower.as_str(), "new_follower");
        assert_eq!(NotificationKind::NewPost.source_entity(), "post");
    }

    #[test]
    fn follower_message_with_and_without_enterprise() {
        assert_eq!(
            render_message(NotificationKind::NewFollower, "Ana", None),
            "Ana started following you"
        );
        assert_eq!(
            render_message(NotificationKind::NewFollower, "Ana", Some("Acme")),
            "Ana started following Acme"
        );
    }

    #[test]
    fn long_post_is_excerpted() {
        let content = "x".repeat(200);
        let message = render_message(NotificationKind::NewPost, "Bob", Some(&content));
        assert!(message.ends_with("..."));
        assert!(message.len() < 120);
    }

    #[test]
    fn short_post_is_kept_whole() {
        let message = render_message(NotificationKind::NewPost, "Bob", Some("  Hiring!  "));
        assert_eq!(message, "Bob published a new post: Hiring!");
    }
}
