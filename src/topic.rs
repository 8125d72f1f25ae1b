//! Parsing of `topic[:subtopic]` arguments.
//!
//! A trailing suffix selects an action without a flag:
//!
//! | Argument      | Action |
//! |---------------|--------|
//! | `git`         | view   |
//! | `git:`        | list   |
//! | `git:config+` | edit   |
//! | `git/`        | web    |

use std::fmt;

/// Action implied by a topic argument's suffix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum TopicAction {
    #[default]
    View,
    List,
    Edit,
    Web,
}

/// A parsed topic argument.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Topic {
    pub topic: Option<String>,
    pub subtopic: Option<String>,
    pub action: TopicAction,
}

impl Topic {
    /// Parse a `topic[:subtopic]` argument with an optional `:`, `+` or `/` suffix.
    ///
    /// ```
    /// use quick::topic::{Topic, TopicAction};
    ///
    /// let t = Topic::parse("git:config");
    /// assert_eq!(t.topic.as_deref(), Some("git"));
    /// assert_eq!(t.subtopic.as_deref(), Some("config"));
    /// assert_eq!(t.action, TopicAction::View);
    ///
    /// assert_eq!(Topic::parse("git:").action, TopicAction::List);
    /// ```
    pub fn parse(arg: &str) -> Self {
        let arg = arg.trim();

        let (rest, action) = match arg.chars().last() {
            Some(':') => (&arg[..arg.len() - 1], TopicAction::List),
            Some('+') => (&arg[..arg.len() - 1], TopicAction::Edit),
            Some('/') => (&arg[..arg.len() - 1], TopicAction::Web),
            _ => (arg, TopicAction::View),
        };

        let (topic, subtopic) = match rest.split_once(':') {
            Some((topic, subtopic)) => (topic, subtopic),
            None => (rest, ""),
        };

        Self {
            topic: non_empty(topic),
            subtopic: non_empty(subtopic),
            action,
        }
    }

    /// Replace the suffix-derived action with one chosen by a flag.
    pub fn with_action(mut self, action: Option<TopicAction>) -> Self {
        if let Some(action) = action {
            self.action = action;
        }
        self
    }

    pub fn has_topic(&self) -> bool {
        self.topic.is_some()
    }
}

fn non_empty(s: &str) -> Option<String> {
    let s = s.trim();
    (!s.is_empty()).then(|| s.to_string())
}

impl fmt::Display for Topic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.topic, &self.subtopic) {
            (Some(topic), Some(subtopic)) => write!(f, "{}:{}", topic, subtopic),
            (Some(topic), None) => write!(f, "{}", topic),
            (None, _) => write!(f, "(no topic)"),
        }
    }
}
