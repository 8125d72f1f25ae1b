//! Opening topics on the cheat-sheet website.

use crate::error::{QuickError, Result};
use crate::topic::Topic;
use tracing::info;

/// Website URL for a topic, e.g. `<base>/git/config`.
pub fn topic_url(base_url: &str, topic: &Topic) -> Result<String> {
    let name = topic.topic.as_deref().ok_or(QuickError::NoTopic)?;
    let base = base_url.trim_end_matches('/');

    Ok(match topic.subtopic.as_deref() {
        Some(subtopic) => format!("{}/{}/{}", base, name, subtopic),
        None => format!("{}/{}", base, name),
    })
}

/// Open the topic's page in the default browser.
pub fn open_topic(base_url: &str, topic: &Topic) -> Result<String> {
    let url = topic_url(base_url, topic)?;
    info!(%url, "opening in browser");
    open::that(&url).map_err(|source| QuickError::Browser {
        url: url.clone(),
        source,
    })?;
    Ok(url)
}
