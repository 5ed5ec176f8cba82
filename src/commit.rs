//! Post metadata carried in commit messages.
//!
//! A commit that publishes a post carries the compressed payload directly in its message:
//!
//! ```text
//! blog: [itty:<base64url-payload>] Title: <text> | Desc: <text>
//! ```
//!
//! The payload uses the same transport text as URL fragments, so a post's URL can be rebuilt from
//! the commit alone. Messages without a well-formed `[itty:...]` marker are simply not posts;
//! parsing them yields `None` and they get skipped.

use serde::{Deserialize, Serialize};

use crate::{config::EncodeConfig, fragment::Fragment, transport::from_transport_text};

const MARKER: &str = "[itty:";
const TITLE_FIELD: &str = "Title:";
const DESC_FIELD: &str = "Desc:";

/// The fields pulled out of one commit message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct CommitMetadata<'a> {
    /// Transport text of the compressed post.
    pub payload: &'a str,
    /// `Title:` field, if present and non-empty.
    pub title: Option<&'a str>,
    /// `Desc:` field, if present and non-empty.
    pub description: Option<&'a str>,
    /// Length of the compressed payload, in bytes.
    pub compressed_size: usize,
}

impl<'a> CommitMetadata<'a> {
    /// Parse a commit message. Returns `None` unless some `[itty:...]` marker is terminated,
    /// non-empty, and holds valid transport text. Markers are tried in order and the first good
    /// one wins; the `Title:` and `Desc:` fields are read after it.
    pub fn parse(message: &'a str) -> Option<Self> {
        message
            .match_indices(MARKER)
            .find_map(|(at, _)| Self::parse_marker(&message[at + MARKER.len()..]))
    }

    /// Parse the text right after one `[itty:` marker.
    fn parse_marker(rest: &'a str) -> Option<Self> {
        let end = rest.find(']')?;
        let payload = &rest[..end];
        if payload.is_empty() {
            return None;
        }
        let compressed_size = match from_transport_text(payload) {
            Ok(compressed) => compressed.len(),
            Err(e) => {
                tracing::debug!(err = %e, "skipping malformed commit marker");
                return None;
            }
        };

        let fields = &rest[end + 1..];
        Some(Self {
            payload,
            title: field(fields, TITLE_FIELD),
            description: field(fields, DESC_FIELD),
            compressed_size,
        })
    }

    /// Build the post record, using the configured base URL and untitled fallback.
    pub fn into_post(self, config: &EncodeConfig) -> Post {
        let title = self.title.unwrap_or(config.untitled.as_str()).to_string();
        let url = config.url_for(&Fragment::assemble(&title, self.payload));
        Post {
            title,
            description: self.description.unwrap_or_default().to_string(),
            url,
            compressed_size: self.compressed_size,
            date: None,
        }
    }
}

/// Find `name` and return its value: everything up to the next `|` or end of line, trimmed.
fn field<'a>(fields: &'a str, name: &str) -> Option<&'a str> {
    let start = fields.find(name)? + name.len();
    let value = &fields[start..];
    let end = value.find(&['|', '\n', '\r'][..]).unwrap_or(value.len());
    let value = value[..end].trim();
    (!value.is_empty()).then_some(value)
}

/// A published post, as listed in a post index.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Post {
    pub title: String,
    #[serde(default)]
    pub description: String,
    pub url: String,
    pub compressed_size: usize,
    /// Publication date, as the caller stamped it. Carried through merges untouched.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub date: Option<String>,
}

impl Post {
    /// Stamp the post with a date. The format is up to the caller; it's stored verbatim.
    pub fn with_date(mut self, date: impl Into<String>) -> Self {
        self.date = Some(date.into());
        self
    }
}

/// Parse every message, keeping only the ones that describe posts.
///
/// Posts come out in the order the messages went in. `git log` lists newest first, so callers
/// building an oldest-first index should reverse its output before passing it here.
pub fn posts_from_messages<'a, I>(messages: I, config: &EncodeConfig) -> Vec<Post>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut skipped = 0usize;
    let posts: Vec<Post> = messages
        .into_iter()
        .filter_map(|msg| {
            let meta = CommitMetadata::parse(msg);
            if meta.is_none() {
                skipped += 1;
            }
            meta
        })
        .map(|meta| meta.into_post(config))
        .collect();
    tracing::debug!(posts = posts.len(), skipped, "parsed commit messages");
    posts
}

/// Combine freshly parsed posts with an existing index. Fresh posts come first, so an updated
/// entry replaces the old one; existing posts follow unless a fresh one already has their URL.
pub fn merge_posts(fresh: Vec<Post>, existing: Vec<Post>) -> Vec<Post> {
    let mut merged = fresh;
    for post in existing {
        if !merged.iter().any(|p| p.url == post.url) {
            merged.push(post);
        }
    }
    merged
}
