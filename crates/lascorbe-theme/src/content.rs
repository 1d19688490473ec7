//! Content rendered by the theme: posts ([`Item`]), standalone pages, sections and tags.
//!
//! These are produced by the site generator from source files and are read-only for the theme.
use std::collections::BTreeSet;
use std::fmt;

use chrono::NaiveDateTime;
use maud::{Markup, Render, html};

use crate::site::{Location, SectionId};

/// Free-form metadata every post carries in its front matter.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ItemMetadata {
    pub description: String,
    /// Estimated reading time, as written by the author, e.g. `5 min`.
    pub time_to_read: String,
}

/// A single timestamped content entry, i.e. a blog post.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Item {
    pub id: String,
    pub section: SectionId,
    pub title: String,
    pub date: NaiveDateTime,
    /// Rendered HTML of the body. Left empty when the item is only shown in lists.
    pub body: String,
    pub tags: Vec<Tag>,
    pub path: String,
    pub metadata: ItemMetadata,
    pub image_path: Option<String>,
}

impl Item {
    pub fn new(
        id: impl Into<String>,
        section: SectionId,
        title: impl Into<String>,
        date: NaiveDateTime,
    ) -> Self {
        let id = id.into();
        let path = format!("/{}/{}/", section.as_str(), id);

        Self {
            id,
            section,
            title: title.into(),
            date,
            body: String::new(),
            tags: vec![],
            path,
            metadata: ItemMetadata::default(),
            image_path: None,
        }
    }

    pub fn with_body(mut self, body: impl Into<String>) -> Self {
        self.body = body.into();
        self
    }

    pub fn with_tags<I, T>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = T>,
        T: Into<Tag>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    pub fn with_metadata(mut self, metadata: ItemMetadata) -> Self {
        self.metadata = metadata;
        self
    }

    pub fn with_image_path(mut self, image_path: Option<String>) -> Self {
        self.image_path = image_path;
        self
    }

    pub fn has_tag(&self, tag: &Tag) -> bool {
        self.tags.iter().any(|t| t.slug() == tag.slug())
    }
}

impl Location for Item {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.metadata.description
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }
}

/// A standalone, non-timestamped content entry.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Page {
    pub id: String,
    pub title: String,
    pub description: String,
    pub body: String,
    pub path: String,
}

impl Page {
    pub fn new(id: impl Into<String>, title: impl Into<String>, body: impl Into<String>) -> Self {
        let id = id.into();
        let path = format!("/{}/", id);

        Self {
            id,
            title: title.into(),
            description: String::new(),
            body: body.into(),
            path,
        }
    }

    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }
}

impl Location for Page {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn path(&self) -> &str {
        &self.path
    }
}

/// A named grouping of content.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Section {
    pub id: SectionId,
    pub title: String,
    pub path: String,
    /// Rendered HTML of the section's own content, if it has any.
    pub body: Option<String>,
}

impl Section {
    pub fn new(id: SectionId) -> Self {
        Self {
            id,
            title: id.title().to_string(),
            path: format!("/{}/", id.as_str()),
            body: None,
        }
    }

    pub fn with_body(mut self, body: Option<String>) -> Self {
        self.body = body;
        self
    }
}

impl Location for Section {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        ""
    }

    fn path(&self) -> &str {
        &self.path
    }
}

/// A label attached to posts.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Tag(String);

impl Tag {
    pub fn new(label: impl Into<String>) -> Self {
        Self(label.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// URL-safe form of the tag, used for its page path.
    pub fn slug(&self) -> String {
        slug::slugify(&self.0)
    }

    /// The tag with the first letter of each word upper-cased and every other letter lower-cased, e.g. `iOS` becomes
    /// `Ios` and `server side` becomes `Server Side`.
    pub fn capitalized(&self) -> String {
        let mut result = String::with_capacity(self.0.len());
        let mut word_start = true;

        for c in self.0.chars() {
            if c.is_whitespace() {
                word_start = true;
                result.push(c);
            } else if word_start {
                word_start = false;
                result.extend(c.to_uppercase());
            } else {
                result.extend(c.to_lowercase());
            }
        }

        result
    }
}

impl From<&str> for Tag {
    fn from(label: &str) -> Self {
        Tag::new(label)
    }
}

impl From<String> for Tag {
    fn from(label: String) -> Self {
        Tag(label)
    }
}

impl From<&String> for Tag {
    fn from(label: &String) -> Self {
        Tag(label.clone())
    }
}

impl fmt::Display for Tag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Render for Tag {
    fn render(&self) -> Markup {
        html! { (self.0) }
    }
}

/// Synthetic page listing every known tag.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TagListPage {
    pub tags: BTreeSet<Tag>,
}

/// Synthetic page listing every post tagged with a given tag.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TagDetailsPage {
    pub tag: Tag,
}
