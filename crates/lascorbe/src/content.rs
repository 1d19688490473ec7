use chrono::NaiveDateTime;
use lascorbe_theme::{Item, ItemMetadata, Page, SectionId};
use maudit::content::{ContentSources, glob_markdown, markdown_entry};
use maudit::content_sources;

pub const POSTS_SOURCE: &str = "posts";
pub const ABOUT_SOURCE: &str = "about";
pub const PAGES_SOURCE: &str = "pages";

/// Id of the entry holding a section's own content, e.g. `content/about/index.md`.
pub const SECTION_INDEX: &str = "index";

#[markdown_entry]
pub struct PostContent {
    pub title: String,
    #[serde(deserialize_with = "lascorbe_theme::date::deserialize_publish_date")]
    pub date: NaiveDateTime,
    pub description: String,
    pub time_to_read: String,
    #[serde(default)]
    pub tags: Vec<String>,
    #[serde(default)]
    pub image: Option<String>,
}

impl PostContent {
    /// Converts the front matter of the post `id` to an [`Item`] without body, as shown in lists.
    pub fn to_item(&self, id: &str) -> Item {
        Item::new(id, SectionId::Posts, self.title.clone(), self.date)
            .with_tags(&self.tags)
            .with_metadata(ItemMetadata {
                description: self.description.clone(),
                time_to_read: self.time_to_read.clone(),
            })
            .with_image_path(self.image.clone())
    }
}

#[markdown_entry]
pub struct SectionContent {
    pub title: String,
}

#[markdown_entry]
pub struct PageContent {
    pub title: String,
    #[serde(default)]
    pub description: Option<String>,
}

impl PageContent {
    pub fn to_page(&self, id: &str, body: String) -> Page {
        Page::new(id, self.title.clone(), body)
            .with_description(self.description.clone().unwrap_or_default())
    }
}

pub fn content_sources() -> ContentSources {
    content_sources![
        POSTS_SOURCE => glob_markdown::<PostContent>("content/posts/*.md"),
        ABOUT_SOURCE => glob_markdown::<SectionContent>("content/about/*.md"),
        PAGES_SOURCE => glob_markdown::<PageContent>("content/pages/*.md")
    ]
}
