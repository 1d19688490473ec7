//! Site configuration and the notion of a location on the site.
use serde::Deserialize;

use crate::content::Tag;

/// Path of the page listing every tag.
pub const TAGS_PATH: &str = "/tags/";

/// Static configuration of the website. Created once at startup and only read afterwards.
///
/// Missing fields fall back to the values of [`Site::default()`], so a configuration file only needs to list what it
/// overrides.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct Site {
    /// Base URL of the website, without a trailing slash, e.g. `https://lascorbe.com`.
    pub url: String,
    pub name: String,
    pub description: String,
    /// Language code used for the `lang` attribute of every document.
    pub language: String,
    /// Social image used when a location does not provide its own.
    pub image_path: Option<String>,
    pub social_media: Vec<SocialMedia>,
    /// Path of an RSS feed produced outside of this theme. No link is emitted when unset.
    pub rss_feed_path: Option<String>,
    /// Twitter account credited in "share this post" links. No share link is emitted when unset.
    pub twitter_handle: Option<String>,
}

impl Default for Site {
    fn default() -> Self {
        Self {
            url: "https://lascorbe.com".to_string(),
            name: "Luis Ascorbe".to_string(),
            description: "Software Developer. Tech Lead. Speaker. Conference Organizer.".to_string(),
            language: "en".to_string(),
            image_path: None,
            social_media: vec![
                SocialMedia::GitHub("lascorbe".to_string()),
                SocialMedia::Twitter("lascorbe".to_string()),
                SocialMedia::LinkedIn("lascorbe".to_string()),
            ],
            rss_feed_path: None,
            twitter_handle: Some("lascorbe".to_string()),
        }
    }
}

impl Site {
    /// Returns the absolute URL of a path on this site. Already absolute URLs are returned unchanged.
    pub fn url_for(&self, path: &str) -> String {
        if path.starts_with("http://") || path.starts_with("https://") {
            return path.to_string();
        }

        let base = self.url.trim_end_matches('/');
        if path.starts_with('/') {
            format!("{}{}", base, path)
        } else {
            format!("{}/{}", base, path)
        }
    }

    /// Returns the path of the page listing every item tagged with `tag`.
    pub fn path_for_tag(&self, tag: &Tag) -> String {
        format!("{}{}/", TAGS_PATH, tag.slug())
    }

    pub fn path_for_section(&self, section: SectionId) -> String {
        format!("/{}/", section.as_str())
    }
}

/// A link to one of the author's profiles, shown in the sidebar.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SocialMedia {
    /// An email address.
    Email(String),
    /// A GitHub username.
    GitHub(String),
    /// A Twitter handle, without the leading `@`.
    Twitter(String),
    /// A LinkedIn profile name, as found in `linkedin.com/in/<name>`.
    LinkedIn(String),
}

impl SocialMedia {
    pub fn url(&self) -> String {
        match self {
            SocialMedia::Email(address) => format!("mailto:{}", address),
            SocialMedia::GitHub(user) => format!("https://github.com/{}", user),
            SocialMedia::Twitter(user) => format!("https://twitter.com/{}", user),
            SocialMedia::LinkedIn(user) => format!("https://www.linkedin.com/in/{}", user),
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SocialMedia::Email(_) => "Email",
            SocialMedia::GitHub(_) => "GitHub",
            SocialMedia::Twitter(_) => "Twitter",
            SocialMedia::LinkedIn(_) => "LinkedIn",
        }
    }

    /// Font Awesome classes of the icon representing this profile.
    pub fn icon(&self) -> &'static str {
        match self {
            SocialMedia::Email(_) => "fas fa-envelope",
            SocialMedia::GitHub(_) => "fab fa-github",
            SocialMedia::Twitter(_) => "fab fa-twitter",
            SocialMedia::LinkedIn(_) => "fab fa-linkedin",
        }
    }
}

/// The sections of the website.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum SectionId {
    Posts,
    About,
}

impl SectionId {
    pub const ALL: [SectionId; 2] = [SectionId::Posts, SectionId::About];

    /// Stable key of the section, also used as its path segment.
    pub fn as_str(&self) -> &'static str {
        match self {
            SectionId::Posts => "posts",
            SectionId::About => "about",
        }
    }

    pub fn title(&self) -> &'static str {
        match self {
            SectionId::Posts => "Posts",
            SectionId::About => "About",
        }
    }
}

/// Anything that can be rendered as a standalone document, and thus needs a `<head>`.
pub trait Location {
    /// Title of the location. Empty for the home page, which uses the site's name instead.
    fn title(&self) -> &str;
    /// Description of the location. When empty, the site's description is used instead.
    fn description(&self) -> &str;
    /// Path of the location relative to the site root, e.g. `/posts/hello-world/`.
    fn path(&self) -> &str;
    fn image_path(&self) -> Option<&str> {
        None
    }
}

/// Location of pages which have no content entry behind them, such as the home page or tag pages.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PageLocation {
    pub title: String,
    pub description: String,
    pub path: String,
    pub image_path: Option<String>,
}

impl PageLocation {
    pub fn new(title: impl Into<String>, path: impl Into<String>) -> Self {
        Self {
            title: title.into(),
            path: path.into(),
            ..Default::default()
        }
    }
}

impl Location for PageLocation {
    fn title(&self) -> &str {
        &self.title
    }

    fn description(&self) -> &str {
        &self.description
    }

    fn path(&self) -> &str {
        &self.path
    }

    fn image_path(&self) -> Option<&str> {
        self.image_path.as_deref()
    }
}
