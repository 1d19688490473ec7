//! Theme and content model for [lascorbe.com](https://lascorbe.com).
//!
//! Every renderer in this crate is a pure function from typed content to [`maud::Markup`]. Loading content, walking
//! the filesystem and writing the output is left to the site generator calling into the theme (see the `lascorbe`
//! crate, which drives it through Maudit).
//!
//! ## Example
//! ```rs
//! use lascorbe_theme::{BlogTheme, HtmlFactory, PublishingContext, Site};
//!
//! let context = PublishingContext::new(Site::default(), vec![]);
//! let html = BlogTheme.make_index_html(&context).into_string();
//! ```

pub mod content;
pub mod context;
pub mod date;
pub mod errors;
pub mod site;
pub mod theme;

pub use content::{Item, ItemMetadata, Page, Section, Tag, TagDetailsPage, TagListPage};
pub use context::{PublishingContext, SortOrder};
pub use site::{Location, PageLocation, SectionId, Site, SocialMedia};
pub use theme::{BlogTheme, HtmlFactory};

#[cfg(test)]
pub(crate) mod test_support;
