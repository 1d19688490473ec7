use lascorbe_theme::PublishingContext;
use maudit::route::PageContext;

use crate::config::site;
use crate::content::{POSTS_SOURCE, PostContent};

mod index;
mod not_found;
mod page;
mod post;
mod sections;
mod tags;

pub use index::Index;
pub use not_found::NotFound;
pub use page::StandalonePage;
pub use post::Post;
pub use sections::{AboutSection, PostsSection};
pub use tags::{TagDetails, TagList};

/// Gathers every post of the website, without their bodies, for pages listing posts.
pub(crate) fn publishing_context(ctx: &mut PageContext) -> PublishingContext {
    let posts = ctx.content.get_source::<PostContent>(POSTS_SOURCE);

    let mut items = Vec::with_capacity(posts.entries.len());
    for entry in &posts.entries {
        items.push(entry.data(ctx).to_item(&entry.id));
    }

    PublishingContext::new(site().clone(), items)
}
