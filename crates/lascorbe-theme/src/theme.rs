//! The blog theme: one rendering function per kind of page.
//!
//! Every document shares the same skeleton: a `<head>` built from the page's [`Location`], then a grid made of the
//! sidebar, the page's main content and the footer. Renderers are pure, rendering the same content twice gives the
//! same markup.
use log::debug;
use maud::{Markup, PreEscaped, html};

mod head;
mod layout;
mod page;
mod post;
mod tags;

pub use head::{TITLE_SEPARATOR, TwitterCardType, head, page_description, page_title};
pub use layout::{document, footer, grid, page_content, posts, sidebar};
pub use page::page;
pub use post::{post, post_excerpt, twitter_share_url};
pub use tags::{tag_list, tag_list_page, tag_list_post};

use crate::content::{Item, Page, Section, TagDetailsPage, TagListPage};
use crate::context::{PublishingContext, SortOrder};
use crate::site::{PageLocation, TAGS_PATH};

/// Maps each kind of page to a document.
///
/// Tag pages are optional: returning `None` means the page should not be generated.
pub trait HtmlFactory {
    fn make_index_html(&self, context: &PublishingContext) -> Markup;
    fn make_section_html(&self, section: &Section, context: &PublishingContext) -> Markup;
    fn make_item_html(&self, item: &Item, context: &PublishingContext) -> Markup;
    fn make_page_html(&self, page: &Page, context: &PublishingContext) -> Markup;
    fn make_tag_list_html(&self, page: &TagListPage, context: &PublishingContext)
    -> Option<Markup>;
    fn make_tag_details_html(
        &self,
        page: &TagDetailsPage,
        context: &PublishingContext,
    ) -> Option<Markup>;
}

/// The lascorbe.com theme, built on Pure CSS.
#[derive(Debug, Clone, Copy, Default)]
pub struct BlogTheme;

impl HtmlFactory for BlogTheme {
    fn make_index_html(&self, context: &PublishingContext) -> Markup {
        let site = &context.site;
        let items = context.all_items(SortOrder::Descending);
        debug!("rendering index with {} posts", items.len());

        document(
            &PageLocation::new("", "/"),
            site,
            posts(&items, site, "Latest Posts"),
        )
    }

    fn make_section_html(&self, section: &Section, context: &PublishingContext) -> Markup {
        let site = &context.site;
        let items = context.items_in(section.id, SortOrder::Descending);

        document(
            section,
            site,
            page_content(html! {
                h1.content-subhead { (section.title) }
                @if let Some(body) = &section.body {
                    div.page-description {
                        div.post-description-text { (PreEscaped(body)) }
                    }
                }
                @for item in &items {
                    (post_excerpt(item, site))
                }
            }),
        )
    }

    fn make_item_html(&self, item: &Item, context: &PublishingContext) -> Markup {
        debug!("rendering post {}", item.id);
        document(item, &context.site, post(item, &context.site))
    }

    fn make_page_html(&self, page: &Page, context: &PublishingContext) -> Markup {
        document(page, &context.site, self::page(page, &context.site))
    }

    fn make_tag_list_html(
        &self,
        page: &TagListPage,
        context: &PublishingContext,
    ) -> Option<Markup> {
        let site = &context.site;

        Some(document(
            &PageLocation::new("Tags", TAGS_PATH),
            site,
            page_content(html! {
                h1.content-subhead { "Tags" }
                (tag_list_page(page, site))
            }),
        ))
    }

    fn make_tag_details_html(
        &self,
        page: &TagDetailsPage,
        context: &PublishingContext,
    ) -> Option<Markup> {
        let site = &context.site;
        let items = context.items_tagged_with(&page.tag, SortOrder::Descending);

        if items.is_empty() {
            return None;
        }

        let title = format!("{} posts", page.tag.capitalized());
        let location = PageLocation::new(title.clone(), site.path_for_tag(&page.tag));

        Some(document(&location, site, posts(&items, site, &title)))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::content::Tag;
    use crate::site::{SectionId, Site};
    use crate::test_support::post as item;

    fn context() -> PublishingContext {
        PublishingContext::new(
            Site::default(),
            vec![
                item("day-1", "2020-01-01", &["Swift"]),
                item("day-3", "2020-01-03", &["Swift", "iOS"]),
                item("day-2", "2020-01-02", &["Rust"]),
            ],
        )
    }

    fn positions(html: &str, needles: &[&str]) -> Vec<usize> {
        needles.iter().map(|n| html.find(n).unwrap()).collect()
    }

    #[test]
    fn test_index_lists_posts_newest_first() {
        let html = BlogTheme.make_index_html(&context()).into_string();
        let found = positions(&html, &["Title of day-3", "Title of day-2", "Title of day-1"]);

        assert!(found[0] < found[1] && found[1] < found[2]);
        assert!(html.contains("<title>Luis Ascorbe</title>"));
        assert!(html.contains("Latest Posts"));
    }

    #[test]
    fn test_rendering_is_idempotent() {
        let context = context();
        let theme = BlogTheme;
        let item = item("day-1", "2020-01-01", &["Swift"]).with_body("<p>Hi</p>");

        assert_eq!(
            theme.make_index_html(&context).into_string(),
            theme.make_index_html(&context).into_string()
        );
        assert_eq!(
            theme.make_item_html(&item, &context).into_string(),
            theme.make_item_html(&item, &context).into_string()
        );
    }

    #[test]
    fn test_item_document() {
        let context = context();
        let item = item("day-1", "2020-01-01", &["Swift"]).with_body("<p>Hi</p>");
        let html = BlogTheme.make_item_html(&item, &context).into_string();

        assert!(html.contains("<title>Title of day-1 | Luis Ascorbe</title>"));
        assert!(html.contains(r#"<meta name="description" content="Description of day-1">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://lascorbe.com/posts/day-1/">"#));
        assert!(html.contains("<p>Hi</p>"));
    }

    #[test]
    fn test_page_document() {
        let page = Page::new("uses", "Uses", "<p>A laptop.</p>").with_description("What I use");
        let html = BlogTheme.make_page_html(&page, &context()).into_string();

        assert!(html.contains("<title>Uses | Luis Ascorbe</title>"));
        assert!(html.contains(r#"content="What I use""#));
        assert!(html.contains("<p>A laptop.</p>"));
    }

    #[test]
    fn test_section_document() {
        let context = context();

        let about = Section::new(SectionId::About).with_body(Some("<p>Hello there</p>".to_string()));
        let html = BlogTheme.make_section_html(&about, &context).into_string();
        assert!(html.contains(r#"<h1 class="content-subhead">About</h1>"#));
        assert!(html.contains("<p>Hello there</p>"));
        assert!(!html.contains("section-post"));

        let posts = Section::new(SectionId::Posts);
        let html = BlogTheme.make_section_html(&posts, &context).into_string();
        assert_eq!(html.matches(r#"<section class="section-post">"#).count(), 3);
    }

    #[test]
    fn test_tag_list_document() {
        let context = context();
        let page = TagListPage {
            tags: context.all_tags(),
        };
        let html = BlogTheme.make_tag_list_html(&page, &context).unwrap().into_string();

        assert!(html.contains("<title>Tags | Luis Ascorbe</title>"));
        assert!(html.contains(r#"href="/tags/rust/""#));
        assert!(html.contains(r#"href="/tags/swift/""#));
        assert!(html.contains(r#"href="/tags/ios/""#));
    }

    #[test]
    fn test_tag_details_document() {
        let context = context();
        let page = TagDetailsPage {
            tag: Tag::new("swift"),
        };
        let html = BlogTheme
            .make_tag_details_html(&page, &context)
            .unwrap()
            .into_string();

        assert!(html.contains("<title>Swift posts | Luis Ascorbe</title>"));
        assert!(!html.contains("Title of day-2"));
        let found = positions(&html, &["Title of day-3", "Title of day-1"]);
        assert!(found[0] < found[1]);
    }

    #[test]
    fn test_unknown_tag_has_no_page() {
        let page = TagDetailsPage {
            tag: Tag::new("Kotlin"),
        };
        assert!(BlogTheme.make_tag_details_html(&page, &context()).is_none());
    }
}
