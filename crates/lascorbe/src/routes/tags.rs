use std::collections::BTreeSet;
use std::error::Error;

use lascorbe_theme::{BlogTheme, HtmlFactory, PublishingContext, Tag, TagDetailsPage, TagListPage};
use log::debug;
use maud::Markup;
use maudit::route::prelude::*;

use crate::content::{POSTS_SOURCE, PostContent};
use crate::errors::RouteError;
use crate::routes::publishing_context;

#[route("/tags/")]
pub struct TagList;

impl Route for TagList {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let context = publishing_context(ctx);
        render_tag_list(&context)
    }
}

fn render_tag_list(context: &PublishingContext) -> Result<Markup, Box<dyn Error>> {
    let page = TagListPage {
        tags: context.all_tags(),
    };
    debug!("{} tags", page.tags.len());

    BlogTheme
        .make_tag_list_html(&page, context)
        .ok_or_else(|| RouteError::NoTagList.into())
}

#[route("/tags/[tag]/")]
pub struct TagDetails;

#[derive(Params, Clone)]
pub struct TagDetailsParams {
    pub tag: String,
}

impl Route<TagDetailsParams> for TagDetails {
    fn pages(&self, ctx: &mut DynamicRouteContext) -> Pages<TagDetailsParams> {
        let posts = ctx.content.get_source::<PostContent>(POSTS_SOURCE);

        let mut slugs = BTreeSet::new();
        for entry in &posts.entries {
            for tag in &entry.data(ctx).tags {
                slugs.insert(Tag::new(tag.as_str()).slug());
            }
        }

        slugs
            .into_iter()
            .map(|tag| Page::from_params(TagDetailsParams { tag }))
            .collect()
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let params = ctx.params::<TagDetailsParams>();
        let context = publishing_context(ctx);
        render_tag_details(&context, &params.tag)
    }
}

fn render_tag_details(context: &PublishingContext, slug: &str) -> Result<Markup, Box<dyn Error>> {
    let unknown = || RouteError::UnknownTag {
        slug: slug.to_string(),
    };

    let tag = context.tag_with_slug(slug).cloned().ok_or_else(unknown)?;

    BlogTheme
        .make_tag_details_html(&TagDetailsPage { tag }, context)
        .ok_or_else(|| unknown().into())
}

#[cfg(test)]
mod tests {
    use super::*;
    use lascorbe_theme::date::parse_publish_date;
    use lascorbe_theme::{Item, SectionId, Site};

    fn context() -> PublishingContext {
        let date = parse_publish_date("2020-01-01").unwrap();
        PublishingContext::new(
            Site::default(),
            vec![Item::new("a", SectionId::Posts, "A", date).with_tags(["Server Side", "Swift"])],
        )
    }

    #[test]
    fn test_tag_details_from_slug() {
        let html = render_tag_details(&context(), "server-side").unwrap().into_string();
        assert!(html.contains("<title>Server Side posts | Luis Ascorbe</title>"));
    }

    #[test]
    fn test_unknown_tag_slug() {
        let err = render_tag_details(&context(), "kotlin").unwrap_err();
        assert_eq!(err.to_string(), "No post is tagged with `kotlin`");
    }

    #[test]
    fn test_tag_list() {
        let html = render_tag_list(&context()).unwrap().into_string();
        assert!(html.contains(r#"href="/tags/server-side/""#));
        assert!(html.contains(r#"href="/tags/swift/""#));
    }
}
