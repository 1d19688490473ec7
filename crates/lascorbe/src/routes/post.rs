use lascorbe_theme::{BlogTheme, HtmlFactory};
use maudit::route::prelude::*;

use crate::content::{POSTS_SOURCE, PostContent};
use crate::routes::publishing_context;

#[route("/posts/[post]/")]
pub struct Post;

#[derive(Params, Clone)]
pub struct PostParams {
    pub post: String,
}

impl Route<PostParams> for Post {
    fn pages(&self, ctx: &mut DynamicRouteContext) -> Pages<PostParams> {
        let posts = ctx.content.get_source::<PostContent>(POSTS_SOURCE);

        posts.into_pages(|entry| {
            Page::from_params(PostParams {
                post: entry.id.clone(),
            })
        })
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let params = ctx.params::<PostParams>();
        let context = publishing_context(ctx);

        let entry = ctx
            .content
            .get_source::<PostContent>(POSTS_SOURCE)
            .get_entry(&params.post);
        let item = entry.data(ctx).to_item(&entry.id).with_body(entry.render(ctx));

        BlogTheme.make_item_html(&item, &context)
    }
}
