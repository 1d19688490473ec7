use lascorbe_theme::{BlogTheme, HtmlFactory};
use maudit::route::prelude::*;

use crate::routes::publishing_context;

#[route("/")]
pub struct Index;

impl Route for Index {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let context = publishing_context(ctx);
        BlogTheme.make_index_html(&context)
    }
}
