use lascorbe_theme::{BlogTheme, HtmlFactory, Section, SectionId};
use maudit::route::prelude::*;

use crate::content::{ABOUT_SOURCE, SECTION_INDEX, SectionContent};
use crate::routes::publishing_context;

#[route("/posts/")]
pub struct PostsSection;

impl Route for PostsSection {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let context = publishing_context(ctx);
        BlogTheme.make_section_html(&Section::new(SectionId::Posts), &context)
    }
}

#[route("/about/")]
pub struct AboutSection;

impl Route for AboutSection {
    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let context = publishing_context(ctx);
        let about = ctx.content.get_source::<SectionContent>(ABOUT_SOURCE);

        let mut section = Section::new(SectionId::About);
        if let Some(entry) = about.entries.iter().find(|entry| entry.id == SECTION_INDEX) {
            section.title = entry.data(ctx).title.clone();
            section.body = Some(entry.render(ctx));
        }

        BlogTheme.make_section_html(&section, &context)
    }
}
