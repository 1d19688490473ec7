use lascorbe_theme::{BlogTheme, HtmlFactory};
use log::warn;
use maudit::route::prelude::*;

use crate::content::{PAGES_SOURCE, PageContent};
use crate::routes::publishing_context;

/// Pages which would be shadowed by another route.
const RESERVED_IDS: &[&str] = &["posts", "about", "tags"];

/// Standalone pages, e.g. `content/pages/uses.md` is available at `/uses/`.
#[route("/[page]/")]
pub struct StandalonePage;

#[derive(Params, Clone)]
pub struct StandalonePageParams {
    pub page: String,
}

impl Route<StandalonePageParams> for StandalonePage {
    fn pages(&self, ctx: &mut DynamicRouteContext) -> Pages<StandalonePageParams> {
        let pages = ctx.content.get_source::<PageContent>(PAGES_SOURCE);

        pages
            .entries
            .iter()
            .filter(|entry| {
                let reserved = RESERVED_IDS.contains(&entry.id.as_str());
                if reserved {
                    warn!("Skipping page `{}`, its path is used by a section", entry.id);
                }
                !reserved
            })
            .map(|entry| {
                Page::from_params(StandalonePageParams {
                    page: entry.id.clone(),
                })
            })
            .collect()
    }

    fn render(&self, ctx: &mut PageContext) -> impl Into<RenderResult> {
        let params = ctx.params::<StandalonePageParams>();
        let context = publishing_context(ctx);

        let entry = ctx
            .content
            .get_source::<PageContent>(PAGES_SOURCE)
            .get_entry(&params.page);
        let body = entry.render(ctx);
        let page = entry.data(ctx).to_page(&entry.id, body);

        BlogTheme.make_page_html(&page, &context)
    }
}
