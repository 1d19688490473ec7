use lascorbe_theme::PageLocation;
use lascorbe_theme::theme::{document, page_content};
use maud::html;
use maudit::route::prelude::*;

use crate::config::site;

#[route("404.html")]
pub struct NotFound;

impl Route for NotFound {
    fn render(&self, _ctx: &mut PageContext) -> impl Into<RenderResult> {
        document(
            &PageLocation::new("Page not found", "/404.html"),
            site(),
            page_content(html! {
                h1.content-subhead { "Page not found" }
                p {
                    "This page does not exist. "
                    a href="/" { "Go back to the latest posts." }
                }
            }),
        )
    }
}
