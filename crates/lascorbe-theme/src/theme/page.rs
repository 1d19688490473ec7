use maud::{Markup, PreEscaped, html};

use super::layout::page_content;
use crate::content::Page;
use crate::site::Site;

pub fn page(page: &Page, _site: &Site) -> Markup {
    page_content(html! {
        h1.content-subhead { (page.title) }
        div.page-description {
            div.post-description-text {
                (PreEscaped(&page.body))
            }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_page_renders_title_and_body() {
        let html = page(&Page::new("uses", "Uses", "<p>A laptop.</p>"), &Site::default()).into_string();

        assert!(html.contains(r#"<h1 class="content-subhead">Uses</h1>"#));
        assert!(html.contains(
            r#"<div class="page-description"><div class="post-description-text"><p>A laptop.</p></div></div>"#
        ));
    }
}
