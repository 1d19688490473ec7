//! Building blocks shared by every document: the grid, the sidebar, the footer and the main content column.
use maud::{DOCTYPE, Markup, html};

use super::head::head;
use super::post::post_excerpt;
use crate::content::Item;
use crate::site::{Location, SectionId, Site, TAGS_PATH};

/// Wraps a complete document around the main content of a page.
pub fn document(location: &dyn Location, site: &Site, main: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang=(site.language) {
            (head(location, site))
            body {
                (grid(sidebar(site), main, footer(site)))
            }
        }
    }
}

pub fn grid(sidebar: Markup, main: Markup, footer: Markup) -> Markup {
    html! {
        div id="layout" class="pure-g" {
            (sidebar)
            (main)
            (footer)
        }
    }
}

/// The main content column.
pub fn page_content(content: Markup) -> Markup {
    html! {
        div.content."pure-u-1"."pure-u-md-3-4"."pure-u-xl-6-10" {
            (content)
        }
    }
}

pub fn sidebar(site: &Site) -> Markup {
    html! {
        div.sidebar."pure-u-1"."pure-u-md-1-4" {
            div.header {
                h1.brand-title {
                    a href="/" { (site.name) }
                }
                h2.brand-tagline { (site.description) }

                nav.nav {
                    ul.nav-list {
                        @for section in SectionId::ALL {
                            li.nav-item {
                                a.pure-button href=(site.path_for_section(section)) { (section.title()) }
                            }
                        }
                        li.nav-item {
                            a.pure-button href=(TAGS_PATH) { "Tags" }
                        }
                    }
                }

                @if !site.social_media.is_empty() {
                    ul.social-list {
                        @for social in &site.social_media {
                            li.social-item {
                                a href=(social.url()) title=(social.title()) target="_blank" rel="noopener" {
                                    i class=(social.icon()) {}
                                }
                            }
                        }
                    }
                }
            }
        }
    }
}

pub fn footer(site: &Site) -> Markup {
    html! {
        div.footer."pure-u-1" {
            p {
                (site.name)
                " · Generated using "
                a href="https://maudit.org" { "Maudit" }
            }
            @if let Some(rss_feed_path) = &site.rss_feed_path {
                p {
                    a href=(rss_feed_path) { "RSS feed" }
                }
            }
        }
    }
}

/// A titled list of post excerpts, in the order given.
pub fn posts(items: &[&Item], site: &Site, title: &str) -> Markup {
    page_content(html! {
        h1.content-subhead { (title) }
        @for item in items {
            (post_excerpt(item, site))
        }
        @if items.is_empty() {
            p.posts-empty { "Nothing here yet." }
        }
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::{PageLocation, SocialMedia};
    use crate::test_support::post;

    #[test]
    fn test_document_structure() {
        let html = document(
            &PageLocation::new("", "/"),
            &Site::default(),
            page_content(html! { p { "main" } }),
        )
        .into_string();

        assert!(html.starts_with(r#"<!DOCTYPE html><html lang="en"><head>"#));
        let sidebar = html.find(r#"class="sidebar"#).unwrap();
        let main = html.find("<p>main</p>").unwrap();
        let footer = html.find(r#"class="footer"#).unwrap();
        assert!(sidebar < main && main < footer);
        assert!(html.contains(r#"<div id="layout" class="pure-g">"#));
    }

    #[test]
    fn test_sidebar_links() {
        let site = Site {
            social_media: vec![SocialMedia::Email("me@example.com".to_string())],
            ..Default::default()
        };
        let html = sidebar(&site).into_string();

        assert!(html.contains(r#"href="/posts/""#));
        assert!(html.contains(r#"href="/about/""#));
        assert!(html.contains(r#"href="/tags/""#));
        assert!(html.contains(r#"href="mailto:me@example.com""#));
        assert!(html.contains(r#"<i class="fas fa-envelope"></i>"#));
    }

    #[test]
    fn test_sidebar_without_social_media() {
        let site = Site {
            social_media: vec![],
            ..Default::default()
        };
        assert!(!sidebar(&site).into_string().contains("social-list"));
    }

    #[test]
    fn test_posts_empty_state() {
        let html = posts(&[], &Site::default(), "Latest Posts").into_string();
        assert!(html.contains(r#"<h1 class="content-subhead">Latest Posts</h1>"#));
        assert!(html.contains("Nothing here yet."));
    }

    #[test]
    fn test_posts_keeps_given_order() {
        let first = post("first", "2020-01-01", &[]);
        let second = post("second", "2020-01-02", &[]);
        let html = posts(&[&second, &first], &Site::default(), "Posts").into_string();

        assert!(html.find("Title of second").unwrap() < html.find("Title of first").unwrap());
        assert!(!html.contains("Nothing here yet."));
    }
}
