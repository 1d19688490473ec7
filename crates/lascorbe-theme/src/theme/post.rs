use maud::{Markup, PreEscaped, html};

use super::layout::page_content;
use super::tags::{tag_list, tag_list_post};
use crate::content::Item;
use crate::date::date_and_reading_time;
use crate::site::Site;

/// Link opening a pre-filled tweet about `item`, crediting `handle`.
pub fn twitter_share_url(item: &Item, site: &Site, handle: &str) -> String {
    format!(
        "https://twitter.com/intent/tweet?via={}&text={}&url={}",
        urlencoding::encode(handle),
        urlencoding::encode(&item.title),
        urlencoding::encode(&site.url_for(&item.path)),
    )
}

/// Full rendering of a post.
pub fn post(item: &Item, site: &Site) -> Markup {
    page_content(html! {
        h2.post-title { (item.title) }
        p.post-meta { (date_and_reading_time(&item.date, &item.metadata.time_to_read)) }
        (tag_list_post(&item.tags, site))
        div.post-description {
            div.description-text {
                (PreEscaped(&item.body))
            }
        }
        @if let Some(handle) = &site.twitter_handle {
            div.post-description {
                div."pure-u-md-1-1" {
                    a href=(twitter_share_url(item, site, handle)) target="_blank" {
                        i class="fab fa-twitter" {}
                        " Share this post on Twitter."
                    }
                }
            }
        }
    })
}

/// Summary card of a post, used in lists.
pub fn post_excerpt(item: &Item, site: &Site) -> Markup {
    html! {
        section.section-post {
            div.mini-post {
                header.mini-post-header {
                    h2.mini-post-title {
                        a href=(item.path) { (item.title) }
                    }
                    p.mini-post-meta { (date_and_reading_time(&item.date, &item.metadata.time_to_read)) }
                    (tag_list(&item.tags, site))
                }
                div.mini-post-description {
                    p.mini-post-description-text {
                        a href=(item.path) { (item.metadata.description) }
                    }
                }
            }
        }
    }
}
