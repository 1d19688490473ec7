use maud::{Markup, html};

use crate::content::{Tag, TagListPage};
use crate::site::Site;

fn category_class(prefix: &str, tag: &Tag) -> String {
    format!("{} post-category-{}", prefix, tag.as_str().to_lowercase())
}

fn tag_links(container_class: &str, link_class: &str, tags: &[Tag], site: &Site) -> Markup {
    html! {
        div class=(container_class) {
            @for tag in tags {
                a class=(category_class(link_class, tag)) href=(site.path_for_tag(tag)) { (tag) }
            }
        }
    }
}

/// Compact list of tags, used in excerpts and on the tag list page.
pub fn tag_list(tags: &[Tag], site: &Site) -> Markup {
    tag_links("mini-post-tags", "mini-post-category", tags, site)
}

/// List of tags shown at the top of a full post.
pub fn tag_list_post(tags: &[Tag], site: &Site) -> Markup {
    tag_links("post-tags", "post-category", tags, site)
}

pub fn tag_list_page(page: &TagListPage, site: &Site) -> Markup {
    let tags: Vec<Tag> = page.tags.iter().cloned().collect();
    tag_list(&tags, site)
}
