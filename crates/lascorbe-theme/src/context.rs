//! Queries over the content of a single build.
use std::collections::BTreeSet;

use log::trace;

use crate::content::{Item, Tag};
use crate::site::{SectionId, Site};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SortOrder {
    Ascending,
    Descending,
}

/// Everything the theme can know about the website while rendering a page.
#[derive(Debug, Clone)]
pub struct PublishingContext {
    pub site: Site,
    items: Vec<Item>,
}

impl PublishingContext {
    pub fn new(site: Site, items: Vec<Item>) -> Self {
        Self { site, items }
    }

    /// Every item of the website, sorted by publish date. Items published at the same time keep their relative order.
    pub fn all_items(&self, order: SortOrder) -> Vec<&Item> {
        sorted_by_date(self.items.iter(), order)
    }

    pub fn items_in(&self, section: SectionId, order: SortOrder) -> Vec<&Item> {
        sorted_by_date(self.items.iter().filter(|item| item.section == section), order)
    }

    pub fn items_tagged_with(&self, tag: &Tag, order: SortOrder) -> Vec<&Item> {
        let items = sorted_by_date(self.items.iter().filter(|item| item.has_tag(tag)), order);
        trace!("{} items tagged with {}", items.len(), tag);
        items
    }

    pub fn all_tags(&self) -> BTreeSet<Tag> {
        self.items
            .iter()
            .flat_map(|item| item.tags.iter().cloned())
            .collect()
    }

    /// Finds the tag whose page lives at `slug`, as used in tag page URLs.
    pub fn tag_with_slug(&self, slug: &str) -> Option<&Tag> {
        self.items
            .iter()
            .flat_map(|item| item.tags.iter())
            .find(|tag| tag.slug() == slug)
    }
}

fn sorted_by_date<'a>(items: impl Iterator<Item = &'a Item>, order: SortOrder) -> Vec<&'a Item> {
    let mut items: Vec<&Item> = items.collect();

    match order {
        SortOrder::Ascending => items.sort_by(|a, b| a.date.cmp(&b.date)),
        SortOrder::Descending => items.sort_by(|a, b| b.date.cmp(&a.date)),
    }

    items
}
