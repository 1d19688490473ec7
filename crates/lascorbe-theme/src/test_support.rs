use crate::content::{Item, ItemMetadata};
use crate::date::parse_publish_date;
use crate::site::SectionId;

pub fn post(id: &str, date: &str, tags: &[&str]) -> Item {
    Item::new(
        id,
        SectionId::Posts,
        format!("Title of {}", id),
        parse_publish_date(date).unwrap(),
    )
    .with_tags(tags.iter().copied())
    .with_metadata(ItemMetadata {
        description: format!("Description of {}", id),
        time_to_read: "5 min".to_string(),
    })
}
