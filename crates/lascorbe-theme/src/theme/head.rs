use maud::{Markup, html};

use crate::site::{Location, Site};

pub const TITLE_SEPARATOR: &str = " | ";

/// Pinned Pure CSS build, loaded with its subresource integrity hash.
const PURE_CSS: &str = "https://unpkg.com/purecss@1.0.1/build/pure-min.css";
const PURE_CSS_INTEGRITY: &str =
    "sha384-oAOxQR6DkCoMliIh8yFnu25d7Eq/PHS21PClpwjOTeU2jRSq11vu66rf90/cZr47";

const STYLESHEETS: &[&str] = &[
    "https://unpkg.com/purecss@1.0.1/build/grids-responsive-min.css",
    "/Pure/styles.css",
    "/FontAwesomeCSS/all.css",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TwitterCardType {
    Summary,
    SummaryLargeImage,
}

impl TwitterCardType {
    pub fn as_str(&self) -> &'static str {
        match self {
            TwitterCardType::Summary => "summary",
            TwitterCardType::SummaryLargeImage => "summary_large_image",
        }
    }
}

/// Title of a document: the location's title followed by the site's name, or the site's name alone.
pub fn page_title(location: &dyn Location, site: &Site) -> String {
    let title = location.title();

    if title.is_empty() {
        site.name.clone()
    } else {
        format!("{}{}{}", title, TITLE_SEPARATOR, site.name)
    }
}

pub fn page_description<'a>(location: &'a dyn Location, site: &'a Site) -> &'a str {
    let description = location.description();

    if description.is_empty() {
        &site.description
    } else {
        description
    }
}

/// Renders the `<head>` of a document.
pub fn head(location: &dyn Location, site: &Site) -> Markup {
    let title = page_title(location, site);
    let description = page_description(location, site);
    let url = site.url_for(location.path());
    let image_path = location.image_path().or(site.image_path.as_deref());
    let card_type = if image_path.is_some() {
        TwitterCardType::SummaryLargeImage
    } else {
        TwitterCardType::Summary
    };

    html! {
        head {
            meta charset="UTF-8";
            meta property="og:site_name" content=(site.name);

            link rel="canonical" href=(url);
            meta name="twitter:url" content=(url);
            meta property="og:url" content=(url);

            title { (title) }
            meta name="twitter:title" content=(title);
            meta property="og:title" content=(title);

            meta name="description" content=(description);
            meta name="twitter:description" content=(description);
            meta property="og:description" content=(description);

            meta name="twitter:card" content=(card_type.as_str());
            meta name="viewport" content="width=device-width, initial-scale=1.0";

            @if let Some(rss_feed_path) = &site.rss_feed_path {
                link rel="alternate" href=(site.url_for(rss_feed_path)) type="application/rss+xml" title=(format!("Subscribe to {}", site.name));
            }

            @if let Some(image_path) = image_path {
                @let image_url = site.url_for(image_path);
                meta name="twitter:image" content=(image_url);
                meta property="og:image" content=(image_url);
            }

            link rel="stylesheet" href=(PURE_CSS) integrity=(PURE_CSS_INTEGRITY) crossorigin="anonymous";
            @for stylesheet in STYLESHEETS {
                link rel="stylesheet" href=(stylesheet) type="text/css";
            }

            link rel="icon" href="/favicon-32x32.png" type="image/png" sizes="32x32";
            link rel="icon" href="/favicon-16x16.png" type="image/png" sizes="16x16";
            link rel="apple-touch-icon" href="/apple-touch-icon.png" type="image/png" sizes="180x180";
            link rel="manifest" href="/site.webmanifest";
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::site::PageLocation;

    fn site() -> Site {
        Site {
            url: "https://example.com".to_string(),
            name: "Bar".to_string(),
            description: "Site description".to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_empty_location_falls_back_to_site() {
        let location = PageLocation::new("", "/");
        let html = head(&location, &site()).into_string();

        assert!(html.contains("<title>Bar</title>"));
        assert!(html.contains(r#"<meta name="description" content="Site description">"#));
        assert!(html.contains(r#"<link rel="canonical" href="https://example.com/">"#));
    }

    #[test]
    fn test_title_is_joined_with_site_name() {
        let location = PageLocation {
            title: "Foo".to_string(),
            description: "Foo description".to_string(),
            path: "/foo/".to_string(),
            image_path: None,
        };
        let html = head(&location, &site()).into_string();

        assert_eq!(page_title(&location, &site()), "Foo | Bar");
        assert!(html.contains("<title>Foo | Bar</title>"));
        assert!(html.contains(r#"<meta name="description" content="Foo description">"#));
    }

    #[test]
    fn test_twitter_card_depends_on_image() {
        let mut location = PageLocation::new("Foo", "/foo/");
        let html = head(&location, &site()).into_string();
        assert!(html.contains(r#"<meta name="twitter:card" content="summary">"#));
        assert!(!html.contains("og:image"));

        location.image_path = Some("/images/foo.png".to_string());
        let html = head(&location, &site()).into_string();
        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(html.contains(
            r#"<meta property="og:image" content="https://example.com/images/foo.png">"#
        ));
    }

    #[test]
    fn test_site_image_is_used_as_fallback() {
        let site = Site {
            image_path: Some("/social.png".to_string()),
            ..site()
        };
        let html = head(&PageLocation::new("Foo", "/foo/"), &site).into_string();

        assert!(html.contains(r#"<meta name="twitter:card" content="summary_large_image">"#));
        assert!(html.contains(r#"content="https://example.com/social.png""#));
    }

    #[test]
    fn test_rss_link_is_optional() {
        let location = PageLocation::new("", "/");
        assert!(!head(&location, &site()).into_string().contains("application/rss+xml"));

        let site = Site {
            rss_feed_path: Some("/feed.rss".to_string()),
            ..site()
        };
        let html = head(&location, &site).into_string();
        assert!(html.contains(r#"href="https://example.com/feed.rss""#));
        assert!(html.contains(r#"title="Subscribe to Bar""#));
    }

    #[test]
    fn test_pinned_stylesheet_and_icons() {
        let html = head(&PageLocation::new("", "/"), &site()).into_string();

        assert!(html.contains(
            r#"<link rel="stylesheet" href="https://unpkg.com/purecss@1.0.1/build/pure-min.css" integrity="sha384-oAOxQR6DkCoMliIh8yFnu25d7Eq/PHS21PClpwjOTeU2jRSq11vu66rf90/cZr47" crossorigin="anonymous">"#
        ));
        assert!(html.contains(r#"href="/FontAwesomeCSS/all.css""#));
        assert!(html.contains(r#"<link rel="manifest" href="/site.webmanifest">"#));
        assert!(html.contains(r#"sizes="180x180""#));
    }

    #[test]
    fn test_values_are_escaped() {
        let location = PageLocation::new("Tom & Jerry", "/");
        let html = head(&location, &site()).into_string();
        assert!(html.contains("<title>Tom &amp; Jerry | Bar</title>"));
    }
}
