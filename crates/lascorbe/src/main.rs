use content::content_sources;
use maudit::{BuildOptions, BuildOutput, coronate, routes};

mod config;
mod content;
mod errors;
mod routes;

use routes::*;

fn main() -> Result<BuildOutput, Box<dyn std::error::Error>> {
    let site = config::init(config::load_site(&config::config_path())?);

    coronate(
        routes![
            Index,
            PostsSection,
            AboutSection,
            Post,
            StandalonePage,
            TagList,
            TagDetails,
            NotFound
        ],
        content_sources(),
        BuildOptions {
            base_url: Some(site.url.clone()),
            ..Default::default()
        },
    )
}
