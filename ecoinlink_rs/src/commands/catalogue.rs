//! `ecoinlink catalogue`: platforms, features and statistics.

use anyhow::{Context, Result};
use console::style;
use ecoinlink_site::catalogue::{features, platforms, statistics};
use ecoinlink_site::model::{Feature, Platform, Statistic};
use serde::Serialize;

#[derive(Serialize)]
struct Catalogue {
    platforms: &'static [Platform],
    features: &'static [Feature],
    statistics: &'static [Statistic],
}

pub fn run(json: bool) -> Result<()> {
    if json {
        let catalogue = Catalogue {
            platforms: platforms(),
            features: features(),
            statistics: statistics(),
        };
        let out = serde_json::to_string_pretty(&catalogue).context("serializing catalogue")?;
        println!("{out}");
        return Ok(());
    }

    println!("{}", style("Platforms").bold());
    for platform in platforms() {
        println!(
            "  {:<9} {} ({}) [{}]",
            platform.id.key(),
            platform.name,
            platform.slogan,
            platform.id.route().path(),
        );
    }

    println!("{}", style("Features").bold());
    for feature in features() {
        let secure = if feature.is_secure() { " [encrypted]" } else { "" };
        println!(
            "  {:<14} {:<9} {}{}",
            feature.id,
            feature.platform.key(),
            feature.title,
            secure
        );
    }

    println!("{}", style("Statistics").bold());
    for stat in statistics() {
        println!("  {:<10} {}{} {}", stat.id, stat.value, stat.suffix, stat.label);
    }
    Ok(())
}
