//! `ecoinlink simulate`: replay shell events.

use anyhow::{Context, Result};
use ecoinlink_site::config::SiteConfig;
use ecoinlink_site::session::{Session, parse_script};
use std::io::Read;
use std::path::Path;
use tracing::info;

fn read_script(script: Option<&Path>) -> Result<String> {
    match script {
        Some(path) => std::fs::read_to_string(path)
            .with_context(|| format!("reading script {}", path.display())),
        None => {
            let mut buf = String::new();
            std::io::stdin()
                .read_to_string(&mut buf)
                .context("reading script from stdin")?;
            Ok(buf)
        }
    }
}

pub fn run(script: Option<&Path>, start: &str, html: bool, config: &SiteConfig) -> Result<()> {
    let source = read_script(script)?;
    let events = parse_script(&source).context("parsing event script")?;

    let (mut session, effects) = Session::open(start);
    for effect in &effects {
        info!("{start}: {effect}");
    }

    if html {
        for event in &events {
            session.dispatch(event);
        }
        println!("{}", session.render(config));
    } else {
        session.run(events, |frame| println!("{frame}"));
    }
    Ok(())
}
