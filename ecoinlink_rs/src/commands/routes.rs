//! `ecoinlink routes`: the route table.

use anyhow::{Context, Result};
use ecoinlink_site::model::{Page, Route};
use serde::Serialize;

#[derive(Serialize)]
struct RouteEntry {
    name: &'static str,
    path: &'static str,
    href: String,
    page: Page,
}

#[derive(Serialize)]
struct RouteTable {
    routes: Vec<RouteEntry>,
    fallback: &'static str,
}

fn table() -> RouteTable {
    RouteTable {
        routes: Route::ALL
            .into_iter()
            .map(|route| RouteEntry {
                name: route.name(),
                path: route.path(),
                href: route.href(),
                page: route.page(),
            })
            .collect(),
        fallback: Route::Home.path(),
    }
}

pub fn run(json: bool) -> Result<()> {
    let table = table();
    if json {
        let out = serde_json::to_string_pretty(&table).context("serializing route table")?;
        println!("{out}");
        return Ok(());
    }

    for entry in &table.routes {
        println!("{:<10} {:<10} {:<12} {:?}", entry.name, entry.path, entry.href, entry.page);
    }
    println!("{:<10} {:<10} -> {} (replace)", "*", "*", table.fallback);
    Ok(())
}
