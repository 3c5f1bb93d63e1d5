//! Behavioral properties of the rendered site.

use ecoinlink_site::catalogue::{features, platforms, statistics};
use ecoinlink_site::components::{FeatureCard, HasIcon, IconName, PlatformCard, StatCard};
use ecoinlink_site::config::SiteConfig;
use ecoinlink_site::model::{Feature, Platform, Route, Statistic};
use ecoinlink_site::router::{Resolution, resolve};
use ecoinlink_site::session::{Effect, Event, Session, parse_script};
use ecoinlink_site::shell::{HeaderStyle, ShellState};
use ecoinlink_site::{render_content, render_page};
use leptos::prelude::*;
use leptos::tachys::view::RenderHtml;

fn config() -> SiteConfig {
    SiteConfig::default()
}

/// Extract the `<main>` element of a rendered document.
fn main_content(html: &str) -> &str {
    let start = html.find("<main").expect("main opened");
    let end = html.find("</main>").expect("main closed");
    &html[start..end]
}

mod links {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn every_platform_link_resolves_to_a_route() {
        for platform in platforms() {
            let html = view! { <PlatformCard platform=platform.clone() /> }.to_html();
            let href = platform.id.route().href();
            assert!(html.contains(&format!("href=\"{href}\"")), "{}", platform.name);

            match resolve(&href) {
                Resolution::Matched { route } => assert_eq!(route, platform.id.route()),
                other => panic!("{href} did not match: {other:?}"),
            }
        }
    }
}

mod badges {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn secure_badge_iff_flag_is_true() {
        for feature in features() {
            let html = view! { <FeatureCard feature=feature.clone() /> }.to_html();
            assert_eq!(
                html.contains("data-secure-badge"),
                feature.is_secure == Some(true),
                "{}",
                feature.id
            );
        }
    }
}

mod icons {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn unknown_icon_names_use_kind_defaults() {
        let platform = Platform {
            icon_name: "NoSuchIcon",
            ..platforms()[0].clone()
        };
        let feature = Feature {
            icon_name: "NoSuchIcon",
            ..features()[0].clone()
        };
        let stat = Statistic {
            icon_name: "NoSuchIcon",
            ..statistics()[0].clone()
        };

        assert_eq!(platform.icon(), IconName::Globe);
        assert_eq!(feature.icon(), IconName::Share2);
        assert_eq!(stat.icon(), IconName::BarChart3);

        let platform_html = view! { <PlatformCard platform=platform /> }.to_html();
        let feature_html = view! { <FeatureCard feature=feature /> }.to_html();
        let stat_html = view! { <StatCard stat=stat /> }.to_html();
        assert!(platform_html.contains("data-icon=\"globe\""));
        assert!(feature_html.contains("data-icon=\"share-2\""));
        assert!(stat_html.contains("data-icon=\"bar-chart-3\""));
    }
}

mod routing {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn vertical_routes_render_identical_landing_content() {
        let shell = ShellState::new();
        let home = render_page(Route::Home, &shell, &config());
        let carlink = render_page(Route::Carlink, &shell, &config());

        assert_eq!(main_content(&carlink), main_content(&home));
        assert_eq!(
            render_content(Route::Carlink, &config()),
            render_content(Route::Home, &config())
        );
    }

    #[test]
    fn paths_outside_the_table_redirect_home() {
        for path in ["/pricing", "/medilink/details", "/carlinks", "#/unknown", "/about?x=1"] {
            let resolution = resolve(path);
            assert!(resolution.is_redirect(), "{path}");
            assert_eq!(resolution.route(), Route::Home, "{path}");
        }
    }
}

mod shell {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn scroll_threshold_drives_header_style() {
        let mut session = Session::new();
        let mut styles = Vec::new();
        for y in [0.0, 21.0, 0.0] {
            session.dispatch(&Event::Scroll { y });
            styles.push(session.shell().header_style());
        }
        assert_eq!(
            styles,
            vec![HeaderStyle::Transparent, HeaderStyle::Solid, HeaderStyle::Transparent]
        );

        let html = session.render(&config());
        assert!(html.contains("data-state=\"transparent\""));
    }

    #[test]
    fn exactly_at_threshold_stays_transparent() {
        assert_eq!(ShellState::new().with_scroll(20.0).header_style(), HeaderStyle::Transparent);
    }

    #[test]
    fn menu_closes_and_scroll_resets_on_navigation() {
        let events = parse_script("scroll 400\ntoggle-menu\nnavigate /carlink\n").expect("script");
        let mut session = Session::new();
        let mut last_effects = Vec::new();
        for event in &events {
            last_effects = session.dispatch(event);
        }

        assert!(!session.shell().menu_open());
        assert_eq!(session.scroll_position(), (0.0, 0.0));
        assert_eq!(last_effects, vec![Effect::ScrollTo { x: 0.0, y: 0.0 }]);

        let html = session.render(&config());
        assert!(html.contains("data-open=\"false\""));
        assert!(html.contains("data-route=\"/carlink\""));
    }
}
