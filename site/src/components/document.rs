//! Root document component: the complete HTML page.

use super::Layout;
use crate::config::SiteConfig;
use crate::model::Route;
use crate::pages::LandingPage;
use crate::shell::ShellState;
use crate::styles::{CSP, SITE_CSS};
use leptos::prelude::*;

/// The complete HTML document for one route.
#[component]
pub fn SiteDocument(
    /// Route being displayed
    route: Route,
    /// Shell flags to render the header and mobile menu with
    shell: ShellState,
    /// Site configuration (title, language, base path, providers)
    config: SiteConfig,
) -> impl IntoView {
    let base_path = config.base_path.clone();
    let page_base = base_path.clone();
    let favicon = format!("{base_path}favicon.ico");
    let lang = config.lang.clone();
    let title = config.title.clone();

    view! {
        <html lang=lang>
            <head>
                <meta charset="UTF-8" />
                <meta name="viewport" content="width=device-width, initial-scale=1.0" />
                <meta http-equiv="Content-Security-Policy" content=CSP />
                <title>{title}</title>
                <link rel="icon" href=favicon />
                <style>{SITE_CSS}</style>
            </head>
            <body data-route=route.path() data-base-path=base_path.clone()>
                <div id="root">
                    <Layout shell=shell active=route base_path=base_path.clone()>
                        <LandingPage base_path=page_base />
                    </Layout>
                </div>
                <ProviderMounts config=config />
                <script>{APP_SCRIPT}</script>
            </body>
        </html>
    }
}

/// Inert mount points for the toast surfaces plus the provider
/// configuration as JSON.
#[component]
fn ProviderMounts(config: SiteConfig) -> impl IntoView {
    let providers = config.providers;
    let toaster = providers.toaster.enabled;
    let sonner = providers.sonner.clone();
    let expand = if sonner.expand { "true" } else { "false" };
    let rich_colors = if sonner.rich_colors { "true" } else { "false" };

    view! {
        {toaster.then(|| view! {
            <div class="toaster-root" data-provider="toaster" aria-live="polite"></div>
        })}
        {sonner.enabled.then(|| view! {
            <div
                class="sonner-root"
                data-provider="sonner"
                data-position=sonner.position.as_str()
                data-expand=expand
                data-rich-colors=rich_colors
                aria-live="polite"
            ></div>
        })}
        <script type="application/json" id="ecoinlink-bootstrap">{providers.to_json()}</script>
    }
}

/// Browser-side shell behavior: header style on scroll, menu toggle,
/// hash-route validation with menu close and scroll reset on route change.
const APP_SCRIPT: &str = r#"
(() => {
  const SCROLL_THRESHOLD = 20;
  const ROUTES = ['/', '/medilink', '/carlink', '/exlink'];

  const body = document.body;
  const header = document.querySelector('.site-header');
  const toggle = document.querySelector('[data-role="menu-toggle"]');
  const menu = document.querySelector('[data-role="mobile-menu"]');
  const navLinks = document.querySelectorAll('.desktop-nav .nav-link');

  // 1. Header style
  let scrolled = header ? header.dataset.state === 'solid' : false;
  const onScroll = () => {
      const next = window.scrollY > SCROLL_THRESHOLD;
      if (next === scrolled || !header) return;
      scrolled = next;
      header.dataset.state = next ? 'solid' : 'transparent';
      header.classList.toggle('header-solid', next);
      header.classList.toggle('header-transparent', !next);
  };

  // 2. Mobile menu
  const setMenu = open => {
      if (menu) {
          menu.dataset.open = String(open);
          menu.classList.toggle('open', open);
      }
      if (toggle) {
          toggle.setAttribute('aria-expanded', String(open));
      }
  };
  if (toggle) {
      toggle.addEventListener('click', () => {
          setMenu(!(menu && menu.dataset.open === 'true'));
      });
  }

  // 3. Hash routing
  const normalize = hash => {
      let path = hash.trim().replace(/^#/, '').split(/[?#]/)[0].replace(/\/+$/, '');
      if (path.charAt(0) !== '/') path = '/' + path;
      return path.toLowerCase();
  };

  const markActive = path => {
      navLinks.forEach(link => {
          const active = normalize(link.getAttribute('href') || '') === path;
          link.classList.toggle('active', active);
          if (active) {
              link.setAttribute('aria-current', 'page');
          } else {
              link.removeAttribute('aria-current');
          }
      });
  };

  let current = body.dataset.route || '/';
  const onRoute = () => {
      const path = normalize(window.location.hash);
      // Unmatched locations always count as a route change, even from home
      const target = ROUTES.includes(path) ? path : '/';
      if (target === path && path === current) return;
      current = target;
      body.dataset.route = target;
      markActive(target);
      setMenu(false);
      window.scrollTo(0, 0);
      if (target !== path) window.location.replace('#/');
  };

  window.addEventListener('scroll', onScroll, { passive: true });
  window.addEventListener('hashchange', onRoute);
  window.addEventListener('pagehide', () => {
      window.removeEventListener('scroll', onScroll);
      window.removeEventListener('hashchange', onRoute);
  });

  onScroll();
  if (window.location.hash) onRoute();
})();
"#;

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(config: SiteConfig) -> String {
        view! { <SiteDocument route=Route::Home shell=ShellState::new() config=config /> }.to_html()
    }

    #[test]
    fn document_has_head_and_language() {
        let html = render(SiteConfig::default());
        assert!(html.contains("<html lang=\"ko\""));
        assert!(html.contains("<title>ECOinLink</title>"));
        assert!(html.contains("Content-Security-Policy"));
        assert!(html.contains("--chart-1"));
    }

    #[test]
    fn provider_mounts_follow_config() {
        let html = render(SiteConfig::default());
        assert!(html.contains("data-provider=\"toaster\""));
        assert!(html.contains("data-position=\"top-right\""));
        assert!(html.contains("data-expand=\"false\""));
        assert!(html.contains("data-rich-colors=\"true\""));
        assert!(html.contains("id=\"ecoinlink-bootstrap\""));

        let mut config = SiteConfig::default();
        config.providers.toaster.enabled = false;
        config.providers.sonner.enabled = false;
        let html = render(config);
        assert!(!html.contains("data-provider"));
        assert!(html.contains("id=\"ecoinlink-bootstrap\""));
    }

    #[test]
    fn base_path_reaches_body_and_page() {
        let html = render(SiteConfig::default().with_base_path("/preview/"));
        assert!(html.contains("data-base-path=\"/preview/\""));
        assert!(html.contains("/preview/images/hero_logistics_2.jpg"));
        assert!(html.contains("/preview/images/image_48.png"));
    }

    /// Body of the route-change handler.
    fn route_handler() -> &'static str {
        let start = APP_SCRIPT.find("const onRoute").expect("route handler");
        let end = start + APP_SCRIPT[start..].find("\n  };").expect("handler end");
        &APP_SCRIPT[start..end]
    }

    #[test]
    fn redirect_closes_menu_and_resets_scroll_before_replacing() {
        let handler = route_handler();
        let close = handler.find("setMenu(false)").expect("menu closed");
        let scroll = handler.find("window.scrollTo(0, 0)").expect("scroll reset");
        let replace = handler.find("window.location.replace('#/')").expect("redirect");
        assert!(close < replace && scroll < replace);

        // the only early exit is a matched location equal to the current route
        let early: Vec<_> = handler.match_indices("return").collect();
        assert_eq!(early.len(), 1);
        assert!(handler.contains("if (target === path && path === current) return;"));
    }

    #[test]
    fn script_knows_every_route() {
        for route in Route::ALL {
            assert!(APP_SCRIPT.contains(&format!("'{}'", route.path())), "{route}");
        }
        assert!(APP_SCRIPT.contains("SCROLL_THRESHOLD = 20"));
        assert!(APP_SCRIPT.contains("pagehide"));
    }
}
