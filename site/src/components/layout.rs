//! Page shell layout: fixed header, mobile menu overlay, main slot, footer.
//!
//! The layout never owns state. It receives the current [`ShellState`] and
//! active [`Route`] and renders them; the inline page script and
//! [`crate::session::Session`] drive the transitions.

use super::{Icon, IconName};
use crate::assets::Image;
use crate::classes::{class_if, class_names};
use crate::model::Route;
use crate::shell::{HeaderStyle, ShellState};
use leptos::prelude::*;

/// One entry of the platform navigation.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct NavItem {
    /// Label shown in the nav
    pub name: &'static str,
    /// Destination
    pub route: Route,
    /// Brand color of the vertical
    pub color: &'static str,
    /// Nav icon
    pub icon: IconName,
}

/// Platform navigation, shared by header, mobile menu and footer.
pub const NAV_ITEMS: [NavItem; 3] = [
    NavItem {
        name: "MediLink",
        route: Route::Medilink,
        color: "#E11D48",
        icon: IconName::Activity,
    },
    NavItem {
        name: "CarLink",
        route: Route::Carlink,
        color: "#2563EB",
        icon: IconName::Car,
    },
    NavItem {
        name: "EXLink",
        route: Route::Exlink,
        color: "#1F2937",
        icon: IconName::Truck,
    },
];

static COMPANY_LINKS: [&str; 4] = ["회사 개요", "공지사항", "인재 채용", "기술 블로그"];
static SUPPORT_LINKS: [&str; 4] = ["도움말 센터", "이용 약관", "개인정보 처리방침", "API 문서"];

/// Header, mobile menu and footer around the page content.
#[component]
pub fn Layout(
    /// Current shell flags
    shell: ShellState,
    /// Route being displayed (drives the active nav marker)
    active: Route,
    /// Normalised base path for asset URLs
    base_path: String,
    children: Children,
) -> impl IntoView {
    let logo = Image::Logo.url(&base_path);

    view! {
        <div class="page-shell">
            <Header shell=shell active=active logo=logo.clone() />
            <MobileMenu open=shell.menu_open() />
            <main class="page-main">{children()}</main>
            <Footer logo=logo />
        </div>
    }
}

/// Fixed header with logo, desktop nav, auth buttons and the menu toggle.
#[component]
fn Header(shell: ShellState, active: Route, logo: String) -> impl IntoView {
    let style = shell.header_style();
    let header_class = match style {
        HeaderStyle::Transparent => "header-transparent",
        HeaderStyle::Solid => "header-solid",
    };
    let menu_open = shell.menu_open();
    let toggle_icon = if menu_open { IconName::X } else { IconName::Menu };
    let expanded = if menu_open { "true" } else { "false" };

    view! {
        <header
            class=class_names(&["site-header", header_class])
            data-state=style.as_str()
        >
            <div class="container header-inner">
                <a href=Route::Home.href() class="header-logo">
                    <img src=logo alt="ECOinLink Logo" />
                </a>

                <nav class="desktop-nav">
                    {NAV_ITEMS
                        .iter()
                        .map(|item| {
                            let is_active = item.route == active;
                            view! {
                                <a
                                    href=item.route.href()
                                    class=class_if("nav-link", is_active, "active")
                                    style=format!("--nav-color: {}", item.color)
                                    aria-current=is_active.then_some("page")
                                >
                                    <Icon name=item.icon size="16" />
                                    {item.name}
                                    {is_active.then(|| view! { <span class="nav-active-bar"></span> })}
                                </a>
                            }
                        })
                        .collect::<Vec<_>>()}
                </nav>

                <div class="header-actions">
                    <button class="btn btn-ghost">"로그인"</button>
                    <button class="btn btn-primary">"시작하기"</button>
                </div>

                <button
                    class="menu-toggle"
                    data-role="menu-toggle"
                    aria-label="Toggle Menu"
                    aria-expanded=expanded
                >
                    <Icon name=toggle_icon />
                </button>
            </div>
        </header>
    }
}

/// Full-screen mobile navigation overlay.
#[component]
fn MobileMenu(open: bool) -> impl IntoView {
    let data_open = if open { "true" } else { "false" };

    view! {
        <div
            class=class_if("mobile-menu", open, "open")
            data-role="mobile-menu"
            data-open=data_open
        >
            <nav class="mobile-nav">
                {NAV_ITEMS
                    .iter()
                    .map(|item| {
                        view! {
                            <a href=item.route.href() class="mobile-nav-link">
                                <span class="mobile-nav-label">
                                    <span class="mobile-nav-icon" style=format!("color: {}", item.color)>
                                        <Icon name=item.icon size="16" />
                                    </span>
                                    {item.name}
                                </span>
                                <Icon name=IconName::ChevronRight size="20" />
                            </a>
                        }
                    })
                    .collect::<Vec<_>>()}
                <div class="mobile-actions">
                    <button class="btn btn-outline">"로그인"</button>
                    <button class="btn btn-primary">"시작하기"</button>
                </div>
            </nav>
        </div>
    }
}

/// Site footer: brand blurb, platform links, company and support columns,
/// copyright bar.
#[component]
fn Footer(logo: String) -> impl IntoView {
    view! {
        <footer class="site-footer">
            <div class="container">
                <div class="footer-grid">
                    <div class="footer-brand">
                        <a href=Route::Home.href() class="footer-logo">
                            <img src=logo alt="ECOinLink Logo" />
                        </a>
                        <p class="footer-blurb">
                            "ECOinLink는 의료, 자동차, 물류를 하나의 생태계로 연결하는 차세대 통합 플랫폼입니다. "
                            "전 세계 어디서나 안전하고 신속한 정보 연결을 경험하세요."
                        </p>
                        <div class="footer-badges">
                            <span class="footer-badge"><Icon name=IconName::Globe size="20" /></span>
                            <span class="footer-badge"><Icon name=IconName::ShieldCheck size="20" /></span>
                        </div>
                    </div>

                    <div class="footer-column">
                        <h4 class="footer-heading">"플랫폼"</h4>
                        <ul class="footer-links">
                            {NAV_ITEMS
                                .iter()
                                .map(|item| {
                                    view! {
                                        <li>
                                            <a href=item.route.href() class="footer-link">
                                                <span style=format!("color: {}", item.color)>
                                                    <Icon name=item.icon size="16" />
                                                </span>
                                                {item.name}
                                            </a>
                                        </li>
                                    }
                                })
                                .collect::<Vec<_>>()}
                        </ul>
                    </div>

                    <FooterColumn heading="회사 소개" links=&COMPANY_LINKS />
                    <FooterColumn heading="고객 지원" links=&SUPPORT_LINKS />
                </div>

                <div class="footer-bottom">
                    <p class="footer-copyright">"© 2026 ECOinLink. 모든 연결의 시작. All rights reserved."</p>
                    <div class="footer-trust">
                        <span class="footer-trust-item">
                            <Icon name=IconName::ShieldCheck size="14" />
                            "암호화된 데이터 관리"
                        </span>
                        <span class="footer-trust-item">
                            <Icon name=IconName::Globe size="14" />
                            "전세계 직배송 네트워크"
                        </span>
                    </div>
                </div>
            </div>
        </footer>
    }
}

#[component]
fn FooterColumn(heading: &'static str, links: &'static [&'static str]) -> impl IntoView {
    view! {
        <div class="footer-column">
            <h4 class="footer-heading">{heading}</h4>
            <ul class="footer-links">
                {links
                    .iter()
                    .copied()
                    .map(|label| view! { <li><button class="footer-link">{label}</button></li> })
                    .collect::<Vec<_>>()}
            </ul>
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render(shell: ShellState, active: Route) -> String {
        view! {
            <Layout shell=shell active=active base_path="/".to_string()>
                <p class="probe">"content"</p>
            </Layout>
        }
        .to_html()
    }

    #[test]
    fn header_reflects_scroll_flag() {
        let top = render(ShellState::new(), Route::Home);
        assert!(top.contains("data-state=\"transparent\""));

        let scrolled = render(ShellState::new().with_scroll(21.0), Route::Home);
        assert!(scrolled.contains("data-state=\"solid\""));
        assert!(scrolled.contains("header-solid"));
    }

    #[test]
    fn mobile_menu_reflects_menu_flag() {
        let closed = render(ShellState::new(), Route::Home);
        assert!(closed.contains("data-open=\"false\""));
        assert!(closed.contains("data-icon=\"menu\""));

        let open = render(ShellState::new().with_menu_open(true), Route::Home);
        assert!(open.contains("data-open=\"true\""));
        assert!(open.contains("data-icon=\"x\""));
        assert!(open.contains("aria-expanded=\"true\""));
    }

    #[test]
    fn active_nav_item_is_marked() {
        let html = render(ShellState::new(), Route::Exlink);
        assert_eq!(html.matches("aria-current=\"page\"").count(), 1);
        assert_eq!(html.matches("nav-active-bar").count(), 1);

        let home = render(ShellState::new(), Route::Home);
        assert!(!home.contains("aria-current"));
    }

    #[test]
    fn children_are_placed_in_main() {
        let html = render(ShellState::new(), Route::Home);
        let main_start = html.find("<main").expect("main rendered");
        let probe = html.find("class=\"probe\"").expect("children rendered");
        let main_end = html.find("</main>").expect("main closed");
        assert!(main_start < probe && probe < main_end);
    }

    #[test]
    fn logo_uses_base_path() {
        let html = render(ShellState::new(), Route::Home);
        assert!(html.contains("src=\"/images/image_48.png\""));
    }
}
