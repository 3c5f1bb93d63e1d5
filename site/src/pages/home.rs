// Landing page - hero, platforms, highlight, features, stats, vision, CTA
use crate::assets::Image;
use crate::catalogue::{features, platforms, statistics};
use crate::components::{FeatureCard, Icon, IconName, PlatformCard, StatCard};
use leptos::prelude::*;

/// The landing page: every route renders this inside the layout.
#[component]
pub fn LandingPage(
    /// Normalised base path for image URLs
    base_path: String,
) -> impl IntoView {
    view! {
        <Hero background=Image::HeroLogistics.url(&base_path) />
        <PlatformGrid />
        <HighlightPanel photo=Image::MedicalTech.url(&base_path) />
        <FeatureGrid />
        <StatisticsBand pattern=Image::GlobalNetwork.url(&base_path) />
        <VisionPanel photo=Image::AutomotiveTech.url(&base_path) />
        <CallToAction />
    }
}

#[component]
fn Hero(background: String) -> impl IntoView {
    view! {
        <section class="hero">
            <div class="hero-backdrop">
                <img src=background alt="Logistics Technology Background" />
                <div class="hero-fade"></div>
            </div>
            <div class="container hero-content">
                <div class="hero-badge">
                    <Icon name=IconName::Zap size="16" />
                    <span>"2026 Next-Gen Connectivity"</span>
                </div>
                <h1 class="hero-title">
                    "ECOinLink:"
                    <br />
                    <span class="text-primary">"모든 연결의 시작."</span>
                </h1>
                <p class="hero-description">
                    "의료, 자동차, 물류를 하나의 생태계로 통합합니다. "
                    <br />
                    "전 세계 어디서나 가능한 직배송 서비스와 약사, 정비사, 전문가를 위한 "
                    <br />
                    "암호화된 데이터 비서 시스템을 지금 경험해보세요."
                </p>
                <div class="hero-actions">
                    <button class="btn btn-primary btn-lg">
                        "서비스 시작하기"
                        <Icon name=IconName::ChevronRight size="20" />
                    </button>
                    <a href="#platforms" class="btn btn-outline btn-lg">"플랫폼 둘러보기"</a>
                </div>
            </div>
        </section>
    }
}

#[component]
fn PlatformGrid() -> impl IntoView {
    view! {
        <section id="platforms" class="section">
            <div class="container">
                <div class="section-header section-header-split">
                    <div>
                        <h2 class="section-title">"통합 연결 플랫폼"</h2>
                        <p class="section-description">
                            "세 가지 핵심 산업을 연결하여 시너지를 창출합니다. "
                            "각 분야의 전문가와 사용자가 신뢰할 수 있는 데이터 환경을 제공합니다."
                        </p>
                    </div>
                    <a href="#features" class="btn btn-link">
                        "전체 생태계 보기"
                        <Icon name=IconName::ArrowRight size="20" />
                    </a>
                </div>
                <div class="platform-grid">
                    {platforms()
                        .iter()
                        .map(|platform| view! { <PlatformCard platform=platform.clone() /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn HighlightPanel(photo: String) -> impl IntoView {
    view! {
        <section class="section section-muted">
            <div class="container highlight-grid">
                <div class="highlight-photo">
                    <img src=photo alt="Secure Medical Database" />
                    <div class="highlight-caption">
                        <div class="highlight-caption-title text-chart-1">
                            <Icon name=IconName::ShieldCheck />
                            <span>"ECOin MediLink 보안 시스템"</span>
                        </div>
                        <p>"약사 전용 DB를 활용한 비서 역할. 모든 복약 정보는 암호화되어 철저하게 관리됩니다."</p>
                    </div>
                </div>
                <div class="highlight-points">
                    <h3 class="highlight-title">"전문가를 위한 맞춤형 데이터 솔루션"</h3>
                    <HighlightPoint
                        icon=IconName::ShieldCheck
                        tone="tone-chart-1"
                        title="약사를 위한 스마트 비서"
                        body="오래된 약 정보부터 질병 통계까지, 연령별 데이터를 분석하여 최적의 복약 상담을 돕습니다."
                    />
                    <HighlightPoint
                        icon=IconName::Zap
                        tone="tone-chart-2"
                        title="정비사를 위한 실시간 기술 연동"
                        body="자동차 상태 정보를 즉각적으로 정비 네트워크에 연결하여 정밀한 진단을 가능케 합니다."
                    />
                    <HighlightPoint
                        icon=IconName::Globe
                        tone="tone-chart-3"
                        title="전 세계 직배송 물류 허브"
                        body="복잡한 절차 없이 클릭 한 번으로 전 세계 어디든 물품을 안전하게 전달합니다."
                    />
                </div>
            </div>
        </section>
    }
}

#[component]
fn HighlightPoint(
    icon: IconName,
    tone: &'static str,
    title: &'static str,
    body: &'static str,
) -> impl IntoView {
    view! {
        <div class="highlight-point">
            <div class=format!("highlight-point-icon tone {tone}")>
                <Icon name=icon />
            </div>
            <div>
                <h4 class="highlight-point-title">{title}</h4>
                <p class="highlight-point-body">{body}</p>
            </div>
        </div>
    }
}

#[component]
fn FeatureGrid() -> impl IntoView {
    view! {
        <section id="features" class="section">
            <div class="container">
                <div class="section-header section-header-center">
                    <h2 class="section-title">"스마트한 기능"</h2>
                    <p class="section-description">
                        "ECOinLink가 제공하는 고도화된 기능들은 당신의 비즈니스와 일상을 더욱 효율적으로 변화시킵니다."
                    </p>
                </div>
                <div class="feature-grid">
                    {features()
                        .iter()
                        .map(|feature| view! { <FeatureCard feature=feature.clone() /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn StatisticsBand(pattern: String) -> impl IntoView {
    view! {
        <section class="section section-primary stats-band">
            <div class="stats-pattern">
                <img src=pattern alt="Network Pattern" />
            </div>
            <div class="container">
                <div class="section-header section-header-center">
                    <h2 class="section-title">"숫자로 보는 ECOinLink"</h2>
                    <p class="section-description">
                        "전 세계 수천 개의 파트너와 함께 매일 새로운 연결을 만들어가고 있습니다."
                    </p>
                </div>
                <div class="stat-grid">
                    {statistics()
                        .iter()
                        .map(|stat| view! { <StatCard stat=stat.clone() /> })
                        .collect::<Vec<_>>()}
                </div>
            </div>
        </section>
    }
}

#[component]
fn VisionPanel(photo: String) -> impl IntoView {
    view! {
        <section class="section">
            <div class="container">
                <div class="vision-panel">
                    <div class="vision-copy">
                        <h2 class="vision-title">
                            "기술과 신뢰를 넘어"
                            <br />
                            <span class="text-primary">"세상을 잇는 플랫폼"</span>
                        </h2>
                        <p class="vision-body">
                            "우리는 단순한 정보의 전달을 넘어, 각 분야의 전문가들이 최상의 성과를 낼 수 있도록 돕는 디지털 인프라를 구축합니다. "
                            "2026년, ECOinLink와 함께 혁신의 중심에 서십시오."
                        </p>
                        <div class="vision-actions">
                            <button class="btn btn-primary">"지금 바로 문의하기"</button>
                            <button class="btn btn-outline">"제휴 제안서 다운로드"</button>
                        </div>
                    </div>
                    <div class="vision-photo">
                        <img src=photo alt="Global Vision" />
                    </div>
                </div>
            </div>
        </section>
    }
}

#[component]
fn CallToAction() -> impl IntoView {
    view! {
        <section class="section section-muted cta">
            <div class="container cta-inner">
                <h2 class="cta-title">"\"ECOinLink: 모든 연결의 시작.\""</h2>
                <p class="cta-body">
                    "당신의 건강, 당신의 안전, 당신의 물류 — 이 모든 것을 하나로 묶는 강력한 파트너십."
                </p>
                <div class="cta-actions">
                    <button class="btn btn-primary btn-xl">"무료로 시작하기"</button>
                    <button class="btn btn-outline btn-xl">"전문가 상담 신청"</button>
                </div>
                <p class="cta-note">
                    "© 2026 ECOinLink. 모든 권리 보유. 약사 전용 서비스는 별도의 인증이 필요합니다."
                </p>
            </div>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use leptos::tachys::view::RenderHtml;

    fn render() -> String {
        view! { <LandingPage base_path="/".to_string() /> }.to_html()
    }

    #[test]
    fn renders_one_card_per_catalogue_entry() {
        let html = render();
        assert_eq!(html.matches("class=\"platform-card\"").count(), platforms().len());
        assert_eq!(html.matches("class=\"feature-card\"").count(), features().len());
        assert_eq!(html.matches("class=\"stat-card\"").count(), statistics().len());
    }

    #[test]
    fn sections_appear_in_order() {
        let html = render();
        let markers = [
            "class=\"hero\"",
            "id=\"platforms\"",
            "highlight-grid",
            "id=\"features\"",
            "stats-band",
            "vision-panel",
            "cta-inner",
        ];
        let positions: Vec<_> = markers
            .iter()
            .map(|m| html.find(m).unwrap_or_else(|| panic!("missing {m}")))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]), "{positions:?}");
    }

    #[test]
    fn cards_follow_catalogue_order() {
        let html = render();
        let positions: Vec<_> = statistics()
            .iter()
            .map(|s| html.find(&format!("data-stat=\"{}\"", s.id)).expect("stat rendered"))
            .collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));
    }

    #[test]
    fn images_use_base_path() {
        let html = render();
        assert!(html.contains("/images/hero_logistics_2.jpg"));
        assert!(html.contains("/images/automotive_tech_7.jpg"));
    }
}
