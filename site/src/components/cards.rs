//! Presentation cards, one per catalogue entity kind.
//!
//! Cards are pure: the same entity renders the same markup. Unknown icon
//! keys are masked by the per-kind fallback from [`HasIcon`].

use super::{HasIcon, Icon, IconName};
use crate::classes::class_names;
use crate::model::{Feature, FeaturePlatform, Platform, Statistic};
use leptos::prelude::*;

/// Tone classes for a feature's icon tile, keyed by owning platform.
pub const fn feature_tone(platform: FeaturePlatform) -> &'static str {
    match platform {
        FeaturePlatform::Medilink => "tone tone-chart-1",
        FeaturePlatform::Carlink => "tone tone-chart-2",
        FeaturePlatform::Exlink => "tone tone-chart-3",
        FeaturePlatform::Common => "tone tone-primary",
    }
}

/// Card for one vertical: icon, name, slogan, description, feature list
/// and a link to the platform route.
#[component]
pub fn PlatformCard(platform: Platform) -> impl IntoView {
    let icon = platform.icon();
    let route = platform.id.route();
    let accent = format!("--accent: {}", platform.id.accent_var());
    let bg_class = platform.bg_class;

    view! {
        <article class="platform-card" data-platform=platform.id.key() style=accent>
            <div class=class_names(&["platform-card-glow", platform.bg_class])></div>
            <div class=class_names(&["platform-card-icon", platform.bg_class, "bg-soft"])>
                <Icon name=icon size="28" class=class_names(&["icon", platform.color_class]) />
            </div>
            <div class="platform-card-heading">
                <h3 class="platform-card-name">{platform.name}</h3>
                <p class="platform-card-slogan">{platform.slogan}</p>
            </div>
            <p class="platform-card-description">{platform.description}</p>
            <ul class="platform-card-features">
                {platform
                    .features
                    .iter()
                    .copied()
                    .map(|label| {
                        view! {
                            <li class="platform-card-feature">
                                <span class=class_names(&["dot", bg_class])></span>
                                {label}
                            </li>
                        }
                    })
                    .collect::<Vec<_>>()}
            </ul>
            <a
                class=class_names(&["platform-card-link", platform.bg_class])
                href=route.href()
                data-route=route.path()
            >
                "자세히 보기"
                <Icon name=IconName::ArrowRight size="16" />
            </a>
        </article>
    }
}

/// Card for one feature: toned icon tile, optional secure badge, title,
/// description and optional audience tags.
#[component]
pub fn FeatureCard(feature: Feature) -> impl IntoView {
    let icon = feature.icon();
    let secure = feature.is_secure();

    view! {
        <article class="feature-card" data-platform=feature.platform.key()>
            <div class="feature-card-top">
                <div class=class_names(&["feature-card-icon", feature_tone(feature.platform)])>
                    <Icon name=icon />
                </div>
                {secure.then(|| view! {
                    <span class="secure-badge" data-secure-badge="true">
                        <Icon name=IconName::ShieldCheck size="12" />
                        "ENCRYPTED"
                    </span>
                })}
            </div>
            <div class="feature-card-body">
                <h4 class="feature-card-title">{feature.title}</h4>
                <p class="feature-card-description">{feature.description}</p>
            </div>
            {feature.target_audience.map(|audience| view! {
                <div class="audience-tags">
                    {audience
                        .iter()
                        .copied()
                        .map(|tag| view! { <span class="audience-tag">{tag}</span> })
                        .collect::<Vec<_>>()}
                </div>
            })}
        </article>
    }
}

/// Card for one KPI: icon, value with suffix, label.
#[component]
pub fn StatCard(stat: Statistic) -> impl IntoView {
    let icon = stat.icon();

    view! {
        <div class="stat-card" data-stat=stat.id>
            <div class=class_names(&["stat-card-icon", stat.color_class])>
                <Icon name=icon size="28" />
            </div>
            <div class="stat-card-body">
                <div class="stat-card-figure">
                    <span class="stat-value">{stat.value}</span>
                    <span class=class_names(&["stat-suffix", stat.color_class])>{stat.suffix}</span>
                </div>
                <span class="stat-label">{stat.label}</span>
            </div>
        </div>
    }
}
