//! CSS for the generated site.
//!
//! One stylesheet inlined into every page. Color tokens mirror the brand
//! palette: `--chart-1` MediLink, `--chart-2` CarLink, `--chart-3` EXLink.
//!
//! ```rust
//! use ecoinlink_site::styles::SITE_CSS;
//!
//! let themed = format!("{}\n{}", SITE_CSS, ":root { --primary: #0f766e; }");
//! assert!(themed.contains("--chart-1"));
//! ```

/// Complete site stylesheet.
pub const SITE_CSS: &str = r#"
:root {
  --background: #ffffff;
  --foreground: #0f172a;
  --muted: #f1f5f9;
  --muted-foreground: #64748b;
  --border: #e2e8f0;
  --primary: #059669;
  --primary-foreground: #ffffff;
  --accent-foreground: #0f172a;
  --chart-1: #e11d48;
  --chart-2: #2563eb;
  --chart-3: #1f2937;
  --radius: 1rem;
  --header-height: 5rem;
}

*, *::before, *::after { box-sizing: border-box; }

html { scroll-behavior: smooth; }

body {
  margin: 0;
  font-family: "Pretendard", "Noto Sans KR", system-ui, -apple-system, sans-serif;
  color: var(--foreground);
  background: var(--background);
  line-height: 1.6;
  -webkit-font-smoothing: antialiased;
}

img { max-width: 100%; display: block; }
a { color: inherit; text-decoration: none; }
button { font: inherit; cursor: pointer; border: 0; background: none; color: inherit; }

.container { width: 100%; max-width: 80rem; margin: 0 auto; padding: 0 1.5rem; }

.text-primary { color: var(--primary); }
.text-accent-foreground { color: var(--accent-foreground); }
.text-chart-1 { color: var(--chart-1); }
.text-chart-2 { color: var(--chart-2); }
.text-chart-3 { color: var(--chart-3); }
.bg-chart-1 { background-color: var(--chart-1); }
.bg-chart-2 { background-color: var(--chart-2); }
.bg-chart-3 { background-color: var(--chart-3); }
.bg-soft { background-color: color-mix(in srgb, var(--accent) 12%, transparent); }

.tone { color: var(--tone); background-color: color-mix(in srgb, var(--tone) 12%, transparent); }
.tone-chart-1 { --tone: var(--chart-1); }
.tone-chart-2 { --tone: var(--chart-2); }
.tone-chart-3 { --tone: var(--chart-3); }
.tone-primary { --tone: var(--primary); }

.icon { flex-shrink: 0; }

/* Buttons */
.btn {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  padding: 0.6rem 1.25rem;
  border-radius: 9999px;
  font-weight: 600;
  transition: background-color 0.2s, color 0.2s, box-shadow 0.2s;
}
.btn-primary { background: var(--primary); color: var(--primary-foreground); }
.btn-primary:hover { box-shadow: 0 10px 25px -10px var(--primary); }
.btn-outline { border: 2px solid var(--border); background: var(--background); }
.btn-ghost:hover { background: var(--muted); }
.btn-link { color: var(--primary); padding: 0; }
.btn-lg { padding: 0.9rem 2rem; font-size: 1.125rem; }
.btn-xl { padding: 1.1rem 2.5rem; font-size: 1.25rem; }

/* Header */
.site-header {
  position: fixed;
  inset: 0 0 auto 0;
  z-index: 50;
  transition: background-color 0.3s, padding 0.3s, box-shadow 0.3s;
}
.header-transparent { background: transparent; padding: 1.5rem 0; }
.header-solid {
  background: rgba(255, 255, 255, 0.85);
  backdrop-filter: blur(12px);
  box-shadow: 0 1px 3px rgba(15, 23, 42, 0.08);
  padding: 0.75rem 0;
}
.header-inner { display: flex; align-items: center; justify-content: space-between; gap: 2rem; }
.header-logo img { height: 2.5rem; width: auto; }
.desktop-nav { display: none; gap: 2rem; }
.nav-link {
  position: relative;
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  font-weight: 500;
  color: var(--muted-foreground);
}
.nav-link:hover, .nav-link.active { color: var(--nav-color); }
.nav-active-bar {
  position: absolute;
  left: 0;
  right: 0;
  bottom: -0.25rem;
  height: 2px;
  border-radius: 9999px;
  background: var(--nav-color);
}
.header-actions { display: none; gap: 1rem; }
.menu-toggle { padding: 0.5rem; }

@media (min-width: 768px) {
  .desktop-nav, .header-actions { display: flex; }
  .menu-toggle { display: none; }
}

/* Mobile menu */
.mobile-menu {
  position: fixed;
  inset: 0;
  z-index: 40;
  padding-top: 6rem;
  background: var(--background);
  transform: translateX(100%);
  transition: transform 0.3s ease;
}
.mobile-menu.open { transform: translateX(0); }
.mobile-nav { display: flex; flex-direction: column; gap: 0.75rem; padding: 0 1.5rem; }
.mobile-nav-link {
  display: flex;
  align-items: center;
  justify-content: space-between;
  padding: 1rem;
  border-radius: var(--radius);
  background: var(--muted);
  font-size: 1.125rem;
  font-weight: 600;
}
.mobile-nav-label { display: flex; align-items: center; gap: 1rem; }
.mobile-nav-icon { padding: 0.5rem; border-radius: 0.75rem; background: var(--background); }
.mobile-actions { display: flex; flex-direction: column; gap: 1rem; margin-top: 1.5rem; }

@media (min-width: 768px) {
  .mobile-menu { display: none; }
}

.page-main { min-height: 100vh; }

/* Sections */
.section { padding: 6rem 0; }
.section-muted { background: var(--muted); }
.section-primary { background: var(--primary); color: var(--primary-foreground); }
.section-header { margin-bottom: 4rem; }
.section-header-center { text-align: center; max-width: 48rem; margin-left: auto; margin-right: auto; }
.section-header-split { display: flex; flex-wrap: wrap; align-items: flex-end; justify-content: space-between; gap: 1.5rem; }
.section-title { font-size: 2.5rem; font-weight: 800; margin: 0 0 1rem; }
.section-description { font-size: 1.125rem; color: var(--muted-foreground); max-width: 40rem; }
.section-primary .section-description { color: rgba(255, 255, 255, 0.8); }

/* Hero */
.hero { position: relative; min-height: 90vh; display: flex; align-items: center; padding-top: var(--header-height); overflow: hidden; }
.hero-backdrop { position: absolute; inset: 0; z-index: 0; }
.hero-backdrop img { width: 100%; height: 100%; object-fit: cover; }
.hero-fade { position: absolute; inset: 0; background: linear-gradient(to right, var(--background) 20%, rgba(255, 255, 255, 0.8) 55%, transparent); }
.hero-content { position: relative; z-index: 1; max-width: 48rem; margin-left: max(1.5rem, calc((100vw - 80rem) / 2)); }
.hero-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.5rem;
  padding: 0.25rem 0.75rem;
  border-radius: 9999px;
  background: color-mix(in srgb, var(--primary) 10%, transparent);
  color: var(--primary);
  font-size: 0.875rem;
  font-weight: 600;
}
.hero-title { font-size: clamp(2.5rem, 6vw, 4.5rem); font-weight: 900; line-height: 1.1; margin: 1.5rem 0; }
.hero-description { font-size: 1.25rem; color: var(--muted-foreground); }
.hero-actions { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 2rem; }

/* Cards */
.platform-grid, .feature-grid { display: grid; gap: 2rem; }
@media (min-width: 768px) {
  .platform-grid { grid-template-columns: repeat(3, 1fr); }
  .feature-grid { grid-template-columns: repeat(2, 1fr); }
}
@media (min-width: 1024px) {
  .feature-grid { grid-template-columns: repeat(3, 1fr); }
}

.platform-card {
  position: relative;
  display: flex;
  flex-direction: column;
  gap: 1.25rem;
  padding: 2rem;
  border: 1px solid var(--border);
  border-radius: calc(var(--radius) * 2);
  background: var(--background);
  overflow: hidden;
  transition: transform 0.3s, box-shadow 0.3s;
}
.platform-card:hover { transform: translateY(-4px); box-shadow: 0 20px 40px -20px var(--accent); }
.platform-card-glow { position: absolute; top: -3rem; right: -3rem; width: 8rem; height: 8rem; border-radius: 9999px; opacity: 0.08; filter: blur(24px); }
.platform-card-icon { display: inline-flex; padding: 1rem; border-radius: var(--radius); width: fit-content; }
.platform-card-name { font-size: 1.5rem; font-weight: 800; margin: 0; }
.platform-card-slogan { margin: 0.25rem 0 0; font-weight: 600; color: var(--accent); }
.platform-card-description { color: var(--muted-foreground); margin: 0; }
.platform-card-features { list-style: none; padding: 0; margin: 0; display: grid; gap: 0.5rem; }
.platform-card-feature { display: flex; align-items: center; gap: 0.5rem; font-size: 0.9rem; }
.dot { width: 0.375rem; height: 0.375rem; border-radius: 9999px; }
.platform-card-link {
  display: inline-flex;
  align-items: center;
  justify-content: center;
  gap: 0.5rem;
  margin-top: auto;
  padding: 0.75rem;
  border-radius: var(--radius);
  color: #ffffff;
  font-weight: 600;
}

.feature-card {
  display: flex;
  flex-direction: column;
  gap: 1rem;
  padding: 2rem;
  border: 1px solid var(--border);
  border-radius: calc(var(--radius) * 1.5);
  background: var(--background);
}
.feature-card-top { display: flex; align-items: flex-start; justify-content: space-between; }
.feature-card-icon { display: inline-flex; padding: 0.875rem; border-radius: var(--radius); }
.feature-card-title { font-size: 1.25rem; font-weight: 700; margin: 0 0 0.5rem; }
.feature-card-description { color: var(--muted-foreground); margin: 0; }
.secure-badge {
  display: inline-flex;
  align-items: center;
  gap: 0.25rem;
  padding: 0.125rem 0.5rem;
  border-radius: 9999px;
  background: #ecfdf5;
  color: #047857;
  font-size: 0.7rem;
  font-weight: 700;
  letter-spacing: 0.05em;
}
.audience-tags { display: flex; flex-wrap: wrap; gap: 0.5rem; }
.audience-tag { padding: 0.125rem 0.625rem; border-radius: 9999px; background: var(--muted); font-size: 0.75rem; color: var(--muted-foreground); }

/* Highlight panel */
.highlight-grid { display: grid; gap: 4rem; align-items: center; }
@media (min-width: 1024px) { .highlight-grid { grid-template-columns: 1fr 1fr; } }
.highlight-photo { position: relative; border-radius: calc(var(--radius) * 2); overflow: hidden; }
.highlight-caption {
  position: absolute;
  left: 1.5rem;
  right: 1.5rem;
  bottom: 1.5rem;
  padding: 1.5rem;
  border-radius: var(--radius);
  background: rgba(255, 255, 255, 0.9);
  backdrop-filter: blur(8px);
}
.highlight-caption-title { display: flex; align-items: center; gap: 0.5rem; font-weight: 700; }
.highlight-title { font-size: 2rem; font-weight: 800; margin: 0 0 2rem; }
.highlight-points { display: grid; gap: 1.5rem; }
.highlight-point { display: flex; gap: 1rem; }
.highlight-point-icon { display: inline-flex; padding: 0.75rem; border-radius: var(--radius); height: fit-content; }
.highlight-point-title { margin: 0 0 0.25rem; font-size: 1.125rem; font-weight: 700; }
.highlight-point-body { margin: 0; color: var(--muted-foreground); }

/* Statistics */
.stats-band { position: relative; overflow: hidden; }
.stats-pattern { position: absolute; inset: 0; opacity: 0.1; }
.stats-pattern img { width: 100%; height: 100%; object-fit: cover; }
.stats-band .container { position: relative; }
.stat-grid { display: grid; gap: 2rem; grid-template-columns: repeat(2, 1fr); }
@media (min-width: 1024px) { .stat-grid { grid-template-columns: repeat(4, 1fr); } }
.stat-card {
  display: flex;
  flex-direction: column;
  align-items: center;
  gap: 1rem;
  padding: 2rem;
  border-radius: calc(var(--radius) * 1.5);
  background: var(--background);
  color: var(--foreground);
  text-align: center;
}
.stat-card-icon { display: inline-flex; padding: 1rem; border-radius: 9999px; background: var(--muted); }
.stat-card-figure { display: flex; align-items: baseline; justify-content: center; gap: 0.25rem; }
.stat-value { font-size: 2.25rem; font-weight: 900; }
.stat-suffix { font-size: 1.25rem; font-weight: 700; }
.stat-label { color: var(--muted-foreground); font-weight: 500; }

/* Vision */
.vision-panel {
  display: grid;
  gap: 3rem;
  align-items: center;
  padding: 3rem;
  border-radius: calc(var(--radius) * 3);
  background: var(--chart-3);
  color: #ffffff;
  overflow: hidden;
}
@media (min-width: 1024px) { .vision-panel { grid-template-columns: 1fr 1fr; } }
.vision-title { font-size: 2.5rem; font-weight: 800; line-height: 1.2; margin: 0 0 1.5rem; }
.vision-body { color: rgba(255, 255, 255, 0.75); font-size: 1.125rem; }
.vision-actions { display: flex; flex-wrap: wrap; gap: 1rem; margin-top: 2rem; }
.vision-photo { border-radius: calc(var(--radius) * 2); overflow: hidden; }

/* Call to action */
.cta-inner { text-align: center; max-width: 56rem; }
.cta-title { font-size: clamp(2rem, 4vw, 3rem); font-weight: 900; margin: 0 0 1.5rem; }
.cta-body { font-size: 1.25rem; color: var(--muted-foreground); }
.cta-actions { display: flex; flex-wrap: wrap; justify-content: center; gap: 1rem; margin: 2.5rem 0; }
.cta-note { font-size: 0.875rem; color: var(--muted-foreground); }

/* Footer */
.site-footer { padding: 4rem 0 2rem; border-top: 1px solid var(--border); background: var(--background); }
.footer-grid { display: grid; gap: 3rem; }
@media (min-width: 768px) { .footer-grid { grid-template-columns: 2fr 1fr 1fr 1fr; } }
.footer-logo img { height: 2.5rem; width: auto; }
.footer-blurb { color: var(--muted-foreground); max-width: 24rem; }
.footer-badges { display: flex; gap: 0.75rem; }
.footer-badge { display: inline-flex; padding: 0.5rem; border-radius: 9999px; background: var(--muted); color: var(--muted-foreground); }
.footer-heading { font-size: 1rem; font-weight: 700; margin: 0 0 1rem; }
.footer-links { list-style: none; padding: 0; margin: 0; display: grid; gap: 0.75rem; }
.footer-link { display: inline-flex; align-items: center; gap: 0.5rem; color: var(--muted-foreground); }
.footer-link:hover { color: var(--foreground); }
.footer-bottom {
  display: flex;
  flex-wrap: wrap;
  justify-content: space-between;
  gap: 1rem;
  margin-top: 3rem;
  padding-top: 2rem;
  border-top: 1px solid var(--border);
  font-size: 0.875rem;
  color: var(--muted-foreground);
}
.footer-copyright { margin: 0; }
.footer-trust { display: flex; gap: 1.5rem; }
.footer-trust-item { display: inline-flex; align-items: center; gap: 0.375rem; }

/* Provider mounts */
.toaster-root, .sonner-root { position: fixed; z-index: 100; pointer-events: none; }
.sonner-root[data-position="top-right"] { top: 1rem; right: 1rem; }
.sonner-root[data-position="top-left"] { top: 1rem; left: 1rem; }
.sonner-root[data-position="top-center"] { top: 1rem; left: 50%; transform: translateX(-50%); }
.sonner-root[data-position="bottom-right"] { bottom: 1rem; right: 1rem; }
.sonner-root[data-position="bottom-left"] { bottom: 1rem; left: 1rem; }
.sonner-root[data-position="bottom-center"] { bottom: 1rem; left: 50%; transform: translateX(-50%); }
.toaster-root { bottom: 1rem; right: 1rem; }
"#;

/// Content Security Policy for the generated pages. Scripts and styles are
/// inline; images come from the same origin; no network access.
pub const CSP: &str = "default-src 'self'; img-src 'self' data:; style-src 'self' 'unsafe-inline'; script-src 'self' 'unsafe-inline'; connect-src 'none'; font-src 'self' data:;";
