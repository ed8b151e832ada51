//! CSS for the landing page.
//!
//! The stylesheet is embedded in the document `<head>` so the rendered
//! `index.html` is self-contained apart from the web font.
//!
//! # Customization
//!
//! ```rust
//! use qnom_site::styles::SITE_CSS;
//!
//! let my_css = ".hero { padding-top: 0; }";
//! let combined = format!("{}\n{}", SITE_CSS, my_css);
//! assert!(combined.contains(".text-gradient"));
//! ```

/// Complete stylesheet: warm orange brand, Inter typography, sticky header.
pub const SITE_CSS: &str = r#"
:root {
    --brand-orange: #ea580c;
    --brand-orange-light: #fb923c;
    --brand-red: #dc2626;
    --text-main: #111827;
    --text-muted: #4b5563;
    --text-faint: #6b7280;
    --bg-page: #ffffff;
    --bg-soft: #f9fafb;
    --border: #e5e7eb;
    --font-sans: 'Inter', system-ui, -apple-system, 'Segoe UI', sans-serif;
    --container-max: 80rem;
}

*, *::before, *::after {
    box-sizing: border-box;
}

html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: var(--text-main);
    background: var(--bg-page);
    -webkit-font-smoothing: antialiased;
}

a {
    color: inherit;
    text-decoration: none;
}

.container {
    width: 100%;
    max-width: var(--container-max);
    margin: 0 auto;
    padding: 0 1rem;
}

.text-gradient {
    background: linear-gradient(135deg, var(--brand-orange-light), var(--brand-orange) 50%, var(--brand-red));
    -webkit-background-clip: text;
    background-clip: text;
    color: transparent;
}

.shadow-qnom {
    box-shadow: 0 10px 30px -10px rgba(234, 88, 12, 0.35);
}

/* Header */
.site-header {
    position: sticky;
    top: 0;
    z-index: 50;
    width: 100%;
    border-bottom: 1px solid var(--border);
    background: rgba(255, 255, 255, 0.8);
    backdrop-filter: blur(8px);
}

.site-header-inner {
    display: flex;
    align-items: center;
    height: 4rem;
}

.nav-brand {
    font-size: 1.5rem;
    font-weight: 700;
}

.nav-links {
    margin-left: auto;
    display: flex;
    align-items: center;
    gap: 1.5rem;
}

.nav-link {
    font-size: 0.875rem;
    font-weight: 500;
    transition: color 0.15s ease;
}

.nav-link:hover {
    color: var(--brand-orange);
}

/* Buttons */
.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    border: 0;
    border-radius: 0.375rem;
    font-family: inherit;
    font-weight: 500;
    cursor: pointer;
    transition: background 0.15s ease, color 0.15s ease;
}

.btn-default {
    background: var(--brand-orange);
    color: #ffffff;
}

.btn-default:hover {
    background: var(--brand-red);
}

.btn-ghost {
    background: transparent;
    color: var(--text-main);
}

.btn-ghost:hover {
    background: var(--bg-soft);
}

.btn-size-sm { height: 2.25rem; padding: 0 0.75rem; font-size: 0.875rem; }
.btn-size-default { height: 2.5rem; padding: 0 1rem; font-size: 0.875rem; }
.btn-size-lg { height: 2.75rem; padding: 0 2rem; font-size: 1rem; }

/* Cards */
.card {
    border: 1px solid var(--border);
    border-radius: 0.5rem;
    background: var(--bg-page);
}

.card-header {
    display: flex;
    flex-direction: column;
    gap: 0.375rem;
    padding: 1.5rem;
}

.card-title {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    margin: 0;
    font-size: 1.5rem;
    font-weight: 600;
    line-height: 1.2;
}

.card-icon {
    font-size: 1.5rem;
}

.card-description {
    margin: 0;
    font-size: 0.875rem;
    color: var(--text-faint);
}

.card-content {
    padding: 0 1.5rem 1.5rem;
}

.card-body {
    margin: 0;
    font-size: 0.875rem;
    color: var(--text-muted);
}

/* Hero */
.hero {
    position: relative;
    padding: 4rem 1rem;
}

.hero-inner {
    max-width: var(--container-max);
    margin: 0 auto;
}

.hero-content {
    text-align: center;
}

.hero-title {
    margin: 0;
    font-size: 2.25rem;
    font-weight: 700;
    letter-spacing: -0.025em;
}

.hero-lead {
    max-width: 42rem;
    margin: 1.5rem auto 0;
    font-size: 1.125rem;
    color: var(--text-muted);
}

.hero-actions {
    margin-top: 2.5rem;
    display: flex;
    align-items: center;
    justify-content: center;
    gap: 1.5rem;
}

.features-grid {
    margin-top: 5rem;
    display: grid;
    gap: 2rem;
}

/* Stats */
.stats {
    background: var(--bg-soft);
    padding: 4rem 1rem;
    text-align: center;
}

.section-title {
    margin: 0;
    font-size: 1.875rem;
    font-weight: 700;
}

.stats-grid {
    margin-top: 2.5rem;
    display: grid;
    gap: 2rem;
}

.stat-value {
    margin: 0;
    font-size: 2.25rem;
    font-weight: 700;
    color: var(--brand-orange);
}

.stat-caption {
    margin: 0.5rem 0 0;
    font-size: 0.875rem;
    color: var(--text-muted);
}

/* Closing call to action */
.closing {
    padding: 4rem 1rem;
}

.closing-inner {
    max-width: 56rem;
    margin: 0 auto;
    text-align: center;
}

.closing-lead {
    margin: 1rem 0 0;
    font-size: 1.125rem;
    color: var(--text-muted);
}

.closing-actions {
    margin-top: 2rem;
}

.closing-note {
    margin: 1rem 0 0;
    font-size: 0.875rem;
    color: var(--text-faint);
}

/* Footer */
.site-footer {
    border-top: 1px solid var(--border);
    background: var(--bg-soft);
}

.site-footer-inner {
    padding-top: 2rem;
    padding-bottom: 2rem;
}

.footer-grid {
    display: grid;
    gap: 2rem;
}

.footer-brand {
    margin: 0;
    font-size: 1.125rem;
    font-weight: 600;
}

.footer-tagline {
    margin: 0.5rem 0 0;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.footer-heading {
    margin: 0;
    font-size: 1rem;
    font-weight: 500;
}

.footer-links {
    list-style: none;
    margin: 0.5rem 0 0;
    padding: 0;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.footer-links li + li {
    margin-top: 0.25rem;
}

.footer-link:hover {
    color: var(--brand-orange);
}

.footer-copyright {
    margin-top: 2rem;
    padding-top: 2rem;
    border-top: 1px solid var(--border);
    text-align: center;
    font-size: 0.875rem;
    color: var(--text-muted);
}

.footer-copyright p {
    margin: 0;
}

@media (min-width: 640px) {
    .hero { padding: 4rem 1.5rem; }
    .hero-title { font-size: 3.75rem; }
    .stats { padding: 4rem 1.5rem; }
    .stats-grid { grid-template-columns: repeat(2, minmax(0, 1fr)); }
    .closing { padding: 4rem 1.5rem; }
}

@media (min-width: 768px) {
    .features-grid { grid-template-columns: repeat(3, minmax(0, 1fr)); }
    .footer-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
}

@media (min-width: 1024px) {
    .hero { padding: 6rem 2rem; }
    .stats { padding: 4rem 2rem; }
    .stats-grid { grid-template-columns: repeat(4, minmax(0, 1fr)); }
    .closing { padding: 4rem 2rem; }
}
"#;
