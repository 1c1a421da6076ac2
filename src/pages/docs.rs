//! `/docs` and the catch-all `/docs/[...slug]`.

use maud::{PreEscaped, html};
use tracing::debug;

use super::{Metadata, back_link, not_found, page, route_note};
use crate::content::breadcrumb::breadcrumbs_under;
use crate::content::docs::{self, SECTIONS};
use crate::content::site;
use crate::request::Request;
use crate::response::Response;

pub async fn index(_req: Request) -> Response {
    let meta = Metadata::new(
        format!("Documentation - {}", site::NAME),
        "Complete documentation for Next.js 15 features and concepts",
    );
    let content = html! {
        main {
            (back_link("/", "Back to Home"))
            h1 { "Next.js 15 Documentation" }
            p {
                "Comprehensive documentation for learning Next.js 15 with practical examples "
                "and detailed explanations."
            }
            div.grid {
                @for section in SECTIONS {
                    div.card {
                        h2 { (section.title) }
                        p { (section.description) }
                        ul {
                            @for link in section.links {
                                li { a href=(link.href) { (link.label) " →" } }
                            }
                        }
                    }
                }
            }
            (route_note("🔗 Catch-All Routes Demo", html! {
                p { "Every documentation page is served by " code { "/docs/[...slug]" } ":" }
                ul {
                    li { code { "/docs/getting-started" } " → " code { r#"["getting-started"]"# } }
                    li { code { "/docs/api/routing" } " → " code { r#"["api", "routing"]"# } }
                    li { code { "/docs/guides/deployment/vercel" } " → " code { r#"["guides", "deployment", "vercel"]"# } }
                }
                p { "The segments pick the page and build the breadcrumbs." }
            }))
        }
    };
    page(&meta, "/docs", content)
}

pub async fn doc(req: Request) -> Response {
    let slug = req.segments("slug");
    let Some(doc) = docs::find(slug.as_slice()) else {
        debug!(path = %slug.join("/"), "path not found in content tree");
        return not_found();
    };

    let meta = Metadata::new(
        format!("{} - Documentation", doc.title),
        format!("Learn about {} in Next.js 15", doc.title),
    );
    let crumbs = breadcrumbs_under("/docs", slug.as_slice());
    let quoted: Vec<String> = slug.iter().map(|s| format!("\"{s}\"")).collect();

    let content = html! {
        main {
            (back_link("/", "Back to Home"))
            nav.breadcrumbs aria-label="Breadcrumb" {
                a href="/docs" { "Docs" }
                @for crumb in &crumbs {
                    span { "/" }
                    @if crumb.is_last {
                        span aria-current="page" { (crumb.name) }
                    } @else {
                        a href=(crumb.href) { (crumb.name) }
                    }
                }
            }
            article.card {
                h1 { (doc.title) }
                (PreEscaped(doc.body))
                @if !doc.links.is_empty() {
                    ul {
                        @for link in doc.links {
                            li { a href=(link.href) { (link.label) } }
                        }
                    }
                }
            }
            (route_note("🔗 Catch-All Route Example", html! {
                ul {
                    li { "Pattern: " code { "/docs/[...slug]" } }
                    li { "Route: " code { "/docs/" (slug.join("/")) } }
                    li { "Slug array: " code { "[" (quoted.join(", ")) "]" } }
                    li { "Breadcrumbs: generated from the slug array" }
                }
            }))
        }
    };
    page(&meta, req.path(), content)
}
