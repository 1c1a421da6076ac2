//! `/routing-demo` and `/advanced-routing`: catalogues of the patterns the
//! site is built from.

use maud::{Markup, html};

use super::{Metadata, back_link, page};
use crate::content::site;
use crate::request::Request;
use crate::response::Response;
use crate::route::RoutePattern;

struct Example {
    kind: &'static str,
    pattern: &'static str,
    description: &'static str,
    urls: &'static [(&'static str, &'static str)],
}

const EXAMPLES: &[Example] = &[
    Example {
        kind: "Static Routes",
        pattern: "/(marketing)/about",
        description: "Fixed URL paths that don't change",
        urls: &[("/about", "About page"), ("/pricing", "Pricing plans"), ("/contact", "Not built, so a 404")],
    },
    Example {
        kind: "Dynamic Routes",
        pattern: "/blog/[slug]",
        description: "URL segments that can change based on data",
        urls: &[
            ("/blog/getting-started-nextjs-15", "Blog post with slug"),
            ("/blog/server-components-explained", "Another blog post"),
        ],
    },
    Example {
        kind: "Catch-All Routes",
        pattern: "/docs/[...slug]",
        description: "Matches multiple path segments as an array",
        urls: &[
            ("/docs/getting-started", r#"slug = ["getting-started"]"#),
            ("/docs/api/routing", r#"slug = ["api", "routing"]"#),
            ("/docs/guides/deployment/vercel", r#"slug = ["guides", "deployment", "vercel"]"#),
        ],
    },
    Example {
        kind: "Optional Catch-All Routes",
        pattern: "/shop/[[...slug]]",
        description: "Like catch-all but also matches the route without segments",
        urls: &[
            ("/shop", "slug = [] (matches!)"),
            ("/shop/electronics", r#"slug = ["electronics"]"#),
            ("/shop/electronics/phones/iphone-15", r#"slug = ["electronics", "phones", "iphone-15"]"#),
        ],
    },
    Example {
        kind: "Route Groups",
        pattern: "/(marketing)/pricing",
        description: "Organize routes without affecting URL structure",
        urls: &[("/about", "Uses marketing layout"), ("/pricing", "Uses marketing layout")],
    },
    Example {
        kind: "Private Folders",
        pattern: "/_utils/constants",
        description: "Folders starting with underscore are not routable",
        urls: &[
            ("/_components", "404 - Not accessible"),
            ("/_utils", "404 - Not accessible"),
            ("/_utils/constants", "404 - Not accessible"),
        ],
    },
];

/// What a pattern compiles to, or why it cannot be registered.
fn compiled(pattern: &str) -> Markup {
    match RoutePattern::parse(pattern) {
        Ok(route) => html! {
            @for (i, path) in route.paths().iter().enumerate() {
                @if i > 0 { ", " }
                code { (path) }
            }
        },
        Err(e) => html! { em { (e.to_string()) } },
    }
}

pub async fn demo(_req: Request) -> Response {
    let meta = Metadata::new(
        format!("Advanced Routing Demo - {}", site::NAME),
        "Demonstration of all advanced routing patterns in Next.js 15",
    );
    let content = html! {
        main {
            (back_link("/", "Back to Home"))
            h1 { "Advanced Routing Patterns Demo" }
            p {
                "Explore the routing patterns this site is built from. "
                "Each one serves a different use case."
            }
            ul {
                @for (kind, summary) in site::ROUTE_PATTERNS {
                    li { strong { (kind) ": " } (summary) }
                }
            }
            @for example in EXAMPLES {
                section.card {
                    h2 { (example.kind) }
                    p { code { (example.pattern) } " → " (compiled(example.pattern)) }
                    p { (example.description) }
                    h3 { "Live Examples" }
                    ul {
                        @for (url, note) in example.urls {
                            li {
                                @if url.contains('_') {
                                    code { (url) }
                                } @else {
                                    a href=(url) { (url) }
                                }
                                " - " (note)
                            }
                        }
                    }
                }
            }
            div.card {
                h2 { "Routing Summary" }
                ul {
                    li { strong { "File-based routing:" } " folders and files define routes" }
                    li { strong { "Nested layouts:" } " shared UI across route segments" }
                    li { strong { "Route groups:" } " organization without URL impact" }
                    li { strong { "Private folders:" } " underscore folders are never routed" }
                }
            }
        }
    };
    page(&meta, "/routing-demo", content)
}

const INTERCEPTS: &[(&str, &str)] = &[
    ("(.)", "Same level"),
    ("(..)", "One level up"),
    ("(..)(..)", "Two levels up"),
    ("(...)", "Root app directory"),
];

pub async fn advanced(_req: Request) -> Response {
    let meta = Metadata::new(
        format!("Advanced Routing Demo - {}", site::NAME),
        "Demonstration of parallel routes and intercepting routes in Next.js 15",
    );
    let content = html! {
        main {
            (back_link("/", "Back to Home"))
            h1 { "Advanced Routing Patterns" }
            p {
                "Parallel routes for simultaneous rendering and intercepting routes for modal experiences."
            }
            div.grid {
                section.card {
                    h2 { "🔀 Parallel Routes" }
                    p {
                        "Parallel routes render several pages in the same layout. "
                        "Each slot is named with the " code { "@" } " prefix."
                    }
                    ul {
                        li { strong { "Independent loading:" } " each section loads on its own" }
                        li { strong { "Error isolation:" } " a failing section leaves the others alone" }
                        li { strong { "Complex layouts:" } " dashboards and admin panels" }
                    }
                    a href="/dashboard" { "View Dashboard with Parallel Routes →" }
                }
                section.card {
                    h2 { "🎯 Intercepting Routes" }
                    p {
                        "Intercepting routes show content in a modal while keeping the URL updated. "
                        "Direct links still get the full page."
                    }
                    table {
                        @for (marker, meaning) in INTERCEPTS {
                            tr { td { code { (marker) } } td { (meaning) } }
                        }
                    }
                    a href="/gallery" { "View Photo Gallery with Modal Intercepts →" }
                }
            }
            div.grid {
                div.card {
                    h3 { "📊 Dashboard Example" }
                    ul {
                        li { strong { "Analytics:" } " metrics with their own loading delay" }
                        li { strong { "Notifications:" } " recent activity feed" }
                        li { strong { "Team:" } " team member status" }
                    }
                    p { "Each panel loads independently and has its own error boundary." }
                }
                div.card {
                    h3 { "🖼️ Gallery Example" }
                    ul {
                        li { strong { "Click a photo:" } " opens in a modal, URL updates" }
                        li { strong { "Direct navigation:" } " shows the full page" }
                    }
                    p { "Same URL, different experience based on navigation context." }
                }
            }
        }
    };
    page(&meta, "/advanced-routing", content)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_example_pattern_is_described() {
        for example in EXAMPLES {
            let rendered = compiled(example.pattern).into_string();
            assert!(!rendered.is_empty(), "{}", example.pattern);
        }
        assert_eq!(compiled("/shop/[[...slug]]").into_string(), "<code>/shop/{*slug}</code>, <code>/shop</code>");
        assert!(compiled("/_utils/constants").into_string().contains("private folder"));
    }
}
