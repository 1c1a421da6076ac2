//! Site-wide constants.

/// A labelled link.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Link {
    pub href: &'static str,
    pub label: &'static str,
}

impl Link {
    pub const fn new(href: &'static str, label: &'static str) -> Self {
        Self { href, label }
    }
}

pub const NAME: &str = "Next.js 15 Learning";
pub const DESCRIPTION: &str = "Learn Next.js 15 with hands-on examples";
pub const URL: &str = "https://nextjs-15-learning.example.com";
pub const AUTHOR: &str = "Next.js Learner";

/// The global navigation. `/contact` has no page and lands on the 404.
pub const NAVIGATION: &[Link] = &[
    Link::new("/", "Home"),
    Link::new("/about", "About"),
    Link::new("/blog", "Blog"),
    Link::new("/docs", "Docs"),
    Link::new("/shop", "Shop"),
    Link::new("/dashboard", "Dashboard"),
    Link::new("/contact", "Contact"),
    Link::new("/pricing", "Pricing"),
    Link::new("/routing-demo", "Routing Demo"),
];

/// `(kind, example)` for each routing pattern the site demonstrates.
pub const ROUTE_PATTERNS: &[(&str, &str)] = &[
    ("Static", "Static routes like /about, /contact"),
    ("Dynamic", "Dynamic routes like /blog/[slug]"),
    ("Catch-all", "Catch-all routes like /docs/[...slug]"),
    ("Optional catch-all", "Optional catch-all routes like /shop/[[...slug]]"),
    ("Route groups", "Route groups like (marketing)"),
    ("Private folders", "Private routes like _components, _utils"),
];

pub const LEARNING_MODULES: &[&str] = &[
    "Project Setup",
    "Server Components",
    "Client Components",
    "App Router Routing",
    "Advanced Routing Patterns",
    "Data Fetching",
    "Server Actions",
    "Performance Optimization",
];
