//! The `(marketing)` route group: `/about` and `/pricing`.
//!
//! Both pages share a layout with a promotional banner and footer; the
//! group name never appears in their URLs.

use maud::{Markup, html};

use super::{Metadata, page, route_note};
use crate::content::format::{format_price, slugify};
use crate::content::site;
use crate::request::Request;
use crate::response::Response;

/// The group layout around `content`.
fn layout(content: Markup) -> Markup {
    html! {
        div.banner.note { "🎉 Special Offer: Learn Next.js 15 with 50% off premium content!" }
        (content)
        footer.container {
            div.grid {
                div {
                    h3 { (site::NAME) }
                    p { "Master Next.js 15 with hands-on examples and comprehensive documentation." }
                }
                div {
                    h4 { "Learning" }
                    ul {
                        li { a href="/docs" { "Documentation" } }
                        li { a href="/blog" { "Blog" } }
                        li { a href="/about" { "About" } }
                    }
                }
                div {
                    h4 { "Features" }
                    ul {
                        li { "Server Components" }
                        li { "App Router" }
                        li { "React Compiler" }
                    }
                }
                div {
                    h4 { "Connect" }
                    ul {
                        li { a href="/contact" { "Contact" } }
                        li { a href=(site::URL) rel="external" { (site::URL) } }
                    }
                }
            }
            p { "© 2024 " (site::NAME) ". Built for educational purposes." }
        }
    }
}

pub async fn about(_req: Request) -> Response {
    let meta = Metadata::new(format!("About - {}", site::NAME), "Learn about our Next.js 15 learning journey");
    let content = html! {
        main {
            h1 { "About Our Next.js 15 Learning Journey" }
            div.grid {
                div.card {
                    h2 { "🎯 Our Mission" }
                    p {
                        "To master Next.js 15 through hands-on learning, exploring every feature "
                        "from Server Components to advanced routing patterns."
                    }
                }
                div.card {
                    h2 { "🚀 What We're Learning" }
                    ul {
                        li { "App Router and file-based routing" }
                        li { "Server vs Client Components" }
                        li { "Data fetching patterns" }
                        li { "Server Actions" }
                        li { "Performance optimization" }
                    }
                }
            }
            div.card {
                h2 { "📚 Learning Approach" }
                p {
                    "We're using a practical, hands-on approach to learning Next.js 15. Each concept "
                    "is implemented with real code examples and documented in detailed specifications."
                }
            }
            (route_note("📁 Route Group", html! {
                p {
                    "This page is registered as " code { "/(marketing)/about" }
                    " and served at " code { "/about" } ". The group only selects the layout."
                }
            }))
        }
    };
    page(&meta, "/about", layout(content))
}

struct Plan {
    name: &'static str,
    price_cents: u64,
    period: &'static str,
    description: &'static str,
    features: &'static [&'static str],
    cta: &'static str,
    popular: bool,
}

const PLANS: &[Plan] = &[
    Plan {
        name: "Free",
        price_cents: 0,
        period: "forever",
        description: "Perfect for getting started with Next.js 15",
        features: &[
            "Basic documentation access",
            "Sample code examples",
            "Community support",
            "Basic routing examples",
            "Server/Client component demos",
        ],
        cta: "Get Started",
        popular: false,
    },
    Plan {
        name: "Pro",
        price_cents: 2_900,
        period: "month",
        description: "For developers serious about mastering Next.js 15",
        features: &[
            "Complete documentation access",
            "Advanced routing patterns",
            "Server Actions examples",
            "Performance optimization guides",
            "Priority support",
            "Video tutorials",
            "Real-world project templates",
        ],
        cta: "Start Pro Trial",
        popular: true,
    },
    Plan {
        name: "Enterprise",
        price_cents: 9_900,
        period: "month",
        description: "For teams building production Next.js 15 applications",
        features: &[
            "Everything in Pro",
            "Team collaboration tools",
            "Custom deployment guides",
            "Architecture consultations",
            "Dedicated support channel",
            "Custom training sessions",
            "Code review services",
        ],
        cta: "Contact Sales",
        popular: false,
    },
];

const FAQ: &[(&str, &str)] = &[
    (
        "Is this real pricing?",
        "No, this is a demo pricing page to showcase Next.js 15 routing patterns. All content is for educational purposes only.",
    ),
    (
        "What's included in the free plan?",
        "The free plan includes access to all the open-source examples and documentation in this learning project.",
    ),
    (
        "Can I upgrade anytime?",
        "Since this is a demo, there's no actual upgrading. But in a real app, you could upgrade your plan at any time.",
    ),
    (
        "Do you offer refunds?",
        "This is a demonstration page, so no real payments are processed. It's all free and open source!",
    ),
];

pub async fn pricing(_req: Request) -> Response {
    let meta = Metadata::new(format!("Pricing - {}", site::NAME), "Choose the perfect plan for learning Next.js 15");
    let content = html! {
        main {
            h1 { "Choose Your Learning Path" }
            p {
                "Select the perfect plan to accelerate your Next.js 15 learning journey. "
                "All plans include access to our comprehensive documentation and examples."
            }
            div.grid {
                @for plan in PLANS {
                    div.card.plan.popular[plan.popular] {
                        @if plan.popular {
                            span.badge { "Most Popular" }
                        }
                        h3 { (plan.name) }
                        p.price { (format_price(plan.price_cents)) " / " (plan.period) }
                        p { (plan.description) }
                        ul {
                            @for feature in plan.features {
                                li { "✓ " (feature) }
                            }
                        }
                        button type="button" { (plan.cta) }
                    }
                }
            }
            h2 { "Frequently Asked Questions" }
            div.grid {
                @for (question, answer) in FAQ {
                    div.card id=(slugify(question)) {
                        h3 { (question) }
                        p { (answer) }
                    }
                }
            }
            (route_note("📁 Route Groups Demo", html! {
                ul {
                    li { "Pattern: " code { "/(marketing)/pricing" } }
                    li { "URL: " code { "/pricing" } " (group name not in URL)" }
                    li { "Layout: uses the marketing layout with its banner and footer" }
                }
            }))
        }
    };
    page(&meta, "/pricing", layout(content))
}
