//! `/dashboard` and its nested pages.
//!
//! Every dashboard page sits in a sidebar layout. The overview also fills
//! three parallel slots (analytics, team, notifications), fetched
//! concurrently. Each slot has its own error boundary, so one failing fetch
//! renders a fallback panel while the other two render normally.

use std::sync::Arc;

use maud::{Markup, html};

use super::{Metadata, page, route_note};
use crate::content::dashboard::{Analytics, DashboardSource, Member, Notice, Presence, Slot, SlotError};
use crate::content::format::group_thousands;
use crate::content::site;
use crate::handler::Handler;
use crate::request::Request;
use crate::response::Response;

/// The nested dashboard layout around `content`.
fn layout(current: &str, content: Markup) -> Markup {
    const LINKS: &[(&str, &str)] = &[
        ("/dashboard", "📊 Overview"),
        ("/dashboard/analytics", "📈 Analytics"),
        ("/dashboard/settings", "⚙️ Settings"),
    ];
    html! {
        div.container.sidebar-layout {
            aside {
                h2 { "Dashboard" }
                nav {
                    ul {
                        @for (href, label) in LINKS {
                            li class=[(current == *href).then_some("current")] {
                                a href=(href) { (label) }
                            }
                        }
                    }
                }
                (route_note("🏗️ Nested Layout", html! {
                    p { "This sidebar wraps every page under " code { "/dashboard" } "." }
                }))
            }
            main { (content) }
        }
    }
}

/// Handler for `/dashboard`, reading slot data from `source`.
pub fn overview(source: DashboardSource) -> impl Handler {
    let source = Arc::new(source);
    move |_req: Request| {
        let source = Arc::clone(&source);
        async move { render_overview(&source).await }
    }
}

async fn render_overview(source: &DashboardSource) -> Response {
    let (analytics, team, notifications) =
        tokio::join!(source.analytics(), source.team(), source.notifications());

    let meta = Metadata::new(
        format!("Dashboard Overview - {}", site::NAME),
        "Dashboard demonstrating nested layouts in Next.js 15",
    );
    let content = html! {
        h1 { "Dashboard Overview" }
        div.grid {
            @for (icon, label, value) in STATS {
                div.card {
                    span { (icon) }
                    p { (label) }
                    p { strong { (value) } }
                }
            }
        }
        div.grid {
            (slot(Slot::Analytics, analytics.map(analytics_panel)))
            (slot(Slot::Team, team.map(team_panel)))
            (slot(Slot::Notifications, notifications.map(notifications_panel)))
        }
        div.card {
            h2 { "Recent Learning Activity" }
            @for (icon, title, detail) in ACTIVITY {
                div {
                    span { (icon) }
                    p { strong { (title) } }
                    p { (detail) }
                }
            }
        }
    };
    page(&meta, "/dashboard", layout("/dashboard", content))
}

const STATS: &[(&str, &str, u32)] = &[
    ("📚", "Specs Created", 6),
    ("🚀", "Components Built", 12),
    ("🎯", "Routes Created", 8),
    ("⚡", "Features Learned", 15),
];

const ACTIVITY: &[(&str, &str, &str)] = &[
    ("🔗", "Implemented App Router Routing", "Created static routes, dynamic routes, and nested layouts"),
    ("🖥️", "Mastered Server Components", "Built async server components with data fetching"),
    ("🎮", "Created Client Components", "Built interactive components with hooks and event handlers"),
];

/// One slot with its error boundary.
fn slot(slot: Slot, panel: Result<Markup, SlotError>) -> Markup {
    html! {
        section.card.slot data-slot=(slot.as_str()) {
            h2 { (slot.title()) }
            @match panel {
                Ok(markup) => { (markup) }
                Err(e) => {
                    div.slot-error role="alert" {
                        h3 { (slot.title()) " Error" }
                        p { "Failed to load " (slot.as_str()) }
                        small { "Error: " (e.to_string()) }
                    }
                }
            }
        }
    }
}

fn analytics_panel(data: &Analytics) -> Markup {
    html! {
        dl {
            dt { "Page Views" } dd { (group_thousands(data.page_views)) }
            dt { "Unique Visitors" } dd { (group_thousands(data.unique_visitors)) }
            dt { "Bounce Rate" } dd { (data.bounce_rate) "%" }
            dt { "Avg Session" } dd { (data.avg_session) }
        }
        small { "Data updates every 5 minutes" }
    }
}

fn team_panel(members: &[Member]) -> Markup {
    let online = members.iter().filter(|m| m.presence == Presence::Online).count();
    html! {
        ul {
            @for member in members {
                li data-presence=(member.presence.as_str()) {
                    span { (member.avatar) } " "
                    strong { (member.name) } " · " (member.role) " · "
                    small { (member.last_active) }
                }
            }
        }
        small { (online) " online, " (members.len()) " total" }
    }
}

fn notifications_panel(notices: &[Notice]) -> Markup {
    html! {
        ul {
            @for notice in notices {
                li data-kind=(notice.kind.as_str()) {
                    span { (notice.icon) } " "
                    strong { (notice.title) }
                    p { (notice.message) }
                    small { (notice.time) }
                }
            }
        }
    }
}

pub async fn analytics(_req: Request) -> Response {
    let meta = Metadata::new(format!("Analytics - Dashboard - {}", site::NAME), "Learning progress over time");
    let content = html! {
        h1 { "Analytics" }
        div.card {
            h2 { "Learning Progress Over Time" }
            p { "📊 Chart visualization would go here" }
        }
        div.grid {
            div.card { h3 { "Completion Rate" } progress value="75" max="100" {} " 75%" }
            div.card { h3 { "Time Spent Learning" } p { "24 hours" } }
            div.card { h3 { "Concepts Mastered" } p { "15 / 20" } }
        }
        (route_note("📍 Nested Route Example", html! {
            p { "This page is at " code { "/dashboard/analytics" } " and uses the dashboard layout." }
        }))
    };
    page(&meta, "/dashboard/analytics", layout("/dashboard/analytics", content))
}

pub async fn settings(_req: Request) -> Response {
    let meta = Metadata::new(format!("Settings - Dashboard - {}", site::NAME), "Dashboard settings");
    let content = html! {
        h1 { "Settings" }
        div.card {
            h2 { "General Settings" }
            label { "Learning Mode " select { option { "Beginner" } option { "Intermediate" } option { "Advanced" } } }
            label { "Preferred Language " select { option { "JavaScript" } option { "TypeScript" } } }
        }
        div.card {
            h2 { "Notifications" }
            label { input type="checkbox" checked; " Learning Reminders" }
            p { small { "Get notified about your daily learning goals" } }
            label { input type="checkbox"; " New Feature Updates" }
            p { small { "Stay updated with Next.js 15 feature releases" } }
        }
        button type="button" { "Save Settings" }
    };
    page(&meta, "/dashboard/settings", layout("/dashboard/settings", content))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Latency;

    #[tokio::test]
    async fn failing_slot_renders_its_boundary_only() {
        let source = DashboardSource::new(Latency::default(), vec![Slot::Team]);
        let body = render_overview(&source).await.body_text();

        assert!(body.contains("Team Error"));
        assert!(body.contains("failed to load team"));
        assert!(body.contains("12,543"));
        assert!(body.contains("Deployment Successful"));
        assert!(!body.contains("Alice Johnson"));
    }

    #[tokio::test]
    async fn all_slots_render_by_default() {
        let body = render_overview(&DashboardSource::default()).await.body_text();
        assert!(body.contains("2 online, 4 total"));
        assert!(body.contains(r#"data-slot="notifications""#));
        assert!(!body.contains("role=\"alert\""));
    }
}
