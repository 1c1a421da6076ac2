//! `/gallery`, `/gallery/[id]` and its intercepting modal.
//!
//! A link clicked on the site lands on the modal: the grid is re-rendered
//! with the photo on top, and the URL is still `/gallery/{id}`. Opening the
//! same URL directly gets the full page.

use maud::{Markup, html};
use tracing::debug;

use super::{Metadata, back_link, not_found, page, route_note};
use crate::content::gallery::{self, PHOTOS, Photo};
use crate::content::site;
use crate::request::Request;
use crate::response::Response;

fn index_meta() -> Metadata {
    Metadata::new(
        format!("Photo Gallery - {}", site::NAME),
        "Photo gallery demonstrating intercepting routes and modals",
    )
}

fn grid() -> Markup {
    html! {
        (back_link("/", "Back to Home"))
        h1 { "Photo Gallery" }
        p {
            "Click on any photo to view it in a modal. The URL will update, but you'll stay on this page. "
            "Direct navigation to the photo URL will show the full page view."
        }
        div.grid {
            @for photo in PHOTOS {
                a.card href={ "/gallery/" (photo.id) } {
                    div.image { (photo.thumbnail) }
                    h3 { (photo.title) }
                    p { (photo.summary) }
                    small { (photo.category) }
                }
            }
        }
        (route_note("🔀 Intercepting Routes Demo", html! {
            ul {
                li { "Click a photo → opens in a modal, URL updates to " code { "/gallery/[id]" } }
                li { "Direct navigation to " code { "/gallery/[id]" } " → shows the full page" }
                li { "Intercepting route: " code { "/@modal/(.)gallery/[id]" } }
            }
        }))
    }
}

pub async fn index(_req: Request) -> Response {
    page(&index_meta(), "/gallery", html! { main { (grid()) } })
}

fn lookup(req: &Request) -> Option<&'static Photo> {
    let id = req.param("id").unwrap_or_default();
    let photo = gallery::find(id);
    if photo.is_none() {
        debug!(id, "path not found in content tree");
    }
    photo
}

/// The full page, for direct visits.
pub async fn photo(req: Request) -> Response {
    let Some(photo) = lookup(&req) else {
        return not_found();
    };

    let meta = Metadata::new(format!("{} - Photo Gallery", photo.title), photo.description);
    let content = html! {
        main {
            (back_link("/gallery", "Back to Gallery"))
            div.card {
                div.image { (photo.thumbnail) }
                p { small { "Full resolution photo would be displayed here" } }
                h1 { (photo.title) }
                small { (photo.category) }
                p { (photo.description) }
                div.grid {
                    div {
                        h3 { "Photo Details" }
                        dl {
                            dt { "Location:" } dd { (photo.details.location) }
                            dt { "Date:" } dd { (photo.details.date) }
                        }
                    }
                    div {
                        h3 { "Camera Settings" }
                        dl {
                            dt { "Camera:" } dd { (photo.details.camera) }
                            dt { "Settings:" } dd { (photo.details.settings) }
                        }
                    }
                }
            }
            (route_note("📄 Full Page Route", html! {
                p { "This is the full page view for photo " (photo.id) ", reached by direct navigation to "
                    code { "/gallery/" (photo.id) } "." }
            }))
        }
    };
    page(&meta, req.path(), content)
}

/// The modal over the grid, for in-site navigation.
pub async fn modal(req: Request) -> Response {
    let Some(photo) = lookup(&req) else {
        return not_found();
    };

    let meta = Metadata::new(format!("{} - Photo Gallery", photo.title), photo.summary);
    let content = html! {
        main { (grid()) }
        div.modal-backdrop role="dialog" aria-modal="true" {
            div.modal.card {
                a.close href="/gallery" aria-label="Close modal" { "×" }
                header {
                    h2 { (photo.title) }
                    small { (photo.category) }
                }
                div.image { (photo.thumbnail) }
                p { small { "Modal view of photo " (photo.id) } }
                p { (photo.summary) }
                p {
                    a href={ "/gallery/" (photo.id) } rel="external" { "View Full Details →" }
                    " "
                    small { "Photo ID: " (photo.id) }
                }
                (route_note("🔀 Intercepting Route Modal", html! {
                    p { "Rendered by " code { "/@modal/(.)gallery/[id]" } }
                    p { "URL: " code { "/gallery/" (photo.id) } " (same as the full page, but intercepted)" }
                }))
            }
        }
    };
    page(&meta, req.path(), content)
}
