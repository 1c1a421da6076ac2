//! HTML pages.
//!
//! Every handler renders a [`maud`] fragment and hands it to [`page`], which
//! wraps it in the document shell with the global navigation. Lookups that
//! miss end in [`not_found`].

use maud::{DOCTYPE, Markup, html};

use crate::content::site;
use crate::request::Request;
use crate::response::Response;
use crate::status::Status;

pub mod blog;
pub mod dashboard;
pub mod docs;
pub mod gallery;
pub mod home;
pub mod marketing;
pub mod routing;
pub mod shop;

/// `<title>` and `<meta name="description">` for one page.
#[derive(Clone, Debug, PartialEq)]
pub struct Metadata {
    pub title: String,
    pub description: String,
}

impl Metadata {
    pub fn new(title: impl Into<String>, description: impl Into<String>) -> Self {
        Self { title: title.into(), description: description.into() }
    }
}

impl Default for Metadata {
    fn default() -> Self {
        Self::new(site::NAME, site::DESCRIPTION)
    }
}

const CSS: &str = r#"
body { font-family: system-ui, sans-serif; margin: 0; color: #1f2937; background: #f8fafc; }
main, .container { max-width: 64rem; margin: 0 auto; padding: 2rem 1rem; }
nav.site-nav { background: #fff; border-bottom: 1px solid #e5e7eb; }
nav.site-nav ul { display: flex; flex-wrap: wrap; gap: 1rem; list-style: none; margin: 0 auto; max-width: 64rem; padding: 1rem; }
nav.site-nav .brand { font-weight: 700; margin-right: auto; }
nav.site-nav li.current a { color: #2563eb; font-weight: 600; }
a { color: #2563eb; text-decoration: none; }
.card { background: #fff; border-radius: .5rem; box-shadow: 0 1px 3px rgba(0,0,0,.1); padding: 1.5rem; margin-bottom: 1rem; }
.grid { display: grid; gap: 1rem; grid-template-columns: repeat(auto-fill, minmax(14rem, 1fr)); }
.note { background: #eff6ff; border-radius: .5rem; padding: 1rem 1.5rem; margin-top: 2rem; font-size: .9rem; }
.breadcrumbs { display: flex; gap: .5rem; font-size: .9rem; color: #4b5563; margin-bottom: 1.5rem; }
.price { color: #059669; font-weight: 600; }
.modal-backdrop { position: fixed; inset: 0; background: rgba(0,0,0,.5); display: flex; align-items: center; justify-content: center; }
.modal { background: #fff; border-radius: .5rem; max-width: 40rem; width: 100%; }
.slot-error { background: #fef2f2; color: #991b1b; }
.sidebar-layout { display: flex; gap: 2rem; }
.sidebar-layout aside { min-width: 14rem; }
"#;

/// The root layout.
pub fn document(meta: &Metadata, current: &str, content: Markup) -> Markup {
    html! {
        (DOCTYPE)
        html lang="en" {
            head {
                meta charset="UTF-8";
                meta name="viewport" content="width=device-width, initial-scale=1.0";
                title { (meta.title) }
                meta name="description" content=(meta.description);
                meta name="author" content=(site::AUTHOR);
                style { (maud::PreEscaped(CSS)) }
            }
            body {
                (site_nav(current))
                (content)
            }
        }
    }
}

/// The global navigation bar. The link whose section contains `current`
/// is marked.
fn site_nav(current: &str) -> Markup {
    html! {
        nav.site-nav {
            ul {
                li.brand { a href="/" { (site::NAME) } }
                @for link in site::NAVIGATION {
                    @let is_current = is_within(current, link.href);
                    li class=[is_current.then_some("current")] {
                        a href=(link.href) { (link.label) }
                    }
                }
            }
        }
    }
}

fn is_within(current: &str, href: &str) -> bool {
    if href == "/" {
        return current == "/";
    }
    current == href || current.strip_prefix(href).is_some_and(|rest| rest.starts_with('/'))
}

/// `200 OK` with `content` in the root layout.
pub fn page(meta: &Metadata, current: &str, content: Markup) -> Response {
    Response::html(document(meta, current, content))
}

pub fn back_link(href: &str, label: &str) -> Markup {
    html! {
        a.back href=(href) { "← " (label) }
    }
}

/// A callout explaining which routing feature rendered the page.
pub fn route_note(heading: &str, body: Markup) -> Markup {
    html! {
        div.note {
            h3 { (heading) }
            (body)
        }
    }
}

/// The `404` page.
pub fn not_found() -> Response {
    let meta = Metadata::new(format!("Not Found - {}", site::NAME), "The page you are looking for does not exist.");
    let content = html! {
        main {
            h1 { "404 - Page Not Found" }
            p { "The page you are looking for does not exist or has been moved." }
            (back_link("/", "Back to Home"))
        }
    };
    Response::builder()
        .status(Status::NotFound)
        .html(document(&meta, "", content))
}

/// Router fallback.
pub async fn fallback(_req: Request) -> Response {
    not_found()
}
