//! `/blog` and `/blog/[slug]`.

use maud::{PreEscaped, html};
use tracing::debug;

use super::{Metadata, back_link, not_found, page, route_note};
use crate::content::blog::{self, POSTS};
use crate::content::format::format_date;
use crate::content::site;
use crate::request::Request;
use crate::response::Response;

pub async fn index(_req: Request) -> Response {
    let meta = Metadata::new(
        format!("Blog - {}", site::NAME),
        "Learn Next.js 15 through our comprehensive blog posts",
    );
    let content = html! {
        main {
            (back_link("/", "Back to Home"))
            h1 { "Next.js 15 Learning Blog" }
            @for post in POSTS {
                article.card {
                    h2 { a href={ "/blog/" (post.slug) } { (post.title) } }
                    p { (post.excerpt) }
                    p {
                        small { (format_date(post.date)) " · " (post.read_time) }
                        " "
                        a href={ "/blog/" (post.slug) } { "Read more →" }
                    }
                }
            }
            (route_note("🔗 Dynamic Routes", html! {
                p {
                    "Each post link points at " code { "/blog/[slug]" }
                    ", where the slug is filled in from the post data."
                }
            }))
        }
    };
    page(&meta, "/blog", content)
}

pub async fn post(req: Request) -> Response {
    let slug = req.param("slug").unwrap_or_default();
    let Some(post) = blog::find(slug) else {
        debug!(slug, "path not found in content tree");
        return not_found();
    };

    let meta = Metadata::new(format!("{} - Next.js 15 Learning Blog", post.title), post.summary());
    let content = html! {
        main {
            (back_link("/blog", "Back to Blog"))
            header {
                h1 { (post.title) }
                p { small { "By " (post.author) " · " (format_date(post.date)) " · " (post.read_time) } }
            }
            article.card { (PreEscaped(post.body)) }
            (route_note("🎯 Dynamic Route Example", html! {
                ul {
                    li { "Pattern: " code { "/blog/[slug]" } }
                    li { "Current slug: " code { (post.slug) } }
                }
            }))
        }
    };
    page(&meta, req.path(), content)
}
