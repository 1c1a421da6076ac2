//! The optional catch-all `/shop/[[...slug]]`.
//!
//! Zero segments list the categories, one a category, two a subcategory and
//! three a product. Anything else is a 404.

use maud::{Markup, html};
use tracing::debug;

use super::{Metadata, back_link, not_found, page, route_note};
use crate::content::catalog::{CATALOG, Level, Listing, Selection};
use crate::content::format::format_price;
use crate::content::site;
use crate::request::Request;
use crate::response::Response;

pub async fn shop(req: Request) -> Response {
    let slug = req.segments("slug");
    let Some(selection) = CATALOG.select(slug.as_slice()) else {
        debug!(path = %slug.join("/"), "path not found in content tree");
        return not_found();
    };
    let Some(listing) = selection.listing() else {
        return not_found();
    };

    let meta = match selection.level() {
        Level::Root => Metadata::new(format!("Shop - {}", site::NAME), listing.description),
        _ => Metadata::new(format!("{} - Shop", listing.name), listing.description),
    };

    let body = match selection.level() {
        Level::Root => root(&selection),
        Level::Category => category(&selection, listing, &slug),
        Level::Subcategory => subcategory(&selection, listing, &slug),
        Level::Product => product(listing, &slug),
    };

    let content = html! {
        main {
            @if selection.level() == Level::Root {
                (back_link("/", "Back to Home"))
            } @else {
                (trail(&selection))
            }
            (body)
        }
    };
    page(&meta, req.path(), content)
}

/// `Shop / Electronics / Phones / iPhone 15`, the last entry unlinked.
fn trail(selection: &Selection<'_>) -> Markup {
    let mut href = String::from("/shop");
    let steps: Vec<(String, &str)> = selection
        .ancestry()
        .map(|(key, listing)| {
            href.push('/');
            href.push_str(key);
            (href.clone(), listing.name)
        })
        .collect();
    html! {
        nav.breadcrumbs aria-label="Breadcrumb" {
            a href="/shop" { "Shop" }
            @for (i, (href, name)) in steps.iter().enumerate() {
                span { "/" }
                @if i + 1 == steps.len() {
                    span aria-current="page" { (name) }
                } @else {
                    a href=(href) { (name) }
                }
            }
        }
    }
}

fn root(selection: &Selection<'_>) -> Markup {
    html! {
        h1 { "Shop - All Categories" }
        div.grid {
            @for (key, node) in selection.children() {
                @if let Some(category) = node.value() {
                    div.card {
                        h2 { (category.name) }
                        p { (category.description) }
                        a href={ "/shop/" (key) } { "Browse " (category.name) " →" }
                    }
                }
            }
        }
        (route_note("🛍️ Optional Catch-All Route", html! {
            p {
                code { "/shop/[[...slug]]" } " matches " code { "/shop" }
                " with no segments as well as every nested path."
            }
        }))
    }
}

fn category(selection: &Selection<'_>, listing: &Listing, slug: &[String]) -> Markup {
    let base = format!("/shop/{}", slug.join("/"));
    html! {
        h1 { (listing.name) }
        p { (listing.description) }
        div.grid {
            @for (key, node) in selection.children() {
                @if let Some(sub) = node.value() {
                    div.card {
                        h2 { (sub.name) }
                        p { (sub.description) }
                        p { small { (node.children().count()) " products available" } }
                        a href={ (base) "/" (key) } { "View " (sub.name) " →" }
                    }
                }
            }
        }
    }
}

fn subcategory(selection: &Selection<'_>, listing: &Listing, slug: &[String]) -> Markup {
    let base = format!("/shop/{}", slug.join("/"));
    html! {
        h1 { (listing.name) }
        p { (listing.description) }
        div.grid {
            @for (key, node) in selection.children() {
                @if let Some(item) = node.value() {
                    div.card {
                        @if let Some(offer) = item.offer {
                            div.image { (offer.image) }
                            h3 { (item.name) }
                            p.price { (format_price(offer.price_cents)) }
                        } @else {
                            h3 { (item.name) }
                        }
                        p { (item.description) }
                        a href={ (base) "/" (key) } { "View Details →" }
                    }
                }
            }
        }
    }
}

fn product(listing: &Listing, slug: &[String]) -> Markup {
    html! {
        div.card {
            @if let Some(offer) = listing.offer {
                div.image { (offer.image) }
            }
            h1 { (listing.name) }
            @if let Some(offer) = listing.offer {
                p.price { (format_price(offer.price_cents)) }
            }
            p { (listing.description) }
            button type="button" { "Add to Cart" }
        }
        (route_note("🛍️ Product Route", html! {
            p { "Route: " code { "/shop/" (slug.join("/")) } }
            p { "Slug: " code { "[\"" (slug.join("\", \"")) "\"]" } }
        }))
    }
}
