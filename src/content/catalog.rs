//! The shop catalog: category → subcategory → product.

use std::sync::LazyLock;

use super::tree::{Node, Resolved, Tree};

/// A catalog entry at any level. Only products carry an offer.
#[derive(Debug)]
pub struct Listing {
    pub name: &'static str,
    pub description: &'static str,
    pub offer: Option<Offer>,
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Offer {
    pub price_cents: u64,
    pub image: &'static str,
}

/// How deep a selection reached.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Level {
    Root,
    Category,
    Subcategory,
    Product,
}

impl Level {
    fn from_depth(depth: usize) -> Option<Self> {
        match depth {
            0 => Some(Level::Root),
            1 => Some(Level::Category),
            2 => Some(Level::Subcategory),
            3 => Some(Level::Product),
            _ => None,
        }
    }
}

pub struct Catalog {
    tree: Tree<Listing>,
}

/// A resolved catalog path.
pub struct Selection<'a> {
    level: Level,
    resolved: Resolved<'a, Listing>,
}

impl<'a> Selection<'a> {
    pub fn level(&self) -> Level { self.level }

    pub fn listing(&self) -> Option<&'a Listing> {
        self.resolved.value()
    }

    /// Entries one level down, in catalog order.
    pub fn children(&self) -> impl Iterator<Item = (&'a str, &'a Node<Listing>)> + use<'a> {
        self.resolved.node().children()
    }

    /// `(key, listing)` for every level walked, root excluded.
    pub fn ancestry(&self) -> impl Iterator<Item = (&'a str, &'a Listing)> + '_ {
        self.resolved
            .trail()
            .iter()
            .filter_map(|(key, node)| node.value().map(|listing| (*key, listing)))
    }
}

impl Catalog {
    pub fn new(tree: Tree<Listing>) -> Self {
        Self { tree }
    }

    /// Resolves `segments` to the level they reach.
    ///
    /// More than three segments, or any segment without an entry, is `None`.
    pub fn select<S: AsRef<str>>(&self, segments: &[S]) -> Option<Selection<'_>> {
        let resolved = self.tree.resolve(segments)?;
        let level = Level::from_depth(resolved.depth())?;
        Some(Selection { level, resolved })
    }
}

pub static CATALOG: LazyLock<Catalog> = LazyLock::new(|| Catalog::new(Tree::new(shop())));

const fn section(name: &'static str, description: &'static str) -> Listing {
    Listing { name, description, offer: None }
}

const fn product(name: &'static str, description: &'static str, price_cents: u64, image: &'static str) -> Listing {
    Listing { name, description, offer: Some(Offer { price_cents, image }) }
}

fn shop() -> Node<Listing> {
    Node::with_value(section("Shop", "Browse our complete product catalog"))
        .child(
            "electronics",
            Node::with_value(section("Electronics", "Latest electronic devices and gadgets"))
                .child(
                    "phones",
                    Node::with_value(section("Phones", "Smartphones and mobile devices"))
                        .child("iphone-15", Node::with_value(product("iPhone 15", "Latest iPhone with advanced features", 99_900, "📱")))
                        .child("samsung-galaxy-s24", Node::with_value(product("Samsung Galaxy S24", "Premium Android smartphone", 89_900, "📱"))),
                )
                .child(
                    "laptops",
                    Node::with_value(section("Laptops", "Computers and laptops for work and gaming"))
                        .child("macbook-pro", Node::with_value(product("MacBook Pro", "Professional laptop for creators", 199_900, "💻")))
                        .child("dell-xps", Node::with_value(product("Dell XPS 13", "Ultrabook for professionals", 129_900, "💻"))),
                ),
        )
        .child(
            "clothing",
            Node::with_value(section("Clothing", "Fashion and apparel for all occasions"))
                .child(
                    "shirts",
                    Node::with_value(section("Shirts", "Casual and formal shirts"))
                        .child("cotton-tshirt", Node::with_value(product("Cotton T-Shirt", "Comfortable cotton t-shirt", 2_900, "👕"))),
                )
                .child(
                    "jeans",
                    Node::with_value(section("Jeans", "Denim jeans for everyday wear"))
                        .child("slim-fit-jeans", Node::with_value(product("Slim Fit Jeans", "Modern slim fit denim jeans", 7_900, "👖"))),
                ),
        )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn name_at(segments: &[&str]) -> Option<(Level, &'static str)> {
        let selection = CATALOG.select(segments)?;
        Some((selection.level(), selection.listing()?.name))
    }

    #[test]
    fn each_depth_selects_its_level() {
        assert_eq!(name_at(&[]), Some((Level::Root, "Shop")));
        assert_eq!(name_at(&["electronics"]), Some((Level::Category, "Electronics")));
        assert_eq!(name_at(&["electronics", "phones"]), Some((Level::Subcategory, "Phones")));
        assert_eq!(name_at(&["electronics", "phones", "iphone-15"]), Some((Level::Product, "iPhone 15")));
    }

    #[test]
    fn misses_are_none() {
        assert!(CATALOG.select(&["electronics", "phones", "pixel-9"]).is_none());
        assert!(CATALOG.select(&["groceries"]).is_none());
        assert!(CATALOG.select(&["clothing", "phones"]).is_none());
        assert!(CATALOG.select(&["electronics", "phones", "iphone-15", "case"]).is_none());
    }

    #[test]
    fn products_carry_offers() {
        let selection = CATALOG.select(&["electronics", "laptops", "macbook-pro"]).unwrap();
        assert_eq!(selection.listing().unwrap().offer, Some(Offer { price_cents: 199_900, image: "💻" }));

        let category = CATALOG.select(&["electronics"]).unwrap();
        assert!(category.listing().unwrap().offer.is_none());
    }

    #[test]
    fn children_and_ancestry_follow_catalog_order() {
        let root = CATALOG.select::<&str>(&[]).unwrap();
        let keys: Vec<&str> = root.children().map(|(k, _)| k).collect();
        assert_eq!(keys, ["electronics", "clothing"]);

        let product = CATALOG.select(&["clothing", "jeans", "slim-fit-jeans"]).unwrap();
        let names: Vec<&str> = product.ancestry().map(|(_, l)| l.name).collect();
        assert_eq!(names, ["Clothing", "Jeans", "Slim Fit Jeans"]);
        assert_eq!(product.children().count(), 0);
    }
}
