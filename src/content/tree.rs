//! Path resolution over an immutable content tree.
//!
//! One recursive node type serves both shapes of content on the site:
//!
//! - **flat** trees keyed by `/`-joined paths (docs), built with
//!   [`Tree::from_flat`], where a lookup is an exact match on the joined key;
//! - **nested** trees with a fixed depth (the shop catalog), where every
//!   level carries a record and callers care which level they reached.
//!
//! Both are walked the same way: one segment at a time, stopping at the
//! first segment that has no child. A miss is `None`, never an error.

/// A node: an optional record plus ordered, keyed children.
#[derive(Debug)]
pub struct Node<T> {
    value: Option<T>,
    children: Vec<(String, Node<T>)>,
}

impl<T> Node<T> {
    /// A node with no record, used for the root and for path prefixes.
    pub fn empty() -> Self {
        Self { value: None, children: Vec::new() }
    }

    pub fn with_value(value: T) -> Self {
        Self { value: Some(value), children: Vec::new() }
    }

    /// Appends a child, replacing any existing child with the same key.
    pub fn child(mut self, key: impl Into<String>, node: Node<T>) -> Self {
        self.set_child(key.into(), node);
        self
    }

    pub fn value(&self) -> Option<&T> {
        self.value.as_ref()
    }

    /// Children in insertion order.
    pub fn children(&self) -> impl Iterator<Item = (&str, &Node<T>)> {
        self.children.iter().map(|(k, n)| (k.as_str(), n))
    }

    fn set_child(&mut self, key: String, node: Node<T>) {
        match self.children.iter_mut().find(|(k, _)| *k == key) {
            Some((_, existing)) => *existing = node,
            None => self.children.push((key, node)),
        }
    }

    fn entry(&mut self, key: &str) -> &mut Node<T> {
        let index = match self.children.iter().position(|(k, _)| k == key) {
            Some(i) => i,
            None => {
                self.children.push((key.to_owned(), Node::empty()));
                self.children.len() - 1
            }
        };
        &mut self.children[index].1
    }
}

/// The result of walking a path: the node reached and every step taken.
#[derive(Debug)]
pub struct Resolved<'a, T> {
    node: &'a Node<T>,
    trail: Vec<(&'a str, &'a Node<T>)>,
}

impl<'a, T> Resolved<'a, T> {
    pub fn node(&self) -> &'a Node<T> { self.node }
    pub fn value(&self) -> Option<&'a T> { self.node.value() }

    /// How many segments were walked; `0` is the root.
    pub fn depth(&self) -> usize { self.trail.len() }

    /// `(key, node)` for every segment walked, root excluded.
    pub fn trail(&self) -> &[(&'a str, &'a Node<T>)] { &self.trail }
}

/// An immutable content tree.
#[derive(Debug)]
pub struct Tree<T> {
    root: Node<T>,
}

impl<T> Tree<T> {
    pub fn new(root: Node<T>) -> Self {
        Self { root }
    }

    /// Builds a tree from `/`-joined keys.
    ///
    /// `"api/routing"` becomes `api → routing`. Prefixes that have no entry
    /// of their own stay record-less, so they are not found on lookup.
    pub fn from_flat<'k>(entries: impl IntoIterator<Item = (&'k str, T)>) -> Self {
        let mut root = Node::empty();
        for (key, value) in entries {
            let node = key.split('/').fold(&mut root, |node, segment| node.entry(segment));
            node.value = Some(value);
        }
        Self { root }
    }

    pub fn root(&self) -> &Node<T> { &self.root }

    /// Walks `segments` from the root, short-circuiting on the first miss.
    ///
    /// The walk is over the `/`-joined key, so `["api/routing"]` reaches the
    /// same node as `["api", "routing"]`.
    pub fn resolve<S: AsRef<str>>(&self, segments: &[S]) -> Option<Resolved<'_, T>> {
        let mut trail = Vec::with_capacity(segments.len());
        let mut steps = segments.iter().flat_map(|segment| segment.as_ref().split('/'));
        let node = steps.try_fold(&self.root, |node, segment| {
            let (key, child) = node
                .children
                .iter()
                .find(|(k, _)| k == segment)
                .map(|(k, n)| (k.as_str(), n))?;
            trail.push((key, child));
            Some(child)
        })?;
        Some(Resolved { node, trail })
    }

    /// The record stored at exactly `segments`.
    pub fn lookup<S: AsRef<str>>(&self, segments: &[S]) -> Option<&T> {
        self.resolve(segments)?.value()
    }

    /// Every path that carries a record, depth-first in insertion order.
    pub fn paths(&self) -> Vec<Vec<&str>> {
        fn walk<'a, T>(node: &'a Node<T>, prefix: &mut Vec<&'a str>, out: &mut Vec<Vec<&'a str>>) {
            for (key, child) in node.children() {
                prefix.push(key);
                if child.value.is_some() {
                    out.push(prefix.clone());
                }
                walk(child, prefix, out);
                prefix.pop();
            }
        }

        let mut out = Vec::new();
        if self.root.value.is_some() {
            out.push(Vec::new());
        }
        walk(&self.root, &mut Vec::new(), &mut out);
        out
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn flat() -> Tree<&'static str> {
        Tree::from_flat([
            ("getting-started", "Getting Started"),
            ("api", "API Reference"),
            ("api/routing", "Routing API"),
            ("guides/deployment/vercel", "Deploy to Vercel"),
        ])
    }

    #[test]
    fn every_flat_key_resolves_to_its_record() {
        let tree = flat();
        for path in tree.paths() {
            let joined = path.join("/");
            let record = tree.lookup(path.as_slice()).unwrap();
            match joined.as_str() {
                "getting-started" => assert_eq!(*record, "Getting Started"),
                "api" => assert_eq!(*record, "API Reference"),
                "api/routing" => assert_eq!(*record, "Routing API"),
                "guides/deployment/vercel" => assert_eq!(*record, "Deploy to Vercel"),
                other => panic!("unexpected path {other}"),
            }
        }
        assert_eq!(tree.paths().len(), 4);
    }

    #[test]
    fn record_less_prefixes_and_misses_are_none() {
        let tree = flat();
        assert_eq!(tree.lookup(&["guides"]), None);
        assert_eq!(tree.lookup(&["guides", "deployment"]), None);
        assert_eq!(tree.lookup(&["api", "missing"]), None);
        assert_eq!(tree.lookup(&["nope", "routing"]), None);
        assert_eq!(tree.lookup::<&str>(&[]), None);
    }

    #[test]
    fn resolve_keeps_the_trail() {
        let tree = flat();
        let resolved = tree.resolve(&["guides", "deployment", "vercel"]).unwrap();
        assert_eq!(resolved.depth(), 3);
        let keys: Vec<&str> = resolved.trail().iter().map(|(k, _)| *k).collect();
        assert_eq!(keys, ["guides", "deployment", "vercel"]);
        assert_eq!(resolved.value(), Some(&"Deploy to Vercel"));

        let root = tree.resolve::<String>(&[]).unwrap();
        assert_eq!(root.depth(), 0);
    }

    #[test]
    fn segments_holding_a_slash_resolve_by_joined_key() {
        let tree = flat();
        assert_eq!(tree.lookup(&["api/routing"]), Some(&"Routing API"));
        assert_eq!(tree.lookup(&["guides/deployment", "vercel"]), Some(&"Deploy to Vercel"));
        assert_eq!(tree.resolve(&["guides/deployment/vercel"]).unwrap().depth(), 3);
        assert_eq!(tree.lookup(&["api/"]), None);
        assert_eq!(tree.lookup(&["api//routing"]), None);
    }

    #[test]
    fn nested_children_keep_insertion_order() {
        let tree = Tree::new(
            Node::empty()
                .child("electronics", Node::with_value(1))
                .child("clothing", Node::with_value(2)),
        );
        let keys: Vec<&str> = tree.root().children().map(|(k, _)| k).collect();
        assert_eq!(keys, ["electronics", "clothing"]);
    }

    #[test]
    fn lookups_are_repeatable() {
        let tree = flat();
        let first = tree.lookup(&["api", "routing"]).copied();
        let second = tree.lookup(&["api", "routing"]).copied();
        assert_eq!(first, second);
    }
}
