//! File-system route notation.
//!
//! Routes are written the way they would be laid out as folders, then
//! compiled to the `{param}` / `{*rest}` syntax that [`matchit`] understands:
//!
//! | segment       | kind                 | compiled to                  |
//! |---------------|----------------------|------------------------------|
//! | `about`       | static               | `about`                      |
//! | `[slug]`      | dynamic              | `{slug}`                     |
//! | `[...slug]`   | catch-all            | `{*slug}`                    |
//! | `[[...slug]]` | optional catch-all   | the base path *and* `{*slug}`|
//! | `(marketing)` | route group          | nothing                      |
//! | `@modal`      | parallel slot        | nothing                      |
//! | `(.)gallery`  | intercepting route   | rebased prefix + `gallery`   |
//! | `_utils`      | private folder       | rejected                     |
//!
//! Groups and slots organise code without showing up in the URL. An
//! intercept marker rebases the path built so far: `(.)` keeps it, `(..)`
//! drops one segment, `(..)(..)` drops two, `(...)` goes back to the root.

use thiserror::Error;

/// How far up an intercepting route reaches before matching its target.
#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum InterceptLevel {
    /// `(.)`
    SameLevel,
    /// `(..)`
    OneLevelUp,
    /// `(..)(..)`
    TwoLevelsUp,
    /// `(...)`
    FromRoot,
}

/// One folder of a route pattern.
#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Segment<'a> {
    Static(&'a str),
    Dynamic(&'a str),
    CatchAll(&'a str),
    OptionalCatchAll(&'a str),
    Group(&'a str),
    Slot(&'a str),
    Intercept(InterceptLevel, &'a str),
    Private(&'a str),
}

#[derive(Debug, Error, PartialEq, Eq)]
pub enum PatternError {
    #[error("pattern must start with `/`")]
    Relative,
    #[error("`{0}` is a private folder and cannot be routed")]
    Private(String),
    #[error("catch-all `{0}` must be the last segment")]
    CatchAllNotLast(String),
    #[error("malformed segment `{0}`")]
    Malformed(String),
    #[error("intercept `{0}` reaches above the root")]
    AboveRoot(String),
}

/// Classifies a single folder name.
///
/// Optional catch-alls are checked before catch-alls, and catch-alls before
/// plain dynamic segments, since each is a prefix of the next.
pub fn classify(segment: &str) -> Segment<'_> {
    if let Some(name) = segment.strip_prefix("[[...").and_then(|s| s.strip_suffix("]]")) {
        return Segment::OptionalCatchAll(name);
    }
    if let Some(inner) = segment.strip_prefix('[').and_then(|s| s.strip_suffix(']')) {
        return match inner.strip_prefix("...") {
            Some(name) => Segment::CatchAll(name),
            None => Segment::Dynamic(inner),
        };
    }
    for (marker, level) in [
        ("(..)(..)", InterceptLevel::TwoLevelsUp),
        ("(...)", InterceptLevel::FromRoot),
        ("(..)", InterceptLevel::OneLevelUp),
        ("(.)", InterceptLevel::SameLevel),
    ] {
        if let Some(rest) = segment.strip_prefix(marker) {
            return Segment::Intercept(level, rest);
        }
    }
    if let Some(name) = segment.strip_prefix('(').and_then(|s| s.strip_suffix(')')) {
        return Segment::Group(name);
    }
    if let Some(name) = segment.strip_prefix('@') {
        return Segment::Slot(name);
    }
    if segment.starts_with('_') {
        return Segment::Private(segment);
    }
    Segment::Static(segment)
}

/// A pattern compiled to one or more matchit paths.
#[derive(Debug, Eq, PartialEq)]
pub struct RoutePattern {
    paths: Vec<String>,
    intercepting: bool,
}

impl RoutePattern {
    pub fn parse(pattern: &str) -> Result<Self, PatternError> {
        let rest = pattern.strip_prefix('/').ok_or(PatternError::Relative)?;
        let raw: Vec<&str> = rest.split('/').filter(|s| !s.is_empty()).collect();

        let mut parts: Vec<String> = Vec::new();
        let mut intercepting = false;
        let mut optional_tail = None;

        for (i, &text) in raw.iter().enumerate() {
            let is_last = i + 1 == raw.len();
            let mut segment = classify(text);

            if let Segment::Intercept(level, target) = segment {
                let drop = match level {
                    InterceptLevel::SameLevel => 0,
                    InterceptLevel::OneLevelUp => 1,
                    InterceptLevel::TwoLevelsUp => 2,
                    InterceptLevel::FromRoot => parts.len(),
                };
                if drop > parts.len() {
                    return Err(PatternError::AboveRoot(text.to_owned()));
                }
                parts.truncate(parts.len() - drop);
                intercepting = true;
                segment = classify(target);
            }

            match segment {
                Segment::Group(_) | Segment::Slot(_) => {}
                Segment::Static(name) => {
                    if name.is_empty() || name.contains(['{', '}', '[', ']', '(', ')', '*']) {
                        return Err(PatternError::Malformed(text.to_owned()));
                    }
                    parts.push(name.to_owned());
                }
                Segment::Dynamic(name) => parts.push(format!("{{{}}}", param_name(name, text)?)),
                Segment::CatchAll(_) | Segment::OptionalCatchAll(_) if !is_last => {
                    return Err(PatternError::CatchAllNotLast(text.to_owned()));
                }
                Segment::CatchAll(name) => parts.push(format!("{{*{}}}", param_name(name, text)?)),
                Segment::OptionalCatchAll(name) => {
                    optional_tail = Some(format!("{{*{}}}", param_name(name, text)?));
                }
                Segment::Private(name) => return Err(PatternError::Private(name.to_owned())),
                Segment::Intercept(..) => return Err(PatternError::Malformed(text.to_owned())),
            }
        }

        let base = format!("/{}", parts.join("/"));
        let paths = match optional_tail {
            None => vec![base],
            Some(tail) if parts.is_empty() => vec![format!("/{tail}"), base],
            Some(tail) => vec![format!("{base}/{tail}"), base],
        };
        Ok(Self { paths, intercepting })
    }

    /// The matchit paths this pattern registers, most specific first.
    pub fn paths(&self) -> &[String] { &self.paths }

    pub fn is_intercepting(&self) -> bool { self.intercepting }
}

fn param_name<'a>(name: &'a str, text: &str) -> Result<&'a str, PatternError> {
    if name.is_empty() || !name.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
        return Err(PatternError::Malformed(text.to_owned()));
    }
    Ok(name)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn paths(pattern: &str) -> Vec<String> {
        RoutePattern::parse(pattern).unwrap().paths().to_vec()
    }

    #[test]
    fn classifies_every_folder_kind() {
        assert_eq!(classify("about"), Segment::Static("about"));
        assert_eq!(classify("[slug]"), Segment::Dynamic("slug"));
        assert_eq!(classify("[...slug]"), Segment::CatchAll("slug"));
        assert_eq!(classify("[[...slug]]"), Segment::OptionalCatchAll("slug"));
        assert_eq!(classify("(marketing)"), Segment::Group("marketing"));
        assert_eq!(classify("@modal"), Segment::Slot("modal"));
        assert_eq!(classify("(.)gallery"), Segment::Intercept(InterceptLevel::SameLevel, "gallery"));
        assert_eq!(classify("(..)(..)photo"), Segment::Intercept(InterceptLevel::TwoLevelsUp, "photo"));
        assert_eq!(classify("(...)photo"), Segment::Intercept(InterceptLevel::FromRoot, "photo"));
        assert_eq!(classify("_utils"), Segment::Private("_utils"));
    }

    #[test]
    fn compiles_dynamic_and_catch_all() {
        assert_eq!(paths("/blog/[slug]"), vec!["/blog/{slug}"]);
        assert_eq!(paths("/docs/[...slug]"), vec!["/docs/{*slug}"]);
        assert_eq!(paths("/"), vec!["/"]);
    }

    #[test]
    fn optional_catch_all_registers_base_too() {
        assert_eq!(paths("/shop/[[...slug]]"), vec!["/shop/{*slug}", "/shop"]);
        assert_eq!(paths("/[[...rest]]"), vec!["/{*rest}", "/"]);
    }

    #[test]
    fn groups_and_slots_are_invisible() {
        assert_eq!(paths("/(marketing)/about"), vec!["/about"]);
        assert_eq!(paths("/dashboard/@team"), vec!["/dashboard"]);
    }

    #[test]
    fn intercepts_rebase_the_prefix() {
        let modal = RoutePattern::parse("/@modal/(.)gallery/[id]").unwrap();
        assert!(modal.is_intercepting());
        assert_eq!(modal.paths(), ["/gallery/{id}"]);

        assert_eq!(paths("/feed/(..)photo/[id]"), vec!["/photo/{id}"]);
        assert_eq!(paths("/a/b/(..)(..)photo/[id]"), vec!["/photo/{id}"]);
        assert_eq!(paths("/a/b/c/(...)photo/[id]"), vec!["/photo/{id}"]);
        assert!(!RoutePattern::parse("/blog/[slug]").unwrap().is_intercepting());
    }

    #[test]
    fn rejects_bad_patterns() {
        assert_eq!(RoutePattern::parse("about"), Err(PatternError::Relative));
        assert_eq!(RoutePattern::parse("/_utils/constants"), Err(PatternError::Private("_utils".into())));
        assert_eq!(
            RoutePattern::parse("/docs/[...slug]/edit"),
            Err(PatternError::CatchAllNotLast("[...slug]".into())),
        );
        assert_eq!(RoutePattern::parse("/(..)photo"), Err(PatternError::AboveRoot("(..)photo".into())));
        assert_eq!(RoutePattern::parse("/blog/[]"), Err(PatternError::Malformed("[]".into())));
    }
}
