//! Breadcrumb trails derived from path segments.

/// One step of a breadcrumb trail.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Crumb {
    pub name: String,
    pub href: String,
    pub is_last: bool,
}

/// One crumb per prefix of `segments`, hrefs rooted at `/`.
///
/// ```rust
/// use trailmap::content::breadcrumb::breadcrumbs;
///
/// let trail = breadcrumbs(&["guides", "deployment"]);
/// assert_eq!(trail[0].href, "/guides");
/// assert_eq!(trail[1].name, "Deployment");
/// assert!(trail[1].is_last);
/// ```
pub fn breadcrumbs<S: AsRef<str>>(segments: &[S]) -> Vec<Crumb> {
    breadcrumbs_under("", segments)
}

/// Like [`breadcrumbs`], with every href mounted under `base`
/// (e.g. `"/docs"` gives `/docs/guides`, `/docs/guides/deployment`, …).
pub fn breadcrumbs_under<S: AsRef<str>>(base: &str, segments: &[S]) -> Vec<Crumb> {
    let base = base.trim_end_matches('/');
    let mut href = base.to_owned();
    segments
        .iter()
        .enumerate()
        .map(|(i, segment)| {
            let segment = segment.as_ref();
            href.push('/');
            href.push_str(segment);
            Crumb {
                name: display_name(segment),
                href: href.clone(),
                is_last: i + 1 == segments.len(),
            }
        })
        .collect()
}

/// Upper-cases the first character and turns the first hyphen after it into
/// a space: `"getting-started"` → `"Getting started"`.
///
/// Only one hyphen is replaced, so `"data-fetching-api"` reads
/// `"Data fetching-api"`. Page titles come from the content records; this
/// name only labels intermediate crumbs.
pub fn display_name(segment: &str) -> String {
    let mut chars = segment.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars.as_str().replacen('-', " ", 1).chars()).collect(),
        None => String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn one_crumb_per_prefix() {
        let trail = breadcrumbs(&["guides", "deployment", "vercel"]);
        assert_eq!(trail.len(), 3);
        assert_eq!(trail[0].href, "/guides");
        assert!(!trail[0].is_last);
        assert_eq!(trail[1].href, "/guides/deployment");
        assert_eq!(trail[2].href, "/guides/deployment/vercel");
        assert!(trail[2].is_last);
    }

    #[test]
    fn empty_path_has_no_crumbs() {
        assert!(breadcrumbs::<&str>(&[]).is_empty());
        assert!(breadcrumbs_under::<String>("/docs", &[]).is_empty());
    }

    #[test]
    fn mounted_under_a_base() {
        let trail = breadcrumbs_under("/docs/", &["api", "data-fetching"]);
        assert_eq!(trail[0].href, "/docs/api");
        assert_eq!(trail[1].href, "/docs/api/data-fetching");
        assert_eq!(trail[1].name, "Data fetching");
    }

    #[test]
    fn only_the_first_hyphen_is_prettified() {
        assert_eq!(display_name("getting-started"), "Getting started");
        assert_eq!(display_name("two-part-name"), "Two part-name");
        assert_eq!(display_name("-lead"), "-lead");
        assert_eq!(display_name(""), "");
        assert_eq!(display_name("über"), "Über");
    }

    #[test]
    fn recomputing_gives_the_same_trail() {
        let segments = ["api", "routing"];
        assert_eq!(breadcrumbs(&segments), breadcrumbs(&segments));
    }
}
