//! Blog posts.

use std::sync::LazyLock;

use super::format::{strip_tags, truncate_text};
use super::tree::Tree;

#[derive(Debug)]
pub struct Post {
    pub slug: &'static str,
    pub title: &'static str,
    pub excerpt: &'static str,
    /// Trusted HTML.
    pub body: &'static str,
    /// `YYYY-MM-DD`.
    pub date: &'static str,
    pub author: &'static str,
    pub read_time: &'static str,
}

impl Post {
    /// The plain-text opening of the body, for `<meta name="description">`.
    pub fn summary(&self) -> String {
        let text = strip_tags(self.body);
        truncate_text(&text.split_whitespace().collect::<Vec<_>>().join(" "), 160)
    }
}

static BY_SLUG: LazyLock<Tree<&'static Post>> =
    LazyLock::new(|| Tree::from_flat(POSTS.iter().map(|post| (post.slug, post))));

/// The post at `/blog/{slug}`.
pub fn find(slug: &str) -> Option<&'static Post> {
    BY_SLUG.lookup(&[slug]).copied()
}

/// Newest first.
pub const POSTS: &[Post] = &[
    Post {
        slug: "getting-started-nextjs-15",
        title: "Getting Started with Next.js 15",
        excerpt: "Learn the basics of Next.js 15 and its new features.",
        body: r#"<h2>Welcome to Next.js 15</h2>
<p>Next.js 15 brings exciting new features and improvements that make building React applications even better. In this post, we'll explore the key features and how to get started.</p>
<h3>Key Features</h3>
<ul>
  <li><strong>React Compiler:</strong> Automatic optimizations for better performance</li>
  <li><strong>Async Request APIs:</strong> Cleaner data fetching patterns</li>
  <li><strong>Enhanced Caching:</strong> More control over caching behavior</li>
  <li><strong>Turbopack:</strong> Faster development builds</li>
</ul>
<h3>Getting Started</h3>
<p>To create a new Next.js 15 project, run:</p>
<pre><code>npx create-next-app@latest my-app</code></pre>
<p>This will set up a new project with all the latest features and best practices.</p>"#,
        date: "2024-02-05",
        author: "Next.js Learner",
        read_time: "5 min read",
    },
    Post {
        slug: "server-components-explained",
        title: "Server Components Explained",
        excerpt: "Deep dive into React Server Components and how they work in Next.js 15.",
        body: r#"<h2>Understanding React Server Components</h2>
<p>React Server Components are a game-changer for React applications. They allow you to render components on the server, reducing the JavaScript bundle size and improving performance.</p>
<h3>How They Work</h3>
<p>Server Components run on the server during the build process or at request time. They can:</p>
<ul>
  <li>Access server-side resources directly</li>
  <li>Be async functions</li>
  <li>Fetch data without additional API calls</li>
  <li>Reduce client-side JavaScript</li>
</ul>
<h3>Example</h3>
<pre><code>// This is a Server Component
export default async function BlogPost() {
  const data = await fetch('https://api.example.com/posts');
  const posts = await data.json();

  return (
    &lt;div&gt;
      {posts.map(post =&gt; (
        &lt;article key={post.id}&gt;{post.title}&lt;/article&gt;
      ))}
    &lt;/div&gt;
  );
}</code></pre>"#,
        date: "2024-02-04",
        author: "Next.js Learner",
        read_time: "7 min read",
    },
    Post {
        slug: "app-router-vs-pages-router",
        title: "App Router vs Pages Router",
        excerpt: "Understanding the differences and when to use each routing approach.",
        body: r#"<h2>Choosing the Right Router</h2>
<p>Next.js offers two routing systems: the newer App Router and the traditional Pages Router. Understanding when to use each is crucial for your project's success.</p>
<h3>App Router (Recommended)</h3>
<ul>
  <li>File-based routing in the <code>app/</code> directory</li>
  <li>Built-in support for Server Components</li>
  <li>Nested layouts and loading states</li>
  <li>Better performance and SEO</li>
</ul>
<h3>Pages Router (Legacy)</h3>
<ul>
  <li>File-based routing in the <code>pages/</code> directory</li>
  <li>Traditional React patterns</li>
  <li>Simpler mental model for beginners</li>
  <li>Extensive ecosystem support</li>
</ul>
<h3>Migration Strategy</h3>
<p>If you're starting a new project, use the App Router. For existing projects, you can migrate incrementally using the <code>app/</code> directory alongside <code>pages/</code>.</p>"#,
        date: "2024-02-03",
        author: "Next.js Learner",
        read_time: "6 min read",
    },
    Post {
        slug: "dynamic-routing-patterns",
        title: "Dynamic Routing Patterns",
        excerpt: "Master dynamic routes, catch-all routes, and optional segments.",
        body: r#"<h2>Mastering Dynamic Routes</h2>
<p>Dynamic routing is one of Next.js's most powerful features. It allows you to create flexible, data-driven routes that adapt to your content.</p>
<h3>Basic Dynamic Routes</h3>
<p>Create a file with square brackets to define a dynamic segment:</p>
<pre><code>app/blog/[slug]/page.js  // Matches /blog/hello-world</code></pre>
<h3>Catch-All Routes</h3>
<p>Use three dots for catch-all routes:</p>
<pre><code>app/docs/[...slug]/page.js  // Matches /docs/a/b/c</code></pre>
<h3>Optional Catch-All Routes</h3>
<p>Double square brackets make segments optional:</p>
<pre><code>app/shop/[[...slug]]/page.js  // Matches /shop and /shop/a/b</code></pre>
<h3>Next.js 15 Changes</h3>
<p>In Next.js 15, params are now async:</p>
<pre><code>export default async function Page({ params }) {
  const { slug } = await params; // params is now a Promise
  return &lt;div&gt;{slug}&lt;/div&gt;;
}</code></pre>"#,
        date: "2024-02-02",
        author: "Next.js Learner",
        read_time: "8 min read",
    },
];

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn finds_posts_by_slug() {
        for post in POSTS {
            assert_eq!(find(post.slug).map(|p| p.title), Some(post.title));
        }
        assert!(find("not-a-post").is_none());
        assert!(find("").is_none());
    }

    #[test]
    fn newest_first() {
        assert!(POSTS.windows(2).all(|w| w[0].date > w[1].date));
    }

    #[test]
    fn summary_is_plain_text() {
        let summary = find("getting-started-nextjs-15").unwrap().summary();
        assert!(summary.starts_with("Welcome to Next.js 15 Next.js 15 brings"));
        assert!(!summary.contains('<'));
        assert!(summary.ends_with("..."));
    }
}
