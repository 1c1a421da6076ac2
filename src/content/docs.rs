//! Documentation pages, keyed by `/`-joined path under `/docs`.

use std::sync::LazyLock;

use super::site::Link;
use super::tree::Tree;

#[derive(Debug)]
pub struct DocPage {
    pub title: &'static str,
    /// Trusted HTML.
    pub body: &'static str,
    pub links: &'static [Link],
}

/// A card on the docs index.
#[derive(Debug)]
pub struct Section {
    pub title: &'static str,
    pub description: &'static str,
    pub links: &'static [Link],
}

pub static DOCS: LazyLock<Tree<&'static DocPage>> =
    LazyLock::new(|| Tree::from_flat(PAGES.iter().map(|(key, page)| (*key, page))));

pub fn find<S: AsRef<str>>(segments: &[S]) -> Option<&'static DocPage> {
    DOCS.lookup(segments).copied()
}

const PAGES: &[(&str, DocPage)] = &[
    ("getting-started", DocPage {
        title: "Getting Started",
        body: r#"<h2>Welcome to Next.js 15 Documentation</h2>
<p>This section covers the basics of getting started with Next.js 15.</p>
<h3>Installation</h3>
<pre><code>npx create-next-app@latest my-app</code></pre>
<h3>Key Features</h3>
<ul>
  <li>App Router with file-based routing</li>
  <li>Server and Client Components</li>
  <li>Built-in optimizations</li>
</ul>"#,
        links: &[],
    }),
    ("api", DocPage {
        title: "API Reference",
        body: r#"<h2>API Reference</h2>
<p>Complete API documentation for Next.js 15 features.</p>
<h3>Available APIs</h3>"#,
        links: &[
            Link::new("/docs/api/routing", "Routing API"),
            Link::new("/docs/api/components", "Components API"),
            Link::new("/docs/api/data-fetching", "Data Fetching API"),
        ],
    }),
    ("api/routing", DocPage {
        title: "Routing API",
        body: r#"<h2>Routing API</h2>
<p>Learn about Next.js 15 routing APIs and patterns.</p>
<h3>Route Types</h3>
<ul>
  <li><strong>Static Routes:</strong> /about, /contact</li>
  <li><strong>Dynamic Routes:</strong> /blog/[slug]</li>
  <li><strong>Catch-all Routes:</strong> /docs/[...slug]</li>
  <li><strong>Optional Catch-all:</strong> /shop/[[...slug]]</li>
</ul>
<h3>Navigation</h3>
<pre><code>import Link from 'next/link';
import { useRouter } from 'next/navigation';</code></pre>"#,
        links: &[],
    }),
    ("api/components", DocPage {
        title: "Components API",
        body: r#"<h2>Components API</h2>
<p>Server and Client Components in Next.js 15.</p>
<h3>Server Components</h3>
<ul>
  <li>Run on the server</li>
  <li>Can be async functions</li>
  <li>Access server-side resources</li>
</ul>
<h3>Client Components</h3>
<ul>
  <li>Use 'use client' directive</li>
  <li>Run in the browser</li>
  <li>Can use React hooks</li>
</ul>"#,
        links: &[],
    }),
    ("api/data-fetching", DocPage {
        title: "Data Fetching API",
        body: r#"<h2>Data Fetching API</h2>
<p>Modern data fetching patterns in Next.js 15.</p>
<h3>Server Components</h3>
<pre><code>export default async function Page() {
  const data = await fetch('https://api.example.com/data');
  const json = await data.json();
  return &lt;div&gt;{json.title}&lt;/div&gt;;
}</code></pre>
<h3>Client Components</h3>
<pre><code>'use client';
import { useState, useEffect } from 'react';

export default function ClientPage() {
  const [data, setData] = useState(null);

  useEffect(() =&gt; {
    fetch('/api/data').then(res =&gt; res.json()).then(setData);
  }, []);

  return &lt;div&gt;{data?.title}&lt;/div&gt;;
}</code></pre>"#,
        links: &[],
    }),
    ("guides", DocPage {
        title: "Guides",
        body: r#"<h2>Guides</h2>
<p>Step-by-step guides for common Next.js 15 tasks.</p>
<h3>Available Guides</h3>"#,
        links: &[
            Link::new("/docs/guides/deployment", "Deployment Guide"),
            Link::new("/docs/guides/styling", "Styling Guide"),
            Link::new("/docs/guides/performance", "Performance Guide"),
        ],
    }),
    ("guides/deployment", DocPage {
        title: "Deployment Guide",
        body: r#"<h2>Deployment Guide</h2>
<p>Learn how to deploy your Next.js 15 application.</p>
<h3>Deployment Options</h3>"#,
        links: &[
            Link::new("/docs/guides/deployment/vercel", "Vercel"),
            Link::new("/docs/guides/deployment/netlify", "Netlify"),
            Link::new("/docs/guides/deployment/docker", "Docker"),
        ],
    }),
    ("guides/deployment/vercel", DocPage {
        title: "Deploy to Vercel",
        body: r#"<h2>Deploy to Vercel</h2>
<p>Vercel is the easiest way to deploy Next.js applications.</p>
<h3>Steps</h3>
<ol>
  <li>Push your code to GitHub</li>
  <li>Connect your repository to Vercel</li>
  <li>Deploy automatically on every push</li>
</ol>
<h3>Configuration</h3>
<pre><code>// vercel.json
{
  "framework": "nextjs",
  "buildCommand": "npm run build"
}</code></pre>"#,
        links: &[],
    }),
    ("guides/deployment/netlify", DocPage {
        title: "Deploy to Netlify",
        body: r#"<h2>Deploy to Netlify</h2>
<p>Deploy your Next.js app to Netlify with static export.</p>
<h3>Configuration</h3>
<pre><code>// next.config.js
const nextConfig = {
  output: 'export',
  trailingSlash: true,
  images: {
    unoptimized: true
  }
};

export default nextConfig;</code></pre>"#,
        links: &[],
    }),
];

pub const SECTIONS: &[Section] = &[
    Section {
        title: "Getting Started",
        description: "Learn the basics of Next.js 15",
        links: &[Link::new("/docs/getting-started", "Getting Started Guide")],
    },
    Section {
        title: "API Reference",
        description: "Complete API documentation",
        links: &[
            Link::new("/docs/api", "API Overview"),
            Link::new("/docs/api/routing", "Routing API"),
            Link::new("/docs/api/components", "Components API"),
            Link::new("/docs/api/data-fetching", "Data Fetching API"),
        ],
    },
    Section {
        title: "Guides",
        description: "Step-by-step tutorials",
        links: &[
            Link::new("/docs/guides", "All Guides"),
            Link::new("/docs/guides/deployment", "Deployment Guide"),
            Link::new("/docs/guides/deployment/vercel", "Deploy to Vercel"),
            Link::new("/docs/guides/deployment/netlify", "Deploy to Netlify"),
        ],
    },
];
