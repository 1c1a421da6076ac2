use trailmap::config::{Config, DashboardConfig};
use trailmap::content::dashboard::Slot;
use trailmap::{Response, app};

async fn get(uri: &str) -> Response {
    let req = http::Request::builder().uri(uri).body(()).unwrap();
    app(&Config::default()).handle(req).await
}

async fn navigate(uri: &str, from: &str) -> Response {
    let req = http::Request::builder()
        .uri(uri)
        .header("host", "localhost:3000")
        .header("referer", format!("http://localhost:3000{from}"))
        .body(())
        .unwrap();
    app(&Config::default()).handle(req).await
}

#[tokio::test]
async fn static_pages_render() {
    for path in ["/", "/about", "/pricing", "/blog", "/docs", "/gallery", "/routing-demo", "/advanced-routing"] {
        let res = get(path).await;
        assert_eq!(res.status_code(), 200, "{path}");
        assert!(res.body_text().starts_with("<!DOCTYPE html>"), "{path}");
    }
}

#[tokio::test]
async fn route_group_is_invisible_in_urls() {
    let about = get("/about").await.body_text();
    assert!(about.contains("Special Offer"));
    assert_eq!(get("/(marketing)/about").await.status_code(), 404);
    assert_eq!(get("/marketing/about").await.status_code(), 404);
}

#[tokio::test]
async fn docs_resolve_with_breadcrumbs() {
    let res = get("/docs/guides/deployment/vercel").await;
    assert_eq!(res.status_code(), 200);
    let body = res.body_text();
    assert!(body.contains("<title>Deploy to Vercel - Documentation</title>"));
    assert!(body.contains(r#"<a href="/docs/guides">Guides</a>"#));
    assert!(body.contains(r#"<a href="/docs/guides/deployment">Deployment</a>"#));
    assert!(body.contains(r#"<span aria-current="page">Vercel</span>"#));
}

#[tokio::test]
async fn docs_misses_are_404() {
    for path in ["/docs/guides/styling", "/docs/guides/deployment/docker", "/docs/nope"] {
        let res = get(path).await;
        assert_eq!(res.status_code(), 404, "{path}");
        assert!(res.body_text().contains("404 - Page Not Found"));
    }
}

#[tokio::test]
async fn doc_paths_are_normalized() {
    assert_eq!(get("/docs/api//routing").await.status_code(), 200);
    assert_eq!(get("/docs/getting%2Dstarted").await.status_code(), 200);

    let encoded = get("/docs/api%2Frouting").await;
    assert_eq!(encoded.status_code(), 200);
    let body = encoded.body_text();
    assert!(body.contains("<title>Routing API - Documentation</title>"));
    assert!(body.contains(r#"<a href="/docs/api">Api</a>"#));

    let res = get("/docs/api/").await;
    assert_eq!(res.status_code(), 301);
    assert_eq!(res.header("location"), Some("/docs/api"));
}

#[tokio::test]
async fn shop_renders_every_level() {
    let root = get("/shop").await.body_text();
    assert!(root.contains("Shop - All Categories"));
    assert!(root.contains(r#"href="/shop/electronics""#));

    let category = get("/shop/electronics").await.body_text();
    assert!(category.contains("<title>Electronics - Shop</title>"));
    assert!(category.contains("2 products available"));

    let subcategory = get("/shop/electronics/phones").await.body_text();
    assert!(subcategory.contains("Samsung Galaxy S24"));
    assert!(subcategory.contains(r#"href="/shop/electronics/phones/iphone-15""#));

    let product = get("/shop/electronics/laptops/macbook-pro").await.body_text();
    assert!(product.contains("$1,999.00"));
    assert!(product.contains(r#"<a href="/shop/electronics/laptops">Laptops</a>"#));
}

#[tokio::test]
async fn shop_misses_are_404() {
    for path in [
        "/shop/electronics/phones/pixel-9",
        "/shop/groceries",
        "/shop/electronics/phones/iphone-15/case",
    ] {
        assert_eq!(get(path).await.status_code(), 404, "{path}");
    }
}

#[tokio::test]
async fn blog_posts_and_misses() {
    let res = get("/blog/server-components-explained").await;
    assert_eq!(res.status_code(), 200);
    let body = res.body_text();
    assert!(body.contains("Server Components Explained - Next.js 15 Learning Blog"));
    assert!(body.contains("February 4, 2024"));

    assert_eq!(get("/blog/no-such-post").await.status_code(), 404);
}

#[tokio::test]
async fn gallery_photo_is_full_page_on_direct_visit() {
    let body = get("/gallery/3").await.body_text();
    assert!(body.contains("Camera Settings"));
    assert!(!body.contains(r#"role="dialog""#));
}

#[tokio::test]
async fn gallery_photo_is_modal_on_in_app_navigation() {
    let body = navigate("/gallery/3", "/gallery").await.body_text();
    assert!(body.contains(r#"role="dialog""#));
    assert!(body.contains("Modal view of photo 3"));
    assert!(body.contains("Photo Gallery"));

    assert_eq!(navigate("/gallery/42", "/gallery").await.status_code(), 404);
}

#[tokio::test]
async fn foreign_referer_gets_the_full_page() {
    let req = http::Request::builder()
        .uri("/gallery/3")
        .header("host", "localhost:3000")
        .header("referer", "https://elsewhere.example/")
        .body(())
        .unwrap();
    let body = app(&Config::default()).handle(req).await.body_text();
    assert!(!body.contains(r#"role="dialog""#));
}

#[tokio::test]
async fn dashboard_renders_all_slots() {
    let body = get("/dashboard").await.body_text();
    assert!(body.contains("12,543"));
    assert!(body.contains("Alice Johnson"));
    assert!(body.contains("High Memory Usage"));
    assert!(!body.contains(r#"role="alert""#));

    assert_eq!(get("/dashboard/analytics").await.status_code(), 200);
    assert_eq!(get("/dashboard/settings").await.status_code(), 200);
}

#[tokio::test]
async fn failing_slot_only_breaks_itself() {
    let config = Config {
        dashboard: DashboardConfig { failing_slots: vec![Slot::Notifications] },
        ..Config::default()
    };
    let req = http::Request::builder().uri("/dashboard").body(()).unwrap();
    let res = app(&config).handle(req).await;
    assert_eq!(res.status_code(), 200);

    let body = res.body_text();
    assert!(body.contains("Notifications Error"));
    assert!(!body.contains("High Memory Usage"));
    assert!(body.contains("Alice Johnson"));
    assert!(body.contains("12,543"));
}

#[tokio::test]
async fn private_and_unbuilt_paths_are_404() {
    for path in ["/_utils", "/_utils/constants", "/_components", "/contact"] {
        assert_eq!(get(path).await.status_code(), 404, "{path}");
    }
}

#[tokio::test]
async fn probes() {
    assert_eq!(get("/healthz").await.body_text(), "ok");
    let ready = get("/readyz").await.body_text();
    assert_eq!(ready, "ready docs=9 posts=4 photos=8 categories=2");
}

#[tokio::test]
async fn head_and_unknown_methods() {
    let head = http::Request::builder().method("HEAD").uri("/docs").body(()).unwrap();
    let res = app(&Config::default()).handle(head).await;
    assert_eq!(res.status_code(), 200);
    assert!(res.body().is_empty());

    let purge = http::Request::builder().method("PURGE").uri("/docs").body(()).unwrap();
    assert_eq!(app(&Config::default()).handle(purge).await.status_code(), 405);
}
