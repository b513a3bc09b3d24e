//! HTTP integration tests
//!
//! Drive the full router (routing, extractors, auth middleware, error mapping)
//! against in-memory adapters, or the filesystem adapters over a temp dir.
//!
//! Run with: cargo test integration_tests

#[cfg(test)]
mod tests {
    use std::path::PathBuf;
    use std::sync::Arc;

    use axum::http::{HeaderName, HeaderValue, StatusCode};
    use axum_test::TestServer;
    use serde_json::{json, Value};

    use crate::adapters::{
        FsPostRepository, FsProjectRepository, InMemoryAdminPostRepository, InMemoryRateLimiter,
    };
    use crate::app::{AdminPostService, ContactService, ContactSettings, ContentService};
    use crate::config::Config;
    use crate::domain::ports::{PostRepository, ProjectRepository};
    use crate::test_utils::{
        test_admin_post_at, test_post_dated, test_project_dated, write_content,
        InMemoryPostRepository, InMemoryProjectRepository, MockEmailSender,
    };
    use crate::{build_router, AppState};

    const ADMIN_TOKEN: &str = "Bearer test-admin-token";

    struct Harness {
        server: TestServer,
        mailer: Arc<MockEmailSender>,
    }

    fn harness_with(
        posts: Arc<dyn PostRepository>,
        projects: Arc<dyn ProjectRepository>,
        config: Config,
    ) -> Harness {
        let mailer = Arc::new(MockEmailSender::new());
        let limiter = Arc::new(InMemoryRateLimiter::new(
            config.contact_rate_limit,
            config.contact_rate_window(),
        ));
        let admin_repo = Arc::new(InMemoryAdminPostRepository::new().with_posts([
            test_admin_post_at("Hello World", true, "2024-01-10T09:00:00Z"),
            test_admin_post_at("Draft Ideas", false, "2024-02-01T09:00:00Z"),
            test_admin_post_at("Rust Notes", true, "2024-03-05T09:00:00Z"),
        ]));

        let state = AppState {
            content_service: Arc::new(ContentService::new(posts, projects)),
            contact_service: Arc::new(ContactService::new(
                limiter,
                mailer.clone(),
                ContactSettings {
                    from: config.contact_from.clone(),
                    to: config.contact_to.clone(),
                },
            )),
            admin_service: Arc::new(AdminPostService::new(admin_repo)),
            config,
        };

        Harness {
            server: TestServer::new(build_router(state)).unwrap(),
            mailer,
        }
    }

    fn harness() -> Harness {
        let mut older = test_post_dated("older", "2023-05-01");
        older.tags = vec!["rust".to_string()];
        let mut newer = test_post_dated("newer", "2024-06-15");
        newer.tags = vec!["rust".to_string(), "web".to_string()];
        let middle = test_post_dated("middle", "2024-01-20");
        let mut draft = test_post_dated("draft", "2025-01-01");
        draft.published = false;

        let posts = InMemoryPostRepository::new()
            .with_post(older)
            .with_post(newer)
            .with_post(middle)
            .with_post(draft);

        let mut featured = test_project_dated("compiler", "2024-02-01");
        featured.featured = true;
        featured.tags = vec!["Rust".to_string()];
        let projects = InMemoryProjectRepository::new()
            .with_project(featured)
            .with_project(test_project_dated("portfolio", "2023-09-01"));

        harness_with(
            Arc::new(posts),
            Arc::new(projects),
            Config::for_tests(PathBuf::from("unused")),
        )
    }

    fn header(name: &'static str, value: &'static str) -> (HeaderName, HeaderValue) {
        (
            HeaderName::from_static(name),
            HeaderValue::from_static(value),
        )
    }

    fn contact_body() -> Value {
        json!({
            "name": "Ada Lovelace",
            "email": "ada@example.com",
            "subject": "Project inquiry",
            "message": "I would like to talk about a project."
        })
    }

    #[tokio::test]
    async fn health_check() {
        let h = harness();
        let response = h.server.get("/health").await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>()["status"], "ok");
    }

    // ------------------------------------------------------------------
    // Contact
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn contact_accepts_valid_message() {
        let h = harness();
        let (name, value) = header("x-forwarded-for", "203.0.113.10");

        let response = h
            .server
            .post("/api/contact")
            .add_header(name, value)
            .json(&contact_body())
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.json::<Value>();
        assert_eq!(body["success"], true);
        assert_eq!(body["remaining"], 4);

        let sent = h.mailer.sent();
        assert_eq!(sent.len(), 1);
        assert_eq!(sent[0].reply_to.as_deref(), Some("ada@example.com"));
        assert_eq!(sent[0].to, vec!["owner@example.com".to_string()]);
    }

    #[tokio::test]
    async fn contact_rejects_after_limit() {
        let h = harness();

        for _ in 0..5 {
            let (name, value) = header("x-forwarded-for", "203.0.113.20");
            let response = h
                .server
                .post("/api/contact")
                .add_header(name, value)
                .json(&contact_body())
                .await;
            assert_eq!(response.status_code(), StatusCode::OK);
        }

        let (name, value) = header("x-forwarded-for", "203.0.113.20");
        let response = h
            .server
            .post("/api/contact")
            .add_header(name, value)
            .json(&contact_body())
            .await;

        assert_eq!(response.status_code(), StatusCode::TOO_MANY_REQUESTS);
        assert_eq!(response.header("x-ratelimit-limit"), "5");
        assert_eq!(response.header("x-ratelimit-remaining"), "0");
        assert!(response.headers().contains_key("retry-after"));
        assert_eq!(h.mailer.sent().len(), 5);

        // Another client is unaffected
        let (name, value) = header("x-forwarded-for", "198.51.100.1");
        let response = h
            .server
            .post("/api/contact")
            .add_header(name, value)
            .json(&contact_body())
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
    }

    #[tokio::test]
    async fn contact_rejects_missing_field() {
        let h = harness();
        let mut body = contact_body();
        body.as_object_mut().unwrap().remove("subject");

        let response = h.server.post("/api/contact").json(&body).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(
            response.json::<Value>()["details"],
            "All fields are required"
        );
        assert!(h.mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn contact_rejects_invalid_email() {
        let h = harness();
        let mut body = contact_body();
        body["email"] = json!("not-an-email");

        let response = h.server.post("/api/contact").json(&body).await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert!(h.mailer.sent().is_empty());
    }

    #[tokio::test]
    async fn contact_rejects_mistyped_body() {
        let h = harness();
        let response = h
            .server
            .post("/api/contact")
            .json(&json!({ "name": 42, "email": [] }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    // ------------------------------------------------------------------
    // Content
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn posts_are_listed_newest_first() {
        let h = harness();
        let response = h.server.get("/api/posts").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.json::<Value>();
        let slugs: Vec<&str> = body
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["slug"].as_str().unwrap())
            .collect();
        assert_eq!(slugs, vec!["newer", "middle", "older"]);
        assert!(body[0].get("content").is_none());
    }

    #[tokio::test]
    async fn posts_filter_by_tag() {
        let h = harness();
        let response = h.server.get("/api/posts").add_query_param("tag", "web").await;

        let body = response.json::<Value>();
        assert_eq!(body.as_array().unwrap().len(), 1);
        assert_eq!(body[0]["slug"], "newer");
    }

    #[tokio::test]
    async fn post_tags_are_listed() {
        let h = harness();
        let tags = h.server.get("/api/posts/tags").await.json::<Vec<String>>();
        assert_eq!(tags, vec!["rust".to_string(), "web".to_string()]);
    }

    #[tokio::test]
    async fn get_post_renders_html() {
        let h = harness();
        let response = h.server.get("/api/posts/middle").await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let body = response.json::<Value>();
        assert_eq!(body["slug"], "middle");
        assert!(body["html"].as_str().unwrap().contains("<p>"));
    }

    #[tokio::test]
    async fn unknown_and_draft_posts_are_not_found() {
        let h = harness();
        assert_eq!(
            h.server.get("/api/posts/missing").await.status_code(),
            StatusCode::NOT_FOUND
        );
        assert_eq!(
            h.server.get("/api/posts/draft").await.status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn projects_filter_featured_and_tag() {
        let h = harness();

        let all = h.server.get("/api/projects").await.json::<Value>();
        assert_eq!(all.as_array().unwrap().len(), 2);
        assert_eq!(all[0]["slug"], "compiler");

        let featured = h
            .server
            .get("/api/projects")
            .add_query_param("featured", "true")
            .await
            .json::<Value>();
        assert_eq!(featured.as_array().unwrap().len(), 1);

        let tagged = h
            .server
            .get("/api/projects")
            .add_query_param("tag", "rust")
            .await
            .json::<Value>();
        assert_eq!(tagged[0]["slug"], "compiler");

        assert_eq!(
            h.server.get("/api/projects/nope").await.status_code(),
            StatusCode::NOT_FOUND
        );
    }

    #[tokio::test]
    async fn content_served_from_filesystem() {
        let dir = tempfile::tempdir().unwrap();
        write_content(
            dir.path(),
            "blog",
            "first-post.mdx",
            "---\ntitle: First Post\ndate: 2024-01-01\nexcerpt: Hello\ntags: [rust]\n---\n\n# Hi\n\nSome words here.\n",
        );
        write_content(
            dir.path(),
            "blog",
            "second-post.md",
            "---\ntitle: Second Post\ndate: 2024-02-01\nexcerpt: Again\n---\n\nMore words.\n",
        );
        write_content(
            dir.path(),
            "blog",
            "Mixed-Case.mdx",
            "---\ntitle: Mixed Case\ndate: 2024-03-01\n---\n\nUnreachable by slug.\n",
        );
        write_content(
            dir.path(),
            "projects",
            "site.mdx",
            "---\ntitle: Site\ndescription: This site\ncoverImage: /img/site.png\ntags: [web]\nfeatured: true\ndate: 2024-03-01\n---\n",
        );

        let h = harness_with(
            Arc::new(FsPostRepository::new(dir.path())),
            Arc::new(FsProjectRepository::new(dir.path())),
            Config::for_tests(dir.path().to_path_buf()),
        );

        let posts = h.server.get("/api/posts").await.json::<Value>();
        assert_eq!(posts.as_array().unwrap().len(), 2);
        assert_eq!(posts[0]["slug"], "second-post");
        assert_eq!(posts[1]["slug"], "first-post");
        assert_eq!(posts[1]["readingTime"], 1);

        // Every listed slug can be fetched
        for post in posts.as_array().unwrap() {
            let slug = post["slug"].as_str().unwrap();
            let response = h.server.get(&format!("/api/posts/{}", slug)).await;
            assert_eq!(response.status_code(), StatusCode::OK, "slug {}", slug);
        }

        let post = h.server.get("/api/posts/first-post").await.json::<Value>();
        assert!(post["html"].as_str().unwrap().contains("<h1>Hi</h1>"));

        let project = h.server.get("/api/projects/site").await.json::<Value>();
        assert_eq!(project["featured"], true);
        assert_eq!(project["coverImage"], "/img/site.png");
        assert!(project["html"].is_null());

        // Path traversal never reaches the filesystem
        assert_eq!(
            h.server.get("/api/posts/..%2Fsecret").await.status_code(),
            StatusCode::NOT_FOUND
        );
    }

    // ------------------------------------------------------------------
    // Admin
    // ------------------------------------------------------------------

    #[tokio::test]
    async fn admin_requires_token() {
        let h = harness();
        assert_eq!(
            h.server.get("/api/admin/posts").await.status_code(),
            StatusCode::UNAUTHORIZED
        );

        let (name, value) = header("authorization", "Bearer wrong-token");
        let response = h
            .server
            .get("/api/admin/posts")
            .add_header(name, value)
            .await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn admin_disabled_without_configured_token() {
        let mut config = Config::for_tests(PathBuf::from("unused"));
        config.admin_token = None;
        let h = harness_with(
            Arc::new(InMemoryPostRepository::new()),
            Arc::new(InMemoryProjectRepository::new()),
            config,
        );

        let (name, value) = header("authorization", ADMIN_TOKEN);
        let response = h
            .server
            .get("/api/admin/posts")
            .add_header(name, value)
            .await;
        assert_eq!(response.status_code(), StatusCode::UNAUTHORIZED);
    }

    #[tokio::test]
    async fn admin_lists_filtered_posts() {
        let h = harness();
        let (name, value) = header("authorization", ADMIN_TOKEN);

        let response = h
            .server
            .get("/api/admin/posts")
            .add_header(name, value)
            .add_query_param("status", "published")
            .add_query_param("sort", "title")
            .add_query_param("direction", "asc")
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        let page = response.json::<Value>();
        assert_eq!(page["total_count"], 2);
        assert_eq!(page["items"][0]["title"], "Hello World");
        assert_eq!(page["items"][1]["title"], "Rust Notes");
    }

    #[tokio::test]
    async fn admin_rejects_unknown_sort() {
        let h = harness();
        let (name, value) = header("authorization", ADMIN_TOKEN);

        let response = h
            .server
            .get("/api/admin/posts")
            .add_header(name, value)
            .add_query_param("sort", "views")
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
    }

    fn assert_bad_request_json(response: &axum_test::TestResponse) {
        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        let body = response.json::<Value>();
        assert_eq!(body["error"], "Bad request");
        assert!(body["details"].is_string());
    }

    #[tokio::test]
    async fn admin_bad_input_is_json_bad_request() {
        let h = harness();

        let (name, value) = header("authorization", ADMIN_TOKEN);
        let response = h
            .server
            .post("/api/admin/posts/bulk-delete")
            .add_header(name, value)
            .json(&json!({ "ids": ["not-a-uuid"] }))
            .await;
        assert_bad_request_json(&response);

        let (name, value) = header("authorization", ADMIN_TOKEN);
        let response = h
            .server
            .delete("/api/admin/posts/not-a-uuid")
            .add_header(name, value)
            .await;
        assert_bad_request_json(&response);

        let (name, value) = header("authorization", ADMIN_TOKEN);
        let response = h
            .server
            .get("/api/admin/posts")
            .add_header(name, value)
            .add_query_param("page", "abc")
            .await;
        assert_bad_request_json(&response);

        let (name, value) = header("authorization", ADMIN_TOKEN);
        let response = h
            .server
            .get("/api/admin/posts/export")
            .add_header(name, value)
            .add_query_param("page_size", "-1")
            .await;
        assert_bad_request_json(&response);
    }

    #[tokio::test]
    async fn public_bad_query_is_json_bad_request() {
        let h = harness();
        let response = h
            .server
            .get("/api/projects")
            .add_query_param("featured", "maybe")
            .await;
        assert_bad_request_json(&response);
    }

    #[tokio::test]
    async fn bulk_delete_requires_selection() {
        let h = harness();
        let (name, value) = header("authorization", ADMIN_TOKEN);
        let response = h
            .server
            .post("/api/admin/posts/bulk-delete")
            .add_header(name, value)
            .json(&json!({ "ids": [] }))
            .await;

        assert_eq!(response.status_code(), StatusCode::BAD_REQUEST);
        assert_eq!(response.json::<Value>()["details"], "No posts selected");
    }

    #[tokio::test]
    async fn admin_deletes_posts() {
        let h = harness();

        let (name, value) = header("authorization", ADMIN_TOKEN);
        let page = h
            .server
            .get("/api/admin/posts")
            .add_header(name, value)
            .await
            .json::<Value>();
        let ids: Vec<String> = page["items"]
            .as_array()
            .unwrap()
            .iter()
            .map(|p| p["id"].as_str().unwrap().to_string())
            .collect();
        assert_eq!(ids.len(), 3);

        let (name, value) = header("authorization", ADMIN_TOKEN);
        let response = h
            .server
            .delete(&format!("/api/admin/posts/{}", ids[0]))
            .add_header(name, value)
            .await;
        assert_eq!(response.status_code(), StatusCode::NO_CONTENT);

        let (name, value) = header("authorization", ADMIN_TOKEN);
        let response = h
            .server
            .delete(&format!("/api/admin/posts/{}", ids[0]))
            .add_header(name, value)
            .await;
        assert_eq!(response.status_code(), StatusCode::NOT_FOUND);

        let (name, value) = header("authorization", ADMIN_TOKEN);
        let response = h
            .server
            .post("/api/admin/posts/bulk-delete")
            .add_header(name, value)
            .json(&json!({ "ids": [ids[1], ids[2]] }))
            .await;
        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.json::<Value>()["deleted"], 2);

        let (name, value) = header("authorization", ADMIN_TOKEN);
        let page = h
            .server
            .get("/api/admin/posts")
            .add_header(name, value)
            .await
            .json::<Value>();
        assert_eq!(page["total_count"], 0);
    }

    #[tokio::test]
    async fn admin_exports_csv() {
        let h = harness();
        let (name, value) = header("authorization", ADMIN_TOKEN);

        let response = h
            .server
            .get("/api/admin/posts/export")
            .add_header(name, value)
            .add_query_param("status", "draft")
            .await;

        assert_eq!(response.status_code(), StatusCode::OK);
        assert_eq!(response.header("content-type"), "text/csv; charset=utf-8");
        let csv = response.text();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].contains("Draft Ideas"));
    }
}
