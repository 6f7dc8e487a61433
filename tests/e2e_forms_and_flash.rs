// tests/e2e_forms_and_flash.rs
use axum::http::StatusCode;
use spotlight_core::presentation::http::{
    controllers::comments::COMMENT_PENDING,
    flash::{FlashMessage, FlashSigner},
};

mod support;

use support::*;

fn app_with_article() -> (TestApp, i64) {
    let app = TestApp::new();
    let food = seed_category(&app.store, "Food", "food");
    let article = ArticleSeed::new("hot-pot", WRITER_ID, food).published(1).insert(&app.store);
    (app, article)
}

#[tokio::test]
async fn comment_submission_waits_for_moderation() {
    let (app, article) = app_with_article();

    let resp = app
        .post_form(
            "/comments/add/hot-pot/",
            &[("name", "Casey"), ("email", "casey@example.com"), ("content", "Loved it")],
        )
        .await;
    resp.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), "/article/hot-pot/#comments");

    let cookie = resp.flash_cookie().expect("flash cookie set");
    let (_, value) = cookie.split_once('=').unwrap();
    assert_eq!(
        app.flash.decode(value),
        Some(FlashMessage::success(COMMENT_PENDING))
    );

    {
        let tables = app.store.tables();
        let stored: Vec<_> = tables.comments.values().collect();
        assert_eq!(stored.len(), 1);
        assert!(!stored[0].is_approved);
        assert_eq!(stored[0].article_id.0, article);
        assert_eq!(
            stored[0].ip_address.map(|ip| ip.to_string()).as_deref(),
            Some("203.0.113.9")
        );
    }

    let page = app.get_with_cookie("/article/hot-pot/", &cookie).await;
    page.assert_status(StatusCode::OK);
    assert!(page.body.contains("awaiting approval"));
    assert!(!page.body.contains("Loved it"));
}

#[tokio::test]
async fn comment_on_unknown_article_is_404() {
    let (app, _) = app_with_article();
    let resp = app
        .post_form(
            "/comments/add/missing/",
            &[("name", "Casey"), ("email", "casey@example.com"), ("content", "Hello")],
        )
        .await;
    resp.assert_status(StatusCode::NOT_FOUND);
    assert!(app.store.tables().comments.is_empty());
}

#[tokio::test]
async fn invalid_comment_is_rejected() {
    let (app, _) = app_with_article();
    let resp = app
        .post_form(
            "/comments/add/hot-pot/",
            &[("name", "Casey"), ("email", "not-an-email"), ("content", "Hello")],
        )
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);

    let blank = app
        .post_form("/comments/add/hot-pot/", &[("email", "casey@example.com")])
        .await;
    blank.assert_status(StatusCode::BAD_REQUEST);
    assert!(app.store.tables().comments.is_empty());
}

#[tokio::test]
async fn comment_form_get_redirects_to_article() {
    let (app, _) = app_with_article();
    let resp = app.get("/comments/add/hot-pot/").await;
    resp.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), "/article/hot-pot/");
}

#[tokio::test]
async fn comment_form_get_with_malformed_slug_goes_home() {
    let (app, _) = app_with_article();
    let resp = app.get("/comments/add/a%01b/").await;
    resp.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), "/");
}

fn flash_text(app: &TestApp, resp: &TestResponse) -> String {
    let cookie = resp.flash_cookie().expect("flash cookie set");
    let (_, value) = cookie.split_once('=').unwrap();
    app.flash.decode(value).expect("valid flash").text
}

#[tokio::test]
async fn newsletter_subscription_is_idempotent() {
    let app = TestApp::new();
    let form = [("email", "reader@Example.com"), ("first_name", "Rae"), ("next", "/about/")];

    let first = app.post_form("/newsletter/subscribe/", &form).await;
    first.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(first.location(), "/about/");
    assert!(flash_text(&app, &first).contains("successfully subscribed"));

    let again = app.post_form("/newsletter/subscribe/", &form).await;
    again.assert_status(StatusCode::SEE_OTHER);
    assert!(flash_text(&app, &again).contains("already subscribed"));

    let tables = app.store.tables();
    assert_eq!(tables.subscribers.len(), 1);
    let subscriber = tables.subscribers.values().next().unwrap();
    assert_eq!(subscriber.email.as_str(), "reader@example.com");
    assert!(subscriber.is_active);
    let prefs = tables.preferences[&subscriber.id.0];
    assert!(prefs.receive_weekly && prefs.receive_monthly && prefs.receive_events);
    assert!(prefs.receive_food && prefs.receive_spots);
}

#[tokio::test]
async fn inactive_subscriber_is_reactivated() {
    let app = TestApp::new();
    let id = seed_subscriber(&app.store, "old@example.com", false);

    let resp = app
        .post_form(
            "/newsletter/subscribe/",
            &[("email", "old@example.com"), ("first_name", "Olly"), ("last_name", "Old")],
        )
        .await;
    resp.assert_status(StatusCode::SEE_OTHER);
    assert!(flash_text(&app, &resp).contains("re-subscribed"));

    let tables = app.store.tables();
    let subscriber = &tables.subscribers[&id];
    assert!(subscriber.is_active);
    assert!(subscriber.unsubscribed_date.is_none());
    assert_eq!(subscriber.first_name, "Olly");
    assert_eq!(tables.subscribers.len(), 1);
}

#[tokio::test]
async fn newsletter_rejects_malformed_email() {
    let app = TestApp::new();
    let resp = app
        .post_form("/newsletter/subscribe/", &[("email", "nope")])
        .await;
    resp.assert_status(StatusCode::BAD_REQUEST);
    assert!(app.store.tables().subscribers.is_empty());
}

#[tokio::test]
async fn newsletter_next_must_stay_on_site() {
    let app = TestApp::new();
    let targets = [
        "https://evil.example/",
        "//evil.example/x",
        "/\\evil.example",
        "/\u{1}x",
    ];
    for (i, target) in targets.into_iter().enumerate() {
        let email = format!("guard{i}@example.com");
        let resp = app
            .post_form("/newsletter/subscribe/", &[("email", email.as_str()), ("next", target)])
            .await;
        resp.assert_status(StatusCode::SEE_OTHER);
        assert_eq!(resp.location(), "/", "{target} should not be followed");
    }

    let local = app
        .post_form(
            "/newsletter/subscribe/",
            &[("email", "local@example.com"), ("next", "/vlogs/?page=2")],
        )
        .await;
    assert_eq!(local.location(), "/vlogs/?page=2");
}

#[tokio::test]
async fn newsletter_get_redirects_home() {
    let app = TestApp::new();
    let resp = app.get("/newsletter/subscribe/").await;
    resp.assert_status(StatusCode::SEE_OTHER);
    assert_eq!(resp.location(), "/");
}

#[tokio::test]
async fn flash_is_shown_once_then_cleared() {
    let app = TestApp::new();
    let resp = app
        .get_with_flash("/about/", &FlashMessage::info("Welcome back"))
        .await;
    resp.assert_status(StatusCode::OK);
    assert!(resp.body.contains("Welcome back"));
    assert!(resp.body.contains("flash-info"));
    assert!(
        resp.set_cookies()
            .iter()
            .any(|c| c.starts_with("flash=;") && c.contains("Max-Age=0")),
        "flash cookie should be cleared: {:?}",
        resp.set_cookies()
    );

    let plain = app.get("/about/").await;
    assert!(!plain.body.contains("Welcome back"));
    assert!(plain.set_cookies().is_empty());
}

#[tokio::test]
async fn tampered_flash_is_ignored() {
    let app = TestApp::new();
    let forged = FlashSigner::new("some-other-secret-some-other-secret!")
        .encode(&FlashMessage::success("Forged message"))
        .unwrap();

    let resp = app
        .get_with_cookie("/about/", &format!("flash={forged}"))
        .await;
    resp.assert_status(StatusCode::OK);
    assert!(!resp.body.contains("Forged message"));

    let garbage = app.get_with_cookie("/about/", "flash=not-even-close").await;
    garbage.assert_status(StatusCode::OK);
    assert!(!garbage.body.contains("flash-"));
}
