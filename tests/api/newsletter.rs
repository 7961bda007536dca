use serde_json::{json, Value};
use wiremock::{matchers::any, Mock, ResponseTemplate};

use crate::helper::{spawn_app, ADMIN_EMAIL, API_KEY, SENDER_EMAIL};

#[tokio::test]
async fn subscribe_returns_200_and_an_acknowledgement_for_valid_data() {
    let app = spawn_app().await;
    app.provider_responds_with(ResponseTemplate::new(202)).await;

    let response = app
        .post_newsletter(r#"{"name":"Ana","email":"ana@example.com"}"#)
        .await;

    assert_eq!(200, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "Subscription successful"}));
}

#[tokio::test]
async fn subscribe_sends_a_welcome_and_an_admin_notification() {
    let app = spawn_app().await;
    Mock::given(wiremock::matchers::header(
        "Authorization",
        format!("Bearer {API_KEY}").as_str(),
    ))
    .respond_with(ResponseTemplate::new(202))
    .expect(2)
    .mount(&app.email_server)
    .await;

    app.post_newsletter(r#"{"name":"Ana","email":"Ana.Lopez@Example.com"}"#)
        .await;

    let sent = app.sent_emails().await;
    assert_eq!(sent.len(), 2);

    let (welcome, notification) = if sent[0].to == ADMIN_EMAIL {
        (&sent[1], &sent[0])
    } else {
        (&sent[0], &sent[1])
    };
    assert_eq!(welcome.to, "Ana.Lopez@Example.com");
    assert_eq!(welcome.from, SENDER_EMAIL);
    assert_eq!(welcome.subject, "Welcome to Whispering Maps! 🔮");
    assert!(welcome.html.contains("Hi Ana,"));

    assert_eq!(notification.to, ADMIN_EMAIL);
    assert_eq!(notification.from, SENDER_EMAIL);
    assert!(notification.html.contains("Ana.Lopez@Example.com"));
}

#[tokio::test]
async fn subscribe_returns_a_400_when_data_is_missing() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let test_cases = [
        (r#"{"name": "bulbasaur"}"#, "missing the email"),
        (r#"{"email": "bulbasaur@mail.com"}"#, "missing the name"),
        (r#"{"name": "", "email": "bulbasaur@mail.com"}"#, "empty name"),
        (r#"{"name": "bulbasaur", "email": null}"#, "null email"),
        ("{}", "missing both name and email"),
        (r#"["bulbasaur", "bulbasaur@mail.com"]"#, "an array"),
        (r#""bulbasaur""#, "a bare string"),
    ];

    for (invalid_body, error_message) in test_cases {
        let response = app.post_newsletter(invalid_body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API did not fail with 400 when the payload was {}",
            error_message
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Name and email are required"}));
    }
}

#[tokio::test]
async fn subscribe_returns_a_400_for_malformed_emails() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for email in ["no-at-sign", "a@b", "a@.com", "two@@example.com", "spa ce@example.com"] {
        let body = json!({"name": "Ana", "email": email}).to_string();
        let response = app.post_newsletter(&body).await;

        assert_eq!(
            400,
            response.status().as_u16(),
            "The API accepted {} as an email",
            email
        );
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Invalid email format"}));
    }
}

#[tokio::test]
async fn subscribe_returns_500_without_leaking_provider_errors() {
    let app = spawn_app().await;
    app.provider_responds_with(
        ResponseTemplate::new(401).set_body_string("The provided authorization grant is invalid"),
    )
    .await;

    let response = app
        .post_newsletter(r#"{"name":"Ana","email":"ana@example.com"}"#)
        .await;

    assert_eq!(500, response.status().as_u16());
    let text = response.text().await.unwrap();
    assert!(!text.contains("authorization grant"));
    assert_eq!(
        serde_json::from_str::<Value>(&text).unwrap(),
        json!({"error": "Failed to process subscription"})
    );
}

#[tokio::test]
async fn subscribe_fails_as_a_whole_when_one_of_the_two_sends_fails() {
    let app = spawn_app().await;
    Mock::given(wiremock::matchers::body_string_contains(ADMIN_EMAIL))
        .respond_with(ResponseTemplate::new(503))
        .mount(&app.email_server)
        .await;
    app.provider_responds_with(ResponseTemplate::new(202)).await;

    let response = app
        .post_newsletter(r#"{"name":"Ana","email":"ana@example.com"}"#)
        .await;

    assert_eq!(500, response.status().as_u16());
}

#[tokio::test]
async fn subscribe_accepts_a_whitespace_name() {
    let app = spawn_app().await;
    app.provider_responds_with(ResponseTemplate::new(202)).await;

    let response = app
        .post_newsletter(r#"{"name":"   ","email":"ana@example.com"}"#)
        .await;

    assert_eq!(200, response.status().as_u16());
    assert_eq!(app.sent_emails().await.len(), 2);
}

#[tokio::test]
async fn subscribe_reports_a_whitespace_email_as_malformed() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&app.email_server)
        .await;

    let response = app
        .post_newsletter(r#"{"name":"Ana","email":"   "}"#)
        .await;

    assert_eq!(400, response.status().as_u16());
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"error": "Invalid email format"}));
}

#[tokio::test]
async fn subscribe_treats_an_unparsable_body_as_a_failed_submission() {
    let app = spawn_app().await;
    Mock::given(any())
        .respond_with(ResponseTemplate::new(202))
        .expect(0)
        .mount(&app.email_server)
        .await;

    for body in [
        "not json",
        "null",
        r#"{"name": 5, "email": "ana@example.com"}"#,
    ] {
        let response = app.post_newsletter(body).await;

        assert_eq!(500, response.status().as_u16());
        let body: Value = response.json().await.unwrap();
        assert_eq!(body, json!({"error": "Failed to process subscription"}));
    }
}
