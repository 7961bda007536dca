use crate::helper::{get_client, spawn_app};

#[tokio::test]
async fn home_page_renders_both_popups_closed_and_idle() {
    let app = spawn_app().await;

    let response = get_client()
        .get(&app.addr)
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(200, response.status().as_u16());
    let html = response.text().await.unwrap();
    assert!(html.contains("The Seven Kids and the Wolf"));
    assert!(html.contains("Let the Magic Find You"));
    assert!(html.contains("Have a Question or Idea?"));
    assert!(html.contains(r#"data-dismiss-ms="3000""#));
    assert!(html.contains(r#"data-dismiss-ms="4000""#));
    assert!(html.contains("Collaboration Idea"));
    assert!(html.contains(">Subscribe</button>"));
    assert!(html.contains(">Send Message</button>"));
}

#[tokio::test]
async fn assets_are_served_from_disk() {
    let app = spawn_app().await;

    let response = get_client()
        .get(format!("{}/assets/js/forms.js", app.addr))
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(200, response.status().as_u16());
    assert!(response.text().await.unwrap().contains("preventDefault"));
}

#[tokio::test]
async fn unknown_pages_return_404() {
    let app = spawn_app().await;

    let response = get_client()
        .get(format!("{}/no/such/page", app.addr))
        .send()
        .await
        .expect("Request should succeed");

    assert_eq!(404, response.status().as_u16());
    assert!(response
        .text()
        .await
        .unwrap()
        .contains("This page wandered off the map"));
}
