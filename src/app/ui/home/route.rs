use askama::Template;
use axum::response::IntoResponse;

use crate::{
    app::ui::form::{Contact, Newsletter, Popup},
    domain::contact::Topic,
};

#[derive(Template)]
#[template(path = "index.html")]
struct HomeTemplate {
    newsletter: Popup<Newsletter>,
    contact: Popup<Contact>,
    topics: [Topic; 5],
}

#[tracing::instrument(name = "Home page")]
pub async fn home_page() -> impl IntoResponse {
    HomeTemplate {
        newsletter: Popup::default(),
        contact: Popup::default(),
        topics: Topic::ALL,
    }
}
