use std::{io, net::SocketAddr};

use anyhow::{anyhow, Context};
use axum::{http::Request, Router};
use tokio::net::TcpListener;
use tower_http::trace::TraceLayer;

use crate::{
    config::Settings,
    email::{EmailClient, Mailboxes},
};

mod api;
mod error;
mod health;
pub mod ui;

#[derive(Clone)]
pub struct AppState {
    email_client: EmailClient,
    mailboxes: Mailboxes,
}

fn app_router() -> Router<AppState> {
    health::router()
        .merge(api::router())
        .merge(ui::router())
        .fallback(ui::not_found::not_found_page)
}

pub struct App {
    listener: TcpListener,
    address: SocketAddr,
    state: AppState,
}

impl App {
    pub async fn with(config: &Settings) -> anyhow::Result<Self> {
        let email_client = EmailClient::new(
            config.email_client.base_url.clone(),
            config.email_client.authorization_token.clone(),
            config.email_client.timeout(),
        )
        .context("The email client could not be built.")?;

        let mailboxes = Mailboxes {
            sender: config
                .email_client
                .sender()
                .map_err(|e| anyhow!("The sender email should be valid: {e}"))?,
            admin: config
                .email_client
                .admin()
                .map_err(|e| anyhow!("The admin email should be valid: {e}"))?,
        };

        let listener = TcpListener::bind(format!(
            "{}:{}",
            config.application.host, config.application.port
        ))
        .await
        .context("The listener should be able to bind the address.")?;
        let address = listener.local_addr()?;

        Ok(Self {
            listener,
            address,
            state: AppState {
                email_client,
                mailboxes,
            },
        })
    }

    pub fn address(&self) -> SocketAddr {
        self.address
    }

    pub fn port(&self) -> u16 {
        self.address.port()
    }

    pub async fn serve(self) -> Result<(), io::Error> {
        let app = app_router().with_state(self.state).layer(
            TraceLayer::new_for_http().make_span_with(|request: &Request<_>| {
                let id = uuid::Uuid::new_v4();
                tracing::info_span!(
                    "request",
                    method = ?request.method(),
                    uri = ?request.uri(),
                    %id,
                )
            }),
        );

        axum::serve(self.listener, app.into_make_service()).await
    }
}
