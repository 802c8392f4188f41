#![allow(dead_code, clippy::unwrap_used, clippy::panic, clippy::missing_panics_doc, clippy::must_use_candidate, missing_debug_implementations, unreachable_pub)]

use async_trait::async_trait;
use atlas_lead_server::api::{self, MgmtState};
use atlas_lead_server::config::{Config, LogFormat, MailConfig, RateLimitConfig, ServerConfig, SmtpConfig, TelemetryConfig};
use atlas_lead_server::domain::OutboundEmail;
use atlas_lead_server::services::lead_service::LeadService;
use atlas_lead_server::services::mailer::{MailError, Mailer};
use std::net::SocketAddr;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex, Once};
use std::time::Duration;

static INIT: Once = Once::new();

pub fn setup_tracing() {
    INIT.call_once(|| {
        let filter = tracing_subscriber::EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| "warn".into())
            .add_directive("atlas_lead_server=debug".parse().unwrap())
            .add_directive("tower=warn".parse().unwrap())
            .add_directive("hyper=warn".parse().unwrap())
            .add_directive("reqwest=warn".parse().unwrap());

        tracing_subscriber::fmt().with_env_filter(filter).init();
    });
}

/// In-memory `Mailer` that records every delivered message and counts every
/// attempt, with switchable failure modes.
#[derive(Debug, Default)]
pub struct MockMailer {
    pub outbox: Mutex<Vec<OutboundEmail>>,
    pub attempts: AtomicUsize,
    fail_sends: AtomicBool,
    fail_verify: AtomicBool,
}

impl MockMailer {
    pub fn fail_sends(&self, fail: bool) {
        self.fail_sends.store(fail, Ordering::SeqCst);
    }

    pub fn fail_verify(&self, fail: bool) {
        self.fail_verify.store(fail, Ordering::SeqCst);
    }

    pub fn sent(&self) -> Vec<OutboundEmail> {
        self.outbox.lock().unwrap().clone()
    }
}

#[async_trait]
impl Mailer for MockMailer {
    async fn send(&self, email: &OutboundEmail) -> Result<(), MailError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        if self.fail_sends.load(Ordering::SeqCst) {
            return Err(MailError::Unavailable("simulated send failure".to_string()));
        }
        self.outbox.lock().unwrap().push(email.clone());
        Ok(())
    }

    async fn verify(&self) -> Result<(), MailError> {
        if self.fail_verify.load(Ordering::SeqCst) {
            return Err(MailError::Unavailable("simulated relay outage".to_string()));
        }
        Ok(())
    }
}

pub fn get_test_config() -> Config {
    Config {
        server: ServerConfig { host: "127.0.0.1".to_string(), port: 0, mgmt_port: 0 },
        smtp: SmtpConfig {
            host: "localhost".to_string(),
            port: 2525,
            implicit_tls: false,
            username: None,
            password: None,
        },
        mail: MailConfig {
            from_address: "website@atlastechnosoft.com".to_string(),
            operator_inbox: "info@atlastechnosoft.com".to_string(),
            support_phone: "+91-22-4123-4567".to_string(),
            logo_url: "https://www.atlastechnosoft.com/images/logo.png".to_string(),
        },
        rate_limit: RateLimitConfig { per_second: 10000, burst: 10000 },
        telemetry: TelemetryConfig { otlp_endpoint: None, log_format: LogFormat::Text },
    }
}

pub struct TestApp {
    pub api_url: String,
    pub mgmt_url: String,
    pub client: reqwest::Client,
    pub mailer: Arc<MockMailer>,
    pub config: Config,
}

impl TestApp {
    pub async fn spawn() -> Self {
        setup_tracing();
        let config = get_test_config();
        let mailer = Arc::new(MockMailer::default());

        let dyn_mailer: Arc<dyn Mailer> = Arc::clone(&mailer) as Arc<dyn Mailer>;
        let lead_service = LeadService::new(dyn_mailer, config.mail.clone());

        let app = api::app_router(config.clone(), lead_service);
        let mgmt = api::mgmt_router(MgmtState { mailer: Arc::clone(&mailer) as Arc<dyn Mailer> });

        let api_listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let api_addr = api_listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(api_listener, app.into_make_service_with_connect_info::<SocketAddr>()).await.unwrap();
        });

        let mgmt_listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
        let mgmt_addr = mgmt_listener.local_addr().unwrap();
        tokio::spawn(async move {
            axum::serve(mgmt_listener, mgmt.into_make_service_with_connect_info::<SocketAddr>()).await.unwrap();
        });

        Self {
            api_url: format!("http://{api_addr}"),
            mgmt_url: format!("http://{mgmt_addr}"),
            client: reqwest::Client::new(),
            mailer,
            config,
        }
    }

    pub async fn post_json(&self, body: &serde_json::Value) -> reqwest::Response {
        self.client.post(format!("{}/api/contact", self.api_url)).json(body).send().await.unwrap()
    }

    pub async fn post_multipart(&self, form: reqwest::multipart::Form) -> reqwest::Response {
        self.client.post(format!("{}/api/contact", self.api_url)).multipart(form).send().await.unwrap()
    }

    /// Polls until the outbox holds at least `expected` messages. Needed
    /// because the chat log email is sent from a detached task.
    pub async fn wait_for_outbox(&self, expected: usize) {
        for _ in 0..100 {
            if self.mailer.outbox.lock().unwrap().len() >= expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("outbox never reached {expected} messages");
    }

    /// Polls until at least `expected` send attempts were made.
    pub async fn wait_for_attempts(&self, expected: usize) {
        for _ in 0..100 {
            if self.mailer.attempts.load(Ordering::SeqCst) >= expected {
                return;
            }
            tokio::time::sleep(Duration::from_millis(20)).await;
        }
        panic!("send attempts never reached {expected}");
    }
}
