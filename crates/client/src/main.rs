//! repodash client - composition root.
//!
//! In the browser this binds the current page. On the host it is a small
//! command-line probe that sends one request through the same transport and
//! prints what the page would show:
//!
//! ```text
//! repodash-client post http://localhost:5000/repository/new name=dotemacs
//! repodash-client get  http://localhost:5000/repository/dotemacs/fetch
//! ```

#[cfg(not(target_arch = "wasm32"))]
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[cfg(target_arch = "wasm32")]
fn main() {
    use std::sync::Arc;

    use repodash_client::bootstrap::{bootstrap, load_config, ClientDeps};
    use repodash_client::infrastructure::dom::WindowNavigator;
    use repodash_client::infrastructure::HttpClient;

    console_error_panic_hook::set_once();
    tracing_wasm::set_as_global_default();

    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        tracing::error!("No document; nothing to bind");
        return;
    };

    let config = load_config(&document);
    tracing::info!(?config, "Starting repodash client");

    let deps = ClientDeps {
        http: Arc::new(HttpClient::new(config.request_timeout_ms)),
        navigation: Arc::new(WindowNavigator),
        config,
    };
    bootstrap(&document, &deps);
}

#[cfg(not(target_arch = "wasm32"))]
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    use repodash_client::ClientConfig;

    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "repodash_client=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let config = ClientConfig::from_env();
    let args: Vec<String> = std::env::args().skip(1).collect();
    probe::run(&args, &config).await
}

#[cfg(not(target_arch = "wasm32"))]
mod probe {
    use anyhow::{bail, Context};
    use repodash_client::infrastructure::HttpClient;
    use repodash_client::ports::outbound::HttpPort;
    use repodash_client::ClientConfig;
    use repodash_domain::{FormPayload, SubmissionError, SubmitOutcome};

    const USAGE: &str = "usage: repodash-client <post|get> <url> [name=value ...]";

    pub async fn run(args: &[String], config: &ClientConfig) -> anyhow::Result<()> {
        let [method, url, fields @ ..] = args else {
            bail!(USAGE);
        };
        let url = url::Url::parse(url).with_context(|| format!("invalid URL: {url}"))?;
        let client = HttpClient::new(None, config.request_timeout_ms)?;

        let result = match method.to_ascii_lowercase().as_str() {
            "post" => {
                let payload = parse_fields(fields)?;
                client.post_form(url.as_str(), &payload).await
            }
            "get" => client.get(url.as_str()).await,
            other => bail!("unknown method {other}; {USAGE}"),
        };

        match SubmitOutcome::from_result(result) {
            Ok(SubmitOutcome::Redirect(target)) => println!("redirect: {target}"),
            Ok(_) => println!("no action"),
            Err(e @ SubmissionError::Application(_)) => println!("alert: {e}"),
            Err(e) => {
                println!("alert: {e}");
                bail!("request failed: {e}");
            }
        }
        Ok(())
    }

    fn parse_fields(fields: &[String]) -> anyhow::Result<FormPayload> {
        fields
            .iter()
            .map(|field| {
                field
                    .split_once('=')
                    .with_context(|| format!("field must be name=value: {field}"))
            })
            .collect()
    }
}
