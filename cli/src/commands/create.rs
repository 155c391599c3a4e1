use anyhow::Context;
use appctl_common::{config::Config, models::AppType, success};
use appctl_core::application;
use appctl_core::network::http::HttpTransport;
use appctl_core::sender::{RetryPolicy, RetryingSender};

use crate::terminal::{
    print,
    prompt::{self, ConsolePrompt, Prompt},
    spinner,
};

const TYPE_QUESTION: &str = "Enter application type ( e2ee or pure )";
const NAME_QUESTION: &str = "Enter application name";

pub async fn create(
    app_name: Option<String>,
    app_type: Option<String>,
    cfg: &Config,
) -> anyhow::Result<()> {
    let console = ConsolePrompt::new(cfg.disable_input);
    let app_type: String = resolve_type(app_type, &console)?;
    let name: String = resolve_name(app_name, &console)?;

    let transport = HttpTransport::from_config(cfg)?;
    if cfg.quiet == 0 {
        print::aligned_line("Name", name.as_str());
        print::aligned_line("Type", AppType::from_label(&app_type).label());
        print::aligned_line("Endpoint", transport.base_url().as_str());
    }
    let sender = RetryingSender::new(transport, RetryPolicy::from(cfg));

    let result = {
        let _spinner = spinner::start(format!("Creating application {name}..."), cfg.quiet);
        application::create_application(&name, &app_type, &sender).await
    };
    let app_id: String = result.with_context(|| format!("failed to create application '{name}'"))?;

    println!("APP_ID: {app_id}");
    success!("Application create ok.");
    Ok(())
}

/// `--type` is taken as given; only the prompt restricts answers to the known labels.
fn resolve_type(flag: Option<String>, prompt: &dyn Prompt) -> anyhow::Result<String> {
    match flag {
        Some(app_type) => Ok(app_type),
        None => prompt::read_choice(prompt, TYPE_QUESTION, &AppType::LABELS),
    }
}

fn resolve_name(arg: Option<String>, prompt: &dyn Prompt) -> anyhow::Result<String> {
    match arg {
        Some(name) if !name.is_empty() => Ok(name),
        _ => prompt::read_non_empty(prompt, NAME_QUESTION),
    }
}
