use clap::Parser;
use transaction_legs::config::cli::Command;
use transaction_legs::core::{HttpSettings, LegExecutor};
use transaction_legs::utils::error::ErrorSeverity;
use transaction_legs::utils::{logger, validation::Validate};
use transaction_legs::{
    simple_add, CliConfig, ConsoleLegExecutor, DemoRunner, HttpClient, HttpMethod, Result,
    TxError,
};

async fn run(config: &CliConfig) -> Result<()> {
    match &config.command {
        Command::Credit { amount, account } => {
            ConsoleLegExecutor::stdout().credit(*amount, account).await?;
        }
        Command::Debit { amount, account } => {
            ConsoleLegExecutor::stdout().debit(*amount, account).await?;
        }
        Command::Add { a, b } => {
            let result = simple_add(*a, *b);
            println!("Result of simple_add: {}", result.normalize());
        }
        Command::Request {
            url,
            method,
            payload,
            ..
        } => {
            // Parse before any network or config work.
            let method: HttpMethod = method.parse()?;
            let http = config.http_config(&config.load_file()?)?;
            let url = url
                .clone()
                .unwrap_or_else(|| http.api_endpoint().to_string());
            let payload = payload
                .as_deref()
                .map(|raw| serde_json::from_str::<serde_json::Value>(raw))
                .transpose()?;
            let headers = config.request_headers();

            let client = HttpClient::from_settings(&http);
            let response = client
                .request(&url, method, payload.as_ref(), headers.as_ref())
                .await?;
            println!("{}", serde_json::to_string_pretty(&response)?);
        }
        Command::Demo { .. } => {
            let file = config.load_file()?;
            let http = config.http_config(&file)?;
            let plan = config.demo_plan(&file)?;
            let runner = DemoRunner::new(
                ConsoleLegExecutor::stdout(),
                HttpClient::from_settings(&http),
                plan,
            );
            let report = runner.run().await?;
            println!("{}", report);
        }
    }
    Ok(())
}

fn exit_code(e: &TxError) -> i32 {
    match e.severity() {
        ErrorSeverity::Low => 0,
        ErrorSeverity::Medium => 2,
        ErrorSeverity::High => 1,
        ErrorSeverity::Critical => 3,
    }
}

#[tokio::main]
async fn main() {
    let config = CliConfig::parse();

    logger::init_cli_logger(config.verbose, config.log_format);
    tracing::debug!("CLI config: {:?}", config);

    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(1);
    }

    if let Err(e) = run(&config).await {
        tracing::error!(
            "❌ Command failed: {} (Category: {:?}, Severity: {:?})",
            e,
            e.category(),
            e.severity()
        );
        eprintln!("❌ {}", e.user_friendly_message());
        eprintln!("💡 Suggestion: {}", e.recovery_suggestion());

        let code = exit_code(&e);
        if code > 0 {
            std::process::exit(code);
        }
    }
}
