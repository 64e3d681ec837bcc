// src/main.rs

use siteaudit::{AuditEngine, AuditOptions};
use std::process::ExitCode;

/// Logging setup mirrors the service deployment: env-filterable, compact.
fn init_logging() {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("siteaudit=debug".parse().expect("static directive"))
                .add_directive("info".parse().expect("static directive")),
        )
        .compact()
        .with_target(false)
        .init();
}

fn usage() -> ExitCode {
    eprintln!("Usage: siteaudit [--check] [--business-type <type>] <url>");
    ExitCode::FAILURE
}

#[tokio::main]
async fn main() -> ExitCode {
    init_logging();

    let mut check_only = false;
    let mut business_type: Option<String> = None;
    let mut url: Option<String> = None;

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--check" => check_only = true,
            "--business-type" => match args.next() {
                Some(value) => business_type = Some(value),
                None => return usage(),
            },
            _ if url.is_none() => url = Some(arg),
            _ => return usage(),
        }
    }
    let Some(url) = url else {
        return usage();
    };

    let engine = match AuditEngine::new() {
        Ok(engine) => engine,
        Err(err) => {
            eprintln!("Failed to initialize audit engine: {err:#}");
            return ExitCode::FAILURE;
        }
    };

    if check_only {
        let result = engine.check_eligibility(&url).await;
        println!("{}", serde_json::to_string_pretty(&result).expect("serializable result"));
        return if result.eligible {
            ExitCode::SUCCESS
        } else {
            ExitCode::FAILURE
        };
    }

    match engine.run_audit(&url, &AuditOptions { business_type }).await {
        Ok(report) => {
            println!("{}", serde_json::to_string_pretty(&report).expect("serializable report"));
            ExitCode::SUCCESS
        }
        Err(err) => {
            eprintln!("{err}");
            ExitCode::FAILURE
        }
    }
}
