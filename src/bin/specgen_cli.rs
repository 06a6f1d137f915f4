//! specgen-cli — 在终端里驱动一次文档生成回合。
//!
//! Usage:
//!   specgen-cli [OPTIONS] <description...>
//!
//! Streams one generation turn and prints the resulting markdown to stdout.
//! Ctrl-C cancels the in-flight turn (reported as stopped, not as an error).

use anyhow::{bail, Context};
use specgen_client::{
    CancelHandle, GenerationMode, NoopObserver, Orchestrator, SpecGenClient, TurnOptions,
    TurnOutcome,
};

fn print_usage() {
    println!(
        r#"specgen-cli — SpecGen 命令行客户端

USAGE:
    specgen-cli [OPTIONS] <description...>

OPTIONS:
    --base-url <url>     Backend base URL
    --chat               Force chat mode (revise instead of generate)
    --blocking           Disable streaming (single JSON response)
    --reasoning          Print the reasoning transcript to stderr
    -h, --help           Show this help message

ENVIRONMENT:
    SPECGEN_BASE_URL     Backend base URL (overridden by --base-url)
    RUST_LOG             Log filter (e.g. specgen_client=debug)"#
    );
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let mut base_url: Option<String> = None;
    let mut mode: Option<GenerationMode> = None;
    let mut blocking = false;
    let mut show_reasoning = false;
    let mut description_parts: Vec<String> = Vec::new();

    let mut args = std::env::args().skip(1);
    while let Some(arg) = args.next() {
        match arg.as_str() {
            "--base-url" => {
                base_url = Some(args.next().context("--base-url requires a value")?);
            }
            "--chat" => mode = Some(GenerationMode::Chat),
            "--blocking" => blocking = true,
            "--reasoning" => show_reasoning = true,
            "-h" | "--help" => {
                print_usage();
                return Ok(());
            }
            other if other.starts_with('-') => {
                bail!("unknown option: {other} (try --help)");
            }
            other => description_parts.push(other.to_string()),
        }
    }

    if description_parts.is_empty() {
        print_usage();
        std::process::exit(1);
    }
    let description = description_parts.join(" ");

    let mut builder = SpecGenClient::builder();
    if let Some(url) = base_url {
        builder = builder.base_url(url);
    }
    let client = builder.build().context("failed to build client")?;

    let cancel = CancelHandle::new();
    {
        let cancel = cancel.clone();
        tokio::spawn(async move {
            if tokio::signal::ctrl_c().await.is_ok() {
                cancel.cancel();
            }
        });
    }

    let mut chat = Orchestrator::new(client);
    let options = TurnOptions {
        mode,
        blocking,
        images: None,
        cancel: Some(cancel),
    };
    let report = chat.submit(description.as_str(), options, &NoopObserver).await;

    if show_reasoning && !chat.session().reasoning_content().is_empty() {
        eprintln!("--- reasoning ---");
        eprintln!("{}", chat.session().reasoning_content());
        eprintln!("-----------------");
    }

    match &report.outcome {
        TurnOutcome::Completed => {
            println!("{}", chat.session().markdown_content());
            if let Some(usage) = chat.session().token_usage() {
                eprintln!(
                    "tokens: {} in / {} out / {} total ({} ms)",
                    usage.input_tokens,
                    usage.output_tokens,
                    usage.total_tokens,
                    report.stats.duration_ms
                );
            }
            Ok(())
        }
        TurnOutcome::Aborted => {
            // Show whatever streamed before the stop.
            println!("{}", chat.session().markdown_content());
            eprintln!("stopped");
            std::process::exit(130);
        }
        TurnOutcome::Failed(reason) => {
            println!("{}", chat.session().markdown_content());
            bail!("generation failed: {reason}");
        }
    }
}
