use anyhow::Context;
use clap::{Arg, ArgAction, ArgMatches, Command};
use meter_client::{AssessmentService, HttpAssessmentService};
use meter_core::MeterConfig;
use meter_session::logging::init_tracing;
use meter_session::{Pipeline, Session, TipsPanel, UiEvent, ViewState};
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;

/// Line that toggles the reveal mode in `watch`
const REVEAL_COMMAND: &str = ":reveal";

fn cli() -> Command {
    let html = Arg::new("html")
        .long("html")
        .action(ArgAction::SetTrue)
        .help("Print the escaped HTML fragment instead of text");

    Command::new("meter")
        .version(meter_core::VERSION)
        .about("Live password strength meter client")
        .arg(
            Arg::new("config")
                .long("config")
                .global(true)
                .help("TOML configuration file"),
        )
        .arg(
            Arg::new("base-url")
                .long("base-url")
                .global(true)
                .help("Evaluation service base URL"),
        )
        .arg(
            Arg::new("log-json")
                .long("log-json")
                .global(true)
                .action(ArgAction::SetTrue)
                .help("Emit diagnostics as JSON"),
        )
        .subcommand_required(true)
        .subcommand(
            Command::new("check")
                .about("Assess one password and print the result")
                .arg(Arg::new("password").required(true).help("Password to assess"))
                .arg(html.clone()),
        )
        .subcommand(
            Command::new("watch")
                .about("Read field values from stdin (empty line clears, :reveal toggles)")
                .arg(html),
        )
        .subcommand(Command::new("tips").about("Print password security tips"))
        .subcommand(Command::new("common").about("Print the published common passwords"))
}

/// Defaults, then `--config`, then `METER_*` variables from `env`, then flags
fn load_config<F>(matches: &ArgMatches, env: F) -> anyhow::Result<MeterConfig>
where
    F: Fn(&str) -> Option<String>,
{
    let base = match matches.get_one::<String>("config") {
        Some(path) => MeterConfig::from_toml_file(path)?,
        None => MeterConfig::default(),
    };
    let mut config = base.with_env_overrides(env);
    if let Some(url) = matches.get_one::<String>("base-url") {
        config = config.with_base_url(url);
    }
    config.validate()?;
    Ok(config)
}

fn print_view(view: &ViewState, html: bool) {
    if html {
        println!("{}", view.results_html());
    } else {
        println!("--- field: {} ---", view.reveal().input_type());
        for line in view.results_text() {
            println!("{line}");
        }
    }
}

fn print_tips(view: &ViewState) {
    match view.tips() {
        TipsPanel::Loaded(tips) => {
            for tip in tips {
                println!("- {tip}");
            }
        }
        TipsPanel::Loading | TipsPanel::Unavailable => println!("Tips are unavailable."),
    }
}

async fn watch(
    service: Arc<dyn AssessmentService>,
    config: &MeterConfig,
    html: bool,
) -> anyhow::Result<()> {
    let (tx, rx) = mpsc::channel(64);
    let pipeline = Pipeline::new(service, Session::from_config(config));
    let task = tokio::spawn(pipeline.run(rx, move |view: &ViewState| print_view(view, html)));

    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await.context("reading stdin")? {
        let event = if line == REVEAL_COMMAND {
            UiEvent::ToggleReveal
        } else {
            UiEvent::Input(line.into())
        };
        if tx.send(event).await.is_err() {
            break;
        }
    }
    let _ = tx.send(UiEvent::Shutdown).await;

    let session = task.await.context("pipeline task panicked")?;
    print_tips(session.view());
    Ok(())
}

#[tokio::main(flavor = "current_thread")]
async fn main() -> anyhow::Result<()> {
    let matches = cli().get_matches();
    init_tracing(matches.get_flag("log-json"));

    let config = load_config(&matches, |key| std::env::var(key).ok())?;
    let http = HttpAssessmentService::new(&config)?;
    tracing::debug!(base_url = http.base_url(), "evaluation service configured");
    let service: Arc<dyn AssessmentService> = Arc::new(http);

    match matches.subcommand() {
        Some(("check", args)) => {
            let password = args
                .get_one::<String>("password")
                .context("password argument missing")?;
            let mut pipeline = Pipeline::new(service, Session::from_config(&config));
            let view = pipeline.assess_once(password).await;
            print_view(view, args.get_flag("html"));
        }
        Some(("watch", args)) => watch(service, &config, args.get_flag("html")).await?,
        Some(("tips", _)) => {
            let mut pipeline = Pipeline::new(service, Session::from_config(&config));
            print_tips(pipeline.load_tips().await);
        }
        Some(("common", _)) => {
            let common = service.fetch_common_passwords().await?;
            for password in common.common_passwords {
                println!("{password}");
            }
        }
        _ => {}
    }

    Ok(())
}
