use std::io::Write;
use std::time::Duration;

use clap::{error::ErrorKind, CommandFactory, Parser};
use colored::Colorize;
use indicatif::{ProgressBar, ProgressDrawTarget, ProgressStyle};
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tokio::io::{AsyncBufReadExt, BufReader};

use crate::browser::Browser;
use crate::cli::args::CliArgs;
use crate::cli::command::{self, Command};
use crate::cli::validation;
use crate::config::{self, ConfigFile};
use crate::filter::FilterCriteria;
use crate::output::{self, OutputFormat};
use crate::source::DataSource;

#[derive(Clone, Debug)]
struct RunConfig {
    source: DataSource,
    criteria: FilterCriteria,
    page: usize,
    show: Option<usize>,
    facets: bool,
    interactive: bool,
    output: Option<String>,
    output_format: OutputFormat,
    no_color: bool,
}

fn non_empty(value: Option<String>) -> Option<String> {
    value.filter(|v| !v.trim().is_empty())
}

fn build_run_config(args: CliArgs, cfg: ConfigFile) -> Result<RunConfig, String> {
    validation::validate(&args)?;

    let no_color = args.no_color || cfg.no_color.unwrap_or(false);
    let interactive = args.interactive || cfg.interactive.unwrap_or(false);

    let source = non_empty(args.source)
        .or(non_empty(cfg.source))
        .map(|s| DataSource::parse(&s))
        .unwrap_or_default();

    let criteria = FilterCriteria {
        search: args.search.or(cfg.search).unwrap_or_default(),
        location: args.location.or(cfg.location).unwrap_or_default(),
        employment: args
            .employment_type
            .or(cfg.employment_type)
            .unwrap_or_default(),
    };

    let output = non_empty(args.output.or(cfg.output)).map(|p| config::expand_tilde_string(&p));
    if interactive && output.is_some() {
        return Err("output cannot be combined with interactive mode".to_string());
    }

    let output_format = match args.output_format.or(cfg.output_format) {
        Some(raw) => OutputFormat::parse(&raw)
            .ok_or_else(|| format!("invalid output format '{raw}', expected text or json"))?,
        None => output
            .as_deref()
            .and_then(output::infer_format_from_path)
            .unwrap_or(OutputFormat::Text),
    };

    Ok(RunConfig {
        source,
        criteria,
        page: args.page.unwrap_or(1),
        show: args.show,
        facets: args.facets,
        interactive,
        output,
        output_format,
        no_color,
    })
}

fn init_logging(verbose: u8) {
    let level = match verbose {
        0 => "warn",
        1 => "info",
        _ => "debug",
    };
    let default_filter = format!("warn,jobboard={level}");
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(default_filter),
    )
    .format_timestamp(None)
    .try_init();
}

fn loading_spinner(source: &DataSource) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_draw_target(ProgressDrawTarget::stderr());
    pb.enable_steady_tick(Duration::from_millis(120));
    if let Ok(style) = ProgressStyle::with_template(":: {spinner} {msg} [{elapsed}]") {
        pb.set_style(style);
    }
    pb.set_message(format!("Loading job postings from {source}"));
    pb
}

async fn load(browser: &mut Browser, source: &DataSource) {
    let pb = loading_spinner(source);
    browser.reload(source).await;
    pb.finish_and_clear();
    if let Some(err) = browser.last_error() {
        eprintln!("{} {}", "[WRN]".bold().yellow(), err);
    }
}

#[derive(Debug, PartialEq, Eq)]
enum Flow {
    Render,
    Print(String),
    Quit,
}

async fn apply_command(browser: &mut Browser, source: &DataSource, cmd: Command) -> Flow {
    match cmd {
        Command::Filter(dimension, value) => browser.set_filter(dimension, value),
        Command::ClearFilters => browser.clear_filters(),
        Command::Page(n) => browser.set_page(n),
        Command::Next => browser.next_page(),
        Command::Prev => browser.prev_page(),
        Command::Show(id) => {
            if !browser.records().iter().any(|r| r.id == id) {
                return Flow::Print(format!("no posting with id {id}\n"));
            }
            browser.select(id);
        }
        Command::Close => browser.clear_selection(),
        Command::Reload => load(browser, source).await,
        Command::Facets => return Flow::Print(output::render_facets(&browser.view())),
        Command::Help => return Flow::Print(format!("{}\n", command::HELP)),
        Command::Quit => return Flow::Quit,
    }
    Flow::Render
}

async fn run_interactive(browser: &mut Browser, source: &DataSource) -> Result<(), String> {
    print!("{}", output::render_text(&browser.view()));

    let stdin = BufReader::new(tokio::io::stdin());
    let mut lines = stdin.lines();
    loop {
        print!("{} ", ">".bold().green());
        std::io::stdout()
            .flush()
            .map_err(|e| format!("failed to flush stdout: {e}"))?;

        let line = match lines.next_line().await {
            Ok(Some(line)) => line,
            Ok(None) => break,
            Err(e) => return Err(format!("failed to read command: {e}")),
        };
        let cmd = match Command::parse(&line) {
            Ok(Some(cmd)) => cmd,
            Ok(None) => continue,
            Err(e) => {
                println!("{e}");
                continue;
            }
        };
        match apply_command(browser, source, cmd).await {
            Flow::Render => print!("\n{}", output::render_text(&browser.view())),
            Flow::Print(text) => print!("{text}"),
            Flow::Quit => break,
        }
    }
    println!();
    Ok(())
}

async fn write_output(path: &str, rendered: &[u8]) -> Result<(), String> {
    let mut outfile = OpenOptions::new()
        .create(true)
        .write(true)
        .truncate(true)
        .open(path)
        .await
        .map_err(|e| format!("failed to open output file: {e}"))?;
    outfile
        .write_all(rendered)
        .await
        .map_err(|e| format!("failed to write output file: {e}"))?;
    Ok(())
}

async fn run_async(run: RunConfig) -> Result<(), String> {
    if run.no_color {
        colored::control::set_override(false);
    }

    let mut browser = Browser::new();
    load(&mut browser, &run.source).await;
    browser.set_criteria(run.criteria.clone());
    browser.set_page(run.page);
    if let Some(id) = run.show {
        browser.select(id);
    }

    if run.interactive {
        return run_interactive(&mut browser, &run.source).await;
    }

    let view = browser.view();
    if let Some(id) = run.show {
        if view.selected.is_none() {
            log::warn!("no posting with id {id}");
        }
    }

    let mut rendered = output::render(&view, run.output_format);
    if run.facets && run.output_format == OutputFormat::Text {
        rendered.push(b'\n');
        rendered.extend_from_slice(output::render_facets(&view).as_bytes());
    }

    match run.output.as_deref() {
        Some(path) => {
            write_output(path, &rendered).await?;
            println!(":: Wrote {} postings to {path}", view.visible.len());
        }
        None => {
            std::io::stdout()
                .write_all(&rendered)
                .map_err(|e| format!("failed to write to stdout: {e}"))?;
        }
    }
    Ok(())
}

fn init_config(path: Option<String>) -> Result<(), String> {
    let path = match path {
        Some(p) => config::expand_tilde(&p),
        None => config::default_config_path()
            .ok_or_else(|| "could not determine home directory for config".to_string())?,
    };
    config::ensure_default_config_file(&path)?;
    println!(":: Config    : {}", path.display());
    Ok(())
}

pub fn run_cli() -> Result<(), String> {
    let args = match CliArgs::try_parse() {
        Ok(args) => args,
        Err(e) => match e.kind() {
            ErrorKind::DisplayHelp => {
                print!("{}", CliArgs::command().render_long_help());
                return Ok(());
            }
            ErrorKind::DisplayVersion => {
                let cmd = CliArgs::command();
                print!("{}", cmd.render_version());
                return Ok(());
            }
            _ => return Err(e.to_string()),
        },
    };

    init_logging(args.verbose);

    if args.init_config {
        return init_config(args.config);
    }

    let cfg = match args.config.as_ref() {
        Some(path) => config::load_config(&config::expand_tilde(path), false)?,
        None => match config::default_config_path() {
            Some(path) => config::load_config(&path, true)?,
            None => ConfigFile::default(),
        },
    };

    let run = build_run_config(args, cfg)?;
    log::debug!("run config: {run:?}");

    let rt = tokio::runtime::Builder::new_current_thread()
        .enable_all()
        .build()
        .map_err(|e| format!("failed to build runtime: {e}"))?;

    rt.block_on(run_async(run))
}
