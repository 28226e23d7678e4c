use binz::api::{BinzApi, CmdMessage, MessageLevel};
use binz::config::Config;
use binz::error::{BinzError, Result};
use binz::files::host::HostFs;
use binz::model::Bin;
use binz::remote::http::HttpBinService;
use binz::storage::JsonStorage;
use chrono::Utc;
use clap::Parser;
use colored::*;
use std::io::ErrorKind;
use unicode_width::UnicodeWidthStr;

mod args;
use args::{Cli, Commands};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

type App = BinzApi<HostFs, HttpBinService, JsonStorage<HostFs>>;

fn run() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);
    let api = init_context()?;

    match cli.command {
        Commands::Create { file, name } => handle_create(&api, &file, &name),
        Commands::Update { file, id } => handle_update(&api, &file, &id),
        Commands::Delete { id } => handle_delete(&api, &id),
        Commands::Get { id } => handle_get(&api, &id),
        Commands::List => handle_list(&api),
    }
}

fn init_logging(verbose: bool) {
    let default_filter = if verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default_filter))
        .init();
}

fn init_context() -> Result<App> {
    let config = Config::load()?;
    let remote = HttpBinService::from_config(&config)?;
    let store = JsonStorage::new(HostFs);
    Ok(BinzApi::new(HostFs, remote, store, config.index_path))
}

fn handle_create(api: &App, file: &std::path::Path, name: &str) -> Result<()> {
    let result = api.create_bin(file, name)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_update(api: &App, file: &std::path::Path, id: &str) -> Result<()> {
    let result = api.update_bin(file, id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_delete(api: &App, id: &str) -> Result<()> {
    let result = api.delete_bin(id)?;
    print_messages(&result.messages);
    Ok(())
}

fn handle_get(api: &App, id: &str) -> Result<()> {
    let result = api.get_bin(id)?;
    if let Some(bin) = result.affected.first() {
        println!(
            "{} {} ({}), created {}",
            bin.id.yellow(),
            bin.name.bold(),
            visibility(bin),
            format_time_ago(bin.created_at).trim()
        );
    }
    if let Some(record) = &result.record {
        let pretty =
            serde_json::to_string_pretty(record).map_err(|e| BinzError::Api(e.to_string()))?;
        println!("{}", pretty);
    }
    print_messages(&result.messages);
    Ok(())
}

fn handle_list(api: &App) -> Result<()> {
    let result = match api.list_bins() {
        Ok(result) => result,
        // A missing index just means nothing has been created yet.
        Err(BinzError::Io(e)) if e.kind() == ErrorKind::NotFound => {
            println!("No bins in the index yet.");
            return Ok(());
        }
        Err(e) => return Err(e),
    };
    print_bins(&result.listed);
    print_messages(&result.messages);
    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content.dimmed()),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}

const LINE_WIDTH: usize = 100;
const TIME_WIDTH: usize = 14;
const VISIBILITY_WIDTH: usize = 9;

fn print_bins(bins: &[Bin]) {
    if bins.is_empty() {
        println!("No bins in the index yet.");
        return;
    }

    let id_width = bins.iter().map(|b| b.id.width()).max().unwrap_or(0) + 2;

    for bin in bins {
        let id_str = format!("{:<width$}", bin.id, width = id_width);
        let fixed_width = 2 + id_width + VISIBILITY_WIDTH + TIME_WIDTH;
        let available = LINE_WIDTH.saturating_sub(fixed_width);

        let name_display = truncate_to_width(&bin.name, available);
        let padding = available.saturating_sub(name_display.width());

        println!(
            "  {}{}{}{:<vis$}{}",
            id_str.yellow(),
            name_display,
            " ".repeat(padding),
            visibility(bin),
            format_time_ago(bin.created_at).dimmed(),
            vis = VISIBILITY_WIDTH
        );
    }
}

fn visibility(bin: &Bin) -> &'static str {
    if bin.private {
        "private"
    } else {
        "public"
    }
}

fn truncate_to_width(s: &str, max_width: usize) -> String {
    use unicode_width::UnicodeWidthChar;

    let mut result = String::new();
    let mut current_width = 0;

    for c in s.chars() {
        let char_width = c.width().unwrap_or(0);
        if current_width + char_width > max_width.saturating_sub(1) {
            result.push('…');
            return result;
        }
        result.push(c);
        current_width += char_width;
    }

    result
}

fn format_time_ago(timestamp: chrono::DateTime<Utc>) -> String {
    let duration = Utc::now().signed_duration_since(timestamp);
    let formatter = timeago::Formatter::new();
    let time_str = formatter.convert(duration.to_std().unwrap_or_default());
    format!("{:>width$}", time_str, width = TIME_WIDTH)
}
