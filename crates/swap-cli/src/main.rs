mod live;

use alloy::primitives::{Address, U256};
use clap::{ArgAction, Args, Parser, Subcommand, ValueEnum};
use color_eyre::eyre::{Context, Result};
use comfy_table::presets::UTF8_BORDERS_ONLY;
use comfy_table::Table;
use serde::Serialize;
use std::path::PathBuf;
use swap_header::amount::NATIVE_DECIMALS;
use swap_header::chain::ChainId;
use swap_header::nav::nav_links;
use swap_header::providers::{
    FixedViewport, HeaderContext, MemoryPreferences, StaticBalances, StaticConnection,
};
use swap_header::style::{header_style, HeaderStyle};
use swap_header::{ActiveConnection, HeaderConfig, HeaderView, NativeAmount};
use tracing::{info, Level};
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "swap-header")]
#[command(about = "Render the StreetSwap page header for a given wallet state")]
#[command(version)]
struct Cli {
    #[arg(long, short = 'v', action = ArgAction::Count, global = true)]
    verbose: u8,

    #[arg(long, short = 'q', global = true)]
    quiet: bool,

    /// JSON file overriding header branding and formatting.
    #[arg(long, global = true)]
    config: Option<PathBuf>,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Render the header for a wallet state given on the command line.
    Render(RenderArgs),
    /// Render the header for an account as seen by a live RPC node.
    Live(LiveArgs),
    /// List known networks and their badge labels.
    Networks,
    /// List the navigation links.
    Nav,
}

#[derive(Clone, Copy, Debug, ValueEnum)]
enum OutputFormat {
    Table,
    Json,
}

/// Presentation options shared by `render` and `live`.
#[derive(Args, Debug)]
struct DisplayArgs {
    /// Treat the device as small/touch (hides the network badge).
    #[arg(long)]
    mobile: bool,

    /// Use the dark theme.
    #[arg(long)]
    dark: bool,

    /// Viewport width in pixels, used for style derivation.
    #[arg(long, default_value_t = 1440)]
    width: u32,

    #[arg(long, value_enum, default_value = "table")]
    output: OutputFormat,
}

#[derive(Args, Debug)]
struct RenderArgs {
    /// Connected wallet address.
    #[arg(long)]
    account: Option<String>,

    /// Chain id the wallet is connected to.
    #[arg(long)]
    chain_id: Option<u64>,

    /// Native balance in whole tokens, e.g. `1.5`.
    #[arg(long, conflicts_with = "balance_wei")]
    balance: Option<String>,

    /// Native balance in wei.
    #[arg(long)]
    balance_wei: Option<String>,

    #[command(flatten)]
    display: DisplayArgs,
}

#[derive(Args, Debug)]
struct LiveArgs {
    #[arg(long, env = "SWAP_RPC_URL")]
    rpc_url: String,

    /// Wallet address to read the balance of.
    #[arg(long)]
    account: Option<String>,

    #[command(flatten)]
    display: DisplayArgs,
}

#[tokio::main]
async fn main() -> Result<()> {
    color_eyre::install()?;

    let cli = Cli::parse();
    init_tracing(cli.verbose, cli.quiet)?;

    let config = match &cli.config {
        Some(path) => HeaderConfig::from_json_file(path)?,
        None => HeaderConfig::default(),
    };

    match cli.command {
        Commands::Render(args) => handle_render(&config, args),
        Commands::Live(args) => handle_live(&config, args).await,
        Commands::Networks => {
            print_networks();
            Ok(())
        }
        Commands::Nav => {
            print_nav();
            Ok(())
        }
    }
}

fn init_tracing(verbose: u8, quiet: bool) -> Result<()> {
    let level = if quiet {
        Level::WARN
    } else {
        match verbose {
            0 => Level::INFO,
            1 => Level::DEBUG,
            _ => Level::TRACE,
        }
    };

    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(level.as_str()))
        .wrap_err("failed to initialize tracing filter")?;

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
    Ok(())
}

fn parse_account(account: Option<&str>) -> Result<Option<Address>> {
    account
        .map(|raw| {
            raw.parse::<Address>()
                .wrap_err_with(|| format!("invalid account address '{raw}'"))
        })
        .transpose()
}

fn parse_wei(raw: &str) -> Result<NativeAmount> {
    let wei = raw
        .trim()
        .parse::<U256>()
        .wrap_err_with(|| format!("invalid wei amount '{raw}'"))?;
    Ok(NativeAmount::from_wei(wei))
}

fn handle_render(config: &HeaderConfig, args: RenderArgs) -> Result<()> {
    let account = parse_account(args.account.as_deref())?;

    let balance = match (args.balance.as_deref(), args.balance_wei.as_deref()) {
        (Some(amount), _) => Some(NativeAmount::parse(amount, NATIVE_DECIMALS)?),
        (None, Some(wei)) => Some(parse_wei(wei)?),
        (None, None) => None,
    };

    let connection = ActiveConnection {
        account,
        chain_id: args.chain_id,
    };
    render_and_print(config, connection, balance, &args.display)
}

async fn handle_live(config: &HeaderConfig, args: LiveArgs) -> Result<()> {
    let account = parse_account(args.account.as_deref())?;
    let state = live::fetch_live_state(&args.rpc_url, account).await?;
    render_and_print(config, state.connection, state.balance, &args.display)
}

#[derive(Serialize)]
struct RenderOutput<'a> {
    view: &'a HeaderView,
    style: &'a HeaderStyle,
}

fn render_and_print(
    config: &HeaderConfig,
    connection: ActiveConnection,
    balance: Option<NativeAmount>,
    display: &DisplayArgs,
) -> Result<()> {
    let mut balances = StaticBalances::new();
    if let (Some(account), Some(amount)) = (connection.account, balance) {
        balances.insert(account, amount);
    }
    let connection = StaticConnection(connection);
    let preferences = MemoryPreferences::new(display.dark);
    let viewport = FixedViewport {
        mobile: display.mobile,
    };

    let ctx = HeaderContext {
        connection: &connection,
        balances: &balances,
        preferences: &preferences,
        viewport: &viewport,
    };
    let view = ctx.render(config);
    let style = header_style(view.dark_mode, display.width, view.account.active);

    info!(
        badge = view.network_badge.is_some(),
        balance = view.account.balance_text.is_some(),
        "header rendered"
    );

    match display.output {
        OutputFormat::Json => {
            let output = RenderOutput {
                view: &view,
                style: &style,
            };
            let json =
                serde_json::to_string_pretty(&output).wrap_err("failed to serialize JSON")?;
            println!("{json}");
        }
        OutputFormat::Table => print_view(&view, &style),
    }
    Ok(())
}

/// Placeholder for table cells with nothing rendered.
const EMPTY_CELL: &str = "-";

/// (element, rendered) rows describing a header view.
fn view_rows(view: &HeaderView, style: &HeaderStyle) -> Vec<(&'static str, String)> {
    let nav: Vec<String> = view
        .nav
        .iter()
        .map(|link| {
            if link.active {
                format!("[{}]", link.label)
            } else {
                link.label.to_string()
            }
        })
        .collect();
    let badge = view
        .network_badge
        .as_ref()
        .map(|badge| badge.label.to_string())
        .unwrap_or_else(|| EMPTY_CELL.to_string());
    let account = if view.account.active {
        "connected"
    } else {
        "not connected"
    };
    let balance = match (&view.account.balance_text, &style.balance) {
        (Some(text), Some(_)) => text.clone(),
        (Some(text), None) => format!("{text} (hidden at this width)"),
        (None, _) => EMPTY_CELL.to_string(),
    };
    let theme = if view.dark_mode { "dark" } else { "light" };

    vec![
        ("Logo", format!("{} -> {}", view.logo.src, view.logo.href)),
        ("Nav", nav.join("  ")),
        ("Network badge", badge),
        ("Account", account.to_string()),
        ("Balance", balance),
        ("Wallet status", "shown".to_string()),
        ("Settings / Menu", "shown".to_string()),
        ("Theme", theme.to_string()),
    ]
}

fn print_view(view: &HeaderView, style: &HeaderStyle) {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Element", "Rendered"]);

    for (element, rendered) in view_rows(view, style) {
        table.add_row(vec![element.to_string(), rendered]);
    }

    println!("{table}");
}

fn print_networks() {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Chain", "Id", "Badge"]);

    for chain in ChainId::ALL {
        table.add_row(vec![
            chain.to_string(),
            chain.id().to_string(),
            chain.network_label().unwrap_or(EMPTY_CELL).to_string(),
        ]);
    }

    println!("{table}");
}

fn print_nav() {
    let mut table = Table::new();
    table.load_preset(UTF8_BORDERS_ONLY);
    table.set_header(vec!["Label", "Href", "Target", "Active"]);

    for link in nav_links() {
        table.add_row(vec![
            link.label.to_string(),
            link.href.to_string(),
            link.target.as_attr().unwrap_or("").to_string(),
            if link.active { "yes" } else { "" }.to_string(),
        ]);
    }

    println!("{table}");
}
