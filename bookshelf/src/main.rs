//! # bookshelf
//!
//! Demo plugin wiring a `book` post type, an `author` admin resource and a
//! few public pages through hook-router, driven from the command line in
//! place of a real host.
//!
//! ## Usage
//!
//! ```bash
//! # List every route, admin page and form hook
//! bookshelf routes
//!
//! # Resolve and dispatch a front-end request
//! bookshelf resolve GET /book/1
//!
//! # Render an admin page
//! bookshelf admin author_list
//!
//! # Submit a form
//! bookshelf submit save_book --field title=Solaris --field author_id=1
//!
//! # Install into the console host and flush rewrites if routes changed
//! bookshelf sync --state ./options.json
//! ```

mod app;

use app::{AppContext, ConsoleHost, RouterConfig, create_router};
use clap::{Parser, Subcommand};
use hook_router::{
    CompiledRouter, JsonFileOptionStore, ResolutionStrategy, RouterError, RouterResult, Verb,
};
use serde::Serialize;
use std::path::PathBuf;
use std::process::ExitCode;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[derive(Parser)]
#[command(name = "bookshelf")]
#[command(author, version, about = "Bookshelf plugin driven through hook-router", long_about = None)]
struct Cli {
    /// Router configuration file (JSON)
    #[arg(short, long, global = true)]
    config: Option<PathBuf>,

    /// Only try routes declared for the request's own verb
    #[arg(long, global = true)]
    request_method: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// List declared routes, admin pages and form hooks
    Routes,

    /// Resolve a front-end request and run its action
    Resolve {
        /// Request verb (GET, POST, PUT, DELETE, PATCH)
        verb: String,

        /// Request path
        path: String,
    },

    /// Render an admin page by slug
    Admin {
        /// Page slug, e.g. book_list
        slug: String,
    },

    /// Submit a form to a hook
    Submit {
        /// Hook name (admin_post_save_book) or form action (save_book)
        hook: String,

        /// Form field as name=value; may be repeated
        #[arg(short, long = "field", value_parser = parse_field)]
        fields: Vec<(String, String)>,
    },

    /// Install into the console host and sync the rewrite cache
    Sync {
        /// Option file the route-table hash is stored in
        #[arg(short, long)]
        state: PathBuf,
    },
}

#[derive(Serialize)]
struct RouteListing {
    routes: Vec<String>,
    admin_pages: Vec<String>,
    form_hooks: Vec<String>,
    fingerprint: String,
}

fn parse_field(raw: &str) -> Result<(String, String), String> {
    raw.split_once('=')
        .map(|(name, value)| (name.trim().to_string(), value.to_string()))
        .ok_or_else(|| format!("expected name=value, got '{}'", raw))
}

fn main() -> ExitCode {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "bookshelf=info,hook_router=info".into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();

    let cli = Cli::parse();

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            if e.code.is_configuration_error() {
                ExitCode::from(2)
            } else {
                ExitCode::FAILURE
            }
        }
    }
}

fn load_config(cli: &Cli) -> RouterResult<RouterConfig> {
    let config = match &cli.config {
        Some(path) => RouterConfig::from_json_str(&std::fs::read_to_string(path)?)?,
        None => RouterConfig::default(),
    };

    Ok(if cli.request_method {
        config.with_resolution(ResolutionStrategy::RequestMethod)
    } else {
        config
    })
}

fn run(cli: Cli) -> RouterResult<()> {
    let ctx = AppContext::new();
    let router = create_router(ctx.clone(), load_config(&cli)?).compile()?;

    match cli.command {
        Commands::Routes => print_json(&listing(&router)?),
        Commands::Resolve { verb, path } => {
            let verb: Verb = verb.parse()?;
            print_json(&router.handle_request(verb, &path)?.response())
        }
        Commands::Admin { slug } => print_json(&router.handle_admin_page(&slug)?),
        Commands::Submit { hook, fields } => {
            ctx.form.set(fields);
            print_json(&router.handle_form_submission(&hook)?)
        }
        Commands::Sync { state } => {
            let mut host = ConsoleHost::new();
            router.install(&mut host);
            let mut store = JsonFileOptionStore::new(state);
            let sync = router.sync_rewrite_cache(&mut host, &mut store)?;
            tracing::info!(
                content_types = host.recorded.content_types.len(),
                flushes = host.recorded.flush_count,
                "Console host ready"
            );
            print_json(&sync)
        }
    }
}

fn listing(router: &CompiledRouter) -> RouterResult<RouteListing> {
    Ok(RouteListing {
        routes: router
            .table()
            .routes()
            .map(|r| format!("{} {} -> {}::{}", r.verb, r.pattern, r.controller, r.action))
            .collect(),
        admin_pages: router.admin_page_slugs(),
        form_hooks: router.form_hook_names(),
        fingerprint: router.fingerprint()?,
    })
}

fn print_json<T: Serialize>(value: &T) -> RouterResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

fn print_error(error: &RouterError) {
    eprintln!("error: {}", error);
    if let Some(cause) = &error.cause {
        eprintln!("  cause: {}", cause);
    }
    if let Some(details) = &error.details {
        eprintln!("  details: {}", details);
    }
}
