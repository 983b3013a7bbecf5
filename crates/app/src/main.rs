//! Vitrine
//!
//! Terminal storefront shell over `vitrine_core`. Renders the view frame as
//! text, re-rendering on every store event, and drives the store from stdin
//! commands. Category switches are spawned so the prompt stays interactive
//! while a fetch is outstanding.

use anyhow::Result;
use clap::Parser;
use std::fmt::Write as _;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::broadcast;
use tracing_subscriber::EnvFilter;
use vitrine_core::{Category, DisplayProduct, Storefront, StorefrontConfig, ViewFrame};

#[derive(Parser)]
#[command(name = "vitrine", about = "Terminal storefront for the Vitrine catalog")]
struct Args {
    /// Catalog service base URL
    #[arg(long, default_value = vitrine_core::DEFAULT_BASE_URL)]
    base_url: String,

    /// Directory for persisted preferences (default: ./.vitrine)
    #[arg(long)]
    data_dir: Option<PathBuf>,
}

const HELP: &str = "\
commands:
  all | men | women   switch category filter
  show <n>            open product detail
  add <n>             add product to cart
  buy                 buy from the open detail view
  close               close the detail view
  dismiss             dismiss the notification
  theme               toggle light/dark mode
  help                show this help
  quit                exit";

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
        )
        .init();

    let args = Args::parse();
    let store = Storefront::new(StorefrontConfig {
        base_url: args.base_url,
        data_dir: args.data_dir,
        rng_seed: None,
    })?;

    spawn_renderer(&store);
    store.mount().await;

    println!("{}", HELP);
    let mut lines = BufReader::new(tokio::io::stdin()).lines();
    while let Some(line) = lines.next_line().await? {
        let mut parts = line.split_whitespace();
        let Some(command) = parts.next() else {
            continue;
        };

        if let Ok(category) = Category::from_str(command) {
            // spawned, not awaited: the prompt stays usable mid-fetch
            let store = Arc::clone(&store);
            tokio::spawn(async move { store.set_category(category).await });
            continue;
        }

        match command {
            "show" => match nth_product(&store, parts.next()).await {
                Some(product) => store.select_product(product).await,
                None => println!("show <n>: no such product"),
            },
            "add" => match nth_product(&store, parts.next()).await {
                Some(product) => store.add_to_cart(product).await,
                None => println!("add <n>: no such product"),
            },
            "buy" => match store.frame().await.detail {
                Some(product) => store.buy_now(product).await,
                None => println!("buy: no detail view open"),
            },
            "close" => store.close_detail().await,
            "dismiss" => store.dismiss_notification().await,
            "theme" => {
                let mode = store.toggle_mode().await?;
                println!("display mode: {}", mode.as_str());
            }
            "help" => println!("{}", HELP),
            "quit" | "exit" => break,
            other => println!("unknown command: {} (try: help)", other),
        }
    }

    Ok(())
}

/// Re-render the frame after every state transition
fn spawn_renderer(store: &Arc<Storefront>) {
    let store = Arc::clone(store);
    let mut events = store.subscribe();
    tokio::spawn(async move {
        loop {
            match events.recv().await {
                Ok(_) => print!("{}", render(&store.frame().await)),
                Err(broadcast::error::RecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "renderer lagged behind store events");
                }
                Err(broadcast::error::RecvError::Closed) => break,
            }
        }
    });
}

fn render(frame: &ViewFrame) -> String {
    let mut out = String::new();
    let _ = writeln!(out);
    let _ = writeln!(out, "=== Selected Products ({}) ===", frame.mode.as_str());

    let buttons: Vec<String> = Category::all()
        .iter()
        .map(|c| {
            if *c == frame.category {
                format!("[{}]", c.label())
            } else {
                c.label().to_string()
            }
        })
        .collect();
    let _ = writeln!(out, "{}", buttons.join("  "));

    if let Some(banner) = &frame.banner {
        let _ = writeln!(out, "!! {}", banner);
    }

    if frame.progress {
        let _ = writeln!(out, "Loading products...");
    } else {
        for (index, product) in frame.grid.iter().enumerate() {
            let _ = writeln!(out, "{:>3}. {}", index + 1, card_line(product));
        }
    }

    if let Some(detail) = &frame.detail {
        let _ = writeln!(out, "--- {} ---", detail.title);
        let _ = writeln!(out, "{}", price_line(detail));
        let _ = writeln!(out, "rating: {:.1}/5", detail.rating_value());
        let _ = writeln!(out, "{}", detail.description);
        let _ = writeln!(out, "(buy | close)");
    }

    if let Some(notification) = &frame.notification {
        let _ = writeln!(out, ">> {}", notification);
    }

    out
}

fn card_line(product: &DisplayProduct) -> String {
    format!(
        "{} - {}  ({:.1}/5)",
        product.title,
        price_line(product),
        product.rating_value()
    )
}

fn price_line(product: &DisplayProduct) -> String {
    if product.on_sale() {
        format!(
            "${:.2}  was ${:.2}  save {}%",
            product.price, product.original_price, product.discount
        )
    } else {
        format!("${:.2}", product.price)
    }
}

async fn nth_product(store: &Storefront, arg: Option<&str>) -> Option<DisplayProduct> {
    let index: usize = arg?.parse().ok()?;
    let items = store.catalog_state().await.items;
    items.get(index.checked_sub(1)?).cloned()
}
