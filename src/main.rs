use anyhow::{Context, Result};
use clap::{Args, Parser, Subcommand};
use paystack::config::{config_path, load_config, save_config, saved_config};
use paystack::resources::plans::ListPlansRequest;
use paystack::resources::refunds::ListRefundsRequest;
use paystack::resources::subscriptions::ListSubscriptionsRequest;
use paystack::resources::transactions::ListTransactionsRequest;
use paystack::resources::transfers::ListTransfersRequest;
use paystack::resources::ListRequest;
use paystack::{ClientConfig, PaystackClient, Response};
use serde::Serialize;
use tracing_subscriber::EnvFilter;

#[derive(Parser, Debug)]
#[command(name = "paystack", version, about = "Query the Paystack API from the command line")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    /// Save the secret key (and optionally base url / timeout) to the config file
    Configure {
        #[arg(long)]
        secret_key: String,

        #[arg(long)]
        base_url: Option<String>,

        #[arg(long)]
        timeout_secs: Option<u64>,
    },

    #[command(flatten)]
    Resource(Resource),
}

#[derive(Subcommand, Debug)]
enum Resource {
    Customers {
        #[command(subcommand)]
        action: Lookup,
    },

    Plans {
        #[command(subcommand)]
        action: Lookup,
    },

    Products {
        #[command(subcommand)]
        action: Lookup,
    },

    Subscriptions {
        #[command(subcommand)]
        action: Lookup,
    },

    Refunds {
        #[command(subcommand)]
        action: Lookup,
    },

    /// Payment pages
    Pages {
        #[command(subcommand)]
        action: Lookup,
    },

    Transfers {
        #[command(subcommand)]
        action: Verifiable,
    },

    Transactions {
        #[command(subcommand)]
        action: TransactionAction,
    },
}

#[derive(Args, Debug, Clone, Copy)]
struct PageArgs {
    #[arg(long)]
    page: Option<u32>,

    #[arg(long)]
    per_page: Option<u32>,
}

#[derive(Subcommand, Debug)]
enum Lookup {
    List(PageArgs),
    /// Fetch one record by id, code, email or slug
    Fetch { id: String },
}

#[derive(Subcommand, Debug)]
enum Verifiable {
    List(PageArgs),
    Fetch { id: String },
    Verify { reference: String },
}

#[derive(Subcommand, Debug)]
enum TransactionAction {
    List(PageArgs),
    Fetch { id: i64 },
    Verify { reference: String },
    /// Total volume and counts over the selected page window
    Totals(PageArgs),
}

// Each resource has its own list request type, but all of them page the same way.
macro_rules! paged {
    ($builder:expr, $args:expr) => {{
        let mut builder = $builder;
        if let Some(page) = $args.page {
            builder = builder.page(page);
        }
        if let Some(per_page) = $args.per_page {
            builder = builder.per_page(per_page);
        }
        builder.build()
    }};
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")))
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();

    match cli.command {
        Commands::Configure {
            secret_key,
            base_url,
            timeout_secs,
        } => configure(secret_key, base_url, timeout_secs),
        Commands::Resource(resource) => {
            let config: ClientConfig = load_config().context(
                "no secret key configured; run `paystack configure --secret-key sk_...` or set PAYSTACK_SECRET_KEY",
            )?;
            let client = PaystackClient::from_config(&config)?;
            run(&client, resource).await
        }
    }
}

fn configure(secret_key: String, base_url: Option<String>, timeout_secs: Option<u64>) -> Result<()> {
    let mut config = saved_config(&config_path());
    config.secret_key = secret_key;
    if let Some(base_url) = base_url {
        config.base_url = base_url;
    }
    if let Some(timeout_secs) = timeout_secs {
        config.timeout_secs = timeout_secs;
    }
    let path = save_config(&config)?;
    println!("Saved configuration to {}", path.display());
    Ok(())
}

async fn run(client: &PaystackClient, resource: Resource) -> Result<()> {
    match resource {
        Resource::Customers { action } => match action {
            Lookup::List(args) => print(&client.customers().list(&paged!(ListRequest::builder(), args)).await?),
            Lookup::Fetch { id } => print(&client.customers().fetch(&id).await?),
        },
        Resource::Plans { action } => match action {
            Lookup::List(args) => print(&client.plans().list(&paged!(ListPlansRequest::builder(), args)).await?),
            Lookup::Fetch { id } => print(&client.plans().fetch(&id).await?),
        },
        Resource::Products { action } => match action {
            Lookup::List(args) => print(&client.products().list(&paged!(ListRequest::builder(), args)).await?),
            Lookup::Fetch { id } => print(&client.products().fetch(&id).await?),
        },
        Resource::Subscriptions { action } => match action {
            Lookup::List(args) => print(
                &client
                    .subscriptions()
                    .list(&paged!(ListSubscriptionsRequest::builder(), args))
                    .await?,
            ),
            Lookup::Fetch { id } => print(&client.subscriptions().fetch(&id).await?),
        },
        Resource::Refunds { action } => match action {
            Lookup::List(args) => print(&client.refunds().list(&paged!(ListRefundsRequest::builder(), args)).await?),
            Lookup::Fetch { id } => print(&client.refunds().fetch(&id).await?),
        },
        Resource::Pages { action } => match action {
            Lookup::List(args) => print(&client.payment_pages().list(&paged!(ListRequest::builder(), args)).await?),
            Lookup::Fetch { id } => print(&client.payment_pages().fetch(&id).await?),
        },
        Resource::Transfers { action } => match action {
            Verifiable::List(args) => {
                print(&client.transfers().list(&paged!(ListTransfersRequest::builder(), args)).await?)
            }
            Verifiable::Fetch { id } => print(&client.transfers().fetch(&id).await?),
            Verifiable::Verify { reference } => print(&client.transfers().verify(&reference).await?),
        },
        Resource::Transactions { action } => match action {
            TransactionAction::List(args) => print(
                &client
                    .transactions()
                    .list(&paged!(ListTransactionsRequest::builder(), args))
                    .await?,
            ),
            TransactionAction::Fetch { id } => print(&client.transactions().fetch(id).await?),
            TransactionAction::Verify { reference } => print(&client.transactions().verify(&reference).await?),
            TransactionAction::Totals(args) => {
                print(&client.transactions().totals(&paged!(ListRequest::builder(), args)).await?)
            }
        },
    }
}

fn print<T: Serialize>(response: &Response<T>) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(response)?);
    Ok(())
}
