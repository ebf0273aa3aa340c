use chrono::{DateTime, Utc};
use clap::{Args, Parser, Subcommand};
use std::error::Error;

mod client;
mod render;

use client::{ArticleFields, NewsClient, Paging};

#[derive(Parser)]
#[command(name = "gazette")]
#[command(about = "Read and manage news from a Gazette service")]
struct Cli {
    /// Base URL for the Gazette service
    #[arg(long, env = "GAZETTE_URL", default_value = "http://localhost:5000")]
    service_url: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Args, Clone, Copy)]
struct PageArgs {
    /// Page number, starting at 1
    #[arg(short, long)]
    page: Option<u32>,
    /// Articles per page
    #[arg(short, long)]
    limit: Option<u32>,
}

impl From<PageArgs> for Paging {
    fn from(args: PageArgs) -> Self {
        Paging {
            page: args.page,
            limit: args.limit,
        }
    }
}

#[derive(Args)]
struct FieldArgs {
    #[arg(long)]
    title: Option<String>,
    #[arg(long)]
    content: Option<String>,
    #[arg(long)]
    excerpt: Option<String>,
    #[arg(long)]
    image_url: Option<String>,
    #[arg(long)]
    category: Option<String>,
    #[arg(long)]
    state: Option<String>,
    #[arg(long)]
    author: Option<String>,
    #[arg(long)]
    source: Option<String>,
    /// Spotlight the article on the front page
    #[arg(long)]
    featured: Option<bool>,
    /// Publication time as RFC 3339, e.g. 2024-03-01T09:30:00Z
    #[arg(long)]
    date: Option<DateTime<Utc>>,
}

impl From<FieldArgs> for ArticleFields {
    fn from(args: FieldArgs) -> Self {
        ArticleFields {
            title: args.title,
            content: args.content,
            excerpt: args.excerpt,
            image_url: args.image_url,
            category: args.category,
            state: args.state,
            author: args.author,
            source: args.source,
            featured: args.featured,
            date: args.date,
        }
    }
}

#[derive(Subcommand)]
enum Commands {
    /// Latest news, newest first
    List {
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Front-page spotlight articles
    Featured,
    /// Show one article with related news
    Show { id: String },
    /// News in a category (partial, case-insensitive match)
    Category {
        name: String,
        /// Restrict to a state; "National" means every state
        #[arg(short, long)]
        state: Option<String>,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// News for a state
    State {
        name: String,
        #[command(flatten)]
        paging: PageArgs,
    },
    /// Categories currently in use
    Categories,
    /// States currently in use
    States,
    /// Publish a new article
    Add {
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Change some fields of an article
    Update {
        id: String,
        #[command(flatten)]
        fields: FieldArgs,
    },
    /// Remove an article
    Delete { id: String },
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn Error>> {
    let cli = Cli::parse();
    let client = NewsClient::new(&cli.service_url)?;

    match run(&client, cli.command).await {
        Ok(output) => {
            println!("{output}");
            Ok(())
        }
        Err(err) => {
            eprintln!("Request failed: {err}");
            std::process::exit(1);
        }
    }
}

async fn run(client: &NewsClient, command: Commands) -> Result<String, Box<dyn Error>> {
    let output = match command {
        Commands::List { paging } => render::page(&client.list(paging.into()).await?),
        Commands::Featured => render::articles(&client.featured().await?),
        Commands::Show { id } => render::detail(&client.show(&id).await?),
        Commands::Category {
            name,
            state,
            paging,
        } => render::page(
            &client
                .by_category(&name, state.as_deref(), paging.into())
                .await?,
        ),
        Commands::State { name, paging } => {
            render::page(&client.by_state(&name, paging.into()).await?)
        }
        Commands::Categories => render::names(&client.categories().await?),
        Commands::States => render::names(&client.states().await?),
        Commands::Add { fields } => {
            let created = client.create(&fields.into()).await?;
            format!("News added successfully with ID: {}", created.id)
        }
        Commands::Update { id, fields } => {
            let updated = client.update(&id, &fields.into()).await?;
            format!("News {} updated: {}", updated.id, updated.title)
        }
        Commands::Delete { id } => client.delete(&id).await?,
    };

    Ok(output)
}
