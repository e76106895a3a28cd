use clap::{Args as ClapArgs, Parser, Subcommand};
use serde::Serialize;
use std::path::Path;

use lightbnb::backend::database::build_property_query_for;
use lightbnb::backend::database::property_query::DEFAULT_LIMIT;
use lightbnb::backend::{
    Backend, DatabaseType, LightBnbBackend, PropertyBackend, ReservationBackend, UserBackend,
};
use lightbnb::config::AppConfig;
use lightbnb::error::{AppError, AppResult};
use lightbnb::logging::init_logging;
use lightbnb::models::{FilterCriteria, NewProperty, NewUser};
use lightbnb::startup::initialize_backend;

#[derive(Parser, Debug)]
#[command(name = "lightbnb")]
#[command(about = "LightBnB listing database tool")]
struct Args {
    /// Configuration file path (default: config.yaml)
    #[arg(short, long, default_value = "config.yaml")]
    config: String,

    /// Database URL (overrides config file)
    #[arg(long)]
    database_url: Option<String>,

    /// Enable debug logging, including generated SQL
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Create the LightBnB tables if they are missing
    InitSchema,
    /// Look up a user by email
    UserByEmail { email: String },
    /// Look up a user by id
    UserById { id: i32 },
    /// Register a new user
    AddUser {
        #[arg(long)]
        name: String,
        #[arg(long)]
        email: String,
        #[arg(long)]
        password: String,
    },
    /// List a guest's reservations
    Reservations {
        guest_id: i32,
        #[arg(long)]
        limit: Option<i64>,
    },
    /// Search properties
    Properties(SearchArgs),
    /// Insert a property described as JSON
    AddProperty {
        /// Property fields as a JSON object
        #[arg(long)]
        json: String,
    },
    /// Print the search statement and parameters without running it
    ShowQuery {
        #[command(flatten)]
        search: SearchArgs,
        /// Placeholder style: postgresql or sqlite
        #[arg(long, default_value = "postgresql")]
        dialect: String,
    },
}

#[derive(ClapArgs, Debug)]
struct SearchArgs {
    #[arg(long)]
    city: Option<String>,
    #[arg(long)]
    owner_id: Option<i64>,
    /// Dollars per night
    #[arg(long)]
    minimum_price_per_night: Option<f64>,
    /// Dollars per night
    #[arg(long)]
    maximum_price_per_night: Option<f64>,
    #[arg(long)]
    minimum_rating: Option<f64>,
    #[arg(long)]
    limit: Option<i64>,
}

impl SearchArgs {
    fn criteria(&self) -> FilterCriteria {
        FilterCriteria {
            city: self.city.clone(),
            owner_id: self.owner_id,
            minimum_price_per_night: self.minimum_price_per_night,
            maximum_price_per_night: self.maximum_price_per_night,
            minimum_rating: self.minimum_rating,
        }
    }
}

fn load_config(args: &Args) -> Result<AppConfig, Box<dyn std::error::Error>> {
    let mut app_config = if args.config == "config.yaml" && !Path::new("config.yaml").exists() {
        if std::env::var("DB_HOST").is_ok() {
            AppConfig::from_env_credentials()?
        } else {
            tracing::info!("No config.yaml found, using in-memory SQLite");
            AppConfig::default_config()
        }
    } else {
        AppConfig::load_from_file(&args.config)
            .map_err(|e| format!("Failed to load configuration: {}", e))?
    };

    if let Some(url) = &args.database_url {
        app_config.database.db_type = if url.starts_with("postgres") {
            "postgresql".to_string()
        } else {
            "sqlite".to_string()
        };
        app_config.database.url = url.clone();
    }

    Ok(app_config)
}

fn show_query(search: &SearchArgs, dialect: &str) -> AppResult<()> {
    let database_type = DatabaseType::from_config_name(dialect)
        .ok_or_else(|| AppError::BadRequest(format!("Unknown dialect: {}", dialect)))?;
    let query = build_property_query_for(
        database_type,
        &search.criteria(),
        search.limit.unwrap_or(DEFAULT_LIMIT),
    );
    print_json(&query)
}

fn print_json<T: Serialize>(value: &T) -> AppResult<()> {
    println!("{}", serde_json::to_string_pretty(value)?);
    Ok(())
}

async fn run(command: Command, backend: &dyn LightBnbBackend) -> AppResult<()> {
    match command {
        Command::InitSchema => {
            backend.init_schema().await?;
            println!("Schema ready");
            Ok(())
        }
        Command::UserByEmail { email } => print_json(&backend.get_user_by_email(&email).await?),
        Command::UserById { id } => print_json(&backend.get_user_by_id(id).await?),
        Command::AddUser {
            name,
            email,
            password,
        } => {
            let user = NewUser {
                name,
                email,
                password,
            };
            print_json(&backend.add_user(&user).await?)
        }
        Command::Reservations { guest_id, limit } => {
            print_json(&backend.get_reservations_for_guest(guest_id, limit).await?)
        }
        Command::Properties(search) => {
            print_json(&backend.get_all_properties(&search.criteria(), search.limit).await?)
        }
        Command::AddProperty { json } => {
            let property: NewProperty = serde_json::from_str(&json)?;
            print_json(&backend.add_property(&property).await?)
        }
        Command::ShowQuery { search, dialect } => show_query(&search, &dialect),
    }
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();
    init_logging(args.verbose);

    // Printing a statement needs no connection
    if let Command::ShowQuery { search, dialect } = &args.command {
        show_query(search, dialect)?;
        return Ok(());
    }

    let app_config = load_config(&args)?;
    let backend = initialize_backend(&app_config).await?;

    let result = run(args.command, backend.as_ref()).await;
    backend.cleanup().await?;
    result?;

    Ok(())
}
