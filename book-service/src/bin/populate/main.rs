use std::sync::Arc;

use auth::Authenticator;
use book_service::config::Config;
use book_service::domain::book::models::BookTitle;
use book_service::domain::book::models::CreateBookCommand;
use book_service::domain::book::ports::BookServicePort;
use book_service::domain::book::service::BookService;
use book_service::domain::user::models::AccountType;
use book_service::domain::user::models::EmailAddress;
use book_service::domain::user::models::RegisterUserCommand;
use book_service::domain::user::ports::UserServicePort;
use book_service::domain::user::service::UserService;
use book_service::outbound::repositories::PostgresBookRepository;
use book_service::outbound::repositories::PostgresUserRepository;
use book_service::user::errors::UserError;
use clap::Parser;
use sqlx::postgres::PgPoolOptions;
use tracing_subscriber::layer::SubscriberExt;
use tracing_subscriber::util::SubscriberInitExt;

/// Populate the database with sample data.
///
/// Example: cargo run --bin populate -- 20
#[derive(Parser)]
#[command(name = "populate", about = "Populate the database with sample users and books")]
struct Args {
    /// Number of users to create (alternating author/reader accounts)
    num_users: usize,

    /// Books created for each author account
    #[arg(long, default_value_t = 3)]
    books_per_author: usize,
}

const SAMPLE_PASSWORD: &str = "password123";

const FIRST_NAMES: &[&str] = &[
    "Ada", "Brian", "Carol", "Dennis", "Edsger", "Frances", "Grace", "Hal",
];
const LAST_NAMES: &[&str] = &[
    "Lovelace", "Kernighan", "Shaw", "Ritchie", "Dijkstra", "Allen", "Hopper", "Abelson",
];

#[tokio::main]
async fn main() -> Result<(), anyhow::Error> {
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "populate=info,book_service=info".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    let args = Args::parse();
    let config = Config::load()?;

    let pg_pool = PgPoolOptions::new()
        .max_connections(5)
        .connect(&config.database.url)
        .await?;

    sqlx::migrate!("./migrations").run(&pg_pool).await?;

    let authenticator = Arc::new(Authenticator::new(config.jwt.token_config()));
    let users = UserService::new(
        Arc::new(PostgresUserRepository::new(pg_pool.clone())),
        authenticator,
    );
    let books = BookService::new(Arc::new(PostgresBookRepository::new(pg_pool)));

    for i in 0..args.num_users {
        let account_type = if i % 2 == 0 {
            AccountType::Author
        } else {
            AccountType::Reader
        };
        let email = format!("user{}@example.com", i + 1);
        let first_name = FIRST_NAMES[i % FIRST_NAMES.len()].to_string();
        let last_name = LAST_NAMES[(i / FIRST_NAMES.len()) % LAST_NAMES.len()].to_string();

        let command = RegisterUserCommand::new(
            EmailAddress::new(email.clone())?,
            first_name,
            last_name,
            SAMPLE_PASSWORD.to_string(),
            account_type,
        );

        let user = match users.register(command).await {
            Ok(user) => user,
            Err(UserError::EmailAlreadyExists(_)) => {
                tracing::warn!(email = %email, "Sample user already exists, skipping");
                continue;
            }
            Err(e) => return Err(e.into()),
        };

        tracing::info!(
            email = %email,
            password = SAMPLE_PASSWORD,
            account_type = %user.account_type,
            "Sample user created"
        );

        if user.account_type == AccountType::Author {
            for n in 0..args.books_per_author {
                let title = BookTitle::new(format!("{}'s book {}", user.first_name, n + 1))?;
                let content = format!(
                    "Sample content written by {} {}.",
                    user.first_name, user.last_name
                );
                books
                    .create_book(&user, CreateBookCommand::new(title, content))
                    .await?;
            }
            tracing::info!(
                email = %email,
                books = args.books_per_author,
                "Sample books created"
            );
        }
    }

    Ok(())
}
