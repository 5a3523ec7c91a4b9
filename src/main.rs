use std::net::SocketAddr;

use dotenvy::dotenv;
use migration::{Migrator, MigratorTrait};
use platillos::{routes, seeders, AppState, Config};
use sea_orm::Database;
use tracing_subscriber::EnvFilter;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    dotenv().ok();

    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| EnvFilter::new("platillos=info,tower_http=info")),
        )
        .init();

    let cfg = Config::init()?;
    println!("🚀 Starting Platillos Backend...");

    // 1. Database Connection
    println!("📡 Connecting to Database...");
    let db = Database::connect(&cfg.database_url).await?;
    println!("✅ Database Connected!");

    // 2. Migrations
    if cfg.run_migrations {
        Migrator::up(&db, None).await?;
        tracing::info!("migrations applied");
    }

    // 3. Database Seeding
    if cfg.run_seeders {
        println!("🌱 Running Seeders...");
        if let Err(e) = seeders::run_seeders(&db).await {
            tracing::error!("❌ Seeding failed: {}", e);
        } else {
            println!("✅ Seeding Successful!");
        }
    }

    // 4. Router
    let app = routes::create_routes(AppState { db });

    // 5. Start Server
    let addr: SocketAddr = format!("{}:{}", cfg.server_host, cfg.server_port).parse()?;
    println!("🎯 Server ready! Listening on http://{}", addr);

    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
