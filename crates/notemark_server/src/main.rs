use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use notemark_core::{MemoryNoteStore, NoteStore, SqliteNoteStore};
use notemark_server::config::{Config, StoreKind};
use notemark_server::{controllers, AppState};
use std::io;
use std::path::Path;

#[actix_web::main]
async fn main() -> io::Result<()> {
    dotenv().ok();
    env_logger::init_from_env(env_logger::Env::default().default_filter_or("info"));

    let config = Config::from_env();
    let store = build_store(&config)?;
    let state = web::Data::new(AppState::new(store));

    log::info!(
        "Starting notemark server on port {} (store={})",
        config.port,
        config.store.as_str()
    );

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header()
            .max_age(3600);

        App::new()
            .app_data(state.clone())
            .wrap(Logger::default())
            .wrap(cors)
            .configure(controllers::health::config_routes)
            .configure(controllers::notes::config_routes)
    })
    .bind(("0.0.0.0", config.port))?
    .run()
    .await
}

fn build_store(config: &Config) -> io::Result<Box<dyn NoteStore + Send>> {
    match config.store {
        StoreKind::Memory => Ok(Box::new(MemoryNoteStore::new())),
        StoreKind::Sqlite => {
            if let Some(dir) = Path::new(&config.database_path)
                .parent()
                .filter(|dir| !dir.as_os_str().is_empty())
            {
                std::fs::create_dir_all(dir)?;
            }

            log::info!("Opening note database at {}", config.database_path);
            let store = SqliteNoteStore::open(&config.database_path).map_err(|err| {
                io::Error::other(format!("failed to open note database: {err}"))
            })?;
            Ok(Box::new(store))
        }
    }
}
