#[cfg(feature = "server")]
use std::path::Path;
#[cfg(feature = "server")]
use std::sync::Arc;

#[cfg(feature = "server")]
use actix_cors::Cors;
#[cfg(feature = "server")]
use actix_web::{App, HttpServer, middleware, web};
#[cfg(feature = "server")]
use tera::Tera;

#[cfg(feature = "server")]
use crate::db::{establish_connection_pool, run_migrations};
#[cfg(feature = "server")]
use crate::models::config::{ServerConfig, StorageBackend};
#[cfg(feature = "server")]
use crate::repository::{DieselRepository, FileStorage, LocalRepository, RecordStore};

#[cfg(feature = "data")]
pub mod component;
#[cfg(feature = "data")]
pub mod db;
#[cfg(feature = "data")]
pub mod domain;
#[cfg(feature = "data")]
pub mod dto;
#[cfg(feature = "data")]
pub mod export;
#[cfg(feature = "data")]
pub mod forms;
#[cfg(feature = "data")]
pub mod models;
#[cfg(feature = "data")]
pub mod repository;
#[cfg(feature = "server")]
pub mod routes;
#[cfg(feature = "data")]
pub mod schema;
#[cfg(feature = "data")]
pub mod services;

/// Builds the record store selected by the configuration.
#[cfg(feature = "server")]
pub fn build_store(server_config: &ServerConfig) -> std::io::Result<Arc<dyn RecordStore>> {
    match server_config.storage {
        StorageBackend::Database => {
            let pool = establish_connection_pool(&server_config.database_url).map_err(|e| {
                std::io::Error::other(format!("Failed to establish database connection: {e}"))
            })?;
            run_migrations(&pool)
                .map_err(|e| std::io::Error::other(format!("Failed to migrate database: {e}")))?;
            log::info!("Persisting leads in {}", server_config.database_url);
            Ok(Arc::new(DieselRepository::new(pool)))
        }
        StorageBackend::Local => {
            let dir = Path::new(&server_config.local_storage_dir);
            let medium = FileStorage::new(dir).map_err(|e| {
                std::io::Error::other(format!("Failed to open local storage: {e}"))
            })?;
            let repo = LocalRepository::new(Arc::new(medium));
            repo.initialize().map_err(|e| {
                std::io::Error::other(format!("Failed to initialize local storage: {e}"))
            })?;
            log::info!("Persisting leads under {}", dir.display());
            Ok(Arc::new(repo))
        }
    }
}

/// Builds and runs the Actix-Web HTTP server using the provided configuration.
#[cfg(feature = "server")]
pub async fn run(server_config: ServerConfig) -> std::io::Result<()> {
    let store = web::Data::from(build_store(&server_config)?);

    let tera = Tera::new(&server_config.templates_dir)
        .map_err(|e| std::io::Error::other(format!("Template parsing error(s): {e}")))?;
    let tera = web::Data::new(tera);

    let bind_address = (server_config.address.clone(), server_config.port);
    log::info!("Listening on {}:{}", bind_address.0, bind_address.1);

    HttpServer::new(move || {
        App::new()
            .wrap(Cors::permissive())
            .wrap(middleware::Compress::default())
            .wrap(middleware::Logger::default())
            .app_data(store.clone())
            .app_data(tera.clone())
            .configure(routes::configure)
    })
    .bind(bind_address)?
    .run()
    .await
}
