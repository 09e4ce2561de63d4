use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use std::sync::{Arc, LazyLock};

use crate::{
    configs::{connect_database, run_migrations, RedisCache},
    modules::{
        auth::service::TokenResolver,
        friend::{repository_pg::FriendRepositoryPg, service::FriendService},
    },
};

mod api;
mod configs;
mod constants;
mod middlewares;
mod modules;
#[cfg(test)]
mod test;
mod utils;

pub static ENV: LazyLock<constants::Env> = LazyLock::new(|| {
    dotenvy::dotenv().ok();
    env_logger::init();
    log::info!("Environment variables loaded from .env file");
    constants::Env::default()
});

#[actix_web::get("/")]
async fn health_check(db_pool: web::Data<sqlx::PgPool>) -> Result<&'static str, api::error::Error> {
    sqlx::query("SELECT 1")
        .execute(db_pool.get_ref())
        .await
        .map_err(api::error::SystemError::from)?;
    Ok("Server is running")
}

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    let env = &*ENV;

    let (db_pool, redis_cache) = tokio::try_join!(
        connect_database(&env.database_url, env.database_max_connections),
        RedisCache::new(&env.redis_url),
    )
    .map_err(|e| std::io::Error::other(format!("Store connection error: {e}")))?;

    redis_cache
        .ping()
        .await
        .map_err(|e| std::io::Error::other(format!("Redis connection error: {e}")))?;
    run_migrations(&db_pool).await.map_err(|e| std::io::Error::other(e.to_string()))?;

    let friend_repo = FriendRepositoryPg::new(db_pool.clone());

    let token_resolver = TokenResolver::with_dependencies(Arc::new(redis_cache));
    let friend_service = FriendService::with_dependencies(Arc::new(friend_repo));

    log::info!("Starting server at http://{}:{}", env.ip, env.port);
    HttpServer::new(move || {
        let cors = Cors::default()
            .allowed_origin(&ENV.frontend_url)
            .allow_any_method()
            .allow_any_header()
            .supports_credentials();

        App::new()
            .wrap(Logger::default())
            .wrap(cors)
            .app_data(web::Data::new(token_resolver.clone()))
            .app_data(web::Data::new(friend_service.clone()))
            .app_data(web::Data::new(db_pool.clone()))
            .service(health_check)
            .configure(modules::friend::route::configure)
    })
    .bind((env.ip.as_str(), env.port))?
    .workers(env.workers)
    .run()
    .await
}
