use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use covid_portal::api::{configure_routes, AppState};
use covid_portal::{banner, config, database};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
        eprintln!("   Make sure JWT_SECRET is set in your environment");
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = match config::AppConfig::from_env() {
        Ok(app_config) => app_config,
        Err(e) => {
            log::error!("{}", e);
            std::process::exit(1);
        }
    };

    let pool = match database::init_db(&app_config).await {
        Ok(pool) => pool,
        Err(e) => {
            log::error!("DB Error: {}", e);
            std::process::exit(1);
        }
    };

    let state = AppState::new(pool, &app_config);
    let bind_addr = (app_config.host.clone(), app_config.port);

    println!("🚀 Server Running at http://{}:{}/", bind_addr.0, bind_addr.1);

    HttpServer::new(move || {
        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(Cors::permissive())
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(configure_routes)
    })
    .bind(bind_addr)?
    .run()
    .await
}
