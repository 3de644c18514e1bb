use actix_web::{App, HttpServer, web};
use anyhow::{Context, Result};
use tracing::info;

use crate::api;
use crate::cli::ServeArgs;
use crate::config::AppConfig;
use crate::pipeline::Analyzer;

pub fn run(args: ServeArgs) -> Result<()> {
    let ServeArgs {
        host,
        port,
        upload_dir,
        static_dir,
    } = args;

    let config = AppConfig {
        upload_dir,
        static_dir,
    };
    let analyzer = web::Data::new(Analyzer::new(config)?);

    info!(host = %host, port = port, "starting web server");

    actix_web::rt::System::new().block_on(async move {
        HttpServer::new(move || {
            App::new()
                .app_data(analyzer.clone())
                .service(api::index)
                .service(api::analyze)
                .service(api::wordcloud_image)
        })
        .bind((host.as_str(), port))
        .with_context(|| format!("failed to bind {host}:{port}"))?
        .run()
        .await
        .context("server terminated abnormally")
    })
}
