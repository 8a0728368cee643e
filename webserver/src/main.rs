//! WebServer entry point

use clap::Parser;
use std::sync::Arc;

use shared::{ComponentId, Directory, component_info, logging};

use webserver::{
    Args, KeywordSearchIndex, RealSessionRegistry, RealStaticFileServer, ServerConfig, WebServer, WebServerResult,
    core::HomepageProps,
};

#[tokio::main]
async fn main() -> WebServerResult<()> {
    // A missing .env file is fine
    let _ = dotenv::dotenv();

    let args = Args::parse();
    let config = ServerConfig::from_args(&args)?;
    logging::init_tracing_with_level(Some(&config.log_level));

    logging::log_startup(
        &ComponentId::WebServer,
        &format!("WebServer on {} (static: {})", config.bind_address, config.static_dir.display()),
    );

    let directory = Directory::load(&config.directory_path)?;
    component_info!(
        ComponentId::Directory,
        "📚 Loaded {} enterprises from {}",
        directory.len(),
        config.directory_path.display()
    );

    let index = KeywordSearchIndex::build(&directory);
    let props = HomepageProps {
        directory: Arc::new(directory),
        index: Arc::new(index),
        config: config.site.clone(),
        transition: config.transition,
    };

    let static_server = RealStaticFileServer::new(&config.static_dir);
    let session_registry = RealSessionRegistry::new();

    let webserver = WebServer::new(props, static_server, session_registry);
    webserver.run(config.bind_address).await?;

    logging::log_success(&ComponentId::WebServer, "WebServer stopped gracefully");
    Ok(())
}
