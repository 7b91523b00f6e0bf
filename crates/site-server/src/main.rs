use clap::Parser;
use site_server::{ServerConfig, SiteServer};

fn main() -> anyhow::Result<()> {
    let config = ServerConfig::parse();
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(&config.log_level))
        .init();

    if !config.static_dir.is_dir() {
        log::warn!("static dir {} does not exist", config.static_dir.display());
    }
    SiteServer::new(config).run()?;
    Ok(())
}
