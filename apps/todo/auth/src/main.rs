use clap::Parser;
use core_config::tracing::install_color_eyre;
use todo_auth::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::parse();
    todo_auth::run(config).await
}
