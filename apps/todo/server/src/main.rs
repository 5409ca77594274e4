use clap::Parser;
use core_config::tracing::install_color_eyre;
use todo_server::Config;

#[tokio::main]
async fn main() -> eyre::Result<()> {
    install_color_eyre();

    let config = Config::parse();
    todo_server::run(config).await
}
