use clap::Parser;
use game::{
    config::GameConfig, entrypoint::serve, service::game::Game,
    utility::create_shutdown_channel,
};
use tokio::io::BufReader;

fn main() -> anyhow::Result<()> {
    let config = GameConfig::parse();
    // Logs go to stderr, stdout is for the game itself
    tracing_subscriber::fmt()
        .with_line_number(true)
        .with_file(true)
        .with_max_level(config.log_level())
        .with_writer(std::io::stderr)
        .init();

    let runtime = tokio::runtime::Runtime::new()?;
    let result = runtime.block_on(run(config));
    // Stdin reads happen on a blocking thread that may still be parked on a read
    runtime.shutdown_background();
    result
}

async fn run(config: GameConfig) -> anyhow::Result<()> {
    let mut shutdown_receiver = create_shutdown_channel().await;
    let mut game = Game::new(config.selector());
    serve(
        &config,
        &mut game,
        BufReader::new(tokio::io::stdin()),
        tokio::io::stdout(),
        &mut shutdown_receiver,
    )
    .await
}
