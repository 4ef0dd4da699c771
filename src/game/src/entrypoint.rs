use tokio::{
    io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt},
    sync::broadcast,
};
use tracing::{debug, info, warn};

use crate::{
    config::{GameConfig, OutputFormat},
    service::{
        display::{parse_move, render_invalid, render_round, render_tally, TITLE},
        game::Game,
    },
};

/// Plays one round per input line until the input ends, the round limit is hit, or a
/// shutdown signal arrives. The session tally is written last.
pub async fn serve<R, W>(
    config: &GameConfig,
    game: &mut Game,
    input: R,
    mut output: W,
    shutdown_receiver: &mut broadcast::Receiver<()>,
) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = input.lines();
    if config.format == OutputFormat::Text {
        output.write_all(format!("{}\n\n", TITLE).as_bytes()).await?;
        output.flush().await?;
    }
    info!("Game started");

    loop {
        if let Some(limit) = config.rounds {
            if game.tally().total() as usize >= limit {
                info!("Played {} rounds, stopping", limit);
                break;
            }
        }
        tokio::select! {
            line = lines.next_line() => {
                let Some(line) = line? else {
                    debug!("Input closed");
                    break;
                };
                if line.trim().is_empty() {
                    continue;
                }
                let mut text = match parse_move(&line) {
                    Ok(player) => render_round(&game.play(player), config.format),
                    Err(e) => {
                        warn!("Ignoring input: {}", e);
                        render_invalid(&e, config.format)
                    }
                };
                if config.format == OutputFormat::Text {
                    text.push('\n');
                }
                output.write_all(text.as_bytes()).await?;
                output.flush().await?;
            }
            _ = shutdown_receiver.recv() => {
                info!("Shutdown requested");
                break;
            }
        }
    }

    output
        .write_all(render_tally(&game.tally(), config.format).as_bytes())
        .await?;
    output.flush().await?;
    info!("Game over: {:?}", game.tally());
    Ok(())
}
