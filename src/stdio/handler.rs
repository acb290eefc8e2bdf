use crate::{
    game::GameEngine,
    stdio::messages::{ClientMessage, ServerMessage},
};
use anyhow::Result;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};

/// Drive the engine from line-delimited JSON until the input closes.
///
/// The current snapshot is written once on start, then once per line read.
pub async fn run<R, W>(engine: &mut GameEngine, reader: R, mut writer: W) -> Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    send(&mut writer, &state_message(engine)).await?;

    let mut lines = reader.lines();
    while let Some(line) = lines.next_line().await? {
        let line = line.trim();
        if line.is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<ClientMessage>(line) {
            Ok(msg) => handle_client_message(engine, msg),
            Err(e) => {
                tracing::error!("Failed to parse message: {}", e);
                ServerMessage::Error {
                    message: format!("Invalid message format: {}", e),
                }
            }
        };
        send(&mut writer, &reply).await?;
    }

    tracing::info!("Input closed, stopping");
    Ok(())
}

fn handle_client_message(engine: &mut GameEngine, msg: ClientMessage) -> ServerMessage {
    tracing::debug!("Handling {:?}", msg);
    if let Some(command) = msg.into_command() {
        engine.apply(command);
    }
    state_message(engine)
}

fn state_message(engine: &GameEngine) -> ServerMessage {
    ServerMessage::State {
        state: engine.state().clone(),
        pending_guess: engine.pending_guess().to_string(),
    }
}

async fn send<W: AsyncWrite + Unpin>(writer: &mut W, msg: &ServerMessage) -> Result<()> {
    let mut json = serde_json::to_string(msg)?;
    json.push('\n');
    writer.write_all(json.as_bytes()).await?;
    writer.flush().await?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{dictionary::WordList, models::GameSettings};

    fn run_script(script: &str) -> Vec<serde_json::Value> {
        let words = WordList::from_words(["cat", "dog"]).unwrap();
        let settings = GameSettings::new(2, 20).unwrap();
        let mut engine = GameEngine::with_seed(words, settings, 17).unwrap();

        let mut output = Vec::new();
        tokio_test::block_on(run(&mut engine, script.as_bytes(), &mut output)).unwrap();

        String::from_utf8(output)
            .unwrap()
            .lines()
            .map(|line| serde_json::from_str(line).unwrap())
            .collect()
    }

    #[test]
    fn test_initial_state_written_on_start() {
        let replies = run_script("");
        assert_eq!(replies.len(), 1);
        assert_eq!(replies[0]["type"], "state");
        assert_eq!(replies[0]["current_word_count"], 1);
    }

    #[test]
    fn test_one_reply_per_line() {
        let script = concat!(
            r#"{"type":"update_guess","text":"bird"}"#,
            "\n",
            r#"{"type":"submit_guess"}"#,
            "\n\n",
            r#"{"type":"skip_round"}"#,
            "\n",
            r#"{"type":"skip_round"}"#,
            "\n",
            r#"{"type":"get_state"}"#,
            "\n",
        );
        let replies = run_script(script);
        assert_eq!(replies.len(), 6);

        assert_eq!(replies[1]["pending_guess"], "bird");
        assert_eq!(replies[2]["is_guessed_word_wrong"], true);
        assert_eq!(replies[2]["pending_guess"], "");
        assert_eq!(replies[3]["current_word_count"], 2);
        assert_eq!(replies[4]["is_game_over"], true);
        assert_eq!(replies[5], replies[4]);
    }

    #[test]
    fn test_invalid_line_reports_error_and_continues() {
        let script = "not json\n{\"type\":\"reset\"}\n";
        let replies = run_script(script);
        assert_eq!(replies.len(), 3);
        assert_eq!(replies[1]["type"], "error");
        assert_eq!(replies[2]["type"], "state");
    }
}
