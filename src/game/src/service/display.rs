use common::model::game::{Move, Outcome, ParseMoveError, Round};
use serde_json::json;

use crate::{config::OutputFormat, model::tally::Tally};

pub const TITLE: &str = "Pedra, Papel ou Tesoura";

pub fn label(m: Move) -> &'static str {
    match m {
        Move::Rock => "Pedra",
        Move::Paper => "Papel",
        Move::Scissors => "Tesoura",
    }
}

pub fn verdict(outcome: Outcome) -> &'static str {
    match outcome {
        Outcome::Win => "Você venceu!",
        Outcome::Lose => "Você perdeu!",
        Outcome::Tie => "Empate!",
    }
}

/// Accepts English names, the on-screen labels, or r/p/s.
pub fn parse_move(input: &str) -> Result<Move, ParseMoveError> {
    let trimmed = input.trim();
    if let Ok(m) = trimmed.parse::<Move>() {
        return Ok(m);
    }
    let lowered = trimmed.to_lowercase();
    let shortcut = match lowered.as_str() {
        "r" => Some(Move::Rock),
        "p" => Some(Move::Paper),
        "s" => Some(Move::Scissors),
        _ => None,
    };
    shortcut
        .or_else(|| Move::iter().find(|m| label(*m).to_lowercase() == lowered))
        .ok_or_else(|| ParseMoveError(trimmed.to_owned()))
}

pub fn render_round(round: &Round, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!(
            "Você escolheu: {}\nComputador escolheu: {}\n{}\n",
            label(round.player),
            label(round.opponent),
            verdict(round.outcome)
        ),
        OutputFormat::Json => json!(round).to_string() + "\n",
    }
}

pub fn render_tally(tally: &Tally, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!(
            "Vitórias: {} | Derrotas: {} | Empates: {}\n",
            tally.wins, tally.losses, tally.ties
        ),
        OutputFormat::Json => {
            let mut value = json!(tally);
            value["total"] = json!(tally.total());
            value.to_string() + "\n"
        }
    }
}

pub fn render_invalid(error: &ParseMoveError, format: OutputFormat) -> String {
    match format {
        OutputFormat::Text => format!("Escolha inválida: {}\n", error.0),
        OutputFormat::Json => json!({ "error": error.to_string() }).to_string() + "\n",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_every_spelling() {
        for (input, expected) in [
            ("rock", Move::Rock),
            ("Pedra", Move::Rock),
            ("r", Move::Rock),
            ("PAPEL", Move::Paper),
            (" p ", Move::Paper),
            ("tesoura\n", Move::Scissors),
            ("S", Move::Scissors),
        ] {
            assert_eq!(parse_move(input), Ok(expected), "{:?}", input);
        }
        assert_eq!(
            parse_move(" spock "),
            Err(ParseMoveError("spock".to_owned()))
        );
    }

    #[test]
    fn text_round_uses_labels() {
        let round = Round::new(Move::Paper, Move::Rock);
        assert_eq!(
            render_round(&round, OutputFormat::Text),
            "Você escolheu: Papel\nComputador escolheu: Pedra\nVocê venceu!\n"
        );
    }

    #[test]
    fn json_round_is_one_line() {
        let round = Round::new(Move::Rock, Move::Paper);
        let rendered = render_round(&round, OutputFormat::Json);
        assert_eq!(rendered.lines().count(), 1);
        let parsed: Round = serde_json::from_str(&rendered).unwrap();
        assert_eq!(parsed, round);
        assert_eq!(parsed.outcome, Outcome::Lose);
    }

    #[test]
    fn json_tally_includes_total() {
        let tally = Tally {
            wins: 1,
            losses: 2,
            ties: 0,
        };
        let value: serde_json::Value =
            serde_json::from_str(&render_tally(&tally, OutputFormat::Json)).unwrap();
        assert_eq!(value["total"], 3);
        assert_eq!(value["losses"], 2);
    }
}
