// Copyright (C) 2025 Vince Vasta
// SPDX-License-Identifier: Apache-2.0

//! Hands reports printed by the CLI.
use anyhow::Result;
use serde::Serialize;
use std::io;

use fivecard_eval::{Card, Category, Hand, HandValue, Rank, Suit, discards};

/// Human readable rank names.
static RANK_NAMES: [&str; Rank::COUNT] = [
    "Ace", "2", "3", "4", "5", "6", "7", "8", "9", "10", "Jack", "Queen", "King",
];

/// Human readable suit names.
static SUIT_NAMES: [&str; Suit::COUNT] = ["Hearts", "Diamonds", "Clubs", "Spades"];

/// Returns a rank name like `Ace` or `10`.
pub fn rank_name(rank: Rank) -> &'static str {
    RANK_NAMES[rank.number() as usize - 1]
}

/// Returns a card name like `Ace of Hearts`.
pub fn card_name(card: Card) -> String {
    format!(
        "{} of {}",
        rank_name(card.rank()),
        SUIT_NAMES[card.suit().number() as usize]
    )
}

/// The evaluation of a player hand.
#[derive(Debug, Serialize)]
pub struct HandReport {
    /// The player name.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub player: Option<String>,
    /// The player hand.
    pub hand: Hand,
    /// The hand category.
    pub category: Category,
    /// The hand score.
    pub score: f64,
    /// The score relative to a royal flush.
    pub strength: f64,
    /// The highest card rank.
    pub highest_card: Rank,
    /// Cards worth replacing.
    pub discards: Vec<Card>,
    /// Set when comparing hands.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub winner: Option<bool>,
}

impl HandReport {
    /// Evaluates a hand.
    pub fn new(player: Option<String>, hand: Hand) -> Self {
        let value = HandValue::eval(&hand);
        Self {
            player,
            hand,
            category: value.category(),
            score: value.score(),
            strength: value.strength(),
            highest_card: value.highest_card(),
            discards: discards(&hand),
            winner: None,
        }
    }

    /// Writes the report as text.
    pub fn write_text(&self, w: &mut impl io::Write) -> Result<()> {
        if let Some(player) = &self.player {
            writeln!(w, "{player}:")?;
        }

        for (idx, card) in self.hand.iter().enumerate() {
            writeln!(w, "  {}) {}", idx + 1, card_name(card))?;
        }

        writeln!(w, "  Category:     {}", self.category)?;
        writeln!(w, "  Score:        {:.9}", self.score)?;
        writeln!(w, "  Strength:     {:.3}", self.strength)?;
        writeln!(w, "  Highest card: {}", rank_name(self.highest_card))?;

        let discards = self
            .discards
            .iter()
            .map(|c| c.to_string())
            .collect::<Vec<_>>();
        if discards.is_empty() {
            writeln!(w, "  Discards:     none")?;
        } else {
            writeln!(w, "  Discards:     {}", discards.join(" "))?;
        }

        match (self.winner, &self.player) {
            (Some(true), Some(player)) => writeln!(w, "{player}'s hand is the best!")?,
            (Some(false), Some(player)) => writeln!(w, "{player}'s hand loses...")?,
            _ => {}
        }

        Ok(())
    }
}

/// Writes reports as text or as a JSON array.
pub fn write_reports(w: &mut impl io::Write, reports: &[HandReport], json: bool) -> Result<()> {
    if json {
        serde_json::to_writer_pretty(&mut *w, reports)?;
        writeln!(w)?;
    } else {
        for (idx, report) in reports.iter().enumerate() {
            if idx > 0 {
                writeln!(w)?;
            }
            report.write_text(w)?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn report(player: Option<&str>, cards: &str) -> HandReport {
        HandReport::new(player.map(str::to_string), cards.parse().unwrap())
    }

    #[test]
    fn names() {
        let card = "AH".parse::<Card>().unwrap();
        assert_eq!(card_name(card), "Ace of Hearts");

        let card = "TC".parse::<Card>().unwrap();
        assert_eq!(card_name(card), "10 of Clubs");

        let card = "KD".parse::<Card>().unwrap();
        assert_eq!(card_name(card), "King of Diamonds");

        let card = "JS".parse::<Card>().unwrap();
        assert_eq!(card_name(card), "Jack of Spades");
    }

    #[test]
    fn text_report() {
        let mut r = report(Some("Nathan"), "AH 9H 3D 5C 7S");
        r.winner = Some(false);

        let mut out = Vec::new();
        r.write_text(&mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.starts_with("Nathan:\n  1) Ace of Hearts\n  2) 9 of Hearts\n"));
        assert!(text.contains("  Category:     High Card\n"));
        assert!(text.contains("  Highest card: Ace\n"));
        assert!(text.contains("  Discards:     9H 3D 5C 7S\n"));
        assert!(text.ends_with("Nathan's hand loses...\n"));
    }

    #[test]
    fn json_report() {
        let reports = [report(None, "TS JS QS KS AS")];

        let mut out = Vec::new();
        write_reports(&mut out, &reports, true).unwrap();
        let json = serde_json::from_slice::<serde_json::Value>(&out).unwrap();

        let report = &json[0];
        assert_eq!(report["category"], "StraightFlush");
        assert_eq!(report["strength"], 1.0);
        assert_eq!(report["highest_card"], "Ace");
        assert_eq!(report["discards"].as_array().unwrap().len(), 0);
        assert_eq!(report["hand"].as_array().unwrap().len(), 5);
        assert!(report.get("player").is_none());
        assert!(report.get("winner").is_none());
    }
}
