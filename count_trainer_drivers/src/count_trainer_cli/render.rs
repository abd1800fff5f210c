use count_trainer::{Rank, RoundEvent, RoundOutcome};

/// A card as a small box with its rank in two corners.
pub fn ascii_card(rank: Rank) -> Vec<String> {
    let label = rank.to_string();
    let width = label.len().max(2);
    let padding = " ".repeat(width + 2 - label.len());
    vec![
        format!(" {}", "_".repeat(width + 2)),
        format!("|{}{}|", label, padding),
        format!("|{}|", " ".repeat(width + 2)),
        format!("|{}{}|", padding, label),
        "‾".repeat(width + 4),
    ]
}

/// Cards side by side under a title.
pub fn render_hand(title: &str, cards: &[Rank]) -> String {
    let mut rendered = format!("{}:\n", title);
    let boxes: Vec<Vec<String>> = cards.iter().map(|card| ascii_card(*card)).collect();
    if let Some(first) = boxes.first() {
        for line_index in 0..first.len() {
            let line: Vec<&str> = boxes.iter().map(|b| b[line_index].as_str()).collect();
            rendered.push_str(&line.join("   "));
            rendered.push('\n');
        }
    }
    rendered
}

pub fn outcome_message(outcome: RoundOutcome) -> &'static str {
    match outcome {
        RoundOutcome::PlayerBlackjackStand => "Blackjack, you win!",
        RoundOutcome::PlayerBust => "You busted, dealer wins.",
        RoundOutcome::DealerBust => "Dealer busts, you win!",
        RoundOutcome::PlayerWin => "You win!",
        RoundOutcome::DealerWin => "Dealer wins!",
        RoundOutcome::Push => "Push (tie)!",
    }
}

/// Text for one round event, or None if it is not worth printing.
pub fn render_event(event: &RoundEvent, show_advice: bool) -> Option<String> {
    match event {
        RoundEvent::InitialDeal { player, dealer, .. } => Some(format!(
            "{}\n{}",
            render_hand("Player", player),
            render_hand("Dealer", dealer)
        )),
        RoundEvent::Advice {
            advisory,
            running_count,
        } => {
            if !show_advice {
                return Some(format!(
                    "Player Total: {}, Dealer Showing: {}",
                    advisory.player_total, advisory.dealer_total
                ));
            }
            Some(format!(
                "Running Count: {}, True Count: {:.2}\n\
                 Player Total: {}, Dealer Showing: {}\n\
                 Estimated Bust Probability on Hit: {:.1}%\n\
                 Recommended Action: {}",
                running_count,
                advisory.true_count,
                advisory.player_total,
                advisory.dealer_total,
                advisory.bust_probability,
                advisory.recommendation
            ))
        }
        RoundEvent::ActionTaken { .. } => None,
        RoundEvent::PlayerDraw { card, total, soft } => Some(format!(
            "{}Player Total: {}{}",
            render_hand("Player draws", &[*card]),
            total,
            if *soft { " (soft)" } else { "" }
        )),
        RoundEvent::AutoStand { natural: true } => {
            Some(String::from("Blackjack! You stand automatically."))
        }
        RoundEvent::AutoStand { natural: false } => {
            Some(String::from("21! You stand automatically."))
        }
        RoundEvent::PlayerBust { .. } => Some(String::from("You busted!")),
        RoundEvent::DealerSkipped => Some(String::from(
            "Dealer does not need to play since you busted.",
        )),
        RoundEvent::DealerDraw { card, total } => Some(format!(
            "{}Dealer Total: {}",
            render_hand("Dealer draws", &[*card]),
            total
        )),
        RoundEvent::Resolved {
            player_total,
            dealer_total,
            outcome,
        } => Some(format!(
            "Player: {}, Dealer: {}\n{}",
            player_total,
            dealer_total,
            outcome_message(*outcome)
        )),
    }
}
