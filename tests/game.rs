//! Game integration tests.

use std::collections::VecDeque;
use std::sync::Mutex;
use std::sync::atomic::{AtomicUsize, Ordering};

use warrs::{
    Card, Deck, DeckProvider, Draw, Game, GameOptions, GameState, LocalDeckProvider, MatchOutcome,
    ProviderError, Rank, RoundError, RoundOutcome, Suit,
};

fn card(rank: Rank, suit: Suit) -> Card {
    Card::new(rank, suit)
}

/// Filler cards used as war burns or deck padding. Never compared.
fn filler(count: usize) -> Vec<Card> {
    (0..count)
        .map(|i| card(Rank::Two, Suit::ALL[i % 4]))
        .collect()
}

/// A provider that deals a fixed sequence of cards, optionally failing the
/// n-th draw call to simulate a provider outage mid-resolution.
struct ScriptedDeck {
    cards: Mutex<VecDeque<Card>>,
    fail_on_draw: Option<usize>,
    draw_calls: AtomicUsize,
}

impl ScriptedDeck {
    fn new(cards: Vec<Card>) -> Self {
        Self {
            cards: Mutex::new(cards.into()),
            fail_on_draw: None,
            draw_calls: AtomicUsize::new(0),
        }
    }

    fn failing_at(cards: Vec<Card>, draw_call: usize) -> Self {
        Self {
            fail_on_draw: Some(draw_call),
            ..Self::new(cards)
        }
    }
}

impl DeckProvider for ScriptedDeck {
    async fn new_deck(&self, _deck_count: u8) -> Result<Deck, ProviderError> {
        Ok(Deck {
            id: "scripted".to_string(),
            remaining: self.cards.lock().unwrap().len(),
        })
    }

    async fn draw(&self, _deck_id: &str, count: usize) -> Result<Draw, ProviderError> {
        let call = self.draw_calls.fetch_add(1, Ordering::SeqCst) + 1;
        if self.fail_on_draw == Some(call) {
            return Err(ProviderError::Malformed("scripted outage".to_string()));
        }

        let mut cards = self.cards.lock().unwrap();
        let take = count.min(cards.len());
        let drawn: Vec<Card> = cards.drain(..take).collect();
        Ok(Draw {
            cards: drawn,
            remaining: cards.len(),
        })
    }

    async fn remaining(&self, _deck_id: &str) -> Result<usize, ProviderError> {
        Ok(self.cards.lock().unwrap().len())
    }
}

async fn scripted_game(cards: Vec<Card>) -> Game<ScriptedDeck> {
    Game::start(ScriptedDeck::new(cards), GameOptions::default())
        .await
        .unwrap()
}

#[tokio::test]
async fn higher_rank_wins_the_round() {
    let mut deck = vec![card(Rank::King, Suit::Hearts), card(Rank::Five, Suit::Spades)];
    deck.extend(filler(4));
    let mut game = scripted_game(deck).await;

    let round = game.play_round().await.unwrap();

    assert_eq!(round.outcome, RoundOutcome::Player1Wins);
    assert_eq!(round.points, 1);
    assert_eq!(round.wars, 0);
    assert_eq!(round.cards[0].rank, Rank::King);
    assert_eq!(round.cards[1].rank, Rank::Five);
    assert_eq!(round.remaining, 4);
    assert_eq!(round.ending, None);
    assert_eq!(game.scores().player1, 1);
    assert_eq!(game.scores().player2, 0);
    assert!(!game.is_over());
}

#[tokio::test]
async fn lower_first_card_means_player2_wins() {
    let mut deck = vec![
        card(Rank::Three, Suit::Hearts),
        card(Rank::Queen, Suit::Spades),
    ];
    deck.extend(filler(4));
    let mut game = scripted_game(deck).await;

    let round = game.play_round().await.unwrap();

    assert_eq!(round.outcome, RoundOutcome::Player2Wins);
    assert_eq!(game.scores().player1, 0);
    assert_eq!(game.scores().player2, 1);
}

#[tokio::test]
async fn every_unequal_pair_awards_one_point_to_the_higher_rank() {
    for first in Rank::ALL {
        for second in Rank::ALL {
            if first == second {
                continue;
            }

            let mut deck = vec![card(first, Suit::Hearts), card(second, Suit::Spades)];
            deck.extend(filler(2));
            let mut game = scripted_game(deck).await;
            let round = game.play_round().await.unwrap();

            assert_eq!(round.points, 1, "{first:?} vs {second:?}");
            if first > second {
                assert_eq!(round.outcome, RoundOutcome::Player1Wins);
                assert_eq!(game.scores().player1, 1);
                assert_eq!(game.scores().player2, 0);
            } else {
                assert_eq!(round.outcome, RoundOutcome::Player2Wins);
                assert_eq!(game.scores().player1, 0);
                assert_eq!(game.scores().player2, 1);
            }
        }
    }
}

#[tokio::test]
async fn tie_enters_war_and_pays_double() {
    // 7 vs 7 with 50 cards total: the war burns 6, flips ACE vs JACK.
    let mut deck = vec![
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Seven, Suit::Spades),
    ];
    deck.extend(filler(6)); // burned
    deck.push(card(Rank::Ace, Suit::Hearts));
    deck.push(card(Rank::Jack, Suit::Spades));
    deck.extend(filler(40));
    assert_eq!(deck.len(), 50);

    let mut game = scripted_game(deck).await;
    let round = game.play_round().await.unwrap();

    assert_eq!(round.outcome, RoundOutcome::Player1Wins);
    assert_eq!(round.points, 2);
    assert_eq!(round.wars, 1);
    assert_eq!(round.cards[0].rank, Rank::Ace);
    assert_eq!(round.cards[1].rank, Rank::Jack);
    // Opening pair plus the 8-card war.
    assert_eq!(round.remaining, 40);
    assert_eq!(round.ending, None);
    assert_eq!(game.scores().player1, 2);
    assert_eq!(game.scores().player2, 0);
}

#[tokio::test]
async fn war_aborts_when_cards_run_short() {
    // QUEEN vs QUEEN with only 6 cards left: no war possible.
    let mut deck = vec![
        card(Rank::Queen, Suit::Hearts),
        card(Rank::Queen, Suit::Spades),
    ];
    deck.extend(filler(6));
    let mut game = scripted_game(deck).await;

    let round = game.play_round().await.unwrap();

    assert_eq!(round.outcome, RoundOutcome::WarAborted);
    assert_eq!(round.points, 0);
    assert_eq!(round.wars, 0);
    assert_eq!(round.cards[0].rank, Rank::Queen);
    assert_eq!(round.cards[1].rank, Rank::Queen);
    assert_eq!(round.ending, Some(MatchOutcome::Tie));
    assert_eq!(game.scores().player1, 0);
    assert_eq!(game.scores().player2, 0);
    assert_eq!(game.state(), GameState::GameOver);

    assert!(matches!(
        game.play_round().await.unwrap_err(),
        RoundError::GameOver
    ));
}

#[tokio::test]
async fn war_abort_ends_match_on_current_scores() {
    let mut deck = vec![
        card(Rank::King, Suit::Hearts),
        card(Rank::Five, Suit::Spades),
        card(Rank::Queen, Suit::Hearts),
        card(Rank::Queen, Suit::Spades),
    ];
    deck.extend(filler(6));
    let mut game = scripted_game(deck).await;

    game.play_round().await.unwrap();
    assert_eq!(game.scores().player1, 1);

    let round = game.play_round().await.unwrap();
    assert_eq!(round.outcome, RoundOutcome::WarAborted);
    assert_eq!(round.ending, Some(MatchOutcome::Player1));
    assert!(game.is_over());
}

#[tokio::test]
async fn repeated_ties_drain_deck_to_exactly_zero() {
    // Opening tie, war flip ties again, second war decides with the last
    // two cards in the deck.
    let mut deck = vec![
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Seven, Suit::Diamonds),
    ];
    deck.extend(filler(6));
    deck.push(card(Rank::Nine, Suit::Hearts));
    deck.push(card(Rank::Nine, Suit::Diamonds));
    deck.extend(filler(6));
    deck.push(card(Rank::King, Suit::Hearts));
    deck.push(card(Rank::Three, Suit::Diamonds));
    assert_eq!(deck.len(), 18);

    let mut game = scripted_game(deck).await;
    let round = game.play_round().await.unwrap();

    assert_eq!(round.outcome, RoundOutcome::Player1Wins);
    assert_eq!(round.points, 2);
    assert_eq!(round.wars, 2);
    assert_eq!(round.remaining, 0);
    assert_eq!(round.ending, Some(MatchOutcome::Player1));
    assert_eq!(game.scores().player1, 2);
    assert_eq!(game.cards_remaining(), 0);
    assert!(game.is_over());
}

#[tokio::test]
async fn exhausting_the_deck_ends_the_match() {
    let deck = vec![card(Rank::King, Suit::Hearts), card(Rank::Five, Suit::Spades)];
    let mut game = scripted_game(deck).await;

    let round = game.play_round().await.unwrap();

    assert_eq!(round.remaining, 0);
    assert_eq!(round.ending, Some(MatchOutcome::Player1));
    assert!(game.is_over());
    assert!(matches!(
        game.play_round().await.unwrap_err(),
        RoundError::GameOver
    ));
}

#[tokio::test]
async fn provider_failure_leaves_match_state_unchanged() {
    // 7 vs 7 enters a war; the burn draw (call 2) fails.
    let mut deck = vec![
        card(Rank::Seven, Suit::Hearts),
        card(Rank::Seven, Suit::Spades),
        card(Rank::Four, Suit::Hearts),
        card(Rank::Nine, Suit::Spades),
    ];
    deck.extend(filler(8));
    let provider = ScriptedDeck::failing_at(deck, 2);
    let mut game = Game::start(provider, GameOptions::default()).await.unwrap();
    let before = game.cards_remaining();

    let err = game.play_round().await.unwrap_err();
    assert!(matches!(
        err,
        RoundError::Provider(ProviderError::Malformed(_))
    ));

    // Scores, phase and the cached count are untouched; the round can be
    // retried.
    assert_eq!(game.scores().player1, 0);
    assert_eq!(game.scores().player2, 0);
    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.cards_remaining(), before);

    let retry = game.play_round().await.unwrap();
    assert_eq!(retry.outcome, RoundOutcome::Player2Wins);
    assert_eq!(game.scores().player2, 1);
}

#[tokio::test]
async fn short_draw_is_reported_as_provider_error() {
    let deck = vec![card(Rank::King, Suit::Hearts)];
    let mut game = scripted_game(deck).await;

    let err = game.play_round().await.unwrap_err();
    assert!(matches!(
        err,
        RoundError::Provider(ProviderError::ShortDraw { want: 2, got: 1 })
    ));
    assert_eq!(game.scores().player1, 0);
    assert_eq!(game.state(), GameState::InProgress);
}

#[tokio::test]
async fn options_builder_sets_fields() {
    let options = GameOptions::default()
        .with_deck_count(2)
        .with_round_points(3)
        .with_war_points(5)
        .with_war_burn(2);

    assert_eq!(options.deck_count, 2);
    assert_eq!(options.round_points, 3);
    assert_eq!(options.war_points, 5);
    assert_eq!(options.war_burn, 2);
    assert_eq!(options.war_cost(), 6);

    assert_eq!(GameOptions::default().war_cost(), 8);
}

#[tokio::test]
async fn custom_points_are_respected() {
    let mut deck = vec![card(Rank::King, Suit::Hearts), card(Rank::Five, Suit::Spades)];
    deck.extend(filler(4));
    let options = GameOptions::default().with_round_points(3);
    let mut game = Game::start(ScriptedDeck::new(deck), options).await.unwrap();

    let round = game.play_round().await.unwrap();
    assert_eq!(round.points, 3);
    assert_eq!(game.scores().player1, 3);
}

#[tokio::test]
async fn local_provider_is_deterministic_per_seed() {
    let first = LocalDeckProvider::new(7);
    let second = LocalDeckProvider::new(7);

    let deck_a = first.new_deck(1).await.unwrap();
    let deck_b = second.new_deck(1).await.unwrap();
    assert_eq!(deck_a.remaining, 52);

    let draw_a = first.draw(&deck_a.id, 5).await.unwrap();
    let draw_b = second.draw(&deck_b.id, 5).await.unwrap();
    assert_eq!(draw_a.cards, draw_b.cards);
    assert_eq!(draw_a.remaining, 47);
    assert_eq!(first.remaining(&deck_a.id).await.unwrap(), 47);
}

#[tokio::test]
async fn local_provider_refuses_overdraw_and_unknown_decks() {
    let provider = LocalDeckProvider::new(1);
    let deck = provider.new_deck(1).await.unwrap();

    assert!(matches!(
        provider.draw(&deck.id, 53).await.unwrap_err(),
        ProviderError::DrawRefused
    ));
    // A refused draw consumes nothing.
    assert_eq!(provider.remaining(&deck.id).await.unwrap(), 52);

    assert!(matches!(
        provider.draw("missing", 1).await.unwrap_err(),
        ProviderError::UnknownDeck(_)
    ));
    assert!(matches!(
        provider.remaining("missing").await.unwrap_err(),
        ProviderError::UnknownDeck(_)
    ));
}

#[tokio::test]
async fn full_match_on_local_deck_terminates() {
    let provider = LocalDeckProvider::new(123);
    let mut game = Game::start(provider, GameOptions::default()).await.unwrap();

    let mut last_scores = game.scores();
    let mut rounds = 0;
    while !game.is_over() {
        rounds += 1;
        assert!(rounds <= 52, "match failed to terminate");

        let round = game.play_round().await.unwrap();
        let scores = game.scores();
        assert!(scores.player1 >= last_scores.player1);
        assert!(scores.player2 >= last_scores.player2);
        last_scores = scores;

        if game.is_over() {
            assert_eq!(round.ending, Some(scores.standing()));
            assert!(round.remaining == 0 || round.outcome == RoundOutcome::WarAborted);
        } else {
            assert_eq!(round.ending, None);
        }
    }
}

#[tokio::test]
async fn reset_restores_a_fresh_match() {
    let provider = LocalDeckProvider::new(9);
    let mut game = Game::start(provider, GameOptions::default()).await.unwrap();
    let first_id = game.deck_id().to_string();

    game.play_round().await.unwrap();
    assert!(game.scores().player1 + game.scores().player2 > 0);

    game.reset().await.unwrap();
    assert_eq!(game.scores().player1, 0);
    assert_eq!(game.scores().player2, 0);
    assert_eq!(game.state(), GameState::InProgress);
    assert_eq!(game.cards_remaining(), 52);
    assert_ne!(game.deck_id(), first_id);
}

#[test]
fn card_parses_from_provider_json() {
    let parsed: Card = serde_json::from_str(
        r#"{"value": "ACE", "suit": "SPADES",
            "image": "https://deckofcardsapi.com/static/img/AS.png"}"#,
    )
    .unwrap();
    assert_eq!(parsed.rank, Rank::Ace);
    assert_eq!(parsed.suit, Suit::Spades);

    let ten: Card = serde_json::from_str(r#"{"value": "10", "suit": "HEARTS"}"#).unwrap();
    assert_eq!(ten.rank, Rank::Ten);
    assert_eq!(ten.image, "");
}

#[test]
fn ranks_order_with_ace_high() {
    assert!(Rank::Ace > Rank::King);
    assert!(Rank::King > Rank::Queen);
    assert!(Rank::Queen > Rank::Jack);
    assert!(Rank::Jack > Rank::Ten);
    assert!(Rank::Two < Rank::Three);
    assert_eq!(Rank::Ace.value(), 14);
    assert_eq!(Rank::Two.value(), 2);
    assert_eq!(Rank::Ten.to_string(), "10");
    assert_eq!(Rank::King.to_string(), "KING");
}
