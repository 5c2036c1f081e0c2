//! Tests for command-line parsing.

use clap::Parser;
use tictactoe::{Cli, Command};
use tictactoe_engine::{Board, Player, Seat, SeatConfig, StrategyKind};

#[test]
fn test_no_subcommand_means_play() {
    let cli = Cli::try_parse_from(["tictactoe"]).expect("parses");
    assert!(cli.command.is_none());
}

#[test]
fn test_play_flags() {
    let cli = Cli::try_parse_from([
        "tictactoe", "play", "--one", "weak", "--two", "human", "--pacing-ms", "0", "--seed", "5",
    ])
    .expect("parses");

    let Some(Command::Play(args)) = cli.command else {
        panic!("expected play");
    };
    let overrides = args.overrides();
    assert_eq!(overrides.one, Some(Seat::Computer(StrategyKind::Heuristic)));
    assert_eq!(overrides.two, Some(Seat::Human));
    assert_eq!(overrides.pacing_ms, Some(0));
    assert_eq!(overrides.seed, Some(5));
    assert_eq!(args.config.to_str(), Some("tictactoe.toml"));
}

#[test]
fn test_preset_range_is_checked() {
    let cli = Cli::try_parse_from(["tictactoe", "play", "--preset", "3"]).expect("parses");
    let Some(Command::Play(args)) = cli.command else {
        panic!("expected play");
    };
    assert_eq!(args.overrides().preset, SeatConfig::preset(3));

    assert!(Cli::try_parse_from(["tictactoe", "play", "--preset", "5"]).is_err());
}

#[test]
fn test_bad_seat_is_rejected() {
    assert!(Cli::try_parse_from(["tictactoe", "play", "--one", "robot"]).is_err());
}

#[test]
fn test_suggest_arguments() {
    let cli = Cli::try_parse_from(["tictactoe", "suggest", "XX./OO./...", "--player", "x", "--json"])
        .expect("parses");

    let Some(Command::Suggest {
        board,
        strategy,
        player,
        json,
        ..
    }) = cli.command
    else {
        panic!("expected suggest");
    };
    assert_eq!(board, "XX./OO./...".parse::<Board>().expect("board"));
    assert_eq!(strategy, StrategyKind::Exhaustive);
    assert_eq!(player, Some(Player::One));
    assert!(json);
}

#[test]
fn test_suggest_rejects_bad_board() {
    assert!(Cli::try_parse_from(["tictactoe", "suggest", "XX?"]).is_err());
}
