//! Arena client binary.
//!
//! Loads content from `DATA_DIR`, spawns the configured combatants, runs one
//! seeded battle and prints the log.
//!
//! # Examples
//!
//! ```bash
//! # Random casual enemy, random seed
//! cargo run -p dungeon-client
//!
//! # Reproducible roster duel with debug logs
//! RUST_LOG=debug BATTLE_SEED=42 PLAYER=nico ENEMY=brute cargo run -p dungeon-client
//! ```

use anyhow::Result;
use dungeon_client::{ArenaConfig, ArenaReport, run_battle};
use game_core::{AttributeKind, Character, Side, SkillOutcome};
use runtime::{BattleEvent, BattleResult};

fn main() -> Result<()> {
    // Load .env file if it exists (silently ignore if not found)
    let _ = dotenvy::dotenv();

    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive(tracing::Level::INFO.into()),
        )
        .with_writer(std::io::stderr)
        .init();

    let config = ArenaConfig::from_env();
    let report = run_battle(&config)?;
    print_report(&report);

    Ok(())
}

fn print_report(report: &ArenaReport) {
    let name = |side: Side| match side {
        Side::First => report.player.name(),
        Side::Second => report.enemy.name(),
    };

    println!(
        "{} vs {} (seed {})",
        report.player.name(),
        report.enemy.name(),
        report.seed
    );
    println!("--------------------");

    for event in &report.summary.events {
        match event {
            BattleEvent::TurnResolved { round, report: turn } => match &turn.outcome {
                SkillOutcome::Resolved { .. } => println!(
                    "[{round:>3}] {} uses {} ({} damage)",
                    name(turn.side),
                    turn.skill,
                    turn.outcome.total_damage()
                ),
                SkillOutcome::InsufficientMana {
                    required,
                    available,
                } => println!(
                    "[{round:>3}] {} tries {} but has {available}/{required} mana",
                    name(turn.side),
                    turn.skill
                ),
            },
            BattleEvent::TurnFailed {
                round, side, error, ..
            } => println!("[{round:>3}] {} fails: {error}", name(*side)),
            BattleEvent::TurnSkipped { round, side } => {
                println!("[{round:>3}] {} has no skill to use", name(*side));
            }
            BattleEvent::ExperienceAwarded { side, amount } => {
                println!("{} gains {amount} experience", name(*side));
            }
            BattleEvent::LevelUp { side, level } => {
                println!("{} reached level {level}", name(*side));
            }
            BattleEvent::Started { .. }
            | BattleEvent::EffectsApplied { .. }
            | BattleEvent::ManaRegenerated { .. }
            | BattleEvent::Finished { .. } => {}
        }
    }

    println!("--------------------");
    match report.summary.result {
        BattleResult::Victory { winner } => println!("WINNER: {}", name(winner)),
        BattleResult::Draw => println!("DRAW"),
        BattleResult::Stalemate => {
            println!("STALEMATE after {} rounds", report.summary.rounds);
        }
    }
    print_stats(&report.player);
    print_stats(&report.enemy);
}

fn print_stats(character: &Character) {
    println!("{} (level {})", character.name(), character.level());
    for kind in [
        AttributeKind::Hp,
        AttributeKind::Mana,
        AttributeKind::Atk,
        AttributeKind::Def,
    ] {
        if let Some(attribute) = character.attributes().get(kind) {
            println!(
                "  {kind:<8} {:>4}/{}",
                attribute.value(),
                attribute.max_value()
            );
        }
    }
}
