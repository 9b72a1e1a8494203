//! Synchronous battle loop.
//!
//! A [`BattleRunner`] drives a [`BattleSystem`] to completion:
//!
//! 1. Each round, the first combatant acts, then the second.
//! 2. At the start of a combatant's turn its active effects are applied; an
//!    effect may end the battle before the combatant acts.
//! 3. The selector picks a skill, which is resolved against the opponent.
//! 4. After both turns, both combatants regenerate mana.
//! 5. The run stops when a combatant falls or the round limit is reached.
//!
//! The winner then gains experience and every gained level is fed to the
//! configured [`LevelUpPolicy`].

use game_core::{
    AttributeKind, BattleOutcome, BattleSystem, Character, DefaultLevelUpPolicy, GameConfig,
    LevelUpPolicy, Side,
};

use crate::api::{Result, RuntimeError, SkillSelector};
use crate::events::{BattleEvent, BattleResult, BattleSummary};

/// Runner configuration derived from [`GameConfig`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RunnerConfig {
    pub max_rounds: u32,
    pub mana_regen_per_round: i32,
    pub victory_experience: u64,
}

impl From<&GameConfig> for RunnerConfig {
    fn from(config: &GameConfig) -> Self {
        Self {
            max_rounds: config.max_rounds,
            mana_regen_per_round: config.mana_regen_per_round,
            victory_experience: config.victory_experience,
        }
    }
}

impl Default for RunnerConfig {
    fn default() -> Self {
        Self::from(&GameConfig::default())
    }
}

/// Drives whole battles between two characters.
pub struct BattleRunner {
    config: RunnerConfig,
    first: Box<dyn SkillSelector>,
    second: Box<dyn SkillSelector>,
    policy: Box<dyn LevelUpPolicy + Send>,
}

impl BattleRunner {
    /// Create a new runner builder
    pub fn builder() -> BattleRunnerBuilder {
        BattleRunnerBuilder::new()
    }

    pub fn config(&self) -> RunnerConfig {
        self.config
    }

    /// Runs one battle to completion.
    ///
    /// Fails only if a combatant is already incapacitated; skill failures
    /// during the battle are logged as [`BattleEvent::TurnFailed`].
    pub fn run(&mut self, first: &mut Character, second: &mut Character) -> Result<BattleSummary> {
        let span = tracing::info_span!("battle", first = %first.name(), second = %second.name());
        let _enter = span.enter();

        let mut events = vec![BattleEvent::Started {
            first: first.name().to_owned(),
            second: second.name().to_owned(),
        }];

        let (outcome, rounds) = {
            let mut battle = BattleSystem::new(first, second)?;
            tracing::info!(max_rounds = self.config.max_rounds, "battle started");
            self.play(&mut battle, &mut events)
        };

        let result = match outcome {
            BattleOutcome::Winner(winner) => BattleResult::Victory { winner },
            BattleOutcome::Draw => BattleResult::Draw,
            BattleOutcome::Ongoing => {
                tracing::warn!(rounds, "round limit reached, battle abandoned");
                BattleResult::Stalemate
            }
        };
        tracing::info!(?result, rounds, "battle finished");
        events.push(BattleEvent::Finished { result, rounds });

        if let Some(side) = result.winner() {
            let winner = match side {
                Side::First => first,
                Side::Second => second,
            };
            self.award_experience(side, winner, &mut events);
        }

        Ok(BattleSummary {
            result,
            rounds,
            events,
        })
    }

    /// Plays rounds until the battle ends or the limit is reached.
    fn play(
        &mut self,
        battle: &mut BattleSystem<'_>,
        events: &mut Vec<BattleEvent>,
    ) -> (BattleOutcome, u32) {
        let mut rounds = 0;

        while rounds < self.config.max_rounds {
            rounds += 1;

            for side in [Side::First, Side::Second] {
                self.take_turn(battle, side, rounds, events);
                if battle.is_battle_over() {
                    return (battle.outcome(), rounds);
                }
            }

            self.regenerate_mana(battle, rounds, events);
        }

        (battle.outcome(), rounds)
    }

    fn take_turn(
        &mut self,
        battle: &mut BattleSystem<'_>,
        side: Side,
        round: u32,
        events: &mut Vec<BattleEvent>,
    ) {
        let pass = battle.combatant_mut(side).apply_effects();
        if pass.applied > 0 {
            tracing::debug!(
                round,
                %side,
                applied = pass.applied,
                expired = pass.expired,
                "effects applied"
            );
            events.push(BattleEvent::EffectsApplied {
                round,
                side,
                applied: pass.applied,
                expired: pass.expired,
            });
        }
        if battle.is_battle_over() {
            return;
        }

        let selector = match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        };
        let Some(skill) =
            selector.select_skill(battle.combatant(side), battle.combatant(side.opponent()))
        else {
            tracing::debug!(round, %side, "turn skipped");
            events.push(BattleEvent::TurnSkipped { round, side });
            return;
        };

        match battle.execute_turn(&skill, side) {
            Ok(report) => {
                tracing::debug!(
                    round,
                    %side,
                    skill = %report.skill,
                    damage = report.outcome.total_damage(),
                    resolved = report.outcome.is_resolved(),
                    "turn resolved"
                );
                events.push(BattleEvent::TurnResolved { round, report });
            }
            Err(err) => {
                tracing::warn!(round, %side, %skill, error = %err, "turn failed");
                events.push(BattleEvent::TurnFailed {
                    round,
                    side,
                    skill,
                    error: err.to_string(),
                });
            }
        }
    }

    fn regenerate_mana(
        &self,
        battle: &mut BattleSystem<'_>,
        round: u32,
        events: &mut Vec<BattleEvent>,
    ) {
        let amount = self.config.mana_regen_per_round;
        if amount == 0 {
            return;
        }

        for side in [Side::First, Side::Second] {
            if let Some(mana) = battle
                .combatant_mut(side)
                .attributes_mut()
                .get_mut(AttributeKind::Mana)
            {
                mana.apply_change(f64::from(amount));
            }
        }
        events.push(BattleEvent::ManaRegenerated { round, amount });
    }

    fn award_experience(&self, side: Side, winner: &mut Character, events: &mut Vec<BattleEvent>) {
        let amount = self.config.victory_experience;
        if amount == 0 {
            return;
        }

        events.push(BattleEvent::ExperienceAwarded { side, amount });
        for event in winner.gain_experience(amount) {
            winner.apply_level_up(event, self.policy.as_ref());
            tracing::info!(character = %winner.name(), level = event.new_level, "level up");
            events.push(BattleEvent::LevelUp {
                side,
                level: event.new_level,
            });
        }
    }
}

/// Builder for [`BattleRunner`].
pub struct BattleRunnerBuilder {
    config: RunnerConfig,
    first: Option<Box<dyn SkillSelector>>,
    second: Option<Box<dyn SkillSelector>>,
    policy: Box<dyn LevelUpPolicy + Send>,
}

impl BattleRunnerBuilder {
    pub fn new() -> Self {
        Self {
            config: RunnerConfig::default(),
            first: None,
            second: None,
            policy: Box::new(DefaultLevelUpPolicy),
        }
    }

    pub fn config(mut self, config: RunnerConfig) -> Self {
        self.config = config;
        self
    }

    pub fn game_config(self, config: &GameConfig) -> Self {
        self.config(RunnerConfig::from(config))
    }

    pub fn selector(mut self, side: Side, selector: impl SkillSelector + 'static) -> Self {
        let slot = match side {
            Side::First => &mut self.first,
            Side::Second => &mut self.second,
        };
        *slot = Some(Box::new(selector));
        self
    }

    pub fn level_up_policy(mut self, policy: impl LevelUpPolicy + Send + 'static) -> Self {
        self.policy = Box::new(policy);
        self
    }

    pub fn build(self) -> Result<BattleRunner> {
        let first = self
            .first
            .ok_or(RuntimeError::SelectorNotSet { side: Side::First })?;
        let second = self
            .second
            .ok_or(RuntimeError::SelectorNotSet { side: Side::Second })?;

        Ok(BattleRunner {
            config: self.config,
            first,
            second,
            policy: self.policy,
        })
    }
}

impl Default for BattleRunnerBuilder {
    fn default() -> Self {
        Self::new()
    }
}
