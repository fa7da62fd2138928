//! The turn engine.
//!
//! `Match` owns everything one battle needs: config, catalog, state, and
//! an optional event sink. Turns run synchronously from start to finish;
//! each turn method returns the events it produced, in order.
//!
//! ## Turn structure
//!
//! 1. Start of turn: turn counter, attack flags, mana (skipped on turn 1,
//!    which sets the starting mana instead)
//! 2. Draw: player 1's draw loop, then player 2's
//! 3. Equalize: catch-up draws for the side with fewer units
//! 4. Attack: buff refresh, speed-ordered attacks, cleanup
//!
//! The win condition is checked by the caller between turns
//! (`check_win_condition`), or by `advance`, which does both.
//!
//! ## Example
//!
//! ```
//! use deck_brawl::decks::presets;
//! use deck_brawl::rules::Match;
//!
//! let mut game = Match::new(presets::player1_deck(), presets::player2_deck(), 42).unwrap();
//! let events = game.advance();
//!
//! assert!(!events.is_empty());
//! assert_eq!(game.turn_number(), 1);
//! ```

use tracing::{debug, info, trace};

use super::phase::TurnPhase;
use super::queue::build_attack_queue;
use super::result::{evaluate, exhausted_loser, GameResult};
use super::snapshot::MatchSnapshot;
use crate::buffs::{recompute_buffs, reset_and_recompute};
use crate::cards::{CardCatalog, Unit};
use crate::core::{ConfigError, MatchConfig, MatchState, PlayerId, PlayerMap, PlayerState, UnitId};
use crate::decks::{validate_decks, DeckSpec};
use crate::events::{BattleEvent, EventSink};
use crate::targeting::select_target;

/// A single two-player battle.
pub struct Match {
    config: MatchConfig,
    catalog: CardCatalog,
    state: MatchState,
    sink: Option<Box<dyn EventSink>>,
    pending: Vec<BattleEvent>,
}

impl Match {
    /// Start a match with the standard rules and catalog.
    pub fn new(player1: DeckSpec, player2: DeckSpec, seed: u64) -> Result<Self, ConfigError> {
        Self::with_config(MatchConfig::default(), player1, player2, seed)
    }

    /// Start a match with custom rules.
    pub fn with_config(
        config: MatchConfig,
        player1: DeckSpec,
        player2: DeckSpec,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        Self::with_catalog(config, CardCatalog::standard(), player1, player2, seed)
    }

    /// Start a match with custom rules and a custom card catalog.
    ///
    /// Both decks are validated first. On failure the error lists every
    /// problem with either deck.
    pub fn with_catalog(
        config: MatchConfig,
        catalog: CardCatalog,
        player1: DeckSpec,
        player2: DeckSpec,
        seed: u64,
    ) -> Result<Self, ConfigError> {
        config.validate()?;
        let specs = PlayerMap::from_array([player1, player2]);
        let decks = validate_decks(&specs, &catalog, &config)?;

        info!(
            seed,
            p1 = %decks[PlayerId::P1].archetype,
            p2 = %decks[PlayerId::P2].archetype,
            "match created"
        );

        let state = MatchState::new(&decks, &config, seed);
        Ok(Self {
            config,
            catalog,
            state,
            sink: None,
            pending: Vec::new(),
        })
    }

    /// Attach an event sink (builder pattern).
    #[must_use]
    pub fn with_sink(mut self, sink: impl EventSink + 'static) -> Self {
        self.sink = Some(Box::new(sink));
        self
    }

    /// Attach or replace the event sink.
    pub fn set_sink(&mut self, sink: Box<dyn EventSink>) {
        self.sink = Some(sink);
    }

    /// Detach the event sink.
    pub fn take_sink(&mut self) -> Option<Box<dyn EventSink>> {
        self.sink.take()
    }

    // === Queries ===

    /// The rules in effect.
    #[must_use]
    pub fn config(&self) -> &MatchConfig {
        &self.config
    }

    /// The card catalog in use.
    #[must_use]
    pub fn catalog(&self) -> &CardCatalog {
        &self.catalog
    }

    /// Full match state.
    #[must_use]
    pub fn state(&self) -> &MatchState {
        &self.state
    }

    /// Mutable match state, for setting up scenarios.
    pub fn state_mut(&mut self) -> &mut MatchState {
        &mut self.state
    }

    /// One player's state.
    #[must_use]
    pub fn player(&self, player: PlayerId) -> &PlayerState {
        &self.state.players[player]
    }

    /// Current turn number (zero before the first turn).
    #[must_use]
    pub fn turn_number(&self) -> u32 {
        self.state.turn_number
    }

    /// Current phase.
    #[must_use]
    pub fn phase(&self) -> TurnPhase {
        self.state.phase
    }

    /// The result, once decided.
    #[must_use]
    pub fn result(&self) -> Option<GameResult> {
        self.state.result
    }

    /// Check if the match is decided.
    #[must_use]
    pub fn is_over(&self) -> bool {
        self.state.is_over()
    }

    /// Serializable copy of the whole match.
    #[must_use]
    pub fn snapshot(&self) -> MatchSnapshot {
        MatchSnapshot::of(&self.state)
    }

    // === Turns ===

    /// Play the opening turn: both players get the starting mana, then
    /// draw and attack.
    ///
    /// Does nothing if a turn has already been played.
    pub fn play_first_turn(&mut self) -> Vec<BattleEvent> {
        if self.state.phase != TurnPhase::NotStarted {
            return Vec::new();
        }

        self.enter(TurnPhase::FirstTurn);
        self.state.turn_number = 1;
        info!(turn = 1, "game start");
        self.emit(BattleEvent::TurnStarted { turn: 1 });

        let starting = self.config.starting_mana;
        for player in PlayerId::all() {
            let side = &mut self.state.players[player];
            let gained = starting.saturating_sub(side.max_mana);
            side.set_mana(starting);
            self.emit(BattleEvent::ManaRefreshed {
                player,
                max_mana: starting,
                current_mana: starting,
                gained,
            });
        }

        self.run_phases();
        self.drain()
    }

    /// Play one more turn.
    ///
    /// Does nothing before the first turn or once the match is decided.
    pub fn play_turn(&mut self) -> Vec<BattleEvent> {
        if self.state.phase != TurnPhase::TurnComplete {
            return Vec::new();
        }

        self.state.turn_number += 1;
        let turn = self.state.turn_number;
        info!(turn, "turn start");
        self.emit(BattleEvent::TurnStarted { turn });

        for (_, side) in self.state.players.iter_mut() {
            for unit in side.field.units_mut() {
                unit.reset_attack_state();
            }
        }

        for player in PlayerId::all() {
            let side = &mut self.state.players[player];
            let gained = side.grow_mana(self.config.max_mana);
            let (max_mana, current_mana) = (side.max_mana, side.current_mana);
            self.emit(BattleEvent::ManaRefreshed {
                player,
                max_mana,
                current_mana,
                gained,
            });
        }

        if let Some(loser) = exhausted_loser(&self.state.players) {
            info!(player = %loser, "no cards remaining");
            self.emit(BattleEvent::CardsExhausted { player: loser });
            self.finish(GameResult::Winner(loser.opponent()));
            return self.drain();
        }

        self.run_phases();
        self.drain()
    }

    /// Check the win condition and record the result if the match is over.
    ///
    /// Emits `GameOver` the first time a result is reached. Returns the
    /// result, if any.
    pub fn check_win_condition(&mut self) -> Option<GameResult> {
        if let Some(result) = self.state.result {
            return Some(result);
        }
        let result = evaluate(&self.state.players)?;
        self.finish(result);
        Some(result)
    }

    /// Play the next turn (the first one on a fresh match) and check the
    /// win condition. Returns every event produced.
    pub fn advance(&mut self) -> Vec<BattleEvent> {
        if self.is_over() {
            return Vec::new();
        }
        let mut events = if self.state.phase == TurnPhase::NotStarted {
            self.play_first_turn()
        } else {
            self.play_turn()
        };
        self.check_win_condition();
        events.extend(self.drain());
        events
    }

    /// Advance until the match is decided or `max_turns` more turns have
    /// been played. Returns the result, if one was reached.
    pub fn run_to_completion(&mut self, max_turns: u32) -> Option<GameResult> {
        for _ in 0..max_turns {
            if self.is_over() {
                break;
            }
            self.advance();
        }
        self.state.result
    }

    /// Run the equalization step on its own.
    ///
    /// During a normal turn this runs right after both draw loops, when
    /// neither player can afford another card, so it rarely draws
    /// anything. Exposed for driving hand-built states.
    pub fn equalize(&mut self) -> Vec<BattleEvent> {
        if self.is_over() {
            return Vec::new();
        }
        self.equalization();
        self.drain()
    }

    /// Take events emitted outside a turn method, such as the `GameOver`
    /// from a direct `check_win_condition` call.
    pub fn take_events(&mut self) -> Vec<BattleEvent> {
        self.drain()
    }

    // === Phases ===

    fn run_phases(&mut self) {
        self.enter(TurnPhase::Draw);
        self.emit(BattleEvent::PhaseStarted {
            phase: TurnPhase::Draw,
        });
        for player in PlayerId::all() {
            self.draw_loop(player, usize::MAX, false);
        }

        self.enter(TurnPhase::Equalize);
        self.emit(BattleEvent::PhaseStarted {
            phase: TurnPhase::Equalize,
        });
        self.equalization();

        self.enter(TurnPhase::Attack);
        self.emit(BattleEvent::PhaseStarted {
            phase: TurnPhase::Attack,
        });
        self.attack_phase();
        self.end_turn();
    }

    /// Draw front cards while they are affordable and there is room.
    ///
    /// Stops at the first unaffordable card; cards are never skipped.
    fn draw_loop(&mut self, player: PlayerId, limit: usize, equalization: bool) -> usize {
        let mut drawn = 0;
        while drawn < limit {
            let side = &self.state.players[player];
            if side.field.is_full() {
                break;
            }
            let Some(name) = side.next_card() else {
                break;
            };
            let Some(cost) = self.catalog.cost_of(name) else {
                debug_assert!(false, "card {name:?} missing from catalog");
                break;
            };

            if !side.can_afford(cost) {
                let event = BattleEvent::DrawBlocked {
                    player,
                    card: name.to_string(),
                    cost,
                    mana: side.current_mana,
                };
                debug!(%player, card = name, cost, mana = side.current_mana, "cannot afford next card");
                self.emit(event);
                break;
            }

            self.draw_card(player, equalization);
            drawn += 1;
        }
        drawn
    }

    /// Pay for the front card, place it, and refresh that player's buffs.
    fn draw_card(&mut self, player: PlayerId, equalization: bool) {
        let id = self.state.alloc_unit_id();
        let side = &mut self.state.players[player];
        let Some(name) = side.take_next_card() else {
            return;
        };
        let Some(card) = self.catalog.get(&name) else {
            return;
        };

        side.spend_mana(card.cost);
        let unit = Unit::spawn(id, player, card, side.archetype);
        let Some(slot) = side.field.place(unit) else {
            debug_assert!(false, "drew onto a full field");
            return;
        };

        debug!(%player, card = %name, cost = card.cost, mana_left = side.current_mana, slot, "draw");
        let event = BattleEvent::CardDrawn {
            player,
            unit: id,
            card: name,
            cost: card.cost,
            mana_left: side.current_mana,
            slot,
            equalization,
        };
        self.emit(event);
        self.refresh_buffs(player);
    }

    fn refresh_buffs(&mut self, player: PlayerId) {
        let changes = recompute_buffs(&mut self.state.players[player].field);
        for change in &changes {
            debug!(%player, unit = %change.unit, tribe = %change.tribe, count = change.count, "buff");
            self.emit(BattleEvent::buff_changed(player, change));
        }
    }

    /// Let the side with fewer units draw toward, never past, the other.
    fn equalization(&mut self) {
        let counts = self.state.players.map(|_, p| p.cards_on_field());
        let (p1, p2) = (counts[PlayerId::P1], counts[PlayerId::P2]);
        if p1 == p2 {
            return;
        }

        let player = if p1 < p2 { PlayerId::P1 } else { PlayerId::P2 };
        let (own_count, opponent_count) = (counts[player], counts[player.opponent()]);
        let side = &self.state.players[player];
        let max_draws = side
            .field
            .free_slots()
            .min(side.deck.len())
            .min(opponent_count - own_count);
        if max_draws == 0 {
            return;
        }

        info!(%player, own_count, opponent_count, max_draws, "equalization");
        self.emit(BattleEvent::Equalization {
            player,
            own_count,
            opponent_count,
            max_draws,
        });
        self.draw_loop(player, max_draws, true);
    }

    fn attack_phase(&mut self) {
        for player in PlayerId::all() {
            let changes = reset_and_recompute(&mut self.state.players[player].field);
            for change in &changes {
                self.emit(BattleEvent::buff_changed(player, change));
            }
        }

        let queue = build_attack_queue(&self.state.players, &mut self.state.rng);
        trace!(order = ?queue.iter().map(|e| e.unit.raw()).collect::<Vec<_>>(), "attack queue");
        self.emit(BattleEvent::AttackQueueBuilt {
            order: queue.iter().map(|e| e.unit).collect(),
        });

        for entry in queue {
            let owner = entry.owner;
            let defender = owner.opponent();
            let Some(attacker) = self.state.players[owner].field.get(entry.unit).cloned() else {
                continue;
            };
            if !attacker.is_alive() {
                continue;
            }

            self.emit(BattleEvent::AttackDeclared {
                player: owner,
                unit: attacker.id,
            });

            let strategy = self.state.players[owner].strategy;
            let target = select_target(&attacker, strategy, self.state.players[defender].field.living())
                .map(|u| u.id);

            match target {
                Some(target) => {
                    self.emit(BattleEvent::TargetSelected {
                        player: owner,
                        attacker: attacker.id,
                        target,
                        strategy,
                    });
                    self.strike(&attacker, defender, target);
                }
                None => {
                    let damage = attacker.effective_attack;
                    let remaining_hp = self.state.players[defender].take_damage(damage);
                    debug!(attacker = %attacker.id, %defender, damage, remaining_hp, "direct damage");
                    self.emit(BattleEvent::DirectDamage {
                        attacker: attacker.id,
                        defender,
                        damage,
                        remaining_hp,
                    });
                    if self.state.players[defender].is_defeated() {
                        info!(player = %defender, "defeated");
                        self.emit(BattleEvent::PlayerDefeated { player: defender });
                        // The rest of the queue is forfeited.
                        break;
                    }
                }
            }

            if let Some(unit) = self.state.players[owner].field.get_mut(attacker.id) {
                unit.has_attacked = true;
            }
        }

        for player in PlayerId::all() {
            self.remove_dead(player);
        }
    }

    /// Hit a defending unit; a kill goes straight to the discard pile.
    fn strike(&mut self, attacker: &Unit, defender: PlayerId, target: UnitId) {
        let damage = attacker.effective_attack;
        let Some(unit) = self.state.players[defender].field.get_mut(target) else {
            return;
        };
        let died = unit.take_damage(damage);
        let (remaining_hp, max_hp) = (unit.current_hp, unit.max_hp);

        debug!(attacker = %attacker.id, target = %target, damage, remaining_hp, "attack");
        self.emit(BattleEvent::DamageApplied {
            attacker: attacker.id,
            target,
            damage,
            remaining_hp,
            max_hp,
        });

        if died {
            self.remove_dead(defender);
        }
    }

    fn remove_dead(&mut self, player: PlayerId) {
        let side = &mut self.state.players[player];
        let dead = side.field.remove_dead();
        if dead.is_empty() {
            return;
        }

        let order = side.field.layout();
        let died: Vec<_> = dead.iter().map(|u| (u.id, u.card_name.clone())).collect();
        side.bury(dead);

        for (unit, card) in died {
            debug!(%player, %unit, card = %card, "died");
            self.emit(BattleEvent::UnitDied { player, unit, card });
        }
        self.emit(BattleEvent::FieldCompacted { player, order });
    }

    fn end_turn(&mut self) {
        for (_, side) in self.state.players.iter() {
            debug_assert!(side.field.units().all(Unit::is_alive), "dead unit survived cleanup");
            debug_assert!(
                side.field.units().all(|u| u.current_hp <= u.max_hp),
                "unit hp above max"
            );
            debug_assert!(side.hp >= 0, "negative player hp");
        }

        let turn = self.state.turn_number;
        self.enter(TurnPhase::TurnComplete);
        self.emit(BattleEvent::TurnEnded { turn });
    }

    fn finish(&mut self, result: GameResult) {
        self.state.result = Some(result);
        self.enter(TurnPhase::GameOver);
        info!(%result, turn = self.state.turn_number, "game over");
        self.emit(BattleEvent::GameOver { result });
    }

    // === Plumbing ===

    fn enter(&mut self, phase: TurnPhase) {
        debug_assert!(
            self.state.phase.can_advance_to(phase),
            "illegal phase transition {:?} -> {:?}",
            self.state.phase,
            phase
        );
        self.state.phase = phase;
    }

    fn emit(&mut self, event: BattleEvent) {
        if let Some(sink) = self.sink.as_mut() {
            sink.emit(event.clone());
        }
        self.pending.push(event);
    }

    fn drain(&mut self) -> Vec<BattleEvent> {
        std::mem::take(&mut self.pending)
    }
}

impl std::fmt::Debug for Match {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Match")
            .field("config", &self.config)
            .field("state", &self.state)
            .field("has_sink", &self.sink.is_some())
            .finish_non_exhaustive()
    }
}
