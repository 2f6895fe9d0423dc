#![deny(
    unsafe_code,
    missing_docs,
    dead_code,
    unused_results,
    non_snake_case,
    unreachable_pub
)]

//! Turn controller that resolves one full turn per player input.
//!
//! A turn applies the player's intent, then lets every live hostile act in
//! turn order, stopping early as soon as the player dies. The controller never
//! blocks: adapters read input themselves and hand each token to
//! [`TurnController::submit_input`].

use roguelike_core::{Action, Actor, Command, Event, HostileId, HostileKind};
use roguelike_system_hostiles::HostileAi;
use roguelike_world::{self as world, query, World};

/// Phase of the turn state machine.
///
/// A turn resolves entirely inside [`TurnController::submit_input`], so callers
/// only ever observe [`TurnState::AwaitingInput`] or [`TurnState::GameOver`]
/// between calls. The resolving phases are internal.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TurnState {
    /// Waiting for the next input token.
    AwaitingInput,
    /// Internal: applying the player's move, attack or wait.
    ResolvingPlayerAction,
    /// Internal: letting each live hostile act in turn order.
    ResolvingHostileActions,
    /// Terminal: the player died or quit. No further input is accepted.
    GameOver,
}

/// Result of submitting one input token.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct TurnOutcome {
    /// Log lines produced while resolving the input, oldest first.
    pub log_lines: Vec<String>,
    /// Whether the session has reached its terminal state.
    pub game_over: bool,
    /// Whether the input consumed a turn and let hostiles act.
    pub consumed: bool,
}

/// Orchestrates player and hostile actions against the world.
#[derive(Debug)]
pub struct TurnController {
    state: TurnState,
    hostiles: HostileAi,
    commands: Vec<Command>,
    events: Vec<Event>,
}

impl Default for TurnController {
    fn default() -> Self {
        Self::new()
    }
}

impl TurnController {
    /// Creates a controller waiting for its first input.
    #[must_use]
    pub fn new() -> Self {
        Self {
            state: TurnState::AwaitingInput,
            hostiles: HostileAi::new(),
            commands: Vec::new(),
            events: Vec::new(),
        }
    }

    /// Current phase of the state machine.
    #[must_use]
    pub fn state(&self) -> TurnState {
        self.state
    }

    /// Reports whether the session has ended.
    #[must_use]
    pub fn is_game_over(&self) -> bool {
        self.state == TurnState::GameOver
    }

    /// Records the session start line.
    pub fn start(&mut self, world: &mut World) -> TurnOutcome {
        tracing::info!("session started");
        let mut outcome = TurnOutcome::default();
        self.record(world, "Game start.".to_owned(), &mut outcome);
        outcome.game_over = self.is_game_over();
        outcome
    }

    /// Resolves one input token into a full turn, or rejects it.
    ///
    /// `Invalid` leaves the world untouched and consumes no turn. `Quit` ends
    /// the session without letting hostiles act. Once the player is dead every
    /// input is rejected as game over.
    pub fn submit_input(&mut self, world: &mut World, action: Action) -> TurnOutcome {
        let mut outcome = TurnOutcome::default();

        if self.state == TurnState::GameOver {
            outcome.game_over = true;
            return outcome;
        }
        if query::player(world).is_dead() {
            self.finish("player already dead");
            outcome.game_over = true;
            return outcome;
        }

        match action {
            Action::Invalid => return outcome,
            Action::Quit => {
                self.finish("player quit");
                outcome.game_over = true;
                return outcome;
            }
            _ => {}
        }

        self.state = TurnState::ResolvingPlayerAction;
        self.resolve_player(world, action, &mut outcome);

        self.state = TurnState::ResolvingHostileActions;
        let player_died = self.resolve_hostiles(world, &mut outcome);

        if player_died {
            self.finish("player died");
        } else {
            self.state = TurnState::AwaitingInput;
        }
        outcome.consumed = true;
        outcome.game_over = self.is_game_over();
        outcome
    }

    fn resolve_player(&mut self, world: &mut World, action: Action, outcome: &mut TurnOutcome) {
        let Some(step) = action.step() else {
            let line = position_line(world, action);
            self.record(world, line, outcome);
            return;
        };

        self.events.clear();
        world::apply(
            world,
            Command::MoveActor {
                actor: Actor::Player,
                step,
            },
            &mut self.events,
        );
        if self
            .events
            .iter()
            .any(|event| matches!(event, Event::ActorMoved { .. }))
        {
            let line = position_line(world, action);
            self.record(world, line, outcome);
            return;
        }

        let target = query::player(world).position.offset(step);
        let Some(hostile) = query::hostile_at(world, target) else {
            return;
        };

        self.events.clear();
        world::apply(
            world,
            Command::Attack {
                attacker: Actor::Player,
                defender: Actor::Hostile(hostile.id),
            },
            &mut self.events,
        );
        let lines: Vec<String> = self
            .events
            .iter()
            .filter_map(|event| match event {
                Event::AttackResolved { damage, .. } => Some(format!(
                    "You attack the {} for {damage} damage.",
                    hostile.kind.display_name()
                )),
                Event::HostileDied { kind, .. } => {
                    Some(format!("The {} dies.", kind.display_name()))
                }
                _ => None,
            })
            .collect();
        for line in lines {
            self.record(world, line, outcome);
        }
    }

    /// Returns `true` when the player died during the hostile phase.
    fn resolve_hostiles(&mut self, world: &mut World, outcome: &mut TurnOutcome) -> bool {
        let order: Vec<HostileId> = query::hostile_view(world).iter().map(|h| h.id).collect();

        for id in order {
            let Some(hostile) = query::hostile(world, id) else {
                continue;
            };
            if hostile.is_dead() {
                continue;
            }

            let player = query::player(world);
            self.commands.clear();
            self.hostiles.handle(
                &hostile,
                &player,
                |cell| query::can_enter(world, cell),
                &mut self.commands,
            );

            self.events.clear();
            for command in self.commands.drain(..) {
                world::apply(world, command, &mut self.events);
            }

            let lines: Vec<String> = self
                .events
                .iter()
                .filter_map(|event| hostile_line(event, hostile.kind))
                .collect();
            for line in lines {
                self.record(world, line, outcome);
            }

            if query::player(world).is_dead() {
                self.record(world, "You die...".to_owned(), outcome);
                return true;
            }
        }

        false
    }

    fn record(&mut self, world: &mut World, line: String, outcome: &mut TurnOutcome) {
        outcome.log_lines.push(line.clone());
        self.events.clear();
        world::apply(world, Command::RecordLog { line }, &mut self.events);
    }

    fn finish(&mut self, reason: &str) {
        tracing::info!(reason, "game over");
        self.state = TurnState::GameOver;
    }
}

fn position_line(world: &World, action: Action) -> String {
    let position = query::player(world).position;
    format!(
        "Y:{} X:{} input:{action}",
        position.row(),
        position.column()
    )
}

fn hostile_line(event: &Event, kind: HostileKind) -> Option<String> {
    match event {
        Event::AttackResolved {
            attacker: Actor::Hostile(_),
            defender: Actor::Player,
            damage,
            ..
        } => Some(format!(
            "The {} hits you for {damage} damage.",
            kind.display_name()
        )),
        _ => None,
    }
}
