use roguelike_core::{
    Health, HostileId, HostileKind, HostileSnapshot, PlayerSnapshot, Position,
    PLAYER_MAX_DAMAGE_ROLL,
};

/// Position and hit points shared by every actor.
#[derive(Clone, Debug)]
pub(crate) struct Body {
    pub(crate) position: Position,
    health: Health,
    max_health: Health,
}

impl Body {
    pub(crate) fn new(position: Position, max_health: Health) -> Self {
        Self {
            position,
            health: max_health,
            max_health,
        }
    }

    pub(crate) fn health(&self) -> Health {
        self.health
    }

    pub(crate) fn max_health(&self) -> Health {
        self.max_health
    }

    pub(crate) fn is_dead(&self) -> bool {
        self.health.is_zero()
    }

    /// Subtracts damage, clamping at zero. Health is never raised.
    pub(crate) fn take_damage(&mut self, amount: u32) -> Health {
        self.health = self.health.saturating_sub(amount);
        self.health
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Player {
    pub(crate) body: Body,
}

impl Player {
    pub(crate) fn new(body: Body) -> Self {
        Self { body }
    }

    pub(crate) fn max_damage_roll(&self) -> u32 {
        PLAYER_MAX_DAMAGE_ROLL
    }

    pub(crate) fn snapshot(&self) -> PlayerSnapshot {
        PlayerSnapshot {
            position: self.body.position,
            health: self.body.health(),
            max_health: self.body.max_health(),
        }
    }
}

#[derive(Clone, Debug)]
pub(crate) struct Hostile {
    pub(crate) id: HostileId,
    pub(crate) kind: HostileKind,
    pub(crate) body: Body,
}

impl Hostile {
    pub(crate) fn new(id: HostileId, kind: HostileKind, body: Body) -> Self {
        Self { id, kind, body }
    }

    pub(crate) fn snapshot(&self) -> HostileSnapshot {
        HostileSnapshot {
            id: self.id,
            kind: self.kind,
            position: self.body.position,
            health: self.body.health(),
            max_health: self.body.max_health(),
        }
    }
}
