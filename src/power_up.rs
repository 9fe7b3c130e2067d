//! Timed power-up: enlarges the dragonfly's hitbox and makes bats edible.

use crate::settings::POWER_UP_DURATION_MS;

#[derive(Clone, Copy, Debug, PartialEq, Default)]
pub enum PowerUp {
    #[default]
    Inactive,
    Active {
        started_at: u64,
    },
}

impl PowerUp {
    pub fn is_active(&self) -> bool {
        matches!(self, PowerUp::Active { .. })
    }

    /// Start the power-up at `now`.
    pub fn activate(now: u64) -> PowerUp {
        PowerUp::Active { started_at: now }
    }

    /// Level-triggered expiry check, run once per tick before anything else.
    pub fn update(self, now: u64) -> PowerUp {
        match self {
            PowerUp::Active { started_at }
                if now.saturating_sub(started_at) >= POWER_UP_DURATION_MS =>
            {
                PowerUp::Inactive
            }
            other => other,
        }
    }

    /// Milliseconds left, or 0 when inactive / expired.
    pub fn remaining_ms(&self, now: u64) -> u64 {
        match self {
            PowerUp::Active { started_at } => {
                POWER_UP_DURATION_MS.saturating_sub(now.saturating_sub(*started_at))
            }
            PowerUp::Inactive => 0,
        }
    }

    /// Whole seconds left (floored), as shown on the HUD countdown.
    pub fn remaining_secs(&self, now: u64) -> u64 {
        self.remaining_ms(now) / 1000
    }
}
