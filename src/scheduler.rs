use log::{debug, error};

use crate::error::GameError;
use crate::game::World;

/// Outcome of advancing an actor by one tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Step {
    Continue,
    Done,
}

/// A unit of per-tick behavior driven by the [`Scheduler`].
pub trait Actor {
    fn name(&self) -> &'static str;

    /// Do one tick worth of work. Returning `Step::Done` removes the actor
    /// at the end of the current tick.
    fn step(&mut self, world: &mut World) -> Result<Step, GameError>;
}

/// Ticks left before an actor acts again.
///
/// After `set(n)` the current step counts as the first of the `n` ticks,
/// so the actor acts again exactly `n` steps later. `set(0)` lets it act
/// again within the same step.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Sleep(u32);

impl Sleep {
    pub fn set(&mut self, ticks: u32) {
        self.0 = ticks;
    }

    /// Consume one tick; true while still sleeping.
    pub fn tick(&mut self) -> bool {
        if self.0 > 0 {
            self.0 -= 1;
            true
        } else {
            false
        }
    }
}

struct Slot {
    actor: Box<dyn Actor>,
    done: bool,
}

impl Slot {
    fn new(actor: Box<dyn Actor>) -> Self {
        Slot { actor, done: false }
    }
}

/// What one tick did, for logging.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct TickReport {
    pub steps: usize,
    pub spawned: usize,
    pub finished: usize,
}

/// Drives every live actor one step per tick, in registration order.
#[derive(Default)]
pub struct Scheduler {
    slots: Vec<Slot>,
    ticks: u64,
}

impl Scheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add(&mut self, actor: Box<dyn Actor>) {
        self.slots.push(Slot::new(actor));
    }

    #[cfg(test)]
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    #[cfg(test)]
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn ticks(&self) -> u64 {
        self.ticks
    }

    #[cfg(test)]
    pub fn names(&self) -> Vec<&'static str> {
        self.slots.iter().map(|slot| slot.actor.name()).collect()
    }

    /// Run one full pass over the actors and refresh the canvas.
    ///
    /// Actors spawned during the pass are appended and stepped in the same
    /// pass. Finished actors are pruned after the pass, so none is skipped
    /// or visited twice.
    pub fn tick(&mut self, world: &mut World) -> Result<TickReport, GameError> {
        let mut report = TickReport::default();
        let tick = self.ticks;

        let mut index = 0;
        while index < self.slots.len() {
            let slot = &mut self.slots[index];
            let step = slot.actor.step(world).map_err(|e| {
                error!("Actor {} failed on tick {}: {}", slot.actor.name(), tick, e);
                e
            })?;
            report.steps += 1;
            if step == Step::Done {
                debug!("Actor {} finished on tick {}.", slot.actor.name(), tick);
                slot.done = true;
                report.finished += 1;
            }

            let spawned = world.take_spawned();
            report.spawned += spawned.len();
            self.slots.extend(spawned.into_iter().map(Slot::new));
            index += 1;
        }
        self.slots.retain(|slot| !slot.done);

        world.canvas.refresh().map_err(|e| { error!("Failed to refresh canvas: {}", e); e })?;
        self.ticks += 1;
        Ok(report)
    }
}
