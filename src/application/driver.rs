use std::time::Instant;

use super::{RenderSink, Simulation, StepClock, Tint};

/// Driver lifecycle. `Stopped` is terminal.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum RunState {
    Running,
    Stopped,
}

/// Fixed-timestep loop body: poll input, render, maybe step.
///
/// The driver knows nothing about windows or frame pacing; the caller
/// runs `iterate` once per frame and throttles between calls.
pub struct Driver {
    simulation: Simulation,
    clock: StepClock,
    state: RunState,
    cell_size: f32,
    tint: Tint,
    live_cells: Vec<(usize, usize)>,
}

impl Driver {
    pub fn new(simulation: Simulation, clock: StepClock, cell_size: f32, tint: Tint) -> Self {
        Self {
            simulation,
            clock,
            state: RunState::Running,
            cell_size,
            tint,
            live_cells: Vec::new(),
        }
    }

    /// Run one loop iteration at time `now` and return the resulting state
    pub fn iterate(&mut self, sink: &mut dyn RenderSink, now: Instant) -> RunState {
        if self.state == RunState::Stopped {
            return RunState::Stopped;
        }

        if sink.poll_cancel() {
            log::info!("Quit requested at generation {}", self.simulation.generation());
            self.state = RunState::Stopped;
            return RunState::Stopped;
        }

        self.live_cells.clear();
        self.live_cells.extend(self.simulation.grid().live_cells());
        sink.present(&self.live_cells, self.cell_size, self.tint);

        if self.clock.poll(now) {
            self.simulation.step();
            log::trace!(
                "Generation {}: {} live cells",
                self.simulation.generation(),
                self.simulation.grid().population()
            );
        }

        self.state
    }

    pub fn state(&self) -> RunState {
        self.state
    }

    pub fn simulation(&self) -> &Simulation {
        &self.simulation
    }
}
