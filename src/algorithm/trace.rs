use num_traits::Zero;
use serde::{Deserialize, Serialize};
use std::fmt::Debug;

/// Read-only view of the engine's state, handed to observers after
/// initialization and after every settlement
#[derive(Debug, Clone, Copy)]
pub struct StateView<'a, W>
where
    W: Copy + Ord + Zero + Debug,
{
    /// Current tentative distances; `None` means no known path yet
    pub distances: &'a [Option<W>],

    /// Which vertices have been settled so far
    pub visited: &'a [bool],
}

/// Observer of the engine's state transitions
///
/// Called once with the initial state (source at distance zero, nothing
/// visited) and once after each vertex settles. Stale heap entries are
/// discarded without a callback.
pub trait ProgressObserver<W>
where
    W: Copy + Ord + Zero + Debug,
{
    fn on_state(&mut self, state: StateView<'_, W>);
}

/// Observer that ignores every state
#[derive(Debug, Default)]
pub struct NullObserver;

impl<W> ProgressObserver<W> for NullObserver
where
    W: Copy + Ord + Zero + Debug,
{
    fn on_state(&mut self, _state: StateView<'_, W>) {}
}

/// One recorded state of the engine
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraceStep<W>
where
    W: Copy + Ord + Zero + Debug,
{
    pub distances: Vec<Option<W>>,
    pub visited: Vec<bool>,
}

/// A full recorded run: the initial state, one step per settlement, and the
/// final state after unreached vertices are force-settled
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Trace<W>
where
    W: Copy + Ord + Zero + Debug,
{
    pub steps: Vec<TraceStep<W>>,
}

/// Observer that copies every state into an owned [`Trace`]
#[derive(Debug, Default)]
pub struct TraceRecorder<W>
where
    W: Copy + Ord + Zero + Debug,
{
    steps: Vec<TraceStep<W>>,
}

impl<W> TraceRecorder<W>
where
    W: Copy + Ord + Zero + Debug,
{
    pub fn new() -> Self {
        TraceRecorder { steps: Vec::new() }
    }

    /// Consumes the recorder and returns the recorded trace
    pub fn into_trace(self) -> Trace<W> {
        Trace { steps: self.steps }
    }

    pub fn steps(&self) -> &[TraceStep<W>] {
        &self.steps
    }
}

impl<W> ProgressObserver<W> for TraceRecorder<W>
where
    W: Copy + Ord + Zero + Debug,
{
    fn on_state(&mut self, state: StateView<'_, W>) {
        self.steps.push(TraceStep {
            distances: state.distances.to_vec(),
            visited: state.visited.to_vec(),
        });
    }
}
