use std::sync::mpsc::{self, Receiver, RecvError, SyncSender, TryRecvError};
use std::thread;

use log::{debug, info, warn};
use serde::{Deserialize, Serialize};

use crate::generator::{Puzzle, PuzzleGenerator};
use crate::solver::PuzzleSolver;

/// A puzzle together with its enumerated solutions
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PreparedPuzzle {
    pub puzzle: Puzzle,
    pub solutions: Vec<String>,
}

impl PreparedPuzzle {
    /// Enumerate solutions for `puzzle`; `None` when there are none.
    pub fn prepare(puzzle: Puzzle, solver: &PuzzleSolver) -> Option<Self> {
        let solutions = solver.solve(&puzzle.cards, i64::from(puzzle.goal));
        if solutions.is_empty() {
            warn!(
                "Dropping puzzle {:?} -> {}: no solutions enumerated",
                puzzle.cards, puzzle.goal
            );
            return None;
        }
        Some(Self { puzzle, solutions })
    }
}

/// Keeps a bounded queue of prepared puzzles filled from a producer thread.
///
/// Dropping the worker closes the queue; the producer notices on its next
/// send and exits.
pub struct PuzzleWorker {
    receiver: Receiver<PreparedPuzzle>,
}

impl PuzzleWorker {
    pub fn spawn(capacity: usize) -> Self {
        Self::spawn_with(PuzzleGenerator::default(), capacity)
    }

    pub fn spawn_with(generator: PuzzleGenerator, capacity: usize) -> Self {
        let (sender, receiver) = mpsc::sync_channel(capacity);
        thread::spawn(move || produce(generator, sender));
        info!("Puzzle worker started with queue capacity {}", capacity);
        Self { receiver }
    }

    /// A prepared puzzle if one is already queued
    pub fn try_next(&self) -> Option<PreparedPuzzle> {
        match self.receiver.try_recv() {
            Ok(prepared) => Some(prepared),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                warn!("Puzzle worker has stopped");
                None
            }
        }
    }

    /// Block until the next prepared puzzle is ready.
    pub fn next(&self) -> Result<PreparedPuzzle, RecvError> {
        self.receiver.recv()
    }
}

fn produce(generator: PuzzleGenerator, sender: SyncSender<PreparedPuzzle>) {
    let solver = PuzzleSolver::new();
    loop {
        let Some(prepared) = PreparedPuzzle::prepare(generator.generate(), &solver) else {
            continue;
        };
        // A full queue blocks here; a dropped worker wakes the send with an error.
        if sender.send(prepared).is_err() {
            debug!("Puzzle queue closed, producer exiting");
            return;
        }
    }
}

/// Enumerate one puzzle on the rayon pool. Dropping the receiver discards
/// the result once it arrives.
pub fn solve_in_background(cards: Vec<u32>, goal: i64) -> Receiver<Vec<String>> {
    let (sender, receiver) = mpsc::channel();
    rayon::spawn(move || {
        let solutions = PuzzleSolver::new().solve(&cards, goal);
        if sender.send(solutions).is_err() {
            debug!("Result for {:?} -> {} was superseded", cards, goal);
        }
    });
    receiver
}
