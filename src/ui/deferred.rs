//! One-shot deferred move for the automated player
//!
//! The move is chosen on a worker thread from a snapshot of the board and is
//! delivered no earlier than the think-time floor. Dropping the handle (or
//! calling [`DeferredMove::cancel`]) cancels it: a cancelled task never
//! delivers.

use std::sync::mpsc::{channel, Receiver, RecvTimeoutError, Sender, TryRecvError};
use std::thread;
use std::time::{Duration, Instant};

use crate::board::{Board, Pos, Stone};
use crate::policy::MovePolicy;

/// Result sent back by the worker
pub struct AiMove {
    /// Chosen move, `None` when the color had no legal move
    pub pos: Option<Pos>,
    /// The policy, handed back for the next turn
    pub policy: Box<dyn MovePolicy>,
    /// Time from scheduling to delivery
    pub elapsed: Duration,
}

pub enum DeferredPoll {
    Pending,
    Ready(AiMove),
    /// The worker went away without answering
    Lost,
}

/// Handle to a pending automated move
pub struct DeferredMove {
    receiver: Receiver<AiMove>,
    // Dropping this wakes the worker and tells it to give up
    _cancel: Sender<()>,
    start_time: Instant,
    color: Stone,
}

impl DeferredMove {
    /// Schedule `policy` to pick a move for `color` after at least `delay`
    pub fn spawn(
        board: Board,
        color: Stone,
        mut policy: Box<dyn MovePolicy>,
        delay: Duration,
    ) -> Self {
        let (tx, rx) = channel();
        let (cancel_tx, cancel_rx) = channel::<()>();
        let start_time = Instant::now();

        thread::spawn(move || {
            let pos = policy.select_move(&board, color);

            let remaining = delay.saturating_sub(start_time.elapsed());
            match cancel_rx.recv_timeout(remaining) {
                Err(RecvTimeoutError::Timeout) => {}
                // Cancelled
                Ok(()) | Err(RecvTimeoutError::Disconnected) => return,
            }

            let _ = tx.send(AiMove {
                pos,
                policy,
                elapsed: start_time.elapsed(),
            });
        });

        Self {
            receiver: rx,
            _cancel: cancel_tx,
            start_time,
            color,
        }
    }

    /// Non-blocking check for the result
    pub fn poll(&self) -> DeferredPoll {
        match self.receiver.try_recv() {
            Ok(ai_move) => DeferredPoll::Ready(ai_move),
            Err(TryRecvError::Empty) => DeferredPoll::Pending,
            Err(TryRecvError::Disconnected) => DeferredPoll::Lost,
        }
    }

    pub fn cancel(self) {
        log::debug!("cancelling pending move for {}", self.color);
    }

    pub fn elapsed(&self) -> Duration {
        self.start_time.elapsed()
    }

    pub fn color(&self) -> Stone {
        self.color
    }
}
