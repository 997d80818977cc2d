use std::collections::VecDeque;

/// Handle for one scheduled frame, stamped with the run that requested it.
///
/// Every `start()` begins a new generation; tickets from older generations are stale
/// and firing them does nothing.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct FrameTicket {
    pub generation: u64,
}

/// Animation-frame primitive: runs a callback before the next repaint.
pub trait FrameScheduler {
    fn request_frame(&mut self, ticket: FrameTicket);
}

/// FIFO of requested frames for hosts that pump the loop themselves.
#[derive(Debug, Default)]
pub struct QueueScheduler {
    queue: VecDeque<FrameTicket>,
}

impl QueueScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    /// Next frame to fire, oldest first.
    pub fn next_frame(&mut self) -> Option<FrameTicket> {
        self.queue.pop_front()
    }

    pub fn pending(&self) -> usize {
        self.queue.len()
    }

    pub fn is_idle(&self) -> bool {
        self.queue.is_empty()
    }
}

impl FrameScheduler for QueueScheduler {
    fn request_frame(&mut self, ticket: FrameTicket) {
        self.queue.push_back(ticket);
    }
}
