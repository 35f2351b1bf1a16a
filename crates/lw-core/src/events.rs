use tokio::sync::mpsc;

/// Request for the coordinator to re-evaluate. Carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Signal;

pub type EventSender = mpsc::UnboundedSender<Signal>;
pub type EventReceiver = mpsc::UnboundedReceiver<Signal>;

/// Create the multi-producer channel feeding [`crate::Coordinator::listen`].
pub fn channel() -> (EventSender, EventReceiver) {
    mpsc::unbounded_channel()
}
