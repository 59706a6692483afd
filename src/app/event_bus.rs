use std::time::Duration;

use crossterm::event::EventStream;
use futures_util::StreamExt;
use tokio::sync::mpsc::{UnboundedReceiver, UnboundedSender, unbounded_channel};
use tokio::task::JoinHandle;
use tokio::time;

use crate::event::DomainEvent;

pub(crate) struct EventBusRuntime {
    tasks: Vec<JoinHandle<()>>,
}

impl EventBusRuntime {
    pub(crate) fn spawn() -> (
        UnboundedSender<DomainEvent>,
        UnboundedReceiver<DomainEvent>,
        Self,
    ) {
        let (tx, rx) = unbounded_channel();
        let tasks = vec![spawn_input_task(tx.clone())];
        (tx, rx, Self { tasks })
    }

    pub(crate) fn shutdown(&mut self) {
        for task in self.tasks.drain(..) {
            task.abort();
        }
    }
}

fn spawn_input_task(tx: UnboundedSender<DomainEvent>) -> JoinHandle<()> {
    tokio::spawn(async move {
        let mut input_stream = EventStream::new();
        while let Some(event) = input_stream.next().await {
            let loop_event = match event {
                Ok(event) => DomainEvent::Input(event),
                Err(err) => DomainEvent::InputError(err.to_string()),
            };
            if tx.send(loop_event).is_err() {
                return;
            }
        }
    })
}

/// One-shot timer resolving a transition's fixed delay. The receiver
/// matches the generation against the live transition, so a timer that
/// fires late is simply ignored.
pub(crate) fn spawn_transition_timer(
    tx: UnboundedSender<DomainEvent>,
    generation: u64,
    delay: Duration,
) -> JoinHandle<()> {
    tokio::spawn(async move {
        time::sleep(delay).await;
        let _ = tx.send(DomainEvent::TransitionElapsed { generation });
    })
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::sync::mpsc::unbounded_channel;

    use crate::event::DomainEvent;

    use super::spawn_transition_timer;

    #[tokio::test]
    async fn transition_timer_fires_once_with_its_generation() {
        let (tx, mut rx) = unbounded_channel();

        spawn_transition_timer(tx, 7, Duration::from_millis(10));

        match rx.recv().await {
            Some(DomainEvent::TransitionElapsed { generation }) => assert_eq!(generation, 7),
            other => panic!("unexpected event: {other:?}"),
        }
        // The timer's sender is gone after the single shot.
        assert!(rx.recv().await.is_none());
    }
}
