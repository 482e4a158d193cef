use crossbeam_channel::{Receiver, Sender};

use crate::config::settings::FilterSettings;
use crate::pipeline::frame_scheduler::Mode;

/// Commands another thread can send to a running pipeline.
///
/// Events are drained once per frame, so a burst of settings changes
/// collapses to the last one seen before the next frame is processed.
#[derive(Clone, Debug)]
pub enum ControlEvent {
    SettingsChanged(FilterSettings),
    ModeChanged(Mode),
    Stop,
}

/// Creates an unbounded control channel for a pipeline run.
pub fn control_channel() -> (Sender<ControlEvent>, Receiver<ControlEvent>) {
    crossbeam_channel::unbounded()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_events_arrive_in_order() {
        let (tx, rx) = control_channel();
        tx.send(ControlEvent::ModeChanged(Mode::Rotoscope)).unwrap();
        tx.send(ControlEvent::Stop).unwrap();

        assert!(matches!(
            rx.try_recv(),
            Ok(ControlEvent::ModeChanged(Mode::Rotoscope))
        ));
        assert!(matches!(rx.try_recv(), Ok(ControlEvent::Stop)));
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_sender_clones_feed_same_receiver() {
        let (tx, rx) = control_channel();
        let tx2 = tx.clone();
        tx2.send(ControlEvent::SettingsChanged(FilterSettings::default()))
            .unwrap();
        assert!(matches!(
            rx.try_recv(),
            Ok(ControlEvent::SettingsChanged(_))
        ));
    }
}
