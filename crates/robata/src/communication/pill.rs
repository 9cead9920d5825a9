use std::thread;

/// # Pill
///
/// A panic propagation guard moved into the batch worker task.
///
/// If the worker unwinds, the `Pill` is dropped during the panic and
/// re-panics with a recognizable message, so a worker death is loud rather
/// than leaving the batcher silently idle.
pub struct Pill {}

impl Pill {
    pub fn new() -> Self {
        Self {}
    }
}

impl Drop for Pill {
    fn drop(&mut self) {
        if thread::panicking() {
            panic!("batch worker panicked - propagating panic");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::mpsc;

    #[test]
    fn test_pill_silent_on_normal_drop() {
        {
            let _pill = Pill::new();
        }
        // Reaching here means the drop did not panic.
    }

    #[test]
    fn test_pill_survives_channel_handoff() {
        let (sender, receiver) = mpsc::channel();

        let handle = thread::spawn(move || {
            let pill = Pill::new();
            sender.send(pill).unwrap();
            panic!("intentional panic in worker thread");
        });

        // The pill escaped before the panic, so it drops cleanly here even
        // though its origin thread died panicking.
        let pill = receiver.recv().unwrap();
        assert!(handle.join().is_err());
        drop(pill);
    }
}
