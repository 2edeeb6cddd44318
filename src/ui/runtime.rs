use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread::{self, JoinHandle};
use std::time::Duration;

use anyhow::{Result, anyhow};
use log::debug;
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::{App, ViewOutcome};
use crate::view::TabularView;

const POLL_INTERVAL: Duration = Duration::from_millis(50);
const FRAME_INTERVAL: Duration = Duration::from_millis(16);

/// Construct an [`App`] for the provided view and run it to completion.
pub fn run(view: TabularView) -> Result<ViewOutcome> {
    let mut app = App::new(view);
    app.run()
}

/// Reads terminal events on a helper thread and forwards them over a channel.
struct InputPump {
    events: mpsc::Receiver<Event>,
    running: Arc<AtomicBool>,
    handle: JoinHandle<Result<()>>,
}

impl InputPump {
    fn spawn() -> Self {
        let (tx, events) = mpsc::channel();
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let handle = thread::spawn(move || -> Result<()> {
            while flag.load(Ordering::Relaxed) {
                if event::poll(POLL_INTERVAL)? && tx.send(event::read()?).is_err() {
                    break;
                }
            }
            Ok(())
        });

        Self {
            events,
            running,
            handle,
        }
    }

    /// Everything received since the last call.
    fn drain(&self) -> Result<Vec<Event>> {
        let mut pending = Vec::new();
        loop {
            match self.events.try_recv() {
                Ok(event) => pending.push(event),
                Err(mpsc::TryRecvError::Empty) => return Ok(pending),
                Err(mpsc::TryRecvError::Disconnected) => {
                    return Err(anyhow!("input event channel disconnected"));
                }
            }
        }
    }

    fn stop(self) -> Result<()> {
        self.running.store(false, Ordering::Relaxed);
        match self.handle.join() {
            Ok(result) => result,
            Err(panic) => std::panic::resume_unwind(panic),
        }
    }
}

impl App {
    /// Pump the terminal event loop until the user accepts or cancels.
    pub fn run(&mut self) -> Result<ViewOutcome> {
        let mut terminal = ratatui::init();
        let input = InputPump::spawn();

        let result = (|| -> Result<ViewOutcome> {
            terminal.clear()?;
            let mut dirty = true;
            loop {
                if dirty {
                    terminal.draw(|frame| self.draw(frame))?;
                    dirty = false;
                }

                for event in input.drain()? {
                    match event {
                        Event::Key(key) if key.kind == KeyEventKind::Press => {
                            dirty = true;
                            if let Some(outcome) = self.handle_key(key) {
                                return Ok(outcome);
                            }
                        }
                        Event::Resize(_, _) => dirty = true,
                        _ => {}
                    }
                }

                thread::sleep(FRAME_INTERVAL);
            }
        })();

        ratatui::restore();
        input.stop()?;

        if let Ok(outcome) = &result {
            debug!(
                "session finished (accepted: {}, selected: {})",
                outcome.accepted,
                outcome.selected.len()
            );
        }
        result
    }
}
