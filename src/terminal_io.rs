use std::collections::HashMap;
use std::io;
use std::time::Duration;

use crossterm::event::{self, Event, KeyCode, KeyEventKind, KeyModifiers};
use log::{error, info};

use crate::types::Controls;

// --- SimulatedInput for debugging ---
pub struct SimulatedInput {
    events: HashMap<u64, Vec<Event>>,
}

impl SimulatedInput {
    pub fn new(events: HashMap<u64, Vec<Event>>) -> Self {
        SimulatedInput { events }
    }

    /// Events scheduled for `tick`, removed from the script.
    pub fn take(&mut self, tick: u64) -> Vec<Event> {
        self.events.remove(&tick).unwrap_or_default()
    }
}

pub enum InputSource {
    Terminal,
    Simulated(SimulatedInput),
}

impl InputSource {
    /// Drain every pending event into one `Controls` snapshot.
    ///
    /// Later keys win per axis when opposite directions were queued.
    pub fn read_controls(&mut self, tick: u64) -> io::Result<Controls> {
        let mut controls = Controls::default();
        match self {
            InputSource::Terminal => {
                while event::poll(Duration::ZERO).map_err(|e| { error!("Failed to poll event: {}", e); e })? {
                    let event = event::read().map_err(|e| { error!("Failed to read event: {}", e); e })?;
                    apply_event(&mut controls, &event);
                }
            }
            InputSource::Simulated(sim_input) => {
                for event in sim_input.take(tick) {
                    apply_event(&mut controls, &event);
                }
            }
        }
        Ok(controls)
    }
}

fn apply_event(controls: &mut Controls, event: &Event) {
    let Event::Key(key_event) = event else {
        return;
    };
    if key_event.kind == KeyEventKind::Release {
        return;
    }
    match key_event.code {
        KeyCode::Up => controls.rows_direction = -1,
        KeyCode::Down => controls.rows_direction = 1,
        KeyCode::Left => controls.columns_direction = -1,
        KeyCode::Right => controls.columns_direction = 1,
        KeyCode::Char(' ') => controls.fire = true,
        KeyCode::Char('q') => {
            info!("Quit key pressed.");
            controls.quit = true;
        }
        KeyCode::Char('c') if key_event.modifiers.contains(KeyModifiers::CONTROL) => {
            info!("Interrupt received.");
            controls.quit = true;
        }
        _ => {}
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crossterm::event::KeyEvent;

    fn key(code: KeyCode) -> Event {
        Event::Key(code.into())
    }

    #[test]
    fn test_drains_all_events_for_tick() {
        let mut events = HashMap::new();
        events.insert(3, vec![key(KeyCode::Up), key(KeyCode::Right), key(KeyCode::Char(' '))]);
        let mut input = InputSource::Simulated(SimulatedInput::new(events));

        assert_eq!(input.read_controls(2).unwrap(), Controls::default());
        let controls = input.read_controls(3).unwrap();
        assert_eq!(controls.rows_direction, -1);
        assert_eq!(controls.columns_direction, 1);
        assert!(controls.fire);
        // Drained
        assert_eq!(input.read_controls(3).unwrap(), Controls::default());
    }

    #[test]
    fn test_last_key_wins_per_axis() {
        let mut events = HashMap::new();
        events.insert(0, vec![key(KeyCode::Up), key(KeyCode::Left), key(KeyCode::Down)]);
        let mut input = InputSource::Simulated(SimulatedInput::new(events));

        let controls = input.read_controls(0).unwrap();
        assert_eq!(controls.rows_direction, 1);
        assert_eq!(controls.columns_direction, -1);
        assert!(!controls.fire);
    }

    #[test]
    fn test_quit_keys() {
        let mut events = HashMap::new();
        events.insert(0, vec![key(KeyCode::Char('q'))]);
        events.insert(1, vec![Event::Key(KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL))]);
        events.insert(2, vec![key(KeyCode::Char('c'))]);
        let mut input = InputSource::Simulated(SimulatedInput::new(events));

        assert!(input.read_controls(0).unwrap().quit);
        assert!(input.read_controls(1).unwrap().quit);
        assert!(!input.read_controls(2).unwrap().quit);
    }
}
