use std::collections::VecDeque;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, mpsc};
use std::thread;
use std::time::Duration;

use anyhow::{Result, anyhow};
use ratatui::crossterm::event::{self, Event, KeyEventKind};

use super::App;
use super::config::UiConfig;
use super::state::ScreenOutcome;

/// Construct an [`App`] from `config` and run it until the user leaves.
pub fn run(config: UiConfig) -> Result<ScreenOutcome> {
    let mut app = App::new(config);
    app.run()
}

impl App<'_> {
    /// Pump the terminal event loop until the user exits.
    pub fn run(&mut self) -> Result<ScreenOutcome> {
        let mut terminal = ratatui::init();
        terminal.clear()?;
        log::info!("search screen started");

        let (event_tx, event_rx) = mpsc::channel();
        let event_loop_running = Arc::new(AtomicBool::new(true));
        let event_loop_flag = Arc::clone(&event_loop_running);

        let event_thread = thread::spawn(move || -> Result<()> {
            while event_loop_flag.load(Ordering::Relaxed) {
                if event::poll(Duration::from_millis(50))? {
                    let event = event::read()?;
                    if event_tx.send(event).is_err() {
                        break;
                    }
                }
            }
            Ok(())
        });

        let mut pending_events = VecDeque::new();

        let result: Result<ScreenOutcome> = 'event_loop: loop {
            self.tick();

            loop {
                match event_rx.try_recv() {
                    Ok(Event::Resize(_, _)) => {}
                    Ok(event) => pending_events.push_back(event),
                    Err(mpsc::TryRecvError::Empty) => break,
                    Err(mpsc::TryRecvError::Disconnected) => {
                        break 'event_loop Err(anyhow!("input event channel disconnected"));
                    }
                }
            }

            if let Err(err) = terminal.draw(|frame| self.draw(frame)) {
                break Err(err.into());
            }

            let mut maybe_outcome = None;
            while let Some(event) = pending_events.pop_front() {
                if let Event::Key(key) = event
                    && key.kind == KeyEventKind::Press
                    && let Some(outcome) = self.handle_key(key)
                {
                    maybe_outcome = Some(outcome);
                    break;
                }
            }

            if let Some(outcome) = maybe_outcome {
                break Ok(outcome);
            }

            thread::sleep(Duration::from_millis(16));
        };

        ratatui::restore();

        event_loop_running.store(false, Ordering::Relaxed);
        match event_thread.join() {
            Ok(join_result) => join_result?,
            Err(err) => std::panic::resume_unwind(err),
        }

        result
    }

    /// Advance everything that changes without user input.
    pub(crate) fn tick(&mut self) {
        self.pump_search_results();
        if self.screen.is_searching() {
            self.throbber_state.calc_next();
        }
    }
}

#[cfg(test)]
mod tests {
    use std::time::Instant;

    use ratatui::crossterm::event::{KeyCode, KeyEvent, KeyModifiers};
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;
    use crate::locale::Locale;
    use crate::ui::Focus;

    fn render(app: &mut App, width: u16, height: u16) -> String {
        let mut terminal = Terminal::new(TestBackend::new(width, height)).unwrap();
        terminal.draw(|frame| app.draw(frame)).unwrap();
        terminal.backend().to_string()
    }

    fn wait_for_completion(app: &mut App) {
        let deadline = Instant::now() + Duration::from_secs(2);
        while app.screen.is_searching() && Instant::now() < deadline {
            thread::sleep(Duration::from_millis(5));
            app.tick();
        }
    }

    fn app(phone: &str) -> App<'static> {
        App::new(UiConfig {
            locale: Locale::En,
            search_delay: Duration::from_millis(20),
            initial_phone: phone.to_string(),
            ..UiConfig::default()
        })
    }

    #[test]
    fn initial_screen_shows_search_and_history_only() {
        let mut app = app("");
        let view = render(&mut app, 100, 40);

        assert!(view.contains("Search by phone number"));
        assert!(view.contains("+7 (999) 123-45-67"));
        assert!(view.contains("Search history"));
        assert!(view.contains("+7 (905) 678-90-12"));
        assert!(view.contains("Find"));
        assert!(!view.contains("Search results"));
        assert!(!view.contains("Total mentions"));
    }

    #[test]
    fn completed_search_renders_summary_and_results() {
        let mut app = app("+7 (900) 000-00-00");
        app.handle_key(KeyEvent::new(KeyCode::Enter, KeyModifiers::NONE));
        assert!(app.screen.is_searching());

        let searching = render(&mut app, 100, 48);
        assert!(searching.contains("Searching..."));

        wait_for_completion(&mut app);
        assert!(!app.screen.is_searching());

        let view = render(&mut app, 100, 48);
        assert!(view.contains("Groups found"));
        assert!(view.contains("322"));
        assert!(view.contains("2 hours ago"));
        assert!(view.contains("Python Developers"));
        assert!(view.contains("Channel"));
        assert!(view.contains("15,432 members"));
        assert!(view.contains("just now"));
        assert_eq!(app.screen.search_history().len(), 4);
    }

    #[test]
    fn standard_terminal_reaches_every_result_and_history_row() {
        let press = |code| KeyEvent::new(code, KeyModifiers::NONE);
        let mut app = app("+7 (900) 000-00-00");
        app.request_search();
        wait_for_completion(&mut app);

        let first = render(&mut app, 80, 24);
        assert!(first.contains("Python Developers"));
        assert!(!first.contains("Private chat with Ivan"));

        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::Results);
        let mut results_seen = first;
        for _ in 0..4 {
            app.handle_key(press(KeyCode::Down));
            results_seen.push_str(&render(&mut app, 80, 24));
        }
        for name in [
            "Python Developers",
            "Telegram API Community",
            "Bots & Automation",
            "IT Jobs Moscow",
            "Private chat with Ivan",
        ] {
            assert!(results_seen.contains(name), "{name} was never drawn");
        }

        app.handle_key(press(KeyCode::Tab));
        assert_eq!(app.focus(), Focus::History);
        let mut history_seen = render(&mut app, 80, 24);
        for _ in 0..3 {
            app.handle_key(press(KeyCode::Down));
            history_seen.push_str(&render(&mut app, 80, 24));
        }
        assert!(history_seen.contains("just now"));
        for phone in ["+7 (999) 123-45-67", "+7 (912) 345-67-89", "+7 (905) 678-90-12"] {
            assert!(history_seen.contains(phone), "{phone} was never drawn");
        }
    }

    #[test]
    fn tiny_terminal_does_not_panic() {
        let mut app = app("+7 1");
        render(&mut app, 10, 4);
        render(&mut app, 1, 1);
    }
}
