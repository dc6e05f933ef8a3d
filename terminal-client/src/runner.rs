use std::io::Write;
use std::time::Duration;

use tictactoe_engine::config::{ConfigContentProvider, ConfigManager, YamlConfigSerializer};
use tictactoe_engine::{Session, SessionError, SessionSettings, Transition, log};
use tokio::io::{AsyncBufReadExt, BufReader};
use tokio::sync::mpsc;
use tokio::time::Instant;

use crate::command::{ClientCommand, HELP_TEXT, parse_command};
use crate::config::SavedState;
use crate::render::render;

enum Control {
    Continue,
    ScheduleAi,
    Quit,
}

/// Owns the session and wires it to the terminal.
pub struct GameRunner<P, W>
where
    P: ConfigContentProvider,
    W: Write,
{
    session: Session,
    saved: SavedState,
    config_manager: ConfigManager<P, SavedState, YamlConfigSerializer>,
    out: W,
}

impl<P, W> GameRunner<P, W>
where
    P: ConfigContentProvider,
    W: Write,
{
    pub fn new(
        saved: SavedState,
        config_manager: ConfigManager<P, SavedState, YamlConfigSerializer>,
        out: W,
    ) -> Self {
        Self {
            session: Session::with_scores(saved.scores()),
            saved,
            config_manager,
            out,
        }
    }

    #[cfg(test)]
    pub fn session(&self) -> &Session {
        &self.session
    }

    #[cfg(test)]
    pub fn into_output(self) -> W {
        self.out
    }

    fn ai_delay(&self) -> Duration {
        Duration::from_millis(self.saved.ai_delay_ms)
    }

    pub async fn run(
        mut self,
        mut command_rx: mpsc::UnboundedReceiver<ClientCommand>,
    ) -> std::io::Result<W> {
        let mut ai_deadline = match self.start_game(self.saved.settings())? {
            Control::ScheduleAi => Some(Instant::now() + self.ai_delay()),
            _ => None,
        };

        loop {
            let deadline = ai_deadline.unwrap_or_else(Instant::now);

            tokio::select! {
                _ = tokio::time::sleep_until(deadline), if ai_deadline.is_some() => {
                    ai_deadline = None;
                    self.play_ai_turn()?;
                }
                command = command_rx.recv() => {
                    let Some(command) = command else {
                        break;
                    };
                    match self.handle_command(command)? {
                        Control::Continue => {}
                        Control::ScheduleAi => {
                            ai_deadline = Some(Instant::now() + self.ai_delay());
                        }
                        Control::Quit => break,
                    }
                }
            }
        }

        self.persist()?;
        Ok(self.out)
    }

    fn handle_command(&mut self, command: ClientCommand) -> std::io::Result<Control> {
        match command {
            ClientCommand::PlaceMark(index) => match self.session.submit_move(index) {
                Ok(transition) => self.after_transition(transition),
                Err(e) => {
                    writeln!(self.out, "{}", rejection_text(e))?;
                    Ok(Control::Continue)
                }
            },
            ClientCommand::NewGame { mode, first } => {
                let current = self.saved.settings();
                let settings = SessionSettings::new(
                    mode.unwrap_or(current.mode),
                    first.unwrap_or(current.first_player),
                );
                self.start_game(settings)
            }
            ClientCommand::ResetScores => {
                self.session.reset_scores();
                self.persist()?;
                self.render()?;
                Ok(Control::Continue)
            }
            ClientCommand::Help => {
                writeln!(self.out, "{}", HELP_TEXT)?;
                Ok(Control::Continue)
            }
            ClientCommand::Invalid(message) => {
                writeln!(self.out, "{}", message)?;
                Ok(Control::Continue)
            }
            ClientCommand::Quit => Ok(Control::Quit),
        }
    }

    fn start_game(&mut self, settings: SessionSettings) -> std::io::Result<Control> {
        let transition = self.session.new_game(settings);
        self.persist()?;
        self.after_transition(transition)
    }

    /// Runs the deferred computer move. A stale timer is a no-op.
    fn play_ai_turn(&mut self) -> std::io::Result<()> {
        match self.session.play_ai_turn() {
            Ok(transition) => {
                self.after_transition(transition)?;
            }
            Err(e) => log!("Skipped AI turn: {}", e),
        }
        Ok(())
    }

    fn after_transition(&mut self, transition: Transition) -> std::io::Result<Control> {
        self.render()?;

        if transition.outcome.is_terminal() {
            self.persist()?;
        }

        if transition.ai_turn_pending {
            Ok(Control::ScheduleAi)
        } else {
            Ok(Control::Continue)
        }
    }

    fn render(&mut self) -> std::io::Result<()> {
        writeln!(self.out, "{}", render(&self.session.snapshot()))?;
        self.out.flush()
    }

    /// Stores scores and choices. A failed save is shown to the player and play goes on.
    fn persist(&mut self) -> std::io::Result<()> {
        self.saved
            .update(self.session.scores(), self.session.settings());
        if let Err(e) = self.config_manager.set_config(&self.saved) {
            log!("Failed to save state: {}", e);
            writeln!(self.out, "Warning: could not save scores: {}", e)?;
        }
        Ok(())
    }
}

fn rejection_text(error: SessionError) -> String {
    match error {
        SessionError::NotRunning => "The game is over. Type 'new' to play again.".to_string(),
        SessionError::NotYourTurn => "Wait for the computer to move.".to_string(),
        SessionError::Engine(e) => format!("Can't play there: {}.", e),
    }
}

/// Forwards parsed stdin lines until EOF, then asks the runner to quit.
pub fn spawn_stdin_reader(command_tx: mpsc::UnboundedSender<ClientCommand>) {
    tokio::spawn(async move {
        let mut lines = BufReader::new(tokio::io::stdin()).lines();

        loop {
            match lines.next_line().await {
                Ok(Some(line)) => {
                    let Some(command) = parse_command(&line) else {
                        continue;
                    };
                    if command_tx.send(command).is_err() {
                        return;
                    }
                }
                Ok(None) => break,
                Err(e) => {
                    log!("Failed to read input: {}", e);
                    break;
                }
            }
        }

        let _ = command_tx.send(ClientCommand::Quit);
    });
}
