//! Blocking read-dispatch-write loop

use super::console::Console;
use super::listener::MessageListener;
use tracing::{debug, info};

/// Input line that ends the loop once it has been dispatched
pub const EXIT_COMMAND: &str = "/exitQuestionBot";

/// Lifecycle of an emitter
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum EmitterState {
    /// Constructed, loop not entered yet
    Idle,
    /// Inside the read loop
    Running,
    /// Loop exited; terminal
    Stopped,
}

/// Reads console lines and fans them out to listeners in registration order
pub struct MessageEmitter<C: Console> {
    console: C,
    listeners: Vec<Box<dyn MessageListener>>,
    state: EmitterState,
}

impl<C: Console> MessageEmitter<C> {
    /// Create an idle emitter over the given console
    pub fn new(console: C) -> Self {
        Self {
            console,
            listeners: Vec::new(),
            state: EmitterState::Idle,
        }
    }

    /// Register a listener. `None` is ignored.
    pub fn add(&mut self, listener: Option<Box<dyn MessageListener>>) {
        match listener {
            Some(listener) => self.listeners.push(listener),
            None => debug!("Ignoring absent listener"),
        }
    }

    /// Register a concrete listener
    pub fn subscribe<L>(&mut self, listener: L)
    where
        L: MessageListener + 'static,
    {
        self.listeners.push(Box::new(listener));
    }

    /// Get number of registered listeners
    pub fn listener_count(&self) -> usize {
        self.listeners.len()
    }

    /// Current lifecycle state
    pub fn state(&self) -> EmitterState {
        self.state
    }

    /// Run the read loop until the exit command or end of input
    ///
    /// The exit command is dispatched to every listener before the loop
    /// stops. Console errors end the loop and are returned.
    pub fn start(&mut self) -> crate::Result<()> {
        match self.state {
            EmitterState::Idle => {}
            EmitterState::Running => {
                return Err(crate::Error::Emitter("emitter is already running".to_string()))
            }
            EmitterState::Stopped => {
                return Err(crate::Error::Emitter(
                    "emitter has stopped and cannot be restarted".to_string(),
                ))
            }
        }

        self.state = EmitterState::Running;
        info!(listeners = self.listeners.len(), "Message emitter started");

        let result = self.run();
        self.state = EmitterState::Stopped;

        match &result {
            Ok(()) => info!("Message emitter stopped"),
            Err(e) => info!(error = %e, "Message emitter stopped on console error"),
        }
        result
    }

    fn run(&mut self) -> crate::Result<()> {
        loop {
            let line = match self.console.read_line()? {
                Some(line) => line,
                None => {
                    debug!("Console input exhausted");
                    return Ok(());
                }
            };

            self.dispatch(&line)?;

            if line == EXIT_COMMAND {
                debug!("Exit command received");
                return Ok(());
            }
        }
    }

    fn dispatch(&mut self, line: &str) -> crate::Result<()> {
        debug!(line, listeners = self.listeners.len(), "Dispatching line");
        for listener in &mut self.listeners {
            if let Some(reply) = listener.receive_message(line) {
                self.console.write_line(&reply)?;
            }
        }
        Ok(())
    }

    /// Give back the console, e.g. to inspect a test double
    pub fn into_console(self) -> C {
        self.console
    }
}

impl<C: Console + std::fmt::Debug> std::fmt::Debug for MessageEmitter<C> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MessageEmitter")
            .field("console", &self.console)
            .field("listeners", &self.listeners.len())
            .field("state", &self.state)
            .finish()
    }
}
