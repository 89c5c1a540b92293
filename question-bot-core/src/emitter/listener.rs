//! Listener trait for raw console lines

/// Subscriber that receives every line read by the emitter
///
/// Listeners own all interpretation of the line. Returning `Some` asks the
/// emitter to write the reply to the console.
pub trait MessageListener: Send {
    fn receive_message(&mut self, line: &str) -> Option<String>;
}

impl<F> MessageListener for F
where
    F: FnMut(&str) -> Option<String> + Send,
{
    fn receive_message(&mut self, line: &str) -> Option<String> {
        self(line)
    }
}
