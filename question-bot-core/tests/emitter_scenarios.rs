use question_bot_core::{
    Console, EmitterState, InMemoryStore, MessageEmitter, MessageListener, RecordStore,
    EXIT_COMMAND,
};
use std::collections::VecDeque;
use std::io;
use std::sync::{Arc, Mutex};

#[derive(Debug, Default)]
struct ScriptedConsole {
    input: VecDeque<String>,
    output: Vec<String>,
}

impl ScriptedConsole {
    fn new(lines: &[&str]) -> Self {
        Self {
            input: lines.iter().map(|l| l.to_string()).collect(),
            output: Vec::new(),
        }
    }
}

impl Console for ScriptedConsole {
    fn read_line(&mut self) -> io::Result<Option<String>> {
        Ok(self.input.pop_front())
    }

    fn write_line(&mut self, text: &str) -> io::Result<()> {
        self.output.push(text.to_string());
        Ok(())
    }
}

/// Logs `/question` lines into a shared store and thanks the asker
struct Logger {
    store: Arc<dyn RecordStore>,
    calls: Arc<Mutex<Vec<String>>>,
}

impl MessageListener for Logger {
    fn receive_message(&mut self, line: &str) -> Option<String> {
        self.calls.lock().unwrap().push(line.to_string());
        let question = line.strip_prefix("/question ")?;
        self.store.create_record(question);
        Some("Thank you".to_string())
    }
}

#[test]
fn question_line_is_logged_and_acknowledged_once() {
    let store: Arc<dyn RecordStore> = Arc::new(InMemoryStore::new());
    let calls = Arc::new(Mutex::new(Vec::new()));
    let console = ScriptedConsole::new(&["/question What is 1+1?", EXIT_COMMAND]);

    let mut emitter = MessageEmitter::new(console);
    emitter.subscribe(Logger {
        store: store.clone(),
        calls: calls.clone(),
    });
    emitter.start().unwrap();

    assert_eq!(emitter.state(), EmitterState::Stopped);
    assert_eq!(
        *calls.lock().unwrap(),
        vec!["/question What is 1+1?", EXIT_COMMAND]
    );
    assert_eq!(emitter.into_console().output, vec!["Thank you"]);

    let records = store.records();
    assert_eq!(records.len(), 1);
    assert_eq!(records[0].question(), "What is 1+1?");
}

#[test]
fn two_listeners_share_one_store() {
    let store: Arc<dyn RecordStore> = Arc::new(InMemoryStore::new());
    let console = ScriptedConsole::new(&[
        "/question first",
        "/question second",
        EXIT_COMMAND,
        "/question never",
    ]);

    let mut emitter = MessageEmitter::new(console);
    for _ in 0..2 {
        emitter.subscribe(Logger {
            store: store.clone(),
            calls: Arc::new(Mutex::new(Vec::new())),
        });
    }
    emitter.start().unwrap();

    let questions: Vec<String> = store
        .records()
        .iter()
        .map(|r| r.question().to_string())
        .collect();
    assert_eq!(questions, vec!["first", "first", "second", "second"]);
    assert_eq!(emitter.into_console().output.len(), 4);
}

#[test]
fn absent_listener_does_not_disturb_dispatch() {
    let calls = Arc::new(Mutex::new(Vec::new()));
    let store: Arc<dyn RecordStore> = Arc::new(InMemoryStore::new());
    let console = ScriptedConsole::new(&["/question What is 1+1?", EXIT_COMMAND]);

    let mut emitter = MessageEmitter::new(console);
    emitter.add(None);
    emitter.add(Some(Box::new(Logger {
        store,
        calls: calls.clone(),
    })));
    emitter.start().unwrap();

    assert_eq!(calls.lock().unwrap().len(), 2);
}
