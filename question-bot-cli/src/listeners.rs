//! Command listeners registered on the console emitter

use chrono::Local;
use question_bot_core::{MessageListener, Record, RecordId, RecordStore, UpdateError};
use std::sync::Arc;
use tracing::{debug, info};

pub const HELP_TEXT: &str = "\
Commands:
  /question <text>       log a new question
  /answer <id> <text>    record the answer to question #<id>
  /questions             list every logged question
  /unanswered            list questions still waiting for an answer
  /help                  show this summary
  /exitQuestionBot       quit";

/// A parsed operator command
#[derive(Debug, Clone, PartialEq, Eq)]
enum Command<'a> {
    Question(&'a str),
    Answer { id: &'a str, text: &'a str },
    Questions,
    Unanswered,
    Help,
}

impl<'a> Command<'a> {
    fn parse(line: &'a str) -> Option<Self> {
        let line = line.trim_start();
        let (name, rest) = match line.split_once(char::is_whitespace) {
            Some((name, rest)) => (name, rest.trim()),
            None => (line, ""),
        };

        match name {
            "/question" => Some(Command::Question(rest)),
            "/answer" => {
                let (id, text) = rest
                    .split_once(char::is_whitespace)
                    .map(|(id, text)| (id, text.trim()))
                    .unwrap_or((rest, ""));
                Some(Command::Answer { id, text })
            }
            "/questions" => Some(Command::Questions),
            "/unanswered" => Some(Command::Unanswered),
            "/help" => Some(Command::Help),
            _ => None,
        }
    }
}

/// Turns `/question` and `/answer` commands into store operations
pub struct QuestionListener {
    store: Arc<dyn RecordStore>,
}

impl QuestionListener {
    pub fn new(store: Arc<dyn RecordStore>) -> Self {
        Self { store }
    }

    fn ask(&self, question: &str) -> String {
        if question.is_empty() {
            return "Usage: /question <text>".to_string();
        }
        let record = self.store.create_record(question);
        info!(id = %record.id(), "Question logged");
        format!(
            "Thank you! Your question has been logged as #{}.",
            record.id()
        )
    }

    fn answer(&self, id: &str, text: &str) -> String {
        let Ok(id) = id.trim_start_matches('#').parse::<RecordId>() else {
            return "Usage: /answer <id> <text>".to_string();
        };

        match self.store.try_update_record(id, text) {
            Ok(record) => {
                info!(id = %id, "Question answered");
                format!("Answer recorded for #{}: {}", record.id(), record.question())
            }
            Err(UpdateError::NotFound(id)) => format!("No question with id #{}.", id),
            Err(UpdateError::EmptyAnswer) => "An answer cannot be empty.".to_string(),
        }
    }

    fn list(&self, only_unanswered: bool) -> String {
        let lines: Vec<String> = self
            .store
            .records()
            .iter()
            .filter(|record| !(only_unanswered && record.is_answered()))
            .map(format_record)
            .collect();

        if lines.is_empty() {
            if only_unanswered {
                "Every question has been answered.".to_string()
            } else {
                "No questions logged yet.".to_string()
            }
        } else {
            lines.join("\n")
        }
    }
}

impl MessageListener for QuestionListener {
    fn receive_message(&mut self, line: &str) -> Option<String> {
        let reply = match Command::parse(line)? {
            Command::Question(text) => self.ask(text),
            Command::Answer { id, text } => self.answer(id, text),
            Command::Questions => self.list(false),
            Command::Unanswered => self.list(true),
            Command::Help => HELP_TEXT.to_string(),
        };
        Some(reply)
    }
}

/// Render one record as a single listing line
pub fn format_record(record: &Record) -> String {
    let asked = record.time_asked().with_timezone(&Local).format("%Y-%m-%d %H:%M");
    let answer = record.answer().unwrap_or("unanswered");
    format!("#{} [{}] {} => {}", record.id(), asked, record.question(), answer)
}

/// Writes every console line to the log; never replies
#[derive(Debug, Default)]
pub struct TranscriptListener {
    lines_seen: u64,
}

impl MessageListener for TranscriptListener {
    fn receive_message(&mut self, line: &str) -> Option<String> {
        self.lines_seen += 1;
        debug!(seq = self.lines_seen, line, "Console input");
        None
    }
}
