//! Explicit application state with a single update boundary.
//!
//! The shell owns one `AppState` and feeds it `Action`s; views read the
//! fields they need. No singleton, no interior mutability: the reducer is
//! the only mutation path, which keeps view code free of scattered
//! per-page state.

use serde::Serialize;
use uuid::Uuid;

use crate::assistant;
use crate::models::enums::{Language, Page, SymptomSeverity};
use crate::models::{ConversationEntry, Medication, SymptomLogEntry};

/// Everything the shell can do to the state.
#[derive(Debug, Clone)]
pub enum Action {
    Navigate(Page),
    SetLanguage(Language),
    AddMedication {
        name: String,
        dosage: String,
        frequency: String,
    },
    ToggleMedication(Uuid),
    RemoveMedication(Uuid),
    RecordSymptom {
        description: String,
        severity: SymptomSeverity,
    },
    /// Append the user's question and the assistant's scripted reply.
    SubmitQuestion(String),
    /// Reset the conversation to the greeting.
    ClearConversation,
}

#[derive(Debug, Clone, Serialize)]
pub struct AppState {
    pub page: Page,
    pub language: Language,
    pub medications: Vec<Medication>,
    pub symptoms: Vec<SymptomLogEntry>,
    pub conversation: Vec<ConversationEntry>,
}

impl Default for AppState {
    fn default() -> Self {
        Self::new()
    }
}

impl AppState {
    /// Fresh state: home page, English, greeting as the sole turn.
    pub fn new() -> Self {
        Self {
            page: Page::Home,
            language: Language::English,
            medications: Vec::new(),
            symptoms: Vec::new(),
            conversation: vec![ConversationEntry::assistant(assistant::GREETING)],
        }
    }

    /// Apply one action. The only mutation path.
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::Navigate(page) => {
                self.page = page;
            }
            Action::SetLanguage(language) => {
                self.language = language;
            }
            Action::AddMedication {
                name,
                dosage,
                frequency,
            } => {
                if name.trim().is_empty() {
                    return;
                }
                self.medications.push(Medication::new(name, dosage, frequency));
            }
            Action::ToggleMedication(id) => {
                match self.medications.iter_mut().find(|m| m.id == id) {
                    Some(med) => med.active = !med.active,
                    None => tracing::warn!(%id, "toggle for unknown medication"),
                }
            }
            Action::RemoveMedication(id) => {
                self.medications.retain(|m| m.id != id);
            }
            Action::RecordSymptom {
                description,
                severity,
            } => {
                if description.trim().is_empty() {
                    return;
                }
                self.symptoms.push(SymptomLogEntry::new(description, severity));
            }
            Action::SubmitQuestion(question) => {
                if question.trim().is_empty() {
                    return;
                }
                let reply = assistant::respond(&question);
                self.conversation.push(ConversationEntry::user(question));
                self.conversation.push(ConversationEntry::assistant(reply));
            }
            Action::ClearConversation => {
                self.conversation = vec![ConversationEntry::assistant(assistant::GREETING)];
            }
        }
    }

    /// Names of active medications — the interaction screen's default
    /// checklist.
    pub fn active_medication_names(&self) -> Vec<String> {
        self.medications
            .iter()
            .filter(|m| m.active)
            .map(|m| m.name.clone())
            .collect()
    }
}
