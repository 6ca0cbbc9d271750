//! Linear decision map over the archetype catalog.
//!
//! A fixed, ordered list of yes/no questions. The first "yes" ends the walk
//! and suggests that question's archetypes; declining every question ends the
//! walk with an empty suggestion set. There is no branching: a question's
//! only successor is the next question in the list.

use crate::core::catalog::{self, Archetype};

#[derive(Debug)]
pub struct DecisionQuestion {
    pub prompt: &'static str,
    /// Names of catalog archetypes suggested when this question is affirmed.
    pub archetypes: &'static [&'static str],
}

impl DecisionQuestion {
    /// Resolve the referenced names against the catalog. Names with no
    /// catalog record are dropped silently, so a stale reference shrinks
    /// the suggestion set instead of failing the walk.
    pub fn resolve(&self) -> Vec<&'static Archetype> {
        self.archetypes
            .iter()
            .filter_map(|name| catalog::lookup_archetype(name))
            .collect()
    }
}

static DECISION_QUESTIONS: [DecisionQuestion; 4] = [
    DecisionQuestion {
        prompt: "Is this feature primarily about data security, access control, auditing, or ensuring strict adherence to regulations?",
        archetypes: &["The Vigilant Guardian", "The Rule Master"],
    },
    DecisionQuestion {
        prompt: "Does this feature involve automating a process, integrating with other systems, or streamlining a workflow for efficiency?",
        archetypes: &["The Pragmatic Implementer", "The Process Optimizer"],
    },
    DecisionQuestion {
        prompt: "Is this feature focused on communication, transparency, or education?",
        archetypes: &["The Communicator & Educator"],
    },
    DecisionQuestion {
        prompt: "Is this feature about identifying, assessing, visualizing, or mitigating potential risks?",
        archetypes: &["The Risk Navigator"],
    },
];

pub fn decision_questions() -> &'static [DecisionQuestion] {
    &DECISION_QUESTIONS
}

/// Walk state: a pointer into the question list plus the suggestions
/// produced so far. The pointer sitting past the last question means the
/// walk is finished and `result` holds the outcome.
#[derive(Debug, Clone)]
pub struct DecisionMap {
    questions: &'static [DecisionQuestion],
    pointer: usize,
    result: Vec<&'static Archetype>,
}

impl DecisionMap {
    pub fn new() -> Self {
        Self::with_questions(decision_questions())
    }

    /// Build a walk over an arbitrary question list. An empty list is a
    /// valid map that starts out already finished.
    pub fn with_questions(questions: &'static [DecisionQuestion]) -> Self {
        DecisionMap {
            questions,
            pointer: 0,
            result: Vec::new(),
        }
    }

    pub fn pointer(&self) -> usize {
        self.pointer
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn current_question(&self) -> Option<&'static DecisionQuestion> {
        self.questions.get(self.pointer)
    }

    pub fn is_finished(&self) -> bool {
        self.pointer >= self.questions.len()
    }

    /// Answer "yes" to the current question: its archetypes become the
    /// outcome and the walk ends. Returns false (and changes nothing) if
    /// the walk is already finished.
    pub fn affirm(&mut self) -> bool {
        let Some(question) = self.current_question() else {
            return false;
        };
        self.result = question.resolve();
        self.pointer = self.questions.len();
        true
    }

    /// Answer "no" to the current question and move to the next one.
    /// Declining the last question ends the walk with an explicitly empty
    /// outcome. Returns false (and changes nothing) if the walk is already
    /// finished.
    pub fn decline(&mut self) -> bool {
        if self.is_finished() {
            return false;
        }
        if self.pointer + 1 == self.questions.len() {
            self.result = Vec::new();
            self.pointer = self.questions.len();
        } else {
            self.pointer += 1;
        }
        true
    }

    /// Return to the first question and discard any outcome.
    pub fn reset(&mut self) {
        self.pointer = 0;
        self.result.clear();
    }

    /// Suggested archetypes. Meaningful once `is_finished()`; empty means
    /// no question was affirmed.
    pub fn result(&self) -> &[&'static Archetype] {
        &self.result
    }
}

impl Default for DecisionMap {
    fn default() -> Self {
        Self::new()
    }
}
