use alloc::string::String;
use serde::{Deserialize, Serialize};

/// How much of a clue is currently shown.
#[derive(Copy, Clone, Debug, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
pub enum RevealState {
    Hidden,
    Question,
    Answer,
}

impl RevealState {
    /// State after one click.
    pub const fn next(self) -> Self {
        use RevealState::*;
        match self {
            Hidden => Question,
            Question => Answer,
            Answer => Answer,
        }
    }

    pub const fn is_terminal(self) -> bool {
        matches!(self, Self::Answer)
    }
}

impl Default for RevealState {
    fn default() -> Self {
        Self::Hidden
    }
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum RevealOutcome {
    NoChange,
    Changed,
}

impl RevealOutcome {
    pub const fn has_update(self) -> bool {
        match self {
            Self::NoChange => false,
            Self::Changed => true,
        }
    }
}

/// What a board cell displays for its clue.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum CellContent<'a> {
    Placeholder,
    Question(&'a str),
    Answer(&'a str),
}

impl<'a> CellContent<'a> {
    pub const PLACEHOLDER: &'static str = "?";

    pub const fn text(self) -> &'a str {
        match self {
            Self::Placeholder => Self::PLACEHOLDER,
            Self::Question(text) | Self::Answer(text) => text,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Clue {
    question: String,
    answer: String,
    state: RevealState,
}

impl Clue {
    pub fn new(question: impl Into<String>, answer: impl Into<String>) -> Self {
        Self {
            question: question.into(),
            answer: answer.into(),
            state: RevealState::Hidden,
        }
    }

    pub fn question(&self) -> &str {
        &self.question
    }

    pub fn answer(&self) -> &str {
        &self.answer
    }

    pub fn state(&self) -> RevealState {
        self.state
    }

    pub fn content(&self) -> CellContent<'_> {
        match self.state {
            RevealState::Hidden => CellContent::Placeholder,
            RevealState::Question => CellContent::Question(&self.question),
            RevealState::Answer => CellContent::Answer(&self.answer),
        }
    }

    /// Advances the clue by one click.
    pub fn reveal(&mut self) -> RevealOutcome {
        let next = self.state.next();
        if next == self.state {
            RevealOutcome::NoChange
        } else {
            self.state = next;
            RevealOutcome::Changed
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn clicks_walk_hidden_question_answer() {
        let mut clue = Clue::new("2+2", "4");
        assert_eq!(clue.content(), CellContent::Placeholder);
        assert_eq!(clue.content().text(), "?");

        assert_eq!(clue.reveal(), RevealOutcome::Changed);
        assert_eq!(clue.state(), RevealState::Question);
        assert_eq!(clue.content(), CellContent::Question("2+2"));

        assert_eq!(clue.reveal(), RevealOutcome::Changed);
        assert_eq!(clue.state(), RevealState::Answer);
        assert_eq!(clue.content(), CellContent::Answer("4"));

        assert_eq!(clue.reveal(), RevealOutcome::NoChange);
        assert_eq!(clue.content(), CellContent::Answer("4"));
    }

    #[test]
    fn answer_is_absorbing() {
        let mut clue = Clue::new("Hamlet author", "Shakespeare");
        clue.reveal();
        clue.reveal();

        for _ in 0..10 {
            assert!(!clue.reveal().has_update());
            assert_eq!(clue.state(), RevealState::Answer);
            assert_eq!(clue.content().text(), "Shakespeare");
        }
    }

    #[test]
    fn transitions_never_move_backwards() {
        use RevealState::*;
        for state in [Hidden, Question, Answer] {
            assert!(state.next() >= state);
            assert_ne!(state.next(), Hidden);
        }
        assert!(Answer.is_terminal());
        assert!(!Question.is_terminal());
    }
}
