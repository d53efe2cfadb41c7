use super::{Controller, Score, SessionError};

impl Controller {
    /// Record `option` for `question`. Answers are final: returns `false` and
    /// changes nothing if the question was already answered.
    pub fn select(&mut self, question: usize, option: usize) -> Result<bool, SessionError> {
        let quiz = self.loaded()?;
        let q = quiz
            .questions
            .get(question)
            .ok_or(SessionError::QuestionOutOfRange {
                index: question,
                len: quiz.len(),
            })?;

        if option >= q.options.len() {
            return Err(SessionError::OptionOutOfRange { question, option });
        }

        if self.is_answered(question) {
            return Ok(false);
        }

        self.state.answers.insert(question, option);
        Ok(true)
    }

    pub fn navigate(&mut self, question: usize) -> Result<(), SessionError> {
        let len = self.loaded()?.len();
        if question >= len {
            return Err(SessionError::QuestionOutOfRange {
                index: question,
                len,
            });
        }

        self.state.current = question;
        Ok(())
    }

    pub fn submit(&mut self) -> Result<Score, SessionError> {
        if self.state.quiz.is_none() {
            let err = SessionError::NoQuiz;
            self.fail(err.to_string());
            return Err(err);
        }

        self.state.show_results = true;
        self.score()
    }

    /// Take the same quiz again from the top.
    pub fn restart(&mut self) {
        self.state.answers.clear();
        self.state.current = 0;
        self.state.show_results = false;
    }
}
