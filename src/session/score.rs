use super::{Controller, SessionError};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Score {
    pub correct: usize,
    pub incorrect: usize,
    pub unanswered: usize,
    pub total: usize,
    /// Rounded percentage of correct answers over all questions.
    pub percent: u32,
}

impl Controller {
    pub fn score(&self) -> Result<Score, SessionError> {
        let quiz = self.loaded()?;

        let mut correct = 0;
        let mut incorrect = 0;
        for (idx, question) in quiz.questions.iter().enumerate() {
            match self.selected(idx) {
                Some(option) if question.is_correct(option) => correct += 1,
                Some(_) => incorrect += 1,
                None => {}
            }
        }

        let total = quiz.len();
        let percent = if total == 0 {
            0
        } else {
            (correct as f64 / total as f64 * 100.0).round() as u32
        };

        Ok(Score {
            correct,
            incorrect,
            unanswered: total - correct - incorrect,
            total,
            percent,
        })
    }
}
