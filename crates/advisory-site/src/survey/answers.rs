use serde::Serialize;

use super::bank::QuestionBank;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum AnswerError {
    #[error("question {index} does not exist (bank has {len} questions)")]
    UnknownQuestion { index: usize, len: usize },
    #[error("option {option} is out of range for question {index}")]
    UnknownOption { index: usize, option: usize },
    #[error("expected {expected} answers, received {found}")]
    LengthMismatch { expected: usize, found: usize },
}

/// One slot per question holding the selected option index, if any.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct AnswerStore {
    slots: Vec<Option<usize>>,
}

impl AnswerStore {
    pub fn for_bank(bank: &QuestionBank) -> Self {
        Self {
            slots: vec![None; bank.len()],
        }
    }

    /// Rebuilds a store from externally supplied slots, checking alignment with the bank.
    pub fn from_slots(bank: &QuestionBank, slots: Vec<Option<usize>>) -> Result<Self, AnswerError> {
        if slots.len() != bank.len() {
            return Err(AnswerError::LengthMismatch {
                expected: bank.len(),
                found: slots.len(),
            });
        }

        let mut store = Self::for_bank(bank);
        for (index, slot) in slots.into_iter().enumerate() {
            if let Some(option) = slot {
                store.record(bank, index, option)?;
            }
        }
        Ok(store)
    }

    /// Overwrites the slot for `index`; a question holds at most one answer.
    pub fn record(
        &mut self,
        bank: &QuestionBank,
        index: usize,
        option: usize,
    ) -> Result<(), AnswerError> {
        let question = bank.question(index).ok_or(AnswerError::UnknownQuestion {
            index,
            len: bank.len(),
        })?;
        if option >= question.options.len() {
            return Err(AnswerError::UnknownOption { index, option });
        }
        self.slots[index] = Some(option);
        Ok(())
    }

    pub fn selected(&self, index: usize) -> Option<usize> {
        self.slots.get(index).copied().flatten()
    }

    pub fn slots(&self) -> &[Option<usize>] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    pub fn answered_count(&self) -> usize {
        self.slots.iter().filter(|slot| slot.is_some()).count()
    }

    pub fn is_complete(&self) -> bool {
        self.slots.iter().all(Option::is_some)
    }

    pub fn clear(&mut self) {
        self.slots.iter_mut().for_each(|slot| *slot = None);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn recording_twice_overwrites_the_slot() {
        let bank = QuestionBank::standard();
        let mut answers = AnswerStore::for_bank(&bank);
        answers.record(&bank, 3, 1).expect("valid answer");
        answers.record(&bank, 3, 2).expect("valid answer");

        assert_eq!(answers.len(), bank.len());
        assert_eq!(answers.selected(3), Some(2));
        assert_eq!(answers.answered_count(), 1);
    }

    #[test]
    fn rejects_out_of_range_answers() {
        let bank = QuestionBank::standard();
        let mut answers = AnswerStore::for_bank(&bank);
        assert_eq!(
            answers.record(&bank, 0, 4),
            Err(AnswerError::UnknownOption {
                index: 0,
                option: 4
            })
        );
        assert!(matches!(
            answers.record(&bank, 20, 0),
            Err(AnswerError::UnknownQuestion { index: 20, .. })
        ));
    }

    #[test]
    fn from_slots_requires_matching_length() {
        let bank = QuestionBank::standard();
        let err = AnswerStore::from_slots(&bank, vec![Some(0); 3]).expect_err("too short");
        assert_eq!(
            err,
            AnswerError::LengthMismatch {
                expected: 20,
                found: 3
            }
        );
    }

    #[test]
    fn clear_resets_every_slot() {
        let bank = QuestionBank::standard();
        let mut answers = AnswerStore::from_slots(&bank, vec![Some(1); 20]).expect("complete");
        assert!(answers.is_complete());
        answers.clear();
        assert_eq!(answers.answered_count(), 0);
        assert!(answers.slots().iter().all(Option::is_none));
    }
}
