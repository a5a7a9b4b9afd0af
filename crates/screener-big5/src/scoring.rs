use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::catalog::{self, CATALOG, Trait};

/// Caller-supplied answers: questionnaire item id → answer in 1..=5.
pub type AnswerMap = BTreeMap<u8, u8>;

/// Normalized 0–100 score per trait.
///
/// `None` means no valid answer contributed to that trait ("insufficient
/// data"). It is serialized as `null` and is distinct from a score of 0.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TraitScoreSet {
    pub openness: Option<u8>,
    pub conscientiousness: Option<u8>,
    pub extraversion: Option<u8>,
    pub agreeableness: Option<u8>,
    pub neuroticism: Option<u8>,
}

impl TraitScoreSet {
    pub fn get(&self, trait_: Trait) -> Option<u8> {
        match trait_ {
            Trait::Openness => self.openness,
            Trait::Conscientiousness => self.conscientiousness,
            Trait::Extraversion => self.extraversion,
            Trait::Agreeableness => self.agreeableness,
            Trait::Neuroticism => self.neuroticism,
        }
    }

    fn slot(&mut self, trait_: Trait) -> &mut Option<u8> {
        match trait_ {
            Trait::Openness => &mut self.openness,
            Trait::Conscientiousness => &mut self.conscientiousness,
            Trait::Extraversion => &mut self.extraversion,
            Trait::Agreeableness => &mut self.agreeableness,
            Trait::Neuroticism => &mut self.neuroticism,
        }
    }

    /// Score as presented under [`Trait::label`]: neuroticism is shown as
    /// emotional stability, `100 - score`.
    pub fn display_score(&self, trait_: Trait) -> Option<u8> {
        let score = self.get(trait_)?;
        match trait_ {
            Trait::Neuroticism => Some(100 - score),
            _ => Some(score),
        }
    }

    /// Traits with their scores, in catalog order.
    pub fn iter(&self) -> impl Iterator<Item = (Trait, Option<u8>)> + '_ {
        Trait::ALL.into_iter().map(|t| (t, self.get(t)))
    }

    /// True when every trait has a score.
    pub fn is_complete(&self) -> bool {
        self.iter().all(|(_, score)| score.is_some())
    }
}

/// Score a set of questionnaire answers.
///
/// Each answered catalog item contributes its answer (inverted for
/// reverse-scored items) to its trait. A trait's score is the mean
/// contribution mapped linearly from 1..=5 onto 0..=100 and rounded half up.
/// Answers outside 1..=5 and ids outside the catalog are ignored.
pub fn score(answers: &AnswerMap) -> TraitScoreSet {
    for id in answers.keys() {
        if catalog::item(*id).is_none() {
            tracing::warn!(item = id, "ignoring answer to unknown questionnaire item");
        }
    }

    // (sum of effective scores, number of answers) per trait
    let mut totals = [(0u32, 0u32); 5];
    for item in &CATALOG {
        let Some(&answer) = answers.get(&item.id) else {
            continue;
        };
        if !(1..=5).contains(&answer) {
            tracing::warn!(item = item.id, answer, "ignoring out-of-range answer");
            continue;
        }
        let (sum, count) = &mut totals[item.trait_.index()];
        *sum += u32::from(item.effective_score(answer));
        *count += 1;
    }

    let mut scores = TraitScoreSet::default();
    for trait_ in Trait::ALL {
        let (sum, count) = totals[trait_.index()];
        *scores.slot(trait_) = normalize(sum, count);
    }
    scores
}

/// `round((mean - 1) / 4 * 100)` in integer arithmetic, `None` for no answers.
fn normalize(sum: u32, count: u32) -> Option<u8> {
    if count == 0 {
        return None;
    }
    let numerator = 100 * (sum - count);
    let denominator = 4 * count;
    let rounded = (2 * numerator + denominator) / (2 * denominator);
    u8::try_from(rounded.min(100)).ok()
}
