//! Readability scoring.
//!
//! Four formulas, each a pure function of [`Aggregates`]:
//!
//! | Formula | Expression |
//! |---|---|
//! | ARI  | `4.71 * (chars/words) + 0.5 * (words/sentences) - 21.43` |
//! | FK   | `0.39 * (words/sentences) + 11.8 * (syllables/words) - 15.59` |
//! | SMOG | `1.043 * sqrt(polysyllables * (30/sentences)) + 3.1291` |
//! | CL   | `0.0588 * (chars/words * 100) - 0.296 * (sentences/words * 100) - 15.8` |
//!
//! `30/sentences` in SMOG is integer division, so any text with more than 30
//! sentences scores the constant term only.
//!
//! Scores are truncated toward zero to two decimals, then the integer part is
//! mapped to a reading age. Scores outside 1..=14 map to "22+".

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::aggregate::Aggregates;
use crate::error::{AnalysisError, AnalysisResult};

/// A readability formula.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum Formula {
    /// Automated Readability Index.
    #[serde(rename = "ARI")]
    Ari,
    /// Flesch–Kincaid readability test.
    #[serde(rename = "FK")]
    FleschKincaid,
    /// Simple Measure of Gobbledygook.
    #[serde(rename = "SMOG")]
    Smog,
    /// Coleman–Liau index.
    #[serde(rename = "CL")]
    ColemanLiau,
}

impl Formula {
    /// All formulas, in reporting order.
    pub const ALL: [Self; 4] = [Self::Ari, Self::FleschKincaid, Self::Smog, Self::ColemanLiau];

    /// Short selection token ("ARI", "FK", "SMOG", "CL").
    pub const fn code(&self) -> &'static str {
        match self {
            Self::Ari => "ARI",
            Self::FleschKincaid => "FK",
            Self::Smog => "SMOG",
            Self::ColemanLiau => "CL",
        }
    }

    /// Human-readable formula name.
    pub const fn name(&self) -> &'static str {
        match self {
            Self::Ari => "Automated Readability Index",
            Self::FleschKincaid => "Flesch–Kincaid readability tests",
            Self::Smog => "Simple Measure of Gobbledygook",
            Self::ColemanLiau => "Coleman–Liau index",
        }
    }

    /// Evaluate the formula without truncation.
    ///
    /// Callers must ensure `words` and `sentences` are non-zero.
    #[allow(clippy::suboptimal_flops)]
    fn raw_score(self, agg: &Aggregates) -> f64 {
        let words = agg.words as f64;
        let sentences = agg.sentences as f64;
        let chars = agg.characters as f64;
        match self {
            Self::Ari => 4.71 * (chars / words) + 0.5 * (words / sentences) - 21.43,
            Self::FleschKincaid => {
                0.39 * (words / sentences) + 11.8 * (agg.syllables as f64 / words) - 15.59
            }
            Self::Smog => {
                let scaled = agg.polysyllables * (30 / agg.sentences);
                1.043 * (scaled as f64).sqrt() + 3.1291
            }
            Self::ColemanLiau => {
                0.0588 * (chars / words * 100.0) - 0.296 * (sentences / words * 100.0) - 15.8
            }
        }
    }
}

impl fmt::Display for Formula {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}

/// Which formulas to run.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub enum Selection {
    /// A single formula.
    Single(Formula),
    /// All four formulas plus their average age.
    All,
}

/// Accepted selection tokens.
pub const SELECTION_TOKENS: &[&str] = &["ARI", "FK", "SMOG", "CL", "all"];

impl Selection {
    /// Formulas covered by this selection, in reporting order.
    pub fn formulas(&self) -> Vec<Formula> {
        match self {
            Self::Single(formula) => vec![*formula],
            Self::All => Formula::ALL.to_vec(),
        }
    }

    /// The token that selects this.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Single(formula) => formula.code(),
            Self::All => "all",
        }
    }
}

impl FromStr for Selection {
    type Err = AnalysisError;

    /// Tokens are case-sensitive: "ARI", "FK", "SMOG", "CL" or "all".
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "ARI" => Ok(Self::Single(Formula::Ari)),
            "FK" => Ok(Self::Single(Formula::FleschKincaid)),
            "SMOG" => Ok(Self::Single(Formula::Smog)),
            "CL" => Ok(Self::Single(Formula::ColemanLiau)),
            "all" => Ok(Self::All),
            other => Err(AnalysisError::UnknownSelection {
                token: other.to_string(),
                available: SELECTION_TOKENS.join(", "),
            }),
        }
    }
}

impl TryFrom<String> for Selection {
    type Error = AnalysisError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        value.parse()
    }
}

impl From<Selection> for String {
    fn from(value: Selection) -> Self {
        value.as_str().to_string()
    }
}

impl fmt::Display for Selection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Reading age a score maps to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(into = "String", try_from = "String")]
pub enum ReadingAge {
    /// A bucket from the age table.
    Years(u32),
    /// Anything off the end of the table, labeled "22+".
    Over22,
}

/// Integer scores 1..=14 map to these ages, in order.
const AGE_TABLE: [u32; 14] = [6, 7, 8, 9, 10, 11, 12, 13, 14, 15, 16, 17, 18, 22];

impl ReadingAge {
    /// Map a (truncated) score to an age by its integer part.
    ///
    /// Non-positive scores and scores of 15 or more fall off the table.
    pub fn from_score(score: f64) -> Self {
        let bucket = score.trunc();
        if (1.0..=AGE_TABLE.len() as f64).contains(&bucket) {
            Self::Years(AGE_TABLE[bucket as usize - 1])
        } else {
            Self::Over22
        }
    }

    /// Age in years, with "22+" counted as 22.
    pub const fn years(&self) -> u32 {
        match self {
            Self::Years(years) => *years,
            Self::Over22 => 22,
        }
    }
}

impl fmt::Display for ReadingAge {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Years(years) => write!(f, "{years}"),
            Self::Over22 => f.write_str("22+"),
        }
    }
}

impl From<ReadingAge> for String {
    fn from(value: ReadingAge) -> Self {
        value.to_string()
    }
}

impl TryFrom<String> for ReadingAge {
    type Error = std::num::ParseIntError;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        if value == "22+" {
            Ok(Self::Over22)
        } else {
            value.parse().map(Self::Years)
        }
    }
}

/// Result of scoring text with one formula.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ScoreResult {
    /// The formula that produced this score.
    pub formula: Formula,
    /// Score truncated toward zero to two decimals.
    pub score: f64,
    /// Reading age for the score.
    pub age: ReadingAge,
}

/// Full result of a readability run.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReadabilityReport {
    /// Document counts the scores were computed from.
    pub aggregates: Aggregates,
    /// One result per selected formula, in reporting order.
    pub scores: Vec<ScoreResult>,
    /// Mean reading age across `scores`.
    pub average_age: f64,
}

/// Truncate toward zero to two decimal places.
///
/// Cuts the digits of the shortest decimal form of `value`. Scaling by 100
/// first can round up into the next hundredth: `-27.759999999999998` must
/// give `-27.75`, not `-27.76`.
pub fn truncate_2dp(value: f64) -> f64 {
    let digits = value.to_string();
    match digits.find('.') {
        Some(dot) if digits.len() > dot + 3 => digits[..dot + 3].parse().unwrap_or(value),
        _ => value,
    }
}

/// Score aggregates with a single formula.
///
/// # Errors
///
/// Returns [`AnalysisError::DegenerateInput`] when there are no words or no
/// sentences.
pub fn compute_score(formula: Formula, aggregates: &Aggregates) -> AnalysisResult<ScoreResult> {
    if aggregates.words == 0 || aggregates.sentences == 0 {
        return Err(AnalysisError::DegenerateInput {
            words: aggregates.words,
            sentences: aggregates.sentences,
        });
    }

    let score = truncate_2dp(formula.raw_score(aggregates));
    Ok(ScoreResult {
        formula,
        score,
        age: ReadingAge::from_score(score),
    })
}

/// Score aggregates with all four formulas, in reporting order.
pub fn compute_all(aggregates: &Aggregates) -> AnalysisResult<Vec<ScoreResult>> {
    compute_selection(Selection::All, aggregates)
}

/// Score aggregates with the formulas a selection covers.
pub fn compute_selection(
    selection: Selection,
    aggregates: &Aggregates,
) -> AnalysisResult<Vec<ScoreResult>> {
    selection
        .formulas()
        .into_iter()
        .map(|formula| compute_score(formula, aggregates))
        .collect()
}

/// Mean reading age of a set of results ("22+" counts as 22).
///
/// Returns 0.0 for an empty slice.
pub fn average_age(results: &[ScoreResult]) -> f64 {
    if results.is_empty() {
        return 0.0;
    }
    let total: u32 = results.iter().map(|r| r.age.years()).sum();
    f64::from(total) / results.len() as f64
}

/// Segment, aggregate and score a document.
#[tracing::instrument(skip(text), fields(text_len = text.len(), selection = %selection))]
pub fn check_readability(text: &str, selection: Selection) -> AnalysisResult<ReadabilityReport> {
    let aggregates = Aggregates::from_text(text);
    let scores = compute_selection(selection, &aggregates)?;
    let average_age = average_age(&scores);

    tracing::debug!(average_age, "scored text");
    Ok(ReadabilityReport {
        aggregates,
        scores,
        average_age,
    })
}
