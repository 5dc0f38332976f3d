use std::fmt::{Display, Formatter};
use std::path::PathBuf;
use std::time::{Duration, Instant};

use serde::Serialize;
use tracing::{debug, info};
use typed_builder::TypedBuilder;

use crate::dictionary::{Dictionary, LoadOptions, LoadStats};
use crate::error::SpellerError;
use crate::text::words;

#[derive(Debug, Default, Clone, Eq, PartialEq)]
pub struct CheckOutcome {
    pub misspelled: Vec<String>,
    pub words_checked: usize,
}

/// Looks up every word of `text`, in order, keeping the ones the dictionary
/// does not know.
pub fn spell_check(dictionary: &Dictionary, text: &[u8]) -> CheckOutcome {
    let mut outcome = CheckOutcome::default();
    for word in words(text) {
        outcome.words_checked += 1;
        if !dictionary.check(&word) {
            outcome.misspelled.push(word.into_owned());
        }
    }
    outcome
}

#[derive(TypedBuilder, Clone, Debug)]
pub struct RunConfig {
    pub dictionary: PathBuf,
    pub text: PathBuf,
    #[builder(default)]
    pub load_options: LoadOptions,
}

#[derive(Debug, Default, Clone, Copy, PartialEq, Serialize)]
pub struct Timings {
    pub load: f64,
    pub check: f64,
    pub size: f64,
    pub unload: f64,
}

impl Timings {
    pub fn total(&self) -> f64 {
        self.load + self.check + self.size + self.unload
    }
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Report {
    pub misspelled: Vec<String>,
    pub words_misspelled: usize,
    pub words_in_dictionary: usize,
    pub dictionary_load: LoadStats,
    pub words_in_text: usize,
    pub timings: Timings,
    pub total_time: f64,
}

impl Display for Report {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "\nMISSPELLED WORDS\n")?;
        for word in &self.misspelled {
            writeln!(f, "{}", word)?;
        }
        writeln!(f)?;
        writeln!(f, "WORDS MISSPELLED:     {}", self.words_misspelled)?;
        writeln!(f, "WORDS IN DICTIONARY:  {}", self.words_in_dictionary)?;
        if self.dictionary_load.duplicates > 0 {
            writeln!(f, "DUPLICATE ENTRIES:    {}", self.dictionary_load.duplicates)?;
        }
        if self.dictionary_load.skipped_bytes > 0 {
            writeln!(f, "BYTES SKIPPED:        {}", self.dictionary_load.skipped_bytes)?;
        }
        writeln!(f, "WORDS IN TEXT:        {}", self.words_in_text)?;
        writeln!(f, "TIME IN load:         {:.2}", self.timings.load)?;
        writeln!(f, "TIME IN check:        {:.2}", self.timings.check)?;
        writeln!(f, "TIME IN size:         {:.2}", self.timings.size)?;
        writeln!(f, "TIME IN unload:       {:.2}", self.timings.unload)?;
        writeln!(f, "TIME IN TOTAL:        {:.2}", self.total_time)
    }
}

fn seconds(elapsed: Duration) -> f64 {
    elapsed.as_secs_f64()
}

/// One full dictionary lifecycle over a text file: load, check every word,
/// size, unload. Each phase is timed separately.
pub fn run(config: &RunConfig) -> Result<Report, SpellerError> {
    let mut dictionary = Dictionary::with_options(config.load_options.clone());
    let mut timings = Timings::default();

    let start = Instant::now();
    let dictionary_load = dictionary.load(&config.dictionary)?;
    timings.load = seconds(start.elapsed());

    let text = std::fs::read(&config.text).map_err(|source| SpellerError::Text {
        path: config.text.clone(),
        source,
    })?;
    debug!(path = %config.text.display(), bytes = text.len(), "read text");

    let start = Instant::now();
    let outcome = spell_check(&dictionary, &text);
    timings.check = seconds(start.elapsed());

    let start = Instant::now();
    let words_in_dictionary = dictionary.size();
    timings.size = seconds(start.elapsed());

    let start = Instant::now();
    dictionary.unload();
    timings.unload = seconds(start.elapsed());

    info!(checked = outcome.words_checked, misspelled = outcome.misspelled.len(),
          total = timings.total(), "spell check finished");

    Ok(Report {
        words_misspelled: outcome.misspelled.len(),
        misspelled: outcome.misspelled,
        words_in_dictionary,
        dictionary_load,
        words_in_text: outcome.words_checked,
        total_time: timings.total(),
        timings,
    })
}
