// src/model/result.rs
use super::{Platform, Record};

pub const PERFORMANCE_FIELD: &str = "Performance";
pub const ERROR_FIELD: &str = "error";

/// What a provider hands back, before timing is attached.
#[derive(Clone, Debug, PartialEq)]
pub enum ProviderOutput {
    /// One profile record (Facebook, Instagram).
    Single(Record),
    /// A bounded, ordered feed of per-item records (Twitter).
    Items(Vec<Record>),
    /// Whole-fetch failure, already turned into a readable message.
    Failed(String),
}

#[derive(Clone, Debug, PartialEq)]
pub struct FetchSuccess {
    pub platform: Platform,
    pub subject: String,
    /// Profile fields, or a feed summary when `items` is set.
    pub fields: Record,
    pub items: Option<Vec<Record>>,
    pub elapsed: f64,
}

#[derive(Clone, Debug, PartialEq)]
pub struct FetchFailure {
    /// `None` when the selector never resolved to a platform.
    pub platform: Option<Platform>,
    /// Selector exactly as the caller gave it.
    pub selector: String,
    pub subject: String,
    pub message: String,
    pub elapsed: f64,
}

/// Outcome of exactly one dispatch. Immutable once built.
#[derive(Clone, Debug, PartialEq)]
pub enum FetchResult {
    Ok(FetchSuccess),
    Err(FetchFailure),
}

pub fn performance_line(elapsed: f64) -> String {
    format!("Time Taken: {:.2} seconds", elapsed)
}

/// Round to two decimals, clamped at zero.
pub fn round_elapsed(secs: f64) -> f64 {
    ((secs.max(0.0)) * 100.0).round() / 100.0
}

impl FetchResult {
    /// Attach timing to a provider's output.
    /// Every record (each feed item included) gets its own `Performance` field.
    pub fn from_output(platform: Platform, subject: &str, output: ProviderOutput, elapsed: f64) -> Self {
        let perf = performance_line(elapsed);
        match output {
            ProviderOutput::Single(mut fields) => {
                fields.insert(PERFORMANCE_FIELD, perf);
                FetchResult::Ok(FetchSuccess {
                    platform,
                    subject: s!(subject),
                    fields,
                    items: None,
                    elapsed,
                })
            }
            ProviderOutput::Items(mut items) => {
                for item in items.iter_mut() {
                    item.insert(PERFORMANCE_FIELD, perf.clone());
                }
                let fields = record! {
                    "Items" => items.len().to_string(),
                    PERFORMANCE_FIELD => perf,
                };
                FetchResult::Ok(FetchSuccess {
                    platform,
                    subject: s!(subject),
                    fields,
                    items: Some(items),
                    elapsed,
                })
            }
            ProviderOutput::Failed(message) => FetchResult::Err(FetchFailure {
                platform: Some(platform),
                selector: s!(platform.name()),
                subject: s!(subject),
                message,
                elapsed,
            }),
        }
    }

    pub fn is_ok(&self) -> bool {
        matches!(self, FetchResult::Ok(_))
    }

    pub fn platform(&self) -> Option<Platform> {
        match self {
            FetchResult::Ok(ok) => Some(ok.platform),
            FetchResult::Err(err) => err.platform,
        }
    }

    pub fn subject(&self) -> &str {
        match self {
            FetchResult::Ok(ok) => &ok.subject,
            FetchResult::Err(err) => &err.subject,
        }
    }

    pub fn elapsed(&self) -> f64 {
        match self {
            FetchResult::Ok(ok) => ok.elapsed,
            FetchResult::Err(err) => err.elapsed,
        }
    }

    pub fn error_message(&self) -> Option<&str> {
        match self {
            FetchResult::Ok(_) => None,
            FetchResult::Err(err) => Some(&err.message),
        }
    }

    /// Records in display order: one per feed item, else the single record.
    pub fn records(&self) -> Vec<Record> {
        match self {
            FetchResult::Ok(FetchSuccess { items: Some(items), .. }) => items.clone(),
            FetchResult::Ok(ok) => vec![ok.fields.clone()],
            FetchResult::Err(err) => vec![err.record()],
        }
    }

    /// Picture URL worth downloading; `None` for sentinels, errors and empty feeds.
    pub fn picture_url(&self) -> Option<&str> {
        let FetchResult::Ok(ok) = self else { return None };
        let field = ok.platform.picture_field();
        match &ok.items {
            Some(items) => items.first().and_then(|r| r.found(field)),
            None => ok.fields.found(field),
        }
    }
}

impl FetchFailure {
    pub fn record(&self) -> Record {
        record! {
            ERROR_FIELD => self.message.clone(),
            PERFORMANCE_FIELD => performance_line(self.elapsed),
        }
    }
}
