use failure_taxonomy::{Failure, FailureKind};
use serde::Serialize;
use serde_json::Value;
use tabled::settings::Style;
use tabled::{Table, Tabled};

#[derive(Clone, Debug)]
pub enum OutputFormat {
    Table,
    Json,
    Markdown,
}

#[derive(Tabled, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct KindRow {
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "Default Code", display_with = "format_code")]
    default_code: Option<u16>,
    #[tabled(rename = "Description")]
    description: String,
}

impl From<FailureKind> for KindRow {
    fn from(kind: FailureKind) -> Self {
        Self {
            kind: kind.name().to_string(),
            default_code: kind.default_http_code(),
            description: kind.description().to_string(),
        }
    }
}

#[derive(Tabled, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct FailureRow {
    #[tabled(rename = "Kind")]
    kind: String,
    #[tabled(rename = "HTTP Code", display_with = "format_code")]
    http_code: Option<u16>,
    #[tabled(rename = "Message")]
    message: String,
    #[tabled(rename = "Additional Data", display_with = "format_data")]
    additional_data: Option<Value>,
}

impl From<&Failure<Value>> for FailureRow {
    fn from(failure: &Failure<Value>) -> Self {
        Self {
            kind: failure.kind().name().to_string(),
            http_code: failure.http_code(),
            message: failure.to_string(),
            additional_data: failure.additional_data().cloned(),
        }
    }
}

// -- Row builders --

fn build_kind_rows(kinds: &[FailureKind]) -> Vec<KindRow> {
    kinds.iter().copied().map(KindRow::from).collect()
}

// -- Table output --

pub fn print_kinds_table(kinds: &[FailureKind]) {
    println!("{}", Table::new(build_kind_rows(kinds)));
}

pub fn print_failure_table(failure: &Failure<Value>) {
    println!("{}", Table::new([FailureRow::from(failure)]));
}

// -- Markdown output --

pub fn print_kinds_markdown(kinds: &[FailureKind]) {
    let mut table = Table::new(build_kind_rows(kinds));
    table.with(Style::markdown());
    println!("{}", table);
}

pub fn print_failure_markdown(failure: &Failure<Value>) {
    let mut table = Table::new([FailureRow::from(failure)]);
    table.with(Style::markdown());
    println!("{}", table);
}

// -- JSON output --

pub fn print_json<T: serde::Serialize>(data: &T) {
    match serde_json::to_string_pretty(data) {
        Ok(json) => println!("{}", json),
        Err(e) => eprintln!("Failed to serialize to JSON: {}", e),
    }
}

fn format_code(code: &Option<u16>) -> String {
    match code {
        Some(code) => code.to_string(),
        None => "-".to_string(),
    }
}

fn format_data(data: &Option<Value>) -> String {
    data.as_ref().map(Value::to_string).unwrap_or_default()
}

#[cfg(test)]
#[path = "output_tests.rs"]
mod tests;
