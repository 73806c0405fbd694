use business::domain::price::lookup::{LookupStatus, PriceLookup};
use business::domain::price::model::PriceRecord;

use super::error_mapper::IntoUserMessage;

pub const NOT_AVAILABLE: &str = "not available";

#[derive(Debug, Clone, PartialEq)]
pub struct PriceRow {
    pub label: &'static str,
    pub value: String,
}

#[derive(Debug, Clone, PartialEq)]
pub struct PriceSection {
    pub title: &'static str,
    pub rows: Vec<PriceRow>,
}

/// Content of the price details panel for the current lookup state.
#[derive(Debug, Clone, PartialEq)]
pub enum PricePanel {
    Hidden,
    Loading,
    Error(String),
    Details(Vec<PriceSection>),
}

impl PricePanel {
    pub fn from_lookup(lookup: &PriceLookup) -> Self {
        match lookup.status() {
            LookupStatus::Closed => PricePanel::Hidden,
            LookupStatus::Loading => PricePanel::Loading,
            LookupStatus::Failed => PricePanel::Error(
                lookup
                    .error()
                    .map(|err| err.user_message())
                    .unwrap_or_default(),
            ),
            LookupStatus::Loaded => match lookup.record() {
                Some(record) => PricePanel::Details(sections(record)),
                None => PricePanel::Hidden,
            },
        }
    }

    /// Value shown for `label`, if the panel has details.
    pub fn value_of(&self, label: &str) -> Option<&str> {
        let PricePanel::Details(sections) = self else {
            return None;
        };
        sections
            .iter()
            .flat_map(|section| section.rows.iter())
            .find(|row| row.label == label)
            .map(|row| row.value.as_str())
    }

    pub fn render(&self) -> String {
        match self {
            PricePanel::Hidden => String::new(),
            PricePanel::Loading => "Loading price data...".to_string(),
            PricePanel::Error(message) => message.clone(),
            PricePanel::Details(sections) => sections
                .iter()
                .map(|section| {
                    let rows: Vec<String> = section
                        .rows
                        .iter()
                        .map(|row| format!("  {}: {}", row.label, row.value))
                        .collect();
                    format!("{}\n{}", section.title, rows.join("\n"))
                })
                .collect::<Vec<_>>()
                .join("\n"),
        }
    }
}

fn sections(record: &PriceRecord) -> Vec<PriceSection> {
    vec![
        PriceSection {
            title: "Base prices",
            rows: vec![
                row("Regular price", money(record.regular_price)),
                row("Origin tax", percent(record.origin_tax)),
                row("Commercial price", money(record.commercial_price)),
            ],
        },
        PriceSection {
            title: "Functional prices",
            rows: vec![
                row("Functional price", optional_money(record.functional_price)),
                row(
                    "Full functional price",
                    money(record.final_full_functional_price),
                ),
                row(
                    "Functional promotion price",
                    money(record.final_full_price_promotion_functional),
                ),
            ],
        },
        PriceSection {
            title: "Commercial prices",
            rows: vec![
                row(
                    "Full commercial price",
                    optional_money(record.final_full_price_commercial),
                ),
                row(
                    "Commercial promotion price",
                    money(record.final_full_price_promotion_commercial),
                ),
            ],
        },
    ]
}

fn row(label: &'static str, value: String) -> PriceRow {
    PriceRow { label, value }
}

fn money(amount: f64) -> String {
    format!("${:.2}", amount)
}

fn optional_money(amount: Option<f64>) -> String {
    amount
        .map(money)
        .unwrap_or_else(|| NOT_AVAILABLE.to_string())
}

fn percent(rate: f64) -> String {
    format!("{:.2}%", rate)
}
