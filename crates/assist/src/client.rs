use chrono::NaiveDate;
use reqwest::Url;
use serde::Deserialize;
use serde_json::{Value, json};

use ledger::{Money, Transaction, TransactionFilter, TransactionKind};

use crate::{AssistError, AssistSettings, ResultAssist, prompts};

/// Fixed reply for a summarize request with no data; no request goes out.
pub const EMPTY_SUMMARY: &str = "There is no transaction data to summarize for this period.";

/// Client for a `generateContent` REST endpoint.
#[derive(Debug, Clone)]
pub struct AssistClient {
    base_url: Url,
    model: String,
    api_key: String,
    http: reqwest::Client,
}

#[derive(Debug, Deserialize)]
struct GenerateReply {
    #[serde(default)]
    candidates: Vec<Candidate>,
}

#[derive(Debug, Deserialize)]
struct Candidate {
    #[serde(default)]
    content: Content,
}

#[derive(Debug, Default, Deserialize)]
struct Content {
    #[serde(default)]
    parts: Vec<Part>,
}

#[derive(Debug, Deserialize)]
struct Part {
    #[serde(default)]
    text: String,
}

impl GenerateReply {
    fn first_text(self) -> Option<String> {
        self.candidates
            .into_iter()
            .flat_map(|candidate| candidate.content.parts)
            .map(|part| part.text)
            .find(|text| !text.is_empty())
    }
}

/// The JSON shape the model is asked to produce for a query. Amounts arrive
/// in major units and are converted to cents here.
#[derive(Debug, Default, Deserialize)]
#[serde(default, rename_all = "camelCase")]
struct QueryFilterWire {
    text: Option<String>,
    #[serde(rename = "type")]
    kind: Option<String>,
    start_date: Option<NaiveDate>,
    end_date: Option<NaiveDate>,
    min_amount: Option<f64>,
    max_amount: Option<f64>,
}

impl QueryFilterWire {
    fn into_filter(self) -> ResultAssist<TransactionFilter> {
        let invalid = |err: ledger::LedgerError| AssistError::Generation(err.to_string());

        let kind = self
            .kind
            .as_deref()
            .filter(|kind| !kind.is_empty())
            .map(TransactionKind::try_from)
            .transpose()
            .map_err(invalid)?;
        let min_amount = self
            .min_amount
            .map(Money::from_major_f64)
            .transpose()
            .map_err(invalid)?;
        let max_amount = self
            .max_amount
            .map(Money::from_major_f64)
            .transpose()
            .map_err(invalid)?;

        Ok(TransactionFilter {
            text: self.text.filter(|text| !text.is_empty()),
            kind,
            min_amount,
            max_amount,
            start_date: self.start_date,
            end_date: self.end_date,
        })
    }
}

fn query_schema() -> Value {
    json!({
        "type": "object",
        "properties": {
            "text": { "type": "string" },
            "type": { "type": "string", "enum": ["income", "expense"] },
            "startDate": { "type": "string" },
            "endDate": { "type": "string" },
            "minAmount": { "type": "number" },
            "maxAmount": { "type": "number" },
        },
    })
}

fn strip_enclosing_quotes(value: &str) -> &str {
    for quote in ['"', '\''] {
        if let Some(stripped) = value
            .strip_prefix(quote)
            .and_then(|rest| rest.strip_suffix(quote))
        {
            return stripped;
        }
    }
    value
}

impl AssistClient {
    /// Builds a client from settings. A missing api key fails here, before
    /// any request is made.
    pub fn new(settings: AssistSettings) -> ResultAssist<Self> {
        if settings.api_key.trim().is_empty() {
            return Err(AssistError::MissingApiKey);
        }
        let base_url = Url::parse(&settings.base_url).map_err(|err| {
            AssistError::Config(config::ConfigError::Message(format!(
                "invalid base_url: {err}"
            )))
        })?;
        Ok(Self {
            base_url,
            model: settings.model,
            api_key: settings.api_key,
            http: reqwest::Client::new(),
        })
    }

    /// One-paragraph summary of the given transactions.
    ///
    /// An empty list returns [`EMPTY_SUMMARY`] without calling the endpoint.
    pub async fn summarize(&self, transactions: &[Transaction]) -> ResultAssist<String> {
        if transactions.is_empty() {
            return Ok(EMPTY_SUMMARY.to_string());
        }
        let serialized = serde_json::to_string_pretty(transactions)
            .map_err(|err| AssistError::Generation(err.to_string()))?;
        let prompt = prompts::SUMMARIZE.replace("{transactions}", &serialized);
        let text = self.generate(&prompt, None).await?;
        Ok(text.trim().to_string())
    }

    /// Expands a short hint into a fuller transaction description. One pair
    /// of enclosing quotes is stripped when the model adds them anyway.
    pub async fn expand_description(&self, hint: &str) -> ResultAssist<String> {
        let prompt = prompts::EXPAND_DESCRIPTION.replace("{hint}", hint);
        let text = self.generate(&prompt, None).await?;
        Ok(strip_enclosing_quotes(text.trim()).to_string())
    }

    /// Turns a natural-language query into a structured filter. `today`
    /// anchors relative ranges in the prompt.
    ///
    /// Never fails: any error degrades to a plain text filter over the query
    /// with a warning in the log.
    pub async fn parse_query(&self, query: &str, today: NaiveDate) -> TransactionFilter {
        match self.try_parse_query(query, today).await {
            Ok(filter) => filter,
            Err(err) => {
                tracing::warn!(error = %err, query, "query parse degraded to a text filter");
                TransactionFilter::from_text(query)
            }
        }
    }

    async fn try_parse_query(
        &self,
        query: &str,
        today: NaiveDate,
    ) -> ResultAssist<TransactionFilter> {
        let prompt = prompts::PARSE_QUERY
            .replace("{today}", &today.format("%Y-%m-%d").to_string())
            .replace("{query}", query);
        let generation_config = json!({
            "responseMimeType": "application/json",
            "responseSchema": query_schema(),
        });
        let text = self.generate(&prompt, Some(generation_config)).await?;
        let wire: QueryFilterWire = serde_json::from_str(&text)
            .map_err(|err| AssistError::Generation(format!("schema mismatch: {err}")))?;
        wire.into_filter()
    }

    async fn generate(&self, prompt: &str, generation_config: Option<Value>) -> ResultAssist<String> {
        let endpoint = self
            .base_url
            .join(&format!("v1beta/models/{}:generateContent", self.model))
            .map_err(|err| AssistError::Generation(format!("invalid endpoint: {err}")))?;

        let mut body = json!({
            "contents": [{ "parts": [{ "text": prompt }] }],
        });
        if let Some(generation_config) = generation_config {
            body["generationConfig"] = generation_config;
        }

        let res = self
            .http
            .post(endpoint)
            .header("x-goog-api-key", &self.api_key)
            .json(&body)
            .send()
            .await
            .map_err(|err| AssistError::Generation(err.to_string()))?;

        if !res.status().is_success() {
            let status = res.status();
            let body = res
                .text()
                .await
                .unwrap_or_else(|_| "unknown error".to_string());
            return Err(AssistError::Generation(format!("{status}: {body}")));
        }

        let reply = res
            .json::<GenerateReply>()
            .await
            .map_err(|err| AssistError::Generation(err.to_string()))?;
        reply
            .first_text()
            .ok_or_else(|| AssistError::Generation("empty reply".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strips_one_pair_of_enclosing_quotes() {
        assert_eq!(strip_enclosing_quotes("\"office rent\""), "office rent");
        assert_eq!(strip_enclosing_quotes("'office rent'"), "office rent");
        assert_eq!(strip_enclosing_quotes("\"nested\" quote"), "\"nested\" quote");
        assert_eq!(strip_enclosing_quotes("plain"), "plain");
        assert_eq!(strip_enclosing_quotes("\"'both'\""), "'both'");
    }

    #[test]
    fn wire_filter_converts_major_amounts_to_cents() {
        let wire: QueryFilterWire = serde_json::from_str(
            r#"{"text":"rent","type":"expense","minAmount":10.5,"maxAmount":100,
                "startDate":"2024-01-01","endDate":"2024-01-31"}"#,
        )
        .unwrap();
        let filter = wire.into_filter().unwrap();

        assert_eq!(filter.text.as_deref(), Some("rent"));
        assert_eq!(filter.kind, Some(TransactionKind::Expense));
        assert_eq!(filter.min_amount, Some(Money::new(10_50)));
        assert_eq!(filter.max_amount, Some(Money::new(100_00)));
        assert_eq!(
            filter.start_date,
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        assert_eq!(filter.end_date, NaiveDate::from_ymd_opt(2024, 1, 31));
    }

    #[test]
    fn wire_filter_rejects_unknown_kind() {
        let wire: QueryFilterWire =
            serde_json::from_str(r#"{"type":"transfer"}"#).unwrap();
        assert!(wire.into_filter().is_err());
    }

    #[test]
    fn empty_wire_fields_are_dropped() {
        let wire: QueryFilterWire =
            serde_json::from_str(r#"{"text":"","type":""}"#).unwrap();
        let filter = wire.into_filter().unwrap();
        assert!(filter.is_empty());
    }
}
