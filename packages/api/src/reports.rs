//! Report fetching and summarization.
//!
//! Row shape depends on the report type (member rows for "members", bill
//! rows for "bills"/"payments"), so rows stay generic JSON objects and the
//! CSV exporter derives its header from whatever the first row contains.

use serde_json::Value;
use store::KeyValueStore;

use crate::error::ApiError;
use crate::http::HttpClient;

pub type ReportRow = serde_json::Map<String, Value>;

pub const REPORT_TYPES: [(&str, &str); 3] = [
    ("members", "Members Report"),
    ("bills", "Bills Report"),
    ("payments", "Payments Report"),
];

#[derive(Clone)]
pub struct ReportsApi<S: KeyValueStore> {
    http: HttpClient<S>,
}

impl<S: KeyValueStore> ReportsApi<S> {
    pub fn new(http: HttpClient<S>) -> Self {
        Self { http }
    }

    pub async fn fetch(
        &self,
        kind: &str,
        start_date: Option<&str>,
        end_date: Option<&str>,
    ) -> Result<Vec<ReportRow>, ApiError> {
        let mut query: Vec<(&str, &str)> = vec![("type", kind)];
        if let Some(start) = start_date {
            query.push(("startDate", start));
        }
        if let Some(end) = end_date {
            query.push(("endDate", end));
        }
        self.http.get_query("/reports", &query).await
    }
}

/// Sum of the numeric `amount` fields; rows without one count as zero.
pub fn total_amount(rows: &[ReportRow]) -> f64 {
    rows.iter()
        .map(|row| row.get("amount").and_then(Value::as_f64).unwrap_or(0.0))
        .sum()
}

/// Trivial CSV join: header from the first row's keys, one line per row,
/// nested values JSON-encoded. Returns `None` for an empty report.
pub fn to_csv(rows: &[ReportRow]) -> Option<String> {
    let first = rows.first()?;
    let headers: Vec<&str> = first.keys().map(String::as_str).collect();

    let mut lines = Vec::with_capacity(rows.len() + 1);
    lines.push(headers.join(","));
    for row in rows {
        let cells: Vec<String> = headers
            .iter()
            .map(|header| match row.get(*header) {
                None | Some(Value::Null) => String::new(),
                Some(Value::String(s)) => s.clone(),
                Some(other) => other.to_string(),
            })
            .collect();
        lines.push(cells.join(","));
    }
    Some(lines.join("\n"))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ApiConfig;
    use serde_json::json;
    use store::MemoryStore;
    use wiremock::matchers::{method, path, query_param, query_param_is_missing};
    use wiremock::{Mock, MockServer, ResponseTemplate};

    fn rows(values: Vec<Value>) -> Vec<ReportRow> {
        values
            .into_iter()
            .map(|v| v.as_object().unwrap().clone())
            .collect()
    }

    #[test]
    fn test_total_amount_sums_bill_rows() {
        let rows = rows(vec![
            json!({"id": 1, "amount": 10.5}),
            json!({"id": 2, "amount": 20}),
            json!({"id": 3, "amount": 5.25}),
        ]);
        assert_eq!(total_amount(&rows), 35.75);
    }

    #[test]
    fn test_total_amount_tolerates_missing_field() {
        let rows = rows(vec![
            json!({"id": 1, "amount": 10.0}),
            json!({"id": 2}),
            json!({"id": 3, "amount": null}),
        ]);
        assert_eq!(total_amount(&rows), 10.0);
    }

    #[test]
    fn test_to_csv_joins_rows() {
        let rows = rows(vec![
            json!({"amount": 10.5, "id": 1, "memberName": "Jo"}),
            json!({"amount": 20, "id": 2, "memberName": null}),
        ]);
        let csv = to_csv(&rows).unwrap();
        let lines: Vec<&str> = csv.lines().collect();
        assert_eq!(lines[0], "amount,id,memberName");
        assert_eq!(lines[1], "10.5,1,Jo");
        assert_eq!(lines[2], "20,2,");
    }

    #[test]
    fn test_to_csv_empty_report() {
        assert!(to_csv(&[]).is_none());
    }

    #[tokio::test]
    async fn test_fetch_sends_type_and_optional_dates() {
        let server = MockServer::start().await;
        Mock::given(method("GET"))
            .and(path("/reports"))
            .and(query_param("type", "bills"))
            .and(query_param("startDate", "2024-01-01"))
            .and(query_param_is_missing("endDate"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {"id": 1, "amount": 10.5},
            ])))
            .mount(&server)
            .await;

        let reports = ReportsApi::new(HttpClient::new(
            ApiConfig::new(server.uri()),
            MemoryStore::new(),
        ));
        let fetched = reports
            .fetch("bills", Some("2024-01-01"), None)
            .await
            .unwrap();
        assert_eq!(total_amount(&fetched), 10.5);
    }
}
