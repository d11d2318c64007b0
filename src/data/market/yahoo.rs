use async_trait::async_trait;
use chrono::{DateTime, Utc};
use reqwest::Client;
use serde::Deserialize;

use crate::config::DASHBOARD;
use crate::data::market::{BarRequest, MarketDataProvider};
use crate::domain::{Bar, DashboardError, DashboardResult};

// Yahoo rejects requests without a browser-ish agent
const USER_AGENT: &str = "Mozilla/5.0 (X11; Linux x86_64) level-dashboard";

/// Pulls bars from the Yahoo Finance v8 chart endpoint.
pub struct YahooChartProvider {
    client: Client,
    base_url: String,
}

impl YahooChartProvider {
    pub fn new() -> DashboardResult<Self> {
        Self::with_base_url(DASHBOARD.market.chart_base_url)
    }

    pub fn with_base_url(base_url: impl Into<String>) -> DashboardResult<Self> {
        let client = Client::builder()
            .timeout(DASHBOARD.market.request_timeout)
            .user_agent(USER_AGENT)
            .build()
            .map_err(|e| DashboardError::FetchError(format!("HTTP client setup: {}", e)))?;
        Ok(Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        })
    }
}

#[async_trait]
impl MarketDataProvider for YahooChartProvider {
    fn signature(&self) -> &'static str {
        "Yahoo Chart API"
    }

    async fn fetch_bars(&self, request: &BarRequest) -> DashboardResult<Vec<Bar>> {
        let period2 = Utc::now();
        let period1 = period2 - request.lookback;
        let url = format!("{}/{}", self.base_url, request.symbol);

        log::info!(
            "Fetching {} {} bars since {}",
            request.symbol,
            request.interval,
            period1.format("%Y-%m-%d %H:%M")
        );

        let response = self
            .client
            .get(&url)
            .query(&[
                ("interval", request.interval.as_str().to_string()),
                ("period1", period1.timestamp().to_string()),
                ("period2", period2.timestamp().to_string()),
            ])
            .send()
            .await
            .map_err(|e| DashboardError::FetchError(format!("{}: {}", request.symbol, e)))?;

        let status = response.status();
        let body = response
            .text()
            .await
            .map_err(|e| DashboardError::FetchError(format!("reading response: {}", e)))?;

        match parse_chart_response(&body) {
            Ok(bars) if status.is_success() => Ok(bars),
            Ok(_) => Err(DashboardError::FetchError(format!("HTTP {}", status))),
            // Error bodies still carry a useful description, prefer it to the bare status
            Err(e) if status.is_success() => Err(e),
            Err(e) => Err(DashboardError::FetchError(format!("HTTP {}: {}", status, e))),
        }
    }
}

#[derive(Debug, Deserialize)]
struct ChartEnvelope {
    chart: ChartBody,
}

#[derive(Debug, Deserialize)]
struct ChartBody {
    result: Option<Vec<ChartResult>>,
    error: Option<ChartError>,
}

#[derive(Debug, Deserialize)]
struct ChartError {
    code: String,
    description: String,
}

#[derive(Debug, Deserialize)]
struct ChartResult {
    #[serde(default)]
    timestamp: Vec<i64>,
    indicators: Indicators,
}

#[derive(Debug, Deserialize)]
struct Indicators {
    #[serde(default)]
    quote: Vec<Quote>,
}

#[derive(Debug, Default, Deserialize)]
struct Quote {
    #[serde(default)]
    open: Vec<Option<f64>>,
    #[serde(default)]
    high: Vec<Option<f64>>,
    #[serde(default)]
    low: Vec<Option<f64>>,
    #[serde(default)]
    close: Vec<Option<f64>>,
    #[serde(default)]
    volume: Vec<Option<f64>>,
}

/// Turns a chart response body into bars ascending by time.
/// Rows missing any OHLC value are gaps and get dropped; a missing volume reads as 0.
pub fn parse_chart_response(body: &str) -> DashboardResult<Vec<Bar>> {
    let envelope: ChartEnvelope = serde_json::from_str(body)
        .map_err(|e| DashboardError::FetchError(format!("unexpected response: {}", e)))?;

    if let Some(err) = envelope.chart.error {
        return Err(DashboardError::FetchError(format!(
            "{}: {}",
            err.code, err.description
        )));
    }

    let Some(result) = envelope
        .chart
        .result
        .and_then(|results| results.into_iter().next())
    else {
        return Ok(Vec::new());
    };

    let quote = result.indicators.quote.into_iter().next().unwrap_or_default();
    let value = |column: &[Option<f64>], idx: usize| column.get(idx).copied().flatten();

    let mut bars: Vec<Bar> = result
        .timestamp
        .iter()
        .enumerate()
        .filter_map(|(idx, &ts)| {
            let timestamp = DateTime::from_timestamp(ts, 0)?;
            Some(Bar::new(
                timestamp,
                value(&quote.open, idx)?,
                value(&quote.high, idx)?,
                value(&quote.low, idx)?,
                value(&quote.close, idx)?,
                value(&quote.volume, idx).unwrap_or(0.0),
            ))
        })
        .collect();

    bars.sort_by_key(|bar| bar.timestamp);
    Ok(bars)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parses_rows_and_drops_gaps() {
        let body = r#"{"chart":{"result":[{
            "meta":{"symbol":"ES=F"},
            "timestamp":[1736173800,1736174100,1736174400,1736174700],
            "indicators":{"quote":[{
                "open":[6100.25,6101.0,null,6103.5],
                "high":[6101.5,6102.0,null,6104.0],
                "low":[6099.75,6100.5,null,6102.0],
                "close":[6101.0,6101.75,null,6102.25],
                "volume":[1520,980,null,null]
            }]}
        }],"error":null}}"#;

        let bars = parse_chart_response(body).unwrap();
        assert_eq!(bars.len(), 3);
        assert_eq!(bars[0].timestamp.timestamp(), 1736173800);
        assert_eq!(bars[0].volume, 1520.0);
        // Row 2 is a gap, row 3 keeps its prices with zero volume
        assert_eq!(bars[2].timestamp.timestamp(), 1736174700);
        assert_eq!(bars[2].close, 6102.25);
        assert_eq!(bars[2].volume, 0.0);
    }

    #[test]
    fn out_of_order_rows_are_sorted() {
        let body = r#"{"chart":{"result":[{
            "timestamp":[200,100],
            "indicators":{"quote":[{
                "open":[2.0,1.0],"high":[2.0,1.0],"low":[2.0,1.0],"close":[2.0,1.0],"volume":[0,0]
            }]}
        }],"error":null}}"#;

        let bars = parse_chart_response(body).unwrap();
        assert_eq!(bars[0].close, 1.0);
        assert_eq!(bars[1].close, 2.0);
    }

    #[test]
    fn provider_error_is_a_fetch_error() {
        let body = r#"{"chart":{"result":null,"error":{"code":"Not Found","description":"No data found, symbol may be delisted"}}}"#;
        match parse_chart_response(body) {
            Err(DashboardError::FetchError(msg)) => assert!(msg.contains("delisted")),
            other => panic!("expected fetch error, got {:?}", other),
        }
    }

    #[test]
    fn empty_result_is_empty_not_an_error() {
        let body = r#"{"chart":{"result":[{"meta":{},"indicators":{"quote":[{}]}}],"error":null}}"#;
        assert!(parse_chart_response(body).unwrap().is_empty());

        let body = r#"{"chart":{"result":[],"error":null}}"#;
        assert!(parse_chart_response(body).unwrap().is_empty());
    }

    #[test]
    fn garbage_is_a_fetch_error() {
        assert!(matches!(
            parse_chart_response("<html>rate limited</html>"),
            Err(DashboardError::FetchError(_))
        ));
    }
}
