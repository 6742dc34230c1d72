//! Table/row client for the external backend's REST surface.
//!
//! Every domain screen talks to the backend through [`TableQuery`], a small
//! builder for the filter/order query string, plus [`rpc`] for data-layer
//! functions. Responses are mapped onto [`ApiError`] by status code.

use gloo::net::http::{Request, RequestBuilder, Response};
use serde::de::DeserializeOwned;
use serde::Serialize;
use thiserror::Error;

use crate::config::{BACKEND_URL, PUBLISHABLE_KEY};
use crate::services::auth::AuthService;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ApiError {
    #[error("falha de rede: {0}")]
    Network(String),
    #[error("requisição inválida: {0}")]
    Validation(String),
    #[error("não autorizado")]
    Unauthorized,
    #[error("e-mail não confirmado")]
    EmailNotConfirmed,
    #[error("registro não encontrado")]
    NotFound,
    #[error("erro no servidor: {0}")]
    Server(String),
}

impl From<gloo::net::Error> for ApiError {
    fn from(error: gloo::net::Error) -> Self {
        ApiError::Network(error.to_string())
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Order {
    Ascending,
    Descending,
}

/// Builder for one request against a backend table.
#[derive(Debug, Clone)]
pub struct TableQuery {
    table: &'static str,
    select: &'static str,
    filters: Vec<(String, String)>,
    order: Option<String>,
    limit: Option<u32>,
}

impl TableQuery {
    pub fn new(table: &'static str) -> Self {
        TableQuery {
            table,
            select: "*",
            filters: Vec::new(),
            order: None,
            limit: None,
        }
    }

    pub fn select(mut self, columns: &'static str) -> Self {
        self.select = columns;
        self
    }

    pub fn eq(mut self, column: &str, value: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("eq.{}", encode(value))));
        self
    }

    pub fn neq(mut self, column: &str, value: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("neq.{}", encode(value))));
        self
    }

    /// Case-insensitive substring match.
    pub fn ilike(mut self, column: &str, fragment: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("ilike.*{}*", encode(fragment))));
        self
    }

    /// Array column contains the given element.
    pub fn contains(mut self, column: &str, element: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("cs.%7B{}%7D", encode(element))));
        self
    }

    pub fn gte(mut self, column: &str, value: &str) -> Self {
        self.filters
            .push((column.to_string(), format!("gte.{}", encode(value))));
        self
    }

    pub fn in_list(mut self, column: &str, values: &[String]) -> Self {
        let joined = values
            .iter()
            .map(|v| encode(v))
            .collect::<Vec<_>>()
            .join(",");
        self.filters
            .push((column.to_string(), format!("in.({joined})")));
        self
    }

    pub fn order(mut self, column: &str, direction: Order) -> Self {
        let suffix = match direction {
            Order::Ascending => "asc",
            Order::Descending => "desc",
        };
        self.order = Some(format!("{column}.{suffix}"));
        self
    }

    pub fn limit(mut self, count: u32) -> Self {
        self.limit = Some(count);
        self
    }

    fn query_string(&self) -> String {
        let mut parts = vec![format!("select={}", self.select)];
        for (column, predicate) in &self.filters {
            parts.push(format!("{column}={predicate}"));
        }
        if let Some(order) = &self.order {
            parts.push(format!("order={order}"));
        }
        if let Some(limit) = self.limit {
            parts.push(format!("limit={limit}"));
        }
        parts.join("&")
    }

    fn url(&self) -> String {
        format!("{BACKEND_URL}/rest/v1/{}?{}", self.table, self.query_string())
    }

    pub async fn rows<T: DeserializeOwned>(self) -> Result<Vec<T>, ApiError> {
        let response = with_auth(Request::get(&self.url())).send().await?;
        handle_json(response).await
    }

    pub async fn maybe_single<T: DeserializeOwned>(self) -> Result<Option<T>, ApiError> {
        let rows: Vec<T> = self.limit(1).rows().await?;
        Ok(rows.into_iter().next())
    }

    pub async fn single<T: DeserializeOwned>(self) -> Result<T, ApiError> {
        self.maybe_single().await?.ok_or(ApiError::NotFound)
    }

    pub async fn insert<B: Serialize>(self, body: &B) -> Result<(), ApiError> {
        let response = with_auth(Request::post(&self.url()))
            .header("Prefer", "return=minimal")
            .json(body)?
            .send()
            .await?;
        handle_empty(response).await
    }

    /// PATCH every row matched by the filters.
    pub async fn update<B: Serialize>(self, body: &B) -> Result<(), ApiError> {
        let response = with_auth(Request::patch(&self.url()))
            .header("Prefer", "return=minimal")
            .json(body)?
            .send()
            .await?;
        handle_empty(response).await
    }
}

/// Invoke a data-layer function.
pub async fn rpc<B: Serialize>(function: &str, args: &B) -> Result<(), ApiError> {
    let url = format!("{BACKEND_URL}/rest/v1/rpc/{function}");
    let response = with_auth(Request::post(&url)).json(args)?.send().await?;
    handle_empty(response).await
}

fn with_auth(builder: RequestBuilder) -> RequestBuilder {
    let builder = builder
        .header("apikey", PUBLISHABLE_KEY)
        .header("Content-Type", "application/json");
    match AuthService::snapshot() {
        Some(session) => builder.header(
            "Authorization",
            &format!("Bearer {}", session.access_token),
        ),
        None => builder,
    }
}

async fn handle_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    match response.status() {
        200..=299 => Ok(response.json().await?),
        status => Err(error_for(status, response).await),
    }
}

async fn handle_empty(response: Response) -> Result<(), ApiError> {
    match response.status() {
        200..=299 => Ok(()),
        status => Err(error_for(status, response).await),
    }
}

async fn error_for(status: u16, response: Response) -> ApiError {
    match status {
        401 => ApiError::Unauthorized,
        404 => ApiError::NotFound,
        400..=499 => {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "requisição recusada".to_string());
            ApiError::Validation(text)
        }
        _ => {
            let text = response
                .text()
                .await
                .unwrap_or_else(|_| "erro interno".to_string());
            ApiError::Server(text)
        }
    }
}

/// Percent-encode a filter value. Keeps the characters PostgREST treats as
/// plain data (`*` stays raw so `ilike` patterns pass through).
fn encode(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    for byte in value.bytes() {
        match byte {
            b'A'..=b'Z' | b'a'..=b'z' | b'0'..=b'9' | b'-' | b'_' | b'.' | b'~' | b'*' => {
                out.push(byte as char)
            }
            _ => out.push_str(&format!("%{byte:02X}")),
        }
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn builds_equality_and_order() {
        let query = TableQuery::new("pet_caregivers")
            .eq("verified", "true")
            .order("rating", Order::Descending);
        assert_eq!(
            query.query_string(),
            "select=*&verified=eq.true&order=rating.desc"
        );
    }

    #[test]
    fn builds_substring_and_containment() {
        let query = TableQuery::new("pet_caregivers")
            .ilike("city", "São Paulo")
            .contains("available_services", "passeio")
            .gte("rating", "4.5");
        assert_eq!(
            query.query_string(),
            "select=*&city=ilike.*S%C3%A3o%20Paulo*&available_services=cs.%7Bpasseio%7D&rating=gte.4.5"
        );
    }

    #[test]
    fn builds_in_list_and_limit() {
        let query = TableQuery::new("profiles")
            .select("id,full_name,avatar_url")
            .in_list("id", &["a1".to_string(), "b2".to_string()])
            .limit(2);
        assert_eq!(
            query.query_string(),
            "select=id,full_name,avatar_url&id=in.(a1,b2)&limit=2"
        );
    }

    #[test]
    fn builds_neq_for_read_marking() {
        let query = TableQuery::new("messages")
            .eq("booking_id", "b-1")
            .neq("sender_id", "u-1");
        assert_eq!(
            query.query_string(),
            "select=*&booking_id=eq.b-1&sender_id=neq.u-1"
        );
    }

    #[test]
    fn encodes_reserved_characters() {
        assert_eq!(encode("São Paulo"), "S%C3%A3o%20Paulo");
        assert_eq!(encode("a&b=c"), "a%26b%3Dc");
        assert_eq!(encode("rua 7"), "rua%207");
        assert_eq!(encode("*keep*"), "*keep*");
    }
}
