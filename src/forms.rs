//! The four CRUD form handlers
//!
//! Each handler validates its form, sends at most one request through the
//! gateway and turns the outcome into an `Output`. Validation failures return
//! before anything is sent.

use crate::api::{api_call, resource_url, ApiError, ApiRequest, Transport};
use crate::output::Output;
use crate::types::{FormField, NewPizza, Operation, PriceUpdate};
use log::{info, warn};
use serde_json::Value;

#[derive(Debug, Clone, Default, PartialEq)]
pub struct CreateForm {
    pub name: String,
    pub price: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct UpdateForm {
    pub id: String,
    pub price: String,
}

#[derive(Debug, Clone, Default, PartialEq)]
pub struct DeleteForm {
    pub id: String,
}

/// Field buffers of every form. The list form has no fields.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PizzaForms {
    pub create: CreateForm,
    pub update: UpdateForm,
    pub delete: DeleteForm,
}

impl PizzaForms {
    pub fn field(&self, operation: Operation, field: FormField) -> Option<&str> {
        let value = match (operation, field) {
            (Operation::Create, FormField::Name) => &self.create.name,
            (Operation::Create, FormField::Price) => &self.create.price,
            (Operation::Update, FormField::Id) => &self.update.id,
            (Operation::Update, FormField::Price) => &self.update.price,
            (Operation::Delete, FormField::Id) => &self.delete.id,
            _ => return None,
        };
        Some(value.as_str())
    }

    pub fn field_mut(&mut self, operation: Operation, field: FormField) -> Option<&mut String> {
        match (operation, field) {
            (Operation::Create, FormField::Name) => Some(&mut self.create.name),
            (Operation::Create, FormField::Price) => Some(&mut self.create.price),
            (Operation::Update, FormField::Id) => Some(&mut self.update.id),
            (Operation::Update, FormField::Price) => Some(&mut self.update.price),
            (Operation::Delete, FormField::Id) => Some(&mut self.delete.id),
            _ => None,
        }
    }

    /// Clear every field of one form
    pub fn reset(&mut self, operation: Operation) {
        match operation {
            Operation::List => {}
            Operation::Create => self.create = CreateForm::default(),
            Operation::Update => self.update = UpdateForm::default(),
            Operation::Delete => self.delete = DeleteForm::default(),
        }
    }
}

/// Result of one submission
#[derive(Debug, Clone, PartialEq)]
pub struct FormOutcome {
    pub output: Output,
    /// The form's fields should be cleared (set after a successful call)
    pub reset_form: bool,
}

impl FormOutcome {
    fn succeeded(output: Output) -> Self {
        Self {
            output,
            reset_form: true,
        }
    }

    fn failed(output: Output) -> Self {
        Self {
            output,
            reset_form: false,
        }
    }
}

/// Run the handler of the given operation against a snapshot of its form
pub async fn submit<T: Transport>(
    transport: &T,
    base_url: &str,
    operation: Operation,
    forms: &PizzaForms,
) -> FormOutcome {
    match operation {
        Operation::List => handle_list(transport, base_url).await,
        Operation::Create => handle_create(transport, base_url, &forms.create).await,
        Operation::Update => handle_update(transport, base_url, &forms.update).await,
        Operation::Delete => handle_delete(transport, base_url, &forms.delete).await,
    }
}

/// GET the whole collection
pub async fn handle_list<T: Transport>(transport: &T, base_url: &str) -> FormOutcome {
    let request = ApiRequest::new(Operation::List.method(), base_url);

    match api_call(transport, request).await {
        // Listing has nothing to reset, so report it like any other success
        Ok(data) => FormOutcome::succeeded(Output::success("GET succeeded (all pizzas)", data)),
        Err(err) => fail("GET failed", err),
    }
}

/// POST a new pizza built from the name and price fields
pub async fn handle_create<T: Transport>(
    transport: &T,
    base_url: &str,
    form: &CreateForm,
) -> FormOutcome {
    const TITLE: &str = "POST failed";

    let name = form.name.trim();
    let price = match parse_price(&form.price) {
        Some(price) if !name.is_empty() => price,
        _ => return reject(TITLE, "Missing name or invalid price."),
    };

    let pizza = NewPizza {
        name: name.to_string(),
        price,
    };
    info!("Creating pizza {:?} at {}", pizza.name, pizza.price);

    let request = match ApiRequest::new(Operation::Create.method(), base_url).json(&pizza) {
        Ok(request) => request,
        Err(e) => return fail(TITLE, ApiError::from(e)),
    };

    match api_call(transport, request).await {
        Ok(data) => FormOutcome::succeeded(Output::success(
            "POST succeeded (new pizza created)",
            data,
        )),
        Err(err) => fail(TITLE, err),
    }
}

/// PUT a new price for the pizza with the given id
pub async fn handle_update<T: Transport>(
    transport: &T,
    base_url: &str,
    form: &UpdateForm,
) -> FormOutcome {
    const TITLE: &str = "PUT failed";

    let id = form.id.trim();
    let price = match parse_price(&form.price) {
        Some(price) if !id.is_empty() => price,
        _ => return reject(TITLE, "Missing ID or invalid price!"),
    };

    let url = match resource_url(base_url, id) {
        Ok(url) => url,
        Err(e) => return reject(TITLE, e),
    };
    info!("Updating pizza {id} to price {price}");

    let request = ApiRequest::new(Operation::Update.method(), url);
    let request = match request.json(&PriceUpdate { price }) {
        Ok(request) => request,
        Err(e) => return fail(TITLE, ApiError::from(e)),
    };

    match api_call(transport, request).await {
        Ok(data) => {
            // 204 No Content is the usual answer; confirm with the id instead
            let payload = data
                .filter(|value| !value.is_null())
                .unwrap_or_else(|| Value::String(format!("Pizza with ID {id} updated.")));
            FormOutcome::succeeded(Output::success("PUT succeeded", Some(payload)))
        }
        Err(err) => fail(TITLE, err),
    }
}

/// DELETE the pizza with the given id
pub async fn handle_delete<T: Transport>(
    transport: &T,
    base_url: &str,
    form: &DeleteForm,
) -> FormOutcome {
    const TITLE: &str = "DELETE failed";

    let id = form.id.trim();
    if id.is_empty() {
        return reject(TITLE, "Enter an ID!");
    }

    let url = match resource_url(base_url, id) {
        Ok(url) => url,
        Err(e) => return reject(TITLE, e),
    };
    info!("Deleting pizza {id}");

    match api_call(transport, ApiRequest::new(Operation::Delete.method(), url)).await {
        Ok(_) => FormOutcome::succeeded(Output::success(
            "DELETE succeeded",
            Some(Value::String(format!("Pizza with ID {id} deleted."))),
        )),
        Err(err) => fail(TITLE, err),
    }
}

/// A price is any finite number; blank input is not a price
fn parse_price(input: &str) -> Option<f64> {
    input
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|price| price.is_finite())
}

fn reject(title: &str, message: impl Into<String>) -> FormOutcome {
    let message = message.into();
    info!("{title} {message}");
    FormOutcome::failed(Output::error(title, message))
}

fn fail(title: &str, err: ApiError) -> FormOutcome {
    warn!("{title} {err}");
    FormOutcome::failed(Output::error(title, err.to_string()))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::api::RawResponse;
    use serde_json::json;
    use std::sync::Mutex;

    const BASE: &str = "https://localhost:7297/api/pizze";

    /// Records every request and answers with the same canned response
    struct FakeTransport {
        response: RawResponse,
        requests: Mutex<Vec<ApiRequest>>,
    }

    impl FakeTransport {
        fn new(status: u16, status_text: &str, body: &str) -> Self {
            Self {
                response: RawResponse {
                    status,
                    status_text: status_text.to_string(),
                    body: body.to_string(),
                },
                requests: Mutex::new(Vec::new()),
            }
        }

        fn requests(&self) -> Vec<ApiRequest> {
            self.requests.lock().unwrap().clone()
        }
    }

    impl Transport for FakeTransport {
        async fn send(&self, request: ApiRequest) -> anyhow::Result<RawResponse> {
            self.requests.lock().unwrap().push(request);
            Ok(self.response.clone())
        }
    }

    fn create_form(name: &str, price: &str) -> CreateForm {
        CreateForm {
            name: name.to_string(),
            price: price.to_string(),
        }
    }

    fn update_form(id: &str, price: &str) -> UpdateForm {
        UpdateForm {
            id: id.to_string(),
            price: price.to_string(),
        }
    }

    #[tokio::test]
    async fn test_list_renders_exact_payload() {
        let body = concat!(
            r#"[{"id":1,"name":"Margherita","price":6.5},"#,
            r#"{"id":2,"name":"Diavola","price":8}]"#
        );
        let transport = FakeTransport::new(200, "OK", body);

        let outcome = handle_list(&transport, BASE).await;

        let expected: Value = serde_json::from_str(body).unwrap();
        assert_eq!(outcome.output.payload, Some(expected));
        assert!(!outcome.output.is_error);

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, reqwest::Method::GET);
        assert_eq!(requests[0].url, BASE);
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn test_list_error_detail_is_displayed() {
        let transport = FakeTransport::new(500, "Internal Server Error", r#"{"detail":"X"}"#);

        let outcome = handle_list(&transport, BASE).await;

        assert!(outcome.output.is_error);
        assert_eq!(outcome.output.title, "GET failed");
        assert_eq!(outcome.output.payload_text().as_deref(), Some("X"));
    }

    #[tokio::test]
    async fn test_list_empty_error_body_shows_status() {
        let transport = FakeTransport::new(404, "Not Found", "");

        let outcome = handle_list(&transport, BASE).await;

        assert_eq!(
            outcome.output.payload_text().as_deref(),
            Some("HTTP 404: Not Found")
        );
    }

    #[tokio::test]
    async fn test_create_sends_payload_and_resets() {
        let transport = FakeTransport::new(
            201,
            "Created",
            r#"{"id":3,"name":"Marinara","price":5.5}"#,
        );

        let outcome = handle_create(&transport, BASE, &create_form("Marinara", "5.5")).await;

        assert!(outcome.reset_form);
        assert_eq!(outcome.output.title, "POST succeeded (new pizza created)");
        assert_eq!(
            outcome.output.payload,
            Some(json!({ "id": 3, "name": "Marinara", "price": 5.5 }))
        );

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, reqwest::Method::POST);
        assert_eq!(requests[0].url, BASE);
        let sent: Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, json!({ "name": "Marinara", "price": 5.5 }));
    }

    #[tokio::test]
    async fn test_create_with_empty_name_sends_nothing() {
        let transport = FakeTransport::new(201, "Created", "{}");

        let outcome = handle_create(&transport, BASE, &create_form("", "7")).await;

        assert!(transport.requests().is_empty());
        assert!(outcome.output.is_error);
        assert!(!outcome.reset_form);
        assert_eq!(
            outcome.output.payload_text().as_deref(),
            Some("Missing name or invalid price.")
        );
    }

    #[tokio::test]
    async fn test_create_with_non_numeric_price_sends_nothing() {
        let transport = FakeTransport::new(201, "Created", "{}");

        for price in ["abc", "", "  ", "NaN", "inf"] {
            let form = create_form("Margherita", price);
            let outcome = handle_create(&transport, BASE, &form).await;
            assert!(outcome.output.is_error, "price {price:?} should be rejected");
        }

        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_create_failure_keeps_form() {
        let transport = FakeTransport::new(400, "Bad Request", "price must be positive");

        let outcome = handle_create(&transport, BASE, &create_form("Margherita", "-1")).await;

        assert!(!outcome.reset_form);
        assert_eq!(outcome.output.title, "POST failed");
        assert_eq!(
            outcome.output.payload_text().as_deref(),
            Some("price must be positive")
        );
    }

    #[tokio::test]
    async fn test_update_empty_response_confirms_with_id() {
        let transport = FakeTransport::new(204, "No Content", "");

        let outcome = handle_update(&transport, BASE, &update_form("12", "9.5")).await;

        assert!(outcome.reset_form);
        assert_eq!(outcome.output.title, "PUT succeeded");
        let text = outcome.output.payload_text().unwrap();
        assert!(text.contains("12"));
        assert_eq!(text, "Pizza with ID 12 updated.");

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, reqwest::Method::PUT);
        assert_eq!(requests[0].url, format!("{BASE}/12"));
        let sent: Value = serde_json::from_str(requests[0].body.as_deref().unwrap()).unwrap();
        assert_eq!(sent, json!({ "price": 9.5 }));
    }

    #[tokio::test]
    async fn test_update_returns_server_payload_when_present() {
        let transport = FakeTransport::new(200, "OK", r#"{"id":12,"price":9.5}"#);

        let outcome = handle_update(&transport, BASE, &update_form("12", "9.5")).await;

        assert_eq!(outcome.output.payload, Some(json!({ "id": 12, "price": 9.5 })));
    }

    #[tokio::test]
    async fn test_update_null_response_confirms_with_id() {
        let transport = FakeTransport::new(200, "OK", "null");

        let outcome = handle_update(&transport, BASE, &update_form("12", "9.5")).await;

        assert_eq!(outcome.output.title, "PUT succeeded");
        assert_eq!(
            outcome.output.payload_text().as_deref(),
            Some("Pizza with ID 12 updated.")
        );
    }

    #[tokio::test]
    async fn test_update_validation() {
        let transport = FakeTransport::new(204, "No Content", "");

        let missing_id = handle_update(&transport, BASE, &update_form("", "9")).await;
        let bad_price = handle_update(&transport, BASE, &update_form("4", "cheap")).await;

        assert!(transport.requests().is_empty());
        for outcome in [missing_id, bad_price] {
            assert_eq!(outcome.output.title, "PUT failed");
            assert_eq!(
                outcome.output.payload_text().as_deref(),
                Some("Missing ID or invalid price!")
            );
        }
    }

    #[tokio::test]
    async fn test_delete_without_id_sends_nothing() {
        let transport = FakeTransport::new(204, "No Content", "");

        let outcome = handle_delete(&transport, BASE, &DeleteForm::default()).await;

        assert!(transport.requests().is_empty());
        assert_eq!(outcome.output.title, "DELETE failed");
        assert_eq!(outcome.output.payload_text().as_deref(), Some("Enter an ID!"));
    }

    #[tokio::test]
    async fn test_dot_ids_never_reach_the_collection() {
        let transport = FakeTransport::new(204, "No Content", "");

        for id in [".", ".."] {
            let form = DeleteForm {
                id: id.to_string(),
            };
            let delete = handle_delete(&transport, BASE, &form).await;
            let update = handle_update(&transport, BASE, &update_form(id, "9")).await;

            for outcome in [delete, update] {
                assert!(outcome.output.is_error);
                assert!(!outcome.reset_form);
                assert_eq!(
                    outcome.output.payload_text(),
                    Some(format!("Invalid ID: {id}"))
                );
            }
        }

        assert!(transport.requests().is_empty());
    }

    #[tokio::test]
    async fn test_delete_success_ignores_body() {
        let transport = FakeTransport::new(200, "OK", r#"{"deleted":true}"#);
        let form = DeleteForm {
            id: "5".to_string(),
        };

        let outcome = handle_delete(&transport, BASE, &form).await;

        assert!(outcome.reset_form);
        assert_eq!(
            outcome.output.payload_text().as_deref(),
            Some("Pizza with ID 5 deleted.")
        );

        let requests = transport.requests();
        assert_eq!(requests[0].method, reqwest::Method::DELETE);
        assert_eq!(requests[0].url, format!("{BASE}/5"));
        assert!(requests[0].body.is_none());
    }

    #[tokio::test]
    async fn test_delete_not_found() {
        let transport =
            FakeTransport::new(404, "Not Found", r#"{"detail":"Pizza 99 not found"}"#);
        let form = DeleteForm {
            id: "99".to_string(),
        };

        let outcome = handle_delete(&transport, BASE, &form).await;

        assert!(!outcome.reset_form);
        assert_eq!(
            outcome.output.payload_text().as_deref(),
            Some("Pizza 99 not found")
        );
    }

    #[tokio::test]
    async fn test_submit_dispatches_by_operation() {
        let transport = FakeTransport::new(204, "No Content", "");
        let mut forms = PizzaForms::default();
        forms.delete.id = "8".to_string();

        submit(&transport, BASE, Operation::Delete, &forms).await;

        let requests = transport.requests();
        assert_eq!(requests.len(), 1);
        assert_eq!(requests[0].method, reqwest::Method::DELETE);
    }

    #[test]
    fn test_field_access_and_reset() {
        let mut forms = PizzaForms::default();

        forms
            .field_mut(Operation::Update, FormField::Price)
            .unwrap()
            .push_str("10");
        assert_eq!(forms.field(Operation::Update, FormField::Price), Some("10"));
        assert_eq!(forms.field(Operation::Update, FormField::Name), None);
        assert!(forms.field_mut(Operation::List, FormField::Id).is_none());

        forms.reset(Operation::Update);
        assert_eq!(forms.update, UpdateForm::default());
    }

    #[test]
    fn test_parse_price() {
        assert_eq!(parse_price(" 7.5 "), Some(7.5));
        assert_eq!(parse_price("8"), Some(8.0));
        assert_eq!(parse_price(""), None);
        assert_eq!(parse_price("eight"), None);
        assert_eq!(parse_price("NaN"), None);
    }
}
