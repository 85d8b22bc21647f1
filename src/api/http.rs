//! HTTP client for the backend's REST API.

use async_trait::async_trait;
use reqwest::{Client, Response};
use serde::{Deserialize, de::DeserializeOwned};

use crate::{
    api::{ApiError, FinanceApi},
    category::{Category, NewCategory},
    transaction::{NewTransaction, Transaction, TransactionId},
};

const CATEGORIES_PATH: &str = "/api/categorias";
const TRANSACTIONS_PATH: &str = "/api/transacoes";

/// Talks to the backend over HTTP with JSON bodies.
///
/// Requests have no timeout and failed requests are never retried.
#[derive(Debug, Clone)]
pub struct HttpFinanceApi {
    client: Client,
    base_url: String,
}

/// The body the backend sends along with an error status.
#[derive(Debug, Deserialize)]
struct ErrorBody {
    message: Option<String>,
}

impl HttpFinanceApi {
    /// Create a client for the backend at `base_url`, e.g. "http://localhost:8081".
    pub fn new(base_url: &str) -> Self {
        Self {
            client: Client::new(),
            base_url: base_url.trim_end_matches('/').to_owned(),
        }
    }

    /// The URL of the backend this client talks to.
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, path: &str) -> String {
        format!("{}{path}", self.base_url)
    }

    async fn get_json<T: DeserializeOwned>(&self, path: &str) -> Result<T, ApiError> {
        let response = self
            .client
            .get(self.url(path))
            .send()
            .await
            .map_err(map_request_error)?;

        decode_json(response).await
    }
}

#[async_trait]
impl FinanceApi for HttpFinanceApi {
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        self.get_json(CATEGORIES_PATH).await
    }

    async fn create_category(&self, category: &NewCategory) -> Result<Category, ApiError> {
        let response = self
            .client
            .post(self.url(CATEGORIES_PATH))
            .json(category)
            .send()
            .await
            .map_err(map_request_error)?;

        decode_json(response).await
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        self.get_json(TRANSACTIONS_PATH).await
    }

    async fn create_transaction(
        &self,
        transaction: &NewTransaction,
    ) -> Result<Transaction, ApiError> {
        let response = self
            .client
            .post(self.url(TRANSACTIONS_PATH))
            .json(transaction)
            .send()
            .await
            .map_err(map_request_error)?;

        decode_json(response).await
    }

    async fn delete_transaction(&self, id: TransactionId) -> Result<(), ApiError> {
        let response = self
            .client
            .delete(self.url(&format!("{TRANSACTIONS_PATH}/{id}")))
            .send()
            .await
            .map_err(map_request_error)?;

        ensure_success(response).await.map(|_| ())
    }
}

fn map_request_error(error: reqwest::Error) -> ApiError {
    if error.is_decode() {
        ApiError::Decode(error.to_string())
    } else {
        ApiError::Unreachable(error.to_string())
    }
}

/// Turn a non-success response into [ApiError::Status], keeping the
/// backend's `message` if the body has one.
async fn ensure_success(response: Response) -> Result<Response, ApiError> {
    let status = response.status();

    if status.is_success() {
        return Ok(response);
    }

    let text = response.text().await.unwrap_or_default();
    let message = serde_json::from_str::<ErrorBody>(&text)
        .ok()
        .and_then(|body| body.message)
        .filter(|message| !message.trim().is_empty());

    Err(ApiError::Status {
        status: status.as_u16(),
        message,
    })
}

async fn decode_json<T: DeserializeOwned>(response: Response) -> Result<T, ApiError> {
    ensure_success(response)
        .await?
        .json::<T>()
        .await
        .map_err(|error| ApiError::Decode(error.to_string()))
}

#[cfg(test)]
mod tests {
    use std::sync::{Arc, Mutex};

    use axum::{
        Json, Router,
        extract::{Path, State},
        http::StatusCode,
        response::{IntoResponse, Response},
        routing::{delete, get},
    };
    use serde_json::{Value, json};
    use time::macros::date;
    use tokio::net::TcpListener;

    use crate::{
        api::{ApiError, FinanceApi, HttpFinanceApi},
        category::NewCategory,
        transaction::{NewTransaction, TransactionType},
    };

    #[derive(Clone, Default)]
    struct StubBackend {
        received: Arc<Mutex<Vec<Value>>>,
    }

    async fn list_categories() -> Json<Value> {
        Json(json!([
            {"id": 1, "nome": "Salário", "descricao": "Salário mensal", "tipo": "RECEITA", "cor": "#4CAF50"},
            {"id": 2, "nome": "Lazer", "descricao": null, "tipo": "DESPESA", "cor": "#9C27B0"}
        ]))
    }

    async fn create_category(
        State(stub): State<StubBackend>,
        Json(body): Json<Value>,
    ) -> Json<Value> {
        stub.received.lock().unwrap().push(body.clone());
        let mut created = body;
        created["id"] = json!(3);
        Json(created)
    }

    async fn list_transactions() -> Json<Value> {
        Json(json!([
            {
                "id": 7,
                "descricao": "Almoço",
                "valor": 150.50,
                "tipo": "DESPESA",
                "data": "2025-10-28",
                "categoriaId": 2,
                "categoriaNome": "Lazer",
                "categoriaCor": "#9C27B0",
                "observacoes": null,
                "dataCriacao": "2025-10-28T12:00:00"
            }
        ]))
    }

    async fn reject_transaction(
        State(stub): State<StubBackend>,
        Json(body): Json<Value>,
    ) -> Response {
        stub.received.lock().unwrap().push(body);
        (
            StatusCode::BAD_REQUEST,
            Json(json!({"status": 400, "message": "invalid date"})),
        )
            .into_response()
    }

    async fn delete_transaction(Path(id): Path<i64>) -> StatusCode {
        if id == 7 {
            StatusCode::NO_CONTENT
        } else {
            StatusCode::NOT_FOUND
        }
    }

    async fn spawn_stub_backend(stub: StubBackend) -> String {
        let app = Router::new()
            .route("/api/categorias", get(list_categories).post(create_category))
            .route(
                "/api/transacoes",
                get(list_transactions).post(reject_transaction),
            )
            .route("/api/transacoes/{id}", delete(delete_transaction))
            .with_state(stub);

        let listener = TcpListener::bind("127.0.0.1:0")
            .await
            .expect("Could not bind stub backend");
        let address = listener.local_addr().unwrap();

        tokio::spawn(async move {
            axum::serve(listener, app).await.unwrap();
        });

        format!("http://{address}/")
    }

    #[tokio::test]
    async fn lists_categories() {
        let base_url = spawn_stub_backend(StubBackend::default()).await;
        let api = HttpFinanceApi::new(&base_url);

        let categories = api.list_categories().await.unwrap();

        assert_eq!(categories.len(), 2);
        assert_eq!(categories[0].name, "Salário");
        assert_eq!(categories[0].type_, TransactionType::Income);
        assert_eq!(categories[1].description, None);
    }

    #[tokio::test]
    async fn creates_category_with_backend_field_names() {
        let stub = StubBackend::default();
        let base_url = spawn_stub_backend(stub.clone()).await;
        let api = HttpFinanceApi::new(&base_url);

        let created = api
            .create_category(&NewCategory {
                name: "Bônus".to_owned(),
                description: "Categoria Bônus".to_owned(),
                type_: TransactionType::Income,
                color: "#00BCD4".to_owned(),
            })
            .await
            .unwrap();

        assert_eq!(created.id, 3);
        assert_eq!(created.name, "Bônus");
        let received = stub.received.lock().unwrap();
        assert_eq!(
            received[0],
            json!({"nome": "Bônus", "descricao": "Categoria Bônus", "tipo": "RECEITA", "cor": "#00BCD4"})
        );
    }

    #[tokio::test]
    async fn lists_transactions_ignoring_unknown_fields() {
        let base_url = spawn_stub_backend(StubBackend::default()).await;
        let api = HttpFinanceApi::new(&base_url);

        let transactions = api.list_transactions().await.unwrap();

        assert_eq!(transactions.len(), 1);
        let transaction = &transactions[0];
        assert_eq!(transaction.amount, 150.50);
        assert_eq!(transaction.date, date!(2025 - 10 - 28));
        assert_eq!(transaction.category_name.as_deref(), Some("Lazer"));
        assert_eq!(transaction.notes, None);
    }

    #[tokio::test]
    async fn rejected_transaction_carries_backend_message() {
        let stub = StubBackend::default();
        let base_url = spawn_stub_backend(stub.clone()).await;
        let api = HttpFinanceApi::new(&base_url);

        let result = api
            .create_transaction(&NewTransaction {
                description: "Bônus anual".to_owned(),
                amount: 100.0,
                type_: TransactionType::Income,
                date: date!(2025 - 10 - 28),
                category_id: 3,
                notes: None,
            })
            .await;

        assert_eq!(
            result,
            Err(ApiError::Status {
                status: 400,
                message: Some("invalid date".to_owned())
            })
        );
        let received = stub.received.lock().unwrap();
        assert_eq!(received[0]["data"], json!("2025-10-28"));
        assert_eq!(received[0]["categoriaId"], json!(3));
        assert_eq!(received[0]["observacoes"], Value::Null);
    }

    #[tokio::test]
    async fn deletes_transaction_by_id() {
        let base_url = spawn_stub_backend(StubBackend::default()).await;
        let api = HttpFinanceApi::new(&base_url);

        assert_eq!(api.delete_transaction(7).await, Ok(()));
        assert_eq!(
            api.delete_transaction(8).await,
            Err(ApiError::Status {
                status: 404,
                message: None
            })
        );
    }

    #[tokio::test]
    async fn unreachable_backend_is_reported() {
        let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
        let address = listener.local_addr().unwrap();
        drop(listener);
        let api = HttpFinanceApi::new(&format!("http://{address}"));

        let result = api.list_categories().await;

        assert!(
            matches!(result, Err(ApiError::Unreachable(_))),
            "want unreachable error, got {result:?}"
        );
    }
}
