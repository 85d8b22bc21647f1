use std::sync::Mutex;

use async_trait::async_trait;
use time::Date;

use crate::{
    api::{ApiError, FinanceApi},
    category::{Category, NewCategory},
    transaction::{NewTransaction, Transaction, TransactionId, TransactionType},
};

/// An in-memory stand-in for the backend.
#[derive(Default)]
pub(crate) struct FakeFinanceApi {
    backend: Mutex<FakeBackend>,
}

#[derive(Default)]
struct FakeBackend {
    categories: Vec<Category>,
    transactions: Vec<Transaction>,
    last_id: i64,
    offline: bool,
    failing_categories: Vec<String>,
    transaction_rejection: Option<Option<String>>,
    categories_created: usize,
    transactions_created: usize,
    delete_calls: usize,
}

impl FakeBackend {
    fn next_id(&mut self) -> i64 {
        self.last_id += 1;
        self.last_id
    }

    fn check_online(&self) -> Result<(), ApiError> {
        if self.offline {
            Err(ApiError::Unreachable("connection refused".to_owned()))
        } else {
            Ok(())
        }
    }
}

impl FakeFinanceApi {
    pub(crate) fn insert_category(&self, name: &str, type_: TransactionType) -> Category {
        let mut backend = self.backend.lock().unwrap();
        let category = Category {
            id: backend.next_id(),
            name: name.to_owned(),
            description: None,
            type_,
            color: Some("#4CAF50".to_owned()),
        };
        backend.categories.push(category.clone());
        category
    }

    pub(crate) fn insert_transaction(&self, transaction: Transaction) {
        let mut backend = self.backend.lock().unwrap();
        backend.last_id = backend.last_id.max(transaction.id);
        backend.transactions.push(transaction);
    }

    /// Make every call fail as if the backend could not be reached.
    pub(crate) fn go_offline(&self) {
        self.backend.lock().unwrap().offline = true;
    }

    pub(crate) fn fail_category_creation_for(&self, name: &str) {
        self.backend
            .lock()
            .unwrap()
            .failing_categories
            .push(name.to_owned());
    }

    /// Reject every new transaction with a 400 and `message` in the body.
    pub(crate) fn reject_transactions_with(&self, message: Option<&str>) {
        self.backend.lock().unwrap().transaction_rejection = Some(message.map(str::to_owned));
    }

    pub(crate) fn categories_created(&self) -> usize {
        self.backend.lock().unwrap().categories_created
    }

    pub(crate) fn transactions_created(&self) -> usize {
        self.backend.lock().unwrap().transactions_created
    }

    pub(crate) fn delete_calls(&self) -> usize {
        self.backend.lock().unwrap().delete_calls
    }
}

#[async_trait]
impl FinanceApi for FakeFinanceApi {
    async fn list_categories(&self) -> Result<Vec<Category>, ApiError> {
        let backend = self.backend.lock().unwrap();
        backend.check_online()?;
        Ok(backend.categories.clone())
    }

    async fn create_category(&self, category: &NewCategory) -> Result<Category, ApiError> {
        let mut backend = self.backend.lock().unwrap();
        backend.check_online()?;

        if backend.failing_categories.contains(&category.name) {
            return Err(ApiError::Status {
                status: 500,
                message: None,
            });
        }

        let created = Category {
            id: backend.next_id(),
            name: category.name.clone(),
            description: Some(category.description.clone()),
            type_: category.type_,
            color: Some(category.color.clone()),
        };
        backend.categories.push(created.clone());
        backend.categories_created += 1;

        Ok(created)
    }

    async fn list_transactions(&self) -> Result<Vec<Transaction>, ApiError> {
        let backend = self.backend.lock().unwrap();
        backend.check_online()?;
        Ok(backend.transactions.clone())
    }

    async fn create_transaction(
        &self,
        transaction: &NewTransaction,
    ) -> Result<Transaction, ApiError> {
        let mut backend = self.backend.lock().unwrap();
        backend.check_online()?;

        if let Some(message) = &backend.transaction_rejection {
            return Err(ApiError::Status {
                status: 400,
                message: message.clone(),
            });
        }

        let Some(category) = backend
            .categories
            .iter()
            .find(|category| category.id == transaction.category_id)
            .cloned()
        else {
            return Err(ApiError::Status {
                status: 404,
                message: Some("Categoria não encontrada".to_owned()),
            });
        };

        let created = Transaction {
            id: backend.next_id(),
            description: transaction.description.clone(),
            amount: transaction.amount,
            type_: transaction.type_,
            date: transaction.date,
            category_id: Some(category.id),
            category_name: Some(category.name),
            category_color: category.color,
            notes: transaction.notes.clone(),
        };
        backend.transactions.push(created.clone());
        backend.transactions_created += 1;

        Ok(created)
    }

    async fn delete_transaction(&self, id: TransactionId) -> Result<(), ApiError> {
        let mut backend = self.backend.lock().unwrap();
        backend.check_online()?;
        backend.delete_calls += 1;

        let count_before = backend.transactions.len();
        backend.transactions.retain(|transaction| transaction.id != id);

        if backend.transactions.len() == count_before {
            return Err(ApiError::Status {
                status: 404,
                message: None,
            });
        }

        Ok(())
    }
}

/// A transaction without notes in the category "Teste".
pub(crate) fn transaction(
    id: TransactionId,
    type_: TransactionType,
    amount: f64,
    date: Date,
) -> Transaction {
    Transaction {
        id,
        description: format!("Transação {id}"),
        amount,
        type_,
        date,
        category_id: Some(1),
        category_name: Some("Teste".to_owned()),
        category_color: Some("#009688".to_owned()),
        notes: None,
    }
}
