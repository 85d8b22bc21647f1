//! The view state of the tracker and the flows that change it.
//!
//! [FinanceTracker] owns the cached categories and transactions for one
//! backend. Every operation talks to the backend through [FinanceApi] and
//! then replaces the cached lists. The lock around the lists is never held
//! while waiting on the backend, so concurrent flows are not coordinated and
//! the last reload to finish wins.

use std::sync::{Arc, PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use time::Date;

use crate::{
    Error,
    api::FinanceApi,
    category::{
        Category, DEFAULT_CATEGORIES, NewCategory, find_category_by_name, pick_color, random_seed,
    },
    transaction::{NewTransaction, Transaction, TransactionId, TransactionType},
};

/// Whether the backend answered the last reachability check.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ApiStatus {
    /// No check has finished yet.
    Unknown,
    Online,
    Offline,
}

/// The state of the transaction list.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LoadState {
    /// The list has not been fetched yet.
    Loading,
    /// The last fetch succeeded.
    Loaded,
    /// The last fetch failed. The list holds whatever was loaded before.
    Failed,
}

/// A consistent copy of the tracker's view state.
#[derive(Debug, Clone, PartialEq)]
pub struct TrackerSnapshot {
    pub api_status: ApiStatus,
    pub categories: Vec<Category>,
    pub transactions: Vec<Transaction>,
    pub transactions_state: LoadState,
}

impl Default for TrackerSnapshot {
    fn default() -> Self {
        Self {
            api_status: ApiStatus::Unknown,
            categories: Vec::new(),
            transactions: Vec::new(),
            transactions_state: LoadState::Loading,
        }
    }
}

/// A validated request to add a transaction.
#[derive(Debug, Clone, PartialEq)]
pub struct TransactionInput {
    pub description: String,
    pub amount: f64,
    pub type_: TransactionType,
    pub date: Date,
    /// The category name as typed by the user. It does not need to exist yet.
    pub category_name: String,
    pub notes: Option<String>,
}

/// The view-model for a single backend.
pub struct FinanceTracker {
    api: Arc<dyn FinanceApi>,
    state: RwLock<TrackerSnapshot>,
}

impl FinanceTracker {
    /// Create a tracker with empty lists that talks to `api`.
    pub fn new(api: Arc<dyn FinanceApi>) -> Self {
        Self {
            api,
            state: RwLock::new(TrackerSnapshot::default()),
        }
    }

    /// A copy of the current view state.
    pub fn snapshot(&self) -> TrackerSnapshot {
        self.read_state().clone()
    }

    /// Check the backend, load the categories (creating the defaults if there
    /// are none) and load the transactions.
    ///
    /// The three steps run concurrently and none of them can fail the page,
    /// failures are recorded in the returned snapshot.
    pub async fn initialize(&self) -> TrackerSnapshot {
        tokio::join!(
            self.check_status(),
            self.refresh_categories(),
            self.refresh_transactions(),
        );

        self.snapshot()
    }

    /// Check whether the backend is reachable by listing the categories.
    pub async fn check_status(&self) -> ApiStatus {
        let status = match self.api.list_categories().await {
            Ok(_) => ApiStatus::Online,
            Err(error) => {
                tracing::warn!("Backend is offline: {error}");
                ApiStatus::Offline
            }
        };

        self.write_state().api_status = status;
        status
    }

    /// Reload the categories, creating the default categories first if the backend has none.
    ///
    /// On failure the cached categories are kept.
    pub async fn refresh_categories(&self) {
        let categories = match self.api.list_categories().await {
            Ok(categories) if categories.is_empty() => {
                tracing::info!("No categories found, creating the default categories.");
                self.create_default_categories().await;

                match self.api.list_categories().await {
                    Ok(categories) => categories,
                    Err(error) => {
                        tracing::error!("Could not load categories after seeding: {error}");
                        return;
                    }
                }
            }
            Ok(categories) => categories,
            Err(error) => {
                tracing::error!("Could not load categories: {error}");
                return;
            }
        };

        tracing::info!("Loaded {} categories as suggestions", categories.len());
        self.write_state().categories = categories;
    }

    /// Create each default category in order. Failures are logged and the
    /// remaining categories are still created.
    async fn create_default_categories(&self) {
        for default in &DEFAULT_CATEGORIES {
            match self.api.create_category(&default.to_new_category()).await {
                Ok(_) => tracing::info!("Created category \"{}\"", default.name),
                Err(error) => {
                    tracing::error!("Could not create category \"{}\": {error}", default.name)
                }
            }
        }
    }

    /// Reload the transactions.
    ///
    /// On failure the list is marked as failed and the previous transactions
    /// are kept for the totals.
    pub async fn refresh_transactions(&self) -> LoadState {
        let load_state = match self.api.list_transactions().await {
            Ok(transactions) => {
                self.write_state().transactions = transactions;
                LoadState::Loaded
            }
            Err(error) => {
                tracing::error!("Could not load transactions: {error}");
                LoadState::Failed
            }
        };

        self.write_state().transactions_state = load_state;
        load_state
    }

    /// Find the category called `name` among the backend's categories, ignoring
    /// case, or create it with a random color from the palette for `type_`.
    ///
    /// The categories are reloaded before the lookup, since the cache may be
    /// empty or stale when the form was loaded by another page view or before
    /// a restart.
    ///
    /// # Errors
    /// Returns [Error::MissingCategoryName] if `name` is blank, or
    /// [Error::CategoryCreation] if the backend does not create the category.
    pub async fn resolve_category(
        &self,
        name: &str,
        type_: TransactionType,
    ) -> Result<Category, Error> {
        let name = name.trim();

        if name.is_empty() {
            return Err(Error::MissingCategoryName);
        }

        self.refresh_categories().await;
        let existing = find_category_by_name(&self.read_state().categories, name).cloned();

        if let Some(category) = existing {
            return Ok(category);
        }

        tracing::info!("Creating new category: {name}");
        let color = pick_color(type_, random_seed());
        let category = self
            .api
            .create_category(&NewCategory::for_transaction(name, type_, color))
            .await
            .map_err(Error::CategoryCreation)?;

        self.write_state().categories.push(category.clone());
        self.refresh_categories().await;

        Ok(category)
    }

    /// Add a transaction, creating its category if needed, then reload the transactions.
    ///
    /// # Errors
    /// Returns an error if the category is missing or cannot be created, or
    /// if the backend rejects the transaction. Nothing is reloaded on error.
    pub async fn add_transaction(&self, input: TransactionInput) -> Result<Transaction, Error> {
        let category = self
            .resolve_category(&input.category_name, input.type_)
            .await?;

        let new_transaction = NewTransaction {
            description: input.description,
            amount: input.amount,
            type_: input.type_,
            date: input.date,
            category_id: category.id,
            notes: input.notes.filter(|notes| !notes.trim().is_empty()),
        };

        let transaction = self
            .api
            .create_transaction(&new_transaction)
            .await
            .map_err(Error::TransactionCreation)?;

        self.refresh_transactions().await;

        Ok(transaction)
    }

    /// Delete the transaction with `id`, then reload the transactions.
    ///
    /// # Errors
    /// Returns [Error::TransactionDeletion] if the backend does not delete it.
    pub async fn delete_transaction(&self, id: TransactionId) -> Result<(), Error> {
        self.api
            .delete_transaction(id)
            .await
            .map_err(Error::TransactionDeletion)?;

        self.refresh_transactions().await;

        Ok(())
    }

    // The lists are always replaced whole, so a poisoned lock still holds a usable snapshot.
    fn read_state(&self) -> RwLockReadGuard<'_, TrackerSnapshot> {
        self.state.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write_state(&self) -> RwLockWriteGuard<'_, TrackerSnapshot> {
        self.state.write().unwrap_or_else(PoisonError::into_inner)
    }
}
