//! Storefront - the application state shared by every command handler.

use crate::auth::{Accounts, AuthError, AuthGate, Identity, TokenGate};
use crate::catalog::ProductCatalog;
use crate::checkout::{CheckoutMode, CheckoutProcessor};
use crate::model::ModelStore;
use crate::report::{self, ReportError, SalesReportLine};

/// Catalog, checkout and accounts over one explicitly constructed store.
///
/// The process entry point builds the store and hands it in here; every
/// component holds its own clone of the handle.
#[derive(Clone)]
pub struct Storefront<S> {
    store: S,
    catalog: ProductCatalog<S>,
    checkout: CheckoutProcessor<S>,
    accounts: Accounts<S>,
}

impl<S: ModelStore + Clone> Storefront<S> {
    pub fn new(store: S, tokens: TokenGate, mode: CheckoutMode) -> Self {
        Self {
            catalog: ProductCatalog::new(store.clone()),
            checkout: CheckoutProcessor::new(store.clone(), mode),
            accounts: Accounts::new(store.clone(), tokens),
            store,
        }
    }

    /// Replace the accounts service (e.g. to lower the hashing work factor).
    pub fn with_accounts(mut self, accounts: Accounts<S>) -> Self {
        self.accounts = accounts;
        self
    }
}

impl<S: ModelStore> Storefront<S> {
    pub fn store(&self) -> &S {
        &self.store
    }

    pub fn catalog(&self) -> &ProductCatalog<S> {
        &self.catalog
    }

    pub fn checkout(&self) -> &CheckoutProcessor<S> {
        &self.checkout
    }

    pub fn accounts(&self) -> &Accounts<S> {
        &self.accounts
    }

    pub fn sales_report(&self) -> Result<Vec<SalesReportLine>, ReportError> {
        report::sales_report(&self.store)
    }
}

impl<S: ModelStore> AuthGate for Storefront<S> {
    fn authenticate(&self, credential: &str) -> Result<Identity, AuthError> {
        self.accounts.tokens().authenticate(credential)
    }
}
