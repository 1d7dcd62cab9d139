pub mod config;
pub mod database;
pub mod layout;
pub mod models;
pub mod store;
pub mod services;
pub mod controllers;

use std::sync::Arc;

use crate::layout::CoachLayout;
use crate::store::{postgres::PgSeatStore, SeatStore};

// Shared state for the whole application
#[derive(Clone)]
pub struct AppState {
    pub store: Arc<dyn SeatStore>,
    pub layout: CoachLayout,
    pub config: config::Config,
}

impl AppState {
    pub fn new(db: database::Database, config: config::Config) -> Arc<Self> {
        let store: Arc<dyn SeatStore> = Arc::new(PgSeatStore::new(db.pool.clone()));
        Arc::new(Self {
            store,
            layout: CoachLayout::default(),
            config,
        })
    }

    /// Builds state on top of an arbitrary store backend. Lets tests and
    /// future transactional stores swap in without touching the handlers.
    pub fn with_store(store: Arc<dyn SeatStore>, config: config::Config) -> Arc<Self> {
        Arc::new(Self {
            store,
            layout: CoachLayout::default(),
            config,
        })
    }
}
