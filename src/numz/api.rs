//! # API Facade
//!
//! The API layer is a **thin facade** over the command layer and the single
//! entry point for every numz operation.
//!
//! It owns the three things every command needs: the store, the
//! configuration and the random generator. It also supplies today's date,
//! so the commands themselves stay deterministic.
//!
//! `NumzApi<S: DataStore>` is generic over the storage backend:
//! - Production: `NumzApi<FileStore>`
//! - Testing: `NumzApi<InMemoryStore>` with a seeded generator

use crate::commands;
use crate::config::NumzConfig;
use crate::error::Result;
use crate::generator::Generator;
use crate::store::DataStore;
use chrono::{Local, NaiveDate};
use rand::rngs::StdRng;
use rand::Rng;

pub struct NumzApi<S: DataStore, R: Rng = StdRng> {
    store: S,
    config: NumzConfig,
    generator: Generator<R>,
}

impl<S: DataStore> NumzApi<S> {
    pub fn new(store: S, config: NumzConfig) -> Self {
        Self::with_generator(store, config, Generator::from_os_rng())
    }
}

impl<S: DataStore, R: Rng> NumzApi<S, R> {
    pub fn with_generator(store: S, config: NumzConfig, generator: Generator<R>) -> Self {
        Self {
            store,
            config,
            generator,
        }
    }

    pub fn generate_number(&mut self) -> Result<commands::CmdResult> {
        commands::generate::run(&mut self.store, &self.config, &mut self.generator, today())
    }

    pub fn add_number(&mut self, input: &str) -> Result<commands::CmdResult> {
        commands::add::run(&mut self.store, &self.config, input, today())
    }

    pub fn blacklist_number(&mut self, input: &str) -> Result<commands::CmdResult> {
        commands::blacklist::run(&mut self.store, &self.config, input, today())
    }

    pub fn show_numbers(&self) -> Result<commands::CmdResult> {
        commands::show::run(&self.store)
    }

    pub fn last_number(&self) -> Result<commands::CmdResult> {
        commands::last::run(&self.store)
    }

    pub fn config(&self) -> &NumzConfig {
        &self.config
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}

fn today() -> NaiveDate {
    Local::now().date_naive()
}

pub use commands::{CmdMessage, CmdResult, MessageLevel};
