use anyhow::Result;
use repertoire_config::AppConfig;
use repertoire_store::service::ContactService;
use repertoire_store::Store;
use serde::Serialize;
use std::io::{self, Write};

pub mod accounts;
pub mod completions;
pub mod contacts;

pub struct Context<'a> {
    pub store: &'a Store,
    pub service: ContactService,
    pub json: bool,
    pub config: &'a AppConfig,
}

pub fn print_json<T: Serialize>(value: &T) -> Result<()> {
    let mut stdout = io::stdout().lock();
    serde_json::to_writer_pretty(&mut stdout, value)?;
    writeln!(stdout)?;
    Ok(())
}
