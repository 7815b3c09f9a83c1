#![warn(missing_docs)]
//! Test surfaces: host event logs and world fixtures.

mod fixtures;

use anyhow::Result;
use displayblocks_core::SimTick;
use displayblocks_world::HostEvent;
use serde::Serialize;
use std::fs::{self, File};
use std::io::Write;
use std::path::Path;

pub use fixtures::*;

/// One host event stamped with the tick it happened on.
#[derive(Debug, Serialize)]
pub struct EventRecord<'a> {
    /// Simulation tick when the event occurred.
    pub tick: SimTick,
    /// The event.
    #[serde(flatten)]
    pub event: &'a HostEvent,
}

/// A sink that writes newline-delimited JSON to disk.
pub struct JsonlSink {
    file: File,
}

impl JsonlSink {
    /// Create a new sink at `path`, creating parent dirs if needed.
    pub fn create<P: AsRef<Path>>(path: P) -> Result<Self> {
        if let Some(parent) = path.as_ref().parent() {
            fs::create_dir_all(parent)?;
        }
        let file = File::create(path)?;
        Ok(Self { file })
    }

    /// Append an event to the log.
    pub fn write(&mut self, record: &EventRecord<'_>) -> Result<()> {
        let line = serde_json::to_string(record)?;
        self.file.write_all(line.as_bytes())?;
        self.file.write_all(b"\n")?;
        Ok(())
    }

    /// Append every event under one tick.
    pub fn write_all(&mut self, tick: SimTick, events: &[HostEvent]) -> Result<()> {
        for event in events {
            self.write(&EventRecord { tick, event })?;
        }
        Ok(())
    }
}
