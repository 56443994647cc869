//! Result shapers: turn a validated response body into the value handed back to the caller.

use std::marker::PhantomData;

use serde::de::DeserializeOwned;
use serde_json::Value;

use crate::{Error, Table};

/// Converts a validated JSON envelope into the caller-facing result.
pub trait Shaper {
    type Output;

    fn shape(&self, body: Value) -> Result<Self::Output, Error>;
}

/// Returns the envelope unchanged.
#[derive(Clone, Copy, Debug, Default)]
pub struct Raw;

impl Shaper for Raw {
    type Output = Value;

    fn shape(&self, body: Value) -> Result<Value, Error> {
        Ok(body)
    }
}

/// Builds a [`Table`] from the record list stored under `results[0][key]`.
#[derive(Clone, Debug)]
pub struct SingleList {
    key: String,
}

impl SingleList {
    pub fn new(key: impl Into<String>) -> Self {
        Self { key: key.into() }
    }

    pub fn key(&self) -> &str {
        &self.key
    }
}

impl Shaper for SingleList {
    type Output = Table;

    fn shape(&self, mut body: Value) -> Result<Table, Error> {
        let first = body
            .get_mut("results")
            .and_then(Value::as_array_mut)
            .and_then(|results| results.first_mut())
            .ok_or_else(|| Error::MissingField("results[0]".to_string()))?;
        let path = format!("results[0].{}", self.key);
        let list = first
            .get_mut(&self.key)
            .ok_or_else(|| Error::MissingField(path.clone()))?;

        let Value::Array(items) = list.take() else {
            return Err(Error::NotRecords(path));
        };
        let records = items
            .into_iter()
            .map(|item| match item {
                Value::Object(record) => Ok(record),
                _ => Err(Error::NotRecords(path.clone())),
            })
            .collect::<Result<Vec<_>, _>>()?;

        Ok(Table::from_records(records))
    }
}

/// Deserializes the whole envelope into `T`, e.g. [`Envelope<Member>`](crate::Envelope).
pub struct Typed<T> {
    _marker: PhantomData<fn() -> T>,
}

impl<T> Typed<T> {
    pub fn new() -> Self {
        Self {
            _marker: PhantomData,
        }
    }
}

impl<T> Default for Typed<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> Clone for Typed<T> {
    fn clone(&self) -> Self {
        Self::new()
    }
}

impl<T: DeserializeOwned> Shaper for Typed<T> {
    type Output = T;

    fn shape(&self, body: Value) -> Result<T, Error> {
        Ok(serde_json::from_value(body)?)
    }
}
