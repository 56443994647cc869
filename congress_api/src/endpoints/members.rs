//! Member endpoints.

use serde_json::Value;

use crate::{
    validator::CHAMBERS, Client, Config, Error, NoValidation, OneOf, QueryParams, Raw, SingleList,
    Table,
};

/// Members of Congress.
#[derive(Clone, Debug)]
pub struct Members {
    config: Config,
}

impl Members {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    /// Lists the members of one chamber in one Congress.
    ///
    /// `congress` is the Congress number as a string (e.g. `"115"`); the API
    /// covers 102-115 for the House and 80-115 for the Senate. `chamber` is
    /// `house` or `senate`.
    pub fn get_all_members(&self, congress: &str, chamber: &str) -> Result<Table, Error> {
        Client::new(
            self.config.clone(),
            SingleList::new("members"),
            OneOf::new("chamber", 1, CHAMBERS),
        )
        .get(&[congress, chamber, "members.json"], &QueryParams::new())
    }

    /// Fetches one member by Biographical Directory id (e.g. `"A000360"`).
    /// Returns the full response envelope.
    pub fn get_member(&self, member_id: &str) -> Result<Value, Error> {
        let file = format!("{}.json", member_id);
        Client::new(self.config.clone(), Raw, NoValidation)
            .get(&["members", file.as_str()], &QueryParams::new())
    }
}
