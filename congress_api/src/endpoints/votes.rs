//! Vote and personal-explanation endpoints.

use serde_json::Value;

use crate::{
    validator::{CHAMBERS, CHAMBERS_OR_BOTH, VOTE_TYPES},
    Client, Config, Error, NoValidation, OneOf, QueryParams, Raw, SingleList, Table, Validator,
};

/// Roll-call votes and members' explanations for missed or mistaken votes.
///
/// Methods taking an `offset` page through results 20 at a time; the offset
/// is always sent, `0` for the first page.
#[derive(Clone, Debug)]
pub struct Votes {
    config: Config,
}

impl Votes {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn raw<V: Validator>(&self, validator: V) -> Client<Raw, V> {
        Client::new(self.config.clone(), Raw, validator)
    }

    /// The 20 most recent votes in `house`, `senate`, or `both`, newest first.
    pub fn get_recent_votes(&self, chamber: &str, offset: u32) -> Result<Value, Error> {
        self.raw(OneOf::new("chamber", 0, CHAMBERS_OR_BOTH)).get(
            &[chamber, "votes", "recent.json"],
            &QueryParams::new().with_offset(offset),
        )
    }

    /// One roll-call vote. `session` is `1` in odd years and `2` in even years.
    pub fn get_rollcall_votes(
        &self,
        congress: &str,
        chamber: &str,
        session: &str,
        roll_call: &str,
    ) -> Result<Value, Error> {
        let file = format!("{}.json", roll_call);
        self.raw(OneOf::new("chamber", 1, CHAMBERS)).get(
            &[congress, chamber, "sessions", session, "votes", file.as_str()],
            &QueryParams::new(),
        )
    }

    /// Members ranked by a vote statistic: `missed`, `party`, `loneno`, or
    /// `perfect`. Any other type is rejected before a request is made.
    pub fn get_votes_by_type(
        &self,
        congress: &str,
        chamber: &str,
        vote_type: &str,
    ) -> Result<Table, Error> {
        let file = format!("{}.json", vote_type);
        Client::new(
            self.config.clone(),
            SingleList::new("members"),
            (
                OneOf::new("chamber", 1, CHAMBERS),
                OneOf::file("vote type", 3, VOTE_TYPES),
            ),
        )
        .get(&[congress, chamber, "votes", file.as_str()], &QueryParams::new())
    }

    /// All votes in one month. `year` is `YYYY`, `month` is `MM`.
    pub fn get_votes_by_date(
        &self,
        chamber: &str,
        year: &str,
        month: &str,
    ) -> Result<Value, Error> {
        let file = format!("{}.json", month);
        self.raw(OneOf::new("chamber", 0, CHAMBERS_OR_BOTH)).get(
            &[chamber, "votes", year, file.as_str()],
            &QueryParams::new(),
        )
    }

    /// Senate votes on presidential nominations.
    pub fn get_nomination_votes(&self, congress: &str) -> Result<Value, Error> {
        self.raw(NoValidation)
            .get(&[congress, "nominations.json"], &QueryParams::new())
    }

    /// Recent personal explanations for missed or mistaken votes.
    pub fn get_explanations(&self, congress: &str, offset: u32) -> Result<Value, Error> {
        self.raw(NoValidation).get(
            &[congress, "explanations.json"],
            &QueryParams::new().with_offset(offset),
        )
    }

    /// Recent explanations, split into individual votes with a reason each.
    pub fn get_explanation_votes(&self, congress: &str, offset: u32) -> Result<Value, Error> {
        self.raw(NoValidation).get(
            &[congress, "explanations", "votes.json"],
            &QueryParams::new().with_offset(offset),
        )
    }

    /// Explanation votes in one category, e.g. `voted-incorrectly`,
    /// `official-business`, or `personal`.
    pub fn get_explanation_votes_by_category(
        &self,
        congress: &str,
        category: &str,
        offset: u32,
    ) -> Result<Value, Error> {
        let file = format!("{}.json", category);
        self.raw(NoValidation).get(
            &[congress, "explanations", "votes", file.as_str()],
            &QueryParams::new().with_offset(offset),
        )
    }

    /// Recent explanations by one member.
    pub fn get_member_explanations(
        &self,
        member_id: &str,
        congress: &str,
        offset: u32,
    ) -> Result<Value, Error> {
        let file = format!("{}.json", congress);
        self.raw(NoValidation).get(
            &["members", member_id, "explanations", file.as_str()],
            &QueryParams::new().with_offset(offset),
        )
    }

    /// Recent explanation votes by one member.
    pub fn get_member_explanation_votes(
        &self,
        member_id: &str,
        congress: &str,
        offset: u32,
    ) -> Result<Value, Error> {
        self.raw(NoValidation).get(
            &["members", member_id, "explanations", congress, "votes.json"],
            &QueryParams::new().with_offset(offset),
        )
    }

    /// Explanation votes by one member in one category.
    pub fn get_member_explanation_votes_by_category(
        &self,
        congress: &str,
        category: &str,
        member_id: &str,
        offset: u32,
    ) -> Result<Value, Error> {
        let file = format!("{}.json", category);
        self.raw(NoValidation).get(
            &["members", member_id, "explanations", congress, "votes", file.as_str()],
            &QueryParams::new().with_offset(offset),
        )
    }
}
