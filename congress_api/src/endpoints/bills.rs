//! Bill endpoints. Every method returns a [`Table`] built from one list
//! in the first result.

use crate::{
    validator::{BILL_TYPES, CHAMBERS, CHAMBERS_OR_BOTH},
    Client, Config, Error, NoValidation, OneOf, QueryParams, SingleList, Table,
};

/// Bills, their amendments, subjects, related bills, and cosponsors.
#[derive(Clone, Debug)]
pub struct Bills {
    config: Config,
}

impl Bills {
    pub fn new(config: Config) -> Self {
        Self { config }
    }

    fn unchecked(&self, key: &str) -> Client<SingleList, NoValidation> {
        Client::new(self.config.clone(), SingleList::new(key), NoValidation)
    }

    /// Full-text search over bill titles and text.
    pub fn search_bills(&self, query: &str) -> Result<Table, Error> {
        self.unchecked("bills").get(
            &["bills", "search.json"],
            &QueryParams::new().with("query", query),
        )
    }

    /// Recent bills in one chamber (`house`, `senate`, or `both`).
    ///
    /// `bill_type` is one of `introduced`, `updated`, `active`, `passed`,
    /// `enacted`, or `vetoed`.
    pub fn get_recent_bills(
        &self,
        congress: &str,
        chamber: &str,
        bill_type: &str,
    ) -> Result<Table, Error> {
        let file = format!("{}.json", bill_type);
        Client::new(
            self.config.clone(),
            SingleList::new("bills"),
            (
                OneOf::new("chamber", 1, CHAMBERS_OR_BOTH),
                OneOf::file("bill type", 3, BILL_TYPES),
            ),
        )
        .get(&[congress, chamber, "bills", file.as_str()], &QueryParams::new())
    }

    /// Bills scheduled or under consideration in the coming week.
    pub fn get_upcoming_bills(&self, chamber: &str) -> Result<Table, Error> {
        let file = format!("{}.json", chamber);
        Client::new(
            self.config.clone(),
            SingleList::new("bills"),
            OneOf::file("chamber", 2, CHAMBERS),
        )
        .get(&["bills", "upcoming", file.as_str()], &QueryParams::new())
    }

    /// Amendments to a bill (`bill_id` like `"hr21"`).
    pub fn get_amendments(&self, congress: &str, bill_id: &str) -> Result<Table, Error> {
        self.unchecked("amendments").get(
            &[congress, "bills", bill_id, "amendments.json"],
            &QueryParams::new(),
        )
    }

    /// Subjects assigned to a bill.
    pub fn get_subjects(&self, congress: &str, bill_id: &str) -> Result<Table, Error> {
        self.unchecked("subjects").get(
            &[congress, "bills", bill_id, "subjects.json"],
            &QueryParams::new(),
        )
    }

    /// Bills related to a bill.
    pub fn get_related_bills(&self, congress: &str, bill_id: &str) -> Result<Table, Error> {
        self.unchecked("related_bills").get(
            &[congress, "bills", bill_id, "related.json"],
            &QueryParams::new(),
        )
    }

    /// Searches the legislative subject vocabulary.
    pub fn search_subjects(&self, query: &str) -> Result<Table, Error> {
        self.unchecked("subjects").get(
            &["bills", "subjects", "search.json"],
            &QueryParams::new().with("query", query),
        )
    }

    /// Cosponsors of a bill. The sponsor is not included.
    pub fn get_cosponsors(&self, congress: &str, bill_id: &str) -> Result<Table, Error> {
        self.unchecked("cosponsors").get(
            &[congress, "bills", bill_id, "cosponsors.json"],
            &QueryParams::new(),
        )
    }
}
