//! Builds an insert and an update against an in-memory table, logging the
//! request bodies, then filters a canned query response with a cursor.
//!
//! Run with: `cargo run -p servicenow-soap --example submit`

use std::cell::RefCell;

use simplelog::{Config, LevelFilter, SimpleLogger};

use servicenow_soap::api::{Submission, Table};
use servicenow_soap::error::XmlError;
use servicenow_soap::model::{FieldValues, Key, RecordList};
use servicenow_soap::xml::{self, Element};

/// Stands in for the SOAP transport: renders each request and keeps it.
struct LoggingTable {
    name: String,
    requests: RefCell<Vec<String>>,
}

impl LoggingTable {
    fn send(&self, submission: Submission) -> Result<(), XmlError> {
        let body = xml::format_pretty(&submission.to_element())?;
        log::info!("{} request:\n{}", self.name, body);
        self.requests.borrow_mut().push(xml::format(&submission.to_element(), false)?);
        Ok(())
    }
}

impl Table for LoggingTable {
    type Error = XmlError;

    fn name(&self) -> &str {
        &self.name
    }

    fn insert(&self, values: &FieldValues) -> Result<Key, XmlError> {
        self.send(Submission::insert(values.clone()))?;
        Ok(Key::from(uuid::Uuid::new_v4()))
    }

    fn update(&self, key: &Key, values: &FieldValues) -> Result<(), XmlError> {
        self.send(Submission::update(key.clone(), values.clone()))
    }
}

const RESPONSE: &str = r#"
<getRecordsResponse>
  <getRecordsResult><number>INC0010001</number><active>1</active></getRecordsResult>
  <getRecordsResult><number>INC0010002</number><active>0</active></getRecordsResult>
  <getRecordsResult><number>INC0010003</number><active>1</active></getRecordsResult>
</getRecordsResponse>
"#;

fn main() -> Result<(), Box<dyn std::error::Error>> {
    SimpleLogger::init(LevelFilter::Debug, Config::default())?;

    let table = LoggingTable {
        name: "incident".to_string(),
        requests: RefCell::new(Vec::new()),
    };

    let key = FieldValues::new()
        .set("short_description", "Email is down")
        .set("urgency", 1)
        .set("active", true)
        .insert(&table)?;

    FieldValues::new()
        .set_duration("business_duration", Some(90_061))?
        .set_null("assigned_to")
        .update(&table, &key)?;

    let mut records = RecordList::from_response(&Element::parse(RESPONSE)?);
    let mut cursor = records.cursor();
    while cursor.has_next() {
        if cursor.next()?.get_bool("active")? == Some(false) {
            let removed = cursor.remove()?;
            log::info!("Dropped inactive {}", removed.number().unwrap_or("?"));
        }
    }

    for record in &records {
        log::info!("Active: {}", record.number().unwrap_or("?"));
    }
    log::info!("Sent {} requests", table.requests.borrow().len());
    Ok(())
}
