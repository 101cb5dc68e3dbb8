// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Validated drafts for records that receive an identifier on creation,
//! and the summary shape shared by every stored record.

use crate::error::DomainError;
use crate::identifier::{Collection, LinkedPid};
use serde::{Deserialize, Serialize};

/// Trims a required text field and rejects it when empty.
fn required(field: &'static str, value: &str) -> Result<String, DomainError> {
    let trimmed: &str = value.trim();
    if trimmed.is_empty() {
        return Err(DomainError::InvalidField {
            field,
            reason: String::from("cannot be empty"),
        });
    }
    Ok(trimmed.to_string())
}

/// Trims an optional text field, treating blank values as absent.
fn optional(value: Option<&str>) -> Option<String> {
    value
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Validates an optional linked PID, treating blank values as absent.
fn optional_linked_pid(value: Option<&str>) -> Result<Option<LinkedPid>, DomainError> {
    optional(value).map(|v| LinkedPid::new(&v)).transpose()
}

/// A new project. Receives a `pid_no` on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectDraft {
    /// Project name.
    pub name: String,
    /// The client the project is executed for.
    pub client_name: String,
}

impl ProjectDraft {
    /// Validates the fields of a new project.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is empty.
    pub fn new(name: &str, client_name: &str) -> Result<Self, DomainError> {
        Ok(Self {
            name: required("name", name)?,
            client_name: required("client_name", client_name)?,
        })
    }
}

/// A new customer order. Receives an `order_no` on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OrderDraft {
    /// The ordering customer.
    pub client_name: String,
    /// What was ordered.
    pub description: String,
    /// The customer's own reference for the order, if any.
    pub customer_reference: Option<String>,
}

impl OrderDraft {
    /// Validates the fields of a new order.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is empty.
    pub fn new(
        client_name: &str,
        description: &str,
        customer_reference: Option<&str>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            client_name: required("client_name", client_name)?,
            description: required("description", description)?,
            customer_reference: optional(customer_reference),
        })
    }
}

/// A new quotation. Receives a `quotation_no` on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuotationDraft {
    /// The client being quoted.
    pub client_name: String,
    /// Subject line of the quotation.
    pub subject: String,
    /// The PID this quotation belongs to, if any.
    pub linked_pid: Option<LinkedPid>,
}

impl QuotationDraft {
    /// Validates the fields of a new quotation.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is empty or the linked PID is invalid.
    pub fn new(
        client_name: &str,
        subject: &str,
        linked_pid: Option<&str>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            client_name: required("client_name", client_name)?,
            subject: required("subject", subject)?,
            linked_pid: optional_linked_pid(linked_pid)?,
        })
    }
}

/// A new purchase order. Receives a `po_number` on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseOrderDraft {
    /// The supplier.
    pub vendor_name: String,
    /// What is being purchased.
    pub description: String,
    /// The PID this purchase is charged to, if any.
    pub linked_pid: Option<LinkedPid>,
}

impl PurchaseOrderDraft {
    /// Validates the fields of a new purchase order.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is empty or the linked PID is invalid.
    pub fn new(
        vendor_name: &str,
        description: &str,
        linked_pid: Option<&str>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            vendor_name: required("vendor_name", vendor_name)?,
            description: required("description", description)?,
            linked_pid: optional_linked_pid(linked_pid)?,
        })
    }
}

/// A new purchase request. Receives a `pr_number` on creation.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PurchaseRequestDraft {
    /// Who raised the request.
    pub requested_by: String,
    /// What is being requested.
    pub description: String,
    /// The PID this request is raised against, if any.
    pub linked_pid: Option<LinkedPid>,
}

impl PurchaseRequestDraft {
    /// Validates the fields of a new purchase request.
    ///
    /// # Errors
    ///
    /// Returns an error if a required field is empty or the linked PID is invalid.
    pub fn new(
        requested_by: &str,
        description: &str,
        linked_pid: Option<&str>,
    ) -> Result<Self, DomainError> {
        Ok(Self {
            requested_by: required("requested_by", requested_by)?,
            description: required("description", description)?,
            linked_pid: optional_linked_pid(linked_pid)?,
        })
    }
}

/// A stored record, in the shape shared by all collections.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RecordSummary {
    /// Row identifier within the collection.
    pub id: i64,
    /// The collection the record belongs to.
    pub collection: Collection,
    /// The allocated identifier.
    pub identifier: String,
    /// The parent PID, for records that may be linked to one.
    pub linked_pid: Option<String>,
    /// Client, vendor or requester.
    pub counterparty: String,
    /// Project name, description or subject.
    pub title: String,
    /// Creation time in the business timezone (ISO 8601, no offset).
    pub created_at: String,
}
