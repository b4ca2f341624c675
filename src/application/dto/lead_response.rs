// Copyright (c) 2025 Kirky.X
//
// Licensed under the MIT License
// See LICENSE file in the project root for full license information.

use serde::{Deserialize, Serialize};

use crate::domain::models::business::BusinessRecord;
use crate::domain::models::contact::Contact;

#[derive(Debug, Serialize, Deserialize)]
pub struct SearchResponseDto {
    pub count: usize,
    pub results: Vec<BusinessRecord>,
}

impl From<Vec<BusinessRecord>> for SearchResponseDto {
    fn from(results: Vec<BusinessRecord>) -> Self {
        Self {
            count: results.len(),
            results,
        }
    }
}

#[derive(Debug, Serialize, Deserialize)]
pub struct ContactsResponseDto {
    pub count: usize,
    pub contacts: Vec<Contact>,
}

impl From<Vec<Contact>> for ContactsResponseDto {
    fn from(contacts: Vec<Contact>) -> Self {
        Self {
            count: contacts.len(),
            contacts,
        }
    }
}
