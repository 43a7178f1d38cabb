// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod types;
mod validation;

use crate::{EntryKind, LedgerRow};

pub fn create_test_row(date: &str, time: Option<&str>) -> LedgerRow {
    LedgerRow {
        name: String::from("Test Person"),
        kind: EntryKind::Member,
        phone: String::from("0712345678"),
        gender: String::from("Male"),
        service: String::from("Sunday Morning Service"),
        service_date: String::from(date),
        check_in_time: time.map(String::from),
    }
}
