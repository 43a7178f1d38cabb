// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod purge_tests;
mod search_tests;

use checkin_domain::Gender;

use crate::{MemberData, Persistence, PersistenceError};

/// Sunday morning, the common case in tests.
pub const TEST_SERVICE: checkin_domain::Service = checkin_domain::Service::SundayMorning;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("In-memory database should initialize")
}

pub fn create_test_member(persistence: &mut Persistence) -> MemberData {
    persistence
        .create_member("Jane", "Doe", Some("0712345678"), None, Gender::Female)
        .expect("Member creation should succeed")
}

pub fn create_named_member(
    persistence: &mut Persistence,
    first_name: &str,
    last_name: &str,
    phone: Option<&str>,
) -> Result<MemberData, PersistenceError> {
    persistence.create_member(first_name, last_name, phone, None, Gender::Male)
}
