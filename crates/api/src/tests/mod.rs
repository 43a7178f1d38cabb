// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

mod error_tests;

use checkin_domain::Gender;
use checkin_persistence::{MemberData, Persistence};

use crate::auth::PinGate;

pub fn create_test_persistence() -> Persistence {
    Persistence::new_in_memory().expect("In-memory database should initialize")
}

pub fn create_test_member(persistence: &mut Persistence) -> MemberData {
    persistence
        .create_member("Jane", "Doe", Some("0712345678"), None, Gender::Female)
        .expect("Member creation should succeed")
}

pub fn create_test_gate() -> PinGate {
    PinGate::new("1234")
}
