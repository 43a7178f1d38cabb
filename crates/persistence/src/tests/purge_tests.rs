// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Ledger purge tests.

use checkin_domain::{Gender, SearchTerm};

use super::{TEST_SERVICE, create_test_member, create_test_persistence};
use crate::{MemberData, Persistence, PurgeCounts};

#[test]
fn test_purge_reports_deleted_counts() {
    let mut persistence: Persistence = create_test_persistence();
    let member: MemberData = create_test_member(&mut persistence);

    persistence
        .register_attendance(
            member.member_id,
            TEST_SERVICE,
            "2026-08-23",
            "2026-08-23T08:45:00Z",
        )
        .expect("Check-in should succeed");
    persistence
        .register_visitor(
            "Amos Otieno",
            None,
            Gender::Male,
            false,
            TEST_SERVICE,
            "2026-08-23",
            "2026-08-23T09:10:00Z",
        )
        .expect("Visitor registration should succeed");

    let counts: PurgeCounts = persistence.purge_ledger().expect("Purge should succeed");

    assert_eq!(counts.member_entries, 1);
    assert_eq!(counts.visitor_entries, 1);
}

#[test]
fn test_purge_empties_the_ledger() {
    let mut persistence: Persistence = create_test_persistence();
    let member: MemberData = create_test_member(&mut persistence);

    persistence
        .register_attendance(
            member.member_id,
            TEST_SERVICE,
            "2026-08-23",
            "2026-08-23T08:45:00Z",
        )
        .expect("Check-in should succeed");

    persistence.purge_ledger().expect("Purge should succeed");

    let ledger = persistence.list_ledger().expect("Ledger read should succeed");
    assert!(ledger.is_empty());
}

#[test]
fn test_purge_keeps_member_records() {
    let mut persistence: Persistence = create_test_persistence();
    let member: MemberData = create_test_member(&mut persistence);

    persistence
        .register_attendance(
            member.member_id,
            TEST_SERVICE,
            "2026-08-23",
            "2026-08-23T08:45:00Z",
        )
        .expect("Check-in should succeed");

    persistence.purge_ledger().expect("Purge should succeed");

    let term: SearchTerm = SearchTerm::classify(&member.member_code).unwrap();
    let found = persistence.find_member(&term).expect("Search should succeed");
    assert!(found.is_some());
}

#[test]
fn test_purged_member_can_check_in_again() {
    let mut persistence: Persistence = create_test_persistence();
    let member: MemberData = create_test_member(&mut persistence);

    persistence
        .register_attendance(
            member.member_id,
            TEST_SERVICE,
            "2026-08-23",
            "2026-08-23T08:45:00Z",
        )
        .expect("First check-in should succeed");

    persistence.purge_ledger().expect("Purge should succeed");

    persistence
        .register_attendance(
            member.member_id,
            TEST_SERVICE,
            "2026-08-23",
            "2026-08-23T10:00:00Z",
        )
        .expect("Check-in after purge should succeed");
}

#[test]
fn test_purge_on_empty_ledger_reports_zero() {
    let mut persistence: Persistence = create_test_persistence();

    let counts: PurgeCounts = persistence.purge_ledger().expect("Purge should succeed");

    assert_eq!(counts.member_entries, 0);
    assert_eq!(counts.visitor_entries, 0);
}
