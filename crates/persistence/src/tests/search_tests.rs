// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

//! Member search resolution tests.

use checkin_domain::SearchTerm;

use super::{create_named_member, create_test_persistence};
use crate::{MemberData, Persistence};

#[test]
fn test_find_member_by_exact_code() {
    let mut persistence: Persistence = create_test_persistence();
    let member: MemberData =
        create_named_member(&mut persistence, "Jane", "Doe", Some("0712345678"))
            .expect("Member creation should succeed");

    let term: SearchTerm = SearchTerm::classify(&member.member_code).unwrap();
    let found: MemberData = persistence
        .find_member(&term)
        .expect("Search should succeed")
        .expect("Member should be found");

    assert_eq!(found.member_id, member.member_id);
}

#[test]
fn test_find_member_code_lookup_is_case_insensitive() {
    let mut persistence: Persistence = create_test_persistence();
    let member: MemberData = create_named_member(&mut persistence, "Jane", "Doe", None)
        .expect("Member creation should succeed");

    let term: SearchTerm = SearchTerm::classify(&member.member_code.to_lowercase()).unwrap();
    let found: Option<MemberData> = persistence.find_member(&term).expect("Search should succeed");

    assert!(found.is_some());
}

#[test]
fn test_find_member_by_phone_fragment() {
    let mut persistence: Persistence = create_test_persistence();
    let member: MemberData =
        create_named_member(&mut persistence, "Jane", "Doe", Some("0712345678"))
            .expect("Member creation should succeed");

    let term: SearchTerm = SearchTerm::classify("2345").unwrap();
    let found: MemberData = persistence
        .find_member(&term)
        .expect("Search should succeed")
        .expect("Member should be found");

    assert_eq!(found.member_id, member.member_id);
}

#[test]
fn test_find_member_by_first_name() {
    let mut persistence: Persistence = create_test_persistence();
    create_named_member(&mut persistence, "Wanjiku", "Kamau", None)
        .expect("Member creation should succeed");

    let term: SearchTerm = SearchTerm::classify("Wanjiku").unwrap();
    let found: Option<MemberData> = persistence.find_member(&term).expect("Search should succeed");

    assert!(found.is_some());
}

#[test]
fn test_find_member_by_full_name_across_columns() {
    // "first last" only exists in the concatenation, not either column.
    let mut persistence: Persistence = create_test_persistence();
    create_named_member(&mut persistence, "Wanjiku", "Kamau", None)
        .expect("Member creation should succeed");

    let term: SearchTerm = SearchTerm::classify("Wanjiku Kamau").unwrap();
    let found: Option<MemberData> = persistence.find_member(&term).expect("Search should succeed");

    assert!(found.is_some());
}

#[test]
fn test_fuzzy_tie_resolves_to_lowest_member_id() {
    let mut persistence: Persistence = create_test_persistence();
    let first: MemberData = create_named_member(&mut persistence, "Peter", "Njoroge", None)
        .expect("Member creation should succeed");
    let _second: MemberData = create_named_member(&mut persistence, "Peter", "Mwangi", None)
        .expect("Member creation should succeed");

    let term: SearchTerm = SearchTerm::classify("Peter").unwrap();
    let found: MemberData = persistence
        .find_member(&term)
        .expect("Search should succeed")
        .expect("A member should be found");

    assert_eq!(found.member_id, first.member_id);
}

#[test]
fn test_find_member_no_match_returns_none() {
    let mut persistence: Persistence = create_test_persistence();
    create_named_member(&mut persistence, "Jane", "Doe", None)
        .expect("Member creation should succeed");

    let term: SearchTerm = SearchTerm::classify("Nonexistent").unwrap();
    let found: Option<MemberData> = persistence.find_member(&term).expect("Search should succeed");

    assert!(found.is_none());
}

#[test]
fn test_unknown_member_code_returns_none() {
    let mut persistence: Persistence = create_test_persistence();
    create_named_member(&mut persistence, "Jane", "Doe", None)
        .expect("Member creation should succeed");

    let term: SearchTerm = SearchTerm::classify("MBR-9999").unwrap();
    let found: Option<MemberData> = persistence.find_member(&term).expect("Search should succeed");

    assert!(found.is_none());
}

#[test]
fn test_code_search_does_not_fall_back_to_fuzzy() {
    // A member whose name contains "MBR-" must not match an ID search.
    let mut persistence: Persistence = create_test_persistence();
    create_named_member(&mut persistence, "MBR-like", "Name", None)
        .expect("Member creation should succeed");

    let term: SearchTerm = SearchTerm::classify("MBR-like").unwrap();
    let found: Option<MemberData> = persistence.find_member(&term).expect("Search should succeed");

    assert!(found.is_none());
}
