// Copyright (C) 2026 RFP Ministries
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use crate::{DomainError, Gender, Service};

#[test]
fn test_service_round_trips_through_display_name() {
    for service in Service::ALL {
        let name: &str = service.as_str();
        let parsed: Service = name.parse().unwrap();
        assert_eq!(parsed, service);
    }
}

#[test]
fn test_service_rejects_unknown_name() {
    let result: Result<Service, DomainError> = "Evening Service".parse();
    assert!(matches!(result, Err(DomainError::InvalidService(_))));
}

#[test]
fn test_service_rejects_case_variant() {
    let result: Result<Service, DomainError> = "sunday morning service".parse();
    assert!(matches!(result, Err(DomainError::InvalidService(_))));
}

#[test]
fn test_service_all_has_distinct_names() {
    let mut names: Vec<&str> = Service::ALL.iter().map(Service::as_str).collect();
    names.sort_unstable();
    names.dedup();
    assert_eq!(names.len(), Service::ALL.len());
}

#[test]
fn test_gender_round_trips_through_display_name() {
    for gender in [Gender::Male, Gender::Female, Gender::Other] {
        let parsed: Gender = gender.as_str().parse().unwrap();
        assert_eq!(parsed, gender);
    }
}

#[test]
fn test_gender_rejects_unknown_value() {
    let result: Result<Gender, DomainError> = "male".parse();
    assert!(matches!(result, Err(DomainError::InvalidGender(_))));
}
