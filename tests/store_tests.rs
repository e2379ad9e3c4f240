//! Library-level tests for the record store.

use offerdesk::db::Store;
use offerdesk::models::employee::Employee;
use offerdesk::models::offer::Offer;
use std::env;
use std::fs;

fn open_store(name: &str) -> Store {
    let mut path = env::temp_dir();
    path.push(format!("{}_store_offerdesk.sqlite", name));
    let db_path = path.to_string_lossy().to_string();
    fs::remove_file(&db_path).ok();
    Store::open(&db_path).expect("open store")
}

fn employee(id: &str) -> Employee {
    Employee {
        id: id.to_string(),
        name: "Asha Rao".to_string(),
        position: "Software Engineer".to_string(),
        start_date: "2024-01-15".to_string(),
        location: "Bangalore, India".to_string(),
        salary: 1_200_000,
        benefits: "Health insurance".to_string(),
    }
}

#[test]
fn employee_round_trip_preserves_every_field() {
    let store = open_store("round_trip");
    let original = employee("E100");

    store.put_employee(&original).unwrap();
    let fetched = store.employee("E100").unwrap().expect("record exists");

    assert_eq!(fetched, original);
}

#[test]
fn missing_employee_reads_as_none() {
    let store = open_store("missing");
    assert!(store.employee("GHOST").unwrap().is_none());
}

#[test]
fn put_with_same_id_replaces_the_record() {
    let store = open_store("put_replace");
    store.put_employee(&employee("E100")).unwrap();

    let mut updated = employee("E100");
    updated.salary = 1_500_000;
    store.put_employee(&updated).unwrap();

    let fetched = store.employee("E100").unwrap().unwrap();
    assert_eq!(fetched.salary, 1_500_000);
    assert_eq!(store.employees().unwrap().len(), 1);
}

#[test]
fn delete_reports_whether_a_record_existed() {
    let store = open_store("delete");
    store.put_employee(&employee("E100")).unwrap();

    assert!(store.delete_employee("E100").unwrap());
    assert!(!store.delete_employee("E100").unwrap());
}

#[test]
fn offer_round_trip_preserves_content_order() {
    let store = open_store("offer_rt");
    let offer = Offer::new(
        "OF-1".to_string(),
        "E100".to_string(),
        vec![
            "Dear Candidate,".to_string(),
            "Salary: ₹12,00,000 per annum".to_string(),
            "Sincerely,".to_string(),
        ],
    );

    store.put_offer(&offer).unwrap();
    let fetched = store.offer("OF-1").unwrap().expect("offer exists");

    assert_eq!(fetched, offer);
    assert!(!fetched.accepted);
}

#[test]
fn offer_lookup_by_employee() {
    let store = open_store("offer_by_emp");
    let offer = Offer::new("OF-2".to_string(), "E200".to_string(), vec!["Hi".to_string()]);
    store.put_offer(&offer).unwrap();

    let fetched = store.offer_for_employee("E200").unwrap().unwrap();
    assert_eq!(fetched.id, "OF-2");
    assert!(store.offer_for_employee("E999").unwrap().is_none());
}

#[test]
fn accepting_an_offer_persists() {
    let store = open_store("offer_accept");
    let mut offer = Offer::new("OF-3".to_string(), "E300".to_string(), vec!["Hi".to_string()]);
    store.put_offer(&offer).unwrap();

    offer.accepted = true;
    store.put_offer(&offer).unwrap();

    assert!(store.offer("OF-3").unwrap().unwrap().accepted);
}

#[test]
fn clear_all_empties_both_collections() {
    let mut store = open_store("clear_all");
    store.put_employee(&employee("E100")).unwrap();
    store.put_employee(&employee("E200")).unwrap();
    store
        .put_offer(&Offer::new("OF-1".to_string(), "E100".to_string(), vec![]))
        .unwrap();

    store.clear_all().unwrap();

    assert!(store.employees().unwrap().is_empty());
    assert!(store.offers().unwrap().is_empty());
}

#[test]
fn salary_check_constraint_rejects_negative_rows() {
    let store = open_store("check_constraint");
    let mut bad = employee("E666");
    bad.salary = -5;

    assert!(store.put_employee(&bad).is_err());
}
