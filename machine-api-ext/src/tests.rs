use super::*;

fn now() -> metav1::Time {
    metav1::Time::now()
}

#[test]
fn days_since() {
    let now = now();
    let earlier = now.checked_sub_days(30.0).unwrap();
    assert_eq!(now.days_since(&earlier), 30.0);
    assert_eq!(earlier.days_since(&now), -30.0);
    assert_eq!(now.days_since(&now), 0.0);

    let half = now.checked_sub_days(0.5).unwrap();
    assert_eq!(now.days_since(&half), 0.5);
}

#[test]
fn checked_sub_days_rejects_nonsense() {
    let now = now();
    assert!(now.checked_sub_days(f64::NAN).is_none());
    assert!(now.checked_sub_days(f64::INFINITY).is_none());
    assert!(now.checked_sub_days(1.0e12).is_none());
}

#[test]
fn object_meta_builders() {
    let created = now();
    let meta = metav1::ObjectMeta::with_namespace("m-0", "openshift-machine-api")
        .created(created.clone())
        .label("a", "1")
        .label("b", "2")
        .annotation("note", "x");

    assert_eq!(meta.name.as_deref(), Some("m-0"));
    assert_eq!(meta.namespace.as_deref(), Some("openshift-machine-api"));
    assert_eq!(meta.creation_timestamp, Some(created));
    assert!(meta.deletion_timestamp.is_none());
    assert_eq!(meta.labels.as_ref().map(BTreeMap::len), Some(2));
    assert_eq!(
        meta.annotations
            .as_ref()
            .and_then(|annotations| annotations.get("note"))
            .map(String::as_str),
        Some("x")
    );

    let deleted = meta.deleted(now());
    assert!(deleted.deletion_timestamp.is_some());
}

#[test]
fn machine_age() {
    let now = now();
    let mut machine = machinev1::Machine::new("m-0", machinev1::MACHINE_API_NAMESPACE);
    assert_eq!(machine.name(), "m-0");
    assert_eq!(machine.age_days(&now), None);

    machine.metadata = machine.metadata.created(now.checked_sub_days(12.25));
    assert_eq!(machine.age_days(&now), Some(12.25));
}

#[test]
fn unnamed_machine() {
    let machine = machinev1::Machine::default();
    assert_eq!(machine.name(), "");
}
