use bethyw_rs::{Area, AreaStore, Measure, ValueSeries};

fn pop(readings: &[(u32, f64)]) -> Measure {
    let mut m = Measure::new("pop", "Population");
    for (y, v) in readings {
        m.set_value(*y, *v);
    }
    m
}

fn years(m: &Measure) -> Vec<(u32, f64)> {
    m.series().iter().collect()
}

#[test]
fn series_merge_incoming_wins_and_old_years_survive() {
    let mut old: ValueSeries = [(1998, 1.0), (1999, 10.0)].into_iter().collect();
    let new: ValueSeries = [(1999, 20.0), (2000, 30.0)].into_iter().collect();
    old.merge(new);
    assert_eq!(old.iter().collect::<Vec<_>>(), vec![(1998, 1.0), (1999, 20.0), (2000, 30.0)]);
}

#[test]
fn area_merge_takes_incoming_measure_values() {
    let mut a = Area::new("W06000011");
    a.set_measure("pop", pop(&[(1999, 10.0)])).unwrap();
    let mut b = Area::new("W06000011");
    b.set_measure("pop", pop(&[(1999, 20.0), (2000, 30.0)])).unwrap();

    a.merge(b);
    assert_eq!(years(a.measure("pop").unwrap()), vec![(1999, 20.0), (2000, 30.0)]);
}

#[test]
fn store_upsert_incoming_wins_stored_only_data_survives() {
    let mut store = AreaStore::new();

    let mut first = Area::new("W06000011");
    first.set_name("eng", "Swansea");
    first.set_name("cym", "Abertawe");
    first.set_measure("pop", pop(&[(1998, 5.0), (1999, 10.0)])).unwrap();
    first.set_measure("area", Measure::new("area", "Land area")).unwrap();
    store.upsert("W06000011", first);

    let mut second = Area::new("W06000011");
    second.set_name("eng", "City of Swansea");
    second.set_measure("pop", pop(&[(1999, 20.0), (2000, 30.0)])).unwrap();
    store.upsert("W06000011", second);

    assert_eq!(store.len(), 1);
    let a = store.get("W06000011").unwrap();
    assert_eq!(a.name("eng").unwrap(), "City of Swansea");
    assert_eq!(a.name("cym").unwrap(), "Abertawe");
    assert_eq!(a.measure_count(), 2);
    assert_eq!(
        years(a.measure("pop").unwrap()),
        vec![(1998, 5.0), (1999, 20.0), (2000, 30.0)]
    );
}

#[test]
fn measure_merge_keeps_existing_label() {
    let mut a = Measure::new("dens", "Population density");
    a.set_value(2000, 1.0);
    let mut b = Measure::new("DENS", "Density");
    b.set_value(2001, 2.0);
    a.merge(b);
    assert_eq!(a.label(), "Population density");
    assert_eq!(a.len(), 2);
}
