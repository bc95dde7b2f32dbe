use country_paths::{
    graphs::{
        country::{Connection, Country},
        graph_factory::CountryDataset,
    },
    routing::{CountryRouter, RouteError, RouterConfig},
};

fn americas() -> CountryDataset {
    let mut countries = Vec::new();
    let mut connections = Vec::new();
    for (id, name, neighbours) in [
        (1, "USA", vec![2_u64, 3]),
        (2, "CAN", vec![]),
        (3, "MEX", vec![4]),
        (4, "GTM", vec![5, 6]),
        (5, "BLZ", vec![]),
        (6, "SLV", vec![7]),
        (7, "HND", vec![4]),
        (8, "CUB", vec![]),
    ] {
        let (country, country_connections) = Country::with_connections(id, name, &neighbours);
        countries.push(country);
        connections.extend(country_connections);
    }
    CountryDataset::new(countries, connections)
}

fn abcd() -> CountryDataset {
    CountryDataset::new(
        vec![
            Country::new(1, "A"),
            Country::new(2, "B"),
            Country::new(3, "C"),
            Country::new(4, "D"),
        ],
        vec![Connection::new(1, 2).unwrap(), Connection::new(2, 3).unwrap()],
    )
}

fn router(origin: &str) -> CountryRouter {
    CountryRouter::new(RouterConfig {
        origin: origin.to_string(),
    })
}

#[test]
fn default_origin_is_usa() {
    let router = CountryRouter::default();
    assert_eq!(router.origin(), "USA");

    assert_eq!(
        router.route(&americas(), "HND"),
        Ok(vec![
            "USA".to_string(),
            "MEX".to_string(),
            "GTM".to_string(),
            "HND".to_string()
        ])
    );
}

#[test]
fn route_to_origin_itself() {
    assert_eq!(
        CountryRouter::default().route(&americas(), "USA"),
        Ok(vec!["USA".to_string()])
    );
}

#[test]
fn chain_route() {
    assert_eq!(
        router("A").route(&abcd(), "C"),
        Ok(vec!["A".to_string(), "B".to_string(), "C".to_string()])
    );

    let path = router("A").route_ids(&abcd(), "C").unwrap();
    assert_eq!(path.countries, vec![1, 2, 3]);
}

#[test]
fn unknown_destination_differs_from_no_path() {
    let unknown = router("A").route(&abcd(), "Z");
    assert_eq!(unknown, Err(RouteError::UnknownDestination("Z".to_string())));

    let no_path = router("A").route(&abcd(), "D");
    assert_eq!(
        no_path,
        Err(RouteError::NoPath {
            origin: "A".to_string(),
            destination: "D".to_string()
        })
    );

    assert_eq!(
        CountryRouter::default().route(&americas(), "CUB"),
        Err(RouteError::NoPath {
            origin: "USA".to_string(),
            destination: "CUB".to_string()
        })
    );
}

#[test]
fn unknown_destination_is_checked_first() {
    assert_eq!(
        router("Nowhere").route(&abcd(), "Z"),
        Err(RouteError::UnknownDestination("Z".to_string()))
    );
    assert_eq!(
        router("Nowhere").route(&abcd(), "C"),
        Err(RouteError::UnknownOrigin("Nowhere".to_string()))
    );
}

#[test]
fn error_messages() {
    assert_eq!(
        RouteError::UnknownDestination("Z".to_string()).to_string(),
        "no country of name Z"
    );
    assert_eq!(
        RouteError::NoPath {
            origin: "USA".to_string(),
            destination: "CUB".to_string()
        }
        .to_string(),
        "no valid path from USA to destination CUB"
    );
}

#[test]
fn names_resolve_through_graph_records() {
    // the second country with id 2 is dropped when the graph is built
    let dataset = CountryDataset::new(
        vec![Country::new(1, "A"), Country::new(2, "B"), Country::new(2, "C")],
        vec![Connection::new(1, 2).unwrap()],
    );

    assert_eq!(
        router("A").route(&dataset, "C"),
        Err(RouteError::UnknownDestination("C".to_string()))
    );
    assert_eq!(
        router("A").route(&dataset, "B"),
        Ok(vec!["A".to_string(), "B".to_string()])
    );
    assert_eq!(
        router("C").route(&dataset, "B"),
        Err(RouteError::UnknownOrigin("C".to_string()))
    );
}
