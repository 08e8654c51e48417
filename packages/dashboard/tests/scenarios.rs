use airbnb_dashboard::{Coordinator, config::parse_config, load};
use airbnb_dashboard_geography_models::CountryBoundary;
use airbnb_dashboard_listing::ListingStore;
use airbnb_dashboard_listing_models::Listing;
use airbnb_dashboard_models::{
    ChartKind, DashboardEvent, Gesture, config::ChartSettings, view::ChartView,
};
use rand::{Rng as _, SeedableRng as _, rngs::StdRng, seq::IndexedRandom as _};

fn listing(country: &str, city: &str, neighbourhood: &str, room_type: &str, revenue: f64) -> Listing {
    Listing {
        country: country.to_string(),
        city: city.to_string(),
        neighbourhood: neighbourhood.to_string(),
        room_type: room_type.to_string(),
        room_price: Some(50.0),
        number_of_reviews: 1,
        prospective_revenue: revenue,
        ..Listing::default()
    }
}

fn boundary(name: &str) -> CountryBoundary {
    CountryBoundary {
        name: name.to_string(),
        key: name.trim().to_lowercase(),
        geometry: geojson::Geometry::new(geojson::Value::Polygon(vec![vec![
            vec![0.0, 0.0],
            vec![1.0, 0.0],
            vec![0.0, 1.0],
            vec![0.0, 0.0],
        ]])),
    }
}

fn dashboard() -> Coordinator {
    Coordinator::new(
        ListingStore::new(vec![
            listing("france", "Paris", "Marais", "Entire home/apt", 100.0),
            listing("france", "Lyon", "Presqu'ile", "Private room", 50.0),
            listing("spain", "Madrid", "Sol", "Entire home/apt", 30.0),
        ]),
        vec![boundary("France"), boundary("Spain"), boundary("Portugal")],
        &ChartSettings::default(),
    )
}

fn titles(coordinator: &Coordinator) -> Vec<String> {
    coordinator
        .snapshot()
        .charts
        .iter()
        .map(|c| c.title().to_string())
        .collect()
}

fn bar_labels(coordinator: &Coordinator, kind: ChartKind) -> Vec<String> {
    let ChartView::Bar(view) = coordinator.view(kind) else {
        panic!("{kind} is not a bar chart");
    };
    view.bars.into_iter().map(|b| b.label).collect()
}

#[test]
fn france_spain_overview() {
    let coordinator = dashboard();

    assert_eq!(
        bar_labels(&coordinator, ChartKind::BarHigh),
        vec!["france", "spain"]
    );
    assert_eq!(
        bar_labels(&coordinator, ChartKind::BarLow),
        vec!["spain", "france"]
    );
    assert_eq!(
        titles(&coordinator),
        vec![
            "Total Revenue by Country",
            "Revenue by Country",
            "Revenue by Room Type in All Countries",
            "Revenue: Top 2 Countries",
            "Revenue: Bottom 2 Countries",
            "Reviews: Top 10 Countries",
        ]
    );

    let ChartView::Map(map) = coordinator.view(ChartKind::Map) else {
        unreachable!()
    };
    let portugal = map.regions.iter().find(|r| r.key == "portugal").unwrap();
    assert!(!portugal.has_data());
}

#[test]
fn selecting_a_city_then_clearing_the_country() {
    let mut coordinator = dashboard();

    coordinator.handle(&Gesture::ClickRegion {
        name: "France".to_string(),
    });
    coordinator.handle(&Gesture::ClickBar {
        chart: ChartKind::BarHigh,
        label: "Paris".to_string(),
    });
    assert_eq!(coordinator.selection().country(), Some("france"));
    assert_eq!(coordinator.selection().city(), Some("Paris"));
    assert_eq!(
        bar_labels(&coordinator, ChartKind::BarHigh),
        vec!["Marais"]
    );

    // Clicking the selected region again deselects it.
    coordinator.handle(&Gesture::ClickRegion {
        name: "France".to_string(),
    });
    assert_eq!(coordinator.selection().country(), None);
    assert_eq!(coordinator.selection().city(), None);
    assert_eq!(
        bar_labels(&coordinator, ChartKind::BarHigh),
        vec!["france", "spain"]
    );
}

#[test]
fn room_type_toggle_round_trips() {
    let mut coordinator = dashboard();
    let before = coordinator.snapshot();

    let slice = Gesture::ClickSlice {
        room_type: "Private room".to_string(),
    };
    coordinator.handle(&slice);
    assert_eq!(coordinator.selection().room_type(), Some("Private room"));
    assert_eq!(bar_labels(&coordinator, ChartKind::BarHigh), vec!["france"]);

    coordinator.handle(&slice);
    assert_eq!(coordinator.selection().room_type(), None);
    assert_eq!(coordinator.snapshot(), before);
}

#[test]
fn bubble_back_walks_up_the_hierarchy() {
    let mut coordinator = dashboard();

    coordinator.handle(&Gesture::ClickBubble {
        label: "france".to_string(),
    });
    coordinator.handle(&Gesture::ClickBubble {
        label: "Lyon".to_string(),
    });
    assert_eq!(coordinator.selection().city(), Some("Lyon"));

    coordinator.handle(&Gesture::BubbleBack);
    assert_eq!(coordinator.selection().country(), Some("france"));
    assert_eq!(coordinator.selection().city(), None);

    coordinator.handle(&Gesture::BubbleBack);
    assert!(coordinator.selection().country().is_none());
    assert_eq!(coordinator.handle(&Gesture::BubbleBack), None);
}

#[test]
fn empty_store_renders_placeholders() {
    let mut coordinator = Coordinator::new(
        ListingStore::default(),
        vec![boundary("France")],
        &ChartSettings::default(),
    );

    let snapshot = coordinator.snapshot();
    assert!(snapshot.dropdown.options.is_empty());
    for chart in &snapshot.charts {
        match chart {
            ChartView::Map(view) => {
                assert!(view.legend.is_none());
                assert!(view.regions.iter().all(|r| !r.has_data()));
            }
            ChartView::Donut(view) => assert!(view.slices.is_empty()),
            ChartView::Bar(view) => assert!(view.bars.is_empty()),
            ChartView::Radial(view) => assert!(view.bars.is_empty()),
            ChartView::Bubble(view) => {
                assert!(view.bubbles.is_empty());
                assert_eq!(view.title, "");
                assert_eq!(view.placeholder.as_deref(), Some("No data available"));
            }
        }
    }

    assert_eq!(
        coordinator.handle(&Gesture::ClickRegion {
            name: "France".to_string()
        }),
        None
    );
}

fn pick(rng: &mut StdRng, items: &[&str]) -> String {
    items.choose(rng).copied().unwrap_or_default().to_string()
}

#[test]
fn city_never_selected_without_country() {
    let names = ["france", "spain", "Paris", "Lyon", "Madrid", "nowhere", ""];
    let room_types = ["Entire home/apt", "Private room"];
    let mut rng = StdRng::seed_from_u64(0x9E37_79B9_7F4A_7C15);
    let mut coordinator = dashboard();

    for step in 0..2_000 {
        let event = match rng.random_range(0..8) {
            0 => DashboardEvent::RegionClicked {
                country: pick(&mut rng, &names),
            },
            1 => DashboardEvent::CountryChosen {
                country: Some(pick(&mut rng, &names)),
            },
            2 => DashboardEvent::RoomTypeClicked {
                room_type: pick(&mut rng, &room_types),
            },
            3 => DashboardEvent::BarClicked {
                label: pick(&mut rng, &names),
            },
            4 => DashboardEvent::RadialClicked {
                label: pick(&mut rng, &names),
            },
            5 => DashboardEvent::BubbleDrill {
                country: rng.random_bool(0.5).then(|| pick(&mut rng, &names)),
                city: rng.random_bool(0.5).then(|| pick(&mut rng, &names)),
            },
            6 => DashboardEvent::BarCountChanged {
                count: rng.random_range(0..30),
            },
            _ => DashboardEvent::Reset,
        };

        coordinator.apply(&event);
        let selection = coordinator.selection();
        assert!(
            selection.city().is_none() || selection.country().is_some(),
            "step {step}: {event:?} left {selection:?}"
        );

        let interactive = selection.city().is_none();
        let ChartView::Bar(bar) = coordinator.view(ChartKind::BarLow) else {
            unreachable!()
        };
        assert_eq!(bar.interactive, interactive, "step {step}");
    }
}

#[tokio::test]
async fn loads_inputs_from_disk() {
    let dir = std::env::temp_dir().join(format!("airbnb-dashboard-{}", std::process::id()));
    tokio::fs::create_dir_all(&dir).await.unwrap();

    let listings = dir.join("listings.csv");
    tokio::fs::write(
        &listings,
        "Room_ID,Name,Host_ID,Neighbourhood,Room_type,Room_Price,Number_of_reviews,\
         Rooms_rent_by_the_host,Availibility,City,Country,Prospective_Revenue\n\
         1,Flat,10,Marais,Entire home/apt,120,8,1,200,Paris, France ,5000\n\
         2,Room,11,Sol,Private room,40,3,2,100,Madrid,Spain,1200\n",
    )
    .await
    .unwrap();

    let boundaries = dir.join("countries.geojson");
    tokio::fs::write(
        &boundaries,
        r#"{"type": "FeatureCollection", "features": [
            {"type": "Feature", "properties": {"NAME": "France"},
             "geometry": {"type": "Polygon", "coordinates": [[[0,0],[1,0],[1,1],[0,0]]]}}
        ]}"#,
    )
    .await
    .unwrap();

    let config = parse_config(&format!(
        "[data]\nlistings = {:?}\nboundaries = {:?}\n",
        listings.display().to_string(),
        boundaries.display().to_string()
    ))
    .unwrap();

    let data = load(&config).await.unwrap();
    assert_eq!(data.store.len(), 2);
    assert_eq!(data.boundaries.len(), 1);

    let coordinator = Coordinator::from_data(data, &config.charts);
    assert_eq!(coordinator.countries(), ["france", "spain"]);

    let missing = parse_config("[data]\nlistings = \"/nonexistent/listings.csv\"\n").unwrap();
    assert!(load(&missing).await.is_err());

    tokio::fs::remove_dir_all(&dir).await.ok();
}
