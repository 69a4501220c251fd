use std::io::Write;
use wayfinder::graph::{GraphError, GraphStore};
use wayfinder::street::StreetNetwork;

fn write_map(contents: &str) -> tempfile::NamedTempFile {
    let mut file = tempfile::NamedTempFile::new().unwrap();
    file.write_all(contents.as_bytes()).unwrap();
    file.flush().unwrap();
    file
}

#[test]
fn test_load_and_route_from_file() {
    let map = write_map(
        "# harbor district\n\
         Dock Plaza 1.0 Harbor_St\n\
         Plaza Market 2.0 Main_St\n\
         Dock Market 5.0 Ring_Rd\n\
         Market Chapel 1.0 Chapel_Ln\n",
    );

    let network = StreetNetwork::load(map.path()).unwrap();
    assert_eq!(network.intersection_count(), 4);
    assert_eq!(network.road_count(), 8);

    let route = network.find_route("Dock", "Chapel").unwrap().unwrap();
    assert_eq!(route.total_distance, 4.0);
    let roads: Vec<&str> = route.steps.iter().map(|s| s.road.as_str()).collect();
    assert_eq!(roads, vec!["Harbor_St", "Main_St", "Chapel_Ln"]);
}

#[test]
fn test_missing_map_file_is_an_error() {
    let err = StreetNetwork::load("/nonexistent/streets.map").unwrap_err();
    assert!(err.to_string().contains("failed to open map file"));
}

#[test]
fn test_unknown_endpoints_recover_gracefully() {
    let map = write_map("Dock Plaza 1.0 Harbor_St\n");
    let network = StreetNetwork::load(map.path()).unwrap();

    assert!(network.find_route("Nowhere", "Plaza").unwrap().is_none());
    assert!(network.find_route("Dock", "Nowhere").unwrap().is_none());
    // A valid pair still routes afterwards.
    assert!(network.find_route("Dock", "Plaza").unwrap().is_some());
}

#[test]
fn test_isolated_destination_reports_no_route() {
    let mut network = StreetNetwork::new();
    network.add_road("Dock", "Plaza", "Harbor_St", 1.0).unwrap();
    network.add_road("Quarry", "Mill", "Mill_Rd", 2.0).unwrap();

    // Both endpoints exist, but the components are disconnected.
    assert!(network.find_route("Dock", "Mill").unwrap().is_none());
}

#[test]
fn test_route_start_equals_end() {
    let mut network = StreetNetwork::new();
    network.add_road("Dock", "Plaza", "Harbor_St", 1.0).unwrap();

    let route = network.find_route("Dock", "Dock").unwrap().unwrap();
    assert!(route.steps.is_empty());
    assert_eq!(route.total_distance, 0.0);
}

#[test]
fn test_route_serializes_for_machine_output() {
    let mut network = StreetNetwork::new();
    network.add_road("Dock", "Plaza", "Harbor_St", 1.5).unwrap();

    let route = network.find_route("Dock", "Plaza").unwrap().unwrap();
    let json = serde_json::to_string(&route).unwrap();
    assert!(json.contains("\"Harbor_St\""));
    assert!(json.contains("\"total_distance\":1.5"));
}

#[test]
fn test_foreign_handles_fail_across_networks() {
    let mut network_a = StreetNetwork::new();
    network_a.add_road("Dock", "Plaza", "Harbor_St", 1.0).unwrap();
    let mut network_b = StreetNetwork::new();
    network_b.add_road("Dock", "Plaza", "Harbor_St", 1.0).unwrap();

    let dock_a = network_a.intersection("Dock").unwrap();
    let result = network_b.graph().outgoing(dock_a);
    assert!(matches!(result, Err(GraphError::InvalidPosition(_))));
}

#[test]
fn test_graph_labels_survive_route_computation() {
    // The search must not touch caller labels: distances attached by the
    // loader are intact after repeated routing.
    let mut network = StreetNetwork::new();
    network.add_road("Dock", "Plaza", "Harbor_St", 1.5).unwrap();
    network.add_road("Plaza", "Market", "Main_St", 2.0).unwrap();

    for _ in 0..3 {
        network.find_route("Dock", "Market").unwrap().unwrap();
    }

    let graph: &GraphStore<String, String> = network.graph();
    for edge in graph.edges() {
        let label = graph.edge_label(edge).unwrap();
        assert!(label.and_then(|l| l.as_float()).is_some());
    }
    // And vertex labels were never written at all.
    for vertex in graph.vertices() {
        assert!(graph.vertex_label(vertex).unwrap().is_none());
    }
}
