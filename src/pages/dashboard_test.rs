use super::*;

#[test]
fn stat_cards_cover_all_counters_in_display_order() {
    let stats = Stats {
        total_nodes: 5,
        total_devices: 2,
        total_routes: 3,
        total_traffic: "3.4 GB".to_owned(),
    };
    let cards = stat_cards(&stats);
    assert_eq!(
        cards,
        vec![
            ("Total Nodes", "5".to_owned()),
            ("Total Devices", "2".to_owned()),
            ("Total Routes", "3".to_owned()),
            ("Total Traffic", "3.4 GB".to_owned()),
        ]
    );
}

#[test]
fn default_stats_render_zero_cards() {
    let cards = stat_cards(&Stats::default());
    assert_eq!(cards[0].1, "0");
    assert_eq!(cards[3].1, "");
}
