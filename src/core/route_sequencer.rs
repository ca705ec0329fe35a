//! Greedy Nearest-Neighbor-Reihenfolge für Lieferstopps.
//!
//! Bewusst eine einfache Heuristik (O(N²)), kein optimaler Tourlöser.

use super::{GeoPoint, Stop};

/// Sortiert `stops` ab `start` nach dem jeweils nächstgelegenen Stopp.
///
/// Ohne Startpunkt wird die Eingabe unverändert zurückgegeben (keine Labels).
/// Mit Startpunkt erhält jeder Stopp das Label seiner 1-basierten Position,
/// vorherige Labels werden überschrieben. Bei gleicher Distanz gewinnt der
/// zuerst im Pool stehende Stopp.
pub fn sequence_nearest_neighbor(stops: Vec<Stop>, start: Option<GeoPoint>) -> Vec<Stop> {
    let Some(start) = start else {
        return stops;
    };

    let mut pool = stops;
    let mut ordered = Vec::with_capacity(pool.len());
    let mut current = start;

    while let Some(index) = nearest_index(&pool, current) {
        let next = pool.remove(index);
        current = next.position;
        ordered.push(next);
    }

    for (position, stop) in ordered.iter_mut().enumerate() {
        stop.label = Some(position as u32 + 1);
    }

    ordered
}

/// Index des Pool-Eintrags mit minimalem Distanz-Schlüssel (erstes Minimum).
fn nearest_index(pool: &[Stop], current: GeoPoint) -> Option<usize> {
    let mut best: Option<(usize, f64)> = None;
    for (index, stop) in pool.iter().enumerate() {
        let key = stop.position.distance_key(current);
        match best {
            Some((_, best_key)) if key >= best_key => {}
            _ => best = Some((index, key)),
        }
    }
    best.map(|(index, _)| index)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::StopGenerator;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn stop_at(id: u64, lat: f64, lng: f64) -> Stop {
        Stop::new(id, GeoPoint::new(lat, lng))
    }

    fn ids(stops: &[Stop]) -> Vec<u64> {
        stops.iter().map(|s| s.id).collect()
    }

    #[test]
    fn greedy_order_follows_nearest_neighbor() {
        // A=(1,0), B=(5,0), C=(2,0) ab P=(0,0) → A, C, B
        let stops = vec![stop_at(1, 1.0, 0.0), stop_at(2, 5.0, 0.0), stop_at(3, 2.0, 0.0)];

        let result = sequence_nearest_neighbor(stops, Some(GeoPoint::new(0.0, 0.0)));

        assert_eq!(ids(&result), vec![1, 3, 2]);
        let labels: Vec<_> = result.iter().map(|s| s.label).collect();
        assert_eq!(labels, vec![Some(1), Some(2), Some(3)]);
    }

    #[test]
    fn without_start_returns_input_unchanged() {
        let stops = vec![stop_at(1, 5.0, 0.0), stop_at(2, 1.0, 0.0)];

        let result = sequence_nearest_neighbor(stops.clone(), None);

        assert_eq!(result, stops);
        assert!(result.iter().all(|s| s.label.is_none()));
    }

    #[test]
    fn empty_input_yields_empty_route() {
        let result = sequence_nearest_neighbor(Vec::new(), Some(GeoPoint::default()));
        assert!(result.is_empty());
    }

    #[test]
    fn ties_keep_pool_order() {
        // Beide Stopps gleich weit vom Start entfernt
        let stops = vec![stop_at(10, 0.0, 1.0), stop_at(11, 0.0, -1.0)];

        let result = sequence_nearest_neighbor(stops, Some(GeoPoint::new(0.0, 0.0)));

        assert_eq!(ids(&result), vec![10, 11]);
    }

    #[test]
    fn resequencing_overwrites_previous_labels() {
        let stops = vec![stop_at(1, 1.0, 0.0), stop_at(2, 2.0, 0.0)];
        let first = sequence_nearest_neighbor(stops, Some(GeoPoint::new(0.0, 0.0)));
        assert_eq!(ids(&first), vec![1, 2]);

        let second = sequence_nearest_neighbor(first, Some(GeoPoint::new(3.0, 0.0)));

        assert_eq!(ids(&second), vec![2, 1]);
        assert_eq!(second[0].label, Some(1));
        assert_eq!(second[1].label, Some(2));
    }

    #[test]
    fn result_is_permutation_with_contiguous_labels() {
        let generator = StopGenerator::new(
            vec![GeoPoint::new(40.144, -75.115), GeoPoint::new(40.177, -75.106)],
            0.015,
        );

        for count in [0usize, 1, 2, 17, 35] {
            let mut rng = StdRng::seed_from_u64(count as u64);
            let stops = generator.generate(count, &mut rng);
            let mut expected = ids(&stops);

            let result =
                sequence_nearest_neighbor(stops, Some(GeoPoint::new(40.16, -75.12)));

            let mut actual = ids(&result);
            expected.sort_unstable();
            actual.sort_unstable();
            assert_eq!(actual, expected);

            let labels: Vec<u32> = result.iter().filter_map(|s| s.label).collect();
            let contiguous: Vec<u32> = (1..=count as u32).collect();
            assert_eq!(labels, contiguous);
        }
    }

    #[test]
    fn each_step_picks_the_closest_remaining_stop() {
        let generator = StopGenerator::new(vec![GeoPoint::new(0.0, 0.0)], 1.0);
        let stops = generator.generate(25, &mut StdRng::seed_from_u64(99));
        let start = GeoPoint::new(0.3, -0.2);

        let result = sequence_nearest_neighbor(stops, Some(start));

        let mut current = start;
        for (i, stop) in result.iter().enumerate() {
            let chosen = stop.position.distance_key(current);
            for later in &result[i + 1..] {
                assert!(chosen <= later.position.distance_key(current));
            }
            current = stop.position;
        }
    }
}
