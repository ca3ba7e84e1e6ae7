use crate::domain::{GeoLocation, RankedRestArea, RestArea};
use crate::extensions::float_ext::RoundTo;
use crate::geo::distance::distance_between;
use ordered_float::OrderedFloat;
use tracing::{debug, instrument};

pub const DEFAULT_RADIUS_KM: f64 = 5.0;
pub const DISTANCE_DECIMALS: i32 = 2;

/// Returns the catalog as is.
pub fn list_all(catalog: Vec<RestArea>) -> Vec<RestArea> {
    catalog
}

/// Returns every rest area within `radius_km` of the query location, nearest first.
///
/// The boundary is inclusive and compared against the unrounded distance. The attached distance is rounded to
/// [`DISTANCE_DECIMALS`] decimals and rest areas with an equal rounded distance keep their catalog order.
///
/// Rounding is half away from zero, so an exact binary tie such as 0.125 becomes 0.13 rather than the
/// half-to-even 0.12. Haversine distances practically never land on such a tie.
///
/// This is a linear scan over the whole catalog.
#[instrument(skip(catalog), fields(catalog_size = catalog.len()))]
pub fn search(latitude: f64, longitude: f64, catalog: &[RestArea], radius_km: f64) -> Vec<RankedRestArea> {
    let query = GeoLocation::new(latitude, longitude);
    let mut nearby = catalog
        .iter()
        .filter_map(|rest_area| {
            let distance = distance_between(&query, &rest_area.location());
            (distance <= radius_km).then(|| RankedRestArea {
                rest_area: rest_area.clone(),
                distance_km: distance.round_to(DISTANCE_DECIMALS),
            })
        })
        .collect::<Vec<_>>();

    // Stable, equal distances stay in catalog order
    nearby.sort_by_key(|ranked| OrderedFloat(ranked.distance_km));

    debug!("🔍 Found {} of {} rest area(s) within {} km", nearby.len(), catalog.len(), radius_km);
    nearby
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::InMemoryCatalog;
    use crate::geo::distance::haversine_km;
    use pretty_assertions::assert_eq;
    use rstest::{fixture, rstest};

    fn rest_area(id: u64, latitude: f64, longitude: f64) -> RestArea {
        RestArea {
            id,
            name: format!("rest area {}", id),
            latitude,
            longitude,
            description: None,
        }
    }

    #[fixture]
    fn sample() -> Vec<RestArea> {
        InMemoryCatalog::sample().rest_areas().to_vec()
    }

    fn ids(results: &[RankedRestArea]) -> Vec<u64> {
        results.iter().map(|ranked| ranked.rest_area.id).collect()
    }

    #[rstest]
    fn a_query_at_a_catalog_point_ranks_that_point_first(sample: Vec<RestArea>) {
        let results = search(35.6881, 139.9926, &sample, DEFAULT_RADIUS_KM);

        assert_eq!(results[0].rest_area.name, "船橋港親水公園");
        assert_eq!(results[0].distance_km, 0.0);
        assert_eq!(ids(&results), vec![1, 3, 2]);
        assert_eq!(results.iter().map(|ranked| ranked.distance_km).collect::<Vec<_>>(), vec![0.0, 1.83, 2.75]);
    }

    #[rstest]
    fn a_query_far_from_every_point_returns_nothing(sample: Vec<RestArea>) {
        assert!(search(0.0, 0.0, &sample, DEFAULT_RADIUS_KM).is_empty());
    }

    #[test]
    fn an_empty_catalog_returns_nothing() {
        assert!(search(35.6881, 139.9926, &[], DEFAULT_RADIUS_KM).is_empty());
    }

    #[rstest]
    fn a_wider_radius_includes_more_rest_areas(sample: Vec<RestArea>) {
        let results = search(35.72, 140.05, &sample, 10.0);

        assert_eq!(ids(&results), vec![8, 9, 6, 2, 7, 3, 1, 10, 4, 5]);
    }

    #[test]
    fn equal_distances_keep_catalog_order() {
        // Same latitude, mirrored longitude offsets
        let catalog = vec![rest_area(7, 35.0, 139.01), rest_area(3, 35.0, 138.99), rest_area(5, 35.0, 139.005)];

        let results = search(35.0, 139.0, &catalog, DEFAULT_RADIUS_KM);

        assert_eq!(ids(&results), vec![5, 7, 3]);
        assert_eq!(results[1].distance_km, results[2].distance_km);
    }

    #[test]
    fn duplicate_locations_keep_catalog_order() {
        let catalog = vec![rest_area(9, 35.01, 139.0), rest_area(2, 35.01, 139.0), rest_area(4, 35.01, 139.0)];

        let results = search(35.0, 139.0, &catalog, DEFAULT_RADIUS_KM);

        assert_eq!(ids(&results), vec![9, 2, 4]);
    }

    #[test]
    fn a_rest_area_exactly_on_the_radius_is_included() {
        let catalog = vec![rest_area(1, 35.05, 139.0)];
        let radius_km = haversine_km(35.0, 139.0, 35.05, 139.0);

        let results = search(35.0, 139.0, &catalog, radius_km);

        assert_eq!(ids(&results), vec![1]);
    }

    #[test]
    fn a_rest_area_just_beyond_the_radius_is_excluded() {
        let catalog = vec![rest_area(1, 35.05, 139.0)];
        let radius_km = haversine_km(35.0, 139.0, 35.05, 139.0) - 1e-9;

        assert!(search(35.0, 139.0, &catalog, radius_km).is_empty());
    }

    #[rstest]
    #[case(35.6881, 139.9926)]
    #[case(35.72, 140.05)]
    #[case(35.74, 140.1)]
    fn results_are_exactly_the_rest_areas_within_the_radius(sample: Vec<RestArea>, #[case] latitude: f64, #[case] longitude: f64) {
        let results = search(latitude, longitude, &sample, DEFAULT_RADIUS_KM);

        for rest_area in &sample {
            let distance = haversine_km(latitude, longitude, rest_area.latitude, rest_area.longitude);
            let found = results.iter().find(|ranked| ranked.rest_area == *rest_area);
            match found {
                Some(ranked) => {
                    assert!(distance <= DEFAULT_RADIUS_KM);
                    assert_eq!(ranked.distance_km, distance.round_to(DISTANCE_DECIMALS));
                }
                None => assert!(distance > DEFAULT_RADIUS_KM, "rest area {} at {} km is missing", rest_area.id, distance),
            }
        }

        assert!(results.windows(2).all(|pair| pair[0].distance_km <= pair[1].distance_km));
    }

    #[rstest]
    fn searching_twice_yields_identical_results(sample: Vec<RestArea>) {
        let first = search(35.72, 140.05, &sample, DEFAULT_RADIUS_KM);
        let second = search(35.72, 140.05, &sample, DEFAULT_RADIUS_KM);

        assert_eq!(first, second);
    }

    #[test]
    fn out_of_range_query_coordinates_are_not_rejected() {
        let catalog = vec![rest_area(1, 35.0, 139.0)];

        assert!(search(135.0, 500.0, &catalog, DEFAULT_RADIUS_KM).is_empty());
    }

    #[rstest]
    fn list_all_returns_the_catalog_unchanged(sample: Vec<RestArea>) {
        assert_eq!(list_all(sample.clone()), sample);
    }
}
