use crate::types::Caregiver;

/// Effective price used against the search ceiling: the larger of the two
/// price columns, with unset prices treated as 0.
pub fn effective_price(caregiver: &Caregiver) -> f64 {
    caregiver
        .price_per_day
        .unwrap_or(0.0)
        .max(caregiver.price_per_walk.unwrap_or(0.0))
}

/// Client-side post-filter for the maximum-price criterion. The backend query
/// layer cannot compare across both price columns in one predicate, so this
/// runs after the fetch. Order is preserved (the backend already sorted by
/// rating descending).
pub fn filter_by_price_ceiling(caregivers: Vec<Caregiver>, ceiling: f64) -> Vec<Caregiver> {
    caregivers
        .into_iter()
        .filter(|c| effective_price(c) <= ceiling)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn caregiver(id: &str, day: Option<f64>, walk: Option<f64>) -> Caregiver {
        Caregiver {
            id: id.to_string(),
            user_id: format!("user-{id}"),
            bio: None,
            city: None,
            state: None,
            address: None,
            experience_years: None,
            home_type: None,
            has_yard: None,
            max_pets_at_once: None,
            price_per_day: day,
            price_per_walk: walk,
            available_services: None,
            accepts_pet_sizes: None,
            rating: None,
            total_reviews: None,
            verified: Some(true),
        }
    }

    #[test]
    fn ceiling_compares_against_the_larger_price() {
        let results = filter_by_price_ceiling(
            vec![
                caregiver("a", Some(80.0), Some(20.0)),
                caregiver("b", Some(80.0), Some(120.0)),
                caregiver("c", Some(150.0), None),
            ],
            100.0,
        );
        let ids: Vec<&str> = results.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["a"]);
    }

    #[test]
    fn no_result_exceeds_the_ceiling() {
        let input = vec![
            caregiver("a", Some(40.0), Some(25.0)),
            caregiver("b", None, None),
            caregiver("c", Some(500.0), Some(10.0)),
            caregiver("d", None, Some(99.0)),
        ];
        let results = filter_by_price_ceiling(input, 99.0);
        assert!(results.iter().all(|c| effective_price(c) <= 99.0));
        assert_eq!(results.len(), 3);
    }

    #[test]
    fn order_is_preserved() {
        let results = filter_by_price_ceiling(
            vec![
                caregiver("first", Some(10.0), None),
                caregiver("second", Some(20.0), None),
                caregiver("third", Some(30.0), None),
            ],
            50.0,
        );
        let ids: Vec<&str> = results.iter().map(|c| c.id.as_str()).collect();
        assert_eq!(ids, vec!["first", "second", "third"]);
    }

    #[test]
    fn unset_prices_count_as_zero() {
        assert_eq!(effective_price(&caregiver("x", None, None)), 0.0);
        assert_eq!(effective_price(&caregiver("y", None, Some(35.0))), 35.0);
    }
}
