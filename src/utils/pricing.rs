use chrono::NaiveDate;

use crate::types::ServiceType;

/// Total price of a booking request.
///
/// Passeio is billed per walk, flat, regardless of the selected dates.
/// Every other service is billed per day over the inclusive range, so a
/// same-day start/end counts as one day. Missing service, dates or price
/// yield 0; the request form refuses to submit in that state.
pub fn booking_total(
    service: Option<ServiceType>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    price_per_day: Option<f64>,
    price_per_walk: Option<f64>,
) -> f64 {
    let (Some(service), Some(start), Some(end)) = (service, start, end) else {
        return 0.0;
    };

    if service.is_single_visit() {
        return price_per_walk.unwrap_or(0.0);
    }

    let days = inclusive_day_count(start, end);
    price_per_day.unwrap_or(0.0) * days as f64
}

pub fn inclusive_day_count(start: NaiveDate, end: NaiveDate) -> i64 {
    (end - start).num_days() + 1
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn same_day_counts_as_one_day() {
        let day = date(2024, 6, 1);
        let total = booking_total(
            Some(ServiceType::Hospedagem),
            Some(day),
            Some(day),
            Some(100.0),
            None,
        );
        assert_eq!(total, 100.0);
    }

    #[test]
    fn hospedagem_three_days_at_100() {
        let total = booking_total(
            Some(ServiceType::Hospedagem),
            Some(date(2024, 6, 1)),
            Some(date(2024, 6, 3)),
            Some(100.0),
            Some(30.0),
        );
        assert_eq!(total, 300.0);
    }

    #[test]
    fn passeio_ignores_dates() {
        for (start, end) in [
            (date(2024, 6, 1), date(2024, 6, 1)),
            (date(2024, 6, 1), date(2024, 6, 30)),
            (date(2025, 1, 10), date(2025, 3, 2)),
        ] {
            let total = booking_total(
                Some(ServiceType::Passeio),
                Some(start),
                Some(end),
                Some(100.0),
                Some(30.0),
            );
            assert_eq!(total, 30.0);
        }
    }

    #[test]
    fn passeio_without_walk_price_is_zero() {
        let total = booking_total(
            Some(ServiceType::Passeio),
            Some(date(2024, 6, 1)),
            Some(date(2024, 6, 2)),
            Some(100.0),
            None,
        );
        assert_eq!(total, 0.0);
    }

    #[test]
    fn missing_inputs_are_zero() {
        let day = date(2024, 6, 1);
        assert_eq!(booking_total(None, Some(day), Some(day), Some(100.0), Some(30.0)), 0.0);
        assert_eq!(
            booking_total(Some(ServiceType::Creche), None, Some(day), Some(100.0), Some(30.0)),
            0.0
        );
        assert_eq!(
            booking_total(Some(ServiceType::Creche), Some(day), None, Some(100.0), Some(30.0)),
            0.0
        );
    }

    #[test]
    fn day_rate_without_day_price_is_zero() {
        let total = booking_total(
            Some(ServiceType::Creche),
            Some(date(2024, 6, 1)),
            Some(date(2024, 6, 5)),
            None,
            Some(30.0),
        );
        assert_eq!(total, 0.0);
    }
}
