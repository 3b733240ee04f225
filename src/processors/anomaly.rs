use crate::models::{Anomaly, Record};

/// Per-record deviation from a reference mean, in input order.
pub fn compute_anomalies(records: &[Record], mean: f64) -> Vec<Anomaly> {
    records
        .iter()
        .map(|r| Anomaly {
            date: r.date,
            anomaly: r.value - mean,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn test_anomalies_keep_order() {
        let records: Vec<Record> = [(3, 10.0), (6, 20.0), (9, 30.0), (12, 40.0)]
            .iter()
            .map(|&(m, v)| Record::new(NaiveDate::from_ymd_opt(2020, m, 1).unwrap(), v))
            .collect();

        let anomalies = compute_anomalies(&records, 25.0);

        let values: Vec<f64> = anomalies.iter().map(|a| a.anomaly).collect();
        assert_eq!(values, vec![-15.0, -5.0, 5.0, 15.0]);
        for (anomaly, record) in anomalies.iter().zip(&records) {
            assert_eq!(anomaly.date, record.date);
        }
    }

    #[test]
    fn test_no_records() {
        assert!(compute_anomalies(&[], 1.0).is_empty());
    }
}
