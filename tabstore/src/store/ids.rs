use crate::{
    constants::MIN_ID,
    employee::{Employee, EmployeeId},
};

/// One past the highest id in `records`, never below `MIN_ID`.
///
/// Recomputed on every call: removing the record holding the highest id lets
/// that id come back, but never an id below one still present.
pub fn next_available_id(records: &[Employee]) -> EmployeeId {
    records
        .iter()
        .map(|e| e.id)
        .filter(|&id| id >= MIN_ID)
        .max()
        .map_or(MIN_ID, |max| max.saturating_add(1))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn with_ids(ids: &[EmployeeId]) -> Vec<Employee> {
        ids.iter()
            .map(|&id| Employee {
                id,
                first_name: "F".into(),
                last_name: "L".into(),
                salary: 40_000,
            })
            .collect()
    }

    #[test]
    fn empty_starts_at_min() {
        assert_eq!(next_available_id(&[]), MIN_ID);
    }

    #[test]
    fn max_plus_one_regardless_of_order() {
        let records = with_ids(&[100_005, 100_001, 100_003]);
        assert_eq!(next_available_id(&records), 100_006);
    }

    #[test]
    fn ids_below_min_are_ignored() {
        assert_eq!(next_available_id(&with_ids(&[5, 17])), MIN_ID);
    }
}
