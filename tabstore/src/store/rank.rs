use crate::{employee::Employee, store::StoreError};

/// The `k` best-paid records, highest salary first.
///
/// Equal salaries keep their sequence order (`sort_by` is stable).
pub fn rank_by_salary_desc(records: &[Employee], k: usize) -> Result<Vec<&Employee>, StoreError> {
    if k == 0 {
        return Err(StoreError::InvalidArgument("rank size must be positive"));
    }
    let mut ranked: Vec<&Employee> = records.iter().collect();
    ranked.sort_by(|a, b| b.salary.cmp(&a.salary));
    ranked.truncate(k);
    Ok(ranked)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn emp(id: u32, first: &str, salary: u32) -> Employee {
        Employee {
            id,
            first_name: first.into(),
            last_name: "Doe".into(),
            salary,
        }
    }

    #[test]
    fn ties_keep_insertion_order() {
        let records = vec![
            emp(100_001, "A", 100_000),
            emp(100_002, "B", 120_000),
            emp(100_003, "C", 100_000),
        ];
        let names: Vec<&str> = rank_by_salary_desc(&records, 3)
            .unwrap()
            .iter()
            .map(|e| e.first_name.as_str())
            .collect();
        assert_eq!(names, ["B", "A", "C"]);
    }

    #[test]
    fn k_larger_than_count_returns_all() {
        let records = vec![emp(100_001, "A", 40_000), emp(100_002, "B", 50_000)];
        assert_eq!(rank_by_salary_desc(&records, 10).unwrap().len(), 2);
        assert_eq!(rank_by_salary_desc(&records, 1).unwrap()[0].first_name, "B");
    }

    #[test]
    fn zero_is_rejected() {
        assert!(matches!(
            rank_by_salary_desc(&[], 0),
            Err(StoreError::InvalidArgument(_))
        ));
    }
}
