use anyhow::{Context, Result};

pub fn split_csv(s: &str) -> Vec<String> {
    s.split(',')
        .map(|x| x.trim().to_string())
        .filter(|x| !x.is_empty())
        .collect()
}

/// Parse a comma-separated list of numeric seeds.
pub fn parse_seeds(s: &str) -> Result<Vec<u64>> {
    split_csv(s)
        .iter()
        .map(|token| {
            token
                .parse::<u64>()
                .with_context(|| format!("invalid seed '{token}'"))
        })
        .collect()
}

/// Seed for the `iteration`-th run of a scenario.
pub fn iteration_seed(seed: u64, iteration: usize) -> u64 {
    seed.wrapping_add(u64::try_from(iteration).unwrap_or(u64::MAX))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_csv_trims_and_filters() {
        let parts = split_csv(" alpha, ,beta,  gamma ");
        assert_eq!(parts, vec!["alpha", "beta", "gamma"]);
    }

    #[test]
    fn parse_seeds_rejects_garbage() {
        assert_eq!(parse_seeds("1, 42").unwrap(), vec![1, 42]);
        let err = parse_seeds("1,nope").unwrap_err();
        assert!(err.to_string().contains("nope"));
    }

    #[test]
    fn iteration_seed_wraps() {
        assert_eq!(iteration_seed(10, 3), 13);
        assert_eq!(iteration_seed(u64::MAX, 1), 0);
    }
}
