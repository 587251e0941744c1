use ferrous_dig_application::ports::RandomSource;

/// Uniform picks backed by `fastrand`'s thread-local generator.
#[derive(Debug, Default, Clone, Copy)]
pub struct FastrandSource;

impl RandomSource for FastrandSource {
    fn pick(&self, len: usize) -> usize {
        fastrand::usize(..len)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn test_pick_stays_in_range() {
        let source = FastrandSource;
        for _ in 0..1000 {
            assert!(source.pick(13) < 13);
        }
    }

    #[test]
    fn test_pick_single_element() {
        assert_eq!(FastrandSource.pick(1), 0);
    }

    #[test]
    fn test_pick_covers_range() {
        let seen: HashSet<usize> = (0..2000).map(|_| FastrandSource.pick(13)).collect();
        assert_eq!(seen.len(), 13);
    }
}
