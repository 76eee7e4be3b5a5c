use super::types::PolicyDecision;

/// Size-based choice between copying and compressing
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CompressionPolicy {
    threshold: u64,
}

impl CompressionPolicy {
    pub fn new(threshold: u64) -> Self {
        Self { threshold }
    }

    pub fn decide(&self, file_size: u64) -> PolicyDecision {
        classify(file_size, self.threshold)
    }
}

/// Files strictly below `threshold` pass through; everything else is compressed.
pub fn classify(file_size: u64, threshold: u64) -> PolicyDecision {
    if file_size < threshold {
        PolicyDecision::PassThrough
    } else {
        PolicyDecision::Compress
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domains::compression::types::DEFAULT_SIZE_THRESHOLD;

    #[test]
    fn test_classify_around_threshold() {
        let threshold = DEFAULT_SIZE_THRESHOLD;
        assert_eq!(classify(threshold - 1, threshold), PolicyDecision::PassThrough);
        assert_eq!(classify(threshold, threshold), PolicyDecision::Compress);
        assert_eq!(classify(threshold + 1, threshold), PolicyDecision::Compress);
    }

    #[test]
    fn test_zero_threshold_compresses_everything() {
        let policy = CompressionPolicy::new(0);
        assert_eq!(policy.decide(0), PolicyDecision::Compress);
        assert_eq!(policy.decide(10), PolicyDecision::Compress);
    }

    #[test]
    fn test_empty_file_passes_through() {
        let policy = CompressionPolicy::new(DEFAULT_SIZE_THRESHOLD);
        assert_eq!(policy.decide(0), PolicyDecision::PassThrough);
    }
}
