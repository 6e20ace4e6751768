/// One time-aligned span of recognized speech. Times are in seconds.
#[derive(Clone, Debug, PartialEq)]
pub struct Segment {
    pub start: f64,
    pub end: f64,
    pub text: String,
}

impl Segment {
    pub fn duration(&self) -> f64 {
        self.end - self.start
    }
}

/// Full transcript plus its chronological segments, as returned by the
/// recognizer. Segment order is meaningful and preserved end to end.
#[derive(Clone, Debug, PartialEq)]
pub struct TranscriptionResult {
    pub text: String,
    pub segments: Vec<Segment>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_segment_fields() {
        let seg = Segment {
            start: 1.0,
            end: 2.5,
            text: "hello".to_string(),
        };
        assert_eq!(seg.start, 1.0);
        assert_eq!(seg.end, 2.5);
        assert_eq!(seg.text, "hello");
    }

    #[test]
    fn test_segment_duration() {
        let seg = Segment {
            start: 0.25,
            end: 1.05,
            text: "x".to_string(),
        };
        assert_relative_eq!(seg.duration(), 0.8, epsilon = 0.001);
    }
}
