//! One-shot visibility observers for page sections.

/// Fires once when a target's visible fraction reaches a threshold, and
/// stays visible for the rest of its life.
#[derive(Debug, Clone)]
pub struct VisibilityObserver {
    threshold: f32,
    revealed_at_ms: Option<u64>,
}

impl VisibilityObserver {
    pub fn new(threshold: f32) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            revealed_at_ms: None,
        }
    }

    /// Report the target's current visible fraction. Returns `true` only on
    /// the call that crosses the threshold. `None` means the target has no
    /// layout yet and is ignored.
    pub fn observe(&mut self, fraction: Option<f32>, now_ms: u64) -> bool {
        if self.revealed_at_ms.is_some() {
            return false;
        }
        match fraction {
            Some(f) if f >= self.threshold => {
                self.revealed_at_ms = Some(now_ms);
                true
            }
            _ => false,
        }
    }

    pub fn is_visible(&self) -> bool {
        self.revealed_at_ms.is_some()
    }

    /// Milliseconds since the reveal, `None` while hidden.
    pub fn since(&self, now_ms: u64) -> Option<u64> {
        self.revealed_at_ms.map(|at| now_ms.saturating_sub(at))
    }

    /// Whether `delay_ms` has passed since the reveal.
    pub fn elapsed(&self, now_ms: u64, delay_ms: u64) -> bool {
        self.since(now_ms).is_some_and(|since| since >= delay_ms)
    }
}

/// Fraction of a target spanning `top..top + height` that lies inside the
/// viewport `viewport_top..viewport_top + viewport_height`.
///
/// A target taller than the viewport counts as fully visible while it fills
/// the viewport, otherwise long sections could never reach the threshold.
/// Returns `None` for a target without height.
pub fn visible_fraction(
    top: u32,
    height: u32,
    viewport_top: u32,
    viewport_height: u32,
) -> Option<f32> {
    if height == 0 || viewport_height == 0 {
        return None;
    }
    let start = top.max(viewport_top);
    let end = (top + height).min(viewport_top + viewport_height);
    let overlap = end.saturating_sub(start);
    Some(overlap as f32 / height.min(viewport_height) as f32)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_at_threshold() {
        let mut observer = VisibilityObserver::new(0.3);
        assert!(!observer.observe(Some(0.29), 0));
        assert!(!observer.is_visible());
        assert!(observer.observe(Some(0.3), 10));
        assert!(!observer.observe(Some(1.0), 20));
        assert_eq!(observer.since(110), Some(100));
    }

    #[test]
    fn test_never_reverts() {
        let mut observer = VisibilityObserver::new(0.3);
        observer.observe(Some(0.8), 0);
        for fraction in [0.0, 0.1, 0.5, 0.0] {
            observer.observe(Some(fraction), 50);
            assert!(observer.is_visible());
        }
        observer.observe(None, 60);
        assert!(observer.is_visible());
    }

    #[test]
    fn test_missing_target_is_ignored() {
        let mut observer = VisibilityObserver::new(0.0);
        assert!(!observer.observe(None, 0));
        assert!(!observer.is_visible());
        assert_eq!(observer.since(100), None);
    }

    #[test]
    fn test_elapsed() {
        let mut observer = VisibilityObserver::new(0.3);
        assert!(!observer.elapsed(1000, 0));
        observer.observe(Some(0.5), 1000);
        assert!(!observer.elapsed(1499, 500));
        assert!(observer.elapsed(1500, 500));
    }

    #[test]
    fn test_visible_fraction() {
        // Fully inside.
        assert_eq!(visible_fraction(10, 10, 0, 40), Some(1.0));
        // Half below the viewport.
        assert_eq!(visible_fraction(35, 10, 0, 40), Some(0.5));
        // Above the viewport.
        assert_eq!(visible_fraction(0, 10, 20, 40), Some(0.0));
        // Taller than the viewport and filling it.
        assert_eq!(visible_fraction(0, 100, 10, 20), Some(1.0));
        // Taller than the viewport, a quarter of it showing.
        assert_eq!(visible_fraction(15, 100, 0, 20), Some(0.25));
        assert_eq!(visible_fraction(5, 0, 0, 40), None);
    }
}
