//! Deklarierte Parameterbereiche mit Clamp- bzw. Default-Politik.
//!
//! Zwei bewusst unterschiedliche Korrektur-Strategien:
//! - `parse_or_default` — ungueltige oder ausserhalb liegende Eingaben
//!   werden durch den Familien-Default ersetzt (Schmetterlingskurve).
//! - `parse_clamped` — nicht-numerische Eingaben fallen auf den Default
//!   zurueck, Bereichsverletzungen werden auf die naechste Grenze
//!   geklemmt (Rosetten-Familie).
//!
//! Die Sternpolygon-Familie nutzt keine dieser Strategien: dort wird
//! abgelehnt statt korrigiert (siehe `star_polygon`).

/// Deklarierter Ganzzahl-Bereich mit Default.
#[derive(Debug, Clone, Copy)]
pub struct IntRange {
    /// Untere Grenze (inklusiv)
    pub min: i64,
    /// Obere Grenze (inklusiv)
    pub max: i64,
    /// Default bei ungueltiger Eingabe
    pub default: i64,
}

impl IntRange {
    /// Parst eine Eingabe; ungueltig oder ausserhalb → Default.
    pub fn parse_or_default(&self, raw: &str) -> i64 {
        match raw.trim().parse::<i64>() {
            Ok(v) if v >= self.min && v <= self.max => v,
            _ => self.default,
        }
    }

    /// Parst eine Eingabe; ungueltig → Default, ausserhalb → naechste Grenze.
    pub fn parse_clamped(&self, raw: &str) -> i64 {
        match raw.trim().parse::<i64>() {
            Ok(v) => v.clamp(self.min, self.max),
            Err(_) => self.default,
        }
    }
}

/// Deklarierter Gleitkomma-Bereich mit Default.
#[derive(Debug, Clone, Copy)]
pub struct FloatRange {
    /// Untere Grenze (inklusiv)
    pub min: f64,
    /// Obere Grenze (inklusiv)
    pub max: f64,
    /// Default bei ungueltiger Eingabe
    pub default: f64,
}

impl FloatRange {
    /// Parst eine Eingabe; ungueltig oder ausserhalb → Default.
    pub fn parse_or_default(&self, raw: &str) -> f64 {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() && v >= self.min && v <= self.max => v,
            _ => self.default,
        }
    }

    /// Parst eine Eingabe; ungueltig → Default, ausserhalb → naechste Grenze.
    pub fn parse_clamped(&self, raw: &str) -> f64 {
        match raw.trim().parse::<f64>() {
            Ok(v) if v.is_finite() => v.clamp(self.min, self.max),
            _ => self.default,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    const FREQ: IntRange = IntRange {
        min: 0,
        max: i64::MAX,
        default: 4,
    };
    const PETALS: IntRange = IntRange {
        min: 1,
        max: 20,
        default: 3,
    };
    const FACE: FloatRange = FloatRange {
        min: 0.0,
        max: 2.0,
        default: 1.0,
    };

    #[test]
    fn parse_or_default_keeps_valid_value() {
        assert_eq!(FREQ.parse_or_default("7"), 7);
        assert_eq!(FREQ.parse_or_default(" 0 "), 0);
    }

    #[test]
    fn parse_or_default_replaces_negative_with_default() {
        assert_eq!(FREQ.parse_or_default("-3"), 4);
    }

    #[test]
    fn parse_or_default_replaces_garbage_with_default() {
        assert_eq!(FREQ.parse_or_default("abc"), 4);
        assert_eq!(FREQ.parse_or_default(""), 4);
        assert_eq!(FREQ.parse_or_default("2.5"), 4);
    }

    #[test]
    fn parse_clamped_clamps_to_nearest_bound() {
        assert_eq!(PETALS.parse_clamped("25"), 20);
        assert_eq!(PETALS.parse_clamped("0"), 1);
        assert_eq!(PETALS.parse_clamped("12"), 12);
    }

    #[test]
    fn parse_clamped_garbage_falls_back_to_default() {
        assert_eq!(PETALS.parse_clamped("viele"), 3);
    }

    #[test]
    fn float_range_clamps_and_defaults() {
        assert_relative_eq!(FACE.parse_clamped("3.5"), 2.0);
        assert_relative_eq!(FACE.parse_clamped("-1"), 0.0);
        assert_relative_eq!(FACE.parse_clamped("0.75"), 0.75);
        assert_relative_eq!(FACE.parse_clamped("nan"), 1.0);
        assert_relative_eq!(FACE.parse_or_default("9"), 1.0);
    }
}
